//! # Error reporting for container operations
//!
//! All failures are contract violations by the caller: a size that can't be allocated, an index
//! that doesn't refer to a stored element or two operands that don't have the same size.
use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::ops::Range;

/// A `LinearAlgebraError` is returned when a precondition of a vector or matrix operation is
/// violated.
///
/// It is reported before anything is mutated.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum LinearAlgebraError {
    /// The requested size is zero or larger than the maximum for the container.
    Size {
        /// Size that was asked for.
        requested: usize,
        /// Largest size allowed for this kind of container.
        maximum: usize,
    },
    /// An external index that doesn't map onto a stored element.
    Index {
        /// The index that was used.
        index: usize,
        /// Range of external indices that are occupied.
        valid: Range<usize>,
    },
    /// The operands of a binary operation don't have the same size.
    SizeMismatch {
        /// Size of the left operand, or the expected size.
        left: usize,
        /// Size of the right operand, or the size that was provided.
        right: usize,
    },
}

impl Display for LinearAlgebraError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinearAlgebraError::Size { requested, maximum } => write!(
                f, "SizeError: size {} is not in the range 1..={}", requested, maximum,
            ),
            LinearAlgebraError::Index { index, valid } => write!(
                f, "IndexError: index {} is not in the range {}..{}", index, valid.start, valid.end,
            ),
            LinearAlgebraError::SizeMismatch { left, right } => write!(
                f, "SizeMismatch: sizes {} and {} are not equal", left, right,
            ),
        }
    }
}

impl Error for LinearAlgebraError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

#[cfg(test)]
mod test {
    use crate::error::LinearAlgebraError;

    #[test]
    fn display() {
        let error = LinearAlgebraError::Size { requested: 0, maximum: 10 };
        assert_eq!(error.to_string(), "SizeError: size 0 is not in the range 1..=10");

        let error = LinearAlgebraError::Index { index: 1, valid: 2..6 };
        assert_eq!(error.to_string(), "IndexError: index 1 is not in the range 2..6");

        let error = LinearAlgebraError::SizeMismatch { left: 4, right: 5 };
        assert_eq!(error.to_string(), "SizeMismatch: sizes 4 and 5 are not equal");
    }
}
