//! # Linear algebra primitives
//!
//! A dense vector and an upper triangular matrix built out of those vectors.
use crate::error::LinearAlgebraError;

pub use matrix::UpperTriangular as UpperTriangularMatrix;
pub use vector::Dense as DenseVector;

pub mod matrix;
pub mod traits;
pub mod vector;

/// Largest number of elements a `DenseVector` can be created with.
pub const MAX_VECTOR_SIZE: usize = 1 << 20;
/// Largest dimension an `UpperTriangularMatrix` can be created with.
///
/// Every row of such a matrix is a vector, so this may not exceed `MAX_VECTOR_SIZE`.
pub const MAX_MATRIX_SIZE: usize = 1 << 10;

const _: () = assert!(MAX_MATRIX_SIZE <= MAX_VECTOR_SIZE);

/// Check that a container of `size` elements can be created.
///
/// # Arguments
///
/// * `size`: Requested number of elements (or rows).
/// * `maximum`: Largest size allowed for the container.
///
/// # Return value
///
/// A `LinearAlgebraError::Size` if `size` is zero or too large.
pub(crate) fn validate_size(size: usize, maximum: usize) -> Result<(), LinearAlgebraError> {
    if size == 0 || size > maximum {
        Err(LinearAlgebraError::Size { requested: size, maximum })
    } else {
        Ok(())
    }
}

/// Check that a vector of `size` elements starting at `start_index` can be created.
///
/// Besides the size limit, every element must have an external index, so `start_index + size`
/// may not overflow.
///
/// # Return value
///
/// A `LinearAlgebraError::Size` if `size` is zero, larger than `MAX_VECTOR_SIZE` or doesn't fit
/// after `start_index`.
pub(crate) fn validate_shape(size: usize, start_index: usize) -> Result<(), LinearAlgebraError> {
    validate_size(size, MAX_VECTOR_SIZE)?;
    validate_size(size, usize::MAX - start_index)
}
