//! # Dense vector
//!
//! Wrapping a `Vec` such that it has a fixed, validated size and can be indexed from an offset.
//!
//! A vector with start index `s` maps external index `s` to the first stored value. The rows of an
//! upper triangular matrix use this to be indexed by their column numbers.
use std::fmt;
use std::fmt::Display;
use std::ops::{Add, Index, IndexMut, Mul, Sub};
use std::slice::Iter;

use itertools::Itertools;
use log::{debug, trace};
use num_traits::Zero;

use crate::error::LinearAlgebraError;
use crate::linear_algebra::validate_shape;
use crate::linear_algebra::traits::Element;

/// Uses a `Vec` as underlying data structure. Length is fixed at creation and changes only
/// through assignment (`Clone::clone_from`).
#[derive(Debug)]
pub struct Dense<F> {
    data: Vec<F>,
    start_index: usize,
}

impl<F: Zero + Clone> Dense<F> {
    /// Create a zero vector with external indices starting at `0`.
    ///
    /// # Arguments
    ///
    /// * `size`: Number of elements, at least one and at most `MAX_VECTOR_SIZE`.
    pub fn new(size: usize) -> Result<Self, LinearAlgebraError> {
        Self::with_start_index(size, 0)
    }

    /// Create a zero vector whose first element has external index `start_index`.
    ///
    /// # Arguments
    ///
    /// * `size`: Number of elements, at least one and at most `MAX_VECTOR_SIZE`.
    /// * `start_index`: External index of the first element.
    ///
    /// # Return value
    ///
    /// A `LinearAlgebraError::Size` if the size is not allowed, or if the last element would
    /// have an external index past `usize::MAX`.
    pub fn with_start_index(size: usize, start_index: usize) -> Result<Self, LinearAlgebraError> {
        validate_shape(size, start_index)?;
        trace!("allocating vector of size {} starting at {}", size, start_index);

        Ok(Self { data: vec![F::zero(); size], start_index, })
    }
}

impl<F> Dense<F> {
    /// Create a `DenseVector` from the provided data.
    ///
    /// # Arguments
    ///
    /// * `data`: Values in positional order. Will not be changed and directly used for creation.
    /// * `start_index`: External index of the first value.
    pub fn from_data(data: Vec<F>, start_index: usize) -> Result<Self, LinearAlgebraError> {
        validate_shape(data.len(), start_index)?;

        Ok(Self { data, start_index, })
    }

    /// Create a vector by computing each value from its positional index.
    ///
    /// Unlike `new`, the element type doesn't need a zero.
    ///
    /// # Arguments
    ///
    /// * `size`: Number of elements, at least one and at most `MAX_VECTOR_SIZE`.
    /// * `start_index`: External index of the first element.
    /// * `f`: Called once for every positional index `0..size`, in order.
    pub fn from_fn(
        size: usize,
        start_index: usize,
        f: impl FnMut(usize) -> F,
    ) -> Result<Self, LinearAlgebraError> {
        validate_shape(size, start_index)?;
        trace!("building vector of size {} starting at {}", size, start_index);

        Ok(Self { data: (0..size).map(f).collect(), start_index, })
    }

    /// Number of elements stored.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this vector is empty. Never the case for a vector that was created successfully.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// External index of the first element.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Range of external indices that refer to an element.
    pub fn external_indices(&self) -> std::ops::Range<usize> {
        self.start_index..self.start_index + self.len()
    }

    /// Translate an external index into a position in the underlying data.
    fn position(&self, index: usize) -> Result<usize, LinearAlgebraError> {
        index.checked_sub(self.start_index)
            .filter(|&position| position < self.len())
            .ok_or_else(|| LinearAlgebraError::Index { index, valid: self.external_indices() })
    }

    /// Retrieve the value at an external index.
    ///
    /// # Return value
    ///
    /// A `LinearAlgebraError::Index` if `index` is smaller than the start index or not smaller
    /// than the start index plus the length.
    pub fn get(&self, index: usize) -> Result<&F, LinearAlgebraError> {
        let position = self.position(index)?;

        Ok(&self.data[position])
    }

    /// Retrieve a mutable reference to the value at an external index.
    ///
    /// Fails under the same conditions as `get`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut F, LinearAlgebraError> {
        let position = self.position(index)?;

        Ok(&mut self.data[position])
    }

    /// Set the value at an external index.
    ///
    /// Nothing is changed if the index is out of bounds.
    pub fn set(&mut self, index: usize, value: F) -> Result<(), LinearAlgebraError> {
        *self.get_mut(index)? = value;

        Ok(())
    }

    /// Iterate over the values in positional order.
    pub fn iter(&self) -> Iter<'_, F> {
        self.data.iter()
    }

    /// The values in positional order.
    pub fn as_slice(&self) -> &[F] {
        &self.data
    }

    /// Error unless both vectors have the same length.
    fn check_len(&self, other: &Self) -> Result<(), LinearAlgebraError> {
        if self.len() == other.len() {
            Ok(())
        } else {
            Err(LinearAlgebraError::SizeMismatch { left: self.len(), right: other.len() })
        }
    }

    /// Combine the values at equal positions into a new vector with this vector's start index.
    fn zip_with(
        &self,
        other: &Self,
        f: impl Fn(&F, &F) -> F,
    ) -> Result<Self, LinearAlgebraError> {
        self.check_len(other)?;

        Ok(Self {
            data: self.data.iter().zip_eq(&other.data).map(|(a, b)| f(a, b)).collect(),
            start_index: self.start_index,
        })
    }

    /// Apply a function to every value, keeping the shape.
    fn map(&self, f: impl Fn(&F) -> F) -> Self {
        Self { data: self.data.iter().map(f).collect(), start_index: self.start_index, }
    }

    /// Apply a function to every value in place, keeping the shape.
    fn into_map(mut self, f: impl Fn(F) -> F) -> Self {
        self.data = self.data.into_iter().map(f).collect();
        self
    }
}

impl<F: Element> Dense<F> {
    /// Add another vector elementwise.
    ///
    /// Values are paired by position, not by external index, so the start indices of the operands
    /// don't need to agree. The result has the start index of `self`.
    ///
    /// # Return value
    ///
    /// A `LinearAlgebraError::SizeMismatch` if the lengths differ.
    pub fn add_vector(&self, other: &Self) -> Result<Self, LinearAlgebraError> {
        self.zip_with(other, |a, b| a.clone() + b.clone())
    }

    /// Subtract another vector elementwise.
    ///
    /// Pairing and failure as in `add_vector`.
    pub fn sub_vector(&self, other: &Self) -> Result<Self, LinearAlgebraError> {
        self.zip_with(other, |a, b| a.clone() - b.clone())
    }

    /// Compute the inner product with another vector of the same length.
    ///
    /// # Return value
    ///
    /// The sum of the products of values at equal positions, or a
    /// `LinearAlgebraError::SizeMismatch` if the lengths differ.
    pub fn inner_product(&self, other: &Self) -> Result<F, LinearAlgebraError> {
        self.check_len(other)?;

        Ok(self.data.iter().zip_eq(&other.data)
            .fold(F::zero(), |total, (a, b)| total + a.clone() * b.clone()))
    }
}

impl<F: Clone> Clone for Dense<F> {
    fn clone(&self) -> Self {
        Self { data: self.data.clone(), start_index: self.start_index, }
    }

    /// Assign the length, start index and values of `source` to this vector.
    ///
    /// Existing storage is reused where possible.
    fn clone_from(&mut self, source: &Self) {
        if self.len() != source.len() {
            debug!("vector resized from {} to {} by assignment", self.len(), source.len());
        }

        self.data.clone_from(&source.data);
        self.start_index = source.start_index;
    }
}

/// Vectors are equal when they have the same values; the start index is not compared.
impl<F: PartialEq> PartialEq for Dense<F> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<F: Eq> Eq for Dense<F> {}

impl<F> Index<usize> for Dense<F> {
    type Output = F;

    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<F> IndexMut<usize> for Dense<F> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

macro_rules! scalar_operation {
    ($trait:ident, $method:ident, $operator:tt) => {
        impl<F: Element> $trait<F> for &Dense<F> {
            type Output = Dense<F>;

            fn $method(self, rhs: F) -> Self::Output {
                self.map(|value| value.clone() $operator rhs.clone())
            }
        }

        impl<F: Element> $trait<F> for Dense<F> {
            type Output = Dense<F>;

            fn $method(self, rhs: F) -> Self::Output {
                self.into_map(|value| value $operator rhs.clone())
            }
        }
    }
}

scalar_operation!(Add, add, +);
scalar_operation!(Sub, sub, -);
scalar_operation!(Mul, mul, *);

impl<F: Display> Display for Dense<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.data.iter().format(" "))
    }
}
