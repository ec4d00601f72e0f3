//! # Upper triangular matrix
//!
//! A square matrix of which only the upper triangle, diagonal included, is stored. Row `i` is a
//! `DenseVector` of length `n - i` starting at external index `i`, so that it is indexed by column
//! number and a column below the diagonal is out of bounds for that row.
use std::fmt;
use std::fmt::Display;
use std::iter::repeat_n;
use std::ops::{Index, IndexMut};
use std::slice::Iter;

use itertools::Itertools;
use log::{debug, trace};
use num_traits::Zero;

use crate::error::LinearAlgebraError;
use crate::linear_algebra::{MAX_MATRIX_SIZE, validate_size};
use crate::linear_algebra::traits::Element;
use crate::linear_algebra::vector::Dense;

/// Uses a vector of row vectors as underlying data structure. The outer vector starts at index
/// `0`; row `i` has length `n - i` and starts at index `i`.
#[derive(Debug, Eq, PartialEq)]
pub struct UpperTriangular<F> {
    rows: Dense<Dense<F>>,
}

impl<F: Zero + Clone> UpperTriangular<F> {
    /// Create a zero matrix of dimension `size` x `size`.
    ///
    /// # Arguments
    ///
    /// * `size`: Number of rows and columns, at least one and at most `MAX_MATRIX_SIZE`.
    ///
    /// # Return value
    ///
    /// A `LinearAlgebraError::Size` if the dimension is not allowed.
    pub fn new(size: usize) -> Result<Self, LinearAlgebraError> {
        validate_size(size, MAX_MATRIX_SIZE)?;
        trace!("allocating upper triangular matrix of size {}", size);

        let rows = (0..size)
            .map(|i| Dense::with_start_index(size - i, i))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rows: Dense::from_data(rows, 0)?, })
    }
}

impl<F> UpperTriangular<F> {
    /// Create a matrix from the values of its upper triangle.
    ///
    /// # Arguments
    ///
    /// * `rows`: Row `i` contains the values in columns `i..n`, where `n` is the number of rows.
    ///
    /// # Return value
    ///
    /// A `LinearAlgebraError::Size` if the number of rows is not allowed, or a
    /// `LinearAlgebraError::SizeMismatch` if a row doesn't have the expected length.
    pub fn from_rows(rows: Vec<Vec<F>>) -> Result<Self, LinearAlgebraError> {
        let size = rows.len();
        validate_size(size, MAX_MATRIX_SIZE)?;

        let rows = rows.into_iter()
            .enumerate()
            .map(|(i, row)| {
                if row.len() == size - i {
                    Dense::from_data(row, i)
                } else {
                    Err(LinearAlgebraError::SizeMismatch { left: size - i, right: row.len() })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rows: Dense::from_data(rows, 0)?, })
    }

    /// Number of rows, which is equal to the number of columns.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether this matrix is empty. Never the case for a matrix that was created successfully.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get row `i`, containing the values in columns `i..n`.
    ///
    /// Rows can't be borrowed mutably as a whole, such that their shape stays fixed. Use
    /// `get_mut` or `set` to change values.
    pub fn row(&self, i: usize) -> Result<&Dense<F>, LinearAlgebraError> {
        self.rows.get(i)
    }

    /// Iterate over the rows, first row first.
    pub fn rows(&self) -> Iter<'_, Dense<F>> {
        self.rows.iter()
    }

    /// Get the value at coordinate (`i`, `j`).
    ///
    /// # Return value
    ///
    /// A `LinearAlgebraError::Index` unless `i <= j < n`. Values below the diagonal are not
    /// stored and not mirrored from above the diagonal.
    pub fn get(&self, i: usize, j: usize) -> Result<&F, LinearAlgebraError> {
        self.rows.get(i)?.get(j)
    }

    /// Get a mutable reference to the value at coordinate (`i`, `j`).
    ///
    /// Fails under the same conditions as `get`.
    pub fn get_mut(&mut self, i: usize, j: usize) -> Result<&mut F, LinearAlgebraError> {
        self.rows.get_mut(i)?.get_mut(j)
    }

    /// Set the value at coordinate (`i`, `j`) to `value`.
    pub fn set(&mut self, i: usize, j: usize, value: F) -> Result<(), LinearAlgebraError> {
        self.rows.get_mut(i)?.set(j, value)
    }

    fn check_len(&self, other: &Self) -> Result<(), LinearAlgebraError> {
        if self.len() == other.len() {
            Ok(())
        } else {
            Err(LinearAlgebraError::SizeMismatch { left: self.len(), right: other.len() })
        }
    }

    /// Combine equally shaped rows into a new matrix.
    fn zip_rows_with(
        &self,
        other: &Self,
        f: impl Fn(&Dense<F>, &Dense<F>) -> Result<Dense<F>, LinearAlgebraError>,
    ) -> Result<Self, LinearAlgebraError> {
        self.check_len(other)?;

        let rows = self.rows.iter().zip_eq(other.rows.iter())
            .map(|(row, other_row)| f(row, other_row))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rows: Dense::from_data(rows, 0)?, })
    }
}

impl<F: Element> UpperTriangular<F> {
    /// Add another matrix of the same dimension.
    ///
    /// # Return value
    ///
    /// A `LinearAlgebraError::SizeMismatch` if the dimensions differ.
    pub fn add_matrix(&self, other: &Self) -> Result<Self, LinearAlgebraError> {
        self.zip_rows_with(other, |row, other_row| row.add_vector(other_row))
    }

    /// Subtract another matrix of the same dimension.
    ///
    /// # Return value
    ///
    /// A `LinearAlgebraError::SizeMismatch` if the dimensions differ.
    pub fn sub_matrix(&self, other: &Self) -> Result<Self, LinearAlgebraError> {
        self.zip_rows_with(other, |row, other_row| row.sub_vector(other_row))
    }
}

impl<F: Clone> Clone for UpperTriangular<F> {
    fn clone(&self) -> Self {
        Self { rows: self.rows.clone(), }
    }

    /// Assign the dimension and values of `source` to this matrix, reusing storage where
    /// possible.
    fn clone_from(&mut self, source: &Self) {
        if self.len() != source.len() {
            debug!("matrix resized from {} to {} by assignment", self.len(), source.len());
        }

        self.rows.clone_from(&source.rows);
    }
}

impl<F> Index<usize> for UpperTriangular<F> {
    type Output = Dense<F>;

    fn index(&self, i: usize) -> &Self::Output {
        &self.rows[i]
    }
}

impl<F> Index<(usize, usize)> for UpperTriangular<F> {
    type Output = F;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.rows[i][j]
    }
}

impl<F> IndexMut<(usize, usize)> for UpperTriangular<F> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        &mut self.rows[i][j]
    }
}

impl<F: Zero + Clone + Display> Display for UpperTriangular<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            writeln!(f, "{}", repeat_n(F::zero(), i).chain(row.iter().cloned()).format("\t"))?;
        }

        Ok(())
    }
}
