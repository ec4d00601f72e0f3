//! # Bounds-checked vectors and upper triangular matrices
//!
//! Two generic containers: a dense vector whose external indices may start at an offset, and a
//! square matrix that only stores its upper triangle, one vector per row. Both support the
//! elementwise arithmetic that doesn't leave the triangular shape.
#![warn(missing_docs)]

pub mod error;
pub mod linear_algebra;

pub use error::LinearAlgebraError;
pub use linear_algebra::{DenseVector, MAX_MATRIX_SIZE, MAX_VECTOR_SIZE, UpperTriangularMatrix};
pub use linear_algebra::traits::Element;

#[cfg(test)]
mod tests;
