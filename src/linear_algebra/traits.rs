//! # Traits for elements of the containers
//!
//! The containers are generic over their element type. Construction from a size needs a zero to
//! fill the storage with; arithmetic needs the ring operations by value.
use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Sub};

use num_traits::Zero;

/// Element of a `DenseVector` or `UpperTriangularMatrix` that arithmetic can be done with.
///
/// Automatically implemented for all types satisfying the trait's bounds.
pub trait Element:
    Zero + // Fill value, start of an inner product
    Add<Self, Output=Self> +
    Sub<Self, Output=Self> +
    Mul<Self, Output=Self> +
    PartialEq +

    // Practicalities
    Clone +
    Display +
    Debug +
{
}
impl<T> Element for T
where
    T: Zero + Add<T, Output=T> + Sub<T, Output=T> + Mul<T, Output=T> + PartialEq + Clone + Display + Debug,
{
}
