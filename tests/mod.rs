//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.
use std::error::Error;

use relp_num::{RB, RationalBig};

use trimat::{DenseVector, LinearAlgebraError, MAX_MATRIX_SIZE, MAX_VECTOR_SIZE, UpperTriangularMatrix};

#[test]
fn errors_propagate() -> Result<(), Box<dyn Error>> {
    let mut v = DenseVector::<f64>::with_start_index(3, 1)?;
    v.set(3, 2.5)?;
    assert_eq!(*v.get(3)?, 2.5);

    let error = v.get(0).unwrap_err();
    assert_eq!(error, LinearAlgebraError::Index { index: 0, valid: 1..4 });
    let boxed: Box<dyn Error> = Box::new(error);
    assert!(boxed.source().is_none());
    assert_eq!(boxed.to_string(), "IndexError: index 0 is not in the range 1..4");

    Ok(())
}

#[test]
fn limits() {
    assert!(MAX_MATRIX_SIZE <= MAX_VECTOR_SIZE);
    assert!(matches!(
        DenseVector::<i64>::new(MAX_VECTOR_SIZE + 1),
        Err(LinearAlgebraError::Size { .. }),
    ));
    assert!(matches!(
        UpperTriangularMatrix::<i64>::new(MAX_MATRIX_SIZE + 1),
        Err(LinearAlgebraError::Size { .. }),
    ));
}

#[test]
fn triangular_arithmetic() -> Result<(), LinearAlgebraError> {
    let mut m = UpperTriangularMatrix::<RationalBig>::new(3)?;
    m.set(0, 0, RB!(1))?;
    m.set(0, 1, RB!(1, 2))?;
    m.set(0, 2, RB!(1, 3))?;
    m.set(1, 1, RB!(1, 3))?;
    m.set(1, 2, RB!(1, 4))?;
    m.set(2, 2, RB!(1, 5))?;

    let doubled = m.add_matrix(&m)?;
    assert_eq!(doubled.get(1, 2)?, &RB!(1, 2));
    assert_eq!(doubled.sub_matrix(&m)?, m);

    let row = m.row(0)?;
    assert_eq!(row.inner_product(row)?, RB!(1) + RB!(1, 4) + RB!(1, 9));

    Ok(())
}
