//! Tests for the value, vector and matrix layers through the public API

mod test_helpers;

use exp_algebra::algebra::{matrix_ops, vector_ops};
use exp_algebra::{
    ExprError, Matrix, Rank, Real, Space, Value, Values, Vector, Vectors, assert_approx_eq,
};
use test_helpers::matrix_from;

#[test]
fn test_value_display() {
    assert_eq!(Value::from(3).to_string(), "3");
    assert_eq!(Value::new(1.0, 2.0).to_string(), "1+2i");
    assert_eq!(Value::new(1.0, -2.0).to_string(), "1-2i");
    assert_eq!(Value::new(0.0, -0.5).to_string(), "-0.5i");
}

#[test]
fn test_values_track_highest_rank() {
    let mut values = Values::new(3);
    assert_eq!(values.rank(), Rank::Real);
    values.set(1, Value::I).unwrap();
    values.set(1, Value::ONE).unwrap();
    assert_eq!(values.rank(), Rank::Complex);
    assert_eq!(values.index_of(&Value::ONE), Some(1));
}

#[test]
fn test_vector_copies_are_independent() {
    let original = Vector::row([1, 2, 3]);
    let mut copy = original.clone();
    copy.set(0, Value::from(9)).unwrap();
    copy.trans();
    assert_eq!(original[0], Value::from(1));
    assert_eq!(original.space(), Space::Row);
}

#[test]
fn test_vectors_reorient_on_insert() {
    let mut vects = Vectors::new(Space::Column, 1, 2);
    vects.append(Vector::row([1, 2]));
    assert_eq!(vects[1].space(), Space::Column);
    assert_eq!(vects.len(), 2);
}

#[test]
fn test_vector_algebra() {
    let row = Vector::row([1, 2, 3]);
    let column = Vector::column([1, 1, 1]);

    assert_eq!(vector_ops::inner(&row, &column).unwrap(), Value::from(6));
    let outer = vector_ops::outer(&column, &row).unwrap();
    assert_eq!(outer.dim(), (3, 3));
    assert_eq!(outer.get(2, 2), Some(&Value::from(3)));

    let sum = vector_ops::add(&row, &row).unwrap();
    assert_eq!(sum, Vector::row([2, 4, 6]));
    assert_eq!(vector_ops::scalar_div(&sum, Value::from(2)), row);

    assert!(matches!(
        vector_ops::sub(&row, &column),
        Err(ExprError::DimensionMismatch { operation: "vector subtraction", .. })
    ));
}

#[test]
fn test_determinant() {
    let cases: [(&[&[Real]], Real); 4] = [
        (&[&[1.0, 2.0], &[3.0, 2.0]], -4.0),
        (&[&[4.0, 2.0], &[3.0, 2.0]], 2.0),
        (&[&[1.0, 2.0, 1.0], &[3.0, 2.0, 3.0], &[2.0, 3.0, 4.0]], -8.0),
        (&[&[0.0, 0.0], &[0.0, 1.0]], 0.0),
    ];
    for (rows, expected) in cases {
        let det = matrix_from(rows).det().unwrap();
        assert_approx_eq!(det.real(), expected);
    }

    let det = Matrix::identity(4).det().unwrap();
    assert_eq!(det, Value::ONE);

    assert!(matches!(
        matrix_from(&[&[1.0, 2.0, 1.0], &[3.0, 2.0, 3.0]]).det(),
        Err(ExprError::NotSquare { rows: 2, cols: 3, .. })
    ));
}

#[test]
fn test_inverse_times_matrix_is_identity() {
    let a = matrix_from(&[&[0.0, 2.0, 4.0], &[4.0, 1.0, 5.0], &[3.0, 3.0, 0.0]]);
    let inverse = a.inv().unwrap();
    let product = matrix_ops::mult(&a, &inverse).unwrap();
    for i in 0..3 {
        for j in 0..3 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_approx_eq!(product.get(i, j).unwrap().real(), expected, 1e-9 as Real);
        }
    }
    assert_approx_eq!(inverse.get(0, 0).unwrap().real(), -0.227272727, 1e-6 as Real);
    assert_approx_eq!(inverse.get(2, 2).unwrap().real(), -0.121212121, 1e-6 as Real);
}

#[test]
fn test_singular_matrices() {
    assert_eq!(Matrix::new(3, 3).inv(), Err(ExprError::SingularMatrix));
    let rank_deficient = matrix_from(&[&[1.0, 2.0], &[2.0, 4.0]]);
    assert_eq!(rank_deficient.inv(), Err(ExprError::SingularMatrix));
}

#[test]
fn test_complex_matrix() {
    let a = Matrix::from_rows(vec![
        Vector::row([Value::new(1.0, -1.0), Value::from(2)]),
        Vector::row([Value::from(1), Value::new(1.0, 1.0)]),
    ])
    .unwrap();
    assert_eq!(a.rank(), Rank::Complex);
    assert_eq!(a.trace().unwrap(), Value::from(2));

    let hermitian = a.conj_transposed();
    assert_eq!(hermitian.get(0, 0), Some(&Value::new(1.0, 1.0)));
    assert_eq!(hermitian.get(0, 1), Some(&Value::from(1)));
    assert_eq!(a.get(0, 0), Some(&Value::new(1.0, -1.0)));

    // det = (1-i)(1+i) - 2 = 0
    assert!(a.det().unwrap().is_zero());
}

#[test]
fn test_augment_and_trim_round_trip() {
    let a = matrix_from(&[&[1.0, 2.0], &[3.0, 4.0]]);
    let augmented = a.augment(&Matrix::identity(2)).unwrap();
    assert_eq!(augmented.dim(), (2, 4));
    assert_eq!(augmented.trim(0, 0, 0, 2).unwrap(), a);
    assert_eq!(augmented.trim(0, 0, 2, 0).unwrap(), Matrix::identity(2));

    let with_column = a.augment_column(&Vector::column([5, 6])).unwrap();
    assert_eq!(with_column.column(2), Some(Vector::column([5, 6])));
}

#[test]
fn test_matrix_vector_products() {
    let a = matrix_from(&[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]]);
    let product = matrix_ops::matrix_vector(&a, &Vector::column([1, 1])).unwrap();
    assert_eq!(product, Vector::column([3, 7, 11]));

    let product = matrix_ops::vector_matrix(&Vector::row([1, 0, 1]), &a).unwrap();
    assert_eq!(product, Vector::row([6, 8]));

    assert!(matrix_ops::matrix_vector(&a, &Vector::column([1, 1, 1])).is_err());
}

#[test]
fn test_matrix_power() {
    let rotation = matrix_from(&[&[0.0, -1.0], &[1.0, 0.0]]);
    assert_eq!(matrix_ops::pow(&rotation, 4).unwrap(), Matrix::identity(2));
    assert_eq!(
        matrix_ops::pow(&rotation, -1).unwrap(),
        matrix_ops::pow(&rotation, 3).unwrap()
    );
}

#[test]
fn test_unit_vector() {
    let unit = Vector::column([0, 3, 4]).unit().unwrap();
    assert_approx_eq!(unit.norm().real(), 1.0);
    assert_eq!(unit.space(), Space::Column);
    assert_eq!(Vector::new(Space::Row, 2).unit(), Err(ExprError::ZeroNorm));
}
