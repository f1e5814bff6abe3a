//! Vector arithmetic: elementwise sums, scaling and products.

use crate::error::{ExprError, Result};
use crate::functions;
use crate::matrix::Matrix;
use crate::value::Value;
use crate::vector::{Space, Vector};

fn require_conformant(operation: &'static str, a: &Vector, b: &Vector) -> Result<()> {
    if a.space() != b.space() || a.len() != b.len() {
        return Err(ExprError::DimensionMismatch {
            operation,
            left: a.shape(),
            right: b.shape(),
        });
    }
    Ok(())
}

fn zip_with<F>(a: &Vector, b: &Vector, f: F) -> Vector
where
    F: Fn(Value, Value) -> Value,
{
    Vector::make(a.space(), a.iter().zip(b.iter()).map(|(x, y)| f(*x, *y)))
}

/// `a + b`. Both vectors must share a space and a length.
pub fn add(a: &Vector, b: &Vector) -> Result<Vector> {
    require_conformant("vector addition", a, b)?;
    Ok(zip_with(a, b, functions::add))
}

/// `a - b`. Both vectors must share a space and a length.
pub fn sub(a: &Vector, b: &Vector) -> Result<Vector> {
    require_conformant("vector subtraction", a, b)?;
    Ok(zip_with(a, b, functions::sub))
}

pub fn scalar_mult(v: &Vector, scalar: Value) -> Vector {
    Vector::make(v.space(), v.iter().map(|x| functions::mul(*x, scalar)))
}

pub fn scalar_div(v: &Vector, scalar: Value) -> Vector {
    Vector::make(v.space(), v.iter().map(|x| functions::div(*x, scalar)))
}

fn dot(a: &Vector, b: &Vector) -> Value {
    a.iter()
        .zip(b.iter())
        .fold(Value::ZERO, |acc, (x, y)| functions::add(acc, functions::mul(*x, *y)))
}

/// Inner product of a row vector with a column vector of the same length.
pub fn inner(row: &Vector, column: &Vector) -> Result<Value> {
    if row.space() != Space::Row || column.space() != Space::Column || row.len() != column.len()
    {
        return Err(ExprError::DimensionMismatch {
            operation: "inner product",
            left: row.shape(),
            right: column.shape(),
        });
    }
    Ok(dot(row, column))
}

/// Outer product of a column vector (length m) with a row vector (length n),
/// giving an `m x n` matrix.
pub fn outer(column: &Vector, row: &Vector) -> Result<Matrix> {
    if column.space() != Space::Column || row.space() != Space::Row {
        return Err(ExprError::DimensionMismatch {
            operation: "outer product",
            left: column.shape(),
            right: row.shape(),
        });
    }
    Ok(Matrix::from_fn(column.len(), row.len(), |i, j| {
        functions::mul(column[i], row[j])
    }))
}

/// Angle between two vectors of equal length, `acos(a.b / (|a| |b|))`.
///
/// Orientation is ignored.
pub fn angle(a: &Vector, b: &Vector) -> Result<Value> {
    if a.len() != b.len() {
        return Err(ExprError::DimensionMismatch {
            operation: "vector angle",
            left: a.shape(),
            right: b.shape(),
        });
    }
    let norms = functions::mul(a.norm(), b.norm());
    if norms.is_zero() {
        return Err(ExprError::ZeroNorm);
    }
    Ok(functions::acos(functions::div(dot(a, b), norms)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;
    use crate::constants::{PI, TEST_PRECISION};
    use crate::test_utils::matrix;

    #[test]
    fn test_add_and_sub() {
        let a = Vector::row([1, 2, 3]);
        let b = Vector::row([2, 4, 6]);
        assert_eq!(add(&a, &b).unwrap(), Vector::row([3, 6, 9]));
        assert_eq!(sub(&b, &a).unwrap(), a);

        let column = Vector::column([1, 2, 3]);
        assert!(matches!(
            add(&a, &column),
            Err(ExprError::DimensionMismatch { left: (1, 3), right: (3, 1), .. })
        ));
        assert!(sub(&a, &Vector::row([1, 2])).is_err());
    }

    #[test]
    fn test_add_does_not_mutate_inputs() {
        let a = Vector::row([1, 1]);
        let b = Vector::row([2, 2]);
        let _ = add(&a, &b).unwrap();
        assert_eq!(a, Vector::row([1, 1]));
        assert_eq!(b, Vector::row([2, 2]));
    }

    #[test]
    fn test_scalar_mult_and_div() {
        let v = Vector::column([2, 4, 6]);
        assert_eq!(scalar_mult(&v, Value::from(2)), Vector::column([4, 8, 12]));
        assert_eq!(scalar_div(&v, Value::from(2)), Vector::column([1, 2, 3]));
        let complex = scalar_mult(&v, Value::I);
        assert_eq!(complex[0], Value::new(0.0, 2.0));
    }

    #[test]
    fn test_inner() {
        let row = Vector::row([1, 2, 3]);
        let column = Vector::column([4, 5, 6]);
        assert_eq!(inner(&row, &column).unwrap(), Value::from(32));
        assert!(inner(&column, &row).is_err());
        assert!(inner(&row, &row).is_err());
        assert!(inner(&row, &Vector::column([1, 2])).is_err());
    }

    #[test]
    fn test_outer() {
        let column = Vector::column([1, 2]);
        let row = Vector::row([3, 4, 5]);
        let product = outer(&column, &row).unwrap();
        assert_eq!(product, matrix(&[&[3, 4, 5], &[6, 8, 10]]));
        assert!(outer(&row, &column).is_err());

        let empty = outer(&Vector::new(Space::Column, 0), &row).unwrap();
        assert_eq!(empty.dim(), (0, 3));
    }

    #[test]
    fn test_angle() {
        let a = Vector::row([1, 0]);
        let b = Vector::column([0, 1]);
        assert_approx_eq!(angle(&a, &b).unwrap().real(), PI / 2.0, TEST_PRECISION);
        assert_approx_eq!(angle(&a, &a).unwrap().real(), 0.0, TEST_PRECISION);
        assert_eq!(angle(&a, &Vector::row([0, 0])), Err(ExprError::ZeroNorm));
    }
}
