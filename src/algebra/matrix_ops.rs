//! Matrix arithmetic and products with vectors.

use crate::error::{ExprError, Result};
use crate::functions;
use crate::matrix::Matrix;
use crate::value::Value;
use crate::vector::{Space, Vector};

fn require_same_dim(operation: &'static str, a: &Matrix, b: &Matrix) -> Result<()> {
    if a.dim() != b.dim() {
        return Err(ExprError::DimensionMismatch {
            operation,
            left: a.dim(),
            right: b.dim(),
        });
    }
    Ok(())
}

pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    require_same_dim("matrix addition", a, b)?;
    Ok(Matrix::from_fn(a.rows(), a.cols(), |i, j| {
        functions::add(a.at(i, j), b.at(i, j))
    }))
}

pub fn sub(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    require_same_dim("matrix subtraction", a, b)?;
    Ok(Matrix::from_fn(a.rows(), a.cols(), |i, j| {
        functions::sub(a.at(i, j), b.at(i, j))
    }))
}

pub fn scalar_mult(m: &Matrix, scalar: Value) -> Matrix {
    Matrix::from_fn(m.rows(), m.cols(), |i, j| functions::mul(m.at(i, j), scalar))
}

pub fn scalar_div(m: &Matrix, scalar: Value) -> Matrix {
    Matrix::from_fn(m.rows(), m.cols(), |i, j| functions::div(m.at(i, j), scalar))
}

/// `m * v` for a column vector with one element per matrix column.
/// The result is a column vector with one element per matrix row.
pub fn matrix_vector(m: &Matrix, v: &Vector) -> Result<Vector> {
    if v.space() != Space::Column || v.len() != m.cols() {
        return Err(ExprError::DimensionMismatch {
            operation: "matrix-vector product",
            left: m.dim(),
            right: v.shape(),
        });
    }
    Ok(Vector::make(
        Space::Column,
        (0..m.rows()).map(|i| {
            (0..m.cols()).fold(Value::ZERO, |acc, j| {
                functions::add(acc, functions::mul(m.at(i, j), v[j]))
            })
        }),
    ))
}

/// `v * m` for a row vector with one element per matrix row.
/// The result is a row vector with one element per matrix column.
pub fn vector_matrix(v: &Vector, m: &Matrix) -> Result<Vector> {
    if v.space() != Space::Row || v.len() != m.rows() {
        return Err(ExprError::DimensionMismatch {
            operation: "vector-matrix product",
            left: v.shape(),
            right: m.dim(),
        });
    }
    Ok(Vector::make(
        Space::Row,
        (0..m.cols()).map(|j| {
            (0..m.rows()).fold(Value::ZERO, |acc, i| {
                functions::add(acc, functions::mul(v[i], m.at(i, j)))
            })
        }),
    ))
}

/// Plain triple-loop product. `a.cols()` must equal `b.rows()`.
pub fn mult(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.cols() != b.rows() {
        return Err(ExprError::DimensionMismatch {
            operation: "matrix product",
            left: a.dim(),
            right: b.dim(),
        });
    }
    Ok(Matrix::from_fn(a.rows(), b.cols(), |i, j| {
        (0..a.cols()).fold(Value::ZERO, |acc, k| {
            functions::add(acc, functions::mul(a.at(i, k), b.at(k, j)))
        })
    }))
}

/// Integer power of a square matrix.
///
/// `n == 0` gives the identity; a negative `n` raises the inverse to `-n`.
pub fn pow(m: &Matrix, n: i64) -> Result<Matrix> {
    if !m.is_square() {
        return Err(ExprError::NotSquare {
            operation: "matrix power",
            rows: m.rows(),
            cols: m.cols(),
        });
    }
    let mut base = if n < 0 { m.inv()? } else { m.clone() };
    let mut result = Matrix::identity(m.rows());
    let mut remaining = n.unsigned_abs();
    // Square-and-multiply over the bits of |n|.
    while remaining > 0 {
        if remaining & 1 == 1 {
            result = mult(&result, &base)?;
        }
        remaining >>= 1;
        if remaining > 0 {
            base = mult(&base, &base)?;
        }
    }
    Ok(result)
}
