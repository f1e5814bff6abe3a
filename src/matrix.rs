//! Dense matrices stored as a sequence of row vectors.

use crate::error::{ExprError, Result, Shape};
use crate::functions;
use crate::value::{Rank, Value};
use crate::vector::{Space, Vector};
use crate::vectors::Vectors;
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

/// A `rows x cols` grid of values.
///
/// Every row is a row-space [`Vector`] of length `cols`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    elements: Vectors,
}

impl Matrix {
    /// Zero matrix.
    pub fn new(rows: usize, cols: usize) -> Self {
        Matrix {
            elements: Vectors::new(Space::Row, rows, cols),
        }
    }

    pub fn identity(degree: usize) -> Self {
        let mut matrix = Matrix::new(degree, degree);
        for i in 0..degree {
            matrix.put(i, i, Value::ONE);
        }
        matrix
    }

    /// Builds a matrix from rows. Column vectors are transposed into rows;
    /// rows of different lengths are rejected.
    pub fn from_rows(rows: Vec<Vector>) -> Result<Self> {
        Matrix::from_vectors(Vectors::from_vectors(Space::Row, rows))
    }

    pub fn from_vectors(vects: Vectors) -> Result<Self> {
        let vects = if vects.space() == Space::Row {
            vects
        } else {
            Vectors::from_vectors(Space::Row, vects.as_slice().to_vec())
        };
        let cols = vects.inner_len();
        if let Some(row) = vects.iter().find(|row| row.len() != cols) {
            return Err(ExprError::DimensionMismatch {
                operation: "matrix construction",
                left: (1, cols),
                right: (1, row.len()),
            });
        }
        Ok(Matrix { elements: vects })
    }

    pub(crate) fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Value,
    {
        let rows = (0..rows)
            .map(|i| Vector::make(Space::Row, (0..cols).map(|j| f(i, j))))
            .collect();
        Matrix {
            elements: Vectors::from_vectors(Space::Row, rows).with_inner_len(cols),
        }
    }

    pub fn rows(&self) -> usize {
        self.elements.len()
    }

    pub fn cols(&self) -> usize {
        self.elements.inner_len()
    }

    pub fn dim(&self) -> Shape {
        (self.rows(), self.cols())
    }

    pub fn total_elements(&self) -> usize {
        self.rows() * self.cols()
    }

    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    pub fn is_identity(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        self.elements.iter().enumerate().all(|(i, row)| {
            row.iter().enumerate().all(|(j, value)| {
                if i == j {
                    *value == Value::ONE
                } else {
                    value.is_zero()
                }
            })
        })
    }

    pub fn rank(&self) -> Rank {
        self.elements.rank()
    }

    pub fn elements(&self) -> &Vectors {
        &self.elements
    }

    pub fn get(&self, i: usize, j: usize) -> Option<&Value> {
        self.elements.get(i).and_then(|row| row.get(j))
    }

    /// Unchecked element access for indices the caller has already bounded.
    pub(crate) fn at(&self, i: usize, j: usize) -> Value {
        self.elements[i][j]
    }

    pub fn set(&mut self, i: usize, j: usize, value: Value) -> Result<()> {
        self.elements.set_value(i, j, value)
    }

    fn put(&mut self, i: usize, j: usize, value: Value) {
        // in-bounds by construction at every call site
        let _ = self.elements.set_value(i, j, value);
    }

    pub fn row(&self, i: usize) -> Option<&Vector> {
        self.elements.get(i)
    }

    /// Replaces row `i`. A column vector is transposed before it is stored.
    pub fn set_row(&mut self, i: usize, vect: Vector) -> Result<()> {
        if vect.len() != self.cols() {
            return Err(ExprError::DimensionMismatch {
                operation: "matrix set row",
                left: (1, self.cols()),
                right: vect.shape(),
            });
        }
        self.elements.set(i, vect)
    }

    pub fn column(&self, j: usize) -> Option<Vector> {
        if j >= self.cols() {
            return None;
        }
        Some(Vector::make(
            Space::Column,
            self.elements.iter().map(|row| row[j]),
        ))
    }

    /// Swaps rows `i` and `j`.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        self.elements.swap(i, j)
    }

    pub fn trans(&mut self) {
        let transposed = Matrix::from_fn(self.cols(), self.rows(), |i, j| self.at(j, i));
        *self = transposed;
    }

    pub fn conj(&mut self) {
        if self.rank() != Rank::Complex {
            return;
        }
        let conjugated = Matrix::from_fn(self.rows(), self.cols(), |i, j| {
            functions::conj(self.at(i, j))
        });
        *self = conjugated;
    }

    pub fn conj_trans(&mut self) {
        self.conj();
        self.trans();
    }

    pub fn transposed(&self) -> Matrix {
        let mut copy = self.clone();
        copy.trans();
        copy
    }

    pub fn conjugated(&self) -> Matrix {
        let mut copy = self.clone();
        copy.conj();
        copy
    }

    pub fn conj_transposed(&self) -> Matrix {
        let mut copy = self.clone();
        copy.conj_trans();
        copy
    }

    fn require_square(&self, operation: &'static str) -> Result<()> {
        if !self.is_square() {
            return Err(ExprError::NotSquare {
                operation,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(())
    }

    pub fn trace(&self) -> Result<Value> {
        self.require_square("trace")?;
        Ok((0..self.rows()).fold(Value::ZERO, |acc, i| functions::add(acc, self.at(i, i))))
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn det(&self) -> Result<Value> {
        self.require_square("determinant")?;
        Ok(self.cofactor_det())
    }

    fn cofactor_det(&self) -> Value {
        match self.rows() {
            0 => Value::ONE,
            1 => self.at(0, 0),
            2 => functions::sub(
                functions::mul(self.at(0, 0), self.at(1, 1)),
                functions::mul(self.at(0, 1), self.at(1, 0)),
            ),
            n => (0..n).fold(Value::ZERO, |acc, j| {
                let pivot = self.at(0, j);
                if pivot.is_zero() {
                    return acc;
                }
                let term = functions::mul(pivot, self.minor(0, j).cofactor_det());
                if j % 2 == 0 {
                    functions::add(acc, term)
                } else {
                    functions::sub(acc, term)
                }
            }),
        }
    }

    /// The matrix with row `row` and column `col` removed.
    fn minor(&self, row: usize, col: usize) -> Matrix {
        Matrix::from_fn(self.rows() - 1, self.cols() - 1, |i, j| {
            let i = if i < row { i } else { i + 1 };
            let j = if j < col { j } else { j + 1 };
            self.at(i, j)
        })
    }

    /// Inverse by Gauss-Jordan elimination on `[A | I]` with partial pivoting.
    pub fn inv(&self) -> Result<Matrix> {
        self.require_square("inverse")?;
        let degree = self.rows();
        if degree == 0 {
            return Ok(Matrix::new(0, 0));
        }
        let mut work = self.augment(&Matrix::identity(degree))?;

        for col in 0..degree {
            let pivot_row = (col..degree)
                .max_by(|&a, &b| {
                    functions::abs(work.at(a, col))
                        .partial_cmp(&functions::abs(work.at(b, col)))
                        .unwrap_or(core::cmp::Ordering::Equal)
                })
                .unwrap_or(col);
            if work.at(pivot_row, col).is_zero() {
                return Err(ExprError::SingularMatrix);
            }
            work.swap(col, pivot_row)?;

            let pivot = work.at(col, col);
            let normalized = Vector::make(
                Space::Row,
                work.elements[col].iter().map(|v| functions::div(*v, pivot)),
            );
            work.elements.set(col, normalized)?;

            for row in 0..degree {
                if row == col {
                    continue;
                }
                let factor = work.at(row, col);
                if factor.is_zero() {
                    continue;
                }
                let reduced = Vector::make(
                    Space::Row,
                    work.elements[row]
                        .iter()
                        .zip(work.elements[col].iter())
                        .map(|(a, b)| functions::sub(*a, functions::mul(factor, *b))),
                );
                work.elements.set(row, reduced)?;
            }
        }

        work.trim(0, 0, degree, 0)
    }

    /// `[self | other]`. Both matrices must have the same number of rows.
    pub fn augment(&self, other: &Matrix) -> Result<Matrix> {
        if self.rows() != other.rows() {
            return Err(ExprError::DimensionMismatch {
                operation: "matrix augment",
                left: self.dim(),
                right: other.dim(),
            });
        }
        let rows = self
            .elements
            .iter()
            .zip(other.elements.iter())
            .map(|(left, right)| Vector::make(Space::Row, left.iter().chain(right.iter())))
            .collect();
        Matrix::from_rows(rows)
    }

    /// `[self | column]`. The vector must be a column of length `rows`.
    pub fn augment_column(&self, column: &Vector) -> Result<Matrix> {
        if column.space() != Space::Column || column.len() != self.rows() {
            return Err(ExprError::DimensionMismatch {
                operation: "matrix augment",
                left: self.dim(),
                right: column.shape(),
            });
        }
        let rows = self
            .elements
            .iter()
            .zip(column.iter())
            .map(|(row, value)| {
                let mut row = row.clone();
                row.append(*value);
                row
            })
            .collect();
        Matrix::from_rows(rows)
    }

    /// Removes `top` rows from the top, `bottom` from the bottom, `left`
    /// columns from the left and `right` from the right.
    pub fn trim(&self, top: usize, bottom: usize, left: usize, right: usize) -> Result<Matrix> {
        let (rows, cols) = self.dim();
        let vertical = top.checked_add(bottom).filter(|&n| n < rows);
        let horizontal = left.checked_add(right).filter(|&n| n < cols);
        let (Some(vertical), Some(horizontal)) = (vertical, horizontal) else {
            return Err(ExprError::DimensionMismatch {
                operation: "matrix trim",
                left: self.dim(),
                right: (top.saturating_add(bottom), left.saturating_add(right)),
            });
        };
        Ok(Matrix::from_fn(rows - vertical, cols - horizontal, |i, j| {
            self.at(i + top, j + left)
        }))
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.elements.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}
