//! Test utilities for building operands
//!
//! This module provides compact constructors for the matrices that
//! unit tests compare against.

#![cfg(test)]

use crate::matrix::Matrix;
use crate::vector::Vector;

/// Create a real matrix from integer rows
pub fn matrix(rows: &[&[i32]]) -> Matrix {
    Matrix::from_rows(rows.iter().map(|row| Vector::row(row.iter().copied())).collect())
        .expect("rows must have equal length")
}
