//! Algebra between vectors, matrices and scalars.
//!
//! Every routine here takes its operands by reference and returns a freshly
//! allocated result. Shape problems are reported as
//! [`ExprError::DimensionMismatch`](crate::error::ExprError::DimensionMismatch)
//! or [`ExprError::NotSquare`](crate::error::ExprError::NotSquare); nothing
//! is coerced.

pub mod matrix_ops;
pub mod vector_ops;
