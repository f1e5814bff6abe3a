//! Expression evaluation module for exp-algebra
//!
//! This module contains the operator dispatch table and the iterative
//! postfix evaluator that drives it.

pub mod iterative;
pub mod stack_ops;

pub use iterative::EvalEngine;
pub use stack_ops::{BinaryOp, Operator, OperatorName, UnaryOp};
