//! Type definitions for the expression compiler and evaluator.
//!
//! This module contains the tagged operand type ([`Argument`]), the variable
//! placeholder ([`Variable`]), the input token type consumed by the compiler
//! ([`Token`]) and the per-slot classification of a compiled program
//! ([`SlotKind`]).

use crate::Real;
use crate::error::{ExprError, Result};
use crate::matrix::Matrix;
use crate::value::Value;
use crate::vector::Vector;
use alloc::string::String;
use core::fmt;
use core::sync::atomic::{AtomicUsize, Ordering};
use serde::{Deserialize, Serialize};

/// The kind of an operand: scalar, vector or matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ArgKind {
    Value,
    Vector,
    Matrix,
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArgKind::Value => "Value",
            ArgKind::Vector => "Vector",
            ArgKind::Matrix => "Matrix",
        };
        f.write_str(name)
    }
}

/// A concrete operand: exactly one of a scalar, a vector or a matrix.
///
/// The accessors return [`ExprError::TypeMismatch`] instead of panicking when
/// the requested kind is not the stored one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Argument {
    Value(Value),
    Vector(Vector),
    Matrix(Matrix),
}

impl Argument {
    pub fn kind(&self) -> ArgKind {
        match self {
            Argument::Value(_) => ArgKind::Value,
            Argument::Vector(_) => ArgKind::Vector,
            Argument::Matrix(_) => ArgKind::Matrix,
        }
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Argument::Value(_))
    }

    pub fn is_vector(&self) -> bool {
        matches!(self, Argument::Vector(_))
    }

    pub fn is_matrix(&self) -> bool {
        matches!(self, Argument::Matrix(_))
    }

    fn mismatch(&self, expected: ArgKind) -> ExprError {
        ExprError::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }

    pub fn value(&self) -> Result<Value> {
        match self {
            Argument::Value(value) => Ok(*value),
            other => Err(other.mismatch(ArgKind::Value)),
        }
    }

    pub fn vector(&self) -> Result<&Vector> {
        match self {
            Argument::Vector(vector) => Ok(vector),
            other => Err(other.mismatch(ArgKind::Vector)),
        }
    }

    pub fn matrix(&self) -> Result<&Matrix> {
        match self {
            Argument::Matrix(matrix) => Ok(matrix),
            other => Err(other.mismatch(ArgKind::Matrix)),
        }
    }

    pub fn into_vector(self) -> Result<Vector> {
        match self {
            Argument::Vector(vector) => Ok(vector),
            other => Err(other.mismatch(ArgKind::Vector)),
        }
    }

    pub fn into_matrix(self) -> Result<Matrix> {
        match self {
            Argument::Matrix(matrix) => Ok(matrix),
            other => Err(other.mismatch(ArgKind::Matrix)),
        }
    }

    /// True when every component of every element is finite.
    pub fn is_finite(&self) -> bool {
        match self {
            Argument::Value(value) => value.is_finite(),
            Argument::Vector(vector) => vector.iter().all(Value::is_finite),
            Argument::Matrix(matrix) => matrix
                .elements()
                .iter()
                .all(|row| row.iter().all(Value::is_finite)),
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Value(value) => write!(f, "{}", value),
            Argument::Vector(vector) => write!(f, "{}", vector),
            Argument::Matrix(matrix) => write!(f, "{}", matrix),
        }
    }
}

impl From<Value> for Argument {
    fn from(value: Value) -> Self {
        Argument::Value(value)
    }
}

impl From<Vector> for Argument {
    fn from(vector: Vector) -> Self {
        Argument::Vector(vector)
    }
}

impl From<Matrix> for Argument {
    fn from(matrix: Matrix) -> Self {
        Argument::Matrix(matrix)
    }
}

impl From<Real> for Argument {
    fn from(re: Real) -> Self {
        Argument::Value(Value::from(re))
    }
}

impl From<i32> for Argument {
    fn from(re: i32) -> Self {
        Argument::Value(Value::from(re))
    }
}

impl From<i64> for Argument {
    fn from(re: i64) -> Self {
        Argument::Value(Value::from(re))
    }
}

impl From<(Real, Real)> for Argument {
    fn from(parts: (Real, Real)) -> Self {
        Argument::Value(Value::from(parts))
    }
}

static NEXT_VARIABLE_ID: AtomicUsize = AtomicUsize::new(0);

/// Process-wide identity of a [`Variable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VariableId(usize);

/// A placeholder for an operand supplied at evaluation time.
///
/// Every call to [`Variable::new`] yields a distinct variable; copies of a
/// variable refer to the same one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Variable {
    id: VariableId,
    kind: ArgKind,
}

impl Variable {
    pub fn new(kind: ArgKind) -> Self {
        let id = NEXT_VARIABLE_ID.fetch_add(1, Ordering::Relaxed);
        Variable {
            id: VariableId(id),
            kind,
        }
    }

    pub fn id(&self) -> VariableId {
        self.id
    }

    pub fn kind(&self) -> ArgKind {
        self.kind
    }

    /// Binds a concrete operand to this variable.
    ///
    /// Fails with [`ExprError::TypeMismatch`] when the operand is not of the
    /// declared kind.
    pub fn eval(&self, candidate: impl Into<Argument>) -> Result<Argument> {
        let candidate = candidate.into();
        self.accepts(&candidate)?;
        Ok(candidate)
    }

    pub(crate) fn accepts(&self, candidate: &Argument) -> Result<()> {
        if candidate.kind() != self.kind {
            return Err(ExprError::TypeMismatch {
                expected: self.kind,
                found: candidate.kind(),
            });
        }
        Ok(())
    }

    /// Like [`Variable::eval`] but panics on a kind mismatch.
    pub fn must_eval(&self, candidate: impl Into<Argument>) -> Argument {
        match self.eval(candidate) {
            Ok(argument) => argument,
            Err(err) => panic!("{}", err),
        }
    }
}

/// One element of the infix input consumed by the compiler.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A literal or an already-built operand.
    Constant(Argument),
    /// A reference to a registered variable.
    Variable(Variable),
    /// An operator name, `"("` or `")"`.
    Operator(String),
}

impl From<Argument> for Token {
    fn from(argument: Argument) -> Self {
        Token::Constant(argument)
    }
}

impl From<Variable> for Token {
    fn from(variable: Variable) -> Self {
        Token::Variable(variable)
    }
}

impl From<&Variable> for Token {
    fn from(variable: &Variable) -> Self {
        Token::Variable(*variable)
    }
}

impl From<&str> for Token {
    fn from(name: &str) -> Self {
        Token::Operator(String::from(name))
    }
}

impl From<String> for Token {
    fn from(name: String) -> Self {
        Token::Operator(name)
    }
}

macro_rules! constant_token_from {
    ($($source:ty),+) => {
        $(
            impl From<$source> for Token {
                fn from(literal: $source) -> Self {
                    Token::Constant(Argument::from(literal))
                }
            }
        )+
    };
}

constant_token_from!(i32, i64, Real, (Real, Real), Value, Vector, Matrix);

/// What a position in a compiled program holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    Constant,
    Variable,
    Operation,
}
