//! Error types and handling for the exp-algebra crate.
//!
//! One enum covers the whole pipeline: compiling a token stream, evaluating
//! the resulting postfix program, and the algebra routines the operators
//! delegate to. Each variant carries enough context (operator, operand kinds,
//! shapes, positions) for a caller to print an actionable message.

use crate::types::ArgKind;
use core::fmt;

/// Result type used throughout the crate.
pub type Result<T> = core::result::Result<T, ExprError>;

/// `(rows, cols)` of an operand as seen by the algebra layer.
///
/// A scalar is `(1, 1)`, a row vector of length n is `(1, n)` and a column
/// vector of length n is `(n, 1)`.
pub type Shape = (usize, usize);

/// Error type for expression compilation, evaluation and the algebra layer.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprError {
    /// The same variable placeholder appears twice in the registration list.
    ///
    /// `index` is the position of the second occurrence.
    DuplicateVariable { index: usize },

    /// A token references a variable that was not registered.
    ///
    /// `index` is the position of the offending token in the input stream.
    UnregisteredVariable { index: usize },

    /// A literal token cannot be used as a constant.
    UnsupportedLiteral { index: usize, reason: &'static str },

    /// A `(` without a matching `)` or the other way round.
    UnmatchedParenthesis { position: usize, found: &'static str },

    /// The number of runtime values does not match the number of registered variables.
    ArityMismatch { expected: usize, found: usize },

    /// A runtime value does not have the kind its variable was declared with.
    TypeMismatch { expected: ArgKind, found: ArgKind },

    /// An operator found fewer operands on the stack than it needs.
    InsufficientOperands {
        operator: &'static str,
        needed: usize,
        available: usize,
    },

    /// More than one operand was left on the stack after evaluation.
    TooManyOperands { remaining: usize },

    /// The compiled program produced no value at all.
    EmptyExpression,

    /// The operator name is neither a unary nor a binary operator.
    UnsupportedOperation { operator: heapless::String<{ crate::constants::MAX_OPERATOR_NAME }> },

    /// The operand shapes are incompatible for the named operation.
    DimensionMismatch {
        operation: &'static str,
        left: Shape,
        right: Shape,
    },

    /// The operator is not defined for this combination of operand kinds.
    ///
    /// `right` is `None` for unary operators.
    UnsupportedOperandShape {
        operator: &'static str,
        left: ArgKind,
        right: Option<ArgKind>,
    },

    /// A square matrix was required.
    NotSquare {
        operation: &'static str,
        rows: usize,
        cols: usize,
    },

    /// The matrix has no inverse.
    SingularMatrix,

    /// A unit vector or angle was requested for a zero vector.
    ZeroNorm,

    /// An element index is past the end of its container.
    IndexOutOfBounds { index: usize, len: usize },

    /// Error when capacity is exceeded for a bounded container.
    CapacityExceeded(&'static str),

    /// Error when a string is too long for heapless string buffer.
    StringTooLong,
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprError::DuplicateVariable { index } => {
                write!(f, "Error registering variables: variable at index {} is a duplicate", index)
            }
            ExprError::UnregisteredVariable { index } => {
                write!(f, "Variable at index {} was not registered", index)
            }
            ExprError::UnsupportedLiteral { index, reason } => {
                write!(f, "Unsupported literal at index {}: {}", index, reason)
            }
            ExprError::UnmatchedParenthesis { position, found } => {
                write!(
                    f,
                    "Unmatched parenthesis at position {}: found '{}'",
                    position, found
                )
            }
            ExprError::ArityMismatch { expected, found } => {
                write!(
                    f,
                    "Expected {} input values (one per registered variable), found {}",
                    expected, found
                )
            }
            ExprError::TypeMismatch { expected, found } => {
                write!(f, "Type mismatch: expected {}, received {}", expected, found)
            }
            ExprError::InsufficientOperands {
                operator,
                needed,
                available,
            } => {
                write!(
                    f,
                    "Not enough operands for '{}': needs {}, {} available",
                    operator, needed, available
                )
            }
            ExprError::TooManyOperands { remaining } => {
                write!(f, "Too many operands left over after calculation: {}", remaining)
            }
            ExprError::EmptyExpression => write!(f, "Expression produced no value"),
            ExprError::UnsupportedOperation { operator } => {
                write!(f, "Operation not supported: '{}'", operator)
            }
            ExprError::DimensionMismatch {
                operation,
                left,
                right,
            } => {
                write!(
                    f,
                    "Dimension mismatch in {}: {}x{} and {}x{}",
                    operation, left.0, left.1, right.0, right.1
                )
            }
            ExprError::UnsupportedOperandShape {
                operator,
                left,
                right: Some(right),
            } => {
                write!(f, "'{}' is not defined for {} and {}", operator, left, right)
            }
            ExprError::UnsupportedOperandShape {
                operator,
                left,
                right: None,
            } => {
                write!(f, "'{}' is not defined for {}", operator, left)
            }
            ExprError::NotSquare {
                operation,
                rows,
                cols,
            } => {
                write!(f, "{} requires a square matrix, found {}x{}", operation, rows, cols)
            }
            ExprError::SingularMatrix => write!(f, "Matrix is singular"),
            ExprError::ZeroNorm => write!(f, "Norm equal to zero"),
            ExprError::IndexOutOfBounds { index, len } => {
                write!(f, "Index {} out of bounds for length {}", index, len)
            }
            ExprError::CapacityExceeded(container_type) => {
                write!(f, "Capacity exceeded for {}", container_type)
            }
            ExprError::StringTooLong => write!(f, "String too long for heapless buffer"),
        }
    }
}

impl core::error::Error for ExprError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_display_names_operator_and_kinds() {
        let err = ExprError::UnsupportedOperandShape {
            operator: "/",
            left: ArgKind::Value,
            right: Some(ArgKind::Matrix),
        };
        assert_eq!(err.to_string(), "'/' is not defined for Value and Matrix");

        let err = ExprError::UnsupportedOperandShape {
            operator: "Sin",
            left: ArgKind::Vector,
            right: None,
        };
        assert_eq!(err.to_string(), "'Sin' is not defined for Vector");
    }

    #[test]
    fn test_display_dimension_mismatch() {
        let err = ExprError::DimensionMismatch {
            operation: "matrix add",
            left: (2, 3),
            right: (3, 2),
        };
        assert_eq!(err.to_string(), "Dimension mismatch in matrix add: 2x3 and 3x2");
    }
}
