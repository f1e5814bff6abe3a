//! Operators applied by the postfix evaluator
//!
//! This module is the dispatch table: it names every operator the compiler
//! understands, gives each its precedence and associativity, and maps a
//! combination of operand kinds onto the algebra routine that implements it.

use crate::algebra::{matrix_ops, vector_ops};
use crate::constants::MAX_OPERATOR_NAME;
use crate::error::{ExprError, Result};
use crate::functions;
use crate::types::Argument;
use crate::value::Value;
use crate::vector::Space;

/// Storage for an operator name the dispatch table does not know.
pub type OperatorName = heapless::String<MAX_OPERATOR_NAME>;

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Sqrt,
    Conj,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Asinh,
    Acosh,
    Atanh,
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

/// An operator slot of a compiled program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operator {
    Unary(UnaryOp),
    Binary(BinaryOp),
    /// A name found in neither table. Kept so that evaluation can report it.
    Unknown(OperatorName),
}

impl UnaryOp {
    pub fn from_name(name: &str) -> Option<UnaryOp> {
        let op = match name {
            "Sqrt" => UnaryOp::Sqrt,
            "Conj" => UnaryOp::Conj,
            "Sin" => UnaryOp::Sin,
            "Cos" => UnaryOp::Cos,
            "Tan" => UnaryOp::Tan,
            "Asin" => UnaryOp::Asin,
            "Acos" => UnaryOp::Acos,
            "Atan" => UnaryOp::Atan,
            "Sinh" => UnaryOp::Sinh,
            "Cosh" => UnaryOp::Cosh,
            "Tanh" => UnaryOp::Tanh,
            "Asinh" => UnaryOp::Asinh,
            "Acosh" => UnaryOp::Acosh,
            "Atanh" => UnaryOp::Atanh,
            _ => return None,
        };
        Some(op)
    }

    pub fn name(self) -> &'static str {
        match self {
            UnaryOp::Sqrt => "Sqrt",
            UnaryOp::Conj => "Conj",
            UnaryOp::Sin => "Sin",
            UnaryOp::Cos => "Cos",
            UnaryOp::Tan => "Tan",
            UnaryOp::Asin => "Asin",
            UnaryOp::Acos => "Acos",
            UnaryOp::Atan => "Atan",
            UnaryOp::Sinh => "Sinh",
            UnaryOp::Cosh => "Cosh",
            UnaryOp::Tanh => "Tanh",
            UnaryOp::Asinh => "Asinh",
            UnaryOp::Acosh => "Acosh",
            UnaryOp::Atanh => "Atanh",
        }
    }

    fn apply_scalar(self, operand: Value) -> Value {
        match self {
            UnaryOp::Sqrt => functions::sqrt(operand),
            UnaryOp::Conj => functions::conj(operand),
            UnaryOp::Sin => functions::sin(operand),
            UnaryOp::Cos => functions::cos(operand),
            UnaryOp::Tan => functions::tan(operand),
            UnaryOp::Asin => functions::asin(operand),
            UnaryOp::Acos => functions::acos(operand),
            UnaryOp::Atan => functions::atan(operand),
            UnaryOp::Sinh => functions::sinh(operand),
            UnaryOp::Cosh => functions::cosh(operand),
            UnaryOp::Tanh => functions::tanh(operand),
            UnaryOp::Asinh => functions::asinh(operand),
            UnaryOp::Acosh => functions::acosh(operand),
            UnaryOp::Atanh => functions::atanh(operand),
        }
    }

    /// Apply a unary operation to an operand.
    ///
    /// `Conj` accepts every operand kind; the rest are scalar only.
    pub fn apply(self, operand: Argument) -> Result<Argument> {
        match (self, operand) {
            (op, Argument::Value(value)) => Ok(Argument::Value(op.apply_scalar(value))),
            (UnaryOp::Conj, Argument::Vector(mut vector)) => {
                vector.conj();
                Ok(Argument::Vector(vector))
            }
            (UnaryOp::Conj, Argument::Matrix(mut matrix)) => {
                matrix.conj();
                Ok(Argument::Matrix(matrix))
            }
            (op, other) => Err(ExprError::UnsupportedOperandShape {
                operator: op.name(),
                left: other.kind(),
                right: None,
            }),
        }
    }
}

impl BinaryOp {
    pub fn from_name(name: &str) -> Option<BinaryOp> {
        match name {
            "+" => Some(BinaryOp::Add),
            "-" => Some(BinaryOp::Subtract),
            "*" => Some(BinaryOp::Multiply),
            "/" => Some(BinaryOp::Divide),
            "^" => Some(BinaryOp::Power),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Power => "^",
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Power => 3,
            BinaryOp::Multiply | BinaryOp::Divide => 2,
            BinaryOp::Add | BinaryOp::Subtract => 1,
        }
    }

    pub fn is_right_associative(self) -> bool {
        self == BinaryOp::Power
    }

    /// Apply a binary operation to two operands.
    pub fn apply(self, left: Argument, right: Argument) -> Result<Argument> {
        use Argument::{Matrix as M, Value as S, Vector as V};

        match (self, left, right) {
            (BinaryOp::Add, S(a), S(b)) => Ok(S(functions::add(a, b))),
            (BinaryOp::Add, V(a), V(b)) => vector_ops::add(&a, &b).map(V),
            (BinaryOp::Add, M(a), M(b)) => matrix_ops::add(&a, &b).map(M),

            (BinaryOp::Subtract, S(a), S(b)) => Ok(S(functions::sub(a, b))),
            (BinaryOp::Subtract, V(a), V(b)) => vector_ops::sub(&a, &b).map(V),
            (BinaryOp::Subtract, M(a), M(b)) => matrix_ops::sub(&a, &b).map(M),

            (BinaryOp::Multiply, S(a), S(b)) => Ok(S(functions::mul(a, b))),
            (BinaryOp::Multiply, V(v), S(s)) | (BinaryOp::Multiply, S(s), V(v)) => {
                Ok(V(vector_ops::scalar_mult(&v, s)))
            }
            (BinaryOp::Multiply, M(m), S(s)) | (BinaryOp::Multiply, S(s), M(m)) => {
                Ok(M(matrix_ops::scalar_mult(&m, s)))
            }
            (BinaryOp::Multiply, V(a), V(b)) => match (a.space(), b.space()) {
                (Space::Row, Space::Column) => vector_ops::inner(&a, &b).map(S),
                (Space::Column, Space::Row) => vector_ops::outer(&a, &b).map(M),
                _ => Err(ExprError::DimensionMismatch {
                    operation: "vector product",
                    left: a.shape(),
                    right: b.shape(),
                }),
            },
            (BinaryOp::Multiply, V(v), M(m)) => matrix_ops::vector_matrix(&v, &m).map(V),
            (BinaryOp::Multiply, M(m), V(v)) => matrix_ops::matrix_vector(&m, &v).map(V),
            (BinaryOp::Multiply, M(a), M(b)) => matrix_ops::mult(&a, &b).map(M),

            (BinaryOp::Divide, S(a), S(b)) => Ok(S(functions::div(a, b))),
            (BinaryOp::Divide, V(v), S(s)) => Ok(V(vector_ops::scalar_div(&v, s))),
            (BinaryOp::Divide, M(m), S(s)) => Ok(M(matrix_ops::scalar_div(&m, s))),

            (BinaryOp::Power, S(a), S(b)) => Ok(S(functions::pow(a, b))),
            (BinaryOp::Power, M(m), S(exponent)) => {
                let n = functions::trunc(exponent.real()) as i64;
                matrix_ops::pow(&m, n).map(M)
            }

            (op, left, right) => Err(ExprError::UnsupportedOperandShape {
                operator: op.symbol(),
                left: left.kind(),
                right: Some(right.kind()),
            }),
        }
    }
}

impl Operator {
    /// Look up `name` in the unary table first, then the binary table.
    ///
    /// Unrecognised names are kept as [`Operator::Unknown`]; only a name too
    /// long to store is an error.
    pub fn parse(name: &str) -> Result<Operator> {
        if let Some(op) = UnaryOp::from_name(name) {
            return Ok(Operator::Unary(op));
        }
        if let Some(op) = BinaryOp::from_name(name) {
            return Ok(Operator::Binary(op));
        }
        let mut stored = OperatorName::new();
        stored
            .push_str(name)
            .map_err(|_| ExprError::StringTooLong)?;
        Ok(Operator::Unknown(stored))
    }

    pub fn is_unary(&self) -> bool {
        matches!(self, Operator::Unary(_))
    }

    /// Binding strength used by the compiler. Unary functions bind tightest;
    /// unknown names bind loosest.
    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Unary(_) => u8::MAX,
            Operator::Binary(op) => op.precedence(),
            Operator::Unknown(_) => 0,
        }
    }

    pub fn is_right_associative(&self) -> bool {
        matches!(self, Operator::Binary(op) if op.is_right_associative())
    }

    pub fn name(&self) -> &str {
        match self {
            Operator::Unary(op) => op.name(),
            Operator::Binary(op) => op.symbol(),
            Operator::Unknown(name) => name.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;
    use crate::constants::{PI, TEST_PRECISION};
    use crate::matrix::Matrix;
    use crate::types::ArgKind;
    use crate::vector::Vector;

    #[test]
    fn test_operator_lookup() {
        assert_eq!(Operator::parse("Sin").unwrap(), Operator::Unary(UnaryOp::Sin));
        assert_eq!(Operator::parse("^").unwrap(), Operator::Binary(BinaryOp::Power));
        let unknown = Operator::parse("%").unwrap();
        assert_eq!(unknown.name(), "%");
        assert_eq!(unknown.precedence(), 0);
        assert_eq!(
            Operator::parse("AVeryLongOperatorName"),
            Err(ExprError::StringTooLong)
        );
    }

    #[test]
    fn test_precedence_and_associativity() {
        let pow = Operator::Binary(BinaryOp::Power);
        let mul = Operator::Binary(BinaryOp::Multiply);
        let add = Operator::Binary(BinaryOp::Add);
        assert!(pow.precedence() > mul.precedence());
        assert!(mul.precedence() > add.precedence());
        assert!(Operator::Unary(UnaryOp::Cos).precedence() > pow.precedence());
        assert!(pow.is_right_associative());
        assert!(!mul.is_right_associative());
    }

    #[test]
    fn test_scalar_unary() {
        let result = UnaryOp::Sin.apply(Argument::from(PI / 2.0)).unwrap();
        assert_approx_eq!(result.value().unwrap().real(), 1.0, TEST_PRECISION);
        let result = UnaryOp::Sqrt.apply(Argument::from(-4)).unwrap();
        assert_eq!(result.value().unwrap(), Value::new(0.0, 2.0));
    }

    #[test]
    fn test_unary_rejects_non_scalars() {
        let err = UnaryOp::Sin
            .apply(Argument::from(Vector::row([1, 2])))
            .unwrap_err();
        assert_eq!(
            err,
            ExprError::UnsupportedOperandShape {
                operator: "Sin",
                left: ArgKind::Vector,
                right: None
            }
        );
    }

    #[test]
    fn test_conj_on_every_kind() {
        let v = Vector::row([Value::new(1.0, 2.0)]);
        let result = UnaryOp::Conj.apply(Argument::from(v)).unwrap();
        assert_eq!(result.vector().unwrap()[0], Value::new(1.0, -2.0));

        let m = Matrix::from_rows(alloc::vec![Vector::row([Value::new(0.0, 1.0)])]).unwrap();
        let result = UnaryOp::Conj.apply(Argument::from(m)).unwrap();
        assert_eq!(result.matrix().unwrap().get(0, 0), Some(&Value::new(0.0, -1.0)));
    }

    #[test]
    fn test_vector_products_by_orientation() {
        let row = Argument::from(Vector::row([1, 2]));
        let column = Argument::from(Vector::column([3, 4]));

        let dot = BinaryOp::Multiply.apply(row.clone(), column.clone()).unwrap();
        assert_eq!(dot, Argument::from(11));

        let outer = BinaryOp::Multiply.apply(column.clone(), row.clone()).unwrap();
        assert_eq!(outer.matrix().unwrap().dim(), (2, 2));

        assert!(matches!(
            BinaryOp::Multiply.apply(row.clone(), row),
            Err(ExprError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_scalar_multiplication_commutes() {
        let v = Vector::column([1, 2]);
        let left = BinaryOp::Multiply
            .apply(Argument::from(3), Argument::from(v.clone()))
            .unwrap();
        let right = BinaryOp::Multiply
            .apply(Argument::from(v), Argument::from(3))
            .unwrap();
        assert_eq!(left, right);
    }

    #[test]
    fn test_division_is_one_directional() {
        let v = Argument::from(Vector::row([2, 4]));
        assert!(BinaryOp::Divide.apply(v.clone(), Argument::from(2)).is_ok());
        assert_eq!(
            BinaryOp::Divide.apply(Argument::from(2), v),
            Err(ExprError::UnsupportedOperandShape {
                operator: "/",
                left: ArgKind::Value,
                right: Some(ArgKind::Vector)
            })
        );
    }

    #[test]
    fn test_matrix_power_truncates_exponent() {
        let m = Argument::from(Matrix::identity(2));
        let result = BinaryOp::Power.apply(m.clone(), Argument::from(2.9)).unwrap();
        assert!(result.matrix().unwrap().is_identity());
        assert!(BinaryOp::Power.apply(Argument::from(2), m).is_err());
    }

    #[test]
    fn test_mismatched_addition() {
        let err = BinaryOp::Add
            .apply(Argument::from(1), Argument::from(Matrix::identity(2)))
            .unwrap_err();
        assert!(matches!(
            err,
            ExprError::UnsupportedOperandShape { operator: "+", .. }
        ));
    }
}
