//! Postfix program evaluator
//!
//! This module runs a [`CompiledExpression`] left to right with an explicit
//! operand stack. No recursion is involved, so evaluation depth is bounded
//! only by [`MAX_STACK_DEPTH`].

use crate::constants::MAX_STACK_DEPTH;
use crate::error::{ExprError, Result};
use crate::eval::stack_ops::Operator;
use crate::expression::{CompiledExpression, PostfixToken};
use crate::types::Argument;

use alloc::vec::Vec;
use log::{debug, trace};

/// Initial capacity for the operand stack (tuned for typical expressions)
const INITIAL_VALUE_CAPACITY: usize = 16;

/// Reusable evaluation engine to avoid allocations
///
/// The operand stack is cleared at the start of every call, so an engine
/// carries capacity between evaluations but never values.
pub struct EvalEngine {
    /// Operand stack for intermediate results
    value_stack: Vec<Argument>,
}

impl Default for EvalEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl EvalEngine {
    /// Create a new evaluation engine
    pub fn new() -> Self {
        Self {
            value_stack: Vec::with_capacity(INITIAL_VALUE_CAPACITY),
        }
    }

    /// Evaluate a compiled expression against its runtime inputs
    pub fn eval(&mut self, expr: &CompiledExpression, inputs: &[Argument]) -> Result<Argument> {
        expr.check_inputs(inputs)?;
        self.value_stack.clear();

        for (index, token) in expr.program().iter().enumerate() {
            trace!("slot {}: {:?}", index, token);
            match token {
                PostfixToken::Constant(argument) => self.push(argument.clone())?,
                PostfixToken::Variable { variable, position } => {
                    self.push(variable.eval(inputs[*position].clone())?)?
                }
                PostfixToken::Operation(op) => self.apply(op)?,
            }
        }

        match self.value_stack.len() {
            0 => Err(ExprError::EmptyExpression),
            1 => {
                let result = self.pop()?;
                debug!("evaluated {} slots to a {}", expr.len(), result.kind());
                Ok(result)
            }
            remaining => Err(ExprError::TooManyOperands { remaining }),
        }
    }

    fn push(&mut self, argument: Argument) -> Result<()> {
        if self.value_stack.len() >= MAX_STACK_DEPTH {
            return Err(ExprError::CapacityExceeded("operand stack"));
        }
        self.value_stack.push(argument);
        Ok(())
    }

    fn pop(&mut self) -> Result<Argument> {
        self.value_stack.pop().ok_or(ExprError::EmptyExpression)
    }

    fn require_operands(&self, operator: &'static str, needed: usize) -> Result<()> {
        let available = self.value_stack.len();
        if available < needed {
            return Err(ExprError::InsufficientOperands {
                operator,
                needed,
                available,
            });
        }
        Ok(())
    }

    /// Apply an operator to the top of the operand stack
    fn apply(&mut self, op: &Operator) -> Result<()> {
        let result = match op {
            Operator::Unary(unary) => {
                self.require_operands(unary.name(), 1)?;
                let operand = self.pop()?;
                unary.apply(operand)?
            }
            Operator::Binary(binary) => {
                self.require_operands(binary.symbol(), 2)?;
                let right = self.pop()?;
                let left = self.pop()?;
                binary.apply(left, right)?
            }
            Operator::Unknown(name) => {
                return Err(ExprError::UnsupportedOperation {
                    operator: name.clone(),
                });
            }
        };
        self.value_stack.push(result);
        Ok(())
    }
}
