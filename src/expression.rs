//! Compiled postfix programs.
//!
//! A [`CompiledExpression`] is produced by [`compile`](crate::compile) and can
//! be evaluated any number of times. It is read-only after construction, so a
//! shared reference may be evaluated from several threads at once.

use crate::error::{ExprError, Result};
use crate::eval::iterative::EvalEngine;
use crate::eval::stack_ops::Operator;
use crate::types::{Argument, SlotKind, Variable};
use alloc::vec::Vec;

/// One slot of a postfix program.
#[derive(Debug, Clone, PartialEq)]
pub enum PostfixToken {
    Constant(Argument),
    /// `position` is the index of the variable's value in the runtime inputs.
    Variable { variable: Variable, position: usize },
    Operation(Operator),
}

impl PostfixToken {
    pub fn slot_kind(&self) -> SlotKind {
        match self {
            PostfixToken::Constant(_) => SlotKind::Constant,
            PostfixToken::Variable { .. } => SlotKind::Variable,
            PostfixToken::Operation(_) => SlotKind::Operation,
        }
    }
}

/// A postfix program together with the variables it was compiled against.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledExpression {
    variables: Vec<Variable>,
    program: Vec<PostfixToken>,
}

impl CompiledExpression {
    pub(crate) fn new(variables: Vec<Variable>, program: Vec<PostfixToken>) -> Self {
        CompiledExpression { variables, program }
    }

    /// Evaluates the program with one input per registered variable, in
    /// registration order.
    ///
    /// # Errors
    ///
    /// - [`ExprError::ArityMismatch`] if `inputs.len()` differs from [`variable_count`](Self::variable_count)
    /// - [`ExprError::TypeMismatch`] if an input does not have its variable's kind
    /// - any operator or algebra error raised while running the program
    pub fn eval(&self, inputs: &[Argument]) -> Result<Argument> {
        EvalEngine::new().eval(self, inputs)
    }

    /// Same as [`eval`](Self::eval) for anything convertible into arguments.
    ///
    /// ```
    /// use exp_algebra::{compile, tokens, ArgKind, Variable};
    ///
    /// let x = Variable::new(ArgKind::Value);
    /// let y = Variable::new(ArgKind::Value);
    /// let f = compile(&[x, y], tokens![x, "-", y]).unwrap();
    /// let result = f.eval_with([7, 2]).unwrap();
    /// assert_eq!(result.value().unwrap().real(), 5.0);
    /// ```
    pub fn eval_with<I, A>(&self, inputs: I) -> Result<Argument>
    where
        I: IntoIterator<Item = A>,
        A: Into<Argument>,
    {
        let inputs: Vec<Argument> = inputs.into_iter().map(Into::into).collect();
        self.eval(&inputs)
    }

    /// Like [`eval`](Self::eval) but panics on error.
    pub fn must_eval(&self, inputs: &[Argument]) -> Argument {
        match self.eval(inputs) {
            Ok(result) => result,
            Err(err) => panic!("{}", err),
        }
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Number of slots in the postfix program.
    pub fn len(&self) -> usize {
        self.program.len()
    }

    pub fn is_empty(&self) -> bool {
        self.program.is_empty()
    }

    pub fn slot_kind(&self, index: usize) -> Option<SlotKind> {
        self.program.get(index).map(PostfixToken::slot_kind)
    }

    pub fn slot_kinds(&self) -> impl Iterator<Item = SlotKind> + '_ {
        self.program.iter().map(PostfixToken::slot_kind)
    }

    pub fn program(&self) -> &[PostfixToken] {
        &self.program
    }

    /// Checks the runtime inputs against the registered variables.
    pub(crate) fn check_inputs(&self, inputs: &[Argument]) -> Result<()> {
        if inputs.len() != self.variables.len() {
            return Err(ExprError::ArityMismatch {
                expected: self.variables.len(),
                found: inputs.len(),
            });
        }
        self.variables
            .iter()
            .zip(inputs)
            .try_for_each(|(variable, input)| variable.accepts(input))
    }
}
