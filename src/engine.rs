//! Shunting-yard compiler from infix token streams to postfix programs.

use crate::error::{ExprError, Result};
use crate::eval::stack_ops::Operator;
use crate::expression::{CompiledExpression, PostfixToken};
use crate::types::{Argument, Token, Variable, VariableId};

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use bumpalo::Bump;
use log::{debug, trace};

/// Entry on the compiler's operator stack.
#[derive(Debug)]
enum StackEntry {
    /// An open parenthesis and the input position it came from.
    Open(usize),
    Op(Operator),
}

/// Shunting-yard state for a single compilation.
///
/// The operator stack lives in the caller's arena; the output is a regular
/// vector because it outlives the compilation.
struct Compiler<'arena> {
    registry: BTreeMap<VariableId, usize>,
    variables: Vec<Variable>,
    operators: bumpalo::collections::Vec<'arena, StackEntry>,
    output: Vec<PostfixToken>,
}

impl<'arena> Compiler<'arena> {
    fn new(arena: &'arena Bump, variables: &[Variable]) -> Result<Self> {
        let mut registry = BTreeMap::new();
        for (index, variable) in variables.iter().enumerate() {
            if registry.insert(variable.id(), index).is_some() {
                return Err(ExprError::DuplicateVariable { index });
            }
        }
        Ok(Self {
            registry,
            variables: variables.to_vec(),
            operators: bumpalo::collections::Vec::new_in(arena),
            output: Vec::new(),
        })
    }

    fn process(&mut self, index: usize, token: Token) -> Result<()> {
        trace!("token {}: {:?}", index, token);
        match token {
            Token::Constant(argument) => self.push_constant(index, argument),
            Token::Variable(variable) => self.push_variable(index, variable),
            Token::Operator(name) => match name.as_str() {
                "(" => {
                    self.operators.push(StackEntry::Open(index));
                    Ok(())
                }
                ")" => self.close_parenthesis(index),
                other => {
                    let op = Operator::parse(other)?;
                    self.push_operator(op);
                    Ok(())
                }
            },
        }
    }

    fn push_constant(&mut self, index: usize, argument: Argument) -> Result<()> {
        if !argument.is_finite() {
            return Err(ExprError::UnsupportedLiteral {
                index,
                reason: "literal has a non-finite component",
            });
        }
        self.output.push(PostfixToken::Constant(argument));
        Ok(())
    }

    fn push_variable(&mut self, index: usize, variable: Variable) -> Result<()> {
        let position = *self
            .registry
            .get(&variable.id())
            .ok_or(ExprError::UnregisteredVariable { index })?;
        self.output.push(PostfixToken::Variable { variable, position });
        Ok(())
    }

    fn close_parenthesis(&mut self, index: usize) -> Result<()> {
        loop {
            match self.operators.pop() {
                Some(StackEntry::Open(_)) => return Ok(()),
                Some(StackEntry::Op(op)) => self.output.push(PostfixToken::Operation(op)),
                None => {
                    return Err(ExprError::UnmatchedParenthesis {
                        position: index,
                        found: ")",
                    });
                }
            }
        }
    }

    /// Unary functions are pushed as-is so that chains like `Cos Sin x`
    /// compose right to left. A binary operator first reduces every stacked
    /// operator that binds at least as tightly.
    fn push_operator(&mut self, op: Operator) {
        if !op.is_unary() {
            while let Some(StackEntry::Op(top)) = self.operators.last() {
                let reduces = top.is_unary()
                    || top.precedence() > op.precedence()
                    || (top.precedence() == op.precedence() && !op.is_right_associative());
                if !reduces {
                    break;
                }
                if let Some(StackEntry::Op(top)) = self.operators.pop() {
                    self.output.push(PostfixToken::Operation(top));
                }
            }
        }
        self.operators.push(StackEntry::Op(op));
    }

    fn finish(mut self) -> Result<CompiledExpression> {
        while let Some(entry) = self.operators.pop() {
            match entry {
                StackEntry::Op(op) => self.output.push(PostfixToken::Operation(op)),
                StackEntry::Open(position) => {
                    return Err(ExprError::UnmatchedParenthesis {
                        position,
                        found: "(",
                    });
                }
            }
        }
        debug!(
            "compiled {} postfix slots over {} variables",
            self.output.len(),
            self.variables.len()
        );
        Ok(CompiledExpression::new(self.variables, self.output))
    }
}

/// Compiles an infix token stream against a list of variable placeholders.
///
/// The position of each variable in `variables` is the position of its value
/// in the inputs later passed to [`CompiledExpression::eval`].
///
/// # Errors
///
/// - [`ExprError::DuplicateVariable`] when a variable is registered twice
/// - [`ExprError::UnregisteredVariable`] when a token references an unknown variable
/// - [`ExprError::UnsupportedLiteral`] for a constant with a NaN or infinite component
/// - [`ExprError::UnmatchedParenthesis`] for unbalanced `(` / `)`
/// - [`ExprError::StringTooLong`] for an unknown operator name too long to store
///
/// Operator names outside the dispatch table are accepted here and reported
/// as [`ExprError::UnsupportedOperation`] on evaluation.
///
/// # Examples
///
/// ```
/// use exp_algebra::{compile, tokens, ArgKind, Variable};
///
/// let x = Variable::new(ArgKind::Value);
/// let f = compile(&[x], tokens!["Cos", "Sin", x]).unwrap();
/// let result = f.eval_with([0.0]).unwrap();
/// assert_eq!(result.value().unwrap().real(), 1.0);
/// ```
pub fn compile<I>(variables: &[Variable], tokens: I) -> Result<CompiledExpression>
where
    I: IntoIterator<Item = Token>,
{
    let arena = Bump::new();
    compile_in(&arena, variables, tokens)
}

/// Like [`compile`], with the compiler's scratch space allocated in `arena`.
///
/// Useful when compiling many expressions in a row: the arena can be reset
/// between compilations instead of reallocating.
pub fn compile_in<I>(arena: &Bump, variables: &[Variable], tokens: I) -> Result<CompiledExpression>
where
    I: IntoIterator<Item = Token>,
{
    let mut compiler = Compiler::new(arena, variables)?;
    for (index, token) in tokens.into_iter().enumerate() {
        compiler.process(index, token)?;
    }
    compiler.finish()
}

/// Like [`compile`] but panics on error.
pub fn must_compile<I>(variables: &[Variable], tokens: I) -> CompiledExpression
where
    I: IntoIterator<Item = Token>,
{
    match compile(variables, tokens) {
        Ok(expr) => expr,
        Err(err) => panic!("{}", err),
    }
}

/// Compiles and evaluates an expression that references no variables.
pub fn evaluate_immediate<I>(tokens: I) -> Result<Argument>
where
    I: IntoIterator<Item = Token>,
{
    compile(&[], tokens)?.eval(&[])
}

/// Like [`evaluate_immediate`] but panics on error.
pub fn must_evaluate_immediate<I>(tokens: I) -> Argument
where
    I: IntoIterator<Item = Token>,
{
    match evaluate_immediate(tokens) {
        Ok(result) => result,
        Err(err) => panic!("{}", err),
    }
}
