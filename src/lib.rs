#![cfg_attr(all(not(test), target_arch = "arm"), no_std)]
#![doc = r#"
# exp-algebra

A small, no_std-friendly numeric expression framework: a tower of value types
(complex scalar, row/column vector, matrix), the algebra between them, and a
shunting-yard compiler that turns a token stream into a re-evaluatable postfix
program.

## Overview

Key features:
- Complex scalars with a `Real`/`Complex` rank that is tracked through every container
- Row and column vectors with inner/outer products, norm, unit vectors
- Matrices with trace, determinant, inverse, augmentation and sub-block trimming
- Operators `+ - * / ^` that dispatch on operand kind (scalar, vector, matrix)
- Unary functions `Sqrt`, `Conj` and the trigonometric/hyperbolic family
- Function application by juxtaposition (`"Sin" x` is equivalent to `"Sin" "(" x ")"`)
- Right-associative exponentiation
- Configurable floating-point precision (f32/f64)

## Quick Start

Purely constant expressions can be evaluated in one shot:

```rust
use exp_algebra::{evaluate_immediate, tokens};

let result = evaluate_immediate(tokens![2, "+", 3, "*", 4]).unwrap();
assert_eq!(result.value().unwrap().real(), 14.0);
```

## Compiling Once, Evaluating Many Times

Register variable placeholders, compile once, then bind concrete values on
every evaluation:

```rust
use exp_algebra::{compile, tokens, ArgKind, Argument, Variable};

let x = Variable::new(ArgKind::Value);
let function = compile(&[x], tokens![x, "^", 3, "^", x]).unwrap();

let result = function.eval(&[Argument::from(2)]).unwrap();
assert_eq!(result.value().unwrap().real(), 512.0); // 2^(3^2)
```

## Vectors and Matrices

```rust
use exp_algebra::{compile, tokens, ArgKind, Argument, Matrix, Variable, Vector};

let m = Variable::new(ArgKind::Matrix);
let row = Vector::row([2, 4, 6]);
let function = compile(&[m], tokens![row, "*", m, "/", 2]).unwrap();

let result = function.eval(&[Argument::from(Matrix::identity(3))]).unwrap();
let vector = result.vector().unwrap();
assert_eq!(vector[2].real(), 3.0);
```

## Error Handling

Every failure is an [`ExprError`](error::ExprError) value:

```rust
use exp_algebra::{compile, tokens, ExprError};

match compile(&[], tokens![2, "+", 3, ")"]) {
    Err(ExprError::UnmatchedParenthesis { .. }) => {}
    other => panic!("unexpected: {:?}", other),
}
```

## Feature Flags

- `f32`: Use 32-bit floating point (single precision) for calculations
- 64-bit floating point is used when `f32` is not enabled
"#]

extern crate alloc;

pub mod algebra;
pub mod engine;
pub mod error;
pub mod eval;
pub mod expression;
pub mod functions;
pub mod matrix;
pub mod types;
pub mod value;
pub mod values;
pub mod vector;
pub mod vectors;

#[cfg(test)]
mod test_utils;

pub use eval::EvalEngine;
pub use engine::{compile, compile_in, evaluate_immediate, must_compile, must_evaluate_immediate};
pub use error::{ExprError, Result, Shape};
pub use expression::CompiledExpression;
pub use matrix::Matrix;
pub use types::{ArgKind, Argument, SlotKind, Token, Variable};
pub use value::{Rank, Value, ZERO};
pub use values::Values;
pub use vector::{Space, Vector};
pub use vectors::Vectors;

/// Define the floating-point type based on feature flags
#[cfg(feature = "f32")]
pub type Real = f32;

#[cfg(not(feature = "f32"))]
pub type Real = f64;

pub mod constants {
    use super::Real;

    #[cfg(feature = "f32")]
    pub const PI: Real = core::f32::consts::PI;
    #[cfg(feature = "f32")]
    pub const E: Real = core::f32::consts::E;
    #[cfg(feature = "f32")]
    pub const TEST_PRECISION: Real = 1e-5;

    #[cfg(not(feature = "f32"))]
    pub const PI: Real = core::f64::consts::PI;
    #[cfg(not(feature = "f32"))]
    pub const E: Real = core::f64::consts::E;
    #[cfg(not(feature = "f32"))]
    pub const TEST_PRECISION: Real = 1e-10;

    /// Maximum depth of the evaluator's operand stack
    pub const MAX_STACK_DEPTH: usize = 1024;

    /// Longest operator name a compiled expression can hold
    pub const MAX_OPERATOR_NAME: usize = 16;
}

/// Asserts that two `Real`s agree within an epsilon (default
/// [`constants::TEST_PRECISION`]). NaN matches NaN and same-signed infinities
/// match each other. Accepts an optional trailing format message.
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_approx_eq!($left, $right, $crate::constants::TEST_PRECISION)
    };
    ($left:expr, $right:expr, $epsilon:expr $(,)?) => {{
        let left_val: $crate::Real = $left;
        let right_val: $crate::Real = $right;
        let eps: $crate::Real = $epsilon;
        $crate::assert_approx_eq!(
            left_val,
            right_val,
            eps,
            "assertion failed: `(left ≈ right)` (left: `{}`, right: `{}`, epsilon: `{}`)",
            left_val,
            right_val,
            eps
        )
    }};
    ($left:expr, $right:expr, $epsilon:expr, $fmt:expr, $($arg:tt)+) => {{
        let left_val: $crate::Real = $left;
        let right_val: $crate::Real = $right;
        let eps: $crate::Real = $epsilon;

        let both_nan = left_val.is_nan() && right_val.is_nan();
        let same_infinity = left_val.is_infinite()
            && right_val.is_infinite()
            && left_val.signum() == right_val.signum();
        if !both_nan && !same_infinity {
            assert!((left_val - right_val).abs() < eps, $fmt, $($arg)+);
        }
    }};
}

/// Builds a `Vec<Token>` from a mixed list of literals, arguments,
/// variables and operator strings.
///
/// ```
/// use exp_algebra::{tokens, Token};
///
/// let list: Vec<Token> = tokens!["Sin", "(", 1.5, ")", "+", 2];
/// assert_eq!(list.len(), 6);
/// ```
#[macro_export]
macro_rules! tokens {
    () => {
        $crate::__private::Vec::<$crate::Token>::new()
    };
    ($($token:expr),+ $(,)?) => {
        <$crate::__private::Vec<$crate::Token>>::from([$($crate::Token::from($token)),+])
    };
}

#[doc(hidden)]
pub mod __private {
    pub use alloc::vec::Vec;
}
