//! Immutable complex scalar values.
//!
//! A [`Value`] is a `(real, imaginary)` pair. Its [`Rank`] is derived: a value
//! with a zero imaginary part is `Real`, anything else is `Complex`.

use crate::Real;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Ordered classification of a scalar or container. `Complex` dominates `Real`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Rank {
    #[default]
    Real,
    Complex,
}

/// An immutable real or complex number.
///
/// Equality is component-wise, so [`ZERO`] compares equal to any freshly
/// built `(0, 0)` value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Value {
    re: Real,
    im: Real,
}

/// The shared zero value.
pub static ZERO: Value = Value::ZERO;

impl Value {
    pub const ZERO: Value = Value { re: 0.0, im: 0.0 };
    pub const ONE: Value = Value { re: 1.0, im: 0.0 };
    pub const I: Value = Value { re: 0.0, im: 1.0 };

    pub const fn new(re: Real, im: Real) -> Self {
        Value { re, im }
    }

    pub const fn real_value(re: Real) -> Self {
        Value { re, im: 0.0 }
    }

    /// Returns a reference to the process-wide zero value.
    pub fn zero() -> &'static Value {
        &ZERO
    }

    pub fn real(&self) -> Real {
        self.re
    }

    pub fn imag(&self) -> Real {
        self.im
    }

    pub fn rank(&self) -> Rank {
        if self.im == 0.0 {
            Rank::Real
        } else {
            Rank::Complex
        }
    }

    pub fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

impl From<Real> for Value {
    fn from(re: Real) -> Self {
        Value::real_value(re)
    }
}

impl From<i32> for Value {
    fn from(re: i32) -> Self {
        Value::real_value(re as Real)
    }
}

impl From<i64> for Value {
    fn from(re: i64) -> Self {
        Value::real_value(re as Real)
    }
}

impl From<(Real, Real)> for Value {
    fn from((re, im): (Real, Real)) -> Self {
        Value::new(re, im)
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        *value
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.re == 0.0, self.im == 0.0) {
            (_, true) => write!(f, "{}", self.re),
            (true, false) => write!(f, "{}i", self.im),
            (false, false) if self.im < 0.0 => write!(f, "{}{}i", self.re, self.im),
            (false, false) => write!(f, "{}+{}i", self.re, self.im),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_rank_is_derived_from_imaginary_part() {
        assert_eq!(Value::from(3).rank(), Rank::Real);
        assert_eq!(Value::new(1.0, 0.0).rank(), Rank::Real);
        assert_eq!(Value::new(1.0, 5.0).rank(), Rank::Complex);
        assert_eq!(Value::new(1.0, -5.0).rank(), Rank::Complex);
        assert!(Rank::Complex > Rank::Real);
    }

    #[test]
    fn test_zero_matches_fresh_zero() {
        assert_eq!(*Value::zero(), Value::new(0.0, 0.0));
        assert_eq!(ZERO, Value::from(0));
        assert!(ZERO.is_zero());
        assert_eq!(ZERO.rank(), Rank::Real);
        assert!(!Value::new(0.0, 1.0).is_zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from(3).to_string(), "3");
        assert_eq!(Value::new(1.0, 2.0).to_string(), "1+2i");
        assert_eq!(Value::new(1.0, -2.0).to_string(), "1-2i");
        assert_eq!(Value::new(0.0, -0.5).to_string(), "-0.5i");
    }
}
