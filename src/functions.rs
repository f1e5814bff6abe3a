//! Scalar arithmetic and transcendental functions over [`Value`].
//!
//! Real inputs inside a function's real domain go straight to `libm` so that
//! results such as `2^9` or `sqrt(4)` stay exact. Everything else is computed
//! on the principal branch of the complex function. Depending on the selected
//! floating-point precision (f32 or f64, controlled by the "f32" feature),
//! different versions of the libm functions are used.

#[cfg(feature = "f32")]
use libm::{
    acosf as libm_acos, acoshf as libm_acosh, asinf as libm_asin, asinhf as libm_asinh,
    atan2f as libm_atan2, atanf as libm_atan, atanhf as libm_atanh, cosf as libm_cos,
    coshf as libm_cosh, expf as libm_exp, fabsf as libm_abs, hypotf as libm_hypot,
    logf as libm_ln, powf as libm_pow, sinf as libm_sin, sinhf as libm_sinh,
    sqrtf as libm_sqrt, tanf as libm_tan, tanhf as libm_tanh, truncf as libm_trunc,
};

#[cfg(not(feature = "f32"))]
use libm::{
    acos as libm_acos, acosh as libm_acosh, asin as libm_asin, asinh as libm_asinh,
    atan as libm_atan, atan2 as libm_atan2, atanh as libm_atanh, cos as libm_cos,
    cosh as libm_cosh, exp as libm_exp, fabs as libm_abs, hypot as libm_hypot, log as libm_ln,
    pow as libm_pow, sin as libm_sin, sinh as libm_sinh, sqrt as libm_sqrt, tan as libm_tan,
    tanh as libm_tanh, trunc as libm_trunc,
};

use crate::Real;
use crate::constants::PI;
use crate::value::{Rank, Value};

/// Absolute value of a real number.
pub fn fabs(a: Real) -> Real {
    libm_abs(a)
}

/// Truncates a real number towards zero.
pub fn trunc(a: Real) -> Real {
    libm_trunc(a)
}

/// Square root of a real number.
pub fn sqrt_real(a: Real) -> Real {
    libm_sqrt(a)
}

pub fn add(a: Value, b: Value) -> Value {
    Value::new(a.real() + b.real(), a.imag() + b.imag())
}

pub fn sub(a: Value, b: Value) -> Value {
    Value::new(a.real() - b.real(), a.imag() - b.imag())
}

pub fn mul(a: Value, b: Value) -> Value {
    if a.rank() == Rank::Real && b.rank() == Rank::Real {
        return Value::from(a.real() * b.real());
    }
    Value::new(
        a.real() * b.real() - a.imag() * b.imag(),
        a.real() * b.imag() + a.imag() * b.real(),
    )
}

/// Divides `a` by `b`.
///
/// Division by a real divisor is done component-wise, so dividing by zero
/// follows IEEE rules (infinity for a non-zero numerator, NaN for 0/0).
pub fn div(a: Value, b: Value) -> Value {
    if b.rank() == Rank::Real {
        return Value::new(a.real() / b.real(), a.imag() / b.real());
    }
    let denom = b.real() * b.real() + b.imag() * b.imag();
    Value::new(
        (a.real() * b.real() + a.imag() * b.imag()) / denom,
        (a.imag() * b.real() - a.real() * b.imag()) / denom,
    )
}

pub fn neg(a: Value) -> Value {
    Value::new(-a.real(), -a.imag())
}

pub fn conj(a: Value) -> Value {
    if a.rank() == Rank::Real {
        return a;
    }
    Value::new(a.real(), -a.imag())
}

/// Modulus `|a|`.
pub fn abs(a: Value) -> Real {
    if a.rank() == Rank::Real {
        return libm_abs(a.real());
    }
    libm_hypot(a.real(), a.imag())
}

/// Principal argument of `a` in `(-pi, pi]`.
pub fn arg(a: Value) -> Real {
    libm_atan2(a.imag(), a.real())
}

pub fn exp(a: Value) -> Value {
    let scale = libm_exp(a.real());
    if a.rank() == Rank::Real {
        return Value::from(scale);
    }
    Value::new(scale * libm_cos(a.imag()), scale * libm_sin(a.imag()))
}

/// Principal natural logarithm.
pub fn ln(a: Value) -> Value {
    if a.rank() == Rank::Real && a.real() > 0.0 {
        return Value::from(libm_ln(a.real()));
    }
    Value::new(libm_ln(abs(a)), arg(a))
}

/// Principal square root. `sqrt(-4)` is `2i`.
pub fn sqrt(a: Value) -> Value {
    if a.rank() == Rank::Real {
        if a.real() >= 0.0 {
            return Value::from(libm_sqrt(a.real()));
        }
        return Value::new(0.0, libm_sqrt(-a.real()));
    }
    let modulus = abs(a);
    let re = libm_sqrt((modulus + a.real()) / 2.0);
    let im = libm_sqrt((modulus - a.real()) / 2.0);
    Value::new(re, if a.imag() < 0.0 { -im } else { im })
}

/// Raises `a` to the power `b`.
///
/// `0^0` is 1 and `0^b` is 0 for any `b` with a positive real part.
pub fn pow(a: Value, b: Value) -> Value {
    if a.rank() == Rank::Real && b.rank() == Rank::Real {
        let exponent = b.real();
        if a.real() >= 0.0 || libm_trunc(exponent) == exponent {
            return Value::from(libm_pow(a.real(), exponent));
        }
    }
    if b.is_zero() {
        return Value::ONE;
    }
    if a.is_zero() {
        if b.real() > 0.0 {
            return Value::ZERO;
        }
        return Value::from(Real::INFINITY);
    }
    exp(mul(b, ln(a)))
}

pub fn sin(a: Value) -> Value {
    if a.rank() == Rank::Real {
        return Value::from(libm_sin(a.real()));
    }
    Value::new(
        libm_sin(a.real()) * libm_cosh(a.imag()),
        libm_cos(a.real()) * libm_sinh(a.imag()),
    )
}

pub fn cos(a: Value) -> Value {
    if a.rank() == Rank::Real {
        return Value::from(libm_cos(a.real()));
    }
    Value::new(
        libm_cos(a.real()) * libm_cosh(a.imag()),
        -libm_sin(a.real()) * libm_sinh(a.imag()),
    )
}

pub fn tan(a: Value) -> Value {
    if a.rank() == Rank::Real {
        return Value::from(libm_tan(a.real()));
    }
    div(sin(a), cos(a))
}

/// `asin(z) = -i ln(iz + sqrt(1 - z^2))`
pub fn asin(a: Value) -> Value {
    if a.rank() == Rank::Real && (-1.0..=1.0).contains(&a.real()) {
        return Value::from(libm_asin(a.real()));
    }
    let iz = mul(Value::I, a);
    let root = sqrt(sub(Value::ONE, mul(a, a)));
    mul(Value::new(0.0, -1.0), ln(add(iz, root)))
}

/// `acos(z) = pi/2 - asin(z)`
pub fn acos(a: Value) -> Value {
    if a.rank() == Rank::Real && (-1.0..=1.0).contains(&a.real()) {
        return Value::from(libm_acos(a.real()));
    }
    sub(Value::from(PI / 2.0), asin(a))
}

/// `atan(z) = (i/2) (ln(1 - iz) - ln(1 + iz))`
pub fn atan(a: Value) -> Value {
    if a.rank() == Rank::Real {
        return Value::from(libm_atan(a.real()));
    }
    let iz = mul(Value::I, a);
    let diff = sub(ln(sub(Value::ONE, iz)), ln(add(Value::ONE, iz)));
    mul(Value::new(0.0, 0.5), diff)
}

pub fn sinh(a: Value) -> Value {
    if a.rank() == Rank::Real {
        return Value::from(libm_sinh(a.real()));
    }
    Value::new(
        libm_sinh(a.real()) * libm_cos(a.imag()),
        libm_cosh(a.real()) * libm_sin(a.imag()),
    )
}

pub fn cosh(a: Value) -> Value {
    if a.rank() == Rank::Real {
        return Value::from(libm_cosh(a.real()));
    }
    Value::new(
        libm_cosh(a.real()) * libm_cos(a.imag()),
        libm_sinh(a.real()) * libm_sin(a.imag()),
    )
}

pub fn tanh(a: Value) -> Value {
    if a.rank() == Rank::Real {
        return Value::from(libm_tanh(a.real()));
    }
    div(sinh(a), cosh(a))
}

/// `asinh(z) = ln(z + sqrt(z^2 + 1))`
pub fn asinh(a: Value) -> Value {
    if a.rank() == Rank::Real {
        return Value::from(libm_asinh(a.real()));
    }
    ln(add(a, sqrt(add(mul(a, a), Value::ONE))))
}

/// `acosh(z) = ln(z + sqrt(z + 1) sqrt(z - 1))`
pub fn acosh(a: Value) -> Value {
    if a.rank() == Rank::Real && a.real() >= 1.0 {
        return Value::from(libm_acosh(a.real()));
    }
    let root = mul(sqrt(add(a, Value::ONE)), sqrt(sub(a, Value::ONE)));
    ln(add(a, root))
}

/// `atanh(z) = (ln(1 + z) - ln(1 - z)) / 2`
pub fn atanh(a: Value) -> Value {
    if a.rank() == Rank::Real && a.real() > -1.0 && a.real() < 1.0 {
        return Value::from(libm_atanh(a.real()));
    }
    let diff = sub(ln(add(Value::ONE, a)), ln(sub(Value::ONE, a)));
    mul(Value::from(0.5), diff)
}
