// ============================================================================
// Float Operations
// Scalar arithmetic with native IEEE-754 double semantics
// ============================================================================

use super::errors::{CalcError, CalcResult};

/// Add two numbers.
///
/// # Example
/// ```
/// use calculator::numeric::add;
///
/// assert_eq!(add(2, 3), 5.0);
/// assert_eq!(add(2.5, 3.7), 6.2);
/// ```
#[inline]
pub fn add(a: impl Into<f64>, b: impl Into<f64>) -> f64 {
    a.into() + b.into()
}

/// Subtract `b` from `a`.
#[inline]
pub fn subtract(a: impl Into<f64>, b: impl Into<f64>) -> f64 {
    a.into() - b.into()
}

/// Multiply two numbers.
#[inline]
pub fn multiply(a: impl Into<f64>, b: impl Into<f64>) -> f64 {
    a.into() * b.into()
}

/// Divide `a` by `b`, always producing a floating-point quotient.
///
/// # Errors
/// Returns `DivisionByZero` if `b` is zero (of either sign).
///
/// # Example
/// ```
/// use calculator::numeric::{divide, CalcError};
///
/// assert_eq!(divide(7, 2), Ok(3.5));
/// assert_eq!(divide(10, 0), Err(CalcError::DivisionByZero));
/// ```
#[inline]
pub fn divide(a: impl Into<f64>, b: impl Into<f64>) -> CalcResult<f64> {
    let b = b.into();
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a.into() / b)
}

/// Raise `base` to `exponent`.
///
/// Follows `f64::powf`: a negative base with a fractional exponent yields
/// NaN, and overflow yields infinity. Nothing is signaled.
#[inline]
pub fn power(base: impl Into<f64>, exponent: impl Into<f64>) -> f64 {
    base.into().powf(exponent.into())
}

/// Floor-style remainder of `a` divided by `b`.
///
/// The result takes the sign of the divisor, so `modulo(-10, 3) == 2` and
/// `modulo(10, -3) == -2`. A zero remainder is signed like the divisor.
///
/// # Errors
/// Returns `ModuloByZero` if `b` is zero (of either sign).
#[inline]
pub fn modulo(a: impl Into<f64>, b: impl Into<f64>) -> CalcResult<f64> {
    let b = b.into();
    if b == 0.0 {
        return Err(CalcError::ModuloByZero);
    }

    // `%` truncates toward zero; shift into the divisor's sign when needed
    let rem = a.into() % b;
    if rem == 0.0 {
        Ok(0.0_f64.copysign(b))
    } else if (rem < 0.0) != (b < 0.0) {
        Ok(rem + b)
    } else {
        Ok(rem)
    }
}

/// Non-negative magnitude of `value`.
#[inline]
pub fn absolute(value: impl Into<f64>) -> f64 {
    value.into().abs()
}

/// The greater of two numbers. Returns `a` when they compare equal.
#[inline]
pub fn maximum(a: impl Into<f64>, b: impl Into<f64>) -> f64 {
    let (a, b) = (a.into(), b.into());
    if b > a {
        b
    } else {
        a
    }
}

/// The lesser of two numbers. Returns `a` when they compare equal.
#[inline]
pub fn minimum(a: impl Into<f64>, b: impl Into<f64>) -> f64 {
    let (a, b) = (a.into(), b.into());
    if b < a {
        b
    } else {
        a
    }
}

// ============================================================================
// Tests
// ============================================================================
