//! Checked decimal arithmetic for converters
//!
//! Every result is normalized so that values reached through different
//! computation paths compare, hash and print identically (`1.50` and `1.5`
//! both become `1.5`).

use crate::{MeasureError, MeasureResult};
use rust_decimal::prelude::*;

/// Strip insignificant trailing fractional zeros
pub(crate) fn clean(value: Decimal) -> Decimal {
    value.normalize()
}

pub(crate) fn add(a: Decimal, b: Decimal) -> MeasureResult<Decimal> {
    a.checked_add(b)
        .map(clean)
        .ok_or_else(|| MeasureError::overflow("addition"))
}

pub(crate) fn mul(a: Decimal, b: Decimal) -> MeasureResult<Decimal> {
    a.checked_mul(b)
        .map(clean)
        .ok_or_else(|| MeasureError::overflow("multiplication"))
}

pub(crate) fn div(a: Decimal, b: Decimal) -> MeasureResult<Decimal> {
    if b.is_zero() {
        return Err(MeasureError::arithmetic("Division by zero"));
    }
    a.checked_div(b)
        .map(clean)
        .ok_or_else(|| MeasureError::overflow("division"))
}

/// `a * b == expected`, treating overflow as "not equal"
pub(crate) fn product_is(a: Decimal, b: Decimal, expected: Decimal) -> bool {
    a.checked_mul(b).is_some_and(|p| p == expected)
}

pub(crate) fn is_integral(value: Decimal) -> bool {
    value.fract().is_zero()
}

/// Greatest common divisor of two integral decimals
pub(crate) fn gcd(a: Decimal, b: Decimal) -> Decimal {
    let (mut m, mut n) = (a.abs(), b.abs());
    while !n.is_zero() {
        let r = m % n;
        m = n;
        n = r;
    }
    m
}

/// Natural logarithm; only defined for positive values
pub(crate) fn ln(value: Decimal) -> MeasureResult<Decimal> {
    if value <= Decimal::ZERO {
        return Err(MeasureError::arithmetic(format!(
            "Logarithm of non-positive value {}",
            value
        )));
    }
    value
        .checked_ln()
        .map(clean)
        .ok_or_else(|| MeasureError::overflow("logarithm"))
}

/// `e^value`; results below the smallest representable decimal are zero
pub(crate) fn exp(value: Decimal) -> MeasureResult<Decimal> {
    match value.checked_exp() {
        Some(result) => Ok(clean(result)),
        None if value.is_sign_negative() => Ok(Decimal::ZERO),
        None => Err(MeasureError::overflow("exponentiation")),
    }
}
