//! Payloads of the converter variants
//!
//! Fields are private: the only way to obtain a payload is through its
//! validating constructor, so a non-identity variant can never hold
//! parameters that make it the identity.

use super::decimal::{clean, gcd, is_integral};
use super::UnitConverter;
use crate::{MeasureError, MeasureResult};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Adds a constant offset (`x + offset`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddConverter {
    offset: Decimal,
}

impl AddConverter {
    pub fn new(offset: Decimal) -> MeasureResult<Self> {
        if offset.is_zero() {
            return Err(MeasureError::degenerate(
                "Add(0) would result in the identity converter",
            ));
        }
        Ok(Self {
            offset: clean(offset),
        })
    }

    pub fn offset(&self) -> Decimal {
        self.offset
    }

    /// Build from an offset already known to be non-zero
    pub(super) fn unchecked(offset: Decimal) -> Self {
        Self {
            offset: clean(offset),
        }
    }

    pub(super) fn negated(&self) -> Self {
        Self {
            offset: -self.offset,
        }
    }
}

/// Multiplies by a constant factor (`x * factor`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MultiplyConverter {
    factor: Decimal,
}

impl MultiplyConverter {
    pub fn new(factor: Decimal) -> MeasureResult<Self> {
        validate_factor("Multiply", factor)?;
        Ok(Self {
            factor: clean(factor),
        })
    }

    pub fn factor(&self) -> Decimal {
        self.factor
    }
}

/// Divides by a constant factor (`x / factor`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DivideConverter {
    factor: Decimal,
}

impl DivideConverter {
    pub fn new(factor: Decimal) -> MeasureResult<Self> {
        validate_factor("Divide", factor)?;
        Ok(Self {
            factor: clean(factor),
        })
    }

    pub fn factor(&self) -> Decimal {
        self.factor
    }
}

impl From<&DivideConverter> for MultiplyConverter {
    fn from(divide: &DivideConverter) -> Self {
        Self {
            factor: divide.factor,
        }
    }
}

impl From<&MultiplyConverter> for DivideConverter {
    fn from(multiply: &MultiplyConverter) -> Self {
        Self {
            factor: multiply.factor,
        }
    }
}

fn validate_factor(name: &str, factor: Decimal) -> MeasureResult<()> {
    if factor == Decimal::ONE {
        return Err(MeasureError::degenerate(format!(
            "{}(1) would result in the identity converter",
            name
        )));
    }
    if factor.is_zero() {
        return Err(MeasureError::degenerate(format!(
            "{}(0) is not invertible",
            name
        )));
    }
    Ok(())
}

/// Multiplies by an exact fraction (`x * dividend / divisor`)
///
/// The divisor is always positive. The fraction is kept in lowest terms, so
/// `2/20`, `0.5/5` and `1/10` are the same converter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RationalConverter {
    dividend: Decimal,
    divisor: Decimal,
}

impl RationalConverter {
    pub fn new(dividend: Decimal, divisor: Decimal) -> MeasureResult<Self> {
        if divisor <= Decimal::ZERO {
            return Err(MeasureError::degenerate(format!(
                "Negative or zero divisor {}",
                divisor
            )));
        }
        if dividend == divisor {
            return Err(MeasureError::degenerate(
                "Equal dividend and divisor would result in the identity converter",
            ));
        }
        if dividend.is_zero() {
            return Err(MeasureError::degenerate("Zero dividend is not invertible"));
        }
        Ok(Self::reduced(dividend, divisor))
    }

    /// Build from terms already known to be valid
    ///
    /// Fractional terms are first scaled to integers by the same power of ten,
    /// so `3/1.5` reduces to `2/1`. Terms too large to scale stay as given.
    pub(super) fn reduced(dividend: Decimal, divisor: Decimal) -> Self {
        let (mut dividend, mut divisor) = (clean(dividend), clean(divisor));
        let scale = dividend.scale().max(divisor.scale());
        if scale > 0 {
            let factor = Decimal::from_i128_with_scale(10i128.pow(scale), 0);
            if let (Some(p), Some(q)) =
                (dividend.checked_mul(factor), divisor.checked_mul(factor))
            {
                dividend = clean(p);
                divisor = clean(q);
            }
        }
        if is_integral(dividend) && is_integral(divisor) {
            let common = gcd(dividend, divisor);
            if common > Decimal::ONE {
                dividend = clean(dividend / common);
                divisor = clean(divisor / common);
            }
        }
        Self { dividend, divisor }
    }

    pub fn dividend(&self) -> Decimal {
        self.dividend
    }

    pub fn divisor(&self) -> Decimal {
        self.divisor
    }

    pub(super) fn inverted(&self) -> Self {
        if self.dividend < Decimal::ZERO {
            Self {
                dividend: -self.divisor,
                divisor: -self.dividend,
            }
        } else {
            Self {
                dividend: self.divisor,
                divisor: self.dividend,
            }
        }
    }
}

/// Logarithm in a fixed base (`log_base(x)`); not linear
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogConverter {
    base: Decimal,
}

impl LogConverter {
    pub fn new(base: Decimal) -> MeasureResult<Self> {
        validate_base("Log", base)?;
        Ok(Self { base: clean(base) })
    }

    /// Natural logarithm
    pub fn natural() -> Self {
        Self { base: Decimal::E }
    }

    pub fn base(&self) -> Decimal {
        self.base
    }

    pub fn is_natural(&self) -> bool {
        self.base == Decimal::E
    }
}

/// Exponentiation of a fixed base (`base^x`); not linear
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExpConverter {
    base: Decimal,
}

impl ExpConverter {
    pub fn new(base: Decimal) -> MeasureResult<Self> {
        validate_base("Exp", base)?;
        Ok(Self { base: clean(base) })
    }

    pub fn natural() -> Self {
        Self { base: Decimal::E }
    }

    pub fn base(&self) -> Decimal {
        self.base
    }

    pub fn is_natural(&self) -> bool {
        self.base == Decimal::E
    }
}

impl From<&ExpConverter> for LogConverter {
    fn from(exp: &ExpConverter) -> Self {
        Self { base: exp.base }
    }
}

impl From<&LogConverter> for ExpConverter {
    fn from(log: &LogConverter) -> Self {
        Self { base: log.base }
    }
}

fn validate_base(name: &str, base: Decimal) -> MeasureResult<()> {
    if base <= Decimal::ZERO || base == Decimal::ONE {
        return Err(MeasureError::degenerate(format!(
            "{} base must be positive and different from 1, got {}",
            name, base
        )));
    }
    Ok(())
}

/// Applies `right`, then `left`
///
/// Only built by [`UnitConverter::concatenate`] once no algebraic
/// simplification applies.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompoundConverter {
    left: Arc<UnitConverter>,
    right: Arc<UnitConverter>,
}

impl CompoundConverter {
    pub(super) fn new(left: UnitConverter, right: UnitConverter) -> Self {
        Self {
            left: Arc::new(left),
            right: Arc::new(right),
        }
    }

    pub fn left(&self) -> &UnitConverter {
        &self.left
    }

    pub fn right(&self) -> &UnitConverter {
        &self.right
    }
}
