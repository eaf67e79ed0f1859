//! Unit converters
//!
//! A converter is an immutable, invertible numeric transform between the
//! magnitudes of two units. Composition detects algebraic cancellation, so
//! any chain that is mathematically the identity collapses to
//! [`UnitConverter::Identity`] instead of an equivalent compound.

mod decimal;
mod variants;

pub use variants::{
    AddConverter, CompoundConverter, DivideConverter, ExpConverter, LogConverter,
    MultiplyConverter, RationalConverter,
};

use crate::MeasureResult;
use rust_decimal::Decimal;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum UnitConverter {
    #[default]
    Identity,
    Add(AddConverter),
    Multiply(MultiplyConverter),
    Divide(DivideConverter),
    Rational(RationalConverter),
    Log(LogConverter),
    Exp(ExpConverter),
    /// Multiplies by π
    PiMultiplier,
    /// Divides by π
    PiDivisor,
    Compound(CompoundConverter),
}

impl UnitConverter {
    /// The one identity converter
    pub const IDENTITY: UnitConverter = UnitConverter::Identity;

    pub fn add(offset: impl Into<Decimal>) -> MeasureResult<Self> {
        Ok(Self::Add(AddConverter::new(offset.into())?))
    }

    pub fn multiply(factor: impl Into<Decimal>) -> MeasureResult<Self> {
        Ok(Self::Multiply(MultiplyConverter::new(factor.into())?))
    }

    pub fn divide(factor: impl Into<Decimal>) -> MeasureResult<Self> {
        Ok(Self::Divide(DivideConverter::new(factor.into())?))
    }

    pub fn rational(dividend: impl Into<Decimal>, divisor: impl Into<Decimal>) -> MeasureResult<Self> {
        Ok(Self::Rational(RationalConverter::new(
            dividend.into(),
            divisor.into(),
        )?))
    }

    pub fn log(base: impl Into<Decimal>) -> MeasureResult<Self> {
        Ok(Self::Log(LogConverter::new(base.into())?))
    }

    pub fn exp(base: impl Into<Decimal>) -> MeasureResult<Self> {
        Ok(Self::Exp(ExpConverter::new(base.into())?))
    }

    /// Natural logarithm
    pub fn ln() -> Self {
        Self::Log(LogConverter::natural())
    }

    pub fn pi_multiplier() -> Self {
        Self::PiMultiplier
    }

    pub fn pi_divisor() -> Self {
        Self::PiDivisor
    }

    /// Offset for tables whose constants are known to be non-zero
    pub(crate) fn add_unchecked(offset: Decimal) -> Self {
        debug_assert!(!offset.is_zero());
        Self::Add(AddConverter::unchecked(offset))
    }

    /// Fraction for tables whose constants are known to be valid
    pub(crate) fn rational_unchecked(dividend: Decimal, divisor: Decimal) -> Self {
        debug_assert!(divisor > Decimal::ZERO && !dividend.is_zero() && dividend != divisor);
        Self::Rational(RationalConverter::reduced(dividend, divisor))
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, UnitConverter::Identity)
    }

    /// Whether `convert(u + v) == convert(u) + convert(v)` and
    /// `convert(r * u) == r * convert(u)`
    pub fn is_linear(&self) -> bool {
        match self {
            UnitConverter::Add(_) | UnitConverter::Log(_) | UnitConverter::Exp(_) => false,
            UnitConverter::Compound(c) => c.left().is_linear() && c.right().is_linear(),
            _ => true,
        }
    }

    pub fn inverse(&self) -> UnitConverter {
        match self {
            UnitConverter::Identity => UnitConverter::Identity,
            UnitConverter::Add(c) => UnitConverter::Add(AddConverter::negated(c)),
            UnitConverter::Multiply(c) => UnitConverter::Divide(DivideConverter::from(c)),
            UnitConverter::Divide(c) => UnitConverter::Multiply(MultiplyConverter::from(c)),
            UnitConverter::Rational(c) => UnitConverter::Rational(c.inverted()),
            UnitConverter::Log(c) => UnitConverter::Exp(ExpConverter::from(c)),
            UnitConverter::Exp(c) => UnitConverter::Log(LogConverter::from(c)),
            UnitConverter::PiMultiplier => UnitConverter::PiDivisor,
            UnitConverter::PiDivisor => UnitConverter::PiMultiplier,
            UnitConverter::Compound(c) => UnitConverter::Compound(CompoundConverter::new(
                c.right().inverse(),
                c.left().inverse(),
            )),
        }
    }

    /// Convert a magnitude
    ///
    /// Fails on overflow of the decimal context and outside the domain of a
    /// logarithm.
    pub fn convert(&self, value: Decimal) -> MeasureResult<Decimal> {
        match self {
            UnitConverter::Identity => Ok(value),
            UnitConverter::Add(c) => decimal::add(value, c.offset()),
            UnitConverter::Multiply(c) => decimal::mul(value, c.factor()),
            UnitConverter::Divide(c) => decimal::div(value, c.factor()),
            UnitConverter::Rational(c) => {
                // Multiply first to keep exact results exact; fall back to
                // dividing first when the product overflows
                match decimal::mul(value, c.dividend()) {
                    Ok(scaled) => decimal::div(scaled, c.divisor()),
                    Err(_) => decimal::mul(decimal::div(value, c.divisor())?, c.dividend()),
                }
            }
            UnitConverter::Log(c) => {
                if c.is_natural() {
                    decimal::ln(value)
                } else {
                    decimal::div(decimal::ln(value)?, decimal::ln(c.base())?)
                }
            }
            UnitConverter::Exp(c) => {
                if c.is_natural() {
                    decimal::exp(value)
                } else {
                    decimal::exp(decimal::mul(value, decimal::ln(c.base())?)?)
                }
            }
            UnitConverter::PiMultiplier => decimal::mul(value, Decimal::PI),
            UnitConverter::PiDivisor => decimal::div(value, Decimal::PI),
            UnitConverter::Compound(c) => c.left().convert(c.right().convert(value)?),
        }
    }

    /// Compose: apply `other` first, then `self`
    pub fn concatenate(&self, other: &UnitConverter) -> UnitConverter {
        use UnitConverter::*;

        match (self, other) {
            (Identity, _) => return other.clone(),
            (_, Identity) => return self.clone(),

            (Add(a), Add(b)) => {
                return match a.offset().checked_add(b.offset()) {
                    Some(sum) if sum.is_zero() => Identity,
                    Some(sum) => Add(AddConverter::unchecked(sum)),
                    None => self.compound(other),
                };
            }

            (Multiply(a), Multiply(b)) if decimal::product_is(a.factor(), b.factor(), Decimal::ONE) => {
                return Identity
            }
            (Multiply(a), Divide(b)) if a.factor() == b.factor() => return Identity,
            (Multiply(a), Rational(r))
                if decimal::product_is(a.factor(), r.dividend(), r.divisor()) =>
            {
                return Identity
            }

            (Divide(a), Divide(b)) if decimal::product_is(a.factor(), b.factor(), Decimal::ONE) => {
                return Identity
            }
            (Divide(a), Multiply(b)) if a.factor() == b.factor() => return Identity,
            (Divide(a), Rational(r)) if decimal::product_is(a.factor(), r.divisor(), r.dividend()) => {
                return Identity
            }

            (Rational(a), Rational(b)) => {
                let dividend = a.dividend().checked_mul(b.dividend());
                let divisor = a.divisor().checked_mul(b.divisor());
                return match (dividend, divisor) {
                    (Some(p), Some(q)) if p == q => Identity,
                    (Some(p), Some(q)) => Rational(RationalConverter::reduced(p, q)),
                    _ => self.compound(other),
                };
            }
            (Rational(r), Multiply(b)) if decimal::product_is(r.dividend(), b.factor(), r.divisor()) => {
                return Identity
            }
            (Rational(r), Divide(b)) if decimal::product_is(r.divisor(), b.factor(), r.dividend()) => {
                return Identity
            }

            (Log(a), Exp(b)) if a.base() == b.base() => return Identity,
            (Exp(a), Log(b)) if a.base() == b.base() => return Identity,

            (PiMultiplier, PiDivisor) | (PiDivisor, PiMultiplier) => return Identity,

            _ => {}
        }

        if *other == self.inverse() {
            return Identity;
        }

        // Re-associate around compounds when the inner pair simplifies:
        // (l ∘ r) ∘ o = l ∘ (r ∘ o) and s ∘ (l ∘ r) = (s ∘ l) ∘ r
        if let Compound(c) = self {
            let inner = c.right().concatenate(other);
            if !matches!(inner, Compound(_)) {
                return c.left().concatenate(&inner);
            }
        }
        if let Compound(c) = other {
            let inner = self.concatenate(c.left());
            if !matches!(inner, Compound(_)) {
                return inner.concatenate(c.right());
            }
        }

        self.compound(other)
    }

    fn compound(&self, other: &UnitConverter) -> UnitConverter {
        UnitConverter::Compound(CompoundConverter::new(self.clone(), other.clone()))
    }
}

impl fmt::Display for UnitConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitConverter::Identity => write!(f, "Identity"),
            UnitConverter::Add(c) => write!(f, "Add({})", c.offset()),
            UnitConverter::Multiply(c) => write!(f, "Multiply({})", c.factor()),
            UnitConverter::Divide(c) => write!(f, "Divide({})", c.factor()),
            UnitConverter::Rational(c) => write!(f, "Rational({}/{})", c.dividend(), c.divisor()),
            UnitConverter::Log(c) if c.is_natural() => write!(f, "ln"),
            UnitConverter::Log(c) => write!(f, "Log({})", c.base()),
            UnitConverter::Exp(c) if c.is_natural() => write!(f, "exp"),
            UnitConverter::Exp(c) => write!(f, "Exp({})", c.base()),
            UnitConverter::PiMultiplier => write!(f, "(π)"),
            UnitConverter::PiDivisor => write!(f, "(1/π)"),
            UnitConverter::Compound(c) => write!(f, "{} ∘ {}", c.left(), c.right()),
        }
    }
}
