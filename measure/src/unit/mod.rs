//! Units of measurement
//!
//! A [`Unit`] records how it was derived. There are four kinds:
//! - **Base**: an independent system unit (metre, second)
//! - **Alternate**: a system unit with the dimension of its parent but a
//!   different nature (radian and steradian are both dimensionless)
//! - **Product**: a canonical monomial of other units (`m·kg/s²`)
//! - **Transformed**: a system unit viewed through a converter (gram, °C)
//!
//! Units are immutable and share their structure through `Arc`; every
//! operation returns a new unit.

mod product;
mod resolve;

pub use product::ProductUnit;

use crate::converter::UnitConverter;
use crate::dimension::Dimension;
use crate::monomial::Monomial;
use crate::quantity::Quantity;
use crate::{MeasureError, MeasureResult};
use rust_decimal::Decimal;
use std::fmt;
use std::ops::{Div, Mul};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Unit(Arc<UnitKind>);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UnitKind {
    Base(BaseUnit),
    Alternate(AlternateUnit),
    Product(ProductUnit),
    Transformed(TransformedUnit),
}

/// An independent system unit with its own symbol and dimension
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseUnit {
    symbol: String,
    dimension: Dimension,
}

impl BaseUnit {
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn dimension(&self) -> &Dimension {
        &self.dimension
    }
}

/// A system unit of the same dimension as its parent but of another nature
///
/// The parent is always an unscaled system unit and never itself an
/// alternate unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlternateUnit {
    parent: Unit,
    symbol: String,
}

impl AlternateUnit {
    pub fn parent(&self) -> &Unit {
        &self.parent
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

/// A system unit seen through a non-identity converter
///
/// The converter maps magnitudes of this unit to magnitudes of the parent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransformedUnit {
    parent: Unit,
    converter: UnitConverter,
}

impl TransformedUnit {
    pub fn parent(&self) -> &Unit {
        &self.parent
    }

    pub fn converter(&self) -> &UnitConverter {
        &self.converter
    }
}

impl Unit {
    fn from_kind(kind: UnitKind) -> Self {
        Unit(Arc::new(kind))
    }

    /// Create a base unit
    pub fn base(symbol: impl Into<String>, dimension: Dimension) -> Self {
        Self::from_kind(UnitKind::Base(BaseUnit {
            symbol: symbol.into(),
            dimension,
        }))
    }

    /// The dimensionless unit: an empty product
    pub fn one() -> Self {
        Self::from_kind(UnitKind::Product(ProductUnit::empty()))
    }

    /// Create an alternate unit over `parent`
    ///
    /// `parent` must be a system unit. An alternate of an alternate is
    /// attached to the innermost parent.
    pub fn alternate_of(parent: &Unit, symbol: impl Into<String>) -> MeasureResult<Self> {
        if !parent.is_system_unit() {
            return Err(MeasureError::invalid_derivation(format!(
                "The parent unit {} is not an unscaled system unit",
                parent
            )));
        }
        let parent = match parent.kind() {
            UnitKind::Alternate(alternate) => alternate.parent.clone(),
            _ => parent.clone(),
        };
        Ok(Self::from_kind(UnitKind::Alternate(AlternateUnit {
            parent,
            symbol: symbol.into(),
        })))
    }

    /// Create a transformed unit over the system unit `parent`
    pub fn transformed(parent: &Unit, converter: UnitConverter) -> MeasureResult<Self> {
        if !parent.is_system_unit() {
            return Err(MeasureError::invalid_derivation(format!(
                "The parent unit {} is not a system unit",
                parent
            )));
        }
        if converter.is_identity() {
            return Err(MeasureError::invalid_derivation(format!(
                "A transformed unit over {} needs a non-identity converter",
                parent
            )));
        }
        Ok(Self::from_kind(UnitKind::Transformed(TransformedUnit {
            parent: parent.clone(),
            converter,
        })))
    }

    /// Alternate unit for tables whose parents are known system units
    pub(crate) fn alternate_unchecked(parent: &Unit, symbol: &str) -> Self {
        debug_assert!(parent.is_system_unit());
        Self::from_kind(UnitKind::Alternate(AlternateUnit {
            parent: parent.clone(),
            symbol: symbol.to_string(),
        }))
    }

    /// Transformed unit for tables whose parents are known system units
    pub(crate) fn transformed_unchecked(parent: &Unit, converter: UnitConverter) -> Self {
        debug_assert!(parent.is_system_unit() && !converter.is_identity());
        Self::from_kind(UnitKind::Transformed(TransformedUnit {
            parent: parent.clone(),
            converter,
        }))
    }

    /// Product of system units for tables whose powers are known to be small
    ///
    /// The dimension is the one of the quantity kind `Q` instead of being
    /// derived from the factors.
    pub(crate) fn system_product<Q: Quantity>(factors: &[(Unit, i8)]) -> Self {
        debug_assert!(factors.iter().all(|(unit, _)| {
            unit.is_system_unit() && !matches!(unit.kind(), UnitKind::Product(_))
        }));
        let monomial = Monomial::from_powers(factors.iter().cloned());
        debug_assert!(monomial.as_single().is_none());
        debug_assert!(ProductUnit::new(monomial.clone())
            .map(|product| *product.dimension() == Q::dimension())
            .unwrap_or(false));
        Self::from_kind(UnitKind::Product(ProductUnit::of_system_units(
            monomial,
            Q::dimension(),
        )))
    }

    pub fn kind(&self) -> &UnitKind {
        &self.0
    }

    /// Symbol of a base or alternate unit
    pub fn symbol(&self) -> Option<&str> {
        match self.kind() {
            UnitKind::Base(base) => Some(base.symbol()),
            UnitKind::Alternate(alternate) => Some(alternate.symbol()),
            UnitKind::Product(_) | UnitKind::Transformed(_) => None,
        }
    }

    pub fn is_one(&self) -> bool {
        matches!(self.kind(), UnitKind::Product(p) if p.is_empty())
    }

    pub fn dimension(&self) -> Dimension {
        match self.kind() {
            UnitKind::Base(base) => base.dimension.clone(),
            UnitKind::Alternate(alternate) => alternate.parent.dimension(),
            UnitKind::Product(product) => product.dimension().clone(),
            UnitKind::Transformed(transformed) => transformed.parent.dimension(),
        }
    }

    /// The unscaled unit of the same nature
    pub fn system_unit(&self) -> Unit {
        match self.kind() {
            UnitKind::Base(_) | UnitKind::Alternate(_) => self.clone(),
            UnitKind::Product(product) => product
                .system_unit()
                .cloned()
                .unwrap_or_else(|| self.clone()),
            UnitKind::Transformed(transformed) => transformed.parent.system_unit(),
        }
    }

    /// Converter from this unit to its system unit
    ///
    /// Fails for a product holding a scaled unit with a fractional exponent
    /// or a non-linear converter.
    pub fn to_system_unit(&self) -> MeasureResult<UnitConverter> {
        match self.kind() {
            UnitKind::Base(_) => Ok(UnitConverter::IDENTITY),
            UnitKind::Alternate(alternate) => alternate.parent.to_system_unit(),
            UnitKind::Product(product) => product.to_system_unit(),
            UnitKind::Transformed(transformed) => Ok(transformed
                .parent
                .to_system_unit()?
                .concatenate(&transformed.converter)),
        }
    }

    pub fn is_system_unit(&self) -> bool {
        match self.kind() {
            UnitKind::Base(_) | UnitKind::Alternate(_) => true,
            UnitKind::Transformed(_) => false,
            UnitKind::Product(product) => product.system_unit().is_none(),
        }
    }

    /// Offset this unit: `unit.shift(273.15)` on kelvin is °C
    pub fn shift(&self, offset: impl Into<Decimal>) -> MeasureResult<Unit> {
        let offset = offset.into();
        if offset.is_zero() {
            return Ok(self.clone());
        }
        self.transform(UnitConverter::add(offset)?)
    }

    /// Scale this unit by `factor`: `metre.multiply(1000)` is the kilometre
    pub fn multiply(&self, factor: impl Into<Decimal>) -> MeasureResult<Unit> {
        let factor = factor.into();
        if factor == Decimal::ONE {
            return Ok(self.clone());
        }
        if factor.fract().is_zero() {
            return self.transform(UnitConverter::rational(factor, Decimal::ONE)?);
        }
        self.transform(UnitConverter::multiply(factor)?)
    }

    /// Divide this unit by `divisor`: `kilogram.divide(1000)` is the gram
    pub fn divide(&self, divisor: impl Into<Decimal>) -> MeasureResult<Unit> {
        let divisor = divisor.into();
        if divisor == Decimal::ONE {
            return Ok(self.clone());
        }
        if divisor.fract().is_zero() {
            let converter = if divisor.is_sign_negative() {
                UnitConverter::rational(-Decimal::ONE, -divisor)?
            } else {
                UnitConverter::rational(Decimal::ONE, divisor)?
            };
            return self.transform(converter);
        }
        self.transform(UnitConverter::divide(divisor)?)
    }

    /// Derive a unit whose magnitudes map to this unit's through `converter`
    ///
    /// The result always hangs directly off the system unit; a transform that
    /// cancels out yields the system unit itself.
    pub fn transform(&self, converter: UnitConverter) -> MeasureResult<Unit> {
        let system_unit = self.system_unit();
        let to_system = self.to_system_unit()?.concatenate(&converter);
        if to_system.is_identity() {
            return Ok(system_unit);
        }
        Ok(Self::from_kind(UnitKind::Transformed(TransformedUnit {
            parent: system_unit,
            converter: to_system,
        })))
    }

    /// A new system unit of the same dimension but a different nature
    pub fn alternate(&self, symbol: impl Into<String>) -> MeasureResult<Unit> {
        Unit::alternate_of(self, symbol)
    }

    /// Fails with an arithmetic error if a combined exponent overflows
    pub fn product(&self, other: &Unit) -> MeasureResult<Unit> {
        if self.is_one() {
            return Ok(other.clone());
        }
        if other.is_one() {
            return Ok(self.clone());
        }
        Self::from_monomial(self.monomial().multiply(&other.monomial())?)
    }

    pub fn quotient(&self, other: &Unit) -> MeasureResult<Unit> {
        if other.is_one() {
            return Ok(self.clone());
        }
        Self::from_monomial(self.monomial().divide(&other.monomial())?)
    }

    /// `one / self`
    pub fn inverse(&self) -> Unit {
        let reciprocal = match self.kind() {
            UnitKind::Product(product) => product.reciprocal(),
            _ => ProductUnit::reciprocal_of(self),
        };
        match reciprocal.monomial().as_single() {
            Some(unit) => unit.clone(),
            None => Self::from_kind(UnitKind::Product(reciprocal)),
        }
    }

    /// Raise to an integer power; `pow(0)` is [`Unit::one`]
    ///
    /// Fails with an arithmetic error when an exponent overflows.
    pub fn pow(&self, n: i32) -> MeasureResult<Unit> {
        Self::from_monomial(self.monomial().pow(n)?)
    }

    /// Take the `n`th root; `root(0)` is an arithmetic error
    pub fn root(&self, n: i32) -> MeasureResult<Unit> {
        Self::from_monomial(self.monomial().root(n)?)
    }

    pub(crate) fn raised(&self, pow: i32, root: i32) -> MeasureResult<Unit> {
        Self::from_monomial(self.monomial().raised(pow, root)?)
    }

    fn monomial(&self) -> Monomial<Unit> {
        match self.kind() {
            UnitKind::Product(product) => product.monomial().clone(),
            _ => Monomial::of(self.clone()),
        }
    }

    /// Canonical unit for a monomial: the empty product is `one` and a single
    /// factor to the first power is the bare unit
    fn from_monomial(monomial: Monomial<Unit>) -> MeasureResult<Unit> {
        if let Some(unit) = monomial.as_single() {
            return Ok(unit.clone());
        }
        Ok(Self::from_kind(UnitKind::Product(ProductUnit::new(
            monomial,
        )?)))
    }
}

impl Mul for &Unit {
    type Output = MeasureResult<Unit>;

    fn mul(self, rhs: &Unit) -> MeasureResult<Unit> {
        self.product(rhs)
    }
}

impl Mul for Unit {
    type Output = MeasureResult<Unit>;

    fn mul(self, rhs: Unit) -> MeasureResult<Unit> {
        self.product(&rhs)
    }
}

impl Div for &Unit {
    type Output = MeasureResult<Unit>;

    fn div(self, rhs: &Unit) -> MeasureResult<Unit> {
        self.quotient(rhs)
    }
}

impl Div for Unit {
    type Output = MeasureResult<Unit>;

    fn div(self, rhs: Unit) -> MeasureResult<Unit> {
        self.quotient(&rhs)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            UnitKind::Base(base) => write!(f, "{}", base.symbol),
            UnitKind::Alternate(alternate) => write!(f, "{}", alternate.symbol),
            UnitKind::Product(product) => write!(f, "{}", product),
            UnitKind::Transformed(transformed) => {
                write!(f, "{}[{}]", transformed.parent, transformed.converter)
            }
        }
    }
}
