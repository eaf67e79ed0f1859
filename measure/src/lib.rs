//! # Measure
//!
//! **Units of measurement and exact conversion between them**
//!
//! Measure models physical units as immutable values that remember how they
//! were derived: from independent base units, as products and powers of other
//! units, or by scaling and offsetting a system unit. From two compatible units
//! it builds the converter that maps magnitudes from one to the other.
//!
//! ## Quick Start
//!
//! ```rust
//! use measure::{si, MeasureResult};
//! use rust_decimal::Decimal;
//!
//! fn main() -> MeasureResult<()> {
//!     let kilogram = si::kilogram();
//!     let gram = si::gram();
//!
//!     let converter = kilogram.converter_to(&gram)?;
//!     assert_eq!(converter.convert(Decimal::ONE)?, Decimal::from(1000));
//!
//!     let celsius = si::celsius();
//!     let to_kelvin = celsius.converter_to(&si::kelvin())?;
//!     assert_eq!(to_kelvin.convert(Decimal::ZERO)?, Decimal::new(27315, 2));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Dimensions
//! A [`Dimension`] is a monomial over fundamental symbols such as `[L]` and
//! `[T]`. Units of different dimensions are never convertible.
//!
//! ### Units
//! A [`Unit`] is a base unit, an alternate unit, a product of units, or a
//! transformed unit. Products are kept in canonical form, so `m·m` equals
//! `m²` and `m/m` equals `one`.
//!
//! ### Converters
//! A [`UnitConverter`] is an invertible numeric transform. Composing a
//! converter with its inverse always yields the identity.
//!
//! ### Quantity kinds
//! Kinds such as [`quantity::Length`] tag units at the type level after a
//! dimension check. A [`SystemOfUnits`] maps kinds to default units.

pub mod converter;
pub mod dimension;
pub mod error;
pub mod monomial;
pub mod prefix;
pub mod quantity;
pub mod si;
pub mod system;
pub mod unit;

pub use converter::UnitConverter;
pub use dimension::{Dimension, FundamentalSymbol};
pub use error::MeasureError;
pub use prefix::{BinaryPrefix, MetricPrefix};
pub use quantity::{Quantity, QuantityUnit};
pub use system::{SystemOfUnits, SystemOfUnitsBuilder};
pub use unit::{AlternateUnit, BaseUnit, ProductUnit, TransformedUnit, Unit, UnitKind};

/// Result type for unit operations
pub type MeasureResult<T> = Result<T, MeasureError>;

#[cfg(test)]
mod tests;
