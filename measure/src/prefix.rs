//! Metric and binary prefixes
//!
//! A prefix scales a unit by an exact power of ten or of 1024. Prefixes
//! above one multiply, those below one divide, so both directions stay
//! exact `Rational` converters.

use crate::unit::Unit;
use crate::MeasureResult;
use rust_decimal::Decimal;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricPrefix {
    Yotta,
    Zetta,
    Exa,
    Peta,
    Tera,
    Giga,
    Mega,
    Kilo,
    Hecto,
    Deka,
    Deci,
    Centi,
    Milli,
    Micro,
    Nano,
    Pico,
    Femto,
    Atto,
    Zepto,
    Yocto,
}

impl MetricPrefix {
    pub const ALL: [MetricPrefix; 20] = [
        MetricPrefix::Yotta,
        MetricPrefix::Zetta,
        MetricPrefix::Exa,
        MetricPrefix::Peta,
        MetricPrefix::Tera,
        MetricPrefix::Giga,
        MetricPrefix::Mega,
        MetricPrefix::Kilo,
        MetricPrefix::Hecto,
        MetricPrefix::Deka,
        MetricPrefix::Deci,
        MetricPrefix::Centi,
        MetricPrefix::Milli,
        MetricPrefix::Micro,
        MetricPrefix::Nano,
        MetricPrefix::Pico,
        MetricPrefix::Femto,
        MetricPrefix::Atto,
        MetricPrefix::Zepto,
        MetricPrefix::Yocto,
    ];

    /// Power of ten this prefix stands for
    pub fn exponent(self) -> i32 {
        match self {
            MetricPrefix::Yotta => 24,
            MetricPrefix::Zetta => 21,
            MetricPrefix::Exa => 18,
            MetricPrefix::Peta => 15,
            MetricPrefix::Tera => 12,
            MetricPrefix::Giga => 9,
            MetricPrefix::Mega => 6,
            MetricPrefix::Kilo => 3,
            MetricPrefix::Hecto => 2,
            MetricPrefix::Deka => 1,
            MetricPrefix::Deci => -1,
            MetricPrefix::Centi => -2,
            MetricPrefix::Milli => -3,
            MetricPrefix::Micro => -6,
            MetricPrefix::Nano => -9,
            MetricPrefix::Pico => -12,
            MetricPrefix::Femto => -15,
            MetricPrefix::Atto => -18,
            MetricPrefix::Zepto => -21,
            MetricPrefix::Yocto => -24,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            MetricPrefix::Yotta => "Y",
            MetricPrefix::Zetta => "Z",
            MetricPrefix::Exa => "E",
            MetricPrefix::Peta => "P",
            MetricPrefix::Tera => "T",
            MetricPrefix::Giga => "G",
            MetricPrefix::Mega => "M",
            MetricPrefix::Kilo => "k",
            MetricPrefix::Hecto => "h",
            MetricPrefix::Deka => "da",
            MetricPrefix::Deci => "d",
            MetricPrefix::Centi => "c",
            MetricPrefix::Milli => "m",
            MetricPrefix::Micro => "µ",
            MetricPrefix::Nano => "n",
            MetricPrefix::Pico => "p",
            MetricPrefix::Femto => "f",
            MetricPrefix::Atto => "a",
            MetricPrefix::Zepto => "z",
            MetricPrefix::Yocto => "y",
        }
    }

    /// `10^|exponent|`
    fn magnitude(self) -> Decimal {
        Decimal::from_i128_with_scale(10i128.pow(self.exponent().unsigned_abs()), 0)
    }

    /// The value of one prefixed unit in the unprefixed unit
    pub fn factor(self) -> Decimal {
        let exponent = self.exponent();
        if exponent > 0 {
            self.magnitude()
        } else {
            Decimal::new(1, exponent.unsigned_abs())
        }
    }

    /// `Kilo.apply(&metre)` is the kilometre
    pub fn apply(self, unit: &Unit) -> MeasureResult<Unit> {
        if self.exponent() > 0 {
            unit.multiply(self.magnitude())
        } else {
            unit.divide(self.magnitude())
        }
    }
}

impl fmt::Display for MetricPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// IEC prefixes: powers of 1024
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryPrefix {
    Kibi,
    Mebi,
    Gibi,
    Tebi,
    Pebi,
    Exbi,
    Zebi,
    Yobi,
}

impl BinaryPrefix {
    pub const ALL: [BinaryPrefix; 8] = [
        BinaryPrefix::Kibi,
        BinaryPrefix::Mebi,
        BinaryPrefix::Gibi,
        BinaryPrefix::Tebi,
        BinaryPrefix::Pebi,
        BinaryPrefix::Exbi,
        BinaryPrefix::Zebi,
        BinaryPrefix::Yobi,
    ];

    /// Power of 1024 this prefix stands for
    pub fn exponent(self) -> u32 {
        match self {
            BinaryPrefix::Kibi => 1,
            BinaryPrefix::Mebi => 2,
            BinaryPrefix::Gibi => 3,
            BinaryPrefix::Tebi => 4,
            BinaryPrefix::Pebi => 5,
            BinaryPrefix::Exbi => 6,
            BinaryPrefix::Zebi => 7,
            BinaryPrefix::Yobi => 8,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryPrefix::Kibi => "Ki",
            BinaryPrefix::Mebi => "Mi",
            BinaryPrefix::Gibi => "Gi",
            BinaryPrefix::Tebi => "Ti",
            BinaryPrefix::Pebi => "Pi",
            BinaryPrefix::Exbi => "Ei",
            BinaryPrefix::Zebi => "Zi",
            BinaryPrefix::Yobi => "Yi",
        }
    }

    pub fn factor(self) -> Decimal {
        Decimal::from_i128_with_scale(1i128 << (10 * self.exponent()), 0)
    }

    pub fn apply(self, unit: &Unit) -> MeasureResult<Unit> {
        unit.multiply(self.factor())
    }
}

impl fmt::Display for BinaryPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
