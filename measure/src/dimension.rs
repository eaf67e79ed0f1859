//! Dimensional analysis
//!
//! A dimension classifies a unit by the fundamental kinds it is made of,
//! independent of scale. It is a monomial over the fundamental symbols and
//! composes exactly like a product unit does.

use crate::monomial::{write_monomial, Monomial};
use crate::MeasureResult;
use std::fmt;
use std::ops::{Div, Mul};

/// A fundamental dimension symbol, rendered as `[L]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FundamentalSymbol(char);

impl FundamentalSymbol {
    pub fn symbol(&self) -> char {
        self.0
    }
}

impl fmt::Display for FundamentalSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Dimension {
    monomial: Monomial<FundamentalSymbol>,
}

impl Dimension {
    /// A fundamental dimension identified by `symbol`
    pub fn new(symbol: char) -> Self {
        Self {
            monomial: Monomial::of(FundamentalSymbol(symbol)),
        }
    }

    /// The dimensionless identity
    pub fn none() -> Self {
        Self {
            monomial: Monomial::one(),
        }
    }

    pub fn length() -> Self {
        Self::new('L')
    }

    pub fn mass() -> Self {
        Self::new('M')
    }

    pub fn time() -> Self {
        Self::new('T')
    }

    pub fn electric_current() -> Self {
        Self::new('I')
    }

    pub fn temperature() -> Self {
        Self::new('Θ')
    }

    pub fn amount_of_substance() -> Self {
        Self::new('N')
    }

    pub fn luminous_intensity() -> Self {
        Self::new('J')
    }

    pub fn is_none(&self) -> bool {
        self.monomial.is_one()
    }

    /// A dimension from `(symbol, power)` pairs: `[('L', 1), ('T', -2)]` is
    /// `[L]/[T]²`
    ///
    /// A repeated symbol adds its powers. Small powers keep this infallible,
    /// so quantity kinds can state their dimension directly.
    pub fn from_powers(powers: &[(char, i8)]) -> Self {
        Self {
            monomial: Monomial::from_powers(
                powers
                    .iter()
                    .map(|&(symbol, pow)| (FundamentalSymbol(symbol), pow)),
            ),
        }
    }

    pub fn multiply(&self, other: &Dimension) -> MeasureResult<Dimension> {
        Ok(Self {
            monomial: self.monomial.multiply(&other.monomial)?,
        })
    }

    pub fn divide(&self, other: &Dimension) -> MeasureResult<Dimension> {
        Ok(Self {
            monomial: self.monomial.divide(&other.monomial)?,
        })
    }

    pub fn reciprocal(&self) -> Dimension {
        Self {
            monomial: self.monomial.reciprocal(),
        }
    }

    /// Raise to an integer power; `pow(0)` is [`Dimension::none`]
    ///
    /// Fails with an arithmetic error when an exponent overflows.
    pub fn pow(&self, n: i32) -> MeasureResult<Dimension> {
        Ok(Self {
            monomial: self.monomial.pow(n)?,
        })
    }

    /// Take the `n`th root; `root(0)` is an arithmetic error
    pub fn root(&self, n: i32) -> MeasureResult<Dimension> {
        Ok(Self {
            monomial: self.monomial.root(n)?,
        })
    }

    pub(crate) fn raised(&self, pow: i32, root: i32) -> MeasureResult<Dimension> {
        Ok(Self {
            monomial: self.monomial.raised(pow, root)?,
        })
    }

    /// Fundamental symbols with their `(pow, root)` exponents
    pub fn exponents(&self) -> impl Iterator<Item = (char, i32, i32)> + '_ {
        self.monomial
            .elements()
            .iter()
            .map(|e| (e.base().symbol(), e.pow(), e.root()))
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::none()
    }
}

impl Mul for &Dimension {
    type Output = MeasureResult<Dimension>;

    fn mul(self, rhs: &Dimension) -> MeasureResult<Dimension> {
        self.multiply(rhs)
    }
}

impl Div for &Dimension {
    type Output = MeasureResult<Dimension>;

    fn div(self, rhs: &Dimension) -> MeasureResult<Dimension> {
        self.divide(rhs)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_monomial(f, self.monomial.elements(), "1")
    }
}
