use super::Unit;
use crate::converter::UnitConverter;
use crate::dimension::Dimension;
use crate::monomial::{write_monomial, Element, Monomial};
use crate::{MeasureError, MeasureResult};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A canonical monomial of units, such as `m·kg/s²`
///
/// Elements are unique units with a reduced rational exponent. Equality does
/// not depend on the order of the elements. The dimension and system unit are
/// derived once, when the product is built, so exponent overflow surfaces
/// there and not on later queries.
#[derive(Debug, Clone)]
pub struct ProductUnit {
    elements: Monomial<Unit>,
    dimension: Dimension,
    /// `None` when every element is a system unit
    system: Option<Unit>,
}

impl ProductUnit {
    pub(super) fn empty() -> Self {
        Self {
            elements: Monomial::one(),
            dimension: Dimension::none(),
            system: None,
        }
    }

    pub(super) fn new(elements: Monomial<Unit>) -> MeasureResult<Self> {
        let mut dimension = Dimension::none();
        for e in elements.elements() {
            let factor = e.base().dimension().raised(e.pow(), e.root())?;
            dimension = dimension.multiply(&factor)?;
        }

        let system = if elements.elements().iter().all(|e| e.base().is_system_unit()) {
            None
        } else {
            let mut system = Monomial::one();
            for e in elements.elements() {
                let factor = e.base().system_unit().monomial().raised(e.pow(), e.root())?;
                system = system.multiply(&factor)?;
            }
            Some(Unit::from_monomial(system)?)
        };

        Ok(Self {
            elements,
            dimension,
            system,
        })
    }

    /// A product of system units whose dimension is already known
    pub(super) fn of_system_units(elements: Monomial<Unit>, dimension: Dimension) -> Self {
        Self {
            elements,
            dimension,
            system: None,
        }
    }

    /// `unit⁻¹` as a product, for a unit that is not itself a product
    pub(super) fn reciprocal_of(unit: &Unit) -> Self {
        let system = if unit.is_system_unit() {
            None
        } else {
            Some(unit.system_unit().inverse())
        };
        Self {
            elements: Monomial::of(unit.clone()).reciprocal(),
            dimension: unit.dimension().reciprocal(),
            system,
        }
    }

    pub(super) fn reciprocal(&self) -> Self {
        Self {
            elements: self.elements.reciprocal(),
            dimension: self.dimension.reciprocal(),
            system: self.system.as_ref().map(Unit::inverse),
        }
    }

    pub(super) fn monomial(&self) -> &Monomial<Unit> {
        &self.elements
    }

    pub fn elements(&self) -> &[Element<Unit>] {
        self.elements.elements()
    }

    pub fn unit_count(&self) -> usize {
        self.elements.elements().len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_one()
    }

    pub(super) fn dimension(&self) -> &Dimension {
        &self.dimension
    }

    /// The system unit, or `None` if this product already is one
    pub(super) fn system_unit(&self) -> Option<&Unit> {
        self.system.as_ref()
    }

    /// Each element's converter applied `|pow|` times, inverted for negative
    /// powers
    pub(super) fn to_system_unit(&self) -> MeasureResult<UnitConverter> {
        let mut converter = UnitConverter::IDENTITY;
        for e in self.elements() {
            let mut element_converter = e.base().to_system_unit()?;
            if element_converter.is_identity() {
                continue;
            }
            if !element_converter.is_linear() {
                return Err(MeasureError::unsupported(format!(
                    "{} is non-linear, cannot convert",
                    e.base()
                )));
            }
            if e.root() != 1 {
                return Err(MeasureError::unsupported(format!(
                    "{} is scaled and has a fractional exponent",
                    e.base()
                )));
            }
            if e.pow() < 0 {
                element_converter = element_converter.inverse();
            }
            let powered = repeated(&element_converter, e.pow().unsigned_abs());
            converter = converter.concatenate(&powered);
        }
        Ok(converter)
    }
}

/// `converter` concatenated with itself `times` times, by squaring
fn repeated(converter: &UnitConverter, times: u32) -> UnitConverter {
    let mut result = UnitConverter::IDENTITY;
    let mut square = converter.clone();
    let mut remaining = times;
    while remaining > 0 {
        if remaining & 1 == 1 {
            result = result.concatenate(&square);
        }
        remaining >>= 1;
        if remaining > 0 {
            square = square.concatenate(&square);
        }
    }
    result
}

impl PartialEq for ProductUnit {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl Eq for ProductUnit {}

impl Hash for ProductUnit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements.hash(state);
    }
}

impl fmt::Display for ProductUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_monomial(f, self.elements(), "one")
    }
}
