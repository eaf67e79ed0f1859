//! Conversion resolution between two units

use super::{Unit, UnitKind};
use crate::converter::UnitConverter;
use crate::{MeasureError, MeasureResult};
use tracing::{debug, trace};

impl Unit {
    /// Whether magnitudes of `self` can be expressed in `other`
    ///
    /// True for equal units, units sharing a system unit, and units of equal
    /// dimension (`rad` and `one` are compatible but not equal).
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self == other
            || self.system_unit() == other.system_unit()
            || self.dimension() == other.dimension()
    }

    /// The converter taking magnitudes in `self` to magnitudes in `target`
    ///
    /// Units over distinct system units of the same dimension are resolved
    /// through their base-unit expansion: alternate units are unscaled, so
    /// `rad → one` or `N·m → J` contribute the identity. Two different base
    /// units that merely share a dimension are not convertible.
    pub fn converter_to(&self, target: &Unit) -> MeasureResult<UnitConverter> {
        if self == target {
            trace!(unit = %self, "identical units");
            return Ok(UnitConverter::IDENTITY);
        }

        let source_system = self.system_unit();
        let target_system = target.system_unit();
        if source_system == target_system {
            let converter = self.through_system_unit(target)?;
            trace!(source = %self, target = %target, converter = %converter, "resolved through system unit");
            return Ok(converter);
        }

        if !self.is_compatible(target) {
            return Err(MeasureError::incompatible(self, target));
        }

        let source_base = source_system.base_expansion()?;
        let target_base = target_system.base_expansion()?;
        if source_base != target_base {
            debug!(
                source = %self,
                target = %target,
                source_base = %source_base,
                target_base = %target_base,
                "same dimension but different base units"
            );
            return Err(MeasureError::incompatible(self, target));
        }

        let converter = self.through_system_unit(target)?;
        debug!(source = %self, target = %target, converter = %converter, "resolved through base-unit expansion");
        Ok(converter)
    }

    fn through_system_unit(&self, target: &Unit) -> MeasureResult<UnitConverter> {
        let source_to_system = self.to_system_unit()?;
        let target_to_system = target.to_system_unit()?;
        Ok(target_to_system.inverse().concatenate(&source_to_system))
    }

    /// The system unit rewritten with every alternate unit replaced by its
    /// parent, down to base units
    pub(crate) fn base_expansion(&self) -> MeasureResult<Unit> {
        let system_unit = self.system_unit();
        match system_unit.kind() {
            UnitKind::Base(_) | UnitKind::Transformed(_) => Ok(system_unit),
            UnitKind::Alternate(alternate) => alternate.parent().base_expansion(),
            UnitKind::Product(product) => {
                product.elements().iter().try_fold(Unit::one(), |acc, e| {
                    let expanded = e.base().base_expansion()?.raised(e.pow(), e.root())?;
                    acc.product(&expanded)
                })
            }
        }
    }
}
