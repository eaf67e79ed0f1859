use crate::dimension::Dimension;
use crate::quantity::{Quantity, QuantityUnit};
use crate::unit::Unit;
use crate::MeasureResult;
use std::any::TypeId;
use std::collections::HashMap;
use tracing::{debug, trace};

/// A named set of units with a default unit per quantity kind
///
/// Built once through [`SystemOfUnitsBuilder`] and read-only afterwards; pass
/// it to whatever needs to look up default units.
#[derive(Debug, Clone)]
pub struct SystemOfUnits {
    name: String,
    units: Vec<Unit>,
    by_kind: HashMap<TypeId, Unit>,
}

impl SystemOfUnits {
    pub fn builder(name: impl Into<String>) -> SystemOfUnitsBuilder {
        SystemOfUnitsBuilder {
            name: name.into(),
            units: Vec::new(),
            by_kind: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The default unit registered for quantity kind `Q`
    pub fn unit<Q: Quantity>(&self) -> Option<QuantityUnit<Q>> {
        self.by_kind
            .get(&TypeId::of::<Q>())
            .and_then(|unit| unit.as_type::<Q>().ok())
    }

    /// Every unit of the system, in registration order
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn units_with_dimension<'a: 'd, 'd>(
        &'a self,
        dimension: &'d Dimension,
    ) -> impl Iterator<Item = &'a Unit> + 'd {
        self.units
            .iter()
            .filter(move |unit| unit.dimension() == *dimension)
    }
}

pub struct SystemOfUnitsBuilder {
    name: String,
    units: Vec<Unit>,
    by_kind: HashMap<TypeId, Unit>,
}

impl SystemOfUnitsBuilder {
    /// Add `unit` as the default unit of kind `Q`
    ///
    /// Fails if the unit does not have the dimension of `Q`. Registering a
    /// kind twice replaces its default unit.
    pub fn register<Q: Quantity>(mut self, unit: &Unit) -> MeasureResult<Self> {
        unit.as_type::<Q>()?;
        trace!(system = %self.name, kind = Q::NAME, unit = %unit, "registering default unit");
        self.by_kind.insert(TypeId::of::<Q>(), unit.clone());
        Ok(self.with_unit(unit))
    }

    /// Register a unit whose dimension is known to match `Q`
    pub(crate) fn register_unchecked<Q: Quantity>(mut self, unit: &Unit) -> Self {
        debug_assert!(unit.dimension() == Q::dimension());
        self.by_kind.insert(TypeId::of::<Q>(), unit.clone());
        self.with_unit(unit)
    }

    /// Add a unit that is not the default of any kind
    pub fn with_unit(mut self, unit: &Unit) -> Self {
        if !self.units.contains(unit) {
            self.units.push(unit.clone());
        }
        self
    }

    pub fn build(self) -> SystemOfUnits {
        debug!(
            system = %self.name,
            units = self.units.len(),
            kinds = self.by_kind.len(),
            "system of units built"
        );
        SystemOfUnits {
            name: self.name,
            units: self.units,
            by_kind: self.by_kind,
        }
    }
}
