//! Quantity kinds
//!
//! A quantity kind (length, force, ...) names a physical nature and carries
//! its canonical [`Dimension`]. [`Unit::as_type`] checks a unit against a kind
//! and hands back a [`QuantityUnit`], a unit tagged with that kind at the type
//! level.

use crate::dimension::Dimension;
use crate::unit::Unit;
use crate::{MeasureError, MeasureResult};
use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;

pub trait Quantity: 'static {
    /// Human-readable name of the kind
    const NAME: &'static str;

    /// The dimension every unit of this kind has
    fn dimension() -> Dimension;
}

macro_rules! quantity {
    ($(#[$meta:meta])* $kind:ident, $name:literal, $dimension:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $kind;

        impl Quantity for $kind {
            const NAME: &'static str = $name;

            fn dimension() -> Dimension {
                $dimension
            }
        }
    };
}

// Fundamental symbols
const L: char = 'L';
const M: char = 'M';
const T: char = 'T';
const I: char = 'I';
const J: char = 'J';

fn powers(powers: &[(char, i8)]) -> Dimension {
    Dimension::from_powers(powers)
}

quantity!(Dimensionless, "dimensionless", Dimension::none());
quantity!(Length, "length", Dimension::length());
quantity!(Mass, "mass", Dimension::mass());
quantity!(Time, "time", Dimension::time());
quantity!(ElectricCurrent, "electric current", Dimension::electric_current());
quantity!(Temperature, "temperature", Dimension::temperature());
quantity!(AmountOfSubstance, "amount of substance", Dimension::amount_of_substance());
quantity!(LuminousIntensity, "luminous intensity", Dimension::luminous_intensity());
quantity!(
    /// Plane angle; dimensionless
    Angle,
    "angle",
    Dimension::none()
);
quantity!(SolidAngle, "solid angle", Dimension::none());
quantity!(Information, "information", Dimension::none());
quantity!(Area, "area", powers(&[(L, 2)]));
quantity!(Volume, "volume", powers(&[(L, 3)]));
quantity!(Speed, "speed", powers(&[(L, 1), (T, -1)]));
quantity!(Acceleration, "acceleration", powers(&[(L, 1), (T, -2)]));
quantity!(Frequency, "frequency", powers(&[(T, -1)]));
quantity!(Force, "force", powers(&[(L, 1), (M, 1), (T, -2)]));
quantity!(Pressure, "pressure", powers(&[(L, -1), (M, 1), (T, -2)]));
quantity!(Energy, "energy", powers(&[(L, 2), (M, 1), (T, -2)]));
quantity!(Power, "power", powers(&[(L, 2), (M, 1), (T, -3)]));
quantity!(ElectricCharge, "electric charge", powers(&[(T, 1), (I, 1)]));
quantity!(
    ElectricPotential,
    "electric potential",
    powers(&[(L, 2), (M, 1), (T, -3), (I, -1)])
);
quantity!(
    ElectricCapacitance,
    "electric capacitance",
    powers(&[(L, -2), (M, -1), (T, 4), (I, 2)])
);
quantity!(
    ElectricResistance,
    "electric resistance",
    powers(&[(L, 2), (M, 1), (T, -3), (I, -2)])
);
quantity!(
    ElectricConductance,
    "electric conductance",
    powers(&[(L, -2), (M, -1), (T, 3), (I, 2)])
);
quantity!(
    MagneticFlux,
    "magnetic flux",
    powers(&[(L, 2), (M, 1), (T, -2), (I, -1)])
);
quantity!(
    MagneticFluxDensity,
    "magnetic flux density",
    powers(&[(M, 1), (T, -2), (I, -1)])
);
quantity!(
    ElectricInductance,
    "electric inductance",
    powers(&[(L, 2), (M, 1), (T, -2), (I, -2)])
);
quantity!(
    /// Current times the number of turns of a coil
    MagnetomotiveForce,
    "magnetomotive force",
    Dimension::electric_current()
);
quantity!(LuminousFlux, "luminous flux", Dimension::luminous_intensity());
quantity!(Illuminance, "illuminance", powers(&[(J, 1), (L, -2)]));
quantity!(Radioactivity, "radioactivity", powers(&[(T, -1)]));
quantity!(
    RadiationDoseAbsorbed,
    "radiation dose absorbed",
    powers(&[(L, 2), (T, -2)])
);
quantity!(
    /// Absorbed dose weighted by the biological effect of the radiation
    RadiationDoseEffective,
    "radiation dose effective",
    powers(&[(L, 2), (T, -2)])
);
quantity!(
    CatalyticActivity,
    "catalytic activity",
    powers(&[('N', 1), (T, -1)])
);
quantity!(Action, "action", powers(&[(L, 2), (M, 1), (T, -1)]));
quantity!(
    ElectricPermittivity,
    "electric permittivity",
    powers(&[(L, -3), (M, -1), (T, 4), (I, 2)])
);
quantity!(
    MagneticPermeability,
    "magnetic permeability",
    powers(&[(L, 1), (M, 1), (T, -2), (I, -2)])
);
quantity!(WaveNumber, "wave number", powers(&[(L, -1)]));
quantity!(
    DynamicViscosity,
    "dynamic viscosity",
    powers(&[(L, -1), (M, 1), (T, -1)])
);
quantity!(
    KinematicViscosity,
    "kinematic viscosity",
    powers(&[(L, 2), (T, -1)])
);
quantity!(Luminance, "luminance", powers(&[(J, 1), (L, -2)]));
quantity!(
    MagneticFieldStrength,
    "magnetic field strength",
    powers(&[(I, 1), (L, -1)])
);
quantity!(
    IonizingRadiation,
    "ionizing radiation",
    powers(&[(T, 1), (I, 1), (M, -1)])
);
quantity!(InformationRate, "information rate", powers(&[(T, -1)]));

/// A unit known to measure quantities of kind `Q`
pub struct QuantityUnit<Q: Quantity> {
    unit: Unit,
    kind: PhantomData<fn() -> Q>,
}

impl<Q: Quantity> QuantityUnit<Q> {
    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn into_unit(self) -> Unit {
        self.unit
    }

    /// Converter between two units of the same kind
    pub fn converter_to(
        &self,
        target: &QuantityUnit<Q>,
    ) -> MeasureResult<crate::converter::UnitConverter> {
        self.unit.converter_to(&target.unit)
    }
}

impl<Q: Quantity> Clone for QuantityUnit<Q> {
    fn clone(&self) -> Self {
        Self {
            unit: self.unit.clone(),
            kind: PhantomData,
        }
    }
}

impl<Q: Quantity> PartialEq for QuantityUnit<Q> {
    fn eq(&self, other: &Self) -> bool {
        self.unit == other.unit
    }
}

impl<Q: Quantity> Eq for QuantityUnit<Q> {}

impl<Q: Quantity> Deref for QuantityUnit<Q> {
    type Target = Unit;

    fn deref(&self) -> &Unit {
        &self.unit
    }
}

impl<Q: Quantity> fmt::Debug for QuantityUnit<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuantityUnit")
            .field("kind", &Q::NAME)
            .field("unit", &self.unit)
            .finish()
    }
}

impl<Q: Quantity> fmt::Display for QuantityUnit<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.unit)
    }
}

impl Unit {
    /// Check that this unit measures quantities of kind `Q`
    ///
    /// A pure dimension check: `N` is accepted as a [`Force`], `rad` as a
    /// [`Dimensionless`] as well as an [`Angle`].
    pub fn as_type<Q: Quantity>(&self) -> MeasureResult<QuantityUnit<Q>> {
        let expected = Q::dimension();
        let actual = self.dimension();
        if actual != expected {
            return Err(MeasureError::DimensionMismatch(format!(
                "{} has dimension {} but {} requires {}",
                self,
                actual,
                Q::NAME,
                expected
            )));
        }
        Ok(QuantityUnit {
            unit: self.clone(),
            kind: PhantomData,
        })
    }
}
