//! The International System of Units
//!
//! Every function builds a fresh value; units compare structurally, so two
//! calls to [`metre`] give equal units. [`system`] collects them into a
//! [`SystemOfUnits`] with a default unit per quantity kind.

use crate::converter::UnitConverter;
use crate::dimension::Dimension;
use crate::quantity::*;
use crate::system::SystemOfUnits;
use crate::unit::Unit;
use rust_decimal::Decimal;

// Base units

pub fn metre() -> Unit {
    Unit::base("m", Dimension::length())
}

pub fn kilogram() -> Unit {
    Unit::base("kg", Dimension::mass())
}

pub fn second() -> Unit {
    Unit::base("s", Dimension::time())
}

pub fn ampere() -> Unit {
    Unit::base("A", Dimension::electric_current())
}

pub fn kelvin() -> Unit {
    Unit::base("K", Dimension::temperature())
}

pub fn mole() -> Unit {
    Unit::base("mol", Dimension::amount_of_substance())
}

pub fn candela() -> Unit {
    Unit::base("cd", Dimension::luminous_intensity())
}

/// The dimensionless unit
pub fn one() -> Unit {
    Unit::one()
}

// Dimensionless alternates

pub fn radian() -> Unit {
    Unit::alternate_unchecked(&one(), "rad")
}

pub fn steradian() -> Unit {
    Unit::alternate_unchecked(&one(), "sr")
}

pub fn bit() -> Unit {
    Unit::alternate_unchecked(&one(), "bit")
}

// Derived units with special names

pub fn hertz() -> Unit {
    Unit::alternate_unchecked(&second().inverse(), "Hz")
}

/// `m·kg/s²`
pub fn newton() -> Unit {
    let parent = Unit::system_product::<Force>(&[(metre(), 1), (kilogram(), 1), (second(), -2)]);
    Unit::alternate_unchecked(&parent, "N")
}

pub fn pascal() -> Unit {
    let parent = Unit::system_product::<Pressure>(&[(newton(), 1), (metre(), -2)]);
    Unit::alternate_unchecked(&parent, "Pa")
}

pub fn joule() -> Unit {
    let parent = Unit::system_product::<Energy>(&[(newton(), 1), (metre(), 1)]);
    Unit::alternate_unchecked(&parent, "J")
}

pub fn watt() -> Unit {
    let parent = Unit::system_product::<Power>(&[(joule(), 1), (second(), -1)]);
    Unit::alternate_unchecked(&parent, "W")
}

pub fn coulomb() -> Unit {
    let parent = Unit::system_product::<ElectricCharge>(&[(second(), 1), (ampere(), 1)]);
    Unit::alternate_unchecked(&parent, "C")
}

pub fn volt() -> Unit {
    let parent = Unit::system_product::<ElectricPotential>(&[(watt(), 1), (ampere(), -1)]);
    Unit::alternate_unchecked(&parent, "V")
}

pub fn farad() -> Unit {
    let parent = Unit::system_product::<ElectricCapacitance>(&[(coulomb(), 1), (volt(), -1)]);
    Unit::alternate_unchecked(&parent, "F")
}

pub fn ohm() -> Unit {
    let parent = Unit::system_product::<ElectricResistance>(&[(volt(), 1), (ampere(), -1)]);
    Unit::alternate_unchecked(&parent, "Ω")
}

pub fn siemens() -> Unit {
    let parent = Unit::system_product::<ElectricConductance>(&[(ampere(), 1), (volt(), -1)]);
    Unit::alternate_unchecked(&parent, "S")
}

pub fn weber() -> Unit {
    let parent = Unit::system_product::<MagneticFlux>(&[(volt(), 1), (second(), 1)]);
    Unit::alternate_unchecked(&parent, "Wb")
}

pub fn tesla() -> Unit {
    let parent = Unit::system_product::<MagneticFluxDensity>(&[(weber(), 1), (metre(), -2)]);
    Unit::alternate_unchecked(&parent, "T")
}

pub fn henry() -> Unit {
    let parent = Unit::system_product::<ElectricInductance>(&[(weber(), 1), (ampere(), -1)]);
    Unit::alternate_unchecked(&parent, "H")
}

/// `cd·sr`
pub fn lumen() -> Unit {
    let parent = Unit::system_product::<LuminousFlux>(&[(candela(), 1), (steradian(), 1)]);
    Unit::alternate_unchecked(&parent, "lm")
}

pub fn lux() -> Unit {
    let parent = Unit::system_product::<Illuminance>(&[(lumen(), 1), (metre(), -2)]);
    Unit::alternate_unchecked(&parent, "lx")
}

pub fn becquerel() -> Unit {
    Unit::alternate_unchecked(&second().inverse(), "Bq")
}

/// Absorbed dose, `J/kg`
pub fn gray() -> Unit {
    let parent = Unit::system_product::<RadiationDoseAbsorbed>(&[(joule(), 1), (kilogram(), -1)]);
    Unit::alternate_unchecked(&parent, "Gy")
}

/// Effective dose, `J/kg` like [`gray`] but not the same unit
pub fn sievert() -> Unit {
    let parent = Unit::system_product::<RadiationDoseEffective>(&[(joule(), 1), (kilogram(), -1)]);
    Unit::alternate_unchecked(&parent, "Sv")
}

pub fn katal() -> Unit {
    let parent = Unit::system_product::<CatalyticActivity>(&[(mole(), 1), (second(), -1)]);
    Unit::alternate_unchecked(&parent, "kat")
}

pub fn ampere_turn() -> Unit {
    Unit::alternate_unchecked(&ampere(), "At")
}

// Transformed units

/// A thousandth of a kilogram
pub fn gram() -> Unit {
    Unit::transformed_unchecked(
        &kilogram(),
        UnitConverter::rational_unchecked(Decimal::ONE, Decimal::from(1000)),
    )
}

/// Kelvin offset by 273.15
pub fn celsius() -> Unit {
    Unit::transformed_unchecked(
        &kelvin(),
        UnitConverter::add_unchecked(Decimal::new(27315, 2)),
    )
}

pub fn percent() -> Unit {
    Unit::transformed_unchecked(
        &one(),
        UnitConverter::rational_unchecked(Decimal::ONE, Decimal::from(100)),
    )
}

pub fn minute() -> Unit {
    Unit::transformed_unchecked(
        &second(),
        UnitConverter::rational_unchecked(Decimal::from(60), Decimal::ONE),
    )
}

pub fn hour() -> Unit {
    Unit::transformed_unchecked(
        &second(),
        UnitConverter::rational_unchecked(Decimal::from(3600), Decimal::ONE),
    )
}

pub fn day() -> Unit {
    Unit::transformed_unchecked(
        &second(),
        UnitConverter::rational_unchecked(Decimal::from(86400), Decimal::ONE),
    )
}

// Products

pub fn square_metre() -> Unit {
    Unit::system_product::<Area>(&[(metre(), 2)])
}

pub fn cubic_metre() -> Unit {
    Unit::system_product::<Volume>(&[(metre(), 3)])
}

pub fn metres_per_second() -> Unit {
    Unit::system_product::<Speed>(&[(metre(), 1), (second(), -1)])
}

pub fn metres_per_square_second() -> Unit {
    Unit::system_product::<Acceleration>(&[(metre(), 1), (second(), -2)])
}

pub fn joule_second() -> Unit {
    Unit::system_product::<Action>(&[(joule(), 1), (second(), 1)])
}

pub fn farads_per_metre() -> Unit {
    Unit::system_product::<ElectricPermittivity>(&[(farad(), 1), (metre(), -1)])
}

pub fn newtons_per_square_ampere() -> Unit {
    Unit::system_product::<MagneticPermeability>(&[(newton(), 1), (ampere(), -2)])
}

pub fn reciprocal_metre() -> Unit {
    metre().inverse()
}

pub fn pascal_second() -> Unit {
    Unit::system_product::<DynamicViscosity>(&[(pascal(), 1), (second(), 1)])
}

pub fn candelas_per_square_metre() -> Unit {
    Unit::system_product::<Luminance>(&[(candela(), 1), (metre(), -2)])
}

pub fn square_metres_per_second() -> Unit {
    Unit::system_product::<KinematicViscosity>(&[(metre(), 2), (second(), -1)])
}

pub fn amperes_per_metre() -> Unit {
    Unit::system_product::<MagneticFieldStrength>(&[(ampere(), 1), (metre(), -1)])
}

pub fn coulombs_per_kilogram() -> Unit {
    Unit::system_product::<IonizingRadiation>(&[(coulomb(), 1), (kilogram(), -1)])
}

pub fn bits_per_second() -> Unit {
    Unit::system_product::<InformationRate>(&[(bit(), 1), (second(), -1)])
}

/// The SI system with its default unit for every quantity kind
pub fn system() -> SystemOfUnits {
    SystemOfUnits::builder("SI")
        .register_unchecked::<Dimensionless>(&one())
        .register_unchecked::<Length>(&metre())
        .register_unchecked::<Mass>(&kilogram())
        .register_unchecked::<Time>(&second())
        .register_unchecked::<ElectricCurrent>(&ampere())
        .register_unchecked::<Temperature>(&kelvin())
        .register_unchecked::<AmountOfSubstance>(&mole())
        .register_unchecked::<LuminousIntensity>(&candela())
        .register_unchecked::<MagnetomotiveForce>(&ampere_turn())
        .register_unchecked::<Angle>(&radian())
        .register_unchecked::<SolidAngle>(&steradian())
        .register_unchecked::<Information>(&bit())
        .register_unchecked::<Frequency>(&hertz())
        .register_unchecked::<Force>(&newton())
        .register_unchecked::<Pressure>(&pascal())
        .register_unchecked::<Energy>(&joule())
        .register_unchecked::<Power>(&watt())
        .register_unchecked::<ElectricCharge>(&coulomb())
        .register_unchecked::<ElectricPotential>(&volt())
        .register_unchecked::<ElectricCapacitance>(&farad())
        .register_unchecked::<ElectricResistance>(&ohm())
        .register_unchecked::<ElectricConductance>(&siemens())
        .register_unchecked::<MagneticFlux>(&weber())
        .register_unchecked::<MagneticFluxDensity>(&tesla())
        .register_unchecked::<ElectricInductance>(&henry())
        .register_unchecked::<LuminousFlux>(&lumen())
        .register_unchecked::<Illuminance>(&lux())
        .register_unchecked::<Radioactivity>(&becquerel())
        .register_unchecked::<RadiationDoseAbsorbed>(&gray())
        .register_unchecked::<RadiationDoseEffective>(&sievert())
        .register_unchecked::<CatalyticActivity>(&katal())
        .register_unchecked::<Area>(&square_metre())
        .register_unchecked::<Volume>(&cubic_metre())
        .register_unchecked::<Speed>(&metres_per_second())
        .register_unchecked::<Acceleration>(&metres_per_square_second())
        .register_unchecked::<Action>(&joule_second())
        .register_unchecked::<ElectricPermittivity>(&farads_per_metre())
        .register_unchecked::<MagneticPermeability>(&newtons_per_square_ampere())
        .register_unchecked::<WaveNumber>(&reciprocal_metre())
        .register_unchecked::<DynamicViscosity>(&pascal_second())
        .register_unchecked::<Luminance>(&candelas_per_square_metre())
        .register_unchecked::<KinematicViscosity>(&square_metres_per_second())
        .register_unchecked::<MagneticFieldStrength>(&amperes_per_metre())
        .register_unchecked::<IonizingRadiation>(&coulombs_per_kilogram())
        .register_unchecked::<InformationRate>(&bits_per_second())
        .with_unit(&gram())
        .with_unit(&celsius())
        .build()
}
