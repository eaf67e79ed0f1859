use measure::*;
use rust_decimal::Decimal;
use std::str::FromStr;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn convert(from: &Unit, to: &Unit, value: &str) -> Decimal {
    from.converter_to(to).unwrap().convert(dec(value)).unwrap()
}

#[test]
fn test_mass_conversions() {
    assert_eq!(convert(&si::kilogram(), &si::gram(), "1"), dec("1000"));
    assert_eq!(convert(&si::gram(), &si::kilogram(), "1000"), dec("1"));
    assert_eq!(convert(&si::gram(), &si::kilogram(), "2.5"), dec("0.0025"));
}

#[test]
fn test_temperature_conversions() {
    assert_eq!(convert(&si::celsius(), &si::kelvin(), "0"), dec("273.15"));
    assert_eq!(convert(&si::kelvin(), &si::celsius(), "0"), dec("-273.15"));
    assert_eq!(convert(&si::celsius(), &si::kelvin(), "-273.15"), dec("0"));
}

#[test]
fn test_fahrenheit_through_rankine() {
    let rankine = si::kelvin().multiply(5).unwrap().divide(9).unwrap();
    let fahrenheit = rankine.shift(dec("459.67")).unwrap();

    assert_eq!(convert(&si::celsius(), &fahrenheit, "0"), dec("32"));
    assert_eq!(convert(&si::celsius(), &fahrenheit, "100"), dec("212"));
    assert_eq!(convert(&fahrenheit, &si::kelvin(), "32"), dec("273.15"));
}

#[test]
fn test_identical_units_convert_by_identity() {
    for unit in [si::metre(), si::gram(), si::celsius(), si::newton(), Unit::one()] {
        assert_eq!(unit.converter_to(&unit).unwrap(), UnitConverter::IDENTITY);
    }
}

#[test]
fn test_speed_conversion() {
    let kilometre = si::metre().multiply(1000).unwrap();
    let hour = si::second().multiply(3600).unwrap();
    let kmh = kilometre.quotient(&hour).unwrap();

    let converter = kmh.converter_to(&si::metres_per_second()).unwrap();
    assert_eq!(converter, UnitConverter::rational(5, 18).unwrap());
    assert_eq!(converter.convert(dec("36")).unwrap(), dec("10"));
}

#[test]
fn test_incompatible_units() {
    let result = si::metre().converter_to(&si::second());
    assert!(matches!(result, Err(MeasureError::Incompatible(_))));
    assert!(!si::metre().is_compatible(&si::second()));

    let result = si::celsius().converter_to(&si::gram());
    assert!(matches!(result, Err(MeasureError::Incompatible(_))));
}

#[test]
fn test_dimensionless_alternates_are_compatible_but_distinct() {
    let radian = si::radian();
    let one = Unit::one();
    assert_ne!(radian, one);
    assert!(radian.is_compatible(&one));
    assert!(radian.converter_to(&one).unwrap().is_identity());
    assert!(one.converter_to(&radian).unwrap().is_identity());
    assert!(radian.converter_to(&si::steradian()).unwrap().is_identity());
}

#[test]
fn test_named_derived_units_resolve_through_their_expansion() {
    let newton_metre = si::newton().product(&si::metre()).unwrap();
    let joule = si::joule();
    assert_ne!(newton_metre, joule);
    assert!(newton_metre.converter_to(&joule).unwrap().is_identity());

    let kilojoule = MetricPrefix::Kilo.apply(&joule).unwrap();
    let converter = kilojoule.converter_to(&newton_metre).unwrap();
    assert_eq!(converter.convert(dec("1.5")).unwrap(), dec("1500"));

    let base = (&(&si::metre() * &si::kilogram()).unwrap() / &si::second().pow(2).unwrap())
        .unwrap();
    assert!(si::newton().converter_to(&base).unwrap().is_identity());
}

#[test]
fn test_alternates_over_one_parent_convert_by_identity() {
    let gray = si::gray();
    let sievert = si::sievert();
    assert_ne!(gray, sievert);
    assert_eq!(gray.dimension(), sievert.dimension());
    assert!(gray.converter_to(&sievert).unwrap().is_identity());
    assert!(sievert.converter_to(&gray).unwrap().is_identity());

    let per_kilogram = si::joule().quotient(&si::kilogram()).unwrap();
    assert!(per_kilogram.converter_to(&gray).unwrap().is_identity());

    let millisievert = MetricPrefix::Milli.apply(&sievert).unwrap();
    assert_eq!(convert(&gray, &millisievert, "0.25"), dec("250"));
}

#[test]
fn test_alternate_whose_parent_holds_an_alternate() {
    let lumen = si::lumen();
    let candela_steradian = si::candela().product(&si::steradian()).unwrap();
    assert_ne!(lumen, candela_steradian);
    assert!(lumen.converter_to(&candela_steradian).unwrap().is_identity());
    assert!(candela_steradian.converter_to(&lumen).unwrap().is_identity());

    // Steradian expands to one, so both reach the bare candela
    assert!(lumen.converter_to(&si::candela()).unwrap().is_identity());

    let lux_area = si::lux().product(&si::square_metre()).unwrap();
    assert!(lux_area.converter_to(&lumen).unwrap().is_identity());
}

#[test]
fn test_frequency_and_activity_share_an_expansion() {
    assert_ne!(si::hertz(), si::becquerel());
    assert!(si::becquerel().converter_to(&si::hertz()).unwrap().is_identity());
}

#[test]
fn test_time_and_ratio_units() {
    assert_eq!(convert(&si::hour(), &si::minute(), "1.5"), dec("90"));
    assert_eq!(convert(&si::day(), &si::hour(), "1"), dec("24"));
    assert_eq!(convert(&si::percent(), &Unit::one(), "12.5"), dec("0.125"));
    assert_eq!(convert(&Unit::one(), &si::percent(), "2"), dec("200"));
}

#[test]
fn test_distinct_base_units_of_one_dimension_do_not_convert() {
    let foot = Unit::base("ft", Dimension::length());
    assert!(foot.is_compatible(&si::metre()));
    let result = foot.converter_to(&si::metre());
    assert!(matches!(result, Err(MeasureError::Incompatible(_))));
}

#[test]
fn test_conversion_is_transitive() {
    let metre = si::metre();
    let kilometre = metre.multiply(1000).unwrap();
    let centimetre = metre.divide(100).unwrap();
    let millimetre = metre.divide(1000).unwrap();

    let km_to_cm = kilometre.converter_to(&centimetre).unwrap();
    let cm_to_mm = centimetre.converter_to(&millimetre).unwrap();
    let km_to_mm = kilometre.converter_to(&millimetre).unwrap();

    assert_eq!(cm_to_mm.concatenate(&km_to_cm), km_to_mm);
    assert_eq!(km_to_mm.convert(dec("1.2")).unwrap(), dec("1200000"));
}

#[test]
fn test_product_units_with_scaled_elements() {
    let litre = MetricPrefix::Deci.apply(&si::metre()).unwrap().pow(3).unwrap();
    let converter = si::cubic_metre().converter_to(&litre).unwrap();
    assert_eq!(converter.convert(dec("1")).unwrap(), dec("1000"));

    let gram_per_litre = si::gram().quotient(&litre).unwrap();
    let kg_per_m3 = si::kilogram().quotient(&si::cubic_metre()).unwrap();
    let converter = gram_per_litre.converter_to(&kg_per_m3).unwrap();
    assert!(converter.is_identity());
}

#[test]
fn test_non_linear_product_fails_to_convert() {
    let per_celsius = si::celsius().inverse();
    let result = per_celsius.converter_to(&si::kelvin().inverse());
    assert!(matches!(result, Err(MeasureError::Unsupported(_))));
}
