use crate::prefix::{BinaryPrefix, MetricPrefix};
use crate::si;
use rust_decimal::Decimal;

#[test]
fn test_metric_factors() {
    assert_eq!(MetricPrefix::Kilo.factor(), Decimal::from(1000));
    assert_eq!(MetricPrefix::Deka.factor(), Decimal::from(10));
    assert_eq!(MetricPrefix::Micro.factor(), Decimal::new(1, 6));
    assert_eq!(MetricPrefix::Yocto.factor(), Decimal::new(1, 24));
    assert_eq!(MetricPrefix::Micro.to_string(), "µ");
    assert_eq!(MetricPrefix::Deka.symbol(), "da");
}

#[test]
fn test_kilo_is_a_thousandfold() {
    let metre = si::metre();
    assert_eq!(
        MetricPrefix::Kilo.apply(&metre).unwrap(),
        metre.multiply(1000).unwrap()
    );
}

#[test]
fn test_prefixed_units_convert_by_their_factor() {
    let metre = si::metre();
    for prefix in MetricPrefix::ALL {
        let prefixed = prefix.apply(&metre).unwrap();
        let converter = prefixed.converter_to(&metre).unwrap();
        assert_eq!(
            converter.convert(Decimal::ONE).unwrap(),
            prefix.factor(),
            "{}m",
            prefix
        );
    }
}

#[test]
fn test_prefix_on_transformed_unit() {
    let milligram = MetricPrefix::Milli.apply(&si::gram()).unwrap();
    let converter = milligram.converter_to(&si::kilogram()).unwrap();
    assert_eq!(
        converter.convert(Decimal::from(1_000_000)).unwrap(),
        Decimal::ONE
    );
}

#[test]
fn test_binary_prefixes() {
    assert_eq!(BinaryPrefix::Kibi.factor(), Decimal::from(1024));
    assert_eq!(
        BinaryPrefix::Yobi.factor(),
        Decimal::from_i128_with_scale(1_208_925_819_614_629_174_706_176, 0)
    );
    assert_eq!(BinaryPrefix::Gibi.symbol(), "Gi");

    let bit = si::bit();
    for prefix in BinaryPrefix::ALL {
        let converter = prefix.apply(&bit).unwrap().converter_to(&bit).unwrap();
        assert_eq!(converter.convert(Decimal::ONE).unwrap(), prefix.factor());
    }
}
