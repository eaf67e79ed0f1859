use crate::si;
use crate::MeasureError;
use insta::assert_snapshot;

#[test]
fn test_error_display() {
    let incompatible = si::metre().converter_to(&si::second()).unwrap_err();
    assert_snapshot!(incompatible.to_string(), @"Incompatible units: m is not compatible with s");

    assert_snapshot!(
        MeasureError::degenerate("Add(0) would result in the identity converter").to_string(),
        @"Degenerate converter: Add(0) would result in the identity converter"
    );
    assert_snapshot!(MeasureError::arithmetic("Root's order of zero").to_string(), @"Arithmetic error: Root's order of zero");
    assert_snapshot!(MeasureError::unsupported("x").to_string(), @"Unsupported conversion: x");
    assert_snapshot!(MeasureError::invalid_derivation("x").to_string(), @"Invalid derivation: x");
    assert_snapshot!(MeasureError::DimensionMismatch("x".to_string()).to_string(), @"Dimension mismatch: x");
}

#[test]
fn test_overflow_is_an_arithmetic_error() {
    let error = MeasureError::overflow("multiplication");
    assert_eq!(
        error,
        MeasureError::Arithmetic("Decimal overflow during multiplication".to_string())
    );
}

#[test]
fn test_error_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}
    takes_error(&MeasureError::arithmetic("x"));
}
