use measure::*;
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

fn within(actual: Decimal, expected: Decimal, tolerance: &str) -> bool {
    (actual - expected).abs() < Decimal::from_str(tolerance).unwrap()
}

fn dimension(l: i8, m: i8, t: i8) -> Dimension {
    Dimension::from_powers(&[('L', l), ('M', m), ('T', t)])
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 100,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_rational_round_trip(p in 1i64..10_000, q in 1i64..10_000, x in -1_000_000i64..1_000_000) {
        prop_assume!(p != q);
        let c = UnitConverter::rational(p, q).unwrap();
        let x = Decimal::from(x);
        let back = c.inverse().convert(c.convert(x).unwrap()).unwrap();
        prop_assert!(within(back, x, "0.000000001"), "{} came back as {}", x, back);
    }

    #[test]
    fn prop_add_round_trip_is_exact(offset in -100_000i64..100_000, x in -100_000i64..100_000) {
        prop_assume!(offset != 0);
        let c = UnitConverter::add(Decimal::new(offset, 2)).unwrap();
        let x = Decimal::new(x, 3);
        prop_assert_eq!(c.inverse().convert(c.convert(x).unwrap()).unwrap(), x);
    }

    #[test]
    fn prop_multiply_concatenated_with_inverse_is_identity(f in 1i64..1_000_000) {
        prop_assume!(f != 1000);
        let c = UnitConverter::multiply(Decimal::new(f, 3)).unwrap();
        prop_assert!(c.concatenate(&c.inverse()).is_identity());
        prop_assert!(c.inverse().concatenate(&c).is_identity());
    }

    #[test]
    fn prop_dimension_monoid_laws(
        a in (-4i8..4, -4i8..4, -4i8..4),
        b in (-4i8..4, -4i8..4, -4i8..4),
        c in (-4i8..4, -4i8..4, -4i8..4),
    ) {
        let a = dimension(a.0, a.1, a.2);
        let b = dimension(b.0, b.1, b.2);
        let c = dimension(c.0, c.1, c.2);
        prop_assert_eq!(Dimension::none().multiply(&a).unwrap(), a.clone());
        prop_assert!(a.multiply(&a.pow(-1).unwrap()).unwrap().is_none());
        prop_assert_eq!(a.multiply(&b).unwrap(), b.multiply(&a).unwrap());
        prop_assert_eq!(
            a.multiply(&b).unwrap().multiply(&c).unwrap(),
            a.multiply(&b.multiply(&c).unwrap()).unwrap()
        );
    }

    #[test]
    fn prop_product_units_are_canonical(a in -5i32..5, b in -5i32..5) {
        let m = si::metre();
        let s = si::second();
        let (ma, mb, sb) = (m.pow(a).unwrap(), m.pow(b).unwrap(), s.pow(b).unwrap());
        prop_assert_eq!(ma.product(&sb).unwrap(), sb.product(&ma).unwrap());
        prop_assert_eq!(ma.product(&mb).unwrap(), m.pow(a + b).unwrap());
        prop_assert!(ma.quotient(&ma).unwrap().is_one());
    }

    #[test]
    fn prop_large_exponents_never_panic(n in any::<i32>(), k in any::<i32>()) {
        let m = si::metre();
        let powered = m.pow(n).and_then(|u| u.pow(k));
        let total = i64::from(n) * i64::from(k);
        let fits = n != i32::MIN && i32::try_from(total).is_ok_and(|t| t != i32::MIN);
        match &powered {
            Ok(unit) if total == 0 => prop_assert!(unit.is_one()),
            Ok(unit) => prop_assert_eq!(unit, &m.pow(n * k).unwrap()),
            Err(MeasureError::Arithmetic(_)) => prop_assert!(!fits),
            Err(other) => prop_assert!(false, "unexpected {:?}", other),
        }
        let _ = m.root(n);
        let _ = si::newton().pow(n).and_then(|u| u.root(k));
    }

    #[test]
    fn prop_conversion_is_transitive(
        a in 1i64..10_000,
        b in 1i64..10_000,
        c in 1i64..10_000,
        x in -1_000i64..1_000,
    ) {
        let metre = si::metre();
        let u1 = metre.multiply(a).unwrap();
        let u2 = metre.divide(b).unwrap();
        let u3 = metre.multiply(c).unwrap();
        let x = Decimal::from(x);

        let direct = u1.converter_to(&u3).unwrap().convert(x).unwrap();
        let via = u2
            .converter_to(&u3)
            .unwrap()
            .convert(u1.converter_to(&u2).unwrap().convert(x).unwrap())
            .unwrap();
        prop_assert!(within(direct, via, "0.000000001"), "{} vs {}", direct, via);
    }

    #[test]
    fn prop_celsius_kelvin_round_trip(x in -1_000_000i64..1_000_000) {
        let x = Decimal::new(x, 2);
        let to_kelvin = si::celsius().converter_to(&si::kelvin()).unwrap();
        let to_celsius = si::kelvin().converter_to(&si::celsius()).unwrap();
        prop_assert_eq!(to_celsius.convert(to_kelvin.convert(x).unwrap()).unwrap(), x);
        prop_assert!(to_celsius.concatenate(&to_kelvin).is_identity());
    }
}
