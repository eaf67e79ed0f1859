use crate::monomial::Monomial;
use crate::MeasureError;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn a() -> Monomial<char> {
    Monomial::of('a')
}

fn b() -> Monomial<char> {
    Monomial::of('b')
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_multiply_adds_exponents() {
    let a2 = a().multiply(&a()).unwrap();
    assert_eq!(a2.elements().len(), 1);
    assert_eq!(a2.elements()[0].pow(), 2);
    assert_eq!(a2.elements()[0].root(), 1);
    assert_eq!(a2, a().pow(2).unwrap());
}

#[test]
fn test_divide_by_self_is_one() {
    assert!(a().divide(&a()).unwrap().is_one());
    let a3 = a().pow(3).unwrap();
    assert!(a3.divide(&a3).unwrap().is_one());
}

#[test]
fn test_unmatched_factors_pass_through() {
    let m = a().multiply(&b().pow(-3).unwrap()).unwrap();
    assert_eq!(m.elements().len(), 2);
    assert_eq!(m.elements()[0].base(), &'a');
    assert_eq!(m.elements()[1].base(), &'b');
    assert_eq!(m.elements()[1].pow(), -3);
}

#[test]
fn test_equality_and_hash_ignore_order() {
    let ab = a().multiply(&b()).unwrap();
    let ba = b().multiply(&a()).unwrap();
    assert_eq!(ab.elements()[0].base(), &'a');
    assert_eq!(ba.elements()[0].base(), &'b');
    assert_eq!(ab, ba);
    assert_eq!(hash_of(&ab), hash_of(&ba));
}

#[test]
fn test_rational_exponents_are_reduced() {
    let sqrt_a = a().root(2).unwrap();
    assert_eq!(sqrt_a.elements()[0].pow(), 1);
    assert_eq!(sqrt_a.elements()[0].root(), 2);
    assert_eq!(sqrt_a.as_single(), None);

    let whole = sqrt_a.multiply(&sqrt_a).unwrap();
    assert_eq!(whole, a());
    assert_eq!(whole.as_single(), Some(&'a'));

    assert_eq!(a().pow(4).unwrap().root(2).unwrap(), a().pow(2).unwrap());

    let mixed = a().root(2).unwrap().multiply(&a().root(3).unwrap()).unwrap();
    assert_eq!(mixed.elements()[0].pow(), 5);
    assert_eq!(mixed.elements()[0].root(), 6);
}

#[test]
fn test_pow_zero_is_one() {
    assert!(a().multiply(&b()).unwrap().pow(0).unwrap().is_one());
}

#[test]
fn test_negative_pow_is_reciprocal() {
    let ab = a().multiply(&b()).unwrap();
    assert_eq!(ab.pow(-1).unwrap(), ab.reciprocal());
}

#[test]
fn test_root_of_zero_order_fails() {
    let result = a().root(0);
    assert!(matches!(result, Err(MeasureError::Arithmetic(_))));
    assert!(matches!(a().root_of_order(0), Err(MeasureError::Arithmetic(_))));
}

#[test]
fn test_negative_root_is_reciprocal_of_positive_root() {
    assert_eq!(a().pow(2).unwrap().root(-2).unwrap(), a().reciprocal());
}

#[test]
fn test_from_powers_drops_zero_powers() {
    let m = Monomial::from_powers([('a', 2), ('b', 0), ('c', -1)]);
    assert_eq!(m.elements().len(), 2);
    assert_eq!(m, a().pow(2).unwrap().divide(&Monomial::of('c')).unwrap());
}

#[test]
fn test_exponent_overflow_is_an_error() {
    let result = a().pow(i32::MAX).unwrap().multiply(&a());
    assert!(matches!(result, Err(MeasureError::Arithmetic(_))));

    let result = a().pow(2).unwrap().pow(i32::MAX);
    assert!(matches!(result, Err(MeasureError::Arithmetic(_))));

    let result = a().root(2).unwrap().root(i32::MAX);
    assert!(matches!(result, Err(MeasureError::Arithmetic(_))));
}

#[test]
fn test_root_of_most_negative_order_is_an_error() {
    let result = a().root(i32::MIN);
    match result {
        Err(MeasureError::Arithmetic(message)) => assert!(message.contains("2147483648")),
        other => panic!("Expected an arithmetic error, got {:?}", other),
    }
}

#[test]
fn test_extreme_exponents_that_fit_are_kept() {
    let big = a().pow(i32::MAX).unwrap();
    assert_eq!(big.elements()[0].pow(), i32::MAX);
    assert_eq!(big.reciprocal().elements()[0].pow(), -i32::MAX);

    // 2/2^31 reduces back into range
    let rooted = a().pow(2).unwrap().root(i32::MIN).unwrap();
    assert_eq!(rooted.elements()[0].pow(), -1);
    assert_eq!(rooted.elements()[0].root(), 1 << 30);
    let halved = a().pow(-2).unwrap().root(-2).unwrap();
    assert_eq!(halved, a());

    assert!(matches!(a().pow(i32::MIN), Err(MeasureError::Arithmetic(_))));
}
