//! Rational-exponent monomials
//!
//! A monomial is a product of distinct factors, each raised to a rational
//! exponent `pow/root`. Product units and dimensions are both monomials; they
//! only differ in what the factors are (units or fundamental symbols).
//!
//! Every monomial is kept canonical:
//! - no factor appears twice
//! - no factor has a zero power
//! - `root` is positive and `gcd(|pow|, root) == 1`
//! - both fit in an `i32`, and `pow` is never `i32::MIN`
//!
//! Equality and hashing ignore the order of the factors.

use crate::{MeasureError, MeasureResult};
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A single factor of a monomial: `base^(pow/root)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Element<T> {
    base: T,
    pow: i32,
    root: i32,
}

impl<T> Element<T> {
    pub fn base(&self) -> &T {
        &self.base
    }

    pub fn pow(&self) -> i32 {
        self.pow
    }

    pub fn root(&self) -> i32 {
        self.root
    }
}

#[derive(Debug, Clone)]
pub struct Monomial<T> {
    elements: Vec<Element<T>>,
}

impl<T: Clone + PartialEq> Monomial<T> {
    /// The empty product
    pub fn one() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// A monomial holding `base` to the first power
    pub fn of(base: T) -> Self {
        Self {
            elements: vec![Element {
                base,
                pow: 1,
                root: 1,
            }],
        }
    }

    pub fn elements(&self) -> &[Element<T>] {
        &self.elements
    }

    pub fn is_one(&self) -> bool {
        self.elements.is_empty()
    }

    /// The bare factor, if this monomial is exactly one factor to the first power
    pub fn as_single(&self) -> Option<&T> {
        match self.elements.as_slice() {
            [only] if only.pow == only.root => Some(&only.base),
            _ => None,
        }
    }

    /// Factors raised to small integer powers
    ///
    /// A repeated base adds its powers; zero powers are dropped. Sums are
    /// clamped to the `i32` range, which `i8` inputs only reach after
    /// millions of repeats.
    pub(crate) fn from_powers(powers: impl IntoIterator<Item = (T, i8)>) -> Self {
        let mut sums: Vec<(T, i64)> = Vec::new();
        for (base, pow) in powers {
            match sums.iter_mut().find(|(b, _)| *b == base) {
                Some((_, sum)) => *sum += i64::from(pow),
                None => sums.push((base, i64::from(pow))),
            }
        }
        let limit = i64::from(i32::MAX);
        Self {
            elements: sums
                .into_iter()
                .filter(|(_, sum)| *sum != 0)
                .map(|(base, sum)| Element {
                    base,
                    pow: sum.clamp(-limit, limit) as i32,
                    root: 1,
                })
                .collect(),
        }
    }

    /// Merge two monomials, adding the exponents of shared factors
    ///
    /// Fails with an arithmetic error if a combined exponent does not fit in
    /// an `i32`.
    pub fn multiply(&self, other: &Self) -> MeasureResult<Self> {
        let mut result: Vec<Element<T>> =
            Vec::with_capacity(self.elements.len() + other.elements.len());

        for left in &self.elements {
            let (p2, r2) = other
                .elements
                .iter()
                .find(|right| right.base == left.base)
                .map(|right| (i64::from(right.pow), i64::from(right.root)))
                .unwrap_or((0, 1));
            let (p1, r1) = (i64::from(left.pow), i64::from(left.root));

            // p1/r1 + p2/r2 = (p1*r2 + p2*r1) / (r1*r2)
            let pow = p1 * r2 + p2 * r1;
            if pow != 0 {
                result.push(reduced(left.base.clone(), pow, r1 * r2)?);
            }
        }

        for right in &other.elements {
            if !self.elements.iter().any(|left| left.base == right.base) {
                result.push(right.clone());
            }
        }

        Ok(Self { elements: result })
    }

    /// Same as `multiply` after negating every power of `other`
    pub fn divide(&self, other: &Self) -> MeasureResult<Self> {
        self.multiply(&other.reciprocal())
    }

    /// Every power negated
    ///
    /// Powers never hold `i32::MIN`, so negation cannot overflow.
    pub fn reciprocal(&self) -> Self {
        Self {
            elements: self
                .elements
                .iter()
                .map(|e| Element {
                    base: e.base.clone(),
                    pow: -e.pow,
                    root: e.root,
                })
                .collect(),
        }
    }

    /// Multiply every power by `n`
    ///
    /// `pow(0)` is the empty product; negative `n` yields the reciprocal.
    pub fn pow(&self, n: i32) -> MeasureResult<Self> {
        if n == 0 {
            return Ok(Self::one());
        }
        let elements = self
            .elements
            .iter()
            .map(|e| {
                reduced(
                    e.base.clone(),
                    i64::from(e.pow) * i64::from(n),
                    i64::from(e.root),
                )
            })
            .collect::<MeasureResult<_>>()?;
        Ok(Self { elements })
    }

    /// Multiply every root by `n`
    ///
    /// Negative `n` yields the reciprocal of the positive root; `root(0)` is an
    /// arithmetic error.
    pub fn root(&self, n: i32) -> MeasureResult<Self> {
        if n == 0 {
            return Err(MeasureError::arithmetic("Root's order of zero"));
        }
        let rooted = self.root_of_order(n.unsigned_abs())?;
        Ok(if n < 0 { rooted.reciprocal() } else { rooted })
    }

    /// Multiply every root by a positive `order`
    pub fn root_of_order(&self, order: u32) -> MeasureResult<Self> {
        if order == 0 {
            return Err(MeasureError::arithmetic("Root's order of zero"));
        }
        let elements = self
            .elements
            .iter()
            .map(|e| {
                reduced(
                    e.base.clone(),
                    i64::from(e.pow),
                    i64::from(e.root) * i64::from(order),
                )
            })
            .collect::<MeasureResult<_>>()?;
        Ok(Self { elements })
    }

    /// `self^(pow/root)` for an exponent taken from another element
    pub(crate) fn raised(&self, pow: i32, root: i32) -> MeasureResult<Self> {
        self.pow(pow)?.root_of_order(root.unsigned_abs())
    }
}

/// Reduce `pow/root` to lowest terms and check it fits an element
///
/// Inputs come from products of two `i32` values, so they cannot overflow
/// `i64`. `pow` is non-zero and `root` positive.
fn reduced<T>(base: T, pow: i64, root: i64) -> MeasureResult<Element<T>> {
    let divisor = gcd(pow.unsigned_abs(), root.unsigned_abs()) as i64;
    let (pow, root) = (pow / divisor, root / divisor);
    match (i32::try_from(pow), i32::try_from(root)) {
        (Ok(p), Ok(r)) if p != i32::MIN => Ok(Element {
            base,
            pow: p,
            root: r,
        }),
        _ => Err(MeasureError::arithmetic(format!(
            "Exponent {}/{} does not fit in 32 bits",
            pow, root
        ))),
    }
}

fn gcd(m: u64, n: u64) -> u64 {
    if n == 0 {
        m
    } else {
        gcd(n, m % n)
    }
}

impl<T: PartialEq> PartialEq for Monomial<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements.len() == other.elements.len()
            && self.elements.iter().all(|e| {
                other
                    .elements
                    .iter()
                    .any(|o| o.base == e.base && o.pow == e.pow && o.root == e.root)
            })
    }
}

impl<T: Eq> Eq for Monomial<T> {}

impl<T: Hash> Hash for Monomial<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Order-independent: combine per-element hashes commutatively
        let mut combined: u64 = 0;
        for element in &self.elements {
            let mut hasher = DefaultHasher::new();
            element.hash(&mut hasher);
            combined = combined.wrapping_add(hasher.finish());
        }
        state.write_usize(self.elements.len());
        state.write_u64(combined);
    }
}

/// Render a monomial as `a²·b/c³`, writing `one` for the empty product
pub(crate) fn write_monomial<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    elements: &[Element<T>],
    one: &str,
) -> fmt::Result {
    let numerator: Vec<&Element<T>> = elements.iter().filter(|e| e.pow > 0).collect();
    let denominator: Vec<&Element<T>> = elements.iter().filter(|e| e.pow < 0).collect();

    if numerator.is_empty() {
        write!(f, "{}", one)?;
    }
    for (i, e) in numerator.iter().enumerate() {
        if i > 0 {
            write!(f, "·")?;
        }
        write!(f, "{}", e.base)?;
        write_exponent(f, i64::from(e.pow), e.root)?;
    }

    if !denominator.is_empty() {
        write!(f, "/")?;
        let grouped = denominator.len() > 1;
        if grouped {
            write!(f, "(")?;
        }
        for (i, e) in denominator.iter().enumerate() {
            if i > 0 {
                write!(f, "·")?;
            }
            write!(f, "{}", e.base)?;
            write_exponent(f, i64::from(e.pow).abs(), e.root)?;
        }
        if grouped {
            write!(f, ")")?;
        }
    }
    Ok(())
}

fn write_exponent(f: &mut fmt::Formatter<'_>, pow: i64, root: i32) -> fmt::Result {
    if root != 1 {
        return write!(f, "^({}/{})", pow, root);
    }
    if pow == 1 {
        return Ok(());
    }
    for c in pow.to_string().chars() {
        let sup = match c {
            '0' => '⁰',
            '1' => '¹',
            '2' => '²',
            '3' => '³',
            '4' => '⁴',
            '5' => '⁵',
            '6' => '⁶',
            '7' => '⁷',
            '8' => '⁸',
            '9' => '⁹',
            _ => '⁻',
        };
        write!(f, "{}", sup)?;
    }
    Ok(())
}
