//! Prime-field arithmetic for the toy curve
//!
//! Unlike a fixed-modulus field with limb arithmetic, the modulus here is a
//! runtime value carried by [`PrimeField`], so that tests can substitute
//! alternate (even adversarial) parameters. Values are tiny; every product
//! fits comfortably in a `u128` intermediate.

use crate::error::{Error, Result};

/// An element of `F_p`, always normalized into `[0, p)` by the
/// [`PrimeField`] that produced it.
///
/// The inner value is deliberately not constructible outside this crate;
/// elements come from [`PrimeField::element`] or [`PrimeField::reduce`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldElement(pub(crate) u64);

impl FieldElement {
    /// The canonical integer representative in `[0, p)`.
    #[inline]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for FieldElement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The field `F_p` for a runtime modulus `p`.
///
/// `p` is required to be prime for [`PrimeField::invert`] to be correct, but
/// primality is asserted by the caller, never tested here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimeField {
    p: u64,
}

impl PrimeField {
    /// Build the field `F_p`. Rejects `p < 2`, which would make every
    /// reduction a division by zero; anything else is taken on faith.
    pub fn new(p: u64) -> Result<Self> {
        if p < 2 {
            return Err(Error::param("p", "modulus must be at least 2"));
        }
        Ok(PrimeField { p })
    }

    /// The modulus `p`.
    #[inline]
    pub fn modulus(&self) -> u64 {
        self.p
    }

    /// The additive identity: 0
    #[inline]
    pub fn zero(&self) -> FieldElement {
        FieldElement(0)
    }

    /// The multiplicative identity: 1
    #[inline]
    pub fn one(&self) -> FieldElement {
        FieldElement(1 % self.p)
    }

    /// Normalize any signed integer into `[0, p)`.
    #[inline]
    pub fn reduce(&self, x: i128) -> FieldElement {
        FieldElement(x.rem_euclid(self.p as i128) as u64)
    }

    /// Build an element from an unsigned integer, reducing mod `p`.
    #[inline]
    pub fn element(&self, value: u64) -> FieldElement {
        FieldElement(value % self.p)
    }

    /// `(a + b) mod p`
    #[inline]
    pub fn add(&self, a: FieldElement, b: FieldElement) -> FieldElement {
        FieldElement(((a.0 as u128 + b.0 as u128) % self.p as u128) as u64)
    }

    /// `(a - b) mod p`, normalized to non-negative
    #[inline]
    pub fn sub(&self, a: FieldElement, b: FieldElement) -> FieldElement {
        // a, b < p, so a + p - b never underflows in u128
        FieldElement(((a.0 as u128 + self.p as u128 - b.0 as u128) % self.p as u128) as u64)
    }

    /// `(a * b) mod p`
    #[inline]
    pub fn mul(&self, a: FieldElement, b: FieldElement) -> FieldElement {
        FieldElement(((a.0 as u128 * b.0 as u128) % self.p as u128) as u64)
    }

    /// `a² mod p`
    #[inline]
    pub fn square(&self, a: FieldElement) -> FieldElement {
        self.mul(a, a)
    }

    /// `(p - a) mod p`
    #[inline]
    pub fn negate(&self, a: FieldElement) -> FieldElement {
        self.sub(self.zero(), a)
    }

    /// `base^exponent mod p` by repeated squaring. The exponent is an
    /// ordinary non-negative integer.
    pub fn pow(&self, base: FieldElement, mut exponent: u64) -> FieldElement {
        let mut result = self.one();
        let mut acc = base;
        while exponent > 0 {
            if exponent & 1 == 1 {
                result = self.mul(result, acc);
            }
            acc = self.square(acc);
            exponent >>= 1;
        }
        result
    }

    /// Multiplicative inverse via Fermat's little theorem: `a^(p-2) mod p`.
    ///
    /// # Passthrough contract
    ///
    /// This is valid only for prime `p` and `a ≢ 0`. There is deliberately
    /// no zero check: `invert(0)` returns whatever `0^(p-2)` evaluates to
    /// (zero). Callers on paths where zero can occur must rule it out
    /// themselves.
    #[inline]
    pub fn invert(&self, a: FieldElement) -> FieldElement {
        self.pow(a, self.p - 2)
    }
}
