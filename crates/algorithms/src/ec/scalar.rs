//! Private-scalar type
//!
//! A scalar is an integer in `[1, n-1]` for the claimed group order `n`.
//! Out-of-range values are rejected, never clamped or silently reduced: a
//! caller handing us `0`, `n`, or anything larger has a bug worth surfacing.

use crate::error::{validate, Result};
use rand::{Rng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A private or ephemeral scalar in `[1, n-1]`, zeroized on drop.
///
/// Zeroization is ordinary secret hygiene and the only hardening this type
/// gets; everything that consumes a `Scalar` is variable-time.
#[derive(Debug, Clone, Zeroize, ZeroizeOnDrop)]
pub struct Scalar(u64);

impl Scalar {
    /// Create a scalar, rejecting values outside `[1, n-1]`.
    pub fn new(value: u64, order: u64) -> Result<Self> {
        validate::scalar_range("scalar construction", value, order)?;
        Ok(Scalar(value))
    }

    /// Draw a scalar uniformly from `[1, n-1]`.
    ///
    /// # Not key-generation grade
    ///
    /// Any [`RngCore`] is accepted, with no `CryptoRng` requirement: this
    /// library demonstrates the arithmetic of key agreement, and its
    /// "private keys" are explicitly not suitable for real use.
    pub fn random<R: RngCore + ?Sized>(order: u64, rng: &mut R) -> Result<Self> {
        if order < 2 {
            return Err(crate::error::Error::param(
                "n",
                "group order must be at least 2 to draw a scalar",
            ));
        }
        Ok(Scalar(rng.gen_range(1..order)))
    }

    /// The scalar value.
    #[inline]
    pub fn value(&self) -> u64 {
        self.0
    }
}
