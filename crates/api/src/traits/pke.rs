//! Trait definition for public-key encryption schemes.

use crate::error::Result;
use rand::RngCore;
use zeroize::Zeroize;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

/// Trait for public-key encryption of text messages.
///
/// Plaintexts are text rather than raw bytes because the toycrypt flow is a
/// two-party demo: what goes in and comes out of the scheme is what a user
/// typed. Curve parameters are an explicit argument on every method, and the
/// rng bound is plain [`RngCore`] (see the crate-level notes on the
/// deliberately non-cryptographic random source).
pub trait Pke {
    /// Curve-parameter value passed explicitly to every operation.
    type Params;

    /// Public key type for the scheme.
    type PublicKey: Clone;

    /// Secret key type for the scheme. Zeroized on drop.
    type SecretKey: Zeroize + Clone;

    /// Ciphertext type produced by the scheme.
    type Ciphertext: Clone;

    /// Returns the scheme name.
    fn name() -> &'static str;

    /// Generates a new key pair for the scheme.
    fn keypair<R: RngCore>(
        params: &Self::Params,
        rng: &mut R,
    ) -> Result<(Self::PublicKey, Self::SecretKey)>;

    /// Encrypts a plaintext message using the recipient's public key.
    ///
    /// The ephemeral scalar is drawn from `rng`; callers who need a
    /// deterministic ephemeral use the scheme crate's explicit entry points
    /// instead.
    fn encrypt<R: RngCore>(
        params: &Self::Params,
        pk_recipient: &Self::PublicKey,
        plaintext: &str,
        rng: &mut R,
    ) -> Result<Self::Ciphertext>;

    /// Decrypts a ciphertext using the recipient's secret key.
    fn decrypt(
        params: &Self::Params,
        sk_recipient: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> Result<String>;
}
