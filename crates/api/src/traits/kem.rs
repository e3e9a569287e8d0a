//! Trait definition for key-encapsulation-shaped key agreement
//!
//! The toycrypt key-agreement flow has the shape of a textbook KEM: the
//! sender encapsulates against the recipient's public point and obtains an
//! ephemeral point (the "ciphertext") plus a shared secret; the recipient
//! decapsulates the ephemeral point with its private scalar and obtains the
//! same secret.
//!
//! # This is a teaching interface
//!
//! Unlike a production KEM trait, the rng bound here is plain [`RngCore`]
//! with no `CryptoRng` marker: toycrypt keys are deliberately drawn from an
//! ordinary random source and must never be treated as real key material.
//! Curve parameters are threaded through every method as an explicit
//! `Params` value rather than baked into the implementation, so tests can
//! substitute adversarial parameter sets.

use crate::Result;
use rand::RngCore;
use zeroize::Zeroize;

/// Trait for key agreement with domain-specific types.
pub trait Kem {
    /// Curve-parameter value passed explicitly to every operation.
    type Params;

    /// Public key type (a curve point).
    type PublicKey: Clone;

    /// Secret key type (a private scalar). Zeroized on drop.
    type SecretKey: Zeroize + Clone;

    /// Shared secret type. Zeroized on drop.
    type SharedSecret: Zeroize + Clone;

    /// Ciphertext type for the encapsulated key (the ephemeral point).
    type Ciphertext: Clone;

    /// Keypair type for storage of related keys.
    type KeyPair: Clone;

    /// Returns the scheme name.
    fn name() -> &'static str;

    /// Generate a new keypair.
    fn keypair<R: RngCore>(params: &Self::Params, rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract public key from keypair.
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract secret key from keypair.
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Encapsulate a shared secret using the recipient's public key.
    ///
    /// Must validate the public key (on-curve, not identity) before using it
    /// in any arithmetic.
    fn encapsulate<R: RngCore>(
        params: &Self::Params,
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> Result<(Self::Ciphertext, Self::SharedSecret)>;

    /// Decapsulate a shared secret using the private scalar.
    ///
    /// Must validate the ciphertext point before using it in any arithmetic.
    fn decapsulate(
        params: &Self::Params,
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Self::SharedSecret>;
}
