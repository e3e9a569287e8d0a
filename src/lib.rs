//! # toycrypt
//!
//! A teaching library demonstrating the arithmetic behind Elliptic-Curve
//! Diffie-Hellman key agreement and an ECIES-style encrypt/decrypt flow over
//! the tiny short Weierstrass curve `y² = x³ + 2x + 3` over `F_97`.
//!
//! ## This is not a cryptographic library
//!
//! Every layer of toycrypt is deliberately insecure so that it stays small
//! enough to read end to end: scalars come from an ordinary (non-crypto)
//! random source, scalar multiplication is variable-time, the keystream is a
//! 32-bit linear congruential generator, and nothing is authenticated. Do not
//! reuse any part of it where security matters.
//!
//! ## Crate structure
//!
//! This is a facade crate that re-exports functionality from the workspace
//! members:
//!
//! - [`api`]: shared error type and the `Kem`/`Pke` scheme traits
//! - [`params`]: immutable curve-parameter values (`TOY_97`)
//! - [`algorithms`]: field arithmetic, the curve group, the point
//!   enumerator, the LCG stream cipher, and the hex/UTF-8 codec
//! - [`kem`]: key-pair generation and shared-secret derivation (ECDH)
//! - [`pke`]: the ECIES-style `encrypt`/`decrypt` entry points
//!
//! ## Example
//!
//! ```
//! use toycrypt::prelude::*;
//!
//! let params = TOY_97;
//! let secret = Scalar::new(7, params.n)?;
//! let public = toycrypt::kem::ecdh::derive_public_key(&params, &secret)?;
//!
//! let ephemeral = Scalar::new(5, params.n)?;
//! let message = toycrypt::pke::ecies::encrypt(&params, "hi", &ephemeral, &public)?;
//! let plaintext =
//!     toycrypt::pke::ecies::decrypt(&params, &message.ciphertext, &message.ephemeral_point, &secret)?;
//! assert_eq!(plaintext, "hi");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub use toycrypt_algorithms as algorithms;
pub use toycrypt_api as api;
pub use toycrypt_kem as kem;
pub use toycrypt_params as params;
pub use toycrypt_pke as pke;

/// Common imports for toycrypt users
pub mod prelude {
    pub use toycrypt_api::traits::{Kem, Pke};
    pub use toycrypt_api::{Error as ApiError, Result as ApiResult};

    pub use toycrypt_params::{CurveParams, TOY_97};

    pub use toycrypt_algorithms::codec::{decode_hex, encode_hex};
    pub use toycrypt_algorithms::ec::{
        enumerate_points, Curve, FieldElement, Point, PrimeField, Scalar,
    };
    pub use toycrypt_algorithms::stream::{xor, Lcg32, StreamCipher};

    pub use toycrypt_kem::ecdh::{EcdhToy97, KeyPair, SharedSecretSeed};
    pub use toycrypt_pke::ecies::{EciesToy97, EncryptedMessage};
}
