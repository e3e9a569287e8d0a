//! ECDH-style key agreement for the toycrypt teaching library.
//!
//! Both halves of the demo call into this crate: each party holds a
//! [`ecdh::KeyPair`], exchanges public points, and derives the same
//! [`ecdh::SharedSecretSeed`] from its own scalar and the other party's
//! point. The seed then drives the keystream layer in `toycrypt-pke`.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod ecdh;
pub mod error;

pub use ecdh::{EcdhToy97, KeyPair, SharedSecretSeed};
pub use error::{Error, Result};
