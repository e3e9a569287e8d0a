//! ECIES-style public-key encryption for the toycrypt teaching library.
//!
//! Composes the workspace layers into the two entry points the demo UI
//! calls: [`ecies::encrypt`] and [`ecies::decrypt`]. An encryption carries
//! an ephemeral curve point `C1 = k·G` next to the hex ciphertext; the
//! recipient recovers the keystream seed from `d·C1` and XORs the
//! ciphertext back into text.

#![cfg_attr(not(feature = "std"), no_std)]

// Required for Vec, String in no_std + alloc environments
#[cfg(all(not(feature = "std"), feature = "alloc"))]
extern crate alloc;

pub mod ecies;
pub mod error;

// Re-export key items
pub use ecies::{EciesToy97, EncryptedMessage};
pub use error::{Error, Result};
