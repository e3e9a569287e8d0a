//! Public API traits and types for the toycrypt teaching library.
//!
//! Every scheme crate in the workspace implements the traits defined here,
//! and every failure anywhere in the workspace eventually converts into this
//! crate's [`Error`].

#![cfg_attr(not(feature = "std"), no_std)]

// Required for String in no_std + alloc environments
#[cfg(all(not(feature = "std"), feature = "alloc"))]
extern crate alloc;

pub mod error;
pub mod traits;

// Re-export the primary error type and result
pub use error::{Error, Result};

// Re-export the scheme traits
pub use traits::{Kem, Pke};
