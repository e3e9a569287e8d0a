//! Stream cipher implementations
//!
//! The only cipher here is a 32-bit linear congruential keystream generator,
//! which is exactly as weak as it sounds: an LCG's state is recoverable from
//! a handful of output bytes, so this construction offers no
//! confidentiality against anyone who can do algebra. It is deterministic
//! and restartable, which is what the teaching flow needs: both parties
//! regenerate the identical keystream from the shared seed.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

/// Linear congruential keystream generator
pub mod lcg;

pub use lcg::{Lcg32, LCG_INCREMENT, LCG_MULTIPLIER};

use crate::error::{validate, Result};

/// Common trait for keystream-based ciphers
pub trait StreamCipher {
    /// Process data in place (encrypts for encryption, decrypts for
    /// decryption, since XOR is its own inverse)
    fn process(&mut self, data: &mut [u8]) -> Result<()>;

    /// Encrypt data in place
    fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data)
    }

    /// Decrypt data in place
    fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data)
    }

    /// Generate keystream directly into an output buffer
    fn keystream(&mut self, output: &mut [u8]) -> Result<()>;

    /// Reset the cipher to its initial state
    fn reset(&mut self) -> Result<()>;

    /// Seek to a specific byte position in the keystream
    fn seek(&mut self, position: u64) -> Result<()>;
}

/// Byte-wise exclusive-or of two equal-length sequences.
///
/// Both inputs must have identical length; a mismatch is a length error,
/// never silent truncation. Applying the same keystream twice returns the
/// original input.
pub fn xor(a: &[u8], b: &[u8]) -> Result<Vec<u8>> {
    validate::length("xor", b.len(), a.len())?;
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect())
}
