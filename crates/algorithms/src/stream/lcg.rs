//! 32-bit linear congruential keystream generator
//!
//! State update: `state = state · 1664525 + 1013904223 (mod 2³²)`, the
//! classic Numerical Recipes constants. Each step emits the low 8 bits of
//! the updated state. Identical `(seed, length)` always produces identical
//! output; that reproducibility is the whole design, and also the reason
//! this must never be mistaken for a secure keystream.

use crate::error::Result;
use crate::stream::StreamCipher;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

/// LCG multiplier (Numerical Recipes)
pub const LCG_MULTIPLIER: u32 = 1_664_525;

/// LCG increment (Numerical Recipes)
pub const LCG_INCREMENT: u32 = 1_013_904_223;

/// A restartable LCG keystream.
#[derive(Debug, Clone)]
pub struct Lcg32 {
    seed: u32,
    state: u32,
}

impl Lcg32 {
    /// Create a generator seeded with a 32-bit shared-secret seed.
    pub fn new(seed: u32) -> Self {
        Lcg32 { seed, state: seed }
    }

    /// Advance the state once and emit the low 8 bits of the new state.
    #[inline]
    pub fn next_byte(&mut self) -> u8 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        (self.state & 0xFF) as u8
    }

    /// Produce `length` keystream bytes from a fresh generator.
    pub fn keystream_bytes(seed: u32, length: usize) -> Vec<u8> {
        let mut cipher = Lcg32::new(seed);
        (0..length).map(|_| cipher.next_byte()).collect()
    }
}

impl StreamCipher for Lcg32 {
    fn process(&mut self, data: &mut [u8]) -> Result<()> {
        for byte in data.iter_mut() {
            *byte ^= self.next_byte();
        }
        Ok(())
    }

    fn keystream(&mut self, output: &mut [u8]) -> Result<()> {
        for byte in output.iter_mut() {
            *byte = self.next_byte();
        }
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        self.state = self.seed;
        Ok(())
    }

    fn seek(&mut self, position: u64) -> Result<()> {
        // No block structure to jump by; re-step from the seed
        self.reset()?;
        for _ in 0..position {
            self.next_byte();
        }
        Ok(())
    }
}
