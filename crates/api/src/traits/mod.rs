//! Scheme traits implemented by the toycrypt workspace crates

pub mod kem;
pub mod pke;

pub use kem::Kem;
pub use pke::Pke;
