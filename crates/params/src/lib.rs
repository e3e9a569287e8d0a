//! Curve-parameter constants for the toycrypt teaching library.
//!
//! Parameters are plain data with no behavior: the arithmetic lives in
//! `toycrypt-algorithms`, which consumes a [`CurveParams`] value. Every
//! operation in the workspace takes the parameters as an explicit argument,
//! never as hidden process-wide state, so tests can substitute alternate
//! (even deliberately broken) parameter sets.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod toy;

pub use toy::TOY_97;

/// Domain parameters for a short Weierstrass curve `y² = x³ + ax + b` over
/// the prime field `F_p`.
///
/// # Trust contract
///
/// - `p` is REQUIRED to be prime for the Fermat inversion in the field layer
///   to be correct, but is never primality-tested.
/// - `(g_x, g_y)` is verified to satisfy the curve equation when a `Curve`
///   is built from these params.
/// - `n` is the CLAIMED order of the base point. It is asserted, not
///   verified; `Curve::verify_generator_order` exists for tests that want
///   to check it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveParams {
    /// Prime modulus of the field.
    pub p: u64,
    /// Coefficient `a` of the curve equation.
    pub a: u64,
    /// Coefficient `b` of the curve equation.
    pub b: u64,
    /// x-coordinate of the base point `G`.
    pub g_x: u64,
    /// y-coordinate of the base point `G`.
    pub g_y: u64,
    /// Claimed order of `G`.
    pub n: u64,
}
