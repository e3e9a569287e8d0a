//! Toy-97 elliptic curve primitives
//!
//! Short Weierstrass arithmetic over a runtime-configurable prime field,
//! sized for teaching: the fixed curve is `y² = x³ + 2x + 3` over `F_97`
//! with base point `G = (0, 10)` and claimed order 50.
//!
//! Implements:
//! - prime-field arithmetic with Fermat inversion,
//! - the affine chord-tangent group law with explicit special cases,
//! - variable-time double-and-add scalar multiplication,
//! - keypair generation from an ordinary (non-crypto) random source,
//! - exhaustive point enumeration for the visualization layer.

mod curve;
mod enumerate;
mod field;
mod point;
mod scalar;

pub use curve::Curve;
pub use enumerate::enumerate_points;
pub use field::{FieldElement, PrimeField};
pub use point::Point;
pub use scalar::Scalar;

use crate::error::Result;
use rand::RngCore;

/// Scalar multiplication with the base point: `scalar · G`.
pub fn scalar_mult_base(curve: &Curve, scalar: &Scalar) -> Point {
    curve.scalar_mul(scalar.value(), &curve.generator())
}

/// General scalar multiplication: `scalar · point` for an externally
/// supplied point, which is rejected unless it satisfies the curve equation.
pub fn scalar_mult(curve: &Curve, scalar: &Scalar, point: &Point) -> Result<Point> {
    crate::error::validate::on_curve(curve.is_on_curve(point), "scalar multiplication")?;
    Ok(curve.scalar_mul(scalar.value(), point))
}

/// Generate a keypair: a scalar drawn uniformly from `[1, n-1]` and the
/// matching public point `d·G`.
///
/// Uses whatever random source the caller provides; see [`Scalar::random`]
/// for why that is good enough here and nowhere else.
pub fn generate_keypair<R: RngCore + ?Sized>(curve: &Curve, rng: &mut R) -> Result<(Scalar, Point)> {
    let secret = Scalar::random(curve.params().n, rng)?;
    let public = scalar_mult_base(curve, &secret);
    Ok((secret, public))
}
