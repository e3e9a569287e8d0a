//! Brute-force enumeration of all affine points on a curve
//!
//! This exists for the visualization layer: a field of 97 elements is small
//! enough to draw, so the external UI asks for every point and plots them.
//! The scan is exhaustive over both coordinates, O(p²); that is fine for a
//! two-digit modulus and catastrophic for anything production-sized, which
//! is exactly why no production curve can offer this operation.

use crate::ec::field::PrimeField;
use crate::ec::point::Point;
use crate::error::Result;
use toycrypt_params::CurveParams;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

/// All affine solutions of `y² = x³ + ax + b` over `F_p`, in increasing
/// `(x, y)` order.
///
/// Only `p`, `a`, and `b` are consulted; the base point and order play no
/// role here, so deliberately bogus `g`/`n` values do not stop a parameter
/// set from being enumerated. The identity has no coordinates and is never
/// included. The result is a pure function of the parameters: re-running
/// yields an identical sequence.
pub fn enumerate_points(params: &CurveParams) -> Result<Vec<Point>> {
    let field = PrimeField::new(params.p)?;
    let a = field.element(params.a);
    let b = field.element(params.b);

    let mut points = Vec::new();
    for x in 0..field.modulus() {
        let fx = field.element(x);
        let x_cubed = field.mul(field.square(fx), fx);
        let rhs = field.add(field.add(x_cubed, field.mul(a, fx)), b);
        for y in 0..field.modulus() {
            let fy = field.element(y);
            if field.square(fy) == rhs {
                points.push(Point::Affine { x: fx, y: fy });
            }
        }
    }
    Ok(points)
}
