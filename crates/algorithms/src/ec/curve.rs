//! The short Weierstrass group law
//!
//! Implements the abelian group of points on `y² = x³ + ax + b` over `F_p`
//! with the textbook chord-tangent formulas in affine coordinates. Every
//! special case (identity absorption, mutual negatives, the vertical
//! tangent at `y = 0`, doubling) is an explicit branch.
//!
//! # Deliberately variable-time
//!
//! Scalar multiplication is plain double-and-add: its running time and
//! memory access pattern leak the bit pattern of the scalar. That is an
//! accepted property of this teaching code and must not be "fixed" here nor
//! relied on anywhere else.

use crate::ec::field::{FieldElement, PrimeField};
use crate::ec::point::Point;
use crate::error::{validate, Result};
use toycrypt_params::CurveParams;

/// A curve instance: validated parameters plus the field they live in.
///
/// Construction checks that the base point satisfies the curve equation, so
/// a `Curve` can only exist around a coherent parameter set; the claimed
/// order `n` stays unverified (see [`Curve::verify_generator_order`]).
#[derive(Debug, Clone, Copy)]
pub struct Curve {
    params: CurveParams,
    field: PrimeField,
    a: FieldElement,
    b: FieldElement,
    generator: Point,
}

impl Curve {
    /// Build a curve from parameters.
    ///
    /// Fails if `p < 2` or if the claimed base point does not satisfy the
    /// curve equation. Primality of `p` and the order claim `n` are taken
    /// on faith, per the parameter trust contract.
    pub fn new(params: &CurveParams) -> Result<Self> {
        let field = PrimeField::new(params.p)?;
        let a = field.element(params.a);
        let b = field.element(params.b);
        let generator = Point::Affine {
            x: field.element(params.g_x),
            y: field.element(params.g_y),
        };

        let curve = Curve {
            params: *params,
            field,
            a,
            b,
            generator,
        };
        validate::on_curve(curve.is_on_curve(&curve.generator), "curve construction")?;
        Ok(curve)
    }

    /// The parameters this curve was built from.
    #[inline]
    pub fn params(&self) -> &CurveParams {
        &self.params
    }

    /// The underlying field `F_p`.
    #[inline]
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// The base point `G`.
    #[inline]
    pub fn generator(&self) -> Point {
        self.generator
    }

    /// Checked affine-point constructor for externally supplied coordinates.
    pub fn point(&self, x: u64, y: u64) -> Result<Point> {
        let candidate = Point::Affine {
            x: self.field.element(x),
            y: self.field.element(y),
        };
        validate::on_curve(self.is_on_curve(&candidate), "point construction")?;
        Ok(candidate)
    }

    /// `x³ + ax + b` for the given x-coordinate.
    pub(crate) fn equation_rhs(&self, x: FieldElement) -> FieldElement {
        let f = &self.field;
        let x_cubed = f.mul(f.square(x), x);
        f.add(f.add(x_cubed, f.mul(self.a, x)), self.b)
    }

    /// Does the point satisfy the curve equation? The identity is on-curve
    /// by convention.
    pub fn is_on_curve(&self, point: &Point) -> bool {
        match point {
            Point::Identity => true,
            Point::Affine { x, y } => self.field.square(*y) == self.equation_rhs(*x),
        }
    }

    /// The additive inverse: `(x, y)` maps to `(x, p - y)`.
    pub fn negate(&self, point: &Point) -> Point {
        match point {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => Point::Affine {
                x: *x,
                y: self.field.negate(*y),
            },
        }
    }

    /// The full chord-tangent addition law.
    pub fn add(&self, p: &Point, q: &Point) -> Point {
        let f = &self.field;
        let (px, py, qx, qy) = match (p, q) {
            (Point::Identity, _) => return *q,
            (_, Point::Identity) => return *p,
            (Point::Affine { x: px, y: py }, Point::Affine { x: qx, y: qy }) => {
                (*px, *py, *qx, *qy)
            }
        };

        // Mutual negatives sum to the identity. This also covers doubling a
        // point with y = 0, whose tangent is vertical.
        if px == qx && f.add(py, qy) == f.zero() {
            return Point::Identity;
        }

        let slope = if px == qx && py == qy {
            // Tangent: m = (3x² + a) / 2y
            let three_x_sq = f.mul(f.element(3), f.square(px));
            let numerator = f.add(three_x_sq, self.a);
            let denominator = f.add(py, py);
            f.mul(numerator, f.invert(denominator))
        } else {
            // Secant: m = (y₂ - y₁) / (x₂ - x₁)
            let numerator = f.sub(qy, py);
            let denominator = f.sub(qx, px);
            f.mul(numerator, f.invert(denominator))
        };

        let x3 = f.sub(f.sub(f.square(slope), px), qx);
        let y3 = f.sub(f.mul(slope, f.sub(px, x3)), py);
        Point::Affine { x: x3, y: y3 }
    }

    /// Point doubling: `2P`.
    #[inline]
    pub fn double(&self, point: &Point) -> Point {
        self.add(point, point)
    }

    /// Scalar multiplication `k·P` by double-and-add.
    ///
    /// `k` may be any non-negative integer; `k = 0` yields the identity.
    /// Variable-time on purpose (see module docs).
    pub fn scalar_mul(&self, mut k: u64, point: &Point) -> Point {
        let mut acc = Point::Identity;
        let mut addend = *point;
        while k > 0 {
            if k & 1 == 1 {
                acc = self.add(&acc, &addend);
            }
            addend = self.double(&addend);
            k >>= 1;
        }
        acc
    }

    /// Check the claimed order: `n·G == Identity`.
    ///
    /// The order is trusted everywhere else; this routine exists so tests
    /// can verify the claim without every key generation paying for it.
    pub fn verify_generator_order(&self) -> bool {
        self.scalar_mul(self.params.n, &self.generator)
            .is_identity()
    }
}
