//! Curve points as an explicit two-variant sum type
//!
//! The identity element ("point at infinity") has no coordinates, so it is a
//! variant of its own rather than a sentinel coordinate pair or a nullable
//! value. This keeps every special case of the group law visible in a match.

use crate::ec::field::FieldElement;

/// A point on a short Weierstrass curve: either the group identity or an
/// affine coordinate pair.
///
/// Equality is structural: two points are equal iff both are `Identity` or
/// both are `Affine` with equal coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Point {
    /// The neutral element of the group.
    Identity,
    /// A coordinate pair satisfying `y² = x³ + ax + b` (guaranteed for
    /// points produced by the group law; externally supplied points are
    /// checked at the API boundaries).
    Affine { x: FieldElement, y: FieldElement },
}

impl Point {
    /// Is this the identity point?
    #[inline]
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }

    /// The affine coordinates, or `None` for the identity.
    #[inline]
    pub fn coordinates(&self) -> Option<(FieldElement, FieldElement)> {
        match self {
            Point::Identity => None,
            Point::Affine { x, y } => Some((*x, *y)),
        }
    }

    /// The x-coordinate, or `None` for the identity.
    #[inline]
    pub fn x(&self) -> Option<FieldElement> {
        self.coordinates().map(|(x, _)| x)
    }

    /// The y-coordinate, or `None` for the identity.
    #[inline]
    pub fn y(&self) -> Option<FieldElement> {
        self.coordinates().map(|(_, y)| y)
    }
}

impl core::fmt::Display for Point {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Point::Identity => write!(f, "O"),
            Point::Affine { x, y } => write!(f, "({}, {})", x, y),
        }
    }
}
