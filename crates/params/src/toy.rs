//! The fixed toy curve used throughout the workspace

use crate::CurveParams;

/// Toy-97: `y² = x³ + 2x + 3` over `F_97`, base point `G = (0, 10)`,
/// claimed order `n = 50`.
///
/// This is fixed configuration, not a runtime choice: the demo system always
/// runs on Toy-97, and the constant exists as a [`CurveParams`] value only
/// so tests can build substitutes. The curve has 99 affine points; `G`
/// generates a subgroup of order 50 (which tests verify, since `n` is
/// otherwise taken on faith).
pub const TOY_97: CurveParams = CurveParams {
    p: 97,
    a: 2,
    b: 3,
    g_x: 0,
    g_y: 10,
    n: 50,
};
