//! ECDH key agreement on the Toy-97 curve
//!
//! The sender computes `k·Q` and the receiver computes `d·C1`; both land on
//! the same point because `k·(d·G) = d·(k·G)`. The shared point's
//! x-coordinate, truncated to 32 bits, seeds the keystream layer.
//!
//! # This is a teaching scheme
//!
//! Keys come from an ordinary random source, the scalar ladder is
//! variable-time, and the "KDF" is a bare truncation. None of this may be
//! reused where security matters.

use crate::error::{Error as KemError, Result};
use rand::RngCore;
use toycrypt_algorithms::ec;
use toycrypt_algorithms::ec::{Curve, Point, Scalar};
use toycrypt_api::{Error as ApiError, Kem, Result as ApiResult};
use toycrypt_params::CurveParams;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// ECDH key agreement on the Toy-97 curve
pub struct EcdhToy97;

/// A private scalar and its public point `Q = d·G`.
///
/// The public point is always computed from the scalar, never stored
/// independently of it, so the two cannot drift apart.
#[derive(Debug, Clone)]
pub struct KeyPair {
    secret: Scalar,
    public: Point,
}

impl KeyPair {
    /// Build a keypair from an existing scalar, recomputing `Q = d·G`.
    pub fn from_scalar(params: &CurveParams, secret: Scalar) -> Result<Self> {
        let public = derive_public_key(params, &secret)?;
        Ok(KeyPair { secret, public })
    }

    /// Generate a fresh keypair.
    pub fn generate<R: RngCore + ?Sized>(params: &CurveParams, rng: &mut R) -> Result<Self> {
        let curve = Curve::new(params)?;
        let (secret, public) = ec::generate_keypair(&curve, rng)?;
        Ok(KeyPair { secret, public })
    }

    /// The private scalar.
    pub fn secret(&self) -> &Scalar {
        &self.secret
    }

    /// The public point `Q = d·G`.
    pub fn public(&self) -> Point {
        self.public
    }
}

/// A 32-bit keystream seed derived from a shared point, zeroized on drop.
#[derive(Debug, Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecretSeed(u32);

impl SharedSecretSeed {
    /// The raw seed value handed to the keystream generator.
    pub fn value(&self) -> u32 {
        self.0
    }
}

/// Compute the public point `d·G` for a private scalar.
pub fn derive_public_key(params: &CurveParams, secret: &Scalar) -> Result<Point> {
    let curve = Curve::new(params)?;
    Ok(ec::scalar_mult_base(&curve, secret))
}

/// Compute the shared point `scalar · other_point`.
///
/// The peer's point is externally supplied and is rejected unless it
/// satisfies the curve equation. Used symmetrically: the sender passes the
/// recipient's `Q`, the receiver passes the sender's `C1`.
pub fn derive_shared_secret(
    params: &CurveParams,
    scalar: &Scalar,
    other_point: &Point,
) -> Result<Point> {
    let curve = Curve::new(params)?;
    Ok(ec::scalar_mult(&curve, scalar, other_point)?)
}

/// Derive the keystream seed from a shared point: `x mod 2³²`.
///
/// # Degenerate case
///
/// The identity has no x-coordinate and maps to seed `0`, silently.
/// Callers that can reach an identity shared point (scalar pairs whose
/// product is a multiple of the point's order) must detect it themselves;
/// the encrypt/decrypt layer does.
pub fn seed_from_point(point: &Point) -> SharedSecretSeed {
    match point.x() {
        None => SharedSecretSeed(0),
        Some(x) => SharedSecretSeed((x.value() & 0xFFFF_FFFF) as u32),
    }
}

/// Shared point and seed derivation in one step, rejecting the identity.
pub fn shared_seed(
    params: &CurveParams,
    scalar: &Scalar,
    other_point: &Point,
) -> Result<SharedSecretSeed> {
    let shared = derive_shared_secret(params, scalar, other_point)?;
    if shared.is_identity() {
        return Err(KemError::IdentityPoint("shared point"));
    }
    Ok(seed_from_point(&shared))
}

impl Kem for EcdhToy97 {
    type Params = CurveParams;
    type PublicKey = Point;
    type SecretKey = Scalar;
    type SharedSecret = SharedSecretSeed;
    type Ciphertext = Point;
    type KeyPair = KeyPair;

    fn name() -> &'static str {
        "ECDH-Toy97"
    }

    fn keypair<R: RngCore>(params: &Self::Params, rng: &mut R) -> ApiResult<Self::KeyPair> {
        KeyPair::generate(params, rng).map_err(ApiError::from)
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.public()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.secret().clone()
    }

    fn encapsulate<R: RngCore>(
        params: &Self::Params,
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> ApiResult<(Self::Ciphertext, Self::SharedSecret)> {
        if public_key.is_identity() {
            return Err(ApiError::from(KemError::IdentityPoint(
                "recipient public key",
            )));
        }

        let ephemeral = KeyPair::generate(params, rng).map_err(ApiError::from)?;
        let seed =
            shared_seed(params, ephemeral.secret(), public_key).map_err(ApiError::from)?;
        Ok((ephemeral.public(), seed))
    }

    fn decapsulate(
        params: &Self::Params,
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> ApiResult<Self::SharedSecret> {
        if ciphertext.is_identity() {
            return Err(ApiError::from(KemError::IdentityPoint(
                "ephemeral public key",
            )));
        }
        shared_seed(params, secret_key, ciphertext).map_err(ApiError::from)
    }
}
