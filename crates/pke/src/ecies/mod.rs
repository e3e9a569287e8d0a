//! ECIES-style encryption on the Toy-97 curve
//!
//! The scheme composes the workspace layers exactly the way the glossary
//! describes an ECIES-like construction: derive a symmetric seed from an
//! ECDH shared point, then drive a stream cipher with it.
//!
//! Encryption: `C1 = k·G`, `seed = x(k·Q) mod 2³²`, ciphertext =
//! `plaintext XOR keystream(seed)`, transmitted as `(C1, hex)`.
//! Decryption recovers the same seed from `d·C1`.
//!
//! # No integrity, no secrecy
//!
//! There is no MAC and the keystream is an LCG: anyone can flip ciphertext
//! bits undetected, and anyone patient can recover the seed outright. A
//! wrong private key does not fail; it yields mojibake, which the demo
//! treats as a feature worth seeing.

use crate::error::{Error as PkeError, Result};
use rand::RngCore;
use toycrypt_algorithms::codec;
use toycrypt_algorithms::ec::{self, Curve, Point, Scalar};
use toycrypt_algorithms::error::validate;
use toycrypt_algorithms::stream::{xor, Lcg32};
use toycrypt_api::{Error as ApiError, Pke, Result as ApiResult};
use toycrypt_kem::ecdh;
use toycrypt_params::CurveParams;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

/// ECIES-style encryption on the Toy-97 curve
pub struct EciesToy97;

/// The transmitted artifact of one encryption call.
///
/// Only the ephemeral point and the ciphertext cross the boundary; the
/// ephemeral scalar `k` itself never leaves the sender.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncryptedMessage {
    /// The ephemeral public point `C1 = k·G`.
    pub ephemeral_point: Point,
    /// The XORed plaintext as lowercase hex.
    pub ciphertext: String,
}

/// Encrypt a text message for a recipient public point, using a
/// caller-supplied ephemeral scalar.
///
/// The recipient point is validated (on-curve, not identity) before any
/// arithmetic. Fails if the derived shared point is the identity, which
/// happens exactly when `k·d` is a multiple of the group order; that is
/// the degenerate case the seed derivation would otherwise silently map
/// to 0.
pub fn encrypt(
    params: &CurveParams,
    plaintext: &str,
    ephemeral: &Scalar,
    recipient: &Point,
) -> Result<EncryptedMessage> {
    let curve = Curve::new(params)?;
    validate::on_curve(curve.is_on_curve(recipient), "encryption")?;
    if recipient.is_identity() {
        return Err(PkeError::EncryptionFailed(
            "recipient public key is the identity point",
        ));
    }

    let ephemeral_point = ec::scalar_mult_base(&curve, ephemeral);
    let shared = ec::scalar_mult(&curve, ephemeral, recipient)?;
    if shared.is_identity() {
        return Err(PkeError::EncryptionFailed("shared point is the identity"));
    }
    let seed = ecdh::seed_from_point(&shared);

    let plaintext_bytes = codec::encode_utf8(plaintext);
    let keystream = Lcg32::keystream_bytes(seed.value(), plaintext_bytes.len());
    let cipher_bytes = xor(&plaintext_bytes, &keystream)?;

    Ok(EncryptedMessage {
        ephemeral_point,
        ciphertext: codec::encode_hex(&cipher_bytes),
    })
}

/// Decrypt a hex ciphertext with the recipient's private scalar and the
/// sender's ephemeral point.
///
/// Fails on malformed hex, an off-curve or identity `C1`, or an identity
/// shared point. A *wrong but valid* key is indistinguishable from a right
/// one: the XOR simply produces different bytes.
pub fn decrypt(
    params: &CurveParams,
    ciphertext_hex: &str,
    ephemeral_point: &Point,
    secret: &Scalar,
) -> Result<String> {
    let curve = Curve::new(params)?;
    validate::on_curve(curve.is_on_curve(ephemeral_point), "decryption")?;
    if ephemeral_point.is_identity() {
        return Err(PkeError::DecryptionFailed(
            "ephemeral point is the identity",
        ));
    }

    let cipher_bytes = codec::decode_hex(ciphertext_hex)?;

    let shared = ec::scalar_mult(&curve, secret, ephemeral_point)?;
    if shared.is_identity() {
        return Err(PkeError::DecryptionFailed("shared point is the identity"));
    }
    let seed = ecdh::seed_from_point(&shared);

    let keystream = Lcg32::keystream_bytes(seed.value(), cipher_bytes.len());
    let plaintext_bytes = xor(&cipher_bytes, &keystream)?;
    Ok(codec::decode_utf8(&plaintext_bytes))
}

impl Pke for EciesToy97 {
    type Params = CurveParams;
    type PublicKey = Point;
    type SecretKey = Scalar;
    type Ciphertext = EncryptedMessage;

    fn name() -> &'static str {
        "ECIES-Toy97-LCG32"
    }

    fn keypair<R: RngCore>(
        params: &Self::Params,
        rng: &mut R,
    ) -> ApiResult<(Self::PublicKey, Self::SecretKey)> {
        let pair = ecdh::KeyPair::generate(params, rng).map_err(ApiError::from)?;
        Ok((pair.public(), pair.secret().clone()))
    }

    fn encrypt<R: RngCore>(
        params: &Self::Params,
        pk_recipient: &Self::PublicKey,
        plaintext: &str,
        rng: &mut R,
    ) -> ApiResult<Self::Ciphertext> {
        let ephemeral =
            Scalar::random(params.n, rng).map_err(|e| ApiError::from(PkeError::from(e)))?;
        encrypt(params, plaintext, &ephemeral, pk_recipient).map_err(ApiError::from)
    }

    fn decrypt(
        params: &Self::Params,
        sk_recipient: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> ApiResult<String> {
        decrypt(
            params,
            &ciphertext.ciphertext,
            &ciphertext.ephemeral_point,
            sk_recipient,
        )
        .map_err(ApiError::from)
    }
}
