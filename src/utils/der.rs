//! DER encoding of EC public keys as SubjectPublicKeyInfo
//!
//! This module uses the RustCrypto `spki` and `der` crates for standards-compliant
//! DER encoding, in the layout aws-lc-rs accepts for ECDSA verification.

use crate::error::{Error, Result};
use crate::limits::P521_COORDINATE_LENGTH;
use der::Encode;
use der::asn1::{Any, BitString};
use spki::{AlgorithmIdentifierOwned, ObjectIdentifier, SubjectPublicKeyInfoOwned};

/// id-ecPublicKey (RFC 5480)
const EC_PUBLIC_KEY_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");

/// secp521r1 named curve (RFC 5480)
const SECP521R1_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.35");

/// Create error for key encoding failures
fn key_error(operation: &str, details: impl std::fmt::Display) -> Error {
    Error::KeyInvalid(format!("{operation}: {details}"))
}

/// Build DER-encoded P-521 public key from x and y coordinate bytes
///
/// The point is encoded uncompressed (`04 || x || y`) inside a
/// SubjectPublicKeyInfo carrying the secp521r1 curve parameter.
pub(crate) fn p521_spki_from_xy(x: &[u8], y: &[u8]) -> Result<Vec<u8>> {
    if x.len() != P521_COORDINATE_LENGTH || y.len() != P521_COORDINATE_LENGTH {
        return Err(key_error(
            "invalid P-521 coordinate length",
            format!(
                "x is {} bytes, y is {} bytes (expected {P521_COORDINATE_LENGTH})",
                x.len(),
                y.len()
            ),
        ));
    }

    let mut point = Vec::with_capacity(1 + 2 * P521_COORDINATE_LENGTH);
    point.push(0x04);
    point.extend_from_slice(x);
    point.extend_from_slice(y);

    let parameters =
        Any::encode_from(&SECP521R1_OID).map_err(|e| key_error("failed to encode curve", e))?;

    let algorithm = AlgorithmIdentifierOwned {
        oid: EC_PUBLIC_KEY_OID,
        parameters: Some(parameters),
    };

    let subject_public_key =
        BitString::new(0, point).map_err(|e| key_error("failed to create bit string", e))?;

    let spki = SubjectPublicKeyInfoOwned {
        algorithm,
        subject_public_key,
    };

    spki.to_der()
        .map_err(|e| key_error("failed to encode SPKI", e))
}
