//! ECDSA P-521 / SHA-512 signature verification

use crate::binary::{CodecError, base64url_to_bytes, is_base64url};
use crate::error::{Error, Result};
use crate::jwk::VerifyingKey;
use crate::limits::MAX_SIGNATURE_B64_SIZE;

/// Verify a signature over `data` with a public JSON Web Key
///
/// `data` is verified as-is; any canonicalization is the caller's job. A
/// well-formed signature of the wrong length is `Ok(false)`.
///
/// # Arguments
/// * `data` - The bytes that were signed
/// * `signature` - The base64URL-encoded fixed-width (`r || s`) signature
/// * `public_key` - An EC P-521 public key as JWK JSON text
///
/// # Errors
/// * `Error::Codec` naming `signature` when the signature is empty or not base64URL
/// * `Error::KeyInvalidJson` / `Error::KeyInvalid` when the key cannot be imported
pub async fn verify_signature(data: &[u8], signature: &str, public_key: &str) -> Result<bool> {
    let signature_bytes = decode_signature(signature).map_err(|e| {
        tracing::debug!(parameter = "signature", error = %e, "rejected: undecodable");
        Error::codec("signature", e)
    })?;

    let key = VerifyingKey::from_jwk(public_key).inspect_err(|e| {
        tracing::debug!(parameter = "publicKey", error = %e, "rejected: key import failed");
    })?;

    let Some(signature_bytes) = signature_bytes else {
        tracing::debug!(length = signature.len(), "signature longer than any P-521 signature");
        return Ok(false);
    };

    let verified = key.verify(data, &signature_bytes);
    if !verified {
        tracing::debug!(data_len = data.len(), "signature mismatch");
    }
    Ok(verified)
}

/// Decode a signature, or only check its format when it is too long to verify
fn decode_signature(signature: &str) -> std::result::Result<Option<Vec<u8>>, CodecError> {
    if signature.len() <= MAX_SIGNATURE_B64_SIZE {
        return base64url_to_bytes(signature).map(Some);
    }

    if !is_base64url(signature) {
        return Err(CodecError::NotBase64Url);
    }
    if signature.len() % 4 == 1 {
        return Err(CodecError::InvalidLength);
    }
    Ok(None)
}
