//! Bearer token verification against a stored SHA-512 hash

use crate::binary::{CodecError, base64url_to_bytes, is_base64url, latin1_string_to_bytes};
use crate::error::{Error, Result};
use crate::limits::TOKEN_HASH_LENGTH;

use aws_lc_rs::digest::{self, SHA512};
use constant_time_eq::constant_time_eq;

/// Verify a token against its expected SHA-512 hash
///
/// The raw characters of `token` are hashed, not its base64URL-decoded bytes.
///
/// # Arguments
/// * `token` - The token to be verified, base64URL text
/// * `expected_token_hash` - The stored base64URL-encoded SHA-512 hash of the token
///
/// # Errors
/// * `Error::Codec` naming `token` when the token is empty or not base64URL
/// * `Error::Codec` naming `expectedTokenHash` when the hash cannot be decoded
/// * `Error::LengthInvalid` when the decoded hash is not 64 bytes
pub async fn verify_token(token: &str, expected_token_hash: &str) -> Result<bool> {
    if !is_base64url(token) {
        tracing::debug!(parameter = "token", "rejected: not base64URL");
        return Err(Error::codec("token", CodecError::NotBase64Url));
    }

    // Unreachable for base64URL text, kept so the Latin-1 contract stays total
    let token_bytes = latin1_string_to_bytes(token).map_err(|e| Error::codec("token", e))?;
    let token_hash = digest::digest(&SHA512, &token_bytes);

    let expected = base64url_to_bytes(expected_token_hash).map_err(|e| {
        tracing::debug!(parameter = "expectedTokenHash", error = %e, "rejected: undecodable");
        Error::codec("expectedTokenHash", e)
    })?;

    if expected.len() != TOKEN_HASH_LENGTH {
        tracing::debug!(
            parameter = "expectedTokenHash",
            length = expected.len(),
            "rejected: wrong length"
        );
        return Err(Error::LengthInvalid {
            parameter: "expectedTokenHash",
            expected: TOKEN_HASH_LENGTH,
            actual: expected.len(),
        });
    }

    Ok(constant_time_eq(token_hash.as_ref(), &expected))
}
