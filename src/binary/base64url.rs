//! Base64URL encoding/decoding per RFC 4648
//!
//! This module is a thin wrapper around the `base64` crate. Encoding never emits
//! padding. Decoding accepts exactly the alphabet `[0-9A-Za-z_-]`, expects no
//! padding and tolerates non-zero trailing bits, the way browsers' `atob` does.

use base64::{
    DecodeError, Engine, alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};

use super::CodecError;

const BASE64URL: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::RequireNone)
        .with_decode_allow_trailing_bits(true),
);

/// Check that `text` is non-empty and only uses the base64URL alphabet
pub fn is_base64url(text: &str) -> bool {
    !text.is_empty()
        && text
            .bytes()
            .all(|byte| byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_')
}

/// Encode bytes to an unpadded base64URL string
pub fn bytes_to_base64url(bytes: &[u8]) -> String {
    BASE64URL.encode(bytes)
}

/// Decode a base64URL string to bytes
///
/// Fails with [`CodecError::NotBase64Url`] when [`is_base64url`] rejects the
/// text, empty text included.
pub fn base64url_to_bytes(text: &str) -> Result<Vec<u8>, CodecError> {
    if !is_base64url(text) {
        return Err(CodecError::NotBase64Url);
    }

    BASE64URL.decode(text).map_err(|e| match e {
        DecodeError::InvalidLength(_) => CodecError::InvalidLength,
        _ => CodecError::NotBase64Url,
    })
}
