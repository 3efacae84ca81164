//! Byte/text codecs
//!
//! Conversions between raw bytes, Latin-1 text (one `char` per byte, code points
//! `U+0000..=U+00FF`) and unpadded base64URL text per RFC 4648 §5.
//!
//! The codecs report failures as [`CodecError`], which carries the failure kind
//! only. The verifiers attach the name of the offending argument when they turn
//! it into a crate [`Error`](crate::Error).

mod base64url;
mod latin1;

pub use base64url::{base64url_to_bytes, bytes_to_base64url, is_base64url};
pub use latin1::{bytes_to_latin1_string, latin1_string_to_bytes};

use thiserror::Error;

/// Codec failures
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// Text is empty or has a character outside `[0-9A-Za-z_-]`
    #[error("is empty or contains character not in the base64URL character set")]
    NotBase64Url,

    /// Text is in the alphabet but `4n + 1` characters long, which no byte
    /// sequence encodes to
    #[error("has a length that is not valid for base64URL")]
    InvalidLength,

    /// A character above `U+00FF` cannot be represented as a single byte
    #[error("contains character with code point higher than 255")]
    CodePointAbove255,
}
