//! Errors for edgeauth

use thiserror::Error;

use crate::binary::CodecError;

/// edgeauth Errors
///
/// Every malformed input surfaces as one of these variants. A credential that is
/// well-formed but simply wrong is reported as `Ok(false)` by the verifiers
/// instead, so callers can tell "bad request" apart from "bad credential".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ============================================================================
    // Codec Errors
    // ============================================================================
    #[error("{parameter} {source}")]
    Codec {
        parameter: &'static str,
        source: CodecError,
    },

    // ============================================================================
    // Length Errors
    // ============================================================================
    #[error("{parameter} is not {expected} bytes")]
    LengthInvalid {
        parameter: &'static str,
        expected: usize,
        actual: usize,
    },

    // ============================================================================
    // Bound Errors
    // ============================================================================
    #[error("{parameter} too large: {size} bytes (maximum: {max} bytes)")]
    InputTooLarge {
        parameter: &'static str,
        size: usize,
        max: usize,
    },

    // ============================================================================
    // Signed URL Errors
    // ============================================================================
    #[error("signature is null")]
    SignatureMissing,

    #[error("url cannot be parsed: {0}")]
    UrlInvalid(String),

    // ============================================================================
    // Key Errors
    // ============================================================================
    #[error("publicKey is not valid JSON")]
    KeyInvalidJson,

    #[error("publicKey cannot be imported: {0}")]
    KeyInvalid(String),

    // ============================================================================
    // Router Errors
    // ============================================================================
    #[error("Invalid route pattern '{pattern}': {reason}")]
    PatternInvalid { pattern: String, reason: String },
}

impl Error {
    /// Attach the offending parameter name to a codec failure
    pub(crate) const fn codec(parameter: &'static str, source: CodecError) -> Self {
        Error::Codec { parameter, source }
    }

    /// The error category, stable across message wording changes
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::Codec {
                source: CodecError::CodePointAbove255,
                ..
            } => ErrorKind::Range,
            Error::Codec { .. } => ErrorKind::Format,
            Error::LengthInvalid { .. } => ErrorKind::Length,
            Error::InputTooLarge { .. } => ErrorKind::TooLarge,
            Error::SignatureMissing => ErrorKind::MissingSignature,
            Error::UrlInvalid(_) => ErrorKind::Url,
            Error::KeyInvalidJson | Error::KeyInvalid(_) => ErrorKind::Key,
            Error::PatternInvalid { .. } => ErrorKind::Pattern,
        }
    }

    /// Name of the parameter the error refers to, if any
    pub const fn parameter(&self) -> Option<&'static str> {
        match self {
            Error::Codec { parameter, .. }
            | Error::LengthInvalid { parameter, .. }
            | Error::InputTooLarge { parameter, .. } => Some(*parameter),
            Error::SignatureMissing => Some("signature"),
            Error::UrlInvalid(_) => Some("url"),
            Error::KeyInvalidJson | Error::KeyInvalid(_) => Some("publicKey"),
            Error::PatternInvalid { .. } => None,
        }
    }
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Text is empty or not base64URL
    Format,
    /// A character above U+00FF reached the Latin-1 path
    Range,
    /// A decoded token hash is not 64 bytes
    Length,
    /// An input exceeds its size bound
    TooLarge,
    /// A signed URL carries no `sig` parameter
    MissingSignature,
    /// The public key cannot be parsed or imported
    Key,
    /// The URL cannot be parsed
    Url,
    /// A route pattern cannot be compiled
    Pattern,
}

impl ErrorKind {
    /// Name used as `errorCode` in error responses
    pub const fn name(&self) -> &'static str {
        match self {
            ErrorKind::Format => "FormatError",
            ErrorKind::Range => "RangeError",
            ErrorKind::Length => "LengthError",
            ErrorKind::TooLarge => "InputTooLargeError",
            ErrorKind::MissingSignature => "MissingSignatureError",
            ErrorKind::Key => "KeyError",
            ErrorKind::Url => "UrlError",
            ErrorKind::Pattern => "PatternError",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Result type alias for edgeauth operations
pub type Result<T> = std::result::Result<T, Error>;
