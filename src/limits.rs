//! Size limit constants for input validation

// ============================================================================
// Fixed sizes
// ============================================================================

/// Length of a SHA-512 digest, and therefore of a decoded token hash
pub(crate) const TOKEN_HASH_LENGTH: usize = 64;

/// Length of a P-521 field element (x or y coordinate)
/// 521 bits round up to 66 bytes
pub(crate) const P521_COORDINATE_LENGTH: usize = 66;

// ============================================================================
// Input size limits
// ============================================================================

/// Longest Base64URL signature worth decoding (1KB)
/// A fixed-width P-521 signature is 132 bytes, 176 characters encoded, so
/// anything longer cannot verify
pub(crate) const MAX_SIGNATURE_B64_SIZE: usize = 1024;

/// Maximum size for a public JSON Web Key string (8KB)
/// A P-521 public JWK is around 300 bytes; the margin covers optional members
pub(crate) const MAX_PUBLIC_KEY_LENGTH: usize = 8 * 1024;

/// Maximum length for a signed URL (16KB)
pub(crate) const MAX_URL_LENGTH: usize = 16 * 1024;

// ============================================================================
// JWK field size limits
// ============================================================================

/// Maximum size for a Base64URL-encoded EC coordinate (x or y) field
/// 66 bytes encode to 88 characters
pub(crate) const MAX_JWK_COORDINATE_SIZE: usize = 128;
