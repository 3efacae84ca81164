//! JWK (JSON Web Key) parsing and import
//!
//! Imports an EC P-521 public key for ECDSA/SHA-512 verification only. The
//! checks follow the Web Crypto JWK import rules for a non-extractable,
//! verify-only ECDSA key.

use crate::binary::base64url_to_bytes;
use crate::error::{Error, Result};
use crate::limits::{MAX_JWK_COORDINATE_SIZE, MAX_PUBLIC_KEY_LENGTH};
use crate::utils::der::p521_spki_from_xy;

use aws_lc_rs::signature::{self, ParsedPublicKey};
use miniserde::Deserialize;

/// JSON Web Key (JWK) structure
///
/// Only the members relevant to EC public key import are read; any other
/// member is ignored.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Jwk {
    /// Key type, must be "EC"
    pub kty: Option<String>,
    /// Elliptic curve name, must be "P-521"
    pub crv: Option<String>,
    /// x-coordinate (Base64URL-encoded)
    pub x: Option<String>,
    /// y-coordinate (Base64URL-encoded)
    pub y: Option<String>,
    /// Private scalar; its presence makes this a private key
    pub d: Option<String>,
    /// Algorithm (RFC 7517 Section 4.4)
    pub alg: Option<String>,
    /// Key use (RFC 7517 Section 4.2)
    #[serde(rename = "use")]
    pub key_use: Option<String>,
    /// Key operations (RFC 7517 Section 4.3)
    pub key_ops: Option<Vec<String>>,
}

impl Jwk {
    /// Parse a JWK from its JSON text
    pub(crate) fn from_json(text: &str) -> Result<Self> {
        if text.len() > MAX_PUBLIC_KEY_LENGTH {
            return Err(Error::InputTooLarge {
                parameter: "publicKey",
                size: text.len(),
                max: MAX_PUBLIC_KEY_LENGTH,
            });
        }

        miniserde::json::from_str(text).map_err(|_| Error::KeyInvalidJson)
    }

    /// Validate the key members and convert to DER SubjectPublicKeyInfo
    pub(crate) fn to_p521_spki(&self) -> Result<Vec<u8>> {
        self.validate_structure()?;
        self.validate_usage()?;

        let x = self.coordinate("x", self.x.as_deref())?;
        let y = self.coordinate("y", self.y.as_deref())?;

        p521_spki_from_xy(&x, &y)
    }

    /// Check key type, curve and that no private material is present
    fn validate_structure(&self) -> Result<()> {
        match self.kty.as_deref() {
            Some("EC") => {}
            Some(kty) => {
                return Err(Error::KeyInvalid(format!(
                    "key type mismatch: expected EC, found {kty}"
                )));
            }
            None => return Err(Error::KeyInvalid("missing key type (kty)".into())),
        }

        match self.crv.as_deref() {
            Some("P-521") => {}
            Some(crv) => {
                return Err(Error::KeyInvalid(format!(
                    "curve mismatch: expected P-521, found {crv}"
                )));
            }
            None => return Err(Error::KeyInvalid("missing curve (crv)".into())),
        }

        // A private key cannot be used for verification
        if self.d.is_some() {
            return Err(Error::KeyInvalid(
                "private key cannot be imported for verification".into(),
            ));
        }

        Ok(())
    }

    /// Check that the key may be used to verify ES512 signatures
    fn validate_usage(&self) -> Result<()> {
        if let Some(use_val) = &self.key_use {
            if use_val != "sig" {
                return Err(Error::KeyInvalid(format!(
                    "key use mismatch: expected 'sig', found '{use_val}'"
                )));
            }
        }

        if let Some(ops) = &self.key_ops {
            if !ops.iter().any(|op| op == "verify") {
                return Err(Error::KeyInvalid(
                    "key_ops does not allow 'verify'".into(),
                ));
            }
        }

        if let Some(alg) = &self.alg {
            if alg != "ES512" {
                return Err(Error::KeyInvalid(format!(
                    "algorithm mismatch: P-521 requires ES512, found {alg}"
                )));
            }
        }

        Ok(())
    }

    fn coordinate(&self, field: &str, value: Option<&str>) -> Result<Vec<u8>> {
        let value = value
            .ok_or_else(|| Error::KeyInvalid(format!("ecdsa key missing {field} coordinate")))?;

        if value.len() > MAX_JWK_COORDINATE_SIZE {
            return Err(Error::KeyInvalid(format!(
                "field '{field}' too large: {} bytes (maximum: {MAX_JWK_COORDINATE_SIZE} bytes)",
                value.len()
            )));
        }

        base64url_to_bytes(value)
            .map_err(|e| Error::KeyInvalid(format!("failed to decode {field}: {field} {e}")))
    }
}

/// Imported verify-only ECDSA P-521 public key
///
/// The point is validated on import. There is no way to export the key or
/// sign with it.
#[derive(Debug, Clone)]
pub(crate) struct VerifyingKey {
    key: ParsedPublicKey,
}

impl VerifyingKey {
    /// Import a public key from JWK text
    pub(crate) fn from_jwk(text: &str) -> Result<Self> {
        let spki = Jwk::from_json(text)?.to_p521_spki()?;
        let key = ParsedPublicKey::new(&signature::ECDSA_P521_SHA512_FIXED, spki)
            .map_err(|e| Error::KeyInvalid(format!("invalid P-521 public key: {e}")))?;
        tracing::trace!("imported P-521 public key");
        Ok(Self { key })
    }

    /// Verify a fixed-width (`r || s`) ECDSA P-521 / SHA-512 signature over `data`
    ///
    /// Any mismatch, including a signature of the wrong length, is `false`.
    pub(crate) fn verify(&self, data: &[u8], signature_bytes: &[u8]) -> bool {
        self.key.verify_sig(data, signature_bytes).is_ok()
    }
}
