//! Shared helpers for the integration tests

#![allow(dead_code)]

use aws_lc_rs::rand::SystemRandom;
use aws_lc_rs::signature::{ECDSA_P521_SHA512_FIXED_SIGNING, EcdsaKeyPair, KeyPair};
use edgeauth::bytes_to_base64url;

/// Signing side of a freshly generated P-521 key
pub struct TestKey {
    key_pair: EcdsaKeyPair,
    x: String,
    y: String,
}

impl TestKey {
    pub fn generate() -> Self {
        let key_pair = EcdsaKeyPair::generate(&ECDSA_P521_SHA512_FIXED_SIGNING).unwrap();
        let point = key_pair.public_key().as_ref();
        let x = bytes_to_base64url(&point[1..67]);
        let y = bytes_to_base64url(&point[67..]);
        Self { key_pair, x, y }
    }

    /// Public key as exported by Web Crypto (`crypto.subtle.exportKey("jwk", ...)`)
    pub fn public_jwk(&self) -> String {
        format!(
            r#"{{"crv":"P-521","ext":true,"key_ops":["verify"],"kty":"EC","x":"{}","y":"{}"}}"#,
            self.x, self.y
        )
    }

    /// Fixed-width signature over `data`, base64URL encoded
    pub fn sign(&self, data: &[u8]) -> String {
        let signature = self.key_pair.sign(&SystemRandom::new(), data).unwrap();
        bytes_to_base64url(signature.as_ref())
    }

    /// Append a `sig` parameter covering `url` as given
    pub fn sign_url(&self, url: &str) -> String {
        let separator = if url.contains('?') { '&' } else { '?' };
        format!("{url}{separator}sig={}", self.sign(url.as_bytes()))
    }
}

/// SHA-512 of `token`, base64URL encoded
pub fn token_hash(token: &str) -> String {
    let digest = aws_lc_rs::digest::digest(&aws_lc_rs::digest::SHA512, token.as_bytes());
    bytes_to_base64url(digest.as_ref())
}

/// Route verification traces to the test output; `RUST_LOG=edgeauth=trace` shows them
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
