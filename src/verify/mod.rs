//! Credential verification
//!
//! Each verifier validates its inputs, transforms them and runs one cryptographic
//! check. Malformed input is an [`Error`](crate::Error); a well-formed credential
//! that does not match is `Ok(false)`.

mod signature;
mod signed_url;
mod token;

pub use signature::verify_signature;
pub use signed_url::verify_signed_url;
pub use token::verify_token;
