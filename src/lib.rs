//! # edgeauth - Request Verification for Edge Handlers
//!
//! > Bearer tokens, ECDSA signatures and signed URLs, verified without state.
//!
//! **edgeauth** checks the credentials an edge-deployed HTTP handler receives:
//!
//! - **Tokens**: a base64URL token is hashed with SHA-512 and compared in constant
//!   time with the stored hash.
//! - **Signatures**: ECDSA P-521 / SHA-512 signatures in the fixed-width `r || s`
//!   layout, checked with a public JSON Web Key.
//! - **Signed URLs**: the signature travels in the `sig` query parameter and covers
//!   the canonical URL without it.
//!
//! Around these sit the base64URL/Latin-1 codecs they build on, a small
//! pattern-based [`Router`] and JSON response helpers.
//!
//! ## Quick Start
//!
//! ```ignore
//! use edgeauth::*;
//!
//! match verify_signed_url(request_url, PUBLIC_JWK).await {
//!     Ok(true) => serve(),
//!     Ok(false) => create_response(None, StatusCode::FORBIDDEN, HeaderMap::new()),
//!     Err(error) => create_response_from_error(&error, StatusCode::BAD_REQUEST, HeaderMap::new()),
//! }
//! ```
//!
//! ## Errors and Results
//!
//! Verifiers return `Result<bool>`. `Ok(false)` means the credential is well-formed
//! but wrong. Malformed input is always an [`Error`], whose [`ErrorKind`] and
//! parameter name tell the caller what was wrong with the request.
//!
//! ## Security
//!
//! ### Timing Attack Protection
//!
//! Token hashes are compared with the [`constant_time_eq`](https://crates.io/crates/constant_time_eq)
//! crate, never with a short-circuiting comparison.
//!
//! ### Key Restrictions
//!
//! Public keys are imported for ECDSA P-521 verification only. Keys of another type
//! or curve, private keys and keys whose `use`, `key_ops` or `alg` forbid ES512
//! verification are rejected.
//!
//! ## References
//!
//! - [RFC 4648](https://datatracker.ietf.org/doc/html/rfc4648): Base64URL encoding
//! - [RFC 7517](https://datatracker.ietf.org/doc/html/rfc7517): JSON Web Key (JWK)
//! - [RFC 7518](https://datatracker.ietf.org/doc/html/rfc7518#section-3.4): ECDSA signature layout

mod error;
mod jwk;

// Internal modules
pub(crate) mod limits;
pub(crate) mod url;
pub(crate) mod utils;

// Public Interface
pub mod binary;
pub mod response;
pub mod router;
pub mod verify;

pub use binary::{
    CodecError, base64url_to_bytes, bytes_to_base64url, bytes_to_latin1_string, is_base64url,
    latin1_string_to_bytes,
};
pub use error::{Error, ErrorKind, Result};
pub use response::{create_response, create_response_from_error};
pub use router::{Handler, RouteMatch, Router, UrlPattern};
pub use verify::{verify_signature, verify_signed_url, verify_token};
