//! Signed URL verification

use crate::binary::latin1_string_to_bytes;
use crate::error::{Error, Result};
use crate::url::SignedUrl;

use super::verify_signature;

/// Verify a URL signed with the signature in its `sig` query parameter
///
/// The signed content is the URL without `sig`, re-serialized in canonical form.
/// Adding, removing or re-ordering other query parameters invalidates it.
///
/// # Errors
/// * `Error::UrlInvalid` when `url` is not an absolute URL
/// * `Error::SignatureMissing` when there is no (or an empty) `sig` parameter
/// * every error of [`verify_signature`]
pub async fn verify_signed_url(url: &str, public_key: &str) -> Result<bool> {
    let signed = SignedUrl::parse(url).inspect_err(|e| {
        tracing::debug!(parameter = "url", error = %e, "rejected: not a signed URL");
    })?;

    // The serializer only emits ASCII, so this cannot fail in practice
    let canonical = latin1_string_to_bytes(&signed.canonical).map_err(|e| Error::codec("url", e))?;

    verify_signature(&canonical, &signed.signature, public_key).await
}
