//! Signed URL canonicalization
//!
//! A signed URL carries its signature in the `sig` query parameter. The signed
//! bytes are the URL as serialized by the WHATWG URL parser after every `sig`
//! pair has been removed and the remaining query re-serialized as
//! `application/x-www-form-urlencoded`.

use crate::error::{Error, Result};
use crate::limits::MAX_URL_LENGTH;

/// Name of the query parameter holding the signature
pub(crate) const SIGNATURE_PARAMETER: &str = "sig";

/// A parsed signed URL split into its canonical form and signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SignedUrl {
    /// Serialized URL without the signature, exactly as it was signed
    pub canonical: String,
    /// The base64URL signature taken from the `sig` parameter
    pub signature: String,
}

impl SignedUrl {
    /// Parse a URL and separate the signature from the signed content
    pub(crate) fn parse(url: &str) -> Result<Self> {
        if url.len() > MAX_URL_LENGTH {
            return Err(Error::InputTooLarge {
                parameter: "url",
                size: url.len(),
                max: MAX_URL_LENGTH,
            });
        }

        // Parsing percent-encodes every non-ASCII character
        let mut parsed = url
            .parse::<url::Url>()
            .map_err(|e| Error::UrlInvalid(e.to_string()))?;

        let signature = parsed
            .query_pairs()
            .find(|(name, _)| name == SIGNATURE_PARAMETER)
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())
            .ok_or(Error::SignatureMissing)?;

        let remaining: Vec<(String, String)> = parsed
            .query_pairs()
            .filter(|(name, _)| name != SIGNATURE_PARAMETER)
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect();

        if remaining.is_empty() {
            parsed.set_query(None);
        } else {
            parsed
                .query_pairs_mut()
                .clear()
                .extend_pairs(remaining);
        }

        Ok(Self {
            canonical: parsed.into(),
            signature,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_removed() {
        let signed = SignedUrl::parse("https://example.com/foo?r=1&sig=abc_-").unwrap();
        assert_eq!(signed.canonical, "https://example.com/foo?r=1");
        assert_eq!(signed.signature, "abc_-");
    }

    #[test]
    fn test_signature_first_in_query() {
        let signed = SignedUrl::parse("https://example.com/foo?sig=abc&r=1&s=2").unwrap();
        assert_eq!(signed.canonical, "https://example.com/foo?r=1&s=2");
    }

    #[test]
    fn test_only_signature_drops_query() {
        let signed = SignedUrl::parse("https://example.com/foo?sig=abc").unwrap();
        assert_eq!(signed.canonical, "https://example.com/foo");
    }

    #[test]
    fn test_every_signature_removed_first_used() {
        let signed = SignedUrl::parse("https://example.com/?sig=first&a=1&sig=second").unwrap();
        assert_eq!(signed.signature, "first");
        assert_eq!(signed.canonical, "https://example.com/?a=1");
    }

    #[test]
    fn test_fragment_kept() {
        let signed = SignedUrl::parse("https://example.com/foo?r=1&sig=abc#frag").unwrap();
        assert_eq!(signed.canonical, "https://example.com/foo?r=1#frag");
    }

    #[test]
    fn test_query_reserialized() {
        let signed = SignedUrl::parse("https://example.com/?q=a%20b&sig=abc").unwrap();
        assert_eq!(signed.canonical, "https://example.com/?q=a+b");
    }

    #[test]
    fn test_non_ascii_encoded() {
        let signed = SignedUrl::parse("https://example.com/caf\u{e9}?n=\u{e9}&sig=abc").unwrap();
        assert_eq!(signed.canonical, "https://example.com/caf%C3%A9?n=%C3%A9");
        assert!(signed.canonical.is_ascii());
    }

    #[test]
    fn test_host_normalized() {
        let signed = SignedUrl::parse("HTTPS://Example.COM:443/foo?sig=abc").unwrap();
        assert_eq!(signed.canonical, "https://example.com/foo");
    }

    #[test]
    fn test_missing_signature() {
        assert_eq!(
            SignedUrl::parse("https://test.com"),
            Err(Error::SignatureMissing)
        );
        assert_eq!(
            SignedUrl::parse("https://test.com/?r=1"),
            Err(Error::SignatureMissing)
        );
    }

    #[test]
    fn test_empty_signature_is_missing() {
        assert_eq!(
            SignedUrl::parse("https://test.com/?sig="),
            Err(Error::SignatureMissing)
        );
    }

    #[test]
    fn test_invalid_url() {
        assert!(matches!(
            SignedUrl::parse("/relative?sig=abc"),
            Err(Error::UrlInvalid(_))
        ));
        assert!(matches!(SignedUrl::parse(""), Err(Error::UrlInvalid(_))));
    }

    #[test]
    fn test_url_too_long() {
        let long_url = "https://example.com/".to_string() + &"a".repeat(MAX_URL_LENGTH);
        assert!(matches!(
            SignedUrl::parse(&long_url),
            Err(Error::InputTooLarge { parameter: "url", .. })
        ));
    }
}
