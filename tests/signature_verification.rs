mod common;

use common::TestKey;
use edgeauth::{
    ErrorKind, base64url_to_bytes, bytes_to_base64url, latin1_string_to_bytes, verify_signature,
};

const DATA: &str = "https://example.com/foo?r=1";

#[tokio::test]
async fn test_valid_signature() {
    common::init_tracing();
    let key = TestKey::generate();
    let signature = key.sign(DATA.as_bytes());

    let data = latin1_string_to_bytes(DATA).unwrap();
    assert_eq!(verify_signature(&data, &signature, &key.public_jwk()).await, Ok(true));
}

#[tokio::test]
async fn test_tampered_signature() {
    let key = TestKey::generate();
    let mut signature = base64url_to_bytes(&key.sign(DATA.as_bytes())).unwrap();
    signature[0] ^= 0x01;

    let result = verify_signature(
        DATA.as_bytes(),
        &bytes_to_base64url(&signature),
        &key.public_jwk(),
    )
    .await;
    assert_eq!(result, Ok(false));
}

#[tokio::test]
async fn test_tampered_data() {
    let key = TestKey::generate();
    let signature = key.sign(DATA.as_bytes());

    let result = verify_signature(b"https://example.com/foo?r=2", &signature, &key.public_jwk()).await;
    assert_eq!(result, Ok(false));
}

#[tokio::test]
async fn test_signature_of_other_key() {
    let key = TestKey::generate();
    let other = TestKey::generate();
    let signature = other.sign(DATA.as_bytes());

    let result = verify_signature(DATA.as_bytes(), &signature, &key.public_jwk()).await;
    assert_eq!(result, Ok(false));
}

#[tokio::test]
async fn test_truncated_signature() {
    let key = TestKey::generate();
    let signature = base64url_to_bytes(&key.sign(DATA.as_bytes())).unwrap();

    let result = verify_signature(
        DATA.as_bytes(),
        &bytes_to_base64url(&signature[..64]),
        &key.public_jwk(),
    )
    .await;
    assert_eq!(result, Ok(false));
}

#[tokio::test]
async fn test_overlong_signature() {
    let key = TestKey::generate();
    let signature = "A".repeat(1100);

    let result = verify_signature(DATA.as_bytes(), &signature, &key.public_jwk()).await;
    assert_eq!(result, Ok(false));

    let error = verify_signature(DATA.as_bytes(), &signature, "not json")
        .await
        .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Key);

    let error = verify_signature(DATA.as_bytes(), &format!("{signature}$"), &key.public_jwk())
        .await
        .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Format);
}

#[tokio::test]
async fn test_public_key_off_curve() {
    let key = TestKey::generate();
    let signature = key.sign(DATA.as_bytes());
    let coordinate = bytes_to_base64url(&[0x01; 66]);
    let jwk = format!(r#"{{"kty":"EC","crv":"P-521","x":"{coordinate}","y":"{coordinate}"}}"#);

    let error = verify_signature(DATA.as_bytes(), &signature, &jwk)
        .await
        .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Key);
    assert_eq!(error.parameter(), Some("publicKey"));
}

#[tokio::test]
async fn test_signature_outside_alphabet() {
    let key = TestKey::generate();

    for signature in ["Test_invalid$", ""] {
        let error = verify_signature(DATA.as_bytes(), signature, &key.public_jwk())
            .await
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Format);
        assert_eq!(error.parameter(), Some("signature"));
    }
}

#[tokio::test]
async fn test_public_key_not_json() {
    let key = TestKey::generate();
    let signature = key.sign(DATA.as_bytes());

    let error = verify_signature(DATA.as_bytes(), &signature, "not json")
        .await
        .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Key);
    assert_eq!(error.to_string(), "publicKey is not valid JSON");
}

#[tokio::test]
async fn test_public_key_for_other_curve() {
    let key = TestKey::generate();
    let signature = key.sign(DATA.as_bytes());
    let jwk = key.public_jwk().replace("P-521", "P-256");

    let error = verify_signature(DATA.as_bytes(), &signature, &jwk)
        .await
        .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Key);
    assert_eq!(error.parameter(), Some("publicKey"));
}

#[tokio::test]
async fn test_signature_checked_before_key() {
    let error = verify_signature(DATA.as_bytes(), "Test_invalid$", "not json")
        .await
        .unwrap_err();
    assert_eq!(error.parameter(), Some("signature"));
}
