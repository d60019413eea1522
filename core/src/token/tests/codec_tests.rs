//! Tests for RS256 credential signing and verification

use std::collections::HashMap;

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::errors::TokenError;
use crate::token::CredentialCodec;

use super::test_keys;

fn codec() -> CredentialCodec {
    CredentialCodec::new(&test_keys())
}

fn role_claims() -> HashMap<String, String> {
    let mut claims = HashMap::new();
    claims.insert("role".to_string(), "user".to_string());
    claims
}

#[test]
fn test_issue_verify_round_trip() {
    let codec = codec();

    let token = codec
        .issue("test_user", &role_claims(), Duration::minutes(15))
        .unwrap();
    assert!(!token.is_empty());

    let claims = codec.verify(&token).unwrap();
    assert_eq!(claims.subject(), Some("test_user"));
    assert_eq!(
        claims.get("role").and_then(|v| v.as_str()),
        Some("user")
    );
    assert!(claims.expires_at().unwrap() > Utc::now().timestamp());
}

#[test]
fn test_reserved_claims_take_precedence() {
    let codec = codec();

    let mut claims = role_claims();
    claims.insert("user_id".to_string(), "spoofed".to_string());
    claims.insert("exp".to_string(), "99999999999".to_string());

    let token = codec
        .issue("real_user", &claims, Duration::minutes(5))
        .unwrap();
    let verified = codec.verify(&token).unwrap();

    assert_eq!(verified.subject(), Some("real_user"));
    // exp ends up numeric, near now + 5 minutes, not the spoofed string
    let exp = verified.expires_at().unwrap();
    assert!(exp <= (Utc::now() + Duration::minutes(6)).timestamp());
}

#[test]
fn test_expired_token_rejected() {
    let codec = codec();

    let token = codec
        .issue("test_user", &HashMap::new(), Duration::seconds(-30))
        .unwrap();

    assert!(matches!(
        codec.verify(&token),
        Err(TokenError::TokenExpired)
    ));
}

#[test]
fn test_tampered_signature_rejected() {
    let codec = codec();

    let token = codec
        .issue("test_user", &HashMap::new(), Duration::minutes(15))
        .unwrap();

    let mut parts: Vec<&str> = token.split('.').collect();
    let tampered_sig = if parts[2].ends_with('A') {
        format!("{}B", &parts[2][..parts[2].len() - 1])
    } else {
        format!("{}A", &parts[2][..parts[2].len() - 1])
    };
    parts[2] = &tampered_sig;
    let tampered = parts.join(".");

    assert!(codec.verify(&tampered).is_err());
}

#[test]
fn test_wrong_algorithm_rejected() {
    let codec = codec();

    // Token signed with HS256 using the public key bytes as the HMAC
    // secret: the classic algorithm-confusion attack shape
    let claims = serde_json::json!({
        "user_id": "test_user",
        "exp": (Utc::now() + Duration::minutes(15)).timestamp(),
    });
    let confused = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(super::TEST_PUBLIC_KEY.as_bytes()),
    )
    .unwrap();

    assert!(matches!(
        codec.verify(&confused),
        Err(TokenError::UnexpectedAlgorithm { alg }) if alg == "HS256"
    ));
}

#[test]
fn test_garbage_token_rejected() {
    let codec = codec();

    for garbage in ["not-a-jwt", "a.b.c", "eyJhbGciOiJSUzI1NiJ9"] {
        assert!(codec.verify(garbage).is_err(), "accepted: {garbage}");
    }
}

#[test]
fn test_missing_exp_rejected() {
    let codec = codec();

    let claims = serde_json::json!({ "user_id": "test_user" });
    let token = encode(
        &Header::new(Algorithm::RS256),
        &claims,
        test_keys().encoding_key(),
    )
    .unwrap();

    assert!(matches!(
        codec.verify(&token),
        Err(TokenError::MissingClaim { claim }) if claim == "exp"
    ));
}
