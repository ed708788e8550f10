//! Unit tests for token error types

use jsonwebtoken::errors::{Error as JwtError, ErrorKind};

use crate::errors::TokenError;

#[test]
fn test_token_error_messages() {
    assert_eq!(TokenError::Expired.to_string(), "Token expired");
    assert_eq!(
        TokenError::SignatureInvalid.to_string(),
        "Token signature verification failed"
    );
}

#[test]
fn test_token_error_codes_are_distinct() {
    let all = [
        TokenError::Expired,
        TokenError::Malformed,
        TokenError::UnsupportedAlgorithm,
        TokenError::SignatureInvalid,
        TokenError::InvalidArgument,
        TokenError::GenerationFailed,
    ];

    let mut codes: Vec<&str> = all.iter().map(TokenError::error_code).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), all.len());
    assert_eq!(TokenError::Expired.error_code(), "TOKEN_EXPIRED");
}

#[test]
fn test_is_expired_only_for_expired() {
    assert!(TokenError::Expired.is_expired());
    assert!(!TokenError::SignatureInvalid.is_expired());
    assert!(!TokenError::Malformed.is_expired());
}

#[test]
fn test_from_jsonwebtoken_error_kinds() {
    let cases = [
        (ErrorKind::InvalidToken, TokenError::Malformed),
        (ErrorKind::InvalidSignature, TokenError::SignatureInvalid),
        (ErrorKind::InvalidAlgorithm, TokenError::UnsupportedAlgorithm),
        (ErrorKind::ExpiredSignature, TokenError::Expired),
        (ErrorKind::InvalidIssuer, TokenError::InvalidArgument),
        (
            ErrorKind::MissingRequiredClaim("sub".to_string()),
            TokenError::InvalidArgument,
        ),
    ];

    for (kind, expected) in cases {
        let err: TokenError = JwtError::from(kind).into();
        assert_eq!(err, expected);
    }
}
