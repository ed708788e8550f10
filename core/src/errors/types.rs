//! Token error types
//!
//! Every variant is a recoverable, per-call outcome. The boolean validation
//! gates on `TokenService` collapse all of them into a single answer; the
//! extraction entry points return them so callers can tell "expired" from
//! "forged".

use thiserror::Error;

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Malformed token")]
    Malformed,

    #[error("Unsupported token signing algorithm")]
    UnsupportedAlgorithm,

    #[error("Token signature verification failed")]
    SignatureInvalid,

    #[error("Invalid token argument")]
    InvalidArgument,

    #[error("Token generation failed")]
    GenerationFailed,
}

impl TokenError {
    /// Stable code for programmatic handling by the request layer
    pub fn error_code(&self) -> &'static str {
        match self {
            TokenError::Expired => "TOKEN_EXPIRED",
            TokenError::Malformed => "TOKEN_MALFORMED",
            TokenError::UnsupportedAlgorithm => "TOKEN_UNSUPPORTED_ALGORITHM",
            TokenError::SignatureInvalid => "TOKEN_SIGNATURE_INVALID",
            TokenError::InvalidArgument => "TOKEN_INVALID_ARGUMENT",
            TokenError::GenerationFailed => "TOKEN_GENERATION_FAILED",
        }
    }

    /// Whether the token carried a valid signature and only its lifetime ran out
    pub fn is_expired(&self) -> bool {
        matches!(self, TokenError::Expired)
    }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::InvalidToken
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_) => TokenError::Malformed,
            ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
            ErrorKind::InvalidAlgorithm
            | ErrorKind::InvalidAlgorithmName
            | ErrorKind::MissingAlgorithm => TokenError::UnsupportedAlgorithm,
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::InvalidArgument,
        }
    }
}
