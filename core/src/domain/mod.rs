//! Domain layer containing the token entities.

pub mod entities;

// Re-export commonly used domain types
pub use entities::{
    ClaimMap, TokenClaims, TokenKind, TokenPair, EXPIRES_AT_CLAIM, ISSUED_AT_CLAIM,
    RESERVED_CLAIMS, ROLE_CLAIM, SUBJECT_CLAIM,
};
