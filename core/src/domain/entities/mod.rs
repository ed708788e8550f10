//! Domain entities.

pub mod token;

// Re-export commonly used types
pub use token::{
    ClaimMap, TokenClaims, TokenKind, TokenPair,
    EXPIRES_AT_CLAIM, ISSUED_AT_CLAIM, RESERVED_CLAIMS, ROLE_CLAIM, SUBJECT_CLAIM,
};
