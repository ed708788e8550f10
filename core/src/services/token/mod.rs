//! Token service module
//!
//! This module handles all token-related operations:
//! - Signing key derivation from the configured secret
//! - Access and refresh token generation (HS512)
//! - Signature verification and claim extraction
//! - Expiration and identity checks for request authorization

mod config;
mod service;
mod signing_key;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
pub use signing_key::{SigningKey, MIN_SECRET_BYTES, SIGNING_ALGORITHM, SIGNING_ALGORITHM_NAME};
