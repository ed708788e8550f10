//! # Session Tokens Core
//!
//! Token lifecycle for session authentication: signing access and refresh
//! tokens, verifying them, extracting their claims and answering the
//! expiration and identity questions the request layer asks.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
