//! Shared utilities and common types for the session token services
//!
//! This crate provides common functionality used across all workspace members:
//! - Configuration types loaded from the process environment
//! - Configuration error types
//! - Logging bootstrap for the `tracing` events the services emit

pub mod config;
pub mod errors;
pub mod logging;

// Re-export commonly used items at crate root
pub use config::{AppConfig, Environment, JwtConfig, LogFormat, LoggingConfig};
pub use errors::ConfigError;
pub use logging::init_tracing;
