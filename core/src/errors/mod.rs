//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

pub use types::TokenError;

// Construction-time errors live with the configuration they validate
pub use st_shared::errors::ConfigError;

pub type TokenResult<T> = Result<T, TokenError>;
