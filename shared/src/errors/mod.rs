//! Configuration error types
//!
//! Every variant here is fatal: it is produced while the process is being
//! configured, and a process that receives one should refuse to start.

use thiserror::Error;

/// Errors raised while building configuration or constructing services from it
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Signing secret must be at least {min} bytes long (got {actual})")]
    SecretTooShort { min: usize, actual: usize },

    #[error("Lifetime `{name}` must be non-negative and representable (got {value} ms)")]
    InvalidLifetime { name: &'static str, value: i64 },

    #[error("Missing required environment variable: {name}")]
    MissingVariable { name: String },

    #[error("Invalid value for environment variable {name}: {value}")]
    InvalidVariable { name: String, value: String },
}

impl ConfigError {
    /// Stable code for the error, suitable for startup diagnostics
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::SecretTooShort { .. } => "SECRET_TOO_SHORT",
            ConfigError::InvalidLifetime { .. } => "INVALID_LIFETIME",
            ConfigError::MissingVariable { .. } => "MISSING_VARIABLE",
            ConfigError::InvalidVariable { .. } => "INVALID_VARIABLE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::SecretTooShort { min: 32, actual: 5 };
        assert_eq!(
            err.to_string(),
            "Signing secret must be at least 32 bytes long (got 5)"
        );

        let err = ConfigError::MissingVariable { name: "JWT_SECRET".to_string() };
        assert_eq!(err.to_string(), "Missing required environment variable: JWT_SECRET");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ConfigError::InvalidLifetime { name: "access", value: -1 }.error_code(),
            "INVALID_LIFETIME"
        );
        assert_eq!(
            ConfigError::InvalidVariable {
                name: "JWT_EXPIRATION".to_string(),
                value: "soon".to_string(),
            }
            .error_code(),
            "INVALID_VARIABLE"
        );
    }
}
