//! Configuration module
//!
//! - `auth` - Token signing secret and token lifetimes
//! - `environment` - Environment detection and logging configuration

pub mod auth;
pub mod environment;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use auth::JwtConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Token signing configuration
    pub jwt: JwtConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Build configuration for an explicit environment and signing config
    pub fn new(environment: Environment, jwt: JwtConfig) -> Self {
        Self {
            environment,
            jwt,
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Load configuration from environment
    ///
    /// Variables from a `.env` file in the working directory are loaded first;
    /// variables already set in the process take precedence over the file.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded environment file");
        }
        let environment = Environment::from_env();
        let jwt = JwtConfig::from_env()?;
        Ok(Self::new(environment, jwt))
    }
}
