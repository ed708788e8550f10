//! Configuration for the token service

use chrono::{Duration, Utc};
use st_shared::config::auth::{DEFAULT_ACCESS_TOKEN_EXPIRY_MS, DEFAULT_REFRESH_TOKEN_EXPIRY_MS};
use st_shared::config::JwtConfig;

use crate::errors::ConfigError;

/// Configuration for the token service
#[derive(Clone)]
pub struct TokenServiceConfig {
    /// Secret passphrase the signing key is derived from
    pub secret: String,
    /// Access token lifetime in milliseconds
    pub access_token_expiry_ms: i64,
    /// Refresh token lifetime in milliseconds
    pub refresh_token_expiry_ms: i64,
}

impl std::fmt::Debug for TokenServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenServiceConfig")
            .field("secret", &"<redacted>")
            .field("access_token_expiry_ms", &self.access_token_expiry_ms)
            .field("refresh_token_expiry_ms", &self.refresh_token_expiry_ms)
            .finish()
    }
}

impl TokenServiceConfig {
    /// Creates a configuration with the default lifetimes (1 hour / 7 days)
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            access_token_expiry_ms: DEFAULT_ACCESS_TOKEN_EXPIRY_MS,
            refresh_token_expiry_ms: DEFAULT_REFRESH_TOKEN_EXPIRY_MS,
        }
    }

    /// Overrides the access token lifetime
    pub fn with_access_token_expiry_ms(mut self, millis: i64) -> Self {
        self.access_token_expiry_ms = millis;
        self
    }

    /// Overrides the refresh token lifetime
    pub fn with_refresh_token_expiry_ms(mut self, millis: i64) -> Self {
        self.refresh_token_expiry_ms = millis;
        self
    }

    /// Access token lifetime as a duration
    pub fn access_token_lifetime(&self) -> Duration {
        Duration::milliseconds(self.access_token_expiry_ms)
    }

    /// Refresh token lifetime as a duration
    pub fn refresh_token_lifetime(&self) -> Duration {
        Duration::milliseconds(self.refresh_token_expiry_ms)
    }

    /// Rejects lifetimes that are negative or cannot be added to the current time
    pub(crate) fn validate_lifetimes(&self) -> Result<(), ConfigError> {
        check_lifetime("access_token_expiry_ms", self.access_token_expiry_ms)?;
        check_lifetime("refresh_token_expiry_ms", self.refresh_token_expiry_ms)
    }
}

fn check_lifetime(name: &'static str, millis: i64) -> Result<(), ConfigError> {
    let representable = millis >= 0
        && Utc::now()
            .checked_add_signed(Duration::milliseconds(millis))
            .is_some();
    if representable {
        Ok(())
    } else {
        Err(ConfigError::InvalidLifetime { name, value: millis })
    }
}

impl From<JwtConfig> for TokenServiceConfig {
    fn from(config: JwtConfig) -> Self {
        Self {
            secret: config.secret,
            access_token_expiry_ms: config.access_token_expiry_ms,
            refresh_token_expiry_ms: config.refresh_token_expiry_ms,
        }
    }
}
