//! Token signing configuration

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Default access token lifetime: 1 hour
pub const DEFAULT_ACCESS_TOKEN_EXPIRY_MS: i64 = 3_600_000;

/// Default refresh token lifetime: 7 days
pub const DEFAULT_REFRESH_TOKEN_EXPIRY_MS: i64 = 604_800_000;

/// Environment variable holding the signing secret
pub const ENV_JWT_SECRET: &str = "JWT_SECRET";

/// Environment variable holding the access token lifetime in milliseconds
pub const ENV_JWT_EXPIRATION: &str = "JWT_EXPIRATION";

/// Environment variable holding the refresh token lifetime in milliseconds
pub const ENV_JWT_REFRESH_EXPIRATION: &str = "JWT_REFRESH_EXPIRATION";

/// JWT signing configuration
#[derive(Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret passphrase the signing key is derived from
    #[serde(skip_serializing)]
    pub secret: String,

    /// Access token lifetime in milliseconds
    #[serde(default = "default_access_token_expiry")]
    pub access_token_expiry_ms: i64,

    /// Refresh token lifetime in milliseconds
    #[serde(default = "default_refresh_token_expiry")]
    pub refresh_token_expiry_ms: i64,
}

// The secret must never reach a log line, so Debug is written by hand.
impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("access_token_expiry_ms", &self.access_token_expiry_ms)
            .field("refresh_token_expiry_ms", &self.refresh_token_expiry_ms)
            .finish()
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret and default lifetimes
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            access_token_expiry_ms: DEFAULT_ACCESS_TOKEN_EXPIRY_MS,
            refresh_token_expiry_ms: DEFAULT_REFRESH_TOKEN_EXPIRY_MS,
        }
    }

    /// Set access token expiry in minutes, saturating at the `i64` range
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry_ms = minutes.saturating_mul(60_000);
        self
    }

    /// Set refresh token expiry in days, saturating at the `i64` range
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry_ms = days.saturating_mul(86_400_000);
        self
    }

    /// Load configuration from the process environment
    ///
    /// `JWT_SECRET` is required. `JWT_EXPIRATION` and `JWT_REFRESH_EXPIRATION`
    /// are optional lifetimes in milliseconds.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// * `ConfigError::MissingVariable` - the secret is absent
    /// * `ConfigError::InvalidVariable` - a lifetime is not an integer
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup(ENV_JWT_SECRET).ok_or_else(|| ConfigError::MissingVariable {
            name: ENV_JWT_SECRET.to_string(),
        })?;

        let access_token_expiry_ms =
            parse_millis(&lookup, ENV_JWT_EXPIRATION, DEFAULT_ACCESS_TOKEN_EXPIRY_MS)?;
        let refresh_token_expiry_ms = parse_millis(
            &lookup,
            ENV_JWT_REFRESH_EXPIRATION,
            DEFAULT_REFRESH_TOKEN_EXPIRY_MS,
        )?;

        Ok(Self {
            secret,
            access_token_expiry_ms,
            refresh_token_expiry_ms,
        })
    }

    /// Access token lifetime in whole seconds
    pub fn access_token_expiry_seconds(&self) -> i64 {
        self.access_token_expiry_ms / 1000
    }

    /// Refresh token lifetime in whole seconds
    pub fn refresh_token_expiry_seconds(&self) -> i64 {
        self.refresh_token_expiry_ms / 1000
    }
}

fn parse_millis<F>(lookup: &F, name: &str, default: i64) -> Result<i64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidVariable {
            name: name.to_string(),
            value: raw,
        }),
    }
}

fn default_access_token_expiry() -> i64 {
    DEFAULT_ACCESS_TOKEN_EXPIRY_MS
}

fn default_refresh_token_expiry() -> i64 {
    DEFAULT_REFRESH_TOKEN_EXPIRY_MS
}
