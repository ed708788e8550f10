//! Token entities for signed session tokens.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Free-form claims carried in a token payload next to the reserved ones
pub type ClaimMap = serde_json::Map<String, Value>;

/// Subject claim name
pub const SUBJECT_CLAIM: &str = "sub";

/// Issued-at claim name
pub const ISSUED_AT_CLAIM: &str = "iat";

/// Expiration claim name
pub const EXPIRES_AT_CLAIM: &str = "exp";

/// Role claim name
pub const ROLE_CLAIM: &str = "role";

/// Claims the token service always sets itself
pub const RESERVED_CLAIMS: [&str; 3] = [SUBJECT_CLAIM, ISSUED_AT_CLAIM, EXPIRES_AT_CLAIM];

/// Which lifetime a token was issued with.
///
/// Nothing in the payload records this; it only exists on the issuing side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded payload of a token
///
/// Timestamps are NumericDate values (whole seconds since the Unix epoch).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    sub: String,
    iat: i64,
    exp: i64,
    #[serde(flatten)]
    extra: ClaimMap,
}

impl TokenClaims {
    /// Creates claims issued at `issued_at` that expire `lifetime` later
    ///
    /// Entries of `extra` named like a reserved claim are dropped.
    ///
    /// # Returns
    ///
    /// `None` if `issued_at + lifetime` is not a representable instant
    pub fn new(
        subject: impl Into<String>,
        issued_at: DateTime<Utc>,
        lifetime: Duration,
        mut extra: ClaimMap,
    ) -> Option<Self> {
        let expires_at = issued_at.checked_add_signed(lifetime)?;
        extra.retain(|name, _| !RESERVED_CLAIMS.contains(&name.as_str()));

        Some(Self {
            sub: subject.into(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            extra,
        })
    }

    /// The principal identifier
    pub fn subject(&self) -> &str {
        &self.sub
    }

    /// Issued-at as a NumericDate
    pub fn iat(&self) -> i64 {
        self.iat
    }

    /// Expiration as a NumericDate
    pub fn exp(&self) -> i64 {
        self.exp
    }

    /// Issued-at instant; out-of-range values clamp to the earliest instant
    pub fn issued_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.iat, 0).unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// Expiration instant; out-of-range values clamp to the earliest instant
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// The role claim, if the token carries one as a string
    pub fn role(&self) -> Option<&str> {
        self.extra.get(ROLE_CLAIM).and_then(Value::as_str)
    }

    /// Any non-reserved claim by name
    pub fn claim(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }

    /// All non-reserved claims
    pub fn extra_claims(&self) -> &ClaimMap {
        &self.extra
    }

    /// A token is expired once its expiration instant is not after `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at() <= now
    }
}

/// Token pair returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Signed access token
    pub access_token: String,

    /// Signed refresh token
    pub refresh_token: String,

    /// Access token lifetime in seconds
    pub access_expires_in: i64,

    /// Refresh token lifetime in seconds
    pub refresh_expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(
        access_token: String,
        refresh_token: String,
        access_expires_in: i64,
        refresh_expires_in: i64,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            access_expires_in,
            refresh_expires_in,
        }
    }
}
