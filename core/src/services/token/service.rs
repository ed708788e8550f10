//! Main token service implementation

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Header, Validation};
use serde::Deserialize;
use serde_json::Value;

use crate::domain::entities::token::{ClaimMap, TokenClaims, TokenKind, TokenPair, ROLE_CLAIM};
use crate::errors::{ConfigError, TokenError, TokenResult};

use super::config::TokenServiceConfig;
use super::signing_key::{SigningKey, SIGNING_ALGORITHM, SIGNING_ALGORITHM_NAME};

/// The only header field inspected before the signature is checked
#[derive(Deserialize)]
struct RawHeader {
    alg: String,
}

/// Issues and verifies HS512-signed session tokens
///
/// All state is fixed at construction, so a single instance can be shared
/// across threads (behind a reference or an `Arc`) without locking.
#[derive(Debug, Clone)]
pub struct TokenService {
    signing_key: SigningKey,
    access_token_lifetime: Duration,
    refresh_token_lifetime: Duration,
    header: Header,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Signing secret and token lifetimes
    ///
    /// # Returns
    ///
    /// * `Ok(TokenService)` - Service ready to issue and verify tokens
    /// * `Err(ConfigError)` - The secret is shorter than 32 bytes or a
    ///   lifetime is negative or unrepresentable; the process should not start
    pub fn new(config: TokenServiceConfig) -> Result<Self, ConfigError> {
        config.validate_lifetimes()?;
        let signing_key = SigningKey::from_secret(&config.secret)?;

        // Expiry is checked by the service itself, after the signature, at
        // millisecond resolution and without leeway.
        let mut validation = Validation::new(SIGNING_ALGORITHM);
        validation.required_spec_claims.clear();
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.leeway = 0;

        tracing::debug!(
            access_token_expiry_ms = config.access_token_expiry_ms,
            refresh_token_expiry_ms = config.refresh_token_expiry_ms,
            "token service initialized"
        );

        Ok(Self {
            signing_key,
            access_token_lifetime: config.access_token_lifetime(),
            refresh_token_lifetime: config.refresh_token_lifetime(),
            header: Header::new(SIGNING_ALGORITHM),
            validation,
        })
    }

    /// Lifetime used for tokens of the given kind
    pub fn lifetime(&self, kind: TokenKind) -> Duration {
        match kind {
            TokenKind::Access => self.access_token_lifetime,
            TokenKind::Refresh => self.refresh_token_lifetime,
        }
    }

    /// Signs `claims` for `subject`, valid for `lifetime` from now
    ///
    /// `lifetime` may be zero or negative, which yields an already expired
    /// token.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The compact signed token
    /// * `Err(TokenError::InvalidArgument)` - `now + lifetime` overflows
    /// * `Err(TokenError::GenerationFailed)` - Encoding failed
    pub fn create_token(
        &self,
        claims: ClaimMap,
        subject: &str,
        lifetime: Duration,
    ) -> TokenResult<String> {
        let claims = TokenClaims::new(subject, Utc::now(), lifetime, claims)
            .ok_or(TokenError::InvalidArgument)?;

        encode(&self.header, &claims, self.signing_key.encoding_key()).map_err(|e| {
            tracing::error!(error = %e, "token encoding failed");
            TokenError::GenerationFailed
        })
    }

    /// Generates an access token
    ///
    /// Only the first authority is embedded, as the `role` claim; any further
    /// authorities are not represented in the token.
    pub fn generate_access_token<S: AsRef<str>>(
        &self,
        subject: &str,
        authorities: &[S],
    ) -> TokenResult<String> {
        let mut claims = ClaimMap::new();
        if let Some(first) = authorities.first() {
            claims.insert(ROLE_CLAIM.to_string(), Value::from(first.as_ref()));
        }

        let token = self.create_token(claims, subject, self.access_token_lifetime)?;
        tracing::debug!(subject, kind = %TokenKind::Access, "issued token");
        Ok(token)
    }

    /// Generates a refresh token, which carries no claims beyond the reserved ones
    pub fn generate_refresh_token(&self, subject: &str) -> TokenResult<String> {
        let token = self.create_token(ClaimMap::new(), subject, self.refresh_token_lifetime)?;
        tracing::debug!(subject, kind = %TokenKind::Refresh, "issued token");
        Ok(token)
    }

    /// Generates an access and a refresh token for the same subject
    pub fn generate_token_pair<S: AsRef<str>>(
        &self,
        subject: &str,
        authorities: &[S],
    ) -> TokenResult<TokenPair> {
        let access_token = self.generate_access_token(subject, authorities)?;
        let refresh_token = self.generate_refresh_token(subject)?;

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.access_token_lifetime.num_seconds(),
            self.refresh_token_lifetime.num_seconds(),
        ))
    }

    /// Verifies the signature of `token` and returns its claims
    ///
    /// # Returns
    ///
    /// * `Ok(TokenClaims)` - Signature valid and token not expired
    /// * `Err(TokenError)` - `Expired`, `Malformed`, `UnsupportedAlgorithm`,
    ///   `SignatureInvalid` or `InvalidArgument`
    pub fn parse_and_verify(&self, token: &str) -> TokenResult<TokenClaims> {
        let claims = self.verify_signature(token)?;

        if claims.is_expired_at(Utc::now()) {
            tracing::warn!("token expired");
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    /// Returns the subject of a verified token
    pub fn extract_subject(&self, token: &str) -> TokenResult<String> {
        self.extract_claim(token, |claims| claims.subject().to_string())
    }

    /// Returns the expiration instant of a verified token
    pub fn extract_expiration(&self, token: &str) -> TokenResult<DateTime<Utc>> {
        self.extract_claim(token, TokenClaims::expires_at)
    }

    /// Returns the role of a verified token, if it carries one
    pub fn extract_role(&self, token: &str) -> TokenResult<Option<String>> {
        self.extract_claim(token, |claims| claims.role().map(str::to_string))
    }

    /// Applies `resolver` to the claims of a verified token
    pub fn extract_claim<T, F>(&self, token: &str, resolver: F) -> TokenResult<T>
    where
        F: FnOnce(&TokenClaims) -> T,
    {
        self.parse_and_verify(token).map(|claims| resolver(&claims))
    }

    /// Whether the token is expired; unverifiable tokens count as expired
    pub fn is_expired(&self, token: &str) -> bool {
        match self.extract_expiration(token) {
            Ok(expires_at) => expires_at <= Utc::now(),
            Err(_) => true,
        }
    }

    /// Whether the token verifies, belongs to `expected_subject` and is not expired
    ///
    /// Subjects are compared exactly; there is no case folding or trimming.
    pub fn validate_against_identity(&self, token: &str, expected_subject: &str) -> bool {
        match self.parse_and_verify(token) {
            Ok(claims) => {
                let matches = claims.subject() == expected_subject;
                if !matches {
                    tracing::debug!("token subject does not match expected identity");
                }
                matches && !claims.is_expired_at(Utc::now())
            }
            Err(e) => {
                tracing::debug!(error = %e, "token validation failed");
                false
            }
        }
    }

    /// Whether the token is well formed and its signature verifies,
    /// regardless of expiration or subject
    pub fn is_structurally_valid(&self, token: &str) -> bool {
        self.verify_signature(token).is_ok()
    }

    /// Checks shape, algorithm and signature, then decodes the claims.
    /// Expiration is not checked here.
    fn verify_signature(&self, token: &str) -> TokenResult<TokenClaims> {
        let result = inspect_header(token).and_then(|()| {
            let data = decode::<ClaimMap>(token, self.signing_key.decoding_key(), &self.validation)?;
            serde_json::from_value::<TokenClaims>(Value::Object(data.claims))
                .map_err(|_| TokenError::InvalidArgument)
        });

        if let Err(ref e) = result {
            tracing::warn!(code = e.error_code(), "token rejected");
        }
        result
    }
}

/// Rejects empty input, the wrong segment count and any `alg` other than
/// HS512 before the payload is touched.
fn inspect_header(token: &str) -> TokenResult<()> {
    if token.trim().is_empty() {
        return Err(TokenError::InvalidArgument);
    }

    let mut segments = token.split('.');
    let header = segments.next().unwrap_or_default();
    if segments.count() != 2 {
        return Err(TokenError::Malformed);
    }

    let header_bytes = URL_SAFE_NO_PAD
        .decode(header)
        .map_err(|_| TokenError::Malformed)?;
    let header: RawHeader =
        serde_json::from_slice(&header_bytes).map_err(|_| TokenError::Malformed)?;

    if header.alg != SIGNING_ALGORITHM_NAME {
        return Err(TokenError::UnsupportedAlgorithm);
    }
    Ok(())
}
