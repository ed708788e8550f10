//! HS512 signing key derived from the configured secret

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey};

use crate::errors::ConfigError;

/// Algorithm every token is signed and verified with
pub const SIGNING_ALGORITHM: Algorithm = Algorithm::HS512;

/// Header `alg` value matching [`SIGNING_ALGORITHM`]
pub const SIGNING_ALGORITHM_NAME: &str = "HS512";

/// Minimum secret length in bytes (256 bits)
pub const MIN_SECRET_BYTES: usize = 32;

/// Symmetric key used for both signing and verification
#[derive(Clone)]
pub struct SigningKey {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey")
            .field("algorithm", &SIGNING_ALGORITHM)
            .finish_non_exhaustive()
    }
}

impl SigningKey {
    /// Derives a signing key from the UTF-8 bytes of `secret`
    ///
    /// # Returns
    ///
    /// * `Ok(SigningKey)` - Key derived successfully
    /// * `Err(ConfigError::SecretTooShort)` - Fewer than 32 bytes of input
    pub fn from_secret(secret: &str) -> Result<Self, ConfigError> {
        let bytes = secret.as_bytes();
        if bytes.len() < MIN_SECRET_BYTES {
            return Err(ConfigError::SecretTooShort {
                min: MIN_SECRET_BYTES,
                actual: bytes.len(),
            });
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(bytes),
            decoding_key: DecodingKey::from_secret(bytes),
        })
    }

    pub(crate) fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    pub(crate) fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }
}
