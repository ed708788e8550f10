//! Shared helpers for token service tests

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::Duration;

use crate::services::token::{TokenService, TokenServiceConfig};

pub const SECRET_A: &str = "test-secret-a-0123456789abcdef0123456789";
pub const SECRET_B: &str = "test-secret-b-0123456789abcdef0123456789";

pub fn create_test_service() -> TokenService {
    TokenService::new(TokenServiceConfig::new(SECRET_A)).expect("Failed to create token service")
}

pub fn create_service_with(secret: &str, access: Duration, refresh: Duration) -> TokenService {
    let config = TokenServiceConfig::new(secret)
        .with_access_token_expiry_ms(access.num_milliseconds())
        .with_refresh_token_expiry_ms(refresh.num_milliseconds());
    TokenService::new(config).expect("Failed to create token service")
}

/// Replaces one character in the middle of segment `index` with a different
/// base64url character, without re-signing.
pub fn tamper_segment(token: &str, index: usize) -> String {
    let mut segments: Vec<String> = token.split('.').map(str::to_string).collect();
    let segment = &mut segments[index];
    let mid = segment.len() / 2;
    let replacement = if &segment[mid..mid + 1] == "A" { "B" } else { "A" };
    segment.replace_range(mid..mid + 1, replacement);
    segments.join(".")
}

/// Decodes the payload segment without verifying anything
pub fn raw_payload(token: &str) -> serde_json::Value {
    let payload = token.split('.').nth(1).expect("payload segment");
    let bytes = URL_SAFE_NO_PAD.decode(payload).expect("base64url payload");
    serde_json::from_slice(&bytes).expect("json payload")
}

/// Builds an unsigned token with the given header and payload JSON
pub fn unsigned_token(header: &serde_json::Value, payload: &serde_json::Value) -> String {
    format!(
        "{}.{}.",
        URL_SAFE_NO_PAD.encode(header.to_string()),
        URL_SAFE_NO_PAD.encode(payload.to_string())
    )
}
