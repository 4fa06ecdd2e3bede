//! API credential format checks
//!
//! Pure format validation run before a key is used to authorize a request.
//! Failures are reported as a structured value, never an error: the host
//! shows the message in its settings popup.

use serde::Serialize;

/// Outcome of an API key format check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiKeyValidation {
    pub valid: bool,
    pub error: Option<&'static str>,
}

impl ApiKeyValidation {
    fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    fn fail(error: &'static str) -> Self {
        Self {
            valid: false,
            error: Some(error),
        }
    }
}

/// Format-check an API key. Rules apply in order; the first failure wins.
///
/// Case-sensitive: an uppercase `SK-` prefix fails. No network, no side
/// effects.
pub fn validate_api_key(key: Option<&str>) -> ApiKeyValidation {
    let Some(key) = key else {
        return ApiKeyValidation::fail("API key must be a non-empty string");
    };
    if key.is_empty() {
        return ApiKeyValidation::fail("API key must be a non-empty string");
    }
    if key.trim().is_empty() {
        return ApiKeyValidation::fail("API key cannot be empty or whitespace only");
    }
    if !key.starts_with("sk-") {
        return ApiKeyValidation::fail("API key must start with \"sk-\"");
    }
    if key.len() < 20 {
        return ApiKeyValidation::fail("API key is too short");
    }
    if key.contains(' ') {
        return ApiKeyValidation::fail("API key should not contain spaces");
    }
    if key.contains('\n') || key.contains('\r') {
        return ApiKeyValidation::fail("API key should not contain newlines");
    }
    ApiKeyValidation::ok()
}

/// Redact a key for logging: keep the last four characters.
pub fn redact_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 4 {
        return "***".to_string();
    }
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    format!("***{suffix}")
}
