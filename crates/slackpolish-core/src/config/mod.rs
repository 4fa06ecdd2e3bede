//! Host configuration snapshot
//!
//! The host keeps settings in its own storage and hands the core a JSON
//! snapshot per request. Field names are camelCase on the wire to match the
//! host's settings object; every field is optional and falls back to its
//! documented default. The core never persists configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Smart context options
///
/// Controls how many surrounding messages are attached to a rewrite or
/// summary request and whether they are anonymized first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SmartContextConfig {
    /// Whether smart context is attached to requests at all
    pub enabled: bool,
    /// Upper bound on messages in one context window
    pub max_messages: usize,
    /// Minimum trimmed text length for a message to qualify as context
    pub min_message_length: usize,
    /// Anonymize sender identities and PII-shaped substrings before the
    /// context leaves the machine
    pub privacy_mode: bool,
    /// Advisory age cutoff in milliseconds; unparsable timestamps are
    /// treated as within range. The host settings object names this
    /// `maxContextAge`.
    #[serde(rename = "maxContextAge")]
    pub max_context_age_ms: i64,
    /// Include thread replies when the draft is composed inside a thread
    pub include_thread_context: bool,
}

impl Default for SmartContextConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_messages: 5,
            min_message_length: 3,
            privacy_mode: false,
            max_context_age_ms: 86_400_000, // 24 hours
            include_thread_context: true,
        }
    }
}

impl SmartContextConfig {
    /// Validate the snapshot values
    pub fn validate(&self) -> Result<()> {
        if self.max_messages == 0 {
            return Err(Error::Config(
                "smartContext.maxMessages must be at least 1".to_string(),
            ));
        }
        if self.max_context_age_ms < 0 {
            return Err(Error::Config(
                "smartContext.maxContextAge must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Full host settings snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Target writing style for the rewrite instruction
    pub style: String,
    /// Target language for the rewrite instruction
    pub language: String,
    /// Free-form extra instructions appended to the prompt
    pub custom_instructions: String,
    pub smart_context: SmartContextConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: "professional".to_string(),
            language: "English".to_string(),
            custom_instructions: String::new(),
            smart_context: SmartContextConfig::default(),
        }
    }
}

impl Config {
    /// Parse a host settings snapshot from JSON
    ///
    /// Absent fields take their defaults; malformed JSON or out-of-range
    /// values are the only error paths in the crate.
    pub fn from_json(snapshot: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(snapshot)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the snapshot values
    pub fn validate(&self) -> Result<()> {
        self.smart_context.validate()
    }
}
