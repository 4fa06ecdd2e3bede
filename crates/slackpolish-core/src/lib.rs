//! SlackPolish Core Library
//!
//! This crate provides the smart-context pipeline for SlackPolish, including:
//! - Context window assembly (validate, age-filter, cap, order chat messages)
//! - Privacy-mode anonymization of message text and sender identities
//! - Prompt-block formatting for rewrite and summary requests
//! - Deterministic text transforms for the rich-text editor
//!   (semicolon normalization, list/paragraph structure conversion)
//! - API key format validation and redaction
//!
//! The host integration (hotkey capture, settings storage, the LLM HTTP
//! client, and DOM extraction) lives outside this crate and talks to it
//! through plain data: loosely-typed candidate records go in, prompt-ready
//! strings come out. Every function here is synchronous and total over its
//! input; malformed upstream data degrades to an empty result rather than an
//! error, because losing context must never block the rewrite itself.

pub mod config;
pub mod context;
pub mod error;
pub mod privacy;
pub mod prompt;
pub mod security;
pub mod transform;

pub use error::{Error, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, SmartContextConfig};
    pub use crate::context::{MessageRecord, build_context_window, format_context};
    pub use crate::error::{Error, Result};
}
