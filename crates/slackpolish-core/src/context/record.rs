//! Candidate message normalization

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One chat message as observed on the page or returned by a backing API
///
/// Produced by normalizing a loose candidate object; consumed read-only and
/// discarded after the context-build cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRecord {
    /// Display timestamp as scraped; free-form, may not parse
    pub time: String,
    pub sender: String,
    /// Message body, trimmed
    pub text: String,
    #[serde(default)]
    pub is_thread_reply: bool,
}

/// Coerce a loose JSON field to a string.
///
/// Strings pass through, numbers and bools take their display form, and
/// anything without a safe string form (null, objects, arrays, missing)
/// becomes empty.
fn coerce_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Normalize a candidate object into a [`MessageRecord`], or discard it.
///
/// Returns `None` when the coerced `text`, after trimming, is empty or
/// shorter than `min_message_length` characters. Never panics, whatever
/// shape the candidate has; chat histories routinely contain non-text
/// entries and dropping them is expected, not an error.
pub fn validate_message_record(
    candidate: &Value,
    min_message_length: usize,
) -> Option<MessageRecord> {
    let fields = candidate.as_object()?;

    let text = coerce_string(fields.get("text"));
    let text = text.trim();
    if text.is_empty() || text.chars().count() < min_message_length {
        return None;
    }

    Some(MessageRecord {
        time: coerce_string(fields.get("time")),
        sender: coerce_string(fields.get("sender")),
        text: text.to_string(),
        is_thread_reply: matches!(fields.get("isThreadReply"), Some(Value::Bool(true))),
    })
}
