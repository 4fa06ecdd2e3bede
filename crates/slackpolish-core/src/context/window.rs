//! Context window selection and privacy mapping

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::debug;

use crate::config::SmartContextConfig;
use crate::context::record::{MessageRecord, validate_message_record};
use crate::privacy::anonymize;

/// Build the context window for a request from the host's raw candidates.
///
/// Candidates arrive in chronological order, oldest first, exactly as the
/// extraction collaborator scraped them. Invalid entries are dropped, stale
/// entries (when their timestamp parses) are dropped, and the remainder is
/// truncated to the most recent `max_messages`. With `privacy_mode` set,
/// sender names are renumbered `User1`, `User2`, ... by first appearance
/// within the final window and message text is anonymized.
///
/// Total function: any malformed input degrades to a smaller (possibly
/// empty) window, never an error.
pub fn build_context_window(
    candidates: Option<&[Value]>,
    config: &SmartContextConfig,
) -> Vec<MessageRecord> {
    build_context_window_at(candidates, config, Utc::now())
}

/// [`build_context_window`] with an explicit reference time for the age
/// filter.
pub fn build_context_window_at(
    candidates: Option<&[Value]>,
    config: &SmartContextConfig,
    now: DateTime<Utc>,
) -> Vec<MessageRecord> {
    let Some(candidates) = candidates else {
        return Vec::new();
    };

    let mut records = Vec::new();
    let mut dropped = 0usize;
    for candidate in candidates {
        match validate_message_record(candidate, config.min_message_length) {
            Some(record) if within_age(&record.time, config.max_context_age_ms, now) => {
                records.push(record);
            }
            _ => dropped += 1,
        }
    }
    if dropped > 0 {
        debug!(dropped, total = candidates.len(), "dropped context candidates");
    }

    // keep the most recent N; arrival order is chronological
    if records.len() > config.max_messages {
        records.drain(..records.len() - config.max_messages);
    }

    if config.privacy_mode {
        apply_privacy_mode(&mut records);
    }

    debug!(
        size = records.len(),
        privacy_mode = config.privacy_mode,
        "context window built"
    );
    records
}

/// Renumber senders by first appearance and scrub message text.
///
/// The sender map is local to one window; it is rebuilt from scratch on the
/// next request.
fn apply_privacy_mode(records: &mut [MessageRecord]) {
    let mut seen: Vec<String> = Vec::new();
    for record in records.iter_mut() {
        let rank = match seen.iter().position(|sender| *sender == record.sender) {
            Some(index) => index + 1,
            None => {
                seen.push(record.sender.clone());
                seen.len()
            }
        };
        record.sender = format!("User{rank}");
        record.text = anonymize(&record.text);
    }
}

/// Advisory age check. Unparsable display timestamps pass.
fn within_age(time: &str, max_age_ms: i64, now: DateTime<Utc>) -> bool {
    if max_age_ms <= 0 {
        return true;
    }
    let Some(timestamp) = parse_timestamp(time) else {
        return true;
    };
    now.signed_duration_since(timestamp).num_milliseconds() <= max_age_ms
}

/// Parse a scraped timestamp: RFC 3339, or epoch seconds as the backing API
/// reports them (fractional part allowed). Free-form display strings like
/// `"10:30 AM"` yield `None`.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    match raw.parse::<f64>() {
        Ok(seconds) if seconds.is_finite() => {
            DateTime::from_timestamp_millis((seconds * 1000.0) as i64)
        }
        _ => None,
    }
}
