//! Pattern-based scrubbing of personally identifying substrings
//!
//! Applied to message text before it leaves the local machine in privacy
//! mode. Four passes run in a fixed order, each replacing every occurrence
//! across the whole string. The patterns are deliberately linear-time; the
//! input is scraped chat content and can contain pathological runs of `@` or
//! `.` characters.

use std::sync::LazyLock;

use regex::Regex;

static MENTION_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@\w+").unwrap());

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b").unwrap());

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());

/// Scrub mention, email, phone, and URL shapes from a message body.
///
/// Replacement order matters: the mention pass may mangle an email's domain
/// (`john@example.com` -> `john@user.com`), but the email pass still
/// collapses the result to `[email]`. None of the placeholders contain
/// digits or protocol prefixes, so later passes never re-match substituted
/// text. The function is idempotent: `@user` re-matches the mention pattern
/// but maps to itself.
pub fn anonymize(text: &str) -> String {
    let scrubbed = MENTION_REGEX.replace_all(text, "@user");
    let scrubbed = EMAIL_REGEX.replace_all(&scrubbed, "[email]");
    let scrubbed = PHONE_REGEX.replace_all(&scrubbed, "[phone]");
    let scrubbed = URL_REGEX.replace_all(&scrubbed, "[link]");
    scrubbed.into_owned()
}
