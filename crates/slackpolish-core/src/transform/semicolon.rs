//! Semicolon-to-sentence normalization

use std::sync::LazyLock;

use regex::{Captures, Regex};

static SEMICOLON_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r";\s*").unwrap());

static SENTENCE_START_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(\s+)([a-z])").unwrap());

/// Split semicolon-joined clauses into separate capitalized sentences.
///
/// Every semicolon plus any following whitespace becomes `". "`, then every
/// period followed by whitespace and a lowercase letter has that letter
/// upper-cased. The whitespace run after the period is kept as-is so
/// embedded newlines survive. Idempotent: the first pass leaves no
/// semicolons and the second only matches lowercase letters.
pub fn normalize_semicolons(text: &str) -> String {
    let split = SEMICOLON_REGEX.replace_all(text, ". ");
    SENTENCE_START_REGEX
        .replace_all(&split, |caps: &Captures<'_>| {
            format!(".{}{}", &caps[1], caps[2].to_uppercase())
        })
        .into_owned()
}
