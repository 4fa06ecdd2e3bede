//! Prompt-ready rendering of a context window

use crate::context::record::MessageRecord;

const USER_MESSAGE_LABEL: &str = "Current message:";

const CONTEXT_GUIDANCE: &str =
    "Consider this conversation context when improving the message.";

/// Render a context window plus the user's draft into one text block.
///
/// Pure function of its arguments: no clock, no randomness, stable
/// whitespace. An empty window yields only the labeled draft, so the host
/// can always prepend the result to its instruction prompt without checking
/// whether context was found. Each context message becomes one
/// `[time] sender: text` line, closed by a steering sentence; the draft
/// follows under its own label after a blank separator line.
pub fn format_context(window: &[MessageRecord], user_message: &str, is_thread: bool) -> String {
    let draft = user_message.trim();
    if window.is_empty() {
        return format!("{USER_MESSAGE_LABEL}\n{draft}");
    }

    let mut block = if is_thread {
        format!("Recent thread context (last {} messages):\n", window.len())
    } else {
        format!(
            "Recent conversation context (last {} messages):\n",
            window.len()
        )
    };
    for record in window {
        block.push_str(&format!(
            "[{}] {}: {}\n",
            record.time, record.sender, record.text
        ));
    }
    block.push_str(CONTEXT_GUIDANCE);
    block.push_str("\n\n");
    block.push_str(USER_MESSAGE_LABEL);
    block.push('\n');
    block.push_str(draft);
    block
}
