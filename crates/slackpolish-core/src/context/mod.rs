//! Smart context assembly
//!
//! Turns the host's loosely-typed scrape of recent chat messages into the
//! bounded, ordered, optionally anonymized context window that accompanies a
//! rewrite or summary request, and renders that window into a prompt-ready
//! text block.
//!
//! The upstream data is untrusted DOM content, so every step here is
//! fail-open: a candidate that does not validate is dropped, a timestamp
//! that does not parse is kept, and the worst case is an empty window, never
//! an error.

mod format;
mod record;
mod window;

pub use format::format_context;
pub use record::{MessageRecord, validate_message_record};
pub use window::{build_context_window, build_context_window_at};
