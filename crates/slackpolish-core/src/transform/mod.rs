//! Deterministic text transforms around the rich-text editor
//!
//! Two independent concerns: normalizing semicolon-heavy model output into
//! separate capitalized sentences, and converting between line-oriented
//! plain text and the structural representation (paragraphs, ordered and
//! bulleted lists) the editor surface stores.

mod richtext;
mod semicolon;

pub use richtext::{Block, RichTextDoc, lines_to_rich_text, rich_text_to_lines};
pub use semicolon::normalize_semicolons;
