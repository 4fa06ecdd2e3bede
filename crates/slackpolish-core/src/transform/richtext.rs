//! Structural list/paragraph conversion for the rich editor surface
//!
//! The editor stores content as structured markup, not plain text. The host
//! reads that structure out as a [`RichTextDoc`] and the two conversion
//! functions here translate it to and from the line-oriented text the model
//! sees. Classification rules live behind these functions so they stay
//! testable without a live editable surface.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static NUMBERED_ITEM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.\s+(.+)$").unwrap());

static BULLET_ITEM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[•·*-]\s+(.+)$").unwrap());

/// One top-level block of the editor surface
///
/// List containers only preserve grouping and item order; rendered
/// numbering is always sequential from 1, regardless of the digits the
/// user typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Block {
    Paragraph(String),
    OrderedList(Vec<String>),
    BulletList(Vec<String>),
}

/// Structural representation of the rich editor's content
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichTextDoc {
    pub blocks: Vec<Block>,
}

impl RichTextDoc {
    /// Render the document as editor markup, with text HTML-escaped.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for block in &self.blocks {
            match block {
                Block::Paragraph(text) => {
                    html.push_str(&format!("<p>{}</p>", escape_html(text)));
                }
                Block::OrderedList(items) => {
                    html.push_str("<ol>");
                    for item in items {
                        html.push_str(&format!("<li>{}</li>", escape_html(item)));
                    }
                    html.push_str("</ol>");
                }
                Block::BulletList(items) => {
                    html.push_str("<ul>");
                    for item in items {
                        html.push_str(&format!("<li>{}</li>", escape_html(item)));
                    }
                    html.push_str("</ul>");
                }
            }
        }
        html
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Flatten a structural document into line-oriented text.
///
/// Ordered-list items become `"{n}. {text}"` with the counter restarting at
/// 1 for each list; bulleted items become `"• {text}"`; paragraphs one line
/// each. Empty paragraphs are skipped, so consecutive blank lines collapse
/// and the result carries no leading or trailing whitespace.
pub fn rich_text_to_lines(doc: &RichTextDoc) -> String {
    let mut lines: Vec<String> = Vec::new();
    for block in &doc.blocks {
        match block {
            Block::Paragraph(text) => {
                let text = text.trim();
                if !text.is_empty() {
                    lines.push(text.to_string());
                }
            }
            Block::OrderedList(items) => {
                for (index, item) in items.iter().enumerate() {
                    lines.push(format!("{}. {}", index + 1, item.trim()));
                }
            }
            Block::BulletList(items) => {
                for item in items {
                    lines.push(format!("• {}", item.trim()));
                }
            }
        }
    }
    lines.join("\n")
}

/// Parse line-oriented text back into a structural document.
///
/// Per line, first match wins: a leading `"{digits}. "` makes a numbered
/// item, a leading bullet marker (`•`, `·`, `*`, `-`) plus a space makes a
/// bulleted item, anything else is a paragraph. Consecutive lines of the
/// same list type share one container; a non-list line closes any open
/// list. Empty lines are skipped entirely.
pub fn lines_to_rich_text(text: &str) -> RichTextDoc {
    let mut blocks: Vec<Block> = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(caps) = NUMBERED_ITEM_REGEX.captures(line) {
            let item = caps[2].to_string();
            match blocks.last_mut() {
                Some(Block::OrderedList(items)) => items.push(item),
                _ => blocks.push(Block::OrderedList(vec![item])),
            }
            continue;
        }

        if let Some(caps) = BULLET_ITEM_REGEX.captures(line) {
            let item = caps[1].to_string();
            match blocks.last_mut() {
                Some(Block::BulletList(items)) => items.push(item),
                _ => blocks.push(Block::BulletList(vec![item])),
            }
            continue;
        }

        blocks.push(Block::Paragraph(line.to_string()));
    }
    RichTextDoc { blocks }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_lines_group_into_one_list() {
        let doc = lines_to_rich_text("1. First item\n2. Second item\n3. Third item");
        assert_eq!(
            doc.blocks,
            vec![Block::OrderedList(vec![
                "First item".to_string(),
                "Second item".to_string(),
                "Third item".to_string(),
            ])]
        );
    }

    #[test]
    fn test_bullet_markers_all_recognized() {
        let doc = lines_to_rich_text("• one\n· two\n* three\n- four");
        assert_eq!(
            doc.blocks,
            vec![Block::BulletList(vec![
                "one".to_string(),
                "two".to_string(),
                "three".to_string(),
                "four".to_string(),
            ])]
        );
    }

    #[test]
    fn test_paragraph_closes_open_list() {
        let doc = lines_to_rich_text("1. a\nplain paragraph\n1. b");
        assert_eq!(
            doc.blocks,
            vec![
                Block::OrderedList(vec!["a".to_string()]),
                Block::Paragraph("plain paragraph".to_string()),
                Block::OrderedList(vec!["b".to_string()]),
            ]
        );
    }

    #[test]
    fn test_list_type_change_starts_new_container() {
        let doc = lines_to_rich_text("1. numbered\n• bulleted");
        assert_eq!(
            doc.blocks,
            vec![
                Block::OrderedList(vec!["numbered".to_string()]),
                Block::BulletList(vec!["bulleted".to_string()]),
            ]
        );
    }

    #[test]
    fn test_literal_numbering_not_preserved() {
        let doc = lines_to_rich_text("5. foo\n6. bar");
        assert_eq!(
            doc.blocks,
            vec![Block::OrderedList(vec!["foo".to_string(), "bar".to_string()])]
        );
        // rendered numbering is sequential from 1
        assert_eq!(rich_text_to_lines(&doc), "1. foo\n2. bar");
    }

    #[test]
    fn test_empty_lines_skipped() {
        let doc = lines_to_rich_text("first\n\n\nsecond\n");
        assert_eq!(
            doc.blocks,
            vec![
                Block::Paragraph("first".to_string()),
                Block::Paragraph("second".to_string()),
            ]
        );
    }

    #[test]
    fn test_marker_without_space_is_paragraph() {
        let doc = lines_to_rich_text("-dash\n1.dot");
        assert_eq!(
            doc.blocks,
            vec![
                Block::Paragraph("-dash".to_string()),
                Block::Paragraph("1.dot".to_string()),
            ]
        );
    }

    #[test]
    fn test_extraction_collapses_blank_paragraphs() {
        let doc = RichTextDoc {
            blocks: vec![
                Block::Paragraph("  first  ".to_string()),
                Block::Paragraph("   ".to_string()),
                Block::Paragraph("second".to_string()),
            ],
        };
        assert_eq!(rich_text_to_lines(&doc), "first\nsecond");
    }

    #[test]
    fn test_extraction_restarts_numbering_per_list() {
        let doc = RichTextDoc {
            blocks: vec![
                Block::OrderedList(vec!["a".to_string(), "b".to_string()]),
                Block::Paragraph("between".to_string()),
                Block::OrderedList(vec!["c".to_string()]),
            ],
        };
        assert_eq!(rich_text_to_lines(&doc), "1. a\n2. b\nbetween\n1. c");
    }

    #[test]
    fn test_ordered_round_trip() {
        let text = "1. a\n2. b\n3. c";
        assert_eq!(rich_text_to_lines(&lines_to_rich_text(text)), text);
    }

    #[test]
    fn test_mixed_round_trip() {
        let text = "intro paragraph\n1. first\n2. second\n• bullet one\n• bullet two\nclosing";
        assert_eq!(rich_text_to_lines(&lines_to_rich_text(text)), text);
    }

    #[test]
    fn test_to_html_structure() {
        let doc = lines_to_rich_text("para\n1. a\n2. b\n• x");
        assert_eq!(
            doc.to_html(),
            "<p>para</p><ol><li>a</li><li>b</li></ol><ul><li>x</li></ul>"
        );
    }

    #[test]
    fn test_to_html_escapes_text() {
        let doc = RichTextDoc {
            blocks: vec![Block::Paragraph("a < b && c > d".to_string())],
        };
        assert_eq!(doc.to_html(), "<p>a &lt; b &amp;&amp; c &gt; d</p>");
    }
}
