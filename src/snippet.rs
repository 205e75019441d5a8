//! Placeholder blocks offered by the editor's "+" insert menu, and the
//! table grid picker.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::{FormatError, Result};
use crate::selection::{byte_offset, char_len, char_offset, clamp_range, line_end, Selection};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Snippet {
    #[serde(rename = "normal")]
    Text,
    #[serde(rename = "h1")]
    Heading1,
    #[serde(rename = "h2")]
    Heading2,
    #[serde(rename = "h3")]
    Heading3,
    #[serde(rename = "ul")]
    BulletList,
    #[serde(rename = "ol")]
    NumberedList,
    Task,
    Quote,
    #[serde(rename = "code")]
    CodeBlock,
    Image,
    Link,
    Attachment,
    Table,
}

impl Snippet {
    /// Markdown inserted on its own line below the caret's line.
    pub fn body(self) -> Cow<'static, str> {
        let body = match self {
            Snippet::Text => "Text",
            Snippet::Heading1 => "# Heading 1",
            Snippet::Heading2 => "## Heading 2",
            Snippet::Heading3 => "### Heading 3",
            Snippet::BulletList => "- List item",
            Snippet::NumberedList => "1. List item",
            Snippet::Task => "- [ ] Task item",
            Snippet::Quote => "> Quote text",
            Snippet::CodeBlock => "```\nCode block\n```",
            Snippet::Image => "![Alt text](image-url)",
            Snippet::Link => "[Link text](url)",
            Snippet::Attachment => "[Attachment](file:///path/to/file)",
            Snippet::Table => return Cow::Owned(grid(2, 3)),
        };
        Cow::Borrowed(body)
    }

    /// Selection after insertion, relative to the start of the new line.
    fn selection_after(self) -> (usize, usize) {
        match self {
            Snippet::Text => (4, 4),
            Snippet::Heading1 => (11, 11),
            Snippet::Attachment => (1, 11),
            _ => (0, 0),
        }
    }
}

/// A pending replacement of `replaced` (character offsets) by `text`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Insertion {
    pub replaced: Selection,
    pub text: String,
    pub selection_after: Selection,
}

impl Insertion {
    pub fn apply(&self, content: &str) -> String {
        let (start, end) = self.replaced.byte_range(content);
        let mut out = String::with_capacity(content.len() + self.text.len());
        out.push_str(&content[..start]);
        out.push_str(&self.text);
        out.push_str(&content[end..]);
        out
    }
}

/// Inserts `snippet` on a new line after the line holding `caret`.
pub fn snippet_insertion(content: &str, caret: usize, snippet: Snippet) -> Insertion {
    let caret = clamp_range(content, caret, caret).start;
    let end_byte = line_end(content, byte_offset(content, caret));
    let at = char_offset(content, end_byte);

    let mut text = String::from("\n");
    text.push_str(&snippet.body());

    let line = at + 1;
    let (from, to) = snippet.selection_after();
    Insertion {
        replaced: Selection::cursor(at),
        text,
        selection_after: Selection::new(line + from, line + to),
    }
}

/// Markdown for an empty `rows` x `cols` table, framed by newlines.
pub fn table_markdown(rows: usize, cols: usize) -> Result<String> {
    if rows == 0 || cols == 0 {
        return Err(FormatError::InvalidTableSize { rows, cols });
    }
    Ok(format!("\n{}", grid(rows, cols)))
}

fn grid(rows: usize, cols: usize) -> String {
    let mut table = String::from("|");
    for col in 1..=cols {
        table.push_str(&format!(" Header {col} |"));
    }
    table.push_str("\n|");
    for _ in 0..cols {
        table.push_str("----------|");
    }
    for row in 1..=rows {
        table.push_str("\n|");
        for col in 1..=cols {
            table.push_str(&format!(" Cell {}   |", (row - 1) * cols + col));
        }
    }
    table.push('\n');
    table
}

/// Replaces `start..end` with a fresh table; the caret lands at the start
/// of the header row.
pub fn table_insertion(
    content: &str,
    start: usize,
    end: usize,
    rows: usize,
    cols: usize,
) -> Result<Insertion> {
    let replaced = clamp_range(content, start, end);
    let text = table_markdown(rows, cols)?;
    tracing::trace!(rows, cols, len = char_len(&text), "inserting table");
    Ok(Insertion {
        replaced,
        text,
        selection_after: Selection::cursor(replaced.start + 1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_goes_below_the_caret_line() {
        let content = "first\nsecond";
        let insertion = snippet_insertion(content, 2, Snippet::Heading1);
        assert_eq!(insertion.apply(content), "first\n# Heading 1\nsecond");
        assert_eq!(insertion.selection_after, Selection::cursor(17));
    }

    #[test]
    fn snippet_on_last_line_appends() {
        let content = "only";
        let insertion = snippet_insertion(content, 4, Snippet::BulletList);
        assert_eq!(insertion.apply(content), "only\n- List item");
        assert_eq!(insertion.selection_after, Selection::cursor(5));
    }

    #[test]
    fn attachment_selects_its_label() {
        let content = "x";
        let insertion = snippet_insertion(content, 0, Snippet::Attachment);
        let text = insertion.apply(content);
        let label: String = text
            .chars()
            .skip(insertion.selection_after.start)
            .take(insertion.selection_after.len())
            .collect();
        assert_eq!(label, "Attachment");
    }

    #[test]
    fn text_snippet_parks_caret_after_placeholder() {
        let insertion = snippet_insertion("", 0, Snippet::Text);
        assert_eq!(insertion.apply(""), "\nText");
        assert_eq!(insertion.selection_after, Selection::cursor(5));
    }

    #[test]
    fn code_block_is_fenced() {
        let insertion = snippet_insertion("a", 1, Snippet::CodeBlock);
        assert_eq!(insertion.apply("a"), "a\n```\nCode block\n```");
    }

    #[test]
    fn builds_table_grid() {
        assert_eq!(
            table_markdown(1, 2).unwrap(),
            "\n| Header 1 | Header 2 |\n|----------|----------|\n| Cell 1   | Cell 2   |\n"
        );
        assert!(matches!(
            table_markdown(0, 3),
            Err(FormatError::InvalidTableSize { rows: 0, cols: 3 })
        ));
    }

    #[test]
    fn menu_table_matches_a_two_by_three_grid() {
        let insertion = snippet_insertion("", 0, Snippet::Table);
        assert_eq!(insertion.text, table_markdown(2, 3).unwrap());
        assert!(insertion.text.ends_with("| Cell 4   | Cell 5   | Cell 6   |\n"));
    }

    #[test]
    fn table_replaces_selection() {
        let insertion = table_insertion("ab", 1, 2, 1, 1).unwrap();
        assert_eq!(
            insertion.apply("ab"),
            "a\n| Header 1 |\n|----------|\n| Cell 1   |\n"
        );
        assert_eq!(insertion.selection_after, Selection::cursor(2));
    }

    #[test]
    fn snippet_tags_match_the_insert_menu() {
        let snippet: Snippet = serde_json::from_str("\"quote\"").unwrap();
        assert_eq!(snippet, Snippet::Quote);
        assert_eq!(serde_json::to_string(&Snippet::Heading2).unwrap(), "\"h2\"");
        assert_eq!(serde_json::to_string(&Snippet::CodeBlock).unwrap(), "\"code\"");
    }
}
