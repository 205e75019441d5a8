//! Applies toolbar formatting to a selected span of a markdown document.
//!
//! Only the selected span is rewritten; text before and after it is copied
//! through untouched. Existing marks are never inspected, so formatting the
//! same span twice stacks the markup.

use crate::request::{BlockType, FormatRequest, StyleAttributes};
use crate::selection::{char_len, clamp_range, Selection};

/// Font color the toolbar starts with. Choosing it means "no color".
pub const DEFAULT_FONT_COLOR: &str = "#000000";
pub const TRANSPARENT: &str = "transparent";

/// Result of a format or link operation, with enough information for the
/// host to put the caret back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatOutcome {
    pub text: String,
    /// Character range of the original document that was replaced.
    pub replaced: Selection,
    /// Character length of the span written in its place.
    pub inserted: usize,
    pub changed: bool,
}

impl FormatOutcome {
    fn unchanged(content: &str, replaced: Selection) -> Self {
        Self {
            text: content.to_string(),
            replaced,
            inserted: replaced.len(),
            changed: false,
        }
    }

    /// Caret position just past the rewritten span.
    pub fn cursor(&self) -> usize {
        self.replaced.start + self.inserted
    }

    /// Signed change in document length, in characters.
    pub fn delta(&self) -> isize {
        self.inserted as isize - self.replaced.len() as isize
    }
}

/// Formats `content[start..end]` according to `request`.
///
/// A selection that is empty or only whitespace leaves the document as is.
pub fn apply_format(content: &str, start: usize, end: usize, request: &FormatRequest) -> String {
    apply_format_with_cursor(content, start, end, request).text
}

pub fn apply_format_with_cursor(
    content: &str,
    start: usize,
    end: usize,
    request: &FormatRequest,
) -> FormatOutcome {
    let selection = clamp_range(content, start, end);
    let (byte_start, byte_end) = selection.byte_range(content);

    let Some(formatted) = format_span(&content[byte_start..byte_end], request) else {
        tracing::debug!(?selection, "blank selection, nothing to format");
        return FormatOutcome::unchanged(content, selection);
    };

    tracing::trace!(
        block = %request.block,
        toggles = ?request.toggles,
        formatted_len = formatted.len(),
        "formatted selection"
    );
    splice(content, selection, (byte_start, byte_end), &formatted)
}

/// Turns `content[start..end]` into a markdown link to `url`.
///
/// Unlike [`apply_format`] an empty selection is accepted and yields the
/// placeholder `[](url)`.
pub fn apply_link(content: &str, start: usize, end: usize, url: &str) -> String {
    apply_link_with_cursor(content, start, end, url).text
}

pub fn apply_link_with_cursor(content: &str, start: usize, end: usize, url: &str) -> FormatOutcome {
    let selection = clamp_range(content, start, end);
    let (byte_start, byte_end) = selection.byte_range(content);
    let link = link_span(&content[byte_start..byte_end], url);
    splice(content, selection, (byte_start, byte_end), &link)
}

/// Markdown link with `selected` as its text. No guard on blank text.
pub fn link_span(selected: &str, url: &str) -> String {
    format!("[{selected}]({url})")
}

/// Builds the formatted replacement for `selected`, or `None` when there is
/// nothing but whitespace to format.
///
/// Layering is fixed: block marker, then bold, italic, underline,
/// strikethrough, then font color and background color spans.
pub fn format_span(selected: &str, request: &FormatRequest) -> Option<String> {
    if selected.trim().is_empty() {
        return None;
    }

    let mut text = apply_block(selected, request.block);

    let toggles = request.toggles;
    if toggles.bold {
        text = wrap(&text, "**", "**");
    }
    if toggles.italic {
        text = wrap(&text, "*", "*");
    }
    if toggles.underline {
        text = wrap(&text, "<u>", "</u>");
    }
    if toggles.strikethrough {
        text = wrap(&text, "~~", "~~");
    }

    Some(apply_style(text, &request.style))
}

/// Marker prepended to a span for line-prefix block types.
pub fn block_prefix(block: BlockType) -> Option<String> {
    if let Some(level) = block.heading_level() {
        return Some(format!("{} ", "#".repeat(usize::from(level))));
    }
    match block {
        BlockType::Ul => Some("- ".to_string()),
        BlockType::Ol => Some("1. ".to_string()),
        BlockType::Blockquote => Some("> ".to_string()),
        _ => None,
    }
}

fn apply_block(text: &str, block: BlockType) -> String {
    if block == BlockType::InlineCode {
        return wrap(text, "`", "`");
    }
    match block_prefix(block) {
        Some(prefix) => format!("{prefix}{text}"),
        None => text.to_string(),
    }
}

fn apply_style(mut text: String, style: &StyleAttributes) -> String {
    let font_color = style.font_color.as_deref();
    if let Some(color) = visible_color(font_color, &[DEFAULT_FONT_COLOR, TRANSPARENT]) {
        text = format!("<span style=\"color: {color}\">{text}</span>");
    }
    if let Some(color) = visible_color(style.bg_color.as_deref(), &[TRANSPARENT]) {
        text = format!("<span style=\"background-color: {color}\">{text}</span>");
    }
    text
}

fn visible_color<'a>(color: Option<&'a str>, invisible: &[&str]) -> Option<&'a str> {
    color.filter(|color| !color.is_empty() && !invisible.contains(color))
}

fn wrap(text: &str, open: &str, close: &str) -> String {
    let mut out = String::with_capacity(open.len() + text.len() + close.len());
    out.push_str(open);
    out.push_str(text);
    out.push_str(close);
    out
}

fn splice(
    content: &str,
    selection: Selection,
    (byte_start, byte_end): (usize, usize),
    insert: &str,
) -> FormatOutcome {
    let mut text = String::with_capacity(content.len() - (byte_end - byte_start) + insert.len());
    text.push_str(&content[..byte_start]);
    text.push_str(insert);
    text.push_str(&content[byte_end..]);
    FormatOutcome {
        text,
        replaced: selection,
        inserted: char_len(insert),
        changed: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_with_bold_ignores_default_colors() {
        let request = FormatRequest::new(BlockType::H2)
            .bold()
            .font_color(DEFAULT_FONT_COLOR)
            .bg_color(TRANSPARENT);
        assert_eq!(apply_format("Hello world", 0, 5, &request), "**## Hello** world");
    }

    #[test]
    fn wraps_selection_in_link() {
        assert_eq!(
            apply_link("Visit site", 6, 10, "https://x.io"),
            "Visit [site](https://x.io)"
        );
    }

    #[test]
    fn empty_link_selection_inserts_placeholder() {
        let outcome = apply_link_with_cursor("see ", 4, 4, "https://x.io");
        assert_eq!(outcome.text, "see [](https://x.io)");
        assert_eq!(outcome.cursor(), 20);
        assert!(outcome.changed);
    }

    #[test]
    fn blank_selection_is_a_no_op() {
        let request = FormatRequest::new(BlockType::H1).bold().font_color("#FF0000");
        assert_eq!(apply_format("a   b", 1, 4, &request), "a   b");
        assert_eq!(apply_format("abc", 1, 1, &request), "abc");
        // Ideographic space is whitespace too.
        assert_eq!(apply_format("a\u{3000}b", 1, 2, &request), "a\u{3000}b");

        let outcome = apply_format_with_cursor("a \n b", 1, 4, &request);
        assert!(!outcome.changed);
        assert_eq!(outcome.cursor(), 4);
        assert_eq!(outcome.delta(), 0);
    }

    #[test]
    fn block_markers() {
        let cases = [
            (BlockType::Normal, "x"),
            (BlockType::H1, "# x"),
            (BlockType::H3, "### x"),
            (BlockType::H6, "###### x"),
            (BlockType::Ul, "- x"),
            (BlockType::Ol, "1. x"),
            (BlockType::InlineCode, "`x`"),
            (BlockType::Blockquote, "> x"),
        ];
        for (block, expected) in cases {
            assert_eq!(apply_format("x", 0, 1, &FormatRequest::new(block)), expected, "{block}");
        }
    }

    #[test]
    fn block_marker_goes_on_the_span_not_the_line() {
        let request = FormatRequest::new(BlockType::Blockquote);
        assert_eq!(apply_format("say hi now", 4, 6, &request), "say > hi now");
    }

    #[test]
    fn repeated_heading_stacks_prefixes() {
        let request = FormatRequest::new(BlockType::H1);
        let once = apply_format("text", 0, 4, &request);
        assert_eq!(once, "# text");
        assert_eq!(apply_format(&once, 0, 6, &request), "# # text");
    }

    #[test]
    fn bold_is_nested_inside_italic() {
        let request = FormatRequest::default().italic().bold();
        assert_eq!(apply_format("x", 0, 1, &request), "***x***");
    }

    #[test]
    fn inline_wrap_order_is_fixed() {
        let request = FormatRequest::new(BlockType::InlineCode)
            .strikethrough()
            .underline()
            .italic()
            .bold();
        assert_eq!(apply_format("x", 0, 1, &request), "~~<u>***`x`***</u>~~");
    }

    #[test]
    fn background_span_wraps_color_span() {
        let request = FormatRequest::default()
            .bold()
            .font_color("#FF0000")
            .bg_color("#FFFF00");
        assert_eq!(
            apply_format("hot", 0, 3, &request),
            "<span style=\"background-color: #FFFF00\"><span style=\"color: #FF0000\">**hot**</span></span>"
        );
    }

    #[test]
    fn invisible_colors_are_skipped() {
        for color in [DEFAULT_FONT_COLOR, TRANSPARENT, ""] {
            let request = FormatRequest::default().font_color(color);
            assert_eq!(apply_format("x", 0, 1, &request), "x");
        }
        let request = FormatRequest::default().bg_color(TRANSPARENT);
        assert_eq!(apply_format("x", 0, 1, &request), "x");
        // Black is a real background.
        let request = FormatRequest::default().bg_color(DEFAULT_FONT_COLOR);
        assert_eq!(
            apply_format("x", 0, 1, &request),
            "<span style=\"background-color: #000000\">x</span>"
        );
    }

    #[test]
    fn font_family_size_and_alignment_add_no_markup() {
        let mut request = FormatRequest::new(BlockType::Ul);
        request.style.font_family = Some("serif".into());
        request.style.font_size = Some("24px".into());
        request.style.alignment = Some("center".into());
        assert_eq!(apply_format("item", 0, 4, &request), "- item");
    }

    #[test]
    fn offsets_are_characters() {
        let request = FormatRequest::default().bold();
        assert_eq!(apply_format("日本語 text", 0, 3, &request), "**日本語** text");

        let outcome = apply_format_with_cursor("é é", 2, 3, &request);
        assert_eq!(outcome.text, "é **é**");
        assert_eq!(outcome.cursor(), 7);
        assert_eq!(outcome.delta(), 4);
    }

    #[test]
    fn out_of_range_offsets_are_clamped() {
        let request = FormatRequest::default().bold();
        assert_eq!(apply_format("abc", 1, 50, &request), "a**bc**");
        assert_eq!(apply_format("abc", 3, 1, &request), "a**bc**");
        assert_eq!(apply_link("abc", 10, 20, "u"), "abc[](u)");
    }

    #[test]
    fn multi_line_selection_is_prefixed_once() {
        let request = FormatRequest::new(BlockType::Ul);
        assert_eq!(apply_format("a\nb", 0, 3, &request), "- a\nb");
    }
}
