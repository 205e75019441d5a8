//! Works out which toolbar buttons should light up for a caret position.
//!
//! Inline marks are found by rescanning a small window of text around the
//! caret, not by parsing the document, so a mark whose delimiters sit further
//! away than the window radius goes unnoticed. Each mark is scanned on its
//! own; a single-asterisk span inside a bold span still counts as italic.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::FormatSettings;
use crate::request::BlockType;
use crate::selection::{byte_offset, char_len, line_end, line_start};

/// Toolbar state inferred from the document around a caret.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedFormat {
    #[serde(rename = "type")]
    pub block: BlockType,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
}

const HEADING_PREFIXES: [(&str, BlockType); 6] = [
    ("# ", BlockType::H1),
    ("## ", BlockType::H2),
    ("### ", BlockType::H3),
    ("#### ", BlockType::H4),
    ("##### ", BlockType::H5),
    ("###### ", BlockType::H6),
];

/// Detects formatting at character offset `position` with stock settings.
///
/// A position past the end of `content` yields the neutral format.
pub fn detect_format(content: &str, position: usize) -> DetectedFormat {
    detect_format_with(content, position, &FormatSettings::default())
}

pub fn detect_format_with(
    content: &str,
    position: usize,
    settings: &FormatSettings,
) -> DetectedFormat {
    let len = char_len(content);
    if position > len {
        tracing::debug!(position, len, "caret outside document");
        return DetectedFormat::default();
    }

    let radius = settings.detection_radius;
    let caret = byte_offset(content, position);
    let window_start = byte_offset(content, position.saturating_sub(radius));
    let window_end = caret + byte_offset(&content[caret..], radius);
    let window = &content[window_start..window_end];
    let caret_in_window = caret - window_start;

    let format = DetectedFormat {
        block: classify_line(current_line(content, caret)),
        bold: caret_within_match(bold_pattern(), window, caret_in_window),
        italic: caret_within_match(italic_pattern(), window, caret_in_window),
        underline: settings.detect_underline
            && caret_within_match(underline_pattern(), window, caret_in_window),
        strikethrough: caret_within_match(strikethrough_pattern(), window, caret_in_window),
    };
    tracing::trace!(position, ?format, "detected format");
    format
}

/// Block type of a single line, by literal prefix. First match wins.
pub fn classify_line(line: &str) -> BlockType {
    if let Some((_, block)) = HEADING_PREFIXES
        .iter()
        .find(|(prefix, _)| line.starts_with(prefix))
    {
        return *block;
    }

    if line.starts_with("- ") {
        BlockType::Ul
    } else if ordered_item_pattern().is_match(line) {
        BlockType::Ol
    } else if line.starts_with("> ") {
        BlockType::Blockquote
    } else if line.contains('`') {
        BlockType::InlineCode
    } else {
        BlockType::Normal
    }
}

fn current_line(content: &str, caret: usize) -> &str {
    &content[line_start(content, caret)..line_end(content, caret)]
}

/// True when some match of `pattern` in `window` spans `caret`, end
/// inclusive. Matches whose first group did not take part are delimiter
/// tokens the pattern consumes only to keep them out of other matches.
fn caret_within_match(pattern: &Regex, window: &str, caret: usize) -> bool {
    pattern
        .captures_iter(window)
        .filter(|caps| caps.get(1).is_some())
        .filter_map(|caps| caps.get(0))
        .any(|m| m.start() <= caret && caret <= m.end())
}

fn bold_pattern() -> &'static Regex {
    static RE_BOLD: OnceLock<Regex> = OnceLock::new();
    RE_BOLD.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid bold regex"))
}

fn italic_pattern() -> &'static Regex {
    static RE_ITALIC: OnceLock<Regex> = OnceLock::new();
    // A bare `**` is a bold delimiter: consume it so it never reads as an
    // empty italic span.
    RE_ITALIC.get_or_init(|| Regex::new(r"\*\*|\*(.*?)\*").expect("valid italic regex"))
}

fn underline_pattern() -> &'static Regex {
    static RE_UNDERLINE: OnceLock<Regex> = OnceLock::new();
    RE_UNDERLINE.get_or_init(|| Regex::new(r"<u>(.*?)</u>").expect("valid underline regex"))
}

fn strikethrough_pattern() -> &'static Regex {
    static RE_STRIKE: OnceLock<Regex> = OnceLock::new();
    RE_STRIKE.get_or_init(|| Regex::new(r"~~(.*?)~~").expect("valid strikethrough regex"))
}

fn ordered_item_pattern() -> &'static Regex {
    static RE_OL: OnceLock<Regex> = OnceLock::new();
    RE_OL.get_or_init(|| Regex::new(r"^[0-9]+\. ").expect("valid ordered list regex"))
}
