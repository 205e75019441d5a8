//! Character-offset selections over a document string.
//!
//! Hosts address text in characters, `str` slicing needs bytes. Everything
//! public in this crate speaks characters; the helpers here do the mapping.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn new(start: usize, end: usize) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    pub fn cursor(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    pub fn is_cursor(self) -> bool {
        self.start == self.end
    }

    pub fn len(self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(self) -> bool {
        self.is_cursor()
    }

    pub fn clamp(self, len: usize) -> Self {
        Self::new(self.start.min(len), self.end.min(len))
    }

    /// Byte range of this selection inside `text`. Offsets past the end map
    /// to `text.len()`.
    pub(crate) fn byte_range(self, text: &str) -> (usize, usize) {
        let start = byte_offset(text, self.start);
        let end = start + byte_offset(&text[start..], self.end - self.start);
        (start, end)
    }
}

pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte index of the `char_offset`-th character, or `text.len()` when the
/// offset is at or past the end.
pub(crate) fn byte_offset(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Character offset of a byte index that lies on a char boundary.
pub(crate) fn char_offset(text: &str, byte_offset: usize) -> usize {
    char_len(&text[..byte_offset])
}

/// Normalizes a host-supplied range against `text`, logging when the
/// caller handed us something out of bounds or reversed.
pub(crate) fn clamp_range(text: &str, start: usize, end: usize) -> Selection {
    let len = char_len(text);
    let selection = Selection::new(start, end).clamp(len);
    if selection.start != start || selection.end != end {
        tracing::debug!(start, end, len, ?selection, "clamped selection range");
    }
    selection
}

/// Converts a JS-side caret (a number that may be negative or fractional)
/// into a character offset. `None` means the host sent something no caret
/// can be.
pub fn caret_from_host(position: f64) -> Option<usize> {
    if !position.is_finite() || position < 0.0 {
        return None;
    }
    Some(position.trunc() as usize)
}

/// Converts a UTF-16 code-unit offset, as a textarea reports it, into a
/// character offset into `text`. A unit inside a surrogate pair rounds
/// down to its character. Offsets past the end stay past the end by the
/// same amount.
pub fn utf16_to_char(text: &str, units: usize) -> usize {
    let mut seen = 0;
    let mut chars = 0;
    for ch in text.chars() {
        let next = seen + ch.len_utf16();
        if next > units {
            return chars;
        }
        seen = next;
        chars += 1;
    }
    chars + (units - seen)
}

pub(crate) fn line_start(text: &str, byte_pos: usize) -> usize {
    let clamped = byte_pos.min(text.len());
    text[..clamped].rfind('\n').map(|i| i + 1).unwrap_or(0)
}

pub(crate) fn line_end(text: &str, byte_pos: usize) -> usize {
    let clamped = byte_pos.min(text.len());
    text[clamped..]
        .find('\n')
        .map(|i| clamped + i)
        .unwrap_or(text.len())
}
