//! In-memory note buffer driven by the editor view.
//!
//! Holds the text and selection of the open note and turns toolbar commands
//! into transactions built from the pure engine functions. All offsets are in
//! characters.

use crate::detect::{detect_format, DetectedFormat};
use crate::engine::{format_span, link_span};
use crate::error::{FormatError, Result};
use crate::request::FormatRequest;
use crate::selection::{char_len, Selection};
use crate::snippet::{snippet_insertion, table_insertion, Insertion, Snippet};
use crate::toolbar::ToolbarState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextChange {
    pub start: usize,
    pub end: usize,
    pub insert: String,
}

impl TextChange {
    pub fn new(start: usize, end: usize, insert: impl Into<String>) -> Self {
        Self {
            start,
            end,
            insert: insert.into(),
        }
    }
}

/// One replacement plus where the selection ends up afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub change: TextChange,
    pub selection_after: Selection,
    pub label: &'static str,
}

impl Transaction {
    pub fn new(change: TextChange, selection_after: Selection, label: &'static str) -> Self {
        Self {
            change,
            selection_after,
            label,
        }
    }

    fn from_insertion(insertion: Insertion, label: &'static str) -> Self {
        Self::new(
            TextChange::new(insertion.replaced.start, insertion.replaced.end, insertion.text),
            insertion.selection_after,
            label,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApplyOutcome {
    pub text_changed: bool,
    pub selection_changed: bool,
    pub revision: u64,
}

/// Toolbar and insert-menu actions the editor view can send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorCommand {
    Format(FormatRequest),
    Link { url: String },
    Insert(Snippet),
    Table { rows: usize, cols: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorSnapshot {
    pub text: String,
    pub selection: Selection,
    pub revision: u64,
}

impl EditorSnapshot {
    pub fn new(text: String) -> Self {
        let len = char_len(&text);
        Self {
            text,
            selection: Selection::cursor(len),
            revision: 0,
        }
    }

    pub fn len(&self) -> usize {
        char_len(&self.text)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection.clamp(self.len());
    }

    /// Replaces the whole text after the user typed in the textarea.
    pub fn replace_from_input(&mut self, new_text: String, selection: Selection) -> ApplyOutcome {
        let next_selection = selection.clamp(char_len(&new_text));
        self.swap_in(new_text, next_selection, "input")
    }

    pub fn apply_transaction(&mut self, transaction: Transaction) -> Result<ApplyOutcome> {
        let Transaction {
            change,
            selection_after,
            label,
        } = transaction;
        let len = self.len();
        if change.start > change.end || change.end > len {
            return Err(FormatError::InvalidRange {
                start: change.start,
                end: change.end,
                len,
            });
        }

        let (start, end) = Selection::new(change.start, change.end).byte_range(&self.text);
        let mut next_text = String::with_capacity(self.text.len() + change.insert.len());
        next_text.push_str(&self.text[..start]);
        next_text.push_str(&change.insert);
        next_text.push_str(&self.text[end..]);

        let next_selection = selection_after.clamp(char_len(&next_text));
        Ok(self.swap_in(next_text, next_selection, label))
    }

    /// Runs a toolbar command against the current selection. Returns whether
    /// the text or selection changed.
    pub fn apply_command(&mut self, command: EditorCommand) -> Result<bool> {
        let Some(transaction) = self.build_transaction(command)? else {
            return Ok(false);
        };
        let outcome = self.apply_transaction(transaction)?;
        Ok(outcome.text_changed || outcome.selection_changed)
    }

    /// Formatting active at the start of the selection.
    pub fn detect(&self) -> DetectedFormat {
        detect_format(&self.text, self.selection.start)
    }

    /// Toolbar contents for the current selection. The toolbar only opens
    /// over a non-empty selection.
    pub fn toolbar(&self) -> Option<ToolbarState> {
        if self.selection.is_cursor() {
            return None;
        }
        Some(ToolbarState::from_detection(self.detect()))
    }

    fn swap_in(
        &mut self,
        next_text: String,
        next_selection: Selection,
        label: &str,
    ) -> ApplyOutcome {
        let text_changed = self.text != next_text;
        let selection_changed = self.selection != next_selection;

        self.text = next_text;
        self.selection = next_selection;
        if text_changed {
            self.revision += 1;
        }

        tracing::debug!(label, revision = self.revision, text_changed, "applied edit");

        ApplyOutcome {
            text_changed,
            selection_changed,
            revision: self.revision,
        }
    }

    fn selected_text(&self, selection: Selection) -> &str {
        let (start, end) = selection.byte_range(&self.text);
        &self.text[start..end]
    }

    fn build_transaction(&self, command: EditorCommand) -> Result<Option<Transaction>> {
        let selection = self.selection.clamp(self.len());
        let transaction = match command {
            EditorCommand::Format(request) => {
                format_span(self.selected_text(selection), &request).map(|formatted| {
                    replace_and_collapse(selection, formatted, "format")
                })
            }
            EditorCommand::Link { url } => {
                if url.trim().is_empty() {
                    None
                } else {
                    let link = link_span(self.selected_text(selection), &url);
                    Some(replace_and_collapse(selection, link, "link"))
                }
            }
            EditorCommand::Insert(snippet) => Some(Transaction::from_insertion(
                snippet_insertion(&self.text, selection.start, snippet),
                "insert-snippet",
            )),
            EditorCommand::Table { rows, cols } => Some(Transaction::from_insertion(
                table_insertion(&self.text, selection.start, selection.end, rows, cols)?,
                "insert-table",
            )),
        };
        Ok(transaction)
    }
}

/// Replaces the selection and parks the caret right after the new span.
fn replace_and_collapse(selection: Selection, insert: String, label: &'static str) -> Transaction {
    let caret = selection.start + char_len(&insert);
    Transaction::new(
        TextChange::new(selection.start, selection.end, insert),
        Selection::cursor(caret),
        label,
    )
}
