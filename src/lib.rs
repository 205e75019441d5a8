//! Markdown formatting for the note editor's floating toolbar.
//!
//! Two pure operations sit at the centre: [`apply_format`] / [`apply_link`]
//! rewrite a selected span of a note, and [`detect_format`] reports which
//! toolbar buttons are active at a caret. Offsets are character offsets.
//!
//! ```
//! use note_format::{apply_format, detect_format, BlockType, FormatRequest};
//!
//! let note = apply_format("Hello world", 0, 5, &FormatRequest::new(BlockType::H2).bold());
//! assert_eq!(note, "**## Hello** world");
//! assert!(detect_format(&note, 4).bold);
//! ```

pub mod config;
pub mod detect;
pub mod editor_core;
pub mod engine;
pub mod error;
pub mod request;
pub mod selection;
pub mod snippet;
pub mod toolbar;

#[cfg(feature = "wasm")]
pub mod bindings;

pub use config::FormatSettings;
pub use detect::{detect_format, detect_format_with, DetectedFormat};
pub use editor_core::{EditorCommand, EditorSnapshot};
pub use engine::{
    apply_format, apply_format_with_cursor, apply_link, apply_link_with_cursor, FormatOutcome,
};
pub use error::{FormatError, Result};
pub use request::{BlockType, FormatRequest, InlineToggles, StyleAttributes};
pub use selection::Selection;
pub use snippet::Snippet;
pub use toolbar::ToolbarState;
