use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("change {start}..{end} is outside a document of {len} characters")]
    InvalidRange { start: usize, end: usize, len: usize },

    #[error("unknown block type: {0}")]
    UnknownBlockType(String),

    #[error("a table needs at least one row and one column, got {rows}x{cols}")]
    InvalidTableSize { rows: usize, cols: usize },

    #[error("invalid format settings: {0}")]
    Settings(#[source] serde_json::Error),

    #[error("invalid format request: {0}")]
    Request(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FormatError>;
