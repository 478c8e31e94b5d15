use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Header row missing at line {0}")]
    MissingHeader(usize),

    #[error("Column not found in log header: {0}")]
    MissingColumn(&'static str),

    #[error("Invalid number {token:?} at line {line}")]
    InvalidNumber { line: usize, token: String },

    #[error("Row at line {line} has {found} columns, expected {expected}")]
    ShapeMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Log contains no data rows")]
    Empty,
}
