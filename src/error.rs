use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("improper page range '{input}': {reason}")]
    ImproperRange { input: String, reason: &'static str },

    #[error("file {} not found", path.display())]
    NotFound { path: PathBuf },

    #[error("output {} would overwrite the input PDF", path.display())]
    OutputIsInput { path: PathBuf },

    #[error("file {} is an empty or corrupt PDF: {reason}", path.display())]
    EmptyOrCorrupt { path: PathBuf, reason: String },

    #[error("page number {index} is out of range (document has {page_count} pages)")]
    IndexOutOfRange { index: usize, page_count: usize },

    #[error("failed to compile pattern '{name}' in pattern set '{set}'")]
    Pattern {
        set: &'static str,
        name: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("i/o failure on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize PDF to {}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
