use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the dictionary engine.
///
/// A failed load is a construction failure; it never yields an empty but
/// usable-looking component.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("word list {path} contains no line break")]
    NoLineBreak { path: PathBuf },

    #[error("query is not terminated by the sentinel codepoint")]
    UnterminatedQuery,

    #[error("query contains no codepoints before the sentinel")]
    EmptyQuery,

    #[error("letter distribution has no entries to draw from")]
    EmptyDistribution,
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
