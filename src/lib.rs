//! # Wordgrid Engine
//!
//! Word dictionary engine for a tile-placement word puzzle.
//!
//! Two load-once, read-many components: [`WordStore`] parses a
//! newline-delimited word list and answers exact codepoint membership
//! queries; [`LetterDistribution`] parses a letter frequency table and
//! produces weighted-random letter draws. Both are plain owned values,
//! immutable after construction.

pub mod config;
pub mod dictionary;
pub mod error;
pub mod utils;

pub use config::Config;
pub use dictionary::{LetterDistribution, LineEnding, WordStore, SENTINEL};
pub use error::{EngineError, Result};
