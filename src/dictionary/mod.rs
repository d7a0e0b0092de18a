use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, Result};

pub mod distribution;

pub use distribution::LetterDistribution;

/// Reserved terminator codepoint; never part of a word.
pub const SENTINEL: u32 = 0;

const CR: char = '\r';
const LF: char = '\n';
const NUL: char = '\0';

/// Line-ending convention detected from the first line break of a word list.
/// Informational only; lookup does not depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Cr,
    Lf,
    CrLf,
}

/// An immutable word list answering exact-codepoint membership queries.
///
/// Words are compared codepoint-for-codepoint: case-sensitive, no
/// normalization, no locale collation.
pub struct WordStore {
    words: HashSet<String>,
    word_count: usize,
    line_ending: LineEnding,
}

impl WordStore {
    /// Load a word list from a file, one word per line.
    ///
    /// Line endings (CR, LF or CRLF) are auto-detected from the first line
    /// break. A file that cannot be read, is not valid UTF-8, or contains
    /// no line break at all is a load error, never a silently empty store.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| EngineError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let line_ending = detect_line_ending(&text).ok_or_else(|| EngineError::NoLineBreak {
            path: path.to_path_buf(),
        })?;

        let store = Self::from_text(&text, line_ending);

        tracing::info!(
            "Loaded {} words from {} ({:?} line endings)",
            store.word_count,
            path.display(),
            line_ending
        );

        Ok(store)
    }

    /// Build a store from words already in memory.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: HashSet<String> = words
            .into_iter()
            .map(Into::into)
            .filter(|w| !w.is_empty())
            .collect();
        let word_count = words.len();

        Self {
            words,
            word_count,
            line_ending: LineEnding::Lf,
        }
    }

    fn from_text(text: &str, line_ending: LineEnding) -> Self {
        // CR, LF and embedded NULs all terminate a word; the empty segment
        // between the CR and LF of a CRLF pair falls out here, as do blank
        // lines, so word_count is the non-empty line count for every
        // line-ending convention.
        let mut word_count = 0;
        let mut words = HashSet::new();
        for segment in text.split([CR, LF, NUL]) {
            if segment.is_empty() {
                continue;
            }
            word_count += 1;
            words.insert(segment.to_string());
        }

        Self {
            words,
            word_count,
            line_ending,
        }
    }

    /// Check whether a sentinel-terminated codepoint sequence is a known word.
    ///
    /// The last element must be [`SENTINEL`]; an embedded sentinel before it
    /// ends the query early. Codepoints that are not valid Unicode scalars
    /// can never match a stored word.
    pub fn exists(&self, codepoints: &[u32]) -> Result<bool> {
        if codepoints.last() != Some(&SENTINEL) {
            return Err(EngineError::UnterminatedQuery);
        }

        let mut word = String::with_capacity(codepoints.len() - 1);
        for &cp in codepoints.iter().take_while(|&&c| c != SENTINEL) {
            match char::from_u32(cp) {
                Some(ch) => word.push(ch),
                None => return Ok(false),
            }
        }
        if word.is_empty() {
            return Err(EngineError::EmptyQuery);
        }

        Ok(self.words.contains(&word))
    }

    /// Check if a word exists, by exact codepoint sequence.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of words recognized when the source file was parsed
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Check if the store holds no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Line-ending convention detected at load time
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }
}

/// Find the first CR or LF and classify the file's line-ending convention.
/// Returns `None` when the text has no line break.
fn detect_line_ending(text: &str) -> Option<LineEnding> {
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        match ch {
            CR => {
                return if chars.next() == Some(LF) {
                    Some(LineEnding::CrLf)
                } else {
                    Some(LineEnding::Cr)
                };
            }
            LF => return Some(LineEnding::Lf),
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_word_list(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn query(word: &str) -> Vec<u32> {
        let mut codepoints: Vec<u32> = word.chars().map(|c| c as u32).collect();
        codepoints.push(SENTINEL);
        codepoints
    }

    #[test]
    fn test_load_crlf_word_list() {
        let dir = TempDir::new().unwrap();
        let path = write_word_list(&dir, "words.txt", "WORD\r\nGAME\r\nTEST\r\nCODE\r\n");

        let store = WordStore::load(&path).unwrap();
        assert_eq!(store.word_count(), 4);
        assert_eq!(store.line_ending(), LineEnding::CrLf);
        assert!(store.exists(&query("WORD")).unwrap());
        assert!(store.exists(&query("GAME")).unwrap());
        assert!(!store.exists(&query("XXXX")).unwrap());
    }

    #[test]
    fn test_word_count_matches_across_line_endings() {
        let dir = TempDir::new().unwrap();
        for (name, contents) in [
            ("lf.txt", "WORD\nGAME\nTEST\nCODE\n"),
            ("cr.txt", "WORD\rGAME\rTEST\rCODE\r"),
            ("crlf.txt", "WORD\r\nGAME\r\nTEST\r\nCODE\r\n"),
            ("no_trailing.txt", "WORD\nGAME\nTEST\nCODE"),
        ] {
            let path = write_word_list(&dir, name, contents);
            let store = WordStore::load(&path).unwrap();
            assert_eq!(store.word_count(), 4, "wrong count for {}", name);
        }
    }

    #[test]
    fn test_detected_line_ending_modes() {
        let dir = TempDir::new().unwrap();
        let cases = [
            ("lf.txt", "A\nB\n", LineEnding::Lf),
            ("cr.txt", "A\rB\r", LineEnding::Cr),
            ("crlf.txt", "A\r\nB\r\n", LineEnding::CrLf),
        ];
        for (name, contents, expected) in cases {
            let path = write_word_list(&dir, name, contents);
            let store = WordStore::load(&path).unwrap();
            assert_eq!(store.line_ending(), expected);
        }
    }

    #[test]
    fn test_blank_lines_are_not_words() {
        let dir = TempDir::new().unwrap();
        let path = write_word_list(&dir, "words.txt", "WORD\n\n\nGAME\n");

        let store = WordStore::load(&path).unwrap();
        assert_eq!(store.word_count(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = WordStore::load(dir.path().join("nope.txt"));
        assert!(matches!(result, Err(EngineError::Io { .. })));
    }

    #[test]
    fn test_load_without_line_break_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = write_word_list(&dir, "one.txt", "JUSTONEWORD");
        let result = WordStore::load(&path);
        assert!(matches!(result, Err(EngineError::NoLineBreak { .. })));
    }

    #[test]
    fn test_load_empty_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = write_word_list(&dir, "empty.txt", "");
        let result = WordStore::load(&path);
        assert!(matches!(result, Err(EngineError::NoLineBreak { .. })));
    }

    #[test]
    fn test_load_non_utf8_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, [0x57u8, 0xff, 0xfe, 0x0a]).unwrap();
        let result = WordStore::load(&path);
        assert!(matches!(result, Err(EngineError::Io { .. })));
    }

    #[test]
    fn test_exact_length_match_only() {
        let store = WordStore::from_words(["WORD"]);
        assert!(store.exists(&query("WORD")).unwrap());
        assert!(!store.exists(&query("WORDS")).unwrap());
        assert!(!store.exists(&query("WOR")).unwrap());
    }

    #[test]
    fn test_case_sensitive_match() {
        let store = WordStore::from_words(["WORD"]);
        assert!(!store.exists(&query("word")).unwrap());
        assert!(!store.contains("Word"));
        assert!(store.contains("WORD"));
    }

    #[test]
    fn test_unterminated_query_is_an_error() {
        let store = WordStore::from_words(["WORD"]);
        let unterminated: Vec<u32> = "WORD".chars().map(|c| c as u32).collect();
        assert!(matches!(
            store.exists(&unterminated),
            Err(EngineError::UnterminatedQuery)
        ));
        assert!(matches!(store.exists(&[]), Err(EngineError::UnterminatedQuery)));
    }

    #[test]
    fn test_empty_query_is_an_error() {
        let store = WordStore::from_words(["WORD"]);
        assert!(matches!(store.exists(&[SENTINEL]), Err(EngineError::EmptyQuery)));
        assert!(matches!(
            store.exists(&[SENTINEL, SENTINEL]),
            Err(EngineError::EmptyQuery)
        ));
    }

    #[test]
    fn test_embedded_sentinel_ends_query() {
        let store = WordStore::from_words(["WO", "WORD"]);
        // 'W','O',0,'D',0 reads as the two-letter query "WO"
        let q = ['W' as u32, 'O' as u32, SENTINEL, 'D' as u32, SENTINEL];
        assert!(store.exists(&q).unwrap());

        let store = WordStore::from_words(["WORD"]);
        assert!(!store.exists(&q).unwrap());
    }

    #[test]
    fn test_invalid_scalar_never_matches() {
        let store = WordStore::from_words(["WORD"]);
        // 0xD800 is a surrogate, not a scalar value; the board's empty-cell
        // marker (-1 as u32) is not one either
        let q = [0xD800u32, 'O' as u32, 'R' as u32, 'D' as u32, SENTINEL];
        assert!(!store.exists(&q).unwrap());
        let q = [u32::MAX, SENTINEL];
        assert!(!store.exists(&q).unwrap());
    }

    #[test]
    fn test_german_umlaut_words() {
        let dir = TempDir::new().unwrap();
        let path = write_word_list(&dir, "de.txt", "ÜBER\r\nBÄR\r\nGRÖßE\r\nSÜß\r\n");

        let store = WordStore::load(&path).unwrap();
        assert_eq!(store.word_count(), 4);
        assert!(store.exists(&query("BÄR")).unwrap());
        assert!(store.exists(&query("SÜß")).unwrap());
        assert!(!store.exists(&query("BAR")).unwrap());
    }

    #[test]
    fn test_every_loaded_word_is_found() {
        let dir = TempDir::new().unwrap();
        let words = ["WORD", "GAME", "TEST", "CODE", "ÜBER"];
        let path = write_word_list(&dir, "words.txt", &(words.join("\n") + "\n"));

        let store = WordStore::load(&path).unwrap();
        for word in words {
            assert!(store.exists(&query(word)).unwrap(), "{} not found", word);
        }
    }
}
