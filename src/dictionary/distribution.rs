use std::fs;
use std::path::Path;

use rand::Rng;

use crate::error::{EngineError, Result};
use crate::utils::letters::ENGLISH_LETTER_WEIGHTS;

/// A weighted letter bag for random tile draws.
///
/// Entries are (letter, weight) pairs in file order; duplicates are allowed
/// and simply add separate buckets. The probability of drawing a letter is
/// its weight over the total weight.
pub struct LetterDistribution {
    entries: Vec<(char, u32)>,
    total_weight: u64,
}

impl LetterDistribution {
    /// Load a distribution from a comma-separated `letter,weight,...` file.
    ///
    /// Malformed pairs (letter token that is not exactly one codepoint,
    /// weight below 1) are skipped with a warning and never revisited; an
    /// odd trailing token is dropped. A file that cannot be read is a load
    /// error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| EngineError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut tokens: Vec<&str> = text.split(',').collect();
        if tokens.len() % 2 != 0 {
            tracing::warn!(
                "Distribution {} has an odd number of tokens ({}), dropping the last",
                path.display(),
                tokens.len()
            );
            tokens.pop();
        }

        let mut entries = Vec::with_capacity(tokens.len() / 2);
        let mut total_weight: u64 = 0;

        for pair in tokens.chunks_exact(2) {
            let letter_token = pair[0].trim();
            let weight_token = pair[1].trim();

            let mut chars = letter_token.chars();
            let letter = match (chars.next(), chars.next()) {
                (Some(ch), None) => ch,
                _ => {
                    tracing::warn!(
                        "Distribution entry {:?} is not a single codepoint, skipping",
                        letter_token
                    );
                    continue;
                }
            };

            let weight = match weight_token.parse::<i64>() {
                Ok(w) if w >= 1 => w as u32,
                _ => {
                    tracing::warn!(
                        "Distribution weight {:?} for {:?} is not a positive integer, skipping",
                        weight_token,
                        letter
                    );
                    continue;
                }
            };

            total_weight += u64::from(weight);
            entries.push((letter, weight));
        }

        if entries.is_empty() {
            tracing::warn!(
                "Distribution {} loaded with no valid entries; draws will fail",
                path.display()
            );
        } else {
            tracing::info!(
                "Loaded distribution from {} with {} letters (total weight {})",
                path.display(),
                entries.len(),
                total_weight
            );
        }

        Ok(Self {
            entries,
            total_weight,
        })
    }

    /// Build a distribution from pairs already in memory.
    /// Entries with weight 0 are discarded, same as in `load`.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (char, u32)>,
    {
        let entries: Vec<(char, u32)> = pairs.into_iter().filter(|&(_, w)| w >= 1).collect();
        let total_weight = entries.iter().map(|&(_, w)| u64::from(w)).sum();

        Self {
            entries,
            total_weight,
        }
    }

    /// The built-in English letter frequency table.
    pub fn english() -> Self {
        Self::from_pairs(ENGLISH_LETTER_WEIGHTS.iter().copied())
    }

    /// Draw one letter using the supplied RNG.
    ///
    /// Standard weighted-bucket sampling: a uniform draw over the total
    /// weight walks the entries until its bucket is found. Fails explicitly
    /// on an empty distribution instead of reading past the entries.
    pub fn draw(&self, rng: &mut impl Rng) -> Result<char> {
        if self.total_weight == 0 {
            return Err(EngineError::EmptyDistribution);
        }

        let mut remaining = rng.random_range(1..=self.total_weight) as i64;
        let mut drawn = None;
        for &(letter, weight) in &self.entries {
            // The last entry is the fallback if the draw is never exhausted
            drawn = Some(letter);
            remaining -= i64::from(weight);
            if remaining <= 0 {
                break;
            }
        }

        drawn.ok_or(EngineError::EmptyDistribution)
    }

    /// Draw one letter using the thread RNG.
    pub fn draw_random_codepoint(&self) -> Result<char> {
        self.draw(&mut rand::rng())
    }

    /// Sum of all weights, the sampling range
    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// Number of (letter, weight) entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the distribution has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
