// Word corpus: lexical categories and the syllable-count index.
//
// A corpus is a plain list of words (one per line in a word-list file).
// `SyllableIndex` buckets the words by `count_syllables`, keeping corpus order
// inside each bucket so that a given seed always picks the same words.
// Categories are purely orthographic: first-letter case and suffix.
//
// Determinism: buckets live in a `BTreeMap`, not a `HashMap`.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::HaikuError;
use crate::syllables::count_syllables;

/// Lexical category a slot can demand of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordCategory {
    /// Starts with a lowercase letter.
    Common,
    /// Starts with an uppercase letter.
    ProperNoun,
    /// Ends with "s".
    EndsInS,
    /// Ends with "ly".
    EndsInLy,
}

impl WordCategory {
    /// Whether `word` belongs to this category.
    pub fn matches(self, word: &str) -> bool {
        match self {
            WordCategory::Common => word.chars().next().is_some_and(char::is_lowercase),
            WordCategory::ProperNoun => word.chars().next().is_some_and(char::is_uppercase),
            WordCategory::EndsInS => word.ends_with('s'),
            WordCategory::EndsInLy => word.ends_with("ly"),
        }
    }
}

/// Corpus words grouped by computed syllable count.
///
/// Every word appears in exactly one bucket: the one for its count. Built
/// once, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct SyllableIndex {
    buckets: BTreeMap<u32, Vec<String>>,
    len: usize,
}

impl SyllableIndex {
    /// Build the index from a sequence of words.
    ///
    /// Words are trimmed; blank entries are skipped. Duplicates are kept, so
    /// a word listed twice is twice as likely to be drawn.
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = SyllableIndex::default();
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            index
                .buckets
                .entry(count_syllables(word))
                .or_default()
                .push(word.to_string());
            index.len += 1;
        }
        debug!(
            words = index.len,
            buckets = index.buckets.len(),
            "built syllable index"
        );
        index
    }

    /// Words with exactly `count` syllables, in corpus order. Empty if none.
    pub fn bucket(&self, count: u32) -> &[String] {
        self.buckets.get(&count).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Syllable counts that have at least one word, ascending.
    pub fn counts(&self) -> impl Iterator<Item = u32> + '_ {
        self.buckets.keys().copied()
    }

    /// Total number of indexed words.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Split word-list text into words, one per non-blank line.
pub fn parse_words(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read a word-list file (one word per line).
pub fn load_words(path: &Path) -> Result<Vec<String>, HaikuError> {
    let text = std::fs::read_to_string(path).map_err(|source| HaikuError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_words(&text))
}
