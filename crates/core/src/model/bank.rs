use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

use crate::model::word::WordEntry;

const BUILTIN_WORDS: &str = include_str!("../../data/spelling_words.json");

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WordBankError {
    #[error("word bank has no entries")]
    Empty,

    #[error("word bank lists `{spelling}` more than once")]
    DuplicateSpelling { spelling: String },

    #[error("invalid word bank json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("cannot read word bank: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WordBankFile {
    spelling_questions: Vec<WordEntry>,
}

/// The static dataset a quiz draws its questions from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    entries: Vec<WordEntry>,
}

impl WordBank {
    /// Build a bank from already validated entries.
    ///
    /// # Errors
    ///
    /// Returns `WordBankError::Empty` for an empty list and
    /// `WordBankError::DuplicateSpelling` if two entries share a spelling.
    pub fn new(entries: Vec<WordEntry>) -> Result<Self, WordBankError> {
        if entries.is_empty() {
            return Err(WordBankError::Empty);
        }
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.spelling()) {
                return Err(WordBankError::DuplicateSpelling {
                    spelling: entry.spelling().to_string(),
                });
            }
        }
        Ok(Self { entries })
    }

    /// Parse a bank from its JSON form (`{"spellingQuestions": [...]}`).
    ///
    /// # Errors
    ///
    /// Returns `WordBankError::Parse` for malformed JSON or invalid entries,
    /// plus the validation errors of [`WordBank::new`].
    pub fn from_json(json: &str) -> Result<Self, WordBankError> {
        let file: WordBankFile = serde_json::from_str(json)?;
        Self::new(file.spelling_questions)
    }

    /// Read and parse a bank from a file on disk.
    ///
    /// # Errors
    ///
    /// Returns `WordBankError::Io` if the file cannot be read, otherwise the
    /// errors of [`WordBank::from_json`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, WordBankError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// The word list shipped with the application.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded dataset is malformed.
    pub fn builtin() -> Result<Self, WordBankError> {
        Self::from_json(BUILTIN_WORDS)
    }

    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, spelling: &str) -> Option<&WordEntry> {
        self.entries.iter().find(|entry| entry.spelling() == spelling)
    }
}
