use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WordEntryError {
    #[error("spelling cannot be empty")]
    EmptySpelling,

    #[error("`{spelling}` has no misspellings")]
    NoMisspellings { spelling: String },

    #[error("misspelling of `{spelling}` cannot be empty")]
    EmptyMisspelling { spelling: String },

    #[error("`{spelling}` lists itself as a misspelling")]
    MisspellingMatchesSpelling { spelling: String },

    #[error("`{spelling}` lists `{misspelling}` more than once")]
    DuplicateMisspelling {
        spelling: String,
        misspelling: String,
    },
}

//
// ─── WORD ENTRY ────────────────────────────────────────────────────────────────
//

/// A target spelling together with its known common misspellings.
///
/// Entries are validated on construction: the spelling and every misspelling
/// are non-empty after trimming, there is at least one misspelling, and the
/// full candidate list (`misspellings` plus the spelling) has no duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "WordEntryRecord", into = "WordEntryRecord")]
pub struct WordEntry {
    spelling: String,
    misspellings: Vec<String>,
}

impl WordEntry {
    /// Create a validated entry.
    ///
    /// # Errors
    ///
    /// Returns `WordEntryError` if the spelling or misspellings are empty, or if
    /// the candidate list would contain duplicates.
    pub fn new<I, S>(spelling: impl Into<String>, misspellings: I) -> Result<Self, WordEntryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let spelling = spelling.into().trim().to_string();
        if spelling.is_empty() {
            return Err(WordEntryError::EmptySpelling);
        }

        let mut seen = HashSet::new();
        let mut cleaned = Vec::new();
        for raw in misspellings {
            let misspelling = raw.into().trim().to_string();
            if misspelling.is_empty() {
                return Err(WordEntryError::EmptyMisspelling { spelling });
            }
            if misspelling == spelling {
                return Err(WordEntryError::MisspellingMatchesSpelling { spelling });
            }
            if !seen.insert(misspelling.clone()) {
                return Err(WordEntryError::DuplicateMisspelling {
                    spelling,
                    misspelling,
                });
            }
            cleaned.push(misspelling);
        }

        if cleaned.is_empty() {
            return Err(WordEntryError::NoMisspellings { spelling });
        }

        Ok(Self {
            spelling,
            misspellings: cleaned,
        })
    }

    #[must_use]
    pub fn spelling(&self) -> &str {
        &self.spelling
    }

    #[must_use]
    pub fn misspellings(&self) -> &[String] {
        &self.misspellings
    }

    /// Every answer offered for this word: the misspellings followed by the
    /// correct spelling, in dataset order.
    #[must_use]
    pub fn candidates(&self) -> Vec<String> {
        let mut all = self.misspellings.clone();
        all.push(self.spelling.clone());
        all
    }

    /// Number of answers offered for this word.
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.misspellings.len() + 1
    }

    /// Returns true if `answer` is the correct spelling.
    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        self.spelling == answer
    }

    /// Returns true if `answer` is one of this word's candidates.
    #[must_use]
    pub fn offers(&self, answer: &str) -> bool {
        self.is_correct(answer) || self.misspellings.iter().any(|m| m == answer)
    }

    /// Returns true if `candidates` is a permutation of this word's candidates.
    #[must_use]
    pub fn is_candidate_permutation(&self, candidates: &[String]) -> bool {
        if candidates.len() != self.candidate_count() {
            return false;
        }
        let mut seen = HashSet::with_capacity(candidates.len());
        candidates
            .iter()
            .all(|candidate| self.offers(candidate) && seen.insert(candidate.as_str()))
    }
}

/// Persisted/dataset shape of a word entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WordEntryRecord {
    spelling_word: String,
    #[serde(rename = "commonMispellings")]
    misspellings: Vec<String>,
}

impl TryFrom<WordEntryRecord> for WordEntry {
    type Error = WordEntryError;

    fn try_from(record: WordEntryRecord) -> Result<Self, Self::Error> {
        Self::new(record.spelling_word, record.misspellings)
    }
}

impl From<WordEntry> for WordEntryRecord {
    fn from(entry: WordEntry) -> Self {
        Self {
            spelling_word: entry.spelling,
            misspellings: entry.misspellings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_keeps_misspellings_in_order() {
        let entry = WordEntry::new(" necessary ", ["neccessary", " necessery"]).unwrap();
        assert_eq!(entry.spelling(), "necessary");
        assert_eq!(entry.misspellings(), ["neccessary", "necessery"]);
        assert_eq!(
            entry.candidates(),
            vec!["neccessary", "necessery", "necessary"]
        );
    }

    #[test]
    fn rejects_invalid_entries() {
        assert_eq!(
            WordEntry::new("  ", ["x"]).unwrap_err(),
            WordEntryError::EmptySpelling
        );
        assert!(matches!(
            WordEntry::new("cat", Vec::<String>::new()).unwrap_err(),
            WordEntryError::NoMisspellings { .. }
        ));
        assert!(matches!(
            WordEntry::new("cat", ["cat"]).unwrap_err(),
            WordEntryError::MisspellingMatchesSpelling { .. }
        ));
        assert!(matches!(
            WordEntry::new("cat", ["kat", "kat"]).unwrap_err(),
            WordEntryError::DuplicateMisspelling { .. }
        ));
    }

    #[test]
    fn recognizes_candidate_permutations() {
        let entry = WordEntry::new("cat", ["kat", "catt"]).unwrap();
        let shuffled = vec!["catt".to_string(), "cat".to_string(), "kat".to_string()];
        assert!(entry.is_candidate_permutation(&shuffled));

        let missing = vec!["cat".to_string(), "kat".to_string()];
        assert!(!entry.is_candidate_permutation(&missing));

        let duplicated = vec!["cat".to_string(), "kat".to_string(), "kat".to_string()];
        assert!(!entry.is_candidate_permutation(&duplicated));

        let foreign = vec!["cat".to_string(), "kat".to_string(), "dog".to_string()];
        assert!(!entry.is_candidate_permutation(&foreign));
    }

    #[test]
    fn deserializes_dataset_shape() {
        let json = r#"{"spellingWord":"receive","commonMispellings":["recieve","receeve"]}"#;
        let entry: WordEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.spelling(), "receive");
        assert!(entry.offers("recieve"));

        let back = serde_json::to_value(&entry).unwrap();
        assert_eq!(back["spellingWord"], "receive");
        assert_eq!(back["commonMispellings"][1], "receeve");
    }

    #[test]
    fn deserialization_applies_validation() {
        let json = r#"{"spellingWord":"receive","commonMispellings":[]}"#;
        assert!(serde_json::from_str::<WordEntry>(json).is_err());
    }
}
