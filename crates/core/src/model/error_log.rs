use serde::{Deserialize, Serialize};

/// Words the user flagged as problematic, in the order they were flagged.
///
/// Append-only; the same word may appear more than once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorLog(Vec<String>);

/// How many times a word was flagged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlaggedWord {
    pub word: String,
    pub count: usize,
}

impl ErrorLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, word: impl Into<String>) {
        self.0.push(word.into());
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Distinct flagged words with their counts, in first-flagged order.
    #[must_use]
    pub fn tally(&self) -> Vec<FlaggedWord> {
        let mut out: Vec<FlaggedWord> = Vec::new();
        for word in &self.0 {
            match out.iter_mut().find(|flagged| &flagged.word == word) {
                Some(flagged) => flagged.count += 1,
                None => out.push(FlaggedWord {
                    word: word.clone(),
                    count: 1,
                }),
            }
        }
        out
    }
}
