use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// All-time attempt/correct counters for a single word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordStats {
    pub word: String,
    pub attempts: u32,
    pub correct: u32,
}

impl WordStats {
    #[must_use]
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            attempts: 0,
            correct: 0,
        }
    }

    /// Count one attempt.
    pub fn record(&mut self, correct: bool) {
        self.attempts = self.attempts.saturating_add(1);
        if correct {
            self.correct = self.correct.saturating_add(1).min(self.attempts);
        }
    }

    /// Share of correct attempts in `[0, 1]`, or `None` before the first attempt.
    #[must_use]
    pub fn accuracy(&self) -> Option<f64> {
        if self.attempts == 0 {
            None
        } else {
            Some(f64::from(self.correct) / f64::from(self.attempts))
        }
    }

    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.correct <= self.attempts
    }
}

/// Word statistics keyed by target spelling.
///
/// Serialized as a JSON object (`{"word": {"word", "attempts", "correct"}}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatsBook(BTreeMap<String, WordStats>);

impl StatsBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one attempt at `word`, creating its counters on first use.
    pub fn record(&mut self, word: &str, correct: bool) -> &WordStats {
        let stats = self
            .0
            .entry(word.to_string())
            .or_insert_with(|| WordStats::new(word));
        stats.record(correct);
        stats
    }

    #[must_use]
    pub fn get(&self, word: &str) -> Option<&WordStats> {
        self.0.get(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordStats> {
        self.0.values()
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

    /// Every entry is keyed by its own word and has `correct <= attempts`.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.0
            .iter()
            .all(|(key, stats)| key == &stats.word && stats.is_consistent())
    }
}
