use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::results::QuizResults;
use crate::model::stats::{StatsBook, WordStats};
use crate::model::word::WordEntry;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Structural problems that make a session unusable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionStateError {
    #[error("{sets} candidate sets for {questions} questions")]
    CandidateSetCountMismatch { questions: usize, sets: usize },

    #[error("candidate set {index} is not a permutation of its word's answers")]
    InvalidCandidateSet { index: usize },

    #[error("question index {index} is past the end ({len} questions)")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("{outcomes} outcomes recorded at question index {index}")]
    OutcomeCountMismatch { index: usize, outcomes: usize },

    #[error("selected answer is not offered for the active question")]
    InvalidSelection,

    #[error("word statistics are inconsistent")]
    InconsistentStats,
}

/// Why an intent left the session unchanged.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum IntentRejected {
    #[error("session is complete")]
    SessionComplete,

    #[error("an answer is already selected")]
    AlreadySelected,

    #[error("answer is not offered for this question")]
    UnknownCandidate,

    #[error("no answer selected")]
    NothingSelected,
}

//
// ─── VIEWS ─────────────────────────────────────────────────────────────────────
//

/// The active question: its word entry and shuffled answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question<'a> {
    pub entry: &'a WordEntry,
    pub candidates: &'a [String],
    /// Zero-based position within the session.
    pub index: usize,
    pub total: usize,
}

/// Aggregated view of session progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

/// Result of scoring the active question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub word: String,
    pub chosen: String,
    pub correct: bool,
    pub stats: WordStats,
    pub session_complete: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One pass through an ordered list of word entries.
///
/// The session is `Active` while `current_question_index < question_order.len()`
/// and `Complete` afterwards. An empty ordering is complete from the start.
/// Field names are the persisted (camelCase) names.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "QuizSessionRecord")]
pub struct QuizSession {
    current_question_index: usize,
    results: Vec<bool>,
    selected_answer: Option<String>,
    randomized_answers: Vec<Vec<String>>,
    word_stats: StatsBook,
    question_order: Vec<WordEntry>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuizSessionRecord {
    current_question_index: usize,
    results: Vec<bool>,
    selected_answer: Option<String>,
    randomized_answers: Vec<Vec<String>>,
    word_stats: StatsBook,
    question_order: Vec<WordEntry>,
}

impl TryFrom<QuizSessionRecord> for QuizSession {
    type Error = SessionStateError;

    fn try_from(record: QuizSessionRecord) -> Result<Self, Self::Error> {
        let session = Self {
            current_question_index: record.current_question_index,
            results: record.results,
            selected_answer: record.selected_answer,
            randomized_answers: record.randomized_answers,
            word_stats: record.word_stats,
            question_order: record.question_order,
        };
        session.validate()?;
        Ok(session)
    }
}

impl QuizSession {
    /// Start a session at question 0 over `order`.
    ///
    /// Each entry's candidates are passed to `arrange`, which decides their
    /// display order. `arrange` must only reorder the slice.
    #[must_use]
    pub fn start(
        order: Vec<WordEntry>,
        stats: StatsBook,
        mut arrange: impl FnMut(&mut [String]),
    ) -> Self {
        let randomized_answers = order
            .iter()
            .map(|entry| {
                let mut candidates = entry.candidates();
                arrange(&mut candidates);
                candidates
            })
            .collect();
        Self {
            current_question_index: 0,
            results: Vec::new(),
            selected_answer: None,
            randomized_answers,
            word_stats: stats,
            question_order: order,
        }
    }

    /// Check every structural invariant.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), SessionStateError> {
        let len = self.question_order.len();
        if self.randomized_answers.len() != len {
            return Err(SessionStateError::CandidateSetCountMismatch {
                questions: len,
                sets: self.randomized_answers.len(),
            });
        }
        for (index, (entry, set)) in self
            .question_order
            .iter()
            .zip(&self.randomized_answers)
            .enumerate()
        {
            if !entry.is_candidate_permutation(set) {
                return Err(SessionStateError::InvalidCandidateSet { index });
            }
        }
        if self.current_question_index > len {
            return Err(SessionStateError::IndexOutOfBounds {
                index: self.current_question_index,
                len,
            });
        }
        if self.results.len() != self.current_question_index {
            return Err(SessionStateError::OutcomeCountMismatch {
                index: self.current_question_index,
                outcomes: self.results.len(),
            });
        }
        if let Some(selected) = self.selected_answer.as_deref() {
            let offered = self
                .question_order
                .get(self.current_question_index)
                .is_some_and(|entry| entry.offers(selected));
            if !offered {
                return Err(SessionStateError::InvalidSelection);
            }
        }
        if !self.word_stats.is_consistent() {
            return Err(SessionStateError::InconsistentStats);
        }
        Ok(())
    }

    #[must_use]
    pub fn question_order(&self) -> &[WordEntry] {
        &self.question_order
    }

    #[must_use]
    pub fn candidate_sets(&self) -> &[Vec<String>] {
        &self.randomized_answers
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_question_index
    }

    #[must_use]
    pub fn outcomes(&self) -> &[bool] {
        &self.results
    }

    #[must_use]
    pub fn selected_answer(&self) -> Option<&str> {
        self.selected_answer.as_deref()
    }

    #[must_use]
    pub fn word_stats(&self) -> &StatsBook {
        &self.word_stats
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.question_order.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current_question_index >= self.question_order.len()
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            total: self.total(),
            answered: self.results.len(),
            remaining: self.total().saturating_sub(self.current_question_index),
            is_complete: self.is_complete(),
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<Question<'_>> {
        let index = self.current_question_index;
        let entry = self.question_order.get(index)?;
        let candidates = self.randomized_answers.get(index)?;
        Some(Question {
            entry,
            candidates,
            index,
            total: self.total(),
        })
    }

    /// Record a tentative answer for the active question.
    ///
    /// The first selection stands until [`QuizSession::advance`].
    ///
    /// # Errors
    ///
    /// Returns `IntentRejected` (and leaves the session unchanged) when the
    /// session is complete, an answer is already selected, or `candidate` is
    /// not offered for the active question.
    pub fn select_answer(&mut self, candidate: &str) -> Result<(), IntentRejected> {
        let entry = self
            .question_order
            .get(self.current_question_index)
            .ok_or(IntentRejected::SessionComplete)?;
        if self.selected_answer.is_some() {
            return Err(IntentRejected::AlreadySelected);
        }
        if !entry.offers(candidate) {
            return Err(IntentRejected::UnknownCandidate);
        }
        self.selected_answer = Some(candidate.to_string());
        Ok(())
    }

    /// Score the selected answer and move to the next question.
    ///
    /// # Errors
    ///
    /// Returns `IntentRejected::NothingSelected` when no answer is selected and
    /// `IntentRejected::SessionComplete` once the session is complete.
    pub fn advance(&mut self) -> Result<AnswerOutcome, IntentRejected> {
        let entry = self
            .question_order
            .get(self.current_question_index)
            .ok_or(IntentRejected::SessionComplete)?;
        let chosen = self
            .selected_answer
            .take()
            .ok_or(IntentRejected::NothingSelected)?;

        let correct = entry.is_correct(&chosen);
        let word = entry.spelling().to_string();
        let stats = self.word_stats.record(&word, correct).clone();
        self.results.push(correct);
        self.current_question_index += 1;

        Ok(AnswerOutcome {
            word,
            chosen,
            correct,
            stats,
            session_complete: self.is_complete(),
        })
    }

    /// Entries answered incorrectly so far, in round order.
    #[must_use]
    pub fn missed_entries(&self) -> Vec<WordEntry> {
        self.question_order
            .iter()
            .zip(&self.results)
            .filter(|(_, correct)| !**correct)
            .map(|(entry, _)| entry.clone())
            .collect()
    }

    /// Results for the round, available once the session is complete.
    #[must_use]
    pub fn results(&self) -> Option<QuizResults> {
        self.is_complete()
            .then(|| QuizResults::compute(&self.question_order, &self.results))
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions", &self.question_order.len())
            .field("current", &self.current_question_index)
            .field("outcomes", &self.results.len())
            .field("selected", &self.selected_answer)
            .field("tracked_words", &self.word_stats.len())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
