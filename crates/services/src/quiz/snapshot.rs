use spell_core::model::{ErrorLog, QuizProgress, QuizResults, QuizSession, StatsBook};

/// The active question as the presentation layer sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSnapshot {
    pub word: String,
    pub candidates: Vec<String>,
    /// One-based position within the session.
    pub number: usize,
    pub total: usize,
}

/// Immutable copy of everything the presentation layer renders.
///
/// A new snapshot is published after every state transition.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSnapshot {
    pub question: Option<QuestionSnapshot>,
    pub selected_answer: Option<String>,
    pub progress: QuizProgress,
    pub results: Option<QuizResults>,
    pub word_stats: StatsBook,
    pub error_log: ErrorLog,
}

impl QuizSnapshot {
    #[must_use]
    pub fn capture(session: &QuizSession, errors: &ErrorLog) -> Self {
        let question = session.current_question().map(|q| QuestionSnapshot {
            word: q.entry.spelling().to_string(),
            candidates: q.candidates.to_vec(),
            number: q.index + 1,
            total: q.total,
        });

        Self {
            question,
            selected_answer: session.selected_answer().map(str::to_string),
            progress: session.progress(),
            results: session.results(),
            word_stats: session.word_stats().clone(),
            error_log: errors.clone(),
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress.is_complete
    }
}
