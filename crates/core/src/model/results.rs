use crate::model::word::WordEntry;

/// Outcome of one question in a finished round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordResult {
    pub word: String,
    pub correct: bool,
}

/// Aggregate results for a completed round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResults {
    pub correct_answers: usize,
    pub total: usize,
    pub words: Vec<WordResult>,
    pub has_incorrect_answers: bool,
}

impl QuizResults {
    /// Pair each recorded outcome with the word it was recorded for.
    ///
    /// Outcomes beyond the end of `order` are ignored.
    #[must_use]
    pub fn compute(order: &[WordEntry], outcomes: &[bool]) -> Self {
        let words: Vec<WordResult> = order
            .iter()
            .zip(outcomes)
            .map(|(entry, &correct)| WordResult {
                word: entry.spelling().to_string(),
                correct,
            })
            .collect();
        let correct_answers = words.iter().filter(|w| w.correct).count();
        let has_incorrect_answers = words.iter().any(|w| !w.correct);

        Self {
            correct_answers,
            total: words.len(),
            words,
            has_incorrect_answers,
        }
    }

    /// Words answered incorrectly, in round order.
    pub fn missed(&self) -> impl Iterator<Item = &str> {
        self.words
            .iter()
            .filter(|w| !w.correct)
            .map(|w| w.word.as_str())
    }
}
