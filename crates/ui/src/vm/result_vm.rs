use spell_core::model::{QuizResults, StatsBook};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRowVm {
    pub word: String,
    pub correct: bool,
    pub mark: &'static str,
    /// "All-time: c/a correct", when the word has statistics.
    pub all_time_label: Option<String>,
}

impl ResultRowVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.correct {
            "result-row result-row--correct"
        } else {
            "result-row result-row--wrong"
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub headline: String,
    pub rows: Vec<ResultRowVm>,
    pub can_retry_missed: bool,
}

#[must_use]
pub fn map_results(results: &QuizResults, stats: &StatsBook) -> ResultVm {
    let rows = results
        .words
        .iter()
        .map(|result| ResultRowVm {
            word: result.word.clone(),
            correct: result.correct,
            mark: if result.correct { "✓" } else { "✗" },
            all_time_label: stats
                .get(&result.word)
                .map(|s| format!("All-time: {}/{} correct", s.correct, s.attempts)),
        })
        .collect();

    ResultVm {
        headline: format!(
            "You got {} out of {} correct!",
            results.correct_answers, results.total
        ),
        rows,
        can_retry_missed: results.has_incorrect_answers,
    }
}
