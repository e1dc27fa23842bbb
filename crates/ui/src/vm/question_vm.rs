use services::QuizSnapshot;

/// How a candidate button renders once the user has (or has not) chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerState {
    /// Nothing chosen yet; the button is clickable.
    Open,
    /// The correct spelling, shown after any choice.
    Correct,
    /// The user's choice, when it was wrong.
    Wrong,
    /// Any other candidate after a choice.
    Locked,
}

impl AnswerState {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Open => "answer",
            Self::Correct => "answer answer--correct",
            Self::Wrong => "answer answer--wrong",
            Self::Locked => "answer answer--locked",
        }
    }

    #[must_use]
    pub fn disabled(self) -> bool {
        !matches!(self, Self::Open)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerButtonVm {
    pub label: String,
    pub state: AnswerState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub progress_label: String,
    /// The target spelling, present once an answer is chosen.
    pub revealed_word: Option<String>,
    pub answers: Vec<AnswerButtonVm>,
    pub can_advance: bool,
    pub next_label: &'static str,
}

/// Map the active question, or `None` when the session is complete.
#[must_use]
pub fn map_question(snapshot: &QuizSnapshot) -> Option<QuestionVm> {
    let question = snapshot.question.as_ref()?;
    let selected = snapshot.selected_answer.as_deref();

    let answers = question
        .candidates
        .iter()
        .map(|candidate| {
            let state = match selected {
                None => AnswerState::Open,
                Some(_) if *candidate == question.word => AnswerState::Correct,
                Some(choice) if choice == candidate => AnswerState::Wrong,
                Some(_) => AnswerState::Locked,
            };
            AnswerButtonVm {
                label: candidate.clone(),
                state,
            }
        })
        .collect();

    let next_label = if question.number == question.total {
        "See Results"
    } else {
        "Next"
    };

    Some(QuestionVm {
        progress_label: format!("Question {} of {}", question.number, question.total),
        revealed_word: selected.map(|_| question.word.clone()),
        answers,
        can_advance: selected.is_some(),
        next_label,
    })
}
