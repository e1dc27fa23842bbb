use std::time::Duration;

/// Time each letter stays highlighted.
pub const HIGHLIGHT_STEP: Duration = Duration::from_millis(400);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetterVm {
    pub text: String,
    pub highlighted: bool,
}

impl LetterVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.highlighted {
            "letter letter--lit"
        } else {
            "letter"
        }
    }
}

/// Positions highlighted in turn, one per step.
#[must_use]
pub fn highlight_frames(word: &str) -> Vec<usize> {
    (0..word.chars().count()).collect()
}

/// Split `word` into letters, marking the one at `highlighted`.
#[must_use]
pub fn letters(word: &str, highlighted: Option<usize>) -> Vec<LetterVm> {
    word.chars()
        .enumerate()
        .map(|(idx, ch)| LetterVm {
            text: ch.to_string(),
            highlighted: highlighted == Some(idx),
        })
        .collect()
}
