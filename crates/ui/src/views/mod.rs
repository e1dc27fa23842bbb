mod error_list;
mod question;
mod quiz;
mod result;

pub use error_list::ErrorListView;
pub use question::QuestionView;
pub use quiz::{QuizIntent, QuizScreen};
pub use result::ResultView;

#[cfg(test)]
mod intent_smoke;
#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
