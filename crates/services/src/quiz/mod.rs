mod persistence;
mod plan;
mod service;
mod snapshot;

// Public API of the quiz subsystem.
pub use persistence::{ERRORS_KEY, SESSION_KEY};
pub use plan::{QuizPlanner, candidate_set, shuffled};
pub use service::QuizService;
pub use snapshot::{QuestionSnapshot, QuizSnapshot};
