mod bank;
mod error_log;
mod results;
mod session;
mod stats;
mod word;

pub use bank::{WordBank, WordBankError};
pub use error_log::{ErrorLog, FlaggedWord};
pub use results::{QuizResults, WordResult};
pub use session::{
    AnswerOutcome, IntentRejected, Question, QuizProgress, QuizSession, SessionStateError,
};
pub use stats::{StatsBook, WordStats};
pub use word::{WordEntry, WordEntryError};
