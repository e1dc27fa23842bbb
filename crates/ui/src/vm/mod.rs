mod error_log_vm;
mod highlight;
mod question_vm;
mod result_vm;

pub use error_log_vm::{ErrorRowVm, map_error_rows};
pub use highlight::{HIGHLIGHT_STEP, LetterVm, highlight_frames, letters};
pub use question_vm::{AnswerButtonVm, AnswerState, QuestionVm, map_question};
pub use result_vm::{ResultRowVm, ResultVm, map_results};
