use spell_core::model::{ErrorLog, QuizSession};

use crate::error::PersistenceError;

/// Storage key of the serialized session (including word statistics).
pub const SESSION_KEY: &str = "spellingGameState";

/// Storage key of the serialized error log.
pub const ERRORS_KEY: &str = "spellingErrors";

pub(crate) fn encode_session(session: &QuizSession) -> Result<Vec<u8>, PersistenceError> {
    Ok(serde_json::to_vec(session)?)
}

/// Decoding also runs the session's structural validation.
pub(crate) fn decode_session(bytes: &[u8]) -> Result<QuizSession, PersistenceError> {
    Ok(serde_json::from_slice(bytes)?)
}

pub(crate) fn encode_error_log(log: &ErrorLog) -> Result<Vec<u8>, PersistenceError> {
    Ok(serde_json::to_vec(log)?)
}

pub(crate) fn decode_error_log(bytes: &[u8]) -> Result<ErrorLog, PersistenceError> {
    Ok(serde_json::from_slice(bytes)?)
}
