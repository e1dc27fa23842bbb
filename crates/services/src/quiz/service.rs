use std::fmt;
use std::sync::Arc;

use tokio::sync::{Mutex, watch};
use tracing::{debug, info, warn};

use spell_core::model::{
    AnswerOutcome, ErrorLog, QuizResults, QuizSession, StatsBook, WordBank,
};
use storage::repository::KeyValueStore;

use super::persistence::{
    ERRORS_KEY, SESSION_KEY, decode_error_log, decode_session, encode_error_log, encode_session,
};
use super::plan::QuizPlanner;
use super::snapshot::QuizSnapshot;
use crate::error::PersistenceError;

struct QuizState {
    session: QuizSession,
    errors: ErrorLog,
    planner: QuizPlanner,
}

/// Owns the quiz session, word statistics, and error log.
///
/// Every intent runs under one lock: mutate, persist, publish a snapshot.
/// Invalid intents are ignored. Storage failures are logged and never undo
/// the in-memory transition.
pub struct QuizService {
    bank: Arc<WordBank>,
    store: Arc<dyn KeyValueStore>,
    state: Mutex<QuizState>,
    updates: watch::Sender<QuizSnapshot>,
}

impl QuizService {
    /// Restore persisted state from `store`, or start a fresh session.
    ///
    /// A persisted session that cannot be decoded or fails validation is
    /// discarded. A malformed error log is treated as empty.
    pub async fn load(
        bank: Arc<WordBank>,
        store: Arc<dyn KeyValueStore>,
        mut planner: QuizPlanner,
    ) -> Self {
        let errors = match load_slot(store.as_ref(), ERRORS_KEY).await {
            Some(bytes) => decode_error_log(&bytes).unwrap_or_else(|err| {
                warn!(key = ERRORS_KEY, error = %err, "discarding malformed error log");
                ErrorLog::new()
            }),
            None => ErrorLog::new(),
        };

        let restored = match load_slot(store.as_ref(), SESSION_KEY).await {
            Some(bytes) => match decode_session(&bytes) {
                Ok(session) => Some(session),
                Err(err) => {
                    warn!(key = SESSION_KEY, error = %err, "discarding malformed session");
                    None
                }
            },
            None => None,
        };

        let (session, fresh) = match restored {
            Some(session) => {
                info!(
                    questions = session.total(),
                    current = session.current_index(),
                    "restored quiz session"
                );
                (session, false)
            }
            None => (planner.full_session(&bank, StatsBook::new()), true),
        };

        let (updates, _) = watch::channel(QuizSnapshot::capture(&session, &errors));
        let service = Self {
            bank,
            store,
            state: Mutex::new(QuizState {
                session,
                errors,
                planner,
            }),
            updates,
        };

        if fresh {
            let state = service.state.lock().await;
            info!(questions = state.session.total(), "started new quiz session");
            service.persist_session(&state.session).await;
        }
        service
    }

    /// Latest published state.
    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        self.updates.borrow().clone()
    }

    /// Observe a new snapshot after every transition.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<QuizSnapshot> {
        self.updates.subscribe()
    }

    #[must_use]
    pub fn bank(&self) -> &WordBank {
        &self.bank
    }

    /// Results of the round, once it is complete.
    #[must_use]
    pub fn results(&self) -> Option<QuizResults> {
        self.updates.borrow().results.clone()
    }

    #[must_use]
    pub fn word_stats(&self) -> StatsBook {
        self.updates.borrow().word_stats.clone()
    }

    #[must_use]
    pub fn error_log(&self) -> ErrorLog {
        self.updates.borrow().error_log.clone()
    }

    /// Replace the session with a new shuffle of the whole bank.
    ///
    /// Word statistics and the error log are kept.
    pub async fn initialize(&self) {
        let mut state = self.state.lock().await;
        let stats = state.session.word_stats().clone();
        let QuizState {
            session, planner, ..
        } = &mut *state;
        *session = planner.full_session(&self.bank, stats);
        info!(questions = session.total(), "started new quiz session");
        self.persist_session(&state.session).await;
        self.publish(&state);
    }

    /// Record a tentative answer for the active question.
    ///
    /// Returns false (and changes nothing) if the session is complete, an
    /// answer is already selected, or `candidate` is not on offer.
    pub async fn select_answer(&self, candidate: &str) -> bool {
        let mut state = self.state.lock().await;
        if let Err(reason) = state.session.select_answer(candidate) {
            debug!(%reason, candidate, "ignored answer selection");
            return false;
        }
        debug!(candidate, "answer selected");
        self.persist_session(&state.session).await;
        self.publish(&state);
        true
    }

    /// Score the selected answer and move on.
    ///
    /// Returns `None` (and changes nothing) when no answer is selected.
    pub async fn advance(&self) -> Option<AnswerOutcome> {
        let mut state = self.state.lock().await;
        let outcome = match state.session.advance() {
            Ok(outcome) => outcome,
            Err(reason) => {
                debug!(%reason, "ignored advance");
                return None;
            }
        };
        debug!(
            word = %outcome.word,
            correct = outcome.correct,
            attempts = outcome.stats.attempts,
            "answer scored"
        );
        if outcome.session_complete {
            info!(
                questions = state.session.total(),
                correct = state.session.outcomes().iter().filter(|c| **c).count(),
                "quiz round complete"
            );
        }
        self.persist_session(&state.session).await;
        self.publish(&state);
        Some(outcome)
    }

    /// Flag the active word as problematic.
    ///
    /// Returns false when there is no active question.
    pub async fn mark_current_as_error(&self) -> bool {
        let mut state = self.state.lock().await;
        let Some(word) = state
            .session
            .current_question()
            .map(|q| q.entry.spelling().to_string())
        else {
            debug!("ignored error mark on a complete session");
            return false;
        };
        debug!(%word, "word flagged");
        state.errors.push(word);
        self.persist_errors(&state.errors).await;
        self.publish(&state);
        true
    }

    /// Start a new round.
    ///
    /// With `missed_only`, the round contains the previous round's incorrectly
    /// answered words in their previous order; otherwise the whole bank is
    /// reshuffled. Word statistics carry over.
    pub async fn retry(&self, missed_only: bool) {
        let mut state = self.state.lock().await;
        let stats = state.session.word_stats().clone();
        let QuizState {
            session, planner, ..
        } = &mut *state;
        *session = if missed_only {
            let missed = session.missed_entries();
            planner.session_over(missed, stats)
        } else {
            planner.full_session(&self.bank, stats)
        };
        info!(missed_only, questions = session.total(), "retrying quiz");
        self.persist_session(&state.session).await;
        self.publish(&state);
    }

    /// Forget everything: session, word statistics, and error log.
    pub async fn reset_all(&self) {
        let mut state = self.state.lock().await;
        for key in [SESSION_KEY, ERRORS_KEY] {
            if let Err(err) = self.store.remove(key).await {
                warn!(key, error = %err, "failed to clear persisted state");
            }
        }
        state.errors.clear();
        let QuizState {
            session, planner, ..
        } = &mut *state;
        *session = planner.full_session(&self.bank, StatsBook::new());
        info!(questions = session.total(), "reset all progress");
        self.persist_session(&state.session).await;
        self.persist_errors(&state.errors).await;
        self.publish(&state);
    }

    fn publish(&self, state: &QuizState) {
        self.updates
            .send_replace(QuizSnapshot::capture(&state.session, &state.errors));
    }

    async fn persist_session(&self, session: &QuizSession) {
        let result = match encode_session(session) {
            Ok(bytes) => self.write(SESSION_KEY, &bytes).await,
            Err(err) => Err(err),
        };
        if let Err(err) = result {
            warn!(key = SESSION_KEY, error = %err, "failed to persist session");
        }
    }

    async fn persist_errors(&self, errors: &ErrorLog) {
        let result = match encode_error_log(errors) {
            Ok(bytes) => self.write(ERRORS_KEY, &bytes).await,
            Err(err) => Err(err),
        };
        if let Err(err) = result {
            warn!(key = ERRORS_KEY, error = %err, "failed to persist error log");
        }
    }

    async fn write(&self, key: &str, bytes: &[u8]) -> Result<(), PersistenceError> {
        self.store.save(key, bytes).await?;
        Ok(())
    }
}

async fn load_slot(store: &dyn KeyValueStore, key: &str) -> Option<Vec<u8>> {
    match store.load(key).await {
        Ok(value) => value,
        Err(err) => {
            warn!(key, error = %err, "failed to read persisted state");
            None
        }
    }
}

impl fmt::Debug for QuizService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.updates.borrow();
        f.debug_struct("QuizService")
            .field("bank_len", &self.bank.len())
            .field("progress", &snapshot.progress)
            .field("errors_len", &snapshot.error_log.len())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
