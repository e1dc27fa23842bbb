use std::path::Path;
use std::sync::Arc;

use spell_core::model::WordBank;
use storage::repository::Storage;

use crate::error::AppServicesError;
use crate::quiz::{QuizPlanner, QuizService};

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    quiz: Arc<QuizService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// `seed` makes question and answer order reproducible.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        bank: WordBank,
        seed: Option<u64>,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, bank, seed).await)
    }

    /// Build services over an already-opened storage backend.
    pub async fn from_storage(storage: &Storage, bank: WordBank, seed: Option<u64>) -> Self {
        let planner = seed.map_or_else(QuizPlanner::from_os, QuizPlanner::seeded);
        let quiz = QuizService::load(Arc::new(bank), Arc::clone(&storage.kv), planner).await;
        Self {
            quiz: Arc::new(quiz),
        }
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }
}

/// The word bank at `path`, or the built-in one.
///
/// # Errors
///
/// Returns `AppServicesError::WordBank` if the file cannot be read or holds
/// an invalid bank.
pub fn load_word_bank(path: Option<&Path>) -> Result<WordBank, AppServicesError> {
    let bank = match path {
        Some(path) => WordBank::from_path(path)?,
        None => WordBank::builtin()?,
    };
    Ok(bank)
}
