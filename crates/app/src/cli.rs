use std::fmt;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

#[derive(Debug)]
pub enum ArgsError {
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

#[derive(Debug, Parser)]
#[command(
    name = "spelling-quiz",
    version,
    about = "Multiple-choice spelling quiz with persistent progress"
)]
pub struct Cli {
    /// SQLite database URL or file path
    #[arg(long = "db", env = "SPELLING_DB_URL", default_value = "sqlite://spelling.sqlite3")]
    pub db: String,

    /// Word bank JSON replacing the built-in words
    #[arg(long, env = "SPELLING_WORDS")]
    pub words: Option<PathBuf>,

    /// Seed for question and answer order
    #[arg(long, env = "SPELLING_SEED")]
    pub seed: Option<u64>,

    /// Log filter directive, e.g. `debug` or `services=debug`
    #[arg(long, env = "SPELLING_LOG", default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Open the quiz window (default)
    Ui,
    /// Print all-time statistics per word
    Stats,
    /// Print the words flagged as problems
    Errors,
    /// Forget all progress, statistics, and flagged words
    Reset,
}

impl Cli {
    #[must_use]
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Ui)
    }

    /// The database URL in the form the storage layer expects.
    ///
    /// # Errors
    ///
    /// Returns `ArgsError::InvalidDbUrl` for a blank value.
    pub fn db_url(&self) -> Result<String, ArgsError> {
        if self.db.trim().is_empty() {
            return Err(ArgsError::InvalidDbUrl {
                raw: self.db.clone(),
            });
        }
        Ok(normalize_sqlite_url(&self.db))
    }
}

pub fn normalize_sqlite_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed == "sqlite::memory:" || trimmed.starts_with("sqlite://") {
        return trimmed.to_string();
    }

    let path_str = trimmed.strip_prefix("sqlite:").unwrap_or(trimmed);
    let path = Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

/// Create the database file (and its directory) so `SQLite` can open it.
///
/// # Errors
///
/// Returns an error for a URL without a path or when the file cannot be created.
pub fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}
