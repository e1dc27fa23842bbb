#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod quiz;

pub use app_services::{AppServices, load_word_bank};
pub use error::{AppServicesError, PersistenceError};
pub use quiz::{QuestionSnapshot, QuizPlanner, QuizService, QuizSnapshot};
