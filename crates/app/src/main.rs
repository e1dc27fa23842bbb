mod cli;
mod logging;

use std::sync::Arc;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, AppServicesError, QuizService, load_word_bank};
use spell_core::model::WordBank;
use tracing::info;
use ui::{App, UiApp, build_app_context};

use crate::cli::{Cli, Command, prepare_sqlite_file};

struct DesktopApp {
    quiz: Arc<QuizService>,
}

impl UiApp for DesktopApp {
    fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }
}

fn load_bank(cli: &Cli) -> Result<WordBank, AppServicesError> {
    if let Some(path) = &cli.words {
        info!(path = %path.display(), "loading word bank");
    }
    load_word_bank(cli.words.as_deref())
}

fn print_stats(quiz: &QuizService) {
    let stats = quiz.word_stats();
    if stats.is_empty() {
        println!("No answers recorded yet.");
        return;
    }
    let width = stats.iter().map(|s| s.word.chars().count()).max().unwrap_or(0);
    for word in stats.iter() {
        let pct = word.accuracy().map_or(0.0, |a| a * 100.0);
        println!(
            "{:<width$}  {}/{} correct  ({pct:.0}%)",
            word.word, word.correct, word.attempts
        );
    }
}

fn print_errors(quiz: &QuizService) {
    let flagged = quiz.error_log().tally();
    if flagged.is_empty() {
        println!("No words flagged.");
        return;
    }
    println!("Words with Problems:");
    for entry in flagged {
        if entry.count > 1 {
            println!("  {} ×{}", entry.word, entry.count);
        } else {
            println!("  {}", entry.word);
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_tracing(&cli.log_level);

    let db_url = cli.db_url()?;
    let bank = load_bank(&cli)?;

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(&db_url)?;
    let services = AppServices::new_sqlite(&db_url, bank, cli.seed).await?;
    let quiz = services.quiz();

    match cli.command() {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { quiz });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Spelling Quiz")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
        }
        Command::Stats => print_stats(&quiz),
        Command::Errors => print_errors(&quiz),
        Command::Reset => {
            quiz.reset_all().await;
            println!("Progress reset.");
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
