//! CLI entrypoint for quizrun
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod catalog;

use anyhow::{Context, Result};
use clap::Parser;
use quizrun_application::{BehaviorConfig, NoProgress, QuizProgressNotifier, RunQuizUseCase};
use quizrun_presentation::{
    Cli, ConsoleFormatter, ConsoleProgress, ConsoleTerminal, OutputConfig,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // stdout belongs to the quiz transcript
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let output_config = OutputConfig::from(&cli);
    if !output_config.color {
        colored::control::set_override(false);
    }

    let catalog = catalog::all().context("Built-in quiz is malformed")?;

    if cli.list {
        print!(
            "{}",
            ConsoleFormatter::format_catalog(catalog.iter().map(|(name, quiz)| (*name, quiz)))
        );
        return Ok(());
    }

    let selected = catalog::select(catalog, &cli.quiz)?;
    info!("Starting quizrun with {} quizzes", selected.len());

    // === Dependency Injection ===
    let use_case =
        RunQuizUseCase::new(BehaviorConfig::from_max_invalid_attempts(cli.max_attempts));
    let progress: Box<dyn QuizProgressNotifier> = if output_config.show_progress {
        Box::new(ConsoleProgress::new())
    } else {
        Box::new(NoProgress)
    };
    let mut terminal = ConsoleTerminal::stdio();

    let mut reports = Vec::with_capacity(selected.len());
    for (name, mut quiz) in selected {
        info!("Running quiz '{}'", name);
        let report = use_case
            .execute_with_progress(&mut quiz, &mut terminal, progress.as_ref())
            .await
            .with_context(|| format!("Quiz '{}' did not finish", name))?;
        reports.push(report);
    }

    // Output results
    if let Some(trailer) = ConsoleFormatter::format_trailer(cli.output, &reports) {
        print!("{}", trailer);
    }

    Ok(())
}
