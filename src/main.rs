use anyhow::Context;
use clap::Parser;
use pawquiz::config::{Config, ConfigOverrides};
use pawquiz::logging::{init_tracing, LogTarget};
use std::path::PathBuf;

/// Multiple-choice quiz in the terminal.
#[derive(Debug, Parser)]
#[command(name = "pawquiz", version, about)]
struct Cli {
    /// Question file with [[questions]] tables (overrides config)
    #[arg(long, value_name = "FILE")]
    questions: Option<PathBuf>,

    /// Milliseconds between score animation steps (overrides config)
    #[arg(long, value_name = "MS")]
    tick_ms: Option<u64>,

    /// Allow moving past a question without answering it
    #[arg(long)]
    allow_unanswered: bool,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Append logs to this file (overrides config)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Validate config and questions, print a summary and exit
    #[arg(long)]
    check: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            questions: self.questions.clone(),
            tick_ms: self.tick_ms,
            allow_unanswered: self.allow_unanswered,
            log_file: self.log_file.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.apply_overrides(cli.overrides());
    config.validate()?;

    let target = if cli.check {
        LogTarget::Stderr
    } else {
        LogTarget::File
    };
    if !init_tracing(&config.logging, target).context("Failed to open log file")? {
        tracing::debug!("Reusing existing tracing subscriber");
    }

    let bank = config.question_bank()?;
    tracing::debug!(questions = bank.len(), "Question bank loaded");

    if cli.check {
        println!("{} questions OK", bank.len());
        return Ok(());
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("pawquiz-anim")
        .enable_time()
        .build()
        .context("Failed to start async runtime")?;

    pawquiz::ui::run(bank, &config, runtime.handle().clone())?;
    runtime.shutdown_background();
    Ok(())
}
