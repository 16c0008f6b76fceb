//! Command-line options and logging setup.

use std::{fs::File, path::PathBuf, sync::Mutex};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use quiz::RedoPolicy;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "quiz", version, about = "Nutrition questionnaire with a radar chart of the results")]
pub struct Args {
    /// Title shown at the top of the screen
    #[arg(long)]
    pub title: Option<String>,

    /// What retaking the questionnaire does with the previous answers
    #[arg(long, value_enum, default_value_t = Redo::Keep)]
    pub redo: Redo,

    /// Write logs to this file (the terminal is taken by the questionnaire)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print the scores once the questionnaire is closed
    #[arg(long)]
    pub summary: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Redo {
    /// Keep the answers, so the form shows them again
    Keep,
    /// Start over with an empty form
    Clear,
}

impl From<Redo> for RedoPolicy {
    fn from(redo: Redo) -> Self {
        match redo {
            Redo::Keep => RedoPolicy::Keep,
            Redo::Clear => RedoPolicy::Clear,
        }
    }
}

/// Install a file logger if `path` is given. `RUST_LOG` overrides the
/// default `info` level.
pub fn init_logging(path: Option<&PathBuf>) -> anyhow::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}
