use clap::Parser;
use quiz::Session;
use quiz_catalogs::{REDO_LABEL, RESULTS_LABEL, SERIES_LABEL, TITLE, nutrition};
use quiz_ratatui::{Labels, RatatuiBackend};

mod config;

use config::{Args, init_logging};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;

    let catalog = nutrition();
    let mut session = Session::new(catalog).with_redo_policy(args.redo.into());
    let backend = RatatuiBackend::new()
        .with_title(args.title.as_deref().unwrap_or(TITLE))
        .with_labels(Labels {
            show_results: RESULTS_LABEL.to_string(),
            redo: REDO_LABEL.to_string(),
            series: SERIES_LABEL.to_string(),
        });

    tracing::info!(themes = catalog.len(), redo = ?session.redo_policy(), "starting questionnaire");
    match session.run(backend) {
        Ok(()) => tracing::info!(answered = session.answered(), "questionnaire closed"),
        Err(err) if err.is_cancelled() => {
            tracing::info!(answered = session.answered(), "questionnaire cancelled");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    }

    if args.summary {
        for (result, theme) in session.results().iter().zip(catalog.themes()) {
            println!("{}: {} / {}", result.theme, result.score, theme.max_score());
        }
    }
    Ok(())
}
