//! Nutrition questionnaire in the terminal.
//!
//! Answer the six questions, open the results to see the radar chart, then
//! quit with Esc. The final scores are printed after the terminal is restored,
//! unless the questionnaire was cancelled with Ctrl+C.

use quiz::Session;
use quiz_catalogs::{REDO_LABEL, RESULTS_LABEL, SERIES_LABEL, TITLE, nutrition};
use quiz_ratatui::{Labels, RatatuiBackend};

fn main() -> anyhow::Result<()> {
    let backend = RatatuiBackend::new().with_title(TITLE).with_labels(Labels {
        show_results: RESULTS_LABEL.to_string(),
        redo: REDO_LABEL.to_string(),
        series: SERIES_LABEL.to_string(),
    });

    let mut session = Session::new(nutrition());
    match session.run(backend) {
        Ok(()) => {}
        Err(err) if err.is_cancelled() => return Ok(()),
        Err(err) => return Err(err.into()),
    }

    for result in session.results() {
        println!("{}: {}", result.theme, result.score);
    }
    Ok(())
}
