//! Ratatui backend implementation for the QuizBackend trait.
//!
//! Owns the terminal: raw mode, alternate screen and the event loop. Drawing
//! and key handling live in [`crate::app`].

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use quiz::{QuizBackend, QuizError, Session};
use ratatui::{Terminal, prelude::CrosstermBackend, style::Color};
use std::io::{self, Stdout};
use thiserror::Error;

use crate::app::{App, Control};

/// Error type for the Ratatui backend.
#[derive(Debug, Error)]
pub enum RatatuiError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The session rejected an action, or the user cancelled.
    #[error("{0}")]
    Quiz(#[from] QuizError),
}

/// Colors used by the form and the chart.
#[derive(Debug, Clone)]
pub struct Palette {
    pub primary: Color,
    pub text: Color,
    pub highlight: Color,
    pub success: Color,
    pub border: Color,
    pub selected_bg: Color,
    /// Outline and fill of the score polygon.
    pub chart: Color,
    /// Rings and axes of the chart.
    pub grid: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            text: Color::White,
            highlight: Color::Yellow,
            success: Color::Green,
            border: Color::Gray,
            selected_bg: Color::DarkGray,
            chart: Color::Rgb(0x88, 0x84, 0xd8),
            grid: Color::DarkGray,
        }
    }
}

/// Button captions and chart series name.
#[derive(Debug, Clone)]
pub struct Labels {
    /// Switches from the form to the chart.
    pub show_results: String,
    /// Switches from the chart back to the form.
    pub redo: String,
    /// Name of the plotted series.
    pub series: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            show_results: "Show results".to_string(),
            redo: "Retake questionnaire".to_string(),
            series: "Score".to_string(),
        }
    }
}

/// Ratatui backend that shows the answer form and the results chart.
#[derive(Debug, Clone)]
pub struct RatatuiBackend {
    /// Title shown at the top of both screens.
    title: String,
    palette: Palette,
    labels: Labels,
}

impl Default for RatatuiBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RatatuiBackend {
    /// Create a new Ratatui backend with default settings.
    pub fn new() -> Self {
        Self {
            title: "Questionnaire".to_string(),
            palette: Palette::default(),
            labels: Labels::default(),
        }
    }

    /// Set the title shown at the top of the screen.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set a custom color palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set custom button captions.
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>, RatatuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn restore_terminal(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<(), RatatuiError> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn event_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        app: &mut App<'_, '_>,
    ) -> Result<(), RatatuiError> {
        loop {
            terminal.draw(|frame| app.draw(frame))?;

            if let Event::Key(key) = event::read()?
                && app.handle_key(key)? == Control::Quit
            {
                return Ok(());
            }
        }
    }
}

impl QuizBackend for RatatuiBackend {
    type Error = RatatuiError;

    fn run(&self, session: &mut Session<'_>) -> Result<(), Self::Error> {
        let mut terminal = self.setup_terminal()?;
        let mut app = App::new(session, self);

        // Put the terminal back even when the loop fails.
        let result = self.event_loop(&mut terminal, &mut app);
        self.restore_terminal(&mut terminal)?;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_creation() {
        let backend = RatatuiBackend::new()
            .with_title("Test")
            .with_palette(Palette::default())
            .with_labels(Labels::default());
        assert_eq!(backend.title(), "Test");
        assert_eq!(backend.labels().series, "Score");
    }

    #[test]
    fn error_types() {
        let err = RatatuiError::Quiz(QuizError::Cancelled);
        assert_eq!(err.to_string(), "Quiz cancelled by user");
        assert!(std::error::Error::source(&err).is_some());

        let err = RatatuiError::from(io::Error::other("broken pipe"));
        assert_eq!(err.to_string(), "I/O error: broken pipe");
    }

    #[test]
    fn palette_default() {
        let palette = Palette::default();
        assert_eq!(palette.primary, Color::Cyan);
        assert_eq!(palette.chart, Color::Rgb(0x88, 0x84, 0xd8));
    }
}
