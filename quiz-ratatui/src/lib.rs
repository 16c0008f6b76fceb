//! # quiz-ratatui
//!
//! Ratatui backend for quiz.
//!
//! The answer form shows every theme as a card with one radio group per
//! question. Once the user asks for the results, the form is replaced by a
//! radar chart with one axis per theme. Retaking the quiz brings the form back
//! with the previous answers still selected (unless the session clears them).
//!
//! ## Usage
//!
//! ```rust,ignore
//! use quiz::Session;
//! use quiz_ratatui::RatatuiBackend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut session = Session::new(&catalog);
//!     session.run(RatatuiBackend::new().with_title("Wellbeing check"))?;
//!     println!("{:#?}", session.results());
//!     Ok(())
//! }
//! ```

mod app;
mod backend;
mod form;
mod radar;

pub use backend::{Labels, Palette, RatatuiBackend, RatatuiError};
pub use radar::RadarChart;
