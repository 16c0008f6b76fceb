//! # quiz
//!
//! Themed multiple-choice questionnaires with per-theme scoring. Backend-agnostic.
//!
//! A [`Catalog`] groups single-select questions into themes. A [`Session`] collects
//! one answer per question, scores every theme on demand and toggles between the
//! answer form and the results view. Backends decide how all of this is shown.
//!
//! ## Usage
//!
//! ```rust
//! use quiz::{Catalog, Choice, Question, Session, Step, ScriptedBackend, Theme, ThemeScore};
//!
//! let catalog = Catalog::new(vec![
//!     Theme::new("sleep", "Sleep").with_question(Question::new(
//!         "How many hours do you sleep?",
//!         vec![Choice::new("8 or more", 3), Choice::new("Less than 6", 1)],
//!     )),
//! ])
//! .unwrap();
//!
//! let mut session = Session::new(&catalog);
//! session
//!     .run(
//!         ScriptedBackend::new()
//!             .with_step(Step::select("sleep", 0, 0))
//!             .with_step(Step::ShowResults),
//!     )
//!     .unwrap();
//!
//! assert_eq!(session.results(), vec![ThemeScore::new("Sleep", 3)]);
//! ```
//!
//! ## Backends
//!
//! Backends are separate crates that implement `QuizBackend`:
//! - `quiz-ratatui` - Terminal form and radar chart

// Re-export all types from quiz-types
pub use quiz_types::*;

// Scripted backend for driving sessions without user interaction
mod scripted_backend;
pub use scripted_backend::{ScriptedBackend, ScriptedBackendError, Step};
