//! Core types for the quiz crate.
//!
//! This crate provides the foundational types for running a themed questionnaire:
//! - `Catalog`, `Theme`, `Question` and `Choice` - The static questionnaire content
//! - `AnswerStore`, `AnswerKey` and `Weight` - Collected answers keyed by question
//! - `compute_results` and `ThemeScore` - Per-theme score aggregation
//! - `Session` and `Mode` - The collect/review state machine
//! - `QuizBackend` - For implementing presentation backends

mod answer_key;
pub use answer_key::AnswerKey;

mod weight;
pub use weight::Weight;

mod answers;
pub use answers::{AnswerError, AnswerStore};

mod catalog;
pub use catalog::{Catalog, CatalogError, Choice, Question, Theme};

mod scoring;
pub use scoring::{ChartDomain, ThemeScore, compute_results};

mod session;
pub use session::{Mode, RedoPolicy, Session};

mod error;
pub use error::QuizError;

mod traits;
pub use traits::QuizBackend;
