//! Scripted backend for running quizzes without user interaction.
//!
//! `ScriptedBackend` replays a fixed list of user actions against a session.
//! This is useful for testing catalogs and scoring.
//!
//! # Example
//!
//! ```rust,ignore
//! use quiz::{ScriptedBackend, Session, Step};
//!
//! let mut session = Session::new(&catalog);
//! session
//!     .run(
//!         ScriptedBackend::new()
//!             .with_step(Step::select("nutrition", 0, 0))
//!             .with_step(Step::raw("hydratation", 1, "2"))
//!             .with_step(Step::ShowResults),
//!     )
//!     .unwrap();
//! ```

use crate::{QuizBackend, QuizError, Session};

/// One user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Pick a choice of a catalog question.
    Select {
        theme_id: String,
        question_index: usize,
        choice_index: usize,
    },

    /// Submit a raw value as an input control would.
    Raw {
        theme_id: String,
        question_index: usize,
        value: String,
    },

    /// Press the results button.
    ShowResults,

    /// Press the redo button.
    Redo,
}

impl Step {
    pub fn select(theme_id: impl Into<String>, question_index: usize, choice_index: usize) -> Self {
        Self::Select {
            theme_id: theme_id.into(),
            question_index,
            choice_index,
        }
    }

    pub fn raw(
        theme_id: impl Into<String>,
        question_index: usize,
        value: impl Into<String>,
    ) -> Self {
        Self::Raw {
            theme_id: theme_id.into(),
            question_index,
            value: value.into(),
        }
    }
}

/// A backend that replays pre-configured steps.
#[derive(Debug, Clone, Default)]
pub struct ScriptedBackend {
    steps: Vec<Step>,
}

/// Error type for ScriptedBackend.
#[derive(Debug, thiserror::Error)]
pub enum ScriptedBackendError {
    #[error("Step {index} ({step:?}) failed: {source}")]
    StepFailed {
        index: usize,
        step: Step,
        #[source]
        source: QuizError,
    },
}

impl ScriptedBackend {
    /// Create a new backend with no steps.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step.
    pub fn with_step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Append several steps.
    pub fn with_steps(mut self, steps: impl IntoIterator<Item = Step>) -> Self {
        self.steps.extend(steps);
        self
    }
}

impl QuizBackend for ScriptedBackend {
    type Error = ScriptedBackendError;

    fn run(&self, session: &mut Session<'_>) -> Result<(), Self::Error> {
        for (index, step) in self.steps.iter().enumerate() {
            tracing::trace!(index, ?step, "replaying step");
            apply(session, step).map_err(|source| ScriptedBackendError::StepFailed {
                index,
                step: step.clone(),
                source,
            })?;
        }
        Ok(())
    }
}

fn apply(session: &mut Session<'_>, step: &Step) -> Result<(), QuizError> {
    match step {
        Step::Select {
            theme_id,
            question_index,
            choice_index,
        } => {
            session.select(theme_id, *question_index, *choice_index)?;
        }
        Step::Raw {
            theme_id,
            question_index,
            value,
        } => {
            session.record_answer(theme_id, *question_index, value)?;
        }
        Step::ShowResults => {
            session.show_results();
        }
        Step::Redo => session.redo(),
    }
    Ok(())
}
