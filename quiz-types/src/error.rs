use crate::AnswerError;

/// Error type for quiz operations.
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    /// The selected theme, question or choice is not part of the catalog.
    #[error("No choice {choice_index} for question {question_index} of theme '{theme_id}'")]
    UnknownChoice {
        theme_id: String,
        question_index: usize,
        choice_index: usize,
    },

    /// A raw answer value could not be recorded.
    #[error(transparent)]
    Answer(#[from] AnswerError),

    /// User cancelled the quiz (Ctrl+C, closed window, etc.)
    #[error("Quiz cancelled by user")]
    Cancelled,

    /// Backend-specific failure (I/O, UI framework crash, etc.)
    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl QuizError {
    /// Check if this error represents user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
