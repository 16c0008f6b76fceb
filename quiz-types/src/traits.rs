use crate::Session;

/// Trait for backend implementations that present a quiz to the user.
///
/// A backend receives the session and drives it: it renders the catalog,
/// forwards selections, and toggles between collecting answers and reviewing
/// results until the user is done. Answers and mode stay in the session, so the
/// caller can inspect them after `run` returns.
pub trait QuizBackend {
    /// The error type for this backend.
    type Error: Into<anyhow::Error>;

    /// Run the quiz until the user leaves it.
    ///
    /// # Returns
    /// * `Ok(())` when the user quits normally
    /// * `Err` on backend failure
    fn run(&self, session: &mut Session<'_>) -> Result<(), Self::Error>;
}
