use std::collections::HashMap;

use crate::{
    AnswerKey, AnswerStore, Catalog, ChartDomain, QuizBackend, QuizError, ThemeScore, Weight,
    compute_results,
};

/// Which screen the quiz is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Answer form: one card per theme, one radio group per question.
    #[default]
    Collecting,

    /// Results chart computed from the current answers.
    Reviewing,
}

/// What happens to the recorded answers when the user retakes the quiz.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RedoPolicy {
    /// Answers survive and are shown as selected again.
    #[default]
    Keep,

    /// Answers are forgotten.
    Clear,
}

/// A running quiz: the catalog it presents, the answers collected so far and the
/// current mode.
///
/// The session is the single owner of the answer store. Backends mutate it only
/// through the methods below.
#[derive(Debug, Clone)]
pub struct Session<'c> {
    catalog: &'c Catalog,
    answers: AnswerStore,
    /// Choice index picked through [`Session::select`], per question. Several
    /// choices may share a weight, so the index cannot be recovered from the
    /// store alone.
    selections: HashMap<AnswerKey, usize>,
    mode: Mode,
    redo_policy: RedoPolicy,
}

impl<'c> Session<'c> {
    /// Start collecting answers for `catalog`, with nothing answered yet.
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            answers: AnswerStore::new(),
            selections: HashMap::new(),
            mode: Mode::Collecting,
            redo_policy: RedoPolicy::default(),
        }
    }

    /// Choose what a redo does with the recorded answers.
    pub fn with_redo_policy(mut self, redo_policy: RedoPolicy) -> Self {
        self.redo_policy = redo_policy;
        self
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn redo_policy(&self) -> RedoPolicy {
        self.redo_policy
    }

    /// Record a raw value coming from an input control.
    ///
    /// The value is parsed here. The key is not checked against the catalog.
    pub fn record_answer(
        &mut self,
        theme_id: &str,
        question_index: usize,
        raw: &str,
    ) -> Result<(), QuizError> {
        let key = AnswerKey::new(theme_id, question_index);
        self.answers.record_raw(key.clone(), raw)?;
        self.selections.remove(&key);
        Ok(())
    }

    /// Select a choice of a catalog question and record its weight.
    pub fn select(
        &mut self,
        theme_id: &str,
        question_index: usize,
        choice_index: usize,
    ) -> Result<Weight, QuizError> {
        let key = AnswerKey::new(theme_id, question_index);
        let weight = self
            .catalog
            .choice(&key, choice_index)
            .map(|choice| choice.weight())
            .ok_or_else(|| QuizError::UnknownChoice {
                theme_id: theme_id.to_string(),
                question_index,
                choice_index,
            })?;
        tracing::debug!(%key, choice_index, %weight, "selected choice");
        self.answers.record_answer(key.clone(), weight);
        self.selections.insert(key, choice_index);
        Ok(weight)
    }

    /// Withdraw the answer to a question, leaving it unanswered.
    pub fn clear_answer(&mut self, theme_id: &str, question_index: usize) -> Option<Weight> {
        let key = AnswerKey::new(theme_id, question_index);
        self.selections.remove(&key);
        let removed = self.answers.remove(&key);
        if removed.is_some() {
            tracing::debug!(%key, "cleared answer");
        }
        removed
    }

    /// The choice shown as selected for a question.
    ///
    /// A choice picked with [`Session::select`] is returned as is. A raw answer
    /// maps to the first choice carrying its weight.
    pub fn selected_choice(&self, theme_id: &str, question_index: usize) -> Option<usize> {
        let key = AnswerKey::new(theme_id, question_index);
        let weight = self.answers.get(&key)?;
        let question = self.catalog.question(&key)?;
        match self.selections.get(&key) {
            Some(&choice)
                if question
                    .choices()
                    .get(choice)
                    .is_some_and(|c| c.weight() == weight) =>
            {
                Some(choice)
            }
            _ => question.choice_with_weight(weight),
        }
    }

    /// Score every theme against the current answers.
    pub fn results(&self) -> Vec<ThemeScore> {
        compute_results(self.catalog, &self.answers)
    }

    /// The value range of the results chart.
    pub fn chart_domain(&self) -> ChartDomain {
        self.catalog.chart_domain()
    }

    /// Switch to the results screen and return the freshly computed scores.
    pub fn show_results(&mut self) -> Vec<ThemeScore> {
        if self.mode == Mode::Collecting {
            tracing::info!(answered = self.answered(), "showing results");
            self.mode = Mode::Reviewing;
        }
        self.results()
    }

    /// Go back to the answer form.
    ///
    /// Answers are kept or cleared according to the session's [`RedoPolicy`].
    /// Does nothing while answers are still being collected.
    pub fn redo(&mut self) {
        if self.mode != Mode::Reviewing {
            return;
        }
        if self.redo_policy == RedoPolicy::Clear {
            self.answers.clear();
            self.selections.clear();
        }
        tracing::info!(policy = ?self.redo_policy, "retaking quiz");
        self.mode = Mode::Collecting;
    }

    /// Number of catalog questions that have an answer.
    pub fn answered(&self) -> usize {
        self.catalog
            .keys()
            .filter(|key| self.answers.contains(key))
            .count()
    }

    pub fn total_questions(&self) -> usize {
        self.catalog.question_count()
    }

    /// Check if every catalog question has an answer.
    pub fn is_complete(&self) -> bool {
        self.answered() == self.total_questions()
    }

    /// Hand the session to a backend until the user leaves the quiz.
    pub fn run<B: QuizBackend>(&mut self, backend: B) -> Result<(), QuizError> {
        backend.run(self).map_err(|err| {
            let err: anyhow::Error = err.into();
            match err.downcast::<QuizError>() {
                Ok(err) => err,
                Err(err) if wraps_cancellation(&err) => QuizError::Cancelled,
                Err(err) => QuizError::Backend(err),
            }
        })
    }
}

/// Backends may wrap the cancellation in their own error type.
fn wraps_cancellation(err: &anyhow::Error) -> bool {
    err.chain()
        .any(|e| matches!(e.downcast_ref::<QuizError>(), Some(QuizError::Cancelled)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Choice, Question, Theme};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Theme::new("water", "Water").with_question(Question::new(
                "Glasses per day?",
                vec![
                    Choice::new("8+", 3),
                    Choice::new("5-7", 2),
                    Choice::new("<5", 1),
                ],
            )),
            Theme::new("sugar", "Sugar")
                .with_question(Question::new(
                    "Sweets?",
                    vec![Choice::new("Rarely", 3), Choice::new("Often", 1)],
                ))
                .with_question(Question::new(
                    "Soda?",
                    vec![Choice::new("Never", 3), Choice::new("Daily", 0)],
                )),
        ])
        .unwrap()
    }

    #[test]
    fn starts_collecting_with_no_answers() {
        let catalog = catalog();
        let session = Session::new(&catalog);
        assert_eq!(session.mode(), Mode::Collecting);
        assert!(session.answers().is_empty());
        assert_eq!(session.answered(), 0);
        assert_eq!(session.total_questions(), 3);
    }

    #[test]
    fn select_records_catalog_weight() {
        let catalog = catalog();
        let mut session = Session::new(&catalog);

        assert_eq!(session.select("water", 0, 1).unwrap(), Weight::new(2));
        assert_eq!(
            session.answers().get(&AnswerKey::new("water", 0)),
            Some(Weight::new(2))
        );
        assert_eq!(session.selected_choice("water", 0), Some(1));
    }

    #[test]
    fn select_unknown_choice_fails() {
        let catalog = catalog();
        let mut session = Session::new(&catalog);

        assert!(matches!(
            session.select("water", 0, 3),
            Err(QuizError::UnknownChoice { .. })
        ));
        assert!(matches!(
            session.select("coffee", 0, 0),
            Err(QuizError::UnknownChoice { .. })
        ));
        assert!(session.answers().is_empty());
    }

    #[test]
    fn record_answer_parses_raw_values() {
        let catalog = catalog();
        let mut session = Session::new(&catalog);

        session.record_answer("sugar", 1, "3").unwrap();
        assert_eq!(session.selected_choice("sugar", 1), Some(0));

        let err = session.record_answer("sugar", 1, "lots").unwrap_err();
        assert!(matches!(err, QuizError::Answer(_)));
        assert_eq!(
            session.answers().get(&AnswerKey::new("sugar", 1)),
            Some(Weight::new(3))
        );
    }

    #[test]
    fn selected_choice_tells_apart_equal_weights() {
        let catalog = Catalog::new(vec![Theme::new("t", "T").with_question(Question::new(
            "Breakfast?",
            vec![
                Choice::new("Oui", 1),
                Choice::new("Parfois", 1),
                Choice::new("Non", 0),
            ],
        ))])
        .unwrap();
        let mut session = Session::new(&catalog);

        session.select("t", 0, 1).unwrap();
        assert_eq!(session.selected_choice("t", 0), Some(1));

        session.show_results();
        session.redo();
        assert_eq!(session.selected_choice("t", 0), Some(1));

        // A raw value forgets the picked choice.
        session.record_answer("t", 0, "1").unwrap();
        assert_eq!(session.selected_choice("t", 0), Some(0));
    }

    #[test]
    fn clear_answer_leaves_question_unanswered() {
        let catalog = catalog();
        let mut session = Session::new(&catalog);
        session.select("water", 0, 1).unwrap();

        assert_eq!(session.clear_answer("water", 0), Some(Weight::new(2)));
        assert_eq!(session.selected_choice("water", 0), None);
        assert_eq!(session.answered(), 0);
        assert_eq!(session.clear_answer("water", 0), None);
    }

    #[test]
    fn selected_choice_for_foreign_weight_is_none() {
        let catalog = catalog();
        let mut session = Session::new(&catalog);
        session.record_answer("water", 0, "7").unwrap();
        assert_eq!(session.selected_choice("water", 0), None);
    }

    #[test]
    fn show_results_then_redo_keeps_answers() {
        let catalog = catalog();
        let mut session = Session::new(&catalog);
        session.select("water", 0, 0).unwrap();
        session.select("sugar", 1, 1).unwrap();
        let before = session.answers().clone();

        let results = session.show_results();
        assert_eq!(session.mode(), Mode::Reviewing);
        assert_eq!(
            results,
            vec![ThemeScore::new("Water", 3), ThemeScore::new("Sugar", 0)]
        );

        session.redo();
        assert_eq!(session.mode(), Mode::Collecting);
        assert_eq!(session.answers(), &before);
        assert_eq!(session.selected_choice("water", 0), Some(0));
    }

    #[test]
    fn redo_with_clear_policy_forgets_answers() {
        let catalog = catalog();
        let mut session = Session::new(&catalog).with_redo_policy(RedoPolicy::Clear);
        session.select("water", 0, 0).unwrap();

        session.show_results();
        session.redo();
        assert_eq!(session.mode(), Mode::Collecting);
        assert!(session.answers().is_empty());
    }

    #[test]
    fn redo_while_collecting_is_a_no_op() {
        let catalog = catalog();
        let mut session = Session::new(&catalog).with_redo_policy(RedoPolicy::Clear);
        session.select("water", 0, 0).unwrap();

        session.redo();
        assert_eq!(session.mode(), Mode::Collecting);
        assert_eq!(session.answered(), 1);
    }

    #[test]
    fn completeness() {
        let catalog = catalog();
        let mut session = Session::new(&catalog);
        session.select("water", 0, 0).unwrap();
        session.select("sugar", 0, 0).unwrap();
        assert!(!session.is_complete());
        session.select("sugar", 1, 0).unwrap();
        assert!(session.is_complete());
    }

    #[test]
    fn chart_domain_from_catalog() {
        let catalog = catalog();
        let session = Session::new(&catalog);
        assert_eq!(session.chart_domain(), ChartDomain::new(0, 6));
    }

    struct FailingBackend;

    impl QuizBackend for FailingBackend {
        type Error = QuizError;

        fn run(&self, _session: &mut Session<'_>) -> Result<(), Self::Error> {
            Err(QuizError::Cancelled)
        }
    }

    #[derive(Debug, thiserror::Error)]
    #[error("wrapped: {0}")]
    struct WrappingError(#[from] QuizError);

    struct WrappingBackend;

    impl QuizBackend for WrappingBackend {
        type Error = WrappingError;

        fn run(&self, _session: &mut Session<'_>) -> Result<(), Self::Error> {
            Err(QuizError::Cancelled.into())
        }
    }

    #[test]
    fn run_finds_wrapped_cancellation() {
        let catalog = catalog();
        let mut session = Session::new(&catalog);
        let err = session.run(WrappingBackend).unwrap_err();
        assert!(err.is_cancelled());
    }

    #[test]
    fn run_preserves_quiz_errors() {
        let catalog = catalog();
        let mut session = Session::new(&catalog);
        let err = session.run(FailingBackend).unwrap_err();
        assert!(err.is_cancelled());
    }
}
