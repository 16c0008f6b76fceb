//! Integration tests for quiz, run against the authored nutrition catalog.

use quiz::{
    AnswerKey, Mode, QuizError, RedoPolicy, ScriptedBackend, ScriptedBackendError, Session, Step,
    ThemeScore, Weight, compute_results,
};
use quiz_catalogs::nutrition;

#[test]
fn test_partial_answers_score_per_theme() {
    let mut session = Session::new(nutrition());
    session
        .run(ScriptedBackend::new().with_steps([
            // "Fruits frais"
            Step::select("nutrition", 0, 0),
            // "Tous les jours"
            Step::select("nutrition", 1, 0),
            // "8 verres ou plus"
            Step::select("hydratation", 0, 0),
            Step::ShowResults,
        ]))
        .unwrap();

    assert_eq!(session.mode(), Mode::Reviewing);
    assert_eq!(
        session.results(),
        vec![
            ThemeScore::new("Nutrition", 6),
            ThemeScore::new("Habitudes alimentaires", 0),
            ThemeScore::new("Hydratation", 3),
        ]
    );
}

#[test]
fn test_raw_values_score_like_selections() {
    let mut session = Session::new(nutrition());
    session
        .run(ScriptedBackend::new().with_steps([
            Step::raw("nutrition", 0, "3"),
            Step::raw("nutrition", 1, "3"),
            Step::raw("hydratation", 0, "3"),
        ]))
        .unwrap();

    let scores: Vec<u32> = session.results().iter().map(|r| r.score).collect();
    assert_eq!(scores, vec![6, 0, 3]);
}

#[test]
fn test_no_answers_scores_zero_everywhere() {
    let mut session = Session::new(nutrition());
    session
        .run(ScriptedBackend::new().with_step(Step::ShowResults))
        .unwrap();

    let results = session.results();
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r.score == 0));
}

#[test]
fn test_best_choices_reach_the_chart_maximum() {
    let catalog = nutrition();
    let steps = catalog.themes().iter().flat_map(|theme| {
        theme.questions().iter().enumerate().map(|(idx, question)| {
            let best = question
                .choices()
                .iter()
                .enumerate()
                .max_by_key(|(_, c)| c.weight())
                .map(|(choice_idx, _)| choice_idx)
                .unwrap();
            Step::select(theme.id(), idx, best)
        })
    });

    let mut session = Session::new(catalog);
    session
        .run(ScriptedBackend::new().with_steps(steps))
        .unwrap();

    assert!(session.is_complete());
    let domain = session.chart_domain();
    for result in session.show_results() {
        assert_eq!(result.score, 6);
        assert_eq!(domain.fraction(result.score), 1.0);
    }
}

#[test]
fn test_redo_keeps_previous_answers() {
    let mut session = Session::new(nutrition());
    session
        .run(ScriptedBackend::new().with_steps([
            Step::select("habitudes", 0, 1),
            Step::ShowResults,
            Step::Redo,
        ]))
        .unwrap();

    assert_eq!(session.mode(), Mode::Collecting);
    assert_eq!(session.selected_choice("habitudes", 0), Some(1));
    assert_eq!(
        session.answers().get(&AnswerKey::new("habitudes", 0)),
        Some(Weight::new(2))
    );
}

#[test]
fn test_redo_with_clear_policy() {
    let mut session = Session::new(nutrition()).with_redo_policy(RedoPolicy::Clear);
    session
        .run(ScriptedBackend::new().with_steps([
            Step::select("habitudes", 0, 1),
            Step::ShowResults,
            Step::Redo,
        ]))
        .unwrap();

    assert!(session.answers().is_empty());
    assert_eq!(session.selected_choice("habitudes", 0), None);
}

#[test]
fn test_changing_an_answer_replaces_it() {
    let mut session = Session::new(nutrition());
    session
        .run(ScriptedBackend::new().with_steps([
            // "Viennoiseries"
            Step::select("nutrition", 0, 1),
            // "Céréales complètes"
            Step::select("nutrition", 0, 2),
        ]))
        .unwrap();

    assert_eq!(session.answers().len(), 1);
    assert_eq!(session.results()[0], ThemeScore::new("Nutrition", 2));
}

#[test]
fn test_unknown_choice_is_reported() {
    let mut session = Session::new(nutrition());
    let err = session
        .run(ScriptedBackend::new().with_step(Step::select("sommeil", 0, 0)))
        .unwrap_err();

    let inner = match err {
        QuizError::Backend(inner) => inner,
        other => panic!("expected backend error, got {other:?}"),
    };
    let ScriptedBackendError::StepFailed { index, source, .. } =
        inner.downcast::<ScriptedBackendError>().unwrap();
    assert_eq!(index, 0);
    assert!(matches!(source, QuizError::UnknownChoice { .. }));
}

#[test]
fn test_misspelled_keys_are_silently_ignored() {
    let mut session = Session::new(nutrition());
    session.record_answer("nutrtion", 0, "3").unwrap();
    session.record_answer("nutrition", 5, "3").unwrap();

    assert_eq!(session.answers().len(), 2);
    assert_eq!(session.answered(), 0);
    assert!(
        compute_results(session.catalog(), session.answers())
            .iter()
            .all(|r| r.score == 0)
    );
}

#[test]
fn test_huge_raw_weights_do_not_overflow_the_score() {
    let mut session = Session::new(nutrition());
    session.record_answer("nutrition", 0, "4294967295").unwrap();
    session.record_answer("nutrition", 1, "4294967295").unwrap();
    session.record_answer("hydratation", 0, "1").unwrap();

    let results = compute_results(session.catalog(), session.answers());
    assert_eq!(
        results,
        vec![
            ThemeScore::new("Nutrition", u32::MAX),
            ThemeScore::new("Habitudes alimentaires", 0),
            ThemeScore::new("Hydratation", 1),
        ]
    );
    // The chart clamps the saturated score to its outer ring.
    assert_eq!(session.chart_domain().fraction(results[0].score), 1.0);
}
