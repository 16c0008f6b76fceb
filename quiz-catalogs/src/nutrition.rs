use std::sync::LazyLock;

use quiz::{Catalog, Choice, Question, Theme};

/// Title shown above the answer form.
pub const TITLE: &str = "Questionnaire nutrition";

/// Label of the button that switches to the results chart.
pub const RESULTS_LABEL: &str = "Voir les résultats";

/// Label of the button that goes back to the answer form.
pub const REDO_LABEL: &str = "Refaire le questionnaire";

/// Name of the plotted series.
pub const SERIES_LABEL: &str = "Score";

static NUTRITION: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::new(vec![
        Theme::new("nutrition", "Nutrition")
            .with_question(Question::new(
                "Quel type de petit-déjeuner préférez-vous ?",
                vec![
                    Choice::new("Fruits frais", 3),
                    Choice::new("Viennoiseries", 1),
                    Choice::new("Céréales complètes", 2),
                ],
            ))
            .with_question(Question::new(
                "À quelle fréquence mangez-vous des légumes ?",
                vec![
                    Choice::new("Tous les jours", 3),
                    Choice::new("Quelques fois par semaine", 2),
                    Choice::new("Rarement", 1),
                ],
            )),
        Theme::new("habitudes", "Habitudes alimentaires")
            .with_question(Question::new(
                "Comment évaluez-vous votre consommation de sucre ?",
                vec![
                    Choice::new("Très faible", 3),
                    Choice::new("Modérée", 2),
                    Choice::new("Élevée", 1),
                ],
            ))
            .with_question(Question::new(
                "Consommez-vous souvent des plats préparés ?",
                vec![
                    Choice::new("Très rarement", 3),
                    Choice::new("Parfois", 2),
                    Choice::new("Souvent", 1),
                ],
            )),
        Theme::new("hydratation", "Hydratation")
            .with_question(Question::new(
                "Combien de verres d'eau buvez-vous par jour ?",
                vec![
                    Choice::new("8 verres ou plus", 3),
                    Choice::new("5 à 7 verres", 2),
                    Choice::new("Moins de 5 verres", 1),
                ],
            ))
            .with_question(Question::new(
                "Quelle est votre consommation de boissons sucrées ?",
                vec![
                    Choice::new("Très faible", 3),
                    Choice::new("Modérée", 2),
                    Choice::new("Élevée", 1),
                ],
            )),
    ])
    .expect("nutrition catalog has unique ids and non-empty questions")
});

/// The nutrition questionnaire: three themes of two questions each.
pub fn nutrition() -> &'static Catalog {
    &NUTRITION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn themes_in_order() {
        let ids: Vec<_> = nutrition().themes().iter().map(|t| t.id()).collect();
        assert_eq!(ids, vec!["nutrition", "habitudes", "hydratation"]);
    }

    #[test]
    fn every_theme_tops_out_at_six() {
        for theme in nutrition().themes() {
            assert_eq!(theme.questions().len(), 2);
            assert_eq!(theme.max_score(), 6, "theme {}", theme.id());
        }
        assert_eq!(nutrition().chart_domain().max, 6);
    }

    #[test]
    fn weights_are_distinct_within_each_question() {
        for theme in nutrition().themes() {
            for question in theme.questions() {
                let mut weights: Vec<_> = question.choices().iter().map(|c| c.weight()).collect();
                weights.sort();
                weights.dedup();
                assert_eq!(weights.len(), question.choices().len());
            }
        }
    }
}
