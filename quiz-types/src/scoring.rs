use crate::{AnswerStore, Catalog, Weight};

/// The total score of one theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeScore {
    /// The theme's display title.
    pub theme: String,

    /// Sum of the selected weights of the theme's questions.
    pub score: u32,
}

impl ThemeScore {
    pub fn new(theme: impl Into<String>, score: u32) -> Self {
        Self {
            theme: theme.into(),
            score,
        }
    }
}

/// Sum the selected weights of every theme.
///
/// Returns one entry per theme in catalog order. Unanswered questions count as
/// zero, and answers whose key matches no catalog question are never read. A
/// theme total saturates at `u32::MAX`.
pub fn compute_results(catalog: &Catalog, answers: &AnswerStore) -> Vec<ThemeScore> {
    catalog
        .themes()
        .iter()
        .map(|theme| {
            let score: Weight = (0..theme.questions().len())
                .map(|idx| answers.weight_or_zero(&theme.key(idx)))
                .sum();
            ThemeScore::new(theme.title(), score.value())
        })
        .collect()
}

/// The value range plotted on every axis of the results chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartDomain {
    pub min: u32,
    pub max: u32,
}

impl ChartDomain {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Position of `score` within the domain, clamped to `0.0..=1.0`.
    ///
    /// A domain with no extent maps everything to `0.0`.
    pub fn fraction(&self, score: u32) -> f64 {
        if self.max <= self.min {
            return 0.0;
        }
        let span = f64::from(self.max - self.min);
        (f64::from(score.saturating_sub(self.min)) / span).clamp(0.0, 1.0)
    }

    /// Get the number of whole steps between `min` and `max`.
    pub fn steps(&self) -> u32 {
        self.max.saturating_sub(self.min)
    }
}
