use std::collections::HashSet;

use crate::{AnswerKey, ChartDomain, Weight};

/// Error type for catalog construction.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CatalogError {
    #[error("Theme id must not be empty (theme '{title}')")]
    EmptyThemeId { title: String },

    #[error("Duplicate theme id: {0}")]
    DuplicateThemeId(String),

    #[error("Question {question_index} of theme '{theme_id}' has no choices")]
    NoChoices {
        theme_id: String,
        question_index: usize,
    },
}

/// One selectable answer of a question.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    /// The label shown next to the radio control.
    label: String,

    /// The score contribution when this choice is selected.
    weight: Weight,
}

impl Choice {
    pub fn new(label: impl Into<String>, weight: u32) -> Self {
        Self {
            label: label.into(),
            weight: Weight::new(weight),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }
}

/// A single-select question.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// The prompt text shown to the user.
    prompt: String,

    /// The available choices, in display order.
    choices: Vec<Choice>,
}

impl Question {
    /// Create a new question.
    pub fn new(prompt: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self {
            prompt: prompt.into(),
            choices,
        }
    }

    /// Get the prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Get the choices.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// The largest weight any choice of this question contributes.
    pub fn max_weight(&self) -> Weight {
        self.choices
            .iter()
            .map(Choice::weight)
            .max()
            .unwrap_or(Weight::ZERO)
    }

    /// Index of the first choice carrying `weight`.
    pub fn choice_with_weight(&self, weight: Weight) -> Option<usize> {
        self.choices.iter().position(|c| c.weight == weight)
    }
}

/// A named group of questions that is scored on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    id: String,
    title: String,
    questions: Vec<Question>,
}

impl Theme {
    /// Create a theme without questions.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            questions: Vec::new(),
        }
    }

    /// Append a question.
    pub fn with_question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// The answer key of the question at `question_index`.
    pub fn key(&self, question_index: usize) -> AnswerKey {
        AnswerKey::new(self.id.as_str(), question_index)
    }

    /// Sum of the largest weight of every question: the best attainable score.
    pub fn max_score(&self) -> u32 {
        let total: Weight = self.questions.iter().map(Question::max_weight).sum();
        total.value()
    }
}

/// The ordered, immutable set of themes a questionnaire presents.
///
/// Construction checks the catalog once. Afterwards it is only ever borrowed.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    themes: Vec<Theme>,
}

impl Catalog {
    /// Create a catalog, checking that theme ids are unique and non-empty and that
    /// every question has at least one choice.
    pub fn new(themes: Vec<Theme>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for theme in &themes {
            if theme.id.is_empty() {
                return Err(CatalogError::EmptyThemeId {
                    title: theme.title.clone(),
                });
            }
            if !seen.insert(theme.id.as_str()) {
                return Err(CatalogError::DuplicateThemeId(theme.id.clone()));
            }
            if let Some(question_index) = theme.questions.iter().position(|q| q.choices.is_empty())
            {
                return Err(CatalogError::NoChoices {
                    theme_id: theme.id.clone(),
                    question_index,
                });
            }
        }
        Ok(Self { themes })
    }

    /// Get the themes in display order.
    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    /// Look up a theme by id.
    pub fn theme(&self, id: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.id == id)
    }

    /// Look up the question a key refers to.
    pub fn question(&self, key: &AnswerKey) -> Option<&Question> {
        self.theme(key.theme_id())?
            .questions
            .get(key.question_index())
    }

    /// Look up a choice of the question a key refers to.
    pub fn choice(&self, key: &AnswerKey, choice_index: usize) -> Option<&Choice> {
        self.question(key)?.choices.get(choice_index)
    }

    /// Every answer key of the catalog, theme by theme, in question order.
    pub fn keys(&self) -> impl Iterator<Item = AnswerKey> + '_ {
        self.themes
            .iter()
            .flat_map(|t| (0..t.questions.len()).map(move |idx| t.key(idx)))
    }

    /// Total number of questions across all themes.
    pub fn question_count(&self) -> usize {
        self.themes.iter().map(|t| t.questions.len()).sum()
    }

    /// The value range the results chart must cover: zero up to the best score
    /// of the highest-scoring theme.
    pub fn chart_domain(&self) -> ChartDomain {
        let max = self.themes.iter().map(Theme::max_score).max().unwrap_or(0);
        ChartDomain::new(0, max)
    }

    /// Check if the catalog has no themes.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Get the number of themes.
    pub fn len(&self) -> usize {
        self.themes.len()
    }
}
