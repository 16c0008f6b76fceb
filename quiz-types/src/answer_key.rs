use std::fmt;

/// Identifies one question of a catalog: the owning theme plus the question's
/// position within that theme.
///
/// Keys are positional. Reordering the questions of a theme changes which
/// question a key refers to.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnswerKey {
    theme_id: String,
    question_index: usize,
}

impl AnswerKey {
    /// Create a key for question `question_index` of theme `theme_id`.
    pub fn new(theme_id: impl Into<String>, question_index: usize) -> Self {
        Self {
            theme_id: theme_id.into(),
            question_index,
        }
    }

    /// The id of the theme this key belongs to.
    pub fn theme_id(&self) -> &str {
        &self.theme_id
    }

    /// The position of the question within its theme.
    pub fn question_index(&self) -> usize {
        self.question_index
    }
}

impl fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.theme_id, self.question_index)
    }
}

impl<S: Into<String>> From<(S, usize)> for AnswerKey {
    fn from((theme_id, question_index): (S, usize)) -> Self {
        Self::new(theme_id, question_index)
    }
}
