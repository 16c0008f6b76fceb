use std::collections::HashMap;

use crate::{AnswerKey, Weight};

/// Error type for recording answers from raw input.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("Weight '{raw}' is not an integer")]
    InvalidWeight {
        raw: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Weight '{raw}' is negative ({value})")]
    NegativeWeight { raw: String, value: i64 },

    #[error("Weight '{raw}' is out of range")]
    WeightOutOfRange { raw: String },
}

/// Answers collected so far, one weight per answered question.
///
/// Recording an answer for a key that already has one replaces it, so every
/// question holds at most one selection. Unanswered questions have no entry.
///
/// Keys are not checked against any catalog. A key that matches no question is
/// stored like any other and simply never contributes to a score.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerStore {
    values: HashMap<AnswerKey, Weight>,
}

impl AnswerStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Record the selected weight for a question, returning the weight it replaced.
    pub fn record_answer(&mut self, key: AnswerKey, weight: Weight) -> Option<Weight> {
        let previous = self.values.insert(key.clone(), weight);
        tracing::debug!(%key, %weight, ?previous, "recorded answer");
        previous
    }

    /// Parse a raw input value and record it.
    ///
    /// The store is left untouched when `raw` is not a non-negative integer.
    pub fn record_raw(
        &mut self,
        key: AnswerKey,
        raw: &str,
    ) -> Result<Option<Weight>, AnswerError> {
        match raw.parse::<Weight>() {
            Ok(weight) => Ok(self.record_answer(key, weight)),
            Err(err) => {
                tracing::warn!(%key, raw, error = %err, "rejected answer");
                Err(err)
            }
        }
    }

    /// Get the recorded weight for a question.
    pub fn get(&self, key: &AnswerKey) -> Option<Weight> {
        self.values.get(key).copied()
    }

    /// Get the recorded weight for a question, or zero if unanswered.
    pub fn weight_or_zero(&self, key: &AnswerKey) -> Weight {
        self.get(key).unwrap_or(Weight::ZERO)
    }

    /// Check if a question has been answered.
    pub fn contains(&self, key: &AnswerKey) -> bool {
        self.values.contains_key(key)
    }

    /// Remove the answer for a question.
    pub fn remove(&mut self, key: &AnswerKey) -> Option<Weight> {
        self.values.remove(key)
    }

    /// Forget every answer.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Get an iterator over all key-weight pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&AnswerKey, Weight)> {
        self.values.iter().map(|(key, weight)| (key, *weight))
    }

    /// Get the number of answered questions.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if nothing has been answered.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
