//! Suggestion for a spelling correction.
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::cmp::Ordering;

/// Suggestion for a spelling correction.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Suggestion {
    /// the suggested word-form
    pub value: SmolStr,
    /// ranking score of the word-form, lower is better
    pub score: i64,
}

impl Suggestion {
    /// creates a spelling correction suggestion
    pub fn new(value: SmolStr, score: i64) -> Suggestion {
        Suggestion { value, score }
    }

    /// gets the suggested word-form
    pub fn value(&self) -> &str {
        &self.value
    }

    /// gets the ranking score of the suggestion
    pub fn score(&self) -> i64 {
        self.score
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Suggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        // Score first; the value tie-break keeps ordering deterministic
        // regardless of word-set iteration order.
        self.score
            .cmp(&other.score)
            .then_with(|| self.value.cmp(&other.value))
    }
}

impl PartialEq for Suggestion {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.score == other.score
    }
}

impl Eq for Suggestion {}
