//! Candidate scoring and bounded best-N selection.

use itertools::Itertools;

use super::suggestion::Suggestion;
use crate::distance::distance;

/// Scores `candidate` as a correction for `misspelling`; lower is better.
///
/// The base cost is the plain edit distance, nudged by two typo-shape
/// heuristics: a candidate of the same length is slightly preferred (the
/// typo was probably substitution-only), and an anagram of the misspelling
/// is strongly preferred (the typo was probably a transposition). Both
/// adjustments subtract from the original base cost independently.
pub(crate) fn score(candidate: &str, misspelling: &str) -> i64 {
    let base = distance(candidate, misspelling) as i64;
    let candidate_len = candidate.chars().count();
    let mut score = base;

    if candidate_len == misspelling.chars().count() {
        score -= 1;
    }
    if is_anagram(candidate, misspelling) {
        score -= candidate_len as i64;
    }

    score
}

fn is_anagram(a: &str, b: &str) -> bool {
    let a = a.chars().flat_map(char::to_lowercase).sorted();
    let b = b.chars().flat_map(char::to_lowercase).sorted();
    a.eq(b)
}

/// Keeps the best `cap` suggestions seen so far, sorted ascending.
///
/// Produces the same output as collecting every admitted candidate and
/// sorting, without ever holding more than `cap` of them.
pub(crate) struct TopSuggestions {
    cap: usize,
    entries: Vec<Suggestion>,
}

impl TopSuggestions {
    pub fn new(cap: usize) -> TopSuggestions {
        TopSuggestions {
            cap,
            entries: Vec::with_capacity(cap + 1),
        }
    }

    pub fn push(&mut self, suggestion: Suggestion) {
        if self.cap == 0 {
            return;
        }

        if self.entries.len() == self.cap {
            match self.entries.last() {
                Some(last) if *last <= suggestion => return,
                _ => {}
            }
        }

        let at = self
            .entries
            .binary_search(&suggestion)
            .unwrap_or_else(|insert_at| insert_at);
        self.entries.insert(at, suggestion);
        self.entries.truncate(self.cap);
    }

    pub fn into_sorted_vec(self) -> Vec<Suggestion> {
        self.entries
    }
}
