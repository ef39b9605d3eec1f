//! Dictionary-backed word validation and correction suggestions.

use std::sync::Arc;

use hashbrown::HashSet;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use self::ranker::TopSuggestions;
use crate::dictionary::{Dictionary, DictionaryError, DictionaryStore, WordSet};
use crate::tokenizer::{sanitize, Tokenize};

pub mod suggestion;

mod ranker;

pub use self::suggestion::Suggestion;

/// Configuration for suggestion generation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpellerConfig {
    /// how many suggestions to return at most
    pub n_best: usize,
    /// admission threshold: candidates scoring at or above this are dropped
    pub max_score: i64,
}

impl SpellerConfig {
    /// default config: at most 6 suggestions, scores below 5
    pub const fn default() -> SpellerConfig {
        SpellerConfig {
            n_best: 6,
            max_score: 5,
        }
    }
}

#[derive(Debug)]
struct ActiveDictionary {
    dictionary: Dictionary,
    words: Arc<WordSet>,
}

/// The spell-checking engine bound to one active dictionary.
///
/// A speller is created per editing session. The word set behind the active
/// dictionary is shared process-wide through the [`DictionaryStore`]; the
/// ignore list is session-local and never persisted. All methods take
/// `&self`, and the speller is `Send + Sync`, so a background checker
/// thread can query it directly.
#[derive(Debug)]
pub struct Speller {
    store: Arc<DictionaryStore>,
    active: RwLock<Option<ActiveDictionary>>,
    ignore_words: RwLock<HashSet<SmolStr>>,
}

impl Speller {
    /// Creates a speller bound to `dictionary`, loading it through `store`.
    ///
    /// With `None` the speller is permissive: every word validates as
    /// correct until [`set_dictionary`](Speller::set_dictionary) binds one.
    pub fn new(
        store: Arc<DictionaryStore>,
        dictionary: Option<Dictionary>,
    ) -> Result<Speller, DictionaryError> {
        let speller = Speller {
            store,
            active: RwLock::new(None),
            ignore_words: RwLock::new(HashSet::new()),
        };

        if let Some(dictionary) = dictionary {
            speller.set_dictionary(dictionary)?;
        }

        Ok(speller)
    }

    /// Rebinds the speller to `dictionary`.
    ///
    /// The new dictionary is loaded before the binding changes, so a read
    /// failure leaves the previous binding in effect.
    pub fn set_dictionary(&self, dictionary: Dictionary) -> Result<(), DictionaryError> {
        let words = self.store.load(dictionary.path())?;
        *self.active.write() = Some(ActiveDictionary { dictionary, words });
        Ok(())
    }

    /// The currently bound dictionary, if any.
    pub fn dictionary(&self) -> Option<Dictionary> {
        self.active.read().as_ref().map(|a| a.dictionary.clone())
    }

    /// Checks one word against the active dictionary and the ignore list.
    ///
    /// Words that sanitize to a single character or nothing always pass:
    /// there is too little signal to judge them, and flagging them would
    /// turn punctuation-only tokens into false positives.
    pub fn check_word(&self, word: &str) -> bool {
        let word = sanitize(word);
        if word.chars().count() <= 1 {
            return true;
        }

        match self.active.read().as_ref() {
            Some(active) => {
                active.words.contains(&word) || self.ignore_words.read().contains(&word)
            }
            // No dictionary bound: checking is disabled.
            None => true,
        }
    }

    /// Adds a word to this speller's session-local ignore list.
    ///
    /// Other spellers, the shared word set and the backing file are not
    /// affected.
    pub fn add_ignore_word(&self, word: &str) {
        self.ignore_words.write().insert(sanitize(word));
    }

    /// Collects the distinct misspelt tokens in `text`.
    ///
    /// Tokens are returned raw, exactly as they appear in the text, so the
    /// caller can match them back against the original input.
    pub fn misspelt_words(&self, text: &str) -> HashSet<SmolStr> {
        let mut misspelt = HashSet::new();
        if text.trim().is_empty() {
            return misspelt;
        }

        for token in text.spell_tokens() {
            if !self.check_word(token) {
                misspelt.insert(SmolStr::new(token));
            }
        }

        misspelt
    }

    /// Checks a block of text, token by token.
    ///
    /// With `check_last_word` false the final token is not judged at all,
    /// since the user may still be in the middle of typing it. Blank text
    /// is always fine. The first failing token decides.
    pub fn check_text(&self, text: &str, check_last_word: bool) -> bool {
        if text.trim().is_empty() {
            return true;
        }

        let mut tokens = text.spell_tokens().peekable();
        while let Some(token) = tokens.next() {
            if tokens.peek().is_none() && !check_last_word {
                break;
            }
            if !self.check_word(token) {
                return false;
            }
        }

        true
    }

    /// Ranks correction suggestions for a misspelt word.
    #[inline]
    pub fn suggest(&self, misspelling: &str) -> Vec<Suggestion> {
        self.suggest_with_config(misspelling, &SpellerConfig::default())
    }

    /// Ranks correction suggestions with an explicit config.
    ///
    /// Every word in the active dictionary is scored against the
    /// misspelling; candidates under the admission threshold compete for
    /// the `n_best` slots. Output is ordered by score, then value, so
    /// repeated calls over the same dictionary yield identical lists.
    pub fn suggest_with_config(&self, misspelling: &str, config: &SpellerConfig) -> Vec<Suggestion> {
        let misspelling = sanitize(misspelling);
        if misspelling.is_empty() {
            return vec![];
        }

        let active = self.active.read();
        let active = match active.as_ref() {
            Some(active) => active,
            None => return vec![],
        };

        log::trace!("generating suggestions for {:?}", misspelling);

        let mut best = TopSuggestions::new(config.n_best);
        for word in active.words.words().iter() {
            let score = ranker::score(word, &misspelling);
            if score < config.max_score {
                best.push(Suggestion::new(word.clone(), score));
            }
        }

        best.into_sorted_vec()
    }

    /// Suggestion word-forms only, for consumers that ignore scores.
    pub fn suggest_words(&self, misspelling: &str) -> Vec<SmolStr> {
        self.suggest(misspelling)
            .into_iter()
            .map(|suggestion| suggestion.value)
            .collect()
    }

    /// Adds a word to the active dictionary, in memory and on disk.
    ///
    /// Idempotent: a word already present leaves both the shared set and
    /// the file untouched, so repeated additions never duplicate lines.
    /// The in-memory insertion happens first and survives an append
    /// failure; the error still propagates so the caller can report the
    /// lost durability. A no-op when no dictionary is bound.
    pub fn add_word(&self, word: &str) -> Result<(), DictionaryError> {
        let word = sanitize(word);
        if word.is_empty() {
            return Ok(());
        }

        let active = self.active.read();
        let active = match active.as_ref() {
            Some(active) => active,
            None => return Ok(()),
        };

        let path = active.dictionary.path();
        let added = active
            .words
            .insert_with(word.clone(), || self.store.append_word(path, &word))?;

        if added {
            log::debug!("added {:?} to dictionary {:?}", word, path);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_dictionary(words: &[&str]) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, words.join("\n")).unwrap();
        (dir, path)
    }

    fn speller_with(words: &[&str]) -> (tempfile::TempDir, Arc<DictionaryStore>, Speller) {
        let (dir, path) = write_dictionary(words);
        let store = Arc::new(DictionaryStore::new());
        let dictionary = Dictionary::new("Test", path);
        let speller = Speller::new(Arc::clone(&store), Some(dictionary)).unwrap();
        (dir, store, speller)
    }

    #[test]
    fn check_word_compares_sanitized_forms() {
        let (_dir, _store, speller) = speller_with(&["hello", "world"]);

        assert!(speller.check_word("hello"));
        assert!(speller.check_word("Hello"));
        assert!(speller.check_word(" hello! "));
        assert!(!speller.check_word("wrld"));
    }

    #[test]
    fn short_tokens_always_pass() {
        let (_dir, _store, speller) = speller_with(&["hello"]);

        assert!(speller.check_word("a"));
        assert!(speller.check_word("!"));
        assert!(speller.check_word(""));
    }

    #[test]
    fn no_dictionary_means_everything_passes() {
        let store = Arc::new(DictionaryStore::new());
        let speller = Speller::new(store, None).unwrap();

        assert!(speller.check_word("zzyzx"));
        assert!(speller.check_text("complete gibberish qwxz", true));
        assert!(speller.misspelt_words("qwxz jkltp").is_empty());
        assert!(speller.suggest("qwxz").is_empty());
        speller.add_word("qwxz").unwrap();
    }

    #[test]
    fn ignore_words_are_session_local() {
        let (_dir, path) = write_dictionary(&["hello"]);
        let store = Arc::new(DictionaryStore::new());
        let a = Speller::new(Arc::clone(&store), Some(Dictionary::new("A", &path))).unwrap();
        let b = Speller::new(Arc::clone(&store), Some(Dictionary::new("B", &path))).unwrap();

        a.add_ignore_word("wrld");
        assert!(a.check_word("wrld"));
        assert!(!b.check_word("wrld"));
    }

    #[test]
    fn added_words_are_visible_through_the_shared_set() {
        let (_dir, path) = write_dictionary(&["hello"]);
        let store = Arc::new(DictionaryStore::new());
        let a = Speller::new(Arc::clone(&store), Some(Dictionary::new("A", &path))).unwrap();
        let b = Speller::new(Arc::clone(&store), Some(Dictionary::new("B", &path))).unwrap();

        a.add_word("hallelujah").unwrap();
        assert!(b.check_word("hallelujah"));
    }

    #[test]
    fn add_word_is_idempotent_against_the_file() {
        let (_dir, _store, speller) = speller_with(&["hello"]);
        let path = speller.dictionary().unwrap().path().to_path_buf();

        speller.add_word("Grace!").unwrap();
        speller.add_word("grace").unwrap();
        speller.add_word("GRACE").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let count = contents.lines().filter(|line| *line == "grace").count();
        assert_eq!(count, 1);
        assert!(speller.check_word("grace"));
    }

    #[test]
    fn failed_set_dictionary_keeps_the_previous_binding() {
        let (_dir, _store, speller) = speller_with(&["hello"]);

        let err = speller.set_dictionary(Dictionary::new("Missing", "/no/such/dictionary.txt"));
        assert!(err.is_err());
        assert!(speller.check_word("hello"));
        assert_eq!(speller.dictionary().unwrap().name(), "Test");
    }

    #[test]
    fn check_text_can_skip_the_word_being_typed() {
        let (_dir, _store, speller) = speller_with(&["hello", "there"]);

        assert!(speller.check_text("hello there wrld", false));
        assert!(!speller.check_text("hello there wrld", true));
        assert!(!speller.check_text("hello wrld there", false));
    }

    #[test]
    fn blank_text_is_always_fine() {
        let (_dir, _store, speller) = speller_with(&["hello"]);

        assert!(speller.check_text("", true));
        assert!(speller.check_text("   \t\n", true));
        assert!(speller.misspelt_words("   ").is_empty());
    }

    #[test]
    fn misspelt_words_returns_distinct_raw_tokens() {
        let (_dir, _store, speller) = speller_with(&["quick", "brown", "fox"]);

        let misspelt = speller.misspelt_words("the quikc brown fox");
        assert_eq!(misspelt.len(), 2);
        assert!(misspelt.contains("the"));
        assert!(misspelt.contains("quikc"));

        let (_dir, _store, speller) = speller_with(&["the", "quick", "brown", "fox"]);
        let misspelt = speller.misspelt_words("the quikc brown fox quikc");
        assert_eq!(misspelt.len(), 1);
        assert!(misspelt.contains("quikc"));
    }

    #[test]
    fn suggestions_are_bounded_sorted_and_under_threshold() {
        let (_dir, _store, speller) = speller_with(&[
            "grace", "grade", "grape", "trace", "brace", "place", "space", "graze", "crane",
        ]);

        let suggestions = speller.suggest("grac");
        assert!(suggestions.len() <= 6);
        assert!(!suggestions.is_empty());
        for pair in suggestions.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        for suggestion in &suggestions {
            assert!(suggestion.score() < 5);
        }
    }

    #[test]
    fn transposition_typos_rank_first() {
        let (_dir, _store, speller) = speller_with(&["sight", "eight", "light", "might"]);

        let suggestions = speller.suggest("isght");
        assert_eq!(suggestions[0].value(), "sight");
        assert!(suggestions[0].score() < suggestions[1].score());
    }

    #[test]
    fn suggestions_are_deterministic() {
        let (_dir, _store, speller) =
            speller_with(&["carp", "card", "care", "cart", "carve", "scar", "char"]);

        let first = speller.suggest("carr");
        let second = speller.suggest("carr");
        assert_eq!(first, second);
    }

    #[test]
    fn n_best_config_caps_the_result() {
        let (_dir, _store, speller) =
            speller_with(&["carp", "card", "care", "cart", "carve", "scar", "char"]);

        let config = SpellerConfig {
            n_best: 2,
            max_score: 5,
        };
        assert_eq!(speller.suggest_with_config("carr", &config).len(), 2);
    }

    #[test]
    fn suggest_words_returns_forms_in_rank_order() {
        let (_dir, _store, speller) = speller_with(&["sight", "eight"]);

        let words = speller.suggest_words("isght");
        assert_eq!(words.first().map(|w| w.as_str()), Some("sight"));
    }
}
