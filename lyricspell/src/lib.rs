/*! Interactive spell checking with file-backed user dictionaries.

Validates words against plain-text word lists, ranks correction candidates
by edit distance nudged with typo-shape heuristics, and drives re-checking
incrementally from a stream of text edits using a debounced background
worker. Dictionaries loaded from the same file are shared process-wide
through a [`DictionaryStore`], so adding a word in one editor session is
immediately visible in every other session using that dictionary.

[`DictionaryStore`]: crate::dictionary::DictionaryStore

# Usage example

```
use std::sync::Arc;

use lyricspell::dictionary::{Dictionary, DictionaryStore};
use lyricspell::speller::Speller;

# fn main() -> Result<(), Box<dyn std::error::Error>> {
# let dir = tempfile::tempdir()?;
# let path = dir.path().join("en.txt");
# std::fs::write(&path, "hello\nworld\n")?;
let store = Arc::new(DictionaryStore::new());
let speller = Speller::new(store, Some(Dictionary::new("English", &path)))?;

assert!(speller.check_word("hello"));
assert!(!speller.check_word("wrld"));

let suggestions = speller.suggest("wrld");
assert_eq!(suggestions[0].value(), "world");
# Ok(())
# }
```

For keystroke-driven validation, wrap a shared [`Speller`] in an
[`IncrementalChecker`] and feed it text-change events.

[`Speller`]: crate::speller::Speller
[`IncrementalChecker`]: crate::checker::IncrementalChecker
*/

#![warn(missing_docs)]

pub mod checker;
pub mod dictionary;
pub mod distance;
pub mod speller;
pub mod tokenizer;
