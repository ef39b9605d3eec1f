//! Dictionary handles and the shared word-set store.

pub mod error;
mod store;

pub use self::error::DictionaryError;
pub use self::store::{DictionaryStore, WordSet};

use std::path::{Path, PathBuf};

use smol_str::SmolStr;

/// A named handle to one dictionary file.
///
/// The file is UTF-8 text, one word per line, blank lines ignored. Handles
/// are cheap and immutable; two handles refer to the same backing
/// dictionary iff their paths are equal, regardless of display name.
#[derive(Clone, Debug)]
pub struct Dictionary {
    name: SmolStr,
    path: PathBuf,
}

impl Dictionary {
    /// Creates a handle from a display name and the backing file's path.
    pub fn new(name: impl Into<SmolStr>, path: impl Into<PathBuf>) -> Dictionary {
        Dictionary {
            name: name.into(),
            path: path.into(),
        }
    }

    /// The human-readable display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The backing file's path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PartialEq for Dictionary {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for Dictionary {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_by_path_only() {
        let a = Dictionary::new("English (GB)", "/dict/en.txt");
        let b = Dictionary::new("English", "/dict/en.txt");
        let c = Dictionary::new("English", "/dict/en-us.txt");

        assert_eq!(a, b);
        assert_ne!(b, c);
    }
}
