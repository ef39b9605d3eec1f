//! Process-wide cache of loaded word sets.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use hashbrown::{HashMap, HashSet};
use parking_lot::{Mutex, RwLock, RwLockReadGuard};
use smol_str::SmolStr;

use super::error::DictionaryError;
use crate::tokenizer::sanitize;

#[cfg(windows)]
const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
const LINE_SEPARATOR: &str = "\n";

/// The words loaded from one dictionary file.
///
/// One instance exists per distinct backing path for the lifetime of its
/// store; every speller bound to that path shares it. The set only ever
/// grows.
#[derive(Debug, Default)]
pub struct WordSet {
    words: RwLock<HashSet<SmolStr>>,
}

impl WordSet {
    /// Whether `word` (already sanitized) is present.
    pub fn contains(&self, word: &str) -> bool {
        self.words.read().contains(word)
    }

    /// Number of words in the set.
    pub fn len(&self) -> usize {
        self.words.read().len()
    }

    /// Whether the set holds no words at all.
    pub fn is_empty(&self) -> bool {
        self.words.read().is_empty()
    }

    /// Read access to the underlying set, for iteration.
    pub fn words(&self) -> RwLockReadGuard<'_, HashSet<SmolStr>> {
        self.words.read()
    }

    /// Inserts `word` if absent, running `persist` while the write lock is
    /// held so that concurrent additions to the same set serialize as one
    /// logical operation. Returns whether the word was newly inserted.
    ///
    /// A `persist` failure propagates but the insertion stays: the current
    /// session keeps treating the word as correct even though it may not
    /// have reached disk.
    pub(crate) fn insert_with<F>(&self, word: SmolStr, persist: F) -> Result<bool, DictionaryError>
    where
        F: FnOnce() -> Result<(), DictionaryError>,
    {
        let mut words = self.words.write();
        if words.contains(&word) {
            return Ok(false);
        }

        words.insert(word);
        persist()?;
        Ok(true)
    }
}

/// Process-wide cache mapping dictionary paths to their loaded word sets.
///
/// Entries are created on first reference to a path and never evicted. The
/// store is an explicit service handed to each [`Speller`] rather than
/// ambient global state, so tests can run against a fresh one.
///
/// [`Speller`]: crate::speller::Speller
#[derive(Debug, Default)]
pub struct DictionaryStore {
    entries: Mutex<HashMap<PathBuf, Arc<WordSet>>>,
}

impl DictionaryStore {
    /// Creates an empty store.
    pub fn new() -> DictionaryStore {
        DictionaryStore::default()
    }

    /// Returns the word set backing `path`, reading the file on first use.
    ///
    /// Repeated loads of the same path hand back the same shared set with
    /// no further I/O. The store lock is held across the read, so
    /// concurrent first loads of one path perform exactly one read.
    pub fn load(&self, path: &Path) -> Result<Arc<WordSet>, DictionaryError> {
        let mut entries = self.entries.lock();

        if let Some(set) = entries.get(path) {
            return Ok(Arc::clone(set));
        }

        let set = Arc::new(read_word_file(path)?);
        log::debug!("loaded dictionary {:?}: {} words", path, set.len());
        entries.insert(path.to_path_buf(), Arc::clone(&set));
        Ok(set)
    }

    /// Appends `word` as a new line to the file at `path`.
    ///
    /// Durability only: updating the in-memory set is the caller's job.
    /// Existing lines are never rewritten.
    pub fn append_word(&self, path: &Path, word: &str) -> Result<(), DictionaryError> {
        let write_error = |source| DictionaryError::Write {
            path: path.to_path_buf(),
            source,
        };

        let mut file = OpenOptions::new().append(true).open(path).map_err(write_error)?;

        // A leading separator keeps "one word per line" intact even when
        // the file does not end with a newline.
        write!(file, "{}{}", LINE_SEPARATOR, word).map_err(write_error)
    }
}

fn read_word_file(path: &Path) -> Result<WordSet, DictionaryError> {
    let read_error = |source| DictionaryError::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    let reader = BufReader::new(file);

    let mut words = HashSet::new();
    for line in reader.lines() {
        let line = line.map_err(read_error)?;
        let word = sanitize(&line);
        if !word.is_empty() {
            words.insert(word);
        }
    }

    Ok(WordSet {
        words: RwLock::new(words),
    })
}
