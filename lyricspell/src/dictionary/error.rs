//! Dictionary file errors.

use std::io;
use std::path::PathBuf;

/// Errors reading or writing a dictionary's backing file.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DictionaryError {
    /// The backing file was missing, unreadable, or not valid UTF-8 text.
    #[error("failed to read dictionary file {path:?}")]
    Read {
        /// the backing file
        path: PathBuf,
        /// the underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// Appending a word to the backing file failed. The in-memory word set
    /// already reflects the addition; only durability was lost.
    #[error("failed to append to dictionary file {path:?}")]
    Write {
        /// the backing file
        path: PathBuf,
        /// the underlying I/O failure
        #[source]
        source: io::Error,
    },
}
