//! Error types for the word-filter crate.

use thiserror::Error;

/// Errors that can occur when loading a banned word list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordListError {
    /// The word list could not be read.
    #[error("failed to read word list: {message}")]
    Read {
        /// Description of the I/O error.
        message: String,
    },

    /// A word could not be compiled into a matcher.
    #[error("failed to compile banned word '{word}': {message}")]
    Pattern {
        /// The word that failed to compile.
        word: String,
        /// Description of the compilation error.
        message: String,
    },
}
