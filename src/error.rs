//! # Error Types
//!
//! All fallible operations in this crate return [`AnnotatorError`].
//!
//! ## Error Groups
//! - **Guard violations** - a command issued in a state that cannot accept it
//!   (`NoWordSelected`, `WordIndexOutOfRange`, `InvalidScaleDegree`,
//!   `InvalidShortcutLetter`). State is never modified when one of these is
//!   returned.
//! - **Missing input** - export requested before any lyrics were loaded
//!   (`NoDocumentLoaded`).
//! - **Bad values** - note, key or chord strings that do not parse.
//! - **Plan / script errors** - problems in the CLI's YAML plan or command script.
//!
//! Parsing a key with no scale table (`F#`, `Fb`) is an `InvalidKey` error. A
//! key missing from the current notation's table is not: scale lookups fall
//! back to C major.
//!
//! ## Usage
//! ```rust
//! use lyric_chords::{AnnotationStore, AnnotatorError};
//!
//! let mut store = AnnotationStore::new();
//! store.load_text("Amazing grace");
//!
//! match store.select_word(7) {
//!     Err(AnnotatorError::WordIndexOutOfRange { index, word_count }) => {
//!         eprintln!("word {} does not exist ({} words loaded)", index, word_count);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//!     Ok(()) => {}
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnnotatorError {
    /// A chord command was issued while no word is selected.
    ///
    /// # Example
    /// ```
    /// # use lyric_chords::AnnotatorError;
    /// let err = AnnotatorError::NoWordSelected;
    /// assert_eq!(err.to_string(), "No word selected");
    /// ```
    #[error("No word selected")]
    NoWordSelected,

    /// A word selection referenced an index outside the loaded lyrics.
    ///
    /// # Example
    /// ```
    /// # use lyric_chords::AnnotatorError;
    /// let err = AnnotatorError::WordIndexOutOfRange { index: 9, word_count: 4 };
    /// assert_eq!(err.to_string(), "Word index 9 is out of range (4 words loaded)");
    /// ```
    #[error("Word index {index} is out of range ({word_count} words loaded)")]
    WordIndexOutOfRange { index: usize, word_count: usize },

    /// A scale-degree shortcut outside 1-7.
    #[error("Scale degree {0} is out of range (expected 1-7)")]
    InvalidScaleDegree(u8),

    /// A letter shortcut outside a-g.
    ///
    /// # Example
    /// ```
    /// # use lyric_chords::AnnotatorError;
    /// let err = AnnotatorError::InvalidShortcutLetter('h');
    /// assert_eq!(err.to_string(), "No root for shortcut key 'h' (expected a-g)");
    /// ```
    #[error("No root for shortcut key '{0}' (expected a-g)")]
    InvalidShortcutLetter(char),

    /// Export was requested before any lyrics were loaded.
    #[error("No lyrics loaded. Load a lyrics file first.")]
    NoDocumentLoaded,

    #[error("Invalid note: {0}")]
    InvalidNote(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Invalid chord: {0}")]
    InvalidChord(String),

    /// The YAML annotation plan could not be read or applied.
    #[error("Invalid plan: {0}")]
    PlanError(String),

    /// A command script line failed. `line` is 1-based.
    #[error("Script error at line {line}: {message}")]
    ScriptError { line: usize, message: String },
}

impl AnnotatorError {
    /// True for errors caused by issuing a command in the wrong session state.
    pub fn is_guard_violation(&self) -> bool {
        matches!(
            self,
            AnnotatorError::NoWordSelected
                | AnnotatorError::WordIndexOutOfRange { .. }
                | AnnotatorError::InvalidScaleDegree(_)
                | AnnotatorError::InvalidShortcutLetter(_)
        )
    }
}
