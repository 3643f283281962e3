//! # Annotation Plans
//!
//! A YAML file describing a whole annotation session, used by the CLI:
//!
//! ```yaml
//! key: G
//! notation: sharps    # or flats; optional
//! chords:
//!   0: G
//!   3: Em
//!   7: D7
//! ```
//!
//! Keys are kebab-case, the same convention as the `gen` score frontmatter.
//! Applying a plan sets the key, then the notation, then each chord through
//! the normal select / root / type commands. A plan either applies fully or
//! leaves the store untouched.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::chord::Chord;
use crate::error::AnnotatorError;
use crate::notation::Key;
use crate::store::AnnotationStore;

/// Raw plan for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawPlan {
    key: Option<String>,
    notation: Option<String>,
    #[serde(default)]
    chords: BTreeMap<usize, String>,
}

/// A validated annotation plan
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnnotationPlan {
    pub key: Option<Key>,
    /// `Some(true)` for sharps, `Some(false)` for flats
    pub use_sharps: Option<bool>,
    /// Word index and chord, in index order
    pub chords: Vec<(usize, Chord)>,
}

impl AnnotationPlan {
    pub fn from_yaml(content: &str) -> Result<Self, AnnotatorError> {
        // An empty document deserializes to unit, not a map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let raw: RawPlan =
            serde_yaml::from_str(content).map_err(|e| AnnotatorError::PlanError(e.to_string()))?;

        let key = raw
            .key
            .as_deref()
            .map(str::parse::<Key>)
            .transpose()?;

        let use_sharps = match raw.notation.as_deref().map(str::trim) {
            None => None,
            Some("sharps") => Some(true),
            Some("flats") => Some(false),
            Some(other) => {
                return Err(AnnotatorError::PlanError(format!(
                    "notation must be 'sharps' or 'flats', got '{}'",
                    other
                )))
            }
        };

        let chords = raw
            .chords
            .iter()
            .map(|(&index, symbol)| Ok((index, symbol.parse::<Chord>()?)))
            .collect::<Result<Vec<_>, AnnotatorError>>()?;

        Ok(Self {
            key,
            use_sharps,
            chords,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, AnnotatorError> {
        let content = fs::read_to_string(path).map_err(|e| {
            AnnotatorError::PlanError(format!("cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    /// Apply the plan to `store`. On error the store is left as it was.
    pub fn apply(&self, store: &mut AnnotationStore) -> Result<(), AnnotatorError> {
        let mut next = store.clone();

        if let Some(key) = self.key {
            next.set_key(key);
        }
        if let Some(use_sharps) = self.use_sharps {
            next.set_notation(use_sharps);
        }
        for (index, chord) in &self.chords {
            next.select_word(*index)?;
            next.set_chord_type(chord.chord_type.label())?;
            next.set_chord_root(chord.root)?;
        }

        log::debug!("Applied plan with {} chords", self.chords.len());
        *store = next;
        Ok(())
    }
}
