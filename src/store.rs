//! # Annotation Store
//!
//! Session state for annotating one lyric sheet with chords.
//!
//! ## State
//! - the loaded text and its [`Word`] inventory
//! - a sparse map from word index to [`Chord`]
//! - the selected word, if any
//! - the chord being edited for that word ([`SelectedChord`])
//! - the song key and the sharps/flats display preference
//!
//! ## Eager Commit
//! There is no "save chord" step. While a word is selected, every root or
//! type change is written straight into the annotation map.
//!
//! ## Spelling
//! Chord roots are stored exactly as entered. Anything shown to the user goes
//! through [`AnnotationStore::display_root`], so toggling between sharps and
//! flats changes the output without touching stored chords.
//!
//! ## Example
//! ```rust
//! use lyric_chords::AnnotationStore;
//!
//! let mut store = AnnotationStore::new();
//! store.load_text("Amazing grace\nhow sweet");
//! store.select_word(0)?;
//! store.set_chord_root("C".parse()?)?;
//! store.set_chord_type("m")?;
//!
//! assert_eq!(store.serialize()?, "Song Key: C\n[Cm]Amazing grace\nhow sweet\n");
//! # Ok::<(), lyric_chords::AnnotatorError>(())
//! ```
//!
//! ## Related Modules
//! - `notation` - every spelling and scale decision
//! - `lyrics` - word numbering
//! - `export` - the annotated text file

use std::collections::BTreeMap;

use crate::chord::{Chord, ChordType};
use crate::error::AnnotatorError;
use crate::export;
use crate::lyrics::{self, Word};
use crate::notation::{
    alternate_spelling, diatonic_chord_type, is_dual_spelling, key_class, preferred_spelling,
    scale_for, Key, Note, NoteName,
};

/// The chord being edited for the selected word.
///
/// `root: None` means no root chosen yet. A type can be chosen before a root;
/// it is committed together with the root once one is picked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectedChord {
    pub root: Option<Note>,
    pub chord_type: ChordType,
}

impl SelectedChord {
    fn to_chord(&self) -> Option<Chord> {
        self.root.map(|root| Chord::new(root, self.chord_type.clone()))
    }
}

impl From<&Chord> for SelectedChord {
    fn from(chord: &Chord) -> Self {
        Self {
            root: Some(chord.root),
            chord_type: chord.chord_type.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Document {
    text: String,
    source_name: Option<String>,
    words: Vec<Word>,
}

/// Mutable annotation session. See the module docs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnnotationStore {
    document: Option<Document>,
    annotations: BTreeMap<usize, Chord>,
    selected_word: Option<usize>,
    selected_chord: SelectedChord,
    key: Key,
    use_sharps: bool,
}

impl AnnotationStore {
    /// Empty session in the key of C, displaying flats.
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    /// Load lyrics, discarding all annotations and the selection.
    /// Key and notation are kept.
    pub fn load_text(&mut self, text: &str) -> &[Word] {
        self.load(None, text)
    }

    /// Like [`load_text`](Self::load_text) but remembers the source file name
    /// for [`export_filename`](Self::export_filename).
    pub fn load_named(&mut self, source_name: &str, text: &str) -> &[Word] {
        self.load(Some(source_name.to_string()), text)
    }

    fn load(&mut self, source_name: Option<String>, text: &str) -> &[Word] {
        let words = lyrics::words(text);
        log::debug!("Loaded lyrics: {} words", words.len());

        self.annotations.clear();
        self.selected_word = None;
        self.selected_chord = SelectedChord::default();
        let document = self.document.insert(Document {
            text: text.to_string(),
            source_name,
            words,
        });
        &document.words
    }

    /// True once non-empty lyrics are loaded. Empty text counts as nothing
    /// loaded, matching [`AnnotationStore::serialize`].
    pub fn is_loaded(&self) -> bool {
        self.original_text().is_some_and(|text| !text.is_empty())
    }

    pub fn original_text(&self) -> Option<&str> {
        self.document.as_ref().map(|doc| doc.text.as_str())
    }

    pub fn source_name(&self) -> Option<&str> {
        self.document.as_ref().and_then(|doc| doc.source_name.as_deref())
    }

    pub fn words(&self) -> &[Word] {
        self.document
            .as_ref()
            .map(|doc| doc.words.as_slice())
            .unwrap_or(&[])
    }

    pub fn word_count(&self) -> usize {
        self.words().len()
    }

    // ------------------------------------------------------------------
    // Key and notation
    // ------------------------------------------------------------------

    pub fn key(&self) -> Key {
        self.key
    }

    pub fn use_sharps(&self) -> bool {
        self.use_sharps
    }

    /// Change the song key. Sharp keys switch the display to sharps and flat
    /// keys to flats; other keys leave the notation alone.
    pub fn set_key(&mut self, key: Key) {
        self.key = key;
        if let Some(class) = key_class(key) {
            self.use_sharps = class.use_sharps();
        }
        log::debug!("Key set to {} (sharps: {})", key, self.use_sharps);
    }

    /// Manual sharps/flats override. Stays in effect until the key changes.
    pub fn set_notation(&mut self, use_sharps: bool) {
        self.use_sharps = use_sharps;
    }

    pub fn toggle_notation(&mut self) {
        self.set_notation(!self.use_sharps);
    }

    // ------------------------------------------------------------------
    // Selection and chord commands
    // ------------------------------------------------------------------

    pub fn selected_word(&self) -> Option<usize> {
        self.selected_word
    }

    pub fn selected_chord(&self) -> &SelectedChord {
        &self.selected_chord
    }

    pub fn annotations(&self) -> &BTreeMap<usize, Chord> {
        &self.annotations
    }

    pub fn annotation(&self, index: usize) -> Option<&Chord> {
        self.annotations.get(&index)
    }

    /// Select a word and load its chord (if any) for editing.
    pub fn select_word(&mut self, index: usize) -> Result<(), AnnotatorError> {
        let word_count = self.word_count();
        if index >= word_count {
            log::warn!("Rejected selection of word {} ({} words)", index, word_count);
            return Err(AnnotatorError::WordIndexOutOfRange { index, word_count });
        }

        self.selected_word = Some(index);
        self.selected_chord = self
            .annotations
            .get(&index)
            .map(SelectedChord::from)
            .unwrap_or_default();
        Ok(())
    }

    fn require_selection(&self) -> Result<usize, AnnotatorError> {
        self.selected_word.ok_or_else(|| {
            log::warn!("Rejected chord command: no word selected");
            AnnotatorError::NoWordSelected
        })
    }

    /// Set the root of the selected word's chord, keeping its spelling as
    /// given, and commit. A chord with no type chosen yet is Major.
    pub fn set_chord_root(&mut self, root: Note) -> Result<(), AnnotatorError> {
        let index = self.require_selection()?;
        self.selected_chord.root = Some(root);
        self.commit(index);
        Ok(())
    }

    /// Set the chord type from a UI label ("Major" or a suffix) and commit.
    /// Without a root the type is kept pending until a root is chosen.
    pub fn set_chord_type(&mut self, label: &str) -> Result<(), AnnotatorError> {
        let index = self.require_selection()?;
        self.selected_chord.chord_type = ChordType::from_label(label);
        self.commit(index);
        Ok(())
    }

    fn commit(&mut self, index: usize) {
        if let Some(chord) = self.selected_chord.to_chord() {
            log::debug!("Word {} annotated with {}", index, chord);
            self.annotations.insert(index, chord);
        }
    }

    /// Remove the selected word's chord. Returns the removed chord.
    pub fn remove_chord(&mut self) -> Result<Option<Chord>, AnnotatorError> {
        let index = self.require_selection()?;
        self.selected_chord = SelectedChord::default();
        Ok(self.annotations.remove(&index))
    }

    /// Drop every annotation and the selection.
    pub fn clear_all(&mut self) {
        log::debug!("Cleared {} annotations", self.annotations.len());
        self.annotations.clear();
        self.selected_chord = SelectedChord::default();
        self.selected_word = None;
    }

    // ------------------------------------------------------------------
    // Shortcuts
    // ------------------------------------------------------------------

    /// Number keys 1-7: set the diatonic chord on that degree of the current
    /// key's scale, e.g. `5` in G is `D`.
    pub fn apply_scale_degree_shortcut(&mut self, digit: u8) -> Result<(), AnnotatorError> {
        let degree = match digit {
            1..=7 => usize::from(digit - 1),
            _ => return Err(AnnotatorError::InvalidScaleDegree(digit)),
        };
        self.require_selection()?;

        let root = scale_for(self.key, self.use_sharps)[degree];
        let chord_type = diatonic_chord_type(degree).unwrap_or_default();
        self.set_chord_root(root)?;
        self.set_chord_type(chord_type.label())
    }

    /// Letter keys a-g: set the root to that natural note.
    pub fn apply_letter_shortcut(&mut self, letter: char) -> Result<(), AnnotatorError> {
        let name = NoteName::from_char(letter.to_ascii_uppercase())
            .ok_or(AnnotatorError::InvalidShortcutLetter(letter))?;
        self.set_chord_root(Note::natural(name))
    }

    // ------------------------------------------------------------------
    // Rendering projections
    // ------------------------------------------------------------------

    /// A root spelled for the current notation. Never changes stored state.
    pub fn display_root(&self, root: Note) -> Note {
        preferred_spelling(root, self.use_sharps)
    }

    /// Chord symbol as displayed in the current notation.
    pub fn display_chord(&self, chord: &Chord) -> String {
        chord.symbol(self.use_sharps)
    }

    /// Preview text for the chord being edited.
    pub fn render_preview_label(&self) -> String {
        match self.selected_chord.root {
            Some(root) => format!("{}{}", self.display_root(root), self.selected_chord.chord_type),
            None => "No chord selected".to_string(),
        }
    }

    /// Whether a root button with this label shows as selected.
    ///
    /// A dual-spelling button also lights up for its alternate spelling when
    /// the button matches the current notation.
    pub fn is_root_highlighted(&self, button: Note) -> bool {
        let Some(root) = self.selected_chord.root else {
            return false;
        };
        if button == root {
            return true;
        }
        is_dual_spelling(button)
            && alternate_spelling(button) == root
            && preferred_spelling(button, self.use_sharps) == button
    }

    /// A word as displayed, with its chord prepended: `[Cm]Amazing`.
    pub fn render_word(&self, index: usize) -> Option<String> {
        let word = self.words().get(index)?;
        Some(match self.annotations.get(&index) {
            Some(chord) => format!("[{}]{}", self.display_chord(chord), word.text),
            None => word.text.clone(),
        })
    }

    /// Hover title for a word: the chord as stored, without respelling.
    pub fn word_title(&self, index: usize) -> Option<String> {
        self.annotations.get(&index).map(Chord::to_string)
    }

    // ------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------

    /// Render the annotated text file.
    pub fn serialize(&self) -> Result<String, AnnotatorError> {
        export::to_annotated_text(self)
    }

    /// Suggested file name for the export.
    pub fn export_filename(&self) -> String {
        export::export_filename(self.source_name())
    }
}
