//! Chord symbols attached to lyric words
//!
//! A chord is a root note plus a chord type. The type is an opaque suffix
//! string; the empty suffix means Major. The UI labels that type "Major", so
//! [`ChordType::from_label`] maps that label back to the empty suffix.
//!
//! # Examples
//! ```
//! use lyric_chords::{Chord, ChordType};
//!
//! let chord: Chord = "Bbm7".parse()?;
//! assert_eq!(chord.root.to_string(), "Bb");
//! assert_eq!(chord.chord_type.suffix(), "m7");
//!
//! // "Major" is stored as the empty suffix
//! assert_eq!(ChordType::from_label("Major"), ChordType::major());
//! assert_eq!(ChordType::major().label(), "Major");
//!
//! // Display respells the root for the current notation
//! assert_eq!(chord.symbol(true), "A#m7");
//! # Ok::<(), lyric_chords::AnnotatorError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::AnnotatorError;
use crate::notation::{preferred_spelling, Note};

/// Chord type labels offered as buttons, in display order.
pub const CHORD_TYPE_LABELS: [&str; 12] = [
    "Major", "m", "7", "maj7", "m7", "dim", "aug", "sus2", "sus4", "9", "maj9", "m9",
];

/// Chord quality suffix. Empty means Major.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ChordType(String);

impl ChordType {
    /// Button label for the empty suffix
    pub const MAJOR_LABEL: &'static str = "Major";

    pub fn major() -> Self {
        Self::default()
    }

    /// Build a type from a UI label, turning "Major" into the empty suffix.
    pub fn from_label(label: &str) -> Self {
        if label == Self::MAJOR_LABEL {
            Self::major()
        } else {
            Self(label.to_string())
        }
    }

    pub fn is_major(&self) -> bool {
        self.0.is_empty()
    }

    /// The text written after the root, e.g. `"m7"`. Empty for Major.
    pub fn suffix(&self) -> &str {
        &self.0
    }

    /// The UI label, e.g. `"m7"` or `"Major"`.
    pub fn label(&self) -> &str {
        if self.is_major() {
            Self::MAJOR_LABEL
        } else {
            &self.0
        }
    }
}

impl fmt::Display for ChordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A chord annotation. The root keeps the spelling it was entered with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chord {
    pub root: Note,
    pub chord_type: ChordType,
}

impl Chord {
    pub fn new(root: Note, chord_type: ChordType) -> Self {
        Self { root, chord_type }
    }

    /// The chord symbol with its root respelled for display.
    pub fn symbol(&self, use_sharps: bool) -> String {
        format!("{}{}", preferred_spelling(self.root, use_sharps), self.chord_type)
    }
}

/// Stored spelling, e.g. `Dbm` even when displaying sharps.
impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.chord_type)
    }
}

impl FromStr for Chord {
    type Err = AnnotatorError;

    /// Parse `<letter>[#|b]<type>`, e.g. `C`, `F#m`, `Bbmaj7`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbol = s.trim();
        let invalid = || AnnotatorError::InvalidChord(s.to_string());

        // Root is one letter, plus one accidental character if present
        let root_len = match symbol.chars().nth(1) {
            Some('#') | Some('b') => 2,
            _ => 1,
        };
        if symbol.is_empty() || !symbol.is_char_boundary(root_len) {
            return Err(invalid());
        }
        let (root, quality) = symbol.split_at(root_len);
        let root: Note = root.parse().map_err(|_| invalid())?;

        if quality.chars().any(char::is_whitespace) {
            return Err(invalid());
        }

        Ok(Chord::new(root, ChordType::from_label(quality)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chord_parsing() {
        let c = "C".parse::<Chord>().unwrap();
        assert_eq!(c.root.to_string(), "C");
        assert!(c.chord_type.is_major());

        let am = "Am".parse::<Chord>().unwrap();
        assert_eq!(am.root.to_string(), "A");
        assert_eq!(am.chord_type.suffix(), "m");

        let f_sharp = "F#dim".parse::<Chord>().unwrap();
        assert_eq!(f_sharp.root.to_string(), "F#");
        assert_eq!(f_sharp.chord_type.suffix(), "dim");

        let b_flat = "Bbmaj7".parse::<Chord>().unwrap();
        assert_eq!(b_flat.root.to_string(), "Bb");
        assert_eq!(b_flat.chord_type.suffix(), "maj7");

        // "b" right after the letter is always a flat
        let bb = "Bb".parse::<Chord>().unwrap();
        assert_eq!(bb.root.to_string(), "Bb");
        assert!(bb.chord_type.is_major());
    }

    #[test]
    fn test_chord_parsing_major_label() {
        let chord = "GMajor".parse::<Chord>().unwrap();
        assert_eq!(chord.to_string(), "G");
    }

    #[test]
    fn test_chord_parsing_errors() {
        for s in ["", "H7", "m", "7", "C m", "é"] {
            assert_eq!(
                s.parse::<Chord>(),
                Err(AnnotatorError::InvalidChord(s.to_string())),
                "{:?}",
                s
            );
        }
    }

    #[test]
    fn test_symbol_respells_root() {
        let chord = Chord::new("Db".parse().unwrap(), ChordType::from_label("m"));
        assert_eq!(chord.symbol(true), "C#m");
        assert_eq!(chord.symbol(false), "Dbm");
        assert_eq!(chord.to_string(), "Dbm");
    }

    #[test]
    fn test_chord_type_labels() {
        assert_eq!(ChordType::from_label("Major").suffix(), "");
        assert_eq!(ChordType::from_label("m").label(), "m");
        assert_eq!(ChordType::from_label("").label(), "Major");
        // Labels are opaque; no synonym folding
        assert_ne!(ChordType::from_label("maj7"), ChordType::from_label("Major7"));
        for label in CHORD_TYPE_LABELS {
            assert_eq!(ChordType::from_label(label).label(), label);
        }
    }
}
