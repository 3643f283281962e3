//! # Notation Engine
//!
//! Pure musical knowledge used by the annotation store. Nothing in here holds
//! state; every function is a lookup over fixed tables.
//!
//! ## Enharmonic Spellings
//! Five pitch classes (the black keys) have two spellings:
//! `A#/Bb`, `C#/Db`, `D#/Eb`, `F#/Gb`, `G#/Ab`. Every other note has a single
//! spelling as far as this crate is concerned, so respelling passes it through
//! unchanged (`E#` stays `E#`).
//!
//! ## Keys
//! - Sharp-preferred: `G D A E B`
//! - Flat-preferred: `C F Bb Eb Ab Db Gb`
//! - A key whose table is missing in the current notation (`G` under flats)
//!   uses the C major scale.
//!
//! ## Diatonic Qualities
//! Scale degrees I-VII map to `[Major, m, m, Major, Major, m, dim]`.
//!
//! ## Example
//! ```rust
//! use lyric_chords::notation::{preferred_spelling, scale_for, Key, Note};
//!
//! let db: Note = "Db".parse()?;
//! assert_eq!(preferred_spelling(db, true).to_string(), "C#");
//!
//! let g: Key = "G".parse()?;
//! assert_eq!(scale_for(g, true)[4].to_string(), "D");
//! # Ok::<(), lyric_chords::AnnotatorError>(())
//! ```

mod key;
mod note;


pub use key::{Key, KeyClass, FLAT_SCALES, SHARP_SCALES};
pub use note::{Accidental, Note, NoteName};

use key::{lookup_scale, C_MAJOR, FLAT_PREFERRED, SHARP_PREFERRED};

use crate::chord::ChordType;

/// Sharp spelling paired with its flat spelling
pub const ENHARMONIC_PAIRS: [(Note, Note); 5] = [
    (Note::sharp(NoteName::A), Note::flat(NoteName::B)),
    (Note::sharp(NoteName::C), Note::flat(NoteName::D)),
    (Note::sharp(NoteName::D), Note::flat(NoteName::E)),
    (Note::sharp(NoteName::F), Note::flat(NoteName::G)),
    (Note::sharp(NoteName::G), Note::flat(NoteName::A)),
];

/// Chord quality per scale degree (0 = I)
const DIATONIC_QUALITIES: [&str; 7] = ["", "m", "m", "", "", "m", "dim"];

fn enharmonic_partner(note: Note) -> Option<Note> {
    ENHARMONIC_PAIRS.iter().find_map(|&(sharp, flat)| {
        if note == sharp {
            Some(flat)
        } else if note == flat {
            Some(sharp)
        } else {
            None
        }
    })
}

/// True for the five notes that have both a sharp and a flat spelling.
pub fn is_dual_spelling(note: Note) -> bool {
    enharmonic_partner(note).is_some()
}

/// The other spelling of a dual-spelling note. Single-spelling notes are
/// returned unchanged.
pub fn alternate_spelling(note: Note) -> Note {
    enharmonic_partner(note).unwrap_or(note)
}

/// Spell `note` with sharps or flats.
///
/// Dual-spelling notes come back with the requested accidental; all other
/// notes pass through untouched. Applying this twice is the same as once.
pub fn preferred_spelling(note: Note, use_sharps: bool) -> Note {
    match enharmonic_partner(note) {
        Some(alternate) => {
            let matches = if use_sharps { note.is_sharp() } else { note.is_flat() };
            if matches {
                note
            } else {
                alternate
            }
        }
        None => note,
    }
}

/// The preferred accidental for a key, or `None` for keys outside both the
/// sharp and the flat set.
pub fn key_class(key: Key) -> Option<KeyClass> {
    let tonic = key.tonic();
    if SHARP_PREFERRED.contains(&tonic) {
        Some(KeyClass::Sharp)
    } else if FLAT_PREFERRED.contains(&tonic) {
        Some(KeyClass::Flat)
    } else {
        None
    }
}

/// Like [`key_class`] but unclassified keys report the class of `C` (flat).
pub fn classify_key(key: Key) -> KeyClass {
    key_class(key).unwrap_or(KeyClass::Flat)
}

/// The 7-note major scale of `key` in the requested notation.
///
/// Only the table for the requested notation is consulted. A key missing from
/// it falls back to C major, so `G` under flats gives the C scale.
pub fn scale_for(key: Key, use_sharps: bool) -> [Note; 7] {
    let table = if use_sharps { &SHARP_SCALES[..] } else { &FLAT_SCALES[..] };

    lookup_scale(table, key).unwrap_or_else(|| {
        log::debug!(
            "No {} scale table for key {}, using C major",
            if use_sharps { "sharp" } else { "flat" },
            key
        );
        C_MAJOR
    })
}

/// Diatonic chord quality for a 0-based scale degree. `None` past the 7th degree.
pub fn diatonic_chord_type(degree: usize) -> Option<ChordType> {
    DIATONIC_QUALITIES.get(degree).map(|suffix| ChordType::from_label(suffix))
}

/// The twelve root buttons a UI shows: the seven naturals plus either the
/// five sharps or the five flats, in chromatic order from C.
pub fn visible_roots(use_sharps: bool) -> [Note; 12] {
    let mut roots = [Note::natural(NoteName::C); 12];
    for (pitch_class, root) in roots.iter_mut().enumerate() {
        *root = Note::from_pitch_class(pitch_class as u8, use_sharps);
    }
    roots
}
