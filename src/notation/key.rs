//! Song keys and their scale tables.
//!
//! Only the keys listed in [`SHARP_SCALES`] and [`FLAT_SCALES`] have a scale.
//! The tables are written out by hand rather than derived from intervals, so
//! the Gb scale keeps `B` (the label of the root button) instead of `Cb`.

use std::fmt;
use std::str::FromStr;

use super::note::{Note, NoteName};
use crate::error::AnnotatorError;

/// A major key, named by its tonic.
///
/// Parsing accepts only tonics with a scale table (`C G D A E B F Bb Eb Ab Db
/// Gb`). [`Key::new`] takes any note; keys built that way without a table
/// fall back to C major wherever a scale is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    tonic: Note,
}

impl Key {
    pub const C: Key = Key::new(C);

    pub const fn new(tonic: Note) -> Self {
        Self { tonic }
    }

    pub fn tonic(self) -> Note {
        self.tonic
    }
}

impl Default for Key {
    fn default() -> Self {
        Key::C
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tonic.fmt(f)
    }
}

impl FromStr for Key {
    type Err = AnnotatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AnnotatorError::InvalidKey(s.to_string());
        let key = s.trim().parse::<Note>().map(Key::new).map_err(|_| invalid())?;

        if lookup_scale(&SHARP_SCALES, key).is_none() && lookup_scale(&FLAT_SCALES, key).is_none() {
            return Err(invalid());
        }
        Ok(key)
    }
}

/// Which accidental a key prefers for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClass {
    Sharp,
    Flat,
}

impl KeyClass {
    pub fn use_sharps(self) -> bool {
        self == KeyClass::Sharp
    }
}

const C: Note = Note::natural(NoteName::C);
const D: Note = Note::natural(NoteName::D);
const E: Note = Note::natural(NoteName::E);
const F: Note = Note::natural(NoteName::F);
const G: Note = Note::natural(NoteName::G);
const A: Note = Note::natural(NoteName::A);
const B: Note = Note::natural(NoteName::B);
const CS: Note = Note::sharp(NoteName::C);
const DS: Note = Note::sharp(NoteName::D);
const FS: Note = Note::sharp(NoteName::F);
const GS: Note = Note::sharp(NoteName::G);
const AS: Note = Note::sharp(NoteName::A);
const DB: Note = Note::flat(NoteName::D);
const EB: Note = Note::flat(NoteName::E);
const GB: Note = Note::flat(NoteName::G);
const AB: Note = Note::flat(NoteName::A);
const BB: Note = Note::flat(NoteName::B);

pub(crate) const C_MAJOR: [Note; 7] = [C, D, E, F, G, A, B];

/// Circle of fifths
pub const SHARP_SCALES: [(Note, [Note; 7]); 6] = [
    (C, C_MAJOR),
    (G, [G, A, B, C, D, E, FS]),
    (D, [D, E, FS, G, A, B, CS]),
    (A, [A, B, CS, D, E, FS, GS]),
    (E, [E, FS, GS, A, B, CS, DS]),
    (B, [B, CS, DS, E, FS, GS, AS]),
];

/// Circle of fourths
pub const FLAT_SCALES: [(Note, [Note; 7]); 7] = [
    (C, C_MAJOR),
    (F, [F, G, A, BB, C, D, E]),
    (BB, [BB, C, D, EB, F, G, A]),
    (EB, [EB, F, G, AB, BB, C, D]),
    (AB, [AB, BB, C, DB, EB, F, G]),
    (DB, [DB, EB, F, GB, AB, BB, C]),
    (GB, [GB, AB, BB, B, DB, EB, F]),
];

pub(crate) const SHARP_PREFERRED: [Note; 5] = [G, D, A, E, B];
pub(crate) const FLAT_PREFERRED: [Note; 7] = [C, F, BB, EB, AB, DB, GB];

pub(crate) fn lookup_scale(table: &[(Note, [Note; 7])], key: Key) -> Option<[Note; 7]> {
    table
        .iter()
        .find(|(tonic, _)| *tonic == key.tonic)
        .map(|(_, scale)| *scale)
}
