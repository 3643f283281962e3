//! Note spellings: a letter A-G with an optional `#` or `b`.

use std::fmt;
use std::str::FromStr;

use crate::error::AnnotatorError;

/// Note names A through G
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NoteName {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl NoteName {
    pub const ALL: [NoteName; 7] = [
        NoteName::C,
        NoteName::D,
        NoteName::E,
        NoteName::F,
        NoteName::G,
        NoteName::A,
        NoteName::B,
    ];

    /// Parse an upper-case letter `A`-`G`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'C' => Some(NoteName::C),
            'D' => Some(NoteName::D),
            'E' => Some(NoteName::E),
            'F' => Some(NoteName::F),
            'G' => Some(NoteName::G),
            'A' => Some(NoteName::A),
            'B' => Some(NoteName::B),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            NoteName::C => 'C',
            NoteName::D => 'D',
            NoteName::E => 'E',
            NoteName::F => 'F',
            NoteName::G => 'G',
            NoteName::A => 'A',
            NoteName::B => 'B',
        }
    }

    /// Semitone offset from C
    fn semitone(self) -> i8 {
        match self {
            NoteName::C => 0,
            NoteName::D => 2,
            NoteName::E => 4,
            NoteName::F => 5,
            NoteName::G => 7,
            NoteName::A => 9,
            NoteName::B => 11,
        }
    }
}

/// Accidental attached to a spelled note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Accidental {
    #[default]
    Natural,
    Sharp, // #
    Flat,  // b
}

impl Accidental {
    pub fn symbol(self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
        }
    }

    fn offset(self) -> i8 {
        match self {
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
        }
    }
}

/// A spelled note such as `C`, `F#` or `Bb`.
///
/// Two notes are equal only when they are spelled the same; use
/// [`Note::pitch_class`] to compare enharmonic equivalents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Note {
    pub name: NoteName,
    pub accidental: Accidental,
}

impl Note {
    pub const fn new(name: NoteName, accidental: Accidental) -> Self {
        Self { name, accidental }
    }

    pub const fn natural(name: NoteName) -> Self {
        Self::new(name, Accidental::Natural)
    }

    pub const fn sharp(name: NoteName) -> Self {
        Self::new(name, Accidental::Sharp)
    }

    pub const fn flat(name: NoteName) -> Self {
        Self::new(name, Accidental::Flat)
    }

    pub fn is_sharp(self) -> bool {
        self.accidental == Accidental::Sharp
    }

    pub fn is_flat(self) -> bool {
        self.accidental == Accidental::Flat
    }

    /// Pitch class 0-11 with C = 0. `B#` wraps to 0 and `Cb` to 11.
    pub fn pitch_class(self) -> u8 {
        (self.name.semitone() + self.accidental.offset()).rem_euclid(12) as u8
    }

    /// Spell a pitch class using sharps or flats for the black keys.
    pub fn from_pitch_class(pitch_class: u8, use_sharps: bool) -> Self {
        use NoteName::*;
        match pitch_class % 12 {
            0 => Note::natural(C),
            1 => if use_sharps { Note::sharp(C) } else { Note::flat(D) },
            2 => Note::natural(D),
            3 => if use_sharps { Note::sharp(D) } else { Note::flat(E) },
            4 => Note::natural(E),
            5 => Note::natural(F),
            6 => if use_sharps { Note::sharp(F) } else { Note::flat(G) },
            7 => Note::natural(G),
            8 => if use_sharps { Note::sharp(G) } else { Note::flat(A) },
            9 => Note::natural(A),
            10 => if use_sharps { Note::sharp(A) } else { Note::flat(B) },
            _ => Note::natural(B),
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name.as_char(), self.accidental.symbol())
    }
}

impl FromStr for Note {
    type Err = AnnotatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let name = chars
            .next()
            .and_then(NoteName::from_char)
            .ok_or_else(|| AnnotatorError::InvalidNote(s.to_string()))?;
        let accidental = match chars.next() {
            None => Accidental::Natural,
            Some('#') => Accidental::Sharp,
            Some('b') => Accidental::Flat,
            Some(_) => return Err(AnnotatorError::InvalidNote(s.to_string())),
        };
        if chars.next().is_some() {
            return Err(AnnotatorError::InvalidNote(s.to_string()));
        }
        Ok(Note::new(name, accidental))
    }
}
