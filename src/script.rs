//! # Command Scripts
//!
//! A line-oriented command language for driving an [`AnnotationStore`] from
//! a file or stdin. Each command is one user intent:
//!
//! | Command          | Effect                                   |
//! |------------------|------------------------------------------|
//! | `select N`       | select word N                            |
//! | `root NOTE`      | set the chord root (`C`, `F#`, `Bb`, ...) |
//! | `type LABEL`     | set the chord type (`Major`, `m`, `7`, ...) |
//! | `chord N SYMBOL` | select word N and set `SYMBOL`, e.g. `Am7` |
//! | `key KEY`        | set the song key                         |
//! | `sharps`/`flats` | set the notation                         |
//! | `toggle`         | flip the notation                        |
//! | `remove`         | remove the selected word's chord         |
//! | `clear`          | remove every chord                       |
//! | `degree D`       | scale-degree shortcut, D in 1-7          |
//! | `letter L`       | letter shortcut, L in a-g                |
//! | `preview`        | print the chord preview label            |
//! | `show`           | print the annotated text                 |
//!
//! Blank lines and `#` comments are ignored. The whole script is parsed
//! before anything runs; execution stops at the first failing command.
//!
//! ```rust
//! use lyric_chords::{script, AnnotationStore};
//!
//! let mut store = AnnotationStore::new();
//! store.load_text("Amazing grace");
//! let output = script::run_script(&mut store, "select 0\nroot C\ntype m\npreview")?;
//! assert_eq!(output, ["Cm"]);
//! # Ok::<(), lyric_chords::AnnotatorError>(())
//! ```

use std::str::FromStr;

use crate::chord::Chord;
use crate::error::AnnotatorError;
use crate::notation::{Key, Note};
use crate::store::AnnotationStore;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Select(usize),
    Root(Note),
    Type(String),
    Chord(usize, Chord),
    Key(Key),
    Notation { use_sharps: bool },
    Toggle,
    Remove,
    Clear,
    Degree(u8),
    Letter(char),
    Preview,
    Show,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let name = parts.next().ok_or_else(|| "empty command".to_string())?;
        let args: Vec<&str> = parts.collect();

        let arity = |expected: usize| {
            if args.len() == expected {
                Ok(())
            } else {
                Err(format!(
                    "'{}' takes {} argument(s), got {}",
                    name,
                    expected,
                    args.len()
                ))
            }
        };

        let command = match name {
            "select" => {
                arity(1)?;
                Command::Select(parse_index(args[0])?)
            }
            "root" => {
                arity(1)?;
                Command::Root(args[0].parse().map_err(|e: AnnotatorError| e.to_string())?)
            }
            "type" => {
                arity(1)?;
                Command::Type(args[0].to_string())
            }
            "chord" => {
                arity(2)?;
                let chord = args[1].parse().map_err(|e: AnnotatorError| e.to_string())?;
                Command::Chord(parse_index(args[0])?, chord)
            }
            "key" => {
                arity(1)?;
                Command::Key(args[0].parse().map_err(|e: AnnotatorError| e.to_string())?)
            }
            "sharps" => {
                arity(0)?;
                Command::Notation { use_sharps: true }
            }
            "flats" => {
                arity(0)?;
                Command::Notation { use_sharps: false }
            }
            "toggle" => {
                arity(0)?;
                Command::Toggle
            }
            "remove" => {
                arity(0)?;
                Command::Remove
            }
            "clear" => {
                arity(0)?;
                Command::Clear
            }
            "degree" => {
                arity(1)?;
                let degree = args[0]
                    .parse()
                    .map_err(|_| format!("invalid scale degree '{}'", args[0]))?;
                Command::Degree(degree)
            }
            "letter" => {
                arity(1)?;
                let mut chars = args[0].chars();
                match (chars.next(), chars.next()) {
                    (Some(letter), None) => Command::Letter(letter),
                    _ => return Err(format!("invalid letter '{}'", args[0])),
                }
            }
            "preview" => {
                arity(0)?;
                Command::Preview
            }
            "show" => {
                arity(0)?;
                Command::Show
            }
            other => return Err(format!("unknown command '{}'", other)),
        };
        Ok(command)
    }
}

/// Cut a `#` comment that starts the line or follows whitespace, so `F#`
/// survives.
fn strip_comment(line: &str) -> &str {
    let mut after_space = true;
    for (i, c) in line.char_indices() {
        if c == '#' && after_space {
            return &line[..i];
        }
        after_space = c.is_whitespace();
    }
    line
}

fn parse_index(s: &str) -> Result<usize, String> {
    s.parse().map_err(|_| format!("invalid word index '{}'", s))
}

impl Command {
    /// Run the command. `preview` and `show` return text to print.
    pub fn apply(&self, store: &mut AnnotationStore) -> Result<Option<String>, AnnotatorError> {
        match self {
            Command::Select(index) => store.select_word(*index)?,
            Command::Root(root) => store.set_chord_root(*root)?,
            Command::Type(label) => store.set_chord_type(label)?,
            Command::Chord(index, chord) => {
                store.select_word(*index)?;
                store.set_chord_type(chord.chord_type.label())?;
                store.set_chord_root(chord.root)?;
            }
            Command::Key(key) => store.set_key(*key),
            Command::Notation { use_sharps } => store.set_notation(*use_sharps),
            Command::Toggle => store.toggle_notation(),
            Command::Remove => {
                store.remove_chord()?;
            }
            Command::Clear => store.clear_all(),
            Command::Degree(digit) => store.apply_scale_degree_shortcut(*digit)?,
            Command::Letter(letter) => store.apply_letter_shortcut(*letter)?,
            Command::Preview => return Ok(Some(store.render_preview_label())),
            Command::Show => return store.serialize().map(Some),
        }
        Ok(None)
    }
}

/// Parse a script into commands paired with their 1-based line numbers.
pub fn parse_script(source: &str) -> Result<Vec<(usize, Command)>, AnnotatorError> {
    source
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let line = strip_comment(line).trim();
            (!line.is_empty()).then_some((i + 1, line))
        })
        .map(|(line_number, line)| {
            line.parse::<Command>()
                .map(|command| (line_number, command))
                .map_err(|message| AnnotatorError::ScriptError {
                    line: line_number,
                    message,
                })
        })
        .collect()
}

/// Parse and run a script, returning the output of `preview`/`show` commands.
pub fn run_script(store: &mut AnnotationStore, source: &str) -> Result<Vec<String>, AnnotatorError> {
    let commands = parse_script(source)?;
    let mut output = Vec::new();

    for (line_number, command) in commands {
        let printed = command
            .apply(store)
            .map_err(|e| AnnotatorError::ScriptError {
                line: line_number,
                message: e.to_string(),
            })?;
        output.extend(printed);
    }

    Ok(output)
}

/// Parse a CLI chord assignment `INDEX=SYMBOL`, e.g. `3=Am7`.
pub fn parse_chord_assignment(s: &str) -> Result<(usize, Chord), AnnotatorError> {
    let (index, symbol) = s
        .split_once('=')
        .ok_or_else(|| AnnotatorError::InvalidChord(s.to_string()))?;
    let index = index
        .trim()
        .parse()
        .map_err(|_| AnnotatorError::InvalidChord(s.to_string()))?;
    Ok((index, symbol.parse()?))
}
