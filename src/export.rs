//! Annotated text export
//!
//! Output format:
//! ```text
//! Song Key: <key>
//! [<Root><Type>]word word word
//!
//! word [<Root>]word
//! ```
//! - one output line per input line, words joined by a single space
//! - annotated words get the chord in brackets, root spelled for the current
//!   notation and the type omitted for Major
//! - blank input lines stay blank
//! - every line, including the last, ends with `\n`
//!
//! The text is rebuilt from the original lyrics on every call, so it always
//! reflects the current annotations and notation.

use crate::error::AnnotatorError;
use crate::lyrics;
use crate::store::AnnotationStore;

/// File name used when the source file name is unknown
pub const DEFAULT_EXPORT_FILENAME: &str = "lyrics-chords.txt";

/// Render the annotated lyrics for `store`.
///
/// Fails with [`AnnotatorError::NoDocumentLoaded`] when nothing (or an empty
/// text) has been loaded.
pub fn to_annotated_text(store: &AnnotationStore) -> Result<String, AnnotatorError> {
    let text = match store.original_text() {
        Some(text) if store.is_loaded() => text,
        _ => return Err(AnnotatorError::NoDocumentLoaded),
    };

    let mut out = format!("Song Key: {}\n", store.key());

    for line in lyrics::tokenize(text) {
        let tokens: Vec<String> = line
            .words
            .iter()
            .map(|word| match store.annotation(word.index) {
                Some(chord) => format!("[{}]{}", store.display_chord(chord), word.text),
                None => word.text.clone(),
            })
            .collect();
        out.push_str(&tokens.join(" "));
        out.push('\n');
    }

    Ok(out)
}

/// Suggested export file name: `<base>-chords.<ext>` for a source name with
/// an extension, `<name>-chords.txt` without one, and
/// [`DEFAULT_EXPORT_FILENAME`] when the source is unknown.
pub fn export_filename(source_name: Option<&str>) -> String {
    match source_name {
        Some(name) if !name.is_empty() => match name.rsplit_once('.') {
            Some((base, ext)) if !base.is_empty() => format!("{}-chords.{}", base, ext),
            _ => format!("{}-chords.txt", name),
        },
        _ => DEFAULT_EXPORT_FILENAME.to_string(),
    }
}
