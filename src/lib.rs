pub mod chord;
pub mod error;
pub mod export;
pub mod lyrics;
pub mod notation;
pub mod plan;
pub mod script;
pub mod store;

pub use chord::{Chord, ChordType, CHORD_TYPE_LABELS};
pub use error::AnnotatorError;
pub use export::{export_filename, DEFAULT_EXPORT_FILENAME};
pub use lyrics::Word;
pub use notation::{Key, KeyClass, Note};
pub use plan::AnnotationPlan;
pub use store::{AnnotationStore, SelectedChord};

/// Annotate lyrics according to a YAML plan and return the exported text.
/// Key and notation start from the defaults (C, flats).
pub fn annotate(lyrics: &str, plan_yaml: &str) -> Result<String, AnnotatorError> {
    let plan = AnnotationPlan::from_yaml(plan_yaml)?;
    let mut store = AnnotationStore::new();
    store.load_text(lyrics);
    plan.apply(&mut store)?;
    store.serialize()
}
