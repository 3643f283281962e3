//! Integration tests for lyric annotation
//!
//! Drives the public API the way a UI would: load, select, set chords,
//! toggle notation, export.

use lyric_chords::{annotate, script, AnnotationStore, AnnotatorError, Note};
use proptest::prelude::*;

const LYRICS: &str = "Amazing grace\nhow sweet";

fn note(s: &str) -> Note {
    s.parse().unwrap()
}

/// Scenario A store: word 0 annotated with Cm, key C, default notation
fn scenario_a() -> AnnotationStore {
    let mut store = AnnotationStore::new();
    store.load_text(LYRICS);
    store.select_word(0).unwrap();
    store.set_chord_root(note("C")).unwrap();
    store.set_chord_type("m").unwrap();
    store
}

#[test]
fn test_scenario_a_export() {
    let store = scenario_a();
    assert_eq!(
        store.serialize().unwrap(),
        "Song Key: C\n[Cm]Amazing grace\nhow sweet\n"
    );
}

#[test]
fn test_scenario_b_notation_toggle_respells_export() {
    let mut store = AnnotationStore::new();
    store.load_text(LYRICS);
    store.select_word(0).unwrap();
    store.set_chord_root(note("Db")).unwrap();
    store.set_chord_type("m").unwrap();
    assert_eq!(
        store.serialize().unwrap(),
        "Song Key: C\n[Dbm]Amazing grace\nhow sweet\n"
    );

    store.set_notation(true);
    assert_eq!(store.display_root(note("Db")), note("C#"));
    assert_eq!(store.render_preview_label(), "C#m");
    assert_eq!(
        store.serialize().unwrap(),
        "Song Key: C\n[C#m]Amazing grace\nhow sweet\n"
    );
    // Stored spelling is untouched
    assert_eq!(store.annotation(0).unwrap().root, note("Db"));
}

#[test]
fn test_scenario_c_remove_chord() {
    let mut store = scenario_a();
    store.remove_chord().unwrap();
    assert_eq!(store.serialize().unwrap(), "Song Key: C\nAmazing grace\nhow sweet\n");
}

#[test]
fn test_scenario_d_scale_degree_in_g() {
    let mut store = AnnotationStore::new();
    store.load_text(LYRICS);
    store.set_key("G".parse().unwrap());
    store.set_notation(true);
    store.select_word(1).unwrap();
    store.apply_scale_degree_shortcut(5).unwrap();

    let chord = store.annotation(1).unwrap();
    assert_eq!(chord.root, note("D"));
    assert!(chord.chord_type.is_major());
    assert_eq!(
        store.serialize().unwrap(),
        "Song Key: G\nAmazing [D]grace\nhow sweet\n"
    );
}

#[test]
fn test_scenario_e_out_of_range_selection() {
    let mut store = AnnotationStore::new();
    store.load_text(LYRICS);
    store.select_word(3).unwrap();

    let err = store.select_word(4).unwrap_err();
    assert!(err.is_guard_violation());
    assert_eq!(store.selected_word(), Some(3));
}

#[test]
fn test_no_confirm_step_needed() {
    // Every root/type change lands in the map immediately
    let mut store = AnnotationStore::new();
    store.load_text(LYRICS);
    store.select_word(2).unwrap();

    store.set_chord_root(note("F")).unwrap();
    assert_eq!(store.annotation(2).unwrap().to_string(), "F");
    store.set_chord_type("sus4").unwrap();
    assert_eq!(store.annotation(2).unwrap().to_string(), "Fsus4");
    store.set_chord_root(note("G")).unwrap();
    assert_eq!(store.annotation(2).unwrap().to_string(), "Gsus4");

    // Moving on to another word keeps what was set
    store.select_word(0).unwrap();
    assert_eq!(store.annotation(2).unwrap().to_string(), "Gsus4");
}

#[test]
fn test_major_twice_equals_once() {
    let mut once = scenario_a();
    once.set_chord_type("Major").unwrap();
    let mut twice = scenario_a();
    twice.set_chord_type("Major").unwrap();
    twice.set_chord_type("Major").unwrap();
    assert_eq!(once.annotations(), twice.annotations());
    assert_eq!(once.annotation(0).unwrap().to_string(), "C");
}

#[test]
fn test_export_without_document() {
    let store = AnnotationStore::new();
    assert_eq!(store.serialize(), Err(AnnotatorError::NoDocumentLoaded));
}

#[test]
fn test_reload_discards_annotations() {
    let mut store = scenario_a();
    store.set_key("A".parse().unwrap());
    store.load_named("hymn.txt", "new words here");
    assert!(store.annotations().is_empty());
    assert_eq!(store.export_filename(), "hymn-chords.txt");
    assert_eq!(store.serialize().unwrap(), "Song Key: A\nnew words here\n");

    store.load_text("again");
    assert_eq!(store.export_filename(), "lyrics-chords.txt");
}

#[test]
fn test_annotate_with_plan() {
    let plan = "key: D\nchords:\n  0: D\n  1: Bm\n  3: G\n";
    assert_eq!(
        annotate(LYRICS, plan).unwrap(),
        "Song Key: D\n[D]Amazing [Bm]grace\nhow [G]sweet\n"
    );
}

#[test]
fn test_script_session() {
    let mut store = AnnotationStore::new();
    store.load_text("Twinkle twinkle little star\n\nhow I wonder");
    let output = script::run_script(
        &mut store,
        "key F\nchord 0 F\nchord 2 Bb\nselect 4\ndegree 5\ntoggle\nshow\n",
    )
    .unwrap();
    assert_eq!(
        output,
        ["Song Key: F\n[F]Twinkle twinkle [A#]little star\n\n[C]how I wonder\n"]
    );
}

fn lyric_text() -> impl Strategy<Value = String> {
    prop::collection::vec("[ \t]{0,3}([a-zA-Z']{1,8}[ \t]{1,3}){0,5}", 0..6)
        .prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn export_without_chords_round_trips(text in lyric_text()) {
        let mut store = AnnotationStore::new();
        store.load_text(&text);

        let expected_body: String = text
            .lines()
            .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" ") + "\n")
            .collect();

        match store.serialize() {
            Ok(exported) => prop_assert_eq!(exported, format!("Song Key: C\n{}", expected_body)),
            Err(e) => {
                prop_assert!(text.is_empty());
                prop_assert_eq!(e, AnnotatorError::NoDocumentLoaded);
            }
        }
    }

    #[test]
    fn every_word_index_is_selectable(text in lyric_text()) {
        let mut store = AnnotationStore::new();
        let count = store.load_text(&text).len();
        for index in 0..count {
            prop_assert!(store.select_word(index).is_ok());
        }
        prop_assert!(store.select_word(count).is_err());
    }
}
