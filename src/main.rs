use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use lyric_chords::script::{self, Command};
use lyric_chords::{AnnotationPlan, AnnotationStore, AnnotatorError, Key};

/// Attach chord symbols to the words of a lyric sheet and export annotated text.
///
/// Words are numbered from 0 across the whole file; use --list-words to see
/// the numbering.
#[derive(Parser)]
#[command(name = "lyric-chords")]
#[command(about = "Attach chord symbols to lyric words and export annotated text")]
struct Args {
    /// Lyrics text file
    input: PathBuf,

    /// Song key (C, G, D, A, E, B, F, Bb, Eb, Ab, Db, Gb)
    #[arg(short, long)]
    key: Option<String>,

    /// Display accidentals as sharps
    #[arg(long, conflicts_with = "flats")]
    sharps: bool,

    /// Display accidentals as flats
    #[arg(long)]
    flats: bool,

    /// YAML annotation plan (key, notation, chords)
    #[arg(long)]
    plan: Option<PathBuf>,

    /// Chord for a word, e.g. 0=C or 3=F#m (repeatable)
    #[arg(short, long = "chord", value_name = "INDEX=CHORD")]
    chords: Vec<String>,

    /// Command script to run, or - for stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Output file, or - for stdout [default: <input>-chords.<ext> next to the input]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the numbered words and exit
    #[arg(long)]
    list_words: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    // Read input file
    let source = match fs::read_to_string(&args.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", args.input.display(), e);
            process::exit(1);
        }
    };

    let mut store = AnnotationStore::new();
    match args.input.file_name().and_then(|name| name.to_str()) {
        Some(name) => store.load_named(name, &source),
        None => store.load_text(&source),
    };

    if args.list_words {
        for word in store.words() {
            println!("{:>4}  {}", word.index, word.text);
        }
        return;
    }

    let script_source = match &args.script {
        Some(path) => match read_script(path) {
            Ok(source) => Some(source),
            Err(e) => {
                eprintln!("Error reading script '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => None,
    };

    let printed = match annotate(&args, script_source.as_deref(), &mut store) {
        Ok(printed) => printed,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    for text in printed {
        println!("{}", text);
    }

    let annotated = match store.serialize() {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // Output
    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input, &store.export_filename()));
    if output_path.as_os_str() == "-" {
        print!("{}", annotated);
        return;
    }
    if let Err(e) = fs::write(&output_path, &annotated) {
        eprintln!("Error writing to '{}': {}", output_path.display(), e);
        process::exit(1);
    }
    eprintln!(
        "Wrote {} chords to {}",
        store.annotations().len(),
        output_path.display()
    );
}

/// Apply key, notation, plan, chords and script in that order. Returns the
/// script's printed output.
fn annotate(
    args: &Args,
    script_source: Option<&str>,
    store: &mut AnnotationStore,
) -> Result<Vec<String>, AnnotatorError> {
    if let Some(key) = &args.key {
        store.set_key(key.parse::<Key>()?);
    }
    if args.sharps {
        store.set_notation(true);
    } else if args.flats {
        store.set_notation(false);
    }

    if let Some(path) = &args.plan {
        AnnotationPlan::from_file(path)?.apply(store)?;
    }

    for assignment in &args.chords {
        let (index, chord) = script::parse_chord_assignment(assignment)?;
        Command::Chord(index, chord).apply(store)?;
    }

    match script_source {
        Some(source) => script::run_script(store, source),
        None => Ok(Vec::new()),
    }
}

fn read_script(path: &Path) -> io::Result<String> {
    if path.as_os_str() == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        fs::read_to_string(path)
    }
}

fn default_output_path(input: &Path, filename: &str) -> PathBuf {
    input
        .parent()
        .map(|dir| dir.join(filename))
        .unwrap_or_else(|| PathBuf::from(filename))
}
