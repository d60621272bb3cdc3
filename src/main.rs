use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::{rngs::StdRng, Rng, SeedableRng};

use word_hunt::puzzle::DEFAULT_MAX_ATTEMPTS;
use word_hunt::{GestureOutcome, Puzzle, PuzzleConfig, Session};

/// Word-search puzzle generator and terminal player.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of grid rows
    #[arg(long, default_value_t = 15)]
    rows: usize,

    /// Number of grid columns
    #[arg(long, default_value_t = 15)]
    cols: usize,

    /// Seed to regenerate a specific puzzle
    #[arg(long)]
    seed: Option<u64>,

    /// File with one word per line; a built-in list is used when omitted
    #[arg(long)]
    words: Option<PathBuf>,

    /// Print the placement key (origin and direction of every word)
    #[arg(long)]
    key: bool,

    /// Play interactively on stdin instead of just printing the grid
    #[arg(long)]
    play: bool,
}

const DEFAULT_WORDS: &[&str] = &[
    "MOTHER",
    "LOVE",
    "LAWYER",
    "BABA",
    "GARDEN",
    "LOYAL",
    "FAMILY",
    "FRIENDSHIP",
    "PASSIONATE",
    "ROSEMARY",
];

fn main() -> ExitCode {
    init_logger();

    if let Err(e) = try_main() {
        eprintln!("Error: {e:#}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn init_logger() {
    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, log::LevelFilter::Info)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    builder.init();
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();

    let words = match &cli.words {
        Some(path) => read_words(path)?,
        None => DEFAULT_WORDS.iter().map(|word| word.to_string()).collect(),
    };

    let seed = cli.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = StdRng::seed_from_u64(seed);

    let puzzle = Puzzle::generate(
        &PuzzleConfig {
            num_rows: cli.rows,
            num_columns: cli.cols,
            words: &words,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        },
        &mut rng,
    )
    .context("generating puzzle")?;

    println!("{puzzle}");
    eprintln!("Seed: {seed}");

    if cli.key {
        println!();
        for placement in puzzle.placements() {
            let (row, column) = placement.origin();
            println!(
                "{}: (row {}, col {}, {:?})",
                placement.word(),
                row + 1,
                column + 1,
                placement.direction()
            );
        }
    }

    if cli.play {
        play(Session::new(puzzle))?;
    }

    Ok(())
}

fn read_words(path: &Path) -> Result<Vec<String>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    let words: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if words.is_empty() {
        bail!("no words in {}", path.display());
    }

    Ok(words)
}

fn play(mut session: Session) -> Result<()> {
    println!("Select a word as: start_row start_col end_row end_col (1-based). 'q' quits.");

    let total = session.puzzle().words().len();
    let stdin = io::stdin();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "q" {
            break;
        }

        let numbers: Vec<usize> = line
            .split_whitespace()
            .filter_map(|token| token.parse().ok())
            .collect();
        let &[start_row, start_col, end_row, end_col] = numbers.as_slice() else {
            println!("expected four numbers, e.g. '3 1 3 6'");
            continue;
        };
        if start_row == 0 || start_col == 0 || end_row == 0 || end_col == 0 {
            println!("coordinates are 1-based");
            continue;
        }

        if let Err(e) = session.begin_gesture((start_row - 1, start_col - 1)) {
            println!("{e}");
            continue;
        }

        match session.end_gesture((end_row - 1, end_col - 1)) {
            Err(e) => println!("{e}"),
            Ok(GestureOutcome::Ignored) => {}
            Ok(GestureOutcome::NoLine) => println!("not a straight line"),
            Ok(GestureOutcome::NoMatch { .. }) => println!("nothing there"),
            Ok(GestureOutcome::Matched { word, .. }) => {
                println!(
                    "found {word}! {} to go",
                    total - session.found_words().len()
                );
            }
            Ok(GestureOutcome::Won { word, .. }) => {
                println!("found {word}! You found all the words!");
                break;
            }
        }
    }

    Ok(())
}
