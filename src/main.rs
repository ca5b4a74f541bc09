use std::collections::HashSet;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use boggle_solver::boggle::board::{BoggleBoard, Tile};
use boggle_solver::boggle::dice::Language;
use boggle_solver::boggle::dictionary::FstDictionary;
use boggle_solver::boggle::search::{PathSearcher, SearchConfig};
use boggle_solver::boggle::MIN_WORD_LEN;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
#[macro_use]
extern crate text_io;

/// Finds every word hidden in a Boggle board
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Word list, one word per line
    #[arg(short = 'w', long)]
    dictionary: PathBuf,

    /// Fixed board layout as a JSON array of rows; a board is rolled when missing
    #[arg(short, long)]
    board: Option<PathBuf>,

    /// Dice used to roll the board
    #[arg(short, long, value_enum, default_value_t = Language::English)]
    language: Language,

    /// Seed for rolling the board
    #[arg(short, long)]
    seed: Option<u64>,

    /// Only list the paths spelling this word
    #[arg(short, long)]
    find: Option<String>,

    /// Keep asking for words to locate on the board
    #[arg(short, long)]
    interactive: bool,

    /// Shortest word to report
    #[arg(long, default_value_t = MIN_WORD_LEN)]
    min_len: usize,

    /// Expand paths on a single thread
    #[arg(long)]
    sequential: bool,

    /// Trust direct dictionary hits without checking completions
    #[arg(long)]
    lenient: bool,

    /// Match one letter of the word per cell when locating a word ("Qu" cells are skipped)
    #[arg(long)]
    letter_by_letter: bool,

    /// Print the board and results as JSON
    #[arg(long)]
    json: bool,

    /// Log every search generation
    #[arg(long)]
    debug: bool,
}

#[derive(Serialize)]
struct WordsReport {
    board: Vec<Vec<Tile>>,
    words: Vec<String>,
}

#[derive(Serialize)]
struct PathsReport {
    board: Vec<Vec<Tile>>,
    word: String,
    paths: Vec<Vec<usize>>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let debug_enabled = cli.debug || std::env::var("BOGGLE_DEBUG").is_ok();
    boggle_solver::log::init_logger(debug_enabled);

    if let Err(e) = try_main(cli) {
        eprintln!("Error: {e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let t_load = Instant::now();
    let dict = FstDictionary::from_file(&cli.dictionary)?;
    log::info!(
        "loaded {} words from {} in {:.3}s",
        dict.len(),
        cli.dictionary.display(),
        t_load.elapsed().as_secs_f64()
    );

    let board = match &cli.board {
        Some(path) => BoggleBoard::from_file(path)?,
        None => {
            let mut rng = match cli.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            log::info!("rolling {:?} dice ({})", cli.language, cli.language.locale());
            cli.language.dice().roll_default(&mut rng)?
        }
    };
    if !cli.json {
        println!("{}", board);
    }

    let config = SearchConfig {
        min_word_len: cli.min_len,
        strict_confirmation: !cli.lenient,
        parallel: !cli.sequential,
        letter_by_letter: cli.letter_by_letter,
    };
    let searcher = PathSearcher::with_config(&board, &dict, config);

    if let Some(word) = &cli.find {
        let paths = searcher.find_paths(word)?;
        if cli.json {
            let report = PathsReport {
                board: board.rows(),
                word: word.clone(),
                paths,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print_paths(&board, word, &paths);
        }
        return Ok(());
    }

    let t_search = Instant::now();
    let words = by_length(searcher.find_all_words()?);
    log::info!("search took {:.3}s", t_search.elapsed().as_secs_f64());
    if cli.json {
        let report = WordsReport {
            board: board.rows(),
            words,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    for word in words.iter() {
        println!("{}", word);
    }

    if cli.interactive {
        loop {
            println!("Word to locate (empty line to quit):");
            let word: String = match try_read!("{}\n") {
                Ok(w) => w,
                Err(_) => break,
            };
            let word = word.trim();
            if word.is_empty() {
                break;
            }
            print_paths(&board, word, &searcher.find_paths(word)?);
        }
    }

    Ok(())
}

/// Longest words first, ties in alphabetical order
fn by_length(words: HashSet<String>) -> Vec<String> {
    let mut words = words.into_iter().collect::<Vec<_>>();
    words.sort_unstable_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    words
}

fn print_paths(board: &BoggleBoard, word: &str, paths: &[Vec<usize>]) {
    if paths.is_empty() {
        println!("{} is not on the board", word);
        return;
    }
    for path in paths {
        let cells = path
            .iter()
            .map(|&i| {
                let pos = board.position(i);
                format!("({},{})", pos.row, pos.col)
            })
            .collect::<Vec<_>>();
        println!("{}: {}", word, cells.join(" -> "));
    }
}
