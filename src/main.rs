//! Hardword - CLI
//!
//! Five-letter word guessing game with TUI and CLI modes, hard mode, and hints.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use hardword::{
    commands::{
        BenchmarkConfig, HintConfig, check_guess, run_benchmark, run_simple, suggest_hints,
    },
    core::Word,
    game::{AllowListDictionary, DictionaryKind, Game, OpenDictionary, WordList},
    output::{print_benchmark_result, print_check_result, print_hint_result},
    solver::DEFAULT_HINT_COUNT,
    wordlists::{
        WORDS,
        loader::{load_allow_list, load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "hardword",
    about = "Five-letter word guessing game with hard mode and frequency-based hints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Guess validation: 'curated' (default), 'open' (any five letters), or path to an allow-list
    #[arg(short, long, global = true, default_value = "curated")]
    dictionary: String,

    /// Play in hard mode (revealed hints must be reused)
    #[arg(long, global = true)]
    hard: bool,

    /// Secret and hint corpus: 'builtin' (default) or path to file
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Simple CLI game without the TUI
    Simple,

    /// Suggest next guesses for a history
    Hint {
        /// Guesses as WORD=FEEDBACK (e.g. slate=G-GYG), or bare words with --secret
        entries: Vec<String>,

        /// Score bare guesses against this secret
        #[arg(short, long)]
        secret: Option<String>,

        /// Number of suggestions
        #[arg(short = 'n', long, default_value_t = DEFAULT_HINT_COUNT)]
        count: usize,
    },

    /// Show the feedback a guess gets against a secret
    Check {
        /// The guess
        guess: String,

        /// The secret
        secret: String,
    },

    /// Auto-play the hint heuristic against every corpus word
    Benchmark {
        /// Limit number of secrets to play
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

/// Load the secret/hint corpus based on the -w flag
fn load_corpus(wordlist_mode: &str) -> Result<Vec<Word>> {
    let corpus = match wordlist_mode {
        "builtin" => words_from_slice(WORDS),
        path => load_from_file(path)?,
    };
    if corpus.is_empty() {
        bail!("Word list '{wordlist_mode}' contains no five-letter words");
    }
    Ok(corpus)
}

/// Build the validation policy based on the -d flag
///
/// Allow-lists always accept the corpus too, so every secret stays guessable.
fn build_dictionary(dictionary_mode: &str, corpus: &[Word]) -> Result<DictionaryKind> {
    let base = WordList::new(corpus.to_vec())?;
    let dictionary = match dictionary_mode {
        "curated" => DictionaryKind::Curated(base),
        "open" => DictionaryKind::Open(OpenDictionary::new(base)),
        path => {
            let allowed = load_allow_list(path)?;
            DictionaryKind::AllowList(AllowListDictionary::new(
                base,
                allowed.into_iter().chain(corpus.iter().cloned()),
            )?)
        }
    };
    Ok(dictionary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let corpus = load_corpus(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli.dictionary, cli.hard, &corpus),
        Commands::Simple => run_simple_command(&cli.dictionary, cli.hard, &corpus),
        Commands::Hint {
            entries,
            secret,
            count,
        } => run_hint_command(entries, secret, count, &corpus),
        Commands::Check { guess, secret } => run_check_command(&guess, &secret),
        Commands::Benchmark { limit } => {
            run_benchmark_command(&cli.dictionary, cli.hard, limit, &corpus)
        }
    }
}

fn new_game<'a>(
    dictionary_mode: &str,
    hard: bool,
    corpus: &'a [Word],
) -> Result<Game<'a, DictionaryKind>> {
    let dictionary = build_dictionary(dictionary_mode, corpus)?;
    let mut game = Game::new(dictionary, corpus);
    game.set_hard_mode(hard);
    Ok(game)
}

fn run_play_command(dictionary_mode: &str, hard: bool, corpus: &[Word]) -> Result<()> {
    use hardword::interactive::{App, run_tui};

    let app = App::new(new_game(dictionary_mode, hard, corpus)?);
    run_tui(app)
}

fn run_simple_command(dictionary_mode: &str, hard: bool, corpus: &[Word]) -> Result<()> {
    let game = new_game(dictionary_mode, hard, corpus)?;
    run_simple(game).map_err(|e| anyhow::anyhow!(e))
}

fn run_hint_command(
    entries: Vec<String>,
    secret: Option<String>,
    count: usize,
    corpus: &[Word],
) -> Result<()> {
    let config = HintConfig {
        entries,
        secret,
        count,
    };
    let result = suggest_hints(&config, corpus).map_err(|e| anyhow::anyhow!(e))?;
    print_hint_result(&result);
    Ok(())
}

fn run_check_command(guess: &str, secret: &str) -> Result<()> {
    let result = check_guess(guess, secret).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result);
    Ok(())
}

fn run_benchmark_command(
    dictionary_mode: &str,
    hard: bool,
    limit: Option<usize>,
    corpus: &[Word],
) -> Result<()> {
    let dictionary = build_dictionary(dictionary_mode, corpus)?;
    let games = limit.unwrap_or(corpus.len()).min(corpus.len());

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "Hint Heuristic Benchmark".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!("\nAuto-playing {games} secrets with the {} dictionary", dictionary.name());
    if hard {
        println!("Hard mode: on");
    }
    println!();

    let config = BenchmarkConfig {
        hard_mode: hard,
        limit,
        ..BenchmarkConfig::default()
    };
    let result = run_benchmark(&dictionary, corpus, corpus, config);
    print_benchmark_result(&result);
    Ok(())
}
