//! Benchmark command
//!
//! Plays one game per secret, always guessing the top hint, and reports how
//! well the frequency heuristic does.

use crate::core::{MAX_TURNS, Word};
use crate::game::{Dictionary, Game, GameStatus};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    pub hard_mode: bool,
    pub limit: Option<usize>,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            hard_mode: false,
            limit: None,
            show_progress: true,
        }
    }
}

/// Outcome of one auto-played game
#[derive(Debug, Clone)]
pub struct GameOutcome {
    pub secret: String,
    pub guesses: Vec<String>,
    pub status: GameStatus,
}

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub total_games: usize,
    pub won: usize,
    pub average_turns: f64,
    /// `distribution[n - 1]` counts wins in `n` guesses
    pub distribution: [usize; MAX_TURNS],
    pub hardest: Vec<GameOutcome>,
    pub duration: Duration,
}

impl BenchmarkResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.won as f64 / self.total_games as f64 * 100.0
        }
    }
}

/// Auto-play a single game by always taking the best hint
///
/// Stops early if the heuristic has nothing left to suggest.
pub fn play_with_hints<D: Dictionary>(
    dictionary: D,
    corpus: &[Word],
    secret: &Word,
    hard_mode: bool,
) -> GameOutcome {
    let mut game = Game::with_secret(dictionary, corpus, secret.clone());
    game.set_hard_mode(hard_mode);

    while !game.status().is_over() {
        let Some(next) = game.suggest_hints(1).into_iter().next() else {
            break;
        };
        if game.submit_guess(next.text()).is_err() {
            break;
        }
    }

    GameOutcome {
        secret: secret.text().to_string(),
        guesses: game
            .history()
            .iter()
            .map(|(guess, _)| guess.text().to_string())
            .collect(),
        status: game.status(),
    }
}

/// Run the hint heuristic against every secret in parallel
pub fn run_benchmark<D: Dictionary + Sync>(
    dictionary: &D,
    corpus: &[Word],
    secrets: &[Word],
    config: BenchmarkConfig,
) -> BenchmarkResult {
    let secrets = &secrets[..config.limit.unwrap_or(secrets.len()).min(secrets.len())];

    let pb = if config.show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .map_or_else(|_| ProgressStyle::default_bar(), |style| style.progress_chars("█▓▒░")),
    );
    pb.set_message("auto-playing");

    let start = Instant::now();
    let outcomes: Vec<GameOutcome> = secrets
        .par_iter()
        .map(|secret| {
            let outcome = play_with_hints(dictionary, corpus, secret, config.hard_mode);
            pb.inc(1);
            outcome
        })
        .collect();
    pb.finish_with_message("done");

    summarize(outcomes, start.elapsed())
}

fn summarize(outcomes: Vec<GameOutcome>, duration: Duration) -> BenchmarkResult {
    let mut distribution = [0usize; MAX_TURNS];
    let mut won = 0;
    let mut turns_used = 0;

    for outcome in &outcomes {
        turns_used += outcome.guesses.len();
        if outcome.status == GameStatus::Won {
            won += 1;
            distribution[outcome.guesses.len() - 1] += 1;
        }
    }

    let total_games = outcomes.len();
    let mut hardest: Vec<GameOutcome> = outcomes
        .into_iter()
        .filter(|outcome| outcome.status != GameStatus::Won)
        .collect();
    hardest.truncate(10);

    BenchmarkResult {
        total_games,
        won,
        average_turns: if total_games == 0 {
            0.0
        } else {
            turns_used as f64 / total_games as f64
        },
        distribution,
        hardest,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::WordList;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    fn quiet() -> BenchmarkConfig {
        BenchmarkConfig {
            show_progress: false,
            ..BenchmarkConfig::default()
        }
    }

    #[test]
    fn auto_play_finds_word_in_tiny_corpus() {
        let corpus = words_from_slice(&["crane", "slate", "stare"]);
        let dict = WordList::new(corpus.clone()).unwrap();
        let outcome = play_with_hints(&dict, &corpus, &corpus[2], false);
        assert_eq!(outcome.status, GameStatus::Won);
        assert_eq!(outcome.guesses.last().map(String::as_str), Some("stare"));
    }

    #[test]
    fn auto_play_never_exceeds_turn_limit() {
        let corpus = words_from_slice(WORDS);
        let dict = WordList::new(corpus.clone()).unwrap();
        for secret in corpus.iter().take(20) {
            let outcome = play_with_hints(&dict, &corpus, secret, true);
            assert!(outcome.guesses.len() <= MAX_TURNS);
            assert!(outcome.status.is_over());
        }
    }

    #[test]
    fn benchmark_distribution_sums_to_wins() {
        let corpus = words_from_slice(WORDS);
        let dict = WordList::new(corpus.clone()).unwrap();
        let config = BenchmarkConfig {
            limit: Some(25),
            ..quiet()
        };
        let result = run_benchmark(&dict, &corpus, &corpus, config);

        assert_eq!(result.total_games, 25);
        assert_eq!(result.distribution.iter().sum::<usize>(), result.won);
        assert!(result.average_turns >= 1.0);
        assert!(result.average_turns <= MAX_TURNS as f64);
    }

    #[test]
    fn benchmark_empty_secret_list() {
        let corpus = words_from_slice(WORDS);
        let dict = WordList::new(corpus.clone()).unwrap();
        let result = run_benchmark(&dict, &corpus, &[], quiet());

        assert_eq!(result.total_games, 0);
        assert!(result.win_rate().abs() < f64::EPSILON);
    }
}
