//! Win/loss statistics across finished games

use super::GameStatus;
use crate::core::MAX_TURNS;

/// Running totals for a session
///
/// `guess_distribution[n - 1]` counts wins in `n` guesses.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games: usize,
    pub wins: usize,
    pub guess_distribution: [usize; MAX_TURNS],
}

impl Statistics {
    /// Record one finished game; in-progress games are ignored
    pub fn record_game(&mut self, status: GameStatus, turns: usize) {
        match status {
            GameStatus::InProgress => {}
            GameStatus::Lost => self.games += 1,
            GameStatus::Won => {
                self.games += 1;
                self.wins += 1;
                if (1..=MAX_TURNS).contains(&turns) {
                    self.guess_distribution[turns - 1] += 1;
                }
            }
        }
    }

    #[must_use]
    pub const fn losses(&self) -> usize {
        self.games - self.wins
    }

    #[must_use]
    pub fn win_percentage(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64 * 100.0
        }
    }
}
