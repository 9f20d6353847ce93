//! Session score tally.

use crate::game::{Outcome, Player};

/// Wins and draws for the current session. Not persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl ScoreBoard {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a concluded round. Ignores an in-progress outcome.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won(Player::X) => self.x_wins += 1,
            Outcome::Won(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }

    /// Zeroes the tally.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Wins for X.
    pub fn x_wins(&self) -> u32 {
        self.x_wins
    }

    /// Wins for O.
    pub fn o_wins(&self) -> u32 {
        self.o_wins
    }

    /// Drawn rounds.
    pub fn draws(&self) -> u32 {
        self.draws
    }
}

impl std::fmt::Display for ScoreBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X: {}   O: {}   Draws: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_each_outcome() {
        let mut scores = ScoreBoard::new();
        scores.record(Outcome::Won(Player::X));
        scores.record(Outcome::Won(Player::O));
        scores.record(Outcome::Won(Player::O));
        scores.record(Outcome::Draw);
        scores.record(Outcome::InProgress);

        assert_eq!(scores.x_wins(), 1);
        assert_eq!(scores.o_wins(), 2);
        assert_eq!(scores.draws(), 1);
    }

    #[test]
    fn test_reset() {
        let mut scores = ScoreBoard::new();
        scores.record(Outcome::Draw);
        scores.reset();
        assert_eq!(scores, ScoreBoard::new());
    }
}
