//! The mutable game engine.

use super::rules;
use super::types::{Board, Outcome, Player, Square};
use super::{search, Position};
use tracing::instrument;

/// Error that can occur when applying a move.
///
/// A rejected move never mutates state; callers check and ignore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The round is already over.
    #[display("Round is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Tic-tac-toe game engine.
///
/// Holds the board, whose turn it is, and whether the round has
/// concluded. Mutated only through [`Game::apply_move`] and
/// [`Game::reset`]; the outcome is always derived from the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current_player: Player,
    game_over: bool,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            game_over: false,
        }
    }

    /// Reinitializes to the starting state, discarding the prior round.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    ///
    /// After a concluding move this stays on the player who made it.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns true once the round has concluded.
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Evaluates the outcome from the board contents.
    pub fn outcome(&self) -> Outcome {
        rules::outcome(&self.board)
    }

    /// Empty positions, in ascending index order.
    pub fn available_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Places the current player's mark at the given position.
    ///
    /// Rejects the move without mutating anything when the round is
    /// over or the square is occupied. On success, either concludes the
    /// round (win or full board) or passes the turn to the opponent.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.game_over {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(self.current_player));

        if rules::outcome(&self.board).is_terminal() {
            self.game_over = true;
        } else {
            self.current_player = self.current_player.opponent();
        }

        Ok(())
    }

    /// Computes the optimal next move for O. `None` on a full board.
    pub fn best_move(&self) -> Option<Position> {
        search::best_move(&self.board)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
