//! Application state and logic.

use crate::game::{Game, Player, Position};
use crossterm::event::KeyCode;
use tracing::{debug, info};

use super::input::move_cursor;
use super::mode::GameMode;
use super::score::ScoreBoard;

/// Main application state.
///
/// Owns the one game engine instance; every mutation goes through
/// [`App::handle_key`] or [`App::computer_move`].
pub struct App {
    game: Game,
    mode: GameMode,
    cursor: Position,
    scores: ScoreBoard,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application in the given mode.
    pub fn new(mode: GameMode) -> Self {
        Self {
            game: Game::new(),
            mode,
            cursor: Position::Center,
            scores: ScoreBoard::new(),
            status_message: format!("Turn: {}", Player::X),
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the current mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the session scores.
    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('m') => {
                self.mode = self.mode.toggled();
                info!(mode = self.mode.name(), "Mode changed");
                self.restart_round();
            }
            KeyCode::Char('r') => self.restart_round(),
            KeyCode::Char('s') => {
                self.scores.reset();
                self.restart_round();
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.try_move(self.cursor),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = c
                    .to_digit(10)
                    .and_then(|d| (d as usize).checked_sub(1))
                    .and_then(Position::from_index)
                {
                    self.try_move(pos);
                }
            }
            _ => {}
        }
    }

    /// True when it is the computer's turn to act.
    pub fn computer_to_move(&self) -> bool {
        self.mode == GameMode::VsComputer
            && !self.game.is_over()
            && self.game.current_player() == Player::O
    }

    /// Computes and plays the computer's move.
    pub fn computer_move(&mut self) {
        if let Some(pos) = self.game.best_move() {
            self.place(pos);
        }
    }

    /// Attempts a human move at the given position.
    fn try_move(&mut self, pos: Position) {
        if self.computer_to_move() {
            debug!(?pos, "Ignoring input during the computer's turn");
            return;
        }
        self.place(pos);
    }

    fn place(&mut self, pos: Position) {
        let player = self.game.current_player();
        match self.game.apply_move(pos) {
            Ok(()) => {
                debug!(%player, %pos, "Move applied");
                if self.game.is_over() {
                    self.finish_round();
                } else {
                    self.status_message =
                        format!("Turn: {}", self.game.current_player());
                }
            }
            Err(e) => {
                // The board disables nothing; illegal attempts are expected.
                debug!(%e, %pos, "Move rejected");
            }
        }
    }

    /// Records the concluded round on the tally, exactly once.
    ///
    /// Runs only from the concluding `apply_move`; once the round is
    /// over every further move is rejected before reaching here.
    fn finish_round(&mut self) {
        let outcome = self.game.outcome();
        self.scores.record(outcome);
        info!(%outcome, "Round over");
        self.status_message = match outcome.winner() {
            Some(player) => format!("Round over — {player} wins"),
            None => "Round over — Draw".to_string(),
        };
    }

    /// Restarts the round, keeping the tally.
    fn restart_round(&mut self) {
        debug!("Restarting round");
        self.game.reset();
        self.cursor = Position::Center;
        self.status_message = format!("Turn: {}", Player::X);
    }
}
