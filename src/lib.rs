//! XO - styled terminal tic-tac-toe.
//!
//! The game engine lives in [`game`]: board model, rules, and the
//! exhaustive minimax search behind the computer opponent. The
//! presentation layer in [`tui`] owns one engine instance and renders
//! it with ratatui.
//!
//! # Example
//!
//! ```
//! use xo_tui::game::{Game, Outcome, Position};
//!
//! let mut game = Game::new();
//! game.apply_move(Position::Center)?;
//! assert_eq!(game.outcome(), Outcome::InProgress);
//!
//! // The computer plays O.
//! let reply = game.best_move().expect("board not full");
//! game.apply_move(reply)?;
//! # Ok::<(), xo_tui::game::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod game;
pub mod tui;
