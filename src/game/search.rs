//! Exhaustive minimax move selection for the computer player.
//!
//! O maximizes and X minimizes a shared score: +1 for an O win, -1 for
//! an X win, 0 for a draw, at any depth. There is no depth discount,
//! so among several winning lines the search may pick a slower one;
//! that matches the reference behavior and is not a bug.

use super::rules;
use super::types::{Board, Outcome, Player, Square};
use super::Position;
use tracing::{debug, instrument};

/// Terminal score from O's point of view, `None` while undecided.
fn terminal_score(outcome: Outcome) -> Option<i32> {
    match outcome {
        Outcome::Won(Player::O) => Some(1),
        Outcome::Won(Player::X) => Some(-1),
        Outcome::Draw => Some(0),
        Outcome::InProgress => None,
    }
}

/// Scores the board with `to_move` next to act.
///
/// Every tentative placement is reverted before returning, at every
/// level, so the caller's board is unchanged when control comes back.
fn minimax(board: &mut Board, to_move: Player) -> i32 {
    if let Some(score) = terminal_score(rules::outcome(board)) {
        return score;
    }

    let mut best = match to_move {
        Player::O => i32::MIN,
        Player::X => i32::MAX,
    };
    for pos in Position::valid_moves(board) {
        board.set(pos, Square::Occupied(to_move));
        let score = minimax(board, to_move.opponent());
        board.set(pos, Square::Empty);
        best = match to_move {
            Player::O => best.max(score),
            Player::X => best.min(score),
        };
    }
    best
}

/// Computes the optimal move for O on the given board.
///
/// Candidates are tried in ascending index order and only a strictly
/// greater score replaces the current best, so ties resolve to the
/// lowest index. Returns `None` when no square is empty.
#[instrument(skip(board))]
pub fn best_move(board: &Board) -> Option<Position> {
    let mut scratch = board.clone();
    let mut best_score = i32::MIN;
    let mut best_pos = None;

    for pos in Position::valid_moves(board) {
        scratch.set(pos, Square::Occupied(Player::O));
        let score = minimax(&mut scratch, Player::X);
        scratch.set(pos, Square::Empty);
        if score > best_score {
            best_score = score;
            best_pos = Some(pos);
        }
    }

    debug!(?best_pos, best_score, "Search complete");
    best_pos
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(xs: &[usize], os: &[usize]) -> Board {
        let mut board = Board::new();
        for &i in xs {
            board.set(
                Position::from_index(i).unwrap(),
                Square::Occupied(Player::X),
            );
        }
        for &i in os {
            board.set(
                Position::from_index(i).unwrap(),
                Square::Occupied(Player::O),
            );
        }
        board
    }

    #[test]
    fn test_empty_board_returns_some_move() {
        let board = Board::new();
        let pos = best_move(&board).expect("move on empty board");
        assert!(pos.to_index() < 9);
    }

    #[test]
    fn test_full_board_returns_none() {
        let board = board_from(&[0, 2, 4, 5, 7], &[1, 3, 6, 8]);
        assert_eq!(best_move(&board), None);
    }

    #[test]
    fn test_blocks_immediate_threat() {
        // X threatens the top row. Index 2 both blocks it and keeps a
        // forced win alive, and it precedes O's own row-completion at
        // index 5, so the lowest-index tie-break lands on the block.
        let board = board_from(&[0, 1], &[3, 4]);
        assert_eq!(best_move(&board), Some(Position::TopRight));
    }

    #[test]
    fn test_takes_immediate_win() {
        // Index 8 completes O's diagonal; every other candidate hands
        // X the same square and the game.
        let board = board_from(&[1, 2, 5], &[0, 4]);
        assert_eq!(best_move(&board), Some(Position::BottomRight));
    }

    #[test]
    fn test_search_leaves_board_unchanged() {
        let board = board_from(&[4], &[]);
        let snapshot = board.clone();
        let _ = best_move(&board);
        assert_eq!(board, snapshot);
    }
}
