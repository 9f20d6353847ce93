//! Optimality properties of the computer player.
//!
//! These sweep every legal X strategy against O responding with
//! `best_move` and assert O never loses. The tree is small (X picks at
//! most 9 * 7 * 5 * 3 positions across a game), so the sweep is exact,
//! not sampled.

use xo_tui::game::{Game, Outcome, Player, Position};

fn pos(index: usize) -> Position {
    Position::from_index(index).expect("index in range")
}

/// Plays out every X continuation from `game`, with O answering
/// optimally. Returns the number of concluded games; panics if any of
/// them ends in an X win.
fn assert_o_never_loses(game: &Game) -> u32 {
    if game.is_over() {
        assert_ne!(
            game.outcome(),
            Outcome::Won(Player::X),
            "optimal O lost: {}",
            game.board().display()
        );
        return 1;
    }

    match game.current_player() {
        Player::X => game
            .available_moves()
            .into_iter()
            .map(|x_move| {
                let mut next = game.clone();
                next.apply_move(x_move).expect("empty square");
                assert_o_never_loses(&next)
            })
            .sum(),
        Player::O => {
            let reply = game.best_move().expect("game not over, moves remain");
            let mut next = game.clone();
            next.apply_move(reply).expect("search picked an empty square");
            assert_o_never_loses(&next)
        }
    }
}

#[test]
fn test_best_move_on_empty_board_is_valid() {
    let game = Game::new();
    let choice = game.best_move().expect("empty board has moves");
    assert!(game.available_moves().contains(&choice));
}

#[test]
fn test_best_move_on_full_board_is_none() {
    let mut game = Game::new();
    // Draw: X 0, O 4, X 2, O 1, X 3, O 5, X 7, O 6, X 8.
    for &i in &[0, 4, 2, 1, 3, 5, 7, 6, 8] {
        game.apply_move(pos(i)).unwrap();
    }
    assert_eq!(game.outcome(), Outcome::Draw);
    assert_eq!(game.best_move(), None);
}

#[test]
fn test_forced_block() {
    // X X . / O O . / . . .: the search answers for O at index 2,
    // covering X's top-row threat.
    let mut game = Game::new();
    for &i in &[0, 3, 1, 4] {
        game.apply_move(pos(i)).unwrap();
    }
    assert_eq!(game.best_move(), Some(pos(2)));
}

#[test]
fn test_o_never_loses_from_empty_board() {
    let games = assert_o_never_loses(&Game::new());
    assert!(games > 0);
}

#[test]
fn test_o_never_loses_after_edge_opening() {
    // X deviating to the edge at index 1 must never beat optimal O.
    let mut game = Game::new();
    game.apply_move(pos(1)).unwrap();
    assert_o_never_loses(&game);
}
