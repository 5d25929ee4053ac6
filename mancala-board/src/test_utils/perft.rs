//! "Perft" performance test: count the number of leaves at a given depth.
//! Extra turns count as separate plies, so a player may move twice in a row.

use crate::Game;

pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Game::default(), depth)
}

fn leaves_below(game: Game, depth: u64) -> u64 {
    // Leaf node for this depth, or the game is over
    if depth == 0 || game.is_finished() {
        return 1;
    }

    game.board
        .legal_moves(game.active_player)
        .into_iter()
        .map(|mv| {
            let (board, extra_turn) = game.board.make_move(game.active_player, mv);
            let next_player = if extra_turn {
                game.active_player
            } else {
                !game.active_player
            };
            leaves_below(Game::new(board, next_player), depth - 1)
        })
        .sum()
}

#[test]
fn perft_00() {
    assert_eq!(run_perft(0), 1);
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 6);
}

// Sowing cup 3 from the start lands in the store and plays again.
#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 35);
}
