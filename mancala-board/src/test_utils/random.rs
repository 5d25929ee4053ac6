use crate::Game;
use rand::seq::SliceRandom;
use rand::Rng;

/// Play up to `plies` uniformly random moves from the starting position.
/// Stops early if the game finishes.
pub fn random_game<R: Rng + ?Sized>(rng: &mut R, plies: usize) -> Game {
    let mut game = Game::default();

    for _ in 0..plies {
        let moves = game.board.legal_moves(game.active_player);
        let mv = match moves.choose(rng) {
            Some(&mv) if !game.is_finished() => mv,
            _ => break,
        };

        game = match game.apply_move(mv) {
            Ok(next) => next,
            Err(_) => break,
        };
    }

    game
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_games_conserve_stones() {
        let mut rng = StdRng::seed_from_u64(7);
        for plies in 0..40 {
            let game = random_game(&mut rng, plies);
            assert_eq!(game.board.total_stones(), 48);
        }
    }

    #[test]
    fn zero_plies_is_the_start() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(random_game(&mut rng, 0), Game::default());
    }
}
