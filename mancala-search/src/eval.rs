//! Static evaluation of positions.
//!
//! Scores are always from the point of view of a fixed player, `turn`: higher is
//! better for `turn` no matter who is moving at the evaluated node.

use crate::Position;
use mancala_board::Player;

/// Bonus for banking a majority of the stones, and again for an outright win.
pub const WIN_BONUS: f64 = 1000.0;

/// Which side of the search asked for an evaluation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    /// Resolving a choice for the player being optimized for.
    Max,
    /// Resolving a choice for their opponent.
    Min,
}

/// Scores a position for `turn`.
pub trait Evaluator<P: Position> {
    fn evaluate(&self, position: &P, turn: Player, phase: Phase) -> f64;
}

/// The baseline scorer: 100 for a win, 0 for a loss, 50 otherwise.
#[derive(Clone, Copy, Debug, Default)]
pub struct WinLossEvaluator;

impl<P: Position> Evaluator<P> for WinLossEvaluator {
    fn evaluate(&self, position: &P, turn: Player, _phase: Phase) -> f64 {
        if position.has_won(turn) {
            100.0
        } else if position.has_won(!turn) {
            0.0
        } else {
            50.0
        }
    }
}

/// Material plus capture threats, with wins and majorities dominating.
///
/// In order, later terms overriding earlier ones:
///
///  1. Capture setups. Under [`Phase::Min`], every empty cup of `turn` facing a
///     non-empty cup is credited with the facing stones plus one, once for each
///     earlier cup `y` of `turn` holding exactly `x - y` stones. Under
///     [`Phase::Max`] the same check runs on the opponent's cups and is debited.
///  2. Store difference, `turn` minus opponent.
///  3. [`WIN_BONUS`] if `turn` has banked more than half of all stones.
///  4. [`WIN_BONUS`] again if `turn` has won.
///  5. Zero, discarding everything above, if the opponent has won or has banked
///     more than half of all stones.
#[derive(Clone, Copy, Debug, Default)]
pub struct CaptureHeuristic;

impl CaptureHeuristic {
    /// Stones on offer from `empty_side`'s empty cups that `empty_side` can reach.
    /// The reach check is `cups[y] + y == x`, counted once per matching `y`.
    fn capture_setups(empty_side: &[u8], facing_side: &[u8]) -> f64 {
        let mut total = 0.0;

        let facing_cups = facing_side.iter().rev();
        for (x, (&stones, &facing)) in empty_side.iter().zip(facing_cups).enumerate() {
            if stones != 0 || facing == 0 {
                continue;
            }

            let reaching = empty_side[..x]
                .iter()
                .enumerate()
                .filter(|&(y, &sown)| sown as usize + y == x)
                .count();
            total += reaching as f64 * (facing as f64 + 1.0);
        }

        total
    }
}

impl<P: Position> Evaluator<P> for CaptureHeuristic {
    fn evaluate(&self, position: &P, turn: Player, phase: Phase) -> f64 {
        let mine = position.cups(turn);
        let theirs = position.cups(!turn);

        let mut score = match phase {
            Phase::Min => Self::capture_setups(mine, theirs),
            Phase::Max => -Self::capture_setups(theirs, mine),
        };

        let my_store = position.store(turn);
        let their_store = position.store(!turn);
        let majority = position.total_stones() / 2;

        score += my_store as f64 - their_store as f64;
        if my_store > majority {
            score += WIN_BONUS;
        }
        if position.has_won(turn) {
            score += WIN_BONUS;
        }
        if position.has_won(!turn) || their_store > majority {
            score = 0.0;
        }

        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mancala_board::Board;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn heuristic(b: &Board, turn: Player, phase: Phase) -> f64 {
        CaptureHeuristic.evaluate(b, turn, phase)
    }

    #[test]
    fn start_is_even() {
        let start = Board::default();
        assert_eq!(heuristic(&start, Player::One, Phase::Max), 0.0);
        assert_eq!(heuristic(&start, Player::One, Phase::Min), 0.0);
        assert_eq!(WinLossEvaluator.evaluate(&start, Player::One, Phase::Max), 50.0);
    }

    #[test]
    fn store_difference() {
        let b = board("4 4 4 4 4 4 5 / 4 4 4 4 4 1 2");
        assert_eq!(heuristic(&b, Player::One, Phase::Max), 3.0);
        assert_eq!(heuristic(&b, Player::Two, Phase::Max), -3.0);
    }

    #[test]
    fn capture_setup_credited_in_min_phase() {
        // Cup 0 holds 2 and reaches empty cup 2, which faces 5 stones in cup 3.
        let b = board("2 2 0 1 1 1 0 / 1 1 1 5 1 1 0");
        assert_eq!(heuristic(&b, Player::One, Phase::Min), 6.0);
        assert_eq!(heuristic(&b, Player::One, Phase::Max), 0.0);
        // The same threat, seen by player two, is a debit.
        assert_eq!(heuristic(&b, Player::Two, Phase::Max), -6.0);
    }

    #[test]
    fn capture_setup_debited_in_max_phase() {
        let b = board("1 1 1 5 1 1 0 / 2 2 0 1 1 1 0");
        assert_eq!(heuristic(&b, Player::One, Phase::Max), -6.0);
        assert_eq!(heuristic(&b, Player::One, Phase::Min), 0.0);
    }

    #[test]
    fn every_reaching_cup_counts() {
        // Cups 0 and 1 both reach empty cup 3, facing 2 stones in cup 2.
        let b = board("3 2 2 0 1 1 0 / 1 1 2 1 1 1 0");
        assert_eq!(heuristic(&b, Player::One, Phase::Min), 6.0);
    }

    #[test]
    fn majority_earns_the_bonus() {
        let b = board("1 0 0 0 0 0 25 / 1 0 0 0 0 0 21");
        assert_eq!(heuristic(&b, Player::One, Phase::Max), 4.0 + WIN_BONUS);
    }

    #[test]
    fn win_stacks_with_majority() {
        let b = board("0 0 0 0 0 0 30 / 0 0 0 0 0 0 18");
        assert_eq!(heuristic(&b, Player::One, Phase::Max), 12.0 + 2.0 * WIN_BONUS);
        assert_eq!(WinLossEvaluator.evaluate(&b, Player::One, Phase::Max), 100.0);
        assert_eq!(WinLossEvaluator.evaluate(&b, Player::Two, Phase::Max), 0.0);
    }

    #[test]
    fn opponent_majority_zeroes_everything() {
        let b = board("2 1 0 1 1 1 0 / 1 1 1 5 1 1 25");
        assert_eq!(heuristic(&b, Player::One, Phase::Min), 0.0);
        assert_eq!(heuristic(&b, Player::One, Phase::Max), 0.0);
    }

    #[test]
    fn opponent_win_zeroes_everything() {
        let b = board("0 0 0 0 0 0 23 / 0 0 0 0 0 0 25");
        assert_eq!(heuristic(&b, Player::One, Phase::Max), 0.0);
        assert_eq!(heuristic(&b, Player::Two, Phase::Max), 2.0 + 2.0 * WIN_BONUS);
    }

    #[test]
    fn win_without_majority() {
        // Over before the sweep: player two leads 12 to 10 with 32 stones in play.
        let b = board("0 0 0 0 0 0 10 / 5 5 0 0 0 0 12");
        assert!(b.has_won(Player::Two));
        assert_eq!(heuristic(&b, Player::One, Phase::Max), 0.0);
        assert_eq!(heuristic(&b, Player::One, Phase::Min), 0.0);
        assert_eq!(heuristic(&b, Player::Two, Phase::Max), 2.0 + WIN_BONUS);
    }

    #[test]
    fn majority_scales_with_stones_per_cup() {
        // 36 stones in play: more than 18 banked is a majority.
        let b = board("1 0 0 0 0 0 19 / 1 0 0 0 0 0 15");
        assert_eq!(b.total_stones(), 36);
        assert_eq!(heuristic(&b, Player::One, Phase::Max), 4.0 + WIN_BONUS);
        assert_eq!(heuristic(&b, Player::Two, Phase::Max), 0.0);
    }
}
