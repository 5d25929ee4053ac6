//! Fixed-depth minimax search, with and without alpha-beta pruning.
//!
//! Both drivers share the same root: legal moves are tried in board order, the
//! first move reaching the best score keeps it, and every child is searched with
//! a full window. Below the root, players strictly alternate, even after a move
//! that would earn an extra turn.

use crate::{Evaluator, Phase, Position};
use mancala_board::{Move, Player};
use tracing::trace;

/// Bound for scores: every evaluation lies strictly between `-INFINITY` and `INFINITY`.
pub const INFINITY: f64 = f64::INFINITY;

/// The best move found at the root and its value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchResult {
    pub score: f64,
    pub best_move: Move,
}

impl SearchResult {
    /// Returned when the game is already over at the root.
    pub const GAME_OVER: Self = Self {
        score: -1.0,
        best_move: Move::INVALID,
    };

    /// Returns whether a move was found. Check this before playing `best_move`.
    #[inline]
    pub fn has_move(&self) -> bool {
        !self.best_move.is_invalid()
    }
}

/// An (alpha, beta) window, passed down by value so a node's narrowing
/// only reaches its own descendants.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Window {
    alpha: f64,
    beta: f64,
}

impl Window {
    const FULL: Self = Self {
        alpha: -INFINITY,
        beta: INFINITY,
    };
}

/// A search with a fixed evaluator. Counts every node it visits, leaves included.
pub struct Search<'a, E> {
    evaluator: &'a E,
    nodes: u64,
}

impl<'a, E> Search<'a, E> {
    pub fn new(evaluator: &'a E) -> Self {
        Self {
            evaluator,
            nodes: 0,
        }
    }

    /// Nodes visited by every search run so far.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Choose the best move for `player` by plain minimax to depth `ply`.
    pub fn minimax<P>(&mut self, position: &P, player: Player, ply: u32) -> SearchResult
    where
        P: Position,
        E: Evaluator<P>,
    {
        let result = self.root(position, player, ply, |search, next, ply| {
            search.min_value(next, !player, ply, player)
        });
        trace!(nodes = self.nodes, score = result.score, "minimax finished");
        result
    }

    /// Choose the best move for `player` by alpha-beta search to depth `ply`.
    /// Gives the same result as [`Search::minimax`] while visiting fewer nodes.
    pub fn alpha_beta<P>(&mut self, position: &P, player: Player, ply: u32) -> SearchResult
    where
        P: Position,
        E: Evaluator<P>,
    {
        let result = self.root(position, player, ply, |search, next, ply| {
            search.ab_min_value(next, !player, ply, player, Window::FULL)
        });
        trace!(nodes = self.nodes, score = result.score, "alpha-beta finished");
        result
    }

    /// Root loop shared by both drivers. `child_value` scores the position
    /// after one of `player`'s moves, with `ply` plies left.
    fn root<P, F>(&mut self, position: &P, player: Player, ply: u32, mut child_value: F) -> SearchResult
    where
        P: Position,
        E: Evaluator<P>,
        F: FnMut(&mut Self, &P, u32) -> f64,
    {
        self.nodes += 1;

        let mut best = SearchResult {
            score: -INFINITY,
            best_move: Move::INVALID,
        };

        for mv in position.legal_moves(player) {
            // No lookahead: score the current position, paired with the first move.
            if ply == 0 {
                return SearchResult {
                    score: self.evaluator.evaluate(position, player, Phase::Max),
                    best_move: mv,
                };
            }
            if position.is_game_over() {
                return SearchResult::GAME_OVER;
            }

            let next = position.apply_move(player, mv);
            let score = child_value(self, &next, ply - 1);

            // Strictly better only: ties keep the earlier move.
            if score > best.score {
                best = SearchResult {
                    score,
                    best_move: mv,
                };
            }
        }

        if !best.has_move() && position.is_game_over() {
            return SearchResult::GAME_OVER;
        }

        best
    }

    /// Minimax value of a node where `player` moves to maximize `turn`'s score.
    fn max_value<P>(&mut self, position: &P, player: Player, ply: u32, turn: Player) -> f64
    where
        P: Position,
        E: Evaluator<P>,
    {
        self.nodes += 1;
        if ply == 0 || position.is_game_over() {
            return self.evaluator.evaluate(position, turn, Phase::Max);
        }

        let mut score = -INFINITY;
        for mv in position.legal_moves(player) {
            let next = position.apply_move(player, mv);
            score = score.max(self.min_value(&next, !player, ply - 1, turn));
        }
        score
    }

    /// Minimax value of a node where `player` moves to minimize `turn`'s score.
    fn min_value<P>(&mut self, position: &P, player: Player, ply: u32, turn: Player) -> f64
    where
        P: Position,
        E: Evaluator<P>,
    {
        self.nodes += 1;
        if ply == 0 || position.is_game_over() {
            return self.evaluator.evaluate(position, turn, Phase::Min);
        }

        let mut score = INFINITY;
        for mv in position.legal_moves(player) {
            let next = position.apply_move(player, mv);
            score = score.min(self.max_value(&next, !player, ply - 1, turn));
        }
        score
    }

    fn ab_max_value<P>(
        &mut self,
        position: &P,
        player: Player,
        ply: u32,
        turn: Player,
        mut window: Window,
    ) -> f64
    where
        P: Position,
        E: Evaluator<P>,
    {
        self.nodes += 1;
        if ply == 0 || position.is_game_over() {
            return self.evaluator.evaluate(position, turn, Phase::Max);
        }

        let mut score = -INFINITY;
        for mv in position.legal_moves(player) {
            let next = position.apply_move(player, mv);
            score = score.max(self.ab_min_value(&next, !player, ply - 1, turn, window));

            // Fail high: the minimizing parent already has something better.
            if score >= window.beta {
                return score;
            }
            window.alpha = window.alpha.max(score);
        }
        score
    }

    fn ab_min_value<P>(
        &mut self,
        position: &P,
        player: Player,
        ply: u32,
        turn: Player,
        mut window: Window,
    ) -> f64
    where
        P: Position,
        E: Evaluator<P>,
    {
        self.nodes += 1;
        if ply == 0 || position.is_game_over() {
            return self.evaluator.evaluate(position, turn, Phase::Min);
        }

        let mut score = INFINITY;
        for mv in position.legal_moves(player) {
            let next = position.apply_move(player, mv);
            score = score.min(self.ab_max_value(&next, !player, ply - 1, turn, window));

            // Fail low: the maximizing parent already has something better.
            if score <= window.alpha {
                return score;
            }
            window.beta = window.beta.min(score);
        }
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CaptureHeuristic, WinLossEvaluator};
    use mancala_board::Board;

    #[test]
    fn depth_zero_scores_the_root() {
        let board: Board = "4 4 0 5 5 5 1 / 4 4 4 4 4 4 0".parse().unwrap();
        let expected = CaptureHeuristic.evaluate(&board, Player::Two, Phase::Max);

        let mut search = Search::new(&CaptureHeuristic);
        for result in [
            search.minimax(&board, Player::Two, 0),
            search.alpha_beta(&board, Player::Two, 0),
        ]
        .iter()
        {
            assert_eq!(result.score, expected);
            assert_eq!(result.best_move, Move::from_index(0));
        }
        assert_eq!(search.nodes(), 2);
    }

    #[test]
    fn depth_zero_uses_the_first_legal_move() {
        let board: Board = "0 0 3 0 1 0 0 / 4 4 4 4 4 4 0".parse().unwrap();
        let mut search = Search::new(&CaptureHeuristic);
        assert_eq!(search.minimax(&board, Player::One, 0).best_move, Move::from_index(2));
    }

    #[test]
    fn finished_game_returns_the_sentinel() {
        let board: Board = "0 0 0 0 0 0 30 / 0 0 0 0 0 0 18".parse().unwrap();
        let mut search = Search::new(&CaptureHeuristic);
        assert_eq!(search.minimax(&board, Player::One, 3), SearchResult::GAME_OVER);
        assert_eq!(search.alpha_beta(&board, Player::Two, 3), SearchResult::GAME_OVER);
        assert!(!SearchResult::GAME_OVER.has_move());
    }

    #[test]
    fn takes_the_winning_move() {
        // Sowing cup 6 banks the last stone and ends the game 25 to 23.
        let board: Board = "0 0 0 0 0 1 24 / 0 0 0 0 0 1 22".parse().unwrap();
        let mut search = Search::new(&WinLossEvaluator);
        let result = search.minimax(&board, Player::One, 1);
        assert_eq!(result.best_move, Move::from_index(5));
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn drivers_agree_from_the_start() {
        let board = Board::default();
        for ply in 1..5 {
            let mut plain = Search::new(&CaptureHeuristic);
            let mut pruned = Search::new(&CaptureHeuristic);
            let expected = plain.minimax(&board, Player::One, ply);
            let actual = pruned.alpha_beta(&board, Player::One, ply);

            assert_eq!(actual, expected);
            assert!(pruned.nodes() <= plain.nodes());
        }
    }
}
