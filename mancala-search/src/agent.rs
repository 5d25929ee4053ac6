//! A computer player: who it plays, how deep it looks and how it searches.

use crate::{Evaluator, Position, Search, SearchResult};
use mancala_board::{Move, Player};
use tracing::debug;

/// Value credited to a move that earns an extra turn, on top of the searched score.
pub const EXTRA_TURN_BONUS: f64 = 2.0;

/// How an [`Agent`] picks its moves.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Strategy {
    /// Plain minimax.
    Minimax,
    /// Alpha-beta search.
    AlphaBeta,
    /// Alpha-beta search, then a second look at every move that earns an extra turn.
    Custom,
}

#[derive(Clone, Debug)]
pub struct Agent<E> {
    player: Player,
    strategy: Strategy,
    ply: u32,
    evaluator: E,
    extra_turn_bonus: f64,
}

impl<E> Agent<E> {
    pub fn new(player: Player, strategy: Strategy, ply: u32, evaluator: E) -> Self {
        Self {
            player,
            strategy,
            ply,
            evaluator,
            extra_turn_bonus: EXTRA_TURN_BONUS,
        }
    }

    /// Override [`EXTRA_TURN_BONUS`] for the [`Strategy::Custom`] refinement.
    pub fn with_extra_turn_bonus(mut self, bonus: f64) -> Self {
        self.extra_turn_bonus = bonus;
        self
    }

    /// The same agent playing the other side.
    pub fn opponent(&self) -> Self
    where
        E: Clone,
    {
        Self {
            player: !self.player,
            evaluator: self.evaluator.clone(),
            ..*self
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Best move by plain minimax to depth `ply`.
    pub fn minimax_move<P>(&self, position: &P, ply: u32) -> SearchResult
    where
        P: Position,
        E: Evaluator<P>,
    {
        Search::new(&self.evaluator).minimax(position, self.player, ply)
    }

    /// Best move by alpha-beta search to depth `ply`.
    pub fn alpha_beta_move<P>(&self, position: &P, ply: u32) -> SearchResult
    where
        P: Position,
        E: Evaluator<P>,
    {
        Search::new(&self.evaluator).alpha_beta(position, self.player, ply)
    }

    /// Reconsider `original` against every move that earns an extra turn.
    ///
    /// A cup whose stones exactly reach the store earns an extra turn. Each such
    /// move is searched again from the resulting position, with this agent still
    /// to move, and replaces the current best when its score plus the extra turn
    /// bonus is at least as good.
    ///
    /// A move that ends the game searches to [`SearchResult::GAME_OVER`] and
    /// scores `-1` plus the bonus. Under Kalah rules such a move is always the
    /// only legal one, so it never displaces a better candidate.
    pub fn compare_to_extra<P>(&self, position: &P, original: SearchResult) -> SearchResult
    where
        P: Position,
        E: Evaluator<P>,
    {
        let mut best = original;
        for mv in extra_turn_moves(position, self.player) {
            let next = position.apply_move(self.player, mv);
            let score = self.alpha_beta_move(&next, self.ply).score + self.extra_turn_bonus;

            if score >= best.score {
                debug!(%mv, score, replaced = %best.best_move, "extra turn move preferred");
                best = SearchResult {
                    score,
                    best_move: mv,
                };
            }
        }
        best
    }

    /// Pick a move for this agent's player.
    /// The result has no move if the game is already over.
    pub fn choose_move<P>(&self, position: &P) -> SearchResult
    where
        P: Position,
        E: Evaluator<P>,
    {
        let result = match self.strategy {
            Strategy::Minimax => self.minimax_move(position, self.ply),
            Strategy::AlphaBeta => self.alpha_beta_move(position, self.ply),
            Strategy::Custom => {
                let candidate = self.alpha_beta_move(position, self.ply);
                if candidate.has_move() {
                    self.compare_to_extra(position, candidate)
                } else {
                    candidate
                }
            }
        };

        debug!(
            player = %self.player,
            strategy = ?self.strategy,
            mv = %result.best_move,
            value = result.score,
            "chose move"
        );
        result
    }
}

/// `player`'s legal moves whose last stone lands in their own store.
fn extra_turn_moves<P: Position>(position: &P, player: Player) -> Vec<Move> {
    let cups = position.cups(player);
    position
        .legal_moves(player)
        .into_iter()
        .filter(|mv| {
            let index = mv.to_index();
            index < cups.len() && cups[index] as usize == cups.len() - index
        })
        .collect()
}
