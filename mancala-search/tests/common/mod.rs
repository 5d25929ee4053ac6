//! A synthetic uniform game tree with fixed leaf values, for checking the
//! search against hand-computed results.

use mancala_board::{Move, Player};
use mancala_search::{Evaluator, Phase, Position};

/// A node in a complete tree of the given branching factor.
/// Leaves are numbered left to right.
#[derive(Clone, Debug, PartialEq)]
pub struct Tree {
    pub index: usize,
    pub depth: u32,
    pub branching: usize,
}

impl Tree {
    pub fn new(depth: u32, branching: usize) -> Self {
        Self {
            index: 0,
            depth,
            branching,
        }
    }
}

impl Position for Tree {
    type Moves = Vec<Move>;

    fn legal_moves(&self, _player: Player) -> Vec<Move> {
        if self.depth == 0 {
            return Vec::new();
        }
        (0..self.branching).map(Move::from_index).collect()
    }

    fn apply_move(&self, _player: Player, mv: Move) -> Self {
        Self {
            index: self.index * self.branching + mv.to_index(),
            depth: self.depth - 1,
            branching: self.branching,
        }
    }

    fn is_game_over(&self) -> bool {
        self.depth == 0
    }

    fn has_won(&self, _player: Player) -> bool {
        false
    }

    fn cups(&self, _player: Player) -> &[u8] {
        &[]
    }

    fn store(&self, _player: Player) -> u32 {
        0
    }
}

/// Scores leaves from a table, and interior nodes as zero.
pub struct Leaves(pub Vec<f64>);

impl Evaluator<Tree> for Leaves {
    fn evaluate(&self, position: &Tree, _turn: Player, _phase: Phase) -> f64 {
        if position.depth == 0 {
            self.0[position.index]
        } else {
            0.0
        }
    }
}
