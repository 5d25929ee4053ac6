//! The board interface the search runs against.

use mancala_board::{Board, Move, MoveList, Player};

/// A game position the search can explore.
///
/// Implementors must return a new, independent position from [`Position::apply_move`]:
/// sibling branches of the search tree must never see each other's moves.
pub trait Position: Clone {
    type Moves: IntoIterator<Item = Move>;

    /// Legal moves for `player`, in a stable order. The search breaks ties by this order.
    fn legal_moves(&self, player: Player) -> Self::Moves;

    /// The position after `player` plays `mv`. `self` is left untouched.
    fn apply_move(&self, player: Player, mv: Move) -> Self;

    fn is_game_over(&self) -> bool;

    fn has_won(&self, player: Player) -> bool;

    /// Stones in each of `player`'s cups, from that player's left.
    fn cups(&self, player: Player) -> &[u8];

    /// Stones `player` has banked.
    fn store(&self, player: Player) -> u32;

    /// Every stone in play or banked.
    fn total_stones(&self) -> u32 {
        [Player::One, Player::Two]
            .iter()
            .map(|&player| {
                let in_cups: u32 = self.cups(player).iter().map(|&c| c as u32).sum();
                in_cups + self.store(player)
            })
            .sum()
    }
}

impl Position for Board {
    type Moves = MoveList;

    #[inline]
    fn legal_moves(&self, player: Player) -> MoveList {
        Board::legal_moves(self, player)
    }

    /// Extra turns are dropped: the search alternates strictly between players.
    #[inline]
    fn apply_move(&self, player: Player, mv: Move) -> Self {
        self.make_move(player, mv).0
    }

    #[inline]
    fn is_game_over(&self) -> bool {
        Board::is_game_over(self)
    }

    #[inline]
    fn has_won(&self, player: Player) -> bool {
        Board::has_won(self, player)
    }

    #[inline]
    fn cups(&self, player: Player) -> &[u8] {
        Board::cups(self, player)
    }

    #[inline]
    fn store(&self, player: Player) -> u32 {
        Board::store(self, player) as u32
    }

    fn total_stones(&self) -> u32 {
        Board::total_stones(self)
    }
}
