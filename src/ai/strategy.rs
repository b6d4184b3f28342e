use crate::ai::minimax::NodeCounter;
use crate::error::PlayError;
use crate::game::Board;

/// A participant in the game, computer or human.
pub trait Strategy {
    /// Produce the board after this player's move. The counter accumulates
    /// search nodes for statistics reporting; strategies that do not search
    /// leave it untouched.
    fn make_move(&mut self, board: &Board, ctr: &mut NodeCounter) -> Result<Board, PlayError>;

    /// Display name for reports.
    fn name(&self) -> &str;
}
