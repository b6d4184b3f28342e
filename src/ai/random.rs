use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ai::minimax::NodeCounter;
use crate::ai::strategy::Strategy;
use crate::error::PlayError;
use crate::game::{Board, Player};

/// A baseline player that drops into a uniformly random valid column.
pub struct RandomStrategy {
    player: Player,
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new(player: Player) -> Self {
        RandomStrategy {
            player,
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Strategy for RandomStrategy {
    fn make_move(&mut self, board: &Board, _ctr: &mut NodeCounter) -> Result<Board, PlayError> {
        let columns: Vec<usize> = (0..board.width())
            .filter(|&col| board.is_drop_valid(col))
            .collect();
        if columns.is_empty() {
            return Err(PlayError::NoLegalMoves);
        }

        let col = columns[self.rng.random_range(0..columns.len())];
        let mut next = board.clone();
        next.drop_disk(self.player.to_cell(), col)
            .expect("column validated before drop");
        Ok(next)
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[test]
    fn test_random_moves_are_single_valid_drops() {
        let mut strategy = RandomStrategy::new(Player::Red);
        let board = Board::default();

        for _ in 0..100 {
            let next = strategy
                .make_move(&board, &mut NodeCounter::new())
                .unwrap();
            let disks = (0..next.height())
                .flat_map(|r| (0..next.width()).map(move |c| (r, c)))
                .filter(|&(r, c)| next.get(r, c) == Cell::Red)
                .count();
            assert_eq!(disks, 1);
        }
    }

    #[test]
    fn test_random_fails_on_a_full_board() {
        let mut board = Board::default();
        for col in 0..board.width() {
            for _ in 0..board.height() {
                board.drop_disk(Cell::Yellow, col).unwrap();
            }
        }

        let mut strategy = RandomStrategy::new(Player::Red);
        let err = strategy
            .make_move(&board, &mut NodeCounter::new())
            .unwrap_err();
        assert!(matches!(err, PlayError::NoLegalMoves));
    }
}
