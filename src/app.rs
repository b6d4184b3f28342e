//! The game loop: alternates the two strategies, detects the end of the
//! game, and reports search and timing statistics per move.

use std::io::Write;
use std::time::{Duration, Instant};

use crate::ai::{NodeCounter, Strategy};
use crate::error::PlayError;
use crate::game::{Board, Player};
use crate::ui::render_board;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

struct Seat {
    strategy: Box<dyn Strategy>,
    counter: NodeCounter,
    moves: u32,
    time: Duration,
}

impl Seat {
    fn new(strategy: Box<dyn Strategy>) -> Self {
        Seat {
            strategy,
            counter: NodeCounter::new(),
            moves: 0,
            time: Duration::ZERO,
        }
    }
}

/// Runs one game between two strategies. Red moves first.
pub struct App {
    board: Board,
    seats: [Seat; 2],
}

fn seat_index(player: Player) -> usize {
    match player {
        Player::Red => 0,
        Player::Yellow => 1,
    }
}

impl App {
    pub fn new(board: Board, red: Box<dyn Strategy>, yellow: Box<dyn Strategy>) -> Self {
        App {
            board,
            seats: [Seat::new(red), Seat::new(yellow)],
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Play until a win or a draw, writing boards and per-move statistics
    /// to `out`, then a summary of nodes/move and time/move per player.
    pub fn run(&mut self, out: &mut dyn Write) -> Result<Outcome, PlayError> {
        write!(out, "{}", render_board(&self.board))?;

        let mut current = Player::Red;
        let outcome = loop {
            if self.board.is_won(current.other().to_cell()) {
                break Outcome::Winner(current.other());
            }
            if self.board.is_full() {
                break Outcome::Draw;
            }

            let seat = &mut self.seats[seat_index(current)];
            let nodes_before = seat.counter.get();
            let start = Instant::now();
            let next = seat.strategy.make_move(&self.board, &mut seat.counter)?;
            let elapsed = start.elapsed();
            seat.moves += 1;
            seat.time += elapsed;
            self.board = next;

            write!(out, "{}", render_board(&self.board))?;
            writeln!(
                out,
                "{} ({}) expanded {} nodes in {} ms",
                current.name(),
                seat.strategy.name(),
                seat.counter.get() - nodes_before,
                elapsed.as_millis()
            )?;

            current = current.other();
        };

        match outcome {
            Outcome::Winner(player) => writeln!(out, "{} wins!", player.name())?,
            Outcome::Draw => writeln!(out, "It's a draw.")?,
        }

        for (player, seat) in [Player::Red, Player::Yellow].into_iter().zip(&self.seats) {
            if seat.moves > 0 {
                writeln!(
                    out,
                    "{} ({}): {} moves, {:.1} nodes/move, {:.1} ms/move",
                    player.name(),
                    seat.strategy.name(),
                    seat.moves,
                    seat.counter.get() as f64 / f64::from(seat.moves),
                    seat.time.as_secs_f64() * 1000.0 / f64::from(seat.moves),
                )?;
            }
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::SearchStrategy;
    use crate::game::Cell;

    #[test]
    fn test_two_engines_play_to_a_finish() {
        let mut app = App::new(
            Board::default(),
            Box::new(SearchStrategy::alpha_beta(Player::Red, 3)),
            Box::new(SearchStrategy::minimax(Player::Yellow, 3)),
        );

        let mut transcript = Vec::new();
        let outcome = app.run(&mut transcript).unwrap();

        let board = app.board();
        match outcome {
            Outcome::Winner(player) => assert!(board.is_won(player.to_cell())),
            Outcome::Draw => assert!(board.is_full()),
        }
        let text = String::from_utf8(transcript).unwrap();
        assert!(text.contains("expanded"));
        assert!(text.contains("nodes/move"));
    }

    #[test]
    fn test_won_board_ends_the_game_before_any_move() {
        let mut board = Board::default();
        for col in 0..4 {
            board.drop_disk(Cell::Yellow, col).unwrap();
        }

        let mut app = App::new(
            board,
            Box::new(SearchStrategy::alpha_beta(Player::Red, 3)),
            Box::new(SearchStrategy::alpha_beta(Player::Yellow, 3)),
        );

        let mut transcript = Vec::new();
        let outcome = app.run(&mut transcript).unwrap();
        assert_eq!(outcome, Outcome::Winner(Player::Yellow));

        let text = String::from_utf8(transcript).unwrap();
        assert!(text.contains("Yellow wins!"));
        assert!(!text.contains("expanded"));
    }

    #[test]
    fn test_full_board_is_a_draw() {
        // Fill the columns from a row-phase table; every line of four
        // breaks after at most three cells.
        let phase = [0, 1, 1, 0, 0, 1];
        let mut board = Board::default();
        for col in 0..board.width() {
            for row in 0..board.height() {
                let cell = if (col + phase[row]) % 2 == 0 {
                    Cell::Red
                } else {
                    Cell::Yellow
                };
                board.drop_disk(cell, col).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(!board.is_won(Cell::Red));
        assert!(!board.is_won(Cell::Yellow));

        let mut app = App::new(
            board,
            Box::new(SearchStrategy::alpha_beta(Player::Red, 3)),
            Box::new(SearchStrategy::alpha_beta(Player::Yellow, 3)),
        );

        let mut transcript = Vec::new();
        let outcome = app.run(&mut transcript).unwrap();
        assert_eq!(outcome, Outcome::Draw);

        let text = String::from_utf8(transcript).unwrap();
        assert!(text.contains("It's a draw."));
        assert!(!text.contains("expanded"));
    }
}
