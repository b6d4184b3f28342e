use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use crate::ai::{NodeCounter, Strategy};
use crate::error::PlayError;
use crate::game::{Board, Player};

/// Interactive player: prompts for a 1-based column and keeps asking
/// until the drop is valid. Generic over its reader and writer so tests
/// can script the exchange.
pub struct HumanStrategy<R, W> {
    player: Player,
    input: R,
    output: W,
}

impl HumanStrategy<BufReader<Stdin>, Stdout> {
    pub fn new(player: Player) -> Self {
        HumanStrategy {
            player,
            input: BufReader::new(io::stdin()),
            output: io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> HumanStrategy<R, W> {
    pub fn with_io(player: Player, input: R, output: W) -> Self {
        HumanStrategy {
            player,
            input,
            output,
        }
    }
}

impl<R: BufRead, W: Write> Strategy for HumanStrategy<R, W> {
    fn make_move(&mut self, board: &Board, _ctr: &mut NodeCounter) -> Result<Board, PlayError> {
        loop {
            write!(self.output, "next move (1-{}): ", board.width())?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PlayError::Io(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before a move was made",
                )));
            }

            let column = match line.trim().parse::<usize>() {
                Ok(choice) if choice >= 1 => choice - 1,
                _ => {
                    writeln!(self.output, "Invalid column!")?;
                    continue;
                }
            };
            if !board.is_drop_valid(column) {
                writeln!(self.output, "Invalid column!")?;
                continue;
            }

            let mut next = board.clone();
            next.drop_disk(self.player.to_cell(), column)
                .expect("column validated before drop");
            return Ok(next);
        }
    }

    fn name(&self) -> &str {
        "Human"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;
    use std::io::Cursor;

    #[test]
    fn test_valid_choice_drops_the_disk() {
        let mut strategy =
            HumanStrategy::with_io(Player::Red, Cursor::new("3\n"), Vec::new());
        let next = strategy
            .make_move(&Board::default(), &mut NodeCounter::new())
            .unwrap();
        assert_eq!(next.get(0, 2), Cell::Red);
    }

    #[test]
    fn test_retries_until_the_choice_is_playable() {
        let mut board = Board::default();
        for _ in 0..board.height() {
            board.drop_disk(Cell::Yellow, 0).unwrap();
        }

        // Zero, garbage, out of range, a full column, then a playable one.
        let input = Cursor::new("0\nabc\n9\n1\n4\n");
        let mut output = Vec::new();
        let next = {
            let mut strategy = HumanStrategy::with_io(Player::Red, input, &mut output);
            strategy.make_move(&board, &mut NodeCounter::new()).unwrap()
        };

        assert_eq!(next.get(0, 3), Cell::Red);
        let transcript = String::from_utf8(output).unwrap();
        assert_eq!(transcript.matches("Invalid column!").count(), 4);
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut strategy =
            HumanStrategy::with_io(Player::Red, Cursor::new(""), Vec::new());
        let err = strategy
            .make_move(&Board::default(), &mut NodeCounter::new())
            .unwrap_err();
        assert!(matches!(err, PlayError::Io(_)));
    }
}
