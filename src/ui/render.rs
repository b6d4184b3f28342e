use crate::game::{Board, Cell};

fn cell_char(cell: Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::Red => 'X',
        Cell::Yellow => 'O',
    }
}

/// Render the board for the console: rows top-down, a rule, then the
/// 1-based column labels players type their moves against.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for row in (0..board.height()).rev() {
        for col in 0..board.width() {
            out.push(cell_char(board.get(row, col)));
            out.push(' ');
        }
        out.push('\n');
    }
    for _ in 0..2 * board.width() {
        out.push('_');
    }
    out.push('\n');
    for col in 0..board.width() {
        out.push_str(&(col + 1).to_string());
        out.push(' ');
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_board() {
        let board = Board::new(4, 4);
        assert_eq!(
            render_board(&board),
            ". . . . \n. . . . \n. . . . \n. . . . \n________\n1 2 3 4 \n"
        );
    }

    #[test]
    fn test_render_shows_drops_on_the_bottom_line() {
        let mut board = Board::new(4, 4);
        board.drop_disk(Cell::Red, 1).unwrap();
        board.drop_disk(Cell::Yellow, 1).unwrap();
        assert_eq!(
            render_board(&board),
            ". . . . \n. . . . \n. O . . \n. X . . \n________\n1 2 3 4 \n"
        );
    }
}
