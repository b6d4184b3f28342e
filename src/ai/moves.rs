use crate::game::{Board, Player};

/// All boards reachable from `board` by one drop of `player`'s disk, in
/// ascending column order. Each successor owns an independent copy of the
/// grid. Empty when the board is full; the order is what breaks ties in
/// move selection.
pub fn expand(board: &Board, player: Player) -> Vec<Board> {
    let mut children = Vec::with_capacity(board.width());
    for col in 0..board.width() {
        if board.is_drop_valid(col) {
            let mut child = board.clone();
            child
                .drop_disk(player.to_cell(), col)
                .expect("column validated before drop");
            children.push(child);
        }
    }
    children
}
