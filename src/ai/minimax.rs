use crate::ai::heuristic::{Heuristic, WindowHeuristic, WIN_SCORE};
use crate::ai::moves;
use crate::ai::strategy::Strategy;
use crate::error::PlayError;
use crate::game::{Board, Player};

/// Default number of plies searched below the root.
pub const DEFAULT_DEPTH: usize = 5;

/// Counts search nodes created while deciding moves. One counter belongs
/// to one player; callers take deltas around a decision to report the
/// nodes it expanded.
#[derive(Debug, Default)]
pub struct NodeCounter {
    nodes: u64,
}

impl NodeCounter {
    pub fn new() -> Self {
        NodeCounter::default()
    }

    pub fn increment(&mut self) {
        self.nodes += 1;
    }

    pub fn get(&self) -> u64 {
        self.nodes
    }
}

/// One position in the search tree: a board, its depth below the root,
/// and the player whose drops create its children. Nodes live on the
/// stack for the duration of one evaluation and are never reused.
struct SearchNode {
    board: Board,
    depth: usize,
    to_play: Player,
}

impl SearchNode {
    fn new(board: Board, depth: usize, to_play: Player, ctr: &mut NodeCounter) -> Self {
        ctr.increment();
        SearchNode {
            board,
            depth,
            to_play,
        }
    }
}

/// Depth-bounded minimax over full-board copies. Even depths are Max
/// nodes (the searching player moves), odd depths are Min nodes. With
/// `pruning` enabled the engine cuts off siblings once a node's running
/// value crosses the single bound inherited from its parent. The cutoff
/// compares that one bound, never a two-sided `[alpha, beta]` window:
/// node counts are part of the reported statistics, and the single-bound
/// walk picks the same move either way.
pub struct SearchEngine {
    max_depth: usize,
    pruning: bool,
    heuristic: Box<dyn Heuristic>,
}

impl SearchEngine {
    pub fn new(max_depth: usize, pruning: bool) -> Self {
        SearchEngine {
            max_depth,
            pruning,
            heuristic: Box::new(WindowHeuristic),
        }
    }

    pub fn with_heuristic(max_depth: usize, pruning: bool, heuristic: Box<dyn Heuristic>) -> Self {
        SearchEngine {
            max_depth,
            pruning,
            heuristic,
        }
    }

    /// Pick `player`'s best drop from `board` and return the resulting
    /// board, or `None` when no column is playable. Ties go to the lowest
    /// column: children come in ascending column order and only a strictly
    /// greater score replaces the current best.
    pub fn select_move(&self, board: &Board, player: Player, ctr: &mut NodeCounter) -> Option<Board> {
        let root = SearchNode::new(board.clone(), 0, player, ctr);
        let mut children = self.children(&root, ctr);
        if children.is_empty() {
            return None;
        }

        let mut best_index = 0;
        let mut best_score = -WIN_SCORE;
        for (index, child) in children.iter().enumerate() {
            // The root has no ancestor, so the minimum sentinel leaves the
            // first ply unpruned.
            let score = self.evaluate(child, player, -WIN_SCORE, ctr);
            if score > best_score {
                best_score = score;
                best_index = index;
            }
        }
        Some(children.swap_remove(best_index).board)
    }

    /// Build (and count) every child of a node, ascending column order.
    fn children(&self, node: &SearchNode, ctr: &mut NodeCounter) -> Vec<SearchNode> {
        moves::expand(&node.board, node.to_play)
            .into_iter()
            .map(|board| SearchNode::new(board, node.depth + 1, node.to_play.other(), ctr))
            .collect()
    }

    /// Evaluate a node for the maximizing player `head`. `parent_bound` is
    /// the parent's running value at the time of the call; it is the one
    /// bound the pruning cutoff compares against.
    fn evaluate(&self, node: &SearchNode, head: Player, parent_bound: i32, ctr: &mut NodeCounter) -> i32 {
        if node.board.is_won(head.to_cell()) {
            return WIN_SCORE;
        }
        if node.board.is_won(head.other().to_cell()) {
            return -WIN_SCORE;
        }
        if node.depth == self.max_depth {
            return self.heuristic.evaluate(&node.board, head);
        }

        // Children are created, and counted, before the loop; pruning only
        // cuts their evaluation short.
        let children = self.children(node, ctr);
        if node.depth % 2 == 0 {
            // Max node: `head` is to move.
            let mut best = -WIN_SCORE;
            for child in &children {
                let value = self.evaluate(child, head, best, ctr);
                if value > best {
                    best = value;
                }
                if self.pruning && best > parent_bound {
                    break;
                }
            }
            best
        } else {
            // Min node: the opponent is to move.
            let mut best = WIN_SCORE;
            for child in &children {
                let value = self.evaluate(child, head, best, ctr);
                if value < best {
                    best = value;
                }
                if self.pruning && best < parent_bound {
                    break;
                }
            }
            best
        }
    }
}

/// Search-based player. Minimax and Alpha-Beta are the same tree walk;
/// the pruning flag is the only difference, and it never changes the
/// chosen move, only how many nodes get expanded.
pub struct SearchStrategy {
    player: Player,
    engine: SearchEngine,
    label: &'static str,
}

impl SearchStrategy {
    /// Full minimax to the depth limit, no pruning.
    pub fn minimax(player: Player, depth: usize) -> Self {
        SearchStrategy {
            player,
            engine: SearchEngine::new(depth, false),
            label: "Minimax",
        }
    }

    /// Minimax with the single-bound pruning cutoff.
    pub fn alpha_beta(player: Player, depth: usize) -> Self {
        SearchStrategy {
            player,
            engine: SearchEngine::new(depth, true),
            label: "Alpha-Beta",
        }
    }
}

impl Strategy for SearchStrategy {
    fn make_move(&mut self, board: &Board, ctr: &mut NodeCounter) -> Result<Board, PlayError> {
        self.engine
            .select_move(board, self.player, ctr)
            .ok_or(PlayError::NoLegalMoves)
    }

    fn name(&self) -> &str {
        self.label
    }
}
