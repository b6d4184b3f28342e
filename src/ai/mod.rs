mod heuristic;
mod minimax;
mod moves;
mod random;
mod strategy;

pub use heuristic::{Heuristic, WindowHeuristic, WIN_SCORE};
pub use minimax::{NodeCounter, SearchEngine, SearchStrategy, DEFAULT_DEPTH};
pub use moves::expand;
pub use random::RandomStrategy;
pub use strategy::Strategy;
