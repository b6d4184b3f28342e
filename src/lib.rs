//! # Connect Four
//!
//! A Connect Four engine built around depth-bounded minimax search with an
//! optional single-bound pruning cutoff and a window-counting positional
//! heuristic. Ships a console binary that plays any mix of human and
//! computer seats and reports nodes-expanded and timing statistics per move.
//!
//! ## Modules
//!
//! - [`game`] — Board grid, gravity drops, win and window scans
//! - [`ai`] — Strategy trait, move generation, heuristic, minimax engine
//! - [`ui`] — Console rendering and the interactive human player
//! - [`app`] — Game loop with per-move statistics
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod app;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
