//! Sliding-Tile Puzzle Solver Library
//!
//! Provides the core N-puzzle solving functionality: the board
//! representation, legal move generation, heuristic evaluators, and the two
//! informed-search drivers (best-first and A*), plus random puzzle
//! generation and result reporting around them.

pub mod board;
pub mod generator;
pub mod heuristic;
pub mod moves;
pub mod report;
pub mod search;

pub use board::{Board, BoardError};
pub use heuristic::Heuristic;
pub use search::{solve, Algorithm};

/// Search configuration threaded through a run.
///
/// Replaces any process-wide settings: every solve call carries its own
/// algorithm and heuristic choice, so concurrent runs cannot contaminate
/// each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    pub heuristic: Heuristic,
    pub algorithm: Algorithm,
}

impl SolverConfig {
    /// Runs the configured search from `start` to `goal`.
    pub fn solve(&self, start: &Board, goal: &Board) -> Option<Vec<Board>> {
        search::solve(start, goal, self.heuristic, self.algorithm)
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            heuristic: Heuristic::MisplacedTiles,
            algorithm: Algorithm::BestFirst,
        }
    }
}
