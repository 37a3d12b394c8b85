//! Legal move generation.
//!
//! A move slides one tile into the blank, which is the same as swapping the
//! blank with an adjacent cell. Successors are generated in the fixed order
//! up, down, left, right so that searches break ties reproducibly.

use crate::board::Board;

/// The four slide directions, named for where the blank travels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Generation order for successors.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Flat index the blank would move into, or `None` at the board edge.
    fn target(self, board: &Board) -> Option<usize> {
        let dim = board.dim();
        let blank = board.blank_index();
        let row = blank / dim;
        let col = blank % dim;
        match self {
            Direction::Up if row > 0 => Some(blank - dim),
            Direction::Down if row < dim - 1 => Some(blank + dim),
            Direction::Left if col > 0 => Some(blank - 1),
            Direction::Right if col < dim - 1 => Some(blank + 1),
            _ => None,
        }
    }
}

/// Applies a single slide, or `None` when the blank would leave the board.
pub fn apply(board: &Board, direction: Direction) -> Option<Board> {
    direction
        .target(board)
        .map(|neighbor| board.with_blank_swapped(neighbor))
}

/// All states reachable by one legal slide, in [`Direction::ALL`] order.
///
/// A corner blank yields 2 successors, an edge blank 3, an interior blank 4.
/// No deduplication or visited filtering happens here; pruning belongs to
/// the search.
pub fn legal_moves(board: &Board) -> Vec<Board> {
    Direction::ALL
        .iter()
        .filter_map(|&direction| apply(board, direction))
        .collect()
}
