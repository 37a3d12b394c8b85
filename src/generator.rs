//! Random puzzle generation.
//!
//! Shuffles the full permutation and reshuffles until the parity check
//! passes, rather than repairing an unsolvable draw. Generic over the RNG so
//! batch runs can be seeded and reproduced.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, BoardError};

/// Generates a random solvable board with `size` cells.
pub fn random_board<R: Rng>(size: usize, rng: &mut R) -> Result<Board, BoardError> {
    let mut cells: Vec<u8> = (0..size).map(|value| value as u8).collect();
    loop {
        cells.shuffle(rng);
        let board = Board::new(cells.clone())?;
        if board.is_solvable() {
            return Ok(board);
        }
        log::debug!("unsolvable shuffle {board}, reshuffling");
    }
}

/// Generates a batch of random solvable boards.
pub fn random_boards<R: Rng>(
    size: usize,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Board>, BoardError> {
    (0..count).map(|_| random_board(size, rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_board_is_valid_and_solvable() {
        let mut rng = StdRng::seed_from_u64(1);
        let board = random_board(9, &mut rng).unwrap();
        assert_eq!(board.len(), 9);
        assert!(board.is_solvable());
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(random_board(9, &mut a).unwrap(), random_board(9, &mut b).unwrap());
    }

    #[test]
    fn test_batch_generation() {
        let mut rng = StdRng::seed_from_u64(7);
        let boards = random_boards(16, 5, &mut rng).unwrap();
        assert_eq!(boards.len(), 5);
        for board in &boards {
            assert_eq!(board.dim(), 4);
            assert!(board.is_solvable());
        }
    }

    #[test]
    fn test_non_square_size_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(random_board(8, &mut rng).is_err());
    }
}
