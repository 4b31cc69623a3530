//! Computer opponents.

use crate::{Board, Position};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// Something that can answer a player move.
///
/// The engine only calls [`Opponent::choose`] while at least one cell is
/// empty, and passes those cells as `candidates`.
pub trait Opponent {
    /// Picks the cell to mark, ideally one of `candidates`.
    fn choose(&mut self, board: &Board, candidates: &[Position]) -> Option<Position>;

    /// Returns the opponent's display name.
    fn name(&self) -> &str;
}

/// Opponent that picks uniformly among the empty cells.
#[derive(Debug, Clone)]
pub struct RandomOpponent {
    rng: ChaCha8Rng,
    seed: Option<u64>,
}

impl RandomOpponent {
    /// Creates an opponent seeded from OS entropy.
    #[instrument]
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
            seed: None,
        }
    }

    /// Creates a deterministic opponent.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Seed used to build this opponent, if it was seeded explicitly.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for RandomOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Opponent for RandomOpponent {
    fn choose(&mut self, _board: &Board, candidates: &[Position]) -> Option<Position> {
        let choice = candidates.choose(&mut self.rng).copied();
        debug!(?choice, candidates = candidates.len(), "Random opponent chose");
        choice
    }

    fn name(&self) -> &str {
        "Computer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_comes_from_candidates() {
        let mut opponent = RandomOpponent::seeded(7);
        let candidates = [Position::TopLeft, Position::BottomRight];
        for _ in 0..50 {
            let pos = opponent.choose(&Board::new(), &candidates).unwrap();
            assert!(candidates.contains(&pos));
        }
    }

    #[test]
    fn test_no_candidates_no_choice() {
        let mut opponent = RandomOpponent::seeded(7);
        assert_eq!(opponent.choose(&Board::new(), &[]), None);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = RandomOpponent::seeded(42);
        let mut b = RandomOpponent::seeded(42);
        for _ in 0..20 {
            assert_eq!(
                a.choose(&Board::new(), &Position::ALL),
                b.choose(&Board::new(), &Position::ALL)
            );
        }
    }

    #[test]
    fn test_every_candidate_reachable() {
        let mut opponent = RandomOpponent::seeded(3);
        let mut seen = [false; 9];
        for _ in 0..500 {
            let pos = opponent.choose(&Board::new(), &Position::ALL).unwrap();
            seen[pos.to_index()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
