//! Move selection collaborators.
//!
//! The board core does not choose moves; it exposes `legal_moves` and the
//! make/unmake pair, and something else decides. `Engine` is that seam. The
//! only implementation shipped here picks uniformly at random, which is
//! enough to drive the UCI `go` command and every test that needs "some
//! legal reply".

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::Move;
use crate::game::Game;

/// A move chooser consulted by the UCI adapter on `go`.
pub trait Engine {
    /// Pick a move for the side to move, or `None` when there is none.
    fn best_move(&mut self, game: &mut Game) -> Option<Move>;
}

/// Picks a uniformly random legal move.
pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    #[must_use]
    pub fn new() -> Self {
        RandomEngine {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic variant for tests.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        RandomEngine {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        RandomEngine::new()
    }
}

impl Engine for RandomEngine {
    fn best_move(&mut self, game: &mut Game) -> Option<Move> {
        let moves = game.legal_moves();
        if moves.is_empty() {
            return None;
        }
        moves.get(self.rng.gen_range(0..moves.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_engine_returns_legal_move() {
        let mut game = Game::new();
        let mut engine = RandomEngine::seeded(42);
        let mv = engine.best_move(&mut game).unwrap();
        assert!(game.legal_moves().contains(mv));
    }

    #[test]
    fn test_random_engine_has_no_move_when_mated() {
        let mut game = Game::new();
        for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            game.make_move_uci(mv).unwrap();
        }
        let mut engine = RandomEngine::seeded(7);
        assert_eq!(engine.best_move(&mut game), None);
    }

    #[test]
    fn test_seeded_engine_is_deterministic() {
        let mut first = Game::new();
        let mut second = Game::new();
        let a = RandomEngine::seeded(99).best_move(&mut first);
        let b = RandomEngine::seeded(99).best_move(&mut second);
        assert_eq!(a, b);
    }
}
