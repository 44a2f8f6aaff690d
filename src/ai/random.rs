use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::Agent;
use crate::error::SearchError;
use crate::game::{Board, Move};

/// An agent that selects uniformly at random from legal moves.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn get_move(&mut self, board: &Board) -> Result<Move, SearchError> {
        let moves = board.legal_moves();
        if moves.is_empty() || board.outcome().is_terminal() {
            return Err(SearchError::NoLegalMove);
        }
        Ok(moves[self.rng.random_range(0..moves.len())])
    }

    fn name(&self) -> &str {
        "Random"
    }
}
