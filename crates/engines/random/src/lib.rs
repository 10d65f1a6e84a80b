//! Random Move Engine
//!
//! A simple engine that selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Baseline comparisons (minimax should easily beat this)
//! - Stress testing move generation in long self-play games
//!
//! The capture-greedy [`GreedyEngine`] lives here too, since it only differs
//! in which moves it draws from.

use game_core::{Engine, GameError, GameState, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

mod greedy;

pub use greedy::GreedyEngine;


/// An engine that plays random legal moves.
///
/// This engine provides no evaluation - it simply picks a random move
/// from all available legal moves.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// A reproducible engine.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, state: &GameState) -> Result<SearchResult, GameError> {
        let moves = state.legal_moves();

        let best_move = moves
            .as_slice()
            .choose(&mut self.rng)
            .cloned()
            .ok_or(GameError::NoLegalMoves {
                side: state.side_to_move(),
            })?;

        Ok(SearchResult {
            best_move: Some(best_move),
            score: 0,
            depth: 1,
            nodes: 1,
        })
    }

    fn name(&self) -> &str {
        "random"
    }
}
