use game_core::{Engine, GameError, GameState, Move, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Plays the move with the highest capture value, breaking ties at random.
///
/// Capture value follows the variant: material for chess, piece count for
/// checkers. With no captures on offer every move ties at zero.
#[derive(Debug, Clone)]
pub struct GreedyEngine {
    rng: StdRng,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Moves sharing the highest capture value, in generation order.
fn best_captures<'a>(state: &GameState, moves: &'a [Move]) -> (i32, Vec<&'a Move>) {
    let mut max_captured = 0;
    let mut candidates = Vec::new();
    for mv in moves {
        let value = state.capture_value(mv);
        if value > max_captured {
            max_captured = value;
            candidates.clear();
            candidates.push(mv);
        } else if value == max_captured {
            candidates.push(mv);
        }
    }
    (max_captured, candidates)
}

impl Engine for GreedyEngine {
    fn search(&mut self, state: &GameState) -> Result<SearchResult, GameError> {
        let moves = state.legal_moves();
        let (score, candidates) = best_captures(state, moves.as_slice());

        let best_move = candidates
            .choose(&mut self.rng)
            .map(|&mv| mv.clone())
            .ok_or(GameError::NoLegalMoves {
                side: state.side_to_move(),
            })?;

        Ok(SearchResult {
            best_move: Some(best_move),
            score,
            depth: 1,
            nodes: moves.len() as u64,
        })
    }

    fn name(&self) -> &str {
        "greedy"
    }
}

#[cfg(test)]
#[path = "greedy_tests.rs"]
mod greedy_tests;
