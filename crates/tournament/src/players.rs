//! Building agents from player specs

use game_core::{Engine, GameError};
use minimax_engine::MinimaxEngine;
use random_engine::{GreedyEngine, RandomEngine};

/// Creates an engine from a spec: `random`, `greedy`, or `minimaxN` where
/// `N` is a single digit search depth of at least 1.
pub fn create_engine(spec: &str) -> Result<Box<dyn Engine>, GameError> {
    let unknown = || GameError::UnknownPlayer(spec.to_string());
    match spec.to_ascii_lowercase().as_str() {
        "random" => Ok(Box::new(RandomEngine::new())),
        "greedy" => Ok(Box::new(GreedyEngine::new())),
        other => {
            let digits = other.strip_prefix("minimax").ok_or_else(unknown)?;
            let mut chars = digits.chars();
            let depth = chars
                .next()
                .and_then(|c| c.to_digit(10))
                .filter(|&d| d > 0)
                .ok_or_else(unknown)?;
            if chars.next().is_some() {
                return Err(unknown());
            }
            Ok(Box::new(MinimaxEngine::new(depth as u8)))
        }
    }
}
