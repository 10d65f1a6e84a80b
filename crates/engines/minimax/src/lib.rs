//! Minimax Engine
//!
//! Plain fixed-depth minimax over copies of the game state, scored by
//! material difference at the horizon. No pruning, no move ordering.

mod search;


use game_core::{Engine, GameError, GameState, SearchResult};
use tracing::debug;

pub use search::{search, SearchOutcome, LOSS, WIN};

/// Fixed-depth minimax agent.
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    depth: u8,
    name: String,
}

impl MinimaxEngine {
    pub fn new(depth: u8) -> Self {
        Self {
            depth,
            name: format!("minimax{depth}"),
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(2)
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, state: &GameState) -> Result<SearchResult, GameError> {
        let mut nodes = 0;
        let outcome = search(state, self.depth, state.side_to_move(), &mut nodes)?;
        debug!(
            engine = %self.name,
            depth = self.depth,
            nodes,
            score = outcome.score,
            "search finished"
        );

        Ok(SearchResult {
            best_move: outcome.best_move,
            score: outcome.score,
            depth: self.depth,
            nodes,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
