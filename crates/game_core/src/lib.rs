pub mod board;
pub mod error;
pub mod game_state;
pub mod history;
pub mod movegen;
pub mod moves;
pub mod notation;
pub mod perft;
pub mod setup;
pub mod types;
pub mod variant;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::GameError;
pub use game_state::*;
pub use history::GameHistory;
pub use movegen::enumerate_moves;
pub use moves::*;
pub use notation::Notation;
pub use perft::perft;
pub use types::*;
pub use variant::*;

// =============================================================================
// Engine trait, implemented by every move-choosing agent
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// The chosen move (None only when no search was done, e.g. depth 0)
    pub best_move: Option<Move>,
    /// Score from the searching side's perspective
    pub score: i32,
    /// Search depth in plies
    pub depth: u8,
    /// Number of positions visited
    pub nodes: u64,
}

/// Trait that all agents must implement.
///
/// Lets the match runner swap between minimax, greedy and random players.
pub trait Engine: Send {
    /// Chooses a move for the side to move in `state`.
    ///
    /// Callers only ask when the side to move has not lost. An agent that
    /// finds no legal move returns [`GameError::NoLegalMoves`].
    fn search(&mut self, state: &GameState) -> Result<SearchResult, GameError>;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
