use thiserror::Error;

use crate::types::Side;

/// Errors surfaced by the engine and the code driving it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// A textual coordinate that does not name a space on the board
    #[error("invalid coordinate `{text}` for a {size}x{size} board")]
    InvalidCoordinate { text: String, size: u8 },

    /// A move that is not in the current legal move set
    #[error("illegal move: {mv}")]
    IllegalMove { mv: String },

    /// The side to move has no legal moves but has not been flagged as lost
    #[error("{side} has no legal moves in a position that is not lost")]
    NoLegalMoves { side: Side },

    /// A player specification that no engine answers to
    #[error("unknown player `{0}`")]
    UnknownPlayer(String),

    /// A configuration value that cannot be used
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
