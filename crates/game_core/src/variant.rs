//! Per-game rules layered on the shared board and piece model.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    board::Board,
    error::GameError,
    moves::{CaptureRule, Move},
    notation::Notation,
    setup,
    types::*,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Chess,
    Checkers,
}

/// When a side has lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LossRule {
    /// No piece worth [`KING_VALUE`] left on the board.
    KingCaptured,
    /// No pieces, or no legal moves.
    NoPiecesOrMoves,
}

impl Variant {
    pub fn board_size(self) -> u8 {
        8
    }

    pub fn first_side(self) -> Side {
        Side::White
    }

    /// Which piece starts on `at` on a board of `size`.
    pub fn starting_piece(self, size: u8, at: Coord) -> Option<Piece> {
        match self {
            Variant::Chess => setup::chess_piece_at(size, at),
            Variant::Checkers => setup::checkers_piece_at(size, at),
        }
    }

    pub fn capture_rule(self) -> CaptureRule {
        match self {
            Variant::Chess => CaptureRule::Optional,
            Variant::Checkers => CaptureRule::Mandatory,
        }
    }

    pub fn loss_rule(self) -> LossRule {
        match self {
            Variant::Chess => LossRule::KingCaptured,
            Variant::Checkers => LossRule::NoPiecesOrMoves,
        }
    }

    pub fn notation(self) -> Notation {
        match self {
            Variant::Chess => Notation::Algebraic,
            Variant::Checkers => Notation::Checkers,
        }
    }

    /// What a move is worth to a capture-greedy player: material for chess,
    /// number of pieces for checkers.
    pub fn capture_value(self, board: &Board, mv: &Move) -> i32 {
        match self {
            Variant::Chess => mv.captured_material(board),
            Variant::Checkers => mv.capture_count() as i32,
        }
    }

    /// A freshly set-up board for this variant.
    pub fn initial_board(self) -> Board {
        let mut board = Board::new(self.board_size());
        board.setup(|size, at| self.starting_piece(size, at));
        board
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Chess => f.write_str("chess"),
            Variant::Checkers => f.write_str("checkers"),
        }
    }
}

impl FromStr for Variant {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chess" => Ok(Variant::Chess),
            "checkers" | "draughts" => Ok(Variant::Checkers),
            other => Err(GameError::InvalidConfig(format!("unknown game `{other}`"))),
        }
    }
}
