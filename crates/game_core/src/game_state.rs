use tracing::{debug, trace};

use crate::{
    board::Board,
    error::GameError,
    movegen::enumerate_moves,
    moves::{Move, MoveSet},
    types::*,
    variant::{LossRule, Variant},
};

/// A board, the variant's rules, and whose turn it is.
///
/// The only mutation is [`GameState::execute`]. There is no undo: callers
/// that need history keep cloned snapshots (see [`crate::GameHistory`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    side_to_move: Side,
    variant: Variant,
}

impl GameState {
    pub fn new(board: Board, variant: Variant, side_to_move: Side) -> Self {
        Self {
            board,
            side_to_move,
            variant,
        }
    }

    /// The variant's starting position with its first side to move.
    pub fn new_game(variant: Variant) -> Self {
        debug!(%variant, "setting up new game");
        Self::new(variant.initial_board(), variant, variant.first_side())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Every legal move for `side`, in board scan order, after the variant's
    /// capture rule has been applied.
    pub fn all_possible_moves(&self, side: Side) -> MoveSet {
        let mut options = MoveSet::new();
        for (at, _) in self.board.pieces_of(side) {
            options.extend(enumerate_moves(&self.board, at));
        }
        self.variant.capture_rule().apply(options)
    }

    /// Legal moves for the side to move.
    pub fn legal_moves(&self) -> MoveSet {
        self.all_possible_moves(self.side_to_move)
    }

    /// Legal moves of the piece on `at`, if it belongs to the side to move.
    pub fn moves_from(&self, at: Coord) -> MoveSet {
        self.legal_moves()
            .into_iter()
            .filter(|m| m.start() == at)
            .collect()
    }

    /// Removes the captured pieces, moves the piece, promotes it if flagged,
    /// and hands the turn over.
    ///
    /// `mv` must come from the current [`legal_moves`](Self::legal_moves);
    /// nothing here checks that. Use [`try_execute`](Self::try_execute) for
    /// untrusted input.
    pub fn execute(&mut self, mv: &Move) {
        trace!(side = %self.side_to_move, %mv, "execute");
        for &at in mv.captured() {
            self.board.remove(at);
        }
        if let Some(piece) = self.board.remove(mv.start()) {
            let piece = if mv.is_promotion() { piece.promote() } else { piece };
            self.board.place(mv.end(), piece);
        }
        self.side_to_move = self.side_to_move.other();
    }

    /// Executes `mv` only if it is currently legal.
    pub fn try_execute(&mut self, mv: &Move) -> Result<(), GameError> {
        if !self.legal_moves().contains(mv) {
            return Err(GameError::IllegalMove { mv: mv.to_string() });
        }
        self.execute(mv);
        Ok(())
    }

    pub fn check_loss(&self, side: Side) -> bool {
        match self.variant.loss_rule() {
            LossRule::KingCaptured => !self
                .board
                .pieces_of(side)
                .any(|(_, pc)| pc.value() == KING_VALUE),
            LossRule::NoPiecesOrMoves => {
                self.board.pieces_of(side).next().is_none()
                    || self.all_possible_moves(side).is_empty()
            }
        }
    }

    /// Whether the side to move has lost.
    pub fn is_lost(&self) -> bool {
        self.check_loss(self.side_to_move)
    }

    /// Neither variant defines a drawn position.
    pub fn check_draw(&self) -> bool {
        false
    }

    /// Own material minus opposing material.
    pub fn evaluate(&self, side: Side) -> i32 {
        self.board.material(side) - self.board.material(side.other())
    }

    /// Value of `mv`'s captures under this variant's policy.
    pub fn capture_value(&self, mv: &Move) -> i32 {
        self.variant.capture_value(&self.board, mv)
    }

    /// Parses a coordinate in the variant's notation.
    pub fn parse_coord(&self, text: &str) -> Result<Coord, GameError> {
        self.variant.notation().parse(text, self.board.size())
    }

    pub fn format_coord(&self, at: Coord) -> String {
        self.variant.notation().format(at, self.board.size())
    }
}

#[cfg(test)]
#[path = "game_state_tests.rs"]
mod game_state_tests;
