use std::fmt;

use crate::{board::Board, game_state::GameState, types::*};

/// A single relocation of one piece, with the spaces it captures on the way.
///
/// Built once by move generation and not modified afterwards. Equality is
/// structural over start, end, captured spaces and promotion flag.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    start: Coord,
    end: Coord,
    captured: Vec<Coord>,
    promotion: bool,
}

impl Move {
    /// A quiet move.
    pub fn new(start: Coord, end: Coord) -> Self {
        Self {
            start,
            end,
            captured: Vec::new(),
            promotion: false,
        }
    }

    /// A move capturing the pieces on `captured`, in the order taken.
    pub fn with_captures(start: Coord, end: Coord, captured: Vec<Coord>) -> Self {
        Self {
            start,
            end,
            captured,
            promotion: false,
        }
    }

    /// Marks the move as promoting the moving piece.
    pub fn promoting(mut self) -> Self {
        self.promotion = true;
        self
    }

    pub fn start(&self) -> Coord {
        self.start
    }
    pub fn end(&self) -> Coord {
        self.end
    }
    pub fn captured(&self) -> &[Coord] {
        &self.captured
    }
    pub fn is_promotion(&self) -> bool {
        self.promotion
    }
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }

    /// Number of captured pieces.
    pub fn capture_count(&self) -> usize {
        self.captured.len()
    }

    /// Summed material of the captured pieces as they stand on `board`.
    pub fn captured_material(&self, board: &Board) -> i32 {
        self.captured
            .iter()
            .filter_map(|&at| board.piece_at(at))
            .map(Piece::value)
            .sum()
    }

    /// Applies this move to `state`. See [`GameState::execute`].
    pub fn execute(&self, state: &mut GameState) {
        state.execute(self);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)?;
        if !self.captured.is_empty() {
            f.write_str(" capturing")?;
            for at in &self.captured {
                write!(f, " {at}")?;
            }
        }
        if self.promotion {
            f.write_str(" (promotes)")?;
        }
        Ok(())
    }
}

/// Which subset of the generated moves a variant allows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureRule {
    /// Every generated move is legal.
    Optional,
    /// If any move captures, only capturing moves are legal.
    Mandatory,
}

impl CaptureRule {
    pub fn apply(self, mut moves: MoveSet) -> MoveSet {
        if self == CaptureRule::Mandatory && moves.iter().any(Move::is_capture) {
            moves.retain(Move::is_capture);
        }
        moves
    }
}

/// Insertion-ordered collection of moves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveSet {
    moves: Vec<Move>,
}

impl MoveSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Move> {
        self.moves.get(idx)
    }

    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&Move) -> bool,
    {
        self.moves.retain(f);
    }
}

impl Extend<Move> for MoveSet {
    fn extend<I: IntoIterator<Item = Move>>(&mut self, iter: I) {
        self.moves.extend(iter);
    }
}

impl FromIterator<Move> for MoveSet {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for MoveSet {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveSet {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

#[cfg(test)]
#[path = "moves_tests.rs"]
mod moves_tests;
