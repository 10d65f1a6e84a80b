use std::fmt;

use crate::types::*;

/// Square grid of spaces, each holding at most one piece.
///
/// Stored as a flat row-major array so that cloning a board for a search
/// branch is a single allocation and copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: u8,
    squares: Vec<Option<Piece>>,
}

impl Board {
    /// An empty `size × size` board.
    ///
    /// # Panics
    /// If `size` is 0 or larger than 127.
    pub fn new(size: u8) -> Self {
        assert!(
            (1..=i8::MAX as u8).contains(&size),
            "board size must be in 1..=127"
        );
        let n = size as usize;
        Board {
            size,
            squares: vec![None; n * n],
        }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn contains(&self, at: Coord) -> bool {
        let size = self.size as i8;
        (0..size).contains(&at.row) && (0..size).contains(&at.col)
    }

    fn index(&self, at: Coord) -> Option<usize> {
        if self.contains(at) {
            Some(at.row as usize * self.size as usize + at.col as usize)
        } else {
            None
        }
    }

    pub fn piece_at(&self, at: Coord) -> Option<Piece> {
        self.index(at).and_then(|i| self.squares[i])
    }

    /// True if `at` is on the board and empty.
    pub fn is_free(&self, at: Coord) -> bool {
        self.index(at).is_some_and(|i| self.squares[i].is_none())
    }

    /// Adjacent space in `dir`, or `None` past the edge.
    pub fn neighbor(&self, at: Coord, dir: Direction) -> Option<Coord> {
        let next = at.offset(dir);
        self.contains(next).then_some(next)
    }

    /// Puts `piece` on `at`, returning whatever was there before.
    ///
    /// # Panics
    /// If `at` is off the board.
    pub fn place(&mut self, at: Coord, piece: Piece) -> Option<Piece> {
        let i = self.index(at).expect("place: coordinate off the board");
        self.squares[i].replace(piece)
    }

    pub fn remove(&mut self, at: Coord) -> Option<Piece> {
        self.index(at).and_then(|i| self.squares[i].take())
    }

    /// Every space in row-major order.
    pub fn spaces(&self) -> impl Iterator<Item = Coord> + use<> {
        let size = self.size as i8;
        (0..size).flat_map(move |row| (0..size).map(move |col| Coord::new(row, col)))
    }

    /// Occupied spaces of `side` in row-major order. Each call starts a fresh
    /// scan of the current occupancy.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.spaces().filter_map(move |at| match self.piece_at(at) {
            Some(pc) if pc.side == side => Some((at, pc)),
            _ => None,
        })
    }

    /// Clears the board and asks `factory` which piece starts on each space.
    pub fn setup<F>(&mut self, factory: F)
    where
        F: Fn(u8, Coord) -> Option<Piece>,
    {
        let size = self.size;
        for at in self.spaces() {
            let i = at.row as usize * size as usize + at.col as usize;
            self.squares[i] = factory(size, at);
        }
    }

    /// Total material of `side`.
    pub fn material(&self, side: Side) -> i32 {
        self.pieces_of(side).map(|(_, pc)| pc.value()).sum()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size as i8;
        for row in 0..size {
            for col in 0..size {
                let ch = match self.piece_at(Coord::new(row, col)) {
                    Some(pc) => pc.symbol(),
                    None if (row + col) % 2 == 0 => '·',
                    None => ' ',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
