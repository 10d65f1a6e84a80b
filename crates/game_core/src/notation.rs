//! Textual coordinates for the two board conventions.

use crate::{error::GameError, types::Coord};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notation {
    /// File letter then rank number, rank 1 on White's home row: `"d2"`.
    Algebraic,
    /// Column letter then row number counted from row 0: `"a1"` is (0, 0).
    Checkers,
}

impl Notation {
    pub fn parse(self, text: &str, size: u8) -> Result<Coord, GameError> {
        let invalid = || GameError::InvalidCoordinate {
            text: text.to_string(),
            size,
        };

        let mut chars = text.trim().chars();
        let letter = chars.next().ok_or_else(invalid)?.to_ascii_lowercase();
        if !letter.is_ascii_lowercase() {
            return Err(invalid());
        }
        let col = (letter as u8 - b'a') as i32;
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let number: u8 = digits.parse().map_err(|_| invalid())?;

        let row = match self {
            Notation::Algebraic => size as i32 - number as i32,
            Notation::Checkers => number as i32 - 1,
        };
        let size = size as i32;
        if !(0..size).contains(&row) || !(0..size).contains(&col) {
            return Err(invalid());
        }
        Ok(Coord::new(row as i8, col as i8))
    }

    pub fn format(self, at: Coord, size: u8) -> String {
        let letter = (b'a' + at.col as u8) as char;
        let number = match self {
            Notation::Algebraic => size as i32 - at.row as i32,
            Notation::Checkers => at.row as i32 + 1,
        };
        format!("{letter}{number}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algebraic_counts_ranks_from_white() {
        assert_eq!(Notation::Algebraic.parse("d2", 8), Ok(Coord::new(6, 3)));
        assert_eq!(Notation::Algebraic.parse("a8", 8), Ok(Coord::new(0, 0)));
        assert_eq!(Notation::Algebraic.format(Coord::new(4, 3), 8), "d4");
    }

    #[test]
    fn checkers_counts_rows_from_zero() {
        assert_eq!(Notation::Checkers.parse("a1", 8), Ok(Coord::new(0, 0)));
        assert_eq!(Notation::Checkers.parse("C6", 8), Ok(Coord::new(5, 2)));
        assert_eq!(Notation::Checkers.format(Coord::new(7, 7), 8), "h8");
    }

    #[test]
    fn rejects_malformed_and_off_board() {
        let bad = [
            "", "9", "d", "dd", "i1", "a9", "a0", "a-1", "a+1", "a256", "a-2147483648",
        ];
        for notation in [Notation::Algebraic, Notation::Checkers] {
            for text in bad {
                assert!(
                    matches!(
                        notation.parse(text, 8),
                        Err(GameError::InvalidCoordinate { .. })
                    ),
                    "{text} should not parse as {notation:?}"
                );
            }
        }
    }
}
