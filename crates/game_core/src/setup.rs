//! Starting layouts, expressed as factories for [`Board::setup`].
//!
//! Black starts on the low rows and White on the high rows, so White moves
//! north.
//!
//! [`Board::setup`]: crate::board::Board::setup

use crate::types::*;

/// Chess back ranks on rows 0 and `size - 1`, pawns in front of them.
///
/// The back rank is mirrored around the centre: rooks in the corners, then
/// knights and bishops, with queen and king on the two central files.
pub fn chess_piece_at(size: u8, at: Coord) -> Option<Piece> {
    let last = size as i8 - 1;
    let side = match at.row {
        0 | 1 => Side::Black,
        r if r == last || r == last - 1 => Side::White,
        _ => return None,
    };
    if at.row == 1 || at.row == last - 1 {
        return Some(Piece::new(side, PieceKind::Pawn));
    }

    let centre = size as i8 / 2;
    let from_edge = at.col.min(last - at.col);
    let kind = match from_edge {
        0 => PieceKind::Rook,
        1 => PieceKind::Knight,
        2 => PieceKind::Bishop,
        _ if at.col == centre - 1 => PieceKind::Queen,
        _ if at.col == centre => PieceKind::King,
        _ => return None,
    };
    Some(Piece::new(side, kind))
}

/// Checkers men on every space with an even `row + col`, three rows deep on
/// each side.
pub fn checkers_piece_at(size: u8, at: Coord) -> Option<Piece> {
    if (at.row + at.col) % 2 != 0 {
        return None;
    }
    if at.row < 3 {
        Some(Piece::new(Side::Black, PieceKind::Checker))
    } else if size as i8 - at.row < 4 {
        Some(Piece::new(Side::White, PieceKind::Checker))
    } else {
        None
    }
}
