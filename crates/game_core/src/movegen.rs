use crate::{
    board::Board,
    moves::{Move, MoveSet},
    types::*,
};

/// All moves of the piece standing on `from`, ignoring any variant-level
/// capture rule. Empty if the space is empty or off the board.
pub fn enumerate_moves(board: &Board, from: Coord) -> MoveSet {
    let mut out = MoveSet::new();
    let Some(pc) = board.piece_at(from) else {
        return out;
    };
    match pc.kind.rule() {
        MoveRule::Slide => gen_slider(board, from, pc, &mut out),
        MoveRule::Step => gen_step(board, from, pc, &mut out),
        MoveRule::Leap => gen_knight(board, from, pc, &mut out),
        MoveRule::Pawn => gen_pawn(board, from, pc, &mut out),
        MoveRule::Jump => {
            gen_checker_steps(board, from, pc, &mut out);
            let mut captured = Vec::new();
            gen_jumps(board, from, pc, from, &mut captured, &mut out);
        }
    }
    out
}

/// Quiet move onto a free space, capture of an opposing piece, nothing for
/// an own piece.
fn step_or_capture(board: &Board, from: Coord, to: Coord, side: Side, out: &mut MoveSet) {
    match board.piece_at(to) {
        None => out.push(Move::new(from, to)),
        Some(pc) if pc.side != side => out.push(Move::with_captures(from, to, vec![to])),
        _ => {}
    }
}

fn gen_slider(board: &Board, from: Coord, pc: Piece, out: &mut MoveSet) {
    for &dir in pc.directions() {
        let mut cur = from;
        while let Some(to) = board.neighbor(cur, dir) {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(other) => {
                    if other.side != pc.side {
                        out.push(Move::with_captures(from, to, vec![to]));
                    }
                    break;
                }
            }
            cur = to;
        }
    }
}

fn gen_step(board: &Board, from: Coord, pc: Piece, out: &mut MoveSet) {
    for &dir in pc.directions() {
        if let Some(to) = board.neighbor(from, dir) {
            step_or_capture(board, from, to, pc.side, out);
        }
    }
}

fn gen_knight(board: &Board, from: Coord, pc: Piece, out: &mut MoveSet) {
    for &dir in pc.directions() {
        let Some(two) = board
            .neighbor(from, dir)
            .and_then(|one| board.neighbor(one, dir))
        else {
            continue;
        };
        for &side_dir in dir.perpendicular() {
            if let Some(to) = board.neighbor(two, side_dir) {
                step_or_capture(board, from, to, pc.side, out);
            }
        }
    }
}

fn far_row(board: &Board, side: Side) -> i8 {
    match side {
        Side::White => 0,
        Side::Black => board.size() as i8 - 1,
    }
}

fn start_row(board: &Board, side: Side) -> i8 {
    match side {
        Side::White => board.size() as i8 - 2,
        Side::Black => 1,
    }
}

fn gen_pawn(board: &Board, from: Coord, pc: Piece, out: &mut MoveSet) {
    let promo_row = far_row(board, pc.side);
    let on_start = from.row == start_row(board, pc.side);

    for &dir in pc.directions() {
        // forward 1
        let Some(one) = board.neighbor(from, dir) else {
            continue;
        };
        if !board.is_free(one) {
            continue;
        }
        let mv = Move::new(from, one);
        out.push(if one.row == promo_row { mv.promoting() } else { mv });

        // forward 2 from start, only through a free first square
        if on_start
            && let Some(two) = board.neighbor(one, dir)
            && board.is_free(two)
        {
            let mv = Move::new(from, two);
            out.push(if two.row == promo_row { mv.promoting() } else { mv });
        }
    }

    // diagonal captures
    for &dir in pc.capture_directions() {
        if let Some(to) = board.neighbor(from, dir)
            && let Some(target) = board.piece_at(to)
            && target.side != pc.side
        {
            let mv = Move::with_captures(from, to, vec![to]);
            out.push(if to.row == promo_row { mv.promoting() } else { mv });
        }
    }
}

fn promotes_at(board: &Board, pc: Piece, at: Coord) -> bool {
    pc.kind.promoted().is_some() && at.row == far_row(board, pc.side)
}

fn gen_checker_steps(board: &Board, from: Coord, pc: Piece, out: &mut MoveSet) {
    for &dir in pc.directions() {
        if let Some(to) = board.neighbor(from, dir)
            && board.is_free(to)
        {
            let mv = Move::new(from, to);
            out.push(if promotes_at(board, pc, to) { mv.promoting() } else { mv });
        }
    }
}

/// Depth-first search for jump chains starting at `origin`.
///
/// `captured` holds the spaces jumped so far on this branch. Jumped pieces
/// stay on the board until the move is executed, so they block landings but
/// may not be jumped a second time. A chain never lands back on `origin`.
fn gen_jumps(
    board: &Board,
    origin: Coord,
    pc: Piece,
    at: Coord,
    captured: &mut Vec<Coord>,
    out: &mut MoveSet,
) {
    let mut extended = false;
    for &dir in pc.capture_directions() {
        let Some(over) = board.neighbor(at, dir) else {
            continue;
        };
        let Some(target) = board.piece_at(over) else {
            continue;
        };
        if target.side == pc.side || captured.contains(&over) {
            continue;
        }
        let Some(landing) = board.neighbor(over, dir) else {
            continue;
        };
        if landing == origin || !board.is_free(landing) {
            continue;
        }

        captured.push(over);
        gen_jumps(board, origin, pc, landing, captured, out);
        captured.pop();
        extended = true;
    }

    if !extended && !captured.is_empty() {
        let mv = Move::with_captures(origin, at, captured.clone());
        out.push(if promotes_at(board, pc, at) { mv.promoting() } else { mv });
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
