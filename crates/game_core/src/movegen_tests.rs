use super::*;

fn c(row: i8, col: i8) -> Coord {
    Coord::new(row, col)
}

fn board_with(pieces: &[(Coord, Side, PieceKind)]) -> Board {
    let mut board = Board::new(8);
    for &(at, side, kind) in pieces {
        board.place(at, Piece::new(side, kind));
    }
    board
}

fn ends(moves: &MoveSet) -> Vec<Coord> {
    let mut out: Vec<Coord> = moves.iter().map(Move::end).collect();
    out.sort();
    out
}

#[test]
fn every_move_leaves_its_start_and_stays_on_board() {
    let mut board = Board::new(8);
    board.setup(crate::setup::chess_piece_at);
    board.place(c(4, 4), Piece::new(Side::White, PieceKind::Queen));
    board.place(c(3, 3), Piece::new(Side::Black, PieceKind::Knight));
    for side in Side::BOTH {
        for (at, _) in board.pieces_of(side) {
            for mv in &enumerate_moves(&board, at) {
                assert_ne!(mv.start(), mv.end());
                assert!(board.contains(mv.end()));
            }
        }
    }
}

#[test]
fn empty_space_has_no_moves() {
    let board = Board::new(8);
    assert!(enumerate_moves(&board, c(3, 3)).is_empty());
}

#[test]
fn rook_stops_at_first_blocker() {
    let board = board_with(&[
        (c(4, 4), Side::White, PieceKind::Rook),
        (c(4, 6), Side::Black, PieceKind::Pawn),
        (c(2, 4), Side::White, PieceKind::Pawn),
    ]);
    let moves = enumerate_moves(&board, c(4, 4));

    // east: (4,5) quiet, (4,6) capture, nothing beyond
    assert!(moves.contains(&Move::new(c(4, 4), c(4, 5))));
    assert!(moves.contains(&Move::with_captures(c(4, 4), c(4, 6), vec![c(4, 6)])));
    assert!(!moves.iter().any(|m| m.end() == c(4, 7)));
    // north: (3,4) only, own pawn on (2,4) blocks
    assert!(moves.contains(&Move::new(c(4, 4), c(3, 4))));
    assert!(!moves.iter().any(|m| m.end() == c(2, 4) || m.end() == c(1, 4)));
    // west 4 + south 3 + east 2 + north 1
    assert_eq!(moves.len(), 10);
}

#[test]
fn bishop_covers_diagonals_only() {
    let board = board_with(&[(c(0, 0), Side::Black, PieceKind::Bishop)]);
    let moves = enumerate_moves(&board, c(0, 0));
    assert_eq!(ends(&moves), (1..8).map(|i| c(i, i)).collect::<Vec<_>>());
}

#[test]
fn queen_on_empty_board_reaches_27_squares() {
    let board = board_with(&[(c(3, 3), Side::White, PieceKind::Queen)]);
    assert_eq!(enumerate_moves(&board, c(3, 3)).len(), 27);
}

#[test]
fn knight_from_centre_has_eight_destinations() {
    let board = board_with(&[(c(4, 4), Side::White, PieceKind::Knight)]);
    let moves = enumerate_moves(&board, c(4, 4));
    assert_eq!(
        ends(&moves),
        vec![
            c(2, 3),
            c(2, 5),
            c(3, 2),
            c(3, 6),
            c(5, 2),
            c(5, 6),
            c(6, 3),
            c(6, 5)
        ]
    );
}

#[test]
fn knight_from_corner_has_two_destinations() {
    let board = board_with(&[(c(7, 0), Side::White, PieceKind::Knight)]);
    let moves = enumerate_moves(&board, c(7, 0));
    assert_eq!(ends(&moves), vec![c(5, 1), c(6, 2)]);
}

#[test]
fn knight_jumps_over_pieces_and_respects_occupancy() {
    let board = board_with(&[
        (c(7, 1), Side::White, PieceKind::Knight),
        (c(6, 1), Side::White, PieceKind::Pawn),
        (c(6, 2), Side::White, PieceKind::Pawn),
        (c(5, 0), Side::White, PieceKind::Pawn),
        (c(5, 2), Side::Black, PieceKind::Pawn),
    ]);
    let moves = enumerate_moves(&board, c(7, 1));
    assert_eq!(moves.len(), 2);
    assert!(moves.contains(&Move::with_captures(c(7, 1), c(5, 2), vec![c(5, 2)])));
    assert!(moves.contains(&Move::new(c(7, 1), c(6, 3))));
}

#[test]
fn king_steps_once_without_castling() {
    let board = board_with(&[
        (c(7, 4), Side::White, PieceKind::King),
        (c(7, 7), Side::White, PieceKind::Rook),
        (c(6, 4), Side::Black, PieceKind::Pawn),
        (c(6, 5), Side::White, PieceKind::Pawn),
    ]);
    let moves = enumerate_moves(&board, c(7, 4));
    assert_eq!(ends(&moves), vec![c(6, 3), c(6, 4), c(7, 3), c(7, 5)]);
    assert!(moves.contains(&Move::with_captures(c(7, 4), c(6, 4), vec![c(6, 4)])));
}

#[test]
fn pawn_on_start_rank_pushes_one_or_two() {
    let board = board_with(&[(c(6, 3), Side::White, PieceKind::Pawn)]);
    let moves = enumerate_moves(&board, c(6, 3));
    assert_eq!(ends(&moves), vec![c(4, 3), c(5, 3)]);

    let board = board_with(&[(c(1, 3), Side::Black, PieceKind::Pawn)]);
    let moves = enumerate_moves(&board, c(1, 3));
    assert_eq!(ends(&moves), vec![c(2, 3), c(3, 3)]);
}

#[test]
fn pawn_cannot_jump_a_blocked_first_square() {
    let board = board_with(&[
        (c(6, 3), Side::White, PieceKind::Pawn),
        (c(5, 3), Side::Black, PieceKind::Knight),
    ]);
    assert!(enumerate_moves(&board, c(6, 3)).is_empty());

    let board = board_with(&[
        (c(6, 3), Side::White, PieceKind::Pawn),
        (c(4, 3), Side::Black, PieceKind::Knight),
    ]);
    let moves = enumerate_moves(&board, c(6, 3));
    assert_eq!(ends(&moves), vec![c(5, 3)]);
}

#[test]
fn pawn_off_start_rank_pushes_one() {
    let board = board_with(&[(c(5, 3), Side::White, PieceKind::Pawn)]);
    assert_eq!(ends(&enumerate_moves(&board, c(5, 3))), vec![c(4, 3)]);
}

#[test]
fn pawn_diagonals_need_an_opponent() {
    let board = board_with(&[
        (c(4, 4), Side::White, PieceKind::Pawn),
        (c(3, 3), Side::Black, PieceKind::Rook),
        (c(3, 5), Side::White, PieceKind::Rook),
        (c(3, 4), Side::Black, PieceKind::Pawn),
    ]);
    let moves = enumerate_moves(&board, c(4, 4));
    assert_eq!(moves.len(), 1);
    assert!(moves.contains(&Move::with_captures(c(4, 4), c(3, 3), vec![c(3, 3)])));

    // empty diagonals and a free square ahead: forward only
    let board = board_with(&[(c(4, 4), Side::White, PieceKind::Pawn)]);
    assert_eq!(ends(&enumerate_moves(&board, c(4, 4))), vec![c(3, 4)]);
}

#[test]
fn pawn_promotes_on_far_rank() {
    let board = board_with(&[
        (c(1, 2), Side::White, PieceKind::Pawn),
        (c(0, 1), Side::Black, PieceKind::Rook),
    ]);
    let moves = enumerate_moves(&board, c(1, 2));
    assert_eq!(moves.len(), 2);
    assert!(moves.iter().all(Move::is_promotion));

    let board = board_with(&[(c(6, 5), Side::Black, PieceKind::Pawn)]);
    let moves = enumerate_moves(&board, c(6, 5));
    assert_eq!(moves.as_slice(), &[Move::new(c(6, 5), c(7, 5)).promoting()]);
}

#[test]
fn checker_steps_forward_diagonally() {
    let board = board_with(&[
        (c(5, 2), Side::White, PieceKind::Checker),
        (c(2, 2), Side::Black, PieceKind::Checker),
    ]);
    assert_eq!(
        ends(&enumerate_moves(&board, c(5, 2))),
        vec![c(4, 1), c(4, 3)]
    );
    assert_eq!(
        ends(&enumerate_moves(&board, c(2, 2))),
        vec![c(3, 1), c(3, 3)]
    );
}

#[test]
fn checker_king_steps_in_all_diagonals() {
    let board = board_with(&[(c(4, 4), Side::Black, PieceKind::CheckerKing)]);
    assert_eq!(
        ends(&enumerate_moves(&board, c(4, 4))),
        vec![c(3, 3), c(3, 5), c(5, 3), c(5, 5)]
    );
}

#[test]
fn checker_single_jump() {
    let board = board_with(&[
        (c(5, 2), Side::White, PieceKind::Checker),
        (c(4, 3), Side::Black, PieceKind::Checker),
    ]);
    let moves = enumerate_moves(&board, c(5, 2));
    assert!(moves.contains(&Move::with_captures(c(5, 2), c(3, 4), vec![c(4, 3)])));
    assert!(moves.contains(&Move::new(c(5, 2), c(4, 1))));
}

#[test]
fn checker_cannot_jump_own_piece_or_onto_occupied_square() {
    let board = board_with(&[
        (c(5, 2), Side::White, PieceKind::Checker),
        (c(4, 3), Side::White, PieceKind::Checker),
        (c(4, 1), Side::Black, PieceKind::Checker),
        (c(3, 0), Side::Black, PieceKind::Checker),
    ]);
    let moves = enumerate_moves(&board, c(5, 2));
    assert!(moves.iter().all(|m| !m.is_capture()));
}

#[test]
fn checker_chains_jumps_into_one_move() {
    let board = board_with(&[
        (c(7, 0), Side::White, PieceKind::Checker),
        (c(6, 1), Side::Black, PieceKind::Checker),
        (c(4, 3), Side::Black, PieceKind::Checker),
    ]);
    let moves = enumerate_moves(&board, c(7, 0));
    let jumps: Vec<&Move> = moves.iter().filter(|m| m.is_capture()).collect();
    assert_eq!(
        jumps,
        vec![&Move::with_captures(
            c(7, 0),
            c(3, 4),
            vec![c(6, 1), c(4, 3)]
        )]
    );
}

#[test]
fn checker_chain_branches_produce_separate_moves() {
    let board = board_with(&[
        (c(6, 3), Side::White, PieceKind::Checker),
        (c(5, 4), Side::Black, PieceKind::Checker),
        (c(3, 4), Side::Black, PieceKind::Checker),
        (c(3, 6), Side::Black, PieceKind::Checker),
    ]);
    let moves = enumerate_moves(&board, c(6, 3));
    let jumps: Vec<&Move> = moves.iter().filter(|m| m.is_capture()).collect();
    assert_eq!(jumps.len(), 2);
    assert!(jumps.contains(&&Move::with_captures(
        c(6, 3),
        c(2, 3),
        vec![c(5, 4), c(3, 4)]
    )));
    assert!(jumps.contains(&&Move::with_captures(
        c(6, 3),
        c(2, 7),
        vec![c(5, 4), c(3, 6)]
    )));
}

#[test]
fn checker_promotes_when_chain_ends_on_far_rank() {
    let board = board_with(&[
        (c(2, 1), Side::White, PieceKind::Checker),
        (c(1, 2), Side::Black, PieceKind::Checker),
    ]);
    let moves = enumerate_moves(&board, c(2, 1));
    assert!(moves.contains(&Move::with_captures(c(2, 1), c(0, 3), vec![c(1, 2)]).promoting()));
    assert!(moves.contains(&Move::new(c(2, 1), c(1, 0))));
}

#[test]
fn king_chain_never_rejumps_or_returns_to_start() {
    // four men around a square; the full loop would land back on the start
    let board = board_with(&[
        (c(6, 2), Side::White, PieceKind::CheckerKing),
        (c(5, 3), Side::Black, PieceKind::Checker),
        (c(3, 3), Side::Black, PieceKind::Checker),
        (c(3, 1), Side::Black, PieceKind::Checker),
        (c(5, 1), Side::Black, PieceKind::Checker),
    ]);
    let moves = enumerate_moves(&board, c(6, 2));
    let jumps: Vec<&Move> = moves.iter().filter(|m| m.is_capture()).collect();

    assert_eq!(
        jumps,
        vec![
            &Move::with_captures(c(6, 2), c(4, 0), vec![c(5, 3), c(3, 3), c(3, 1)]),
            &Move::with_captures(c(6, 2), c(4, 4), vec![c(5, 1), c(3, 1), c(3, 3)]),
        ]
    );
    for mv in jumps {
        let mut seen = mv.captured().to_vec();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), mv.captured().len(), "{mv} rejumps a piece");
    }
}
