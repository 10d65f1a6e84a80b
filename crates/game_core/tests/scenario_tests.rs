//! End-to-end play through the public engine interface.

use game_core::{Coord, GameHistory, GameState, Move, PieceKind, Side, Variant};

#[test]
fn scripted_chess_opening() {
    let mut state = GameState::new_game(Variant::Chess);
    let mut history = GameHistory::new();

    for (from, to) in [("d2", "d4"), ("e7", "e5"), ("d4", "e5"), ("d8", "h4")] {
        let from = state.parse_coord(from).unwrap();
        let to = state.parse_coord(to).unwrap();
        let mv = state
            .moves_from(from)
            .into_iter()
            .find(|m| m.end() == to)
            .unwrap_or_else(|| panic!("no move {from} -> {to}"));
        history.push(state.clone());
        state.try_execute(&mv).unwrap();
    }

    // white pawn took on e5, black queen came out to h4
    let e5 = state.parse_coord("e5").unwrap();
    let h4 = state.parse_coord("h4").unwrap();
    assert_eq!(state.board().piece_at(e5).map(|p| p.side), Some(Side::White));
    assert_eq!(
        state.board().piece_at(h4).map(|p| p.kind),
        Some(PieceKind::Queen)
    );
    assert_eq!(state.board().pieces_of(Side::Black).count(), 15);
    assert_eq!(state.side_to_move(), Side::White);
    assert_eq!(state.evaluate(Side::White), 1);

    // back to the start
    let mut current = state;
    while let Some(prev) = history.undo(current.clone()) {
        current = prev;
    }
    assert_eq!(current, GameState::new_game(Variant::Chess));
}

#[test]
fn capturing_the_king_ends_a_chess_game() {
    let mut state = GameState::new_game(Variant::Chess);
    let mut board = state.board().clone();
    // clear e-file pawns and put a white rook in front of the black king
    board.remove(Coord::new(1, 4));
    board.remove(Coord::new(6, 4));
    board.place(
        Coord::new(4, 4),
        game_core::Piece::new(Side::White, PieceKind::Rook),
    );
    state = GameState::new(board, Variant::Chess, Side::White);

    let take_king = Move::with_captures(Coord::new(4, 4), Coord::new(0, 4), vec![Coord::new(0, 4)]);
    assert!(state.legal_moves().contains(&take_king));
    state.execute(&take_king);

    assert!(state.check_loss(Side::Black));
    assert!(state.is_lost());
}

#[test]
fn checkers_game_plays_to_a_result_with_first_moves() {
    let mut state = GameState::new_game(Variant::Checkers);
    let mut plies = 0;
    while !state.is_lost() && plies < 500 {
        let mv = state.legal_moves().get(0).cloned().unwrap();
        state.execute(&mv);
        plies += 1;
    }
    // pieces only ever leave the board
    let total = state.board().pieces_of(Side::White).count()
        + state.board().pieces_of(Side::Black).count();
    assert!(total <= 24);
}
