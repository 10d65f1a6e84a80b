use crate::game_state::GameState;

/// Pure perft node count.
/// Counts all positions reachable from `state` in exactly `depth` plies,
/// cloning the state for every branch.
pub fn perft(state: &GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = state.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in &moves {
        let mut child = state.clone();
        child.execute(mv);
        nodes += perft(&child, depth - 1);
    }
    nodes
}
