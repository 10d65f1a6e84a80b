//! Fixed-depth minimax search

use game_core::{GameError, GameState, Move, Side};
use tracing::trace;

/// Score of a position the searching side has lost.
pub const LOSS: i32 = -1_000_000;
/// Score of a position the searching side has won.
pub const WIN: i32 = 1_000_000;

/// Best line found at one node of the search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Score from the searching side's perspective
    pub score: i32,
    /// Move achieving it (None at terminal and horizon nodes)
    pub best_move: Option<Move>,
}

impl SearchOutcome {
    fn leaf(score: i32) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

/// Searches `state` to `depth` plies and returns the best score and move for
/// `agent`, whose perspective every score is taken from.
///
/// Each child is explored on its own copy of the state, so `state` itself is
/// never modified. The first move seen keeps ties: a later move replaces the
/// current best only if it is strictly better for the side choosing.
///
/// # Errors
/// [`GameError::NoLegalMoves`] if a non-terminal position offers no move.
pub fn search(
    state: &GameState,
    depth: u8,
    agent: Side,
    nodes: &mut u64,
) -> Result<SearchOutcome, GameError> {
    *nodes += 1;
    let mover = state.side_to_move();

    if state.check_loss(mover) {
        return Ok(SearchOutcome::leaf(if mover == agent { LOSS } else { WIN }));
    }
    if state.check_draw() {
        return Ok(SearchOutcome::leaf(0));
    }
    if depth == 0 {
        return Ok(SearchOutcome::leaf(state.evaluate(agent)));
    }

    let moves = state.legal_moves();
    if moves.is_empty() {
        return Err(GameError::NoLegalMoves { side: mover });
    }

    let maximizing = mover == agent;
    let mut best: Option<(i32, &Move)> = None;

    for mv in &moves {
        let mut child = state.clone();
        child.execute(mv);
        let score = search(&child, depth - 1, agent, nodes)?.score;
        trace!(depth, %mv, score, "searched move");

        let better = match best {
            None => true,
            Some((best_score, _)) if maximizing => score > best_score,
            Some((best_score, _)) => score < best_score,
        };
        if better {
            best = Some((score, mv));
        }
    }

    let (score, mv) = best.ok_or(GameError::NoLegalMoves { side: mover })?;
    Ok(SearchOutcome {
        score,
        best_move: Some(mv.clone()),
    })
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
