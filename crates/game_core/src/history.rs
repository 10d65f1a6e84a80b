use crate::game_state::GameState;

/// Undo/redo stacks of whole game-state snapshots.
#[derive(Clone, Debug, Default)]
pub struct GameHistory {
    undo_stack: Vec<GameState>,
    redo_stack: Vec<GameState>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves a snapshot taken before a move. Any pending redos are dropped.
    pub fn push(&mut self, state: GameState) {
        self.undo_stack.push(state);
        self.redo_stack.clear();
    }

    /// Returns the previous snapshot, stacking `current` for redo.
    pub fn undo(&mut self, current: GameState) -> Option<GameState> {
        let prev = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(prev)
    }

    /// Returns the snapshot most recently undone, stacking `current` for undo.
    pub fn redo(&mut self, current: GameState) -> Option<GameState> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of snapshots available to undo.
    pub fn len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod history_tests;
