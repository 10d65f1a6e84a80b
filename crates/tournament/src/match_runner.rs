//! Match runner for playing games between engines

use game_core::{Engine, GameError, GameHistory, GameState, SearchResult, Side};
use tracing::{debug, info, warn};

use crate::config::MatchConfig;
use crate::results::{GameResult, MatchResult};

/// How a single game ended
#[derive(Debug, Clone)]
pub struct GameRecord {
    /// From white's perspective
    pub result: GameResult,
    /// Plies actually played
    pub plies: u32,
    pub final_state: GameState,
    /// Snapshots before every move, when history recording is on
    pub history: Option<GameHistory>,
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(
        &self,
        engine1: &mut dyn Engine,
        engine2: &mut dyn Engine,
    ) -> Result<MatchResult, GameError> {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            // Alternate colors if configured
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let record = if engine1_white {
                self.play_game(engine1, engine2)?
            } else {
                self.play_game(engine2, engine1)?
            };
            // Flip result when engine1 was black
            let game_result = if engine1_white {
                record.result
            } else {
                record.result.flipped()
            };
            if let Some(history) = &record.history {
                debug!(snapshots = history.len(), plies = record.plies, "history recorded");
            }
            result.record(game_result);

            let color = if engine1_white { "W" } else { "B" };
            let outcome = match game_result {
                GameResult::Win => "1-0",
                GameResult::Loss => "0-1",
                GameResult::Draw => "1/2",
            };
            info!(
                game = game_num + 1,
                of = self.config.num_games,
                outcome,
                color,
                wins = result.wins,
                losses = result.losses,
                draws = result.draws,
                "game finished"
            );
        }

        Ok(result)
    }

    /// Play a single game from the variant's starting position.
    ///
    /// The game ends when the side to move has lost, a draw is declared, the
    /// side to move has no legal move (scored as a draw), or the ply cap is
    /// reached (also a draw). Every move an engine returns is checked against
    /// the legal move set before it is played.
    pub fn play_game(
        &self,
        white: &mut dyn Engine,
        black: &mut dyn Engine,
    ) -> Result<GameRecord, GameError> {
        let mut state = GameState::new_game(self.config.variant);
        let mut history = self.config.record_history.then(GameHistory::new);
        white.new_game();
        black.new_game();

        let mut plies = 0;
        let result = loop {
            let mover = state.side_to_move();
            if state.check_loss(mover) {
                break match mover {
                    Side::White => GameResult::Loss,
                    Side::Black => GameResult::Win,
                };
            }
            if state.check_draw() {
                break GameResult::Draw;
            }
            if plies >= self.config.max_plies {
                warn!(plies, "ply cap reached, scoring as a draw");
                break GameResult::Draw;
            }

            let engine: &mut dyn Engine = match mover {
                Side::White => &mut *white,
                Side::Black => &mut *black,
            };
            let mv = match engine.search(&state) {
                Ok(SearchResult {
                    best_move: Some(mv),
                    ..
                }) => mv,
                Ok(_) => {
                    warn!(
                        side = %mover,
                        engine = engine.name(),
                        "engine returned no move, scoring as a draw"
                    );
                    break GameResult::Draw;
                }
                Err(GameError::NoLegalMoves { side }) => {
                    info!(%side, "no legal moves, scoring as a draw");
                    break GameResult::Draw;
                }
                Err(e) => return Err(e),
            };

            if let Some(history) = history.as_mut() {
                history.push(state.clone());
            }
            state.try_execute(&mv)?;
            plies += 1;

            debug!(
                ply = plies,
                side = %mover,
                engine = engine.name(),
                from = %state.format_coord(mv.start()),
                to = %state.format_coord(mv.end()),
                captures = mv.capture_count(),
                "move played"
            );
            if self.config.verbose {
                println!("{}", state.board());
            }
        };

        Ok(GameRecord {
            result,
            plies,
            final_state: state,
            history,
        })
    }
}

/// Quick utility to run a short match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    config: MatchConfig,
) -> Result<MatchResult, GameError> {
    MatchRunner::new(config).run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
