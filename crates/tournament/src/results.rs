//! Match results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::MatchConfig;

/// Result of a single game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// The same game seen from the other player's chair.
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Points per game, counting a draw as half a point.
    pub fn score(&self) -> f64 {
        let total = self.total_games();
        if total == 0 {
            return 0.0;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total as f64
    }
}

/// A finished match between two named players
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub player1: String,
    pub player2: String,
    pub config: MatchConfig,
    /// From player1's perspective
    pub result: MatchResult,
}

impl MatchReport {
    pub fn new(player1: &str, player2: &str, config: MatchConfig, result: MatchResult) -> Self {
        Self {
            player1: player1.to_string(),
            player2: player2.to_string(),
            config,
            result,
        }
    }

    /// Save the report to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write: {}", e))
    }

    /// Load a report from a JSON file
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!(
            "=== {}: {} vs {} ===\n",
            self.config.variant, self.player1, self.player2
        ));
        report.push_str(&format!(
            "Config: {} games, max {} plies\n\n",
            self.config.num_games, self.config.max_plies
        ));
        report.push_str(&format!(
            "{:<20} {:>5}-{:<5}-{:<5}\n",
            "Player", "W", "L", "D"
        ));
        report.push_str(&"-".repeat(40));
        report.push('\n');
        report.push_str(&format!(
            "{:<20} {:>5}-{:<5}-{:<5}\n",
            self.player1, self.result.wins, self.result.losses, self.result.draws
        ));
        report.push_str(&format!(
            "{:<20} {:>5}-{:<5}-{:<5}\n",
            self.player2, self.result.losses, self.result.wins, self.result.draws
        ));
        report.push_str(&format!("\nScore: {:.1}%\n", self.result.score() * 100.0));
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}
