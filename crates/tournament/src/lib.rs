//! Tournament Runner
//!
//! This crate provides infrastructure for:
//! - Building agents from short player specs (`random`, `greedy`, `minimax3`)
//! - Running matches between two agents in either variant
//! - Reporting and saving match results
//!
//! # Usage
//!
//! ```bash
//! # Ten checkers games between a depth-3 minimax and the greedy player
//! cargo run -p tournament -- checkers minimax3 greedy --games 10
//!
//! # Settings from a file, results written to JSON
//! cargo run -p tournament -- chess minimax2 random --config match.toml --out results.json
//! ```

mod config;
mod match_runner;
mod players;
mod results;

pub use config::*;
pub use match_runner::*;
pub use players::*;
pub use results::*;
