//! Tournament CLI
//!
//! Run a match between two agents in chess or checkers.

use anyhow::{anyhow, bail, Context, Result};
use game_core::Variant;
use std::env;
use std::path::{Path, PathBuf};
use tournament::{create_engine, MatchConfig, MatchReport, MatchRunner};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Board Game Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament <chess|checkers> <player1> <player2> [options]");
    println!();
    println!("Players:");
    println!("  random        - Uniformly random legal moves");
    println!("  greedy        - Most valuable capture, random among ties");
    println!("  minimaxN      - Fixed-depth minimax searching N plies (1-9)");
    println!();
    println!("Options:");
    println!("  --games N       Number of games (default 10)");
    println!("  --max-plies N   Plies before a game is scored as a draw (default 200)");
    println!("  --config FILE   Load match settings from a TOML file");
    println!("  --history       Keep undo/redo snapshots of every game");
    println!("  --verbose       Print the board after every move");
    println!("  --out FILE      Save the match report as JSON");
    println!();
    println!("Examples:");
    println!("  tournament checkers minimax3 greedy --games 20");
    println!("  tournament chess minimax2 random --config match.toml --out results.json");
}

/// Command line settings, applied on top of an optional config file
#[derive(Debug, Default)]
struct Args {
    variant: Option<Variant>,
    player1: String,
    player2: String,
    games: Option<u32>,
    max_plies: Option<u32>,
    config: Option<PathBuf>,
    history: bool,
    verbose: bool,
    out: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut positional = Vec::new();
    let mut parsed = Args::default();

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        let mut value = || {
            i += 1;
            args.get(i)
                .cloned()
                .ok_or_else(|| anyhow!("{flag} requires a value"))
        };
        match flag {
            "--games" | "-g" => {
                parsed.games = Some(value()?.parse().context("--games expects a number")?)
            }
            "--max-plies" => {
                parsed.max_plies = Some(value()?.parse().context("--max-plies expects a number")?)
            }
            "--config" | "-c" => parsed.config = Some(value()?.into()),
            "--out" | "-o" => parsed.out = Some(value()?.into()),
            "--history" => parsed.history = true,
            "--verbose" | "-v" => parsed.verbose = true,
            other if other.starts_with('-') => bail!("unknown option {other}"),
            other => positional.push(other.to_string()),
        }
        i += 1;
    }

    let [variant, player1, player2] = <[String; 3]>::try_from(positional)
        .map_err(|_| anyhow!("expected a game and two players"))?;
    parsed.variant = Some(variant.parse()?);
    parsed.player1 = player1;
    parsed.player2 = player2;
    Ok(parsed)
}

fn build_config(args: &Args) -> Result<MatchConfig> {
    let mut config = match &args.config {
        Some(path) => MatchConfig::load(path)?,
        None => MatchConfig::default(),
    };
    if let Some(variant) = args.variant {
        config.variant = variant;
    }
    if let Some(games) = args.games {
        config.num_games = games;
    }
    if let Some(max_plies) = args.max_plies {
        config.max_plies = max_plies;
    }
    config.record_history |= args.history;
    config.verbose |= args.verbose;
    config.validate()?;
    Ok(config)
}

fn run(args: &Args) -> Result<()> {
    let config = build_config(args)?;

    let mut engine1 = create_engine(&args.player1)?;
    let mut engine2 = create_engine(&args.player2)?;

    info!(
        variant = %config.variant,
        player1 = engine1.name(),
        player2 = engine2.name(),
        games = config.num_games,
        max_plies = config.max_plies,
        "starting match"
    );

    let runner = MatchRunner::new(config.clone());
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut())?;

    let report = MatchReport::new(&args.player1, &args.player2, config, result);
    report.print_report();

    if let Some(out) = &args.out {
        save_report(&report, out)?;
        info!(path = %out.display(), "report saved");
    }
    Ok(())
}

fn save_report(report: &MatchReport, path: &Path) -> Result<()> {
    report
        .save(path)
        .map_err(|e| anyhow!(e))
        .with_context(|| format!("saving report to {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() || matches!(args[0].as_str(), "help" | "--help" | "-h") {
        print_usage();
        return Ok(());
    }

    let args = match parse_args(&args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e:#}");
            print_usage();
            std::process::exit(2);
        }
    };
    run(&args)
}
