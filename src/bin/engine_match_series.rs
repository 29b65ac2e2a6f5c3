//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --p1 greedy --p2 random --games 50 --verbose`

use grid_chess::engines::engine_select::{build_engine, EngineChoice};
use grid_chess::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

fn flag_value<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|pair| pair[0] == name)
        .map(|pair| pair[1].as_str())
}

fn main() -> Result<(), String> {
    let args: Vec<String> = std::env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");

    let player1_choice = flag_value(&args, "--p1")
        .unwrap_or("greedy")
        .parse::<EngineChoice>()
        .map_err(|e| e.to_string())?;
    let player2_choice = flag_value(&args, "--p2")
        .unwrap_or("random")
        .parse::<EngineChoice>()
        .map_err(|e| e.to_string())?;
    let games = flag_value(&args, "--games")
        .map(|s| s.parse::<u16>().map_err(|_| format!("Invalid game count: {s}")))
        .transpose()?
        .unwrap_or(10);
    let base_seed = flag_value(&args, "--seed")
        .map(|s| s.parse::<u64>().map_err(|_| format!("Invalid seed: {s}")))
        .transpose()?
        .unwrap_or(1234);

    let stats = play_engine_match_series(
        |color, seed| build_engine(player1_choice, color, Some(seed)),
        |color, seed| build_engine(player2_choice, color, Some(seed)),
        MatchSeriesConfig {
            games,
            base_seed,
            per_game: MatchConfig {
                max_plies: 200,
                opening_plies: 4,
                ..MatchConfig::default()
            },
            verbose,
        },
    )
    .map_err(|e| e.to_string())?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}

