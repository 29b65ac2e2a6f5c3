//! Play one engine-vs-engine game and print the board, outcome and PGN.
//!
//! Run with:
//! `cargo run --release -- --white greedy --black random-piece --seed 7`
//! `cargo run --release -- --max-plies 80 --verbose`

use grid_chess::engines::engine_select::{build_engine, EngineChoice};
use grid_chess::game_state::chess_types::Color;
use grid_chess::utils::engine_match_harness::{play_engine_match, MatchConfig};
use grid_chess::utils::pgn::{write_pgn, PgnHeaders};
use grid_chess::utils::render_game_state::render_game_state;

fn flag_value<'a>(args: &'a [String], names: &[&str]) -> Option<&'a str> {
    args.windows(2)
        .find(|pair| names.contains(&pair[0].as_str()))
        .map(|pair| pair[1].as_str())
}

fn parse_engine(args: &[String], names: &[&str]) -> Result<EngineChoice, String> {
    flag_value(args, names)
        .unwrap_or("random")
        .parse::<EngineChoice>()
        .map_err(|e| e.to_string())
}

fn main() -> Result<(), String> {
    let args: Vec<String> = std::env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");

    let white_choice = parse_engine(&args, &["--white", "-w"])?;
    let black_choice = parse_engine(&args, &["--black", "-b"])?;
    let seed = flag_value(&args, &["--seed", "-s"])
        .map(|s| s.parse::<u64>().map_err(|_| format!("Invalid seed: {s}")))
        .transpose()?;
    let max_plies = flag_value(&args, &["--max-plies"])
        .map(|s| s.parse::<u16>().map_err(|_| format!("Invalid max plies: {s}")))
        .transpose()?
        .unwrap_or(MatchConfig::default().max_plies);

    let white = build_engine(white_choice, Color::White, seed);
    let black = build_engine(black_choice, Color::Black, seed.map(|s| s.wrapping_add(1)));
    let headers_white = white.name().to_owned();
    let headers_black = black.name().to_owned();

    let result = play_engine_match(
        white,
        black,
        seed.unwrap_or(0),
        MatchConfig {
            max_plies,
            verbose,
            ..MatchConfig::default()
        },
    )
    .map_err(|e| e.to_string())?;

    println!("{}", render_game_state(&result.final_state));
    println!();
    println!(
        "outcome: {:?} after {} plies",
        result.outcome,
        result.final_state.move_history().len()
    );
    println!();

    let headers = PgnHeaders {
        white: headers_white,
        black: headers_black,
        result: result.outcome.pgn_result().to_owned(),
        ..PgnHeaders::default()
    };
    let pgn = write_pgn(
        &result.initial_state,
        result.final_state.move_history(),
        &headers,
    )?;
    print!("{pgn}");
    Ok(())
}
