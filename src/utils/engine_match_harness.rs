//! Head-to-head engine match harness.
//!
//! A match owns one `GameState` and asks each engine for a move in turn,
//! lending it the board read-only. The game ends when a king is captured, when
//! the side to move has no pseudo-legal move, or after `max_plies`. An
//! optional seeded random opening prefix varies the games of a series.

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;

use crate::engines::engine_trait::{Engine, EngineError};
use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;
use crate::utils::long_algebraic::move_to_long_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinKingCapture,
    BlackWinKingCapture,
    DrawNoMoves,
    DrawMaxPlies,
}

impl MatchOutcome {
    /// PGN result token.
    pub fn pgn_result(self) -> &'static str {
        match self {
            MatchOutcome::WhiteWinKingCapture => "1-0",
            MatchOutcome::BlackWinKingCapture => "0-1",
            MatchOutcome::DrawNoMoves | MatchOutcome::DrawMaxPlies => "1/2-1/2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWinKingCapture { player: PlayerId, color: Color },
    DrawNoMoves,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    /// Random plies played before the engines take over. Zero disables the
    /// opening prefix.
    pub opening_plies: u8,
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            opening_plies: 0,
            verbose: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub initial_state: GameState,
    pub final_state: GameState,
    pub opening_moves_lan: Vec<String>,
    pub played_moves_lan: Vec<String>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
    /// Engine info lines and one `[match]` line per ply, in play order.
    pub log: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            per_game: MatchConfig {
                opening_plies: 4,
                ..MatchConfig::default()
            },
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
    pub overall_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3} overall_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
            self.overall_avg_move_time_ms
        )
    }
}

/// Play a single seeded engine-vs-engine match from the standard start.
///
/// `engine_white` must play White and `engine_black` Black.
pub fn play_engine_match(
    engine_white: Box<dyn Engine>,
    engine_black: Box<dyn Engine>,
    seed: u64,
    config: MatchConfig,
) -> Result<MatchResult, EngineError> {
    play_engine_match_from_state(engine_white, engine_black, GameState::new_game(), seed, config)
}

/// Play a single match from a caller-provided two-player state.
pub fn play_engine_match_from_state(
    mut engine_white: Box<dyn Engine>,
    mut engine_black: Box<dyn Engine>,
    start_state: GameState,
    seed: u64,
    config: MatchConfig,
) -> Result<MatchResult, EngineError> {
    if engine_white.color() != Color::White || engine_black.color() != Color::Black {
        return Err(EngineError::InvalidConfig(format!(
            "engines play {:?} and {:?}, expected White and Black",
            engine_white.color(),
            engine_black.color()
        )));
    }
    if start_state.player_count() != 2 {
        return Err(EngineError::InvalidConfig(format!(
            "matches need two players, state has {}",
            start_state.player_count()
        )));
    }

    engine_white.new_game();
    engine_black.new_game();

    let initial_state = start_state.clone();
    let (mut state, opening_moves_lan) =
        apply_seeded_random_opening(start_state, seed, config.opening_plies);

    let mut result = MatchResult {
        outcome: MatchOutcome::DrawMaxPlies,
        final_state: initial_state.clone(),
        initial_state,
        opening_moves_lan,
        played_moves_lan: Vec::new(),
        white_move_count: 0,
        black_move_count: 0,
        white_total_time_ns: 0,
        black_total_time_ns: 0,
        log: Vec::new(),
    };

    for ply in 0..config.max_plies {
        let mover = state.current_color();
        let candidates = state.find_moves_for_color(mover);
        if candidates.is_empty() {
            result.outcome = MatchOutcome::DrawNoMoves;
            break;
        }

        let started = Instant::now();
        let out = if mover == Color::White {
            engine_white.get_move(&state)?
        } else {
            engine_black.get_move(&state)?
        };
        let elapsed_ns = started.elapsed().as_nanos();

        if mover == Color::White {
            result.white_move_count = result.white_move_count.saturating_add(1);
            result.white_total_time_ns = result.white_total_time_ns.saturating_add(elapsed_ns);
        } else {
            result.black_move_count = result.black_move_count.saturating_add(1);
            result.black_total_time_ns = result.black_total_time_ns.saturating_add(elapsed_ns);
        }

        let chosen = out.best_move;
        if !candidates.contains(&chosen) {
            return Err(EngineError::IllegalMove(chosen));
        }

        let lan = describe_move(&chosen, &state);
        let line = format!("[match] ply {} {:?} {}", ply + 1, mover, lan);
        if config.verbose {
            println!("{line}");
        }
        result.log.extend(out.info_lines);
        result.log.push(line);
        result.played_moves_lan.push(lan);

        state.make_move(&chosen);

        if chosen.captured.kind == PieceKind::King {
            result.outcome = if mover == Color::White {
                MatchOutcome::WhiteWinKingCapture
            } else {
                MatchOutcome::BlackWinKingCapture
            };
            break;
        }
    }

    let summary = format!(
        "[match] outcome {:?} plies {}",
        result.outcome,
        state.move_history().len()
    );
    if config.verbose {
        println!("{summary}");
    }
    result.log.push(summary);
    result.final_state = state;
    Ok(result)
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Factories receive the color to play and an engine seed. Player colors are
/// randomized each game, deterministically from `base_seed`.
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> Result<MatchSeriesStats, EngineError>
where
    F1: Fn(Color, u64) -> Box<dyn Engine>,
    F2: Fn(Color, u64) -> Box<dyn Engine>,
{
    if config.games == 0 {
        return Err(EngineError::InvalidConfig("series needs at least one game".to_owned()));
    }

    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_white = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        // Distinct engine streams per player.
        let seed1 = seed.wrapping_mul(2);
        let seed2 = seed1.wrapping_add(1);
        if config.verbose {
            let (white, black) = if player1_is_white {
                ("Player1", "Player2")
            } else {
                ("Player2", "Player1")
            };
            println!(
                "[series] game {}/{} seed={} white={} black={}",
                i + 1,
                config.games,
                seed,
                white,
                black
            );
        }

        let result = if player1_is_white {
            play_engine_match(
                player1_factory(Color::White, seed1),
                player2_factory(Color::Black, seed2),
                seed,
                config.per_game.clone(),
            )?
        } else {
            play_engine_match(
                player2_factory(Color::White, seed2),
                player1_factory(Color::Black, seed1),
                seed,
                config.per_game.clone(),
            )?
        };

        let (p1_moves, p1_ns, p2_moves, p2_ns) = if player1_is_white {
            (
                result.white_move_count,
                result.white_total_time_ns,
                result.black_move_count,
                result.black_total_time_ns,
            )
        } else {
            (
                result.black_move_count,
                result.black_total_time_ns,
                result.white_move_count,
                result.white_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);

        let winner_color = match result.outcome {
            MatchOutcome::WhiteWinKingCapture => Some(Color::White),
            MatchOutcome::BlackWinKingCapture => Some(Color::Black),
            MatchOutcome::DrawNoMoves | MatchOutcome::DrawMaxPlies => None,
        };
        let mapped = match winner_color {
            Some(color) => {
                let player = if (color == Color::White) == player1_is_white {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWinKingCapture { player, color }
            }
            None => {
                stats.draws += 1;
                if result.outcome == MatchOutcome::DrawNoMoves {
                    SeriesOutcome::DrawNoMoves
                } else {
                    SeriesOutcome::DrawMaxPlies
                }
            }
        };
        stats.outcomes.push(mapped);

        if config.verbose {
            println!(
                "[series] game {}/{} result={:?} p1_wins={} p2_wins={} draws={}\n",
                i + 1,
                config.games,
                mapped,
                stats.player1_wins,
                stats.player2_wins,
                stats.draws
            );
        }
    }

    stats.player1_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player2_total_time_ns, stats.player2_moves);

    let total_ns = stats
        .player1_total_time_ns
        .saturating_add(stats.player2_total_time_ns);
    let total_moves = stats.player1_moves.saturating_add(stats.player2_moves);
    stats.overall_avg_move_time_ms = avg_ns_per_move_ms(total_ns, total_moves);

    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}

fn describe_move(chess_move: &ChessMove, state: &GameState) -> String {
    move_to_long_algebraic(chess_move, state)
        .unwrap_or_else(|_| format!("{:?}{:?}", chess_move.from, chess_move.to))
}

/// Play up to `plies` uniformly random moves, never one that takes a king.
fn apply_seeded_random_opening(
    mut state: GameState,
    seed: u64,
    plies: u8,
) -> (GameState, Vec<String>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut opening_moves_lan = Vec::<String>::new();

    for _ in 0..plies {
        let candidates: Vec<ChessMove> = state
            .find_moves_for_color(state.current_color())
            .into_iter()
            .filter(|mv| mv.captured.kind != PieceKind::King)
            .collect();
        if candidates.is_empty() {
            break;
        }

        let chosen = candidates[rng.random_range(0..candidates.len())];
        opening_moves_lan.push(describe_move(&chosen, &state));
        state.make_move(&chosen);
    }

    (state, opening_moves_lan)
}
