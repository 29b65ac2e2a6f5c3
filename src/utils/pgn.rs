//! PGN read/write utilities for game history interchange.
//!
//! Movetext is written in long algebraic form (`1. e2e4 e7e5`) and replayed
//! through the move generator when read back, so castling and en passant are
//! recovered from the position rather than from annotations.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};

use crate::game_state::chess_rules::{STARTING_PIECE_PLACEMENT, STARTING_POSITION_FEN};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;
use crate::utils::fen_generator::generate_fen;
use crate::utils::long_algebraic::{long_algebraic_to_move, move_to_long_algebraic};

/// Seven Tag Roster. `date` defaults to today's local date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PgnHeaders {
    pub event: String,
    pub site: String,
    pub date: NaiveDate,
    pub round: String,
    pub white: String,
    pub black: String,
    pub result: String,
}

impl Default for PgnHeaders {
    fn default() -> Self {
        Self {
            event: "Grid Chess Game".to_owned(),
            site: "Local".to_owned(),
            date: Local::now().date_naive(),
            round: "-".to_owned(),
            white: "White".to_owned(),
            black: "Black".to_owned(),
            result: "*".to_owned(),
        }
    }
}

impl PgnHeaders {
    fn to_map(&self) -> BTreeMap<String, String> {
        let mut headers = BTreeMap::new();
        headers.insert("Event".to_owned(), self.event.clone());
        headers.insert("Site".to_owned(), self.site.clone());
        headers.insert("Date".to_owned(), self.date.format("%Y.%m.%d").to_string());
        headers.insert("Round".to_owned(), self.round.clone());
        headers.insert("White".to_owned(), self.white.clone());
        headers.insert("Black".to_owned(), self.black.clone());
        headers.insert("Result".to_owned(), normalize_result(&self.result).to_owned());
        headers
    }
}

#[derive(Debug, Clone)]
pub struct PgnGame {
    pub headers: BTreeMap<String, String>,
    pub initial_state: GameState,
    pub move_history: Vec<ChessMove>,
    pub final_state: GameState,
    pub result: String,
}

/// Write `move_history`, played from `initial_state`, as PGN. Any start
/// other than the standard opening position is recorded with `SetUp` and a
/// full `FEN` header, so a game may begin mid-way or with Black to move.
pub fn write_pgn(
    initial_state: &GameState,
    move_history: &[ChessMove],
    headers: &PgnHeaders,
) -> Result<String, String> {
    let mut header_map = headers.to_map();

    let initial_fen = generate_fen(initial_state);
    if initial_fen != STARTING_POSITION_FEN {
        header_map.insert("SetUp".to_owned(), "1".to_owned());
        header_map.insert("FEN".to_owned(), initial_fen);
    }

    let mut out = String::new();
    for (key, value) in &header_map {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let player_count = initial_state.player_count().max(1);
    let first_move_number = initial_state.move_history().len() / player_count + 1;
    let first_turn = initial_state.current_player().saturating_sub(1);
    let mut state = initial_state.clone();
    let mut movetext_parts = Vec::<String>::with_capacity(move_history.len() + 1);
    for (ply, mv) in move_history.iter().enumerate() {
        let lan = move_to_long_algebraic(mv, &state)?;
        let turn = first_turn + ply;
        let move_number = first_move_number + turn / player_count;
        if turn % player_count == 0 {
            movetext_parts.push(format!("{move_number}. {lan}"));
        } else if ply == 0 {
            movetext_parts.push(format!("{move_number}... {lan}"));
        } else {
            movetext_parts.push(lan);
        }
        state.make_move(mv);
    }

    movetext_parts.push(normalize_result(&headers.result).to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    Ok(out)
}

pub fn read_pgn(pgn: &str, player_count: usize) -> Result<PgnGame, String> {
    let mut headers = BTreeMap::<String, String>::new();
    let mut movetext_lines = Vec::<String>::new();

    for line in pgn.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('[') {
            let (k, v) = parse_header_line(trimmed)?;
            headers.insert(k, v);
        } else {
            movetext_lines.push(trimmed.to_owned());
        }
    }

    let initial_state = if let Some(fen) = headers.get("FEN") {
        GameState::from_fen(fen, player_count)?
    } else if headers.get("SetUp").map(|x| x.as_str()) == Some("1") {
        return Err("PGN SetUp=1 is present but FEN header is missing".to_owned());
    } else {
        GameState::from_piece_placement(STARTING_PIECE_PLACEMENT, player_count)?
    };

    let mut state = initial_state.clone();
    let mut move_history = Vec::<ChessMove>::new();
    let mut result = "*".to_owned();

    let movetext = strip_pgn_comments_and_variations(&movetext_lines.join(" "));
    for token in movetext.split_whitespace() {
        if is_move_number_token(token) {
            continue;
        }

        let cleaned = trim_annotation_suffix(token);
        if is_result_token(cleaned) {
            result = cleaned.to_owned();
            break;
        }

        let mv = long_algebraic_to_move(cleaned, &state)?;
        state.make_move(&mv);
        move_history.push(mv);
    }

    if let Some(header_result) = headers.get("Result") {
        result = normalize_result(header_result).to_owned();
    }

    Ok(PgnGame {
        headers,
        initial_state,
        move_history,
        final_state: state,
        result,
    })
}

fn parse_header_line(line: &str) -> Result<(String, String), String> {
    let inner = line
        .strip_prefix('[')
        .and_then(|l| l.strip_suffix(']'))
        .ok_or_else(|| format!("Invalid PGN header line: {line}"))?;
    let (key, value_raw) = inner
        .split_once(' ')
        .ok_or_else(|| format!("Invalid PGN header value: {line}"))?;

    let value = value_raw
        .trim()
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .ok_or_else(|| format!("Invalid quoted PGN header value: {line}"))?
        .replace("\\\"", "\"");
    Ok((key.trim().to_owned(), value))
}

fn strip_pgn_comments_and_variations(text: &str) -> String {
    let mut out = String::new();
    let mut brace_depth = 0usize;
    let mut paren_depth = 0usize;

    for ch in text.chars() {
        match ch {
            '{' => brace_depth = brace_depth.saturating_add(1),
            '}' => brace_depth = brace_depth.saturating_sub(1),
            '(' => paren_depth = paren_depth.saturating_add(1),
            ')' => paren_depth = paren_depth.saturating_sub(1),
            _ if brace_depth == 0 && paren_depth == 0 => out.push(ch),
            _ => {}
        }
    }

    out
}

fn is_move_number_token(token: &str) -> bool {
    let head = token.trim_end_matches('.');
    head.len() < token.len() && !head.is_empty() && head.chars().all(|c| c.is_ascii_digit())
}

fn trim_annotation_suffix(token: &str) -> &str {
    token.trim_end_matches(|c: char| matches!(c, '+' | '#' | '!' | '?'))
}

fn is_result_token(token: &str) -> bool {
    matches!(token, "1-0" | "0-1" | "1/2-1/2" | "*")
}

fn normalize_result(result: &str) -> &str {
    if is_result_token(result) {
        result
    } else {
        "*"
    }
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('"', "\\\"")
}
