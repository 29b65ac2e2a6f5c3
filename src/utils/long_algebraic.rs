use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::ChessMove;
use crate::utils::algebraic::{algebraic_to_location, location_to_algebraic};

/// Render `chess_move` as `e2e4`, with a `q` suffix when a pawn lands on an
/// edge row. `game_state` is the position before the move is made.
pub fn move_to_long_algebraic(
    chess_move: &ChessMove,
    game_state: &GameState,
) -> Result<String, String> {
    let height = game_state.board_height();
    let moved = game_state
        .occupant_at(chess_move.from)
        .copied()
        .ok_or_else(|| format!("Move starts off the board: {:?}", chess_move.from))?;
    if moved.is_empty() {
        return Err(format!("No piece found on from-square {:?}", chess_move.from));
    }

    let mut out = String::new();
    out.push_str(&location_to_algebraic(chess_move.from, height)?);
    out.push_str(&location_to_algebraic(chess_move.to, height)?);

    if is_promotion(game_state, &moved, chess_move) {
        out.push('q');
    }

    Ok(out)
}

/// Resolve long algebraic text against the moves the side to move can make.
/// The promotion suffix may be omitted; anything but `q` is rejected.
pub fn long_algebraic_to_move(
    long_algebraic: &str,
    game_state: &GameState,
) -> Result<ChessMove, String> {
    let (from_text, to_text, promotion) = split_long_algebraic(long_algebraic)?;
    let (height, width) = (game_state.board_height(), game_state.board_width());
    let from = algebraic_to_location(from_text, height, width)?;
    let to = algebraic_to_location(to_text, height, width)?;

    let moving = game_state
        .occupant_at(from)
        .copied()
        .filter(|o| !o.is_empty())
        .ok_or_else(|| format!("No piece on from-square: {from_text}"))?;
    if moving.color != game_state.current_color() {
        return Err("Attempted to move a piece that is not on side to move".to_owned());
    }

    let chess_move = game_state
        .find_legal_moves(from.0, from.1)
        .into_iter()
        .find(|mv| mv.to == to)
        .ok_or_else(|| format!("Move is not available: {long_algebraic}"))?;

    match promotion {
        None => {}
        Some('q') if is_promotion(game_state, &moving, &chess_move) => {}
        Some('q') => return Err("Promotion move must end on an edge row".to_owned()),
        Some(other) => {
            return Err(format!(
                "Invalid promotion piece character: {other}, pawns always promote to a queen"
            ))
        }
    }

    Ok(chess_move)
}

fn is_promotion(game_state: &GameState, moved: &Occupant, chess_move: &ChessMove) -> bool {
    let last_row = game_state.board_height() as i32 - 1;
    moved.kind == PieceKind::Pawn && (chess_move.to.0 == 0 || chess_move.to.0 == last_row)
}

/// Split `a10b12q` style text into its two squares and optional suffix.
fn split_long_algebraic(text: &str) -> Result<(&str, &str, Option<char>), String> {
    let invalid = || format!("Invalid long algebraic move: {text}");
    if !text.is_ascii() {
        return Err(invalid());
    }

    let bytes = text.as_bytes();
    let square_end = |start: usize| -> Result<usize, String> {
        if !bytes.get(start).is_some_and(u8::is_ascii_lowercase) {
            return Err(invalid());
        }
        let digits = bytes[start + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits == 0 {
            return Err(invalid());
        }
        Ok(start + 1 + digits)
    };

    let from_end = square_end(0)?;
    let to_end = square_end(from_end)?;
    let promotion = match &text[to_end..] {
        "" => None,
        rest if rest.len() == 1 => rest.chars().next(),
        _ => return Err(invalid()),
    };

    Ok((&text[..from_end], &text[from_end..to_end], promotion))
}
