//! FEN piece-placement parser.
//!
//! Reads the first field of a Forsyth-Edwards Notation string into rows of
//! occupants. Rows are separated by `/` and the first row is row 0, the far
//! side from White. Digits are runs of empty squares; consecutive digits form
//! one number so boards wider than nine files can be written. Every row must
//! describe the same number of squares.
//!
//! `parse_fen` reads the remaining fields too. The side to move picks the
//! current player, castling rights are expressed by marking kings and rooks
//! as moved, and the en passant square becomes the double push that made it.
//! The halfmove and fullmove clocks are accepted and ignored.

use crate::game_state::chess_rules::{KING_HOME_COL, KING_SIDE_ROOK_OFFSET, QUEEN_SIDE_ROOK_OFFSET};
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::ChessMove;
use crate::utils::algebraic::algebraic_to_location;

pub fn parse_piece_placement(placement: &str) -> Result<Vec<Vec<Occupant>>, String> {
    let board_part = placement
        .split_whitespace()
        .next()
        .ok_or("Missing board layout in piece placement")?;

    let mut rows = Vec::new();
    for (row_idx, row_str) in board_part.split('/').enumerate() {
        let row = parse_row(row_str).map_err(|e| format!("Row {row_idx}: {e}"))?;
        rows.push(row);
    }

    let width = rows.first().map(Vec::len).unwrap_or(0);
    if width == 0 {
        return Err("Board layout must have at least one column".to_owned());
    }
    if let Some(row_idx) = rows.iter().position(|row| row.len() != width) {
        return Err(format!(
            "Row {row_idx} has {} squares, expected {width}",
            rows[row_idx].len()
        ));
    }

    Ok(rows)
}

pub fn parse_fen(fen: &str, player_count: usize) -> Result<GameState, String> {
    let mut parts = fen.split_whitespace();
    let placement = parts.next().ok_or("Missing board layout in FEN")?;
    let side_part = parts.next().ok_or("Missing side to move in FEN")?;
    let castling_part = parts.next().ok_or("Missing castling rights in FEN")?;
    let en_passant_part = parts.next().ok_or("Missing en passant square in FEN")?;

    let mut game_state = GameState::from_layout(parse_piece_placement(placement)?, player_count)?;

    let side_to_move = match side_part {
        "w" => Color::White,
        "b" => Color::Black,
        _ => return Err(format!("Invalid side to move in FEN: {side_part}")),
    };
    let player = if side_to_move == Color::White { 1 } else { 2 };
    if player > game_state.player_count() {
        return Err(format!(
            "Side to move {side_part} needs at least {player} players, game has {}",
            game_state.player_count()
        ));
    }
    game_state.set_current_player(player);

    mark_advanced_pawns(&mut game_state);
    apply_castling_rights(&mut game_state, castling_part)?;

    if en_passant_part != "-" {
        let last_move = en_passant_origin(&game_state, en_passant_part, side_to_move)?;
        game_state.set_last_move(Some(last_move));
    }

    Ok(game_state)
}

/// Pawns off their home row can no longer double push.
fn mark_advanced_pawns(game_state: &mut GameState) {
    let height = game_state.board_height() as i32;
    let pawn_locations: Vec<BoardLocation> = game_state
        .locations()
        .filter(|&loc| {
            game_state.occupant_at(loc).is_some_and(|o| {
                o.kind == PieceKind::Pawn
                    && match o.color {
                        Color::White => loc.0 != height - 2,
                        Color::Black => loc.0 != 1,
                        Color::None => false,
                    }
            })
        })
        .collect();

    for location in pawn_locations {
        mark_moved(game_state, location);
    }
}

/// A right missing from `castling` marks its rook as moved. A color left with
/// no rights at all also has its king marked, provided a rook still stands on
/// one of the castling squares.
fn apply_castling_rights(game_state: &mut GameState, castling: &str) -> Result<(), String> {
    if castling != "-" {
        if let Some(bad) = castling.chars().find(|c| !matches!(c, 'K' | 'Q' | 'k' | 'q')) {
            return Err(format!("Invalid castling character '{bad}' in FEN"));
        }
    }

    let last_row = game_state.board_height() as i32 - 1;
    for (color, row, king_flag, queen_flag) in
        [(Color::White, last_row, 'K', 'Q'), (Color::Black, 0, 'k', 'q')]
    {
        let mut rook_on_castle_square = false;
        let rook_flags = [
            (KING_SIDE_ROOK_OFFSET, king_flag),
            (QUEEN_SIDE_ROOK_OFFSET, queen_flag),
        ];
        for (offset, flag) in rook_flags {
            let rook_location = (row, KING_HOME_COL + offset);
            let is_rook = game_state
                .occupant_at(rook_location)
                .is_some_and(|o| o.kind == PieceKind::Rook && o.color == color);
            rook_on_castle_square |= is_rook;
            if is_rook && !castling.contains(flag) {
                mark_moved(game_state, rook_location);
            }
        }

        let has_any_right = castling.contains(king_flag) || castling.contains(queen_flag);
        let king_location = (row, KING_HOME_COL);
        let is_king = game_state
            .occupant_at(king_location)
            .is_some_and(|o| o.kind == PieceKind::King && o.color == color);
        if is_king && !has_any_right && rook_on_castle_square {
            mark_moved(game_state, king_location);
        }
    }

    Ok(())
}

/// The double push that left `square` behind, played by the side not to move.
fn en_passant_origin(
    game_state: &GameState,
    square: &str,
    side_to_move: Color,
) -> Result<ChessMove, String> {
    let skipped = algebraic_to_location(
        square,
        game_state.board_height(),
        game_state.board_width(),
    )?;
    let pusher = side_to_move.opposite();
    let direction = pusher.pawn_direction();
    let to = (skipped.0 + direction, skipped.1);
    let from = (skipped.0 - direction, skipped.1);

    let pawn_in_place = game_state
        .occupant_at(to)
        .is_some_and(|o| o.kind == PieceKind::Pawn && o.color == pusher);
    if !pawn_in_place || !game_state.in_bounds(from) {
        return Err(format!("En passant square {square} has no pawn beside it"));
    }

    Ok(ChessMove::new(to, from))
}

fn mark_moved(game_state: &mut GameState, location: BoardLocation) {
    let mut occupant = game_state.take_occupant(location);
    occupant.has_moved = true;
    game_state.put_occupant(location, occupant);
}

fn parse_row(row_str: &str) -> Result<Vec<Occupant>, String> {
    let mut row = Vec::new();
    let mut pending_empty = 0usize;

    for ch in row_str.chars() {
        if let Some(digit) = ch.to_digit(10) {
            pending_empty = pending_empty * 10 + digit as usize;
            continue;
        }

        if pending_empty > 0 {
            row.extend(std::iter::repeat_n(Occupant::EMPTY, pending_empty));
            pending_empty = 0;
        }

        let (color, kind) =
            piece_from_fen_char(ch).ok_or_else(|| format!("Invalid piece character '{ch}'"))?;
        row.push(Occupant::new(kind, color));
    }
    row.extend(std::iter::repeat_n(Occupant::EMPTY, pending_empty));

    if row.is_empty() {
        return Err("Empty row".to_owned());
    }
    Ok(row)
}

pub(crate) fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let piece = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, piece))
}
