use crate::game_state::chess_rules::{KING_HOME_COL, KING_SIDE_ROOK_OFFSET, QUEEN_SIDE_ROOK_OFFSET};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::ChessMove;
use crate::utils::algebraic::location_to_algebraic;

/// The FEN piece-placement field for the board, row 0 first. Runs of empty
/// squares longer than nine are written as multi-digit numbers.
pub fn generate_piece_placement(game_state: &GameState) -> String {
    let mut rows = Vec::with_capacity(game_state.board_height());

    for row in game_state.board() {
        let mut out = String::new();
        let mut empty_count = 0usize;

        for occupant in row {
            match piece_fen_char(occupant) {
                Some(ch) => {
                    if empty_count > 0 {
                        out.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    out.push(ch);
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push_str(&empty_count.to_string());
        }
        rows.push(out);
    }

    rows.join("/")
}

/// Full six-field FEN. Castling rights are read off unmoved kings and rooks,
/// and the en passant field off the last move. The halfmove clock is not
/// tracked and is always written as 0.
pub fn generate_fen(game_state: &GameState) -> String {
    let side_to_move = match game_state.current_color() {
        Color::White => "w",
        Color::Black => "b",
        Color::None => "-",
    };
    let fullmove_number =
        game_state.move_history().len() / game_state.player_count().max(1) + 1;

    format!(
        "{} {} {} {} 0 {}",
        generate_piece_placement(game_state),
        side_to_move,
        generate_castling_field(game_state),
        generate_en_passant_field(game_state),
        fullmove_number
    )
}

fn generate_castling_field(game_state: &GameState) -> String {
    let last_row = game_state.board_height() as i32 - 1;
    let mut out = String::new();

    for (color, row) in [(Color::White, last_row), (Color::Black, 0)] {
        let king_ready = game_state
            .occupant_at((row, KING_HOME_COL))
            .is_some_and(|o| o.kind == PieceKind::King && o.color == color && !o.has_moved);
        if !king_ready {
            continue;
        }

        for (offset, flag) in [(KING_SIDE_ROOK_OFFSET, 'K'), (QUEEN_SIDE_ROOK_OFFSET, 'Q')] {
            let rook_ready = game_state
                .occupant_at((row, KING_HOME_COL + offset))
                .is_some_and(|o| o.kind == PieceKind::Rook && o.color == color && !o.has_moved);
            if rook_ready {
                out.push(if color == Color::White {
                    flag
                } else {
                    flag.to_ascii_lowercase()
                });
            }
        }
    }

    if out.is_empty() {
        "-".to_owned()
    } else {
        out
    }
}

fn generate_en_passant_field(game_state: &GameState) -> String {
    let Some(last) = game_state.last_move() else {
        return "-".to_owned();
    };
    if !is_double_pawn_push(game_state, last) {
        return "-".to_owned();
    }

    let skipped = ((last.from.0 + last.to.0) / 2, last.to.1);
    location_to_algebraic(skipped, game_state.board_height()).unwrap_or_else(|_| "-".to_owned())
}

fn is_double_pawn_push(game_state: &GameState, last: &ChessMove) -> bool {
    last.from.1 == last.to.1
        && (last.from.0 - last.to.0).abs() == 2
        && game_state
            .occupant_at(last.to)
            .is_some_and(|o| o.kind == PieceKind::Pawn)
}

fn piece_fen_char(occupant: &Occupant) -> Option<char> {
    let ch = match occupant.kind {
        PieceKind::Empty => return None,
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    Some(match occupant.color {
        Color::White => ch.to_ascii_uppercase(),
        _ => ch,
    })
}
