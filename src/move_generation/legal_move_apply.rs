//! State transition: apply a move to a board in place.
//!
//! The applier trusts its input. Any move value is applied as described,
//! without re-checking legality, and every application passes the turn
//! exactly once.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::ChessMove;

pub fn apply_move(game_state: &mut GameState, chess_move: &ChessMove) {
    if chess_move.is_castle() {
        apply_castle(game_state, chess_move);
    } else {
        apply_standard(game_state, chess_move);
    }

    game_state.finish_ply(*chess_move);
}

fn apply_castle(game_state: &mut GameState, chess_move: &ChessMove) {
    relocate(game_state, chess_move.from, chess_move.to);

    let (row, king_col) = chess_move.to;
    if king_col < chess_move.from.1 {
        // Queen side.
        relocate(game_state, (row, king_col - 2), (row, king_col + 1));
    } else {
        relocate(game_state, (row, king_col + 1), (row, king_col - 1));
    }
}

fn apply_standard(game_state: &mut GameState, chess_move: &ChessMove) {
    let mover = game_state
        .occupant_at(chess_move.from)
        .copied()
        .unwrap_or(Occupant::EMPTY);

    if chess_move.is_capture() {
        game_state.record_capture(CapturedPiece {
            piece: chess_move.captured,
            captured_by: mover,
        });
        game_state.take_occupant(chess_move.capture_location);
    }

    relocate(game_state, chess_move.from, chess_move.to);

    let last_row = game_state.board_height() as i32 - 1;
    let promotes =
        mover.kind == PieceKind::Pawn && (chess_move.to.0 == 0 || chess_move.to.0 == last_row);
    if promotes {
        game_state.put_occupant(chess_move.to, Occupant::new(PieceKind::Queen, mover.color));
    }
}

/// Move whatever is on `from` to `to`, marking it moved and emptying `from`.
fn relocate(game_state: &mut GameState, from: BoardLocation, to: BoardLocation) {
    let mut occupant = game_state.take_occupant(from);
    if !occupant.is_empty() {
        occupant.has_moved = true;
    }
    game_state.put_occupant(to, occupant);
}
