//! Pseudo-legal move generation entry points.
//!
//! Dispatches on the kind of occupant at a square. Moves are pseudo-legal:
//! they follow each piece's movement pattern and board occupancy but are not
//! filtered for leaving the mover's own king capturable, and whose turn it is
//! is not checked.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::owned_locations;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::ChessMove;

/// Moves available to whatever stands on `location`. Off-board and empty
/// squares yield an empty vector.
pub fn find_legal_moves(game_state: &GameState, location: BoardLocation) -> Vec<ChessMove> {
    let mut moves = Vec::new();
    let Some(occupant) = game_state.occupant_at(location).copied() else {
        return moves;
    };

    match occupant.kind {
        PieceKind::Empty => {}
        PieceKind::Pawn => generate_pawn_moves(game_state, location, &occupant, &mut moves),
        PieceKind::Knight => generate_knight_moves(game_state, location, &occupant, &mut moves),
        PieceKind::Bishop => generate_bishop_moves(game_state, location, &occupant, &mut moves),
        PieceKind::Rook => generate_rook_moves(game_state, location, &occupant, &mut moves),
        PieceKind::Queen => generate_queen_moves(game_state, location, &occupant, &mut moves),
        PieceKind::King => generate_king_moves(game_state, location, &occupant, &mut moves),
    }

    moves
}

/// All moves for every piece of `color`, scanning squares row-major.
pub fn find_moves_for_color(game_state: &GameState, color: Color) -> Vec<ChessMove> {
    let mut moves = Vec::with_capacity(64);
    for location in owned_locations(game_state, color) {
        moves.extend(find_legal_moves(game_state, location));
    }
    moves
}

/// Pieces of `color` that have at least one move, each with its moves.
pub fn find_movable_pieces(
    game_state: &GameState,
    color: Color,
) -> Vec<(BoardLocation, Vec<ChessMove>)> {
    owned_locations(game_state, color)
        .into_iter()
        .map(|location| (location, find_legal_moves(game_state, location)))
        .filter(|(_, moves)| !moves.is_empty())
        .collect()
}
