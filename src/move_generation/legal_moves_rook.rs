//! Rook move generation: rays along ranks and files.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{generate_sliding_moves, ORTHOGONAL_DIRECTIONS};
use crate::moves::move_descriptions::ChessMove;

pub fn generate_rook_moves(
    game_state: &GameState,
    from: BoardLocation,
    rook: &Occupant,
    out: &mut Vec<ChessMove>,
) {
    generate_sliding_moves(game_state, from, rook, &ORTHOGONAL_DIRECTIONS, out);
}
