//! Queen move generation: the union of rook rays and bishop rays.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::ChessMove;

pub fn generate_queen_moves(
    game_state: &GameState,
    from: BoardLocation,
    queen: &Occupant,
    out: &mut Vec<ChessMove>,
) {
    generate_rook_moves(game_state, from, queen, out);
    generate_bishop_moves(game_state, from, queen, out);
}
