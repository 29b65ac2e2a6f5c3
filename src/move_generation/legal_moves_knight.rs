use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{generate_step_moves, KNIGHT_OFFSETS};
use crate::moves::move_descriptions::ChessMove;

pub fn generate_knight_moves(
    game_state: &GameState,
    from: BoardLocation,
    knight: &Occupant,
    out: &mut Vec<ChessMove>,
) {
    generate_step_moves(game_state, from, knight, &KNIGHT_OFFSETS, out);
}
