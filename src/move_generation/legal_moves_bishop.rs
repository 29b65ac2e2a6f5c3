use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{generate_sliding_moves, DIAGONAL_DIRECTIONS};
use crate::moves::move_descriptions::ChessMove;

pub fn generate_bishop_moves(
    game_state: &GameState,
    from: BoardLocation,
    bishop: &Occupant,
    out: &mut Vec<ChessMove>,
) {
    generate_sliding_moves(game_state, from, bishop, &DIAGONAL_DIRECTIONS, out);
}
