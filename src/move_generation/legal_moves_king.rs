//! King move generation, castling included.
//!
//! Castling is offered whenever the king stands unmoved on its home column of
//! either edge row, the matching rook of the same color is unmoved, and the
//! squares between them are empty. Attacked squares are not considered.

use crate::game_state::chess_rules::{
    CASTLE_KING_STEP, KING_HOME_COL, KING_SIDE_ROOK_OFFSET, QUEEN_SIDE_ROOK_OFFSET,
};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{generate_step_moves, is_empty_square, KING_OFFSETS};
use crate::moves::move_descriptions::ChessMove;

pub fn generate_king_moves(
    game_state: &GameState,
    from: BoardLocation,
    king: &Occupant,
    out: &mut Vec<ChessMove>,
) {
    generate_step_moves(game_state, from, king, &KING_OFFSETS, out);
    generate_castling_moves(game_state, from, king, out);
}

fn generate_castling_moves(
    game_state: &GameState,
    from: BoardLocation,
    king: &Occupant,
    out: &mut Vec<ChessMove>,
) {
    let (row, col) = from;
    let last_row = game_state.board_height() as i32 - 1;
    if king.has_moved || col != KING_HOME_COL || (row != 0 && row != last_row) {
        return;
    }

    for rook_offset in [KING_SIDE_ROOK_OFFSET, QUEEN_SIDE_ROOK_OFFSET] {
        if let Some(castle) = castle_toward(game_state, from, king, rook_offset) {
            out.push(castle);
        }
    }
}

fn castle_toward(
    game_state: &GameState,
    from: BoardLocation,
    king: &Occupant,
    rook_offset: i32,
) -> Option<ChessMove> {
    let (row, col) = from;
    let rook = game_state.occupant_at((row, col + rook_offset))?;
    if rook.kind != PieceKind::Rook || rook.color != king.color || rook.has_moved {
        return None;
    }

    let step = rook_offset.signum();
    let path_clear =
        (1..rook_offset.abs()).all(|i| is_empty_square(game_state, (row, col + i * step)));
    path_clear.then(|| ChessMove::castle((row, col + CASTLE_KING_STEP * step), from))
}

#[cfg(test)]
mod tests {
    use crate::game_state::game_state::GameState;
    use crate::moves::move_descriptions::ChessMove;

    #[test]
    fn start_position_king_is_boxed_in() {
        let game = GameState::new_game();
        assert!(game.find_legal_moves(7, 4).is_empty());
        assert!(game.find_legal_moves(0, 4).is_empty());
    }

    #[test]
    fn lone_king_steps_to_adjacent_squares_only() {
        let game = GameState::from_piece_placement("8/8/8/8/3K4/8/8/8", 2)
            .expect("placement should parse");
        let moves = game.find_legal_moves(4, 3);
        assert_eq!(moves.len(), 8);
        assert!(moves
            .iter()
            .all(|m| (m.to.0 - 4).abs() <= 1 && (m.to.1 - 3).abs() <= 1));
    }

    #[test]
    fn both_castles_offered_when_paths_are_clear() {
        let game = GameState::from_piece_placement("r3k2r/8/8/8/8/8/8/R3K2R", 2)
            .expect("placement should parse");
        for row in [0, 7] {
            let castles: Vec<_> = game
                .find_legal_moves(row, 4)
                .into_iter()
                .filter(ChessMove::is_castle)
                .collect();
            assert_eq!(castles.len(), 2);
            assert!(castles.iter().any(|m| m.to == (row, 6)));
            assert!(castles.iter().any(|m| m.to == (row, 2)));
            assert!(castles.iter().all(|m| !m.is_capture()));
        }
    }

    #[test]
    fn queen_side_castle_needs_knight_square_empty() {
        let game = GameState::from_piece_placement("4k3/8/8/8/8/8/8/RN2K2R", 2)
            .expect("placement should parse");
        let castles: Vec<_> = game
            .find_legal_moves(7, 4)
            .into_iter()
            .filter(ChessMove::is_castle)
            .collect();
        assert_eq!(castles.len(), 1);
        assert_eq!(castles[0].to, (7, 6));
    }

    #[test]
    fn castle_requires_rook_of_same_color() {
        let game = GameState::from_piece_placement("4k3/8/8/8/8/8/8/r3K2n", 2)
            .expect("placement should parse");
        assert!(game.find_legal_moves(7, 4).iter().all(|m| !m.is_castle()));
    }

    #[test]
    fn moved_rook_cannot_castle() {
        let mut game = GameState::from_piece_placement("4k3/8/8/8/8/8/8/4K2R", 2)
            .expect("placement should parse");
        game.make_move(&ChessMove::new((6, 7), (7, 7)));
        game.make_move(&ChessMove::new((0, 3), (0, 4)));
        game.make_move(&ChessMove::new((7, 7), (6, 7)));
        game.make_move(&ChessMove::new((0, 4), (0, 3)));

        assert!(game.find_legal_moves(7, 4).iter().all(|m| !m.is_castle()));
    }
}
