//! Geometry shared by the per-piece generators.
//!
//! Step pieces (knight, king) try a fixed list of offsets once; sliding pieces
//! (rook, bishop, queen) cast rays until they leave the board or hit a piece.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::ChessMove;

/// Left, right, up, down.
pub const ORTHOGONAL_DIRECTIONS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Up-left, up-right, down-left, down-right.
pub const DIAGONAL_DIRECTIONS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-1, -2),
    (-2, -1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (1, 2),
    (2, 1),
];

pub const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[inline]
pub const fn offset_location(
    (row, col): BoardLocation,
    (d_row, d_col): (i32, i32),
) -> BoardLocation {
    (row + d_row, col + d_col)
}

/// One move per offset whose destination is on the board and not held by
/// the mover's own color. Empty squares have color `None` and always pass.
pub fn generate_step_moves(
    game_state: &GameState,
    from: BoardLocation,
    mover: &Occupant,
    offsets: &[(i32, i32)],
    out: &mut Vec<ChessMove>,
) {
    for &delta in offsets {
        let to = offset_location(from, delta);
        if let Some(target) = game_state.occupant_at(to) {
            if target.color != mover.color {
                out.push(ChessMove::capturing(to, from, *target));
            }
        }
    }
}

/// Cast one ray per direction. Empty squares are collected; the first
/// occupied square ends the ray, contributing a capture only if it is an
/// enemy.
pub fn generate_sliding_moves(
    game_state: &GameState,
    from: BoardLocation,
    mover: &Occupant,
    directions: &[(i32, i32)],
    out: &mut Vec<ChessMove>,
) {
    for &direction in directions {
        let mut to = offset_location(from, direction);
        while let Some(target) = game_state.occupant_at(to) {
            if target.is_empty() {
                out.push(ChessMove::new(to, from));
                to = offset_location(to, direction);
                continue;
            }
            if target.color != mover.color {
                out.push(ChessMove::capturing(to, from, *target));
            }
            break;
        }
    }
}

/// Squares holding a piece of `color`, row-major.
pub fn owned_locations(game_state: &GameState, color: Color) -> Vec<BoardLocation> {
    if color == Color::None {
        return Vec::new();
    }
    game_state
        .locations()
        .filter(|loc| game_state.occupant_at(*loc).is_some_and(|o| o.color == color))
        .collect()
}

#[inline]
pub fn is_empty_square(game_state: &GameState, location: BoardLocation) -> bool {
    game_state.occupant_at(location).is_some_and(Occupant::is_empty)
}
