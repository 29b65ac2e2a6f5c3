//! Value types describing what occupies a square.
//!
//! Every square of a board always holds an `Occupant`; an empty square holds
//! `Occupant::EMPTY` rather than nothing. Occupants are plain `Copy` values so
//! relocating one never leaves two squares sharing the same piece.

pub use crate::game_state::game_state::{CapturedPiece, GameState};

/// Board coordinate as `(row, col)`.
///
/// Signed so callers may ask about off-board squares (for example `(-1, 3)`);
/// such queries simply find nothing.
pub type BoardLocation = (i32, i32);

/// Controller of an occupant. `None` belongs to empty squares only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    None,
    White,
    Black,
}

impl Color {
    /// Color associated with a 1-based turn index. Players beyond the second
    /// have no color of their own.
    #[inline]
    pub const fn from_player(player: usize) -> Self {
        match player {
            1 => Color::White,
            2 => Color::Black,
            _ => Color::None,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
            Color::None => Color::None,
        }
    }

    /// Row delta of a pawn advance. White moves toward row 0.
    #[inline]
    pub const fn pawn_direction(self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
            Color::None => 0,
        }
    }
}

/// Piece kind, with `Empty` as a real occupant tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PieceKind {
    #[default]
    Empty,
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Conventional material value. The king outranks everything.
    #[inline]
    pub const fn material_value(self) -> u32 {
        match self {
            PieceKind::Empty => 0,
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => u32::MAX,
        }
    }
}

/// Whatever sits on a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Occupant {
    pub kind: PieceKind,
    pub color: Color,
    /// Set the first time the occupant is relocated; never reset.
    pub has_moved: bool,
}

impl Occupant {
    pub const EMPTY: Occupant = Occupant {
        kind: PieceKind::Empty,
        color: Color::None,
        has_moved: false,
    };

    /// A fresh, unmoved piece.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self.kind, PieceKind::Empty)
    }
}
