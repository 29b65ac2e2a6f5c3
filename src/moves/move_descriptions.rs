//! Move value type.
//!
//! A `ChessMove` describes one ply: where a piece starts and lands, what it
//! captures and where that captured piece stood, and whether the ply is a
//! castle. Moves carry snapshots, never references into a board.

use crate::game_state::chess_types::{BoardLocation, Occupant};

/// Extra information about a move that the applier must act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpecialMove {
    #[default]
    None,
    Castle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub to: BoardLocation,
    pub from: BoardLocation,
    /// Snapshot of the captured occupant, `Occupant::EMPTY` for quiet moves.
    pub captured: Occupant,
    /// Square the captured occupant is removed from. Equal to `to` except for
    /// en passant.
    pub capture_location: BoardLocation,
    pub special: SpecialMove,
}

impl ChessMove {
    /// A quiet move onto an empty square.
    #[inline]
    pub const fn new(to: BoardLocation, from: BoardLocation) -> Self {
        Self {
            to,
            from,
            captured: Occupant::EMPTY,
            capture_location: to,
            special: SpecialMove::None,
        }
    }

    /// A move onto `to` that takes whatever stands there. Passing an empty
    /// occupant yields an ordinary quiet move.
    #[inline]
    pub const fn capturing(to: BoardLocation, from: BoardLocation, captured: Occupant) -> Self {
        Self {
            to,
            from,
            captured,
            capture_location: to,
            special: SpecialMove::None,
        }
    }

    /// A pawn capture whose victim is not on the destination square.
    #[inline]
    pub const fn en_passant(
        to: BoardLocation,
        from: BoardLocation,
        captured: Occupant,
        capture_location: BoardLocation,
    ) -> Self {
        Self {
            to,
            from,
            captured,
            capture_location,
            special: SpecialMove::None,
        }
    }

    /// King half of a castle; the rook's path is derived when applied.
    #[inline]
    pub const fn castle(to: BoardLocation, from: BoardLocation) -> Self {
        Self {
            to,
            from,
            captured: Occupant::EMPTY,
            capture_location: to,
            special: SpecialMove::Castle,
        }
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.is_capture() && self.capture_location != self.to
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        self.special == SpecialMove::Castle
    }
}
