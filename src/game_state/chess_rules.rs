//! Canonical chess-rule constants.
//!
//! Static literals used to set up a standard game and to locate the squares
//! castling depends on.

/// Standard starting layout as a FEN piece-placement field. Row 0 is the
/// first field, so Black's back rank sits on row 0 and White's on row 7.
pub const STARTING_PIECE_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

pub const STARTING_POSITION_FEN: &str =
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const DEFAULT_PLAYER_COUNT: usize = 2;

/// Column a king must stand on to castle.
pub const KING_HOME_COL: i32 = 4;

/// Column distance a castling king travels.
pub const CASTLE_KING_STEP: i32 = 2;

/// Column offsets from the king's home square to the castling rooks.
pub const KING_SIDE_ROOK_OFFSET: i32 = 3;
pub const QUEEN_SIDE_ROOK_OFFSET: i32 = -4;
