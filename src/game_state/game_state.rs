//! Board state representation.
//!
//! `GameState` owns a fixed-size grid of occupants stored row-major, the turn
//! counter, and the append-only capture and move histories. Reads go through
//! accessors; mutation happens only through `make_move`, so the histories and
//! the grid dimensions cannot drift from what the moves describe.

use std::slice::Chunks;

use crate::game_state::chess_rules::DEFAULT_PLAYER_COUNT;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::{find_legal_moves, find_moves_for_color};
use crate::moves::move_descriptions::ChessMove;
use crate::utils::fen_parser::{parse_fen, parse_piece_placement};

/// An occupant removed from play, with a snapshot of the piece that took it
/// as it stood before moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapturedPiece {
    pub piece: Occupant,
    pub captured_by: Occupant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // Row-major, `height * width` cells.
    squares: Vec<Occupant>,
    height: usize,
    width: usize,

    player_count: usize,
    // 1-based.
    current_player: usize,

    last_move: Option<ChessMove>,
    captured_history: Vec<CapturedPiece>,
    move_history: Vec<ChessMove>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard 8x8 starting position for two players, White to move.
    pub fn new_game() -> Self {
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut state = Self::new_empty(8, 8, DEFAULT_PLAYER_COUNT);
        for (col, kind) in back_rank.into_iter().enumerate() {
            state.squares[col] = Occupant::new(kind, Color::Black);
            state.squares[8 + col] = Occupant::new(PieceKind::Pawn, Color::Black);
            state.squares[6 * 8 + col] = Occupant::new(PieceKind::Pawn, Color::White);
            state.squares[7 * 8 + col] = Occupant::new(kind, Color::White);
        }
        state
    }

    /// A board of the given size with every square empty.
    pub fn new_empty(height: usize, width: usize, player_count: usize) -> Self {
        Self {
            squares: vec![Occupant::EMPTY; height * width],
            height,
            width,
            player_count: player_count.max(1),
            current_player: 1,
            last_move: None,
            captured_history: Vec::new(),
            move_history: Vec::new(),
        }
    }

    /// Build a board from explicit rows. Row 0 is the first element.
    pub fn from_layout(rows: Vec<Vec<Occupant>>, player_count: usize) -> Result<Self, String> {
        if player_count == 0 {
            return Err("A game needs at least one player".to_owned());
        }

        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err("Board layout must have at least one row and one column".to_owned());
        }

        if let Some((row, bad)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(format!(
                "Board row {row} has {} columns, expected {width}",
                bad.len()
            ));
        }

        let mut state = Self::new_empty(height, width, player_count);
        state.squares = rows.into_iter().flatten().collect();
        Ok(state)
    }

    /// Build a board from a FEN piece-placement field such as
    /// `"4k3/8/8/8/8/8/8/4K2R"`. Any rectangular size is accepted.
    pub fn from_piece_placement(placement: &str, player_count: usize) -> Result<Self, String> {
        let rows = parse_piece_placement(placement)?;
        Self::from_layout(rows, player_count)
    }

    /// Build a board from a six-field FEN string. Side to move, castling
    /// rights and the en passant square are restored; see
    /// `utils::fen_parser::parse_fen`.
    pub fn from_fen(fen: &str, player_count: usize) -> Result<Self, String> {
        parse_fen(fen, player_count)
    }

    #[inline]
    pub fn board_height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn board_width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Whose turn it is, in `1..=player_count`.
    #[inline]
    pub fn current_player(&self) -> usize {
        self.current_player
    }

    /// Color controlled by the player whose turn it is.
    #[inline]
    pub fn current_color(&self) -> Color {
        Color::from_player(self.current_player)
    }

    #[inline]
    pub fn last_move(&self) -> Option<&ChessMove> {
        self.last_move.as_ref()
    }

    #[inline]
    pub fn captured_history(&self) -> &[CapturedPiece] {
        &self.captured_history
    }

    #[inline]
    pub fn move_history(&self) -> &[ChessMove] {
        &self.move_history
    }

    /// Rows of the grid, row 0 first.
    #[inline]
    pub fn board(&self) -> Chunks<'_, Occupant> {
        self.squares.chunks(self.width.max(1))
    }

    #[inline]
    pub fn in_bounds(&self, location: BoardLocation) -> bool {
        self.index_of(location).is_some()
    }

    /// Occupant at `location`, or `None` off the board.
    #[inline]
    pub fn occupant_at(&self, location: BoardLocation) -> Option<&Occupant> {
        self.index_of(location).map(|i| &self.squares[i])
    }

    /// Every in-bounds location in row-major order.
    pub fn locations(&self) -> impl Iterator<Item = BoardLocation> + '_ {
        (0..self.height as i32)
            .flat_map(move |row| (0..self.width as i32).map(move |col| (row, col)))
    }

    /// Pseudo-legal moves for the occupant at `(row, col)`, assuming it is
    /// that occupant's turn. Off-board or empty squares give no moves.
    pub fn find_legal_moves(&self, row: i32, col: i32) -> Vec<ChessMove> {
        find_legal_moves(self, (row, col))
    }

    /// Union of `find_legal_moves` over every square owned by `color`.
    pub fn find_moves_for_color(&self, color: Color) -> Vec<ChessMove> {
        find_moves_for_color(self, color)
    }

    /// Apply `chess_move` unconditionally and pass the turn.
    pub fn make_move(&mut self, chess_move: &ChessMove) {
        apply_move(self, chess_move);
    }

    #[inline]
    fn index_of(&self, (row, col): BoardLocation) -> Option<usize> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    /// Remove and return the occupant at `location`, leaving it empty.
    pub(crate) fn take_occupant(&mut self, location: BoardLocation) -> Occupant {
        match self.index_of(location) {
            Some(i) => std::mem::replace(&mut self.squares[i], Occupant::EMPTY),
            None => Occupant::EMPTY,
        }
    }

    pub(crate) fn put_occupant(&mut self, location: BoardLocation, occupant: Occupant) {
        if let Some(i) = self.index_of(location) {
            self.squares[i] = occupant;
        }
    }

    pub(crate) fn set_current_player(&mut self, player: usize) {
        self.current_player = player.clamp(1, self.player_count);
    }

    pub(crate) fn set_last_move(&mut self, last_move: Option<ChessMove>) {
        self.last_move = last_move;
    }

    pub(crate) fn record_capture(&mut self, captured: CapturedPiece) {
        self.captured_history.push(captured);
    }

    /// Append to the history, remember the move, and pass the turn.
    pub(crate) fn finish_ply(&mut self, chess_move: ChessMove) {
        self.move_history.push(chess_move);
        self.last_move = Some(chess_move);
        self.current_player = if self.current_player < self.player_count {
            self.current_player + 1
        } else {
            1
        };
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::chess_types::{Color, Occupant, PieceKind};

    #[test]
    fn new_game_has_standard_layout() {
        let game = GameState::new_game();
        assert_eq!(game.board_height(), 8);
        assert_eq!(game.board_width(), 8);
        assert_eq!(game.player_count(), 2);
        assert_eq!(game.current_player(), 1);
        assert_eq!(game.current_color(), Color::White);
        assert!(game.last_move().is_none());
        assert!(game.move_history().is_empty());
        assert!(game.captured_history().is_empty());

        assert_eq!(
            game.occupant_at((0, 4)),
            Some(&Occupant::new(PieceKind::King, Color::Black))
        );
        assert_eq!(
            game.occupant_at((7, 3)),
            Some(&Occupant::new(PieceKind::Queen, Color::White))
        );
        assert_eq!(
            game.occupant_at((6, 0)),
            Some(&Occupant::new(PieceKind::Pawn, Color::White))
        );
        assert_eq!(game.occupant_at((4, 4)), Some(&Occupant::EMPTY));
    }

    #[test]
    fn every_square_holds_an_occupant() {
        let game = GameState::new_game();
        let rows: Vec<_> = game.board().collect();
        assert_eq!(rows.len(), 8);
        assert!(rows.iter().all(|r| r.len() == 8));
        let pieces = rows.iter().flat_map(|r| r.iter()).filter(|o| !o.is_empty()).count();
        assert_eq!(pieces, 32);
    }

    #[test]
    fn off_board_lookups_find_nothing() {
        let game = GameState::new_game();
        assert!(game.occupant_at((-1, 0)).is_none());
        assert!(game.occupant_at((0, -1)).is_none());
        assert!(game.occupant_at((8, 0)).is_none());
        assert!(game.occupant_at((0, 8)).is_none());
        assert!(!game.in_bounds((8, 8)));
        assert!(game.in_bounds((7, 7)));
    }

    #[test]
    fn layout_must_be_rectangular() {
        let ragged = vec![vec![Occupant::EMPTY; 3], vec![Occupant::EMPTY; 2]];
        assert!(GameState::from_layout(ragged, 2).is_err());
        assert!(GameState::from_layout(Vec::new(), 2).is_err());
        assert!(GameState::from_layout(vec![vec![Occupant::EMPTY; 3]], 0).is_err());

        let game = GameState::from_layout(vec![vec![Occupant::EMPTY; 5]; 3], 3)
            .expect("rectangular layout should build");
        assert_eq!(game.board_height(), 3);
        assert_eq!(game.board_width(), 5);
        assert_eq!(game.player_count(), 3);
        assert_eq!(game.locations().count(), 15);
    }

    #[test]
    fn piece_placement_builds_custom_board() {
        let game = GameState::from_piece_placement("4k3/8/8/8/8/8/8/4K2R", 2)
            .expect("placement should parse");
        assert_eq!(
            game.occupant_at((7, 7)),
            Some(&Occupant::new(PieceKind::Rook, Color::White))
        );
        assert_eq!(
            game.occupant_at((0, 4)),
            Some(&Occupant::new(PieceKind::King, Color::Black))
        );
    }
}
