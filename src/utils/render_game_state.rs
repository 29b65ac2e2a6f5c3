//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and the
//! command-line game runner. Row 0 is drawn at the top.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Render the board to a Unicode string for terminal output, with file
/// letters above and below and rank numbers on both sides.
pub fn render_game_state(game_state: &GameState) -> String {
    let height = game_state.board_height();
    let rank_width = height.to_string().len();
    let files: String = (0..game_state.board_width())
        .map(|col| char::from(b'a' + (col % 26) as u8).to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let file_line = format!("{:rank_width$} {files}", "");

    let mut out = String::new();
    out.push_str(&file_line);
    out.push('\n');

    for (row, squares) in game_state.board().enumerate() {
        let rank = height - row;
        out.push_str(&format!("{rank:>rank_width$} "));

        let cells: Vec<String> = squares
            .iter()
            .map(|occupant| occupant_to_unicode(occupant).to_string())
            .collect();
        out.push_str(&cells.join(" "));

        out.push_str(&format!(" {rank}\n"));
    }

    out.push_str(&file_line);
    out
}

fn occupant_to_unicode(occupant: &Occupant) -> char {
    match (occupant.color, occupant.kind) {
        (_, PieceKind::Empty) => '·',
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (_, PieceKind::Pawn) => '♟',
        (_, PieceKind::Knight) => '♞',
        (_, PieceKind::Bishop) => '♝',
        (_, PieceKind::Rook) => '♜',
        (_, PieceKind::Queen) => '♛',
        (_, PieceKind::King) => '♚',
    }
}
