//! Pawn move generation.
//!
//! Pushes, the initial double push, diagonal captures, and en passant. En
//! passant is only considered on a diagonal where an ordinary capture is not
//! available, and only against a pawn that made a double push on the very
//! previous ply and now stands beside the mover.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::is_empty_square;
use crate::moves::move_descriptions::ChessMove;

pub fn generate_pawn_moves(
    game_state: &GameState,
    from: BoardLocation,
    pawn: &Occupant,
    out: &mut Vec<ChessMove>,
) {
    let direction = pawn.color.pawn_direction();
    if direction == 0 {
        return;
    }
    let (row, col) = from;

    let one_step = (row + direction, col);
    if is_empty_square(game_state, one_step) {
        out.push(ChessMove::new(one_step, from));

        let two_step = (row + 2 * direction, col);
        if !pawn.has_moved && is_empty_square(game_state, two_step) {
            out.push(ChessMove::new(two_step, from));
        }
    }

    for d_col in [-1, 1] {
        let to = (row + direction, col + d_col);
        let Some(target) = game_state.occupant_at(to) else {
            continue;
        };

        if target.color != Color::None && target.color != pawn.color {
            out.push(ChessMove::capturing(to, from, *target));
        } else if let Some(en_passant) = en_passant_capture(game_state, from, pawn, d_col) {
            out.push(en_passant);
        }
    }
}

fn en_passant_capture(
    game_state: &GameState,
    from: BoardLocation,
    pawn: &Occupant,
    d_col: i32,
) -> Option<ChessMove> {
    let (row, col) = from;
    let direction = pawn.color.pawn_direction();
    let victim_location = (row, col + d_col);

    let last = game_state.last_move()?;
    // The victim came from two rows further along our direction of travel.
    if last.to != victim_location || last.from != (row + 2 * direction, col + d_col) {
        return None;
    }

    let victim = game_state.occupant_at(victim_location)?;
    if victim.kind != PieceKind::Pawn || victim.color == Color::None || victim.color == pawn.color {
        return None;
    }

    Some(ChessMove::en_passant(
        (row + direction, col + d_col),
        from,
        *victim,
        victim_location,
    ))
}

#[cfg(test)]
mod tests {
    use crate::game_state::chess_types::{Color, Occupant, PieceKind};
    use crate::game_state::game_state::GameState;
    use crate::moves::move_descriptions::ChessMove;

    #[test]
    fn home_pawn_has_single_and_double_push() {
        let game = GameState::new_game();
        let moves = game.find_legal_moves(6, 4);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().any(|m| m.to == (5, 4)));
        assert!(moves.iter().any(|m| m.to == (4, 4)));
    }

    #[test]
    fn moved_pawn_loses_double_push() {
        let mut game = GameState::new_game();
        game.make_move(&ChessMove::new((5, 4), (6, 4)));
        game.make_move(&ChessMove::new((2, 0), (1, 0)));

        let moves = game.find_legal_moves(5, 4);
        assert!(moves.len() <= 1);
        assert!(moves.iter().all(|m| m.to != (3, 4)));
        assert_eq!(moves[0].to, (4, 4));
    }

    #[test]
    fn blocked_pawn_cannot_push_through() {
        // White pawn e2 with a black knight on e3.
        let game = GameState::from_piece_placement("8/8/8/8/8/4n3/4P3/8", 2)
            .expect("placement should parse");
        assert!(game.find_legal_moves(6, 4).is_empty());

        // Knight on e4 only blocks the double push.
        let game = GameState::from_piece_placement("8/8/8/8/4n3/8/4P3/8", 2)
            .expect("placement should parse");
        let moves = game.find_legal_moves(6, 4);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, (5, 4));
    }

    #[test]
    fn black_pawns_advance_toward_higher_rows() {
        let game = GameState::new_game();
        let moves = game.find_legal_moves(1, 2);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|m| m.to.0 > 1));
    }

    #[test]
    fn pawn_captures_only_enemies_diagonally() {
        // White pawn d4, black rook c5, white knight e5, black pawn d5.
        let game = GameState::from_piece_placement("8/8/8/2rpN3/3P4/8/8/8", 2)
            .expect("placement should parse");
        let moves = game.find_legal_moves(4, 3);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, (3, 2));
        assert_eq!(
            moves[0].captured,
            Occupant::new(PieceKind::Rook, Color::Black)
        );
    }

    #[test]
    fn en_passant_follows_an_adjacent_double_push() {
        // White pawn e5 waits; Black plays d7-d5.
        let mut game = GameState::from_piece_placement("7k/3p4/8/4P3/8/8/8/K7", 2)
            .expect("placement should parse");
        game.make_move(&ChessMove::new((6, 0), (7, 0)));
        game.make_move(&ChessMove::new((3, 3), (1, 3)));

        let moves = game.find_legal_moves(3, 4);
        let ep: Vec<_> = moves.iter().filter(|m| m.is_capture()).collect();
        assert_eq!(ep.len(), 1);
        assert_eq!(ep[0].to, (2, 3));
        assert_eq!(ep[0].capture_location, (3, 3));
        assert_ne!(ep[0].capture_location, ep[0].to);
        assert_eq!(ep[0].captured.kind, PieceKind::Pawn);
    }

    #[test]
    fn black_captures_en_passant_toward_white_side() {
        // Black pawn d4 waits; White plays e2-e4.
        let mut game = GameState::from_piece_placement("4k3/8/8/8/3p4/8/4P3/4K3", 2)
            .expect("placement should parse");
        game.make_move(&ChessMove::new((4, 4), (6, 4)));

        let ep: Vec<_> = game
            .find_legal_moves(4, 3)
            .into_iter()
            .filter(|m| m.is_en_passant())
            .collect();
        assert_eq!(ep.len(), 1);
        assert_eq!(ep[0].to, (5, 4));
        assert_eq!(ep[0].capture_location, (4, 4));
        assert_eq!((ep[0].captured.kind, ep[0].captured.color), (PieceKind::Pawn, Color::White));

        game.make_move(&ep[0]);
        assert!(game.occupant_at((4, 4)).is_some_and(Occupant::is_empty));
        let pawn = game.occupant_at((5, 4)).expect("e3 should be on the board");
        assert_eq!((pawn.kind, pawn.color), (PieceKind::Pawn, Color::Black));
        assert_eq!(game.captured_history().len(), 1);
    }

    #[test]
    fn en_passant_expires_after_one_ply() {
        let mut game = GameState::from_piece_placement("7k/3p4/8/4P3/8/8/8/K7", 2)
            .expect("placement should parse");
        game.make_move(&ChessMove::new((6, 0), (7, 0)));
        game.make_move(&ChessMove::new((3, 3), (1, 3)));
        game.make_move(&ChessMove::new((5, 0), (6, 0)));
        game.make_move(&ChessMove::new((1, 7), (0, 7)));

        assert!(game.find_legal_moves(3, 4).iter().all(|m| !m.is_capture()));
    }

    #[test]
    fn single_push_does_not_enable_en_passant() {
        let mut game = GameState::from_piece_placement("8/8/3p4/4P3/8/8/8/K7", 2)
            .expect("placement should parse");
        game.make_move(&ChessMove::new((6, 0), (7, 0)));
        game.make_move(&ChessMove::new((3, 3), (2, 3)));

        assert!(game.find_legal_moves(3, 4).iter().all(|m| !m.is_capture()));
    }
}
