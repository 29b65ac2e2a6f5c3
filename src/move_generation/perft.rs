//! Pseudo-legal perft: count the leaves of the move tree to a fixed depth.
//!
//! Used as a regression oracle and as the benchmark workload. A position in
//! which a king has just been captured is terminal, since the game is over.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::ChessMove;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub king_captures: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.king_captures += rhs.king_captures;
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    perft_recurse(game_state, depth, &mut total);
    total
}

/// Per-root-move node counts, handy when hunting generator differences.
pub fn perft_divide(game_state: &GameState, depth: u8) -> Vec<(ChessMove, usize)> {
    let moves = game_state.find_moves_for_color(game_state.current_color());
    moves
        .into_iter()
        .map(|mv| {
            let mut next = game_state.clone();
            next.make_move(&mv);
            let nodes = if depth <= 1 || mv.captured.kind == PieceKind::King {
                1
            } else {
                perft(&next, depth - 1).nodes
            };
            (mv, nodes)
        })
        .collect()
}

fn perft_recurse(game_state: &GameState, depth_left: u8, counts: &mut PerftCounts) {
    let moves = game_state.find_moves_for_color(game_state.current_color());

    for mv in moves {
        if depth_left == 1 {
            counts.merge(leaf_counts(game_state, &mv));
            continue;
        }

        let mut next = game_state.clone();
        next.make_move(&mv);
        if mv.captured.kind == PieceKind::King {
            counts.merge(leaf_counts(game_state, &mv));
            continue;
        }
        perft_recurse(&next, depth_left - 1, counts);
    }
}

fn leaf_counts(game_state: &GameState, mv: &ChessMove) -> PerftCounts {
    let last_row = game_state.board_height() as i32 - 1;
    let is_pawn = game_state
        .occupant_at(mv.from)
        .is_some_and(|o| o.kind == PieceKind::Pawn);

    PerftCounts {
        nodes: 1,
        captures: usize::from(mv.is_capture()),
        en_passant: usize::from(mv.is_en_passant()),
        castles: usize::from(mv.is_castle()),
        promotions: usize::from(is_pawn && (mv.to.0 == 0 || mv.to.0 == last_row)),
        king_captures: usize::from(mv.captured.kind == PieceKind::King),
    }
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_divide, PerftCounts};
    use crate::game_state::game_state::GameState;

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let game = GameState::new_game();
        assert_eq!(
            perft(&game, 0),
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn perft_matches_known_start_position_counts() {
        let game = GameState::new_game();
        assert_eq!(perft(&game, 1).nodes, 20);
        assert_eq!(perft(&game, 2).nodes, 400);

        let depth_three = perft(&game, 3);
        assert_eq!(depth_three.nodes, 8902);
        assert_eq!(depth_three.captures, 34);
        assert_eq!(depth_three.castles, 0);
        assert_eq!(depth_three.en_passant, 0);
    }

    #[test]
    fn divide_sums_to_perft() {
        let game = GameState::new_game();
        let divided = perft_divide(&game, 2);
        assert_eq!(divided.len(), 20);
        assert_eq!(divided.iter().map(|(_, n)| n).sum::<usize>(), 400);
    }

    #[test]
    fn king_capture_ends_the_line() {
        // White rook can take the black king immediately.
        let game = GameState::from_piece_placement("k7/8/8/8/8/8/8/R6K", 2)
            .expect("placement should parse");
        let counts = perft(&game, 2);
        assert_eq!(perft(&game, 1).king_captures, 1);
        assert!(counts.nodes > 0);
        assert_eq!(counts.king_captures, 1);
    }

    #[test]
    fn perft_does_not_touch_the_input_state() {
        let game = GameState::new_game();
        let before = game.clone();
        let _ = perft(&game, 2);
        assert_eq!(game, before);
    }
}
