use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{candidate_moves, Engine, EngineError, EngineOutput};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;

/// One-ply greedy engine: takes the most valuable piece on offer, a king
/// above all, and breaks ties uniformly. Quiet moves score zero.
pub struct GreedyCaptureEngine {
    color: Color,
    rng: StdRng,
}

impl GreedyCaptureEngine {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn with_seed(color: Color, seed: u64) -> Self {
        Self {
            color,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[inline]
    fn capture_value(mv: &ChessMove) -> u32 {
        mv.captured.kind.material_value()
    }
}

impl Engine for GreedyCaptureEngine {
    fn name(&self) -> &str {
        "GridChess Greedy"
    }

    fn color(&self) -> Color {
        self.color
    }

    fn get_move(&mut self, game_state: &GameState) -> Result<EngineOutput, EngineError> {
        let moves = candidate_moves(game_state, self.color)?;

        let mut best_value = 0;
        let mut best_moves = Vec::new();
        for mv in &moves {
            let value = Self::capture_value(mv);
            if value > best_value || best_moves.is_empty() {
                best_value = value;
                best_moves.clear();
                best_moves.push(*mv);
            } else if value == best_value {
                best_moves.push(*mv);
            }
        }

        let picked = best_moves
            .as_slice()
            .choose(&mut self.rng)
            .copied()
            .ok_or(EngineError::NoCandidateMoves)?;

        Ok(EngineOutput {
            best_move: picked,
            info_lines: vec![
                format!("info string greedy_engine candidate_moves {}", moves.len()),
                format!("info string greedy_engine capture_score {best_value}"),
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::GreedyCaptureEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::chess_types::{Color, PieceKind};
    use crate::game_state::game_state::GameState;

    #[test]
    fn greedy_takes_the_most_valuable_piece() {
        // White rook d4 can take a black knight d7 or a black queen h4.
        let game = GameState::from_piece_placement("k7/3n4/8/8/3R3q/8/8/K7", 2)
            .expect("placement should parse");
        let mut engine = GreedyCaptureEngine::with_seed(Color::White, 5);
        let out = engine.get_move(&game).expect("engine should move");
        assert_eq!(out.best_move.captured.kind, PieceKind::Queen);
        assert_eq!(out.best_move.to, (4, 7));
    }

    #[test]
    fn greedy_prefers_king_capture() {
        // Queen d1 can take a rook d8 or the king h5.
        let game = GameState::from_piece_placement("3r4/8/8/7k/8/8/8/K2Q4", 2)
            .expect("placement should parse");
        let mut engine = GreedyCaptureEngine::with_seed(Color::White, 5);
        let out = engine.get_move(&game).expect("engine should move");
        assert_eq!(out.best_move.captured.kind, PieceKind::King);
    }

    #[test]
    fn greedy_without_captures_plays_any_generated_move() {
        let game = GameState::new_game();
        let candidates = game.find_moves_for_color(Color::White);
        let mut engine = GreedyCaptureEngine::with_seed(Color::White, 2);
        let out = engine.get_move(&game).expect("engine should move");
        assert!(candidates.contains(&out.best_move));
        assert!(!out.best_move.is_capture());
        assert_eq!(out.info_lines[1], "info string greedy_engine capture_score 0");
    }
}
