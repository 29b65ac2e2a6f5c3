//! Random-piece engine.
//!
//! Picks one of its pieces uniformly, then one of that piece's moves. Only
//! pieces with at least one move are eligible, so a blocked piece is never
//! drawn. This weights play toward pieces with few options, unlike
//! `RandomMoveEngine`.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineError, EngineOutput};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::find_movable_pieces;

pub struct RandomPieceEngine {
    color: Color,
    rng: StdRng,
}

impl RandomPieceEngine {
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
}

impl Engine for RandomPieceEngine {
    fn name(&self) -> &str {
        "GridChess Random Piece"
    }

    fn color(&self) -> Color {
        self.color
    }

    fn get_move(&mut self, game_state: &GameState) -> Result<EngineOutput, EngineError> {
        let to_move = game_state.current_color();
        if to_move != self.color {
            return Err(EngineError::WrongTurn {
                engine: self.color,
                to_move,
            });
        }

        let movable = find_movable_pieces(game_state, self.color);
        let (location, moves) = movable
            .as_slice()
            .choose(&mut self.rng)
            .ok_or(EngineError::NoCandidateMoves)?;
        let picked = moves
            .as_slice()
            .choose(&mut self.rng)
            .copied()
            .ok_or(EngineError::NoCandidateMoves)?;

        Ok(EngineOutput {
            best_move: picked,
            info_lines: vec![
                format!("info string random_piece_engine movable_pieces {}", movable.len()),
                format!(
                    "info string random_piece_engine piece {:?} moves {}",
                    location,
                    moves.len()
                ),
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::RandomPieceEngine;
    use crate::engines::engine_trait::{Engine, EngineError};
    use crate::game_state::chess_types::Color;
    use crate::game_state::game_state::GameState;

    #[test]
    fn picks_moves_of_a_movable_piece() {
        let game = GameState::new_game();
        let candidates = game.find_moves_for_color(Color::White);
        let mut engine = RandomPieceEngine::with_seed(Color::White, 3);

        for _ in 0..32 {
            let out = engine.get_move(&game).expect("engine should move");
            assert!(candidates.contains(&out.best_move));
            assert_eq!(
                out.info_lines[0],
                "info string random_piece_engine movable_pieces 10"
            );
        }
    }

    #[test]
    fn blocked_pieces_are_never_chosen() {
        // Rook a1 is walled in by its own pawn and knight.
        let game = GameState::from_piece_placement("7k/8/8/8/8/8/P7/RN5K", 2)
            .expect("placement should parse");
        let mut engine = RandomPieceEngine::with_seed(Color::White, 11);
        for _ in 0..16 {
            let out = engine.get_move(&game).expect("engine should move");
            assert_ne!(out.best_move.from, (7, 0));
        }
    }

    #[test]
    fn no_movable_piece_is_an_error() {
        let game = GameState::from_piece_placement("4k3/8/8/8/8/8/8/8", 2)
            .expect("placement should parse");
        let mut engine = RandomPieceEngine::with_seed(Color::White, 1);
        assert_eq!(engine.get_move(&game), Err(EngineError::NoCandidateMoves));
    }
}
