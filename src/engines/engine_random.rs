//! Random-move engine.
//!
//! Selects uniformly from every pseudo-legal move of its color. Used for
//! diagnostics, integration testing, and low-strength play.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{candidate_moves, Engine, EngineError, EngineOutput};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;

pub struct RandomMoveEngine {
    color: Color,
    rng: StdRng,
}

impl RandomMoveEngine {
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

impl Engine for RandomMoveEngine {
    fn name(&self) -> &str {
        "GridChess Random"
    }

    fn color(&self) -> Color {
        self.color
    }

    fn get_move(&mut self, game_state: &GameState) -> Result<EngineOutput, EngineError> {
        let moves = candidate_moves(game_state, self.color)?;
        let picked = moves
            .as_slice()
            .choose(&mut self.rng)
            .copied()
            .ok_or(EngineError::NoCandidateMoves)?;

        Ok(EngineOutput {
            best_move: picked,
            info_lines: vec![format!(
                "info string random_engine candidate_moves {}",
                moves.len()
            )],
        })
    }
}
