//! Runtime engine selection by name, as used by the binaries.

use std::str::FromStr;

use crate::engines::engine_greedy::GreedyCaptureEngine;
use crate::engines::engine_random::RandomMoveEngine;
use crate::engines::engine_random_piece::RandomPieceEngine;
use crate::engines::engine_trait::{Engine, EngineError};
use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineChoice {
    RandomMove,
    RandomPiece,
    Greedy,
}

impl FromStr for EngineChoice {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" | "random-move" => Ok(Self::RandomMove),
            "random-piece" | "piece" => Ok(Self::RandomPiece),
            "greedy" => Ok(Self::Greedy),
            other => Err(EngineError::InvalidConfig(format!(
                "unknown engine '{other}', expected random, random-piece or greedy"
            ))),
        }
    }
}

/// Box an engine for `color`. With a seed the engine plays reproducibly.
pub fn build_engine(choice: EngineChoice, color: Color, seed: Option<u64>) -> Box<dyn Engine> {
    match (choice, seed) {
        (EngineChoice::RandomMove, Some(seed)) => {
            Box::new(RandomMoveEngine::with_seed(color, seed))
        }
        (EngineChoice::RandomMove, None) => Box::new(RandomMoveEngine::new(color)),
        (EngineChoice::RandomPiece, Some(seed)) => {
            Box::new(RandomPieceEngine::with_seed(color, seed))
        }
        (EngineChoice::RandomPiece, None) => Box::new(RandomPieceEngine::new(color)),
        (EngineChoice::Greedy, Some(seed)) => Box::new(GreedyCaptureEngine::with_seed(color, seed)),
        (EngineChoice::Greedy, None) => Box::new(GreedyCaptureEngine::new(color)),
    }
}
