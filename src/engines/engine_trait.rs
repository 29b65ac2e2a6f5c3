//! Engine abstraction layer for bots.
//!
//! An engine is bound to one color at construction and, when asked, returns a
//! move drawn from the pseudo-legal moves of that color. Strategies are
//! selected at runtime behind the single `Engine` trait.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The side to move has no pseudo-legal move at all.
    NoCandidateMoves,
    /// A move that the generator would not produce for the side to move.
    IllegalMove(ChessMove),
    /// Engine asked to move while it is another color's turn.
    WrongTurn { engine: Color, to_move: Color },
    InvalidConfig(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::NoCandidateMoves => write!(f, "no candidate moves for the side to move"),
            EngineError::IllegalMove(mv) => {
                write!(f, "illegal move from {:?} to {:?}", mv.from, mv.to)
            }
            EngineError::WrongTurn { engine, to_move } => {
                write!(f, "engine plays {engine:?} but {to_move:?} is to move")
            }
            EngineError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl Error for EngineError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOutput {
    pub best_move: ChessMove,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn color(&self) -> Color;

    fn new_game(&mut self) {}

    fn get_move(&mut self, game_state: &GameState) -> Result<EngineOutput, EngineError>;
}

/// Every pseudo-legal move for `color`, after checking it is that color's turn.
pub fn candidate_moves(
    game_state: &GameState,
    color: Color,
) -> Result<Vec<ChessMove>, EngineError> {
    let to_move = game_state.current_color();
    if color != to_move {
        return Err(EngineError::WrongTurn {
            engine: color,
            to_move,
        });
    }

    let moves = game_state.find_moves_for_color(color);
    if moves.is_empty() {
        return Err(EngineError::NoCandidateMoves);
    }
    Ok(moves)
}

#[cfg(test)]
mod tests {
    use super::{candidate_moves, EngineError};
    use crate::game_state::chess_types::Color;
    use crate::game_state::game_state::GameState;

    #[test]
    fn candidates_require_the_engine_to_be_on_move() {
        let game = GameState::new_game();
        assert_eq!(
            candidate_moves(&game, Color::Black),
            Err(EngineError::WrongTurn {
                engine: Color::Black,
                to_move: Color::White,
            })
        );
        assert_eq!(
            candidate_moves(&game, Color::White)
                .expect("white should have moves")
                .len(),
            20
        );
    }

    #[test]
    fn empty_side_reports_no_candidates() {
        // Only a black king on the board, White to move.
        let game = GameState::from_piece_placement("4k3/8/8/8/8/8/8/8", 2)
            .expect("placement should parse");
        assert_eq!(
            candidate_moves(&game, Color::White),
            Err(EngineError::NoCandidateMoves)
        );
    }

    #[test]
    fn errors_render_readably() {
        let text = EngineError::InvalidConfig("max_plies must be positive".to_owned()).to_string();
        assert_eq!(text, "invalid configuration: max_plies must be positive");
        assert!(EngineError::NoCandidateMoves.to_string().contains("no candidate"));
    }
}
