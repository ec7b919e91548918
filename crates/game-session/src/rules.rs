//! The rules-engine boundary.
//!
//! The orchestrator treats chess rules as an external collaborator. An
//! implementation owns the live position and answers three questions:
//! apply this move, list the legal moves, and whose turn is it. The
//! orchestrator never re-implements rule logic on its side of the line.

use game_core::{Color, MoveOutcome};
use thiserror::Error;

/// Why the rules engine refused a move.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveRejected {
    /// The proposed move is not legal in the current position.
    #[error("illegal move: {0}")]
    Illegal(String),
    /// The engine is missing or not initialized; callers fail closed.
    #[error("rules engine unavailable")]
    EngineUnavailable,
}

/// Contract for the external rules engine.
///
/// Rejections must be side-effect free: calling [`apply_move`]
/// (RulesEngine::apply_move) repeatedly with the same input against an
/// unchanged position is safe.
pub trait RulesEngine {
    /// Validates and applies a move given in algebraic notation, returning
    /// the verdict for the resulting position. On rejection the position
    /// is left unchanged.
    fn apply_move(&mut self, notation: &str) -> Result<MoveOutcome, MoveRejected>;

    /// Lists the legal moves in the current position, in the engine's
    /// preferred order.
    fn legal_moves(&self) -> Vec<String>;

    /// Serializes the current position to portable text notation.
    fn fen(&self) -> String;

    /// The color to move in the current position.
    fn turn(&self) -> Color;
}
