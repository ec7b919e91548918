//! Core types for the chess app.
//!
//! This crate provides the fundamental types shared across the game crates:
//! - [`Piece`], [`PieceKind`], and [`Color`] for piece representation
//! - [`Coord`] for board coordinates
//! - [`PlayedMove`] and [`MoveOutcome`] for move records and rules verdicts
//! - [`GameState`] for the authoritative game record

mod color;
mod coord;
mod mov;
mod piece;
mod state;

pub use color::Color;
pub use coord::{Coord, CoordError};
pub use mov::{MoveOutcome, PlayedMove};
pub use piece::{Piece, PieceKind};
pub use state::{
    CapturedPieces, Difficulty, GameMode, GameState, GameStatus, TimeControl,
};
