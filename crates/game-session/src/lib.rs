//! Game orchestration for the chess app.
//!
//! This crate owns the authoritative [`GameState`](game_core::GameState)
//! for the one game in progress and applies validated move results to it.
//! Chess rules themselves live behind the [`RulesEngine`] boundary: this
//! crate never checks legality, castling, en passant, or repetition; it
//! only consumes the engine's verdicts.
//!
//! - [`GameSession`] - explicit owner of the current game record
//! - [`RulesEngine`] - the external rules collaborator contract
//! - [`play_computer_turn`] - the second phase of a computer turn

mod driver;
mod rules;
mod session;

pub use driver::{play_computer_turn, play_computer_turn_with, ENGINE_COLOR};
pub use rules::{MoveRejected, RulesEngine};
pub use session::{GameSession, SessionError};
