//! Second phase of the computer turn.
//!
//! A computer turn is a two-phase protocol: the session answers "did the
//! turn just pass to the engine color" via
//! [`GameSession::computer_to_move`], and this module performs the
//! separate "compute and apply" step. Any thinking delay the shell wants
//! to show lives between the two phases, outside this crate.

use crate::rules::RulesEngine;
use crate::session::{GameSession, SessionError};
use game_core::Color;
use rand::Rng;

/// The engine-controlled side. The human always plays White in computer
/// games.
pub const ENGINE_COLOR: Color = Color::Black;

/// Computes and records the computer's move, with an injectable jitter
/// source for the heuristic.
///
/// Fails closed: if it is not the engine's turn, if the engine and the
/// record disagree on whose turn it is, or if no candidate move comes
/// back, the record is left untouched and the turn does not advance.
///
/// Returns the notation of the move that was recorded.
pub fn play_computer_turn_with<E, R>(
    session: &mut GameSession,
    rules: &mut E,
    rng: &mut R,
) -> Result<String, SessionError>
where
    E: RulesEngine + ?Sized,
    R: Rng,
{
    if !session.computer_to_move() {
        tracing::warn!("computer turn driven out of phase");
        return Err(SessionError::NotComputerTurn);
    }
    if rules.turn() != ENGINE_COLOR {
        // The record and the engine position disagree; do not move.
        tracing::warn!(engine_turn = %rules.turn(), "record and rules engine out of sync");
        return Err(SessionError::NotComputerTurn);
    }

    let candidates = rules.legal_moves();
    tracing::debug!(fen = %rules.fen(), candidates = candidates.len(), "computer to move");

    let Some(chosen) = bot_heuristic::select_move(&candidates, rng) else {
        // With a non-terminal status this should be unreachable; the prior
        // move's verdict would have ended the game first.
        tracing::warn!("evaluator returned no move in a non-terminal position");
        return Err(SessionError::NoComputerMove);
    };
    let chosen = chosen.to_string();

    let outcome = rules.apply_move(&chosen)?;
    session.record_move(&outcome)?;
    Ok(chosen)
}

/// [`play_computer_turn_with`] using the thread RNG.
pub fn play_computer_turn<E>(
    session: &mut GameSession,
    rules: &mut E,
) -> Result<String, SessionError>
where
    E: RulesEngine + ?Sized,
{
    play_computer_turn_with(session, rules, &mut rand::thread_rng())
}
