//! Session lifecycle around the authoritative game record.
//!
//! [`GameSession`] owns the record explicitly rather than parking it in an
//! ambient store, so the orchestrator is testable without any global
//! state.

use crate::rules::{MoveRejected, RulesEngine};
use crate::ENGINE_COLOR;
use game_core::{Difficulty, GameMode, GameState, MoveOutcome};
use thiserror::Error;

/// Errors from session operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A move was recorded with no game in progress. This signals an
    /// internal consistency fault in the caller, not a user-facing error;
    /// the session stays unchanged.
    #[error("no active game")]
    NoActiveGame,
    /// The game has already reached an absorbing status.
    #[error("game has already ended")]
    GameOver,
    /// The computer-turn driver was invoked when it is not the engine's
    /// turn.
    #[error("not the computer's turn")]
    NotComputerTurn,
    /// The evaluator produced no move. Should have been preempted by a
    /// terminal status; reported, never retried.
    #[error("no computer move available")]
    NoComputerMove,
    /// The rules engine refused the move; the record is untouched.
    #[error(transparent)]
    Rejected(#[from] MoveRejected),
}

/// Owner of the single game record.
///
/// At most one game exists at a time. It is created whole by
/// [`start_game`](GameSession::start_game), advanced one validated move at
/// a time, and discarded whole by [`reset_game`](GameSession::reset_game).
#[derive(Debug, Default)]
pub struct GameSession {
    current: Option<GameState>,
    last_error: Option<String>,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh game, replacing any game in progress.
    pub fn start_game(&mut self, mode: GameMode, difficulty: Option<Difficulty>) -> &GameState {
        tracing::debug!(?mode, ?difficulty, "starting new game");
        self.last_error = None;
        self.current.insert(GameState::new(mode, difficulty))
    }

    /// Discards the active record.
    pub fn reset_game(&mut self) {
        tracing::debug!("resetting game");
        self.current = None;
        self.last_error = None;
    }

    /// The active game record, if any.
    pub fn game(&self) -> Option<&GameState> {
        self.current.as_ref()
    }

    /// Returns true while a game is in progress.
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// The most recent "invalid move" message, for the shell to surface.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Records a verdict the rules engine already validated.
    ///
    /// Appends the move, buckets any capture, flips the turn, and takes
    /// the new status from the verdict, atomically, as one replacement of
    /// the record. Performs no legality checking of its own.
    pub fn record_move(&mut self, outcome: &MoveOutcome) -> Result<(), SessionError> {
        let Some(state) = self.current.as_ref() else {
            tracing::warn!("record_move with no active game");
            return Err(SessionError::NoActiveGame);
        };
        if state.status().is_terminal() {
            tracing::warn!(status = %state.status(), "record_move after game end");
            return Err(SessionError::GameOver);
        }

        let next = state.with_move(outcome);
        tracing::debug!(
            notation = %outcome.mv.notation,
            ply = next.ply_count(),
            status = %next.status(),
            to_move = %next.current_player(),
            "move recorded"
        );
        self.current = Some(next);
        self.last_error = None;
        Ok(())
    }

    /// Runs a proposed move through the rules engine and records it if
    /// accepted.
    ///
    /// On rejection the record is left untouched and the rejection message
    /// is kept for [`last_error`](GameSession::last_error); repeating the
    /// call is safe.
    pub fn try_move<E>(&mut self, rules: &mut E, notation: &str) -> Result<(), SessionError>
    where
        E: RulesEngine + ?Sized,
    {
        let Some(state) = self.current.as_ref() else {
            return Err(SessionError::NoActiveGame);
        };
        if state.status().is_terminal() {
            return Err(SessionError::GameOver);
        }

        match rules.apply_move(notation) {
            Ok(outcome) => self.record_move(&outcome),
            Err(rejected) => {
                tracing::warn!(%notation, %rejected, "move rejected");
                self.last_error = Some(rejected.to_string());
                Err(rejected.into())
            }
        }
    }

    /// First phase of a computer turn: has the turn just passed to the
    /// engine-controlled color in a computer game that is still running?
    ///
    /// The second phase, actually computing and applying the move, is
    /// [`play_computer_turn`](crate::play_computer_turn), kept separate
    /// so tests can drive it synchronously and the shell can insert its
    /// thinking delay in between.
    pub fn computer_to_move(&self) -> bool {
        match &self.current {
            Some(state) => {
                state.mode() == GameMode::Computer
                    && state.current_player() == ENGINE_COLOR
                    && !state.status().is_terminal()
            }
            None => false,
        }
    }
}
