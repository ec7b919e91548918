//! The authoritative game record.
//!
//! [`GameState`] is the single source of truth for one game in progress:
//! whose turn it is, the chronological move history, the material captured
//! from each side, and the terminal conditions reported by the rules
//! engine. It is created whole at game start and replaced whole on every
//! move; there is no partial reconstruction.

use crate::{Color, MoveOutcome, Piece, PlayedMove};
use serde::{Deserialize, Serialize};

/// Where the game currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Playing,
    Check,
    Checkmate,
    Stalemate,
    Draw,
}

impl GameStatus {
    /// Returns true for the absorbing statuses: once the game reaches one
    /// of these, no further moves are accepted.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate | GameStatus::Stalemate | GameStatus::Draw
        )
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GameStatus::Playing => "playing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
            GameStatus::Draw => "draw",
        };
        write!(f, "{}", s)
    }
}

/// How the game is being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Two players sharing the device.
    Local,
    /// Against the built-in heuristic opponent.
    Computer,
    /// Against a remote opponent (handled by the app shell).
    Online,
}

/// Strength setting for the computer opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

/// Clock settings, carried through for the shell but never consulted by
/// the core logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeControl {
    pub white_ms: u64,
    pub black_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub increment_ms: Option<u64>,
}

/// Pieces captured from each color.
///
/// Buckets are keyed by the captured piece's own color: capturing a black
/// knight puts it in the `black` bucket, regardless of who moved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedPieces {
    white: Vec<Piece>,
    black: Vec<Piece>,
}

impl CapturedPieces {
    /// Adds a captured piece to the bucket for its own color.
    pub fn add(&mut self, piece: Piece) {
        match piece.color {
            Color::White => self.white.push(piece),
            Color::Black => self.black.push(piece),
        }
    }

    /// Returns the pieces captured from the given color.
    pub fn of(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    /// Returns the total material captured from the given color, in pawns.
    pub fn points(&self, color: Color) -> i32 {
        self.of(color).iter().map(|p| p.kind.value()).sum()
    }

    /// Returns true if nothing has been captured yet.
    pub fn is_empty(&self) -> bool {
        self.white.is_empty() && self.black.is_empty()
    }
}

/// The authoritative record of one game in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    current_player: Color,
    status: GameStatus,
    moves: Vec<PlayedMove>,
    captured: CapturedPieces,
    mode: GameMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    difficulty: Option<Difficulty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    time_control: Option<TimeControl>,
}

impl GameState {
    /// Creates a fresh record: White to move, status `Playing`, empty
    /// history and captures. Always succeeds.
    pub fn new(mode: GameMode, difficulty: Option<Difficulty>) -> Self {
        GameState {
            current_player: Color::White,
            status: GameStatus::Playing,
            moves: Vec::new(),
            captured: CapturedPieces::default(),
            mode,
            difficulty,
            time_control: None,
        }
    }

    /// Attaches clock settings to the record.
    pub fn with_time_control(mut self, tc: TimeControl) -> Self {
        self.time_control = Some(tc);
        self
    }

    /// Applies a validated move verdict, returning the successor record.
    ///
    /// This is a pure transition: the move is appended, any captured piece
    /// is bucketed by its own color, the turn flips, and the status is
    /// taken from the verdict's flags. The prior record is left untouched,
    /// so callers may retain it for undo or review.
    ///
    /// Legality is the caller's contract: the verdict must come from the
    /// rules engine for a move it accepted.
    #[must_use]
    pub fn with_move(&self, outcome: &MoveOutcome) -> GameState {
        let mut next = self.clone();
        if let Some(captured) = outcome.mv.captured_piece {
            next.captured.add(captured);
        }
        next.moves.push(outcome.mv.clone());
        next.current_player = self.current_player.opposite();
        next.status = outcome.status();
        debug_assert_eq!(next.current_player, Color::from_ply(next.moves.len()));
        next
    }

    /// The side to move.
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// The current game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The chronological move history. The index of a move is its ply.
    pub fn moves(&self) -> &[PlayedMove] {
        &self.moves
    }

    /// The number of half-moves played.
    pub fn ply_count(&self) -> usize {
        self.moves.len()
    }

    /// The captured-piece buckets.
    pub fn captured(&self) -> &CapturedPieces {
        &self.captured
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn time_control(&self) -> Option<TimeControl> {
        self.time_control
    }

    /// Renders the history as numbered move pairs ("1. e4 e5"), the way
    /// the move list panel displays it.
    pub fn numbered_history(&self) -> Vec<String> {
        self.moves
            .chunks(2)
            .enumerate()
            .map(|(i, pair)| match pair {
                [white, black] => {
                    format!("{}. {} {}", i + 1, white.notation, black.notation)
                }
                [white] => format!("{}. {}", i + 1, white.notation),
                _ => unreachable!(),
            })
            .collect()
    }
}
