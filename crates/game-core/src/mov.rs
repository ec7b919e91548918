//! Move records and rules-engine verdicts.

use crate::{Coord, GameStatus, Piece, PieceKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A move as recorded in the game history.
///
/// Append-only once recorded: history entries are never edited after the
/// fact, which is what makes replay and time-travel from prior states safe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedMove {
    pub from: Coord,
    pub to: Coord,
    pub piece: Piece,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured_piece: Option<Piece>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<PieceKind>,
    #[serde(default)]
    pub is_check: bool,
    #[serde(default)]
    pub is_checkmate: bool,
    #[serde(default)]
    pub is_castling: bool,
    #[serde(default)]
    pub is_en_passant: bool,
    /// Algebraic notation for the move (e.g., "Nf3", "exd5").
    pub notation: String,
}

impl PlayedMove {
    /// Returns true if this move captured a piece.
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }
}

impl fmt::Display for PlayedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation)
    }
}

/// The rules engine's verdict for one applied move.
///
/// Carries the recorded move plus the terminal-position flags the engine
/// detected after applying it. The orchestrator derives the game status
/// from these flags alone; it never infers check or mate itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub mv: PlayedMove,
    #[serde(default)]
    pub is_stalemate: bool,
    #[serde(default)]
    pub is_draw: bool,
}

impl MoveOutcome {
    /// Wraps a recorded move with no terminal flags set.
    pub fn from_move(mv: PlayedMove) -> Self {
        MoveOutcome {
            mv,
            is_stalemate: false,
            is_draw: false,
        }
    }

    /// Returns the game status implied by this verdict.
    ///
    /// Checkmate and stalemate take precedence over check; a plain check
    /// beats playing; anything else leaves the game running.
    pub fn status(&self) -> GameStatus {
        if self.mv.is_checkmate {
            GameStatus::Checkmate
        } else if self.is_stalemate {
            GameStatus::Stalemate
        } else if self.is_draw {
            GameStatus::Draw
        } else if self.mv.is_check {
            GameStatus::Check
        } else {
            GameStatus::Playing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    fn sample_move(notation: &str) -> PlayedMove {
        let from = Coord::from_algebraic("e2").unwrap();
        let to = Coord::from_algebraic("e4").unwrap();
        PlayedMove {
            from,
            to,
            piece: Piece::new(PieceKind::Pawn, Color::White, from),
            captured_piece: None,
            promotion: None,
            is_check: false,
            is_checkmate: false,
            is_castling: false,
            is_en_passant: false,
            notation: notation.to_string(),
        }
    }

    #[test]
    fn capture_flag() {
        let mut mv = sample_move("exd5");
        assert!(!mv.is_capture());
        mv.captured_piece = Some(Piece::new(
            PieceKind::Pawn,
            Color::Black,
            Coord::from_algebraic("d5").unwrap(),
        ));
        assert!(mv.is_capture());
    }

    #[test]
    fn status_precedence() {
        let mut outcome = MoveOutcome::from_move(sample_move("e4"));
        assert_eq!(outcome.status(), GameStatus::Playing);

        outcome.mv.is_check = true;
        assert_eq!(outcome.status(), GameStatus::Check);

        // Checkmate wins over a simultaneous check flag.
        outcome.mv.is_checkmate = true;
        assert_eq!(outcome.status(), GameStatus::Checkmate);

        outcome.mv.is_checkmate = false;
        outcome.mv.is_check = false;
        outcome.is_stalemate = true;
        assert_eq!(outcome.status(), GameStatus::Stalemate);

        outcome.is_stalemate = false;
        outcome.is_draw = true;
        assert_eq!(outcome.status(), GameStatus::Draw);
    }

    #[test]
    fn played_move_serde_omits_empty_fields() {
        let mv = sample_move("e4");
        let json = serde_json::to_string(&mv).unwrap();
        assert!(!json.contains("captured_piece"));
        assert!(!json.contains("promotion"));
        let back: PlayedMove = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mv);
    }

    #[test]
    fn display_is_notation() {
        assert_eq!(format!("{}", sample_move("Nf3")), "Nf3");
    }
}
