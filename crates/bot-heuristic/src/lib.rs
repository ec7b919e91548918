//! One-ply heuristic move chooser for the computer opponent.
//!
//! Given the legal moves the rules engine reports for a position, this
//! crate scores each candidate notation and returns one of them. It is
//! deliberately shallow: captures, center control, and minor-piece
//! development, with a little random jitter so play is not deterministic.
//! It is not a search and must not be mistaken for one; its only contract
//! is "returns a legal move weighted toward captures, center, and
//! development".
//!
//! The jitter source is injectable: scoring is generic over [`rand::Rng`],
//! so tests can pin it (e.g. with `StepRng`) and assert the structural
//! ranking alone.

use game_core::{Color, Piece};
use rand::Rng;

/// Bonus for a capturing move.
const CAPTURE_BONUS: f64 = 10.0;
/// Bonus for landing on one of the four center squares.
const CENTER_BONUS: f64 = 5.0;
/// Bonus for moving a knight or bishop.
const DEVELOPMENT_BONUS: f64 = 3.0;
/// Upper bound (exclusive) of the uniform tie-breaking jitter.
const JITTER: f64 = 2.0;

/// The four center squares, in algebraic notation.
const CENTER_SQUARES: [&str; 4] = ["d4", "d5", "e4", "e5"];

/// Picks one move from `candidates`, highest heuristic score wins.
///
/// Ties after jitter are broken by first occurrence in the input order.
/// Returns `None` for an empty candidate set ("no move"): that should have
/// been preempted by a terminal game status, so callers treat it as a
/// fail-closed signal, not something to retry.
///
/// The returned notation is always an element of `candidates`.
pub fn select_move<'a, R: Rng>(candidates: &'a [String], rng: &mut R) -> Option<&'a str> {
    let mut best: Option<(&str, f64)> = None;

    for notation in candidates {
        let score = structural_score(notation) + rng.gen_range(0.0..JITTER);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((notation.as_str(), score)),
        }
    }

    if let Some((notation, score)) = best {
        tracing::debug!(%notation, score, "heuristic picked a move");
    }
    best.map(|(notation, _)| notation)
}

/// [`select_move`] with the thread RNG supplying the jitter.
pub fn choose_move(candidates: &[String]) -> Option<&str> {
    select_move(candidates, &mut rand::thread_rng())
}

/// The deterministic part of a candidate's score: captures, center
/// control, and minor-piece development.
fn structural_score(notation: &str) -> f64 {
    let mut score = 0.0;

    if notation.contains('x') {
        score += CAPTURE_BONUS;
    }

    if let Some(dest) = destination_square(notation) {
        if CENTER_SQUARES.contains(&dest) {
            score += CENTER_BONUS;
        }
    }

    if notation.starts_with('N') || notation.starts_with('B') {
        score += DEVELOPMENT_BONUS;
    }

    score
}

/// Extracts the destination square from a SAN move, if it has one.
///
/// Strips check/mate suffixes and promotion markers; castling has no
/// single destination square and yields `None`.
fn destination_square(notation: &str) -> Option<&str> {
    if notation.starts_with('O') || notation.starts_with('0') {
        return None;
    }
    let trimmed = notation.trim_end_matches(['+', '#']);
    let trimmed = match trimmed.find('=') {
        Some(idx) => &trimmed[..idx],
        None => trimmed,
    };
    let bytes = trimmed.as_bytes();
    if bytes.len() < 2 {
        return None;
    }
    let file = bytes[bytes.len() - 2];
    let rank = bytes[bytes.len() - 1];
    if (b'a'..=b'h').contains(&file) && (b'1'..=b'8').contains(&rank) {
        // Both bytes are ASCII, so the slice falls on a char boundary
        // even if the rest of the string is not.
        Some(&trimmed[trimmed.len() - 2..])
    } else {
        None
    }
}

/// Sums the material on the board from White's perspective, in pawns.
///
/// Positive means White is ahead. Used by the shell to show a material
/// indicator next to the captured-piece panels.
pub fn material_balance(pieces: &[Piece]) -> i32 {
    pieces
        .iter()
        .map(|p| match p.color {
            Color::White => p.kind.value(),
            Color::Black => -p.kind.value(),
        })
        .sum()
}
