//! Game status classification: check, checkmate, stalemate and draws.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Bitboard, Color, PieceKind, Position};
use crate::config::DrawRules;

/// Why a game was drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DrawReason {
    InsufficientMaterial,
    FiftyMoveRule,
    ThreefoldRepetition,
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            DrawReason::InsufficientMaterial => "insufficient material",
            DrawReason::FiftyMoveRule => "fifty-move rule",
            DrawReason::ThreefoldRepetition => "repetition",
        };
        f.write_str(text)
    }
}

/// How a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    /// The side to move is mated
    Checkmate,
    Stalemate,
    Draw(DrawReason),
}

/// Classification of a position.
///
/// At most one of checkmate, stalemate and draw holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameStatus {
    side_to_move: Color,
    in_check: bool,
    outcome: Option<Outcome>,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    #[inline]
    #[must_use]
    pub fn checkmate(&self) -> bool {
        self.outcome == Some(Outcome::Checkmate)
    }

    #[inline]
    #[must_use]
    pub fn stalemate(&self) -> bool {
        self.outcome == Some(Outcome::Stalemate)
    }

    #[inline]
    #[must_use]
    pub fn draw(&self) -> bool {
        self.draw_reason().is_some()
    }

    #[must_use]
    pub fn draw_reason(&self) -> Option<DrawReason> {
        match self.outcome {
            Some(Outcome::Draw(reason)) => Some(reason),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// True once the game admits no further moves
    #[inline]
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// The side that delivered mate, if any
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.checkmate().then(|| self.side_to_move.opponent())
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Some(Outcome::Checkmate) => {
                write!(f, "checkmate, {} wins", self.side_to_move.opponent())
            }
            Some(Outcome::Stalemate) => write!(f, "stalemate"),
            Some(Outcome::Draw(reason)) => write!(f, "draw by {reason}"),
            None if self.in_check => write!(f, "{} to move, in check", self.side_to_move),
            None => write!(f, "{} to move", self.side_to_move),
        }
    }
}

/// Classify `position`.
///
/// `repetitions` is how many times the position has occurred in the game so
/// far, this occurrence included. Checkmate and stalemate take precedence
/// over draws; draw rules are tried in the order insufficient material,
/// fifty-move rule, repetition.
#[must_use]
pub fn evaluate(position: &Position, rules: &DrawRules, repetitions: u32) -> GameStatus {
    let side_to_move = position.side_to_move;
    let in_check = position.is_in_check(side_to_move);

    let outcome = if !position.has_legal_moves() {
        Some(if in_check {
            Outcome::Checkmate
        } else {
            Outcome::Stalemate
        })
    } else {
        draw_reason(position, rules, repetitions).map(Outcome::Draw)
    };

    GameStatus {
        side_to_move,
        in_check,
        outcome,
    }
}

fn draw_reason(position: &Position, rules: &DrawRules, repetitions: u32) -> Option<DrawReason> {
    if rules.insufficient_material && position.has_insufficient_material() {
        return Some(DrawReason::InsufficientMaterial);
    }
    if rules
        .fifty_move_plies
        .is_some_and(|limit| position.halfmove_clock >= limit)
    {
        return Some(DrawReason::FiftyMoveRule);
    }
    if rules
        .repetition_threshold
        .is_some_and(|threshold| repetitions >= threshold)
    {
        return Some(DrawReason::ThreefoldRepetition);
    }
    None
}

impl Position {
    /// Status with the default draw rules and no game history
    #[must_use]
    pub fn status(&self) -> GameStatus {
        evaluate(self, &DrawRules::default(), 1)
    }

    /// Neither side can mate: no pawns, rooks or queens, and at most one
    /// minor piece or only bishops that all stand on one square color.
    #[must_use]
    pub fn has_insufficient_material(&self) -> bool {
        let board = &self.board;
        let heavy_or_pawn = [PieceKind::Pawn, PieceKind::Rook, PieceKind::Queen]
            .into_iter()
            .any(|kind| {
                Color::BOTH
                    .into_iter()
                    .any(|color| !board.pieces(color, kind).is_empty())
            });
        if heavy_or_pawn {
            return false;
        }

        let side_pieces = |kind| {
            board.pieces(Color::White, kind) | board.pieces(Color::Black, kind)
        };
        let knights = side_pieces(PieceKind::Knight);
        let bishops = side_pieces(PieceKind::Bishop);
        if knights.popcount() + bishops.popcount() <= 1 {
            return true;
        }
        knights.is_empty()
            && ((bishops & Bitboard::LIGHT_SQUARES).is_empty()
                || (bishops & Bitboard::DARK_SQUARES).is_empty())
    }
}
