//! Move types and move list.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastlingSide;
use super::piece::PieceKind;
use super::square::Square;
use crate::board::error::MoveParseError;

// Derived flags, set only by the move generator
const FLAG_CAPTURE: u8 = 1 << 0;
const FLAG_EN_PASSANT: u8 = 1 << 1;
const FLAG_DOUBLE_PAWN: u8 = 1 << 2;
const FLAG_CASTLE_KINGSIDE: u8 = 1 << 3;
const FLAG_CASTLE_QUEENSIDE: u8 = 1 << 4;

/// A chess move.
///
/// Moves built with [`Move::new`], [`Move::with_promotion`] or parsed from
/// long algebraic text are requests: they carry no derived flags and only
/// become meaningful once resolved against the legal moves of a position.
/// Moves produced by the generator carry the capture, castle, en passant
/// and double push flags.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
    flags: u8,
}

impl Move {
    /// A move request from one square to another
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
            flags: 0,
        }
    }

    /// A promotion request
    #[inline]
    #[must_use]
    pub const fn with_promotion(from: Square, to: Square, kind: PieceKind) -> Self {
        Move {
            from,
            to,
            promotion: Some(kind),
            flags: 0,
        }
    }

    #[inline]
    const fn with_flag(from: Square, to: Square, flags: u8) -> Self {
        Move {
            from,
            to,
            promotion: None,
            flags,
        }
    }

    #[inline]
    pub(crate) const fn quiet(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, 0)
    }

    #[inline]
    pub(crate) const fn capture(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, FLAG_CAPTURE)
    }

    #[inline]
    pub(crate) const fn double_pawn_push(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, FLAG_DOUBLE_PAWN)
    }

    #[inline]
    pub(crate) const fn en_passant(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, FLAG_EN_PASSANT | FLAG_CAPTURE)
    }

    #[inline]
    pub(crate) const fn castle(from: Square, to: Square, side: CastlingSide) -> Self {
        let flag = match side {
            CastlingSide::KingSide => FLAG_CASTLE_KINGSIDE,
            CastlingSide::QueenSide => FLAG_CASTLE_QUEENSIDE,
        };
        Move::with_flag(from, to, flag)
    }

    #[inline]
    pub(crate) const fn promotion_move(
        from: Square,
        to: Square,
        kind: PieceKind,
        capture: bool,
    ) -> Self {
        Move {
            from,
            to,
            promotion: Some(kind),
            flags: if capture { FLAG_CAPTURE } else { 0 },
        }
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Get the promotion piece kind, if any
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<PieceKind> {
        self.promotion
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.flags & FLAG_CAPTURE != 0
    }

    /// Returns true if this move is en passant
    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        self.flags & FLAG_EN_PASSANT != 0
    }

    /// Returns true if this move is castling (either side)
    #[inline]
    #[must_use]
    pub const fn is_castle(self) -> bool {
        self.flags & (FLAG_CASTLE_KINGSIDE | FLAG_CASTLE_QUEENSIDE) != 0
    }

    /// The wing of a castling move
    #[inline]
    #[must_use]
    pub const fn castling_side(self) -> Option<CastlingSide> {
        if self.flags & FLAG_CASTLE_KINGSIDE != 0 {
            Some(CastlingSide::KingSide)
        } else if self.flags & FLAG_CASTLE_QUEENSIDE != 0 {
            Some(CastlingSide::QueenSide)
        } else {
            None
        }
    }

    /// Returns true if this move is a double pawn push
    #[inline]
    #[must_use]
    pub const fn is_double_pawn_push(self) -> bool {
        self.flags & FLAG_DOUBLE_PAWN != 0
    }

    /// Returns true if this move is a pawn promotion
    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    /// True if `self` is the move `request` asks for (same squares and promotion)
    #[inline]
    #[must_use]
    pub fn fulfils(self, request: Move) -> bool {
        self.from == request.from && self.to == request.to && self.promotion == request.promotion
    }

    /// Strip the derived flags, leaving the bare request
    #[inline]
    #[must_use]
    pub const fn as_request(self) -> Move {
        Move {
            from: self.from,
            to: self.to,
            promotion: self.promotion,
            flags: 0,
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if self.is_capture() {
            write!(f, " cap")?;
        }
        if self.is_en_passant() {
            write!(f, " ep")?;
        }
        if self.is_castle() {
            write!(f, " castle")?;
        }
        write!(f, ")")
    }
}

/// Long algebraic notation: `e2e4`, `e7e8q`
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parse a move request in long algebraic notation (e.g. "e2e4", "e7e8q").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() || s.len() < 4 || s.len() > 5 {
            return Err(MoveParseError::InvalidLength {
                len: s.chars().count(),
            });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: s.to_string(),
        };
        let from: Square = s[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = s[2..4].parse().map_err(|_| invalid_square())?;

        match s[4..].chars().next() {
            None => Ok(Move::new(from, to)),
            Some(c) => match PieceKind::from_char(c) {
                Some(kind) if kind.is_promotion_target() => {
                    Ok(Move::with_promotion(from, to, kind))
                }
                _ => Err(MoveParseError::InvalidPromotion { char: c }),
            },
        }
    }
}

/// An ordered list of moves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(48),
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub(crate) fn retain(&mut self, keep: impl FnMut(&Move) -> bool) {
        self.moves.retain(keep);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// The generated move matching a request, if present
    #[must_use]
    pub fn find(&self, request: Move) -> Option<Move> {
        self.moves.iter().copied().find(|m| m.fulfils(request))
    }

    /// True if some move in the list fulfils `request`
    #[must_use]
    pub fn contains(&self, request: Move) -> bool {
        self.find(request).is_some()
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, index: usize) -> &Self::Output {
        &self.moves[index]
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl Extend<Move> for MoveList {
    fn extend<T: IntoIterator<Item = Move>>(&mut self, iter: T) {
        self.moves.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn parses_long_algebraic() {
        let mv: Move = "e2e4".parse().unwrap();
        assert_eq!(mv, Move::new(sq("e2"), sq("e4")));
        let promo: Move = "a7a8n".parse().unwrap();
        assert_eq!(promo.promotion(), Some(PieceKind::Knight));
        assert_eq!(promo.to_string(), "a7a8n");
    }

    #[test]
    fn rejects_malformed_text() {
        assert!(matches!(
            "e2".parse::<Move>(),
            Err(MoveParseError::InvalidLength { len: 2 })
        ));
        assert!(matches!(
            "z9z9".parse::<Move>(),
            Err(MoveParseError::InvalidSquare { .. })
        ));
        assert!(matches!(
            "a7a8k".parse::<Move>(),
            Err(MoveParseError::InvalidPromotion { char: 'k' })
        ));
        assert!(matches!(
            "é2e4".parse::<Move>(),
            Err(MoveParseError::InvalidLength { .. })
        ));
    }

    #[test]
    fn generated_flags_do_not_affect_fulfilment() {
        let generated = Move::en_passant(sq("e5"), sq("d6"));
        assert!(generated.is_capture());
        assert!(generated.is_en_passant());
        assert!(generated.fulfils(Move::new(sq("e5"), sq("d6"))));
        assert_eq!(generated.as_request(), Move::new(sq("e5"), sq("d6")));
        assert!(!generated.fulfils(Move::with_promotion(sq("e5"), sq("d6"), PieceKind::Queen)));
    }

    #[test]
    fn castle_side_flags() {
        let mv = Move::castle(sq("e1"), sq("c1"), CastlingSide::QueenSide);
        assert!(mv.is_castle());
        assert!(!mv.is_capture());
        assert_eq!(mv.castling_side(), Some(CastlingSide::QueenSide));
    }
}
