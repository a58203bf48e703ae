//! Castling rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

pub(crate) const CASTLE_WHITE_K: u8 = 1 << 0;
pub(crate) const CASTLE_WHITE_Q: u8 = 1 << 1;
pub(crate) const CASTLE_BLACK_K: u8 = 1 << 2;
pub(crate) const CASTLE_BLACK_Q: u8 = 1 << 3;

/// All castling rights combined
pub(crate) const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Which wing a castling move goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastlingSide {
    KingSide,
    QueenSide,
}

impl CastlingSide {
    pub const BOTH: [CastlingSide; 2] = [CastlingSide::KingSide, CastlingSide::QueenSide];

    /// File the king lands on (g or c)
    #[inline]
    pub(crate) const fn king_to_file(self) -> u8 {
        match self {
            CastlingSide::KingSide => 6,
            CastlingSide::QueenSide => 2,
        }
    }

    /// File the rook starts on (h or a)
    #[inline]
    pub(crate) const fn rook_from_file(self) -> u8 {
        match self {
            CastlingSide::KingSide => 7,
            CastlingSide::QueenSide => 0,
        }
    }

    /// File the rook lands on (f or d)
    #[inline]
    pub(crate) const fn rook_to_file(self) -> u8 {
        match self {
            CastlingSide::KingSide => 5,
            CastlingSide::QueenSide => 3,
        }
    }
}

/// King home square for a color (e1 / e8)
#[inline]
pub(crate) fn king_home(color: Color) -> Square {
    Square::from_index_unchecked(color.back_rank() * 8 + 4)
}

/// Rook home square for a color and wing (h1, a1, h8, a8)
#[inline]
pub(crate) fn rook_home(color: Color, side: CastlingSide) -> Square {
    Square::from_index_unchecked(color.back_rank() * 8 + side.rook_from_file())
}

/// Castling rights represented as a bitmask
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, side: CastlingSide) -> bool {
        self.0 & Self::bit_for(color, side) != 0
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, color: Color, side: CastlingSide) {
        self.0 |= Self::bit_for(color, side);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, side: CastlingSide) {
        self.0 &= !Self::bit_for(color, side);
    }

    /// True when no side may castle
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Drop every right tied to a square a piece just left or landed on.
    ///
    /// A right survives only while its king and rook both sit untouched on
    /// their home squares, so touching any of those squares revokes it.
    #[inline]
    pub(crate) fn revoke_touching(&mut self, sq: Square) {
        self.0 &= !Self::rights_tied_to(sq);
    }

    /// Get the bit for a specific castling right
    #[inline]
    const fn bit_for(color: Color, side: CastlingSide) -> u8 {
        match (color, side) {
            (Color::White, CastlingSide::KingSide) => CASTLE_WHITE_K,
            (Color::White, CastlingSide::QueenSide) => CASTLE_WHITE_Q,
            (Color::Black, CastlingSide::KingSide) => CASTLE_BLACK_K,
            (Color::Black, CastlingSide::QueenSide) => CASTLE_BLACK_Q,
        }
    }

    const fn rights_tied_to(sq: Square) -> u8 {
        match sq.index() {
            0 => CASTLE_WHITE_Q,
            4 => CASTLE_WHITE_K | CASTLE_WHITE_Q,
            7 => CASTLE_WHITE_K,
            56 => CASTLE_BLACK_Q,
            60 => CASTLE_BLACK_K | CASTLE_BLACK_Q,
            63 => CASTLE_BLACK_K,
            _ => 0,
        }
    }

    /// Iterate the granted rights in FEN order (K, Q, k, q)
    pub fn iter(self) -> impl Iterator<Item = (Color, CastlingSide)> {
        [
            (Color::White, CastlingSide::KingSide),
            (Color::White, CastlingSide::QueenSide),
            (Color::Black, CastlingSide::KingSide),
            (Color::Black, CastlingSide::QueenSide),
        ]
        .into_iter()
        .filter(move |&(color, side)| self.has(color, side))
    }
}

/// FEN letter for a castling right
pub(crate) const fn castle_char(color: Color, side: CastlingSide) -> char {
    match (color, side) {
        (Color::White, CastlingSide::KingSide) => 'K',
        (Color::White, CastlingSide::QueenSide) => 'Q',
        (Color::Black, CastlingSide::KingSide) => 'k',
        (Color::Black, CastlingSide::QueenSide) => 'q',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rights_are_independent() {
        let mut rights = CastlingRights::all();
        rights.remove(Color::White, CastlingSide::QueenSide);
        assert!(rights.has(Color::White, CastlingSide::KingSide));
        assert!(!rights.has(Color::White, CastlingSide::QueenSide));
        assert!(rights.has(Color::Black, CastlingSide::QueenSide));
    }

    #[test]
    fn touching_home_squares_revokes() {
        let mut rights = CastlingRights::all();
        rights.revoke_touching("h8".parse().unwrap());
        assert!(!rights.has(Color::Black, CastlingSide::KingSide));
        assert!(rights.has(Color::Black, CastlingSide::QueenSide));

        rights.revoke_touching("e1".parse().unwrap());
        assert!(!rights.has(Color::White, CastlingSide::KingSide));
        assert!(!rights.has(Color::White, CastlingSide::QueenSide));

        rights.revoke_touching("d4".parse().unwrap());
        assert!(rights.has(Color::Black, CastlingSide::QueenSide));
    }

    #[test]
    fn iter_is_fen_ordered() {
        let letters: String = CastlingRights::all()
            .iter()
            .map(|(c, s)| castle_char(c, s))
            .collect();
        assert_eq!(letters, "KQkq");
    }
}
