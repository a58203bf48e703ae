//! Attack and check queries.

use super::attack_tables::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, rook_attacks,
};
use super::{Bitboard, Board, Color, PieceKind, Position, Square};

impl Board {
    /// Pieces of color `by` that attack `target`.
    ///
    /// Pawns attack diagonally forward only, sliders are blocked by any
    /// piece in between, and the king attacks its eight neighbours. Whether
    /// the attacker is pinned is irrelevant.
    #[must_use]
    pub fn attackers_of(&self, target: Square, by: Color) -> Bitboard {
        let occ = self.occupied();
        let rook_like = self.pieces(by, PieceKind::Rook) | self.pieces(by, PieceKind::Queen);
        let bishop_like = self.pieces(by, PieceKind::Bishop) | self.pieces(by, PieceKind::Queen);

        (pawn_attacks(by.opponent(), target) & self.pieces(by, PieceKind::Pawn))
            | (knight_attacks(target) & self.pieces(by, PieceKind::Knight))
            | (king_attacks(target) & self.pieces(by, PieceKind::King))
            | (rook_attacks(target, occ) & rook_like)
            | (bishop_attacks(target, occ) & bishop_like)
    }

    /// Is `target` attacked by any piece of color `by`?
    #[inline]
    #[must_use]
    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        !self.attackers_of(target, by).is_empty()
    }

    /// Is the king of `color` attacked? A side without a king is never in check.
    #[must_use]
    pub fn king_in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opponent()))
    }
}

impl Position {
    /// Is the king of `color` attacked by the opponent?
    #[inline]
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.board.king_in_check(color)
    }

    /// Enemy pieces giving check to the side to move
    #[must_use]
    pub fn checkers(&self) -> Bitboard {
        match self.board.king_square(self.side_to_move) {
            Some(king) => self
                .board
                .attackers_of(king, self.side_to_move.opponent()),
            None => Bitboard::EMPTY,
        }
    }
}
