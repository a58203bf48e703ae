//! Unicode chess glyphs for display.

use super::{Color, Piece, PieceKind};

const fn entry(color: Color, kind: PieceKind, glyph: char) -> (Piece, char) {
    (Piece::new(color, kind), glyph)
}

/// Display glyph of every piece, white first, kinds in index order
pub const PIECE_GLYPHS: [(Piece, char); 12] = [
    entry(Color::White, PieceKind::Pawn, '♙'),
    entry(Color::White, PieceKind::Knight, '♘'),
    entry(Color::White, PieceKind::Bishop, '♗'),
    entry(Color::White, PieceKind::Rook, '♖'),
    entry(Color::White, PieceKind::Queen, '♕'),
    entry(Color::White, PieceKind::King, '♔'),
    entry(Color::Black, PieceKind::Pawn, '♟'),
    entry(Color::Black, PieceKind::Knight, '♞'),
    entry(Color::Black, PieceKind::Bishop, '♝'),
    entry(Color::Black, PieceKind::Rook, '♜'),
    entry(Color::Black, PieceKind::Queen, '♛'),
    entry(Color::Black, PieceKind::King, '♚'),
];

impl Piece {
    /// Unicode glyph (♔ for the white king, ♚ for the black one)
    #[inline]
    #[must_use]
    pub const fn glyph(self) -> char {
        PIECE_GLYPHS[self.color.index() * 6 + self.kind.index()].1
    }
}
