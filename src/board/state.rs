use std::fmt;

use super::{
    king_home, rook_home, Bitboard, CastlingRights, CastlingSide, Color, Piece, PieceKind, Square,
};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement: one optional piece per square.
///
/// Stored as a bitboard per (color, kind) plus occupancy caches, so every
/// square holds at most one piece by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pieces: [[Bitboard; 6]; 2],
    occupied: [Bitboard; 2],
    all_occupied: Bitboard,
}

impl Board {
    /// A board with no pieces
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            occupied: [Bitboard::EMPTY; 2],
            all_occupied: Bitboard::EMPTY,
        }
    }

    /// The standard starting placement
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Board::empty();
        for (file, kind) in (0u8..).zip(BACK_RANK) {
            let squares = [
                (0, Color::White, kind),
                (7, Color::Black, kind),
                (1, Color::White, PieceKind::Pawn),
                (6, Color::Black, PieceKind::Pawn),
            ];
            for (rank, color, kind) in squares {
                if let Some(sq) = Square::new(rank, file) {
                    board.set_piece(sq, Piece::new(color, kind));
                }
            }
        }
        board
    }

    /// Place a piece on an empty square
    pub(crate) fn set_piece(&mut self, sq: Square, piece: Piece) {
        let bit = Bitboard::from_square(sq);
        let c_idx = piece.color.index();
        self.pieces[c_idx][piece.kind.index()] |= bit;
        self.occupied[c_idx] |= bit;
        self.all_occupied |= bit;
    }

    /// Remove whatever stands on `sq` and return it
    pub(crate) fn take_piece(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.piece_at(sq)?;
        let keep = !Bitboard::from_square(sq);
        let c_idx = piece.color.index();
        let p_idx = piece.kind.index();
        self.pieces[c_idx][p_idx] = self.pieces[c_idx][p_idx] & keep;
        self.occupied[c_idx] = self.occupied[c_idx] & keep;
        self.all_occupied = self.all_occupied & keep;
        Some(piece)
    }

    /// The piece on a square, if any
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if !self.all_occupied.contains(sq) {
            return None;
        }
        let color = if self.occupied[Color::White.index()].contains(sq) {
            Color::White
        } else {
            Color::Black
        };
        PieceKind::ALL
            .into_iter()
            .find(|kind| self.pieces[color.index()][kind.index()].contains(sq))
            .map(|kind| Piece::new(color, kind))
    }

    /// True if no piece stands on `sq`
    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        !self.all_occupied.contains(sq)
    }

    /// Squares holding pieces of one color and kind
    #[inline]
    #[must_use]
    pub fn pieces(&self, color: Color, kind: PieceKind) -> Bitboard {
        self.pieces[color.index()][kind.index()]
    }

    /// Squares holding pieces of one color
    #[inline]
    #[must_use]
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.occupied[color.index()]
    }

    /// Squares holding any piece
    #[inline]
    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        self.all_occupied
    }

    /// Square of the king of `color` (the lowest one if a hand-built board has several)
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color, PieceKind::King).first()
    }

    /// All occupied squares with their pieces, from a1 to h8
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.all_occupied
            .iter()
            .filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting()
    }
}

/// ASCII grid with FEN letters, rank 8 at the top
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +-----------------+")?;
        for rank in (0..8u8).rev() {
            write!(f, "{} |", rank + 1)?;
            for file in 0..8u8 {
                let ch = Square::new(rank, file)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or('.', Piece::to_fen_char);
                write!(f, " {ch}")?;
            }
            writeln!(f, " |")?;
        }
        writeln!(f, "  +-----------------+")?;
        write!(f, "    a b c d e f g h")
    }
}

/// A complete game state: placement plus side to move, castling rights,
/// en passant target and the two move counters.
///
/// Positions are immutable values; moves produce new positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Position {
    /// The standard starting position
    #[must_use]
    pub fn starting() -> Self {
        Position {
            board: Board::starting(),
            side_to_move: Color::White,
            castling: CastlingRights::all(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    /// Square skipped by the last move if it was a double pawn push
    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    /// Halfmoves since the last pawn move or capture
    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Starts at 1, incremented after each black move
    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// The piece on a square, if any
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }

    /// True if the king and rook for a castling right are on their home squares
    pub(crate) fn castling_pieces_home(&self, color: Color, side: CastlingSide) -> bool {
        self.board.piece_at(king_home(color)) == Some(Piece::new(color, PieceKind::King))
            && self.board.piece_at(rook_home(color, side))
                == Some(Piece::new(color, PieceKind::Rook))
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::starting()
    }
}
