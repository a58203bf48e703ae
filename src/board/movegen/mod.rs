//! Move generation.
//!
//! Moves are generated in two phases: pseudo-legal moves per piece kind
//! (castling safety is already checked here), then a legality filter that
//! plays each candidate and drops those leaving the mover's king attacked.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Bitboard, Move, MoveList, PieceKind, Position, Square};

impl Position {
    /// Every move obeying piece movement rules, including ones that leave
    /// the own king in check.
    #[must_use]
    pub fn pseudo_legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        for from in self.board.occupied_by(self.side_to_move).iter() {
            self.generate_moves_from(from, &mut moves);
        }
        moves
    }

    /// All legal moves for the side to move
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = self.pseudo_legal_moves();
        moves.retain(|mv| self.keeps_king_safe(*mv));
        moves
    }

    /// Legal moves of the piece on `from`.
    ///
    /// Empty when the square is empty or holds a piece of the side not to move.
    #[must_use]
    pub fn moves_from(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        self.generate_moves_from(from, &mut moves);
        moves.retain(|mv| self.keeps_king_safe(*mv));
        moves
    }

    /// True if the side to move has at least one legal move
    #[must_use]
    pub fn has_legal_moves(&self) -> bool {
        self.pseudo_legal_moves()
            .iter()
            .any(|mv| self.keeps_king_safe(*mv))
    }

    fn generate_moves_from(&self, from: Square, moves: &mut MoveList) {
        let Some(piece) = self.board.piece_at(from) else {
            return;
        };
        if piece.color != self.side_to_move {
            return;
        }
        match piece.kind {
            PieceKind::Pawn => self.generate_pawn_moves(from, moves),
            PieceKind::Knight => self.generate_knight_moves(from, moves),
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                self.generate_slider_moves(from, piece.kind, moves);
            }
            PieceKind::King => self.generate_king_moves(from, moves),
        }
    }

    /// Quiet or capturing moves onto each target square
    fn push_targets(&self, from: Square, targets: Bitboard, moves: &mut MoveList) {
        let enemies = self.board.occupied_by(self.side_to_move.opponent());
        for to in targets.iter() {
            if enemies.contains(to) {
                moves.push(Move::capture(from, to));
            } else {
                moves.push(Move::quiet(from, to));
            }
        }
    }

    fn keeps_king_safe(&self, mv: Move) -> bool {
        let mover = self.side_to_move;
        !self.play_unchecked(mv).board.king_in_check(mover)
    }
}

/// Count leaf nodes of the legal move tree to `depth` plies.
///
/// Used to check the generator against published reference counts.
#[must_use]
pub fn perft(position: &Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = position.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|mv| perft(&position.play_unchecked(*mv), depth - 1))
        .sum()
}

/// Perft split by root move, in generation order
#[must_use]
pub fn perft_divide(position: &Position, depth: u32) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    position
        .legal_moves()
        .into_iter()
        .map(|mv| (mv, perft(&position.play_unchecked(mv), depth - 1)))
        .collect()
}
