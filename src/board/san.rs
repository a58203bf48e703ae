//! Standard Algebraic Notation (SAN) for the move list.
//!
//! Examples: "e4", "Nf3", "Bxc6+", "O-O", "e8=Q#"

use super::{CastlingSide, Move, PieceKind, Position};

impl Position {
    /// Format a legal move of this position in SAN.
    ///
    /// `mv` should come from [`Position::resolve`] or the generator, so its
    /// capture and castle flags are set.
    #[must_use]
    pub fn san(&self, mv: Move) -> String {
        let mut san = String::new();

        match mv.castling_side() {
            Some(CastlingSide::KingSide) => san.push_str("O-O"),
            Some(CastlingSide::QueenSide) => san.push_str("O-O-O"),
            None => {
                let kind = self
                    .board
                    .piece_at(mv.from())
                    .map_or(PieceKind::Pawn, |p| p.kind);

                if kind == PieceKind::Pawn {
                    if mv.is_capture() {
                        san.push(mv.from().file_char());
                    }
                } else {
                    san.push(kind.to_char().to_ascii_uppercase());
                    let (needs_file, needs_rank) = self.needs_disambiguation(mv, kind);
                    if needs_file {
                        san.push(mv.from().file_char());
                    }
                    if needs_rank {
                        san.push(mv.from().rank_char());
                    }
                }

                if mv.is_capture() {
                    san.push('x');
                }
                san.push_str(&mv.to().to_string());

                if let Some(promo) = mv.promotion() {
                    san.push('=');
                    san.push(promo.to_char().to_ascii_uppercase());
                }
            }
        }

        let next = self.play_unchecked(mv);
        if next.is_in_check(next.side_to_move) {
            san.push(if next.has_legal_moves() { '+' } else { '#' });
        }
        san
    }

    /// Returns (`needs_file`, `needs_rank`) for a piece move whose
    /// destination another piece of the same kind could also reach.
    fn needs_disambiguation(&self, mv: Move, kind: PieceKind) -> (bool, bool) {
        let rivals: Vec<Move> = self
            .legal_moves()
            .into_iter()
            .filter(|m| {
                m.to() == mv.to()
                    && m.from() != mv.from()
                    && self.board.piece_at(m.from()).is_some_and(|p| p.kind == kind)
            })
            .collect();

        if rivals.is_empty() {
            return (false, false);
        }

        let same_file = rivals.iter().any(|m| m.from().file() == mv.from().file());
        let same_rank = rivals.iter().any(|m| m.from().rank() == mv.from().rank());

        match (same_file, same_rank) {
            (false, _) => (true, false),
            (true, false) => (false, true),
            (true, true) => (true, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn san_of(fen: &str, mv: &str) -> String {
        let pos = Position::from_fen(fen).unwrap();
        let resolved = pos.resolve(mv.parse().unwrap()).unwrap();
        pos.san(resolved)
    }

    #[test]
    fn pawn_and_piece_moves() {
        let start = crate::board::STARTING_FEN;
        assert_eq!(san_of(start, "e2e4"), "e4");
        assert_eq!(san_of(start, "g1f3"), "Nf3");
    }

    #[test]
    fn captures_and_en_passant() {
        assert_eq!(
            san_of("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2", "e5d6"),
            "exd6"
        );
        assert_eq!(
            san_of("4k3/8/8/3p4/8/2N5/8/4K3 w - - 0 1", "c3d5"),
            "Nxd5"
        );
    }

    #[test]
    fn castling_and_promotion() {
        let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
        assert_eq!(san_of(fen, "e1g1"), "O-O");
        assert_eq!(san_of(fen, "e1c1"), "O-O-O");
        assert_eq!(san_of("8/P7/8/8/8/8/8/2K4k w - - 0 1", "a7a8q"), "a8=Q+");
    }

    #[test]
    fn disambiguation() {
        // Knights on b1 and f1 can both reach d2
        assert_eq!(san_of("4k3/8/8/8/8/8/8/1N2KN2 w - - 0 1", "b1d2"), "Nbd2");
        // Rooks on a1 and a5 share a file
        assert_eq!(san_of("4k3/8/8/R7/8/8/8/R3K3 w - - 0 1", "a1a3"), "R1a3");
    }

    #[test]
    fn check_and_mate_suffixes() {
        let fools = "rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq g3 0 2";
        assert_eq!(san_of(fools, "d8h4"), "Qh4#");
        assert_eq!(san_of("4k3/8/8/8/8/8/8/R3K3 w - - 0 1", "a1a8"), "Ra8+");
    }
}
