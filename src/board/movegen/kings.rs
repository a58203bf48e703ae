use super::super::attack_tables::king_attacks;
use super::super::{king_home, CastlingSide, Move, MoveList, Position, Square};

impl Position {
    pub(super) fn generate_king_moves(&self, from: Square, moves: &mut MoveList) {
        let targets = king_attacks(from) & !self.board.occupied_by(self.side_to_move);
        self.push_targets(from, targets, moves);

        if from == king_home(self.side_to_move) {
            for side in CastlingSide::BOTH {
                if self.can_castle(side) {
                    let to = Square::from_index_unchecked(
                        from.rank() * 8 + side.king_to_file(),
                    );
                    moves.push(Move::castle(from, to, side));
                }
            }
        }
    }

    /// Castling needs the right, both pieces at home, an empty path between
    /// them and a king that neither starts in, crosses nor lands on an
    /// attacked square.
    fn can_castle(&self, side: CastlingSide) -> bool {
        let color = self.side_to_move;
        if !self.castling.has(color, side) || !self.castling_pieces_home(color, side) {
            return false;
        }

        let rank = color.back_rank();
        let king_file = 4u8;
        let rook_file = side.rook_from_file();
        let (low, high) = if rook_file < king_file {
            (rook_file + 1, king_file)
        } else {
            (king_file + 1, rook_file)
        };
        let path_clear = (low..high).all(|file| {
            Square::new(rank, file).is_some_and(|sq| self.board.is_empty(sq))
        });
        if !path_clear {
            return false;
        }

        let king_to = side.king_to_file();
        let (first, last) = if king_to < king_file {
            (king_to, king_file)
        } else {
            (king_file, king_to)
        };
        let enemy = color.opponent();
        (first..=last).all(|file| {
            Square::new(rank, file).is_some_and(|sq| !self.board.is_square_attacked(sq, enemy))
        })
    }
}
