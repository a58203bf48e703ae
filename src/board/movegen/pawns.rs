use super::super::attack_tables::pawn_attacks;
use super::super::{Move, MoveList, PieceKind, Position, Square};

impl Position {
    pub(super) fn generate_pawn_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move;
        let dir = color.pawn_direction();
        let promotion_rank = color.pawn_promotion_rank();

        if let Some(forward) = from.offset(dir, 0) {
            if self.board.is_empty(forward) {
                if forward.rank() == promotion_rank {
                    push_promotions(from, forward, false, moves);
                } else {
                    moves.push(Move::quiet(from, forward));
                    if from.rank() == color.pawn_start_rank() {
                        if let Some(double) = forward.offset(dir, 0) {
                            if self.board.is_empty(double) {
                                moves.push(Move::double_pawn_push(from, double));
                            }
                        }
                    }
                }
            }
        }

        let enemies = self.board.occupied_by(color.opponent());
        for target in pawn_attacks(color, from).iter() {
            if enemies.contains(target) {
                if target.rank() == promotion_rank {
                    push_promotions(from, target, true, moves);
                } else {
                    moves.push(Move::capture(from, target));
                }
            } else if Some(target) == self.en_passant {
                moves.push(Move::en_passant(from, target));
            }
        }
    }
}

fn push_promotions(from: Square, to: Square, capture: bool, moves: &mut MoveList) {
    for kind in PieceKind::PROMOTIONS {
        moves.push(Move::promotion_move(from, to, kind, capture));
    }
}
