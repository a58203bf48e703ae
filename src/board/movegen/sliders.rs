use super::super::attack_tables::{bishop_attacks, queen_attacks, rook_attacks};
use super::super::{MoveList, PieceKind, Position, Square};

impl Position {
    /// Ray moves for bishops, rooks and queens
    pub(super) fn generate_slider_moves(&self, from: Square, kind: PieceKind, moves: &mut MoveList) {
        let occupancy = self.board.occupied();
        let reach = match kind {
            PieceKind::Bishop => bishop_attacks(from, occupancy),
            PieceKind::Rook => rook_attacks(from, occupancy),
            PieceKind::Queen => queen_attacks(from, occupancy),
            _ => return,
        };
        let targets = reach & !self.board.occupied_by(self.side_to_move);
        self.push_targets(from, targets, moves);
    }
}
