use super::error::{IllegalMoveError, IllegalMoveReason};
use super::{rook_home, Color, Move, Piece, PieceKind, Position, Square};

impl Position {
    /// Play `mv` and return the resulting position.
    ///
    /// `mv` is checked against the legal moves of the piece on its source
    /// square; `self` is never modified.
    pub fn apply(&self, mv: Move) -> Result<Position, IllegalMoveError> {
        let resolved = self.resolve(mv)?;
        Ok(self.play_unchecked(resolved))
    }

    /// Find the generated legal move that `request` asks for.
    ///
    /// The result carries the capture, castle, en passant and double push
    /// flags that a bare request lacks.
    pub fn resolve(&self, request: Move) -> Result<Move, IllegalMoveError> {
        let fail = |reason| -> Result<Move, IllegalMoveError> {
            Err(IllegalMoveError::new(request, reason))
        };

        let Some(piece) = self.board.piece_at(request.from()) else {
            return fail(IllegalMoveReason::EmptySquare);
        };
        if piece.color != self.side_to_move {
            return fail(IllegalMoveReason::NotYourPiece);
        }
        if request
            .promotion()
            .is_some_and(|kind| !kind.is_promotion_target())
        {
            return fail(IllegalMoveReason::InvalidPromotion);
        }

        let legal = self.moves_from(request.from());
        if let Some(mv) = legal.find(request) {
            return Ok(mv);
        }

        let mut same_squares = legal.iter().filter(|m| m.to() == request.to());
        match (request.promotion(), same_squares.next()) {
            (None, Some(m)) if m.is_promotion() => fail(IllegalMoveReason::PromotionRequired),
            (Some(_), Some(m)) if !m.is_promotion() => fail(IllegalMoveReason::InvalidPromotion),
            (Some(_), None) if piece.kind != PieceKind::Pawn => {
                fail(IllegalMoveReason::InvalidPromotion)
            }
            _ => fail(IllegalMoveReason::NotLegal),
        }
    }

    /// Play a move produced by the generator for this position.
    ///
    /// No legality check is made. A move whose source square is empty
    /// leaves the position unchanged.
    #[must_use]
    pub fn play_unchecked(&self, mv: Move) -> Position {
        let mut next = *self;
        let color = self.side_to_move;
        let (from, to) = (mv.from(), mv.to());

        let Some(piece) = next.board.take_piece(from) else {
            return next;
        };
        let mut captured = next.board.take_piece(to);

        if mv.is_en_passant() {
            if let Some(victim) = to.offset(-color.pawn_direction(), 0) {
                captured = next.board.take_piece(victim);
            }
        }

        if let Some(side) = mv.castling_side() {
            let rook_from = rook_home(color, side);
            let rook_to = Square::from_index_unchecked(rook_from.rank() * 8 + side.rook_to_file());
            if let Some(rook) = next.board.take_piece(rook_from) {
                next.board.set_piece(rook_to, rook);
            }
        }

        let placed = mv
            .promotion()
            .map_or(piece, |kind| Piece::new(color, kind));
        next.board.set_piece(to, placed);

        next.castling.revoke_touching(from);
        next.castling.revoke_touching(to);

        next.en_passant = if mv.is_double_pawn_push() {
            from.offset(color.pawn_direction(), 0)
        } else {
            None
        };

        next.halfmove_clock = if piece.kind == PieceKind::Pawn || captured.is_some() {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };
        if color == Color::Black {
            next.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        next.side_to_move = color.opponent();
        next
    }
}
