//! Move execution and reversal.
//!
//! `make_move` transitions the board by one ply and returns an `UnmakeInfo`;
//! `unmake_move` consumes it to restore the exact prior state. The pair is
//! what the legality filter and any future search tree lean on: one ply of
//! exploration costs no allocation and is fully reversible.

use super::{Board, Color, Move, Piece, Square, UnmakeInfo};

impl Board {
    pub(crate) fn current_color(&self) -> Color {
        self.side_to_move()
    }

    /// Remove the piece captured by `m`, if any, and return it.
    ///
    /// For en passant the captured pawn does not sit on the destination
    /// square but on the rank the capturer came from.
    fn capture_piece_for_move(&mut self, m: Move, is_white: bool) -> Option<(Color, Piece)> {
        if m.is_en_passant() {
            let capture_rank = if is_white {
                m.to().rank() - 1
            } else {
                m.to().rank() + 1
            };
            let capture_sq = Square::new(capture_rank, m.to().file());
            let captured = self.piece_at(capture_sq)?;
            self.remove_piece(capture_sq, captured.0, captured.1);
            return Some(captured);
        }

        if m.is_castling() {
            return None;
        }

        let captured = self.piece_at(m.to())?;
        self.remove_piece(m.to(), captured.0, captured.1);
        Some(captured)
    }

    /// Place the king on its destination and jump the rook over it
    /// (h-file rook to f, or a-file rook to d).
    fn execute_castling(&mut self, m: Move, color: Color) {
        self.set_piece(m.to(), color, Piece::King);

        let (rook_from_file, rook_to_file) = if m.to().file() == 6 { (7, 5) } else { (0, 3) };
        let rook_from = Square::new(m.to().rank(), rook_from_file);
        let rook_to = Square::new(m.to().rank(), rook_to_file);

        let (rook_color, rook) = self.piece_at(rook_from).expect("castling without rook");
        self.remove_piece(rook_from, rook_color, rook);
        self.set_piece(rook_to, rook_color, rook);
    }

    /// Drop castling rights invalidated by this move: king moves lose both,
    /// rook moves from home lose that side, and capturing a rook at home
    /// removes the opponent's right.
    fn update_castling_rights(
        &mut self,
        m: Move,
        moving_piece: Piece,
        color: Color,
        captured: Option<(Color, Piece)>,
    ) {
        if moving_piece == Piece::King {
            self.castling_rights.remove_both(color);
        } else if moving_piece == Piece::Rook {
            let home_rank = if color == Color::White { 0 } else { 7 };
            if m.from() == Square::new(home_rank, 0) {
                self.castling_rights.remove(color, false);
            } else if m.from() == Square::new(home_rank, 7) {
                self.castling_rights.remove(color, true);
            }
        }

        if let Some((captured_color, Piece::Rook)) = captured {
            let home_rank = if captured_color == Color::White { 0 } else { 7 };
            if m.to() == Square::new(home_rank, 0) {
                self.castling_rights.remove(captured_color, false);
            } else if m.to() == Square::new(home_rank, 7) {
                self.castling_rights.remove(captured_color, true);
            }
        }
    }

    /// A double pawn push exposes the skipped square as the en passant
    /// target; every other move clears it.
    fn update_en_passant_target(&mut self, m: Move) {
        self.en_passant_target = if m.is_double_pawn_push() {
            let ep_rank = usize::midpoint(m.from().rank(), m.to().rank());
            Some(Square::new(ep_rank, m.from().file()))
        } else {
            None
        };
    }

    fn update_halfmove_clock(&mut self, moving_piece: Piece, is_capture: bool) {
        if moving_piece == Piece::Pawn || is_capture {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
    }

    /// Apply `m` to the board and return the state needed to reverse it.
    ///
    /// # Panics
    /// Panics if the source square is empty; only moves derived from the
    /// current position may be applied.
    pub fn make_move(&mut self, m: Move) -> UnmakeInfo {
        let previous_en_passant_target = self.en_passant_target;
        let previous_castling_rights = self.castling_rights;
        let previous_halfmove_clock = self.halfmove_clock;
        let previous_fullmove_number = self.fullmove_number;

        let color = self.current_color();
        let is_white = color == Color::White;

        let captured_piece_info = self.capture_piece_for_move(m, is_white);

        let (moving_color, moving_piece) =
            self.piece_at(m.from()).expect("make_move source square empty");
        self.remove_piece(m.from(), moving_color, moving_piece);

        if m.is_castling() {
            self.execute_castling(m, color);
        } else {
            let placed = m.promotion_piece().unwrap_or(moving_piece);
            self.set_piece(m.to(), color, placed);
        }

        self.update_en_passant_target(m);
        self.update_halfmove_clock(moving_piece, m.is_capture());
        self.update_castling_rights(m, moving_piece, color, captured_piece_info);

        if !is_white {
            self.fullmove_number += 1;
        }
        self.white_to_move = !self.white_to_move;

        UnmakeInfo {
            captured_piece_info,
            previous_en_passant_target,
            previous_castling_rights,
            previous_halfmove_clock,
            previous_fullmove_number,
        }
    }

    fn restore_castling_move(&mut self, m: Move, color: Color) {
        self.remove_piece(m.to(), color, Piece::King);
        self.set_piece(m.from(), color, Piece::King);

        let (rook_home_file, rook_moved_file) = if m.to().file() == 6 { (7, 5) } else { (0, 3) };
        let rook_sq = Square::new(m.to().rank(), rook_moved_file);
        let (rook_color, rook) = self.piece_at(rook_sq).expect("unmake castling: rook missing");
        self.remove_piece(rook_sq, rook_color, rook);
        self.set_piece(Square::new(m.to().rank(), rook_home_file), rook_color, rook);
    }

    fn restore_standard_move(&mut self, m: Move, color: Color, info: &UnmakeInfo) {
        let (moved_color, moved_piece) = self
            .piece_at(m.to())
            .expect("unmake: destination square empty");
        self.remove_piece(m.to(), moved_color, moved_piece);

        // a promoted piece goes back as the pawn it was
        if m.is_promotion() {
            self.set_piece(m.from(), color, Piece::Pawn);
        } else {
            self.set_piece(m.from(), moved_color, moved_piece);
        }

        if m.is_en_passant() {
            let capture_rank = if color == Color::White {
                m.to().rank() - 1
            } else {
                m.to().rank() + 1
            };
            if let Some((cap_color, cap_piece)) = info.captured_piece_info {
                self.set_piece(Square::new(capture_rank, m.to().file()), cap_color, cap_piece);
            }
        } else if let Some((cap_color, cap_piece)) = info.captured_piece_info {
            self.set_piece(m.to(), cap_color, cap_piece);
        }
    }

    /// Reverse a move previously applied with `make_move`.
    ///
    /// The `info` token must be the one returned for exactly this move in
    /// exactly this position; afterwards the board compares equal to the
    /// pre-apply state.
    pub fn unmake_move(&mut self, m: Move, info: UnmakeInfo) {
        self.white_to_move = !self.white_to_move;
        self.en_passant_target = info.previous_en_passant_target;
        self.castling_rights = info.previous_castling_rights;
        self.halfmove_clock = info.previous_halfmove_clock;
        self.fullmove_number = info.previous_fullmove_number;

        let color = self.current_color();

        if m.is_castling() {
            self.restore_castling_move(m, color);
        } else {
            self.restore_standard_move(m, color, &info);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_move_and_back() {
        let mut board = Board::new();
        let before = board.clone();

        let mv = Move::double_pawn_push(Square::new(1, 4), Square::new(3, 4)); // e2e4
        let info = board.make_move(mv);

        assert!(board.is_empty_square(Square::new(1, 4)));
        assert_eq!(
            board.piece_at(Square::new(3, 4)),
            Some((Color::White, Piece::Pawn))
        );
        assert_eq!(board.en_passant_target(), Some(Square::new(2, 4))); // e3
        assert!(!board.white_to_move());

        board.unmake_move(mv, info);
        assert_eq!(board, before);
    }

    #[test]
    fn test_capture_restores_victim() {
        let mut board = Board::new();
        let e2e4 = Move::double_pawn_push(Square::new(1, 4), Square::new(3, 4));
        let d7d5 = Move::double_pawn_push(Square::new(6, 3), Square::new(4, 3));
        board.make_move(e2e4);
        board.make_move(d7d5);

        let before = board.clone();
        let exd5 = Move::capture(Square::new(3, 4), Square::new(4, 3));
        let info = board.make_move(exd5);
        assert_eq!(
            board.piece_at(Square::new(4, 3)),
            Some((Color::White, Piece::Pawn))
        );
        assert_eq!(board.occupied[1].popcount(), 15);

        board.unmake_move(exd5, info);
        assert_eq!(board, before);
    }

    #[test]
    fn test_castling_moves_rook() {
        // Kings and rooks only, white to castle kingside
        let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let before = board.clone();

        let castle = Move::castle_kingside(Square::new(0, 4), Square::new(0, 6));
        let info = board.make_move(castle);
        assert_eq!(
            board.piece_at(Square::new(0, 6)),
            Some((Color::White, Piece::King))
        );
        assert_eq!(
            board.piece_at(Square::new(0, 5)),
            Some((Color::White, Piece::Rook))
        );
        assert!(board.is_empty_square(Square::new(0, 7)));
        assert!(!board.castling_rights().has(Color::White, true));
        assert!(!board.castling_rights().has(Color::White, false));
        assert_eq!(board.king_square(Color::White), Square::new(0, 6));

        board.unmake_move(castle, info);
        assert_eq!(board, before);
    }

    #[test]
    fn test_rook_move_drops_one_right() {
        let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let mv = Move::quiet(Square::new(0, 0), Square::new(0, 1)); // Ra1b1
        board.make_move(mv);
        assert!(!board.castling_rights().has(Color::White, false));
        assert!(board.castling_rights().has(Color::White, true));
        assert!(board.castling_rights().has(Color::Black, true));
    }

    #[test]
    fn test_rook_capture_drops_opponent_right() {
        let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let mv = Move::capture(Square::new(0, 0), Square::new(7, 0)); // Rxa8
        board.make_move(mv);
        assert!(!board.castling_rights().has(Color::Black, false));
        assert!(board.castling_rights().has(Color::Black, true));
    }

    #[test]
    fn test_en_passant_removes_displaced_pawn() {
        let mut board =
            Board::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3");
        let before = board.clone();

        let exf6 = Move::en_passant(Square::new(4, 4), Square::new(5, 5));
        let info = board.make_move(exf6);
        assert_eq!(
            board.piece_at(Square::new(5, 5)),
            Some((Color::White, Piece::Pawn))
        );
        // the captured pawn sat on f5, not f6
        assert!(board.is_empty_square(Square::new(4, 5)));

        board.unmake_move(exf6, info);
        assert_eq!(board, before);
    }

    #[test]
    fn test_promotion_replaces_pawn() {
        let mut board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
        let before = board.clone();

        let mv = Move::promotion(Square::new(6, 0), Square::new(7, 0), Piece::Queen);
        let info = board.make_move(mv);
        assert_eq!(
            board.piece_at(Square::new(7, 0)),
            Some((Color::White, Piece::Queen))
        );
        assert!(board.pieces[0][Piece::Pawn.index()].is_empty());

        board.unmake_move(mv, info);
        assert_eq!(board, before);
        assert_eq!(
            board.piece_at(Square::new(6, 0)),
            Some((Color::White, Piece::Pawn))
        );
    }

    #[test]
    fn test_fullmove_number_increments_after_black() {
        let mut board = Board::new();
        board.make_move(Move::double_pawn_push(Square::new(1, 4), Square::new(3, 4)));
        assert_eq!(board.fullmove_number(), 1);
        board.make_move(Move::double_pawn_push(Square::new(6, 4), Square::new(4, 4)));
        assert_eq!(board.fullmove_number(), 2);
    }
}
