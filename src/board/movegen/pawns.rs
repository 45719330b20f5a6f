//! Pawn move generation by bulk bitboard shifts.
//!
//! All pawns of the moving side advance in one shift per move kind: the
//! single-push set is the pawn set shifted one rank and masked by empty
//! squares, the double-push set is the single-push set shifted again from the
//! third rank, and the capture sets are the two diagonal shifts masked by
//! capturable squares. From-squares are recovered by subtracting the shift
//! offset from each destination.

use super::super::{Bitboard, Board, Color, Move, MoveList, Piece, Square};

impl Board {
    pub(crate) fn generate_pawn_moves(&self, moves: &mut MoveList) {
        let color = self.current_color();
        let pawns = self.pieces[color.index()][Piece::Pawn.index()];
        if pawns.is_empty() {
            return;
        }

        let empty = self.all_occupied.not();
        let enemy = self.occupied[color.opponent().index()];
        let ep_square = self
            .en_passant_target
            .map_or(Bitboard::EMPTY, Bitboard::from_square);
        let capturable = enemy.or(ep_square);

        match color {
            Color::White => {
                let single = pawns.shift_north().and(empty);
                let double = single.and(Bitboard::RANK_3).shift_north().and(empty);
                self.emit_pushes(moves, single, 8, Bitboard::RANK_8);
                emit_double_pushes(moves, double, 16);
                self.emit_captures(moves, pawns.shift_north_east().and(capturable), 9, Bitboard::RANK_8);
                self.emit_captures(moves, pawns.shift_north_west().and(capturable), 7, Bitboard::RANK_8);
            }
            Color::Black => {
                let single = pawns.shift_south().and(empty);
                let double = single.and(Bitboard::RANK_6).shift_south().and(empty);
                self.emit_pushes(moves, single, -8, Bitboard::RANK_1);
                emit_double_pushes(moves, double, -16);
                self.emit_captures(moves, pawns.shift_south_east().and(capturable), -7, Bitboard::RANK_1);
                self.emit_captures(moves, pawns.shift_south_west().and(capturable), -9, Bitboard::RANK_1);
            }
        }
    }

    /// Emit quiet pushes, fanning destinations on the promotion rank out
    /// into one move per promotion piece.
    fn emit_pushes(&self, moves: &mut MoveList, targets: Bitboard, offset: isize, promo_rank: Bitboard) {
        for to in targets.iter() {
            let from = from_square(to, offset);
            if promo_rank.contains(to) {
                for promo in Piece::PROMOTIONS {
                    moves.push(Move::promotion(from, to, promo));
                }
            } else {
                moves.push(Move::quiet(from, to));
            }
        }
    }

    /// Emit diagonal captures, tagging the en passant destination and
    /// fanning out promotion captures.
    fn emit_captures(&self, moves: &mut MoveList, targets: Bitboard, offset: isize, promo_rank: Bitboard) {
        for to in targets.iter() {
            let from = from_square(to, offset);
            if self.en_passant_target == Some(to) {
                moves.push(Move::en_passant(from, to));
            } else if promo_rank.contains(to) {
                for promo in Piece::PROMOTIONS {
                    moves.push(Move::promotion_capture(from, to, promo));
                }
            } else {
                moves.push(Move::capture(from, to));
            }
        }
    }
}

fn emit_double_pushes(moves: &mut MoveList, targets: Bitboard, offset: isize) {
    for to in targets.iter() {
        moves.push(Move::double_pawn_push(from_square(to, offset), to));
    }
}

#[inline]
fn from_square(to: Square, offset: isize) -> Square {
    Square::from_index((to.index() as isize - offset) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pawn_moves(board: &Board) -> Vec<String> {
        let mut moves = MoveList::new();
        board.generate_pawn_moves(&mut moves);
        moves.iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn test_starting_pawns_have_sixteen_moves() {
        let board = Board::new();
        assert_eq!(pawn_moves(&board).len(), 16); // 8 single + 8 double
    }

    #[test]
    fn test_blocked_pawn_cannot_push() {
        // White pawn e4 faces a black pawn e5 head on
        let board = Board::from_fen("4k3/8/8/4p3/4P3/8/8/4K3 w - - 0 1");
        assert!(pawn_moves(&board).is_empty());
    }

    #[test]
    fn test_double_push_needs_both_squares_free() {
        // Blocker on e3 stops both e2e3 and e2e4
        let board = Board::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");
        assert!(pawn_moves(&board).is_empty());
    }

    #[test]
    fn test_captures_go_both_ways() {
        // White pawn e4 with black pawns on d5 and f5
        let board = Board::from_fen("4k3/8/8/3p1p2/4P3/8/8/4K3 w - - 0 1");
        let moves = pawn_moves(&board);
        assert!(moves.contains(&"e4d5".to_string()));
        assert!(moves.contains(&"e4f5".to_string()));
        assert!(moves.contains(&"e4e5".to_string()));
        assert_eq!(moves.len(), 3);
    }

    #[test]
    fn test_no_wraparound_capture_on_edge_files() {
        // White pawn a4, black piece on h5 must not look capturable
        let board = Board::from_fen("4k3/8/8/7r/P7/8/8/4K3 w - - 0 1");
        let moves = pawn_moves(&board);
        assert_eq!(moves, vec!["a4a5".to_string()]);
    }

    #[test]
    fn test_en_passant_emitted_from_board_state() {
        let board =
            Board::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3");
        let moves = pawn_moves(&board);
        assert!(moves.contains(&"e5f6".to_string()));

        // same position without the en passant target: capture disappears
        let board =
            Board::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq - 0 3");
        assert!(!pawn_moves(&board).contains(&"e5f6".to_string()));
    }

    #[test]
    fn test_promotion_fans_out_all_four_pieces() {
        let board = Board::from_fen("3n4/2P5/8/8/8/8/8/k3K3 w - - 0 1");
        let moves = pawn_moves(&board);
        // push promotions to c8 and capture promotions on d8
        for suffix in ["q", "r", "b", "n"] {
            assert!(moves.contains(&format!("c7c8{suffix}")));
            assert!(moves.contains(&format!("c7d8{suffix}")));
        }
        assert_eq!(moves.len(), 8);
    }

    #[test]
    fn test_black_pawns_move_south() {
        let board = Board::from_fen("4k3/4p3/8/8/8/8/8/4K3 b - - 0 1");
        let moves = pawn_moves(&board);
        assert!(moves.contains(&"e7e6".to_string()));
        assert!(moves.contains(&"e7e5".to_string()));
        assert_eq!(moves.len(), 2);
    }
}
