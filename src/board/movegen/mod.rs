//! Move generation: pseudo-legal enumeration and the legality filter.

mod kings;
mod knights;
mod pawns;
mod sliders;

use self::sliders::SliderType;
use super::{Board, MoveList, Square};

impl Board {
    /// Enumerate every move allowed by piece geometry and blockers for the
    /// side to move, ignoring king safety. Order is not significant.
    pub(crate) fn generate_pseudo_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        self.generate_pawn_moves(&mut moves);
        self.generate_knight_moves(&mut moves);
        self.generate_slider_moves(SliderType::Bishop, &mut moves);
        self.generate_slider_moves(SliderType::Rook, &mut moves);
        self.generate_slider_moves(SliderType::Queen, &mut moves);
        self.generate_king_moves(&mut moves);
        moves
    }

    /// Generate all legal moves for the side to move.
    ///
    /// Each pseudo-legal candidate is applied, the mover's king is tested
    /// for attack, and the move is reverted; the board is left exactly as it
    /// was. Castling candidates are additionally rejected when the king
    /// starts in, passes through, or lands on an attacked square.
    #[must_use]
    pub fn generate_moves(&mut self) -> MoveList {
        let current_color = self.current_color();
        let opponent_color = current_color.opponent();
        let pseudo_moves = self.generate_pseudo_moves();
        let mut legal_moves = MoveList::new();

        for m in &pseudo_moves {
            if m.is_castling() {
                let king_start = m.from();
                let king_mid = Square::new(
                    m.from().rank(),
                    usize::midpoint(m.from().file(), m.to().file()),
                );
                let king_end = m.to();

                if self.is_square_attacked(king_start, opponent_color)
                    || self.is_square_attacked(king_mid, opponent_color)
                    || self.is_square_attacked(king_end, opponent_color)
                {
                    continue;
                }
            }

            let info = self.make_move(*m);
            if !self.is_in_check(current_color) {
                legal_moves.push(*m);
            }
            self.unmake_move(*m, info);
        }
        legal_moves
    }

    /// Count leaf nodes of the legal move tree to the given depth.
    #[must_use]
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in &moves {
            let info = self.make_move(*m);
            nodes += self.perft(depth - 1);
            self.unmake_move(*m, info);
        }

        nodes
    }
}
