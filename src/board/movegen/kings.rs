use super::super::attack_tables::{
    bishop_attacks, rook_attacks, KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS,
};
use super::super::{Bitboard, Board, Color, Move, MoveList, Piece, Square};

impl Board {
    pub(crate) fn generate_king_moves(&self, moves: &mut MoveList) {
        let color = self.current_color();
        let own = self.occupied[color.index()];
        let enemy = self.occupied[color.opponent().index()];
        // tolerate kingless positions loaded from FEN
        let Some(from) = self.pieces[color.index()][Piece::King.index()].lsb() else {
            return;
        };

        let targets = Bitboard(KING_ATTACKS[from.index()]).and(own.not());
        for to in targets.iter() {
            if enemy.contains(to) {
                moves.push(Move::capture(from, to));
            } else {
                moves.push(Move::quiet(from, to));
            }
        }

        // Castling: right intact, path empty, rook home. Transit safety is
        // checked by the legality filter.
        let back_rank = if color == Color::White { 0 } else { 7 };
        if from == Square::new(back_rank, 4) {
            if self.castling_rights.has(color, true)
                && self.is_empty_square(Square::new(back_rank, 5))
                && self.is_empty_square(Square::new(back_rank, 6))
                && self.piece_at(Square::new(back_rank, 7)) == Some((color, Piece::Rook))
            {
                moves.push(Move::castle_kingside(from, Square::new(back_rank, 6)));
            }
            if self.castling_rights.has(color, false)
                && self.is_empty_square(Square::new(back_rank, 1))
                && self.is_empty_square(Square::new(back_rank, 2))
                && self.is_empty_square(Square::new(back_rank, 3))
                && self.piece_at(Square::new(back_rank, 0)) == Some((color, Piece::Rook))
            {
                moves.push(Move::castle_queenside(from, Square::new(back_rank, 2)));
            }
        }
    }

    /// Does any piece of `attacker_color` attack `square` on the current
    /// occupancy?
    ///
    /// Works by reverse symmetry: a knight attacks `square` exactly when a
    /// knight placed on `square` would reach it, so the knight table at
    /// `square` is intersected with the attacker's knights, and likewise for
    /// the other piece kinds. Pawns use the opposite color's attack table.
    pub(crate) fn is_square_attacked(&self, square: Square, attacker_color: Color) -> bool {
        let target = square.index();
        let c_idx = attacker_color.index();

        let pawn_sources = PAWN_ATTACKS[attacker_color.opponent().index()][target];
        if self.pieces[c_idx][Piece::Pawn.index()].0 & pawn_sources != 0 {
            return true;
        }

        if self.pieces[c_idx][Piece::Knight.index()].0 & KNIGHT_ATTACKS[target] != 0 {
            return true;
        }

        if self.pieces[c_idx][Piece::King.index()].0 & KING_ATTACKS[target] != 0 {
            return true;
        }

        let rook_like =
            self.pieces[c_idx][Piece::Rook.index()].0 | self.pieces[c_idx][Piece::Queen.index()].0;
        if rook_attacks(target, self.all_occupied.0) & rook_like != 0 {
            return true;
        }

        let bishop_like = self.pieces[c_idx][Piece::Bishop.index()].0
            | self.pieces[c_idx][Piece::Queen.index()].0;
        if bishop_attacks(target, self.all_occupied.0) & bishop_like != 0 {
            return true;
        }

        false
    }

    /// Is the given color's king attacked?
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        if self.pieces[color.index()][Piece::King.index()].is_empty() {
            return false;
        }
        self.is_square_attacked(self.king_square(color), color.opponent())
    }
}
