use super::super::attack_tables::KNIGHT_ATTACKS;
use super::super::{Bitboard, Board, Move, MoveList, Piece};

impl Board {
    pub(crate) fn generate_knight_moves(&self, moves: &mut MoveList) {
        let color = self.current_color();
        let own = self.occupied[color.index()];
        let enemy = self.occupied[color.opponent().index()];

        for from in self.pieces[color.index()][Piece::Knight.index()].iter() {
            let targets = Bitboard(KNIGHT_ATTACKS[from.index()]).and(own.not());
            for to in targets.iter() {
                if enemy.contains(to) {
                    moves.push(Move::capture(from, to));
                } else {
                    moves.push(Move::quiet(from, to));
                }
            }
        }
    }
}
