use super::super::attack_tables::{bishop_attacks, queen_attacks, rook_attacks};
use super::super::{Bitboard, Board, Move, MoveList, Piece};

/// Kind of sliding piece being generated for
#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    const fn piece(self) -> Piece {
        match self {
            SliderType::Bishop => Piece::Bishop,
            SliderType::Rook => Piece::Rook,
            SliderType::Queen => Piece::Queen,
        }
    }

    fn attacks(self, from: usize, occupancy: u64) -> u64 {
        match self {
            SliderType::Bishop => bishop_attacks(from, occupancy),
            SliderType::Rook => rook_attacks(from, occupancy),
            SliderType::Queen => queen_attacks(from, occupancy),
        }
    }
}

impl Board {
    pub(crate) fn generate_slider_moves(&self, slider: SliderType, moves: &mut MoveList) {
        let color = self.current_color();
        let own = self.occupied[color.index()];
        let enemy = self.occupied[color.opponent().index()];

        for from in self.pieces[color.index()][slider.piece().index()].iter() {
            let targets = Bitboard(slider.attacks(from.index(), self.all_occupied.0)).and(own.not());
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

#[cfg(test)]
mod tests {
    use super::*;

    fn slider_moves(board: &Board, slider: SliderType) -> Vec<String> {
        let mut moves = MoveList::new();
        board.generate_slider_moves(slider, &mut moves);
        moves.iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn test_rook_stops_at_blockers() {
        // Rook a1, own pawn a3, black knight d1
        let board = Board::from_fen("4k3/8/8/8/8/P7/8/R2nK3 w - - 0 1");
        let moves = slider_moves(&board, SliderType::Rook);
        assert!(moves.contains(&"a1a2".to_string()));
        assert!(!moves.contains(&"a1a3".to_string())); // own pawn
        assert!(moves.contains(&"a1d1".to_string())); // capture
        assert!(!moves.contains(&"a1e1".to_string())); // beyond the capture
    }

    #[test]
    fn test_bishop_moves_on_open_diagonal() {
        let board = Board::from_fen("4k3/8/8/8/3B4/8/8/4K3 w - - 0 1");
        let moves = slider_moves(&board, SliderType::Bishop);
        assert_eq!(moves.len(), 13);
        assert!(moves.contains(&"d4a7".to_string()));
        assert!(moves.contains(&"d4h8".to_string()));
        assert!(moves.contains(&"d4a1".to_string()));
    }

    #[test]
    fn test_queen_covers_both_axes() {
        let board = Board::from_fen("4k3/8/8/8/3Q4/8/8/4K3 w - - 0 1");
        let moves = slider_moves(&board, SliderType::Queen);
        assert!(moves.contains(&"d4d8".to_string()));
        assert!(moves.contains(&"d4a4".to_string()));
        assert!(moves.contains(&"d4h8".to_string()));
        assert!(moves.contains(&"d4a1".to_string()));
    }

    #[test]
    fn test_sliders_none_at_start() {
        // Sliders are boxed in at the starting position
        let board = Board::new();
        for slider in [SliderType::Bishop, SliderType::Rook, SliderType::Queen] {
            assert!(slider_moves(&board, slider).is_empty());
        }
    }
}
