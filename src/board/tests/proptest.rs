//! Property-based tests over random legal move sequences.

use proptest::prelude::*;
use rand::prelude::*;
use rand::Rng;

use super::assert_consistent;
use crate::board::{Board, Move, UnmakeInfo};

fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=24usize
}

fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

fn random_move(board: &mut Board, rng: &mut StdRng) -> Option<Move> {
    let moves = board.generate_moves();
    if moves.is_empty() {
        None
    } else {
        moves.get(rng.gen_range(0..moves.len()))
    }
}

proptest! {
    /// make_move followed by unmake_move restores the board exactly
    #[test]
    fn prop_make_unmake_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        let initial = board.clone();
        let mut history: Vec<(Move, UnmakeInfo)> = Vec::new();

        for _ in 0..num_moves {
            let Some(mv) = random_move(&mut board, &mut rng) else { break };
            let info = board.make_move(mv);
            history.push((mv, info));
        }

        while let Some((mv, info)) = history.pop() {
            board.unmake_move(mv, info);
        }

        prop_assert_eq!(board, initial);
    }

    /// Structural invariants hold after every transition
    #[test]
    fn prop_invariants_hold_along_random_walks(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let Some(mv) = random_move(&mut board, &mut rng) else { break };
            board.make_move(mv);
            assert_consistent(&board);
        }
    }

    /// No legal move leaves the mover's own king attacked
    #[test]
    fn prop_legal_moves_are_legal(seed in seed_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..10 {
            let current_color = board.side_to_move();
            let moves = board.generate_moves();
            for mv in moves.iter() {
                let info = board.make_move(*mv);
                prop_assert!(
                    !board.is_in_check(current_color),
                    "legal move left king in check: {:?}", mv
                );
                board.unmake_move(*mv, info);
            }

            match random_move(&mut board, &mut rng) {
                Some(mv) => { board.make_move(mv); }
                None => break,
            }
        }
    }

    /// Every legal move appears in the pseudo-legal enumeration
    #[test]
    fn prop_legal_subset_of_pseudo(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let pseudo = board.generate_pseudo_moves();
            for mv in &board.generate_moves() {
                prop_assert!(pseudo.contains(*mv), "legal move {} missing from pseudo set", mv);
            }

            match random_move(&mut board, &mut rng) {
                Some(mv) => { board.make_move(mv); }
                None => break,
            }
        }
    }

    /// FEN round-trip preserves the position
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let Some(mv) = random_move(&mut board, &mut rng) else { break };
            board.make_move(mv);
        }

        let fen = board.to_fen();
        let restored = Board::from_fen(&fen);
        prop_assert_eq!(restored, board);
    }
}
