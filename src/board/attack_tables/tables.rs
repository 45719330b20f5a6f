//! Leaper attack tables (knight, king, pawn).
//!
//! Built on first use from jump offsets applied through `Square::shifted`,
//! then read-only for the life of the process and shared by every board.

use once_cell::sync::Lazy;

use crate::board::Square;

const KNIGHT_JUMPS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_STEPS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// One attack set per square: every in-bounds landing square reachable by
/// the given jump offsets.
fn leaper_table(jumps: [(isize, isize); 8]) -> [u64; 64] {
    let mut table = [0u64; 64];
    for (idx, entry) in table.iter_mut().enumerate() {
        let from = Square::from_index(idx);
        for (ranks, files) in jumps {
            if let Some(to) = from.shifted(ranks, files) {
                *entry |= 1u64 << to.index();
            }
        }
    }
    table
}

pub(crate) static KNIGHT_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| leaper_table(KNIGHT_JUMPS));

pub(crate) static KING_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| leaper_table(KING_STEPS));

/// Pawn capture targets per color: `PAWN_ATTACKS[color][square]`. White
/// pawns strike toward rank 8, black pawns toward rank 1.
pub(crate) static PAWN_ATTACKS: Lazy<[[u64; 64]; 2]> = Lazy::new(|| {
    let mut table = [[0u64; 64]; 2];
    for idx in 0..64 {
        let from = Square::from_index(idx);
        for files in [-1, 1] {
            if let Some(to) = from.shifted(1, files) {
                table[0][idx] |= 1u64 << to.index();
            }
            if let Some(to) = from.shifted(-1, files) {
                table[1][idx] |= 1u64 << to.index();
            }
        }
    }
    table
});
