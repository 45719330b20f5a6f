//! Board state: piece bitboards, aggregates, and side-to-move bookkeeping.

use std::fmt;

use super::{bit_for_square, Bitboard, CastlingRights, Color, Piece, Square};

/// Everything `make_move` saves so that `unmake_move` can restore the board
/// exactly. Together with the applied `Move` this is the full undo token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnmakeInfo {
    pub(crate) captured_piece_info: Option<(Color, Piece)>,
    pub(crate) previous_en_passant_target: Option<Square>,
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_fullmove_number: u32,
}

/// Bitboard chess position.
///
/// Holds one bitboard per (color, piece type) pair, aggregate occupancy per
/// color and overall, cached king squares, and the non-piece state a position
/// carries: side to move, en passant target, castling rights, and the two
/// move clocks. The clocks are maintained and serialized but never consulted
/// for draw adjudication.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) pieces: [[Bitboard; 6]; 2],
    pub(crate) occupied: [Bitboard; 2],
    pub(crate) all_occupied: Bitboard,
    pub(crate) king_square: [Square; 2],
    pub(crate) white_to_move: bool,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Board {
    /// Create a board in the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.iter().enumerate() {
            board.set_piece(Square::new(0, file), Color::White, *piece);
            board.set_piece(Square::new(7, file), Color::Black, *piece);
            board.set_piece(Square::new(1, file), Color::White, Piece::Pawn);
            board.set_piece(Square::new(6, file), Color::Black, Piece::Pawn);
        }

        board.castling_rights = CastlingRights::all();
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            occupied: [Bitboard::EMPTY; 2],
            all_occupied: Bitboard::EMPTY,
            // placeholders until kings are placed
            king_square: [Square::new(0, 4), Square::new(7, 4)],
            white_to_move: true,
            en_passant_target: None,
            castling_rights: CastlingRights::none(),
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    /// The color whose turn it is
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// The square of the given color's king
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_square[color.index()]
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let bit = bit_for_square(sq).0;
        let c_idx = color.index();
        self.pieces[c_idx][piece.index()].0 |= bit;
        self.occupied[c_idx].0 |= bit;
        self.all_occupied.0 |= bit;
        if piece == Piece::King {
            self.king_square[c_idx] = sq;
        }
    }

    pub(crate) fn remove_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let bit = bit_for_square(sq).0;
        let c_idx = color.index();
        self.pieces[c_idx][piece.index()].0 &= !bit;
        self.occupied[c_idx].0 &= !bit;
        self.all_occupied.0 &= !bit;
    }

    /// Get the piece and its color on a square, if any.
    ///
    /// This is the read-only 8x8 projection of the bitboard state; rendering
    /// and FEN serialization go through it.
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        let bit = bit_for_square(sq).0;
        if self.all_occupied.0 & bit == 0 {
            return None;
        }

        let color = if self.occupied[0].0 & bit != 0 {
            Color::White
        } else {
            Color::Black
        };
        let c_idx = color.index();
        for piece in Piece::ALL {
            if self.pieces[c_idx][piece.index()].0 & bit != 0 {
                return Some((color, piece));
            }
        }

        None
    }

    /// Get just the piece type on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    pub(crate) fn is_empty_square(&self, sq: Square) -> bool {
        self.all_occupied.0 & bit_for_square(sq).0 == 0
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    /// Render the position as an 8x8 grid with FEN piece letters,
    /// rank 8 at the top.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +-----------------+")?;
        for rank in (0..8).rev() {
            write!(f, "{} |", rank + 1)?;
            for file in 0..8 {
                match self.piece_at(Square::new(rank, file)) {
                    Some((color, piece)) => write!(f, " {}", super::fen::fen_char(color, piece))?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f, " |")?;
        }
        writeln!(f, "  +-----------------+")?;
        write!(f, "    a b c d e f g h")
    }
}
