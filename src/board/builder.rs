//! Fluent builder for constructing positions piece by piece.
//!
//! # Example
//! ```
//! use skewer::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square::new(0, 4), Color::White, Piece::King)
//!     .piece(Square::new(7, 4), Color::Black, Piece::King)
//!     .piece(Square::new(1, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! ```

use super::{Board, CastlingRights, Color, Piece, Square};

/// A fluent builder for assembling `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Option<Color>,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: None,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
        }
    }

    /// Place a piece, replacing whatever was on that square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Set the side to move.
    #[must_use]
    pub fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = Some(color);
        self
    }

    /// Set castling rights.
    #[must_use]
    pub fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();

        for (square, color, piece) in self.pieces {
            board.set_piece(square, color, piece);
        }

        board.white_to_move = self.side_to_move.unwrap_or(Color::White) == Color::White;
        board.castling_rights = self.castling_rights;
        board.en_passant_target = self.en_passant_target;

        board
    }
}
