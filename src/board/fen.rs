//! FEN parsing and serialization, plus UCI move lookup.

use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{Board, Color, Move, Piece, Square};

/// FEN letter for a piece: uppercase for White, lowercase for Black.
pub(crate) fn fen_char(color: Color, piece: Piece) -> char {
    match color {
        Color::White => piece.letter().to_ascii_uppercase(),
        Color::Black => piece.letter(),
    }
}

fn piece_from_fen(c: char) -> Option<(Color, Piece)> {
    let color = if c.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    Piece::from_letter(c.to_ascii_lowercase()).map(|piece| (color, piece))
}

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// The first four fields (placement, side to move, castling, en passant)
    /// are required; the halfmove clock and fullmove number are optional.
    /// On error no board is produced, so the caller's state is untouched.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        // Piece placement, rank 8 down to rank 1
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx;
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                } else {
                    let (color, piece) =
                        piece_from_fen(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if file >= 8 {
                        return Err(FenError::WrongFileCount {
                            rank,
                            files: file + 1,
                        });
                    }
                    board.set_piece(Square::new(rank, file), color, piece);
                    file += 1;
                }
            }
            if file != 8 {
                return Err(FenError::WrongFileCount { rank, files: file });
            }
        }

        // Side to move
        match parts[1] {
            "w" => board.white_to_move = true,
            "b" => board.white_to_move = false,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        }

        // Castling rights
        for c in parts[2].chars() {
            match c {
                'K' => board.castling_rights.set(Color::White, true),
                'Q' => board.castling_rights.set(Color::White, false),
                'k' => board.castling_rights.set(Color::Black, true),
                'q' => board.castling_rights.set(Color::Black, false),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        // En passant target
        board.en_passant_target = if parts[3] == "-" {
            None
        } else {
            let sq = parts[3]
                .parse::<Square>()
                .map_err(|_| FenError::InvalidEnPassant {
                    found: parts[3].to_string(),
                })?;
            Some(sq)
        };

        // Clocks (optional)
        if parts.len() >= 5 {
            board.halfmove_clock = parts[4].parse().unwrap_or(0);
        }
        if parts.len() >= 6 {
            board.fullmove_number = parts[5].parse().unwrap_or(1);
        }

        Ok(board)
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible
    /// parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("invalid FEN string")
    }

    /// Serialize the position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square::new(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(fen_char(color, piece));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = if self.white_to_move { "w" } else { "b" };
        let mut castling = String::new();
        if self.castling_rights.has(Color::White, true) {
            castling.push('K');
        }
        if self.castling_rights.has(Color::White, false) {
            castling.push('Q');
        }
        if self.castling_rights.has(Color::Black, true) {
            castling.push('k');
        }
        if self.castling_rights.has(Color::Black, false) {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            castling,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Parse a move in UCI long algebraic notation (e.g. "e2e4", "e7e8q")
    /// against the current position's legal moves.
    ///
    /// A promotion without a suffix resolves to the queening move.
    pub fn parse_move(&mut self, uci: &str) -> Result<Move, MoveParseError> {
        if !(4..=5).contains(&uci.len()) {
            return Err(MoveParseError::InvalidLength { len: uci.len() });
        }
        if !uci.is_ascii() {
            return Err(MoveParseError::InvalidSquare {
                notation: uci.to_string(),
            });
        }

        let square_err = |_| MoveParseError::InvalidSquare {
            notation: uci.to_string(),
        };
        let from_sq: Square = uci[0..2].parse().map_err(square_err)?;
        let to_sq: Square = uci[2..4].parse().map_err(square_err)?;

        let promotion = match uci.as_bytes().get(4) {
            None => None,
            Some(&b) => {
                let letter = (b as char).to_ascii_lowercase();
                match Piece::from_letter(letter) {
                    Some(piece) if !matches!(piece, Piece::Pawn | Piece::King) => Some(piece),
                    _ => return Err(MoveParseError::InvalidPromotion { char: b as char }),
                }
            }
        };

        let legal_moves = self.generate_moves();
        for legal_move in &legal_moves {
            if legal_move.from() != from_sq || legal_move.to() != to_sq {
                continue;
            }
            if legal_move.promotion_piece() == promotion {
                return Ok(*legal_move);
            }
            // bare "e7e8" means the queen promotion
            if promotion.is_none() && legal_move.promotion_piece() == Some(Piece::Queen) {
                return Ok(*legal_move);
            }
        }

        Err(MoveParseError::IllegalMove {
            notation: uci.to_string(),
        })
    }

    /// Parse a UCI move and make it on the board in one call.
    pub fn make_move_uci(&mut self, uci: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(uci)?;
        self.make_move(mv);
        Ok(mv)
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
