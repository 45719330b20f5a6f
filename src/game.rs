//! Game façade: a board plus move history and derived game state.

use std::fmt;

use log::debug;

use crate::board::{Board, Color, FenError, Move, MoveList, MoveParseError, UnmakeInfo};

/// Outcome of the position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    /// The side to move has at least one legal move
    Ongoing,
    /// The side to move is mated; `winner` delivered the mate
    Checkmate { winner: Color },
    /// The side to move has no legal moves but is not in check
    Stalemate,
}

/// Error returned when a caller tries to make a move that is not legal
/// in the current position (or the game is already over).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IllegalMove(pub Move);

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "illegal move {}", self.0)
    }
}

impl std::error::Error for IllegalMove {}

/// A playable game: board state, LIFO move history, and a cached terminal
/// state check.
///
/// `make_move` and `undo_last` are exact inverses; the history stack is the
/// only memory a game needs beyond the board itself.
pub struct Game {
    board: Board,
    history: Vec<(Move, UnmakeInfo)>,
    state: GameState,
}

impl Game {
    /// Start a game from the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            history: Vec::new(),
            state: GameState::Ongoing,
        }
    }

    /// Reset to the standard starting position, discarding history.
    pub fn reset(&mut self) {
        *self = Game::new();
    }

    /// Set the position from a FEN string, discarding history.
    ///
    /// On error the game is left untouched.
    pub fn set_position_from_fen(&mut self, fen: &str) -> Result<(), FenError> {
        let board = Board::try_from_fen(fen)?;
        self.board = board;
        self.history.clear();
        self.state = self.compute_state();
        Ok(())
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The color to move; once the game is over this is the side that
    /// could not move (the loser, for checkmate).
    #[must_use]
    pub fn turn(&self) -> Color {
        self.board.side_to_move()
    }

    /// Current game state (cached; recomputed on every transition).
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state != GameState::Ongoing
    }

    /// All legal moves for the side to move.
    #[must_use]
    pub fn legal_moves(&mut self) -> MoveList {
        self.board.generate_moves()
    }

    fn compute_state(&mut self) -> GameState {
        if !self.board.generate_moves().is_empty() {
            return GameState::Ongoing;
        }
        let to_move = self.board.side_to_move();
        if self.board.is_in_check(to_move) {
            GameState::Checkmate {
                winner: to_move.opponent(),
            }
        } else {
            GameState::Stalemate
        }
    }

    /// Make a legal move, pushing it onto the history stack.
    ///
    /// The move must come from `legal_moves`; anything else (including any
    /// move once the game is over) fails with `IllegalMove` and leaves the
    /// game unchanged.
    pub fn make_move(&mut self, mv: Move) -> Result<(), IllegalMove> {
        if self.is_over() || !self.legal_moves().contains(mv) {
            debug!("rejected move {mv}");
            return Err(IllegalMove(mv));
        }

        let info = self.board.make_move(mv);
        self.history.push((mv, info));
        self.state = self.compute_state();
        Ok(())
    }

    /// Parse a UCI move string and make it.
    pub fn make_move_uci(&mut self, uci: &str) -> Result<Move, MoveParseError> {
        if self.is_over() {
            return Err(MoveParseError::IllegalMove {
                notation: uci.to_string(),
            });
        }
        let mv = self.board.parse_move(uci)?;
        let info = self.board.make_move(mv);
        self.history.push((mv, info));
        self.state = self.compute_state();
        Ok(mv)
    }

    /// Undo the most recent move. Returns it, or `None` if there is no
    /// history. Always reopens a finished game.
    pub fn undo_last(&mut self) -> Option<Move> {
        let (mv, info) = self.history.pop()?;
        self.board.unmake_move(mv, info);
        self.state = GameState::Ongoing;
        Some(mv)
    }

    /// Number of plies played since the initial position.
    #[must_use]
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    /// Count leaf nodes of the legal move tree to the given depth.
    #[must_use]
    pub fn perft(&mut self, depth: usize) -> u64 {
        self.board.perft(depth)
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
