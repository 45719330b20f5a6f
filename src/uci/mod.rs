//! Universal Chess Interface (UCI) adapter.
//!
//! A line-oriented, single-threaded command processor: each input line is
//! parsed (`command` module), handled to completion against the session's
//! `Game`, and its responses are written before the next line is read.
//! `go` is synchronous; the engine collaborator answers before `bestmove`
//! is printed. Unrecognized commands are logged and dropped, and the loop
//! exits cleanly on `quit` or EOF.

use std::fmt;
use std::io::{self, BufRead, Write};

use log::{debug, warn};

use crate::board::{FenError, Move, MoveParseError};
use crate::engine::Engine;
use crate::game::Game;

pub mod command;

use self::command::{parse_go_params, parse_uci_command, UciCommand};

const ENGINE_NAME: &str = "Skewer";
const ENGINE_AUTHOR: &str = "the Skewer developers";

/// Error type for UCI position command handling
#[derive(Debug, Clone)]
pub enum UciError {
    /// Invalid FEN string
    InvalidFen(FenError),
    /// Invalid move in the move list
    InvalidMove {
        move_str: String,
        error: MoveParseError,
    },
    /// Missing required parts in the command
    MissingParts,
}

impl fmt::Display for UciError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UciError::InvalidFen(e) => write!(f, "Invalid FEN: {e}"),
            UciError::InvalidMove { move_str, error } => {
                write!(f, "Invalid move '{move_str}': {error}")
            }
            UciError::MissingParts => write!(f, "Missing required parts in position command"),
        }
    }
}

impl std::error::Error for UciError {}

impl From<FenError> for UciError {
    fn from(e: FenError) -> Self {
        UciError::InvalidFen(e)
    }
}

/// Protocol output lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciResponse {
    IdName(String),
    IdAuthor(String),
    UciOk,
    ReadyOk,
    BestMove(Option<Move>),
    Info(String),
}

impl UciResponse {
    /// Format the response as a UCI output line
    #[must_use]
    pub fn to_uci_string(&self) -> String {
        match self {
            UciResponse::IdName(name) => format!("id name {name}"),
            UciResponse::IdAuthor(author) => format!("id author {author}"),
            UciResponse::UciOk => "uciok".to_string(),
            UciResponse::ReadyOk => "readyok".to_string(),
            UciResponse::BestMove(Some(mv)) => format!("bestmove {mv}"),
            UciResponse::BestMove(None) => "bestmove 0000".to_string(),
            UciResponse::Info(info) => format!("info string {info}"),
        }
    }
}

/// Apply a `position` command (tokens including the leading "position")
/// to the game. Supports `startpos` and `fen <6 fields>`, each optionally
/// followed by `moves <m1> <m2> ...`.
pub fn try_parse_position_command(game: &mut Game, parts: &[&str]) -> Result<(), UciError> {
    let mut i = 1;

    if i >= parts.len() {
        return Err(UciError::MissingParts);
    }

    if parts[i] == "startpos" {
        game.reset();
        i += 1;
    } else if parts[i] == "fen" {
        if i + 6 >= parts.len() {
            return Err(UciError::MissingParts);
        }
        let fen = parts[i + 1..i + 7].join(" ");
        game.set_position_from_fen(&fen)?;
        i += 7;
    } else {
        return Err(UciError::MissingParts);
    }

    if i < parts.len() && parts[i] == "moves" {
        i += 1;
        while i < parts.len() {
            game.make_move_uci(parts[i])
                .map_err(|e| UciError::InvalidMove {
                    move_str: parts[i].to_string(),
                    error: e,
                })?;
            i += 1;
        }
    }

    Ok(())
}

/// One UCI dialogue: a game plus the engine that answers `go`.
///
/// Parsing and handling are separated so the protocol can be exercised in
/// tests without process plumbing.
pub struct UciSession<E: Engine> {
    game: Game,
    engine: E,
}

impl<E: Engine> UciSession<E> {
    pub fn new(engine: E) -> Self {
        UciSession {
            game: Game::new(),
            engine,
        }
    }

    /// Handle a parsed command, returning the responses to print.
    pub fn handle_command(&mut self, command: &UciCommand) -> Vec<UciResponse> {
        match command {
            UciCommand::Uci => vec![
                UciResponse::IdName(ENGINE_NAME.to_string()),
                UciResponse::IdAuthor(ENGINE_AUTHOR.to_string()),
                UciResponse::UciOk,
            ],
            UciCommand::IsReady => vec![UciResponse::ReadyOk],
            UciCommand::UciNewGame => {
                self.game.reset();
                vec![]
            }
            UciCommand::Position(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                if let Err(e) = try_parse_position_command(&mut self.game, &parts) {
                    warn!("position command rejected: {e}");
                }
                vec![]
            }
            UciCommand::Go(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                let params = parse_go_params(&parts);
                debug!("go depth={:?}", params.depth);

                let best = self.engine.best_move(&mut self.game);
                vec![UciResponse::BestMove(best)]
            }
            UciCommand::Perft(depth) => {
                let nodes = self.game.perft(*depth);
                vec![UciResponse::Info(format!("perft({depth}) = {nodes}"))]
            }
            UciCommand::Display => {
                vec![UciResponse::Info(format!("\n{}", self.game.board()))]
            }
            UciCommand::Quit => vec![],
            UciCommand::Unknown(line) => {
                debug!("ignoring unknown command: {line}");
                vec![]
            }
        }
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }
}

/// Run the blocking UCI loop over arbitrary streams until `quit` or EOF.
pub fn run_loop<E: Engine, R: BufRead, W: Write>(
    engine: E,
    reader: R,
    mut writer: W,
) -> io::Result<()> {
    let mut session = UciSession::new(engine);

    for line in reader.lines() {
        let line = line?;
        let Some(command) = parse_uci_command(&line) else {
            continue;
        };

        for response in session.handle_command(&command) {
            writeln!(writer, "{}", response.to_uci_string())?;
        }
        writer.flush()?;

        if command == UciCommand::Quit {
            break;
        }
    }

    Ok(())
}

/// Run the UCI loop on stdin/stdout.
pub fn run<E: Engine>(engine: E) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_loop(engine, stdin.lock(), stdout.lock())
}
