//! UCI command parsing.

/// A line of UCI input, tokenized into a command.
///
/// `Position` and `Go` keep their raw tokens; their grammars are handled by
/// the session. Anything unrecognized is carried as `Unknown` and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciCommand {
    Uci,
    IsReady,
    UciNewGame,
    Position(Vec<String>),
    Go(Vec<String>),
    Perft(usize),
    Display,
    Quit,
    Unknown(String),
}

/// Parameters of a `go` command that this engine understands.
///
/// Time controls and node limits are recognized so their value tokens are
/// consumed, but only the depth hint is retained.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct GoParams {
    pub depth: Option<u32>,
}

/// Parse the next parameter value as type T.
#[inline]
fn parse_next<T: std::str::FromStr>(parts: &[&str], i: usize) -> Option<T> {
    parts.get(i + 1).and_then(|v| v.parse::<T>().ok())
}

#[must_use]
pub fn parse_go_params(parts: &[&str]) -> GoParams {
    let mut params = GoParams::default();
    let mut i = 1;

    while i < parts.len() {
        let consumed = match parts[i] {
            "depth" => {
                params.depth = parse_next(parts, i);
                2
            }
            // recognized but ignored value parameters
            "wtime" | "btime" | "winc" | "binc" | "movetime" | "movestogo" | "nodes" | "mate" => 2,
            // recognized flags
            "ponder" | "infinite" => 1,
            _ => 1,
        };
        i += consumed;
    }
    params
}

#[must_use]
pub fn parse_uci_command(line: &str) -> Option<UciCommand> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parts: Vec<&str> = trimmed.split_whitespace().collect();

    let owned_parts = || {
        parts
            .iter()
            .map(|p| (*p).to_string())
            .collect::<Vec<String>>()
    };

    let cmd = match parts[0] {
        "uci" => UciCommand::Uci,
        "isready" => UciCommand::IsReady,
        "ucinewgame" => UciCommand::UciNewGame,
        "position" => UciCommand::Position(owned_parts()),
        "go" => UciCommand::Go(owned_parts()),
        "perft" => {
            let depth = parts
                .get(1)
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(1);
            UciCommand::Perft(depth)
        }
        "d" | "display" => UciCommand::Display,
        "quit" => UciCommand::Quit,
        _ => UciCommand::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_uci_command("uci"), Some(UciCommand::Uci));
        assert_eq!(parse_uci_command("isready"), Some(UciCommand::IsReady));
        assert_eq!(parse_uci_command("ucinewgame"), Some(UciCommand::UciNewGame));
        assert_eq!(parse_uci_command("quit"), Some(UciCommand::Quit));
        assert_eq!(parse_uci_command("  \t "), None);
    }

    #[test]
    fn test_parse_position_keeps_tokens() {
        let cmd = parse_uci_command("position startpos moves e2e4 e7e5").unwrap();
        match cmd {
            UciCommand::Position(parts) => {
                assert_eq!(parts, vec!["position", "startpos", "moves", "e2e4", "e7e5"]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_perft_depth() {
        assert_eq!(parse_uci_command("perft 4"), Some(UciCommand::Perft(4)));
        assert_eq!(parse_uci_command("perft"), Some(UciCommand::Perft(1)));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse_uci_command("setoption name Hash value 64"),
            Some(UciCommand::Unknown(
                "setoption name Hash value 64".to_string()
            ))
        );
    }

    #[test]
    fn test_go_params_depth() {
        let parts = ["go", "depth", "3"];
        assert_eq!(parse_go_params(&parts).depth, Some(3));
    }

    #[test]
    fn test_go_params_skip_time_controls() {
        // a depth value must not be swallowed by surrounding parameters
        let parts = ["go", "wtime", "30000", "btime", "30000", "depth", "5", "infinite"];
        assert_eq!(parse_go_params(&parts).depth, Some(5));

        let parts = ["go", "movetime", "depth"];
        assert_eq!(parse_go_params(&parts).depth, None);
    }
}
