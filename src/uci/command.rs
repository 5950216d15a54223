//! UCI command-line tokenization.

/// One parsed input line.
#[derive(Debug, Clone)]
pub enum UciCommand {
    Uci,
    IsReady,
    UciNewGame,
    /// Full token list of a `position` command
    Position(Vec<String>),
    /// Full token list of a `go` command
    Go(Vec<String>),
    /// `perft <depth>` extension for generator validation
    Perft(usize),
    SetOption(Vec<String>),
    Stop,
    PonderHit,
    Quit,
    Unknown(String),
}

/// Raw `go` parameters as they appear on the wire.
#[derive(Debug, Clone, Default)]
pub struct GoParams {
    pub depth: Option<u32>,
    pub movetime: Option<u64>,
    pub wtime: Option<u64>,
    pub btime: Option<u64>,
    pub winc: Option<u64>,
    pub binc: Option<u64>,
    pub movestogo: Option<u64>,
    pub nodes: Option<u64>,
    pub mate: Option<u32>,
    pub infinite: bool,
    pub ponder: bool,
    /// Moves listed after `searchmoves`, still in text form
    pub search_moves: Vec<String>,
}

/// Keywords that end a `searchmoves` list.
const GO_KEYWORDS: [&str; 12] = [
    "searchmoves",
    "ponder",
    "wtime",
    "btime",
    "winc",
    "binc",
    "movestogo",
    "depth",
    "nodes",
    "mate",
    "movetime",
    "infinite",
];

#[inline]
fn value_after<T: std::str::FromStr>(parts: &[&str], i: usize) -> Option<T> {
    parts.get(i + 1).and_then(|v| v.parse().ok())
}

/// Parse the parameters of a `go` command. Unknown tokens are skipped.
#[must_use]
pub fn parse_go_params(parts: &[&str]) -> GoParams {
    let mut params = GoParams::default();
    let mut i = 1;
    while i < parts.len() {
        let consumed = match parts[i] {
            "depth" => {
                params.depth = value_after(parts, i);
                2
            }
            "movetime" => {
                params.movetime = value_after(parts, i);
                2
            }
            "wtime" => {
                params.wtime = value_after(parts, i);
                2
            }
            "btime" => {
                params.btime = value_after(parts, i);
                2
            }
            "winc" => {
                params.winc = value_after(parts, i);
                2
            }
            "binc" => {
                params.binc = value_after(parts, i);
                2
            }
            "movestogo" => {
                params.movestogo = value_after(parts, i);
                2
            }
            "nodes" => {
                params.nodes = value_after(parts, i);
                2
            }
            "mate" => {
                params.mate = value_after(parts, i);
                2
            }
            "ponder" => {
                params.ponder = true;
                1
            }
            "infinite" => {
                params.infinite = true;
                1
            }
            "searchmoves" => {
                let mut taken = 1;
                while let Some(token) = parts.get(i + taken) {
                    if GO_KEYWORDS.contains(token) {
                        break;
                    }
                    params.search_moves.push((*token).to_string());
                    taken += 1;
                }
                taken
            }
            _ => 1,
        };
        i += consumed;
    }
    params
}

/// Classify one input line. Returns `None` for blank lines.
#[must_use]
pub fn parse_uci_command(line: &str) -> Option<UciCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let first = parts.first()?;

    let owned = || parts.iter().map(|p| (*p).to_string()).collect::<Vec<_>>();

    let command = match *first {
        "uci" => UciCommand::Uci,
        "isready" => UciCommand::IsReady,
        "ucinewgame" => UciCommand::UciNewGame,
        "position" => UciCommand::Position(owned()),
        "go" => UciCommand::Go(owned()),
        "perft" => UciCommand::Perft(value_after(&parts, 0).unwrap_or(1)),
        "setoption" => UciCommand::SetOption(owned()),
        "stop" => UciCommand::Stop,
        "ponderhit" => UciCommand::PonderHit,
        "quit" => UciCommand::Quit,
        _ => UciCommand::Unknown(line.trim().to_string()),
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_simple_commands() {
        assert!(matches!(parse_uci_command("uci"), Some(UciCommand::Uci)));
        assert!(matches!(
            parse_uci_command("isready"),
            Some(UciCommand::IsReady)
        ));
        assert!(matches!(
            parse_uci_command("  stop  "),
            Some(UciCommand::Stop)
        ));
        assert!(matches!(parse_uci_command("quit"), Some(UciCommand::Quit)));
        assert!(parse_uci_command("   ").is_none());
        assert!(matches!(
            parse_uci_command("xyzzy"),
            Some(UciCommand::Unknown(_))
        ));
    }

    #[test]
    fn position_keeps_all_tokens() {
        let cmd = parse_uci_command("position startpos moves e2e4 e7e5").unwrap();
        let UciCommand::Position(parts) = cmd else {
            panic!("expected position command");
        };
        assert_eq!(parts, ["position", "startpos", "moves", "e2e4", "e7e5"]);
    }

    #[test]
    fn perft_depth_defaults_to_one() {
        assert!(matches!(
            parse_uci_command("perft 4"),
            Some(UciCommand::Perft(4))
        ));
        assert!(matches!(
            parse_uci_command("perft"),
            Some(UciCommand::Perft(1))
        ));
    }

    #[test]
    fn go_times_and_flags() {
        let parts = [
            "go", "wtime", "300000", "btime", "290000", "winc", "2000", "binc", "2000",
            "movestogo", "40",
        ];
        let params = parse_go_params(&parts);
        assert_eq!(params.wtime, Some(300000));
        assert_eq!(params.btime, Some(290000));
        assert_eq!(params.winc, Some(2000));
        assert_eq!(params.binc, Some(2000));
        assert_eq!(params.movestogo, Some(40));
        assert!(!params.infinite);

        let params = parse_go_params(&["go", "infinite"]);
        assert!(params.infinite);

        let params = parse_go_params(&["go", "depth", "7", "ponder"]);
        assert_eq!(params.depth, Some(7));
        assert!(params.ponder);
    }

    #[test]
    fn searchmoves_consumes_until_next_keyword() {
        let parts = ["go", "searchmoves", "e2e4", "d2d4", "depth", "3"];
        let params = parse_go_params(&parts);
        assert_eq!(params.search_moves, ["e2e4", "d2d4"]);
        assert_eq!(params.depth, Some(3));
    }

    #[test]
    fn searchmoves_at_end_of_line() {
        let params = parse_go_params(&["go", "depth", "3", "searchmoves", "g1f3"]);
        assert_eq!(params.search_moves, ["g1f3"]);
        assert_eq!(params.depth, Some(3));
    }

    #[test]
    fn bad_values_become_none() {
        let params = parse_go_params(&["go", "depth", "banana"]);
        assert!(params.depth.is_none());
        let params = parse_go_params(&["go", "depth"]);
        assert!(params.depth.is_none());
    }
}
