//! UCI protocol surface: command parsing and serialized output.

pub mod command;
pub mod print;

use std::fmt;

use crate::board::{Board, FenError, Move, MoveParseError, SearchParams};

use command::GoParams;

/// Failure while handling a `position` command.
#[derive(Debug, Clone)]
pub enum UciError {
    InvalidFen(FenError),
    InvalidMove {
        move_str: String,
        error: MoveParseError,
    },
    MissingParts,
}

impl fmt::Display for UciError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UciError::InvalidFen(e) => write!(f, "invalid fen: {e}"),
            UciError::InvalidMove { move_str, error } => {
                write!(f, "invalid move '{move_str}': {error}")
            }
            UciError::MissingParts => write!(f, "incomplete position command"),
        }
    }
}

impl std::error::Error for UciError {}

impl From<FenError> for UciError {
    fn from(e: FenError) -> Self {
        UciError::InvalidFen(e)
    }
}

/// Apply a `position` command to the board.
///
/// Accepts `position startpos [moves ...]` and
/// `position fen <fen> [moves ...]`. A malformed FEN leaves the prior
/// position untouched; a malformed move stops the move list there, with
/// the earlier moves already applied.
pub fn try_parse_position_command(board: &mut Board, parts: &[&str]) -> Result<(), UciError> {
    let mut i = 1;
    let mut next = match parts.get(i) {
        Some(&"startpos") => {
            i += 1;
            Board::new()
        }
        Some(&"fen") => {
            i += 1;
            let end = parts[i..]
                .iter()
                .position(|p| *p == "moves")
                .map_or(parts.len(), |offset| i + offset);
            let fen = parts[i..end].join(" ");
            i = end;
            Board::try_from_fen(&fen)?
        }
        _ => return Err(UciError::MissingParts),
    };

    if parts.get(i) == Some(&"moves") {
        i += 1;
        while let Some(token) = parts.get(i) {
            if let Err(error) = next.apply_uci_move(token) {
                *board = next;
                return Err(UciError::InvalidMove {
                    move_str: (*token).to_string(),
                    error,
                });
            }
            i += 1;
        }
    }

    *board = next;
    Ok(())
}

/// Like [`try_parse_position_command`] but reports failures as an
/// `info string` instead of propagating them.
pub fn parse_position_command(board: &mut Board, parts: &[&str]) {
    if let Err(e) = try_parse_position_command(board, parts) {
        print::info_string(&e.to_string());
    }
}

/// Bind wire-level `go` parameters to search parameters.
///
/// `searchmoves` tokens that do not parse are dropped here; they could
/// never match a legal move during the root intersection anyway.
#[must_use]
pub fn build_search_params(go: &GoParams) -> SearchParams {
    let search_moves = go
        .search_moves
        .iter()
        .filter_map(|token| Move::parse(token).ok())
        .collect();

    SearchParams {
        depth: go.depth,
        move_time: go.movetime,
        wtime: go.wtime,
        btime: go.btime,
        winc: go.winc,
        binc: go.binc,
        moves_to_go: go.movestogo,
        nodes: go.nodes,
        mate: go.mate,
        infinite: go.infinite,
        ponder: go.ponder,
        search_moves,
    }
}
