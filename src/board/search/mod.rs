//! Fixed-depth alpha-beta search with a quiescence extension.
//!
//! The core honors `depth`, `searchmoves`, `infinite` and the stop flag.
//! The remaining `go` parameters are carried for the controller's time
//! manager and impose no contract here.

mod alphabeta;
mod constants;
mod quiescence;

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

pub use constants::{MATE_SCORE, SCORE_INFINITE};

use constants::{DEFAULT_DEPTH, MAX_SEARCH_DEPTH, QUIESCENCE_DEPTH};

use super::{sort_moves, Board, Move};
use alphabeta::minmax;
use quiescence::quiesce;

/// Everything a `go` command can ask for.
#[derive(Clone, Debug, Default)]
pub struct SearchParams {
    /// Search exactly this many plies
    pub depth: Option<u32>,
    /// Spend exactly this many milliseconds
    pub move_time: Option<u64>,
    pub wtime: Option<u64>,
    pub btime: Option<u64>,
    pub winc: Option<u64>,
    pub binc: Option<u64>,
    pub moves_to_go: Option<u64>,
    pub nodes: Option<u64>,
    pub mate: Option<u32>,
    /// Keep searching until told to stop
    pub infinite: bool,
    pub ponder: bool,
    /// Restrict the root to these moves (matched on from/to/promotion)
    pub search_moves: Vec<Move>,
}

/// Outcome of a search.
#[derive(Clone, Copy, Debug)]
pub struct SearchResult {
    /// Best move, or `None` when the root has no searchable move
    /// (terminal position, or an empty `searchmoves` intersection).
    pub best_move: Option<Move>,
    /// Expected reply slot for `bestmove ... ponder ...`; this engine
    /// surfaces it but never fills it.
    pub ponder_move: Option<Move>,
    /// Score of the best move from the searching side's perspective.
    pub score: i32,
}

impl SearchResult {
    const fn empty() -> Self {
        SearchResult {
            best_move: None,
            ponder_move: None,
            score: 0,
        }
    }
}

/// Search the position and return the best move found.
///
/// With `infinite` set, climbs the depth ladder until the stop flag is
/// raised and only then returns the last completed result; otherwise a
/// single fixed-depth search runs to completion or interruption. On a
/// non-terminal root some legal move is always returned, even if the
/// stop flag was set before the first candidate finished.
pub fn find_best_move(board: &mut Board, params: &SearchParams, stop: &AtomicBool) -> SearchResult {
    if params.infinite {
        let mut result = search_root(board, 1, params, stop);
        if result.best_move.is_some() {
            let mut depth = 2;
            while depth <= MAX_SEARCH_DEPTH && !stop.load(Ordering::Relaxed) {
                let deeper = search_root(board, depth, params, stop);
                if stop.load(Ordering::Relaxed) {
                    break;
                }
                result = deeper;
                depth += 1;
            }
        }
        // Infinite searches may publish only after a stop request
        while !stop.load(Ordering::Relaxed) {
            std::thread::sleep(Duration::from_millis(5));
        }
        result
    } else {
        let depth = params.depth.unwrap_or(DEFAULT_DEPTH).clamp(1, MAX_SEARCH_DEPTH);
        search_root(board, depth, params, stop)
    }
}

fn search_root(
    board: &mut Board,
    depth: u32,
    params: &SearchParams,
    stop: &AtomicBool,
) -> SearchResult {
    let mut moves = board.generate_moves();
    if !params.search_moves.is_empty() {
        moves.retain(|mv| params.search_moves.iter().any(|pick| pick.is_equivalent(*mv)));
    }
    if moves.is_empty() {
        return SearchResult::empty();
    }

    let as_white = board.white_to_move();

    // Forced move: no point searching a single unrestricted reply
    if params.search_moves.is_empty() && moves.len() == 1 {
        return SearchResult {
            best_move: Some(moves[0]),
            ponder_move: None,
            score: board.material_score(as_white),
        };
    }

    sort_moves(&mut moves);
    let snapshot = board.snapshot();

    // Committing the first candidate up front guarantees a legal best
    // move even when the stop flag wins the race against the first child
    let mut best_move = moves[0];
    let mut best_score = -SCORE_INFINITE;
    let mut alpha = -SCORE_INFINITE;
    let beta = SCORE_INFINITE;

    for mv in moves {
        if stop.load(Ordering::Relaxed) {
            break;
        }
        board.apply_move(mv);
        let evaluation = if depth == 1 && !mv.is_quiet() {
            quiesce(board, QUIESCENCE_DEPTH, alpha, beta, false, as_white, stop)
        } else {
            minmax(board, depth - 1, alpha, beta, false, as_white, stop)
        };
        board.restore(&snapshot);

        if evaluation > best_score {
            best_score = evaluation;
            best_move = mv;
        }
        if best_score > alpha {
            alpha = best_score;
        }
    }

    if best_score == -SCORE_INFINITE {
        best_score = board.material_score(as_white);
    }

    SearchResult {
        best_move: Some(best_move),
        ponder_move: None,
        score: best_score,
    }
}
