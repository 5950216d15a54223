//! The recursive alpha-beta evaluator.
//!
//! Scores are always from the root's perspective: `as_white` is fixed
//! when the search starts and `maximising` alternates with the ply. The
//! running `score` is the max (min) over child evaluations and alpha
//! (beta) is updated from it.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::board::{sort_moves, Board, TerminalState};

use super::constants::{MATE_SCORE, QUIESCENCE_DEPTH, SCORE_INFINITE};
use super::quiescence::quiesce;

/// Score a position with no legal moves, from the root's perspective.
///
/// The side to move is the one with no reply; in checkmate it loses.
/// Remaining depth is added so that a mate found closer to the root
/// outranks the same mate found deeper.
pub(super) fn terminal_score(terminal: TerminalState, root_to_move: bool, depth: u32) -> i32 {
    match terminal {
        TerminalState::Stalemate => 0,
        TerminalState::Checkmate => {
            if root_to_move {
                -(MATE_SCORE + depth as i32)
            } else {
                MATE_SCORE + depth as i32
            }
        }
    }
}

pub(super) fn minmax(
    board: &mut Board,
    depth: u32,
    alpha_in: i32,
    beta_in: i32,
    maximising: bool,
    as_white: bool,
    stop: &AtomicBool,
) -> i32 {
    if let Some(terminal) = board.terminal_state() {
        return terminal_score(terminal, board.white_to_move() == as_white, depth);
    }
    if stop.load(Ordering::Relaxed) || depth == 0 {
        return board.material_score(as_white);
    }

    let mut alpha = alpha_in;
    let mut beta = beta_in;
    let mut moves = board.generate_moves();
    sort_moves(&mut moves);
    let snapshot = board.snapshot();

    if maximising {
        let mut score = -SCORE_INFINITE;
        for mv in moves {
            board.apply_move(mv);
            let evaluation = if depth == 1 && !mv.is_quiet() {
                quiesce(board, QUIESCENCE_DEPTH, alpha, beta, false, as_white, stop)
            } else {
                minmax(board, depth - 1, alpha, beta, false, as_white, stop)
            };
            board.restore(&snapshot);

            if evaluation > score {
                score = evaluation;
            }
            if score > alpha {
                alpha = score;
            }
            if score >= beta {
                break;
            }
        }
        score
    } else {
        let mut score = SCORE_INFINITE;
        for mv in moves {
            board.apply_move(mv);
            let evaluation = if depth == 1 && !mv.is_quiet() {
                quiesce(board, QUIESCENCE_DEPTH, alpha, beta, true, as_white, stop)
            } else {
                minmax(board, depth - 1, alpha, beta, true, as_white, stop)
            };
            board.restore(&snapshot);

            if evaluation < score {
                score = evaluation;
            }
            if score < beta {
                beta = score;
            }
            if score <= alpha {
                break;
            }
        }
        score
    }
}
