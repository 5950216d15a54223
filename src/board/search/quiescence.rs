//! Bounded continuation past the nominal horizon.
//!
//! Explores only non-quiet moves (captures, promotions, castlings and
//! check-related moves) so the search does not stop in the middle of a
//! tactical exchange. Stand-pat: the static score bounds the node before
//! any move is tried, since the side to move can usually decline the
//! remaining tactics.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::board::{sort_moves, Board};

use super::alphabeta::terminal_score;

pub(super) fn quiesce(
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

    let stand_pat = board.material_score(as_white);
    if stop.load(Ordering::Relaxed) || depth == 0 {
        return stand_pat;
    }

    let mut alpha = alpha_in;
    let mut beta = beta_in;
    if maximising {
        if stand_pat >= beta {
            return stand_pat;
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }
    } else {
        if stand_pat <= alpha {
            return stand_pat;
        }
        if stand_pat < beta {
            beta = stand_pat;
        }
    }

    let mut moves = board.generate_moves();
    sort_moves(&mut moves);
    let snapshot = board.snapshot();
    let mut score = stand_pat;

    for mv in moves {
        if mv.is_quiet() {
            continue;
        }
        board.apply_move(mv);
        let evaluation = quiesce(board, depth - 1, alpha, beta, !maximising, as_white, stop);
        board.restore(&snapshot);

        if maximising {
            if evaluation > score {
                score = evaluation;
            }
            if score > alpha {
                alpha = score;
            }
            if score >= beta {
                break;
            }
        } else {
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
    }
    score
}
