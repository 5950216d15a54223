//! Serialized protocol output.
//!
//! Protocol broadcasts and diagnostics share stdout with a process-wide
//! mutex so lines from the search thread and the I/O thread never
//! interleave mid-line.

use std::time::Duration;

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::board::{Move, SearchResult};

static OUTPUT_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

fn emit(line: &str) {
    let _guard = OUTPUT_LOCK.lock();
    println!("{line}");
}

/// Respond to `uci` with the engine identity.
pub fn identify() {
    let _guard = OUTPUT_LOCK.lock();
    println!("id name ember {}", env!("CARGO_PKG_VERSION"));
    println!("id author the ember authors");
    println!("uciok");
}

pub fn ready() {
    emit("readyok");
}

/// Broadcast the search result. A null result prints the null move.
pub fn bestmove(result: &SearchResult) {
    match (result.best_move, result.ponder_move) {
        (Some(best), Some(ponder)) => emit(&format!("bestmove {best} ponder {ponder}")),
        (Some(best), None) => emit(&format!("bestmove {best}")),
        (None, _) => emit("bestmove 0000"),
    }
}

/// Free-form diagnostic line.
pub fn info_string(message: &str) {
    emit(&format!("info string {message}"));
}

/// Print a perft divide table with its total and timing as one block.
pub fn perft_report(depth: usize, divide: &[(Move, u64)], elapsed: Duration) {
    let _guard = OUTPUT_LOCK.lock();
    let mut total = 0u64;
    for (mv, nodes) in divide {
        println!("info string perft {mv}: {nodes}");
        total += nodes;
    }
    println!(
        "info string perft depth {depth} nodes {total} time_ms {}",
        elapsed.as_millis()
    );
}
