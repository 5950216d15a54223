//! The engine controller: owns the position and at most one search
//! thread at a time.
//!
//! A search job moves through idle → running → (stopping | completing) →
//! finished. Stopping is triggered by [`EngineController::signal_stop`]
//! or the deadline timer; completing happens when the depth budget runs
//! out. Either way the search thread publishes its result through the
//! completion callback before exiting, and joining the job observes that
//! publication.

use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::board::{find_best_move, Board, SearchParams, SearchResult};
use crate::sync::StopFlag;

/// Stack size for the search thread; recursion depth is bounded but each
/// frame carries a move vector.
const SEARCH_STACK_SIZE: usize = 16 * 1024 * 1024;

/// Granularity of the deadline timer's sleep.
const TIMER_POLL_MS: u64 = 5;

/// Budget divisor when deriving a move time from the remaining clock.
const CLOCK_FRACTION: u64 = 30;

/// A running search: its stop flag and thread handles.
pub struct SearchJob {
    stop: StopFlag,
    handle: JoinHandle<()>,
    timer_handle: Option<JoinHandle<()>>,
}

impl SearchJob {
    /// Request cancellation and block until the search has published its
    /// result and exited.
    pub fn stop_and_wait(self) {
        self.stop.raise();
        let _ = self.handle.join();
        if let Some(timer) = self.timer_handle {
            let _ = timer.join();
        }
    }

    /// Request cancellation without waiting; the search thread will
    /// publish its best move on its way out.
    pub fn signal_stop(&self) {
        self.stop.raise();
    }
}

/// Owns the current position and the lifecycle of the search thread.
///
/// The I/O thread is the only caller; the board is handed to a search by
/// value (clone), so the search thread never shares position state.
pub struct EngineController {
    board: Board,
    current_job: Option<SearchJob>,
}

impl EngineController {
    #[must_use]
    pub fn new() -> Self {
        EngineController {
            board: Board::new(),
            current_job: None,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Reset to the starting position, stopping any pending search.
    pub fn new_game(&mut self) {
        self.stop_search();
        self.board = Board::new();
    }

    /// Stop and join any pending search. Must run before a new
    /// `position`/`go` pair is honored; the engine never has two
    /// searches outstanding.
    pub fn stop_search(&mut self) {
        if let Some(job) = self.current_job.take() {
            job.stop_and_wait();
        }
    }

    /// Non-blocking stop request for the `stop` command.
    pub fn signal_stop(&mut self) {
        if let Some(job) = &self.current_job {
            job.signal_stop();
        }
    }

    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.current_job.is_some()
    }

    /// Millisecond budget for this search, if the parameters imply one:
    /// an explicit movetime wins, otherwise a slice of the remaining
    /// clock plus the increment.
    fn time_budget(params: &SearchParams, white_to_move: bool) -> Option<Duration> {
        if params.infinite || params.ponder || params.depth.is_some() {
            return None;
        }
        if let Some(ms) = params.move_time {
            return Some(Duration::from_millis(ms));
        }
        let (clock, increment) = if white_to_move {
            (params.wtime, params.winc)
        } else {
            (params.btime, params.binc)
        };
        clock.map(|remaining| {
            let divisor = params.moves_to_go.unwrap_or(CLOCK_FRACTION).max(1);
            Duration::from_millis(remaining / divisor + increment.unwrap_or(0))
        })
    }

    fn spawn_deadline_timer(deadline: Instant, stop: StopFlag) -> JoinHandle<()> {
        thread::spawn(move || loop {
            if stop.is_raised() {
                break;
            }
            let now = Instant::now();
            if now >= deadline {
                stop.raise();
                break;
            }
            thread::sleep((deadline - now).min(Duration::from_millis(TIMER_POLL_MS)));
        })
    }

    /// Start a search on a background thread. `on_complete` receives the
    /// result exactly once, from the search thread, before it exits.
    pub fn start_search<F>(&mut self, params: SearchParams, on_complete: F)
    where
        F: FnOnce(SearchResult) + Send + 'static,
    {
        self.stop_search();

        let stop = StopFlag::new();
        let timer_handle = Self::time_budget(&params, self.board.white_to_move())
            .map(|budget| Self::spawn_deadline_timer(Instant::now() + budget, stop.clone()));

        let mut search_board = self.board.clone();
        let search_stop = stop.clone();
        let handle = thread::Builder::new()
            .name("search".to_string())
            .stack_size(SEARCH_STACK_SIZE)
            .spawn(move || {
                let result = find_best_move(&mut search_board, &params, search_stop.as_atomic());
                on_complete(result);
            })
            .expect("failed to spawn search thread");

        self.current_job = Some(SearchJob {
            stop,
            handle,
            timer_handle,
        });
    }
}

impl Default for EngineController {
    fn default() -> Self {
        EngineController::new()
    }
}
