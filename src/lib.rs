//! Chess engine library speaking the UCI protocol.
//!
//! The crate is built around four pieces:
//! - A bitboard [`board::Board`] holding the full position state
//! - A legal move generator with a visitor contract for early exit
//! - Snapshot-based make/unmake for allocation-free depth-first search
//! - Alpha-beta search with a quiescence extension over tactical moves
//!
//! # Quick start
//!
//! ```
//! use ember::board::{find_best_move, Board, SearchParams};
//! use std::sync::atomic::AtomicBool;
//!
//! let mut board = Board::new();
//! assert_eq!(board.generate_moves().len(), 20);
//!
//! let params = SearchParams {
//!     depth: Some(2),
//!     ..SearchParams::default()
//! };
//! let stop = AtomicBool::new(false);
//! let result = find_best_move(&mut board, &params, &stop);
//! assert!(result.best_move.is_some());
//! ```
//!
//! # Positions
//!
//! ```
//! use ember::board::Board;
//!
//! let mut board =
//!     Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
//! board.apply_uci_move("e2e4").unwrap();
//! assert_eq!(
//!     board.to_fen(),
//!     "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
//! );
//! ```
//!
//! # Features
//!
//! - `serde` - serialization derives for `Piece`, `Color`, `Square`, `Move`
//!   and `CastlingRights`

#![warn(clippy::pedantic)]
// Bit patterns read better without digit separators
#![allow(clippy::unreadable_literal)]
// Square/board index casts are pervasive and bounded by construction
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod board;
pub mod engine;
pub mod sync;
pub mod uci;
