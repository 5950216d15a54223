//! The position value and its snapshot.

use super::{Bitboard, CastlingRights, Color, Piece, Square};

/// FEN of the standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Index of the empty-square board in [`Board::bitboards`].
pub(crate) const EMPTY_IDX: usize = 0;

/// Index of the bitboard holding `piece`s of the given side.
#[inline]
pub(crate) const fn board_index(white: bool, piece: Piece) -> usize {
    let base = if white { 1 } else { 7 };
    base + piece.index()
}

/// Outcome of a position with no legal moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminalState {
    /// Side to move is in check with no escape; it loses.
    Checkmate,
    /// Side to move has no moves but is not in check; draw.
    Stalemate,
}

/// A chess position.
///
/// Thirteen bitboards partition the 64 squares: index 0 holds the empty
/// squares, 1-6 the white pieces (P N B R Q K) and 7-12 the black pieces.
/// Every mutation keeps the partition intact by updating the moved
/// piece's board and the empty board together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) bitboards: [Bitboard; 13],
    pub(crate) white_to_move: bool,
    pub(crate) castling_rights: CastlingRights,
    /// Zero or a single bit: the square behind a pawn that just moved two.
    pub(crate) en_passant: Bitboard,
    pub(crate) halfmove_clock: u16,
    pub(crate) fullmove_number: u16,
}

/// A full copy of a [`Board`]'s state, used to undo moves in O(1).
///
/// A snapshot taken before a move is enough to undo it regardless of
/// captures, promotions, en passant or castling; the generator snapshots
/// once and restores after each trial move.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot {
    bitboards: [Bitboard; 13],
    white_to_move: bool,
    castling_rights: CastlingRights,
    en_passant: Bitboard,
    halfmove_clock: u16,
    fullmove_number: u16,
}

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Self::try_from_fen(START_FEN).expect("start position FEN is valid")
    }

    /// A board with no pieces; every square is in the empty set.
    pub(crate) fn blank() -> Self {
        let mut bitboards = [Bitboard::EMPTY; 13];
        bitboards[EMPTY_IDX] = Bitboard::ALL;
        Board {
            bitboards,
            white_to_move: true,
            castling_rights: CastlingRights::none(),
            en_passant: Bitboard::EMPTY,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[inline]
    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// The en passant target square, if a double pawn push just happened.
    #[must_use]
    pub fn en_passant_square(&self) -> Option<Square> {
        if self.en_passant.is_empty() {
            None
        } else {
            Some(Square::from_index(self.en_passant.first_index()))
        }
    }

    /// The bitboard of one side's pieces of one kind.
    #[inline]
    pub(crate) fn piece_board(&self, white: bool, piece: Piece) -> Bitboard {
        self.bitboards[board_index(white, piece)]
    }

    /// All occupied squares.
    #[inline]
    pub(crate) fn occupancy(&self) -> u64 {
        !self.bitboards[EMPTY_IDX].0
    }

    /// All squares occupied by one side.
    pub(crate) fn occupied_by(&self, white: bool) -> u64 {
        let base = if white { 1 } else { 7 };
        self.bitboards[base..base + 6]
            .iter()
            .fold(0, |acc, bb| acc | bb.0)
    }

    /// Capture the complete position state.
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            bitboards: self.bitboards,
            white_to_move: self.white_to_move,
            castling_rights: self.castling_rights,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        }
    }

    /// Restore the position captured by a snapshot, undoing any number of
    /// moves applied since it was taken.
    #[inline]
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.bitboards = snapshot.bitboards;
        self.white_to_move = snapshot.white_to_move;
        self.castling_rights = snapshot.castling_rights;
        self.en_passant = snapshot.en_passant;
        self.halfmove_clock = snapshot.halfmove_clock;
        self.fullmove_number = snapshot.fullmove_number;
    }

    /// Material balance in centipawns from the given perspective.
    ///
    /// Positive means the chosen side is ahead. O(1) per piece kind via
    /// population counts.
    #[must_use]
    pub fn material_score(&self, for_white: bool) -> i32 {
        let mut balance = 0;
        for piece in Piece::ALL {
            let value = piece.value();
            balance += value * self.piece_board(true, piece).popcount() as i32;
            balance -= value * self.piece_board(false, piece).popcount() as i32;
        }
        if for_white {
            balance
        } else {
            -balance
        }
    }

    /// Whether the side to move has no legal reply, and how that ends the
    /// game. `None` means play continues.
    pub fn terminal_state(&mut self) -> Option<TerminalState> {
        let mut has_moves = false;
        self.visit_legal_moves(|_| {
            has_moves = true;
            false
        });
        if has_moves {
            return None;
        }
        if self.is_in_check(self.white_to_move) {
            Some(TerminalState::Checkmate)
        } else {
            Some(TerminalState::Stalemate)
        }
    }

    #[must_use]
    pub fn is_checkmate(&mut self) -> bool {
        self.terminal_state() == Some(TerminalState::Checkmate)
    }

    #[must_use]
    pub fn is_stalemate(&mut self) -> bool {
        self.terminal_state() == Some(TerminalState::Stalemate)
    }

    /// Debug-only consistency check: the thirteen boards must partition
    /// the 64 squares.
    #[cfg(debug_assertions)]
    pub(crate) fn assert_partition(&self) {
        let mut seen = 0u64;
        for bb in &self.bitboards {
            debug_assert_eq!(seen & bb.0, 0, "bitboards overlap");
            seen |= bb.0;
        }
        debug_assert_eq!(seen, !0u64, "bitboards do not cover the board");
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
