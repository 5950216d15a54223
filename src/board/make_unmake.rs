//! Applying moves to the board.
//!
//! There is no per-move undo record: callers take a [`super::Snapshot`]
//! before applying and restore it afterwards.

use super::state::{board_index, EMPTY_IDX};
use super::{Bitboard, Board, Color, Move, Piece, Square};

// Home corners, used for castling-rights maintenance.
const A1: u64 = 1;
const H1: u64 = 1 << 7;
const A8: u64 = 1 << 56;
const H8: u64 = 1 << 63;

impl Board {
    /// Take a piece off a square, marking the square empty.
    #[inline]
    fn lift(&mut self, board_idx: usize, bit: u64) {
        self.bitboards[board_idx].0 &= !bit;
        self.bitboards[EMPTY_IDX].0 |= bit;
    }

    /// Put a piece on an empty square.
    #[inline]
    fn put(&mut self, board_idx: usize, bit: u64) {
        self.bitboards[board_idx].0 |= bit;
        self.bitboards[EMPTY_IDX].0 &= !bit;
    }

    /// Place a piece during board construction.
    pub(crate) fn place(&mut self, sq: Square, color: Color, piece: Piece) {
        self.put(
            board_index(color.is_white(), piece),
            Bitboard::from_square(sq).0,
        );
    }

    /// The piece and color on a square, if any.
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        let bit = Bitboard::from_square(sq);
        if self.bitboards[EMPTY_IDX].intersects(bit) {
            return None;
        }
        for (offset, color) in [(1, Color::White), (7, Color::Black)] {
            for piece in Piece::ALL {
                if self.bitboards[offset + piece.index()].intersects(bit) {
                    return Some((color, piece));
                }
            }
        }
        None
    }

    #[inline]
    #[must_use]
    pub fn is_square_empty(&self, sq: Square) -> bool {
        self.bitboards[EMPTY_IDX].contains(sq)
    }

    /// Apply a generated move to the board.
    ///
    /// The move must have been generated for this exact position. Every
    /// step updates the moved piece's board and the empty board together
    /// so the thirteen-way partition is preserved.
    pub fn apply_move(&mut self, mv: Move) {
        let white = self.white_to_move;
        let from = mv.from();
        let to = mv.to();
        let from_bit = Bitboard::from_square(from).0;
        let to_bit = Bitboard::from_square(to).0;
        let mover = mv.mover();

        self.lift(board_index(white, mover), from_bit);

        if mv.is_en_passant() {
            // The captured pawn sits one rank behind the target square
            let victim_idx = if white { to.index() - 8 } else { to.index() + 8 };
            self.lift(board_index(!white, Piece::Pawn), 1u64 << victim_idx);
            self.put(board_index(white, Piece::Pawn), to_bit);
        } else {
            if mv.is_capture() {
                for piece in Piece::ALL {
                    let idx = board_index(!white, piece);
                    if self.bitboards[idx].0 & to_bit != 0 {
                        self.lift(idx, to_bit);
                        break;
                    }
                }
            }
            let placed = mv.promotion().unwrap_or(mover);
            self.put(board_index(white, placed), to_bit);
        }

        if mv.is_castling() {
            // Shuttle the rook over the king's destination
            let (rook_from, rook_to) = if mv.is_castle_kingside() {
                (to.index() + 1, to.index() - 1)
            } else {
                (to.index() - 2, to.index() + 1)
            };
            let rook_idx = board_index(white, Piece::Rook);
            self.lift(rook_idx, 1u64 << rook_from);
            self.put(rook_idx, 1u64 << rook_to);
        }

        self.en_passant = if mover == Piece::Pawn
            && from.index().abs_diff(to.index()) == 16
        {
            Bitboard(1u64 << usize::midpoint(from.index(), to.index()))
        } else {
            Bitboard::EMPTY
        };

        if mover == Piece::King {
            let mover_color = self.side_to_move();
            self.castling_rights.revoke_both(mover_color);
        }
        let touched = from_bit | to_bit;
        if touched & H1 != 0 {
            self.castling_rights.revoke(Color::White, true);
        }
        if touched & A1 != 0 {
            self.castling_rights.revoke(Color::White, false);
        }
        if touched & H8 != 0 {
            self.castling_rights.revoke(Color::Black, true);
        }
        if touched & A8 != 0 {
            self.castling_rights.revoke(Color::Black, false);
        }

        if mover == Piece::Pawn || mv.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        self.white_to_move = !self.white_to_move;
        if self.white_to_move {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        #[cfg(debug_assertions)]
        self.assert_partition();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(board: &mut Board, uci: &str) -> Move {
        let wanted = Move::parse(uci).unwrap();
        board
            .generate_moves()
            .into_iter()
            .find(|m| wanted.is_equivalent(*m))
            .unwrap_or_else(|| panic!("{uci} not legal here"))
    }

    #[test]
    fn double_push_sets_en_passant_target() {
        let mut board = Board::new();
        let mv = resolve(&mut board, "e2e4");
        board.apply_move(mv);
        assert_eq!(board.en_passant_square(), Some("e3".parse().unwrap()));
        assert!(!board.white_to_move());

        // Any other move clears the target
        let mv = resolve(&mut board, "g8f6");
        board.apply_move(mv);
        assert_eq!(board.en_passant_square(), None);
    }

    #[test]
    fn en_passant_capture_removes_the_pawn_behind() {
        let mut board =
            Board::try_from_fen("rnbqkbnr/pp1ppppp/8/2pP4/8/8/PPP1PPPP/RNBQKBNR w KQkq c6 0 2")
                .unwrap();
        let mv = resolve(&mut board, "d5c6");
        assert!(mv.is_en_passant());
        board.apply_move(mv);

        assert_eq!(board.piece_at("c5".parse().unwrap()), None);
        assert_eq!(
            board.piece_at("c6".parse().unwrap()),
            Some((Color::White, Piece::Pawn))
        );
        assert_eq!(board.en_passant_square(), None);
    }

    #[test]
    fn kingside_castle_moves_both_pieces_and_clears_rights() {
        let mut board = Board::try_from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let mv = resolve(&mut board, "e1g1");
        assert!(mv.is_castling());
        board.apply_move(mv);

        assert_eq!(
            board.piece_at("g1".parse().unwrap()),
            Some((Color::White, Piece::King))
        );
        assert_eq!(
            board.piece_at("f1".parse().unwrap()),
            Some((Color::White, Piece::Rook))
        );
        assert!(board.is_square_empty("e1".parse().unwrap()));
        assert!(board.is_square_empty("h1".parse().unwrap()));
        assert!(!board.castling_rights().has(Color::White, true));
        assert!(!board.castling_rights().has(Color::White, false));
        assert!(board.castling_rights().has(Color::Black, true));
    }

    #[test]
    fn queenside_castle_places_rook_on_d_file() {
        let mut board = Board::try_from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1").unwrap();
        let mv = resolve(&mut board, "e8c8");
        board.apply_move(mv);
        assert_eq!(
            board.piece_at("c8".parse().unwrap()),
            Some((Color::Black, Piece::King))
        );
        assert_eq!(
            board.piece_at("d8".parse().unwrap()),
            Some((Color::Black, Piece::Rook))
        );
    }

    #[test]
    fn promotion_replaces_the_pawn() {
        let mut board = Board::try_from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
        let mv = resolve(&mut board, "a7a8q");
        board.apply_move(mv);
        assert_eq!(
            board.piece_at("a8".parse().unwrap()),
            Some((Color::White, Piece::Queen))
        );
        assert_eq!(board.piece_board(true, Piece::Pawn).popcount(), 0);
    }

    #[test]
    fn rook_capture_on_home_corner_revokes_the_right() {
        let mut board =
            Board::try_from_fen("r3k2r/8/8/8/8/8/6b1/R3K2R b KQkq - 0 1").unwrap();
        let mv = resolve(&mut board, "g2h1");
        board.apply_move(mv);
        assert!(!board.castling_rights().has(Color::White, true));
        assert!(board.castling_rights().has(Color::White, false));
    }

    #[test]
    fn clocks_follow_pawn_moves_and_captures() {
        let mut board = Board::new();
        let mv = resolve(&mut board, "g1f3");
        board.apply_move(mv);
        assert_eq!(board.halfmove_clock(), 1);
        assert_eq!(board.fullmove_number(), 1);

        let mv = resolve(&mut board, "d7d5");
        board.apply_move(mv);
        assert_eq!(board.halfmove_clock(), 0);
        assert_eq!(board.fullmove_number(), 2);
    }
}
