//! FEN input and output, plus UCI move resolution.

use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{Board, Color, Move, Piece, Square};

impl Board {
    /// Parse a position from the six-field FEN form
    /// `<pieces> <side> <castling> <ep> [<halfmove> [<fullmove>]]`.
    ///
    /// The halfmove clock defaults to 0 and the fullmove number to 1
    /// when the optional fields are absent.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(FenError::TooFewFields {
                found: fields.len(),
            });
        }

        let mut board = Board::blank();

        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidPlacement);
        }
        for (row, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - row;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    file += run as usize;
                } else {
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if file >= 8 {
                        return Err(FenError::InvalidPlacement);
                    }
                    board.place(Square::new(rank, file), color, piece);
                    file += 1;
                }
            }
            if file != 8 {
                return Err(FenError::InvalidPlacement);
            }
        }

        board.white_to_move = match fields[1] {
            "w" => true,
            "b" => false,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        for c in fields[2].chars() {
            match c {
                'K' => board.castling_rights.grant(Color::White, true),
                'Q' => board.castling_rights.grant(Color::White, false),
                'k' => board.castling_rights.grant(Color::Black, true),
                'q' => board.castling_rights.grant(Color::Black, false),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        if fields[3] != "-" {
            let sq: Square = fields[3].parse().map_err(|_| FenError::InvalidEnPassant {
                found: fields[3].to_string(),
            })?;
            board.en_passant = super::Bitboard::from_square(sq);
        }

        if let Some(half) = fields.get(4) {
            board.halfmove_clock = half.parse().unwrap_or(0);
        }
        if let Some(full) = fields.get(5) {
            board.fullmove_number = full.parse().unwrap_or(1);
        }

        Ok(board)
    }

    /// Like [`Board::try_from_fen`] but panics on malformed input.
    /// Intended for known-good literals in tests and tools.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("invalid FEN string")
    }

    /// Emit the canonical FEN for this position.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut placement = String::new();
        for rank in (0..8).rev() {
            let mut empty_run = 0;
            for file in 0..8 {
                match self.piece_at(Square::new(rank, file)) {
                    Some((color, piece)) => {
                        if empty_run > 0 {
                            placement.push_str(&empty_run.to_string());
                            empty_run = 0;
                        }
                        placement.push(piece.to_fen_char(color));
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                placement.push_str(&empty_run.to_string());
            }
            if rank > 0 {
                placement.push('/');
            }
        }

        let side = if self.white_to_move { "w" } else { "b" };

        let mut castling = String::new();
        if self.castling_rights.has(Color::White, true) {
            castling.push('K');
        }
        if self.castling_rights.has(Color::White, false) {
            castling.push('Q');
        }
        if self.castling_rights.has(Color::Black, true) {
            castling.push('k');
        }
        if self.castling_rights.has(Color::Black, false) {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let en_passant = self
            .en_passant_square()
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{placement} {side} {castling} {en_passant} {} {}",
            self.halfmove_clock, self.fullmove_number
        )
    }

    /// Resolve UCI long algebraic notation against this position's legal
    /// moves, matching on from, to and promotion only.
    pub fn resolve_uci_move(&mut self, uci: &str) -> Result<Move, MoveParseError> {
        let wanted = Move::parse(uci)?;
        self.generate_moves()
            .into_iter()
            .find(|legal| wanted.is_equivalent(*legal))
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: uci.to_string(),
            })
    }

    /// Resolve and apply a UCI move in one step.
    pub fn apply_uci_move(&mut self, uci: &str) -> Result<Move, MoveParseError> {
        let mv = self.resolve_uci_move(uci)?;
        self.apply_move(mv);
        Ok(mv)
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, FenError> {
        Board::try_from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::START_FEN;

    #[test]
    fn start_position_round_trips() {
        let board = Board::try_from_fen(START_FEN).unwrap();
        assert_eq!(board.to_fen(), START_FEN);
    }

    #[test]
    fn parse_emit_round_trip_on_varied_positions() {
        let fens = [
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "4k3/8/8/8/8/8/8/4K3 b - - 42 99",
        ];
        for fen in fens {
            let board = Board::try_from_fen(fen).unwrap();
            assert_eq!(board.to_fen(), fen, "round trip failed for {fen}");
        }
    }

    #[test]
    fn optional_clock_fields_default() {
        let board = Board::try_from_fen("4k3/8/8/8/8/8/8/4K3 w - -").unwrap();
        assert_eq!(board.halfmove_clock(), 0);
        assert_eq!(board.fullmove_number(), 1);
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            Board::try_from_fen("4k3/8/8/8"),
            Err(FenError::TooFewFields { found: 1 })
        ));
        assert!(matches!(
            Board::try_from_fen("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::InvalidPiece { char: 'x' })
        ));
        assert!(matches!(
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR u KQkq - 0 1"),
            Err(FenError::InvalidSideToMove { .. })
        ));
        assert!(matches!(
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KXkq - 0 1"),
            Err(FenError::InvalidCastling { char: 'X' })
        ));
        assert!(matches!(
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e9 0 1"),
            Err(FenError::InvalidEnPassant { .. })
        ));
        assert!(matches!(
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::InvalidPlacement)
        ));
    }

    #[test]
    fn side_and_en_passant_are_read() {
        let board =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
                .unwrap();
        assert!(!board.white_to_move());
        assert_eq!(board.en_passant_square(), Some("e3".parse().unwrap()));
    }

    #[test]
    fn resolve_uci_move_matches_legal_moves_only() {
        let mut board = Board::new();
        let mv = board.resolve_uci_move("e2e4").unwrap();
        assert_eq!(mv.to_string(), "e2e4");
        assert_eq!(mv.mover(), Piece::Pawn);

        assert!(matches!(
            board.resolve_uci_move("e2e5"),
            Err(MoveParseError::IllegalMove { .. })
        ));
        assert!(matches!(
            board.resolve_uci_move("e2"),
            Err(MoveParseError::InvalidLength { .. })
        ));
    }

    #[test]
    fn resolve_promotion_picks_the_requested_piece() {
        let mut board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
        let mv = board.resolve_uci_move("a7a8r").unwrap();
        assert_eq!(mv.promotion(), Some(Piece::Rook));
    }

    #[test]
    fn apply_uci_move_advances_the_position() {
        let mut board = Board::new();
        board.apply_uci_move("e2e4").unwrap();
        board.apply_uci_move("c7c5").unwrap();
        assert_eq!(
            board.to_fen(),
            "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2"
        );
    }

    #[test]
    fn from_str_is_fen_parsing() {
        let board: Board = START_FEN.parse().unwrap();
        assert!(board.white_to_move());
    }
}
