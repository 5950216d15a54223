//! Score bands and depth budgets.

/// Largest representable score magnitude.
pub const SCORE_INFINITE: i32 = 32_767;

/// Base of the mate band. Mates score `MATE_SCORE + remaining depth`
/// (negated when the root is being mated) so shorter mates always score
/// strictly better than longer ones, while leaving room above for the
/// depth adjustment to stay below [`SCORE_INFINITE`].
pub const MATE_SCORE: i32 = SCORE_INFINITE - 1000;

/// Fresh depth budget handed to the quiescence search at the horizon.
pub(crate) const QUIESCENCE_DEPTH: u32 = 4;

/// Depth used when `go` gives neither `depth` nor `infinite`.
pub(crate) const DEFAULT_DEPTH: u32 = 6;

/// Ladder ceiling for `go infinite`. Plain recursion with the quiescence
/// budget stays comfortably within stack limits at this depth.
pub(crate) const MAX_SEARCH_DEPTH: u32 = 16;
