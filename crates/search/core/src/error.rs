//! Error types for search-core.
//!
//! Only configuration and grid construction can fail. A search that finds no
//! route reports [`crate::search::Outcome::NoPath`] instead, which is a normal
//! result and never an error.

use crate::state::Position;

/// Configuration could not be turned into search settings.
///
/// Raised while loading settings, before any search runs.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unrecognized heuristic `{0}` (expected euclidean, manhattan, checkers or sse)")]
    UnknownHeuristic(String),

    #[error("unrecognized objective `{0}` (expected basic, pretty or stealthy)")]
    UnknownObjective(String),

    #[error("map dimensions {width}x{height} are invalid")]
    InvalidDimensions { width: u32, height: u32 },
}

/// A grid violated the preconditions the search relies on.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid dimensions {width}x{height} are invalid")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("expected {expected} cells, found {found}")]
    CellCountMismatch { expected: usize, found: usize },

    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("position {0} is out of bounds")]
    OutOfBounds(Position),

    #[error("grid has no start cell")]
    MissingStart,

    #[error("grid has no destination cell")]
    MissingDestination,

    #[error("grid has a second start cell at {0}")]
    DuplicateStart(Position),

    #[error("grid has a second destination cell at {0}")]
    DuplicateDestination(Position),

    #[error("endpoint {0} lies on an obstacle")]
    BlockedEndpoint(Position),

    #[error("unknown map symbol {symbol:?} at {position}")]
    UnknownSymbol { symbol: char, position: Position },
}
