//! Read-only world access consumed by the search.
//!
//! The search only ever asks two questions of the world: "is this position on
//! the grid" and "is this cell an obstacle". [`GridOracle`] captures that
//! boundary so generated levels, loaded maps and test fixtures can all feed
//! the same engine.
mod grid;

pub use grid::{CellKind, Grid, GridDimensions, GridOracle};
