//! Coordinate and movement value types shared by the grid and the search.
mod position;

pub use position::{Direction, Offset, Position};
