//! The search engine: node arena, open/closed sets, the expansion loop and
//! path reconstruction.
mod astar;
mod frontier;
mod node;
mod path;

pub use astar::{AstarSearch, NoPathReason, Outcome, SearchReport, UNLIMITED};
pub use frontier::{Frontier, Visited};
pub use node::{NodeArena, NodeId, SearchNode};
pub use path::{Path, encode_label};
