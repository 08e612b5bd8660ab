//! Grid route finding with shape-aware A*.
//!
//! `search-core` finds a route between two cells of a grid of free cells and
//! obstacles. The search is a best-first expansion over eight-way unit moves
//! guided by a selectable [`Heuristic`], with an [`Objective`] that can bend
//! the route toward walls or toward straight runs at the expense of
//! step-optimality.
//!
//! The crate performs no I/O. Worlds are supplied through [`GridOracle`];
//! loading, generation and rendering live in `search-content` and the CLI.
pub mod config;
pub mod env;
pub mod error;
pub mod heuristic;
pub mod objective;
pub mod search;
pub mod state;

pub use config::SearchConfig;
pub use env::{CellKind, Grid, GridDimensions, GridOracle};
pub use error::{ConfigError, GridError};
pub use heuristic::Heuristic;
pub use objective::{CostModel, Objective, Surcharge};
pub use search::{
    AstarSearch, NoPathReason, NodeId, Outcome, Path, SearchNode, SearchReport, UNLIMITED,
};
pub use state::{Direction, Offset, Position};
