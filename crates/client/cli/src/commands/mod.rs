//! Command implementations for the astar binary
//!
//! Each command implements its own CLI args and execution logic. Level
//! selection and search overrides are shared through [`LevelArgs`].

mod compare;
mod level;
mod solve;

pub use compare::Compare;
pub use level::LevelArgs;
pub use solve::Solve;
