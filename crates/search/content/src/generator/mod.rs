//! Seeded random levels.
mod level;
mod rng;

pub use level::{LevelConfig, LevelError, LevelGenerator};
pub use rng::PcgRng;
