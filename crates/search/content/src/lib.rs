//! Worlds and settings that feed the search engine.
//!
//! This crate houses everything the search consumes but does not own:
//! - Seeded level generation (random obstacles, separated endpoints)
//! - Map loading from plain symbol files and RON
//! - Search configuration loading from TOML and legacy JSON
//! - Text rendering of a level with a walked route
//!
//! The search itself lives in `search-core` and never performs I/O.

pub mod generator;
pub mod render;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use generator::{LevelConfig, LevelError, LevelGenerator, PcgRng};
pub use render::LevelView;

#[cfg(feature = "loaders")]
pub use loaders::{AppConfig, ConfigLoader, MapLoader};
