//! Shared level selection and configuration overrides.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Args;
use search_content::{AppConfig, ConfigLoader, LevelGenerator, MapLoader};
use search_core::{Grid, Heuristic, Objective, Position, SearchConfig};

/// Where the level comes from and how to search it
#[derive(Args, Debug, Default)]
pub struct LevelArgs {
    /// Configuration file (TOML, or legacy JSON with a .json extension)
    #[arg(short, long, value_name = "FILE", env = "ASTAR_CONFIG")]
    config: Option<PathBuf>,

    /// Load the level from a map file instead of generating one
    #[arg(short, long, value_name = "FILE", conflicts_with_all = ["seed", "random_start"])]
    map: Option<PathBuf>,

    /// Seed for level generation (defaults to the current time)
    #[arg(short, long, value_name = "SEED")]
    seed: Option<u64>,

    /// Place the start randomly instead of in the upper left corner
    #[arg(long)]
    random_start: bool,

    /// Heuristic override (euclidean, manhattan, checkers, sse)
    #[arg(long, value_name = "NAME", value_parser = Heuristic::parse)]
    heuristic: Option<Heuristic>,

    /// Objective override (basic, pretty, stealthy)
    #[arg(long, value_name = "NAME", value_parser = Objective::parse)]
    objective: Option<Objective>,

    /// Give up once more than this many nodes have been generated
    #[arg(long, value_name = "COUNT")]
    node_limit: Option<usize>,

    /// Generated level width
    #[arg(long, value_name = "CELLS")]
    width: Option<u32>,

    /// Generated level height
    #[arg(long, value_name = "CELLS")]
    height: Option<u32>,

    /// Obstacle drops per cell for generated levels
    #[arg(long, value_name = "FACTOR")]
    barrier_factor: Option<f64>,
}

/// A level ready to be searched.
#[derive(Debug)]
pub struct Scenario {
    pub grid: Grid,
    pub search: SearchConfig,
    /// Seed the level was generated from, `None` for loaded maps.
    pub seed: Option<u64>,
}

impl LevelArgs {
    /// Merges the configuration file with command line overrides.
    pub fn config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => ConfigLoader::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => AppConfig::default(),
        };

        if let Some(heuristic) = self.heuristic {
            config.search.heuristic = heuristic;
        }
        if let Some(objective) = self.objective {
            config.search.objective = objective;
        }
        if let Some(node_limit) = self.node_limit {
            config.search.node_limit = node_limit;
        }
        if let Some(width) = self.width {
            config.level.width = width;
        }
        if let Some(height) = self.height {
            config.level.height = height;
        }
        if let Some(barrier_factor) = self.barrier_factor {
            config.level.barrier_factor = barrier_factor;
        }

        Ok(config)
    }

    /// Loads or generates the level described by these arguments.
    pub fn resolve(&self) -> Result<Scenario> {
        let config = self.config()?;

        if let Some(path) = &self.map {
            let grid = MapLoader::load(path)?;
            return Ok(Scenario {
                grid,
                search: config.search,
                seed: None,
            });
        }

        let seed = self.seed.unwrap_or_else(clock_seed);
        let mut generator = LevelGenerator::new(config.level, seed);
        let grid = if self.random_start {
            generator.layout()
        } else {
            generator.layout_from(Position::ORIGIN)
        }
        .with_context(|| format!("Failed to generate level from seed {seed}"))?;

        Ok(Scenario {
            grid,
            search: config.search,
            seed: Some(seed),
        })
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use search_core::GridOracle;
    use std::io::Write;

    #[test]
    fn overrides_win_over_config_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(
            file,
            "heuristic = \"manhattan\"\nobjective = \"pretty\"\n\n[map]\nwidth = 12\nheight = 9"
        )
        .expect("write config");

        let args = LevelArgs {
            config: Some(file.path().to_path_buf()),
            objective: Some(Objective::Stealthy),
            height: Some(15),
            ..LevelArgs::default()
        };
        let config = args.config().expect("config");

        assert_eq!(config.search.heuristic, Heuristic::Manhattan);
        assert_eq!(config.search.objective, Objective::Stealthy);
        assert_eq!(config.level.width, 12);
        assert_eq!(config.level.height, 15);
    }

    #[test]
    fn generated_level_starts_in_corner_by_default() {
        let args = LevelArgs {
            seed: Some(7),
            ..LevelArgs::default()
        };
        let scenario = args.resolve().expect("scenario");

        assert_eq!(scenario.seed, Some(7));
        assert_eq!(scenario.grid.start(), Position::ORIGIN);
        assert_eq!(scenario.grid.dimensions().width, 20);
    }

    #[test]
    fn loaded_map_has_no_seed() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "3 2\nS.#\n..D\n").expect("write map");

        let args = LevelArgs {
            map: Some(file.path().to_path_buf()),
            ..LevelArgs::default()
        };
        let scenario = args.resolve().expect("scenario");

        assert_eq!(scenario.seed, None);
        assert_eq!(scenario.grid.destination(), Position::new(2, 1));
    }
}
