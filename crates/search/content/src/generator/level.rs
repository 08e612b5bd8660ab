use search_core::{Grid, GridDimensions, GridError, Position};

use super::rng::PcgRng;

/// Shape of generated levels.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelConfig {
    pub width: u32,
    pub height: u32,
    /// Obstacle drops per cell. Drops may land on the same cell twice, so
    /// the final obstacle density is lower.
    pub barrier_factor: f64,
}

impl LevelConfig {
    pub const DEFAULT_WIDTH: u32 = 20;
    pub const DEFAULT_HEIGHT: u32 = 20;
    pub const DEFAULT_BARRIER_FACTOR: f64 = 0.45;

    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            barrier_factor: Self::DEFAULT_BARRIER_FACTOR,
        }
    }

    pub fn with_barrier_factor(mut self, barrier_factor: f64) -> Self {
        self.barrier_factor = barrier_factor;
        self
    }

    pub fn dimensions(&self) -> GridDimensions {
        GridDimensions::new(self.width, self.height)
    }
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum LevelError {
    #[error("start {0} is outside the level")]
    StartOutOfBounds(Position),

    #[error("{width}x{height} level has no cell far enough from {start} for a destination")]
    NoDestination {
        width: u32,
        height: u32,
        start: Position,
    },

    #[error("{width}x{height} level is too small for an inset start")]
    NoStart { width: u32, height: u32 },

    #[error("barrier factor {0} must be between 0 and 1")]
    InvalidBarrierFactor(f64),

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Lays out random levels from a seed.
///
/// Start and destination keep [`LevelGenerator::INSET`] cells of margin from
/// every edge, and the destination sits more than a quarter of the level away
/// from the start on both axes.
#[derive(Clone, Debug)]
pub struct LevelGenerator {
    config: LevelConfig,
    seed: u64,
    rng: PcgRng,
}

impl LevelGenerator {
    pub const INSET: i32 = 1;

    pub fn new(config: LevelConfig, seed: u64) -> Self {
        Self {
            config,
            seed,
            rng: PcgRng::new(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    /// Lays out a level with a fixed start and a random destination.
    pub fn layout_from(&mut self, start: Position) -> Result<Grid, LevelError> {
        self.validate()?;
        if !self.config.dimensions().contains(start) {
            return Err(LevelError::StartOutOfBounds(start));
        }

        let destination = self.pick_destination(start)?;
        self.populate(start, destination)
    }

    /// Lays out a level with random start and destination.
    pub fn layout(&mut self) -> Result<Grid, LevelError> {
        self.validate()?;
        let candidates: Vec<Position> =
            Self::inset_cells(self.config.width as i32, self.config.height as i32).collect();
        if candidates.is_empty() {
            return Err(LevelError::NoStart {
                width: self.config.width,
                height: self.config.height,
            });
        }

        let start = self.pick(&candidates);
        let destination = self.pick_destination(start)?;
        self.populate(start, destination)
    }

    fn validate(&self) -> Result<(), LevelError> {
        let factor = self.config.barrier_factor;
        if !(0.0..=1.0).contains(&factor) {
            return Err(LevelError::InvalidBarrierFactor(factor));
        }
        if self.config.width == 0 || self.config.height == 0 {
            return Err(GridError::InvalidDimensions {
                width: self.config.width,
                height: self.config.height,
            }
            .into());
        }
        Ok(())
    }

    fn pick_destination(&mut self, start: Position) -> Result<Position, LevelError> {
        let min_dx = (0.25 * f64::from(self.config.width)) as i32;
        let min_dy = (0.25 * f64::from(self.config.height)) as i32;

        let candidates: Vec<Position> =
            Self::inset_cells(self.config.width as i32, self.config.height as i32)
            .filter(|cell| (cell.x - start.x).abs() > min_dx && (cell.y - start.y).abs() > min_dy)
            .collect();

        if candidates.is_empty() {
            return Err(LevelError::NoDestination {
                width: self.config.width,
                height: self.config.height,
                start,
            });
        }
        Ok(self.pick(&candidates))
    }

    /// Cells at least `INSET + 1` away from the left/top edge and `INSET + 1`
    /// away from the right/bottom edge.
    fn inset_cells(width: i32, height: i32) -> impl Iterator<Item = Position> {
        let inset = Self::INSET;

        (0..height).flat_map(move |y| {
            (0..width)
                .filter(move |&x| {
                    x - inset > 0 && width - x > inset && y - inset > 0 && height - y > inset
                })
                .map(move |x| Position::new(x, y))
        })
    }

    fn pick(&mut self, candidates: &[Position]) -> Position {
        let index = self.rng.below(candidates.len() as u32) as usize;
        candidates[index]
    }

    fn populate(&mut self, start: Position, destination: Position) -> Result<Grid, LevelError> {
        let mut grid = Grid::open(self.config.dimensions(), start, destination)?;

        let cells = f64::from(self.config.width) * f64::from(self.config.height);
        let drops = (cells * self.config.barrier_factor + 0.5) as u32;

        for _ in 0..drops {
            let x = self.rng.below(self.config.width) as i32;
            let y = self.rng.below(self.config.height) as i32;
            let cell = Position::new(x, y);
            if cell == start || cell == destination {
                continue;
            }
            grid.set_obstacle(cell)?;
        }

        tracing::debug!(
            target: "search::content",
            seed = self.seed,
            %start,
            %destination,
            drops,
            obstacles = grid.obstacle_count(),
            "Level generated"
        );

        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use search_core::GridOracle;

    #[test]
    fn same_seed_same_level() {
        let config = LevelConfig::default();
        let first = LevelGenerator::new(config, 99).layout().expect("level");
        let second = LevelGenerator::new(config, 99).layout().expect("level");
        assert_eq!(first, second);
    }

    #[test]
    fn endpoints_respect_inset_and_separation() {
        let config = LevelConfig::new(20, 12);
        for seed in 0..50 {
            let grid = LevelGenerator::new(config, seed).layout().expect("level");
            for endpoint in [grid.start(), grid.destination()] {
                assert!(endpoint.x >= 2 && endpoint.x <= 18, "seed {seed}: {endpoint}");
                assert!(endpoint.y >= 2 && endpoint.y <= 10, "seed {seed}: {endpoint}");
                assert!(!grid.is_obstacle(endpoint));
            }
            assert!((grid.start().x - grid.destination().x).abs() > 5);
            assert!((grid.start().y - grid.destination().y).abs() > 3);
        }
    }

    #[test]
    fn fixed_start_is_kept() {
        let mut generator = LevelGenerator::new(LevelConfig::default(), 5);
        let grid = generator.layout_from(Position::ORIGIN).expect("level");
        assert_eq!(grid.start(), Position::ORIGIN);
        assert!(grid.obstacle_count() > 0);
    }

    #[test]
    fn zero_barrier_factor_leaves_level_open() {
        let config = LevelConfig::new(10, 10).with_barrier_factor(0.0);
        let grid = LevelGenerator::new(config, 3).layout().expect("level");
        assert_eq!(grid.obstacle_count(), 0);
    }

    #[test]
    fn impossible_layouts_are_errors() {
        let tiny = LevelConfig::new(3, 3);
        assert_eq!(
            LevelGenerator::new(tiny, 1).layout(),
            Err(LevelError::NoStart {
                width: 3,
                height: 3
            })
        );
        assert_eq!(
            LevelGenerator::new(LevelConfig::default(), 1).layout_from(Position::new(20, 0)),
            Err(LevelError::StartOutOfBounds(Position::new(20, 0)))
        );
        let bad_factor = LevelConfig::default().with_barrier_factor(1.5);
        assert_eq!(
            LevelGenerator::new(bad_factor, 1).layout(),
            Err(LevelError::InvalidBarrierFactor(1.5))
        );
    }
}
