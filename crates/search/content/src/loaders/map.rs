//! Map data loader.
//!
//! Two formats are understood:
//!
//! - Plain symbol maps: a `<width> <height>` header line followed by `height`
//!   rows of exactly `width` symbols (`S` start, `D` destination, `#`
//!   obstacle, space or `.` free).
//! - RON maps (`.ron`): dimensions, endpoints and an obstacle list.

use std::path::Path;

use search_core::{Grid, GridDimensions, Position};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, has_extension, read_file};

/// Map data structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MapDataRon {
    dimensions: (u32, u32),
    start: (i32, i32),
    destination: (i32, i32),
    #[serde(default)]
    obstacles: Vec<(i32, i32)>,
}

/// Loader for maps from symbol or RON files.
pub struct MapLoader;

impl MapLoader {
    /// Load a map, choosing the format from the file extension.
    pub fn load(path: &Path) -> LoadResult<Grid> {
        let content = read_file(path)?;
        let grid = if has_extension(path, "ron") {
            Self::from_ron(&content)?
        } else {
            Self::from_text(&content)?
        };

        tracing::info!(
            target: "search::content",
            path = %path.display(),
            start = %grid.start(),
            destination = %grid.destination(),
            obstacles = grid.obstacle_count(),
            "Map loaded"
        );

        Ok(grid)
    }

    /// Parses a plain symbol map.
    pub fn from_text(content: &str) -> LoadResult<Grid> {
        let mut lines = content.lines().map(|line| line.trim_end_matches('\r'));

        let header = lines
            .by_ref()
            .find(|line| !line.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("Map is empty"))?;
        let (width, height) = parse_header(header)?;

        let rows: Vec<&str> = lines.by_ref().take(height).collect();
        if rows.len() != height {
            anyhow::bail!("Map declares {} rows but has {}", height, rows.len());
        }
        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.chars().count() != width)
        {
            anyhow::bail!(
                "Bad row width on row {}: expected {}, found {}",
                index,
                width,
                row.chars().count()
            );
        }

        Grid::from_rows(&rows).map_err(|e| anyhow::anyhow!("Invalid map: {}", e))
    }

    /// Parses a RON map.
    pub fn from_ron(content: &str) -> LoadResult<Grid> {
        let data: MapDataRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map RON: {}", e))?;

        let dimensions = GridDimensions::new(data.dimensions.0, data.dimensions.1);
        let start = Position::new(data.start.0, data.start.1);
        let destination = Position::new(data.destination.0, data.destination.1);

        let mut grid = Grid::open(dimensions, start, destination)
            .map_err(|e| anyhow::anyhow!("Invalid map: {}", e))?;
        for (x, y) in data.obstacles {
            grid.set_obstacle(Position::new(x, y))
                .map_err(|e| anyhow::anyhow!("Invalid obstacle: {}", e))?;
        }

        Ok(grid)
    }
}

fn parse_header(line: &str) -> LoadResult<(usize, usize)> {
    let mut parts = line.split_whitespace();
    let mut next = |name: &str| -> LoadResult<usize> {
        parts
            .next()
            .ok_or_else(|| anyhow::anyhow!("Map header is missing the {}", name))?
            .parse()
            .map_err(|e| anyhow::anyhow!("Map header has a bad {}: {}", name, e))
    };
    let width = next("width")?;
    let height = next("height")?;
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use search_core::GridOracle;

    #[test]
    fn text_map_round_trips_symbols() {
        let grid = MapLoader::from_text("4 3\nS..#\n.#..\n...D\n").expect("valid map");
        assert_eq!(grid.dimensions(), GridDimensions::new(4, 3));
        assert_eq!(grid.start(), Position::new(0, 0));
        assert_eq!(grid.destination(), Position::new(3, 2));
        assert!(grid.is_obstacle(Position::new(3, 0)));
        assert!(grid.is_obstacle(Position::new(1, 1)));
    }

    #[test]
    fn text_map_rejects_short_rows() {
        let err = MapLoader::from_text("3 2\nS..\n.D\n").unwrap_err();
        assert!(err.to_string().contains("Bad row width"));

        let err = MapLoader::from_text("3 3\nS..\n..D\n").unwrap_err();
        assert!(err.to_string().contains("declares 3 rows"));
    }

    #[test]
    fn ron_map_places_obstacles() {
        let grid = MapLoader::from_ron(
            "(dimensions: (5, 4), start: (0, 0), destination: (4, 3), obstacles: [(2, 0), (2, 1), (2, 2)])",
        )
        .expect("valid map");
        assert_eq!(grid.obstacle_count(), 3);
        assert!(grid.is_obstacle(Position::new(2, 1)));
    }

    #[test]
    fn ron_map_rejects_blocked_endpoints() {
        let err = MapLoader::from_ron(
            "(dimensions: (3, 3), start: (0, 0), destination: (2, 2), obstacles: [(2, 2)])",
        )
        .unwrap_err();
        assert!(err.to_string().contains("Invalid obstacle"));
    }
}
