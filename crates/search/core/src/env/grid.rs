use std::fmt;

use crate::error::GridError;
use crate::search::Path;
use crate::state::{Direction, Position};

/// Static grid oracle exposing bounds and obstacle layout.
pub trait GridOracle {
    fn dimensions(&self) -> GridDimensions;

    /// True when the in-bounds cell at `position` is impassable.
    fn is_obstacle(&self, position: Position) -> bool;

    fn contains(&self, position: Position) -> bool {
        self.dimensions().contains(position)
    }

    /// True when any orthogonal neighbour of `position` is an obstacle.
    /// Neighbours outside the grid do not count as walls.
    fn hugs_wall(&self, position: Position) -> bool {
        Direction::ORTHOGONAL.iter().any(|direction| {
            let neighbour = position.step(direction.offset());
            self.contains(neighbour) && self.is_obstacle(neighbour)
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDimensions {
    pub width: u32,
    pub height: u32,
}

impl GridDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    pub const fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Row-major index of `position`, or `None` when out of bounds.
    pub fn index(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.y as usize * self.width as usize + position.x as usize)
    }

    fn validate(self) -> Result<Self, GridError> {
        if self.width == 0 || self.height == 0 || self.width > i32::MAX as u32 {
            return Err(GridError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

/// Contents of a single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Free,
    Obstacle,
    Start,
    Destination,
    /// Written only when a found path is drawn onto the grid.
    StepMarker,
}

impl CellKind {
    pub const fn symbol(self) -> char {
        match self {
            CellKind::Free => ' ',
            CellKind::Obstacle => '#',
            CellKind::Start => 'S',
            CellKind::Destination => 'D',
            CellKind::StepMarker => '+',
        }
    }

    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            ' ' | '.' => Some(CellKind::Free),
            '#' => Some(CellKind::Obstacle),
            'S' => Some(CellKind::Start),
            'D' => Some(CellKind::Destination),
            '+' => Some(CellKind::StepMarker),
            _ => None,
        }
    }

    pub const fn is_obstacle(self) -> bool {
        matches!(self, CellKind::Obstacle)
    }
}

/// Owned rectangular grid with exactly one start and one destination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    dimensions: GridDimensions,
    cells: Vec<CellKind>,
    start: Position,
    destination: Position,
}

impl Grid {
    /// Creates an obstacle-free grid with the given endpoints.
    pub fn open(
        dimensions: GridDimensions,
        start: Position,
        destination: Position,
    ) -> Result<Self, GridError> {
        let dimensions = dimensions.validate()?;
        let mut cells = vec![CellKind::Free; dimensions.cell_count()];

        let start_index = dimensions
            .index(start)
            .ok_or(GridError::OutOfBounds(start))?;
        let destination_index = dimensions
            .index(destination)
            .ok_or(GridError::OutOfBounds(destination))?;

        // Start wins when both endpoints coincide.
        cells[destination_index] = CellKind::Destination;
        cells[start_index] = CellKind::Start;

        Ok(Self {
            dimensions,
            cells,
            start,
            destination,
        })
    }

    /// Builds a grid from row-major cells, locating the endpoints.
    pub fn from_cells(dimensions: GridDimensions, cells: Vec<CellKind>) -> Result<Self, GridError> {
        let dimensions = dimensions.validate()?;
        if cells.len() != dimensions.cell_count() {
            return Err(GridError::CellCountMismatch {
                expected: dimensions.cell_count(),
                found: cells.len(),
            });
        }

        let width = dimensions.width as usize;
        let mut start = None;
        let mut destination = None;
        for (index, cell) in cells.iter().enumerate() {
            let position = Position::new((index % width) as i32, (index / width) as i32);
            match cell {
                CellKind::Start if start.is_some() => {
                    return Err(GridError::DuplicateStart(position));
                }
                CellKind::Start => start = Some(position),
                CellKind::Destination if destination.is_some() => {
                    return Err(GridError::DuplicateDestination(position));
                }
                CellKind::Destination => destination = Some(position),
                _ => {}
            }
        }

        Ok(Self {
            dimensions,
            cells,
            start: start.ok_or(GridError::MissingStart)?,
            destination: destination.ok_or(GridError::MissingDestination)?,
        })
    }

    /// Parses symbol rows (`S`, `D`, `#`, space or `.`, `+`).
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let width = rows.first().map(|row| row.as_ref().chars().count()).unwrap_or(0);
        let dimensions = GridDimensions::new(width as u32, rows.len() as u32);

        let mut cells = Vec::with_capacity(dimensions.cell_count());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != width {
                return Err(GridError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, symbol) in row.chars().enumerate() {
                let cell = CellKind::from_symbol(symbol).ok_or(GridError::UnknownSymbol {
                    symbol,
                    position: Position::new(x as i32, y as i32),
                })?;
                cells.push(cell);
            }
        }

        Self::from_cells(dimensions, cells)
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn destination(&self) -> Position {
        self.destination
    }

    pub fn cell(&self, position: Position) -> Option<CellKind> {
        self.dimensions
            .index(position)
            .map(|index| self.cells[index])
    }

    /// Places an obstacle. Endpoints cannot be blocked.
    pub fn set_obstacle(&mut self, position: Position) -> Result<(), GridError> {
        let index = self
            .dimensions
            .index(position)
            .ok_or(GridError::OutOfBounds(position))?;
        if position == self.start || position == self.destination {
            return Err(GridError::BlockedEndpoint(position));
        }
        self.cells[index] = CellKind::Obstacle;
        Ok(())
    }

    /// Draws `path` onto the grid, leaving start and destination untouched.
    pub fn walk(&mut self, path: &Path) {
        for position in path.positions() {
            if position == self.start || position == self.destination {
                continue;
            }
            if let Some(index) = self.dimensions.index(position) {
                self.cells[index] = CellKind::StepMarker;
            }
        }
    }

    /// Removes every step marker left by [`Grid::walk`].
    pub fn clear_steps(&mut self) {
        for cell in &mut self.cells {
            if *cell == CellKind::StepMarker {
                *cell = CellKind::Free;
            }
        }
    }

    /// Row slices in top-to-bottom order.
    pub fn rows(&self) -> impl Iterator<Item = &[CellKind]> + '_ {
        self.cells.chunks(self.dimensions.width as usize)
    }

    pub fn obstacle_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_obstacle()).count()
    }
}

impl GridOracle for Grid {
    fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    fn is_obstacle(&self, position: Position) -> bool {
        self.cell(position).is_some_and(CellKind::is_obstacle)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
