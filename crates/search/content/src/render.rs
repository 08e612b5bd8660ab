//! Plain-text rendering of a level.

use std::fmt::{self, Write as _};

use search_core::search::encode_label;
use search_core::{CellKind, Grid, GridOracle};

/// Display adapter printing a grid with base-62 row and column labels.
///
/// ```text
///   0 1 2
/// 0 S + #
/// 1 # # +
/// 2     D
/// ```
pub struct LevelView<'a> {
    grid: &'a Grid,
}

impl<'a> LevelView<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    /// Writes the level, passing each cell through `paint` so callers can
    /// decorate symbols (colour codes, for instance).
    pub fn write_with<W, F>(&self, out: &mut W, mut paint: F) -> fmt::Result
    where
        W: fmt::Write,
        F: FnMut(CellKind) -> String,
    {
        out.write_str("  ")?;
        for x in 0..self.grid.dimensions().width as i32 {
            write!(out, "{} ", encode_label(x))?;
        }
        out.write_char('\n')?;

        for (y, row) in self.grid.rows().enumerate() {
            write!(out, "{} ", encode_label(y as i32))?;
            for cell in row {
                write!(out, "{} ", paint(*cell))?;
            }
            out.write_char('\n')?;
        }
        Ok(())
    }
}

impl fmt::Display for LevelView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, |cell| cell.symbol().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_labels_and_symbols() {
        let grid = Grid::from_rows(&["S.#", "##.", "..D"]).expect("valid grid");
        let text = LevelView::new(&grid).to_string();
        assert_eq!(text, "  0 1 2 \n0 S   # \n1 # #   \n2     D \n");
    }
}
