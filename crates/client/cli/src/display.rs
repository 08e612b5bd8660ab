//! Colored terminal output.

use console::style;
use search_content::LevelView;
use search_core::{CellKind, Grid};

/// Renders `grid` with colored endpoints, walls and steps.
pub fn level(grid: &Grid) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = LevelView::new(grid).write_with(&mut out, paint);
    out
}

fn paint(cell: CellKind) -> String {
    let symbol = cell.symbol();
    match cell {
        CellKind::Start => style(symbol).green().bold().to_string(),
        CellKind::Destination => style(symbol).red().bold().to_string(),
        CellKind::Obstacle => style(symbol).dim().to_string(),
        CellKind::StepMarker => style(symbol).cyan().to_string(),
        CellKind::Free => symbol.to_string(),
    }
}
