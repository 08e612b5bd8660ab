//! Searches over generated levels.

use search_content::{LevelConfig, LevelGenerator, LevelView};
use search_core::{
    AstarSearch, CellKind, GridOracle, Heuristic, Objective, Outcome, Position, UNLIMITED,
};
use strum::IntoEnumIterator;

fn assert_route_is_walkable(grid: &search_core::Grid, positions: &[Position], seed: u64) {
    assert_eq!(positions.first(), Some(&grid.start()), "seed {seed}");
    assert_eq!(positions.last(), Some(&grid.destination()), "seed {seed}");
    for pair in positions.windows(2) {
        assert!(pair[0].is_adjacent(pair[1]), "seed {seed}: {} -> {}", pair[0], pair[1]);
    }
    for position in positions {
        assert!(!grid.is_obstacle(*position), "seed {seed}: route crosses {position}");
    }
}

#[test]
fn every_objective_finds_walkable_routes() {
    let config = LevelConfig::new(24, 16);
    let mut found = 0;

    for seed in 0..40 {
        let grid = LevelGenerator::new(config, seed).layout().expect("level");
        let mut search =
            AstarSearch::new(&grid, grid.start(), grid.destination(), Heuristic::Euclidean);

        let mut reachable = None;
        for objective in Objective::iter() {
            let report = search.find(objective, UNLIMITED);
            match report.outcome {
                Outcome::Found(path) => {
                    let positions: Vec<Position> = path.positions().collect();
                    assert_route_is_walkable(&grid, &positions, seed);
                    assert_eq!(report.nodes_generated, path.generated());
                    found += 1;
                    assert_ne!(reachable, Some(false), "seed {seed}: {objective}");
                    reachable = Some(true);
                }
                Outcome::NoPath(_) => {
                    // Reachability does not depend on the objective.
                    assert_ne!(reachable, Some(true), "seed {seed}: {objective}");
                    reachable = Some(false);
                }
            }
        }
    }

    assert!(found > 0, "no generated level had a route");
}

#[test]
fn walked_level_marks_every_intermediate_step() {
    let config = LevelConfig::new(16, 16).with_barrier_factor(0.2);
    let mut grid = LevelGenerator::new(config, 11)
        .layout_from(Position::ORIGIN)
        .expect("level");

    let report = AstarSearch::new(&grid, grid.start(), grid.destination(), Heuristic::Checkers)
        .find(Objective::Basic, UNLIMITED);
    let Outcome::Found(path) = report.outcome else {
        // A sparse level may still wall off the corner; nothing to draw then.
        return;
    };

    grid.walk(&path);
    let markers = grid
        .rows()
        .flatten()
        .filter(|cell| **cell == CellKind::StepMarker)
        .count();
    assert_eq!(markers, path.len() - 2);
    assert_eq!(grid.cell(grid.start()), Some(CellKind::Start));
    assert_eq!(grid.cell(grid.destination()), Some(CellKind::Destination));

    let rendered = LevelView::new(&grid).to_string();
    assert_eq!(rendered.lines().count(), 17);
    assert!(rendered.contains('+'));

    grid.clear_steps();
    assert!(!LevelView::new(&grid).to_string().contains('+'));
}

#[test]
fn open_level_route_is_chebyshev_optimal() {
    let config = LevelConfig::new(20, 20).with_barrier_factor(0.0);
    for seed in 0..10 {
        let grid = LevelGenerator::new(config, seed).layout().expect("level");
        let (start, destination) = (grid.start(), grid.destination());
        let chebyshev = (start.x - destination.x)
            .abs()
            .max((start.y - destination.y).abs()) as usize;

        let report = AstarSearch::new(&grid, start, destination, Heuristic::Euclidean)
            .find(Objective::Basic, UNLIMITED);
        let path = report.outcome.into_path().expect("open level always has a route");
        assert_eq!(path.steps(), chebyshev, "seed {seed}");
    }
}
