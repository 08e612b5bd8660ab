//! Solve a single level and print the walked route.

use anyhow::Result;
use clap::Parser;
use console::style;
use search_core::{AstarSearch, Outcome};

use super::LevelArgs;
use crate::display;

/// Solve a level with the configured heuristic and objective
#[derive(Parser)]
pub struct Solve {
    #[command(flatten)]
    level: LevelArgs,
}

impl Solve {
    pub fn execute(self) -> Result<()> {
        let scenario = self.level.resolve()?;
        let mut grid = scenario.grid;

        let report = AstarSearch::new(
            &grid,
            grid.start(),
            grid.destination(),
            scenario.search.heuristic,
        )
        .run(&scenario.search);

        match report.outcome {
            Outcome::Found(path) => {
                grid.walk(&path);
                println!("{}", display::level(&grid));
                println!("{path}\n");
                println!("path length: {}", path.len());
            }
            Outcome::NoPath(reason) => {
                tracing::info!(%reason, "No route between the endpoints");
                println!("{}", style("NO PATH !").red().bold());
            }
        }

        println!("node count: {}", report.nodes_generated);
        if let Some(seed) = scenario.seed {
            println!("seed: {seed}");
        }

        Ok(())
    }
}
