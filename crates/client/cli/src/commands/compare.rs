//! Run every objective on the same level.

use anyhow::Result;
use clap::Parser;
use console::style;
use search_core::{AstarSearch, Objective, Outcome};
use strum::IntoEnumIterator;

use super::LevelArgs;
use crate::display;

/// Compare objectives on one level
#[derive(Parser)]
pub struct Compare {
    #[command(flatten)]
    level: LevelArgs,

    /// Also print the level
    #[arg(long)]
    show_level: bool,
}

impl Compare {
    pub fn execute(self) -> Result<()> {
        let scenario = self.level.resolve()?;
        let grid = &scenario.grid;

        if self.show_level {
            println!("{}", display::level(grid));
        }

        println!(
            "{}",
            style(format!(
                "{:<10} {:<28} {:>6} {:>8} {:>7}",
                "objective", "outcome", "length", "cost", "nodes"
            ))
            .bold()
        );

        let mut search = AstarSearch::new(
            grid,
            grid.start(),
            grid.destination(),
            scenario.search.heuristic,
        );
        for objective in Objective::iter() {
            let report = search.find(objective, scenario.search.node_limit);
            let (outcome, length, cost) = match &report.outcome {
                Outcome::Found(path) => (
                    style("found".to_string()).green(),
                    path.len().to_string(),
                    format!("{:.2}", path.cost()),
                ),
                Outcome::NoPath(reason) => {
                    (style(reason.to_string()).red(), "-".into(), "-".into())
                }
            };
            println!(
                "{:<10} {:<28} {:>6} {:>8} {:>7}",
                objective.as_ref(),
                outcome,
                length,
                cost,
                report.nodes_generated
            );
        }

        println!();
        println!("heuristic: {}", scenario.search.heuristic);
        if let Some(seed) = scenario.seed {
            println!("seed: {seed}");
        }

        Ok(())
    }
}
