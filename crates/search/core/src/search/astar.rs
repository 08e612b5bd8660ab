use core::fmt;

use arrayvec::ArrayVec;

use crate::config::SearchConfig;
use crate::env::GridOracle;
use crate::heuristic::Heuristic;
use crate::objective::Objective;
use crate::state::{Direction, Position};

use super::frontier::{Frontier, Visited};
use super::node::NodeArena;
use super::path::Path;

/// Node limit that never triggers.
pub const UNLIMITED: usize = usize::MAX;

/// Why a search ended without a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoPathReason {
    /// Every reachable cell was expanded without meeting the destination.
    FrontierExhausted,
    /// More than `limit` nodes were generated.
    NodeLimitExceeded { limit: usize },
}

impl fmt::Display for NoPathReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoPathReason::FrontierExhausted => f.write_str("frontier exhausted"),
            NoPathReason::NodeLimitExceeded { limit } => {
                write!(f, "node limit of {limit} exceeded")
            }
        }
    }
}

#[derive(Clone, Debug)]
pub enum Outcome {
    Found(Path),
    NoPath(NoPathReason),
}

impl Outcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Outcome::Found(path) => Some(path),
            Outcome::NoPath(_) => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            Outcome::Found(path) => Some(path),
            Outcome::NoPath(_) => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }
}

/// Result of one search run together with its diagnostics.
#[derive(Clone, Debug)]
pub struct SearchReport {
    pub outcome: Outcome,
    /// Nodes created during the run, start node included.
    pub nodes_generated: usize,
    /// Nodes moved to the visited set.
    pub nodes_expanded: usize,
}

/// Best-first search over a grid.
///
/// All run state (arena, frontier, visited set and generation counter) lives
/// in this value, so independent searches never share anything. Each call to
/// [`AstarSearch::find`] starts from a clean slate.
pub struct AstarSearch<'g, G: GridOracle + ?Sized> {
    grid: &'g G,
    start: Position,
    destination: Position,
    heuristic: Heuristic,
    arena: NodeArena,
    frontier: Frontier,
    visited: Visited,
}

impl<'g, G: GridOracle + ?Sized> AstarSearch<'g, G> {
    /// Prepares a search from `start` to `destination`.
    ///
    /// Both endpoints must be in bounds and not obstacles; this is not
    /// re-checked here.
    pub fn new(grid: &'g G, start: Position, destination: Position, heuristic: Heuristic) -> Self {
        Self {
            grid,
            start,
            destination,
            heuristic,
            arena: NodeArena::new(),
            frontier: Frontier::new(),
            visited: Visited::new(),
        }
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// Runs with the objective and node limit from `config`.
    pub fn run(&mut self, config: &SearchConfig) -> SearchReport {
        self.find(config.objective, config.node_limit)
    }

    /// Finds a route under `objective`, giving up once more than
    /// `node_limit` nodes have been generated.
    pub fn find(&mut self, objective: Objective, node_limit: usize) -> SearchReport {
        self.reset();

        tracing::debug!(
            target: "search::astar",
            start = %self.start,
            destination = %self.destination,
            heuristic = %self.heuristic,
            objective = %objective,
            node_limit,
            "Search started"
        );

        let outcome = self.expand_until_done(objective, node_limit);
        let nodes_generated = match &outcome {
            Outcome::Found(path) => path.generated(),
            Outcome::NoPath(_) => self.arena.len(),
        };
        let report = SearchReport {
            outcome,
            nodes_generated,
            nodes_expanded: self.visited.len(),
        };

        match &report.outcome {
            Outcome::Found(path) => tracing::debug!(
                target: "search::astar",
                length = path.len(),
                cost = path.cost(),
                nodes_generated = report.nodes_generated,
                nodes_expanded = report.nodes_expanded,
                "Search reached destination"
            ),
            Outcome::NoPath(reason) => tracing::debug!(
                target: "search::astar",
                ?reason,
                nodes_generated = report.nodes_generated,
                nodes_expanded = report.nodes_expanded,
                "Search found no path"
            ),
        }

        report
    }

    fn expand_until_done(&mut self, objective: Objective, node_limit: usize) -> Outcome {
        let root = self.arena.push_start(
            self.start,
            self.heuristic.evaluate(self.start, self.destination),
        );
        self.frontier.insert(&self.arena, root);

        while let Some(current) = self.frontier.pop_min() {
            let node = self.arena.get(current);
            let position = node.position;
            let steps = node.steps;
            let cost = node.cost;
            let model = objective.cost_model(node.heading, node.inertia);

            if position == self.destination {
                let arena = std::mem::take(&mut self.arena);
                return Outcome::Found(Path::reconstruct(arena, current));
            }

            self.visited.insert(&self.arena, current);

            tracing::trace!(
                target: "search::astar",
                node = %current,
                position = %position,
                cost,
                frontier = self.frontier.len(),
                "Expanding"
            );

            for candidate in self.open_neighbours(position) {
                let h = self.heuristic.evaluate(candidate, self.destination);
                let surcharge = model.surcharge(self.grid, position, candidate, h);
                let g = f64::from(steps + 1);
                let cost = g + h + surcharge.amount;

                let id = self
                    .arena
                    .push_child(current, candidate, cost, surcharge.inertia);
                self.frontier.insert(&self.arena, id);

                if self.arena.len() > node_limit {
                    return Outcome::NoPath(NoPathReason::NodeLimitExceeded { limit: node_limit });
                }
            }
        }

        Outcome::NoPath(NoPathReason::FrontierExhausted)
    }

    /// In-bounds, passable neighbours with no node in either set, in
    /// expansion order.
    fn open_neighbours(&self, position: Position) -> ArrayVec<Position, 8> {
        Direction::ALL
            .iter()
            .map(|direction| position.step(direction.offset()))
            .filter(|candidate| {
                self.grid.contains(*candidate)
                    && !self.frontier.contains(*candidate)
                    && !self.visited.contains(*candidate)
                    && !self.grid.is_obstacle(*candidate)
            })
            .collect()
    }

    fn reset(&mut self) {
        self.arena.clear();
        self.frontier.clear();
        self.visited.clear();
    }
}

impl<'g, G: GridOracle + ?Sized> fmt::Debug for AstarSearch<'g, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AstarSearch")
            .field("start", &self.start)
            .field("destination", &self.destination)
            .field("heuristic", &self.heuristic)
            .field("generated", &self.arena.len())
            .finish()
    }
}
