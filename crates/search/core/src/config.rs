use crate::heuristic::Heuristic;
use crate::objective::Objective;
use crate::search::UNLIMITED;

/// Settings consumed once at search start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub heuristic: Heuristic,
    pub objective: Objective,
    /// Maximum number of generated nodes before the search gives up.
    pub node_limit: usize,
}

impl SearchConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_HEURISTIC: Heuristic = Heuristic::Euclidean;
    pub const DEFAULT_OBJECTIVE: Objective = Objective::Basic;
    pub const DEFAULT_NODE_LIMIT: usize = UNLIMITED;

    pub fn new() -> Self {
        Self {
            heuristic: Self::DEFAULT_HEURISTIC,
            objective: Self::DEFAULT_OBJECTIVE,
            node_limit: Self::DEFAULT_NODE_LIMIT,
        }
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objective = objective;
        self
    }

    pub fn with_node_limit(mut self, node_limit: usize) -> Self {
        self.node_limit = node_limit;
        self
    }

    /// True when the node limit can never stop a search.
    pub fn is_unlimited(&self) -> bool {
        self.node_limit == UNLIMITED
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}
