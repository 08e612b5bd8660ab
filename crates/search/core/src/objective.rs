//! Objective-specific cost shaping.
//!
//! Every candidate node costs `g + h + surcharge`. The surcharge is where the
//! objectives differ: `Basic` adds nothing and keeps A* optimal, `Stealthy`
//! discounts cells next to walls, and `Pretty` rewards straight runs. The
//! latter two are intentionally not admissible; they trade step-optimality
//! for route shape.

use crate::env::GridOracle;
use crate::error::ConfigError;
use crate::state::{Offset, Position};

/// Route shape requested by the operator.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Objective {
    /// Plain A*: shortest route in steps.
    #[default]
    Basic,
    /// Smooth routes: straight runs are favoured, zig-zags penalised.
    Pretty,
    /// Wall-hugging routes.
    Stealthy,
}

impl Objective {
    /// Parses a configuration identifier such as `"stealthy"`.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        value
            .trim()
            .parse()
            .map_err(|_| ConfigError::UnknownObjective(value.to_string()))
    }

    /// Binds the objective to the node being expanded.
    ///
    /// `heading` is the move that reached the expanding node (`None` for the
    /// start node) and `inertia` its straight-run counter.
    pub fn cost_model(self, heading: Option<Offset>, inertia: u32) -> CostModel {
        match self {
            Objective::Basic => CostModel::Basic,
            Objective::Stealthy => CostModel::Stealthy {
                expanding_has_parent: heading.is_some(),
            },
            Objective::Pretty => CostModel::Pretty { heading, inertia },
        }
    }
}

/// Result of scoring one candidate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surcharge {
    /// Additive cost term. May be negative.
    pub amount: f64,
    /// Straight-run counter the candidate node starts with.
    pub inertia: u32,
}

impl Surcharge {
    pub const NONE: Self = Self {
        amount: 0.0,
        inertia: 0,
    };
}

/// Objective bound to the state of one expanding node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CostModel {
    Basic,
    Stealthy { expanding_has_parent: bool },
    Pretty { heading: Option<Offset>, inertia: u32 },
}

impl CostModel {
    /// Share of the heuristic removed for wall-adjacent cells under `Stealthy`.
    pub const STEALTH_DISCOUNT: f64 = 0.10;

    /// Straight moves after which `Pretty` stops shaping the route.
    pub const INERTIA_THRESHOLD: u32 = 8;

    /// `Pretty` surcharge for running straight along a wall.
    pub const HUG_STRAIGHT: f64 = 10.0;
    /// `Pretty` surcharge for turning in open space.
    pub const TURN_OPEN: f64 = 2.0;
    /// `Pretty` surcharge for turning along a wall.
    pub const HUG_TURN: f64 = 13.0;

    /// Computes the surcharge for moving from `expanding` to `candidate`,
    /// whose heuristic value is `heuristic`.
    pub fn surcharge<G>(
        self,
        grid: &G,
        expanding: Position,
        candidate: Position,
        heuristic: f64,
    ) -> Surcharge
    where
        G: GridOracle + ?Sized,
    {
        match self {
            CostModel::Basic => Surcharge::NONE,
            CostModel::Stealthy {
                expanding_has_parent,
            } => {
                if expanding_has_parent && grid.hugs_wall(candidate) {
                    Surcharge {
                        amount: -heuristic * Self::STEALTH_DISCOUNT,
                        inertia: 0,
                    }
                } else {
                    Surcharge::NONE
                }
            }
            CostModel::Pretty { heading, inertia } => {
                let Some(heading) = heading else {
                    return Surcharge::NONE;
                };

                let zags = heading != expanding.offset_to(candidate);
                let inertia = if zags { 0 } else { inertia + 1 };

                if inertia >= Self::INERTIA_THRESHOLD {
                    return Surcharge {
                        amount: 0.0,
                        inertia,
                    };
                }

                let amount = match (grid.hugs_wall(candidate), zags) {
                    (true, false) => Self::HUG_STRAIGHT,
                    (false, true) => Self::TURN_OPEN,
                    (true, true) => Self::HUG_TURN,
                    (false, false) => 0.0,
                };
                Surcharge { amount, inertia }
            }
        }
    }
}
