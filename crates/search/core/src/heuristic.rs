//! Distance estimates from a candidate cell to the destination.

use crate::error::ConfigError;
use crate::state::Position;

/// Metric used to estimate the remaining distance to the destination.
///
/// Selected once per search from configuration.
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
pub enum Heuristic {
    /// Straight-line distance.
    #[default]
    Euclidean,
    /// Sum of axis distances.
    Manhattan,
    /// King-move distance (Chebyshev). Admissible for unit-cost 8-way moves.
    Checkers,
    /// Squared straight-line distance. Over-estimates beyond one cell, so it
    /// is not admissible.
    Sse,
}

impl Heuristic {
    /// Parses a configuration identifier such as `"manhattan"`.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        value
            .trim()
            .parse()
            .map_err(|_| ConfigError::UnknownHeuristic(value.to_string()))
    }

    /// Estimated remaining distance from `from` to `to`. Never negative.
    pub fn evaluate(self, from: Position, to: Position) -> f64 {
        let dx = f64::from(from.x - to.x);
        let dy = f64::from(from.y - to.y);

        match self {
            Heuristic::Euclidean => (dx * dx + dy * dy).sqrt(),
            Heuristic::Manhattan => dx.abs() + dy.abs(),
            Heuristic::Checkers => dx.abs().max(dy.abs()),
            Heuristic::Sse => dx * dx + dy * dy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FROM: Position = Position::new(1, 2);
    const TO: Position = Position::new(4, 6);

    #[test]
    fn metrics_agree_with_their_definitions() {
        assert_eq!(Heuristic::Euclidean.evaluate(FROM, TO), 5.0);
        assert_eq!(Heuristic::Manhattan.evaluate(FROM, TO), 7.0);
        assert_eq!(Heuristic::Checkers.evaluate(FROM, TO), 4.0);
        assert_eq!(Heuristic::Sse.evaluate(FROM, TO), 25.0);
    }

    #[test]
    fn metrics_are_symmetric_and_zero_at_goal() {
        for heuristic in [
            Heuristic::Euclidean,
            Heuristic::Manhattan,
            Heuristic::Checkers,
            Heuristic::Sse,
        ] {
            assert_eq!(heuristic.evaluate(TO, TO), 0.0);
            assert_eq!(heuristic.evaluate(FROM, TO), heuristic.evaluate(TO, FROM));
        }
    }

    #[test]
    fn parse_accepts_known_names_only() {
        assert_eq!(Heuristic::parse("checkers"), Ok(Heuristic::Checkers));
        assert_eq!(Heuristic::parse("SSE"), Ok(Heuristic::Sse));
        assert_eq!(Heuristic::parse(" manhattan "), Ok(Heuristic::Manhattan));
        assert_eq!(
            Heuristic::parse("octile"),
            Err(ConfigError::UnknownHeuristic("octile".to_string()))
        );
        assert_eq!(Heuristic::Euclidean.to_string(), "euclidean");
    }
}
