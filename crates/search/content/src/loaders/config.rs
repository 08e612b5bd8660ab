//! Search configuration loader.
//!
//! TOML is the primary format:
//!
//! ```toml
//! heuristic = "manhattan"
//! objective = "pretty"
//! node_limit = 10000
//!
//! [map]
//! width = 30
//! height = 20
//! barrier_factor = 0.4
//! ```
//!
//! Files ending in `.json` use the legacy flat layout with dotted keys
//! (`"map.width"`, `"map.height"`). Every key is optional.

use std::path::Path;

use anyhow::Context;
use search_core::{ConfigError, Heuristic, Objective, SearchConfig};
use serde::Deserialize;

use crate::generator::LevelConfig;
use crate::loaders::{LoadResult, has_extension, read_file};

/// Everything a run needs: how to search and what level to generate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub level: LevelConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigToml {
    heuristic: Option<String>,
    objective: Option<String>,
    node_limit: Option<usize>,
    map: Option<MapToml>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct MapToml {
    width: Option<u32>,
    height: Option<u32>,
    barrier_factor: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigJson {
    heuristic: Option<String>,
    objective: Option<String>,
    node_limit: Option<usize>,
    #[serde(rename = "map.width")]
    width: Option<u32>,
    #[serde(rename = "map.height")]
    height: Option<u32>,
    #[serde(rename = "map.barrier_factor")]
    barrier_factor: Option<f64>,
}

/// Format-independent view of a configuration file.
#[derive(Debug, Default)]
struct RawConfig {
    heuristic: Option<String>,
    objective: Option<String>,
    node_limit: Option<usize>,
    width: Option<u32>,
    height: Option<u32>,
    barrier_factor: Option<f64>,
}

impl From<ConfigToml> for RawConfig {
    fn from(file: ConfigToml) -> Self {
        let map = file.map.unwrap_or_default();
        Self {
            heuristic: file.heuristic,
            objective: file.objective,
            node_limit: file.node_limit,
            width: map.width,
            height: map.height,
            barrier_factor: map.barrier_factor,
        }
    }
}

impl From<ConfigJson> for RawConfig {
    fn from(file: ConfigJson) -> Self {
        Self {
            heuristic: file.heuristic,
            objective: file.objective,
            node_limit: file.node_limit,
            width: file.width,
            height: file.height,
            barrier_factor: file.barrier_factor,
        }
    }
}

impl RawConfig {
    fn resolve(self) -> Result<AppConfig, ConfigError> {
        let mut search = SearchConfig::new();
        if let Some(name) = self.heuristic {
            search.heuristic = Heuristic::parse(&name)?;
        }
        if let Some(name) = self.objective {
            search.objective = Objective::parse(&name)?;
        }
        if let Some(limit) = self.node_limit {
            search.node_limit = limit;
        }

        let defaults = LevelConfig::default();
        let level = LevelConfig {
            width: self.width.unwrap_or(defaults.width),
            height: self.height.unwrap_or(defaults.height),
            barrier_factor: self.barrier_factor.unwrap_or(defaults.barrier_factor),
        };
        if level.width == 0 || level.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: level.width,
                height: level.height,
            });
        }

        Ok(AppConfig { search, level })
    }
}

/// Loader for search configuration files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file, or a legacy JSON file when the
    /// extension is `.json`.
    pub fn load(path: &Path) -> LoadResult<AppConfig> {
        let content = read_file(path)?;
        let parsed = if has_extension(path, "json") {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        };
        let config =
            parsed.with_context(|| format!("Invalid configuration in {}", path.display()))?;

        tracing::info!(
            target: "search::content",
            path = %path.display(),
            heuristic = %config.search.heuristic,
            objective = %config.search.objective,
            width = config.level.width,
            height = config.level.height,
            "Configuration loaded"
        );

        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> LoadResult<AppConfig> {
        let file: ConfigToml = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        Ok(RawConfig::from(file).resolve()?)
    }

    pub fn from_json_str(content: &str) -> LoadResult<AppConfig> {
        let file: ConfigJson = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config JSON: {}", e))?;
        Ok(RawConfig::from(file).resolve()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use search_core::UNLIMITED;

    #[test]
    fn toml_sets_every_field() {
        let config = ConfigLoader::from_toml_str(
            r#"
            heuristic = "checkers"
            objective = "stealthy"
            node_limit = 500

            [map]
            width = 32
            height = 16
            barrier_factor = 0.3
            "#,
        )
        .expect("valid config");

        assert_eq!(config.search.heuristic, Heuristic::Checkers);
        assert_eq!(config.search.objective, Objective::Stealthy);
        assert_eq!(config.search.node_limit, 500);
        assert_eq!(config.level, LevelConfig::new(32, 16).with_barrier_factor(0.3));
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config = ConfigLoader::from_toml_str("").expect("valid config");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.search.node_limit, UNLIMITED);
        assert_eq!(config.level.width, 20);
    }

    #[test]
    fn legacy_json_reads_dotted_keys() {
        let config = ConfigLoader::from_json_str(
            r#"{ "map.width": 40, "map.height": 25, "heuristic": "sse", "objective": "pretty" }"#,
        )
        .expect("valid config");

        assert_eq!(config.search.heuristic, Heuristic::Sse);
        assert_eq!(config.search.objective, Objective::Pretty);
        assert_eq!((config.level.width, config.level.height), (40, 25));
    }

    #[test]
    fn unknown_identifiers_fail_at_load() {
        let err = ConfigLoader::from_toml_str(r#"heuristic = "octile""#).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::UnknownHeuristic("octile".to_string()))
        );

        let err = ConfigLoader::from_json_str(r#"{ "objective": "fast" }"#).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::UnknownObjective("fast".to_string()))
        );
    }

    #[test]
    fn zero_sized_map_is_rejected() {
        let err = ConfigLoader::from_toml_str("[map]\nwidth = 0").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::InvalidDimensions { width: 0, .. })
        ));
    }
}
