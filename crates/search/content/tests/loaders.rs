//! Loading configuration and maps from disk.

use std::io::Write;

use search_content::{ConfigLoader, MapLoader};
use search_core::{
    AstarSearch, ConfigError, GridOracle, Heuristic, Objective, Position, SearchConfig,
};
use tempfile::Builder;

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().expect("temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[test]
fn toml_config_drives_a_search() {
    let config_file = write_temp(
        ".toml",
        r#"
heuristic = "manhattan"
objective = "stealthy"
node_limit = 500

[map]
width = 8
height = 3
"#,
    );
    let map_file = write_temp(".txt", "8 3\n########\nS......D\n########\n");

    let config = ConfigLoader::load(config_file.path()).expect("config");
    let grid = MapLoader::load(map_file.path()).expect("map");
    assert_eq!(config.level.width, grid.dimensions().width);

    let report = AstarSearch::new(&grid, grid.start(), grid.destination(), config.search.heuristic)
        .run(&config.search);
    let path = report.outcome.into_path().expect("corridor route");
    assert_eq!(path.steps(), 7);
}

#[test]
fn legacy_json_config_uses_dotted_keys() {
    let file = write_temp(
        ".json",
        r#"{ "map.width": 40, "map.height": 25, "heuristic": "SSE", "objective": "pretty" }"#,
    );
    let config = ConfigLoader::load(file.path()).expect("config");

    assert_eq!(config.level.width, 40);
    assert_eq!(config.level.height, 25);
    assert_eq!(
        config.search,
        SearchConfig::new()
            .with_heuristic(Heuristic::Sse)
            .with_objective(Objective::Pretty)
    );
}

#[test]
fn unknown_heuristic_is_a_load_error() {
    let file = write_temp(".toml", "heuristic = \"octile\"\n");
    let err = ConfigLoader::load(file.path()).unwrap_err();

    assert_eq!(
        err.downcast_ref::<ConfigError>(),
        Some(&ConfigError::UnknownHeuristic("octile".into()))
    );
}

#[test]
fn ron_map_loads_by_extension() {
    let file = write_temp(
        ".ron",
        "(dimensions: (6, 4), start: (0, 0), destination: (5, 3), obstacles: [(1, 1), (2, 2)])",
    );
    let grid = MapLoader::load(file.path()).expect("map");

    assert_eq!(grid.start(), Position::new(0, 0));
    assert_eq!(grid.destination(), Position::new(5, 3));
    assert_eq!(grid.obstacle_count(), 2);
}

#[test]
fn missing_files_report_the_path() {
    let err = MapLoader::load(std::path::Path::new("/nonexistent/level.txt")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/level.txt"));
}
