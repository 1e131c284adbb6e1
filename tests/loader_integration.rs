//! Integration tests for grid files on disk

use std::path::PathBuf;

use schelling::core::error::SchellingError;
use schelling::core::types::Location;
use schelling::core::SimulationParams;
use schelling::simulation::run_simulation;
use schelling::world::{generate_city, parse_grid, read_grid, CityGenConfig};

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

#[test]
fn test_legacy_header_and_plain_files_agree() {
    // sample-writeup.txt carries the old size line
    let with_header = read_grid(&data_path("sample-writeup.txt")).unwrap();
    let contents = std::fs::read_to_string(data_path("sample-writeup.txt")).unwrap();
    let without_header: String = contents.lines().skip(1).map(|l| format!("{}\n", l)).collect();
    let plain = parse_grid(&without_header).unwrap();

    assert_eq!(with_header.size(), 5);
    assert_eq!(with_header.find_mismatch(&plain), None);
}

#[test]
fn test_open_set_extraction_row_major() {
    let grid = read_grid(&data_path("sample-writeup.txt")).unwrap();
    let opens = grid.find_opens();
    assert_eq!(opens.len(), 7);
    assert_eq!(opens[0], Location::new(0, 0));
    assert_eq!(opens[1], Location::new(0, 2));
    assert_eq!(opens[6], Location::new(4, 1));
}

#[test]
fn test_missing_file_reported() {
    match read_grid(&data_path("does-not-exist.txt")) {
        Err(SchellingError::MissingFile(path)) => {
            assert!(path.ends_with("does-not-exist.txt"));
        }
        other => panic!("expected MissingFile, got {:?}", other),
    }
}

#[test]
fn test_written_grid_reads_back() {
    let grid = read_grid(&data_path("grid-ten.txt")).unwrap();
    let reparsed = parse_grid(&grid.to_string()).unwrap();
    assert_eq!(grid, reparsed);
}

#[test]
fn test_generated_city_runs() {
    let config = CityGenConfig {
        size: 12,
        empty_percent: 20,
        group_a_percent: 50,
    };
    let mut grid = generate_city(&config, 2024).unwrap();
    let homeowners = grid.count_occupied();
    let mut opens = grid.find_opens();
    let params = SimulationParams::new(1, 0.5, 0.5, 5);

    run_simulation(&mut grid, &params, &mut opens);

    assert_eq!(grid.count_occupied(), homeowners);
    assert_eq!(opens.len(), grid.find_opens().len());
}

#[test]
fn test_params_file_drives_writeup_run() {
    let params_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/writeup.toml");
    let params = SimulationParams::load(&params_path).unwrap();
    assert_eq!(params, SimulationParams::new(1, 0.44, 0.5, 1));

    let mut grid = read_grid(&data_path("sample-writeup.txt")).unwrap();
    let mut opens = grid.find_opens();
    assert_eq!(run_simulation(&mut grid, &params, &mut opens), 5);
}
