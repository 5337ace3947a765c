//! Snapshot file round-trips and load failure surfacing.

use std::fs;

use transit_graph::core::{GraphError, Station};
use transit_graph::services::algorithm::Dijkstra;
use transit_graph::storage::snapshot::{self, NetworkSnapshot, RouteRecord};

#[test]
fn save_and_load_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("network.json");

    let snapshot = NetworkSnapshot {
        stations: vec!["A".to_string(), "B".to_string(), "C".to_string()],
        routes: vec![
            RouteRecord {
                origin: "A".to_string(),
                destination: "B".to_string(),
                weight: 5.0,
            },
            RouteRecord {
                origin: "B".to_string(),
                destination: "C".to_string(),
                weight: 7.0,
            },
        ],
    };
    let graph = snapshot.build_graph().expect("build");
    snapshot::save_json(&graph, &path).expect("save");

    let loaded = snapshot::load_json(&path).expect("load");
    assert_eq!(NetworkSnapshot::capture(&loaded), snapshot);

    let a = loaded.find_station("A").expect("find").clone();
    let c = loaded.find_station("C").expect("find").clone();
    let result = Dijkstra::shortest_path(&loaded, &a, &c).expect("query");
    let names: Vec<&str> = result
        .stations()
        .expect("path")
        .iter()
        .map(Station::name)
        .collect();
    assert_eq!(names, vec!["A", "B", "C"]);
    assert_eq!(result.total_time(), 12.0);
}

#[test]
fn load_accepts_the_documented_wire_shape() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("network.json");
    fs::write(
        &path,
        r#"{
            "stations": ["A", "B"],
            "routes": [{ "origin": "A", "destination": "B", "weight": 3.5 }]
        }"#,
    )
    .expect("write");

    let graph = snapshot::load_json(&path).expect("load");
    assert_eq!(graph.station_count(), 2);
    assert_eq!(graph.route_count(), 1);
}

#[test]
fn load_surfaces_unknown_route_endpoint() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("network.json");
    fs::write(
        &path,
        r#"{
            "stations": ["A"],
            "routes": [{ "origin": "A", "destination": "Missing", "weight": 1.0 }]
        }"#,
    )
    .expect("write");

    assert!(matches!(
        snapshot::load_json(&path),
        Err(GraphError::UnknownStation(name)) if name == "Missing"
    ));
}

#[test]
fn load_rejects_malformed_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("network.json");
    fs::write(&path, "{ not json").expect("write");

    assert!(matches!(
        snapshot::load_json(&path),
        Err(GraphError::Serialization(_))
    ));
}

#[test]
fn load_reports_missing_file_as_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("does-not-exist.json");

    assert!(matches!(
        snapshot::load_json(&path),
        Err(GraphError::Io(_))
    ));
}
