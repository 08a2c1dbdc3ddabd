use formation_data::{Color, Position, SnapshotError, parse_snapshot};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

#[test]
fn parses_file_with_header() {
    let snapshot = parse_snapshot(fixture("with_header.csv")).unwrap();

    let names: Vec<_> = snapshot.names().collect();
    assert_eq!(names, vec!["Drone 1", "Drone 2", "Drone 3", "Drone 4"]);

    let drone4 = snapshot.get("Drone 4").unwrap();
    assert_eq!(drone4.position, Position::new(-3.25, 0.01, 10.0));
    assert_eq!(drone4.color, Color::new(0, 0, 255));
    assert_eq!(snapshot.get("Drone 3").unwrap().color, Color::WHITE);
    assert_eq!(
        snapshot.color_channels(),
        vec![255, 0, 0, 0, 255, 0, 255, 255, 255, 0, 0, 255]
    );
}

#[test]
fn parses_file_without_header() {
    let snapshot = parse_snapshot(fixture("no_header.csv")).unwrap();

    assert_eq!(snapshot.len(), 3);
    let entries = snapshot.clone().into_entries();
    assert_eq!(entries[0].0, "Node1");
    assert_eq!(entries[0].1.position, Position::new(1.0, 2.0, 3.0));
    assert_eq!(entries[1].1.color, Color::new(7, 8, 9));
    assert_eq!(entries[2].1.position, Position::new(-1.5, 0.0, 2.25));
}

#[test]
fn rejects_duplicate_names() {
    let err = parse_snapshot(fixture("duplicate.csv")).unwrap_err();
    match err {
        SnapshotError::DuplicateName { name, line, path } => {
            assert_eq!(name, "P1");
            assert_eq!(line, 4);
            assert_eq!(path, fixture("duplicate.csv"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn reports_path_and_row_for_malformed_content() {
    let path = fixture("malformed.csv");
    let message = parse_snapshot(&path).unwrap_err().to_string();

    assert!(message.contains(&format!("{:?}", path)), "{message}");
    assert!(message.contains(r#"["P1", "abc", "2.0", "3.0"]"#), "{message}");
}

#[test]
fn header_only_file_is_empty() {
    let snapshot = parse_snapshot(fixture("header_only.csv")).unwrap();
    assert!(snapshot.is_empty());
}

#[test]
fn parsing_is_idempotent() {
    let first = parse_snapshot(fixture("with_header.csv")).unwrap();
    let second = parse_snapshot(fixture("with_header.csv")).unwrap();

    assert_eq!(first, second);
    assert!(first.iter().eq(second.iter()));
}

#[test]
fn serializes_in_file_order() {
    let snapshot = parse_snapshot(fixture("no_header.csv")).unwrap();
    let json = serde_json::to_string(&snapshot).unwrap();

    let node1 = json.find("Node1").unwrap();
    let node2 = json.find("Node2").unwrap();
    let node3 = json.find("Node3").unwrap();
    assert!(node1 < node2 && node2 < node3, "{json}");
}
