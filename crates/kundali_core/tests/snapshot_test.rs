//! Snapshot loading from disk.

use std::io::Write;

use chrono::{TimeZone, Utc};
use kundali_core::{ALL_BODIES, Body, EphemerisError, EphemerisPort, SnapshotEphemeris};

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write");
    file
}

#[test]
fn load_full_snapshot() {
    let doc = r#"{
        "utc": "1990-06-15T10:00:00Z",
        "sidereal_time_hours": 3.25,
        "bodies": {
            "Sun": [0.1, 0.9, 0.4],
            "Moon": [-0.5, 0.5, 0.2],
            "Mars": [0.3, -0.8, -0.3],
            "Mercury": [0.2, 0.9, 0.4],
            "Jupiter": [-0.1, 0.9, 0.4],
            "Venus": [0.4, 0.8, 0.3],
            "Saturn": [0.3, -0.9, -0.4]
        }
    }"#;
    let file = write_temp(doc);
    let eph = SnapshotEphemeris::load(file.path()).expect("load");
    let utc = Utc.with_ymd_and_hms(1990, 6, 15, 10, 0, 0).unwrap();

    for body in ALL_BODIES {
        assert!(eph.geocentric_vector(body, &utc).is_ok(), "{body} missing");
    }
    assert_eq!(eph.sidereal_time_hours(&utc).unwrap(), 3.25);
    assert_eq!(eph.snapshot().bodies[&Body::Moon], [-0.5, 0.5, 0.2]);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = SnapshotEphemeris::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, EphemerisError::Io(_)), "got {err:?}");
}

#[test]
fn malformed_json_is_snapshot_error() {
    let file = write_temp("{ not json");
    let err = SnapshotEphemeris::load(file.path()).unwrap_err();
    assert!(matches!(err, EphemerisError::Snapshot(_)), "got {err:?}");
}

#[test]
fn snapshot_serializes_back() {
    let doc = r#"{"utc":"2000-01-01T06:30:00Z","bodies":{"Venus":[1.0,0.0,0.0]}}"#;
    let eph = SnapshotEphemeris::from_json_str(doc).unwrap();
    let json = serde_json::to_string(eph.snapshot()).unwrap();
    assert!(json.contains("\"Venus\""), "{json}");
    assert!(!json.contains("sidereal_time_hours"), "{json}");
}
