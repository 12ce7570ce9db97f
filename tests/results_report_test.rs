//! Config files on disk and the JSON results hand-off.

use std::io::Write;
use tempfile::{NamedTempFile, tempdir};
use towers_of_hanoi::{
    DiskCount, GameConfig, GameReport, JsonReporter, PlacementPolicy, ResultsReporter,
    SessionStats, SummaryReporter, TracingReporter, deliver,
};

#[test]
fn test_config_file_round_trip_through_disk() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "player_name = \"Grace\"").unwrap();
    writeln!(file, "placement_policy = \"permissive\"").unwrap();
    writeln!(file, "frame_rate = 30").unwrap();

    let config = GameConfig::load_or_default(file.path()).unwrap();
    assert_eq!(config.player_name().as_deref(), Some("Grace"));
    assert_eq!(*config.placement_policy(), PlacementPolicy::Permissive);
    assert_eq!(*config.frame_rate(), 30);
    assert_eq!(*config.game_over_pause_ms(), 2000);
}

#[test]
fn test_missing_config_file_means_defaults() {
    let dir = tempdir().unwrap();
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_broken_config_file_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "frame_rate = \"fast\"").unwrap();
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Config error: Failed to parse config"));
}

#[test]
fn test_json_reporter_writes_report() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("results.json");
    let report = GameReport::from_stats(SessionStats::new(
        "Ada".to_string(),
        DiskCount::clamped(4),
        17,
    ));

    let mut reporters: Vec<Box<dyn ResultsReporter>> = vec![
        Box::new(TracingReporter),
        Box::new(JsonReporter::new(path.clone())),
    ];
    assert_eq!(deliver(&report, &mut reporters), 2);

    let written = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["player_name"], "Ada");
    assert_eq!(value["disk_count"], 4);
    assert_eq!(value["steps"], 17);
    assert_eq!(value["minimum_steps"], 15);
    assert_eq!(value["optimal"], false);

    let parsed: GameReport = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed, report);
}

#[test]
fn test_summary_reaches_writer() {
    let report = GameReport::from_stats(SessionStats::new(
        "Ada".to_string(),
        DiskCount::DEFAULT,
        7,
    ));
    let mut summary = SummaryReporter::new(Vec::new());
    summary.report(&report).unwrap();
    let text = String::from_utf8(summary.into_inner()).unwrap();
    assert!(text.contains("Minimum Steps: 7"));
}
