use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{SAMPLE_JSON, rjv, sample_fixture, temp_out, write_fixture};

#[test]
fn test_timeline_groups_by_month() {
    let data = sample_fixture("cli_timeline");

    rjv()
        .args(["--data", &data, "timeline"])
        .assert()
        .success()
        .stdout(contains("TIMELINE"))
        .stdout(contains("4 entries"))
        .stdout(contains("August 2024"))
        .stdout(contains("June 2024"))
        .stdout(contains("Beach Day"))
        .stdout(contains("Swam at Lanikai. Sunset walk."))
        .stdout(contains("▶ SAT 31"));
}

#[test]
fn test_timeline_filters() {
    let data = sample_fixture("cli_timeline_filters");

    rjv()
        .args(["--data", &data, "timeline", "--period", "2024-06"])
        .assert()
        .success()
        .stdout(contains("Road trip").and(contains("Beach Day").not()));

    rjv()
        .args(["--data", &data, "timeline", "--tag", "BEACH"])
        .assert()
        .success()
        .stdout(contains("Beach Day").and(contains("Road trip").not()));

    rjv()
        .args(["--data", &data, "timeline", "--journal", "travel"])
        .assert()
        .success()
        .stdout(contains("Road trip").and(contains("Morning notes").not()));

    rjv()
        .args(["--data", &data, "timeline", "--starred"])
        .assert()
        .success()
        .stdout(contains("1 entries"));
}

#[test]
fn test_timeline_invalid_period_fails() {
    let data = sample_fixture("cli_invalid_period");

    rjv()
        .args(["--data", &data, "timeline", "--period", "2024-13"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn test_missing_document_shows_empty_state() {
    rjv()
        .args(["--data", "/definitely/not/here/journal.json", "timeline"])
        .assert()
        .failure()
        .stdout(contains(
            "Unable to load journal entries. Make sure you have exported your journal data.",
        ))
        .stderr(contains("Unable to load journal data"));
}

#[test]
fn test_malformed_document_shows_empty_state() {
    let data = write_fixture("cli_malformed", "json", "{ \"entries\": [ ");

    rjv()
        .args(["--data", &data, "calendar"])
        .assert()
        .failure()
        .stdout(contains("Unable to load journal entries"));
}

#[test]
fn test_script_wrapped_document() {
    let wrapped = format!("const JOURNAL_DATA = {};\n", SAMPLE_JSON);
    let data = write_fixture("cli_wrapped", "js", &wrapped);

    rjv()
        .args(["--data", &data, "timeline"])
        .assert()
        .success()
        .stdout(contains("Beach Day"));
}

#[test]
fn test_calendar_lists_every_month() {
    let data = sample_fixture("cli_calendar");

    rjv()
        .args(["--data", &data, "calendar"])
        .assert()
        .success()
        .stdout(contains("3 months"))
        .stdout(contains("August 2024"))
        .stdout(contains("July 2024"))
        .stdout(contains("June 2024"))
        .stdout(contains("2024-08-31 Beach Day"))
        .stdout(contains("2024-08-14 Morning notes"));
}

#[test]
fn test_media_gallery_filter() {
    let data = sample_fixture("cli_media");

    rjv()
        .args(["--data", &data, "--media", "media/", "media"])
        .assert()
        .success()
        .stdout(contains("filter: all (2 of 2)"))
        .stdout(contains("media/a1.jpg"))
        .stdout(contains("media/v1.mov"));

    rjv()
        .args(["--data", &data, "--media", "media/", "media", "--filter", "video"])
        .assert()
        .success()
        .stdout(contains("filter: video (1 of 2)"))
        .stdout(contains("media/v1.mov"))
        .stdout(contains("media/a1.jpg").not())
        .stdout(contains("1 hidden by filter"));
}

#[test]
fn test_map_fits_viewport() {
    let data = sample_fixture("cli_map");

    rjv()
        .args(["--data", &data, "map"])
        .assert()
        .success()
        .stdout(contains("2 entries with location"))
        .stdout(contains("viewport 21.3500"))
        .stdout(contains("Beach Day"));
}

#[test]
fn test_map_without_locations_keeps_default_center() {
    let data = write_fixture(
        "cli_map_empty",
        "json",
        r#"{ "entries": [ { "uuid": "x", "text": "Indoors", "creationDate": "2024-01-01T10:00:00Z" } ] }"#,
    );

    rjv()
        .args(["--data", &data, "map"])
        .assert()
        .success()
        .stdout(contains("No entries with location"))
        .stdout(contains("39.8283"));
}

#[test]
fn test_show_defaults_to_newest_on_wide_surface() {
    let data = sample_fixture("cli_show_newest");

    rjv()
        .args(["--data", &data, "show"])
        .assert()
        .success()
        .stdout(contains("Beach Day"))
        .stdout(contains("Saturday, August 31, 2024 at 2:30 PM"))
        .stdout(contains("📍 Lanikai Beach, Kailua"))
        .stdout(contains("⛅ Partly Cloudy • 82°F"))
        .stdout(contains("beach, summer"));
}

#[test]
fn test_show_by_id() {
    let data = sample_fixture("cli_show_id");

    rjv()
        .args(["--data", &data, "show", "e2"])
        .assert()
        .success()
        .stdout(contains("Morning notes"))
        .stdout(contains("Coffee with [Ana](https://example.org)"))
        .stdout(contains("📍 Honolulu"));
}

#[test]
fn test_show_unknown_id_warns() {
    let data = sample_fixture("cli_show_unknown");

    rjv()
        .args(["--data", &data, "show", "nonexistent-uuid"])
        .assert()
        .success()
        .stderr(contains("No entry with id 'nonexistent-uuid'"))
        .stdout(contains("Beach Day").not());
}

#[test]
fn test_show_on_narrow_surface() {
    let data = sample_fixture("cli_show_narrow");

    rjv()
        .args(["--data", &data, "--narrow", "show", "e3"])
        .assert()
        .success()
        .stdout(contains("Road trip"))
        .stdout(contains("Sunday, June 2, 2024 at 6:00 PM"));

    rjv()
        .args(["--data", &data, "--narrow", "show"])
        .assert()
        .success()
        .stdout(contains("Pass an entry id"));
}

#[test]
fn test_stats_summary() {
    let data = sample_fixture("cli_stats");

    rjv()
        .args(["--data", &data, "stats"])
        .assert()
        .success()
        .stdout(contains("Exported:"))
        .stdout(contains("2024-09-01T10:00:00Z"))
        .stdout(contains("3 dated"))
        .stdout(contains("photo=1, video=1"));
}

#[test]
fn test_export_map_csv() {
    let data = sample_fixture("cli_export_map");
    let out = temp_out("cli_export_map", "csv");

    rjv()
        .args([
            "--data", &data, "--media", "photos/", "export", "--view", "map", "--format",
            "csv", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("uuid,latitude,longitude,title,date,photo"));
    assert!(content.contains("e1,21.3931,-157.7154,Beach Day"));
    assert!(content.contains("photos/a1.jpg"));
    assert!(content.contains("e2,"));
    assert!(!content.contains("e4,"));
}

#[test]
fn test_export_calendar_json_includes_empty_days() {
    let data = sample_fixture("cli_export_calendar");
    let out = temp_out("cli_export_calendar", "json");

    rjv()
        .args([
            "--data", &data, "export", "--view", "calendar", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array");

    // August + July + June 2024
    assert_eq!(rows.len(), 31 + 31 + 30);
    assert!(
        rows.iter()
            .any(|r| r["date"] == "2024-07-15" && r["entries"] == 0)
    );
    assert!(
        rows.iter()
            .any(|r| r["date"] == "2024-08-31" && r["titles"] == "Beach Day")
    );
}

#[test]
fn test_export_timeline_with_period() {
    let data = sample_fixture("cli_export_timeline");
    let out = temp_out("cli_export_timeline", "json");

    rjv()
        .args([
            "--data", &data, "export", "--file", &out, "--period", "2024-08",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"month\": \"August 2024\""));
    assert!(content.contains("\"tags\": \"beach; summer\""));
    assert!(!content.contains("Road trip"));
}

#[test]
fn test_export_requires_absolute_path() {
    let data = sample_fixture("cli_export_relative");

    rjv()
        .args([
            "--data",
            &data,
            "export",
            "--file",
            "relative/out.json",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_init_in_test_mode() {
    rjv()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("Config file"))
        .stdout(contains("initialization completed"));
}

#[test]
fn test_config_print() {
    rjv()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("data_path"))
        .stdout(contains("cluster_radius"));
}
