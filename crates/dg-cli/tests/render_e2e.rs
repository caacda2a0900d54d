//! End-to-end tests for the dg binary.
//!
//! Tests the full pipeline: events JSON in, column layout, SVG out.

use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::TempDir;

fn dg_binary() -> String {
    env!("CARGO_BIN_EXE_dg").to_string()
}

const EVENTS_JSON: &str = r#"[
    {"start": 0, "end": 60, "title": "Standup", "location": "Room 4"},
    {"start": 30, "end": 90, "title": "Design review"},
    {"start": 100, "end": 150}
]"#;

/// Render from a file to a file.
#[test]
fn test_render_file_to_file() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("events.json");
    let output = temp.path().join("day.svg");
    std::fs::write(&input, EVENTS_JSON).unwrap();

    let result = Command::new(dg_binary())
        .env("HOME", temp.path())
        .arg("render")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .output()
        .unwrap();
    assert!(
        result.status.success(),
        "dg render should succeed: {}",
        String::from_utf8_lossy(&result.stderr)
    );

    let svg = std::fs::read_to_string(&output).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains("Standup"));
    assert!(svg.contains("Design review"));
}

/// Render from stdin to stdout.
#[test]
fn test_render_stdin_to_stdout() {
    let temp = TempDir::new().unwrap();

    let mut child = Command::new(dg_binary())
        .env("HOME", temp.path())
        .arg("render")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(EVENTS_JSON.as_bytes())
        .unwrap();

    let result = child.wait_with_output().unwrap();
    assert!(result.status.success());

    let svg = String::from_utf8(result.stdout).unwrap();
    assert!(svg.contains(r#"<g class="event">"#));
    assert!(svg.contains("</svg>"));
}

/// The columns command emits machine-readable placements with --json.
#[test]
fn test_columns_json_output() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("events.json");
    std::fs::write(&input, EVENTS_JSON).unwrap();

    let result = Command::new(dg_binary())
        .env("HOME", temp.path())
        .arg("columns")
        .arg("--input")
        .arg(&input)
        .arg("--json")
        .output()
        .unwrap();
    assert!(result.status.success());

    let placements: Vec<serde_json::Value> =
        serde_json::from_slice(&result.stdout).expect("columns --json should emit valid JSON");
    assert_eq!(placements.len(), 3);

    // The two overlapping events share a two-column chunk
    assert_eq!(placements[0]["column"], 0);
    assert_eq!(placements[0]["columns"], 2);
    assert_eq!(placements[1]["column"], 1);
    assert_eq!(placements[1]["columns"], 2);
    assert_eq!(placements[2]["columns"], 1);
    assert_eq!(placements[0]["event"]["title"], "Standup");
}

/// The columns command prints an aligned table by default.
#[test]
fn test_columns_table_output() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("events.json");
    std::fs::write(&input, EVENTS_JSON).unwrap();

    let result = Command::new(dg_binary())
        .env("HOME", temp.path())
        .arg("columns")
        .arg("--input")
        .arg(&input)
        .output()
        .unwrap();
    assert!(result.status.success());

    let table = String::from_utf8(result.stdout).unwrap();
    assert!(table.contains("START"));
    assert!(table.contains("Standup"));
    assert!(table.contains("(untitled)"));
}

/// Malformed input fails with a parse error instead of rendering garbage.
#[test]
fn test_malformed_input_is_rejected() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("events.json");
    std::fs::write(&input, r#"[{"start": 90, "end": 30}]"#).unwrap();

    let result = Command::new(dg_binary())
        .env("HOME", temp.path())
        .arg("render")
        .arg("--input")
        .arg(&input)
        .output()
        .unwrap();
    assert!(!result.status.success());

    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(
        stderr.contains("failed to parse events"),
        "stderr should explain the parse failure: {stderr}"
    );
}

/// An empty event list still produces a valid grid with an axis.
#[test]
fn test_empty_day_renders() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("events.json");
    std::fs::write(&input, "[]").unwrap();

    let result = Command::new(dg_binary())
        .env("HOME", temp.path())
        .arg("render")
        .arg("--input")
        .arg(&input)
        .output()
        .unwrap();
    assert!(result.status.success());

    let svg = String::from_utf8(result.stdout).unwrap();
    assert!(svg.contains(r#"<g class="axis">"#));
    assert!(!svg.contains(r#"<g class="event">"#));
}

/// Theme overrides from a config file reach the renderer.
#[test]
fn test_config_file_overrides_theme() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("events.json");
    let config = temp.path().join("config.toml");
    std::fs::write(&input, "[]").unwrap();
    std::fs::write(&config, "[theme]\nwidth = 300.0\nheight = 300.0\n").unwrap();

    let result = Command::new(dg_binary())
        .env("HOME", temp.path())
        .arg("--config")
        .arg(&config)
        .arg("render")
        .arg("--input")
        .arg(&input)
        .output()
        .unwrap();
    assert!(
        result.status.success(),
        "{}",
        String::from_utf8_lossy(&result.stderr)
    );

    let svg = String::from_utf8(result.stdout).unwrap();
    // 300 + 40 left + 20 right margins
    assert!(svg.contains(r#"width="360""#));
}
