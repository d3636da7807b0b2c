//! End-to-end tests for the tl binary.
//!
//! Tests the full pipeline: projects JSON → sweep → mapping → SVG output.

use std::process::Command;

use tempfile::TempDir;

fn tl_binary() -> String {
    env!("CARGO_BIN_EXE_tl").to_string()
}

/// Writes a projects fixture into the temp directory.
fn write_projects(temp: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = temp.path().join("projects.json");
    std::fs::write(&path, contents).expect("failed to write fixture");
    path
}

/// Runs tl with HOME pointed at the temp directory so a developer's real
/// config file never leaks into the test.
fn tl(temp: &TempDir, args: &[&std::ffi::OsStr]) -> std::process::Output {
    Command::new(tl_binary())
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join(".config"))
        .args(args)
        .output()
        .expect("failed to run tl")
}

const TWO_PROJECTS: &str = r#"[
    {"name": "alpha", "start": "2024-01-01", "end": "2024-01-10"},
    {"start": "2024-01-05", "end": "2024-01-15"}
]"#;

#[test]
fn render_writes_an_svg_file() {
    let temp = TempDir::new().unwrap();
    let projects = write_projects(&temp, TWO_PROJECTS);
    let out = temp.path().join("timeline.svg");

    let output = tl(
        &temp,
        &[
            "render".as_ref(),
            projects.as_os_str(),
            "--out".as_ref(),
            out.as_os_str(),
        ],
    );
    assert!(
        output.status.success(),
        "render should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let svg = std::fs::read_to_string(&out).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("linearGradient"));
    assert!(svg.contains(">alpha</text>"));
    assert!(svg.contains(">Project 2</text>"));
    assert!(svg.contains(">2024-01-01</text>"));
    assert!(svg.contains(">2024-01-15</text>"));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn render_defaults_to_stdout() {
    let temp = TempDir::new().unwrap();
    let projects = write_projects(&temp, TWO_PROJECTS);

    let output = tl(&temp, &["render".as_ref(), projects.as_os_str()]);
    assert!(output.status.success());

    let svg = String::from_utf8(output.stdout).unwrap();
    assert!(svg.starts_with("<svg"));
}

#[test]
fn width_override_resizes_the_canvas() {
    let temp = TempDir::new().unwrap();
    let projects = write_projects(&temp, TWO_PROJECTS);

    let output = tl(
        &temp,
        &[
            "render".as_ref(),
            projects.as_os_str(),
            "--width".as_ref(),
            "1000".as_ref(),
        ],
    );
    assert!(output.status.success());

    let svg = String::from_utf8(output.stdout).unwrap();
    assert!(svg.contains(r#"width="1000""#));
}

#[test]
fn entries_json_parses_back() {
    let temp = TempDir::new().unwrap();
    let projects = write_projects(&temp, TWO_PROJECTS);

    let output = tl(
        &temp,
        &["entries".as_ref(), projects.as_os_str(), "--json".as_ref()],
    );
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = parsed.as_array().expect("entries should be an array");
    // Three segments and two branches for the overlapping pair.
    assert_eq!(entries.len(), 5);
    assert_eq!(entries[0]["type"], "segment");
    assert_eq!(entries[0]["active"], 1);
    assert_eq!(entries[1]["active"], 2);
}

#[test]
fn empty_project_list_fails_with_a_clear_message() {
    let temp = TempDir::new().unwrap();
    let projects = write_projects(&temp, "[]");

    let output = tl(&temp, &["render".as_ref(), projects.as_os_str()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no projects supplied"));
}

#[test]
fn reversed_project_fails_with_a_clear_message() {
    let temp = TempDir::new().unwrap();
    let projects = write_projects(
        &temp,
        r#"[{"start": "2024-01-10", "end": "2024-01-01"}]"#,
    );

    let output = tl(&temp, &["render".as_ref(), projects.as_os_str()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("ends before it starts"));
}

#[test]
fn instantaneous_only_input_reports_empty_span() {
    let temp = TempDir::new().unwrap();
    let projects = write_projects(
        &temp,
        r#"[{"start": "2024-01-05", "end": "2024-01-05"}]"#,
    );

    let output = tl(&temp, &["render".as_ref(), projects.as_os_str()]);
    assert!(!output.status.success());
    assert!(
        String::from_utf8_lossy(&output.stderr)
            .contains("no finite-duration segment")
    );
}
