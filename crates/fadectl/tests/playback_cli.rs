use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

const CONFIG: &str = r#"
version = 1

[defaults]
curve = "construct"

[curves.construct]

[[curves.construct.keys]]
time = 0.0
value = 0.0

[[curves.construct.keys]]
time = 1.0
value = 1.0
"#;

fn write_config(root: &TempDir, contents: &str) -> PathBuf {
    let path = root.path().join("curves.toml");
    fs::write(&path, contents).unwrap();
    path
}

fn fadectl() -> Command {
    Command::new(env!("CARGO_BIN_EXE_fadectl"))
}

#[test]
fn fixed_delta_playback_emits_expected_samples() {
    let root = TempDir::new().unwrap();
    let config = write_config(&root, CONFIG);

    let output = fadectl()
        .arg(&config)
        .args(["--direction", "materialize", "--fixed-delta", "0.5"])
        .output()
        .expect("failed to run fadectl");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "_MaterializationAmount = 0.000000",
            "_MaterializationAmount = 0.500000",
            "_MaterializationAmount = 1.000000",
            "_MaterializationAmount = 1.000000",
        ]
    );
}

#[test]
fn json_playback_emits_one_object_per_write() {
    let root = TempDir::new().unwrap();
    let config = write_config(&root, CONFIG);

    let output = fadectl()
        .arg(&config)
        .args(["--direction", "unmaterialize", "--fixed-delta", "0.5", "--json"])
        .output()
        .expect("failed to run fadectl");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let values: Vec<f64> = stdout
        .lines()
        .map(|line| {
            let parsed: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(parsed["parameter"], "_MaterializationAmount");
            parsed["value"].as_f64().unwrap()
        })
        .collect();
    assert_eq!(values, vec![1.0, 0.5, 0.0, 0.0]);
}

#[test]
fn no_direction_and_no_on_load_plays_nothing() {
    let root = TempDir::new().unwrap();
    let config = write_config(&root, CONFIG);

    let output = fadectl()
        .arg(&config)
        .args(["--fixed-delta", "0.5"])
        .output()
        .expect("failed to run fadectl");

    assert!(output.status.success());
    assert!(output.stdout.is_empty(), "nothing to play, nothing written");
}

#[test]
fn check_reports_curve_summary() {
    let root = TempDir::new().unwrap();
    let config = write_config(&root, CONFIG);

    let output = fadectl()
        .arg("check")
        .arg(&config)
        .output()
        .expect("failed to run fadectl check");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("construct"));
    assert!(stdout.contains("domain=[0, 1.000]"));
    assert!(stdout.contains("Default curve: construct"));
}

#[test]
fn check_rejects_invalid_config() {
    let root = TempDir::new().unwrap();
    let config = write_config(
        &root,
        r#"
version = 1

[curves.broken]

[[curves.broken.keys]]
time = 1.0
value = 0.0

[[curves.broken.keys]]
time = 0.5
value = 1.0
"#,
    );

    let output = fadectl()
        .arg("check")
        .arg(&config)
        .output()
        .expect("failed to run fadectl check");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("strictly increasing"));
}
