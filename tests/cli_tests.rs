use regex::Regex;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

struct TestContext {
    dir: TempDir,
    inputs_path: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let inputs_path = dir.path().join("inputs.csv");

        let mut file = File::create(&inputs_path).unwrap();
        writeln!(file, "metric,value").unwrap();
        writeln!(file, "pushups,50").unwrap();
        writeln!(file, "pullups,0").unwrap();
        writeln!(file, "plank,105").unwrap();
        writeln!(file, "bmi,19.75").unwrap();
        writeln!(file, "shouldermobility,pass").unwrap();
        writeln!(file, "reflex,275").unwrap();
        writeln!(file, "restinghr,72.5").unwrap();
        writeln!(file, "deadlift,200").unwrap();

        Self { dir, inputs_path }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

fn fitradar(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fitradar"))
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

fn stdout_of(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).to_string()
}

#[test]
fn test_cli_catalog_lists_every_metric() {
    let out = fitradar(&["catalog", "--json"]);
    assert!(out.status.success());

    let groups: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let groups = groups.as_array().unwrap();
    assert_eq!(groups.len(), 5);
    let total: usize = groups
        .iter()
        .map(|g| g[1].as_array().unwrap().len())
        .sum();
    assert_eq!(total, 19);
}

#[test]
fn test_cli_score_table() {
    let ctx = TestContext::new();
    let out = fitradar(&["score", "--inputs", ctx.inputs_path.to_str().unwrap()]);
    assert!(out.status.success());

    let stdout = stdout_of(&out);
    let strength = Regex::new(r"\|\s*Strength\s*\|\s*5\s*\|\s*3\s*\|\s*1\s*\|").unwrap();
    assert!(strength.is_match(&stdout), "stdout was:\n{}", stdout);
    assert!(stdout.contains("deadlift"));
}

#[test]
fn test_cli_score_json_with_calibration_override() {
    let ctx = TestContext::new();
    let out = fitradar(&[
        "score",
        "--json",
        "--inputs",
        ctx.inputs_path.to_str().unwrap(),
        "--plank-min-secs",
        "90",
        "--plank-max-secs",
        "120",
    ]);
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let plank = v["details"]["metrics"]
        .as_array()
        .unwrap()
        .iter()
        .find(|m| m["id"] == "plank")
        .unwrap();
    assert_eq!(plank["outcome"]["score"], 5.0);
    assert_eq!(v["unknownIds"][0], "deadlift");
}

#[test]
fn test_cli_config_file_is_applied() {
    let ctx = TestContext::new();
    let config_path = ctx.path("config.json");
    fs::write(&config_path, r#"{ "report": { "report_title": "Club Report" } }"#).unwrap();

    let out = fitradar(&[
        "report",
        "--config",
        config_path.to_str().unwrap(),
        "--inputs",
        ctx.inputs_path.to_str().unwrap(),
    ]);
    assert!(out.status.success());
    assert!(stdout_of(&out).starts_with("# Club Report"));
}

#[test]
fn test_cli_report_to_file() {
    let ctx = TestContext::new();
    let report_path = ctx.path("report.md");

    let out = fitradar(&[
        "report",
        "--inputs",
        ctx.inputs_path.to_str().unwrap(),
        "--output",
        report_path.to_str().unwrap(),
        "--recorded-at",
        "2026-01-15T10:00:00+00:00",
    ]);
    assert!(out.status.success());

    let md = fs::read_to_string(&report_path).unwrap();
    assert!(md.contains("## Submitted Data"));
    assert!(md.contains("- Wall sit: N/A (seconds)"));
    let date = Regex::new(r"Date Recorded: \d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}").unwrap();
    assert!(date.is_match(&md));
}

#[test]
fn test_cli_report_rejects_empty_inputs() {
    let ctx = TestContext::new();
    let empty = ctx.path("empty.json");
    fs::write(&empty, "{}").unwrap();

    let out = fitradar(&["report", "--inputs", empty.to_str().unwrap()]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("No data available to generate report."));
}

#[test]
fn test_cli_invalid_config_exits_early() {
    let ctx = TestContext::new();
    let out = fitradar(&[
        "score",
        "--inputs",
        ctx.inputs_path.to_str().unwrap(),
        "--wallsit-min-secs",
        "200",
    ]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn test_cli_wizard_from_piped_stdin() {
    let ctx = TestContext::new();
    let saved = ctx.path("saved.json");

    let answers = [
        // Strength, with one invalid value that gets re-asked
        "50", "x", "105", "30", //
        "", "0", "", "", //
        // Aesthetics, then back and forward again
        ":back", //
        "", "", "", "", //
        "18.5", "22", "0.47", "34", "1.4", //
        // Flexibility
        "25", "15", "pass", "90", "head_to_feet", //
        // Coordination
        "60", "275", //
        // Easiness
        "90", "40", "72.5",
    ]
    .join("\n");

    let mut child = Command::new(env!("CARGO_BIN_EXE_fitradar"))
        .args(["wizard", "--save-inputs", saved.to_str().unwrap()])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn binary");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(format!("{}\n", answers).as_bytes())
        .unwrap();
    let out = child.wait_with_output().unwrap();
    let stdout = stdout_of(&out);

    assert!(out.status.success(), "stdout was:\n{}", stdout);
    assert!(stdout.contains("Please enter a valid number for Pull-ups"));
    assert!(stdout.contains("Step 5 of 5"));
    assert!(stdout.contains("RESULTS"));

    let saved: serde_json::Value = serde_json::from_str(&fs::read_to_string(&saved).unwrap()).unwrap();
    assert_eq!(saved.as_object().unwrap().len(), 19);
    assert_eq!(saved["pullups"], "0");
    assert_eq!(saved["backbend"], "head_to_feet");
}
