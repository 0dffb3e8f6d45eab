use chrono::{Local, TimeZone};
use fitradar::api;
use fitradar::catalog::Category;
use fitradar::config::ReportParams;
use fitradar::export::{AssessmentReport, ReportFormat};
use fitradar::inputs::RawInputSet;
use fitradar::scorer::Scorer;
use regex::Regex;

fn sample_inputs() -> RawInputSet {
    let mut inputs = RawInputSet::new();
    inputs.insert("pushups", 50);
    inputs.insert("bmi", "22");
    inputs.insert("whr", 0.47);
    inputs.insert("shouldermobility", "pass");
    inputs.insert("reflex", "");
    inputs
}

fn render(report: &AssessmentReport) -> String {
    let mut buf = Vec::new();
    report.write_to(&mut buf, ReportFormat::Markdown).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_empty_inputs_refuse_to_build() {
    let scorer = Scorer::default();
    let err = api::build_report(&scorer, &RawInputSet::new(), None, &ReportParams::default())
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Data Validation Error: No data available to generate report."
    );
}

#[test]
fn test_sections_follow_catalog_order() {
    let scorer = Scorer::default();
    let report = api::build_report(&scorer, &sample_inputs(), None, &ReportParams::default()).unwrap();

    let cats: Vec<Category> = report.sections.iter().map(|s| s.category).collect();
    assert_eq!(cats, scorer.catalog().categories());

    let strength_ids: Vec<&str> = report.sections[0].entries.iter().map(|e| e.id).collect();
    assert_eq!(strength_ids, vec!["pushups", "pullups", "plank", "wallsit"]);

    assert_eq!(report.radar.labels.len(), 5);
    assert_eq!(report.radar.suggested_max, 10.0);
    assert_eq!(report.radar.step, 2.0);
}

#[test]
fn test_missing_and_blank_values_show_na() {
    let scorer = Scorer::default();
    let report = api::build_report(&scorer, &sample_inputs(), None, &ReportParams::default()).unwrap();
    let md = render(&report);

    assert!(md.contains("- Push-ups: 50 (reps)"));
    assert!(md.contains("- Pull-ups: N/A (reps)"));
    assert!(md.contains("- Reflex test: N/A (ms)"));
    // Unitless metrics get no suffix
    assert!(md.contains("- BMI: 22\n"));
    assert!(md.contains("- Waist-to-Height Ratio: 0.47\n"));
    assert!(md.contains("- Shoulder mobility: pass (pass/fail/angle)"));
}

#[test]
fn test_date_line() {
    let scorer = Scorer::default();
    let params = ReportParams::default();

    let undated = api::build_report(&scorer, &sample_inputs(), None, &params).unwrap();
    assert_eq!(undated.date_line(), "Date not recorded");

    let at = Local.with_ymd_and_hms(2026, 5, 17, 8, 5, 0).unwrap();
    let dated = api::build_report(&scorer, &sample_inputs(), Some(at), &params).unwrap();
    assert_eq!(dated.date_line(), "Date Recorded: 2026-05-17 08:05:00");
}

#[test]
fn test_markdown_layout() {
    let scorer = Scorer::default();
    let report = api::build_report(&scorer, &sample_inputs(), None, &ReportParams::default()).unwrap();
    let md = render(&report);

    assert!(md.starts_with("# Fitness Assessment Report\n"));
    let headings: Vec<&str> = md.lines().filter(|l| l.starts_with("### ")).collect();
    assert_eq!(
        headings,
        vec![
            "### Strength",
            "### Aesthetics",
            "### Flexibility",
            "### Coordination",
            "### Easiness"
        ]
    );

    let row = Regex::new(r"(?m)^\| Strength \| (\d+(\.\d)?) \| 1/4 \|$").unwrap();
    let caps = row.captures(&md).expect("strength score row");
    assert_eq!(&caps[1], "10");
}

#[test]
fn test_json_export_carries_the_radar() {
    let scorer = Scorer::default();
    let report = api::build_report(&scorer, &sample_inputs(), None, &ReportParams::default()).unwrap();

    let mut buf = Vec::new();
    report.write_to(&mut buf, ReportFormat::Json).unwrap();
    let v: serde_json::Value = serde_json::from_slice(&buf).unwrap();

    assert_eq!(v["title"], "Fitness Assessment Report");
    assert_eq!(v["radar"]["dataset_label"], "Your Score");
    assert_eq!(v["radar"]["values"].as_array().unwrap().len(), 5);
    assert_eq!(v["sections"][1]["entries"][1]["value"], "22");
    assert!(v["recorded_at"].is_null());
}

#[test]
fn test_tooltips_use_one_decimal() {
    let scorer = Scorer::default();
    let mut inputs = RawInputSet::new();
    inputs.insert("pushups", 11);
    let report = api::build_report(&scorer, &inputs, None, &ReportParams::default()).unwrap();

    // 11 push-ups score 2.2
    assert_eq!(report.radar.tooltip(0).unwrap(), "Your Score: 2.2");
    assert_eq!(report.radar.tooltip(1).unwrap(), "Your Score: 0");
    assert!(report.radar.tooltip(9).is_none());
}

#[test]
fn test_custom_title_and_date_format() {
    let scorer = Scorer::default();
    let params = ReportParams {
        report_title: "Spring Check-in".to_string(),
        date_format: "%d/%m/%Y".to_string(),
        ..ReportParams::default()
    };
    let at = Local.with_ymd_and_hms(2026, 4, 2, 12, 0, 0).unwrap();
    let report = api::build_report(&scorer, &sample_inputs(), Some(at), &params).unwrap();

    assert_eq!(report.title, "Spring Check-in");
    assert_eq!(report.recorded_at.as_deref(), Some("02/04/2026"));
}

#[test]
fn test_saved_report_gets_the_format_extension() {
    let dir = tempfile::tempdir().unwrap();
    let scorer = Scorer::default();
    let report = api::build_report(&scorer, &sample_inputs(), None, &ReportParams::default()).unwrap();

    let written = api::save_report(&report, dir.path().join("report"), ReportFormat::Json).unwrap();
    assert_eq!(written, dir.path().join("report.json"));
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&written).unwrap()).unwrap();
    assert_eq!(json["title"], report.title.as_str());

    // An explicit extension is kept as given
    let written = api::save_report(&report, dir.path().join("out.txt"), ReportFormat::Markdown).unwrap();
    assert_eq!(written, dir.path().join("out.txt"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_write_failures_surface_for_every_format() {
    let scorer = Scorer::default();
    let report = api::build_report(&scorer, &sample_inputs(), None, &ReportParams::default()).unwrap();

    // /dev/full accepts the open but fails every write
    assert!(api::save_report(&report, "/dev/full", ReportFormat::Markdown).is_err());
    assert!(api::save_report(&report, "/dev/full", ReportFormat::Json).is_err());
}
