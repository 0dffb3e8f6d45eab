use clap::{CommandFactory, FromArgMatches, Parser};
use fitradar::api;
use fitradar::config::{Calibration, Config, ReportParams};
use std::io::Write;
use tempfile::NamedTempFile;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    config: Config,
}

fn parse(args: &[&str]) -> (Config, clap::ArgMatches) {
    let mut argv = vec!["fitradar"];
    argv.extend_from_slice(args);
    let matches = TestCli::command().get_matches_from(argv);
    let cli = TestCli::from_arg_matches(&matches).unwrap();
    (cli.config, matches)
}

fn write_config(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", json).unwrap();
    file
}

#[test]
fn test_cli_defaults_match_struct_defaults() {
    let (config, _) = parse(&[]);
    assert_eq!(config, Config::default());
    assert_eq!(config.report.report_title, "Fitness Assessment Report");
    assert_eq!(config.calibration.plank_max_secs, 180.0);
}

#[test]
fn test_partial_json_keeps_defaults() {
    let file = write_config(r#"{ "calibration": { "plank_max_secs": 240.0 } }"#);
    let config = Config::load_from_file(file.path()).unwrap();

    assert_eq!(config.calibration.plank_max_secs, 240.0);
    assert_eq!(config.calibration.plank_min_secs, 30.0);
    assert_eq!(config.report, ReportParams::default());
}

#[test]
fn test_cli_overrides_file_only_when_typed() {
    let file = write_config(
        r#"{ "calibration": { "plank_min_secs": 45.0, "wallsit_max_secs": 150.0 },
             "report": { "report_title": "Quarterly Check" } }"#,
    );
    let (cli_config, matches) = parse(&["--plank-min-secs", "60"]);

    let config = api::resolve_config(Some(file.path()), &cli_config, Some(&matches)).unwrap();

    // Typed on the command line
    assert_eq!(config.calibration.plank_min_secs, 60.0);
    // From the file, not reset by clap defaults
    assert_eq!(config.calibration.wallsit_max_secs, 150.0);
    assert_eq!(config.report.report_title, "Quarterly Check");
}

#[test]
fn test_without_file_cli_values_are_used() {
    let (cli_config, matches) = parse(&["--report-title", "Mine"]);
    let config = api::resolve_config(None, &cli_config, Some(&matches)).unwrap();
    assert_eq!(config.report.report_title, "Mine");
}

#[test]
fn test_missing_file_is_a_config_error() {
    let err = Config::load_from_file("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().starts_with("Configuration Error"));
}

#[test]
fn test_validate_rejects_inverted_holds() {
    let config = Config {
        calibration: Calibration {
            plank_min_secs: 180.0,
            plank_max_secs: 180.0,
            ..Calibration::default()
        },
        ..Config::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_bad_date_formats() {
    let mut config = Config::default();
    config.report.date_format = "   ".to_string();
    assert!(config.validate().is_err());

    config.report.date_format = "%Y-%Q".to_string();
    assert!(config.validate().is_err());

    config.report.date_format = "%d/%m/%Y".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_non_finite_chart_params() {
    let mut config = Config::default();
    config.report.chart_min = f64::NAN;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.report.chart_max = f64::INFINITY;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.report.chart_step = f64::NAN;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("chart_step"));

    assert!(ReportParams::default().validate().is_ok());
}
