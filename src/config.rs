use crate::error::{FitRadarError, FrResult};
use crate::export::is_valid_date_format;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub calibration: Calibration,
    #[command(flatten)]
    pub report: ReportParams,
}

/// Thresholds for the timed strength holds. Everything else in the catalog
/// is fixed.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Calibration {
    // Plank: 0 points at min, 10 at max
    #[arg(long, default_value_t = 30.0)]
    pub plank_min_secs: f64,
    #[arg(long, default_value_t = 180.0)]
    pub plank_max_secs: f64,

    // Wall sit
    #[arg(long, default_value_t = 30.0)]
    pub wallsit_min_secs: f64,
    #[arg(long, default_value_t = 180.0)]
    pub wallsit_max_secs: f64,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            plank_min_secs: 30.0,
            plank_max_secs: 180.0,
            wallsit_min_secs: 30.0,
            wallsit_max_secs: 180.0,
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportParams {
    #[arg(long, default_value = "Fitness Assessment Report")]
    pub report_title: String,

    /// chrono strftime pattern for the recorded date.
    #[arg(long, default_value = "%Y-%m-%d %H:%M:%S")]
    pub date_format: String,

    // Radar axis
    #[arg(long, default_value_t = 0.0)]
    pub chart_min: f64,
    #[arg(long, default_value_t = 10.0)]
    pub chart_max: f64,
    #[arg(long, default_value_t = 2.0)]
    pub chart_step: f64,
}

impl Default for ReportParams {
    fn default() -> Self {
        Self {
            report_title: "Fitness Assessment Report".to_string(),
            date_format: "%Y-%m-%d %H:%M:%S".to_string(),
            chart_min: 0.0,
            chart_max: 10.0,
            chart_step: 2.0,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> FrResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            FitRadarError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            FitRadarError::Config(format!(
                "Failed to parse config JSON '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Copies every value the user typed on the command line over the file
    /// values. Defaults filled in by clap do not count.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(calibration.plank_min_secs);
        update_if_present!(calibration.plank_max_secs);
        update_if_present!(calibration.wallsit_min_secs);
        update_if_present!(calibration.wallsit_max_secs);

        update_if_present!(report.report_title);
        update_if_present!(report.date_format);
        update_if_present!(report.chart_min);
        update_if_present!(report.chart_max);
        update_if_present!(report.chart_step);
    }

    pub fn validate(&self) -> FrResult<()> {
        self.calibration.validate()?;
        self.report.validate()
    }
}

impl Calibration {
    pub fn validate(&self) -> FrResult<()> {
        let pairs = [
            ("plank", self.plank_min_secs, self.plank_max_secs),
            ("wallsit", self.wallsit_min_secs, self.wallsit_max_secs),
        ];
        for (name, min, max) in pairs {
            if !min.is_finite() || !max.is_finite() || min < 0.0 {
                return Err(FitRadarError::Config(format!(
                    "{} thresholds must be finite and non-negative (got {}..{})",
                    name, min, max
                )));
            }
            if min >= max {
                return Err(FitRadarError::Config(format!(
                    "{} minimum ({}) must be below its maximum ({})",
                    name, min, max
                )));
            }
        }
        Ok(())
    }
}

impl ReportParams {
    pub fn validate(&self) -> FrResult<()> {
        for (name, v) in [
            ("chart_min", self.chart_min),
            ("chart_max", self.chart_max),
            ("chart_step", self.chart_step),
        ] {
            if !v.is_finite() {
                return Err(FitRadarError::Config(format!("{} must be finite, got {}", name, v)));
            }
        }
        if self.date_format.trim().is_empty() {
            return Err(FitRadarError::Config("date_format must not be empty".into()));
        }
        if !is_valid_date_format(&self.date_format) {
            return Err(FitRadarError::Config(format!(
                "date_format '{}' is not a valid strftime pattern",
                self.date_format
            )));
        }
        if self.chart_min >= self.chart_max {
            return Err(FitRadarError::Config(format!(
                "chart_min ({}) must be below chart_max ({})",
                self.chart_min, self.chart_max
            )));
        }
        if self.chart_step <= 0.0 {
            return Err(FitRadarError::Config("chart_step must be positive".into()));
        }
        Ok(())
    }
}
