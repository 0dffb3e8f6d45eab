pub mod markdown;

pub use self::markdown::write_markdown;
use crate::catalog::{Catalog, Category};
use crate::config::ReportParams;
use crate::error::{FitRadarError, FrResult};
use crate::inputs::RawInputSet;
use crate::scorer::{CategoryScore, CategoryScoreVector, Score};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt::Write as _;
use std::io::Write;
use strum_macros::{Display, EnumString};

pub const DATASET_LABEL: &str = "Your Score";
pub const NOT_RECORDED: &str = "Date not recorded";
pub const NO_DATA: &str = "No data available to generate report.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ReportFormat {
    Markdown,
    Json,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Json => "json",
        }
    }
}

/// Data a radar chart needs: one axis per category, in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarSeries {
    pub dataset_label: &'static str,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub suggested_min: f64,
    pub suggested_max: f64,
    pub step: f64,
}

impl RadarSeries {
    pub fn new(scores: &CategoryScoreVector, params: &ReportParams) -> Self {
        Self {
            dataset_label: DATASET_LABEL,
            labels: scores.labels(),
            values: scores.values(),
            suggested_min: params.chart_min,
            suggested_max: params.chart_max,
            step: params.chart_step,
        }
    }

    /// Tick positions from min to max inclusive. Empty when the axis is
    /// not a finite, increasing range.
    pub fn ticks(&self) -> Vec<f64> {
        let mut ticks = Vec::new();
        let finite = [self.suggested_min, self.suggested_max, self.step]
            .iter()
            .all(|v| v.is_finite());
        if !finite || self.step <= 0.0 {
            return ticks;
        }
        let mut t = self.suggested_min;
        while t <= self.suggested_max + f64::EPSILON {
            ticks.push(t);
            t += self.step;
        }
        ticks
    }

    /// Hover text for one point, e.g. "Your Score: 7.3".
    pub fn tooltip(&self, index: usize) -> Option<String> {
        self.values
            .get(index)
            .map(|v| format!("{}: {}", self.dataset_label, Score::clamped(*v)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    pub id: &'static str,
    pub name: &'static str,
    /// Raw value as submitted, or "N/A".
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<&'static str>,
}

impl ReportEntry {
    /// "50 (reps)", or just the value for unitless metrics.
    pub fn value_with_unit(&self) -> String {
        match self.unit {
            Some(u) => format!("{} ({})", self.value, u),
            None => self.value.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSection {
    pub category: Category,
    pub entries: Vec<ReportEntry>,
}

/// Export artifact: header, chart data, category scores and the literal
/// appendix of submitted values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentReport {
    pub title: String,
    pub recorded_at: Option<String>,
    pub radar: RadarSeries,
    pub scores: Vec<CategoryScore>,
    pub sections: Vec<ReportSection>,
}

impl AssessmentReport {
    pub fn build(
        catalog: &Catalog,
        inputs: &RawInputSet,
        scores: &CategoryScoreVector,
        submitted_at: Option<DateTime<Local>>,
        params: &ReportParams,
    ) -> FrResult<Self> {
        if inputs.is_empty() {
            return Err(FitRadarError::Validation(NO_DATA.to_string()));
        }

        let recorded_at = submitted_at
            .map(|ts| format_timestamp(&ts, &params.date_format))
            .transpose()?;

        let sections = catalog
            .groups()
            .map(|(category, metrics)| ReportSection {
                category,
                entries: metrics
                    .iter()
                    .map(|m| ReportEntry {
                        id: m.id,
                        name: m.name,
                        value: inputs
                            .get(m.id)
                            .filter(|v| !v.is_blank())
                            .map(ToString::to_string)
                            .unwrap_or_else(|| "N/A".to_string()),
                        unit: m.unit.label(),
                    })
                    .collect(),
            })
            .collect();

        Ok(Self {
            title: params.report_title.clone(),
            recorded_at,
            radar: RadarSeries::new(scores, params),
            scores: scores.as_slice().to_vec(),
            sections,
        })
    }

    pub fn date_line(&self) -> String {
        match &self.recorded_at {
            Some(d) => format!("Date Recorded: {}", d),
            None => NOT_RECORDED.to_string(),
        }
    }

    pub fn write_json<W: Write>(&self, mut writer: W) -> FrResult<()> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    pub fn write_to<W: Write>(&self, writer: W, format: ReportFormat) -> FrResult<()> {
        match format {
            ReportFormat::Markdown => write_markdown(writer, self),
            ReportFormat::Json => self.write_json(writer),
        }
    }
}

/// True if chrono can render `pattern` without hitting an unknown specifier.
pub fn is_valid_date_format(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

fn format_timestamp(ts: &DateTime<Local>, pattern: &str) -> FrResult<String> {
    if !is_valid_date_format(pattern) {
        return Err(FitRadarError::Config(format!(
            "Invalid date format '{}'",
            pattern
        )));
    }
    let mut out = String::new();
    write!(out, "{}", ts.format(pattern))
        .map_err(|_| FitRadarError::Config(format!("Cannot format date with '{}'", pattern)))?;
    Ok(out)
}
