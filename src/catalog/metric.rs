use crate::scorer::rules::ScoringRule;
use serde::Serialize;
use strum_macros::{Display, EnumIter};

/// Semantic unit of a metric. It picks the input parsing strategy, never the
/// scoring itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
pub enum Unit {
    #[strum(serialize = "reps")]
    Reps,
    #[strum(serialize = "seconds")]
    Seconds,
    #[strum(serialize = "cm")]
    Centimeters,
    #[strum(serialize = "%")]
    Percent,
    #[strum(serialize = "°")]
    Degrees,
    #[strum(serialize = "ms")]
    Milliseconds,
    #[strum(serialize = "bpm")]
    Bpm,
    #[strum(serialize = "ratio")]
    Ratio,
    #[strum(serialize = "index")]
    Index,
    #[strum(serialize = "value")]
    Value,
    #[strum(serialize = "pass/fail/angle")]
    PassFailAngle,
    #[strum(serialize = "description")]
    Description,
}

impl Unit {
    /// Categorical units accept free-form tokens as well as numbers.
    pub fn is_categorical(&self) -> bool {
        matches!(self, Self::PassFailAngle | Self::Description)
    }

    /// Label shown next to a raw value in reports. Dimensionless ratios and
    /// indices have none.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Self::Ratio | Self::Index => None,
            Self::Reps => Some("reps"),
            Self::Seconds => Some("seconds"),
            Self::Centimeters => Some("cm"),
            Self::Percent => Some("%"),
            Self::Degrees => Some("°"),
            Self::Milliseconds => Some("ms"),
            Self::Bpm => Some("bpm"),
            Self::Value => Some("value"),
            Self::PassFailAngle => Some("pass/fail/angle"),
            Self::Description => Some("description"),
        }
    }
}

/// Immutable descriptor binding a metric id to its display metadata and
/// scoring rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub unit: Unit,
    /// How the user is expected to measure it.
    pub tracking: &'static str,
    pub rule: ScoringRule,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'static str>,
}

impl MetricDefinition {
    pub const fn new(
        id: &'static str,
        name: &'static str,
        unit: Unit,
        tracking: &'static str,
        rule: ScoringRule,
    ) -> Self {
        Self {
            id,
            name,
            unit,
            tracking,
            rule,
            hint: None,
        }
    }

    pub const fn with_hint(mut self, hint: &'static str) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn placeholder(&self) -> String {
        match self.hint {
            Some(hint) => hint.to_string(),
            None => format!("Enter {}", self.unit.label().unwrap_or("value")),
        }
    }

    /// `" (unit)"` for display after a name or value, empty for unitless
    /// metrics.
    pub fn unit_suffix(&self) -> String {
        self.unit
            .label()
            .map(|l| format!(" ({})", l))
            .unwrap_or_default()
    }
}
