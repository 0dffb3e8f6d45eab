use crate::catalog::Category;
use serde::Serialize;
use std::fmt;

/// A normalised score, always within `[0, 10]`.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    pub const MIN: Score = Score(0.0);
    pub const MAX: Score = Score(10.0);

    /// Clamps into `[0, 10]`. NaN collapses to 0 so the result is always
    /// finite.
    pub fn clamped(v: f64) -> Self {
        if v.is_nan() {
            Self::MIN
        } else {
            Self(v.clamp(0.0, 10.0))
        }
    }

    #[inline(always)]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Score {
    /// Whole numbers print bare, everything else with one decimal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{}", self.0)
        } else {
            write!(f, "{:.1}", self.0)
        }
    }
}

/// What happened to a single metric during scoring.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MetricOutcome {
    Scored { score: Score },
    /// No value supplied; excluded from the category average.
    Missing,
    /// A value that the metric's rule cannot read; excluded like `Missing`.
    Unparseable { raw: String },
}

impl MetricOutcome {
    pub fn score(&self) -> Option<Score> {
        match self {
            Self::Scored { score } => Some(*score),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricScore {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub outcome: MetricOutcome,
}

/// Average of one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryScore {
    pub category: Category,
    pub score: Score,
    /// Metrics that contributed to the average.
    pub scored: usize,
    /// Metrics left out because their input was missing or unreadable.
    pub excluded: usize,
}

/// One score per category, in catalog order. Chart axes bind to positions,
/// so the order is part of the contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CategoryScoreVector(Vec<CategoryScore>);

impl CategoryScoreVector {
    pub(crate) fn from_ordered(entries: Vec<CategoryScore>) -> Self {
        Self(entries)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryScore> {
        self.0.iter()
    }

    /// Plain values for positional consumers (radar chart).
    pub fn values(&self) -> Vec<f64> {
        self.0.iter().map(|c| c.score.value()).collect()
    }

    pub fn labels(&self) -> Vec<String> {
        self.0.iter().map(|c| c.category.to_string()).collect()
    }

    pub fn get(&self, category: Category) -> Option<Score> {
        self.0
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.score)
    }

    pub fn as_slice(&self) -> &[CategoryScore] {
        &self.0
    }
}

/// Full breakdown: every metric outcome plus the category vector.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreDetails {
    pub metrics: Vec<MetricScore>,
    pub categories: CategoryScoreVector,
}

impl ScoreDetails {
    pub fn metric(&self, id: &str) -> Option<&MetricScore> {
        self.metrics.iter().find(|m| m.id == id)
    }

    pub fn scored_count(&self) -> usize {
        self.metrics
            .iter()
            .filter(|m| m.outcome.score().is_some())
            .count()
    }
}
