pub mod category;
pub mod metric;
mod standard;

pub use self::category::Category;
pub use self::metric::{MetricDefinition, Unit};
use crate::config::Calibration;
use crate::error::{FitRadarError, FrResult};
use crate::scorer::rules::ScoringRule;
use std::collections::HashSet;

/// Static registry of metric definitions grouped by category.
///
/// The group order is fixed when the catalog is built and is the order used
/// by every consumer (wizard steps, radar axes, report sections).
#[derive(Debug, Clone)]
pub struct Catalog {
    groups: Vec<(Category, Vec<MetricDefinition>)>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Catalog {
    /// The built-in catalog with default calibration.
    pub fn standard() -> Self {
        Self::with_calibration(&Calibration::default())
    }

    /// The built-in catalog with per-instance calibration overrides applied.
    pub fn with_calibration(cal: &Calibration) -> Self {
        Self {
            groups: standard::build(cal),
        }
    }

    /// Ordered category names.
    pub fn categories(&self) -> Vec<Category> {
        self.groups.iter().map(|(c, _)| *c).collect()
    }

    pub fn category_count(&self) -> usize {
        self.groups.len()
    }

    /// Ordered metric definitions of one category. Unknown categories yield
    /// an empty slice.
    pub fn metrics(&self, category: Category) -> &[MetricDefinition] {
        self.groups
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, m)| m.as_slice())
            .unwrap_or(&[])
    }

    /// Iterate `(category, metrics)` in canonical order.
    pub fn groups(&self) -> impl Iterator<Item = (Category, &[MetricDefinition])> {
        self.groups.iter().map(|(c, m)| (*c, m.as_slice()))
    }

    pub fn find(&self, id: &str) -> Option<(Category, &MetricDefinition)> {
        self.groups
            .iter()
            .flat_map(|(c, ms)| ms.iter().map(move |m| (*c, m)))
            .find(|(_, m)| m.id == id)
    }

    pub fn metric_count(&self) -> usize {
        self.groups.iter().map(|(_, m)| m.len()).sum()
    }

    /// Checks id uniqueness across all categories and the sanity of every
    /// calibration.
    pub fn validate(&self) -> FrResult<()> {
        let mut seen = HashSet::new();
        for (category, metrics) in &self.groups {
            for m in metrics {
                if !seen.insert(m.id) {
                    return Err(FitRadarError::Validation(format!(
                        "Duplicate metric id '{}' (in {})",
                        m.id, category
                    )));
                }
                check_rule(m)?;
            }
        }
        Ok(())
    }
}

fn check_rule(m: &MetricDefinition) -> FrResult<()> {
    let ok = match m.rule {
        ScoringRule::Ascending { poor, ideal } => poor.is_finite() && ideal.is_finite() && poor < ideal,
        ScoringRule::Descending { ideal, poor } => poor.is_finite() && ideal.is_finite() && ideal < poor,
        ScoringRule::Plateau {
            poor_low,
            ideal_low,
            ideal_high,
            poor_high,
        } => poor_low <= ideal_low && ideal_low <= ideal_high && ideal_high < poor_high,
        ScoringRule::Categorical { tokens, .. } => !tokens.is_empty(),
    };

    if ok {
        Ok(())
    } else {
        Err(FitRadarError::Validation(format!(
            "Metric '{}' has inconsistent calibration: {:?}",
            m.id, m.rule
        )))
    }
}
