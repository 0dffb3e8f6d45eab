pub mod aggregate;
pub mod rules;
pub mod types;
pub mod value;

pub use self::types::{CategoryScore, CategoryScoreVector, MetricOutcome, MetricScore, Score, ScoreDetails};
pub use self::value::{ParsedValue, RawValue};
use crate::catalog::{Catalog, Category, MetricDefinition};
use crate::config::Config;
use crate::error::FrResult;
use crate::inputs::RawInputSet;
use tracing::{debug, warn};

/// Pure scoring engine over a catalog. Never mutates its inputs and never
/// fails: every input set maps to a fully populated score vector.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    catalog: Catalog,
}

impl Scorer {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Builds the catalog from the configured calibration and validates it.
    pub fn from_config(config: &Config) -> FrResult<Self> {
        let catalog = Catalog::with_calibration(&config.calibration);
        catalog.validate()?;
        Ok(Self { catalog })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Scores a single metric from its raw input.
    pub fn score_metric(&self, metric: &MetricDefinition, raw: Option<&RawValue>) -> MetricOutcome {
        let parsed = ParsedValue::parse(raw, metric.unit);
        if parsed.is_missing() {
            warn!("Missing input for {}", metric.id);
            return MetricOutcome::Missing;
        }

        match metric.rule.evaluate(&parsed) {
            Some(score) => {
                debug!("{} = {:?} -> {}", metric.id, parsed, score);
                MetricOutcome::Scored { score }
            }
            None => {
                let raw = raw.map(ToString::to_string).unwrap_or_default();
                warn!("Could not calculate score for {} with value: {}", metric.id, raw);
                MetricOutcome::Unparseable { raw }
            }
        }
    }

    /// Average of one category. Categories absent from the catalog average
    /// to 0 like any other category without scorable metrics.
    pub fn score_category(&self, category: Category, inputs: &RawInputSet) -> CategoryScore {
        let outcomes: Vec<MetricOutcome> = self
            .catalog
            .metrics(category)
            .iter()
            .map(|m| self.score_metric(m, inputs.get(m.id)))
            .collect();
        aggregate::category_average(category, &outcomes)
    }

    /// Category averages in catalog order. This is what the chart consumes.
    pub fn score_all(&self, inputs: &RawInputSet) -> CategoryScoreVector {
        let entries = self
            .catalog
            .categories()
            .into_iter()
            .map(|c| self.score_category(c, inputs))
            .collect();
        let vector = CategoryScoreVector::from_ordered(entries);
        debug!("Calculated category scores: {:?}", vector.values());
        vector
    }

    /// Per-metric outcomes alongside the category vector.
    pub fn score_details(&self, inputs: &RawInputSet) -> ScoreDetails {
        let mut metrics = Vec::with_capacity(self.catalog.metric_count());
        let mut categories = Vec::with_capacity(self.catalog.category_count());

        for (category, defs) in self.catalog.groups() {
            let start = metrics.len();
            for def in defs {
                metrics.push(MetricScore {
                    id: def.id,
                    name: def.name,
                    category,
                    outcome: self.score_metric(def, inputs.get(def.id)),
                });
            }
            let outcomes = metrics[start..].iter().map(|m| &m.outcome);
            categories.push(aggregate::category_average(category, outcomes));
        }

        ScoreDetails {
            metrics,
            categories: CategoryScoreVector::from_ordered(categories),
        }
    }
}
