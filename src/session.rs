use crate::catalog::{Catalog, Category, MetricDefinition};
use crate::inputs::RawInputSet;
use crate::scorer::{CategoryScoreVector, RawValue, ScoreDetails, Scorer};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WizardError {
    #[error("Please fill in the value for {0}")]
    MissingValue(&'static str),

    #[error("Please enter a valid number for {0}")]
    InvalidNumber(&'static str),

    #[error("Already at the first step")]
    AtFirstStep,

    #[error("Already at the last step")]
    AtLastStep,

    #[error("Scores can only be submitted from the last step (at step {step} of {total})")]
    NotLastStep { step: usize, total: usize },
}

/// Everything the wizard remembers between steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSession {
    /// Zero-based index into the catalog's categories.
    pub step: usize,
    pub inputs: RawInputSet,
    pub submitted_at: Option<DateTime<Local>>,
}

impl AssessmentSession {
    pub fn reset(&mut self) {
        self.step = 0;
        self.inputs.clear();
        self.submitted_at = None;
    }
}

/// Result of a successful submit.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub scores: CategoryScoreVector,
    pub details: ScoreDetails,
    pub inputs: RawInputSet,
    pub submitted_at: DateTime<Local>,
}

/// Steps through the catalog one category at a time.
#[derive(Debug, Clone)]
pub struct Wizard {
    scorer: Scorer,
    categories: Vec<Category>,
    session: AssessmentSession,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new(Scorer::default())
    }
}

impl Wizard {
    pub fn new(scorer: Scorer) -> Self {
        let categories = scorer.catalog().categories();
        Self {
            scorer,
            categories,
            session: AssessmentSession::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        self.scorer.catalog()
    }

    pub fn session(&self) -> &AssessmentSession {
        &self.session
    }

    /// Clears every stored value and returns to the first step. Used both
    /// for a fresh assessment and for re-taking one.
    pub fn start(&mut self) {
        debug!("Wizard reset");
        self.session.reset();
    }

    pub fn step(&self) -> usize {
        self.session.step
    }

    pub fn total_steps(&self) -> usize {
        self.categories.len()
    }

    pub fn current_category(&self) -> Option<Category> {
        self.categories.get(self.session.step).copied()
    }

    pub fn current_metrics(&self) -> &[MetricDefinition] {
        match self.current_category() {
            Some(c) => self.scorer.catalog().metrics(c),
            None => &[],
        }
    }

    pub fn step_label(&self) -> String {
        format!("Step {} of {}", self.session.step + 1, self.total_steps())
    }

    pub fn is_first_step(&self) -> bool {
        self.session.step == 0
    }

    pub fn is_last_step(&self) -> bool {
        self.session.step + 1 >= self.total_steps()
    }

    /// Stored value for a field, or empty text if nothing was entered yet.
    pub fn prefill(&self, id: &str) -> String {
        self.session
            .inputs
            .get(id)
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    /// Stores the current step's values, trimming text. Ids outside the
    /// current step are ignored.
    pub fn save_step(&mut self, values: &RawInputSet) {
        let step_ids: Vec<&'static str> = self.current_metrics().iter().map(|m| m.id).collect();
        for id in step_ids {
            if let Some(v) = values.get(id) {
                self.session.inputs.insert(id, v.trimmed());
            }
        }
    }

    /// Reports the first problem in catalog order: an empty field, or text
    /// that is not a number for a metric measured numerically.
    pub fn validate_step(&self, values: &RawInputSet) -> Result<(), WizardError> {
        for metric in self.current_metrics() {
            let value = values.get(metric.id).filter(|v| !v.is_blank());
            let Some(value) = value else {
                return Err(WizardError::MissingValue(metric.name));
            };
            if !metric.unit.is_categorical() && value.as_number().is_none() {
                return Err(WizardError::InvalidNumber(metric.name));
            }
        }
        Ok(())
    }

    pub fn next(&mut self, values: &RawInputSet) -> Result<(), WizardError> {
        if self.is_last_step() {
            return Err(WizardError::AtLastStep);
        }
        self.validate_step(values)?;
        self.save_step(values);
        self.session.step += 1;
        debug!("Advanced to {}", self.step_label());
        Ok(())
    }

    /// Going back keeps whatever was typed, valid or not.
    pub fn previous(&mut self, values: &RawInputSet) -> Result<(), WizardError> {
        if self.is_first_step() {
            return Err(WizardError::AtFirstStep);
        }
        self.save_step(values);
        self.session.step -= 1;
        debug!("Returned to {}", self.step_label());
        Ok(())
    }

    pub fn submit(&mut self, values: &RawInputSet) -> Result<Submission, WizardError> {
        self.submit_at(values, Local::now())
    }

    /// Like `submit` with an explicit timestamp.
    pub fn submit_at(
        &mut self,
        values: &RawInputSet,
        at: DateTime<Local>,
    ) -> Result<Submission, WizardError> {
        if !self.is_last_step() {
            return Err(WizardError::NotLastStep {
                step: self.session.step + 1,
                total: self.total_steps(),
            });
        }
        self.validate_step(values)?;
        self.save_step(values);
        self.session.submitted_at = Some(at);

        let details = self.scorer.score_details(&self.session.inputs);
        info!(
            "Assessment submitted: {} of {} metrics scored",
            details.scored_count(),
            details.metrics.len()
        );

        Ok(Submission {
            scores: details.categories.clone(),
            details,
            inputs: self.session.inputs.clone(),
            submitted_at: at,
        })
    }
}

/// Convenience for building a step's values from `(id, text)` pairs.
pub fn step_values<'a, I>(pairs: I) -> RawInputSet
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k, RawValue::from(v)))
        .collect()
}
