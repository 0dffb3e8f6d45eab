use super::types::Score;
use super::value::ParsedValue;
use serde::Serialize;
use tracing::debug;

/// Recognised tokens for a categorical metric and the score each one earns.
pub type TokenTable = &'static [(&'static str, f64)];

pub const SHOULDER_TOKENS: TokenTable = &[("pass", 10.0), ("partial", 5.0), ("fail", 0.0)];

pub const BACKBEND_TOKENS: TokenTable = &[
    ("head_to_feet", 10.0),
    ("cobra_touch_feet", 8.0),
    ("minimal_lift", 0.0),
];

/// How a parsed raw value maps onto the 0..=10 scale.
///
/// The catalog stores these as plain data; `evaluate` is the single dispatch
/// point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoringRule {
    /// Higher is better. `poor` and below scores 0, `ideal` and above 10.
    Ascending { poor: f64, ideal: f64 },

    /// Lower is better. `ideal` and below scores 10, `poor` and above 0.
    Descending { ideal: f64, poor: f64 },

    /// Scores 10 inside `[ideal_low, ideal_high]`, ramps down to 0 at both
    /// `poor_*` edges. `poor_low == ideal_low` makes the lower side a cliff.
    Plateau {
        poor_low: f64,
        ideal_low: f64,
        ideal_high: f64,
        poor_high: f64,
    },

    /// Token lookup with an optional numeric pass threshold. Anything
    /// unrecognised scores 0.
    Categorical {
        tokens: TokenTable,
        numeric_pass: Option<f64>,
    },
}

impl ScoringRule {
    pub const fn ascending(poor: f64, ideal: f64) -> Self {
        Self::Ascending { poor, ideal }
    }

    pub const fn descending(ideal: f64, poor: f64) -> Self {
        Self::Descending { ideal, poor }
    }

    pub const fn plateau(poor_low: f64, ideal_low: f64, ideal_high: f64, poor_high: f64) -> Self {
        Self::Plateau {
            poor_low,
            ideal_low,
            ideal_high,
            poor_high,
        }
    }

    pub fn is_categorical(&self) -> bool {
        matches!(self, Self::Categorical { .. })
    }

    /// Scores a parsed value. `None` means the value cannot be scored by this
    /// rule (missing, or a token handed to a numeric rule).
    pub fn evaluate(&self, value: &ParsedValue) -> Option<Score> {
        match (self, value) {
            (_, ParsedValue::Missing) => None,
            (Self::Categorical { tokens, .. }, ParsedValue::Token(token)) => {
                let score = lookup_token(tokens, token).unwrap_or_else(|| {
                    debug!("Unrecognised token '{}', falling back to 0", token);
                    0.0
                });
                Some(Score::clamped(score))
            }
            (Self::Categorical { numeric_pass, .. }, ParsedValue::Numeric(v)) => {
                let passed = numeric_pass.is_some_and(|threshold| *v >= threshold);
                Some(if passed { Score::MAX } else { Score::MIN })
            }
            (_, ParsedValue::Token(_)) => None,
            (_, ParsedValue::Numeric(v)) => Some(self.score_numeric(*v)),
        }
    }

    fn score_numeric(&self, v: f64) -> Score {
        let raw = match *self {
            Self::Ascending { poor, ideal } => {
                if v >= ideal {
                    10.0
                } else if v <= poor {
                    0.0
                } else {
                    ramp(v, poor, ideal)
                }
            }
            Self::Descending { ideal, poor } => {
                if v <= ideal {
                    10.0
                } else if v >= poor {
                    0.0
                } else {
                    10.0 - ramp(v, ideal, poor)
                }
            }
            Self::Plateau {
                poor_low,
                ideal_low,
                ideal_high,
                poor_high,
            } => {
                if v >= ideal_low && v <= ideal_high {
                    10.0
                } else if v < poor_low || v > poor_high {
                    0.0
                } else if v < ideal_low {
                    ramp(v, poor_low, ideal_low)
                } else {
                    10.0 - ramp(v, ideal_high, poor_high)
                }
            }
            Self::Categorical { .. } => 0.0,
        };
        Score::clamped(raw)
    }
}

/// Linear 0..10 ramp of `v` between `from` and `to`.
#[inline(always)]
fn ramp(v: f64, from: f64, to: f64) -> f64 {
    10.0 * (v - from) / (to - from)
}

fn lookup_token(tokens: &[(&str, f64)], token: &str) -> Option<f64> {
    let token = token.trim();
    tokens
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(token))
        .map(|(_, score)| *score)
}
