use crate::catalog::Unit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw measurement as handed over by the input collaborator: either a
/// number or whatever text the user typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Empty or whitespace-only text. Numbers are never blank.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Number(_) => false,
            Self::Text(s) => s.trim().is_empty(),
        }
    }

    /// Whitespace-trimmed copy, as stored by the wizard.
    pub fn trimmed(&self) -> Self {
        match self {
            Self::Number(v) => Self::Number(*v),
            Self::Text(s) => Self::Text(s.trim().to_string()),
        }
    }

    /// Strict numeric reading. `None` for blank, non-numeric or non-finite
    /// values.
    pub fn as_number(&self) -> Option<f64> {
        let v = match self {
            Self::Number(v) => *v,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        v.is_finite().then_some(v)
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{}", v),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i32> for RawValue {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// A raw value after the parse step. Downstream scoring only ever branches on
/// this.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedValue {
    Numeric(f64),
    Token(String),
    Missing,
}

impl ParsedValue {
    /// Parses a raw value for a metric measured in `unit`.
    ///
    /// Blank input (or a NaN/infinite number) is `Missing`. Text that is not a
    /// finite number becomes a `Token`; categorical units lower-case it so it
    /// can be matched against their token table, numeric units keep it as is
    /// for diagnostics and their rules reject it.
    pub fn parse(raw: Option<&RawValue>, unit: Unit) -> Self {
        let Some(raw) = raw else {
            return Self::Missing;
        };

        match raw {
            RawValue::Number(v) if v.is_finite() => Self::Numeric(*v),
            RawValue::Number(_) => Self::Missing,
            RawValue::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return Self::Missing;
                }
                match s.parse::<f64>() {
                    Ok(v) if v.is_finite() => Self::Numeric(v),
                    _ if unit.is_categorical() => Self::Token(s.to_ascii_lowercase()),
                    _ => Self::Token(s.to_string()),
                }
            }
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}
