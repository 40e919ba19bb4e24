//! Result types produced by rules and by the complexity evaluator.

use std::collections::HashMap;
use std::fmt;

/// The outcome of checking one value against a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail(String),
}

impl Outcome {
    pub fn fail(message: impl Into<String>) -> Self {
        Outcome::Fail(message.into())
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }

    /// Returns the failure message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Pass => None,
            Outcome::Fail(message) => Some(message),
        }
    }

    /// Converts into the two-state form consumed by form frameworks:
    /// `None` for pass, `Some(message)` for fail.
    pub fn into_message(self) -> Option<String> {
        match self {
            Outcome::Pass => None,
            Outcome::Fail(message) => Some(message),
        }
    }
}

impl From<Outcome> for Option<String> {
    fn from(outcome: Outcome) -> Self {
        outcome.into_message()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(label)
    }
}

/// Detailed result of the password evaluator.
///
/// Only [`Severity::Error`] blocks acceptance. A `Warning` is still a pass
/// for gating purposes but carries an advisory message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub severity: Severity,
    pub message: Option<String>,
    pub metadata: HashMap<String, String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            severity: Severity::Info,
            message: None,
            metadata: HashMap::new(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: Some(message.into()),
            metadata: HashMap::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: Some(message.into()),
            metadata: HashMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn is_valid(&self) -> bool {
        self.severity != Severity::Error
    }

    /// Collapses the result for gating: warnings and infos pass.
    pub fn to_outcome(&self) -> Outcome {
        match (self.severity, &self.message) {
            (Severity::Error, Some(message)) => Outcome::Fail(message.clone()),
            (Severity::Error, None) => Outcome::Fail(String::new()),
            _ => Outcome::Pass,
        }
    }
}
