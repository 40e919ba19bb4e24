//! Password complexity rule.

use std::sync::Arc;

use crate::messages::MessageCatalog;
use crate::{evaluate_with, Outcome, PasswordPolicy, Rule, ValidationResult};

/// Gates a field on [`evaluate_with`]. Warnings pass.
#[derive(Debug, Clone)]
pub struct PasswordRule {
    pub(crate) policy: PasswordPolicy,
    pub(crate) catalog: Arc<MessageCatalog>,
    pub(crate) locale: String,
}

impl PasswordRule {
    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    /// Full evaluation including advisory warnings and metadata.
    pub fn evaluate(&self, value: Option<&str>) -> ValidationResult {
        evaluate_with(value, &self.policy, &self.catalog, &self.locale)
    }
}

impl Rule for PasswordRule {
    fn check(&self, value: Option<&str>) -> Outcome {
        self.evaluate(value).to_outcome()
    }

    fn name(&self) -> &'static str {
        "password"
    }
}
