//! Password policy configuration.

use std::collections::HashSet;

use crate::RuleError;

pub const DEFAULT_MIN_LENGTH: usize = 8;

/// Requirements enforced by [`evaluate`](crate::evaluate).
///
/// Built once with the `with_*` methods and never changed afterwards.
/// Forbidden values and the disallowed value are compared
/// case-insensitively after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    min_length: usize,
    max_length: Option<usize>,
    require_uppercase: bool,
    require_lowercase: bool,
    require_numbers: bool,
    require_special_chars: bool,
    forbidden_values: Option<HashSet<String>>,
    disallowed_equal_to: Option<String>,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: None,
            require_uppercase: true,
            require_lowercase: true,
            require_numbers: true,
            require_special_chars: true,
            forbidden_values: None,
            disallowed_equal_to: None,
        }
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

impl PasswordPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_uppercase_required(mut self, required: bool) -> Self {
        self.require_uppercase = required;
        self
    }

    pub fn with_lowercase_required(mut self, required: bool) -> Self {
        self.require_lowercase = required;
        self
    }

    pub fn with_numbers_required(mut self, required: bool) -> Self {
        self.require_numbers = required;
        self
    }

    pub fn with_special_chars_required(mut self, required: bool) -> Self {
        self.require_special_chars = required;
        self
    }

    /// Rejects any of `values` outright, such as a common password list.
    pub fn with_forbidden_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = self.forbidden_values.get_or_insert_with(HashSet::new);
        set.extend(
            values
                .into_iter()
                .map(|v| normalize(v.as_ref()))
                .filter(|v| !v.is_empty()),
        );
        self
    }

    /// Rejects a password equal to `value`, typically the username.
    pub fn with_disallowed_equal_to(mut self, value: impl AsRef<str>) -> Self {
        self.disallowed_equal_to = Some(normalize(value.as_ref()));
        self
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    pub fn requires_uppercase(&self) -> bool {
        self.require_uppercase
    }

    pub fn requires_lowercase(&self) -> bool {
        self.require_lowercase
    }

    pub fn requires_numbers(&self) -> bool {
        self.require_numbers
    }

    pub fn requires_special_chars(&self) -> bool {
        self.require_special_chars
    }

    pub fn forbidden_values(&self) -> Option<&HashSet<String>> {
        self.forbidden_values.as_ref()
    }

    pub fn disallowed_equal_to(&self) -> Option<&str> {
        self.disallowed_equal_to.as_deref()
    }

    /// Checks that the bounds are consistent.
    pub fn check(&self) -> Result<(), RuleError> {
        match self.max_length {
            Some(max) if max < self.min_length => Err(RuleError::InvalidRange {
                min: self.min_length as f64,
                max: max as f64,
            }),
            _ => Ok(()),
        }
    }

    pub(crate) fn is_forbidden(&self, password: &str) -> bool {
        self.forbidden_values
            .as_ref()
            .is_some_and(|set| set.contains(&normalize(password)))
    }

    pub(crate) fn is_disallowed(&self, password: &str) -> bool {
        self.disallowed_equal_to
            .as_deref()
            .is_some_and(|value| value == normalize(password))
    }
}
