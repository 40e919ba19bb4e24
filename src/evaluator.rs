//! Password complexity evaluator - scoring and policy evaluation.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::messages::{english_catalog, keys, MessageCatalog, DEFAULT_LOCALE};
use crate::rule::is_blank;
use crate::sections::{
    character_variety_section, forbidden_section, is_special, length_section,
    repeated_run_section, sequential_run_section, Criterion, SectionResult,
};
use crate::{PasswordPolicy, ValidationResult};

/// Scores above this many characters count as long enough.
const SCORE_LENGTH_THRESHOLD: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Fair,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0 | 1 => StrengthLevel::VeryWeak,
            2 => StrengthLevel::Weak,
            3 => StrengthLevel::Fair,
            4 => StrengthLevel::Strong,
            _ => StrengthLevel::VeryStrong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "Very Weak",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Fair => "Fair",
            StrengthLevel::Strong => "Strong",
            StrengthLevel::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Independent complexity criteria for one value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComplexityReport {
    pub length_ok: bool,
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_digit: bool,
    pub has_special: bool,
}

impl ComplexityReport {
    /// Number of criteria met, 0 to 5.
    pub fn score(&self) -> u8 {
        [
            self.length_ok,
            self.has_upper,
            self.has_lower,
            self.has_digit,
            self.has_special,
        ]
        .iter()
        .filter(|&&b| b)
        .count() as u8
    }

    pub fn level(&self) -> StrengthLevel {
        StrengthLevel::from_score(self.score())
    }
}

/// Scores a value against the five complexity criteria.
///
/// Blank input meets none of them. The length criterion requires strictly
/// more than 8 characters.
pub fn score(value: Option<&str>) -> ComplexityReport {
    let pwd = match value {
        Some(v) if !is_blank(Some(v)) => v,
        _ => return ComplexityReport::default(),
    };

    ComplexityReport {
        length_ok: pwd.chars().count() > SCORE_LENGTH_THRESHOLD,
        has_upper: pwd.chars().any(|c| c.is_uppercase()),
        has_lower: pwd.chars().any(|c| c.is_lowercase()),
        has_digit: pwd.chars().any(|c| c.is_ascii_digit()),
        has_special: pwd.chars().any(is_special),
    }
}

pub fn score_secret(password: &SecretString) -> ComplexityReport {
    score(Some(password.expose_secret()))
}

/// Evaluates a value against `policy` with the built-in English messages.
pub fn evaluate(value: Option<&str>, policy: &PasswordPolicy) -> ValidationResult {
    evaluate_with(value, policy, &english_catalog(), DEFAULT_LOCALE)
}

pub fn evaluate_secret(password: &SecretString, policy: &PasswordPolicy) -> ValidationResult {
    evaluate(Some(password.expose_secret()), policy)
}

/// Evaluates a value against `policy`, reporting every unmet criterion in
/// a single message.
///
/// Blank input is valid; presence is a separate rule's concern. A forbidden
/// or disallowed value fails on its own message, replacing the aggregated
/// one. A passing value whose strength is Weak or below comes back as a
/// warning.
pub fn evaluate_with(
    value: Option<&str>,
    policy: &PasswordPolicy,
    catalog: &MessageCatalog,
    locale: &str,
) -> ValidationResult {
    let pwd = match value {
        Some(v) if !is_blank(Some(v)) => v,
        _ => return ValidationResult::valid(),
    };

    let mut failed: Vec<Criterion> = Vec::new();
    failed.extend(length_section(pwd, policy));
    failed.extend(character_variety_section(pwd, policy));

    if let Some(terminal) = forbidden_section(pwd, policy) {
        #[cfg(feature = "tracing")]
        tracing::debug!("Password rejected by terminal check: {}", terminal.key());
        return ValidationResult::error(catalog.lookup(terminal.message_key(), locale, &[]))
            .with_metadata("failed", terminal.key());
    }

    // Orchestrator: structural sections run after the terminal checks
    let structural: [(&str, fn(&str) -> SectionResult); 2] = [
        ("sequential", sequential_run_section),
        ("repeated", repeated_run_section),
    ];
    for (_section_name, section_fn) in structural {
        if let Some(criterion) = section_fn(pwd) {
            #[cfg(feature = "tracing")]
            tracing::trace!("Structural weakness found: {}", _section_name);
            failed.push(criterion);
        }
    }

    if !failed.is_empty() {
        let criteria: Vec<String> = failed
            .iter()
            .map(|c| c.describe(catalog, locale))
            .collect();
        let failed_keys: Vec<&str> = failed.iter().map(Criterion::key).collect();
        let message = catalog.lookup(
            keys::PASSWORD_REQUIREMENTS,
            locale,
            &[("criteria", &criteria.join(", "))],
        );
        return ValidationResult::error(message).with_metadata("failed", failed_keys.join(","));
    }

    let report = score(Some(pwd));
    let level = report.level();
    let result = if level <= StrengthLevel::Weak {
        ValidationResult::warning(catalog.lookup(
            keys::PASSWORD_STRENGTH,
            locale,
            &[("level", level.label())],
        ))
    } else {
        ValidationResult::valid()
    };
    result
        .with_metadata("score", report.score().to_string())
        .with_metadata("level", level.label())
}
