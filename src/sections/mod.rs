//! Password evaluation sections
//!
//! Each section checks one aspect of a password against the policy.

mod forbidden;
mod length;
mod pattern;
mod variety;

pub use forbidden::forbidden_section;
pub use length::length_section;
pub use pattern::{
    has_repeated_run, has_sequential_run, repeated_run_section, sequential_run_section,
};
pub use variety::{character_variety_section, is_special, SPECIAL_CHARS};

use crate::messages::{keys, MessageCatalog};

/// A requirement the password did not meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    MinLength(usize),
    MaxLength(usize),
    Uppercase,
    Lowercase,
    Number,
    Special,
    NoSequential,
    NoRepeated,
}

impl Criterion {
    /// Short identifier reported in result metadata.
    pub fn key(&self) -> &'static str {
        match self {
            Criterion::MinLength(_) => "min_length",
            Criterion::MaxLength(_) => "max_length",
            Criterion::Uppercase => "uppercase",
            Criterion::Lowercase => "lowercase",
            Criterion::Number => "number",
            Criterion::Special => "special",
            Criterion::NoSequential => "sequential",
            Criterion::NoRepeated => "repeated",
        }
    }

    pub fn describe(&self, catalog: &MessageCatalog, locale: &str) -> String {
        match self {
            Criterion::MinLength(min) => catalog.lookup(
                keys::CRITERION_MIN_LENGTH,
                locale,
                &[("min", &min.to_string())],
            ),
            Criterion::MaxLength(max) => catalog.lookup(
                keys::CRITERION_MAX_LENGTH,
                locale,
                &[("max", &max.to_string())],
            ),
            Criterion::Uppercase => catalog.lookup(keys::CRITERION_UPPERCASE, locale, &[]),
            Criterion::Lowercase => catalog.lookup(keys::CRITERION_LOWERCASE, locale, &[]),
            Criterion::Number => catalog.lookup(keys::CRITERION_NUMBER, locale, &[]),
            Criterion::Special => catalog.lookup(keys::CRITERION_SPECIAL, locale, &[]),
            Criterion::NoSequential => catalog.lookup(keys::CRITERION_SEQUENTIAL, locale, &[]),
            Criterion::NoRepeated => catalog.lookup(keys::CRITERION_REPEATED, locale, &[]),
        }
    }
}

/// A check that ends evaluation immediately when triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    Common,
    Disallowed,
}

impl Terminal {
    pub fn key(&self) -> &'static str {
        match self {
            Terminal::Common => "common",
            Terminal::Disallowed => "disallowed",
        }
    }

    pub fn message_key(&self) -> &'static str {
        match self {
            Terminal::Common => keys::PASSWORD_COMMON,
            Terminal::Disallowed => keys::PASSWORD_DISALLOWED,
        }
    }
}

/// Result type for single-criterion sections.
/// - `Some(criterion)` - Section failed
/// - `None` - Section passed
pub type SectionResult = Option<Criterion>;
