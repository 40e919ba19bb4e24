//! Locale message catalog.
//!
//! Messages are looked up by key and locale, then `{name}` placeholders are
//! replaced with the supplied parameters. A catalog is read-only once built
//! and is handed to the rule factories explicitly.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

/// Message keys understood by the built-in catalog.
pub mod keys {
    pub const REQUIRED: &str = "required";
    pub const MIN_LENGTH: &str = "min_length";
    pub const MAX_LENGTH: &str = "max_length";
    pub const RANGE: &str = "range";
    pub const NUMERIC: &str = "numeric";
    pub const ALPHA: &str = "alpha";
    pub const ALPHANUMERIC: &str = "alphanumeric";
    pub const EMAIL: &str = "email";
    pub const URL: &str = "url";
    pub const IP_ADDRESS: &str = "ip_address";
    pub const MAC_ADDRESS: &str = "mac_address";
    pub const POSTAL_CODE: &str = "postal_code";
    pub const SSN: &str = "ssn";
    pub const USERNAME: &str = "username";
    pub const PHONE: &str = "phone";
    pub const DATE: &str = "date";
    pub const PATTERN: &str = "pattern";
    pub const CREDIT_CARD: &str = "credit_card";
    pub const CARD_NOT_ACCEPTED: &str = "card_not_accepted";

    pub const PASSWORD_REQUIREMENTS: &str = "password.requirements";
    pub const PASSWORD_COMMON: &str = "password.common";
    pub const PASSWORD_DISALLOWED: &str = "password.disallowed";
    pub const PASSWORD_STRENGTH: &str = "password.strength";

    pub const CRITERION_MIN_LENGTH: &str = "password.criterion.min_length";
    pub const CRITERION_MAX_LENGTH: &str = "password.criterion.max_length";
    pub const CRITERION_UPPERCASE: &str = "password.criterion.uppercase";
    pub const CRITERION_LOWERCASE: &str = "password.criterion.lowercase";
    pub const CRITERION_NUMBER: &str = "password.criterion.number";
    pub const CRITERION_SPECIAL: &str = "password.criterion.special";
    pub const CRITERION_SEQUENTIAL: &str = "password.criterion.sequential";
    pub const CRITERION_REPEATED: &str = "password.criterion.repeated";
}

pub const DEFAULT_LOCALE: &str = "en";

const ENGLISH: &[(&str, &str)] = &[
    (keys::REQUIRED, "This field is required"),
    (keys::MIN_LENGTH, "Must be at least {min} characters"),
    (keys::MAX_LENGTH, "Must be at most {max} characters"),
    (keys::RANGE, "Must be a number between {min} and {max}"),
    (keys::NUMERIC, "Must be a number"),
    (keys::ALPHA, "Must contain only letters"),
    (keys::ALPHANUMERIC, "Must contain only letters and numbers"),
    (keys::EMAIL, "Please enter a valid email address"),
    (keys::URL, "Please enter a valid URL"),
    (keys::IP_ADDRESS, "Please enter a valid IP address"),
    (keys::MAC_ADDRESS, "Please enter a valid MAC address"),
    (keys::POSTAL_CODE, "Please enter a valid {region} postal code"),
    (keys::SSN, "Please enter a valid Social Security number"),
    (
        keys::USERNAME,
        "Username must start with a letter and contain 3 to 20 letters, numbers or underscores",
    ),
    (keys::PHONE, "Please enter a valid {region} phone number"),
    (keys::DATE, "Please enter a valid date ({format})"),
    (keys::PATTERN, "Invalid format"),
    (keys::CREDIT_CARD, "Please enter a valid card number"),
    (keys::CARD_NOT_ACCEPTED, "{family} cards are not accepted"),
    (keys::PASSWORD_REQUIREMENTS, "Password must have {criteria}"),
    (keys::PASSWORD_COMMON, "This password is too common"),
    (keys::PASSWORD_DISALLOWED, "Password cannot match your username"),
    (keys::PASSWORD_STRENGTH, "Password strength: {level}"),
    (keys::CRITERION_MIN_LENGTH, "at least {min} characters"),
    (keys::CRITERION_MAX_LENGTH, "at most {max} characters"),
    (keys::CRITERION_UPPERCASE, "an uppercase letter"),
    (keys::CRITERION_LOWERCASE, "a lowercase letter"),
    (keys::CRITERION_NUMBER, "a number"),
    (keys::CRITERION_SPECIAL, "a special character"),
    (keys::CRITERION_SEQUENTIAL, "no sequential characters (like abc or 321)"),
    (keys::CRITERION_REPEATED, "no repeated characters (like aaa)"),
];

static ENGLISH_CATALOG: Lazy<Arc<MessageCatalog>> =
    Lazy::new(|| Arc::new(MessageCatalog::english()));

/// Shared handle to the built-in English catalog.
pub fn english_catalog() -> Arc<MessageCatalog> {
    Arc::clone(&ENGLISH_CATALOG)
}

#[derive(Debug, Clone)]
pub struct MessageCatalog {
    bundles: HashMap<String, HashMap<String, String>>,
    fallback_locale: String,
}

impl MessageCatalog {
    /// Creates an empty catalog falling back to `fallback_locale`.
    pub fn new(fallback_locale: impl Into<String>) -> Self {
        Self {
            bundles: HashMap::new(),
            fallback_locale: fallback_locale.into(),
        }
    }

    /// The built-in English messages, registered under `en`.
    pub fn english() -> Self {
        let mut catalog = Self::new(DEFAULT_LOCALE);
        for (key, template) in ENGLISH {
            catalog = catalog.with_message(DEFAULT_LOCALE, *key, *template);
        }
        catalog
    }

    pub fn with_message(
        mut self,
        locale: impl Into<String>,
        key: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        self.bundles
            .entry(locale.into())
            .or_default()
            .insert(key.into(), template.into());
        self
    }

    pub fn fallback_locale(&self) -> &str {
        &self.fallback_locale
    }

    fn template(&self, key: &str, locale: &str) -> Option<&str> {
        let exact = self.bundles.get(locale).and_then(|b| b.get(key));
        let language = locale
            .split(['-', '_'])
            .next()
            .filter(|lang| *lang != locale)
            .and_then(|lang| self.bundles.get(lang))
            .and_then(|b| b.get(key));
        let fallback = self
            .bundles
            .get(&self.fallback_locale)
            .and_then(|b| b.get(key));

        exact.or(language).or(fallback).map(String::as_str)
    }

    /// Looks up `key` for `locale` and substitutes `{name}` placeholders.
    ///
    /// Tries the exact locale, then its language subtag, then the fallback
    /// locale. Unknown keys come back unchanged.
    pub fn lookup(&self, key: &str, locale: &str, params: &[(&str, &str)]) -> String {
        let mut result = match self.template(key, locale) {
            Some(template) => template.to_string(),
            None => return key.to_string(),
        };

        for (name, value) in params {
            let placeholder = format!("{{{}}}", name);
            result = result.replace(&placeholder, value);
        }

        result
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_substitutes_params() {
        let catalog = MessageCatalog::english();
        assert_eq!(
            catalog.lookup(keys::MIN_LENGTH, "en", &[("min", "5")]),
            "Must be at least 5 characters"
        );
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        let catalog = MessageCatalog::english();
        assert_eq!(catalog.lookup("no.such.key", "en", &[]), "no.such.key");
    }

    #[test]
    fn test_locale_fallback_chain() {
        let catalog = MessageCatalog::english()
            .with_message("fr", keys::REQUIRED, "Ce champ est obligatoire")
            .with_message("fr-CA", keys::EMAIL, "Courriel invalide");

        assert_eq!(catalog.lookup(keys::REQUIRED, "fr", &[]), "Ce champ est obligatoire");
        // language subtag
        assert_eq!(catalog.lookup(keys::REQUIRED, "fr-CA", &[]), "Ce champ est obligatoire");
        assert_eq!(catalog.lookup(keys::EMAIL, "fr-CA", &[]), "Courriel invalide");
        // fallback locale
        assert_eq!(catalog.lookup(keys::EMAIL, "fr", &[]), "Please enter a valid email address");
        assert_eq!(catalog.lookup(keys::REQUIRED, "de", &[]), "This field is required");
    }

    #[test]
    fn test_every_key_has_english_text() {
        let catalog = english_catalog();
        for (key, _) in ENGLISH {
            assert_ne!(catalog.lookup(key, DEFAULT_LOCALE, &[]), *key);
        }
    }
}
