//! Rule factories
//!
//! [`Rules`] binds factories to a message catalog and locale. The free
//! functions in this module are shortcuts using the built-in English
//! catalog.
//!
//! Every rule except [`required`] passes blank input, so presence and
//! format are composed separately:
//!
//! ```
//! use fieldcheck::rules::{email, required};
//! use fieldcheck::{combine, Rule};
//!
//! let rule = combine(vec![required().boxed(), email().boxed()]);
//! assert_eq!(rule.validate(Some("")), Some("This field is required".to_string()));
//! assert_eq!(rule.validate(Some("jane@example.com")), None);
//! ```

mod card;
mod format;
mod password;
mod presence;

pub use card::CreditCard;
pub use format::{CustomPattern, FormatRule, IpAddress, Url};
pub use password::PasswordRule;
pub use presence::{MaxLength, MinLength, Range, Required};

use std::sync::Arc;

use crate::luhn::CardFamily;
use crate::messages::{english_catalog, keys, MessageCatalog, DEFAULT_LOCALE};
use crate::patterns::{DateFormat, Pattern, Region};
use crate::{PasswordPolicy, RuleError};

/// Builds rules whose messages come from one catalog and locale.
#[derive(Debug, Clone)]
pub struct Rules {
    catalog: Arc<MessageCatalog>,
    locale: String,
}

impl Default for Rules {
    fn default() -> Self {
        Self::new(english_catalog(), DEFAULT_LOCALE)
    }
}

impl Rules {
    pub fn new(catalog: Arc<MessageCatalog>, locale: impl Into<String>) -> Self {
        Self {
            catalog,
            locale: locale.into(),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    fn message(&self, key: &str, params: &[(&str, &str)]) -> String {
        self.catalog.lookup(key, &self.locale, params)
    }

    fn format(&self, name: &'static str, pattern: Pattern, message: String) -> FormatRule {
        FormatRule {
            name,
            pattern,
            message,
        }
    }

    pub fn required(&self) -> Required {
        Required {
            message: self.message(keys::REQUIRED, &[]),
        }
    }

    pub fn min_length(&self, min: usize) -> MinLength {
        MinLength {
            min,
            message: self.message(keys::MIN_LENGTH, &[("min", &min.to_string())]),
        }
    }

    pub fn max_length(&self, max: usize) -> MaxLength {
        MaxLength {
            max,
            message: self.message(keys::MAX_LENGTH, &[("max", &max.to_string())]),
        }
    }

    /// Numeric value within `min..=max`.
    ///
    /// # Errors
    /// `RuleError::InvalidRange` if a bound is not finite or `min > max`.
    pub fn range(&self, min: f64, max: f64) -> Result<Range, RuleError> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(RuleError::InvalidRange { min, max });
        }
        Ok(Range {
            min,
            max,
            message: self.message(
                keys::RANGE,
                &[("min", &min.to_string()), ("max", &max.to_string())],
            ),
        })
    }

    pub fn numeric(&self) -> FormatRule {
        self.format("numeric", Pattern::Numeric, self.message(keys::NUMERIC, &[]))
    }

    pub fn alpha(&self) -> FormatRule {
        self.format("alpha", Pattern::Alpha, self.message(keys::ALPHA, &[]))
    }

    pub fn alphanumeric(&self) -> FormatRule {
        self.format(
            "alphanumeric",
            Pattern::Alphanumeric,
            self.message(keys::ALPHANUMERIC, &[]),
        )
    }

    pub fn email(&self) -> FormatRule {
        self.format("email", Pattern::Email, self.message(keys::EMAIL, &[]))
    }

    pub fn url(&self) -> Url {
        Url {
            message: self.message(keys::URL, &[]),
        }
    }

    /// # Errors
    /// `RuleError::NoIpVersion` if both versions are disabled.
    pub fn ip_address(&self, ipv4: bool, ipv6: bool) -> Result<IpAddress, RuleError> {
        IpAddress::new(ipv4, ipv6, self.message(keys::IP_ADDRESS, &[]))
    }

    pub fn mac_address(&self) -> FormatRule {
        self.format(
            "mac_address",
            Pattern::MacAddress,
            self.message(keys::MAC_ADDRESS, &[]),
        )
    }

    pub fn postal_code(&self, region: Region) -> FormatRule {
        self.format(
            "postal_code",
            Pattern::PostalCode(region),
            self.message(keys::POSTAL_CODE, &[("region", region.code())]),
        )
    }

    pub fn ssn(&self) -> FormatRule {
        self.format("ssn", Pattern::Ssn, self.message(keys::SSN, &[]))
    }

    pub fn username(&self) -> FormatRule {
        self.format("username", Pattern::Username, self.message(keys::USERNAME, &[]))
    }

    pub fn phone(&self, region: Region) -> FormatRule {
        self.format(
            "phone",
            Pattern::Phone(region),
            self.message(keys::PHONE, &[("region", region.code())]),
        )
    }

    /// E.164 number with a leading `+`.
    pub fn phone_international(&self) -> FormatRule {
        self.format(
            "phone",
            Pattern::PhoneInternational,
            self.message(keys::PHONE, &[("region", "international")]),
        )
    }

    pub fn date(&self, format: DateFormat) -> FormatRule {
        self.format(
            "date",
            Pattern::Date(format),
            self.message(keys::DATE, &[("format", format.layout())]),
        )
    }

    /// Custom regular expression, matched against the whole value.
    ///
    /// # Errors
    /// `RuleError::InvalidPattern` if `expr` is empty or does not compile.
    pub fn pattern(&self, expr: &str) -> Result<CustomPattern, RuleError> {
        CustomPattern::new(expr, self.message(keys::PATTERN, &[]))
    }

    pub fn credit_card(&self) -> CreditCard {
        CreditCard {
            message: self.message(keys::CREDIT_CARD, &[]),
            accepted: None,
            rejections: Vec::new(),
        }
    }

    /// Card number restricted to the given issuer families.
    ///
    /// # Errors
    /// `RuleError::InvalidArgument` if `families` is empty.
    pub fn credit_card_accepting(&self, families: &[CardFamily]) -> Result<CreditCard, RuleError> {
        if families.is_empty() {
            return Err(RuleError::InvalidArgument(
                "at least one card family must be accepted".to_string(),
            ));
        }
        let rejections = CardFamily::PRIORITY
            .into_iter()
            .filter(|family| !families.contains(family))
            .map(|family| {
                let message = self.message(keys::CARD_NOT_ACCEPTED, &[("family", family.name())]);
                (family, message)
            })
            .collect();
        Ok(CreditCard {
            message: self.message(keys::CREDIT_CARD, &[]),
            accepted: Some(families.to_vec()),
            rejections,
        })
    }

    /// # Errors
    /// `RuleError::InvalidRange` if the policy's max length is below its min length.
    pub fn password(&self, policy: PasswordPolicy) -> Result<PasswordRule, RuleError> {
        policy.check()?;
        Ok(PasswordRule {
            policy,
            catalog: Arc::clone(&self.catalog),
            locale: self.locale.clone(),
        })
    }
}

pub fn required() -> Required {
    Rules::default().required()
}

pub fn min_length(min: usize) -> MinLength {
    Rules::default().min_length(min)
}

pub fn max_length(max: usize) -> MaxLength {
    Rules::default().max_length(max)
}

pub fn range(min: f64, max: f64) -> Result<Range, RuleError> {
    Rules::default().range(min, max)
}

pub fn numeric() -> FormatRule {
    Rules::default().numeric()
}

pub fn alpha() -> FormatRule {
    Rules::default().alpha()
}

pub fn alphanumeric() -> FormatRule {
    Rules::default().alphanumeric()
}

pub fn email() -> FormatRule {
    Rules::default().email()
}

pub fn url() -> Url {
    Rules::default().url()
}

pub fn ip_address(ipv4: bool, ipv6: bool) -> Result<IpAddress, RuleError> {
    Rules::default().ip_address(ipv4, ipv6)
}

pub fn mac_address() -> FormatRule {
    Rules::default().mac_address()
}

pub fn postal_code(region: Region) -> FormatRule {
    Rules::default().postal_code(region)
}

pub fn ssn() -> FormatRule {
    Rules::default().ssn()
}

pub fn username() -> FormatRule {
    Rules::default().username()
}

pub fn phone(region: Region) -> FormatRule {
    Rules::default().phone(region)
}

pub fn phone_international() -> FormatRule {
    Rules::default().phone_international()
}

pub fn date(format: DateFormat) -> FormatRule {
    Rules::default().date(format)
}

pub fn pattern(expr: &str) -> Result<CustomPattern, RuleError> {
    Rules::default().pattern(expr)
}

pub fn credit_card() -> CreditCard {
    Rules::default().credit_card()
}

pub fn credit_card_accepting(families: &[CardFamily]) -> Result<CreditCard, RuleError> {
    Rules::default().credit_card_accepting(families)
}

pub fn password(policy: PasswordPolicy) -> Result<PasswordRule, RuleError> {
    Rules::default().password(policy)
}
