//! Payment card number rule.

use crate::luhn::{self, CardFamily};
use crate::rule::is_blank;
use crate::{Outcome, Rule};

/// A Luhn-valid card number of 13 to 19 digits.
///
/// Only digits, spaces and hyphens are allowed in the input. When a list
/// of accepted families is configured, the detected family must be in it
/// and the digit count must suit that family.
#[derive(Debug, Clone)]
pub struct CreditCard {
    pub(crate) message: String,
    pub(crate) accepted: Option<Vec<CardFamily>>,
    /// Pre-rendered rejection messages for families outside `accepted`.
    pub(crate) rejections: Vec<(CardFamily, String)>,
}

impl CreditCard {
    pub fn accepted(&self) -> Option<&[CardFamily]> {
        self.accepted.as_deref()
    }

    fn check_number(&self, raw: &str) -> Outcome {
        let well_formed = raw
            .chars()
            .all(|c| c.is_ascii_digit() || c == ' ' || c == '-');
        if !well_formed || !luhn::validate_card(raw) {
            return Outcome::fail(&self.message);
        }

        let Some(accepted) = &self.accepted else {
            return Outcome::Pass;
        };
        match luhn::detect_family(raw) {
            Some(family) if accepted.contains(&family) => {
                if family.accepts_length(luhn::clean(raw).len()) {
                    Outcome::Pass
                } else {
                    Outcome::fail(&self.message)
                }
            }
            Some(family) => {
                let message = self
                    .rejections
                    .iter()
                    .find(|(f, _)| *f == family)
                    .map(|(_, m)| m.as_str())
                    .unwrap_or(self.message.as_str());
                Outcome::fail(message)
            }
            None => Outcome::fail(&self.message),
        }
    }
}

impl Rule for CreditCard {
    fn check(&self, value: Option<&str>) -> Outcome {
        match value {
            Some(v) if !is_blank(value) => self.check_number(v),
            _ => Outcome::Pass,
        }
    }

    fn name(&self) -> &'static str {
        "credit_card"
    }
}
