//! Presence, length and numeric range rules.

use crate::rule::is_blank;
use crate::{Outcome, Rule};

/// Fails on absent or whitespace-only input.
#[derive(Debug, Clone)]
pub struct Required {
    pub(crate) message: String,
}

impl Rule for Required {
    fn check(&self, value: Option<&str>) -> Outcome {
        if is_blank(value) {
            Outcome::fail(&self.message)
        } else {
            Outcome::Pass
        }
    }

    fn name(&self) -> &'static str {
        "required"
    }
}

/// Requires at least `min` characters.
#[derive(Debug, Clone)]
pub struct MinLength {
    pub(crate) min: usize,
    pub(crate) message: String,
}

impl Rule for MinLength {
    fn check(&self, value: Option<&str>) -> Outcome {
        match value {
            Some(v) if !is_blank(value) && v.chars().count() < self.min => {
                Outcome::fail(&self.message)
            }
            _ => Outcome::Pass,
        }
    }

    fn name(&self) -> &'static str {
        "min_length"
    }
}

/// Allows at most `max` characters.
#[derive(Debug, Clone)]
pub struct MaxLength {
    pub(crate) max: usize,
    pub(crate) message: String,
}

impl Rule for MaxLength {
    fn check(&self, value: Option<&str>) -> Outcome {
        match value {
            Some(v) if !is_blank(value) && v.chars().count() > self.max => {
                Outcome::fail(&self.message)
            }
            _ => Outcome::Pass,
        }
    }

    fn name(&self) -> &'static str {
        "max_length"
    }
}

/// Requires a number within `min..=max`.
#[derive(Debug, Clone)]
pub struct Range {
    pub(crate) min: f64,
    pub(crate) max: f64,
    pub(crate) message: String,
}

impl Rule for Range {
    fn check(&self, value: Option<&str>) -> Outcome {
        let Some(v) = value.filter(|_| !is_blank(value)) else {
            return Outcome::Pass;
        };
        match v.trim().parse::<f64>() {
            Ok(n) if n.is_finite() && n >= self.min && n <= self.max => Outcome::Pass,
            _ => Outcome::fail(&self.message),
        }
    }

    fn name(&self) -> &'static str {
        "range"
    }
}

#[cfg(test)]
mod tests {
    use crate::rules::{max_length, min_length, range, required};
    use crate::{Outcome, Rule, RuleError};

    #[test]
    fn test_required() {
        let rule = required();
        assert_eq!(rule.check(None), Outcome::fail("This field is required"));
        assert_eq!(rule.validate(Some("   ")), Some("This field is required".to_string()));
        assert_eq!(rule.check(Some("x")), Outcome::Pass);
    }

    #[test]
    fn test_min_length() {
        let rule = min_length(5);
        assert_eq!(rule.check(Some("abcd")), Outcome::fail("Must be at least 5 characters"));
        assert!(rule.check(Some("abcde")).is_pass());
        assert!(rule.check(Some("")).is_pass());
        assert!(rule.check(None).is_pass());
    }

    #[test]
    fn test_max_length() {
        let rule = max_length(3);
        assert!(rule.check(Some("abc")).is_pass());
        assert!(rule.check(Some("äöü")).is_pass());
        assert_eq!(rule.check(Some("abcd")), Outcome::fail("Must be at most 3 characters"));
    }

    #[test]
    fn test_range() {
        let rule = range(1.0, 10.0).expect("valid range");
        assert!(rule.check(Some("1")).is_pass());
        assert!(rule.check(Some(" 10 ")).is_pass());
        assert!(rule.check(Some("5.5")).is_pass());
        assert_eq!(rule.check(Some("11")), Outcome::fail("Must be a number between 1 and 10"));
        assert!(!rule.check(Some("abc")).is_pass());
        assert!(!rule.check(Some("NaN")).is_pass());
        assert!(rule.check(None).is_pass());
    }

    #[test]
    fn test_range_rejects_bad_bounds() {
        assert!(matches!(range(10.0, 1.0), Err(RuleError::InvalidRange { .. })));
        assert!(range(f64::NAN, 1.0).is_err());
        assert!(range(3.0, 3.0).is_ok());
    }
}
