//! Format rules backed by the pattern table.

use regex::Regex;

use crate::patterns::{matches, Pattern};
use crate::rule::is_blank;
use crate::{Outcome, Rule, RuleError};

/// Passes blank input; otherwise the value must match one pattern.
#[derive(Debug, Clone)]
pub struct FormatRule {
    pub(crate) name: &'static str,
    pub(crate) pattern: Pattern,
    pub(crate) message: String,
}

impl FormatRule {
    pub fn pattern(&self) -> Pattern {
        self.pattern
    }
}

impl Rule for FormatRule {
    fn check(&self, value: Option<&str>) -> Outcome {
        match value {
            Some(v) if !is_blank(value) && !matches(v, self.pattern) => {
                Outcome::fail(&self.message)
            }
            _ => Outcome::Pass,
        }
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

/// An `http` or `https` URL with a dotted host.
#[derive(Debug, Clone)]
pub struct Url {
    pub(crate) message: String,
}

impl Url {
    fn is_url(value: &str) -> bool {
        let rest = match value
            .strip_prefix("http://")
            .or_else(|| value.strip_prefix("https://"))
        {
            Some(rest) => rest,
            None => return false,
        };
        let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
        host.contains('.') && matches(value, Pattern::Url)
    }
}

impl Rule for Url {
    fn check(&self, value: Option<&str>) -> Outcome {
        match value {
            Some(v) if !is_blank(value) && !Self::is_url(v) => Outcome::fail(&self.message),
            _ => Outcome::Pass,
        }
    }

    fn name(&self) -> &'static str {
        "url"
    }
}

/// IPv4 and/or IPv6 address.
#[derive(Debug, Clone)]
pub struct IpAddress {
    ipv4: bool,
    ipv6: bool,
    message: String,
}

impl IpAddress {
    pub(crate) fn new(ipv4: bool, ipv6: bool, message: String) -> Result<Self, RuleError> {
        if !ipv4 && !ipv6 {
            return Err(RuleError::NoIpVersion);
        }
        Ok(Self { ipv4, ipv6, message })
    }
}

impl Rule for IpAddress {
    fn check(&self, value: Option<&str>) -> Outcome {
        let Some(v) = value.filter(|_| !is_blank(value)) else {
            return Outcome::Pass;
        };
        let valid = (self.ipv4 && matches(v, Pattern::Ipv4))
            || (self.ipv6 && matches(v, Pattern::Ipv6));
        if valid {
            Outcome::Pass
        } else {
            Outcome::fail(&self.message)
        }
    }

    fn name(&self) -> &'static str {
        "ip_address"
    }
}

/// A caller-supplied expression, anchored to the whole value.
#[derive(Debug, Clone)]
pub struct CustomPattern {
    regex: Regex,
    message: String,
}

impl CustomPattern {
    pub(crate) fn new(expr: &str, message: String) -> Result<Self, RuleError> {
        if expr.trim().is_empty() {
            return Err(RuleError::InvalidPattern("pattern is empty".to_string()));
        }
        let regex = Regex::new(&format!("^(?:{})$", expr))
            .map_err(|e| RuleError::InvalidPattern(e.to_string()))?;
        Ok(Self { regex, message })
    }
}

impl Rule for CustomPattern {
    fn check(&self, value: Option<&str>) -> Outcome {
        match value {
            Some(v) if !is_blank(value) && !self.regex.is_match(v) => {
                Outcome::fail(&self.message)
            }
            _ => Outcome::Pass,
        }
    }

    fn name(&self) -> &'static str {
        "pattern"
    }
}

#[cfg(test)]
mod tests {
    use crate::patterns::{DateFormat, Region};
    use crate::rules::*;
    use crate::{BoxedRule, Outcome, Rule, RuleError};

    #[test]
    fn test_blank_always_passes() {
        let rules: Vec<BoxedRule> = vec![
            email().boxed(),
            url().boxed(),
            numeric().boxed(),
            ip_address(true, true).expect("valid").boxed(),
            mac_address().boxed(),
            postal_code(Region::Us).boxed(),
            ssn().boxed(),
            username().boxed(),
            phone(Region::Uk).boxed(),
            date(DateFormat::Iso).boxed(),
            pattern("[a-z]+").expect("valid").boxed(),
        ];
        for rule in &rules {
            assert!(rule.check(None).is_pass(), "{}", rule.name());
            assert!(rule.check(Some("")).is_pass(), "{}", rule.name());
            assert!(rule.check(Some("  ")).is_pass(), "{}", rule.name());
        }
    }

    #[test]
    fn test_email() {
        let rule = email();
        assert!(rule.check(Some("user@example.com")).is_pass());
        assert_eq!(
            rule.check(Some("not-an-email")),
            Outcome::fail("Please enter a valid email address")
        );
    }

    #[test]
    fn test_url() {
        let rule = url();
        assert!(rule.check(Some("https://example.com")).is_pass());
        assert!(rule.check(Some("http://sub.example.org/path?q=1")).is_pass());
        assert!(!rule.check(Some("ftp://example.com")).is_pass());
        assert!(!rule.check(Some("https://localhost/path.html")).is_pass());
        assert!(!rule.check(Some("example.com")).is_pass());
        assert!(!rule.check(Some("https://exa mple.com")).is_pass());
    }

    #[test]
    fn test_ip_address_versions() {
        let v4 = ip_address(true, false).expect("valid");
        assert!(v4.check(Some("10.0.0.1")).is_pass());
        assert!(!v4.check(Some("::1")).is_pass());

        let v6 = ip_address(false, true).expect("valid");
        assert!(v6.check(Some("fe80::1")).is_pass());
        assert!(!v6.check(Some("10.0.0.1")).is_pass());

        let both = ip_address(true, true).expect("valid");
        assert!(both.check(Some("10.0.0.1")).is_pass());
        assert!(both.check(Some("fe80::1")).is_pass());
        assert_eq!(
            both.check(Some("10.0.0")),
            Outcome::fail("Please enter a valid IP address")
        );
    }

    #[test]
    fn test_ip_address_needs_a_version() {
        assert_eq!(ip_address(false, false).err(), Some(RuleError::NoIpVersion));
    }

    #[test]
    fn test_regional_messages() {
        assert_eq!(
            postal_code(Region::Ca).validate(Some("12345")),
            Some("Please enter a valid CA postal code".to_string())
        );
        assert_eq!(
            phone(Region::In).validate(Some("12345")),
            Some("Please enter a valid IN phone number".to_string())
        );
        assert_eq!(
            date(DateFormat::Eu).validate(Some("2024-01-01")),
            Some("Please enter a valid date (DD/MM/YYYY)".to_string())
        );
    }

    #[test]
    fn test_format_rules_accept_valid_input() {
        assert!(numeric().check(Some("-12.5")).is_pass());
        assert!(alpha().check(Some("abc")).is_pass());
        assert!(alphanumeric().check(Some("abc123")).is_pass());
        assert!(mac_address().check(Some("AA:BB:CC:DD:EE:FF")).is_pass());
        assert!(ssn().check(Some("123-45-6789")).is_pass());
        assert!(username().check(Some("jane_doe")).is_pass());
        assert!(phone_international().check(Some("+442071838750")).is_pass());
        assert!(postal_code(Region::De).check(Some("10115")).is_pass());
    }

    #[test]
    fn test_format_rules_do_not_trim() {
        assert!(!email().check(Some(" user@example.com")).is_pass());
    }

    #[test]
    fn test_custom_pattern_is_anchored() {
        let rule = pattern("[A-Z]{3}").expect("valid");
        assert!(rule.check(Some("ABC")).is_pass());
        assert_eq!(rule.check(Some("xABCx")), Outcome::fail("Invalid format"));
    }

    #[test]
    fn test_custom_pattern_rejects_bad_config() {
        assert!(matches!(pattern(""), Err(RuleError::InvalidPattern(_))));
        assert!(matches!(pattern("   "), Err(RuleError::InvalidPattern(_))));
        assert!(matches!(pattern("(unclosed"), Err(RuleError::InvalidPattern(_))));
    }
}
