//! Length section - checks password length against the policy bounds.

use super::{Criterion, SectionResult};
use crate::PasswordPolicy;

/// Checks if the password length lies within the policy bounds.
///
/// Length is counted in characters. Both bounds are inclusive.
///
/// # Returns
/// - `Some(criterion)` naming the violated bound
/// - `None` if the length is acceptable
pub fn length_section(password: &str, policy: &PasswordPolicy) -> SectionResult {
    let len = password.chars().count();
    if len < policy.min_length() {
        return Some(Criterion::MinLength(policy.min_length()));
    }
    match policy.max_length() {
        Some(max) if len > max => Some(Criterion::MaxLength(max)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_too_short() {
        let policy = PasswordPolicy::default();
        assert_eq!(
            length_section("Short1!", &policy),
            Some(Criterion::MinLength(8))
        );
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        let policy = PasswordPolicy::default();
        assert_eq!(length_section("12345678", &policy), None);
    }

    #[test]
    fn test_length_section_too_long() {
        let policy = PasswordPolicy::default().with_max_length(10);
        assert_eq!(
            length_section("LongEnough123!", &policy),
            Some(Criterion::MaxLength(10))
        );
        assert_eq!(length_section("TenChars1!", &policy), None);
    }

    #[test]
    fn test_length_section_counts_chars_not_bytes() {
        let policy = PasswordPolicy::default().with_min_length(4).with_max_length(4);
        assert_eq!(length_section("äöüß", &policy), None);
    }
}
