//! Character variety section - checks the character classes the policy requires.

use super::Criterion;
use crate::PasswordPolicy;

/// Characters counted as "special".
pub const SPECIAL_CHARS: &str = r#"!@#$%^&*(),.?":{}|<>_-+=[]\/~`';"#;

pub fn is_special(c: char) -> bool {
    SPECIAL_CHARS.contains(c)
}

/// Checks that every character class required by the policy is present.
///
/// # Returns
/// Every missing class, in the order uppercase, lowercase, number, special.
pub fn character_variety_section(password: &str, policy: &PasswordPolicy) -> Vec<Criterion> {
    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(is_special);

    vec![
        if policy.requires_uppercase() && !has_upper { Some(Criterion::Uppercase) } else { None },
        if policy.requires_lowercase() && !has_lower { Some(Criterion::Lowercase) } else { None },
        if policy.requires_numbers() && !has_digit { Some(Criterion::Number) } else { None },
        if policy.requires_special_chars() && !has_special { Some(Criterion::Special) } else { None },
    ]
    .into_iter()
    .flatten()
    .collect()
}
