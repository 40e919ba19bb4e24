//! Forbidden value section - rejects common passwords and the disallowed value.

use super::Terminal;
use crate::PasswordPolicy;

/// Checks the password against the policy's forbidden values, then
/// against the disallowed value.
///
/// # Returns
/// - `Some(terminal)` if evaluation must stop here
/// - `None` otherwise
pub fn forbidden_section(password: &str, policy: &PasswordPolicy) -> Option<Terminal> {
    if policy.is_forbidden(password) {
        return Some(Terminal::Common);
    }
    if policy.is_disallowed(password) {
        return Some(Terminal::Disallowed);
    }
    None
}
