//! Contract violations raised by rule factories and the checksum engine.
//!
//! These are caller bugs, not invalid user data. Invalid user data is
//! reported through [`Outcome`](crate::Outcome) instead.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuleError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("IP address rule needs at least one of IPv4 or IPv6 enabled")]
    NoIpVersion,
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
    #[error("Invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: f64, max: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            RuleError::InvalidRange { min: 5.0, max: 1.0 }.to_string(),
            "Invalid range: min 5 is greater than max 1"
        );
        assert_eq!(
            RuleError::InvalidArgument("empty".to_string()).to_string(),
            "Invalid argument: empty"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RuleError>();
    }
}
