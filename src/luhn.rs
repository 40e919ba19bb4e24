//! Luhn (mod 10) checksum and card issuer detection.
//!
//! Luhn catches single-digit typos and most adjacent swaps. It is an
//! error-detection code, not a security check.

use std::fmt;

use crate::RuleError;

/// Digit count bounds for payment card numbers.
pub const CARD_MIN_DIGITS: usize = 13;
pub const CARD_MAX_DIGITS: usize = 19;

/// A leading-digit rule identifying an issuer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixRule {
    /// The number starts with this literal.
    Literal(&'static str),
    /// The first `digits` digits, read as an integer, fall in `start..=end`.
    Range { digits: usize, start: u32, end: u32 },
}

impl PrefixRule {
    pub fn matches(&self, digits: &str) -> bool {
        match *self {
            PrefixRule::Literal(prefix) => digits.starts_with(prefix),
            PrefixRule::Range { digits: len, start, end } => digits
                .get(..len)
                .and_then(|lead| lead.parse::<u32>().ok())
                .is_some_and(|lead| (start..=end).contains(&lead)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardFamily {
    Visa,
    Mastercard,
    Amex,
    Discover,
}

const VISA_PREFIXES: &[PrefixRule] = &[PrefixRule::Literal("4")];
const MASTERCARD_PREFIXES: &[PrefixRule] = &[
    PrefixRule::Literal("5"),
    PrefixRule::Range { digits: 4, start: 2221, end: 2720 },
];
const AMEX_PREFIXES: &[PrefixRule] = &[PrefixRule::Literal("34"), PrefixRule::Literal("37")];
const DISCOVER_PREFIXES: &[PrefixRule] = &[
    PrefixRule::Literal("6011"),
    PrefixRule::Literal("65"),
    PrefixRule::Range { digits: 6, start: 622126, end: 622925 },
    PrefixRule::Range { digits: 3, start: 644, end: 649 },
];

impl CardFamily {
    /// Families in detection priority order. Prefix ranges overlap
    /// numerically across families, so the first match wins.
    pub const PRIORITY: [CardFamily; 4] = [
        CardFamily::Visa,
        CardFamily::Mastercard,
        CardFamily::Amex,
        CardFamily::Discover,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CardFamily::Visa => "Visa",
            CardFamily::Mastercard => "Mastercard",
            CardFamily::Amex => "American Express",
            CardFamily::Discover => "Discover",
        }
    }

    /// Accepted total digit counts, ascending.
    pub fn lengths(&self) -> &'static [usize] {
        match self {
            CardFamily::Visa => &[13, 16, 19],
            CardFamily::Mastercard => &[16],
            CardFamily::Amex => &[15],
            CardFamily::Discover => &[16, 19],
        }
    }

    pub fn prefixes(&self) -> &'static [PrefixRule] {
        match self {
            CardFamily::Visa => VISA_PREFIXES,
            CardFamily::Mastercard => MASTERCARD_PREFIXES,
            CardFamily::Amex => AMEX_PREFIXES,
            CardFamily::Discover => DISCOVER_PREFIXES,
        }
    }

    pub fn accepts_length(&self, len: usize) -> bool {
        self.lengths().contains(&len)
    }

    fn matches_prefix(&self, digits: &str) -> bool {
        self.prefixes().iter().any(|rule| rule.matches(digits))
    }
}

impl fmt::Display for CardFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Strips every non-digit character.
pub fn clean(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Luhn sum of an all-digit string.
fn luhn_sum(digits: &str) -> u32 {
    digits
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let d = u32::from(b - b'0');
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum()
}

/// Validates `raw` with the Luhn checksum, ignoring separators.
///
/// Fewer than two digits never validates. An all-zero number validates,
/// since its sum is zero.
pub fn validate(raw: &str) -> bool {
    let digits = clean(raw);
    if digits.len() < 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    luhn_sum(&digits) % 10 == 0
}

/// Like [`validate`], but also requires a card-sized number (13 to 19 digits).
pub fn validate_card(raw: &str) -> bool {
    let len = clean(raw).len();
    (CARD_MIN_DIGITS..=CARD_MAX_DIGITS).contains(&len) && validate(raw)
}

/// Computes the check digit that makes `partial` followed by it valid.
///
/// Whitespace and hyphens are ignored. Any other non-digit, or a number
/// with no digits at all, is rejected.
pub fn generate_check_digit(partial: &str) -> Result<u8, RuleError> {
    let mut digits = String::with_capacity(partial.len() + 1);
    for c in partial.chars() {
        match c {
            '0'..='9' => digits.push(c),
            '-' => {}
            c if c.is_whitespace() => {}
            other => {
                return Err(RuleError::InvalidArgument(format!(
                    "non-digit character '{}' in partial number",
                    other.escape_default()
                )));
            }
        }
    }
    if digits.is_empty() {
        return Err(RuleError::InvalidArgument(
            "partial number has no digits".to_string(),
        ));
    }

    digits.push('0');
    let check = (10 - luhn_sum(&digits) % 10) % 10;
    Ok(check as u8)
}

/// Detects the issuing family from the leading digits.
pub fn detect_family(raw: &str) -> Option<CardFamily> {
    let digits = clean(raw);
    if digits.is_empty() {
        return None;
    }
    CardFamily::PRIORITY
        .into_iter()
        .find(|family| family.matches_prefix(&digits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_known_numbers() {
        assert!(validate("4111111111111111"));
        assert!(validate("5500000000000004"));
        assert!(validate("378282246310005"));
        assert!(validate("6011111111111117"));
        assert!(validate("79927398713"));
        assert!(!validate("4111111111111112"));
        assert!(!validate("79927398710"));
    }

    #[test]
    fn test_validate_ignores_separators() {
        let plain = "4111111111111111";
        assert!(validate("4111 1111 1111 1111"));
        assert!(validate("4111-1111-1111-1111"));
        assert!(validate(" 4-1 1 1.1111/11111111 "));
        assert_eq!(validate("4111 1111 1111 1112"), validate("4111111111111112"));
        assert!(validate(plain));
    }

    #[test]
    fn test_validate_needs_two_digits() {
        assert!(!validate(""));
        assert!(!validate("0"));
        assert!(!validate("abc"));
        assert!(validate("00"));
        assert!(validate("18"));
    }

    #[test]
    fn test_all_zeros_validate() {
        for len in 2..=25 {
            assert!(validate(&"0".repeat(len)), "length {len}");
        }
        assert!(validate_card(&"0".repeat(13)));
    }

    #[test]
    fn test_validate_card_length_bounds() {
        // 12 digits, valid checksum
        assert!(validate("000000000000"));
        assert!(!validate_card("000000000000"));
        assert!(validate_card("4222222222222"));
        assert!(!validate_card(&"0".repeat(20)));
        assert!(validate_card("4111-1111-1111-1111"));
    }

    #[test]
    fn test_generate_check_digit() {
        assert_eq!(generate_check_digit("7992739871"), Ok(3));
        assert_eq!(generate_check_digit("411111111111111"), Ok(1));
        assert_eq!(generate_check_digit("0"), Ok(0));
        assert_eq!(generate_check_digit("4111 1111-1111 111"), Ok(1));
    }

    #[test]
    fn test_generated_digit_always_validates() {
        let partials = ["1", "9", "12", "401288888888188", "37828224631000", "6011000990139", "5"];
        for partial in partials {
            let check = generate_check_digit(partial).expect("numeric partial");
            assert!(check <= 9);
            assert!(validate(&format!("{partial}{check}")), "partial {partial}");
        }
    }

    #[test]
    fn test_generate_check_digit_rejects_bad_input() {
        assert!(matches!(generate_check_digit(""), Err(RuleError::InvalidArgument(_))));
        assert!(matches!(generate_check_digit(" - "), Err(RuleError::InvalidArgument(_))));
        assert!(matches!(generate_check_digit("12a4"), Err(RuleError::InvalidArgument(_))));
    }

    #[test]
    fn test_detect_family() {
        assert_eq!(detect_family("4111111111111111"), Some(CardFamily::Visa));
        assert_eq!(detect_family("5500 0000 0000 0004"), Some(CardFamily::Mastercard));
        assert_eq!(detect_family("2221000000000009"), Some(CardFamily::Mastercard));
        assert_eq!(detect_family("2720990000000007"), Some(CardFamily::Mastercard));
        assert_eq!(detect_family("378282246310005"), Some(CardFamily::Amex));
        assert_eq!(detect_family("341111111111111"), Some(CardFamily::Amex));
        assert_eq!(detect_family("6011111111111117"), Some(CardFamily::Discover));
        assert_eq!(detect_family("6500000000000002"), Some(CardFamily::Discover));
        assert_eq!(detect_family("6221260000000000"), Some(CardFamily::Discover));
        assert_eq!(detect_family("6449000000000000"), Some(CardFamily::Discover));
    }

    #[test]
    fn test_detect_family_no_match() {
        assert_eq!(detect_family(""), None);
        assert_eq!(detect_family("--"), None);
        assert_eq!(detect_family("2220990000000000"), None);
        assert_eq!(detect_family("2721000000000000"), None);
        assert_eq!(detect_family("6221250000000000"), None);
        assert_eq!(detect_family("3530111333300000"), None);
        // too short for the range rules
        assert_eq!(detect_family("222"), None);
    }

    #[test]
    fn test_visa_wins_over_overlapping_rules() {
        // A Discover-style 3-digit range that also covers Visa numbers.
        let overlapping = PrefixRule::Range { digits: 3, start: 400, end: 649 };
        let number = "4011111111111111";
        assert!(overlapping.matches(number));
        assert!(CardFamily::Visa.matches_prefix(number));
        assert_eq!(detect_family(number), Some(CardFamily::Visa));
        assert_eq!(detect_family("4"), Some(CardFamily::Visa));
    }

    #[test]
    fn test_detect_family_returns_first_in_priority() {
        let numbers = ["4111", "5100", "2500", "3400", "3700", "6011", "6500", "6221260", "6450"];
        for number in numbers {
            let first = CardFamily::PRIORITY
                .into_iter()
                .find(|f| f.matches_prefix(number));
            assert_eq!(detect_family(number), first, "number {number}");
        }
    }

    #[test]
    fn test_prefix_rule_range() {
        let rule = PrefixRule::Range { digits: 3, start: 644, end: 649 };
        assert!(rule.matches("644"));
        assert!(rule.matches("6491234"));
        assert!(!rule.matches("643"));
        assert!(!rule.matches("64"));
    }

    #[test]
    fn test_family_lengths() {
        assert!(CardFamily::Amex.accepts_length(15));
        assert!(!CardFamily::Amex.accepts_length(16));
        assert!(CardFamily::Visa.accepts_length(13));
        assert_eq!(CardFamily::Mastercard.to_string(), "Mastercard");
    }
}
