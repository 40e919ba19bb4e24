//! Pattern table used by the format rules.
//!
//! Every expression is anchored to the whole candidate and is case-sensitive.
//! Expressions are compiled once, on first use.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Regions with dedicated phone and postal code formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Us,
    Uk,
    Ca,
    De,
    Fr,
    In,
    Au,
}

impl Region {
    pub const ALL: [Region; 7] = [
        Region::Us,
        Region::Uk,
        Region::Ca,
        Region::De,
        Region::Fr,
        Region::In,
        Region::Au,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Region::Us => "US",
            Region::Uk => "UK",
            Region::Ca => "CA",
            Region::De => "DE",
            Region::Fr => "FR",
            Region::In => "IN",
            Region::Au => "AU",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFormat {
    /// `YYYY-MM-DD`
    Iso,
    /// `MM/DD/YYYY`
    Us,
    /// `DD/MM/YYYY`
    Eu,
}

impl DateFormat {
    pub fn layout(&self) -> &'static str {
        match self {
            DateFormat::Iso => "YYYY-MM-DD",
            DateFormat::Us => "MM/DD/YYYY",
            DateFormat::Eu => "DD/MM/YYYY",
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.layout())
    }
}

/// Symbolic identifier of a pattern in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    Email,
    Url,
    Numeric,
    Alpha,
    Alphanumeric,
    Ipv4,
    Ipv6,
    MacAddress,
    Ssn,
    Username,
    PostalCode(Region),
    Phone(Region),
    PhoneInternational,
    Date(DateFormat),
}

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    compile(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$")
});

static URL_REGEX: Lazy<Regex> = Lazy::new(|| compile(r"^https?://[^\s/$.?#][^\s]*$"));

static NUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| compile(r"^-?\d+(?:\.\d+)?$"));

static ALPHA_REGEX: Lazy<Regex> = Lazy::new(|| compile(r"^[a-zA-Z]+$"));

static ALPHANUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| compile(r"^[a-zA-Z0-9]+$"));

static IPV4_REGEX: Lazy<Regex> = Lazy::new(|| {
    compile(r"^(?:(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)\.){3}(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)$")
});

static IPV6_REGEX: Lazy<Regex> = Lazy::new(|| {
    compile(concat!(
        r"^(?:",
        r"(?:[0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}",
        r"|(?:[0-9a-fA-F]{1,4}:){1,7}:",
        r"|(?:[0-9a-fA-F]{1,4}:){1,6}:[0-9a-fA-F]{1,4}",
        r"|(?:[0-9a-fA-F]{1,4}:){1,5}(?::[0-9a-fA-F]{1,4}){1,2}",
        r"|(?:[0-9a-fA-F]{1,4}:){1,4}(?::[0-9a-fA-F]{1,4}){1,3}",
        r"|(?:[0-9a-fA-F]{1,4}:){1,3}(?::[0-9a-fA-F]{1,4}){1,4}",
        r"|(?:[0-9a-fA-F]{1,4}:){1,2}(?::[0-9a-fA-F]{1,4}){1,5}",
        r"|[0-9a-fA-F]{1,4}:(?::[0-9a-fA-F]{1,4}){1,6}",
        r"|:(?:(?::[0-9a-fA-F]{1,4}){1,7}|:)",
        r")$",
    ))
});

static MAC_REGEX: Lazy<Regex> = Lazy::new(|| compile(r"^(?:[0-9A-Fa-f]{2}[:-]){5}[0-9A-Fa-f]{2}$"));

// Area 000, 666 and 900-999, group 00 and serial 0000 are never issued.
static SSN_REGEX: Lazy<Regex> = Lazy::new(|| {
    compile(concat!(
        r"^(?:00[1-9]|0[1-9]\d|[1-578]\d{2}|6[0-57-9]\d|66[0-57-9])",
        r"-(?:0[1-9]|[1-9]\d)",
        r"-(?:000[1-9]|00[1-9]\d|0[1-9]\d{2}|[1-9]\d{3})$",
    ))
});

static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| compile(r"^[a-zA-Z][a-zA-Z0-9_]{2,19}$"));

static POSTAL_US: Lazy<Regex> = Lazy::new(|| compile(r"^\d{5}(?:-\d{4})?$"));
static POSTAL_UK: Lazy<Regex> = Lazy::new(|| compile(r"^[A-Z]{1,2}\d[A-Z\d]? ?\d[A-Z]{2}$"));
static POSTAL_CA: Lazy<Regex> =
    Lazy::new(|| compile(r"^[ABCEGHJ-NPRSTVXY]\d[ABCEGHJ-NPRSTV-Z] ?\d[ABCEGHJ-NPRSTV-Z]\d$"));
static POSTAL_DE: Lazy<Regex> = Lazy::new(|| compile(r"^\d{5}$"));
static POSTAL_FR: Lazy<Regex> = Lazy::new(|| compile(r"^(?:0[1-9]|[1-8]\d|9[0-8])\d{3}$"));
static POSTAL_IN: Lazy<Regex> = Lazy::new(|| compile(r"^[1-9]\d{5}$"));
static POSTAL_AU: Lazy<Regex> = Lazy::new(|| compile(r"^\d{4}$"));

// US and Canada share the North American numbering plan.
static PHONE_NANP: Lazy<Regex> =
    Lazy::new(|| compile(r"^(?:\+1[ .-]?)?(?:\([2-9]\d{2}\)|[2-9]\d{2})[ .-]?\d{3}[ .-]?\d{4}$"));
static PHONE_UK: Lazy<Regex> = Lazy::new(|| compile(r"^(?:\+44 ?|0)7\d{3} ?\d{6}$"));
static PHONE_DE: Lazy<Regex> = Lazy::new(|| compile(r"^(?:\+49 ?|0)[1-9]\d{1,4}[ /-]?\d{3,10}$"));
static PHONE_FR: Lazy<Regex> = Lazy::new(|| compile(r"^(?:\+33 ?|0)[1-9](?: ?\d{2}){4}$"));
static PHONE_IN: Lazy<Regex> = Lazy::new(|| compile(r"^(?:\+91[ -]?)?[6-9]\d{9}$"));
static PHONE_AU: Lazy<Regex> = Lazy::new(|| compile(r"^(?:\+61 ?|0)[2-478](?: ?\d){8}$"));
static PHONE_E164: Lazy<Regex> = Lazy::new(|| compile(r"^\+[1-9]\d{1,14}$"));

static DATE_ISO: Lazy<Regex> =
    Lazy::new(|| compile(r"^\d{4}-(?:0[1-9]|1[0-2])-(?:0[1-9]|[12]\d|3[01])$"));
static DATE_US: Lazy<Regex> =
    Lazy::new(|| compile(r"^(?:0[1-9]|1[0-2])/(?:0[1-9]|[12]\d|3[01])/\d{4}$"));
static DATE_EU: Lazy<Regex> =
    Lazy::new(|| compile(r"^(?:0[1-9]|[12]\d|3[01])/(?:0[1-9]|1[0-2])/\d{4}$"));

// The table is static; a bad expression here is a bug in this file.
fn compile(expr: &str) -> Regex {
    Regex::new(expr).unwrap_or_else(|e| panic!("invalid built-in pattern {expr}: {e}"))
}

impl Pattern {
    fn regex(&self) -> &'static Regex {
        match self {
            Pattern::Email => &EMAIL_REGEX,
            Pattern::Url => &URL_REGEX,
            Pattern::Numeric => &NUMERIC_REGEX,
            Pattern::Alpha => &ALPHA_REGEX,
            Pattern::Alphanumeric => &ALPHANUMERIC_REGEX,
            Pattern::Ipv4 => &IPV4_REGEX,
            Pattern::Ipv6 => &IPV6_REGEX,
            Pattern::MacAddress => &MAC_REGEX,
            Pattern::Ssn => &SSN_REGEX,
            Pattern::Username => &USERNAME_REGEX,
            Pattern::PostalCode(region) => match region {
                Region::Us => &POSTAL_US,
                Region::Uk => &POSTAL_UK,
                Region::Ca => &POSTAL_CA,
                Region::De => &POSTAL_DE,
                Region::Fr => &POSTAL_FR,
                Region::In => &POSTAL_IN,
                Region::Au => &POSTAL_AU,
            },
            Pattern::Phone(region) => match region {
                Region::Us | Region::Ca => &PHONE_NANP,
                Region::Uk => &PHONE_UK,
                Region::De => &PHONE_DE,
                Region::Fr => &PHONE_FR,
                Region::In => &PHONE_IN,
                Region::Au => &PHONE_AU,
            },
            Pattern::PhoneInternational => &PHONE_E164,
            Pattern::Date(format) => match format {
                DateFormat::Iso => &DATE_ISO,
                DateFormat::Us => &DATE_US,
                DateFormat::Eu => &DATE_EU,
            },
        }
    }
}

/// Returns whether the whole of `candidate` matches `pattern`.
pub fn matches(candidate: &str, pattern: Pattern) -> bool {
    pattern.regex().is_match(candidate)
}
