//! Composable validation rules for text form fields
//!
//! This library provides format rules (email, URL, phone, postal code,
//! network addresses), Luhn card number checks with issuer detection, and
//! a password complexity evaluator, all composable into pipelines.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `FIELDCHECK_COMMON_PASSWORDS_PATH`: Custom path to the common password list
//!   (default: `./assets/common-passwords.txt`)
//!
//! # Example
//!
//! ```rust
//! use fieldcheck::rules::{password, required};
//! use fieldcheck::{combine, luhn, score, PasswordPolicy, Rule};
//!
//! let policy = PasswordPolicy::new()
//!     .with_forbidden_values(["password123!"])
//!     .with_disallowed_equal_to("jdoe");
//! let field = combine(vec![
//!     required().boxed(),
//!     password(policy).expect("valid policy").boxed(),
//! ]);
//!
//! assert_eq!(field.validate(None), Some("This field is required".to_string()));
//! assert_eq!(field.validate(Some("Password123!")), Some("This password is too common".to_string()));
//! assert_eq!(field.validate(Some("Gr8!Ideas")), None);
//!
//! assert_eq!(score(Some("Password123!")).level().label(), "Very Strong");
//! assert!(luhn::validate("4111 1111 1111 1111"));
//! ```

// Internal modules
mod error;
mod evaluator;
mod outcome;
mod policy;
mod rule;
mod sections;

pub mod blacklist;
pub mod luhn;
pub mod messages;
pub mod patterns;
pub mod rules;

// Public API
pub use blacklist::{load_common_passwords, load_common_passwords_from_path, BlacklistError};
pub use error::RuleError;
pub use evaluator::{
    evaluate, evaluate_secret, evaluate_with, score, score_secret, ComplexityReport,
    StrengthLevel,
};
pub use luhn::CardFamily;
pub use messages::MessageCatalog;
pub use outcome::{Outcome, Severity, ValidationResult};
pub use policy::PasswordPolicy;
pub use rule::{combine, conditional, BoxedRule, Combined, Conditional, Rule};
pub use rules::Rules;
pub use sections::{has_repeated_run, has_sequential_run, SPECIAL_CHARS};
