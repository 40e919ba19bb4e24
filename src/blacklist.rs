//! Common password list loading
//!
//! Reads a list of common passwords to feed into
//! [`PasswordPolicy::with_forbidden_values`](crate::PasswordPolicy::with_forbidden_values).

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding the list location.
pub const COMMON_PASSWORDS_ENV: &str = "FIELDCHECK_COMMON_PASSWORDS_PATH";

pub const DEFAULT_COMMON_PASSWORDS_PATH: &str = "./assets/common-passwords.txt";

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Common password list not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read common password list: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Common password list is empty")]
    EmptyFile,
}

/// Returns the common password list path.
///
/// Priority:
/// 1. Environment variable `FIELDCHECK_COMMON_PASSWORDS_PATH`
/// 2. Default path `./assets/common-passwords.txt`
pub fn get_blacklist_path() -> PathBuf {
    std::env::var(COMMON_PASSWORDS_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_COMMON_PASSWORDS_PATH))
}

/// Loads the common password list from the configured path.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
///
/// # Example
///
/// ```rust,no_run
/// use fieldcheck::{load_common_passwords, PasswordPolicy};
///
/// let common = load_common_passwords().expect("Failed to load common passwords");
/// let policy = PasswordPolicy::new().with_forbidden_values(&common);
/// ```
pub fn load_common_passwords() -> Result<HashSet<String>, BlacklistError> {
    load_common_passwords_from_path(get_blacklist_path())
}

/// Loads the common password list from a specific file path.
///
/// One password per line. Entries are trimmed and lowercased; blank lines
/// are skipped.
pub fn load_common_passwords_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<HashSet<String>, BlacklistError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Common password list FAILED: FileNotFound {}", path.display());
        return Err(BlacklistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Common password list FAILED: Empty file {}", path.display());
        return Err(BlacklistError::EmptyFile);
    }

    let set: HashSet<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    #[cfg(feature = "tracing")]
    tracing::info!("Common password list loaded: {} entries from {:?}", set.len(), path);

    Ok(set)
}
