//! Pattern analysis sections - detect sequential and repeated runs.

use super::{Criterion, SectionResult};

const RUN_WINDOW: usize = 3;

/// Returns true if any window of three characters steps uniformly by +1
/// or by -1 in code point (e.g. "abc", "321").
pub fn has_sequential_run(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars.windows(RUN_WINDOW).any(|window| {
        let steps: Vec<i64> = window
            .windows(2)
            .map(|pair| pair[1] as i64 - pair[0] as i64)
            .collect();
        steps.iter().all(|&s| s == 1) || steps.iter().all(|&s| s == -1)
    })
}

/// Returns true if any three consecutive characters are identical.
pub fn has_repeated_run(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars
        .windows(RUN_WINDOW)
        .any(|window| window.iter().all(|&c| c == window[0]))
}

pub fn sequential_run_section(password: &str) -> SectionResult {
    has_sequential_run(password).then_some(Criterion::NoSequential)
}

pub fn repeated_run_section(password: &str) -> SectionResult {
    has_repeated_run(password).then_some(Criterion::NoRepeated)
}
