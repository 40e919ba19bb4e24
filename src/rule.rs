//! The `Rule` abstraction and the pipeline composer.

use crate::Outcome;

/// A single named check over an optional field value.
///
/// `None` and whitespace-only input are both treated as blank. Rules are
/// immutable and safe to reuse across any number of calls.
pub trait Rule: Send + Sync {
    fn check(&self, value: Option<&str>) -> Outcome;

    fn name(&self) -> &'static str {
        "custom"
    }

    /// Two-state form: `None` means pass, `Some(message)` means fail.
    fn validate(&self, value: Option<&str>) -> Option<String> {
        self.check(value).into_message()
    }

    fn boxed(self) -> BoxedRule
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

pub type BoxedRule = Box<dyn Rule>;

impl<F> Rule for F
where
    F: Fn(Option<&str>) -> Outcome + Send + Sync,
{
    fn check(&self, value: Option<&str>) -> Outcome {
        self(value)
    }
}

/// Returns true for absent or whitespace-only input.
pub(crate) fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Rules evaluated strictly in order, stopping at the first failure.
pub struct Combined {
    rules: Vec<BoxedRule>,
}

impl Combined {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule to the end of the pipeline.
    pub fn then<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for Combined {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for Combined {
    fn check(&self, value: Option<&str>) -> Outcome {
        for rule in &self.rules {
            let outcome = rule.check(value);
            if !outcome.is_pass() {
                #[cfg(feature = "tracing")]
                tracing::debug!("Pipeline stopped at rule: {}", rule.name());
                return outcome;
            }
        }
        Outcome::Pass
    }

    fn name(&self) -> &'static str {
        "combine"
    }
}

/// Combines rules into one that reports only the first failure.
///
/// An empty list always passes.
pub fn combine(rules: Vec<BoxedRule>) -> Combined {
    Combined { rules }
}

/// A rule applied only while a caller-supplied predicate holds.
pub struct Conditional<P, R> {
    predicate: P,
    rule: R,
}

impl<P, R> Rule for Conditional<P, R>
where
    P: Fn() -> bool + Send + Sync,
    R: Rule,
{
    fn check(&self, value: Option<&str>) -> Outcome {
        if (self.predicate)() {
            self.rule.check(value)
        } else {
            Outcome::Pass
        }
    }

    fn name(&self) -> &'static str {
        "conditional"
    }
}

/// Applies `rule` only when `predicate` returns true; otherwise passes.
///
/// Form state is captured by the predicate closure.
pub fn conditional<P, R>(predicate: P, rule: R) -> Conditional<P, R>
where
    P: Fn() -> bool + Send + Sync,
    R: Rule,
{
    Conditional { predicate, rule }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    fn failing(message: &'static str) -> BoxedRule {
        Box::new(move |_: Option<&str>| Outcome::fail(message))
    }

    fn passing() -> BoxedRule {
        Box::new(|_: Option<&str>| Outcome::Pass)
    }

    #[test]
    fn test_combine_returns_first_failure() {
        let rule = combine(vec![failing("first"), failing("second")]);
        assert_eq!(rule.check(Some("x")), Outcome::fail("first"));
    }

    #[test]
    fn test_combine_skips_to_later_failure() {
        let rule = combine(vec![passing(), failing("second"), failing("third")]);
        assert_eq!(rule.validate(Some("x")), Some("second".to_string()));
    }

    #[test]
    fn test_combine_empty_is_identity() {
        let rule = combine(Vec::new());
        assert_eq!(rule.check(None), Outcome::Pass);
        assert_eq!(rule.check(Some("anything")), Outcome::Pass);
    }

    #[test]
    fn test_combine_short_circuits() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let counting = move |_: Option<&str>| {
            counter.fetch_add(1, Ordering::SeqCst);
            Outcome::Pass
        };
        let rule = Combined::new()
            .then(|_: Option<&str>| Outcome::fail("stop"))
            .then(counting);
        assert_eq!(rule.len(), 2);
        assert!(!rule.check(Some("x")).is_pass());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_conditional_follows_predicate() {
        let enabled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&enabled);
        let rule = conditional(
            move || flag.load(Ordering::SeqCst),
            |_: Option<&str>| Outcome::fail("guarded"),
        );

        assert_eq!(rule.check(Some("x")), Outcome::Pass);
        enabled.store(true, Ordering::SeqCst);
        assert_eq!(rule.check(Some("x")), Outcome::fail("guarded"));
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(None));
        assert!(is_blank(Some("")));
        assert!(is_blank(Some("  \t")));
        assert!(!is_blank(Some(" a ")));
    }
}
