//! Checker runner.
//!
//! Runs an ordered set of checkers over one class and concatenates their
//! findings. A checker that fails, by returning an error or by panicking,
//! contributes exactly one `CANNOT_ANALYSE` finding and the remaining
//! checkers still run: one broken checker must not hide every other
//! legitimate finding.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::{CheckContext, Finding, MutabilityChecker, MutableReason};

/// Stateless executor for a sequence of checkers.
#[derive(Copy, Clone, Debug, Default)]
pub struct CheckerRunner;

impl CheckerRunner {
    pub fn new() -> Self {
        CheckerRunner
    }

    /// Run `checkers` in order over `ctx`.
    ///
    /// The result preserves checker order and each checker's own ordering.
    /// No deduplication: two checkers may report on the same field.
    pub fn run(&self, checkers: &[&dyn MutabilityChecker], ctx: &CheckContext<'_>) -> Vec<Finding> {
        let mut findings = Vec::new();
        for checker in checkers {
            findings.extend(Self::run_one(*checker, ctx));
        }
        findings
    }

    fn run_one(checker: &dyn MutabilityChecker, ctx: &CheckContext<'_>) -> Vec<Finding> {
        // Checkers only read `ctx`, so no broken invariant is observable
        // after an unwind.
        let outcome = catch_unwind(AssertUnwindSafe(|| checker.check(ctx)));
        let cause = match outcome {
            Ok(Ok(findings)) => {
                tracing::trace!(
                    checker = checker.name(),
                    count = findings.len(),
                    "checker finished"
                );
                return findings;
            }
            Ok(Err(error)) => error.to_string(),
            Err(payload) => panic_message(payload.as_ref()),
        };
        tracing::warn!(
            checker = checker.name(),
            class = %ctx.class(),
            %cause,
            "checker failed, analysis inconclusive"
        );
        vec![Finding::at_class(
            MutableReason::CannotAnalyse,
            checker.kind(),
            ctx.class(),
            format!(
                "checker `{}` could not complete, analysis is inconclusive: {cause}",
                checker.name()
            ),
        )]
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "checker panicked".to_owned()
    }
}
