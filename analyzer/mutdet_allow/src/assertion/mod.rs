//! Filtered verdicts and the immutability assertion.

use std::fmt;

use mutdet_check::{AnalysisResult, Finding, Verdict};
use mutdet_ir::Dotted;

use crate::{is_allowed, AllowedReason};

/// A result seen through a set of suppression rules. The result itself is
/// never modified.
pub struct Suppressed<'a> {
    result: &'a AnalysisResult,
    remaining: Vec<&'a Finding>,
    suppressed: Vec<&'a Finding>,
}

impl<'a> Suppressed<'a> {
    pub fn new(result: &'a AnalysisResult, rules: &[AllowedReason]) -> Self {
        let (suppressed, remaining) = result
            .findings()
            .iter()
            .partition(|finding| is_allowed(finding, rules));
        Suppressed {
            result,
            remaining,
            suppressed,
        }
    }

    pub fn result(&self) -> &'a AnalysisResult {
        self.result
    }

    /// Findings no rule accepted, in their original order.
    pub fn remaining(&self) -> &[&'a Finding] {
        &self.remaining
    }

    pub fn suppressed(&self) -> &[&'a Finding] {
        &self.suppressed
    }

    pub fn verdict(&self) -> Verdict {
        if self.remaining.is_empty() {
            Verdict::Immutable
        } else {
            Verdict::Mutable
        }
    }

    /// The assertion failure for this view, if any findings remain.
    pub fn into_error(self) -> Option<MutabilityAssertionError> {
        if self.remaining.is_empty() {
            return None;
        }
        Some(MutabilityAssertionError {
            class: self.result.class().clone(),
            findings: self.remaining.into_iter().cloned().collect(),
        })
    }
}

/// A class expected to be immutable was not.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct MutabilityAssertionError {
    pub class: Dotted,
    /// Every finding that survived suppression.
    pub findings: Vec<Finding>,
}

impl fmt::Display for MutabilityAssertionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "expected `{}` to be IMMUTABLE", self.class)?;
        write!(
            f,
            "     but: `{}` is NOT_IMMUTABLE with {} unsuppressed reason(s):",
            self.class,
            self.findings.len()
        )?;
        for finding in &self.findings {
            write!(
                f,
                "\n        {}: {} [{}]",
                finding.reason, finding.message, finding.location
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for MutabilityAssertionError {}

/// Succeeds iff every finding in `result` is accepted by some rule.
pub fn assert_immutable(
    result: &AnalysisResult,
    rules: &[AllowedReason],
) -> Result<(), MutabilityAssertionError> {
    match Suppressed::new(result, rules).into_error() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
