//! Analysis orchestrator.
//!
//! [`AllChecksRunner`] runs the canonical checker set over one class and
//! wraps the findings as an [`AnalysisResult`]. Identical facts always give
//! identical, identically-ordered findings.

use std::fmt;

use mutdet_ir::{ClassFacts, Dotted, WellKnownTypes};

use crate::{
    AnalysisConfig, CheckContext, CheckerRegistry, CheckerRunner, Finding, MutabilityChecker,
    MutableReason,
};

/// Overall verdict for a class.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    Immutable,
    Mutable,
}

impl Verdict {
    /// Immutable iff there are no findings.
    pub fn from_findings(findings: &[Finding]) -> Self {
        if findings.is_empty() {
            Verdict::Immutable
        } else {
            Verdict::Mutable
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Immutable => write!(f, "IMMUTABLE"),
            Verdict::Mutable => write!(f, "NOT_IMMUTABLE"),
        }
    }
}

/// The findings for one class. Never mutated after creation.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysisResult {
    class: Dotted,
    findings: Vec<Finding>,
}

impl AnalysisResult {
    pub fn new(class: Dotted, findings: Vec<Finding>) -> Self {
        AnalysisResult { class, findings }
    }

    pub fn class(&self) -> &Dotted {
        &self.class
    }

    /// Findings in checker execution order.
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from_findings(&self.findings)
    }

    pub fn is_immutable(&self) -> bool {
        self.verdict() == Verdict::Immutable
    }

    /// Some checker failed, so the absence of other findings proves nothing.
    pub fn is_inconclusive(&self) -> bool {
        self.findings
            .iter()
            .any(|finding| finding.reason == MutableReason::CannotAnalyse)
    }

    pub fn reasons(&self) -> impl Iterator<Item = MutableReason> + '_ {
        self.findings.iter().map(|finding| finding.reason)
    }

    pub fn findings_at<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Finding> {
        self.findings
            .iter()
            .filter(move |finding| finding.field_name() == Some(field))
    }
}

/// Runs the full canonical checker set.
pub struct AllChecksRunner {
    checkers: Vec<&'static dyn MutabilityChecker>,
    types: WellKnownTypes,
    runner: CheckerRunner,
}

impl AllChecksRunner {
    pub fn new(config: &AnalysisConfig) -> Self {
        AllChecksRunner {
            checkers: CheckerRegistry::new().canonical(),
            types: config.well_known_types(),
            runner: CheckerRunner::new(),
        }
    }

    /// The type table checkers run against.
    pub fn types(&self) -> &WellKnownTypes {
        &self.types
    }

    /// Analyse one class.
    #[tracing::instrument(level = "debug", skip_all, fields(class = %facts.name()))]
    pub fn analyse(&self, facts: &ClassFacts) -> AnalysisResult {
        let ctx = CheckContext::new(facts, &self.types);
        let findings = self.runner.run(&self.checkers, &ctx);
        tracing::debug!(count = findings.len(), "analysis complete");
        AnalysisResult::new(facts.name().clone(), findings)
    }
}

impl Default for AllChecksRunner {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}
