//! Session-bound immutability assertions.

use mutdet_allow::{assert_immutable, AllowedReason, MutabilityAssertionError};
use mutdet_ir::Dotted;
use mutdet_session::{AnalysisError, AnalysisSession, ClassFactsSource};

/// Why an assertion did not pass.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum AssertError {
    /// The class could not be analysed at all.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
    /// The class was analysed and is not immutable.
    #[error(transparent)]
    NotImmutable(#[from] MutabilityAssertionError),
}

/// Asserts immutability of classes analysed through one session.
///
/// Every assertion against the same class reuses the session's cached
/// result; suppression rules only change the verdict, never the result.
pub struct MutabilityAssert {
    session: AnalysisSession,
}

impl MutabilityAssert {
    pub fn new(session: AnalysisSession) -> Self {
        MutabilityAssert { session }
    }

    /// Shorthand for a default-configured session over `source`.
    pub fn over(source: impl ClassFactsSource + 'static) -> Self {
        Self::new(AnalysisSession::new(source))
    }

    pub fn session(&self) -> &AnalysisSession {
        &self.session
    }

    /// Passes iff `class` has no findings at all.
    pub fn assert_immutable(&self, class: &Dotted) -> Result<(), AssertError> {
        self.assert_instances_of(class, &[])
    }

    /// Passes iff every finding for `class` is accepted by some rule.
    pub fn assert_instances_of(
        &self,
        class: &Dotted,
        rules: &[AllowedReason],
    ) -> Result<(), AssertError> {
        let result = self.session.result_for(class)?;
        assert_immutable(&result, rules).map_err(|err| {
            tracing::debug!(class = %class, remaining = err.findings.len(), "assertion failed");
            AssertError::from(err)
        })
    }
}
