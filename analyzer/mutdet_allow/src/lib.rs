//! Suppression rules and the immutability assertion.
//!
//! Callers decide which findings they are willing to live with by passing
//! [`AllowedReason`] rules. A finding is dropped from the verdict if any
//! rule accepts it; the stored [`AnalysisResult`](mutdet_check::AnalysisResult)
//! is never touched.

mod allowed;
mod assertion;

pub use allowed::{is_allowed, AllowedReason};
pub use assertion::{assert_immutable, MutabilityAssertionError, Suppressed};
