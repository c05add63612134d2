//! Class mutability analysis.
//!
//! Decoded class facts go in; a list of located reasons the class may be
//! mutable comes out. Callers accept the reasons they can live with and
//! assert on the rest.
//!
//! ```text
//! ClassFactsSource ──► AnalysisSession ──► AllChecksRunner ──► AnalysisResult
//!                         (per-class cache)                          │
//!                                                   AllowedReason ───┤
//!                                                                    ▼
//!                                                         assert_immutable
//! ```
//!
//! Enable logging with `RUST_LOG=mutdet_session=debug` (or `trace`) after
//! calling [`init_tracing`].

use std::sync::Once;

mod assert;

pub use assert::{AssertError, MutabilityAssert};
pub use mutdet_allow::{
    assert_immutable, is_allowed, AllowedReason, MutabilityAssertionError, Suppressed,
};
pub use mutdet_check::{
    AllChecksRunner, AnalysisConfig, AnalysisResult, CheckContext, CheckerError, CheckerKind,
    CheckerRegistry, CheckerRunner, Finding, Location, MutabilityChecker, MutableReason, Verdict,
    CHECKER_SET_VERSION,
};
pub use mutdet_ir::{
    AccessFlags, AssignedValue, ClassFacts, ClassFactsBuilder, ConstructorFacts, Dotted,
    FactsError, FieldFacts, InvalidName, MethodFacts, TypeDescriptor, TypeMutability, TypeShape,
    WellKnownTypes,
};
pub use mutdet_session::{AnalysisError, AnalysisSession, ClassFactsSource, ClassPool, LoadError};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times. Does nothing
/// unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // A host may already own the global subscriber.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
