//! Analysis sessions.
//!
//! An [`AnalysisSession`] answers "is this class immutable?" queries, caching
//! decoded facts and results per class. Facts come from a
//! [`ClassFactsSource`]; [`ClassPool`] is the in-memory one.

mod error;
mod session;
mod slots;
mod source;

pub use error::AnalysisError;
pub use session::AnalysisSession;
pub use source::{ClassFactsSource, ClassPool, LoadError};
