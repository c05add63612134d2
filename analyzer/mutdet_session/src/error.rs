use mutdet_ir::{Dotted, InvalidName};

use crate::LoadError;

/// Why a session query could not produce a result.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("class `{0}` could not be found")]
    ClassNotFound(Dotted),
    #[error(transparent)]
    InvalidName(#[from] InvalidName),
    #[error("class `{class}` could not be decoded: {reason}")]
    Malformed { class: Dotted, reason: String },
}

impl From<LoadError> for AnalysisError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::NotFound(class) => AnalysisError::ClassNotFound(class),
            LoadError::Malformed { class, reason } => AnalysisError::Malformed { class, reason },
        }
    }
}
