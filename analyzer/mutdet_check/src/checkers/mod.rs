//! Mutability checkers.
//!
//! Each checker inspects [`ClassFacts`] for one category of mutability risk
//! and reports zero or more [`Finding`]s. Checkers are zero-sized, hold no
//! state, and never see each other's output; [`crate::CheckerRegistry`]
//! decides which run and in what order.
//!
//! # Adding a checker
//!
//! 1. Add a variant to [`CheckerKind`]
//! 2. Implement [`MutabilityChecker`] on a new unit struct
//! 3. Register it in [`crate::CheckerRegistry`]

use std::fmt;

use mutdet_ir::{ClassFacts, Dotted, WellKnownTypes};

use crate::Finding;

mod abstract_type;
mod collection_element;
mod escaped_reference;
mod escaped_this;
mod mutable_type;
mod non_final_field;
mod published_field;
mod setter_method;
mod subclassing;

pub use abstract_type::AbstractTypeToFieldChecker;
pub use collection_element::CollectionElementTypeChecker;
pub use escaped_reference::EscapedConstructorReferenceChecker;
pub use escaped_this::EscapedThisReferenceChecker;
pub use mutable_type::MutableTypeToFieldChecker;
pub use non_final_field::NonFinalFieldChecker;
pub use published_field::PublishedNonFinalFieldChecker;
pub use setter_method::SetterMethodChecker;
pub use subclassing::SubclassingChecker;

/// Identifies a checker variant.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CheckerKind {
    NonFinalField,
    PublishedNonFinalField,
    MutableTypeToField,
    AbstractTypeToField,
    EscapedConstructorReference,
    Subclassing,
    EscapedThisReference,
    SetterMethod,
    CollectionElementType,
}

impl CheckerKind {
    pub fn name(self) -> &'static str {
        match self {
            CheckerKind::NonFinalField => "non-final-field",
            CheckerKind::PublishedNonFinalField => "published-non-final-field",
            CheckerKind::MutableTypeToField => "mutable-type-to-field",
            CheckerKind::AbstractTypeToField => "abstract-type-to-field",
            CheckerKind::EscapedConstructorReference => "escaped-constructor-reference",
            CheckerKind::Subclassing => "subclassing",
            CheckerKind::EscapedThisReference => "escaped-this-reference",
            CheckerKind::SetterMethod => "setter-method",
            CheckerKind::CollectionElementType => "collection-element-type",
        }
    }
}

impl fmt::Display for CheckerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything a checker may read.
#[derive(Copy, Clone, Debug)]
pub struct CheckContext<'a> {
    pub facts: &'a ClassFacts,
    pub types: &'a WellKnownTypes,
}

impl<'a> CheckContext<'a> {
    pub fn new(facts: &'a ClassFacts, types: &'a WellKnownTypes) -> Self {
        CheckContext { facts, types }
    }

    pub fn class(&self) -> &'a Dotted {
        self.facts.name()
    }
}

/// A checker could not complete on otherwise well-formed facts.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum CheckerError {
    /// The class writes a field it does not declare (typically an inherited
    /// field), so the field's declared type is unavailable.
    #[error("field `{field}` written by `{class}` is not declared by it")]
    UndeclaredField { class: Dotted, field: String },
    #[error("{0}")]
    Internal(String),
}

/// Trait implemented by every checker.
pub trait MutabilityChecker: Send + Sync {
    fn kind(&self) -> CheckerKind;

    /// Inspect the class and report findings, ordered by field declaration
    /// order (then constructor order).
    fn check(&self, ctx: &CheckContext<'_>) -> Result<Vec<Finding>, CheckerError>;

    fn name(&self) -> &'static str {
        self.kind().name()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Test helpers use unwrap for clarity")]
pub(crate) mod test_helpers;
