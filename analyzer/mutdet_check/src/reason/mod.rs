//! Mutability findings.
//!
//! Defines [`MutableReason`] (the fixed taxonomy), [`Location`], and
//! [`Finding`]: one concrete, located reason a class may be mutable.

use std::fmt;

use mutdet_ir::Dotted;

use crate::CheckerKind;

/// Why a class may be mutable.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MutableReason {
    /// An instance field is not declared final.
    NonFinalField,
    /// A non-final instance field is visible outside the class.
    PublishedNonFinalField,
    /// A field's declared type is an array or a known-mutable type.
    MutableTypeToField,
    /// A field's declared type is open to subtypes (an interface, an
    /// abstract or non-final class, or an uninspected class) that cannot
    /// be verified.
    AbstractTypeToField,
    /// A constructor stores a caller-supplied reference without copying it.
    EscapedConstructorReference,
    /// The class can be subclassed.
    NotDeclaredFinal,
    /// `this` escapes before construction completes.
    EscapedThisReference,
    /// A method other than a constructor writes an instance field.
    FieldCanBeReassigned,
    /// A collection field's element type is mutable.
    CollectionFieldWithMutableElementType,
    /// A checker failed; the analysis is inconclusive.
    CannotAnalyse,
}

impl MutableReason {
    pub fn as_str(self) -> &'static str {
        match self {
            MutableReason::NonFinalField => "NON_FINAL_FIELD",
            MutableReason::PublishedNonFinalField => "PUBLISHED_NON_FINAL_FIELD",
            MutableReason::MutableTypeToField => "MUTABLE_TYPE_TO_FIELD",
            MutableReason::AbstractTypeToField => "ABSTRACT_TYPE_TO_FIELD",
            MutableReason::EscapedConstructorReference => "ESCAPED_CONSTRUCTOR_REFERENCE",
            MutableReason::NotDeclaredFinal => "NOT_DECLARED_FINAL",
            MutableReason::EscapedThisReference => "ESCAPED_THIS_REFERENCE",
            MutableReason::FieldCanBeReassigned => "FIELD_CAN_BE_REASSIGNED",
            MutableReason::CollectionFieldWithMutableElementType => {
                "COLLECTION_FIELD_WITH_MUTABLE_ELEMENT_TYPE"
            }
            MutableReason::CannotAnalyse => "CANNOT_ANALYSE",
        }
    }

    /// Reasons about the declared type of a field, rather than the field
    /// itself.
    pub fn is_about_field_type(self) -> bool {
        matches!(
            self,
            MutableReason::MutableTypeToField
                | MutableReason::AbstractTypeToField
                | MutableReason::CollectionFieldWithMutableElementType
        )
    }
}

impl fmt::Display for MutableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a finding applies.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Location {
    /// The class as a whole.
    Class(Dotted),
    /// One field of the class.
    Field { class: Dotted, name: String },
}

impl Location {
    pub fn class(&self) -> &Dotted {
        match self {
            Location::Class(class) | Location::Field { class, .. } => class,
        }
    }

    pub fn field_name(&self) -> Option<&str> {
        match self {
            Location::Class(_) => None,
            Location::Field { name, .. } => Some(name),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Class(class) => write!(f, "{class}"),
            Location::Field { class, name } => write!(f, "{class}.{name}"),
        }
    }
}

/// One located reason a class may be mutable.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Finding {
    pub reason: MutableReason,
    pub message: String,
    pub location: Location,
    /// The checker that produced the finding.
    pub checker: CheckerKind,
    /// For field-type reasons: the class the finding is about (the field's
    /// declared type, or the offending element type of a collection).
    pub subject_type: Option<Dotted>,
}

impl Finding {
    /// A finding located at a field.
    pub fn at_field(
        reason: MutableReason,
        checker: CheckerKind,
        class: &Dotted,
        field: &str,
        message: impl Into<String>,
    ) -> Self {
        Finding {
            reason,
            message: message.into(),
            location: Location::Field {
                class: class.clone(),
                name: field.to_owned(),
            },
            checker,
            subject_type: None,
        }
    }

    /// A class-level finding.
    pub fn at_class(
        reason: MutableReason,
        checker: CheckerKind,
        class: &Dotted,
        message: impl Into<String>,
    ) -> Self {
        Finding {
            reason,
            message: message.into(),
            location: Location::Class(class.clone()),
            checker,
            subject_type: None,
        }
    }

    #[must_use]
    pub fn with_subject_type(mut self, subject: Option<Dotted>) -> Self {
        self.subject_type = subject;
        self
    }

    pub fn field_name(&self) -> Option<&str> {
        self.location.field_name()
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ({})", self.reason, self.message, self.location)
    }
}
