//! Suppression rules.
//!
//! An [`AllowedReason`] says which findings a caller is prepared to accept.
//! Rules are plain data: a closed set of variants, each with a fixed
//! matching policy. A rule that names something the class does not have
//! (a field that does not exist, a type no field uses) matches nothing.

use mutdet_check::{Finding, MutableReason};
use mutdet_ir::Dotted;

/// One allowance policy.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AllowedReason {
    /// Field-type findings about any of these classes are accepted. The
    /// caller vouches that the types are immutable.
    ProvidedOtherClass(Vec<Dotted>),
    /// The class may be subclassed.
    AllowingForSubclassing,
    /// Fields may be non-final.
    AllowingNonFinalFields,
    /// Any finding at these fields is accepted.
    AssumingTheFields(Vec<String>),
    /// Accepts nothing. Spells out zero tolerance at the call site.
    NoReasonsAllowed,
}

impl AllowedReason {
    pub fn provided(class: Dotted) -> Self {
        AllowedReason::ProvidedOtherClass(vec![class])
    }

    pub fn provided_all(classes: impl IntoIterator<Item = Dotted>) -> Self {
        AllowedReason::ProvidedOtherClass(classes.into_iter().collect())
    }

    pub fn allowing_for_subclassing() -> Self {
        AllowedReason::AllowingForSubclassing
    }

    pub fn allowing_non_final_fields() -> Self {
        AllowedReason::AllowingNonFinalFields
    }

    /// At least one field name is required.
    pub fn assuming_fields_named<I, S>(first: impl Into<String>, rest: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names = vec![first.into()];
        names.extend(rest.into_iter().map(Into::into));
        AllowedReason::AssumingTheFields(names)
    }

    pub fn no_reasons_allowed() -> Self {
        AllowedReason::NoReasonsAllowed
    }

    /// Does this rule accept `finding`?
    pub fn matches(&self, finding: &Finding) -> bool {
        match self {
            AllowedReason::ProvidedOtherClass(classes) => {
                finding.reason.is_about_field_type()
                    && finding.field_name().is_some()
                    && finding
                        .subject_type
                        .as_ref()
                        .is_some_and(|subject| classes.contains(subject))
            }
            AllowedReason::AllowingForSubclassing => {
                finding.reason == MutableReason::NotDeclaredFinal
            }
            AllowedReason::AllowingNonFinalFields => matches!(
                finding.reason,
                MutableReason::NonFinalField | MutableReason::PublishedNonFinalField
            ),
            AllowedReason::AssumingTheFields(names) => finding
                .field_name()
                .is_some_and(|field| names.iter().any(|name| name == field)),
            AllowedReason::NoReasonsAllowed => false,
        }
    }
}

/// Does any rule in `rules` accept `finding`?
pub fn is_allowed(finding: &Finding, rules: &[AllowedReason]) -> bool {
    rules.iter().any(|rule| rule.matches(finding))
}
