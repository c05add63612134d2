//! Checker registry: the canonical, ordered set of checkers.

use crate::checkers::{
    AbstractTypeToFieldChecker, CollectionElementTypeChecker, EscapedConstructorReferenceChecker,
    EscapedThisReferenceChecker, MutableTypeToFieldChecker, NonFinalFieldChecker,
    PublishedNonFinalFieldChecker, SetterMethodChecker, SubclassingChecker,
};
use crate::{CheckerKind, MutabilityChecker};

// Static checker instances for 'static lifetime references
static NON_FINAL_FIELD: NonFinalFieldChecker = NonFinalFieldChecker;
static PUBLISHED_NON_FINAL_FIELD: PublishedNonFinalFieldChecker = PublishedNonFinalFieldChecker;
static MUTABLE_TYPE_TO_FIELD: MutableTypeToFieldChecker = MutableTypeToFieldChecker;
static ABSTRACT_TYPE_TO_FIELD: AbstractTypeToFieldChecker = AbstractTypeToFieldChecker;
static ESCAPED_CONSTRUCTOR_REFERENCE: EscapedConstructorReferenceChecker =
    EscapedConstructorReferenceChecker;
static SUBCLASSING: SubclassingChecker = SubclassingChecker;
static ESCAPED_THIS_REFERENCE: EscapedThisReferenceChecker = EscapedThisReferenceChecker;
static SETTER_METHOD: SetterMethodChecker = SetterMethodChecker;
static COLLECTION_ELEMENT_TYPE: CollectionElementTypeChecker = CollectionElementTypeChecker;

/// Version of the canonical checker set. Bump whenever [`CheckerRegistry::CANONICAL`]
/// changes membership or order, since either changes analysis output.
pub const CHECKER_SET_VERSION: u32 = 1;

/// Registry mapping `CheckerKind` to checker implementations.
///
/// Uses direct enum dispatch instead of a map lookup. All checkers are ZSTs
/// with static lifetime, so the registry has zero overhead.
pub struct CheckerRegistry {
    // Marker field to prevent external construction
    _private: (),
}

impl CheckerRegistry {
    /// The checkers that make up a full analysis, in execution order.
    pub const CANONICAL: [CheckerKind; 9] = [
        CheckerKind::NonFinalField,
        CheckerKind::PublishedNonFinalField,
        CheckerKind::MutableTypeToField,
        CheckerKind::AbstractTypeToField,
        CheckerKind::EscapedConstructorReference,
        CheckerKind::Subclassing,
        CheckerKind::EscapedThisReference,
        CheckerKind::SetterMethod,
        CheckerKind::CollectionElementType,
    ];

    pub fn new() -> Self {
        CheckerRegistry { _private: () }
    }

    /// Get the checker for a given kind.
    pub fn get(&self, kind: CheckerKind) -> &'static dyn MutabilityChecker {
        match kind {
            CheckerKind::NonFinalField => &NON_FINAL_FIELD,
            CheckerKind::PublishedNonFinalField => &PUBLISHED_NON_FINAL_FIELD,
            CheckerKind::MutableTypeToField => &MUTABLE_TYPE_TO_FIELD,
            CheckerKind::AbstractTypeToField => &ABSTRACT_TYPE_TO_FIELD,
            CheckerKind::EscapedConstructorReference => &ESCAPED_CONSTRUCTOR_REFERENCE,
            CheckerKind::Subclassing => &SUBCLASSING,
            CheckerKind::EscapedThisReference => &ESCAPED_THIS_REFERENCE,
            CheckerKind::SetterMethod => &SETTER_METHOD,
            CheckerKind::CollectionElementType => &COLLECTION_ELEMENT_TYPE,
        }
    }

    /// The canonical checkers, in execution order.
    pub fn canonical(&self) -> Vec<&'static dyn MutabilityChecker> {
        Self::CANONICAL.iter().map(|&kind| self.get(kind)).collect()
    }

    pub fn len(&self) -> usize {
        Self::CANONICAL.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for CheckerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_all_checkers() {
        let registry = CheckerRegistry::new();
        assert_eq!(registry.len(), 9);

        let mut kinds = CheckerRegistry::CANONICAL.to_vec();
        kinds.sort();
        kinds.dedup();
        assert_eq!(kinds.len(), 9);
    }

    #[test]
    fn test_get_returns_matching_kind() {
        let registry = CheckerRegistry::new();
        for kind in CheckerRegistry::CANONICAL {
            assert_eq!(registry.get(kind).kind(), kind);
        }
    }

    #[test]
    fn test_canonical_order_starts_with_field_checks() {
        let registry = CheckerRegistry::new();
        let names: Vec<_> = registry.canonical().iter().map(|c| c.name()).collect();
        assert_eq!(&names[..2], &["non-final-field", "published-non-final-field"]);
        assert_eq!(names[5], "subclassing");
    }
}
