//! Verdicts for the fixture classes, with and without suppression.

use mutdet::{
    AllowedReason, AssertError, MutabilityAssert, MutableReason, Verdict,
};
use pretty_assertions::assert_eq;

use crate::fixtures::{dotted, pool};

fn reasons_at(assert: &MutabilityAssert, class: &str) -> Vec<(MutableReason, String)> {
    let result = assert.session().result_for(&dotted(class)).unwrap();
    result
        .findings()
        .iter()
        .map(|f| (f.reason, f.location.to_string()))
        .collect()
}

#[test]
fn final_primitive_class_is_immutable() {
    let assert = MutabilityAssert::over(pool());
    let result = assert.session().result_for(&dotted("com.acme.Point")).unwrap();
    assert!(result.findings().is_empty());
    assert_eq!(result.verdict(), Verdict::Immutable);
    assert_eq!(assert.assert_immutable(&dotted("com.acme.Point")), Ok(()));
}

#[test]
fn public_non_final_field_is_allowed_by_non_final_rule() {
    let assert = MutabilityAssert::over(pool());
    let class = dotted("com.acme.ExposedCounter");
    assert_eq!(
        reasons_at(&assert, "com.acme.ExposedCounter"),
        vec![
            (MutableReason::NonFinalField, "com.acme.ExposedCounter.count".to_owned()),
            (
                MutableReason::PublishedNonFinalField,
                "com.acme.ExposedCounter.count".to_owned()
            ),
        ]
    );
    assert!(matches!(
        assert.assert_immutable(&class),
        Err(AssertError::NotImmutable(_))
    ));
    assert_eq!(
        assert.assert_instances_of(&class, &[AllowedReason::allowing_non_final_fields()]),
        Ok(())
    );
}

#[test]
fn provided_collection_type_does_not_hide_escaped_reference() {
    let assert = MutabilityAssert::over(pool());
    let class = dotted("com.acme.Roster");
    assert_eq!(
        reasons_at(&assert, "com.acme.Roster"),
        vec![
            (MutableReason::MutableTypeToField, "com.acme.Roster.names".to_owned()),
            (
                MutableReason::EscapedConstructorReference,
                "com.acme.Roster.names".to_owned()
            ),
        ]
    );

    let err = assert
        .assert_instances_of(&class, &[AllowedReason::provided(dotted("java.util.List"))])
        .unwrap_err();
    let AssertError::NotImmutable(failure) = err else {
        panic!("expected an immutability failure, got {err:?}");
    };
    assert_eq!(
        failure
            .findings
            .iter()
            .map(|f| f.reason)
            .collect::<Vec<_>>(),
        vec![MutableReason::EscapedConstructorReference]
    );
    assert!(failure.to_string().contains("ESCAPED_CONSTRUCTOR_REFERENCE"));
    assert!(failure.to_string().contains("com.acme.Roster.names"));

    // Naming the field accepts both reasons.
    assert_eq!(
        assert.assert_instances_of(
            &class,
            &[AllowedReason::assuming_fields_named("names", Vec::<String>::new())]
        ),
        Ok(())
    );
}

#[test]
fn wrapped_defensive_copy_is_immutable() {
    let assert = MutabilityAssert::over(pool());
    assert_eq!(assert.assert_immutable(&dotted("com.acme.SafeRoster")), Ok(()));
}

#[test]
fn bean_needs_every_allowance() {
    let assert = MutabilityAssert::over(pool());
    let class = dotted("com.acme.Bean");
    assert_eq!(
        reasons_at(&assert, "com.acme.Bean"),
        vec![
            (MutableReason::NonFinalField, "com.acme.Bean.label".to_owned()),
            (MutableReason::NotDeclaredFinal, "com.acme.Bean".to_owned()),
            (MutableReason::FieldCanBeReassigned, "com.acme.Bean.label".to_owned()),
        ]
    );
    let partial = [
        AllowedReason::allowing_non_final_fields(),
        AllowedReason::allowing_for_subclassing(),
    ];
    assert!(assert.assert_instances_of(&class, &partial).is_err());

    let full = [
        AllowedReason::allowing_non_final_fields(),
        AllowedReason::allowing_for_subclassing(),
        AllowedReason::assuming_fields_named("label", Vec::<String>::new()),
    ];
    assert_eq!(assert.assert_instances_of(&class, &full), Ok(()));
}

#[test]
fn unknown_class_is_an_analysis_error() {
    let assert = MutabilityAssert::over(pool());
    let missing = dotted("com.acme.Missing");
    assert_eq!(
        assert.assert_immutable(&missing),
        Err(AssertError::Analysis(mutdet::AnalysisError::ClassNotFound(missing)))
    );
}

#[test]
fn unverified_field_type_needs_a_provided_class() {
    let assert = MutabilityAssert::over(pool());
    let class = dotted("com.acme.Wallet");
    assert_eq!(
        reasons_at(&assert, "com.acme.Wallet"),
        vec![(MutableReason::AbstractTypeToField, "com.acme.Wallet.counter".to_owned())]
    );
    assert!(assert.assert_immutable(&class).is_err());
    assert_eq!(
        assert.assert_instances_of(&class, &[AllowedReason::provided(dotted("com.acme.Counter"))]),
        Ok(())
    );
}
