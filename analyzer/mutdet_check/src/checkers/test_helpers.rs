//! Shared fixtures for checker tests.

use mutdet_ir::{
    AccessFlags, ClassFacts, ClassFactsBuilder, Dotted, FieldFacts, TypeDescriptor,
    WellKnownTypes,
};

use crate::{CheckContext, Finding, MutabilityChecker, MutableReason};

pub(crate) fn dotted(name: &str) -> Dotted {
    Dotted::new(name).unwrap()
}

/// A public final class with no members, ready for extra fields.
pub(crate) fn final_class(name: &str) -> ClassFactsBuilder {
    ClassFacts::builder(dotted(name)).access(AccessFlags::PUBLIC | AccessFlags::FINAL)
}

pub(crate) fn private_final(name: &str, descriptor: TypeDescriptor) -> FieldFacts {
    FieldFacts::new(name, descriptor, AccessFlags::PRIVATE | AccessFlags::FINAL)
}

pub(crate) fn list_type() -> TypeDescriptor {
    TypeDescriptor::interface(dotted("java.util.List"))
}

/// Run one checker over `facts` with the standard type table.
pub(crate) fn run(checker: &dyn MutabilityChecker, facts: &ClassFacts) -> Vec<Finding> {
    let types = WellKnownTypes::standard();
    checker.check(&CheckContext::new(facts, &types)).unwrap()
}

/// `(reason, field)` pairs, for compact assertions.
pub(crate) fn summarise(findings: &[Finding]) -> Vec<(MutableReason, Option<String>)> {
    findings
        .iter()
        .map(|finding| (finding.reason, finding.field_name().map(str::to_owned)))
        .collect()
}
