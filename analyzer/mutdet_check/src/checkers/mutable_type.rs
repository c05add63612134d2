//! Fields whose declared type is mutable.

use mutdet_ir::{FieldFacts, TypeDescriptor, TypeMutability};

use crate::{CheckContext, CheckerError, CheckerKind, Finding, MutabilityChecker, MutableReason};

/// Flags instance fields declared as an array or as a known-mutable type,
/// final or not: a final reference to a mutable object still lets the
/// object change.
///
/// A collection-typed field is accepted when every constructor assignment
/// to it is a copy passed through an unmodifiable wrapper.
pub struct MutableTypeToFieldChecker;

impl MutabilityChecker for MutableTypeToFieldChecker {
    fn kind(&self) -> CheckerKind {
        CheckerKind::MutableTypeToField
    }

    fn check(&self, ctx: &CheckContext<'_>) -> Result<Vec<Finding>, CheckerError> {
        let mut findings = Vec::new();
        for field in ctx.facts.instance_fields() {
            if ctx.types.classify(&field.descriptor) != TypeMutability::Mutable {
                continue;
            }
            if is_wrapped_copy(ctx, field) {
                continue;
            }
            let message = match &field.descriptor {
                TypeDescriptor::Array(_) => format!(
                    "field `{}` is an array of type `{}`; array elements can always be reassigned",
                    field.name, field.descriptor
                ),
                descriptor => format!(
                    "field `{}` is declared as mutable type `{descriptor}`",
                    field.name
                ),
            };
            findings.push(
                Finding::at_field(
                    MutableReason::MutableTypeToField,
                    self.kind(),
                    ctx.class(),
                    &field.name,
                    message,
                )
                .with_subject_type(field.descriptor.reference_name().cloned()),
            );
        }
        Ok(findings)
    }
}

/// Collection field only ever assigned an unmodifiable wrapper around a copy.
fn is_wrapped_copy(ctx: &CheckContext<'_>, field: &FieldFacts) -> bool {
    let Some(name) = field.descriptor.reference_name() else {
        return false;
    };
    if !ctx.types.is_collection(name) {
        return false;
    }
    let mut assignments = ctx
        .facts
        .constructors()
        .iter()
        .flat_map(|constructor| constructor.assignments_to(&field.name))
        .peekable();
    if assignments.peek().is_none() {
        return false;
    }
    assignments.all(|value| {
        value
            .copy_wrapper()
            .is_some_and(|wrapper| ctx.types.is_unmodifiable_wrapper(wrapper))
    })
}
