//! Caller-supplied references stored without a defensive copy.

use mutdet_ir::TypeMutability;

use crate::{CheckContext, CheckerError, CheckerKind, Finding, MutabilityChecker, MutableReason};

/// Flags constructor assignments that store a constructor argument of
/// reference type straight into a field. The caller keeps its own reference
/// and can mutate the object after construction.
///
/// Arguments of known-immutable types are safe to store as-is.
pub struct EscapedConstructorReferenceChecker;

impl MutabilityChecker for EscapedConstructorReferenceChecker {
    fn kind(&self) -> CheckerKind {
        CheckerKind::EscapedConstructorReference
    }

    fn check(&self, ctx: &CheckContext<'_>) -> Result<Vec<Finding>, CheckerError> {
        let mut findings = Vec::new();
        for constructor in ctx.facts.constructors() {
            for assignment in &constructor.assignments {
                let Some(index) = assignment.value.caller_parameter() else {
                    continue;
                };
                let Some(field) = ctx.facts.field(&assignment.field) else {
                    return Err(CheckerError::UndeclaredField {
                        class: ctx.class().clone(),
                        field: assignment.field.clone(),
                    });
                };
                if ctx.types.classify(&field.descriptor) == TypeMutability::Immutable {
                    continue;
                }
                findings.push(Finding::at_field(
                    MutableReason::EscapedConstructorReference,
                    self.kind(),
                    ctx.class(),
                    &field.name,
                    format!(
                        "constructor `{}` stores parameter {index} of type `{}` into field `{}` without a defensive copy",
                        constructor.descriptor, field.descriptor, field.name
                    ),
                ));
            }
        }
        Ok(findings)
    }
}
