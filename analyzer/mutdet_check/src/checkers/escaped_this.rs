//! `this` escaping during construction.

use mutdet_ir::AssignedValue;

use crate::{CheckContext, CheckerError, CheckerKind, Finding, MutabilityChecker, MutableReason};

/// Flags constructors that hand `this` to other code, or publish it through
/// a static field, before construction completes. Other threads may then
/// observe the object with its fields still unset.
pub struct EscapedThisReferenceChecker;

impl MutabilityChecker for EscapedThisReferenceChecker {
    fn kind(&self) -> CheckerKind {
        CheckerKind::EscapedThisReference
    }

    fn check(&self, ctx: &CheckContext<'_>) -> Result<Vec<Finding>, CheckerError> {
        let mut findings = Vec::new();
        for constructor in ctx.facts.constructors() {
            for escape in &constructor.this_escapes {
                findings.push(Finding::at_class(
                    MutableReason::EscapedThisReference,
                    self.kind(),
                    ctx.class(),
                    format!(
                        "constructor `{}` passes `this` to `{}` before construction completes",
                        constructor.descriptor, escape.target
                    ),
                ));
            }
            for assignment in &constructor.assignments {
                if assignment.value != AssignedValue::ThisReference {
                    continue;
                }
                // Storing `this` in its own instance field is not an escape.
                let published = ctx
                    .facts
                    .field(&assignment.field)
                    .is_some_and(|field| field.is_static());
                if published {
                    findings.push(Finding::at_field(
                        MutableReason::EscapedThisReference,
                        self.kind(),
                        ctx.class(),
                        &assignment.field,
                        format!(
                            "constructor `{}` publishes `this` through static field `{}`",
                            constructor.descriptor, assignment.field
                        ),
                    ));
                }
            }
        }
        Ok(findings)
    }
}
