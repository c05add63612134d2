//! Non-final instance fields.

use crate::{CheckContext, CheckerError, CheckerKind, Finding, MutabilityChecker, MutableReason};

/// Flags every instance field not declared final, whatever its visibility.
///
/// A field that can be reassigned after construction is a risk whether or
/// not any code actually reassigns it.
pub struct NonFinalFieldChecker;

impl MutabilityChecker for NonFinalFieldChecker {
    fn kind(&self) -> CheckerKind {
        CheckerKind::NonFinalField
    }

    fn check(&self, ctx: &CheckContext<'_>) -> Result<Vec<Finding>, CheckerError> {
        Ok(ctx
            .facts
            .instance_fields()
            .filter(|field| !field.is_final())
            .map(|field| {
                Finding::at_field(
                    MutableReason::NonFinalField,
                    self.kind(),
                    ctx.class(),
                    &field.name,
                    format!(
                        "field `{}` is not final; it can be reassigned after construction",
                        field.name
                    ),
                )
            })
            .collect())
    }
}
