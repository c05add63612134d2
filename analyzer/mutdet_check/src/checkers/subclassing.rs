//! Classes open to extension.

use crate::{CheckContext, CheckerError, CheckerKind, Finding, MutabilityChecker, MutableReason};

/// Flags classes that can be subclassed. A subclass can add mutable state
/// or override behaviour, so an open class cannot be guaranteed immutable.
///
/// Closed against extension: declared final, an enum, or every constructor
/// private.
pub struct SubclassingChecker;

impl MutabilityChecker for SubclassingChecker {
    fn kind(&self) -> CheckerKind {
        CheckerKind::Subclassing
    }

    fn check(&self, ctx: &CheckContext<'_>) -> Result<Vec<Finding>, CheckerError> {
        let facts = ctx.facts;
        if facts.is_declared_final() || facts.is_enum() {
            return Ok(Vec::new());
        }
        let constructors = facts.constructors();
        let only_private_constructors = !facts.is_interface()
            && !constructors.is_empty()
            && constructors.iter().all(|c| c.access.is_private());
        if only_private_constructors {
            return Ok(Vec::new());
        }
        let what = if facts.is_interface() {
            "is an interface"
        } else if facts.is_abstract() {
            "is abstract"
        } else {
            "is not declared final"
        };
        Ok(vec![Finding::at_class(
            MutableReason::NotDeclaredFinal,
            self.kind(),
            ctx.class(),
            format!(
                "class `{}` {what}; subclasses can add mutable state",
                ctx.class()
            ),
        )])
    }
}
