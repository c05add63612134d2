//! Instance fields written outside constructors.

use crate::{CheckContext, CheckerError, CheckerKind, Finding, MutabilityChecker, MutableReason};

/// Flags instance methods that write an instance field. Unlike a bare
/// non-final field, this is evidence the field really is reassigned after
/// construction.
pub struct SetterMethodChecker;

impl MutabilityChecker for SetterMethodChecker {
    fn kind(&self) -> CheckerKind {
        CheckerKind::SetterMethod
    }

    fn check(&self, ctx: &CheckContext<'_>) -> Result<Vec<Finding>, CheckerError> {
        let mut findings = Vec::new();
        for method in ctx.facts.methods() {
            if method.access.is_static() {
                continue;
            }
            for written in &method.field_writes {
                let Some(field) = ctx.facts.field(written) else {
                    return Err(CheckerError::UndeclaredField {
                        class: ctx.class().clone(),
                        field: written.clone(),
                    });
                };
                if field.is_static() {
                    continue;
                }
                findings.push(Finding::at_field(
                    MutableReason::FieldCanBeReassigned,
                    self.kind(),
                    ctx.class(),
                    &field.name,
                    format!(
                        "field `{}` is reassigned by method `{}{}`",
                        field.name, method.name, method.descriptor
                    ),
                ));
            }
        }
        Ok(findings)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Test code uses unwrap for clarity")]
mod tests {
    use super::*;
    use crate::checkers::test_helpers::{final_class, run, summarise};
    use mutdet_ir::{AccessFlags, FieldFacts, MethodFacts, TypeDescriptor, WellKnownTypes};

    #[test]
    fn test_flags_setter() {
        let facts = final_class("com.acme.Counter")
            .field(FieldFacts::new("count", TypeDescriptor::int(), AccessFlags::PRIVATE))
            .method(MethodFacts::new("increment", "()V", AccessFlags::PUBLIC).writes("count"))
            .build()
            .unwrap();
        let findings = run(&SetterMethodChecker, &facts);
        assert_eq!(
            summarise(&findings),
            vec![(MutableReason::FieldCanBeReassigned, Some("count".to_owned()))]
        );
        assert!(findings[0].message.contains("increment()V"));
    }

    #[test]
    fn test_ignores_static_methods_and_static_fields() {
        let facts = final_class("com.acme.Ids")
            .field(FieldFacts::new(
                "NEXT",
                TypeDescriptor::int(),
                AccessFlags::PRIVATE | AccessFlags::STATIC,
            ))
            .method(MethodFacts::new("bump", "()V", AccessFlags::PUBLIC).writes("NEXT"))
            .method(
                MethodFacts::new("reset", "()V", AccessFlags::PUBLIC | AccessFlags::STATIC)
                    .writes("NEXT"),
            )
            .build()
            .unwrap();
        assert!(run(&SetterMethodChecker, &facts).is_empty());
    }

    #[test]
    fn test_inherited_field_write_is_a_checker_error() {
        let facts = final_class("com.acme.Child")
            .method(MethodFacts::new("setParent", "(I)V", AccessFlags::PUBLIC).writes("parent"))
            .build()
            .unwrap();
        let types = WellKnownTypes::standard();
        let result = SetterMethodChecker.check(&CheckContext::new(&facts, &types));
        assert!(matches!(result, Err(CheckerError::UndeclaredField { .. })));
    }
}
