//! Non-final fields visible outside the class.

use crate::{CheckContext, CheckerError, CheckerKind, Finding, MutabilityChecker, MutableReason};

/// Flags non-final instance fields that are not private. Other code can
/// assign these directly, so this is reported separately from (and in
/// addition to) a plain non-final field.
pub struct PublishedNonFinalFieldChecker;

impl MutabilityChecker for PublishedNonFinalFieldChecker {
    fn kind(&self) -> CheckerKind {
        CheckerKind::PublishedNonFinalField
    }

    fn check(&self, ctx: &CheckContext<'_>) -> Result<Vec<Finding>, CheckerError> {
        let mut findings = Vec::new();
        for field in ctx.facts.instance_fields() {
            let visibility = field.visibility();
            if field.is_final() || !visibility.is_published() {
                continue;
            }
            findings.push(Finding::at_field(
                MutableReason::PublishedNonFinalField,
                self.kind(),
                ctx.class(),
                &field.name,
                format!(
                    "field `{}` is {visibility} and not final; other classes can reassign it",
                    field.name
                ),
            ));
        }
        Ok(findings)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Test code uses unwrap for clarity")]
mod tests {
    use super::*;
    use crate::checkers::test_helpers::{final_class, run, summarise};
    use mutdet_ir::{AccessFlags, FieldFacts, TypeDescriptor};

    #[test]
    fn test_flags_every_non_private_visibility() {
        let facts = final_class("com.acme.Open")
            .field(FieldFacts::new("a", TypeDescriptor::int(), AccessFlags::PUBLIC))
            .field(FieldFacts::new("b", TypeDescriptor::int(), AccessFlags::PROTECTED))
            .field(FieldFacts::new("c", TypeDescriptor::int(), AccessFlags::empty()))
            .field(FieldFacts::new("d", TypeDescriptor::int(), AccessFlags::PRIVATE))
            .build()
            .unwrap();
        let reported: Vec<_> = summarise(&run(&PublishedNonFinalFieldChecker, &facts))
            .into_iter()
            .filter_map(|(_, field)| field)
            .collect();
        assert_eq!(reported, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_ignores_public_final_field() {
        let facts = final_class("com.acme.Constant")
            .field(FieldFacts::new(
                "value",
                TypeDescriptor::int(),
                AccessFlags::PUBLIC | AccessFlags::FINAL,
            ))
            .build()
            .unwrap();
        assert!(run(&PublishedNonFinalFieldChecker, &facts).is_empty());
    }

    #[test]
    fn test_message_mentions_visibility() {
        let facts = final_class("com.acme.Open")
            .field(FieldFacts::new("b", TypeDescriptor::int(), AccessFlags::PROTECTED))
            .build()
            .unwrap();
        let findings = run(&PublishedNonFinalFieldChecker, &facts);
        assert!(findings[0].message.contains("protected"));
    }
}
