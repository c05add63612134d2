//! Collections holding mutable elements.

use mutdet_ir::{TypeDescriptor, TypeMutability};

use crate::{CheckContext, CheckerError, CheckerKind, Finding, MutabilityChecker, MutableReason};

/// Flags collection fields whose generic element types are mutable. Even an
/// unmodifiable copy of a `List<Date>` lets callers change the dates.
///
/// One finding per offending element type, so each can be suppressed on its
/// own.
pub struct CollectionElementTypeChecker;

impl MutabilityChecker for CollectionElementTypeChecker {
    fn kind(&self) -> CheckerKind {
        CheckerKind::CollectionElementType
    }

    fn check(&self, ctx: &CheckContext<'_>) -> Result<Vec<Finding>, CheckerError> {
        let mut findings = Vec::new();
        for field in ctx.facts.instance_fields() {
            let TypeDescriptor::Reference(type_ref) = &field.descriptor else {
                continue;
            };
            if !ctx.types.is_collection(&type_ref.name) {
                continue;
            }
            for element in &type_ref.type_arguments {
                if ctx.types.classify(element) != TypeMutability::Mutable {
                    continue;
                }
                findings.push(
                    Finding::at_field(
                        MutableReason::CollectionFieldWithMutableElementType,
                        self.kind(),
                        ctx.class(),
                        &field.name,
                        format!(
                            "field `{}` is a `{}` holding elements of mutable type `{element}`",
                            field.name, type_ref.name
                        ),
                    )
                    .with_subject_type(element.reference_name().cloned()),
                );
            }
        }
        Ok(findings)
    }
}
