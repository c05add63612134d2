//! Fields declared as a type that admits unseen subtypes.

use mutdet_ir::{TypeDescriptor, TypeMutability, TypeShape};

use crate::{CheckContext, CheckerError, CheckerKind, Finding, MutabilityChecker, MutableReason};

/// Flags instance fields whose declared type the type table knows nothing
/// about and which is not a concrete final class: interfaces, abstract
/// classes, non-final classes, and classes the decoder did not inspect. The
/// object behind the reference could be any subtype, mutable ones included.
///
/// Types the table already classifies are left to
/// [`super::MutableTypeToFieldChecker`] (mutable) or accepted (immutable).
pub struct AbstractTypeToFieldChecker;

impl MutabilityChecker for AbstractTypeToFieldChecker {
    fn kind(&self) -> CheckerKind {
        CheckerKind::AbstractTypeToField
    }

    fn check(&self, ctx: &CheckContext<'_>) -> Result<Vec<Finding>, CheckerError> {
        let mut findings = Vec::new();
        for field in ctx.facts.instance_fields() {
            let TypeDescriptor::Reference(type_ref) = &field.descriptor else {
                continue;
            };
            if !type_ref.shape.admits_subtypes()
                || ctx.types.classify_name(&type_ref.name) != TypeMutability::Unknown
            {
                continue;
            }
            let kind = match type_ref.shape {
                TypeShape::Interface => "interface",
                TypeShape::Abstract => "abstract class",
                TypeShape::Concrete { .. } => "non-final class",
                TypeShape::Unknown => "unverified class",
            };
            findings.push(
                Finding::at_field(
                    MutableReason::AbstractTypeToField,
                    self.kind(),
                    ctx.class(),
                    &field.name,
                    format!(
                        "field `{}` is declared as {kind} `{}`; subtypes may be mutable",
                        field.name, type_ref.name
                    ),
                )
                .with_subject_type(Some(type_ref.name.clone())),
            );
        }
        Ok(findings)
    }
}
