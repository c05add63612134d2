//! Decoded class facts.
//!
//! [`ClassFacts`] is the structural view of one compiled class that every
//! checker consumes: its fields, constructors (with the field-assignment
//! sites found in their bodies), other methods' field writes, and declared
//! supertypes. Facts are assembled with [`ClassFactsBuilder`] and are
//! read-only afterwards.

use rustc_hash::FxHashSet;

use crate::{AccessFlags, Dotted, TypeDescriptor, Visibility};

/// A declared field.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldFacts {
    pub name: String,
    pub descriptor: TypeDescriptor,
    pub access: AccessFlags,
}

impl FieldFacts {
    pub fn new(name: impl Into<String>, descriptor: TypeDescriptor, access: AccessFlags) -> Self {
        FieldFacts {
            name: name.into(),
            descriptor,
            access,
        }
    }

    pub fn is_final(&self) -> bool {
        self.access.is_final()
    }

    pub fn is_static(&self) -> bool {
        self.access.is_static()
    }

    pub fn visibility(&self) -> Visibility {
        self.access.visibility()
    }

    /// Instance state: anything not declared static.
    pub fn is_instance(&self) -> bool {
        !self.is_static()
    }
}

/// Where a value written into a field came from.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AssignedValue {
    /// A caller-supplied constructor argument, stored as-is.
    Parameter { index: u8 },
    /// A copy of a constructor argument, optionally passed through an
    /// unmodifiable wrapper (e.g. `java.util.Collections.unmodifiableList`).
    DefensiveCopy {
        of_parameter: u8,
        wrapper: Option<Dotted>,
    },
    /// A freshly allocated instance of the named class.
    NewInstance(Dotted),
    /// A compile-time constant or primitive computation.
    Constant,
    /// The object under construction itself.
    ThisReference,
    /// Provenance could not be established by the decoder.
    Unknown,
}

impl AssignedValue {
    /// Index of the constructor argument stored as-is, which the caller
    /// still holds a reference to.
    pub fn caller_parameter(&self) -> Option<u8> {
        match self {
            AssignedValue::Parameter { index } => Some(*index),
            _ => None,
        }
    }

    /// The wrapper applied to a defensive copy, if any.
    pub fn copy_wrapper(&self) -> Option<&Dotted> {
        match self {
            AssignedValue::DefensiveCopy { wrapper, .. } => wrapper.as_ref(),
            _ => None,
        }
    }
}

/// A `putfield` on `this` inside a constructor body.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldAssignment {
    pub field: String,
    pub value: AssignedValue,
}

/// `this` handed to other code before construction completes.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThisEscape {
    /// The receiving method, e.g. `com.acme.Registry.register`.
    pub target: String,
}

/// One constructor and the facts found in its body.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstructorFacts {
    /// Method descriptor, e.g. `(Ljava/util/List;)V`.
    pub descriptor: String,
    pub access: AccessFlags,
    pub assignments: Vec<FieldAssignment>,
    pub this_escapes: Vec<ThisEscape>,
}

impl ConstructorFacts {
    /// A public constructor with an empty body.
    pub fn new(descriptor: impl Into<String>) -> Self {
        ConstructorFacts {
            descriptor: descriptor.into(),
            access: AccessFlags::PUBLIC,
            assignments: Vec::new(),
            this_escapes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_access(mut self, access: AccessFlags) -> Self {
        self.access = access;
        self
    }

    /// Record an assignment of `value` to `field`.
    #[must_use]
    pub fn assigns(mut self, field: impl Into<String>, value: AssignedValue) -> Self {
        self.assignments.push(FieldAssignment {
            field: field.into(),
            value,
        });
        self
    }

    /// Record `this` being passed to `target`.
    #[must_use]
    pub fn passes_this_to(mut self, target: impl Into<String>) -> Self {
        self.this_escapes.push(ThisEscape {
            target: target.into(),
        });
        self
    }

    /// All assignments to the named field, in body order.
    pub fn assignments_to<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a AssignedValue> {
        self.assignments
            .iter()
            .filter(move |assignment| assignment.field == field)
            .map(|assignment| &assignment.value)
    }
}

/// A non-constructor method and the instance fields it writes.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodFacts {
    pub name: String,
    pub descriptor: String,
    pub access: AccessFlags,
    pub field_writes: Vec<String>,
}

impl MethodFacts {
    pub fn new(name: impl Into<String>, descriptor: impl Into<String>, access: AccessFlags) -> Self {
        MethodFacts {
            name: name.into(),
            descriptor: descriptor.into(),
            access,
            field_writes: Vec::new(),
        }
    }

    #[must_use]
    pub fn writes(mut self, field: impl Into<String>) -> Self {
        self.field_writes.push(field.into());
        self
    }
}

/// Structural view of one compiled class.
///
/// Deserialized facts pass through [`ClassFactsBuilder::build`] and are
/// rejected on the same grounds.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ClassFactsRepr")
)]
pub struct ClassFacts {
    name: Dotted,
    access: AccessFlags,
    superclass: Option<Dotted>,
    interfaces: Vec<Dotted>,
    fields: Vec<FieldFacts>,
    constructors: Vec<ConstructorFacts>,
    methods: Vec<MethodFacts>,
}

/// Unvalidated wire form of [`ClassFacts`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ClassFactsRepr {
    name: Dotted,
    access: AccessFlags,
    superclass: Option<Dotted>,
    interfaces: Vec<Dotted>,
    fields: Vec<FieldFacts>,
    constructors: Vec<ConstructorFacts>,
    methods: Vec<MethodFacts>,
}

#[cfg(feature = "serde")]
impl TryFrom<ClassFactsRepr> for ClassFacts {
    type Error = FactsError;

    fn try_from(repr: ClassFactsRepr) -> Result<Self, Self::Error> {
        ClassFactsBuilder {
            facts: ClassFacts {
                name: repr.name,
                access: repr.access,
                superclass: repr.superclass,
                interfaces: repr.interfaces,
                fields: repr.fields,
                constructors: repr.constructors,
                methods: repr.methods,
            },
        }
        .build()
    }
}

/// Class facts that violate the model's structural rules.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum FactsError {
    #[error("class `{class}` declares field `{field}` more than once")]
    DuplicateField { class: Dotted, field: String },
    #[error("class `{class}` names itself as a supertype")]
    SelfInheritance { class: Dotted },
}

impl ClassFacts {
    /// Start building facts for `name`.
    pub fn builder(name: Dotted) -> ClassFactsBuilder {
        ClassFactsBuilder::new(name)
    }

    pub fn name(&self) -> &Dotted {
        &self.name
    }

    pub fn access(&self) -> AccessFlags {
        self.access
    }

    pub fn superclass(&self) -> Option<&Dotted> {
        self.superclass.as_ref()
    }

    pub fn interfaces(&self) -> &[Dotted] {
        &self.interfaces
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldFacts] {
        &self.fields
    }

    /// Non-static fields in declaration order.
    pub fn instance_fields(&self) -> impl Iterator<Item = &FieldFacts> {
        self.fields.iter().filter(|field| field.is_instance())
    }

    pub fn field(&self, name: &str) -> Option<&FieldFacts> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn constructors(&self) -> &[ConstructorFacts] {
        &self.constructors
    }

    pub fn methods(&self) -> &[MethodFacts] {
        &self.methods
    }

    pub fn is_declared_final(&self) -> bool {
        self.access.is_final()
    }

    pub fn is_interface(&self) -> bool {
        self.access.contains(AccessFlags::INTERFACE)
    }

    pub fn is_abstract(&self) -> bool {
        self.access.contains(AccessFlags::ABSTRACT)
    }

    pub fn is_enum(&self) -> bool {
        self.access.contains(AccessFlags::ENUM)
    }
}

/// Builder for [`ClassFacts`].
///
/// Defaults: public, non-final, superclass `java.lang.Object`, no members.
#[derive(Clone, Debug)]
pub struct ClassFactsBuilder {
    facts: ClassFacts,
}

impl ClassFactsBuilder {
    fn new(name: Dotted) -> Self {
        let object = Dotted::new("java.lang.Object").ok();
        ClassFactsBuilder {
            facts: ClassFacts {
                name,
                access: AccessFlags::PUBLIC,
                superclass: object,
                interfaces: Vec::new(),
                fields: Vec::new(),
                constructors: Vec::new(),
                methods: Vec::new(),
            },
        }
    }

    #[must_use]
    pub fn access(mut self, access: AccessFlags) -> Self {
        self.facts.access = access;
        self
    }

    /// Set the superclass; `None` only for `java.lang.Object` itself and
    /// interfaces as some decoders report them.
    #[must_use]
    pub fn superclass(mut self, superclass: Option<Dotted>) -> Self {
        self.facts.superclass = superclass;
        self
    }

    #[must_use]
    pub fn interface(mut self, interface: Dotted) -> Self {
        self.facts.interfaces.push(interface);
        self
    }

    #[must_use]
    pub fn field(mut self, field: FieldFacts) -> Self {
        self.facts.fields.push(field);
        self
    }

    #[must_use]
    pub fn constructor(mut self, constructor: ConstructorFacts) -> Self {
        self.facts.constructors.push(constructor);
        self
    }

    #[must_use]
    pub fn method(mut self, method: MethodFacts) -> Self {
        self.facts.methods.push(method);
        self
    }

    /// Finish, rejecting structurally impossible classes.
    pub fn build(self) -> Result<ClassFacts, FactsError> {
        let facts = self.facts;
        let mut seen = FxHashSet::default();
        for field in &facts.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(FactsError::DuplicateField {
                    class: facts.name.clone(),
                    field: field.name.clone(),
                });
            }
        }
        let names_self = facts.superclass.as_ref() == Some(&facts.name)
            || facts.interfaces.contains(&facts.name);
        if names_self {
            return Err(FactsError::SelfInheritance {
                class: facts.name.clone(),
            });
        }
        Ok(facts)
    }
}
