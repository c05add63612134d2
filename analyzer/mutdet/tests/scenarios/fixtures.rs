//! Hand-built class facts shared by the scenario tests.

use mutdet::{
    AccessFlags, AssignedValue, ClassFacts, ClassPool, ConstructorFacts, Dotted, FieldFacts,
    MethodFacts, TypeDescriptor,
};

pub fn dotted(name: &str) -> Dotted {
    Dotted::new(name).unwrap()
}

fn private_final(name: &str, descriptor: TypeDescriptor) -> FieldFacts {
    FieldFacts::new(name, descriptor, AccessFlags::PRIVATE | AccessFlags::FINAL)
}

fn final_public() -> AccessFlags {
    AccessFlags::PUBLIC | AccessFlags::FINAL
}

pub fn list_type() -> TypeDescriptor {
    TypeDescriptor::interface(dotted("java.util.List"))
}

/// Final class, final primitive fields, one constructor storing its
/// arguments.
pub fn point() -> ClassFacts {
    ClassFacts::builder(dotted("com.acme.Point"))
        .access(final_public())
        .field(private_final("x", TypeDescriptor::int()))
        .field(private_final("y", TypeDescriptor::int()))
        .constructor(
            ConstructorFacts::new("(II)V")
                .assigns("x", AssignedValue::Parameter { index: 0 })
                .assigns("y", AssignedValue::Parameter { index: 1 }),
        )
        .build()
        .unwrap()
}

/// Final class exposing a public non-final `int`.
pub fn exposed_counter() -> ClassFacts {
    ClassFacts::builder(dotted("com.acme.ExposedCounter"))
        .access(final_public())
        .field(FieldFacts::new("count", TypeDescriptor::int(), AccessFlags::PUBLIC))
        .constructor(ConstructorFacts::new("()V").assigns("count", AssignedValue::Constant))
        .build()
        .unwrap()
}

/// Final class storing a caller's list without copying it.
pub fn roster() -> ClassFacts {
    ClassFacts::builder(dotted("com.acme.Roster"))
        .access(final_public())
        .field(private_final("names", list_type()))
        .constructor(
            ConstructorFacts::new("(Ljava/util/List;)V")
                .assigns("names", AssignedValue::Parameter { index: 0 }),
        )
        .build()
        .unwrap()
}

/// Like [`roster`], but the constructor wraps a copy.
pub fn safe_roster() -> ClassFacts {
    ClassFacts::builder(dotted("com.acme.SafeRoster"))
        .access(final_public())
        .field(private_final("names", list_type()))
        .constructor(ConstructorFacts::new("(Ljava/util/List;)V").assigns(
            "names",
            AssignedValue::DefensiveCopy {
                of_parameter: 0,
                wrapper: Some(dotted("java.util.Collections.unmodifiableList")),
            },
        ))
        .build()
        .unwrap()
}

/// A non-final bean with a setter.
pub fn bean() -> ClassFacts {
    ClassFacts::builder(dotted("com.acme.Bean"))
        .field(FieldFacts::new(
            "label",
            TypeDescriptor::concrete(dotted("java.lang.String"), true),
            AccessFlags::PRIVATE,
        ))
        .constructor(ConstructorFacts::new("()V"))
        .method(
            MethodFacts::new("setLabel", "(Ljava/lang/String;)V", AccessFlags::PUBLIC)
                .writes("label"),
        )
        .build()
        .unwrap()
}

/// Final class holding a class decoded from its descriptor only.
pub fn wallet() -> ClassFacts {
    ClassFacts::builder(dotted("com.acme.Wallet"))
        .access(final_public())
        .field(private_final(
            "counter",
            TypeDescriptor::from_descriptor("Lcom/acme/Counter;").unwrap(),
        ))
        .build()
        .unwrap()
}

pub fn pool() -> ClassPool {
    [point(), exposed_counter(), roster(), safe_roster(), bean(), wallet()]
        .into_iter()
        .collect()
}
