//! Class fact model for the mutability analysis engine.
//!
//! This crate provides the checker-facing view of a compiled class:
//! - Class identifiers (`Dotted`) used as session cache keys
//! - Field type descriptors (`TypeDescriptor`, `TypeRef`, `TypeShape`)
//! - Access modifiers (`AccessFlags`, `Visibility`)
//! - Decoded class facts (`ClassFacts`, `FieldFacts`, `ConstructorFacts`, `MethodFacts`)
//! - The well-known type table (`WellKnownTypes`)
//!
//! # Architecture
//!
//! ```text
//! compiled class ──► decoder (external) ──► ClassFacts ──► checkers
//! ```
//!
//! Facts are produced once per class and never mutated afterwards. Checkers
//! only ever see `&ClassFacts`; sessions hand them out as `Arc<ClassFacts>`.

mod access;
mod class;
mod descriptor;
mod dotted;
mod well_known;

pub use access::{AccessFlags, Visibility};
pub use class::{
    AssignedValue, ClassFacts, ClassFactsBuilder, ConstructorFacts, FactsError, FieldAssignment,
    FieldFacts, MethodFacts, ThisEscape,
};
pub use descriptor::{DescriptorError, PrimitiveType, TypeDescriptor, TypeRef, TypeShape};
pub use dotted::{Dotted, InvalidName, NameProblem};
pub use well_known::{TypeMutability, WellKnownTypes};
