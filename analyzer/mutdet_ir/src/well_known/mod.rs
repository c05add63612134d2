//! Well-known type table: the one place type names are classified.
//!
//! Every checker that needs to know whether a declared type is safe to hold
//! consults [`WellKnownTypes`]. Keeping the lists here means adding a new
//! trusted or distrusted JDK type touches exactly one place.
//!
//! The table covers three questions:
//! - Is the type known immutable (`java.lang.String`, boxed primitives, ...)?
//! - Is the type known mutable (`java.util` collections, `java.util.Date`, ...)?
//! - Is the type a collection, and which wrappers make a copy unmodifiable?

use rustc_hash::FxHashSet;

use crate::{Dotted, TypeDescriptor};

/// Verdict of the table for one declared type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeMutability {
    Immutable,
    Mutable,
    Unknown,
}

const IMMUTABLE: &[&str] = &[
    "java.lang.String",
    "java.lang.Boolean",
    "java.lang.Byte",
    "java.lang.Character",
    "java.lang.Short",
    "java.lang.Integer",
    "java.lang.Long",
    "java.lang.Float",
    "java.lang.Double",
    "java.lang.Class",
    "java.math.BigInteger",
    "java.math.BigDecimal",
    "java.util.UUID",
    "java.util.Locale",
    "java.util.regex.Pattern",
    "java.net.URI",
    "java.time.Instant",
    "java.time.Duration",
    "java.time.LocalDate",
    "java.time.LocalTime",
    "java.time.LocalDateTime",
    "java.time.ZonedDateTime",
    "java.time.OffsetDateTime",
    "java.time.ZoneId",
    "java.time.Period",
];

const MUTABLE: &[&str] = &[
    "java.util.Collection",
    "java.util.List",
    "java.util.Set",
    "java.util.SortedSet",
    "java.util.NavigableSet",
    "java.util.Queue",
    "java.util.Deque",
    "java.util.Map",
    "java.util.SortedMap",
    "java.util.NavigableMap",
    "java.util.ArrayList",
    "java.util.LinkedList",
    "java.util.Vector",
    "java.util.Stack",
    "java.util.HashSet",
    "java.util.LinkedHashSet",
    "java.util.TreeSet",
    "java.util.ArrayDeque",
    "java.util.PriorityQueue",
    "java.util.HashMap",
    "java.util.LinkedHashMap",
    "java.util.TreeMap",
    "java.util.Hashtable",
    "java.util.IdentityHashMap",
    "java.util.WeakHashMap",
    "java.util.concurrent.ConcurrentHashMap",
    "java.util.concurrent.CopyOnWriteArrayList",
    "java.util.Date",
    "java.util.Calendar",
    "java.util.BitSet",
    "java.lang.StringBuilder",
    "java.lang.StringBuffer",
    "java.util.concurrent.atomic.AtomicBoolean",
    "java.util.concurrent.atomic.AtomicInteger",
    "java.util.concurrent.atomic.AtomicLong",
    "java.util.concurrent.atomic.AtomicReference",
];

const COLLECTIONS: &[&str] = &[
    "java.util.Collection",
    "java.util.List",
    "java.util.Set",
    "java.util.SortedSet",
    "java.util.NavigableSet",
    "java.util.Queue",
    "java.util.Deque",
    "java.util.Map",
    "java.util.SortedMap",
    "java.util.NavigableMap",
];

const UNMODIFIABLE_WRAPPERS: &[&str] = &[
    "java.util.Collections.unmodifiableCollection",
    "java.util.Collections.unmodifiableList",
    "java.util.Collections.unmodifiableSet",
    "java.util.Collections.unmodifiableSortedSet",
    "java.util.Collections.unmodifiableNavigableSet",
    "java.util.Collections.unmodifiableMap",
    "java.util.Collections.unmodifiableSortedMap",
    "java.util.Collections.unmodifiableNavigableMap",
    "java.util.List.copyOf",
    "java.util.Set.copyOf",
    "java.util.Map.copyOf",
];

/// Table of JDK (and caller-registered) types with known mutability.
#[derive(Clone, Debug)]
pub struct WellKnownTypes {
    immutable: FxHashSet<Dotted>,
    mutable: FxHashSet<Dotted>,
    collections: FxHashSet<Dotted>,
    wrappers: FxHashSet<Dotted>,
}

fn name_set(names: &[&str]) -> FxHashSet<Dotted> {
    names.iter().filter_map(|name| Dotted::new(name).ok()).collect()
}

impl WellKnownTypes {
    /// The standard JDK table.
    pub fn standard() -> Self {
        WellKnownTypes {
            immutable: name_set(IMMUTABLE),
            mutable: name_set(MUTABLE),
            collections: name_set(COLLECTIONS),
            wrappers: name_set(UNMODIFIABLE_WRAPPERS),
        }
    }

    /// Trust `name` as immutable. Overrides a standard mutable entry.
    pub fn add_immutable(&mut self, name: Dotted) {
        self.mutable.remove(&name);
        self.immutable.insert(name);
    }

    /// Distrust `name` as mutable. Overrides a standard immutable entry.
    pub fn add_mutable(&mut self, name: Dotted) {
        self.immutable.remove(&name);
        self.mutable.insert(name);
    }

    /// Classify a declared type.
    ///
    /// Primitives are immutable; arrays are always mutable; references are
    /// looked up by name.
    pub fn classify(&self, descriptor: &TypeDescriptor) -> TypeMutability {
        match descriptor {
            TypeDescriptor::Primitive(_) => TypeMutability::Immutable,
            TypeDescriptor::Array(_) => TypeMutability::Mutable,
            TypeDescriptor::Reference(type_ref) => self.classify_name(&type_ref.name),
        }
    }

    pub fn classify_name(&self, name: &Dotted) -> TypeMutability {
        if self.immutable.contains(name) {
            TypeMutability::Immutable
        } else if self.mutable.contains(name) {
            TypeMutability::Mutable
        } else {
            TypeMutability::Unknown
        }
    }

    /// Collection interfaces whose element types matter.
    pub fn is_collection(&self, name: &Dotted) -> bool {
        self.collections.contains(name)
    }

    /// Methods that return an unmodifiable view or copy of a collection.
    pub fn is_unmodifiable_wrapper(&self, name: &Dotted) -> bool {
        self.wrappers.contains(name)
    }
}

impl Default for WellKnownTypes {
    fn default() -> Self {
        Self::standard()
    }
}
