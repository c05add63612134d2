//! Class fact sources.
//!
//! [`ClassFactsSource`] is the seam to the class file decoder: given a class
//! name, produce its [`ClassFacts`] or say why it cannot. Locating and
//! decoding compiled classes happens behind this trait. [`ClassPool`] is the
//! in-memory source used when facts are produced up front.

use mutdet_ir::{ClassFacts, Dotted};
use rustc_hash::FxHashMap;

/// Why facts for a class could not be produced.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum LoadError {
    #[error("class `{0}` could not be found")]
    NotFound(Dotted),
    #[error("class `{class}` is malformed: {reason}")]
    Malformed { class: Dotted, reason: String },
}

/// Produces decoded facts for a named class.
///
/// Implementations may block on I/O. The session calls `load` at most once
/// per successfully loaded class.
pub trait ClassFactsSource: Send + Sync {
    fn load(&self, class: &Dotted) -> Result<ClassFacts, LoadError>;
}

/// In-memory class fact source.
#[derive(Clone, Debug, Default)]
pub struct ClassPool {
    classes: FxHashMap<Dotted, ClassFacts>,
}

impl ClassPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the facts for a class.
    pub fn insert(&mut self, facts: ClassFacts) {
        self.classes.insert(facts.name().clone(), facts);
    }

    /// Builder-style [`ClassPool::insert`].
    #[must_use]
    pub fn with(mut self, facts: ClassFacts) -> Self {
        self.insert(facts);
        self
    }

    pub fn contains(&self, class: &Dotted) -> bool {
        self.classes.contains_key(class)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl FromIterator<ClassFacts> for ClassPool {
    fn from_iter<I: IntoIterator<Item = ClassFacts>>(iter: I) -> Self {
        let mut pool = ClassPool::new();
        for facts in iter {
            pool.insert(facts);
        }
        pool
    }
}

impl ClassFactsSource for ClassPool {
    fn load(&self, class: &Dotted) -> Result<ClassFacts, LoadError> {
        self.classes
            .get(class)
            .cloned()
            .ok_or_else(|| LoadError::NotFound(class.clone()))
    }
}
