//! Analysis configuration.

use mutdet_ir::{Dotted, WellKnownTypes};

/// Configuration for an analysis run.
#[derive(Clone, Debug)]
pub struct AnalysisConfig {
    /// Types to trust as immutable on top of the standard table.
    pub immutable_types: Vec<Dotted>,
    /// Types to treat as mutable on top of the standard table.
    pub mutable_types: Vec<Dotted>,
    /// Analyse batches of classes in parallel.
    pub parallel: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            immutable_types: Vec::new(),
            mutable_types: Vec::new(),
            parallel: true,
        }
    }
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_immutable_type(mut self, name: Dotted) -> Self {
        self.immutable_types.push(name);
        self
    }

    #[must_use]
    pub fn with_mutable_type(mut self, name: Dotted) -> Self {
        self.mutable_types.push(name);
        self
    }

    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// The standard type table extended with this configuration's types.
    /// Mutable registrations are applied last and win over immutable ones.
    pub fn well_known_types(&self) -> WellKnownTypes {
        let mut types = WellKnownTypes::standard();
        for name in &self.immutable_types {
            types.add_immutable(name.clone());
        }
        for name in &self.mutable_types {
            types.add_mutable(name.clone());
        }
        types
    }
}
