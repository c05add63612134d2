//! The analysis session.
//!
//! An [`AnalysisSession`] is a per-class cache of decoded facts and analysis
//! results over one [`ClassFactsSource`]. Each class is decoded at most once
//! and analysed at most once, however many threads ask for it. Failures are
//! returned to the caller and never cached, so a later query retries.

use std::sync::Arc;

use mutdet_check::{AllChecksRunner, AnalysisConfig, AnalysisResult};
use mutdet_ir::{ClassFacts, Dotted};
use rayon::prelude::*;

use crate::slots::SlotMap;
use crate::{AnalysisError, ClassFactsSource};

/// Per-class result cache. Cheap to query from many threads.
pub struct AnalysisSession {
    source: Box<dyn ClassFactsSource>,
    config: AnalysisConfig,
    orchestrator: AllChecksRunner,
    facts: SlotMap<ClassFacts>,
    results: SlotMap<AnalysisResult>,
}

impl AnalysisSession {
    /// A session with the default configuration.
    pub fn new(source: impl ClassFactsSource + 'static) -> Self {
        Self::with_config(source, AnalysisConfig::default())
    }

    pub fn with_config(source: impl ClassFactsSource + 'static, config: AnalysisConfig) -> Self {
        AnalysisSession {
            source: Box::new(source),
            orchestrator: AllChecksRunner::new(&config),
            config,
            facts: SlotMap::new(),
            results: SlotMap::new(),
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// The analysis result for `class`.
    ///
    /// The first successful call computes and stores the result. Every later
    /// call, on any thread, returns the same `Arc`.
    #[tracing::instrument(level = "debug", skip(self), fields(class = %class))]
    pub fn result_for(&self, class: &Dotted) -> Result<Arc<AnalysisResult>, AnalysisError> {
        self.results.get_or_try_init(class, || {
            let facts = self.facts_for(class)?;
            tracing::debug!("analysing");
            Ok::<_, AnalysisError>(self.orchestrator.analyse(&facts))
        })
    }

    /// [`AnalysisSession::result_for`] with a name that has not been
    /// validated yet.
    pub fn result_for_name(&self, class: &str) -> Result<Arc<AnalysisResult>, AnalysisError> {
        let class = Dotted::new(class)?;
        self.result_for(&class)
    }

    /// Decoded facts for `class`, loaded from the source on first use.
    pub fn facts_for(&self, class: &Dotted) -> Result<Arc<ClassFacts>, AnalysisError> {
        self.facts.get_or_try_init(class, || {
            tracing::trace!(class = %class, "loading class facts");
            self.source.load(class).map_err(|err| {
                tracing::debug!(class = %class, error = %err, "load failed");
                AnalysisError::from(err)
            })
        })
    }

    /// Analyse a batch of classes. Results come back in input order.
    ///
    /// Runs on a scoped rayon pool when `config.parallel` is set, falling
    /// back to sequential analysis if the pool cannot be built.
    pub fn analyse_all(
        &self,
        classes: &[Dotted],
    ) -> Vec<Result<Arc<AnalysisResult>, AnalysisError>> {
        if !self.config.parallel || classes.len() < 2 {
            return self.analyse_sequential(classes);
        }
        rayon::ThreadPoolBuilder::new()
            .build_scoped(rayon::ThreadBuilder::run, |pool| {
                pool.install(|| {
                    classes
                        .par_iter()
                        .map(|class| self.result_for(class))
                        .collect::<Vec<_>>()
                })
            })
            .unwrap_or_else(|e| {
                tracing::warn!("failed to create thread pool ({e}), running sequentially");
                self.analyse_sequential(classes)
            })
    }

    fn analyse_sequential(
        &self,
        classes: &[Dotted],
    ) -> Vec<Result<Arc<AnalysisResult>, AnalysisError>> {
        classes.iter().map(|class| self.result_for(class)).collect()
    }

    /// Classes with a stored result, sorted by name.
    pub fn analysed_classes(&self) -> Vec<Dotted> {
        let mut classes = self.results.filled_keys();
        classes.sort();
        classes
    }

    /// Number of stored results.
    pub fn len(&self) -> usize {
        self.results.filled_keys().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
