//! Estimator registry.
//!
//! The [`EstimatorRegistry`] is the discovery point for estimator
//! implementations: external estimator crates register a factory under a
//! name, and the CLI resolves one at handoff time.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::dry_run::{DRY_RUN, DryRunEstimator};
use crate::error::{EstError, EstResult};
use crate::estimator::TrotterEstimator;

/// Factory function type for estimators.
type EstimatorFactory = Box<dyn Fn() -> EstResult<Box<dyn TrotterEstimator>> + Send + Sync>;

/// Central registry for Trotter resource estimators.
pub struct EstimatorRegistry {
    factories: FxHashMap<String, EstimatorFactory>,
}

impl EstimatorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            factories: FxHashMap::default(),
        }
    }

    /// Registry pre-populated with the built-in dry-run estimator.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register_factory(DRY_RUN, || Ok(Box::new(DryRunEstimator)));
        registry
    }

    /// Register an estimator factory under a name.
    pub fn register_factory(
        &mut self,
        name: impl Into<String>,
        factory: impl Fn() -> EstResult<Box<dyn TrotterEstimator>> + Send + Sync + 'static,
    ) {
        let name = name.into();
        debug!("Registering estimator: {}", name);
        self.factories.insert(name, Box::new(factory));
    }

    /// Create an estimator by name.
    pub fn create(&self, name: &str) -> EstResult<Box<dyn TrotterEstimator>> {
        match self.factories.get(name) {
            Some(factory) => factory(),
            None => Err(EstError::EstimatorUnavailable(name.to_string())),
        }
    }

    /// List all registered estimator names, sorted.
    pub fn available_estimators(&self) -> Vec<String> {
        let mut names: Vec<_> = self.factories.keys().cloned().collect();
        names.sort();
        names
    }

    /// Check whether an estimator is registered under `name`.
    pub fn has_estimator(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }
}

impl Default for EstimatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
