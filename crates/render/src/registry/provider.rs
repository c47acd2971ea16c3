//! Nested override scopes.
//!
//! A provider layer sees the bindings of its parent and either spreads a
//! partial mapping over them or computes a new set from them. A detached
//! layer ignores its parent entirely. Each layer is computed eagerly and
//! owns an immutable set, so layers can be shared across threads.

use super::defaults::defaults;
use super::types::{ComponentBindingSet, OverrideRequest};
use std::sync::Arc;

/// One scope of component bindings.
#[derive(Debug, Clone)]
pub struct Provider {
    bindings: Arc<ComponentBindingSet>,
}

impl Provider {
    /// The outermost scope, backed by the process-wide defaults.
    pub fn root() -> Self {
        Self {
            bindings: defaults(),
        }
    }

    /// A scope that starts from nothing but the given overrides.
    pub fn detached(overrides: OverrideRequest) -> Self {
        Self {
            bindings: Arc::new(ComponentBindingSet::empty().merged(overrides)),
        }
    }

    /// A child scope whose overrides take precedence over this scope.
    pub fn with_overrides(&self, overrides: OverrideRequest) -> Self {
        if overrides.is_empty() {
            return self.clone();
        }
        Self {
            bindings: Arc::new(self.bindings.merged(overrides)),
        }
    }

    /// A child scope computed from this scope's bindings.
    pub fn with_fn<F>(&self, layer: F) -> Self
    where
        F: FnOnce(&ComponentBindingSet) -> ComponentBindingSet,
    {
        Self {
            bindings: Arc::new(layer(&self.bindings)),
        }
    }

    /// Bindings visible in this scope.
    pub fn bindings(&self) -> &ComponentBindingSet {
        &self.bindings
    }

    /// Shared handle to this scope's bindings.
    pub fn shared(&self) -> Arc<ComponentBindingSet> {
        Arc::clone(&self.bindings)
    }

    /// Merges per-render overrides over this scope.
    pub fn resolve(&self, overrides: OverrideRequest) -> ComponentBindingSet {
        self.bindings.merged(overrides)
    }
}

impl Default for Provider {
    fn default() -> Self {
        Self::root()
    }
}
