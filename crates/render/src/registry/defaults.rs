//! Process-wide default bindings and the override resolver.
//!
//! Defaults are written at most once, before the first render. Until a host
//! installs its own set, the first read initializes them to
//! [`ComponentBindingSet::builtin`]. Readers receive a shared immutable handle,
//! so concurrent renders never need a lock.

use super::types::{ComponentBindingSet, OverrideRequest};
use once_cell::sync::OnceCell;
use std::sync::Arc;
use thiserror::Error;

static DEFAULTS: OnceCell<Arc<ComponentBindingSet>> = OnceCell::new();

/// Errors raised while configuring the registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Defaults were already installed or already read.
    #[error("Default component bindings are already initialized")]
    DefaultsAlreadyInstalled,
}

/// Installs the process-wide defaults.
///
/// Fails once defaults exist, including when an earlier [`defaults`] call
/// initialized the built-in set.
///
/// # Example
///
/// ```
/// use docslot_core::Slot;
/// use docslot_render::registry::{Binding, ComponentBindingSet, defaults, install_defaults};
///
/// let custom = ComponentBindingSet::builtin().with(Slot::Callout, Binding::markup("details"));
/// install_defaults(custom).unwrap();
/// assert!(defaults().contains(Slot::Callout));
/// ```
pub fn install_defaults(set: ComponentBindingSet) -> Result<(), RegistryError> {
    let slots = set.len();
    DEFAULTS
        .set(Arc::new(set))
        .map_err(|_| RegistryError::DefaultsAlreadyInstalled)?;
    log::debug!("installed default component bindings for {slots} slots");
    Ok(())
}

/// Returns the process-wide defaults.
///
/// The returned set is shared; derive new sets with [`resolve`] or
/// [`ComponentBindingSet::with`] instead of mutating it.
pub fn defaults() -> Arc<ComponentBindingSet> {
    Arc::clone(DEFAULTS.get_or_init(|| Arc::new(ComponentBindingSet::builtin())))
}

/// Merges overrides onto the process-wide defaults.
///
/// For each slot the override wins when present; otherwise the default is
/// kept. The merge is shallow and the defaults are left untouched.
pub fn resolve(overrides: OverrideRequest) -> ComponentBindingSet {
    resolve_over(&defaults(), overrides)
}

/// Merges overrides onto an arbitrary base set.
pub fn resolve_over(base: &ComponentBindingSet, overrides: OverrideRequest) -> ComponentBindingSet {
    base.merged(overrides)
}
