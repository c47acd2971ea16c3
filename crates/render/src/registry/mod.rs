//! Component override resolution.
//!
//! - `types` - Component trait, bindings, binding sets, override requests
//! - `defaults` - Process-wide defaults and `resolve`
//! - `provider` - Nested override scopes
//! - `config` - Declarative overrides loaded from JSON/YAML

pub mod config;
pub mod defaults;
pub mod provider;
pub mod types;

pub use config::{ComponentConfig, ConfigError, MarkupSpec};
pub use defaults::{RegistryError, defaults, install_defaults, resolve, resolve_over};
pub use provider::Provider;
pub use types::{
    Binding, Component, ComponentBindingSet, FnComponent, MarkupComponent, OverrideRequest,
};
