//! Declarative slot overrides loaded from JSON or YAML.

use super::types::{Binding, MarkupComponent, OverrideRequest};
use docslot_core::{Slot, UnknownSlotError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Markup used for an overridden slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MarkupSpec {
    /// Element tag (e.g. "section").
    pub tag: String,
    /// Optional CSS class.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// Extra static attributes.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

/// Slot overrides described as data.
///
/// ```yaml
/// slots:
///   blockquote: { tag: section, class: api-block }
///   callout: { tag: details, class: api-details }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentConfig {
    /// Markup per overridden slot.
    pub slots: BTreeMap<Slot, MarkupSpec>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawComponentConfig {
    #[serde(default)]
    slots: BTreeMap<String, MarkupSpec>,
}

/// Errors loading a component configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON could not be parsed.
    #[error("Invalid component config JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML could not be parsed.
    #[error("Invalid component config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// A slot name outside the enumeration.
    #[error(transparent)]
    UnknownSlot(#[from] UnknownSlotError),
}

impl ComponentConfig {
    /// Parses a JSON configuration.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let raw: RawComponentConfig = serde_json::from_str(input)?;
        Self::from_raw(raw)
    }

    /// Parses a YAML configuration.
    pub fn from_yaml(input: &str) -> Result<Self, ConfigError> {
        let raw: RawComponentConfig = serde_yaml::from_str(input)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawComponentConfig) -> Result<Self, ConfigError> {
        let slots = raw
            .slots
            .into_iter()
            .map(|(name, spec)| Ok((name.parse::<Slot>()?, spec)))
            .collect::<Result<BTreeMap<_, _>, UnknownSlotError>>()?;
        log::debug!("loaded component config overriding {} slots", slots.len());
        Ok(Self { slots })
    }

    /// Converts the configuration into bindings.
    pub fn to_overrides(&self) -> OverrideRequest {
        self.slots
            .iter()
            .map(|(slot, spec)| {
                let component = MarkupComponent {
                    tag: spec.tag.clone(),
                    class: spec.class.clone(),
                    attributes: spec.attributes.clone(),
                };
                (*slot, Binding::new(component))
            })
            .collect()
    }
}
