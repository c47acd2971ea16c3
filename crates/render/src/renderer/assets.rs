//! Asset id indirection for image instructions.

use serde::Deserialize;
use std::collections::HashMap;

/// Maps opaque asset ids to served paths.
///
/// Implemented by the host's asset pipeline. Returning `None` leaves the
/// image node with its asset id only.
pub trait AssetResolver: Send + Sync {
    /// Served path for an asset id.
    fn resolve(&self, asset: &str) -> Option<String>;
}

/// Resolves ids through a manifest of hashed output paths.
///
/// Paths are joined onto a public base path, e.g. `/slc-document/` +
/// `assets/images/home_alert-de19a0fd.png`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestResolver {
    /// Public base path prepended to every entry.
    #[serde(default)]
    pub public_path: String,
    /// Asset id to output path relative to the public path.
    #[serde(default)]
    pub entries: HashMap<String, String>,
}

impl ManifestResolver {
    /// Creates an empty manifest under a public path.
    pub fn new(public_path: impl Into<String>) -> Self {
        Self {
            public_path: public_path.into(),
            entries: HashMap::new(),
        }
    }

    /// Adds one manifest entry.
    pub fn with_entry(mut self, asset: impl Into<String>, path: impl Into<String>) -> Self {
        self.entries.insert(asset.into(), path.into());
        self
    }

    /// Parses a JSON manifest.
    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }
}

impl AssetResolver for ManifestResolver {
    fn resolve(&self, asset: &str) -> Option<String> {
        let path = self.entries.get(asset)?;
        let base = self.public_path.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if base.is_empty() {
            Some(format!("/{path}"))
        } else {
            Some(format!("{base}/{path}"))
        }
    }
}
