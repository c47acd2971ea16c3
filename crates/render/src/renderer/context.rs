//! Rendering context for one instruction sequence.

use super::assets::AssetResolver;
use super::types::TocEntry;
use crate::registry::ComponentBindingSet;
use docslot_core::{DocumentNode, InstructionPath, Props, RenderError, Slot, Slugger};

/// Tracks per-render state while walking instructions.
///
/// The bindings are only read; headings and heading ids are the only state
/// that accumulates, and both belong to this render alone.
pub struct Context<'a> {
    bindings: &'a ComponentBindingSet,
    assets: Option<&'a dyn AssetResolver>,
    slugger: Slugger,
    headings: Vec<TocEntry>,
}

impl<'a> Context<'a> {
    /// Creates a context over resolved bindings.
    pub fn new(bindings: &'a ComponentBindingSet, assets: Option<&'a dyn AssetResolver>) -> Self {
        Self {
            bindings,
            assets,
            slugger: Slugger::new(),
            headings: Vec::new(),
        }
    }

    /// Renders through the binding for `slot`, tagging the result with the slot.
    ///
    /// Fails when the slot is unbound.
    pub fn invoke(
        &self,
        slot: Slot,
        props: Props,
        children: Vec<DocumentNode>,
        path: &InstructionPath,
    ) -> Result<DocumentNode, RenderError> {
        let binding = self
            .bindings
            .require(slot)
            .map_err(|source| RenderError::MissingComponent {
                source,
                path: path.clone(),
            })?;
        Ok(binding.render(&props, children).with_slot(slot))
    }

    /// Returns the anchor id for a heading and records it for the table of contents.
    pub fn register_heading(&mut self, depth: u8, text: &str, explicit_id: Option<&str>) -> String {
        let id = match explicit_id {
            Some(id) => {
                self.slugger.reserve(id);
                id.to_string()
            }
            None => self.slugger.slug(text),
        };
        self.headings.push(TocEntry {
            value: text.to_string(),
            id: id.clone(),
            level: depth,
        });
        id
    }

    /// Served path for an asset id, when a resolver is configured.
    pub fn resolve_asset(&self, asset: &str) -> Option<String> {
        self.assets.and_then(|resolver| resolver.resolve(asset))
    }

    /// Consumes the context, returning headings in reading order.
    pub fn finish(self) -> Vec<TocEntry> {
        self.headings
    }
}
