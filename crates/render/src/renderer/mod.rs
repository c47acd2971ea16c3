//! Content renderer.
//!
//! Walks a page's content instructions in reading order and composes a
//! document tree through the resolved slot bindings.
//!
//! # Module Structure
//!
//! - `types` - Instruction, inline, heading, and page types
//! - `context` - Per-render state (bindings, slugger, headings)
//! - `render` - Instruction rendering functions
//! - `page` - Whole-page rendering with wrapper and table of contents
//! - `assets` - Asset id resolution seam

pub mod assets;
mod context;
pub mod page;
pub mod render;
mod types;

pub use assets::{AssetResolver, ManifestResolver};
pub use context::Context;
pub use page::{content_of, render_page, render_wrapped_page};
pub use types::{
    Cell, ContentInstruction, HeadingLevel, Inline, Page, RenderOutput, RenderedPage, TocEntry,
};

use crate::registry::ComponentBindingSet;
use docslot_core::{DocumentNode, InstructionPath, RenderError};
use render::render_sequence;

/// Rendering options.
#[derive(Default, Clone, Copy)]
pub struct RenderOptions<'a> {
    /// Resolver for image asset ids; images keep only their id when absent.
    pub assets: Option<&'a dyn AssetResolver>,
}

impl std::fmt::Debug for RenderOptions<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderOptions")
            .field("assets", &self.assets.is_some())
            .finish()
    }
}

/// Renders instructions into a document tree (entry point).
///
/// The root is a fragment with one child per instruction, in instruction
/// order. Rendering is all-or-nothing: the first unbound slot aborts the
/// page with a missing component error.
///
/// # Examples
///
/// ```
/// use docslot_render::registry::{OverrideRequest, resolve};
/// use docslot_render::renderer::{ContentInstruction, HeadingLevel, render};
///
/// let bindings = resolve(OverrideRequest::new());
/// let root = render(
///     &bindings,
///     &[ContentInstruction::heading(HeadingLevel::H1, "Alert API")],
/// )
/// .unwrap();
/// assert_eq!(root.children().len(), 1);
/// ```
pub fn render(
    bindings: &ComponentBindingSet,
    instructions: &[ContentInstruction],
) -> Result<DocumentNode, RenderError> {
    Ok(render_with(bindings, instructions, &RenderOptions::default())?.root)
}

/// Renders instructions with options, also returning the headings found.
pub fn render_with(
    bindings: &ComponentBindingSet,
    instructions: &[ContentInstruction],
    options: &RenderOptions,
) -> Result<RenderOutput, RenderError> {
    let mut ctx = Context::new(bindings, options.assets);
    let children = render_sequence(instructions, &mut ctx, &InstructionPath::root())?;
    Ok(RenderOutput {
        root: DocumentNode::fragment(children),
        headings: ctx.finish(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{Binding, OverrideRequest, resolve};
    use docslot_core::{Expectation, PropValue, Slot};

    #[test]
    fn children_follow_instruction_order() {
        let bindings = ComponentBindingSet::builtin();
        let instructions = vec![
            ContentInstruction::heading(HeadingLevel::H1, "Team Overview API"),
            ContentInstruction::code_block(None, "https://api.example.com/widgets/team-overview\n"),
            ContentInstruction::heading(HeadingLevel::H2, "Data Demo"),
            ContentInstruction::paragraph("See below."),
            ContentInstruction::image("Home Team Overview", "home_team", 616, 591),
        ];
        let root = render(&bindings, &instructions).unwrap();

        let slots: Vec<Option<Slot>> = root.children().iter().map(DocumentNode::slot).collect();
        let expected: Vec<Option<Slot>> = instructions.iter().map(|i| Some(i.slot())).collect();
        assert_eq!(slots, expected);
    }

    #[test]
    fn missing_callout_aborts_page() {
        let bindings = resolve(OverrideRequest::new());
        let instructions = vec![
            ContentInstruction::heading(HeadingLevel::H1, "Alert API"),
            ContentInstruction::Callout {
                summary: vec![Inline::text("POST")],
                open: true,
                children: Vec::new(),
            },
        ];
        let err = render(&bindings, &instructions).unwrap_err();
        let missing = err.as_missing_component().expect("missing component");
        assert_eq!(missing.slot, Slot::Callout);
        assert_eq!(missing.expected, Expectation::Component);
        assert!(err.to_string().contains("instruction 1"), "{err}");
    }

    #[test]
    fn missing_markup_slot_reports_object() {
        let err = render(
            &ComponentBindingSet::empty(),
            &[ContentInstruction::paragraph("text")],
        )
        .unwrap_err();
        let missing = err.as_missing_component().unwrap();
        assert_eq!(missing.slot, Slot::Paragraph);
        assert_eq!(missing.expected, Expectation::Markup);
    }

    #[test]
    fn override_component_is_used() {
        let callout = Binding::from_fn("Details", |props, children| {
            let mut node = DocumentNode::element("details").with_attr("className", "alert-details");
            for (name, value) in props {
                node = node.with_attr(name.as_str(), value.clone());
            }
            node.with_children(children)
        });
        let bindings = resolve(OverrideRequest::new().with(Slot::Callout, callout));
        let root = render(
            &bindings,
            &[ContentInstruction::Callout {
                summary: vec![Inline::text("POST")],
                open: true,
                children: vec![ContentInstruction::paragraph("details")],
            }],
        )
        .unwrap();

        let node = &root.children()[0];
        assert_eq!(node.tag(), Some("details"));
        assert_eq!(node.slot(), Some(Slot::Callout));
        assert_eq!(node.attr("className"), Some(&PropValue::from("alert-details")));
    }

    #[test]
    fn duplicate_headings_get_unique_ids() {
        let output = render_with(
            &ComponentBindingSet::builtin(),
            &[
                ContentInstruction::heading(HeadingLevel::H2, "Example"),
                ContentInstruction::heading(HeadingLevel::H2, "Example"),
            ],
            &RenderOptions::default(),
        )
        .unwrap();
        let ids: Vec<&str> = output.headings.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["example", "example-1"]);
    }

    #[test]
    fn generated_ids_avoid_anchors_and_literal_suffixes() {
        let heading_ids = |texts: &[&str]| -> Vec<String> {
            let instructions: Vec<_> = texts
                .iter()
                .map(|text| ContentInstruction::heading(HeadingLevel::H2, *text))
                .collect();
            render_with(
                &ComponentBindingSet::builtin(),
                &instructions,
                &RenderOptions::default(),
            )
            .unwrap()
            .headings
            .into_iter()
            .map(|h| h.id)
            .collect()
        };

        assert_eq!(
            heading_ids(&["Intro {#example-1}", "Example", "Example"]),
            vec!["example-1", "example", "example-2"]
        );
        assert_eq!(
            heading_ids(&["Example 1", "Example", "Example"]),
            vec!["example-1", "example", "example-2"]
        );
    }

    #[test]
    fn asset_resolver_sets_src() {
        let resolver = ManifestResolver::new("/slc-document/")
            .with_entry("home_alert", "assets/images/home_alert-de19a0fd.png");
        let options = RenderOptions {
            assets: Some(&resolver),
        };
        let output = render_with(
            &ComponentBindingSet::builtin(),
            &[ContentInstruction::image("Home Alert 1", "home_alert", 653, 492)],
            &options,
        )
        .unwrap();
        assert_eq!(
            output.root.children()[0].attr("src"),
            Some(&PropValue::from(
                "/slc-document/assets/images/home_alert-de19a0fd.png"
            ))
        );
    }
}
