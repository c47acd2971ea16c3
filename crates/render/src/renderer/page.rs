//! Whole-page rendering: content, table of contents, and wrapper.

use super::types::{Page, RenderedPage};
use super::{RenderOptions, render_with};
use crate::registry::ComponentBindingSet;
use docslot_core::{DocumentNode, InstructionPath, PropValue, Props, RenderError, Slot};

/// Renders a page against resolved bindings.
///
/// The content title is the first level-1 heading; the table of contents
/// lists every deeper heading. When the `wrapper` slot is bound, the content
/// fragment is passed to it as its only child together with the page title
/// and permalink.
pub fn render_page(
    bindings: &ComponentBindingSet,
    page: &Page,
    options: &RenderOptions,
) -> Result<RenderedPage, RenderError> {
    let output = render_with(bindings, &page.instructions, options)?;

    let content_title = output
        .headings
        .iter()
        .find(|heading| heading.level == 1)
        .map(|heading| heading.value.clone());
    let toc = output
        .headings
        .into_iter()
        .filter(|heading| heading.level >= 2)
        .collect();

    let root = match bindings.get(Slot::Wrapper) {
        Some(wrapper) => {
            let mut props = Props::new();
            props.insert(
                "title".to_string(),
                PropValue::from(page.metadata.title.as_str()),
            );
            props.insert(
                "permalink".to_string(),
                PropValue::from(page.metadata.permalink.as_str()),
            );
            wrapper.render(&props, vec![output.root]).with_slot(Slot::Wrapper)
        }
        None => output.root,
    };

    Ok(RenderedPage {
        metadata: page.metadata.clone(),
        content_title,
        toc,
        root,
    })
}

/// Renders a page whose layout requires a wrapper component.
///
/// Fails with a missing component error when `wrapper` is unbound.
pub fn render_wrapped_page(
    bindings: &ComponentBindingSet,
    page: &Page,
    options: &RenderOptions,
) -> Result<RenderedPage, RenderError> {
    if !bindings.contains(Slot::Wrapper) {
        return Err(RenderError::missing_component(
            Slot::Wrapper,
            InstructionPath::root(),
        ));
    }
    render_page(bindings, page, options)
}

/// Unwraps the content fragment of a rendered page, skipping the wrapper.
pub fn content_of(page: &RenderedPage) -> &DocumentNode {
    match page.root.slot() {
        Some(Slot::Wrapper) => page.root.children().first().unwrap_or(&page.root),
        _ => &page.root,
    }
}
