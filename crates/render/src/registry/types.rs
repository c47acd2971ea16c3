//! Binding type definitions: components, binding sets, and override requests.

use docslot_core::{DocumentNode, Expectation, MissingComponentError, Props, Slot};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// A presentational component: renders props and children into a node.
///
/// Implementations must be thread-safe; one binding set is shared by every
/// page rendered against it.
pub trait Component: Send + Sync {
    /// Produces the node for one use of the component.
    fn render(&self, props: &Props, children: Vec<DocumentNode>) -> DocumentNode;

    /// Human readable name used in debug output.
    fn name(&self) -> &str {
        "anonymous"
    }
}

/// Renders a plain element, copying props into attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupComponent {
    /// Element tag.
    pub tag: String,
    /// Optional CSS class added to every rendered element.
    pub class: Option<String>,
    /// Extra attributes added to every rendered element.
    pub attributes: BTreeMap<String, String>,
}

impl MarkupComponent {
    /// Creates a markup component for a tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            class: None,
            attributes: BTreeMap::new(),
        }
    }

    /// Sets the CSS class.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl Component for MarkupComponent {
    fn render(&self, props: &Props, children: Vec<DocumentNode>) -> DocumentNode {
        let mut node = DocumentNode::element(self.tag.as_str());
        for (name, value) in &self.attributes {
            node = node.with_attr(name.as_str(), value.as_str());
        }
        if let Some(class) = &self.class {
            node = node.with_attr("className", class.as_str());
        }
        // Per-use props win over configured attributes.
        for (name, value) in props {
            node = node.with_attr(name.as_str(), value.clone());
        }
        node.with_children(children)
    }

    fn name(&self) -> &str {
        &self.tag
    }
}

/// Adapts a closure into a component.
pub struct FnComponent<F> {
    name: String,
    render: F,
}

impl<F> Component for FnComponent<F>
where
    F: Fn(&Props, Vec<DocumentNode>) -> DocumentNode + Send + Sync,
{
    fn render(&self, props: &Props, children: Vec<DocumentNode>) -> DocumentNode {
        (self.render)(props, children)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// The implementation registered for a slot.
///
/// Bindings are cheap shared handles. Two bindings are equal when they refer
/// to the same registered component, so a binding copied out of one set and
/// merged into another still compares equal.
#[derive(Clone)]
pub struct Binding(Arc<dyn Component>);

impl Binding {
    /// Wraps a component.
    pub fn new(component: impl Component + 'static) -> Self {
        Self(Arc::new(component))
    }

    /// Wraps a closure.
    pub fn from_fn<F>(name: impl Into<String>, render: F) -> Self
    where
        F: Fn(&Props, Vec<DocumentNode>) -> DocumentNode + Send + Sync + 'static,
    {
        Self::new(FnComponent {
            name: name.into(),
            render,
        })
    }

    /// Binds plain markup for a tag.
    pub fn markup(tag: impl Into<String>) -> Self {
        Self::new(MarkupComponent::new(tag))
    }

    /// Renders through the bound component.
    pub fn render(&self, props: &Props, children: Vec<DocumentNode>) -> DocumentNode {
        self.0.render(props, children)
    }

    /// Name of the bound component.
    pub fn name(&self) -> &str {
        self.0.name()
    }
}

impl PartialEq for Binding {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Binding {}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Binding").field(&self.name()).finish()
    }
}

/// Immutable mapping from slots to their bindings.
///
/// Sets are never mutated after construction; merging produces a new set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentBindingSet {
    bindings: BTreeMap<Slot, Binding>,
}

impl ComponentBindingSet {
    /// A set with no bindings.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Plain markup bindings for every markup slot; component slots stay unbound.
    pub fn builtin() -> Self {
        Slot::ALL
            .into_iter()
            .filter(|slot| slot.expectation() == Expectation::Markup)
            .map(|slot| (slot, Binding::markup(slot.default_tag())))
            .collect()
    }

    /// Returns a copy of this set with one slot rebound.
    pub fn with(&self, slot: Slot, binding: Binding) -> Self {
        let mut bindings = self.bindings.clone();
        bindings.insert(slot, binding);
        Self { bindings }
    }

    /// The binding for a slot, if any.
    pub fn get(&self, slot: Slot) -> Option<&Binding> {
        self.bindings.get(&slot)
    }

    /// The binding for a slot a page requires.
    pub fn require(&self, slot: Slot) -> Result<&Binding, MissingComponentError> {
        self.get(slot)
            .ok_or_else(|| MissingComponentError::for_slot(slot))
    }

    /// Whether the slot is bound.
    pub fn contains(&self, slot: Slot) -> bool {
        self.bindings.contains_key(&slot)
    }

    /// Bound slots in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &Binding)> {
        self.bindings.iter().map(|(slot, binding)| (*slot, binding))
    }

    /// Number of bound slots.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no slot is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Applies overrides over a copy of this set.
    pub(crate) fn merged(&self, overrides: OverrideRequest) -> Self {
        let mut bindings = self.bindings.clone();
        bindings.extend(overrides.bindings);
        Self { bindings }
    }
}

impl FromIterator<(Slot, Binding)> for ComponentBindingSet {
    fn from_iter<I: IntoIterator<Item = (Slot, Binding)>>(iter: I) -> Self {
        Self {
            bindings: iter.into_iter().collect(),
        }
    }
}

/// Caller-supplied bindings that take precedence over a base set.
///
/// Consumed by value when merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideRequest {
    bindings: BTreeMap<Slot, Binding>,
}

impl OverrideRequest {
    /// An empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an override, replacing any earlier one for the slot.
    pub fn with(mut self, slot: Slot, binding: Binding) -> Self {
        self.bindings.insert(slot, binding);
        self
    }

    /// Adds an override in place.
    pub fn insert(&mut self, slot: Slot, binding: Binding) {
        self.bindings.insert(slot, binding);
    }

    /// The override for a slot, if any.
    pub fn get(&self, slot: Slot) -> Option<&Binding> {
        self.bindings.get(&slot)
    }

    /// Number of overridden slots.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether nothing is overridden.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl From<ComponentBindingSet> for OverrideRequest {
    fn from(set: ComponentBindingSet) -> Self {
        Self {
            bindings: set.bindings,
        }
    }
}

impl FromIterator<(Slot, Binding)> for OverrideRequest {
    fn from_iter<I: IntoIterator<Item = (Slot, Binding)>>(iter: I) -> Self {
        Self {
            bindings: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docslot_core::PropValue;

    #[test]
    fn builtin_binds_every_markup_slot() {
        let set = ComponentBindingSet::builtin();
        for slot in Slot::ALL {
            assert_eq!(
                set.contains(slot),
                slot.expectation() == Expectation::Markup,
                "{slot}"
            );
        }
        assert_eq!(set.get(Slot::TableHead).map(Binding::name), Some("thead"));
    }

    #[test]
    fn require_reports_missing_slot() {
        let err = ComponentBindingSet::builtin()
            .require(Slot::Callout)
            .unwrap_err();
        assert_eq!(err, MissingComponentError::for_slot(Slot::Callout));
    }

    #[test]
    fn with_leaves_original_untouched() {
        let base = ComponentBindingSet::builtin();
        let custom = Binding::markup("section");
        let derived = base.with(Slot::Blockquote, custom.clone());

        assert_eq!(derived.get(Slot::Blockquote), Some(&custom));
        assert_ne!(base.get(Slot::Blockquote), Some(&custom));
    }

    #[test]
    fn binding_equality_is_identity() {
        let a = Binding::markup("p");
        let b = Binding::markup("p");
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn markup_component_applies_class_attributes_and_props() {
        let mut component = MarkupComponent::new("table").with_class("api-table");
        component
            .attributes
            .insert("role".to_string(), "grid".to_string());
        let mut props = Props::new();
        props.insert("role".to_string(), PropValue::from("table"));

        let node = component.render(&props, vec![DocumentNode::text("x")]);
        assert_eq!(node.tag(), Some("table"));
        assert_eq!(node.attr("className"), Some(&PropValue::from("api-table")));
        assert_eq!(node.attr("role"), Some(&PropValue::from("table")));
        assert_eq!(node.text_content(), "x");
    }

    #[test]
    fn fn_component_reports_name() {
        let binding = Binding::from_fn("Details", |_, children| {
            DocumentNode::element("details").with_children(children)
        });
        assert_eq!(binding.name(), "Details");
        assert_eq!(format!("{binding:?}"), "Binding(\"Details\")");
    }
}
