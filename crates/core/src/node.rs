//! Immutable document tree produced by rendering a page.

use crate::slot::Slot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A prop or attribute value attached to an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    /// A boolean flag such as `open`.
    Flag(bool),
    /// An integer such as an image dimension.
    Number(u32),
    /// Any other literal value.
    Text(String),
}

impl PropValue {
    /// Returns the string value if this is a text prop.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Text(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Text(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Flag(value)
    }
}

impl From<u32> for PropValue {
    fn from(value: u32) -> Self {
        PropValue::Number(value)
    }
}

/// Props handed to a component, ordered by name.
pub type Props = BTreeMap<String, PropValue>;

/// One rendered content element.
///
/// Nodes are plain owned values; a tree returned from rendering shares no
/// state with the bindings that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DocumentNode {
    /// A tag-like element.
    Element {
        /// Tag name (`h1`, `table`, `details`, ...).
        tag: String,
        /// Slot the element was rendered through, if any.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        slot: Option<Slot>,
        /// Element attributes.
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        attributes: Props,
        /// Ordered child nodes.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        children: Vec<DocumentNode>,
    },
    /// Literal text.
    Text {
        /// The text content.
        value: String,
    },
    /// A transparent list of nodes.
    Fragment {
        /// Ordered child nodes.
        children: Vec<DocumentNode>,
    },
}

impl DocumentNode {
    /// Creates an element with no slot, attributes, or children.
    pub fn element(tag: impl Into<String>) -> Self {
        DocumentNode::Element {
            tag: tag.into(),
            slot: None,
            attributes: Props::new(),
            children: Vec::new(),
        }
    }

    /// Creates a text node.
    pub fn text(value: impl Into<String>) -> Self {
        DocumentNode::Text {
            value: value.into(),
        }
    }

    /// Creates a fragment.
    pub fn fragment(children: Vec<DocumentNode>) -> Self {
        DocumentNode::Fragment { children }
    }

    /// Tags an element with the slot it was rendered through.
    ///
    /// Text and fragment nodes are returned unchanged.
    pub fn with_slot(mut self, value: Slot) -> Self {
        if let DocumentNode::Element { slot, .. } = &mut self {
            *slot = Some(value);
        }
        self
    }

    /// Adds an attribute to an element.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        if let DocumentNode::Element { attributes, .. } = &mut self {
            attributes.insert(name.into(), value.into());
        }
        self
    }

    /// Appends children to an element or fragment.
    pub fn with_children(mut self, nodes: Vec<DocumentNode>) -> Self {
        match &mut self {
            DocumentNode::Element { children, .. } | DocumentNode::Fragment { children } => {
                children.extend(nodes);
            }
            DocumentNode::Text { .. } => {}
        }
        self
    }

    /// Tag name of an element.
    pub fn tag(&self) -> Option<&str> {
        match self {
            DocumentNode::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    /// Slot an element was rendered through.
    pub fn slot(&self) -> Option<Slot> {
        match self {
            DocumentNode::Element { slot, .. } => *slot,
            _ => None,
        }
    }

    /// Looks up an element attribute.
    pub fn attr(&self, name: &str) -> Option<&PropValue> {
        match self {
            DocumentNode::Element { attributes, .. } => attributes.get(name),
            _ => None,
        }
    }

    /// Child nodes; empty for text.
    pub fn children(&self) -> &[DocumentNode] {
        match self {
            DocumentNode::Element { children, .. } | DocumentNode::Fragment { children } => {
                children
            }
            DocumentNode::Text { .. } => &[],
        }
    }

    /// Concatenated text of this node and all descendants.
    pub fn text_content(&self) -> String {
        let mut buffer = String::new();
        collect_text(self, &mut buffer);
        buffer
    }
}

fn collect_text(node: &DocumentNode, buffer: &mut String) {
    match node {
        DocumentNode::Text { value } => buffer.push_str(value),
        _ => {
            for child in node.children() {
                collect_text(child, buffer);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_slot_attrs_and_children() {
        let node = DocumentNode::element("h5")
            .with_slot(Slot::Heading5)
            .with_attr("id", "headers")
            .with_children(vec![DocumentNode::text("Headers")]);

        assert_eq!(node.tag(), Some("h5"));
        assert_eq!(node.slot(), Some(Slot::Heading5));
        assert_eq!(node.attr("id"), Some(&PropValue::from("headers")));
        assert_eq!(node.text_content(), "Headers");
    }

    #[test]
    fn text_nodes_ignore_element_builders() {
        let node = DocumentNode::text("plain")
            .with_slot(Slot::Paragraph)
            .with_attr("id", "x")
            .with_children(vec![DocumentNode::text("ignored")]);
        assert_eq!(node, DocumentNode::text("plain"));
        assert!(node.children().is_empty());
    }

    #[test]
    fn text_content_walks_nested_fragments() {
        let node = DocumentNode::fragment(vec![
            DocumentNode::element("code").with_children(vec![DocumentNode::text("POST")]),
            DocumentNode::text(" "),
            DocumentNode::element("b").with_children(vec![DocumentNode::text("/api")]),
        ]);
        assert_eq!(node.text_content(), "POST /api");
    }

    #[test]
    fn serializes_with_type_tag_and_skips_empty_fields() {
        let node = DocumentNode::element("img")
            .with_slot(Slot::Image)
            .with_attr("width", 653u32)
            .with_attr("open", true);
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "element",
                "tag": "img",
                "slot": "image",
                "attributes": { "open": true, "width": 653 }
            })
        );
    }
}
