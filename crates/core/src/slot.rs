//! The closed set of component slots a page can render through.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// What a page expects to find bound to a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Expectation {
    /// A plain markup element; the built-in defaults always provide one.
    Markup,
    /// A custom component the page author must import, pass, or provide.
    Component,
}

/// A named extension point for one kind of content element.
///
/// Slot names serialize in camelCase (`heading1`, `codeBlock`, `tableHead`).
/// Names outside this enumeration are rejected at every string boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Slot {
    /// `<h1>`
    Heading1,
    /// `<h2>`
    Heading2,
    /// `<h3>`
    Heading3,
    /// `<h4>`
    Heading4,
    /// `<h5>`
    Heading5,
    /// `<h6>`
    Heading6,
    /// `<p>`
    Paragraph,
    /// `<blockquote>`
    Blockquote,
    /// `<table>`
    Table,
    /// `<thead>`
    TableHead,
    /// `<tbody>`
    TableBody,
    /// `<tr>`
    TableRow,
    /// `<th>`
    TableHeader,
    /// `<td>`
    TableCell,
    /// `<pre>` wrapping a fenced code block.
    CodeBlock,
    /// `<code>` inside a fenced code block.
    Code,
    /// `<code>` inside running text or table cells.
    InlineCode,
    /// `<strong>`
    Strong,
    /// `<em>`
    Emphasis,
    /// `<a>`
    Link,
    /// `<img>`
    Image,
    /// Collapsible callout (a `Details`-style component).
    Callout,
    /// Optional layout wrapper around the whole page content.
    Wrapper,
}

impl Slot {
    /// Every slot, in declaration order.
    pub const ALL: [Slot; 23] = [
        Slot::Heading1,
        Slot::Heading2,
        Slot::Heading3,
        Slot::Heading4,
        Slot::Heading5,
        Slot::Heading6,
        Slot::Paragraph,
        Slot::Blockquote,
        Slot::Table,
        Slot::TableHead,
        Slot::TableBody,
        Slot::TableRow,
        Slot::TableHeader,
        Slot::TableCell,
        Slot::CodeBlock,
        Slot::Code,
        Slot::InlineCode,
        Slot::Strong,
        Slot::Emphasis,
        Slot::Link,
        Slot::Image,
        Slot::Callout,
        Slot::Wrapper,
    ];

    /// The camelCase name used in configuration and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Slot::Heading1 => "heading1",
            Slot::Heading2 => "heading2",
            Slot::Heading3 => "heading3",
            Slot::Heading4 => "heading4",
            Slot::Heading5 => "heading5",
            Slot::Heading6 => "heading6",
            Slot::Paragraph => "paragraph",
            Slot::Blockquote => "blockquote",
            Slot::Table => "table",
            Slot::TableHead => "tableHead",
            Slot::TableBody => "tableBody",
            Slot::TableRow => "tableRow",
            Slot::TableHeader => "tableHeader",
            Slot::TableCell => "tableCell",
            Slot::CodeBlock => "codeBlock",
            Slot::Code => "code",
            Slot::InlineCode => "inlineCode",
            Slot::Strong => "strong",
            Slot::Emphasis => "emphasis",
            Slot::Link => "link",
            Slot::Image => "image",
            Slot::Callout => "callout",
            Slot::Wrapper => "wrapper",
        }
    }

    /// Whether the slot stands for plain markup or a custom component.
    pub fn expectation(self) -> Expectation {
        match self {
            Slot::Callout | Slot::Wrapper => Expectation::Component,
            _ => Expectation::Markup,
        }
    }

    /// The HTML tag a plain markup rendering of this slot uses.
    pub fn default_tag(self) -> &'static str {
        match self {
            Slot::Heading1 => "h1",
            Slot::Heading2 => "h2",
            Slot::Heading3 => "h3",
            Slot::Heading4 => "h4",
            Slot::Heading5 => "h5",
            Slot::Heading6 => "h6",
            Slot::Paragraph => "p",
            Slot::Blockquote => "blockquote",
            Slot::Table => "table",
            Slot::TableHead => "thead",
            Slot::TableBody => "tbody",
            Slot::TableRow => "tr",
            Slot::TableHeader => "th",
            Slot::TableCell => "td",
            Slot::CodeBlock => "pre",
            Slot::Code | Slot::InlineCode => "code",
            Slot::Strong => "strong",
            Slot::Emphasis => "em",
            Slot::Link => "a",
            Slot::Image => "img",
            Slot::Callout => "details",
            Slot::Wrapper => "div",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A slot name that is not part of the enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown component slot `{name}`")]
pub struct UnknownSlotError {
    /// The rejected name.
    pub name: String,
}

impl FromStr for Slot {
    type Err = UnknownSlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Slot::ALL
            .into_iter()
            .find(|slot| slot.name() == s)
            .ok_or_else(|| UnknownSlotError { name: s.to_string() })
    }
}
