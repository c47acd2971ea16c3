//! Content instructions consumed by the renderer and the metadata it produces.

use docslot_core::{DocumentNode, PageMetadata, Slot};
use serde::{Deserialize, Serialize};

/// Heading depth, restricted to the six levels markup supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum HeadingLevel {
    /// Level 1.
    H1,
    /// Level 2.
    H2,
    /// Level 3.
    H3,
    /// Level 4.
    H4,
    /// Level 5.
    H5,
    /// Level 6.
    H6,
}

impl HeadingLevel {
    /// Numeric depth (1-6).
    pub fn depth(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
            HeadingLevel::H5 => 5,
            HeadingLevel::H6 => 6,
        }
    }

    /// Slot headings of this level render through.
    pub fn slot(self) -> Slot {
        match self {
            HeadingLevel::H1 => Slot::Heading1,
            HeadingLevel::H2 => Slot::Heading2,
            HeadingLevel::H3 => Slot::Heading3,
            HeadingLevel::H4 => Slot::Heading4,
            HeadingLevel::H5 => Slot::Heading5,
            HeadingLevel::H6 => Slot::Heading6,
        }
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = String;

    fn try_from(depth: u8) -> Result<Self, Self::Error> {
        match depth {
            1 => Ok(HeadingLevel::H1),
            2 => Ok(HeadingLevel::H2),
            3 => Ok(HeadingLevel::H3),
            4 => Ok(HeadingLevel::H4),
            5 => Ok(HeadingLevel::H5),
            6 => Ok(HeadingLevel::H6),
            other => Err(format!("heading level must be between 1 and 6, got {other}")),
        }
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.depth()
    }
}

/// Phrasing content inside paragraphs, cells, and callout summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Inline {
    /// Literal text.
    Text {
        /// The text.
        value: String,
    },
    /// Inline code span.
    Code {
        /// The code.
        value: String,
    },
    /// Strong emphasis.
    Strong {
        /// Emphasized content.
        children: Vec<Inline>,
    },
    /// Emphasis.
    Emphasis {
        /// Emphasized content.
        children: Vec<Inline>,
    },
    /// Hyperlink.
    Link {
        /// Link target.
        href: String,
        /// Link text.
        children: Vec<Inline>,
    },
}

impl Inline {
    /// Literal text.
    pub fn text(value: impl Into<String>) -> Self {
        Inline::Text {
            value: value.into(),
        }
    }

    /// Inline code span.
    pub fn code(value: impl Into<String>) -> Self {
        Inline::Code {
            value: value.into(),
        }
    }

    /// Strong text.
    pub fn strong(children: Vec<Inline>) -> Self {
        Inline::Strong { children }
    }

    /// Link.
    pub fn link(href: impl Into<String>, children: Vec<Inline>) -> Self {
        Inline::Link {
            href: href.into(),
            children,
        }
    }
}

/// One cell of a table: a run of inline content.
pub type Cell = Vec<Inline>;

/// One ordered directive describing a piece of page content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ContentInstruction {
    /// A section heading.
    Heading {
        /// Heading level.
        level: HeadingLevel,
        /// Heading text; a trailing `{#anchor}` sets the id.
        text: String,
        /// Explicit id; generated from the text when absent.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
    },
    /// A paragraph of inline content.
    Paragraph {
        /// Paragraph content.
        content: Vec<Inline>,
    },
    /// A block quote around nested instructions.
    Blockquote {
        /// Quoted content.
        children: Vec<ContentInstruction>,
    },
    /// A table with a header row.
    ///
    /// Body rows are padded with empty cells or truncated to the header width.
    Table {
        /// Header cells.
        headers: Vec<Cell>,
        /// Body rows.
        rows: Vec<Vec<Cell>>,
    },
    /// A fenced code block.
    CodeBlock {
        /// Language tag (`json`).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        lang: Option<String>,
        /// Fence meta string (`title="RESPONSE DATA"`).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        meta: Option<String>,
        /// Code body.
        body: String,
    },
    /// An image referencing an opaque asset id.
    Image {
        /// Alternative text.
        alt: String,
        /// Asset identifier resolved by the asset pipeline.
        asset: String,
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },
    /// A collapsible callout with a summary line.
    Callout {
        /// Summary content, always visible.
        summary: Vec<Inline>,
        /// Whether the callout starts expanded.
        #[serde(default)]
        open: bool,
        /// Collapsible content.
        children: Vec<ContentInstruction>,
    },
}

impl ContentInstruction {
    /// Heading with a generated id.
    pub fn heading(level: HeadingLevel, text: impl Into<String>) -> Self {
        ContentInstruction::Heading {
            level,
            text: text.into(),
            id: None,
        }
    }

    /// Paragraph of plain text.
    pub fn paragraph(text: impl Into<String>) -> Self {
        ContentInstruction::Paragraph {
            content: vec![Inline::text(text)],
        }
    }

    /// Table of plain-text cells.
    pub fn table(headers: &[&str], rows: &[&[&str]]) -> Self {
        let cell = |text: &&str| vec![Inline::text(*text)];
        ContentInstruction::Table {
            headers: headers.iter().map(cell).collect(),
            rows: rows.iter().map(|row| row.iter().map(cell).collect()).collect(),
        }
    }

    /// Code block with an optional language.
    pub fn code_block(lang: Option<&str>, body: impl Into<String>) -> Self {
        ContentInstruction::CodeBlock {
            lang: lang.map(str::to_string),
            meta: None,
            body: body.into(),
        }
    }

    /// Image with literal dimensions.
    pub fn image(
        alt: impl Into<String>,
        asset: impl Into<String>,
        width: u32,
        height: u32,
    ) -> Self {
        ContentInstruction::Image {
            alt: alt.into(),
            asset: asset.into(),
            width,
            height,
        }
    }

    /// The slot this instruction's outermost node renders through.
    pub fn slot(&self) -> Slot {
        match self {
            ContentInstruction::Heading { level, .. } => level.slot(),
            ContentInstruction::Paragraph { .. } => Slot::Paragraph,
            ContentInstruction::Blockquote { .. } => Slot::Blockquote,
            ContentInstruction::Table { .. } => Slot::Table,
            ContentInstruction::CodeBlock { .. } => Slot::CodeBlock,
            ContentInstruction::Image { .. } => Slot::Image,
            ContentInstruction::Callout { .. } => Slot::Callout,
        }
    }
}

/// A heading encountered while rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    /// Visible heading text.
    pub value: String,
    /// Anchor id.
    pub id: String,
    /// Heading depth (1-6).
    pub level: u8,
}

/// Result of rendering an instruction sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderOutput {
    /// Root fragment; children follow instruction order.
    pub root: DocumentNode,
    /// Every heading in reading order.
    pub headings: Vec<TocEntry>,
}

/// A page ready to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Metadata passed through to the output.
    pub metadata: PageMetadata,
    /// Content in reading order.
    pub instructions: Vec<ContentInstruction>,
}

/// A rendered page handed to the layout collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedPage {
    /// Metadata, unmodified.
    pub metadata: PageMetadata,
    /// Text of the first level-1 heading.
    pub content_title: Option<String>,
    /// Headings of level 2 and deeper.
    pub toc: Vec<TocEntry>,
    /// Page content, wrapped when a wrapper is bound.
    pub root: DocumentNode,
}
