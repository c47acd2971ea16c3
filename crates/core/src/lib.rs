#![deny(missing_docs)]
//! docslot core: slots, document nodes, errors, page metadata, and slugs.

/// Core error types.
pub mod error;
/// YAML frontmatter extraction.
pub mod frontmatter;
/// Page metadata and navigation links.
pub mod metadata;
/// Rendered document tree.
pub mod node;
/// Component slot enumeration.
pub mod slot;
/// Heading id generation.
pub mod slug;

pub use error::{InstructionPath, MissingComponentError, RenderError};
pub use frontmatter::{FrontMatter, FrontmatterError, FrontmatterExtraction, extract_frontmatter};
pub use metadata::{NavLink, PageMetadata, link_neighbours};
pub use node::{DocumentNode, PropValue, Props};
pub use slot::{Expectation, Slot, UnknownSlotError};
pub use slug::{Slugger, split_explicit_anchor};
