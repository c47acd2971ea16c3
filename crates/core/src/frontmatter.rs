use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

/// Front matter keys the page pipeline understands.
///
/// Unknown keys are kept in [`FrontmatterExtraction::raw`] and otherwise ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    /// Page title; falls back to the first level-1 heading.
    pub title: Option<String>,
    /// Short description shown in link previews.
    pub description: Option<String>,
    /// Explicit route slug.
    pub slug: Option<String>,
    /// Ordering position inside the sidebar category.
    pub sidebar_position: Option<f64>,
    /// Label shown in the sidebar instead of the title.
    pub sidebar_label: Option<String>,
    /// Drafts are only published in development.
    pub draft: bool,
    /// Unlisted pages are published but hidden from navigation.
    pub unlisted: bool,
    /// Free-form tags.
    pub tags: Vec<String>,
}

/// Result of extracting front matter from a Markdown document.
#[derive(Debug)]
pub struct FrontmatterExtraction {
    /// Recognized keys.
    pub front_matter: FrontMatter,
    /// The full mapping as JSON, including unrecognized keys.
    pub raw: JsonValue,
    /// Byte offset inside the original document where Markdown content begins.
    pub body_start: usize,
}

/// Errors emitted while extracting front matter.
#[derive(Debug, Error)]
pub enum FrontmatterError {
    /// Opening `---` fence without a closing one.
    #[error("Unterminated YAML frontmatter block: expected closing '---'")]
    Unterminated,
    /// YAML failed to parse, or a known key had the wrong shape.
    #[error("Frontmatter parse error: {0}")]
    Parse(String),
    /// Top-level YAML node was not a mapping.
    #[error("Frontmatter must be a YAML mapping at the top level")]
    InvalidRootType,
}

/// Extracts the leading `---` fenced YAML block of a document.
///
/// Documents without a block yield empty front matter and `body_start == 0`.
pub fn extract_frontmatter(input: &str) -> Result<FrontmatterExtraction, FrontmatterError> {
    let Some((block, body_start)) = locate_block(input)? else {
        return Ok(FrontmatterExtraction {
            front_matter: FrontMatter::default(),
            raw: JsonValue::Object(Default::default()),
            body_start: 0,
        });
    };

    let raw = parse_mapping(block)?;
    let front_matter = serde_json::from_value(raw.clone())
        .map_err(|err| FrontmatterError::Parse(err.to_string()))?;
    Ok(FrontmatterExtraction {
        front_matter,
        raw,
        body_start,
    })
}

fn parse_mapping(block: &str) -> Result<JsonValue, FrontmatterError> {
    if block.trim().is_empty() {
        return Ok(JsonValue::Object(Default::default()));
    }
    let yaml: serde_yaml::Value =
        serde_yaml::from_str(block).map_err(|err| FrontmatterError::Parse(err.to_string()))?;
    match serde_json::to_value(yaml).map_err(|err| FrontmatterError::Parse(err.to_string()))? {
        JsonValue::Null => Ok(JsonValue::Object(Default::default())),
        value @ JsonValue::Object(_) => Ok(value),
        _ => Err(FrontmatterError::InvalidRootType),
    }
}

/// Finds the YAML block; returns it together with the byte offset of the body.
fn locate_block(input: &str) -> Result<Option<(&str, usize)>, FrontmatterError> {
    let offset = if input.starts_with('\u{feff}') {
        '\u{feff}'.len_utf8()
    } else {
        0
    };

    let mut lines = LineCursor::new(input, offset);

    // Leading blank lines are allowed before the opening fence.
    let opening = loop {
        match lines.next() {
            Some((_, line)) if line.trim().is_empty() => continue,
            Some((_, line)) if is_fence(line) => break lines.position,
            _ => return Ok(None),
        }
    };

    while let Some((start, line)) = lines.next() {
        if is_fence(line) {
            let block = input[opening..start].trim_end_matches(['\r', '\n']);
            return Ok(Some((block, lines.position)));
        }
    }
    Err(FrontmatterError::Unterminated)
}

fn is_fence(line: &str) -> bool {
    line.trim_end_matches(['\r', '\n']) == "---"
}

struct LineCursor<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> LineCursor<'a> {
    fn new(input: &'a str, position: usize) -> Self {
        Self { input, position }
    }

    /// Yields `(line_start, line_including_newline)`.
    fn next(&mut self) -> Option<(usize, &'a str)> {
        if self.position >= self.input.len() {
            return None;
        }
        let start = self.position;
        let rest = &self.input[start..];
        let len = rest.find('\n').map_or(rest.len(), |pos| pos + 1);
        self.position += len;
        Some((start, &rest[..len]))
    }
}
