use crate::slot::{Expectation, Slot};
use thiserror::Error;

/// Position of an instruction inside a (possibly nested) instruction sequence.
///
/// Each entry is a zero-based index; `[2, 0]` is the first child of the third
/// top-level instruction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstructionPath(pub Vec<usize>);

impl InstructionPath {
    /// Create an empty (root) path
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Create a path one level deeper
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }
}

impl std::fmt::Display for InstructionPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return f.write_str("root");
        }
        let parts: Vec<String> = self.0.iter().map(usize::to_string).collect();
        f.write_str(&parts.join("/"))
    }
}

/// A slot required by a page has no binding after overrides were merged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Expected {} `{slot}` to be defined: you likely forgot to import, pass, or provide it.",
    expected_word(.expected)
)]
pub struct MissingComponentError {
    /// The unbound slot.
    pub slot: Slot,
    /// Whether a custom component or plain markup was expected.
    pub expected: Expectation,
}

impl MissingComponentError {
    /// Create the error for a slot using the slot's own expectation
    pub fn for_slot(slot: Slot) -> Self {
        Self {
            slot,
            expected: slot.expectation(),
        }
    }
}

fn expected_word(expected: &Expectation) -> &'static str {
    match expected {
        Expectation::Component => "component",
        Expectation::Markup => "object",
    }
}

/// Errors that abort rendering a page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A required slot is unbound.
    #[error("{source} (instruction {path})")]
    MissingComponent {
        /// The underlying missing-slot error.
        #[source]
        source: MissingComponentError,
        /// Which instruction needed the slot.
        path: InstructionPath,
    },
}

impl RenderError {
    /// Create a missing component error at an instruction path
    pub fn missing_component(slot: Slot, path: InstructionPath) -> Self {
        Self::MissingComponent {
            source: MissingComponentError::for_slot(slot),
            path,
        }
    }

    /// The missing-slot details, if this is a missing component error
    pub fn as_missing_component(&self) -> Option<&MissingComponentError> {
        match self {
            RenderError::MissingComponent { source, .. } => Some(source),
        }
    }
}
