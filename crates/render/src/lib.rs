#![deny(missing_docs)]
//! docslot rendering: component override resolution, page rendering, and batches.

/// Parallel page rendering.
pub mod batch;
/// Component registry: defaults, overrides, provider scopes, configuration.
pub mod registry;
/// Content renderer.
pub mod renderer;

pub use batch::{
    BatchInput, BatchOptions, BatchProcessingResult, BatchResult, BatchStats, render_batch,
};
pub use registry::{
    Binding, Component, ComponentBindingSet, ComponentConfig, OverrideRequest, Provider, defaults,
    install_defaults, resolve,
};
pub use renderer::{
    ContentInstruction, HeadingLevel, Inline, Page, RenderOptions, RenderedPage, TocEntry, render,
    render_page, render_with,
};
