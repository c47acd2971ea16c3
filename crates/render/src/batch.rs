//! Parallel rendering of many pages against shared read-only bindings.

use crate::registry::{OverrideRequest, Provider};
use crate::renderer::{AssetResolver, Page, RenderOptions, RenderedPage, render_page};
use docslot_core::RenderError;
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

/// Input for batch processing - one page to render.
#[derive(Debug, Clone)]
pub struct BatchInput {
    /// Page identifier (typically the document id).
    pub id: String,
    /// The page.
    pub page: Page,
    /// Page-specific overrides applied over the batch scope.
    pub overrides: OverrideRequest,
}

impl BatchInput {
    /// Input without page-specific overrides.
    pub fn new(id: impl Into<String>, page: Page) -> Self {
        Self {
            id: id.into(),
            page,
            overrides: OverrideRequest::new(),
        }
    }
}

/// Result for a single page in a batch.
#[derive(Debug, Clone)]
pub struct BatchResult {
    /// Page identifier matching the input.
    pub id: String,
    /// Rendered page (present on success).
    pub result: Option<RenderedPage>,
    /// Render error (present on failure).
    pub error: Option<RenderError>,
}

/// Statistics for batch processing.
#[derive(Debug, Clone, Default)]
pub struct BatchStats {
    /// Total number of pages submitted.
    pub total: usize,
    /// Number of pages rendered.
    pub succeeded: usize,
    /// Number of pages that failed.
    pub failed: usize,
    /// Wall-clock processing time in milliseconds.
    pub processing_time_ms: f64,
}

/// Options for batch processing.
#[derive(Default, Clone, Copy)]
pub struct BatchOptions<'a> {
    /// Maximum number of threads to use. Defaults to rayon's global pool.
    pub max_threads: Option<usize>,
    /// Whether to continue after a failed page. Defaults to true.
    pub continue_on_error: Option<bool>,
    /// Asset resolver shared by every page.
    pub assets: Option<&'a dyn AssetResolver>,
}

/// Result of batch processing containing all results and statistics.
#[derive(Debug, Clone)]
pub struct BatchProcessingResult {
    /// Individual results, in input order.
    pub results: Vec<BatchResult>,
    /// Processing statistics.
    pub stats: BatchStats,
}

/// Renders many pages in parallel.
///
/// Every page resolves its own overrides over `scope`; the scope's bindings
/// are only read, so pages cannot observe each other's overrides. With
/// `continue_on_error` disabled, pages render sequentially and processing
/// stops after the first failure.
pub fn render_batch(
    scope: &Provider,
    inputs: Vec<BatchInput>,
    options: &BatchOptions,
) -> BatchProcessingResult {
    let start = Instant::now();
    let continue_on_error = options.continue_on_error.unwrap_or(true);
    let render_options = RenderOptions {
        assets: options.assets,
    };

    // Configure thread pool if max_threads is specified
    let pool = options.max_threads.and_then(|max_threads| {
        rayon::ThreadPoolBuilder::new()
            .num_threads(max_threads)
            .build()
            .ok()
    });

    let total = inputs.len();
    let succeeded = AtomicUsize::new(0);
    let failed = AtomicUsize::new(0);

    let process_input = |input: BatchInput| -> BatchResult {
        let bindings = scope.resolve(input.overrides);
        match render_page(&bindings, &input.page, &render_options) {
            Ok(page) => {
                succeeded.fetch_add(1, Ordering::Relaxed);
                BatchResult {
                    id: input.id,
                    result: Some(page),
                    error: None,
                }
            }
            Err(err) => {
                failed.fetch_add(1, Ordering::Relaxed);
                log::warn!("failed to render page {}: {}", input.id, err);
                BatchResult {
                    id: input.id,
                    result: None,
                    error: Some(err),
                }
            }
        }
    };

    let results: Vec<BatchResult> = if continue_on_error {
        if let Some(pool) = pool {
            pool.install(|| inputs.into_par_iter().map(process_input).collect())
        } else {
            inputs.into_par_iter().map(process_input).collect()
        }
    } else {
        // Stop on first error - sequential processing required
        let mut results = Vec::with_capacity(inputs.len());
        for input in inputs {
            let result = process_input(input);
            let had_error = result.error.is_some();
            results.push(result);
            if had_error {
                break;
            }
        }
        results
    };

    let stats = BatchStats {
        total,
        succeeded: succeeded.load(Ordering::Relaxed),
        failed: failed.load(Ordering::Relaxed),
        processing_time_ms: start.elapsed().as_secs_f64() * 1000.0,
    };
    log::debug!(
        "rendered {}/{} pages in {:.2}ms",
        stats.succeeded,
        stats.total,
        stats.processing_time_ms
    );

    BatchProcessingResult { results, stats }
}
