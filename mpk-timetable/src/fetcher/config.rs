//! Configuration for schedule queries.

use crate::mpk::PageLayout;

/// Default number of page requests in flight per stage.
const DEFAULT_MAX_CONCURRENT: usize = 4;

/// Configuration parameters for schedule queries.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Maximum number of stop-list or schedule requests in flight.
    /// Requests are still issued in order and results keep that order.
    pub max_concurrent: usize,

    /// The page shape the extraction rules expect.
    pub layout: PageLayout,
}

impl FetcherConfig {
    /// Set maximum concurrent requests. Zero is treated as one.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Use a different page layout.
    pub fn with_layout(mut self, layout: PageLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Effective request concurrency, at least one.
    pub(crate) fn concurrency(&self) -> usize {
        self.max_concurrent.max(1)
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            layout: PageLayout::default(),
        }
    }
}
