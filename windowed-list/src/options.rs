use alloc::sync::Arc;

use crate::load_more::DEFAULT_LOAD_MORE_THRESHOLD;

/// Initial scroll offset configuration.
#[derive(Clone)]
pub enum InitialOffset {
    /// A fixed initial offset.
    Value(u64),
    /// A lazily evaluated initial offset provider (called by `ScrollController::new`).
    Provider(Arc<dyn Fn() -> u64 + Send + Sync>),
}

impl InitialOffset {
    pub(crate) fn resolve(&self) -> u64 {
        match self {
            Self::Value(v) => *v,
            Self::Provider(f) => f(),
        }
    }
}

impl Default for InitialOffset {
    fn default() -> Self {
        Self::Value(0)
    }
}

impl core::fmt::Debug for InitialOffset {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

/// Configuration for [`crate::ScrollController`].
///
/// Cheap to clone: the only heap field (an initial offset provider) lives in an `Arc`.
#[derive(Clone, Debug)]
pub struct ControllerOptions {
    /// Items materialized beyond each edge of the viewport.
    pub overscan: usize,

    /// Distance to the end of the content below which more items are requested.
    pub load_more_threshold: u64,

    /// Whether the data source can supply more items initially.
    pub has_more: bool,

    /// Initial scroll offset (e.g. restored from a previous session).
    pub initial_offset: InitialOffset,

    /// Initial viewport extent, used until the first scroll notification arrives.
    pub initial_viewport: u32,

    /// Quiet period after the last scroll event before `is_scrolling` resets.
    pub is_scrolling_reset_delay_ms: u64,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            overscan: 1,
            load_more_threshold: DEFAULT_LOAD_MORE_THRESHOLD,
            has_more: true,
            initial_offset: InitialOffset::default(),
            initial_viewport: 0,
            is_scrolling_reset_delay_ms: 150,
        }
    }
}

impl ControllerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_load_more_threshold(mut self, threshold: u64) -> Self {
        self.load_more_threshold = threshold;
        self
    }

    pub fn with_has_more(mut self, has_more: bool) -> Self {
        self.has_more = has_more;
        self
    }

    pub fn with_initial_offset(mut self, initial_offset: InitialOffset) -> Self {
        self.initial_offset = initial_offset;
        self
    }

    pub fn with_initial_offset_value(mut self, initial_offset: u64) -> Self {
        self.initial_offset = InitialOffset::Value(initial_offset);
        self
    }

    pub fn with_initial_offset_provider(
        mut self,
        initial_offset: impl Fn() -> u64 + Send + Sync + 'static,
    ) -> Self {
        self.initial_offset = InitialOffset::Provider(Arc::new(initial_offset));
        self
    }

    pub fn with_initial_viewport(mut self, viewport_extent: u32) -> Self {
        self.initial_viewport = viewport_extent;
        self
    }

    pub fn with_is_scrolling_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.is_scrolling_reset_delay_ms = delay_ms;
        self
    }
}
