use alloc::sync::Arc;
use core::cmp;

use crate::load_more::should_load_more;
use crate::range::{clamp_offset, core_range_at, expand};
use crate::scroll_to::scroll_to_item;
use crate::{
    Align, ControllerOptions, ControllerState, Layout, LoadMoreState, ScrollDirection,
    ScrollEvent, ScrollOutcome, VisibleRange, WindowState,
};

/// The per-list scroll dispatcher.
///
/// Owns the [`WindowState`] and [`LoadMoreState`] of exactly one list and shares its
/// [`Layout`] through an `Arc`. Every scroll notification is fanned out to two independent pure
/// functions: [`crate::resolve_visible_range`] for the materialized range and
/// [`crate::should_load_more`] for incremental loading.
///
/// This type holds no UI objects and never calls back into the host: the returned
/// [`ScrollOutcome`] tells the caller what to render and whether to request more data.
#[derive(Clone, Debug)]
pub struct ScrollController {
    options: ControllerOptions,
    layout: Arc<Layout>,
    window: WindowState,
    load: LoadMoreState,
    is_scrolling: bool,
    scroll_direction: Option<ScrollDirection>,
    last_scroll_event_ms: Option<u64>,
}

impl ScrollController {
    /// Creates a controller over an empty layout.
    pub fn new(options: ControllerOptions) -> Self {
        Self::with_layout(Arc::new(Layout::empty()), options)
    }

    pub fn with_layout(layout: Arc<Layout>, options: ControllerOptions) -> Self {
        let window = WindowState {
            scroll_offset: options.initial_offset.resolve(),
            viewport_extent: options.initial_viewport,
            overscan: options.overscan,
        };
        let load = LoadMoreState::new(options.has_more, options.load_more_threshold);
        vdebug!(
            count = layout.len(),
            overscan = options.overscan,
            threshold = options.load_more_threshold,
            "ScrollController::new"
        );
        Self {
            options,
            layout,
            window,
            load,
            is_scrolling: false,
            scroll_direction: None,
            last_scroll_event_ms: None,
        }
    }

    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    pub fn layout(&self) -> &Arc<Layout> {
        &self.layout
    }

    /// Swaps in a rebuilt layout after a structural change.
    ///
    /// Any range computed against the previous layout is stale; the next call to
    /// [`Self::visible_range`] or `on_scroll*` resolves against the new one.
    pub fn set_layout(&mut self, layout: Arc<Layout>) {
        if Arc::ptr_eq(&self.layout, &layout) {
            return;
        }
        vdebug!(
            prev_count = self.layout.len(),
            count = layout.len(),
            total_extent = layout.total_extent(),
            "ScrollController::set_layout"
        );
        self.layout = layout;
    }

    pub fn window_state(&self) -> WindowState {
        self.window
    }

    pub fn load_state(&self) -> LoadMoreState {
        self.load
    }

    pub fn state(&self) -> ControllerState {
        ControllerState {
            window: self.window,
            load: self.load,
            is_scrolling: self.is_scrolling,
        }
    }

    /// Restores a previously captured snapshot.
    ///
    /// An in-flight request cannot survive a restore, so `loading` always comes back `false`.
    pub fn restore_state(&mut self, state: ControllerState) {
        self.window = state.window;
        self.load = LoadMoreState {
            loading: false,
            ..state.load
        };
        self.set_is_scrolling(state.is_scrolling);
    }

    pub fn restore_window_state(&mut self, window: WindowState) {
        self.window = window;
    }

    pub fn scroll_offset(&self) -> u64 {
        self.window.scroll_offset
    }

    pub fn viewport_extent(&self) -> u32 {
        self.window.viewport_extent
    }

    pub fn overscan(&self) -> usize {
        self.window.overscan
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        self.window.overscan = overscan;
    }

    pub fn set_viewport_extent(&mut self, viewport_extent: u32) {
        self.window.viewport_extent = viewport_extent;
    }

    pub fn set_load_more_threshold(&mut self, threshold: u64) {
        self.load.threshold = threshold;
    }

    pub fn has_more(&self) -> bool {
        self.load.has_more
    }

    pub fn set_has_more(&mut self, has_more: bool) {
        self.load.has_more = has_more;
    }

    pub fn is_loading(&self) -> bool {
        self.load.loading
    }

    /// Reports that the load-more collaborator finished (successfully or not).
    ///
    /// Until this is called, no further load-more request is signalled.
    pub fn complete_load(&mut self, has_more: bool) {
        vdebug!(
            was_loading = self.load.loading,
            has_more,
            "ScrollController::complete_load"
        );
        self.load.complete(has_more);
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll_direction
    }

    pub fn set_is_scrolling(&mut self, is_scrolling: bool) {
        if self.is_scrolling == is_scrolling {
            return;
        }
        self.is_scrolling = is_scrolling;
        if !is_scrolling {
            self.scroll_direction = None;
            self.last_scroll_event_ms = None;
        }
    }

    /// Resets `is_scrolling` once no scroll event arrived for the configured delay.
    pub fn update_scrolling(&mut self, now_ms: u64) {
        if !self.is_scrolling {
            return;
        }
        let Some(last) = self.last_scroll_event_ms else {
            return;
        };
        if now_ms.saturating_sub(last) >= self.options.is_scrolling_reset_delay_ms {
            self.set_is_scrolling(false);
        }
    }

    /// Handles one scroll notification from the host.
    ///
    /// Updates the window, resolves the visible range and evaluates the load-more heuristic.
    /// `should_load_more` is `true` at most once until [`Self::complete_load`] is called.
    pub fn on_scroll(
        &mut self,
        scroll_offset: i64,
        container_extent: u32,
        content_extent: u64,
    ) -> ScrollOutcome {
        vtrace!(
            scroll_offset,
            container_extent,
            content_extent,
            "ScrollController::on_scroll"
        );
        self.set_scroll_offset(clamp_offset(scroll_offset));
        self.window.viewport_extent = container_extent;

        let visible_range = self.visible_range();

        let mut load_more = false;
        if should_load_more(&self.load, scroll_offset, container_extent, content_extent) {
            load_more = self.load.begin();
            vdebug!(
                scroll_offset,
                content_extent,
                threshold = self.load.threshold,
                "load more requested"
            );
        }

        ScrollOutcome {
            visible_range,
            should_load_more: load_more,
        }
    }

    pub fn on_scroll_event(&mut self, event: ScrollEvent) -> ScrollOutcome {
        self.on_scroll(
            event.scroll_offset,
            event.container_extent,
            event.content_extent,
        )
    }

    /// Same as [`Self::on_scroll_event`], and marks the list as scrolling at `now_ms`.
    pub fn on_scroll_event_at(&mut self, event: ScrollEvent, now_ms: u64) -> ScrollOutcome {
        let outcome = self.on_scroll_event(event);
        self.last_scroll_event_ms = Some(now_ms);
        self.set_is_scrolling(true);
        outcome
    }

    /// The overscanned range for the current window and layout.
    pub fn visible_range(&self) -> VisibleRange {
        let core = self.core_range();
        expand(core, self.window.overscan, self.layout.len())
    }

    /// The range strictly inside the viewport (no overscan).
    pub fn core_range(&self) -> VisibleRange {
        core_range_at(
            &self.layout,
            self.window.scroll_offset,
            self.window.viewport_extent,
        )
    }

    /// Computes (without applying) the offset that brings `index` into view.
    pub fn scroll_to_item_offset(&self, index: usize, align: Align) -> u64 {
        scroll_to_item(
            &self.layout,
            index,
            align,
            self.window.viewport_extent,
            self.window.scroll_offset,
        )
    }

    /// Programmatically scrolls to an item (no animation, does not mark the list as scrolling).
    ///
    /// Returns the applied offset. Out-of-range indexes leave the offset unchanged.
    pub fn scroll_to_item(&mut self, index: usize, align: Align) -> u64 {
        let offset = self.scroll_to_item_offset(index, align);
        self.set_scroll_offset(offset);
        offset
    }

    /// Sets the scroll offset, clamped to the current layout.
    pub fn set_scroll_offset_clamped(&mut self, offset: u64) {
        let clamped = self
            .layout
            .clamp_scroll_offset(offset, self.window.viewport_extent);
        self.set_scroll_offset(clamped);
    }

    fn set_scroll_offset(&mut self, offset: u64) {
        let prev = self.window.scroll_offset;
        self.window.scroll_offset = offset;
        self.scroll_direction = match offset.cmp(&prev) {
            cmp::Ordering::Greater => Some(ScrollDirection::Forward),
            cmp::Ordering::Less => Some(ScrollDirection::Backward),
            cmp::Ordering::Equal => self.scroll_direction,
        };
    }
}
