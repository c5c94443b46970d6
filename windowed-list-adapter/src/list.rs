use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;

use windowed_list::{
    Align, ControllerOptions, IntoExtent, Layout, ScrollController, ScrollEvent, ScrollOutcome,
    VisibleRange,
};

use crate::key::KeyIndexMap;
use crate::{
    Host, HostBinding, ListKey, ScrollAnchor, ScrollCoalescer, SyncStats, apply_anchor,
    capture_first_visible_anchor,
};

/// Item extent function: `(index, item) -> height`.
pub type HeightFn<T> = Arc<dyn Fn(usize, &T) -> u32 + Send + Sync>;

/// Fire-and-forget request for more items.
///
/// Invoked at most once per threshold crossing. The caller later hands the new items to
/// [`WindowedList::append_items`] (or reports failure with [`WindowedList::fail_load`]).
pub type LoadMoreCallback = Arc<dyn Fn() + Send + Sync>;

/// Render callback: `(item, index) -> renderable`. Must not change item heights.
pub type RenderFn<T, R> = Box<dyn FnMut(&T, usize) -> R>;

/// Configuration for [`WindowedList`].
pub struct ListOptions<T> {
    pub height: HeightFn<T>,
    pub controller: ControllerOptions,
    pub on_load_more: Option<LoadMoreCallback>,
}

impl<T> Clone for ListOptions<T> {
    fn clone(&self) -> Self {
        Self {
            height: Arc::clone(&self.height),
            controller: self.controller.clone(),
            on_load_more: self.on_load_more.clone(),
        }
    }
}

impl<T> core::fmt::Debug for ListOptions<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListOptions")
            .field("controller", &self.controller)
            .field("on_load_more", &self.on_load_more.is_some())
            .finish_non_exhaustive()
    }
}

impl<T> ListOptions<T> {
    /// Creates options with a per-item height function.
    ///
    /// Negative (or NaN) heights are treated as `0`.
    pub fn new<H: IntoExtent>(height: impl Fn(usize, &T) -> H + Send + Sync + 'static) -> Self {
        Self {
            height: Arc::new(move |i, item| height(i, item).into_extent().unwrap_or(0)),
            controller: ControllerOptions::default(),
            on_load_more: None,
        }
    }

    /// Creates options for a list where every item has the same height.
    pub fn uniform(height: u32) -> Self {
        Self {
            height: Arc::new(move |_, _| height),
            controller: ControllerOptions::default(),
            on_load_more: None,
        }
    }

    pub fn with_controller(mut self, controller: ControllerOptions) -> Self {
        self.controller = controller;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.controller.overscan = overscan;
        self
    }

    pub fn with_load_more_threshold(mut self, threshold: u64) -> Self {
        self.controller.load_more_threshold = threshold;
        self
    }

    pub fn with_has_more(mut self, has_more: bool) -> Self {
        self.controller.has_more = has_more;
        self
    }

    pub fn with_on_load_more(mut self, on_load_more: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_load_more = Some(Arc::new(on_load_more));
        self
    }
}

/// One windowed list instance bound to a host.
///
/// Owns the item sequence, the layout built from it, the scroll controller and the host
/// binding, and dispatches every scroll notification to all of them:
/// - the controller resolves the visible range and the load-more decision,
/// - the binding mounts/unmounts the difference on the host,
/// - the load-more callback is fired when requested.
///
/// Nothing here is global: construct one per list and drop it with the list.
pub struct WindowedList<T, H: Host> {
    items: Vec<T>,
    height: HeightFn<T>,
    on_load_more: Option<LoadMoreCallback>,
    controller: ScrollController,
    binding: HostBinding,
    coalescer: ScrollCoalescer,
    host: H,
    render: RenderFn<T, H::Renderable>,
}

impl<T, H: Host> WindowedList<T, H> {
    pub fn new(
        items: Vec<T>,
        options: ListOptions<T>,
        host: H,
        render: impl FnMut(&T, usize) -> H::Renderable + 'static,
    ) -> Self {
        let layout = Arc::new(Layout::build(&items, |i, item| (options.height)(i, item)));
        vdebug!(
            count = items.len(),
            total_extent = layout.total_extent(),
            "WindowedList::new"
        );
        let mut list = Self {
            controller: ScrollController::with_layout(layout, options.controller),
            height: options.height,
            on_load_more: options.on_load_more,
            items,
            binding: HostBinding::new(),
            coalescer: ScrollCoalescer::new(),
            host,
            render: Box::new(render),
        };
        let total = list.content_extent();
        list.host.set_content_extent(total);
        list.sync();
        list
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn layout(&self) -> &Arc<Layout> {
        self.controller.layout()
    }

    pub fn content_extent(&self) -> u64 {
        self.controller.layout().total_extent()
    }

    pub fn controller(&self) -> &ScrollController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ScrollController {
        &mut self.controller
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn visible_range(&self) -> VisibleRange {
        self.controller.visible_range()
    }

    pub fn mounted_range(&self) -> VisibleRange {
        self.binding.mounted()
    }

    /// Replaces the item sequence (structural change).
    ///
    /// Rebuilds the layout, remounts the current window and ends any in-flight load request.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.rebuild();
        let has_more = self.controller.has_more();
        self.controller.complete_load(has_more);
        self.sync();
    }

    /// Appends a loaded page and reports the load as complete.
    pub fn append_items(&mut self, items: impl IntoIterator<Item = T>, has_more: bool) {
        self.items.extend(items);
        self.rebuild();
        self.controller.complete_load(has_more);
        self.sync();
    }

    /// Reports a failed load; `has_more` is left as is so the next crossing retries.
    pub fn fail_load(&mut self) {
        vdebug!("WindowedList::fail_load");
        let has_more = self.controller.has_more();
        self.controller.complete_load(has_more);
    }

    /// Swaps the height function (structural change).
    pub fn set_height<E: IntoExtent>(
        &mut self,
        height: impl Fn(usize, &T) -> E + Send + Sync + 'static,
    ) {
        self.height = Arc::new(move |i, item| height(i, item).into_extent().unwrap_or(0));
        self.rebuild();
        self.sync();
    }

    /// Replaces the items while keeping the first visible item (by key) at the same place in the
    /// viewport, e.g. after prepending older entries.
    ///
    /// Returns `true` if the anchor item still exists in the new sequence.
    pub fn set_items_anchored<K: ListKey>(
        &mut self,
        items: Vec<T>,
        key_of: impl Fn(&T) -> K,
    ) -> bool {
        let anchor = self.capture_anchor(&key_of);
        self.items = items;
        self.rebuild();
        let has_more = self.controller.has_more();
        self.controller.complete_load(has_more);

        let applied = match anchor {
            Some(anchor) => {
                let mut map = KeyIndexMap::<K>::new();
                for (i, item) in self.items.iter().enumerate() {
                    map.insert(key_of(item), i);
                }
                apply_anchor(&mut self.controller, &anchor, |k| map.get(k).copied())
            }
            None => false,
        };
        self.sync();
        applied
    }

    pub fn capture_anchor<K>(&self, key_of: impl Fn(&T) -> K) -> Option<ScrollAnchor<K>> {
        capture_first_visible_anchor(&self.controller, &self.items, key_of)
    }

    /// Handles a scroll notification immediately.
    ///
    /// When `should_load_more` is set, the list stays in the loading state until
    /// [`Self::append_items`], [`Self::set_items`] or [`Self::fail_load`] is called. Without an
    /// `on_load_more` callback the returned outcome is the only signal.
    pub fn on_scroll(&mut self, event: ScrollEvent) -> ScrollOutcome {
        let outcome = self.controller.on_scroll_event(event);
        self.dispatch(outcome)
    }

    /// Same as [`Self::on_scroll`], and marks the list as scrolling at `now_ms`.
    pub fn on_scroll_at(&mut self, event: ScrollEvent, now_ms: u64) -> ScrollOutcome {
        let outcome = self.controller.on_scroll_event_at(event, now_ms);
        self.dispatch(outcome)
    }

    /// Convenience for hosts that only report the offset and the container size; the content
    /// extent is taken from the layout.
    pub fn on_scroll_offset(&mut self, scroll_offset: i64, container_extent: u32) -> ScrollOutcome {
        let content_extent = self.content_extent();
        self.on_scroll(ScrollEvent::new(
            scroll_offset,
            container_extent,
            content_extent,
        ))
    }

    /// Queues a notification; only the latest queued one is handled by [`Self::flush`].
    pub fn queue_scroll(&mut self, event: ScrollEvent) {
        self.coalescer.push(event);
    }

    /// Handles the latest queued notification, if any.
    pub fn flush(&mut self) -> Option<ScrollOutcome> {
        let event = self.coalescer.take()?;
        Some(self.on_scroll(event))
    }

    pub fn dropped_scroll_events(&self) -> u64 {
        self.coalescer.dropped()
    }

    /// Advances time-based state (`is_scrolling` debouncing).
    pub fn tick(&mut self, now_ms: u64) {
        self.controller.update_scrolling(now_ms);
    }

    /// Scrolls to an item (no animation) and syncs the host.
    ///
    /// Returns the applied offset; the host should move its scroll position there.
    pub fn scroll_to_item(&mut self, index: usize, align: Align) -> u64 {
        let offset = self.controller.scroll_to_item(index, align);
        self.sync();
        offset
    }

    /// Re-applies the current window to the host.
    pub fn sync(&mut self) -> SyncStats {
        let range = self.controller.visible_range();
        self.binding.sync(
            &mut self.host,
            &self.items,
            self.controller.layout(),
            range,
            &mut *self.render,
        )
    }

    /// Unmounts everything from the host and returns it.
    pub fn into_host(mut self) -> H {
        self.binding.clear(&mut self.host);
        self.host
    }

    fn dispatch(&mut self, outcome: ScrollOutcome) -> ScrollOutcome {
        self.binding.sync(
            &mut self.host,
            &self.items,
            self.controller.layout(),
            outcome.visible_range,
            &mut *self.render,
        );
        if outcome.should_load_more {
            match &self.on_load_more {
                Some(load_more) => load_more(),
                None => {
                    vwarn!(
                        count = self.items.len(),
                        "load more requested without an on_load_more callback; \
                         waiting for append_items/set_items/fail_load"
                    );
                }
            }
        }
        outcome
    }

    fn rebuild(&mut self) {
        let height = &self.height;
        let layout = Layout::build(&self.items, |i, item| height(i, item));
        let total = layout.total_extent();
        self.controller.set_layout(Arc::new(layout));
        self.binding.invalidate();
        self.host.set_content_extent(total);
    }
}
