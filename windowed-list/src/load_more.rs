/// Default distance-to-end (in layout units) below which more items are requested.
pub const DEFAULT_LOAD_MORE_THRESHOLD: u64 = 200;

/// Incremental-loading bookkeeping for one list.
///
/// `loading` is the only guard against duplicate requests: it flips to `true` when a request is
/// issued and stays there until the caller reports the outcome with [`Self::complete`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadMoreState {
    pub has_more: bool,
    pub loading: bool,
    pub threshold: u64,
}

impl Default for LoadMoreState {
    fn default() -> Self {
        Self {
            has_more: true,
            loading: false,
            threshold: DEFAULT_LOAD_MORE_THRESHOLD,
        }
    }
}

impl LoadMoreState {
    pub fn new(has_more: bool, threshold: u64) -> Self {
        Self {
            has_more,
            loading: false,
            threshold,
        }
    }

    /// Marks a request as in flight. Returns `false` (and changes nothing) if one already is.
    pub fn begin(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    /// Reports the outcome of the in-flight request, successful or not.
    pub fn complete(&mut self, has_more: bool) {
        self.loading = false;
        self.has_more = has_more;
    }
}

/// Signed distance between the viewport's trailing edge and the end of the content.
///
/// Negative when the host reports overscroll past the end.
pub fn distance_to_end(scroll_offset: i64, container_extent: u32, content_extent: u64) -> i128 {
    content_extent as i128 - (scroll_offset as i128 + container_extent as i128)
}

/// Decides whether a scroll position should trigger a load-more request.
///
/// Pure: the caller applies the transition (see [`LoadMoreState::begin`]).
pub fn should_load_more(
    state: &LoadMoreState,
    scroll_offset: i64,
    container_extent: u32,
    content_extent: u64,
) -> bool {
    if !state.has_more || state.loading {
        return false;
    }
    distance_to_end(scroll_offset, container_extent, content_extent) < state.threshold as i128
}
