use core::cmp;

use crate::{Layout, VisibleRange};

/// Upper bound on linear steps when searching for the end of the visible window.
///
/// Runs of zero-height items (or viewports much larger than the average item) would otherwise
/// make the forward scan unbounded; past this many steps the search switches to a binary search
/// over the remaining entries. Both paths return the same index.
pub const MAX_FORWARD_SCAN: usize = 64;

/// Resolves the half-open range of items to materialize.
///
/// - `scroll_offset` is the offset of the viewport's leading edge; negative values clamp to `0`.
/// - The start item is the one containing `scroll_offset` (an item starting exactly at
///   `scroll_offset` wins the tie). Offsets past the end clamp to the last item.
/// - The end is the first item starting at or after `scroll_offset + viewport_extent`. When the
///   window reaches the end of the content, every remaining item is included (zero-height items
///   sitting exactly at `total_extent`).
/// - Both bounds are then widened by `overscan` items and clamped to `[0, n]`.
///
/// An empty layout or a zero viewport resolves to an empty range.
///
/// Cost: `O(log n + k)`, where `k` is the number of items inside one viewport.
pub fn resolve_visible_range(
    layout: &Layout,
    scroll_offset: i64,
    viewport_extent: u32,
    overscan: usize,
) -> VisibleRange {
    let core = resolve_core_range(layout, scroll_offset, viewport_extent);
    expand(core, overscan, layout.len())
}

/// Same as [`resolve_visible_range`] with `overscan = 0`.
pub fn resolve_core_range(layout: &Layout, scroll_offset: i64, viewport_extent: u32) -> VisibleRange {
    core_range_at(layout, clamp_offset(scroll_offset), viewport_extent)
}

pub(crate) fn core_range_at(layout: &Layout, offset: u64, viewport_extent: u32) -> VisibleRange {
    let n = layout.len();
    if n == 0 || viewport_extent == 0 {
        return VisibleRange::EMPTY;
    }

    let start = layout.lower_bound(offset);
    let window_end = offset.saturating_add(viewport_extent as u64);
    let end = scan_end(layout, start, window_end);

    vtrace!(offset, viewport_extent, start, end, "core_range_at");
    VisibleRange { start, end }
}

/// Widens a range by `overscan` on both sides, clamped to `[0, count]`.
///
/// Empty ranges stay empty.
pub fn expand(range: VisibleRange, overscan: usize, count: usize) -> VisibleRange {
    if range.is_empty() {
        return range;
    }
    VisibleRange {
        start: range.start.saturating_sub(overscan),
        end: cmp::min(count, range.end.saturating_add(overscan)),
    }
}

pub(crate) fn clamp_offset(scroll_offset: i64) -> u64 {
    scroll_offset.max(0) as u64
}

/// Exclusive end index: the first entry at or after `start` with `offset >= window_end`, or `n`
/// once the window reaches the end of the content.
fn scan_end(layout: &Layout, start: usize, window_end: u64) -> usize {
    let entries = layout.entries();
    let n = entries.len();
    if window_end >= layout.total_extent() {
        return n;
    }

    // The start item is always materialized, even when it begins at `window_end`
    // (zero-height items sitting exactly on the edge).
    let mut end = cmp::min(start + 1, n);
    let scan_limit = cmp::min(n, end.saturating_add(MAX_FORWARD_SCAN));
    while end < scan_limit {
        if entries[end].offset >= window_end {
            return end;
        }
        end += 1;
    }
    if end == n {
        return n;
    }

    vtrace!(start, scanned = MAX_FORWARD_SCAN, "scan_end: falling back to binary search");
    end + entries[end..].partition_point(|e| e.offset < window_end)
}
