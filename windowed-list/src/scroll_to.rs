use crate::{Align, Layout};

/// Computes the scroll offset that brings item `index` into view.
///
/// - `Start`: the item's leading edge at the viewport's leading edge.
/// - `Center`: the item centered in the viewport.
/// - `End`: the item's trailing edge at the viewport's trailing edge.
/// - `Auto`: `current_offset` if the item is already fully visible, otherwise the nearest of
///   `Start`/`End`.
///
/// The result is clamped to `[0, total_extent - viewport_extent]` (or `0` when the content fits
/// in the viewport). An out-of-range `index` returns `current_offset` unchanged.
pub fn scroll_to_item(
    layout: &Layout,
    index: usize,
    align: Align,
    viewport_extent: u32,
    current_offset: u64,
) -> u64 {
    let Some(entry) = layout.entry(index) else {
        vtrace!(index, count = layout.len(), "scroll_to_item: index out of range");
        return current_offset;
    };

    let offset = entry.offset as i128;
    let height = entry.height as i128;
    let view = viewport_extent as i128;

    let target = match align {
        Align::Start => offset,
        Align::Center => offset - (view - height) / 2,
        Align::End => offset - view + height,
        Align::Auto => {
            let cur = current_offset as i128;
            if offset >= cur && offset + height <= cur + view {
                cur
            } else if offset < cur {
                offset
            } else {
                offset - view + height
            }
        }
    };

    let max = layout.max_scroll_offset(viewport_extent) as i128;
    target.clamp(0, max) as u64
}
