use core::fmt;

use windowed_list::ScrollController;

/// A scroll anchor that preserves the visual position across structural changes.
///
/// Typical use cases:
/// - timeline "load older" (items prepended above) without the content jumping
/// - any reorder/replace where the viewport should stay on the same item identity
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollAnchor<K> {
    pub key: K,
    /// The distance from the anchor item's start to the viewport's scroll offset.
    pub offset_in_item: u64,
}

impl<K: fmt::Debug> fmt::Debug for ScrollAnchor<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollAnchor")
            .field("key", &self.key)
            .field("offset_in_item", &self.offset_in_item)
            .finish()
    }
}

/// Captures an anchor for the first item in the viewport (by key).
///
/// Returns `None` if the visible range is empty.
pub fn capture_first_visible_anchor<T, K>(
    controller: &ScrollController,
    items: &[T],
    key_of: impl Fn(&T) -> K,
) -> Option<ScrollAnchor<K>> {
    let visible = controller.core_range();
    if visible.is_empty() {
        return None;
    }
    let index = visible.start;
    let entry = controller.layout().entry(index)?;
    let item = items.get(index)?;
    Some(ScrollAnchor {
        key: key_of(item),
        offset_in_item: controller.scroll_offset().saturating_sub(entry.offset),
    })
}

/// Applies a previously captured anchor by adjusting the scroll offset.
///
/// `key_to_index` must map keys of the *current* item sequence, and the controller must already
/// hold the layout built from it.
///
/// Returns `true` when the anchor was applied.
pub fn apply_anchor<K>(
    controller: &mut ScrollController,
    anchor: &ScrollAnchor<K>,
    mut key_to_index: impl FnMut(&K) -> Option<usize>,
) -> bool {
    let Some(index) = key_to_index(&anchor.key) else {
        return false;
    };
    let Some(entry) = controller.layout().entry(index) else {
        return false;
    };
    let target = entry.offset.saturating_add(anchor.offset_in_item);
    controller.set_scroll_offset_clamped(target);
    true
}
