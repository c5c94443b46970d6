use alloc::vec::Vec;

use crate::LayoutEntry;
use crate::extent::{IntoExtent, clamp_extent};

/// An immutable prefix-sum index over item extents.
///
/// Building is `O(n)` and should happen once per structural change (new item sequence or
/// new height function), never per scroll tick. A `Layout` is `Send + Sync` and is usually
/// shared behind an `Arc` between the controller, the host binding and ad-hoc queries.
///
/// Invariants:
/// - `entries[i].index == i`
/// - `entries[0].offset == 0`
/// - `entries[i + 1].offset == entries[i].offset + entries[i].height`
/// - `total_extent == entries[n - 1].end()` (or `0` when empty)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    entries: Vec<LayoutEntry>,
    total_extent: u64,
}

impl Layout {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a layout from items and a height function.
    ///
    /// `height(index, item)` may return any primitive number. Negative (or NaN) heights are
    /// treated as `0`; the layout never rejects input.
    pub fn build<T, H: IntoExtent>(items: &[T], height: impl Fn(usize, &T) -> H) -> Self {
        Self::from_heights(items.iter().enumerate().map(|(i, item)| height(i, item)))
    }

    /// Builds a layout from a sequence of heights, one per item.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables, unused_assignments))]
    pub fn from_heights<H: IntoExtent>(heights: impl IntoIterator<Item = H>) -> Self {
        let heights = heights.into_iter();
        let mut entries = Vec::with_capacity(heights.size_hint().0);
        let mut offset = 0u64;
        let mut clamped = 0usize;
        for (index, h) in heights.enumerate() {
            let (height, was_clamped) = clamp_extent(h);
            if was_clamped {
                clamped += 1;
            }
            entries.push(LayoutEntry {
                index,
                offset,
                height,
            });
            offset = offset.saturating_add(height as u64);
        }
        vdebug!(
            count = entries.len(),
            total_extent = offset,
            clamped,
            "Layout::from_heights"
        );
        Self {
            entries,
            total_extent: offset,
        }
    }

    /// Builds a layout of `count` items sharing the same height.
    pub fn uniform(count: usize, height: u32) -> Self {
        let h = height as u64;
        let entries: Vec<LayoutEntry> = (0..count)
            .map(|index| LayoutEntry {
                index,
                offset: (index as u64).saturating_mul(h),
                height,
            })
            .collect();
        let total_extent = (count as u64).saturating_mul(h);
        vdebug!(count, total_extent, "Layout::uniform");
        Self {
            entries,
            total_extent,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[LayoutEntry] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> Option<LayoutEntry> {
        self.entries.get(index).copied()
    }

    pub fn total_extent(&self) -> u64 {
        self.total_extent
    }

    /// Returns the index of the item at `offset`.
    ///
    /// Boundaries belong to the item that starts there; offsets past the end clamp to the last
    /// item. Returns `None` only for an empty layout.
    pub fn index_at_offset(&self, offset: u64) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }
        Some(self.lower_bound(offset))
    }

    /// Largest scroll offset that still fills a viewport of `viewport_extent`.
    pub fn max_scroll_offset(&self, viewport_extent: u32) -> u64 {
        self.total_extent.saturating_sub(viewport_extent as u64)
    }

    pub fn clamp_scroll_offset(&self, offset: u64, viewport_extent: u32) -> u64 {
        offset.min(self.max_scroll_offset(viewport_extent))
    }

    /// Lower-bound lookup. Callers guarantee a non-empty layout.
    pub(crate) fn lower_bound(&self, offset: u64) -> usize {
        let n = self.entries.len();
        debug_assert!(n > 0, "lower_bound on an empty layout");
        // First entry whose start is not before `offset`.
        let p = self.entries.partition_point(|e| e.offset < offset);
        let index = match self.entries.get(p) {
            Some(e) if e.offset == offset => p,
            _ => p.saturating_sub(1),
        };
        index.min(n.saturating_sub(1))
    }
}

/// Builds a [`Layout`] from items and a height function.
///
/// Shorthand for [`Layout::build`].
pub fn build_layout<T, H: IntoExtent>(items: &[T], height: impl Fn(usize, &T) -> H) -> Layout {
    Layout::build(items, height)
}
