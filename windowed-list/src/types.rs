use core::ops;

/// Where a target item should land inside the viewport when scrolling to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
    /// Keep the current offset if the item is fully visible, otherwise scroll the minimum
    /// distance (start edge if the item is above, end edge if below).
    Auto,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// One positioned item in a [`crate::Layout`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutEntry {
    pub index: usize,
    /// Start offset in the scroll axis.
    pub offset: u64,
    /// Extent in the scroll axis.
    pub height: u32,
}

impl LayoutEntry {
    pub fn end(&self) -> u64 {
        self.offset.saturating_add(self.height as u64)
    }

    /// Returns `true` if `offset` lies inside `[self.offset, self.end())`.
    pub fn contains_offset(&self, offset: u64) -> bool {
        self.offset <= offset && offset < self.end()
    }
}

/// A half-open range of item indexes to materialize.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start: usize,
    pub end: usize, // exclusive
}

impl VisibleRange {
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    pub fn iter(&self) -> ops::Range<usize> {
        self.start..self.end
    }
}

impl From<VisibleRange> for ops::Range<usize> {
    fn from(r: VisibleRange) -> Self {
        r.start..r.end
    }
}

/// A raw scroll/resize notification delivered by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollEvent {
    /// Scroll position reported by the host. Negative values (overscroll bounce) clamp to 0.
    pub scroll_offset: i64,
    /// Size of the scroll container in the scroll axis.
    pub container_extent: u32,
    /// Size of the scrollable content in the scroll axis.
    pub content_extent: u64,
}

impl ScrollEvent {
    pub fn new(scroll_offset: i64, container_extent: u32, content_extent: u64) -> Self {
        Self {
            scroll_offset,
            container_extent,
            content_extent,
        }
    }
}

/// The result of feeding one scroll notification to a [`crate::ScrollController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollOutcome {
    pub visible_range: VisibleRange,
    /// `true` exactly once per threshold crossing; the caller must invoke its load-more
    /// collaborator and later report the outcome via `complete_load`.
    pub should_load_more: bool,
}
