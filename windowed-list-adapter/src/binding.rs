use core::cmp;

use windowed_list::{Layout, VisibleRange};

use crate::Host;

/// What a [`HostBinding::sync`] call changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyncStats {
    pub mounted: usize,
    pub unmounted: usize,
}

impl SyncStats {
    pub fn is_noop(&self) -> bool {
        self.mounted == 0 && self.unmounted == 0
    }
}

/// Keeps a host's mounted items in step with the resolved range.
///
/// Only the difference between the previously mounted range and the new one is applied: items
/// leaving the range are unmounted, items entering it are rendered and mounted. After a
/// structural change call [`Self::invalidate`], since indexes and offsets of the old layout no
/// longer mean anything; the next sync then remounts the whole range.
#[derive(Clone, Debug, Default)]
pub struct HostBinding {
    mounted: VisibleRange,
    stale: bool,
}

impl HostBinding {
    pub fn new() -> Self {
        Self::default()
    }

    /// The range currently mounted on the host.
    pub fn mounted(&self) -> VisibleRange {
        self.mounted
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    pub fn sync<T, H: Host>(
        &mut self,
        host: &mut H,
        items: &[T],
        layout: &Layout,
        range: VisibleRange,
        render: &mut dyn FnMut(&T, usize) -> H::Renderable,
    ) -> SyncStats {
        if items.len() != layout.len() {
            vwarn!(
                items = items.len(),
                entries = layout.len(),
                "HostBinding::sync: layout is out of date with items"
            );
            debug_assert_eq!(
                items.len(),
                layout.len(),
                "HostBinding::sync: layout is out of date with items"
            );
        }
        let count = cmp::min(items.len(), layout.len());
        let next = VisibleRange::new(cmp::min(range.start, count), cmp::min(range.end, count));

        let mut stats = SyncStats::default();
        if self.stale {
            stats.unmounted += self.unmount_range(host, self.mounted);
            self.mounted = VisibleRange::EMPTY;
            self.stale = false;
        }

        let prev = self.mounted;
        for index in prev.iter().filter(|&i| !next.contains(i)) {
            host.unmount(index);
            stats.unmounted += 1;
        }
        for index in next.iter().filter(|&i| !prev.contains(i)) {
            // `next` is clamped to both lengths above.
            let (Some(item), Some(entry)) = (items.get(index), layout.entry(index)) else {
                continue;
            };
            host.mount(index, entry, render(item, index));
            stats.mounted += 1;
        }
        self.mounted = next;

        vtrace!(
            start = next.start,
            end = next.end,
            mounted = stats.mounted,
            unmounted = stats.unmounted,
            "HostBinding::sync"
        );
        stats
    }

    /// Unmounts everything; used when the list is torn down.
    pub fn clear<H: Host>(&mut self, host: &mut H) -> usize {
        let n = self.unmount_range(host, self.mounted);
        self.mounted = VisibleRange::EMPTY;
        self.stale = false;
        n
    }

    fn unmount_range<H: Host>(&self, host: &mut H, range: VisibleRange) -> usize {
        for index in range.iter() {
            host.unmount(index);
        }
        range.len()
    }
}
