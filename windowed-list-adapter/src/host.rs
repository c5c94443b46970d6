use windowed_list::LayoutEntry;

/// The UI side of a windowed list.
///
/// Implement this for whatever owns the concrete widgets/nodes: a TUI frame buffer, a retained
/// widget tree, a DOM container. The binding only ever asks the host to place a rendered item at
/// its layout position or to drop it again; it never inspects the renderable.
pub trait Host {
    type Renderable;

    /// Places `renderable` for item `index` at `entry.offset` inside the scroll content.
    fn mount(&mut self, index: usize, entry: LayoutEntry, renderable: Self::Renderable);

    /// Removes the renderable previously mounted for `index`.
    fn unmount(&mut self, index: usize);

    /// Called after a structural change with the new total content extent, so the host can size
    /// its scroll container.
    fn set_content_extent(&mut self, _content_extent: u64) {}
}

impl<H: Host + ?Sized> Host for &mut H {
    type Renderable = H::Renderable;

    fn mount(&mut self, index: usize, entry: LayoutEntry, renderable: Self::Renderable) {
        (**self).mount(index, entry, renderable);
    }

    fn unmount(&mut self, index: usize) {
        (**self).unmount(index);
    }

    fn set_content_extent(&mut self, content_extent: u64) {
        (**self).set_content_extent(content_extent);
    }
}
