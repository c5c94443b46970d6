use crate::LoadMoreState;

/// The transient window geometry of one list.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowState {
    pub scroll_offset: u64,
    pub viewport_extent: u32,
    pub overscan: usize,
}

/// A combined snapshot of window geometry and load-more bookkeeping.
///
/// Useful for restoring a list across frames or sessions without coupling the controller to any
/// specific UI framework.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControllerState {
    pub window: WindowState,
    pub load: LoadMoreState,
    pub is_scrolling: bool,
}
