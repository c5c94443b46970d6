//! A headless windowed-list ("virtual list") engine.
//!
//! This crate focuses on the algorithms needed to show collections of thousands of items while
//! materializing only the visible window plus a small overscan margin:
//! - an immutable prefix-sum [`Layout`] built once per data change,
//! - `O(log n + k)` visible range resolution per scroll event,
//! - row grouping for grid-style lists ([`rows`]),
//! - a distance-to-end heuristic for incremental loading, guarded against duplicate requests,
//! - scroll-to-item offsets.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the item sequence and a height function
//! - scroll notifications (offset, container extent, content extent)
//! - a way to mount/unmount items at their computed offsets
//!
//! For the host-binding side (mount/unmount diffing, scroll coalescing, anchoring), see the
//! `windowed-list-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod extent;
mod layout;
mod load_more;
mod options;
mod range;
pub mod rows;
mod scroll_to;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use controller::ScrollController;
pub use extent::IntoExtent;
pub use layout::{Layout, build_layout};
pub use load_more::{DEFAULT_LOAD_MORE_THRESHOLD, LoadMoreState, distance_to_end, should_load_more};
pub use options::{ControllerOptions, InitialOffset};
pub use range::{MAX_FORWARD_SCAN, expand, resolve_core_range, resolve_visible_range};
pub use rows::group_into_rows;
pub use scroll_to::scroll_to_item;
pub use state::{ControllerState, WindowState};
pub use types::{Align, LayoutEntry, ScrollDirection, ScrollEvent, ScrollOutcome, VisibleRange};
