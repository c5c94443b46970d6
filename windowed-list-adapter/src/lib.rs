//! Host binding utilities for the `windowed-list` crate.
//!
//! The `windowed-list` crate is UI-agnostic and focuses on the core math and state. This crate
//! provides the small, framework-neutral pieces needed to put a list on screen:
//!
//! - [`Host`]: the mount/unmount contract a UI layer implements
//! - [`HostBinding`]: applies only the difference between consecutive visible ranges
//! - [`ScrollCoalescer`]: collapses scroll bursts to the latest notification
//! - [`ScrollAnchor`]: keeps the viewport on the same item across prepends/reorders
//! - [`WindowedList`]: one list instance wiring all of the above to a `ScrollController`
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anchor;
mod binding;
mod coalesce;
mod host;
mod key;
mod list;


pub use anchor::{ScrollAnchor, apply_anchor, capture_first_visible_anchor};
pub use binding::{HostBinding, SyncStats};
pub use coalesce::ScrollCoalescer;
pub use host::Host;
pub use key::ListKey;
pub use list::{HeightFn, ListOptions, LoadMoreCallback, RenderFn, WindowedList};
