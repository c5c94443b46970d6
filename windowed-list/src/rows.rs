//! Row grouping for grid-style lists.
//!
//! A grid is virtualized by grouping the flat item sequence into rows first and laying out the
//! rows: the resolver then works in rows, and [`item_range`] maps the resolved row range back to
//! the flat items to materialize.

use alloc::vec::Vec;
use core::cmp;

use crate::VisibleRange;

/// Partitions `items` into consecutive rows of `items_per_row`; the last row may be shorter.
///
/// `items_per_row == 0` is treated as `1`.
pub fn group_into_rows<T>(items: &[T], items_per_row: usize) -> Vec<&[T]> {
    items.chunks(per_row(items_per_row)).collect()
}

/// Number of rows needed for `len` items.
pub fn row_count(len: usize, items_per_row: usize) -> usize {
    len.div_ceil(per_row(items_per_row))
}

/// Row holding the item at flat index `index`.
pub fn row_of(index: usize, items_per_row: usize) -> usize {
    index / per_row(items_per_row)
}

/// Maps a row range to the flat range of items those rows contain, clamped to `len`.
pub fn item_range(rows: VisibleRange, items_per_row: usize, len: usize) -> VisibleRange {
    let per_row = per_row(items_per_row);
    let start = cmp::min(rows.start.saturating_mul(per_row), len);
    let end = cmp::min(rows.end.saturating_mul(per_row), len);
    VisibleRange::new(start, end)
}

fn per_row(items_per_row: usize) -> usize {
    if items_per_row == 0 {
        vwarn!("items_per_row is 0; grouping one item per row");
        return 1;
    }
    items_per_row
}
