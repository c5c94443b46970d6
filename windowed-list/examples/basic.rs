// Example: build a layout, resolve a window, jump to an item.
use windowed_list::{Align, Layout, resolve_visible_range, scroll_to_item};

fn main() {
    let layout = Layout::uniform(1_000_000, 1);
    let range = resolve_visible_range(&layout, 123_456, 10, 2);
    println!("total_extent={}", layout.total_extent());
    println!("visible_range={range:?}");
    println!("first_visible={:?}", layout.entry(range.start));

    let off = scroll_to_item(&layout, 999_999, Align::End, 10, 123_456);
    println!("after scroll_to_item: offset={off}");
}
