// Example: variable item heights driven by the item contents.
use windowed_list::{Layout, resolve_core_range, resolve_visible_range};

struct Message {
    lines: u16,
}

fn main() {
    let messages: Vec<Message> = (0..10_000)
        .map(|i| Message {
            lines: 1 + (i % 5) as u16,
        })
        .collect();

    // Built once per data change, not per scroll.
    let layout = Layout::build(&messages, |_, m| m.lines);
    println!("total_extent={}", layout.total_extent());

    for offset in [0i64, 57, 14_999, 29_990] {
        let core = resolve_core_range(&layout, offset, 24);
        let window = resolve_visible_range(&layout, offset, 24, 3);
        println!("offset={offset:>6} core={core:?} overscanned={window:?}");
    }
}
