// Example: a simulated host receiving mount/unmount calls.
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use windowed_list::{LayoutEntry, ScrollEvent};
use windowed_list_adapter::{Host, ListOptions, WindowedList};

#[derive(Default)]
struct PrintHost {
    live: usize,
}

impl Host for PrintHost {
    type Renderable = String;

    fn mount(&mut self, index: usize, entry: LayoutEntry, renderable: String) {
        self.live += 1;
        println!("  mount   #{index:<4} @{:<6} {renderable}", entry.offset);
    }

    fn unmount(&mut self, index: usize) {
        self.live -= 1;
        println!("  unmount #{index}");
    }

    fn set_content_extent(&mut self, content_extent: u64) {
        println!("content_extent={content_extent}");
    }
}

fn main() {
    let wants_more = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&wants_more);

    let mut list = WindowedList::new(
        (0..100u32).collect(),
        ListOptions::new(|i, _: &u32| if i % 10 == 0 { 3u32 } else { 1 })
            .with_overscan(1)
            .with_load_more_threshold(5)
            .with_on_load_more(move || flag.store(true, Ordering::SeqCst)),
        PrintHost::default(),
        |item: &u32, _| format!("entry {item}"),
    );

    // A burst of wheel events coalesced into one frame.
    for offset in [2, 4, 6, 8, 10] {
        list.queue_scroll(ScrollEvent::new(offset, 8, list.content_extent()));
    }
    println!("frame 1 (dropped {} events)", list.dropped_scroll_events());
    list.flush();
    println!("frame 2");
    list.on_scroll_offset(115, 8);

    if wants_more.swap(false, Ordering::SeqCst) {
        println!("loading next page");
        list.append_items(100..150u32, false);
    }
    println!("live={} range={:?}", list.host().live, list.mounted_range());
}
