// Example: driving the scroll controller and answering load-more requests.
use std::sync::Arc;

use windowed_list::{ControllerOptions, Layout, ScrollController};

fn main() {
    let mut items: Vec<u32> = (0..50).collect();
    let mut c = ScrollController::with_layout(
        Arc::new(Layout::uniform(items.len(), 20)),
        ControllerOptions::new()
            .with_overscan(2)
            .with_load_more_threshold(100),
    );

    let mut offset = 0i64;
    let mut pages = 0;
    while pages < 3 {
        let content = c.layout().total_extent();
        let out = c.on_scroll(offset, 200, content);
        if out.should_load_more {
            pages += 1;
            let next = items.len() as u32;
            items.extend(next..next + 50);
            c.set_layout(Arc::new(Layout::uniform(items.len(), 20)));
            c.complete_load(pages < 3);
            println!("offset={offset} loaded page {pages}, items={}", items.len());
        }
        offset += 40;
    }
    println!("final range={:?}", c.visible_range());
}
