// Example: keep the viewport stable while older entries are prepended.
use windowed_list::LayoutEntry;
use windowed_list_adapter::{Host, ListOptions, WindowedList};

struct NullHost;

impl Host for NullHost {
    type Renderable = ();
    fn mount(&mut self, _index: usize, _entry: LayoutEntry, _renderable: ()) {}
    fn unmount(&mut self, _index: usize) {}
}

fn main() {
    let mut list = WindowedList::new(
        (1000..1100u64).collect(),
        ListOptions::uniform(1),
        NullHost,
        |_, _| (),
    );
    list.on_scroll_offset(50, 10);
    println!("before: offset={} anchor={:?}", list.controller().scroll_offset(), list.capture_anchor(|k| *k));

    let mut older: Vec<u64> = (900..1000).collect();
    older.extend(list.items().iter().copied());
    let applied = list.set_items_anchored(older, |k| *k);
    println!(
        "after:  offset={} anchor={:?} applied={applied}",
        list.controller().scroll_offset(),
        list.capture_anchor(|k| *k)
    );
}
