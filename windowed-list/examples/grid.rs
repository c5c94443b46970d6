// Example: a photo grid virtualized by rows.
use windowed_list::{Layout, group_into_rows, resolve_visible_range, rows};

const PER_ROW: usize = 4;
const CARD_HEIGHT: u32 = 180;

fn main() {
    let photos: Vec<String> = (0..250).map(|i| format!("photo-{i:03}.jpg")).collect();
    let grouped = group_into_rows(&photos, PER_ROW);
    let layout = Layout::build(&grouped, |_, _| CARD_HEIGHT);
    println!("rows={} total_extent={}", layout.len(), layout.total_extent());

    let row_range = resolve_visible_range(&layout, 2_000, 720, 1);
    let items = rows::item_range(row_range, PER_ROW, photos.len());
    println!("rows={row_range:?} items={items:?}");
    for row in row_range.iter() {
        println!("row {row}: {:?}", grouped[row]);
    }
}
