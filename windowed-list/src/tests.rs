use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        self.gen_range_u64(start as u64, end_exclusive as u64) as u32
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

fn random_heights(rng: &mut Lcg, n: usize, min: u32, max_exclusive: u32) -> Vec<u32> {
    (0..n).map(|_| rng.gen_range_u32(min, max_exclusive)).collect()
}

fn expected_offsets(heights: &[u32]) -> Vec<u64> {
    let mut out = Vec::with_capacity(heights.len());
    let mut off = 0u64;
    for &h in heights {
        out.push(off);
        off += h as u64;
    }
    out
}

/// Straightforward linear reference for the core (no overscan) range.
fn expected_core_range(heights: &[u32], offset: u64, viewport: u32) -> VisibleRange {
    let n = heights.len();
    if n == 0 || viewport == 0 {
        return VisibleRange::EMPTY;
    }
    let offs = expected_offsets(heights);
    let start = match (0..n).find(|&i| offs[i] == offset) {
        Some(i) => i,
        None => (0..n).rev().find(|&i| offs[i] < offset).unwrap_or(0),
    };
    let window_end = offset + viewport as u64;
    let total = offs[n - 1] + heights[n - 1] as u64;
    if window_end >= total {
        return VisibleRange { start, end: n };
    }
    let mut end = start + 1;
    while end < n && offs[end] < window_end {
        end += 1;
    }
    VisibleRange { start, end }
}

#[test]
fn uniform_list_with_overscan() {
    let items: Vec<u32> = (0..1000).collect();
    let layout = build_layout(&items, |_, _| 50u32);
    assert_eq!(layout.total_extent(), 50_000);

    let core = resolve_core_range(&layout, 1000, 500);
    assert_eq!(core, VisibleRange { start: 20, end: 30 });

    let r = resolve_visible_range(&layout, 1000, 500, 2);
    assert_eq!(r, VisibleRange { start: 18, end: 32 });
}

#[test]
fn empty_list_resolves_to_empty_range() {
    let items: Vec<()> = Vec::new();
    let layout = build_layout(&items, |_, _| 10u32);
    assert_eq!(layout.total_extent(), 0);
    assert!(layout.is_empty());
    assert_eq!(
        resolve_visible_range(&layout, 0, 500, 3),
        VisibleRange { start: 0, end: 0 }
    );
    assert_eq!(resolve_visible_range(&layout, 10_000, 500, 3), VisibleRange::EMPTY);
    assert_eq!(layout.index_at_offset(0), None);
}

#[test]
fn variable_heights_offsets_and_lookup() {
    let heights = [100u32, 50, 200];
    let layout = build_layout(&heights, |_, &h| h);
    let offsets: Vec<u64> = layout.entries().iter().map(|e| e.offset).collect();
    assert_eq!(offsets, [0, 100, 150]);
    assert_eq!(layout.total_extent(), 350);

    let r = resolve_core_range(&layout, 120, 10);
    assert_eq!(r.start, 1);
    assert_eq!(r.end, 2);
}

#[test]
fn boundary_offset_belongs_to_the_item_starting_there() {
    let layout = Layout::from_heights([100u32, 50, 200]);
    assert_eq!(resolve_core_range(&layout, 100, 10).start, 1);
    assert_eq!(resolve_core_range(&layout, 150, 10).start, 2);
    assert_eq!(resolve_core_range(&layout, 99, 10).start, 0);

    // Window end is exclusive: [0, 100) does not touch item 1.
    assert_eq!(resolve_core_range(&layout, 0, 100), VisibleRange { start: 0, end: 1 });
    assert_eq!(resolve_core_range(&layout, 0, 101), VisibleRange { start: 0, end: 2 });
}

#[test]
fn grid_rows_become_layout_units() {
    let items: Vec<usize> = (0..10).collect();
    let grouped = group_into_rows(&items, 4);
    assert_eq!(grouped.len(), 3);
    assert_eq!(grouped[0], &[0, 1, 2, 3]);
    assert_eq!(grouped[1], &[4, 5, 6, 7]);
    assert_eq!(grouped[2], &[8, 9]);

    let layout = build_layout(&grouped, |_, _| 120u32);
    assert_eq!(layout.len(), 3);
    assert_eq!(layout.total_extent(), 360);

    let row_range = resolve_visible_range(&layout, 130, 100, 0);
    assert_eq!(row_range, VisibleRange { start: 1, end: 2 });
    assert_eq!(
        rows::item_range(row_range, 4, items.len()),
        VisibleRange { start: 4, end: 8 }
    );

    let all = resolve_visible_range(&layout, 0, 1000, 0);
    assert_eq!(
        rows::item_range(all, 4, items.len()),
        VisibleRange { start: 0, end: 10 }
    );
}

#[test]
fn row_helpers_handle_degenerate_input() {
    assert_eq!(rows::row_count(10, 4), 3);
    assert_eq!(rows::row_count(8, 4), 2);
    assert_eq!(rows::row_count(0, 4), 0);
    assert_eq!(rows::row_of(7, 4), 1);
    assert_eq!(rows::row_of(8, 4), 2);

    // Zero items per row degrades to one item per row instead of panicking.
    let items = [1, 2, 3];
    assert_eq!(group_into_rows(&items, 0).len(), 3);
    assert_eq!(rows::row_count(3, 0), 3);

    let empty: [u8; 0] = [];
    assert!(group_into_rows(&empty, 4).is_empty());
}

#[test]
fn malformed_heights_are_clamped_to_zero() {
    let layout = Layout::from_heights([10i32, -5, 20]);
    assert_eq!(layout.entry(1).map(|e| e.height), Some(0));
    assert_eq!(layout.entry(2).map(|e| e.offset), Some(10));
    assert_eq!(layout.total_extent(), 30);

    let layout = Layout::from_heights([1.5f64, f64::NAN, -3.0, 2.9]);
    let heights: Vec<u32> = layout.entries().iter().map(|e| e.height).collect();
    assert_eq!(heights, [1, 0, 0, 2]);

    let layout = Layout::from_heights([u64::MAX, 1]);
    assert_eq!(layout.entry(0).map(|e| e.height), Some(u32::MAX));
    assert_eq!(layout.total_extent(), u32::MAX as u64 + 1);
}

#[test]
fn layout_invariants_hold_for_random_heights() {
    let mut rng = Lcg::new(7);
    for _ in 0..50 {
        let n = rng.gen_range_usize(0, 200);
        let heights = random_heights(&mut rng, n, 0, 40);
        let layout = Layout::from_heights(heights.iter().copied());
        let expected = expected_offsets(&heights);

        assert_eq!(layout.len(), n);
        for (i, e) in layout.entries().iter().enumerate() {
            assert_eq!(e.index, i);
            assert_eq!(e.offset, expected[i]);
            assert_eq!(e.height, heights[i]);
        }
        let total = layout.entries().last().map(|e| e.end()).unwrap_or(0);
        assert_eq!(layout.total_extent(), total);
    }
}

#[test]
fn build_is_idempotent() {
    let items: Vec<u32> = (0..500).collect();
    let height = |i: usize, it: &u32| (i as u32 % 7) * 3 + it % 5;
    let a = build_layout(&items, height);
    let b = build_layout(&items, height);
    assert_eq!(a.entries(), b.entries());
    assert_eq!(a, b);
}

#[test]
fn uniform_matches_from_heights() {
    let a = Layout::uniform(37, 12);
    let b = Layout::from_heights(core::iter::repeat_n(12u32, 37));
    assert_eq!(a, b);
}

#[test]
fn degenerate_window_inputs() {
    let layout = Layout::uniform(10, 10);

    assert_eq!(resolve_visible_range(&layout, 20, 0, 5), VisibleRange::EMPTY);

    // Negative offsets clamp to 0.
    assert_eq!(
        resolve_core_range(&layout, -500, 25),
        VisibleRange { start: 0, end: 3 }
    );

    // Past the end: the last item is still materialized.
    assert_eq!(
        resolve_core_range(&layout, 10_000, 25),
        VisibleRange { start: 9, end: 10 }
    );
    assert_eq!(
        resolve_visible_range(&layout, 10_000, 25, 2),
        VisibleRange { start: 7, end: 10 }
    );
}

#[test]
fn coverage_start_item_contains_offset() {
    let mut rng = Lcg::new(42);
    for _ in 0..30 {
        let n = rng.gen_range_usize(1, 300);
        let heights = random_heights(&mut rng, n, 1, 60);
        let layout = Layout::from_heights(heights.iter().copied());
        let total = layout.total_extent();
        for _ in 0..50 {
            let offset = rng.gen_range_u64(0, total);
            let view = rng.gen_range_u32(1, 400);
            let r = resolve_visible_range(&layout, offset as i64, view, 0);
            let start = layout.entry(r.start).unwrap();
            assert!(
                start.contains_offset(offset),
                "offset={offset} start={start:?}"
            );
            assert!(r.end > r.start && r.end <= n);
        }
    }
}

#[test]
fn resolved_range_matches_linear_reference() {
    let mut rng = Lcg::new(1234);
    for _ in 0..40 {
        let n = rng.gen_range_usize(0, 250);
        // Plenty of zero-height items to exercise boundary ties and the scan fallback.
        let heights: Vec<u32> = (0..n)
            .map(|_| {
                if rng.gen_bool() {
                    0
                } else {
                    rng.gen_range_u32(1, 30)
                }
            })
            .collect();
        let layout = Layout::from_heights(heights.iter().copied());
        let total = layout.total_extent();
        for _ in 0..60 {
            let offset = rng.gen_range_u64(0, total + 50);
            let view = rng.gen_range_u32(0, 600);
            let got = resolve_core_range(&layout, offset as i64, view);
            let want = expected_core_range(&heights, offset, view);
            assert_eq!(got, want, "offset={offset} view={view} n={n}");
        }
    }
}

#[test]
fn zero_height_run_uses_bounded_scan() {
    // A long run of zero-height items right after the start item.
    let mut heights = alloc::vec![10u32];
    heights.extend(core::iter::repeat_n(0u32, MAX_FORWARD_SCAN * 4));
    heights.extend(core::iter::repeat_n(10u32, 20));
    let layout = Layout::from_heights(heights.iter().copied());

    let r = resolve_core_range(&layout, 0, 25);
    assert_eq!(r, expected_core_range(&heights, 0, 25));
    // Item 0, every zero-height item at offset 10, then two 10-tall items.
    assert_eq!(r.end, 1 + MAX_FORWARD_SCAN * 4 + 2);

    // Zero-height items sitting exactly on the leading edge are not skipped.
    let r = resolve_core_range(&layout, 10, 5);
    assert_eq!(r.start, 1);
}

#[test]
fn range_bounds_are_monotonic_in_offset() {
    let mut rng = Lcg::new(99);
    for _ in 0..20 {
        let n = rng.gen_range_usize(1, 200);
        let heights = random_heights(&mut rng, n, 0, 25);
        let layout = Layout::from_heights(heights.iter().copied());
        let view = rng.gen_range_u32(1, 120);
        let overscan = rng.gen_range_usize(0, 4);

        let mut prev = resolve_visible_range(&layout, 0, view, overscan);
        for offset in 1..=(layout.total_extent() as i64 + 10) {
            let r = resolve_visible_range(&layout, offset, view, overscan);
            assert!(r.start >= prev.start, "start decreased at {offset}");
            assert!(r.end >= prev.end, "end decreased at {offset}");
            prev = r;
        }
    }
}

#[test]
fn scroll_to_item_start_round_trips() {
    let mut rng = Lcg::new(5);
    for _ in 0..30 {
        let n = rng.gen_range_usize(1, 200);
        let heights = random_heights(&mut rng, n, 1, 80);
        let layout = Layout::from_heights(heights.iter().copied());
        for _ in 0..30 {
            let i = rng.gen_range_usize(0, n);
            let view = rng.gen_range_u32(1, 500);
            let target = scroll_to_item(&layout, i, Align::Start, view, 0);
            let r = resolve_visible_range(&layout, target as i64, view, 0);
            assert!(r.contains(i), "i={i} view={view} target={target} r={r:?}");
        }
    }
}

#[test]
fn scroll_to_item_round_trips_with_zero_heights() {
    // Trailing zero-height item: the clamped target puts it exactly on the window end.
    let layout = Layout::from_heights([100u32, 100, 0]);
    let target = scroll_to_item(&layout, 2, Align::Start, 100, 0);
    assert_eq!(target, 100);
    assert_eq!(
        resolve_visible_range(&layout, target as i64, 100, 0),
        VisibleRange { start: 1, end: 3 }
    );

    let mut rng = Lcg::new(17);
    for _ in 0..40 {
        let n = rng.gen_range_usize(1, 120);
        let mut heights: Vec<u32> = (0..n)
            .map(|_| {
                if rng.gen_range_u32(0, 3) == 0 {
                    0
                } else {
                    rng.gen_range_u32(1, 60)
                }
            })
            .collect();
        let trailing = rng.gen_range_usize(1, 4);
        heights.extend(core::iter::repeat_n(0u32, trailing));
        let n = heights.len();
        let layout = Layout::from_heights(heights.iter().copied());
        for i in 0..n {
            for align in [Align::Start, Align::Center] {
                let view = rng.gen_range_u32(1, 400);
                let target = scroll_to_item(&layout, i, align, view, 0);
                let r = resolve_visible_range(&layout, target as i64, view, 0);
                assert!(
                    r.contains(i),
                    "i={i} align={align:?} view={view} target={target} r={r:?}"
                );
            }
        }
    }
}

#[test]
fn leading_zero_height_items_win_the_start_tie() {
    // Coverage holds only for positive-height start items: a zero-height item starting at the
    // offset is chosen as the start, and the item that actually contains it follows.
    let layout = Layout::from_heights([0u32, 0, 50]);
    let r = resolve_core_range(&layout, 0, 10);
    assert_eq!(r, VisibleRange { start: 0, end: 3 });
    assert_eq!(layout.entry(r.start).map(|e| e.height), Some(0));
    assert!(r.iter().any(|i| layout
        .entry(i)
        .is_some_and(|e| e.contains_offset(0))));
}

#[test]
fn scroll_to_item_alignments_and_clamping() {
    let layout = Layout::uniform(100, 10); // total 1000
    let view = 100;

    assert_eq!(scroll_to_item(&layout, 50, Align::Start, view, 0), 500);
    // 500 - (100 - 10) / 2 = 455
    assert_eq!(scroll_to_item(&layout, 50, Align::Center, view, 0), 455);
    // 500 - 100 + 10 = 410
    assert_eq!(scroll_to_item(&layout, 50, Align::End, view, 0), 410);

    // Clamped at both ends.
    assert_eq!(scroll_to_item(&layout, 0, Align::End, view, 0), 0);
    assert_eq!(scroll_to_item(&layout, 0, Align::Center, view, 0), 0);
    assert_eq!(scroll_to_item(&layout, 99, Align::Start, view, 0), 900);

    // Content shorter than the viewport always resolves to 0.
    let short = Layout::uniform(3, 10);
    assert_eq!(scroll_to_item(&short, 2, Align::Start, view, 0), 0);

    // Invalid index: no-op.
    assert_eq!(scroll_to_item(&layout, 100, Align::Start, view, 321), 321);
    assert_eq!(scroll_to_item(&Layout::empty(), 0, Align::End, view, 7), 7);
}

#[test]
fn scroll_to_item_auto_scrolls_minimally() {
    let layout = Layout::uniform(100, 10);
    let view = 100;

    // Fully visible: stay put.
    assert_eq!(scroll_to_item(&layout, 25, Align::Auto, view, 200), 200);
    // Above the viewport: align start.
    assert_eq!(scroll_to_item(&layout, 10, Align::Auto, view, 200), 100);
    // Below the viewport: align end.
    assert_eq!(scroll_to_item(&layout, 40, Align::Auto, view, 200), 310);
}

#[test]
fn index_at_offset_and_clamps() {
    let layout = Layout::from_heights([100u32, 50, 200]);
    assert_eq!(layout.index_at_offset(0), Some(0));
    assert_eq!(layout.index_at_offset(149), Some(1));
    assert_eq!(layout.index_at_offset(150), Some(2));
    assert_eq!(layout.index_at_offset(10_000), Some(2));

    assert_eq!(layout.max_scroll_offset(100), 250);
    assert_eq!(layout.max_scroll_offset(1000), 0);
    assert_eq!(layout.clamp_scroll_offset(300, 100), 250);
}

#[test]
fn load_more_heuristic_is_pure() {
    let state = LoadMoreState::new(true, 200);
    assert_eq!(distance_to_end(700, 100, 1000), 200);
    assert!(!should_load_more(&state, 700, 100, 1000));
    assert!(should_load_more(&state, 701, 100, 1000));
    // Overscroll past the end still counts.
    assert_eq!(distance_to_end(1200, 100, 1000), -300);
    assert!(should_load_more(&state, 1200, 100, 1000));

    let exhausted = LoadMoreState::new(false, 200);
    assert!(!should_load_more(&exhausted, 900, 100, 1000));

    let mut busy = state;
    assert!(busy.begin());
    assert!(!busy.begin());
    assert!(!should_load_more(&busy, 900, 100, 1000));
    busy.complete(true);
    assert!(!busy.loading);
}

fn controller_over(count: usize, height: u32) -> ScrollController {
    ScrollController::with_layout(
        Arc::new(Layout::uniform(count, height)),
        ControllerOptions::new()
            .with_overscan(0)
            .with_load_more_threshold(200),
    )
}

#[test]
fn controller_requests_more_exactly_once_per_crossing() {
    let mut c = controller_over(100, 10); // content 1000

    let out = c.on_scroll(0, 100, 1000);
    assert_eq!(out.visible_range, VisibleRange { start: 0, end: 10 });
    assert!(!out.should_load_more);

    let mut requests = 0;
    for offset in [750i64, 760, 800, 850, 900, 899, 900] {
        if c.on_scroll(offset, 100, 1000).should_load_more {
            requests += 1;
        }
    }
    assert_eq!(requests, 1);
    assert!(c.is_loading());

    // The caller supplies more data and resets `loading`.
    c.set_layout(Arc::new(Layout::uniform(200, 10)));
    c.complete_load(true);
    assert!(!c.is_loading());

    assert!(!c.on_scroll(900, 100, 2000).should_load_more);
    assert!(c.on_scroll(1750, 100, 2000).should_load_more);
    assert!(!c.on_scroll(1800, 100, 2000).should_load_more);

    // Exhausted source: no further requests.
    c.complete_load(false);
    assert!(!c.has_more());
    assert!(!c.on_scroll(1900, 100, 2000).should_load_more);
}

#[test]
fn controller_stays_loading_until_completed() {
    let mut c = controller_over(10, 10);
    assert!(c.on_scroll(0, 100, 100).should_load_more);
    for _ in 0..100 {
        assert!(!c.on_scroll(0, 100, 100).should_load_more);
    }
    assert!(c.is_loading());
}

#[test]
fn controller_tracks_window_and_direction() {
    let mut c = controller_over(1000, 50);
    c.set_overscan(2);
    let out = c.on_scroll_event(ScrollEvent::new(1000, 500, 50_000));
    assert_eq!(out.visible_range, VisibleRange { start: 18, end: 32 });
    assert_eq!(c.core_range(), VisibleRange { start: 20, end: 30 });
    assert_eq!(
        c.window_state(),
        WindowState {
            scroll_offset: 1000,
            viewport_extent: 500,
            overscan: 2,
        }
    );
    assert_eq!(c.scroll_direction(), Some(ScrollDirection::Forward));

    c.on_scroll(-40, 500, 50_000);
    assert_eq!(c.scroll_offset(), 0);
    assert_eq!(c.scroll_direction(), Some(ScrollDirection::Backward));
}

#[test]
fn controller_structural_change_recomputes_range() {
    let mut c = controller_over(100, 10);
    c.on_scroll(500, 100, 1000);
    assert_eq!(c.visible_range(), VisibleRange { start: 50, end: 60 });

    // Items shrink below the current offset: the range follows the new layout.
    c.set_layout(Arc::new(Layout::uniform(20, 10)));
    assert_eq!(c.visible_range(), VisibleRange { start: 19, end: 20 });

    c.set_layout(Arc::new(Layout::empty()));
    assert_eq!(c.visible_range(), VisibleRange::EMPTY);
}

#[test]
fn controller_scroll_to_item_applies_clamped_offset() {
    let mut c = controller_over(100, 10);
    c.set_viewport_extent(100);

    assert_eq!(c.scroll_to_item(50, Align::Center), 455);
    assert_eq!(c.scroll_offset(), 455);
    assert!(!c.is_scrolling());

    assert_eq!(c.scroll_to_item(1000, Align::Start), 455);
    assert_eq!(c.scroll_offset(), 455);

    c.set_scroll_offset_clamped(5000);
    assert_eq!(c.scroll_offset(), 900);
}

#[test]
fn is_scrolling_resets_after_delay() {
    let mut c = ScrollController::with_layout(
        Arc::new(Layout::uniform(100, 10)),
        ControllerOptions::new().with_is_scrolling_reset_delay_ms(150),
    );
    c.on_scroll_event_at(ScrollEvent::new(100, 100, 1000), 0);
    assert!(c.is_scrolling());

    c.update_scrolling(100);
    assert!(c.is_scrolling());

    c.on_scroll_event_at(ScrollEvent::new(120, 100, 1000), 100);
    c.update_scrolling(200);
    assert!(c.is_scrolling());

    c.update_scrolling(250);
    assert!(!c.is_scrolling());
    assert_eq!(c.scroll_direction(), None);
}

#[test]
fn initial_options_are_applied() {
    let c = ScrollController::with_layout(
        Arc::new(Layout::uniform(100, 10)),
        ControllerOptions::new()
            .with_initial_offset_provider(|| 300)
            .with_initial_viewport(50)
            .with_has_more(false),
    );
    assert_eq!(c.scroll_offset(), 300);
    assert_eq!(c.viewport_extent(), 50);
    assert!(!c.has_more());
    assert_eq!(c.visible_range(), VisibleRange { start: 29, end: 36 });
}

#[test]
fn restore_state_clears_in_flight_load() {
    let mut c = controller_over(10, 10);
    assert!(c.on_scroll(0, 100, 100).should_load_more);
    let snapshot = c.state();
    assert!(snapshot.load.loading);

    let mut restored = controller_over(10, 10);
    restored.restore_state(snapshot);
    assert!(!restored.is_loading());
    assert_eq!(restored.window_state(), snapshot.window);
}

#[test]
fn visible_range_helpers() {
    let r = VisibleRange::new(3, 7);
    assert_eq!(r.len(), 4);
    assert!(r.contains(3) && r.contains(6) && !r.contains(7));
    assert_eq!(r.iter().collect::<Vec<_>>(), [3, 4, 5, 6]);
    assert!(VisibleRange::new(5, 2).is_empty());
    assert_eq!(expand(VisibleRange::EMPTY, 3, 10), VisibleRange::EMPTY);
    assert_eq!(expand(r, 5, 9), VisibleRange { start: 0, end: 9 });
}
