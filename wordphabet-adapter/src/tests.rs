use crate::*;

use alloc::vec::Vec;

use wordphabet::{HeaderMetrics, PlanKind, ReferencePoint, SectionIndex, first_letter_uppercase};

use crate::fenwick::Fenwick;

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

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        let span = (end_exclusive - start) as u64;
        start + ((self.next_u64() >> 16) % span) as u32
    }
}

const FRUITS: [&str; 5] = ["Apple", "Avocado", "Banana", "Blueberry", "Cherry"];

fn fruits_controller(viewport_height: u32) -> Controller {
    let mut c = Controller::new(
        &FRUITS,
        first_letter_uppercase,
        |_| 20,
        HeaderMetrics::new(20.0, 5.0),
    );
    c.on_viewport_height(viewport_height);
    c
}

fn summary<'a>(plans: &[wordphabet::DrawPlan<'a>]) -> Vec<(&'a str, f32, PlanKind)> {
    plans.iter().map(|p| (p.label, p.offset_y, p.kind)).collect()
}

#[test]
fn fenwick_prefix_sums_and_lower_bound() {
    let mut f = Fenwick::from_values([30u64, 20, 30, 20, 30].into_iter());
    assert_eq!(f.len(), 5);
    assert_eq!(f.total(), 130);
    assert_eq!(f.prefix_sum(0), 0);
    assert_eq!(f.prefix_sum(3), 80);
    assert_eq!(f.prefix_sum(99), 130);
    assert_eq!(f.lower_bound(0), 0);
    assert_eq!(f.lower_bound(29), 0);
    assert_eq!(f.lower_bound(30), 1);
    assert_eq!(f.lower_bound(1_000), 5);

    f.add(1, -10);
    assert_eq!(f.total(), 120);
    assert_eq!(f.prefix_sum(2), 40);
    assert_eq!(f.lower_bound(40), 2);

    let empty = Fenwick::from_values(core::iter::empty());
    assert_eq!(empty.len(), 0);
    assert_eq!(empty.lower_bound(10), 0);
}

#[test]
fn layout_reports_visible_and_realized_ranges() {
    let mut layout = ListLayout::new(10, |_| 20)
        .with_viewport_height(50)
        .with_overscan(1);
    assert_eq!(layout.total_size(), 200);
    assert_eq!(layout.max_scroll_offset(), 150);

    layout.set_scroll_offset(30);
    assert_eq!(layout.visible_range(), 1..4);
    assert_eq!(layout.realized_range(), 0..5);

    let snapshot = layout.snapshot();
    let positions: Vec<usize> = snapshot.iter_bottom_to_top().map(|g| g.position).collect();
    assert_eq!(positions, [4, 3, 2, 1, 0]);
    assert_eq!(snapshot.topmost().map(|g| g.top), Some(-30.0));
    assert_eq!(snapshot.bottommost().map(|g| g.top), Some(50.0));
    assert!(snapshot.iter_bottom_to_top().all(|g| g.height == Some(20.0)));

    layout.set_scroll_offset_clamped(1_000);
    assert_eq!(layout.scroll_offset(), 150);
    assert_eq!(layout.visible_range(), 7..10);
}

#[test]
fn empty_layout_or_viewport_realizes_nothing() {
    let layout = ListLayout::new(0, |_| 20).with_viewport_height(50);
    assert_eq!(layout.visible_range(), 0..0);
    assert!(layout.snapshot().is_empty());
    assert_eq!(layout.index_at_offset(0), None);

    let layout = ListLayout::new(10, |_| 20);
    assert_eq!(layout.visible_range(), 0..0);
    assert!(layout.snapshot().is_empty());
}

#[test]
fn section_insets_reserve_space_above_section_starts() {
    let index = SectionIndex::from_items(FRUITS);
    let mut layout = ListLayout::new(FRUITS.len(), |_| 20);
    layout.set_section_insets(&index, 10);

    assert_eq!(layout.total_size(), 130);
    assert_eq!(layout.slot_start(2), Some(50));
    assert_eq!(layout.item_top(0), Some(10));
    assert_eq!(layout.item_top(1), Some(30));
    assert_eq!(layout.item_top(2), Some(60));
    assert_eq!(layout.item_top(5), None);

    layout.set_section_insets(&index, 0);
    assert_eq!(layout.total_size(), 100);
    assert_eq!(layout.item_top(2), Some(40));
}

#[test]
fn measure_updates_offsets_and_ignores_out_of_range() {
    let mut layout = ListLayout::new(4, |_| 10).with_viewport_height(15);
    assert_eq!(layout.measure(1, 25), 15);
    assert_eq!(layout.measure(1, 25), 0);
    assert_eq!(layout.measure(9, 25), 0);
    assert_eq!(layout.total_size(), 55);
    assert_eq!(layout.item_top(2), Some(35));
    assert_eq!(layout.item_size(1), Some(25));
    assert_eq!(layout.index_at_offset(34), Some(1));
    assert_eq!(layout.index_at_offset(35), Some(2));
}

#[test]
fn translation_is_reported_in_snapshot() {
    let mut layout = ListLayout::new(3, |_| 20).with_viewport_height(60);
    layout.set_translation_y(2, 12.0);
    layout.set_translation_y(7, 1.0);

    let snapshot = layout.snapshot();
    let moved = snapshot
        .iter_bottom_to_top()
        .find(|g| g.position == 2)
        .map(|g| g.screen_top());
    assert_eq!(moved, Some(52.0));

    layout.clear_translations();
    let snapshot = layout.snapshot();
    assert!(snapshot.iter_bottom_to_top().all(|g| g.translation_y == 0.0));
}

#[test]
fn property_random_layout_matches_naive_offsets() {
    let mut rng = Lcg::new(7);
    for _ in 0..100 {
        let count = rng.gen_range_u32(1, 60) as usize;
        let sizes: Vec<u32> = (0..count).map(|_| rng.gen_range_u32(1, 40)).collect();
        let viewport = rng.gen_range_u32(1, 120);
        let mut layout = ListLayout::new(count, |i| sizes[i]).with_viewport_height(viewport);

        let mut naive = Vec::with_capacity(count);
        let mut acc = 0u64;
        for &s in &sizes {
            naive.push(acc);
            acc += s as u64;
        }
        assert_eq!(layout.total_size(), acc);
        for (i, &start) in naive.iter().enumerate() {
            assert_eq!(layout.item_top(i), Some(start));
        }

        let max = layout.max_scroll_offset();
        let scroll = rng.gen_range_u32(0, max as u32 + 1) as u64;
        layout.set_scroll_offset(scroll);

        let visible = layout.visible_range();
        assert!(!visible.is_empty());
        for i in visible.clone() {
            let top = naive[i];
            let bottom = top + sizes[i] as u64;
            assert!(bottom > scroll && top < scroll + viewport as u64, "i={i}");
        }
        // Nothing just outside the range intersects the viewport.
        if visible.start > 0 {
            assert!(naive[visible.start] <= scroll);
        }
        if visible.end < count {
            assert!(naive[visible.end] >= scroll + viewport as u64);
        }

        let snapshot = layout.snapshot();
        let positions: Vec<usize> = snapshot.iter_bottom_to_top().map(|g| g.position).collect();
        assert!(positions.windows(2).all(|w| w[0] == w[1] + 1));
    }
}

#[test]
fn controller_frames_follow_scroll() {
    let mut c = fruits_controller(40);

    let plans = c.frame();
    assert_eq!(
        summary(&plans),
        [("B", 45.0, PlanKind::Visible), ("A", 5.0, PlanKind::Visible)]
    );

    c.on_scroll(30);
    assert_eq!(c.current_section(), Some("A"));
    let plans = c.frame();
    assert_eq!(
        summary(&plans),
        [
            ("B", 15.0, PlanKind::Visible),
            ("A", -5.0, PlanKind::CarryOver),
        ]
    );

    c.on_scroll(50);
    assert_eq!(c.current_section(), Some("B"));
}

#[test]
fn controller_scrolls_to_sections() {
    let mut c = fruits_controller(40);
    assert_eq!(c.scroll_to_section("B"), Some(40));
    assert_eq!(c.scroll_to_section("C"), Some(60));
    assert_eq!(c.layout().scroll_offset(), 60);
    assert_eq!(c.scroll_to_section("Z"), None);
    assert_eq!(c.layout().scroll_offset(), 60);
}

#[test]
fn filled_rect_renderer_draws_bands_in_reserved_space() {
    let mut renderer = FilledRectRenderer::new(100.0, 10.0);
    // The band height comes from the renderer, whatever the caller passes.
    let metrics = renderer.metrics(25.0, 0.0);
    assert_eq!(metrics.reference, ReferencePoint::Bottom);
    assert_eq!(metrics.header_height, 10.0);

    let mut c = Controller::new(&FRUITS, first_letter_uppercase, |_| 20, metrics);
    c.reserve_header_space(10);
    c.on_viewport_height(40);

    let mut canvas = RecordingCanvas::new();
    assert_eq!(c.render(&mut renderer, &mut canvas), 1);
    assert_eq!(
        canvas.commands(),
        [
            DrawCommand::FillRect {
                left: 0.0,
                top: 0.0,
                right: 100.0,
                bottom: 10.0,
            },
            DrawCommand::Text {
                text: "A".into(),
                x: 50.0,
                baseline_y: 7.5,
            },
        ]
    );

    canvas.clear();
    c.on_scroll(45);
    assert_eq!(c.render(&mut renderer, &mut canvas), 2);
    assert_eq!(
        canvas.into_commands(),
        [
            DrawCommand::FillRect {
                left: 0.0,
                top: 5.0,
                right: 100.0,
                bottom: 15.0,
            },
            DrawCommand::Text {
                text: "B".into(),
                x: 50.0,
                baseline_y: 12.5,
            },
            DrawCommand::FillRect {
                left: 0.0,
                top: -5.0,
                right: 100.0,
                bottom: 5.0,
            },
            DrawCommand::Text {
                text: "A".into(),
                x: 50.0,
                baseline_y: 2.5,
            },
        ]
    );
}

#[test]
fn baseline_text_renderer_draws_at_plan_offsets() {
    let mut renderer = BaselineTextRenderer::new(12.0);
    let metrics = renderer.metrics(20.0, 5.0);
    assert_eq!(metrics.reference, ReferencePoint::Baseline);

    let mut c = Controller::new(&FRUITS, first_letter_uppercase, |_| 20, metrics);
    c.on_viewport_height(40);
    c.on_scroll(30);

    let mut canvas = RecordingCanvas::new();
    assert_eq!(c.render(&mut renderer, &mut canvas), 2);
    // "B" at 15 bounds "A" at 15 - 5 = 10, so "A" goes to min(5, 10 - 20).
    assert_eq!(
        canvas.commands(),
        [
            DrawCommand::Text {
                text: "B".into(),
                x: 12.0,
                baseline_y: 15.0,
            },
            DrawCommand::Text {
                text: "A".into(),
                x: 12.0,
                baseline_y: -10.0,
            },
        ]
    );
}
