// Example: sticky first-letter headers over a hand-built frame.
use wordphabet::{
    GeometrySnapshot, HeaderMetrics, SectionIndex, StickyHeaderPositioner, Viewport,
    VisibleItemGeometry,
};

fn main() {
    let words = [
        "Acorn", "Anchor", "Apple", "Banana", "Beacon", "Cherry", "Citrus", "Comet", "Delta",
    ];
    let index = SectionIndex::from_items(words);
    println!("sections={:?}", index.iter().collect::<Vec<_>>());

    let positioner = StickyHeaderPositioner::new(HeaderMetrics::new(24.0, 6.0));
    let viewport = Viewport::new(120.0);

    // Rows are 32px tall; scroll a few pixels at a time across the "B" -> "C" boundary.
    for scroll in [64.0f32, 96.0, 120.0, 140.0, 160.0] {
        let first = (scroll / 32.0) as usize;
        let last = (((scroll + viewport.height) / 32.0) as usize + 1).min(words.len());
        let snapshot = GeometrySnapshot::from_top_to_bottom((first..last).map(|i| {
            VisibleItemGeometry::new(i, i as f32 * 32.0 - scroll).with_height(32.0)
        }));

        let plans = positioner.draw_plans(&index, &snapshot, viewport);
        println!("scroll={scroll:>5} plans={plans:?}");
    }
}
