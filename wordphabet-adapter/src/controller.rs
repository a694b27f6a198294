use alloc::string::String;
use alloc::vec::Vec;

use wordphabet::{DrawPlan, GeometrySnapshot, HeaderMetrics, SectionIndex, StickyHeaderPositioner};

use crate::{Canvas, HeaderRenderer, ListLayout};

/// A framework-neutral controller that ties a dataset's [`SectionIndex`], a [`ListLayout`] and a
/// [`StickyHeaderPositioner`] together.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_viewport_height` / `on_scroll` when UI events occur
/// - `frame()` or `render(..)` once per draw
///
/// The snapshot buffer is reused across frames.
#[derive(Clone, Debug)]
pub struct Controller {
    index: SectionIndex,
    layout: ListLayout,
    positioner: StickyHeaderPositioner,
    snapshot: GeometrySnapshot,
}

impl Controller {
    /// Builds the section index from `items` and a layout sized by `estimate_size`.
    pub fn new<S: AsRef<str>>(
        items: &[S],
        section_key: impl FnMut(&str) -> String,
        estimate_size: impl Fn(usize) -> u32,
        metrics: HeaderMetrics,
    ) -> Self {
        let index = SectionIndex::build(items, section_key);
        let layout = ListLayout::new(items.len(), estimate_size);
        Self::from_parts(index, layout, metrics)
    }

    pub fn from_parts(index: SectionIndex, layout: ListLayout, metrics: HeaderMetrics) -> Self {
        sdebug!(
            count = layout.count(),
            sections = index.len(),
            "Controller::from_parts"
        );
        Self {
            index,
            layout,
            positioner: StickyHeaderPositioner::new(metrics),
            snapshot: GeometrySnapshot::new(),
        }
    }

    pub fn index(&self) -> &SectionIndex {
        &self.index
    }

    pub fn layout(&self) -> &ListLayout {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut ListLayout {
        &mut self.layout
    }

    pub fn metrics(&self) -> HeaderMetrics {
        self.positioner.metrics()
    }

    pub fn set_metrics(&mut self, metrics: HeaderMetrics) {
        self.positioner.set_metrics(metrics);
    }

    /// Reserves `inset` pixels above each section start (for band-style headers).
    pub fn reserve_header_space(&mut self, inset: u32) {
        self.layout.set_section_insets(&self.index, inset);
    }

    pub fn on_viewport_height(&mut self, viewport_height: u32) {
        self.layout.set_viewport_height(viewport_height);
    }

    /// Call this when the UI reports a scroll offset change. The offset is clamped.
    pub fn on_scroll(&mut self, scroll_offset: u64) {
        strace!(scroll_offset, "on_scroll");
        self.layout.set_scroll_offset_clamped(scroll_offset);
    }

    /// Scrolls so the section labelled `label` starts at the top of the viewport.
    ///
    /// Returns the applied offset, or `None` if no section has that label.
    pub fn scroll_to_section(&mut self, label: &str) -> Option<u64> {
        let position = self.index.position_of(label)?;
        Some(self.layout.scroll_to_index(position))
    }

    /// The label of the section holding the topmost item intersecting the viewport.
    pub fn current_section(&self) -> Option<&str> {
        let first = self.layout.visible_range().next()?;
        self.index.section_containing(first).map(|(_, label)| label)
    }

    /// Computes this frame's draw plans from the current layout.
    pub fn frame(&mut self) -> Vec<DrawPlan<'_>> {
        self.layout.snapshot_into(&mut self.snapshot);
        self.positioner.draw_plans(&self.index, &self.snapshot, self.layout.viewport())
    }

    /// Computes this frame's plans and paints them with `renderer`.
    ///
    /// Returns the number of headers drawn.
    pub fn render(
        &mut self,
        renderer: &mut impl HeaderRenderer,
        canvas: &mut dyn Canvas,
    ) -> usize {
        self.layout.snapshot_into(&mut self.snapshot);
        let mut drawn = 0usize;
        self.positioner.for_each_draw_plan(
            &self.index,
            &self.snapshot,
            self.layout.viewport(),
            |plan| {
                renderer.draw(&mut *canvas, &plan);
                drawn += 1;
            },
        );
        drawn
    }
}
