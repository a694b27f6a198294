use alloc::vec::Vec;

use crate::{DrawPlan, GeometrySnapshot, HeaderMetrics, PlanKind, SectionIndex, Viewport};

/// Computes where sticky section headers go for one frame.
///
/// The positioner holds only the header metrics; everything else is passed per call, so the same
/// inputs always produce the same plans and nothing carries over between frames.
///
/// Each call runs two passes:
/// - a primary pass over the snapshot, bottom to top, that emits one plan per visible section
///   start, each clamped so it never rises above the viewport top nor overlaps the header placed
///   just below it;
/// - a carry-over pass that pins the section whose first item has scrolled off above (found by
///   binary search for the nearest section start before the topmost section found).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StickyHeaderPositioner {
    metrics: HeaderMetrics,
}

impl StickyHeaderPositioner {
    pub fn new(metrics: HeaderMetrics) -> Self {
        Self { metrics }
    }

    pub fn metrics(&self) -> HeaderMetrics {
        self.metrics
    }

    pub fn set_metrics(&mut self, metrics: HeaderMetrics) {
        self.metrics = metrics;
    }

    /// Emits the frame's draw plans in draw order (bottom-most header first, carry-over last).
    ///
    /// Allocation-free; see [`Self::collect_draw_plans`] for a buffered variant.
    pub fn for_each_draw_plan<'a>(
        &self,
        index: &'a SectionIndex,
        snapshot: &GeometrySnapshot,
        viewport: Viewport,
        mut f: impl FnMut(DrawPlan<'a>),
    ) {
        let Some(topmost) = snapshot.topmost() else {
            return;
        };
        if index.is_empty() {
            return;
        }

        let metrics = &self.metrics;
        let mut last_found: Option<usize> = None;
        let mut bound = f32::INFINITY;

        for item in snapshot.iter_bottom_to_top() {
            if item.is_outside(viewport) {
                continue;
            }
            let Some(label) = index.get(item.position) else {
                continue;
            };

            let offset_y = metrics.place_visible(item.screen_top(), bound);
            strace!(position = item.position, offset_y, "visible section start");
            f(DrawPlan {
                label,
                offset_y,
                position: item.position,
                kind: PlanKind::Visible,
            });
            last_found = Some(item.position);
            bound = metrics.bound_after(offset_y);
        }

        // Nothing starts on screen: look for the section holding the topmost item.
        let last_found = last_found.unwrap_or(topmost.position.saturating_add(1));

        if let Some((position, label)) = index.section_start_before(last_found) {
            let offset_y = metrics.place_carry_over(bound);
            strace!(position, offset_y, "carry-over section");
            f(DrawPlan {
                label,
                offset_y,
                position,
                kind: PlanKind::CarryOver,
            });
        }
    }

    /// Collects the frame's draw plans into `out` (clears `out` first).
    ///
    /// Reuse `out` across frames to avoid reallocating.
    pub fn collect_draw_plans<'a>(
        &self,
        index: &'a SectionIndex,
        snapshot: &GeometrySnapshot,
        viewport: Viewport,
        out: &mut Vec<DrawPlan<'a>>,
    ) {
        out.clear();
        self.for_each_draw_plan(index, snapshot, viewport, |plan| out.push(plan));
    }

    pub fn draw_plans<'a>(
        &self,
        index: &'a SectionIndex,
        snapshot: &GeometrySnapshot,
        viewport: Viewport,
    ) -> Vec<DrawPlan<'a>> {
        let mut out = Vec::new();
        self.collect_draw_plans(index, snapshot, viewport, &mut out);
        out
    }
}
