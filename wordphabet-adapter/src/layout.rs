use alloc::vec::Vec;
use core::ops::Range;

use wordphabet::{GeometrySnapshot, SectionIndex, Viewport, VisibleItemGeometry};

use crate::fenwick::Fenwick;

/// A minimal vertical scroll container that reports item geometry the way a real list widget
/// would.
///
/// Each item occupies a slot of `inset + size` pixels, where `inset` is space reserved above the
/// item (see [`Self::set_section_insets`]). The layout realizes the items intersecting the
/// viewport plus `overscan` extra items on each side, so a snapshot may contain items that are
/// entirely off screen, which is exactly what the positioner is built to ignore.
///
/// Sizes are integral pixels; offsets are measured from the top of the content.
#[derive(Clone, Debug)]
pub struct ListLayout {
    sizes: Vec<u32>,
    insets: Vec<u32>,
    translations: Vec<f32>,
    sums: Fenwick,
    viewport_height: u32,
    scroll_offset: u64,
    overscan: usize,
}

impl ListLayout {
    /// Creates a layout for `count` items, sized by `estimate_size(i)` until measured.
    pub fn new(count: usize, estimate_size: impl Fn(usize) -> u32) -> Self {
        let sizes: Vec<u32> = (0..count).map(estimate_size).collect();
        let mut layout = Self {
            insets: alloc::vec![0; count],
            translations: alloc::vec![0.0; count],
            sums: Fenwick::from_values(core::iter::empty()),
            sizes,
            viewport_height: 0,
            scroll_offset: 0,
            overscan: 1,
        };
        layout.rebuild_sums();
        layout
    }

    pub fn with_viewport_height(mut self, viewport_height: u32) -> Self {
        self.viewport_height = viewport_height;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn count(&self) -> usize {
        self.sizes.len()
    }

    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    pub fn set_viewport_height(&mut self, viewport_height: u32) {
        self.viewport_height = viewport_height;
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.viewport_height as f32)
    }

    pub fn overscan(&self) -> usize {
        self.overscan
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        self.overscan = overscan;
    }

    /// Reserves `inset` pixels above every section start, leaving room for a header band drawn
    /// with [`wordphabet::ReferencePoint::Bottom`]. An `inset` of zero removes the reservation.
    pub fn set_section_insets(&mut self, index: &SectionIndex, inset: u32) {
        self.insets.iter_mut().for_each(|i| *i = 0);
        for &position in index.positions() {
            match self.insets.get_mut(position) {
                Some(slot) => *slot = inset,
                None => {
                    swarn!(
                        position,
                        count = self.sizes.len(),
                        "set_section_insets: section start out of range"
                    );
                }
            }
        }
        sdebug!(inset, sections = index.len(), "set_section_insets");
        self.rebuild_sums();
    }

    /// Records the measured size of an item and returns the size delta.
    ///
    /// Out-of-range indexes are ignored.
    pub fn measure(&mut self, index: usize, size: u32) -> i64 {
        let Some(cur) = self.sizes.get_mut(index) else {
            swarn!(index, count = self.sizes.len(), "measure: out-of-range index");
            return 0;
        };
        let delta = size as i64 - *cur as i64;
        *cur = size;
        if delta != 0 {
            strace!(index, size, delta, "measure");
            self.sums.add(index, delta);
        }
        delta
    }

    /// Sets a transient vertical translation for an item (e.g. while it animates in).
    pub fn set_translation_y(&mut self, index: usize, translation_y: f32) {
        if let Some(t) = self.translations.get_mut(index) {
            *t = translation_y;
        }
    }

    pub fn clear_translations(&mut self) {
        self.translations.iter_mut().for_each(|t| *t = 0.0);
    }

    pub fn total_size(&self) -> u64 {
        self.sums.total()
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.total_size().saturating_sub(self.viewport_height as u64)
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_scroll_offset())
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    /// Sets the scroll offset as-is, allowing over-scroll past the end of the content.
    pub fn set_scroll_offset(&mut self, offset: u64) {
        self.scroll_offset = offset;
    }

    pub fn set_scroll_offset_clamped(&mut self, offset: u64) {
        self.scroll_offset = self.clamp_scroll_offset(offset);
    }

    /// Scrolls so the slot of `index` (including its reserved inset) starts at the viewport top.
    ///
    /// Returns the applied (clamped) offset.
    pub fn scroll_to_index(&mut self, index: usize) -> u64 {
        if let Some(start) = self.slot_start(index) {
            self.set_scroll_offset_clamped(start);
        }
        self.scroll_offset
    }

    /// Start of the item's slot, before its reserved inset.
    pub fn slot_start(&self, index: usize) -> Option<u64> {
        (index < self.count()).then(|| self.sums.prefix_sum(index))
    }

    /// Top edge of the item itself, after its reserved inset.
    pub fn item_top(&self, index: usize) -> Option<u64> {
        let start = self.slot_start(index)?;
        Some(start.saturating_add(self.insets[index] as u64))
    }

    pub fn item_size(&self, index: usize) -> Option<u32> {
        self.sizes.get(index).copied()
    }

    /// The item whose slot contains content offset `offset` (clamped to the last item).
    pub fn index_at_offset(&self, offset: u64) -> Option<usize> {
        let last = self.count().checked_sub(1)?;
        Some(self.sums.lower_bound(offset).min(last))
    }

    /// Items intersecting the viewport, without overscan.
    pub fn visible_range(&self) -> Range<usize> {
        if self.viewport_height == 0 {
            return 0..0;
        }
        let Some(start) = self.index_at_offset(self.scroll_offset) else {
            return 0..0;
        };
        let last_px = self
            .scroll_offset
            .saturating_add(self.viewport_height as u64 - 1);
        let end = self.index_at_offset(last_px).map_or(start, |i| i + 1);
        start..end
    }

    /// Items the container keeps realized: the visible range widened by `overscan`.
    pub fn realized_range(&self) -> Range<usize> {
        let visible = self.visible_range();
        if visible.is_empty() {
            return visible;
        }
        let start = visible.start.saturating_sub(self.overscan);
        let end = visible.end.saturating_add(self.overscan).min(self.count());
        start..end
    }

    /// Writes the realized items into `out`, bottom-most first (clears `out` first).
    pub fn snapshot_into(&self, out: &mut GeometrySnapshot) {
        out.clear();
        let scroll = self.scroll_offset as f64;
        for i in self.realized_range().rev() {
            let Some(top) = self.item_top(i) else {
                continue;
            };
            out.push_bottom_to_top(VisibleItemGeometry {
                position: i,
                top: (top as f64 - scroll) as f32,
                translation_y: self.translations[i],
                height: Some(self.sizes[i] as f32),
            });
        }
    }

    pub fn snapshot(&self) -> GeometrySnapshot {
        let mut out = GeometrySnapshot::with_capacity(self.realized_range().len());
        self.snapshot_into(&mut out);
        out
    }

    fn rebuild_sums(&mut self) {
        self.sums = Fenwick::from_values(
            self.sizes
                .iter()
                .zip(self.insets.iter())
                .map(|(&s, &i)| s as u64 + i as u64),
        );
    }
}
