/// What a plan's `offset_y` refers to, for a given header style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReferencePoint {
    /// The header's top edge.
    #[default]
    Top,
    /// A text baseline sitting `padding` below the header's top.
    ///
    /// The next header up is bounded by `offset_y - padding` instead of `offset_y`.
    Baseline,
    /// The bottom edge of a filled header band of `header_height`, drawn in the space reserved
    /// above each section start. `padding` is not used.
    Bottom,
}

/// The geometry a header style hands to [`crate::StickyHeaderPositioner`].
///
/// Hosts usually resolve these from their presentation layer (text size, item padding, band
/// height) once and reuse them across frames.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderMetrics {
    pub header_height: f32,
    pub padding: f32,
    pub reference: ReferencePoint,
}

impl HeaderMetrics {
    pub fn new(header_height: f32, padding: f32) -> Self {
        Self {
            header_height,
            padding,
            reference: ReferencePoint::Top,
        }
    }

    pub fn with_reference(mut self, reference: ReferencePoint) -> Self {
        self.reference = reference;
        self
    }

    pub fn with_header_height(mut self, header_height: f32) -> Self {
        self.header_height = header_height;
        self
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Offset for a visible section start whose item top is at `item_top`, given the bound left
    /// by the header placed below it.
    ///
    /// The lower bound is applied before the upper bound: when both are active the upper one
    /// wins, so a short section lets its header be pushed above the viewport.
    pub(crate) fn place_visible(&self, item_top: f32, bound: f32) -> f32 {
        let (raw, lower, upper) = match self.reference {
            ReferencePoint::Top | ReferencePoint::Baseline => (
                item_top + self.padding,
                self.padding,
                bound - self.header_height - self.padding,
            ),
            ReferencePoint::Bottom => (item_top, self.header_height, bound),
        };
        raw.max(lower).min(upper)
    }

    /// The bound a header drawn at `offset_y` imposes on the next header up.
    pub(crate) fn bound_after(&self, offset_y: f32) -> f32 {
        match self.reference {
            ReferencePoint::Baseline => offset_y - self.padding,
            ReferencePoint::Top | ReferencePoint::Bottom => offset_y,
        }
    }

    /// Offset for the section whose first item is above the viewport.
    pub(crate) fn place_carry_over(&self, bound: f32) -> f32 {
        let pinned = match self.reference {
            ReferencePoint::Top | ReferencePoint::Baseline => self.padding,
            ReferencePoint::Bottom => self.header_height,
        };
        pinned.min(bound - self.header_height)
    }
}
