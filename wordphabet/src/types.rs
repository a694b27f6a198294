/// Geometry of one realized list item, as reported by the host for the current frame.
///
/// All values are in viewport-relative pixels: `top + translation_y` is the item's on-screen top
/// edge, negative when the item starts above the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleItemGeometry {
    /// Index of the item in the full dataset.
    pub position: usize,
    /// Laid-out top edge, excluding any transient translation.
    pub top: f32,
    /// Transient vertical translation (e.g. item animations).
    pub translation_y: f32,
    /// Laid-out height, when the host knows it.
    pub height: Option<f32>,
}

impl VisibleItemGeometry {
    pub fn new(position: usize, top: f32) -> Self {
        Self {
            position,
            top,
            translation_y: 0.0,
            height: None,
        }
    }

    pub fn with_translation_y(mut self, translation_y: f32) -> Self {
        self.translation_y = translation_y;
        self
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    /// The on-screen top edge (`top + translation_y`).
    pub fn screen_top(&self) -> f32 {
        self.top + self.translation_y
    }

    /// The on-screen bottom edge, if the height is known.
    pub fn screen_bottom(&self) -> Option<f32> {
        self.height.map(|h| self.screen_top() + h)
    }

    /// Whether the item lies entirely outside `[0, viewport.height]`.
    ///
    /// Without a known height only the "fully below" check applies.
    pub fn is_outside(&self, viewport: Viewport) -> bool {
        if self.screen_top() > viewport.height {
            return true;
        }
        matches!(self.screen_bottom(), Some(bottom) if bottom < 0.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub height: f32,
}

impl Viewport {
    pub fn new(height: f32) -> Self {
        Self { height }
    }
}

/// Why a header is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlanKind {
    /// The section's first item is on screen.
    Visible,
    /// The section's first item has scrolled off above, but the section is still showing.
    CarryOver,
}

/// One header to draw this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrawPlan<'a> {
    pub label: &'a str,
    /// Vertical offset, interpreted according to the metrics' [`crate::ReferencePoint`].
    pub offset_y: f32,
    /// Position of the section's first item.
    pub position: usize,
    pub kind: PlanKind,
}

impl DrawPlan<'_> {
    pub fn is_carry_over(&self) -> bool {
        self.kind == PlanKind::CarryOver
    }
}
