use alloc::string::String;
use alloc::vec::Vec;

use wordphabet::{DrawPlan, HeaderMetrics, ReferencePoint};

/// A drawing surface for headers. Hosts implement this over their real canvas.
pub trait Canvas {
    /// Draws `text` horizontally centered on `x`, with its baseline at `baseline_y`.
    fn draw_text(&mut self, text: &str, x: f32, baseline_y: f32);

    fn fill_rect(&mut self, left: f32, top: f32, right: f32, bottom: f32);
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawCommand {
    Text {
        text: String,
        x: f32,
        baseline_y: f32,
    },
    FillRect {
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
    },
}

/// A [`Canvas`] that records what was drawn, for tests and headless hosts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

impl Canvas for RecordingCanvas {
    fn draw_text(&mut self, text: &str, x: f32, baseline_y: f32) {
        self.commands.push(DrawCommand::Text {
            text: String::from(text),
            x,
            baseline_y,
        });
    }

    fn fill_rect(&mut self, left: f32, top: f32, right: f32, bottom: f32) {
        self.commands.push(DrawCommand::FillRect {
            left,
            top,
            right,
            bottom,
        });
    }
}

/// Paints one [`DrawPlan`]. Each style knows which [`ReferencePoint`] its offsets use, so the
/// positioner can be configured to match.
pub trait HeaderRenderer {
    fn reference_point(&self) -> ReferencePoint;

    fn draw(&mut self, canvas: &mut dyn Canvas, plan: &DrawPlan<'_>);

    /// Header metrics for this style, given the header extent and padding.
    fn metrics(&self, header_height: f32, padding: f32) -> HeaderMetrics {
        HeaderMetrics::new(header_height, padding).with_reference(self.reference_point())
    }
}

/// Draws the label as bare text in the list's left margin, baseline at the plan offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BaselineTextRenderer {
    /// Horizontal center of the text, usually half the left margin.
    pub x: f32,
}

impl BaselineTextRenderer {
    pub fn new(x: f32) -> Self {
        Self { x }
    }
}

impl HeaderRenderer for BaselineTextRenderer {
    fn reference_point(&self) -> ReferencePoint {
        ReferencePoint::Baseline
    }

    fn draw(&mut self, canvas: &mut dyn Canvas, plan: &DrawPlan<'_>) {
        canvas.draw_text(plan.label, self.x, plan.offset_y);
    }
}

/// Draws a full-width band ending at the plan offset with the label centered in it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FilledRectRenderer {
    pub width: f32,
    pub header_height: f32,
}

impl FilledRectRenderer {
    pub fn new(width: f32, header_height: f32) -> Self {
        Self {
            width,
            header_height,
        }
    }
}

impl HeaderRenderer for FilledRectRenderer {
    fn reference_point(&self) -> ReferencePoint {
        ReferencePoint::Bottom
    }

    /// Always uses the band's own height, so positioning and painting agree on it.
    fn metrics(&self, _header_height: f32, padding: f32) -> HeaderMetrics {
        HeaderMetrics::new(self.header_height, padding).with_reference(ReferencePoint::Bottom)
    }

    fn draw(&mut self, canvas: &mut dyn Canvas, plan: &DrawPlan<'_>) {
        let bottom = plan.offset_y;
        canvas.fill_rect(0.0, bottom - self.header_height, self.width, bottom);
        canvas.draw_text(
            plan.label,
            self.width / 2.0,
            bottom - self.header_height * 0.25,
        );
    }
}
