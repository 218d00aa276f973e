//! A renderer that records draw calls instead of rasterizing them.
//!
//! Used by headless hosts to inspect what a widget would draw, and by tests.

use crate::paint::{Paint, Stroke};
use crate::renderer::Renderer;
use crate::text::Font;
use crate::types::{Color, Point};

/// A single recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A filled ellipse.
    FillEllipse {
        center: Point,
        radius_x: f32,
        radius_y: f32,
        paint: Paint,
    },
    /// A stroked ellipse outline.
    StrokeEllipse {
        center: Point,
        radius_x: f32,
        radius_y: f32,
        stroke: Stroke,
    },
    /// A text run.
    Text {
        text: String,
        origin: Point,
        font: Font,
        color: Color,
    },
}

/// Records every call made through the [`Renderer`] trait.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded commands, in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the recorder empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn fill_ellipse(&mut self, center: Point, radius_x: f32, radius_y: f32, paint: impl Into<Paint>) {
        self.commands.push(DrawCommand::FillEllipse {
            center,
            radius_x,
            radius_y,
            paint: paint.into(),
        });
    }

    fn stroke_ellipse(&mut self, center: Point, radius_x: f32, radius_y: f32, stroke: &Stroke) {
        self.commands.push(DrawCommand::StrokeEllipse {
            center,
            radius_x,
            radius_y,
            stroke: stroke.clone(),
        });
    }

    fn draw_text(&mut self, text: &str, origin: Point, font: &Font, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            origin,
            font: font.clone(),
            color,
        });
    }
}
