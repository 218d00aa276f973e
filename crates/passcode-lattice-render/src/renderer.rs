//! Core renderer trait defining the drawing surface widgets paint onto.
//!
//! This module defines the [`Renderer`] trait, the subset of 2D drawing
//! operations the password widgets need. Hosts implement it on top of their
//! own canvas (GPU, software rasterizer, terminal cells); [`RecordingRenderer`]
//! is a bundled implementation that records every call.
//!
//! [`RecordingRenderer`]: crate::RecordingRenderer

use crate::paint::{Paint, Stroke};
use crate::text::Font;
use crate::types::{Color, Point};

/// The 2D drawing surface trait.
///
/// # Example
///
/// ```
/// use passcode_lattice_render::{Color, Point, RecordingRenderer, Renderer, Stroke};
///
/// let mut renderer = RecordingRenderer::new();
/// renderer.fill_circle(Point::new(10.0, 10.0), 8.0, Color::WHITE);
/// renderer.stroke_circle(Point::new(30.0, 10.0), 8.0, &Stroke::new(Color::WHITE, 2.0));
/// assert_eq!(renderer.commands().len(), 2);
/// ```
pub trait Renderer {
    /// Fill an ellipse.
    fn fill_ellipse(&mut self, center: Point, radius_x: f32, radius_y: f32, paint: impl Into<Paint>);

    /// Stroke an ellipse.
    fn stroke_ellipse(&mut self, center: Point, radius_x: f32, radius_y: f32, stroke: &Stroke);

    /// Draw a run of text with its baseline origin at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point, font: &Font, color: Color);

    /// Fill a circle (convenience method for fill_ellipse).
    #[inline]
    fn fill_circle(&mut self, center: Point, radius: f32, paint: impl Into<Paint>) {
        self.fill_ellipse(center, radius, radius, paint);
    }

    /// Stroke a circle (convenience method for stroke_ellipse).
    #[inline]
    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: &Stroke) {
        self.stroke_ellipse(center, radius, radius, stroke);
    }
}
