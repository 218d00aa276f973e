//! Drawing vocabulary for Passcode Lattice.
//!
//! This crate provides the types widgets use to describe what they draw and
//! the traits hosts implement to actually draw it:
//!
//! - Geometry and color: [`Point`], [`Size`], [`Rect`], [`Color`]
//! - Paints: [`Paint`], [`Stroke`]
//! - The drawing surface: [`Renderer`]
//! - Text: [`Font`] and the [`FontMetricsProvider`] trait, with
//!   [`SimpleFontMetrics`] (size-derived) and [`TtfFontMetrics`] (read from a
//!   font file with `ttf-parser`)
//! - [`RecordingRenderer`], a renderer that records calls for inspection
//!
//! # Example
//!
//! ```
//! use passcode_lattice_render::{
//!     Color, DrawCommand, Font, FontFamily, Point, RecordingRenderer, Renderer,
//! };
//!
//! let mut renderer = RecordingRenderer::new();
//! renderer.fill_circle(Point::new(8.0, 8.0), 8.0, Color::WHITE);
//! renderer.draw_text("4", Point::new(20.0, 14.0), &Font::new(FontFamily::SansSerif, 16.0), Color::WHITE);
//!
//! assert!(matches!(renderer.commands()[0], DrawCommand::FillEllipse { .. }));
//! ```

mod error;
mod paint;
mod recording;
mod renderer;
pub mod text;
mod types;

pub use error::{RenderError, RenderResult};
pub use paint::{Paint, Stroke};
pub use recording::{DrawCommand, RecordingRenderer};
pub use renderer::Renderer;
pub use text::{Font, FontFamily, FontMetrics, FontMetricsProvider, FontWeight, SimpleFontMetrics, TtfFontMetrics};
pub use types::{Color, Point, Rect, Size};
