//! Paint styles for filling and stroking shapes.

use crate::types::Color;

/// How a shape is filled.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    /// Solid color fill.
    Solid(Color),
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

/// Outline paint and width.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    /// Stroke paint.
    pub paint: Paint,
    /// Stroke width in pixels.
    pub width: f32,
}

impl Stroke {
    /// Create a new stroke with the given paint and width.
    #[inline]
    pub fn new(paint: impl Into<Paint>, width: f32) -> Self {
        Self {
            paint: paint.into(),
            width,
        }
    }
}
