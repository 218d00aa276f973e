//! Font metrics used by layout and glyph placement.
//!
//! Two questions are asked of a font: how tall is a line of text
//! ([`FontMetricsProvider::line_metrics`]) and where does the ink of a single
//! glyph land relative to its baseline origin
//! ([`FontMetricsProvider::glyph_bounds`]). The second lets callers center a
//! glyph optically instead of by baseline.
//!
//! Coordinates follow screen conventions: y grows downwards, so a glyph
//! sitting on the baseline has a negative `top`.

use unicode_segmentation::UnicodeSegmentation;

use super::font::Font;
use crate::error::{RenderError, RenderResult};
use crate::types::Rect;

/// Vertical metrics of a font at a given size, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FontMetrics {
    /// Distance from the baseline to the top of the tallest glyphs (positive).
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the lowest glyphs (positive).
    pub descent: f32,
    /// Extra spacing recommended between lines.
    pub leading: f32,
}

impl FontMetrics {
    /// Ascent-to-descent extent plus leading.
    #[inline]
    pub fn line_height(&self) -> f32 {
        self.ascent + self.descent + self.leading
    }
}

/// Supplies font measurements to widgets.
pub trait FontMetricsProvider {
    /// Vertical metrics of `font`.
    fn line_metrics(&self, font: &Font) -> FontMetrics;

    /// Ink bounds of `glyph` drawn with its baseline origin at (0, 0).
    ///
    /// `glyph` is a single grapheme cluster. Glyphs with no ink (spaces)
    /// return an empty rectangle at the origin.
    fn glyph_bounds(&self, font: &Font, glyph: &str) -> Rect;
}

/// Deterministic metrics derived from the font size alone.
///
/// Proportions approximate a typical sans-serif face. Useful for headless
/// hosts, previews and tests where no font files are available.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleFontMetrics;

impl SimpleFontMetrics {
    /// Advance and ink box (in ems, baseline origin) of one character.
    fn char_box(ch: char) -> (f32, Option<Rect>) {
        match ch {
            c if c.is_whitespace() => (0.3, None),
            '1' | 'i' | 'l' | 'I' | '.' | ',' | '!' | '|' => {
                (0.3, Some(Rect::new(0.08, -0.7, 0.14, 0.7)))
            }
            '0'..='9' => (0.55, Some(Rect::new(0.05, -0.7, 0.45, 0.7))),
            'g' | 'j' | 'p' | 'q' | 'y' => (0.5, Some(Rect::new(0.05, -0.5, 0.4, 0.7))),
            'b' | 'd' | 'f' | 'h' | 'k' | 't' => (0.5, Some(Rect::new(0.05, -0.72, 0.4, 0.72))),
            c if c.is_lowercase() => (0.5, Some(Rect::new(0.05, -0.5, 0.4, 0.5))),
            _ => (0.6, Some(Rect::new(0.05, -0.7, 0.5, 0.7))),
        }
    }
}

impl FontMetricsProvider for SimpleFontMetrics {
    fn line_metrics(&self, font: &Font) -> FontMetrics {
        let size = font.size();
        FontMetrics {
            ascent: size * 0.8,
            descent: size * 0.2,
            leading: 0.0,
        }
    }

    fn glyph_bounds(&self, font: &Font, glyph: &str) -> Rect {
        let size = font.size();
        let mut pen = 0.0;
        let mut bounds: Option<Rect> = None;

        for ch in glyph.chars() {
            let (advance, ink) = Self::char_box(ch);
            if let Some(ink) = ink {
                let placed = Rect::new(
                    (pen + ink.left()) * size,
                    ink.top() * size,
                    ink.width() * size,
                    ink.height() * size,
                );
                bounds = Some(match bounds {
                    Some(b) => b.union(&placed),
                    None => placed,
                });
            }
            pen += advance;
        }

        bounds.unwrap_or(Rect::ZERO)
    }
}

/// Metrics read from an OpenType/TrueType face with `ttf-parser`.
///
/// The face bytes are owned; the family and weight of the [`Font`] passed to
/// the provider are ignored, only its pixel size is used.
pub struct TtfFontMetrics {
    data: Vec<u8>,
    index: u32,
    units_per_em: f32,
    ascender: f32,
    descender: f32,
    line_gap: f32,
}

impl TtfFontMetrics {
    /// Parse face `index` of the given font file contents.
    pub fn from_bytes(data: Vec<u8>, index: u32) -> RenderResult<Self> {
        let face = ttf_parser::Face::parse(&data, index)
            .map_err(|err| RenderError::FontParse(err.to_string()))?;

        let units_per_em = f32::from(face.units_per_em());
        let ascender = f32::from(face.ascender());
        let descender = f32::from(face.descender());
        let line_gap = f32::from(face.line_gap());
        tracing::debug!(
            target: "passcode_lattice_render::text",
            units_per_em,
            ascender,
            descender,
            line_gap,
            "loaded font face"
        );

        Ok(Self {
            data,
            index,
            units_per_em,
            ascender,
            descender,
            line_gap,
        })
    }

    /// Read and parse a font file from disk.
    pub fn load(path: impl AsRef<std::path::Path>, index: u32) -> RenderResult<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(data, index)
    }

    fn scale(&self, font: &Font) -> f32 {
        if self.units_per_em > 0.0 {
            font.size() / self.units_per_em
        } else {
            0.0
        }
    }
}

impl FontMetricsProvider for TtfFontMetrics {
    fn line_metrics(&self, font: &Font) -> FontMetrics {
        let scale = self.scale(font);
        FontMetrics {
            ascent: self.ascender * scale,
            descent: -self.descender * scale,
            leading: self.line_gap * scale,
        }
    }

    fn glyph_bounds(&self, font: &Font, glyph: &str) -> Rect {
        let Ok(face) = ttf_parser::Face::parse(&self.data, self.index) else {
            return Rect::ZERO;
        };
        let scale = self.scale(font);
        let mut pen = 0.0;
        let mut bounds: Option<Rect> = None;

        // Only the first cluster is measured; callers pass one slot's text.
        let cluster = glyph.graphemes(true).next().unwrap_or("");
        for ch in cluster.chars() {
            let Some(id) = face.glyph_index(ch) else {
                tracing::trace!(target: "passcode_lattice_render::text", ?ch, "no glyph for char");
                continue;
            };
            if let Some(bbox) = face.glyph_bounding_box(id) {
                let placed = Rect::new(
                    pen + f32::from(bbox.x_min) * scale,
                    -f32::from(bbox.y_max) * scale,
                    (f32::from(bbox.x_max) - f32::from(bbox.x_min)) * scale,
                    (f32::from(bbox.y_max) - f32::from(bbox.y_min)) * scale,
                );
                bounds = Some(match bounds {
                    Some(b) => b.union(&placed),
                    None => placed,
                });
            }
            pen += f32::from(face.glyph_hor_advance(id).unwrap_or(0)) * scale;
        }

        bounds.unwrap_or(Rect::ZERO)
    }
}

impl std::fmt::Debug for TtfFontMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtfFontMetrics")
            .field("bytes", &self.data.len())
            .field("index", &self.index)
            .field("units_per_em", &self.units_per_em)
            .finish()
    }
}
