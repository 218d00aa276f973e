//! Visual and behavioral parameters of the password widgets.

use std::path::Path;

use passcode_lattice_core::logging::targets;
use passcode_lattice_render::{Color, Font, FontFamily, FontWeight};
use serde::Deserialize;

use crate::error::{StyleError, StyleResult};

/// Default number of slots.
pub const DEFAULT_SLOT_COUNT: usize = 6;
/// Default circle radius in pixels.
pub const DEFAULT_CIRCLE_RADIUS: f32 = 8.0;
/// Default outline stroke width in pixels.
pub const DEFAULT_CIRCLE_BORDER_WIDTH: f32 = 2.0;
/// Default gap between neighbouring slots in pixels.
pub const DEFAULT_SLOT_MARGIN: f32 = 16.0;
/// Default glyph size in pixels.
pub const DEFAULT_GLYPH_SIZE: f32 = 20.0;

/// Appearance and behavior of a password widget.
///
/// Built with [`Default`] plus `with_*` setters, or loaded from TOML:
///
/// ```
/// use passcode_lattice::widget::password::PasswordStyle;
///
/// let style = PasswordStyle::from_toml_str(r##"
/// slot_count = 4
/// circle_radius = 10.0
/// circle_color = "#3366FF"
///
/// [glyph]
/// size = 24.0
/// "##).unwrap();
///
/// assert_eq!(style.slot_count(), 4);
/// assert_eq!(style.circle_radius(), 10.0);
/// assert_eq!(style.slot_margin(), 16.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordStyle {
    slot_count: usize,
    circle_radius: f32,
    circle_border_width: f32,
    circle_color: Color,
    glyph_font: Font,
    glyph_color: Color,
    slot_margin: f32,
    reveal_mode: bool,
}

impl Default for PasswordStyle {
    fn default() -> Self {
        Self {
            slot_count: DEFAULT_SLOT_COUNT,
            circle_radius: DEFAULT_CIRCLE_RADIUS,
            circle_border_width: DEFAULT_CIRCLE_BORDER_WIDTH,
            circle_color: Color::WHITE,
            glyph_font: Font::new(FontFamily::SansSerif, DEFAULT_GLYPH_SIZE),
            glyph_color: Color::WHITE,
            slot_margin: DEFAULT_SLOT_MARGIN,
            reveal_mode: false,
        }
    }
}

impl PasswordStyle {
    /// Create a style with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of slots.
    pub fn with_slot_count(mut self, count: usize) -> Self {
        self.slot_count = count;
        self
    }

    /// Set the circle radius.
    pub fn with_circle_radius(mut self, radius: f32) -> Self {
        self.circle_radius = radius;
        self
    }

    /// Set the outline stroke width.
    pub fn with_circle_border_width(mut self, width: f32) -> Self {
        self.circle_border_width = width;
        self
    }

    /// Set the colour of filled and outlined circles.
    pub fn with_circle_color(mut self, color: Color) -> Self {
        self.circle_color = color;
        self
    }

    /// Set the font used for revealed characters.
    pub fn with_glyph_font(mut self, font: Font) -> Self {
        self.glyph_font = font;
        self
    }

    /// Set the colour of revealed characters.
    pub fn with_glyph_color(mut self, color: Color) -> Self {
        self.glyph_color = color;
        self
    }

    /// Set the gap between neighbouring slots.
    pub fn with_slot_margin(mut self, margin: f32) -> Self {
        self.slot_margin = margin;
        self
    }

    /// Show every entered character instead of masking.
    pub fn with_reveal_mode(mut self, on: bool) -> Self {
        self.reveal_mode = on;
        self
    }

    /// Number of slots.
    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// Circle radius.
    pub fn circle_radius(&self) -> f32 {
        self.circle_radius
    }

    /// Circle diameter.
    #[inline]
    pub fn circle_diameter(&self) -> f32 {
        self.circle_radius * 2.0
    }

    /// Outline stroke width.
    pub fn circle_border_width(&self) -> f32 {
        self.circle_border_width
    }

    /// Circle colour.
    pub fn circle_color(&self) -> Color {
        self.circle_color
    }

    /// Font for revealed characters.
    pub fn glyph_font(&self) -> &Font {
        &self.glyph_font
    }

    /// Colour for revealed characters.
    pub fn glyph_color(&self) -> Color {
        self.glyph_color
    }

    /// Gap between neighbouring slots.
    pub fn slot_margin(&self) -> f32 {
        self.slot_margin
    }

    /// Whether every character is shown.
    pub fn reveal_mode(&self) -> bool {
        self.reveal_mode
    }

    pub(crate) fn set_slot_count(&mut self, count: usize) {
        self.slot_count = count;
    }

    pub(crate) fn set_reveal_mode(&mut self, on: bool) {
        self.reveal_mode = on;
    }

    /// Parse a style from TOML source.
    ///
    /// Every key is optional; missing keys keep their default. Colours are
    /// hex strings and geometry must be finite and non-negative.
    pub fn from_toml_str(source: &str) -> StyleResult<Self> {
        let file: StyleFile = toml::from_str(source)?;
        file.into_style()
    }

    /// Read and parse a TOML style file.
    pub fn load_toml(path: impl AsRef<Path>) -> StyleResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| StyleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let style = Self::from_toml_str(&source)?;
        tracing::debug!(
            target: targets::PASSWORD,
            path = %path.display(),
            slot_count = style.slot_count,
            "loaded password style"
        );
        Ok(style)
    }
}

/// On-disk shape of a style file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct StyleFile {
    slot_count: Option<usize>,
    reveal_mode: Option<bool>,
    circle_radius: Option<f32>,
    circle_border_width: Option<f32>,
    circle_color: Option<String>,
    slot_margin: Option<f32>,
    glyph: GlyphSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct GlyphSection {
    family: Option<String>,
    size: Option<f32>,
    weight: Option<u16>,
    color: Option<String>,
}

impl StyleFile {
    fn into_style(self) -> StyleResult<PasswordStyle> {
        let defaults = PasswordStyle::default();

        let glyph_font = {
            let family = self
                .glyph
                .family
                .as_deref()
                .map(FontFamily::parse)
                .unwrap_or_else(|| defaults.glyph_font.family().clone());
            let size = geometry("glyph.size", self.glyph.size, defaults.glyph_font.size())?;
            let weight = self
                .glyph
                .weight
                .map(FontWeight::new)
                .unwrap_or_else(|| defaults.glyph_font.weight());
            Font::new(family, size).with_weight(weight)
        };

        Ok(PasswordStyle {
            slot_count: self.slot_count.unwrap_or(defaults.slot_count),
            circle_radius: geometry("circle_radius", self.circle_radius, defaults.circle_radius)?,
            circle_border_width: geometry(
                "circle_border_width",
                self.circle_border_width,
                defaults.circle_border_width,
            )?,
            circle_color: color("circle_color", self.circle_color, defaults.circle_color)?,
            glyph_font,
            glyph_color: color("glyph.color", self.glyph.color, defaults.glyph_color)?,
            slot_margin: geometry("slot_margin", self.slot_margin, defaults.slot_margin)?,
            reveal_mode: self.reveal_mode.unwrap_or(defaults.reveal_mode),
        })
    }
}

fn geometry(field: &'static str, value: Option<f32>, default: f32) -> StyleResult<f32> {
    match value {
        None => Ok(default),
        Some(v) if v.is_finite() && v >= 0.0 => Ok(v),
        Some(v) => Err(StyleError::InvalidGeometry { field, value: v }),
    }
}

fn color(field: &'static str, value: Option<String>, default: Color) -> StyleResult<Color> {
    match value {
        None => Ok(default),
        Some(hex) => match Color::from_hex(&hex) {
            Some(c) => Ok(c),
            None => Err(StyleError::InvalidColor { field, value: hex }),
        },
    }
}
