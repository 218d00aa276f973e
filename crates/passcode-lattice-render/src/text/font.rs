//! Font representation and configuration.

/// Font weight, typically ranging from 100 (thin) to 900 (black).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Light weight (300).
    pub const LIGHT: Self = Self(300);
    /// Normal/regular weight (400).
    pub const NORMAL: Self = Self(400);
    /// Medium weight (500).
    pub const MEDIUM: Self = Self(500);
    /// Bold weight (700).
    pub const BOLD: Self = Self(700);

    /// Create a font weight from a numeric value (100-900).
    pub fn new(weight: u16) -> Self {
        Self(weight.clamp(100, 900))
    }

    /// Get the numeric weight value.
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// A font family, named or generic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A specific font family by name.
    Name(String),
    /// Generic serif family.
    Serif,
    /// Generic sans-serif family.
    SansSerif,
    /// Generic monospace family.
    Monospace,
}

impl FontFamily {
    /// Create a named font family.
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Parse a family from a style value.
    ///
    /// The generic keywords (`serif`, `sans-serif`, `monospace`) map to the
    /// generic families; anything else is taken as a family name.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "serif" => Self::Serif,
            "sans-serif" | "sans" => Self::SansSerif,
            "monospace" | "mono" => Self::Monospace,
            _ => Self::Name(value.trim().to_string()),
        }
    }
}

/// A font description: family, pixel size and weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    /// The font family.
    family: FontFamily,
    /// Font size in pixels.
    size: f32,
    /// Font weight.
    weight: FontWeight,
}

impl Font {
    /// Create a new font with the given family and size.
    pub fn new(family: FontFamily, size: f32) -> Self {
        Self {
            family,
            size,
            weight: FontWeight::NORMAL,
        }
    }

    /// Set the weight using builder pattern.
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// The font family.
    pub fn family(&self) -> &FontFamily {
        &self.family
    }

    /// The font size in pixels.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// The font weight.
    pub fn weight(&self) -> FontWeight {
        self.weight
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(FontFamily::SansSerif, 14.0)
    }
}
