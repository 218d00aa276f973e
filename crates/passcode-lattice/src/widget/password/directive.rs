//! Per-slot draw directives.
//!
//! Each redraw turns the current text, reveal flags and layout into one
//! [`DrawDirective`] per slot. [`paint_directives`] then executes them on a
//! [`Renderer`].

use passcode_lattice_render::{FontMetricsProvider, Point, Renderer, Stroke};
use unicode_segmentation::UnicodeSegmentation;

use super::layout::LayoutResult;
use super::reveal::RevealState;
use super::style::PasswordStyle;

/// What to draw in one slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawDirective<'a> {
    /// A solid circle: an entered, masked character.
    FilledCircle { center: Point },
    /// An outlined circle: an empty slot.
    OutlinedCircle { center: Point },
    /// The character itself, centered on the slot.
    Glyph { glyph: &'a str, center: Point },
}

impl DrawDirective<'_> {
    /// The slot center this directive draws around.
    pub fn center(&self) -> Point {
        match *self {
            Self::FilledCircle { center }
            | Self::OutlinedCircle { center }
            | Self::Glyph { center, .. } => center,
        }
    }
}

/// How one slot is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Glyph,
    Filled,
    Outlined,
}

/// Decide how slot `index` is shown when `text_len` characters are entered.
///
/// In reveal mode every entered character is a glyph. Otherwise only the
/// last one is, and only while it is not hidden. Remaining entered slots are
/// filled and the rest outlined.
pub fn slot_kind(index: usize, text_len: usize, reveal_mode: bool, reveal: RevealState) -> SlotKind {
    if index >= text_len {
        SlotKind::Outlined
    } else if reveal_mode || (index + 1 == text_len && !reveal.hide_last_char) {
        SlotKind::Glyph
    } else {
        SlotKind::Filled
    }
}

/// Horizontal center of slot `index`.
pub fn slot_center_x(style: &PasswordStyle, index: usize, centering_offset: f32) -> f32 {
    let i = index as f32;
    i * style.circle_diameter() + i * style.slot_margin() + style.circle_radius() + centering_offset
}

/// Build the directives for every slot.
///
/// `area_height` is the height of the drawing area; slots are centered on
/// its vertical midpoint.
pub fn build_directives<'a>(
    style: &PasswordStyle,
    text: &'a str,
    reveal: RevealState,
    layout: &LayoutResult,
    area_height: f32,
) -> Vec<DrawDirective<'a>> {
    let glyphs: Vec<&'a str> = text.graphemes(true).collect();
    let center_y = area_height / 2.0;

    (0..style.slot_count())
        .map(|i| {
            let center = Point::new(slot_center_x(style, i, layout.centering_offset), center_y);
            match slot_kind(i, glyphs.len(), style.reveal_mode(), reveal) {
                SlotKind::Glyph => DrawDirective::Glyph {
                    glyph: glyphs[i],
                    center,
                },
                SlotKind::Filled => DrawDirective::FilledCircle { center },
                SlotKind::Outlined => DrawDirective::OutlinedCircle { center },
            }
        })
        .collect()
}

/// Execute directives on a renderer.
///
/// Glyphs are placed so the center of their ink box lands on the slot
/// center.
pub fn paint_directives<R: Renderer>(
    directives: &[DrawDirective<'_>],
    style: &PasswordStyle,
    metrics: &dyn FontMetricsProvider,
    renderer: &mut R,
) {
    let radius = style.circle_radius();
    let outline = Stroke::new(style.circle_color(), style.circle_border_width());

    for directive in directives {
        match *directive {
            DrawDirective::FilledCircle { center } => {
                renderer.fill_circle(center, radius, style.circle_color());
            }
            DrawDirective::OutlinedCircle { center } => {
                renderer.stroke_circle(center, radius, &outline);
            }
            DrawDirective::Glyph { glyph, center } => {
                let font = style.glyph_font();
                let ink = metrics.glyph_bounds(font, glyph).center();
                let origin = Point::new(center.x - ink.x, center.y - ink.y);
                renderer.draw_text(glyph, origin, font, style.glyph_color());
            }
        }
    }
}
