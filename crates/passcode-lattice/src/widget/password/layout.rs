//! Sizing math for the slot row.
//!
//! The row is `slot_count` circles separated by the slot margin, with room
//! for the outline stroke on both ends. Its height fits either one circle plus
//! its stroke or one line of glyph text, whichever is taller.
//!
//! When the host grants more width than the row needs, every slot is shifted
//! right by [`centering_offset`] so the row sits in the middle.

use passcode_lattice_render::FontMetricsProvider;

use super::style::PasswordStyle;
use crate::widget::geometry::SizeConstraint;

/// The outcome of measuring a password row.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutResult {
    /// Final width in pixels.
    pub width: u32,
    /// Final height in pixels.
    pub height: u32,
    /// Horizontal shift applied to every slot center.
    pub centering_offset: f32,
}

/// Desired width of the row, before truncation to whole pixels.
fn desired_width(style: &PasswordStyle) -> f32 {
    let count = style.slot_count();
    if count == 0 {
        return 0.0;
    }
    let count = count as f32;
    count * style.circle_diameter()
        + (count - 1.0) * style.slot_margin()
        + 2.0 * style.circle_border_width()
}

/// Compute the size the row would like to have, in whole pixels.
///
/// Fractional sizes are truncated toward zero. Negative geometry saturates to
/// zero.
pub fn desired_size(style: &PasswordStyle, metrics: &dyn FontMetricsProvider) -> (u32, u32) {
    let circle_box = style.circle_diameter() + 2.0 * style.circle_border_width();
    let text_box = metrics.line_metrics(style.glyph_font()).line_height();
    let height = circle_box.max(text_box);

    (desired_width(style) as u32, height as u32)
}

/// Horizontal shift that centers the row inside `actual_width`.
///
/// Zero when the row does not fit, so the row starts at the left edge and the
/// overflow is clipped.
pub fn centering_offset(desired_width: u32, actual_width: u32, border_width: f32) -> f32 {
    if actual_width < desired_width {
        0.0
    } else {
        (actual_width - desired_width) as f32 / 2.0 + border_width
    }
}

/// Measure the row against the host's constraints.
pub fn measure(
    style: &PasswordStyle,
    metrics: &dyn FontMetricsProvider,
    width: SizeConstraint,
    height: SizeConstraint,
) -> LayoutResult {
    let (desired_width, desired_height) = desired_size(style, metrics);
    let width = width.resolve(desired_width);
    let height = height.resolve(desired_height);

    LayoutResult {
        width,
        height,
        centering_offset: centering_offset(desired_width, width, style.circle_border_width()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use passcode_lattice_render::{Font, FontFamily, SimpleFontMetrics};

    #[test]
    fn test_desired_width_formula() {
        for count in 1..=10usize {
            let style = PasswordStyle::default().with_slot_count(count);
            let (width, _) = desired_size(&style, &SimpleFontMetrics);
            let n = count as u32;
            assert_eq!(width, n * 16 + (n - 1) * 16 + 4, "slot_count = {count}");
        }
    }

    #[test]
    fn test_default_size() {
        // 6 * 16 + 5 * 16 + 2 * 2
        let (width, height) = desired_size(&PasswordStyle::default(), &SimpleFontMetrics);
        assert_eq!(width, 180);
        // A 20px font line (20) is taller than the circle box (16 + 4).
        assert_eq!(height, 20);
    }

    #[test]
    fn test_zero_slots_has_zero_width() {
        let style = PasswordStyle::default().with_slot_count(0);
        let (width, _) = desired_size(&style, &SimpleFontMetrics);
        assert_eq!(width, 0);
    }

    #[test]
    fn test_height_uses_circle_when_taller() {
        let style = PasswordStyle::default()
            .with_circle_radius(15.0)
            .with_glyph_font(Font::new(FontFamily::SansSerif, 10.0));
        let (_, height) = desired_size(&style, &SimpleFontMetrics);
        assert_eq!(height, 34);
    }

    #[test]
    fn test_fractional_sizes_truncate() {
        let style = PasswordStyle::default()
            .with_slot_count(1)
            .with_circle_radius(4.75)
            .with_circle_border_width(0.3)
            .with_glyph_font(Font::new(FontFamily::SansSerif, 5.0));
        // 9.5 + 0.6 = 10.1
        assert_eq!(desired_size(&style, &SimpleFontMetrics), (10, 10));
    }

    #[test]
    fn test_centering_offset() {
        assert_eq!(centering_offset(180, 300, 2.0), 62.0);
        assert_eq!(centering_offset(180, 181, 2.0), 2.5);
        assert_eq!(centering_offset(180, 180, 2.0), 2.0);
        assert_eq!(centering_offset(180, 100, 2.0), 0.0);
    }

    #[test]
    fn test_measure_exact() {
        let result = measure(
            &PasswordStyle::default(),
            &SimpleFontMetrics,
            SizeConstraint::Exact(300),
            SizeConstraint::Exact(48),
        );
        assert_eq!(
            result,
            LayoutResult {
                width: 300,
                height: 48,
                centering_offset: 62.0,
            }
        );
    }

    #[test]
    fn test_measure_at_most_clips() {
        let result = measure(
            &PasswordStyle::default(),
            &SimpleFontMetrics,
            SizeConstraint::AtMost(120),
            SizeConstraint::AtMost(100),
        );
        assert_eq!(result.width, 120);
        assert_eq!(result.height, 20);
        assert_eq!(result.centering_offset, 0.0);
    }

    #[test]
    fn test_measure_unconstrained() {
        let result = measure(
            &PasswordStyle::default(),
            &SimpleFontMetrics,
            SizeConstraint::Unconstrained,
            SizeConstraint::Unconstrained,
        );
        assert_eq!(result.width, 180);
        assert_eq!(result.height, 20);
        assert_eq!(result.centering_offset, 2.0);
    }
}
