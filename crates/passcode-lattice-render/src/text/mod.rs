//! Fonts and font metrics.

mod font;
mod metrics;

pub use font::{Font, FontFamily, FontWeight};
pub use metrics::{FontMetrics, FontMetricsProvider, SimpleFontMetrics, TtfFontMetrics};
