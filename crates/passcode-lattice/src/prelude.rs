//! Commonly used types, for glob import.
//!
//! ```
//! use passcode_lattice::prelude::*;
//! ```

pub use passcode_lattice_core::{ManualClock, SharedTimerManager, Signal, SystemClock, TimerId};
pub use passcode_lattice_render::{
    Color, Font, FontFamily, FontMetricsProvider, Point, RecordingRenderer, Renderer,
    SimpleFontMetrics, Size,
};

pub use crate::error::StyleError;
pub use crate::widget::password::{CHAR_VISIBILITY_TIME, DrawDirective, LayoutResult, PasswordStyle};
pub use crate::widget::widgets::{PasswordEdit, PasswordInput};
pub use crate::widget::{DigitFilter, InputFilter, SizeConstraint};
