//! The password engine: style, layout math, reveal timing, input rules and
//! per-slot draw directives.
//!
//! These pieces are independent of any widget and can be driven directly;
//! [`PasswordEdit`](crate::widget::widgets::PasswordEdit) wires them together.

mod directive;
mod input;
pub mod layout;
mod reveal;
mod style;

pub use directive::{
    DrawDirective, SlotKind, build_directives, paint_directives, slot_center_x, slot_kind,
};
pub use input::{InputController, Selection, SelectionChange, TextChange};
pub use layout::LayoutResult;
pub use reveal::{CHAR_VISIBILITY_TIME, RevealState, RevealStateMachine};
pub use style::{
    DEFAULT_CIRCLE_BORDER_WIDTH, DEFAULT_CIRCLE_RADIUS, DEFAULT_GLYPH_SIZE, DEFAULT_SLOT_COUNT,
    DEFAULT_SLOT_MARGIN, PasswordStyle,
};
