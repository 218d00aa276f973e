//! Widget system.
//!
//! - [`WidgetBase`]: size, attachment and repaint/layout requests shared by
//!   every widget
//! - [`SizeConstraint`]: what a parent offers a widget when measuring it
//! - [`input_filter`]: filters applied to typed text
//! - [`password`]: the password engine
//! - [`widgets`]: [`PasswordEdit`](widgets::PasswordEdit) and
//!   [`PasswordInput`](widgets::PasswordInput)

mod base;
mod geometry;
pub mod input_filter;
pub mod password;
pub mod widgets;

pub use base::WidgetBase;
pub use geometry::SizeConstraint;
pub use input_filter::{DigitFilter, InputFilter, LengthFilter};
