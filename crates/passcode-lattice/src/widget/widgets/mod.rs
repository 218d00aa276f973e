//! Concrete widgets.

mod password_edit;
mod password_input;

pub use password_edit::PasswordEdit;
pub use password_input::PasswordInput;
