//! Password row with an error state.
//!
//! `PasswordInput` wraps a [`PasswordEdit`] and adds the error flag a login
//! or PIN screen toggles after a failed attempt. Setting the flag clears what
//! was typed so the user starts over.

use std::sync::Arc;

use passcode_lattice_core::logging::targets;
use passcode_lattice_core::{ConnectionId, SharedTimerManager, Signal};

use super::password_edit::PasswordEdit;
use crate::widget::password::PasswordStyle;

/// A [`PasswordEdit`] with an error flag.
///
/// # Signals
///
/// - `error_changed`: Emitted when the error flag flips
pub struct PasswordInput {
    edit: PasswordEdit,
    error: bool,

    /// Signal emitted when the error flag changes.
    pub error_changed: Signal<bool>,
}

impl PasswordInput {
    /// Create a container with the default style (six slots).
    pub fn new(timers: Arc<SharedTimerManager>) -> Self {
        Self::with_style(PasswordStyle::default(), timers)
    }

    /// Create a container with a custom style.
    pub fn with_style(style: PasswordStyle, timers: Arc<SharedTimerManager>) -> Self {
        Self {
            edit: PasswordEdit::with_style(style, timers),
            error: false,
            error_changed: Signal::new(),
        }
    }

    /// The wrapped row.
    pub fn edit(&self) -> &PasswordEdit {
        &self.edit
    }

    /// The wrapped row, mutably.
    pub fn edit_mut(&mut self) -> &mut PasswordEdit {
        &mut self.edit
    }

    /// The entered text.
    pub fn text(&self) -> &str {
        self.edit.text()
    }

    /// Number of slots.
    pub fn password_length(&self) -> usize {
        self.edit.slot_count()
    }

    /// Change the number of slots.
    pub fn set_password_length(&mut self, length: usize) {
        self.edit.set_slot_count(length);
    }

    /// Whether the error flag is set.
    pub fn is_error(&self) -> bool {
        self.error
    }

    /// Record the error flag and clear the entered text.
    ///
    /// The text is cleared on every call, through the same path as a user
    /// edit, so `text_changed` listeners see the empty text.
    pub fn set_error(&mut self, error: bool) {
        let changed = self.error != error;
        self.error = error;
        let cleared = self.edit.clear();
        tracing::debug!(target: targets::PASSWORD, error, cleared, "error state set");
        if changed {
            self.error_changed.emit(error);
        }
    }

    /// Listen for text changes.
    pub fn connect_text_changed<F>(&self, listener: F) -> ConnectionId
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.edit.text_changed.connect(move |text: &String| listener(text))
    }

    /// Stop a listener added with [`connect_text_changed`](Self::connect_text_changed).
    pub fn disconnect_text_changed(&self, id: ConnectionId) -> bool {
        self.edit.text_changed.disconnect(id)
    }
}

impl std::fmt::Debug for PasswordInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordInput")
            .field("edit", &self.edit)
            .field("error", &self.error)
            .finish()
    }
}

static_assertions::assert_impl_all!(PasswordInput: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use passcode_lattice_core::ManualClock;

    fn setup() -> PasswordInput {
        let timers = Arc::new(SharedTimerManager::with_clock(Arc::new(ManualClock::new())));
        PasswordInput::new(timers)
    }

    #[test]
    fn test_default_length() {
        let input = setup();
        assert_eq!(input.password_length(), 6);
        assert!(!input.is_error());
    }

    #[test]
    fn test_error_clears_text() {
        let mut input = setup();
        let texts = Arc::new(Mutex::new(Vec::new()));
        let t = texts.clone();
        input.connect_text_changed(move |text| t.lock().push(text.to_string()));

        input.edit_mut().insert_text("1234");
        input.set_error(true);

        assert!(input.is_error());
        assert_eq!(input.text(), "");
        assert!(input.edit().hide_last_char());
        assert_eq!(*texts.lock(), vec!["1234".to_string(), String::new()]);
    }

    #[test]
    fn test_error_changed_only_on_flip() {
        let mut input = setup();
        let flips = Arc::new(Mutex::new(Vec::new()));
        let f = flips.clone();
        input.error_changed.connect(move |error| f.lock().push(*error));

        input.set_error(true);
        input.set_error(true);
        input.edit_mut().insert_text("9");
        input.set_error(false);

        assert_eq!(*flips.lock(), vec![true, false]);
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_disconnect_listener() {
        let input = setup();
        let id = input.connect_text_changed(|_| {});
        assert!(input.disconnect_text_changed(id));
        assert!(!input.disconnect_text_changed(id));
    }

    #[test]
    fn test_password_length() {
        let mut input = setup();
        input.set_password_length(4);
        assert_eq!(input.password_length(), 4);
        input.edit_mut().insert_text("123456");
        assert_eq!(input.text(), "1234");
    }
}
