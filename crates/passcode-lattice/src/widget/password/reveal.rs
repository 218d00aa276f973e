//! Brief reveal of the most recently typed character.
//!
//! After each insertion the last character is shown for
//! [`CHAR_VISIBILITY_TIME`] and then masked again. Typing again before the
//! window closes restarts it, so only the final character lingers. Deleting
//! masks immediately.
//!
//! The window is a one-shot timer on the shared [`SharedTimerManager`]. The
//! machine owns at most one such timer at a time and stops it when a new one
//! starts, when the widget is detached, and when the machine is dropped.

use std::sync::Arc;
use std::time::Duration;

use passcode_lattice_core::logging::targets;
use passcode_lattice_core::{SharedTimerManager, TimerId};

/// How long a freshly typed character stays visible.
pub const CHAR_VISIBILITY_TIME: Duration = Duration::from_millis(600);

/// Snapshot of the reveal flags read by the directive builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealState {
    /// `true` masks the last character, `false` shows it.
    pub hide_last_char: bool,
}

impl Default for RevealState {
    fn default() -> Self {
        Self {
            hide_last_char: true,
        }
    }
}

/// Tracks whether the last typed character is currently revealed.
pub struct RevealStateMachine {
    timers: Arc<SharedTimerManager>,
    visibility: Duration,
    hide_last_char: bool,
    pending_hide: Option<TimerId>,
    active: bool,
}

impl RevealStateMachine {
    /// Create a machine scheduling on `timers` with the default window.
    pub fn new(timers: Arc<SharedTimerManager>) -> Self {
        Self::with_visibility(timers, CHAR_VISIBILITY_TIME)
    }

    /// Create a machine with a custom visibility window.
    pub fn with_visibility(timers: Arc<SharedTimerManager>, visibility: Duration) -> Self {
        Self {
            timers,
            visibility,
            hide_last_char: true,
            pending_hide: None,
            active: true,
        }
    }

    /// Current flags.
    pub fn state(&self) -> RevealState {
        RevealState {
            hide_last_char: self.hide_last_char,
        }
    }

    /// Whether the last character is masked.
    pub fn hide_last_char(&self) -> bool {
        self.hide_last_char
    }

    /// The pending hide timer, if any.
    pub fn pending_hide(&self) -> Option<TimerId> {
        self.pending_hide
    }

    /// The visibility window.
    pub fn visibility(&self) -> Duration {
        self.visibility
    }

    /// Change the visibility window. Applies from the next insertion.
    pub fn set_visibility(&mut self, visibility: Duration) {
        self.visibility = visibility;
    }

    /// The timer manager this machine schedules on.
    pub fn timers(&self) -> &Arc<SharedTimerManager> {
        &self.timers
    }

    /// Whether text changes may reveal characters.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Enable or disable revealing.
    ///
    /// Deactivating masks and stops the pending timer. While inactive every
    /// text change leaves the last character masked.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        if !active {
            self.cancel();
            self.hide_last_char = true;
        }
    }

    /// React to the text length changing from `previous_len` to `new_len`.
    ///
    /// A growing text reveals its last character and (re)starts the hide
    /// timer. Anything else masks immediately and stops the timer.
    pub fn on_text_changed(&mut self, new_len: usize, previous_len: usize) {
        if !self.active || new_len <= previous_len {
            self.hide_last_char = true;
            self.cancel();
            tracing::debug!(
                target: targets::PASSWORD,
                new_len,
                previous_len,
                "masking last character"
            );
            return;
        }

        self.cancel();
        self.hide_last_char = false;
        let id = self.timers.start_one_shot(self.visibility);
        self.pending_hide = Some(id);
        tracing::debug!(
            target: targets::PASSWORD,
            new_len,
            ?id,
            "revealing last character"
        );
    }

    /// Switch permanent reveal mode on or off.
    ///
    /// Either way the last character is masked and any pending hide is
    /// dropped; the next insertion decides again.
    pub fn set_reveal_mode(&mut self, on: bool) {
        self.hide_last_char = true;
        self.cancel();
        tracing::debug!(target: targets::PASSWORD, on, "reveal mode changed");
    }

    /// Handle a fired timer.
    ///
    /// Returns `true` when `id` is this machine's pending hide, in which case
    /// the last character is now masked and the caller should repaint.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if self.pending_hide != Some(id) {
            return false;
        }
        self.pending_hide = None;
        self.hide_last_char = true;
        tracing::debug!(target: targets::PASSWORD, ?id, "reveal window elapsed");
        true
    }

    /// Stop the pending hide timer, if any.
    pub fn cancel(&mut self) {
        let Some(id) = self.pending_hide.take() else {
            return;
        };
        if self.timers.stop(id).is_err() {
            // Already fired; the host has not delivered it yet.
            tracing::trace!(target: targets::PASSWORD, ?id, "hide timer already fired");
        }
    }
}

impl Drop for RevealStateMachine {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for RevealStateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevealStateMachine")
            .field("hide_last_char", &self.hide_last_char)
            .field("pending_hide", &self.pending_hide)
            .field("visibility", &self.visibility)
            .field("active", &self.active)
            .finish()
    }
}
