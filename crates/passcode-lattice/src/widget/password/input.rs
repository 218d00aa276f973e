//! Text buffer, filtering and caret rules of a password row.
//!
//! The controller owns the entered text. Every edit goes through the
//! installed [`InputFilter`]s (host filters first, then the length filter),
//! and every change that survives is reported to the
//! [`RevealStateMachine`]. The caret is pinned to the end of the text.

use passcode_lattice_core::logging::targets;
use unicode_segmentation::UnicodeSegmentation;

use super::reveal::RevealStateMachine;
use crate::widget::input_filter::{InputFilter, LengthFilter, char_count};

/// A caret or selection range in character positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// A collapsed caret at `pos`.
    pub fn caret(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }
}

/// The outcome of a selection request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    /// The request already matched the caret at the end.
    Accepted(Selection),
    /// The request was replaced by the caret at the end.
    Overridden {
        requested: Selection,
        applied: Selection,
    },
}

impl SelectionChange {
    /// The selection now in effect.
    pub fn applied(&self) -> Selection {
        match *self {
            Self::Accepted(selection) => selection,
            Self::Overridden { applied, .. } => applied,
        }
    }
}

/// A text change that went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextChange {
    /// Character count before the change.
    pub previous_len: usize,
    /// Character count after the change.
    pub new_len: usize,
}

impl TextChange {
    /// Whether the text grew.
    pub fn is_insertion(&self) -> bool {
        self.new_len > self.previous_len
    }
}

/// Owns the text of a password row and enforces its input rules.
pub struct InputController {
    text: String,
    len: usize,
    selection: Selection,
    last_change_was_insertion: bool,
    length_filter: LengthFilter,
    filters: Vec<Box<dyn InputFilter>>,
    reveal: RevealStateMachine,
}

impl InputController {
    /// Create an empty controller accepting at most `max_len` characters.
    pub fn new(max_len: usize, reveal: RevealStateMachine) -> Self {
        Self {
            text: String::new(),
            len: 0,
            selection: Selection::default(),
            last_change_was_insertion: false,
            length_filter: LengthFilter::new(max_len),
            filters: Vec::new(),
            reveal,
        }
    }

    /// The entered text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of entered characters.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing is entered.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The current selection. Always a caret at the end.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Whether the last change added characters.
    pub fn last_change_was_insertion(&self) -> bool {
        self.last_change_was_insertion
    }

    /// Maximum accepted character count.
    pub fn max_len(&self) -> usize {
        self.length_filter.max()
    }

    /// The reveal state machine fed by this controller.
    pub fn reveal(&self) -> &RevealStateMachine {
        &self.reveal
    }

    /// Mutable access to the reveal state machine.
    pub fn reveal_mut(&mut self) -> &mut RevealStateMachine {
        &mut self.reveal
    }

    /// Install a filter that runs before the length filter.
    pub fn add_filter(&mut self, filter: impl InputFilter + 'static) {
        self.filters.push(Box::new(filter));
    }

    /// Change the maximum length.
    ///
    /// Text that no longer fits is cut to the new maximum through the normal
    /// change path, which is reported as the returned change.
    pub fn set_max_len(&mut self, max_len: usize) -> Option<TextChange> {
        self.length_filter = LengthFilter::new(max_len);
        if self.len <= max_len {
            return None;
        }
        let cut = self
            .text
            .grapheme_indices(true)
            .nth(max_len)
            .map_or(self.text.len(), |(i, _)| i);
        let truncated = self.text[..cut].to_string();
        Some(self.on_text_changed(truncated))
    }

    /// Append typed or pasted text.
    ///
    /// Returns `None` when the filters let nothing through; the state is then
    /// left exactly as it was.
    pub fn insert(&mut self, inserted: &str) -> Option<TextChange> {
        let accepted = self.filtered(&self.text, inserted);
        if accepted.is_empty() {
            tracing::trace!(
                target: targets::PASSWORD,
                len = self.len,
                max = self.max_len(),
                "input rejected"
            );
            return None;
        }
        let mut text = self.text.clone();
        text.push_str(&accepted);
        Some(self.on_text_changed(text))
    }

    /// Remove the last character.
    pub fn backspace(&mut self) -> Option<TextChange> {
        let (last, _) = self.text.grapheme_indices(true).next_back()?;
        let text = self.text[..last].to_string();
        Some(self.on_text_changed(text))
    }

    /// Replace the whole text, filtered like typed input.
    ///
    /// Returns `None` when the filtered text equals the current text.
    pub fn replace(&mut self, text: &str) -> Option<TextChange> {
        let accepted = self.filtered("", text);
        if accepted == self.text {
            return None;
        }
        Some(self.on_text_changed(accepted))
    }

    /// Remove all text.
    pub fn clear(&mut self) -> Option<TextChange> {
        if self.text.is_empty() {
            return None;
        }
        Some(self.on_text_changed(String::new()))
    }

    /// Handle a request to move the caret or select a range.
    ///
    /// Anything but a caret at the end is replaced by one.
    pub fn request_selection(&mut self, start: usize, end: usize) -> SelectionChange {
        let requested = Selection { start, end };
        let applied = Selection::caret(self.len);
        self.selection = applied;

        if requested == applied {
            SelectionChange::Accepted(applied)
        } else {
            tracing::trace!(
                target: targets::PASSWORD,
                start,
                end,
                caret = self.len,
                "selection overridden"
            );
            SelectionChange::Overridden { requested, applied }
        }
    }

    /// Switch permanent reveal mode and re-pin the caret.
    ///
    /// Changing the masking asks for a selection of the whole text, which the
    /// caret rule then collapses back to the end.
    pub fn set_reveal_mode(&mut self, on: bool) -> SelectionChange {
        self.reveal.set_reveal_mode(on);
        self.request_selection(0, self.len)
    }

    fn filtered(&self, current: &str, inserted: &str) -> String {
        let mut accepted = inserted.to_string();
        for filter in &self.filters {
            accepted = filter.filter(current, &accepted).into_owned();
        }
        self.length_filter.filter(current, &accepted).into_owned()
    }

    fn on_text_changed(&mut self, text: String) -> TextChange {
        let change = TextChange {
            previous_len: self.len,
            new_len: char_count(&text),
        };
        self.text = text;
        self.len = change.new_len;
        self.last_change_was_insertion = change.is_insertion();

        self.reveal.on_text_changed(change.new_len, change.previous_len);
        self.selection = Selection::caret(self.len);
        change
    }
}

impl std::fmt::Debug for InputController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the entered text.
        f.debug_struct("InputController")
            .field("len", &self.len)
            .field("max_len", &self.max_len())
            .field("selection", &self.selection)
            .field("filters", &self.filters.len())
            .field("reveal", &self.reveal)
            .finish()
    }
}
