//! Input filters for text widgets.
//!
//! A filter sits between the keyboard (or paste, or programmatic insertion)
//! and a widget's text buffer. It sees the current contents and the text about
//! to be inserted at the end, and returns what should actually be inserted:
//! the input unchanged, a trimmed version of it, or nothing at all.
//!
//! Filters never report errors. Refused input simply does not arrive.
//!
//! # Built-in Filters
//!
//! - [`LengthFilter`]: Caps the buffer at a number of characters
//! - [`DigitFilter`]: Drops everything that is not an ASCII digit
//!
//! Characters are counted as extended grapheme clusters.
//!
//! # Example
//!
//! ```
//! use passcode_lattice::widget::input_filter::{InputFilter, LengthFilter};
//!
//! let filter = LengthFilter::new(6);
//! assert_eq!(filter.filter("1234", "5678"), "56");
//! assert_eq!(filter.filter("123456", "7"), "");
//! ```

use std::borrow::Cow;
use std::sync::Arc;

use unicode_segmentation::UnicodeSegmentation;

/// Count characters the way text widgets do.
#[inline]
pub fn char_count(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Trait for input filters.
///
/// Filters must be `Send + Sync` so the widgets owning them are too.
pub trait InputFilter: Send + Sync {
    /// Decide what part of `inserted` may be appended to `current`.
    ///
    /// Return `Cow::Borrowed(inserted)` to accept it as is, a shorter or
    /// rewritten string to accept part of it, or an empty string to refuse it.
    fn filter<'a>(&self, current: &str, inserted: &'a str) -> Cow<'a, str>;
}

// Allow using Arc<dyn InputFilter> as an InputFilter
impl<F: InputFilter + ?Sized> InputFilter for Arc<F> {
    fn filter<'a>(&self, current: &str, inserted: &'a str) -> Cow<'a, str> {
        (**self).filter(current, inserted)
    }
}

// Allow using Box<dyn InputFilter> as an InputFilter
impl<F: InputFilter + ?Sized> InputFilter for Box<F> {
    fn filter<'a>(&self, current: &str, inserted: &'a str) -> Cow<'a, str> {
        (**self).filter(current, inserted)
    }
}

/// Refuses characters beyond a maximum count.
///
/// When an insertion only partly fits, the prefix that fits is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthFilter {
    max: usize,
}

impl LengthFilter {
    /// Create a filter capping text at `max` characters.
    pub fn new(max: usize) -> Self {
        Self { max }
    }

    /// The maximum character count.
    pub fn max(&self) -> usize {
        self.max
    }
}

impl InputFilter for LengthFilter {
    fn filter<'a>(&self, current: &str, inserted: &'a str) -> Cow<'a, str> {
        let room = self.max.saturating_sub(char_count(current));
        if room == 0 {
            return Cow::Borrowed("");
        }

        match inserted.grapheme_indices(true).nth(room) {
            Some((cut, _)) => Cow::Borrowed(&inserted[..cut]),
            None => Cow::Borrowed(inserted),
        }
    }
}

/// Keeps only ASCII digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DigitFilter;

impl InputFilter for DigitFilter {
    fn filter<'a>(&self, _current: &str, inserted: &'a str) -> Cow<'a, str> {
        if inserted.bytes().all(|b| b.is_ascii_digit()) {
            Cow::Borrowed(inserted)
        } else {
            Cow::Owned(inserted.chars().filter(char::is_ascii_digit).collect())
        }
    }
}
