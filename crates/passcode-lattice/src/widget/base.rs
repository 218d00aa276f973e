//! Widget base implementation.
//!
//! `WidgetBase` carries the state every widget shares with its host: the size
//! it was laid out at, whether it is attached to a display tree, and whether
//! it needs a repaint or a new layout. Widgets hold it as a field and call
//! [`update`](WidgetBase::update) or
//! [`request_layout`](WidgetBase::request_layout) when their content changes.

use passcode_lattice_core::Signal;
use passcode_lattice_render::Size;

/// The base implementation for widgets.
pub struct WidgetBase {
    /// Size the widget was last measured or painted at.
    size: Size,

    /// Whether the widget is part of a display tree.
    attached: bool,

    /// Whether the widget needs to be repainted.
    needs_repaint: bool,

    /// Whether the widget needs to be measured again.
    needs_layout: bool,

    /// Signal emitted when the widget asks to be repainted.
    pub repaint_requested: Signal<()>,

    /// Signal emitted when the widget asks to be measured again.
    pub layout_requested: Signal<()>,

    /// Signal emitted when the assigned size changes.
    pub size_changed: Signal<Size>,
}

impl WidgetBase {
    /// Create a new, attached widget base.
    pub fn new() -> Self {
        Self {
            size: Size::ZERO,
            attached: true,
            needs_repaint: true,
            needs_layout: true,
            repaint_requested: Signal::new(),
            layout_requested: Signal::new(),
            size_changed: Signal::new(),
        }
    }

    /// The size the widget was last measured or painted at.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Assign the widget's size.
    pub fn set_size(&mut self, size: Size) {
        if self.size != size {
            self.size = size;
            self.needs_repaint = true;
            self.size_changed.emit(size);
        }
    }

    /// Whether the widget is part of a display tree.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub(crate) fn set_attached(&mut self, attached: bool) {
        self.attached = attached;
    }

    /// Check if the widget needs repainting.
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Schedule a repaint.
    pub fn update(&mut self) {
        self.needs_repaint = true;
        self.repaint_requested.emit(());
    }

    /// Clear the repaint flag (called after painting).
    pub(crate) fn clear_repaint_flag(&mut self) {
        self.needs_repaint = false;
    }

    /// Check if the widget needs to be measured again.
    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// Ask the host to measure the widget again.
    pub fn request_layout(&mut self) {
        self.needs_layout = true;
        self.layout_requested.emit(());
    }

    /// Clear the layout flag (called after measuring).
    pub(crate) fn clear_layout_flag(&mut self) {
        self.needs_layout = false;
    }
}

impl Default for WidgetBase {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for WidgetBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetBase")
            .field("size", &self.size)
            .field("attached", &self.attached)
            .field("needs_repaint", &self.needs_repaint)
            .field("needs_layout", &self.needs_layout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_update_emits() {
        let mut base = WidgetBase::new();
        base.clear_repaint_flag();
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        base.repaint_requested.connect(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        base.update();
        assert!(base.needs_repaint());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_layout_flag() {
        let mut base = WidgetBase::new();
        assert!(base.needs_layout());
        base.clear_layout_flag();
        assert!(!base.needs_layout());
        base.request_layout();
        assert!(base.needs_layout());
    }

    #[test]
    fn test_set_size_marks_dirty() {
        let mut base = WidgetBase::new();
        base.clear_repaint_flag();
        base.set_size(Size::new(10.0, 5.0));
        assert!(base.needs_repaint());
        assert_eq!(base.size(), Size::new(10.0, 5.0));
    }
}
