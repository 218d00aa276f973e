//! Masked numeric password entry.
//!
//! `PasswordEdit` draws a row of slots, one per allowed character. Empty slots
//! are outlined circles and entered characters are filled circles. The
//! character just typed is shown for a moment before it is masked, and a
//! permanent reveal mode shows every character.
//!
//! # Host Integration
//!
//! The widget does not own an event loop. The host:
//!
//! - forwards edits ([`insert_text`](PasswordEdit::insert_text),
//!   [`backspace`](PasswordEdit::backspace)) and selection requests,
//! - measures it with [`measure`](PasswordEdit::measure), which records the
//!   resolved size on the widget base,
//! - drives the shared timer manager and hands fired ids to
//!   [`timer_event`](PasswordEdit::timer_event),
//! - calls [`paint`](PasswordEdit::paint) when a repaint was requested.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use passcode_lattice::prelude::*;
//!
//! let clock = Arc::new(ManualClock::new());
//! let timers = Arc::new(SharedTimerManager::with_clock(clock.clone()));
//! let mut edit = PasswordEdit::new(timers.clone());
//!
//! edit.insert_text("4");
//! assert!(!edit.hide_last_char());
//!
//! clock.advance(Duration::from_millis(600));
//! for id in timers.process_expired() {
//!     edit.timer_event(id);
//! }
//! assert!(edit.hide_last_char());
//! ```

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use passcode_lattice_core::logging::targets;
use passcode_lattice_core::{SharedTimerManager, Signal, TimerId};
use passcode_lattice_render::{FontMetricsProvider, Renderer, Size};

use crate::widget::base::WidgetBase;
use crate::widget::geometry::SizeConstraint;
use crate::widget::input_filter::InputFilter;
use crate::widget::password::{
    DrawDirective, InputController, LayoutResult, PasswordStyle, RevealState,
    RevealStateMachine, Selection, SelectionChange, TextChange, build_directives, layout,
    paint_directives,
};

/// The last measurement and what it was measured for.
#[derive(Debug, Clone, Copy)]
struct CachedLayout {
    slot_count: usize,
    width: SizeConstraint,
    height: SizeConstraint,
    result: LayoutResult,
}

/// A masked row of password slots.
///
/// # Signals
///
/// - `text_changed`: Emitted with the new text whenever it changes
/// - `repaint_requested` and `layout_requested` on the
///   [`widget_base`](Self::widget_base)
pub struct PasswordEdit {
    /// Widget base for common functionality.
    base: WidgetBase,

    /// Appearance and slot count.
    style: PasswordStyle,

    /// Text, caret and reveal state.
    input: InputController,

    /// Last measurement.
    cached_layout: RwLock<Option<CachedLayout>>,

    /// Signal emitted when the text changes.
    pub text_changed: Signal<String>,
}

impl PasswordEdit {
    /// Create a widget with the default style.
    pub fn new(timers: Arc<SharedTimerManager>) -> Self {
        Self::with_style(PasswordStyle::default(), timers)
    }

    /// Create a widget with a custom style.
    pub fn with_style(style: PasswordStyle, timers: Arc<SharedTimerManager>) -> Self {
        let input = InputController::new(style.slot_count(), RevealStateMachine::new(timers));
        Self {
            base: WidgetBase::new(),
            style,
            input,
            cached_layout: RwLock::new(None),
            text_changed: Signal::new(),
        }
    }

    /// Set how long a typed character stays visible, using builder pattern.
    pub fn with_visibility_time(mut self, visibility: Duration) -> Self {
        self.input.reveal_mut().set_visibility(visibility);
        self
    }

    /// Install an extra input filter, using builder pattern.
    pub fn with_input_filter(mut self, filter: impl InputFilter + 'static) -> Self {
        self.input.add_filter(filter);
        self
    }

    /// Install an extra input filter. It runs before the length limit.
    pub fn add_input_filter(&mut self, filter: impl InputFilter + 'static) {
        self.input.add_filter(filter);
    }

    /// The widget base.
    pub fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    /// The widget base, mutably.
    pub fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    /// The current style.
    pub fn style(&self) -> &PasswordStyle {
        &self.style
    }

    // =========================================================================
    // Text
    // =========================================================================

    /// The entered text.
    pub fn text(&self) -> &str {
        self.input.text()
    }

    /// Number of entered characters.
    pub fn text_length(&self) -> usize {
        self.input.len()
    }

    /// Whether every slot is filled.
    pub fn is_complete(&self) -> bool {
        self.input.len() == self.style.slot_count()
    }

    /// Type or paste text at the end.
    ///
    /// Characters beyond the slot count are dropped. Returns `true` if the
    /// text changed.
    pub fn insert_text(&mut self, text: &str) -> bool {
        let change = self.input.insert(text);
        self.apply_change(change)
    }

    /// Delete the last character. Returns `true` if the text changed.
    pub fn backspace(&mut self) -> bool {
        let change = self.input.backspace();
        self.apply_change(change)
    }

    /// Replace the text, filtered like typed input.
    pub fn set_text(&mut self, text: &str) -> bool {
        let change = self.input.replace(text);
        self.apply_change(change)
    }

    /// Remove all text.
    pub fn clear(&mut self) -> bool {
        let change = self.input.clear();
        self.apply_change(change)
    }

    fn apply_change(&mut self, change: Option<TextChange>) -> bool {
        let Some(change) = change else {
            return false;
        };
        tracing::trace!(
            target: targets::PASSWORD,
            previous_len = change.previous_len,
            new_len = change.new_len,
            "text changed"
        );
        self.text_changed.emit(self.input.text().to_string());
        self.base.update();
        true
    }

    // =========================================================================
    // Caret
    // =========================================================================

    /// The caret. Always at the end of the text.
    pub fn selection(&self) -> Selection {
        self.input.selection()
    }

    /// Ask to move the caret or select a range.
    ///
    /// The caret always stays at the end; other requests are overridden.
    pub fn request_selection(&mut self, start: usize, end: usize) -> SelectionChange {
        self.input.request_selection(start, end)
    }

    // =========================================================================
    // Properties
    // =========================================================================

    /// Number of slots.
    pub fn slot_count(&self) -> usize {
        self.style.slot_count()
    }

    /// Change the number of slots.
    ///
    /// The length limit follows the new count. Text longer than the new count
    /// is truncated and reported through `text_changed`. A new layout is
    /// requested.
    pub fn set_slot_count(&mut self, count: usize) {
        if self.style.slot_count() == count {
            return;
        }
        tracing::debug!(
            target: targets::PASSWORD,
            from = self.style.slot_count(),
            to = count,
            "slot count changed"
        );
        self.style.set_slot_count(count);
        let change = self.input.set_max_len(count);
        self.invalidate_layout();
        self.base.request_layout();
        if !self.apply_change(change) {
            self.base.update();
        }
    }

    /// Whether every character is shown.
    pub fn reveal_mode(&self) -> bool {
        self.style.reveal_mode()
    }

    /// Show or mask every character.
    ///
    /// The last character is masked, any pending hide is dropped, the caret
    /// is pinned to the end again and a repaint is requested.
    pub fn set_reveal_mode(&mut self, on: bool) {
        self.style.set_reveal_mode(on);
        self.input.set_reveal_mode(on);
        self.base.update();
    }

    /// Whether the last character is masked.
    pub fn hide_last_char(&self) -> bool {
        self.input.reveal().hide_last_char()
    }

    /// The reveal flags.
    pub fn reveal_state(&self) -> RevealState {
        self.input.reveal().state()
    }

    /// The pending hide timer, if any.
    pub fn pending_hide(&self) -> Option<TimerId> {
        self.input.reveal().pending_hide()
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Whether the widget is part of a display tree.
    pub fn is_attached(&self) -> bool {
        self.base.is_attached()
    }

    /// Mark the widget as shown. Typed characters are revealed again.
    pub fn attach(&mut self) {
        self.base.set_attached(true);
        self.input.reveal_mut().set_active(true);
    }

    /// Mark the widget as hidden.
    ///
    /// Stops the pending hide timer and masks the last character. Text
    /// changes while detached stay masked.
    pub fn detach(&mut self) {
        let was_revealing = !self.hide_last_char();
        self.base.set_attached(false);
        self.input.reveal_mut().set_active(false);
        if was_revealing {
            self.base.update();
        }
    }

    /// Handle a fired timer.
    ///
    /// Returns `true` if the timer belonged to this widget; a repaint has then
    /// been requested.
    pub fn timer_event(&mut self, id: TimerId) -> bool {
        if self.input.reveal_mut().on_timer(id) {
            self.base.update();
            true
        } else {
            false
        }
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Measure the widget against the host's constraints.
    ///
    /// The result is cached until the slot count or the constraints change.
    /// The resolved size becomes the widget's [`size`](WidgetBase::size).
    pub fn measure(
        &mut self,
        metrics: &dyn FontMetricsProvider,
        width: SizeConstraint,
        height: SizeConstraint,
    ) -> LayoutResult {
        let result = self.layout_for(metrics, width, height);
        self.base
            .set_size(Size::new(result.width as f32, result.height as f32));
        self.base.clear_layout_flag();
        result
    }

    /// The last measurement, if still valid.
    pub fn cached_layout(&self) -> Option<LayoutResult> {
        self.cached_layout.read().as_ref().map(|cache| cache.result)
    }

    fn layout_for(
        &self,
        metrics: &dyn FontMetricsProvider,
        width: SizeConstraint,
        height: SizeConstraint,
    ) -> LayoutResult {
        let mut cached = self.cached_layout.write();
        if let Some(cache) = *cached {
            if cache.slot_count == self.style.slot_count()
                && cache.width == width
                && cache.height == height
            {
                return cache.result;
            }
        }

        let result = layout::measure(&self.style, metrics, width, height);
        *cached = Some(CachedLayout {
            slot_count: self.style.slot_count(),
            width,
            height,
            result,
        });
        result
    }

    fn invalidate_layout(&self) {
        *self.cached_layout.write() = None;
    }

    // =========================================================================
    // Painting
    // =========================================================================

    /// The directives for painting into `area`.
    pub fn directives(
        &self,
        metrics: &dyn FontMetricsProvider,
        area: Size,
    ) -> Vec<DrawDirective<'_>> {
        let layout = self.layout_for(
            metrics,
            SizeConstraint::Exact(area.width as u32),
            SizeConstraint::Exact(area.height as u32),
        );
        build_directives(
            &self.style,
            self.input.text(),
            self.input.reveal().state(),
            &layout,
            area.height,
        )
    }

    /// Paint the slot row into `area`.
    ///
    /// `area` becomes the widget's [`size`](WidgetBase::size), so a host that
    /// paints at a size other than the measured one is reflected there.
    pub fn paint<R: Renderer>(
        &mut self,
        renderer: &mut R,
        metrics: &dyn FontMetricsProvider,
        area: Size,
    ) {
        self.base.set_size(area);
        self.base.clear_repaint_flag();
        let directives = self.directives(metrics, area);
        paint_directives(&directives, &self.style, metrics, renderer);
    }
}

impl std::fmt::Debug for PasswordEdit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordEdit")
            .field("base", &self.base)
            .field("style", &self.style)
            .field("input", &self.input)
            .finish()
    }
}

static_assertions::assert_impl_all!(PasswordEdit: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::input_filter::DigitFilter;
    use passcode_lattice_core::ManualClock;
    use passcode_lattice_render::{DrawCommand, RecordingRenderer, SimpleFontMetrics};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing_subscriber::EnvFilter;

    fn setup() -> (Arc<ManualClock>, Arc<SharedTimerManager>) {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
        let clock = Arc::new(ManualClock::new());
        let timers = Arc::new(SharedTimerManager::with_clock(clock.clone()));
        (clock, timers)
    }

    fn counter(signal: &Signal<()>) -> Arc<AtomicUsize> {
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        signal.connect(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });
        count
    }

    fn fire(timers: &SharedTimerManager, edit: &mut PasswordEdit) -> usize {
        timers
            .process_expired()
            .into_iter()
            .filter(|id| edit.timer_event(*id))
            .count()
    }

    #[test]
    fn test_defaults() {
        let (_clock, timers) = setup();
        let edit = PasswordEdit::new(timers);
        assert_eq!(edit.slot_count(), 6);
        assert!(!edit.reveal_mode());
        assert!(edit.hide_last_char());
        assert!(edit.is_attached());
        assert_eq!(edit.text(), "");
    }

    #[test]
    fn test_reveal_then_single_repaint() {
        let (clock, timers) = setup();
        let mut edit = PasswordEdit::new(timers.clone());
        let repaints = counter(&edit.widget_base().repaint_requested);

        assert!(edit.insert_text("4"));
        assert!(!edit.hide_last_char());
        assert_eq!(repaints.load(Ordering::SeqCst), 1);

        clock.advance(Duration::from_millis(600));
        assert_eq!(fire(&timers, &mut edit), 1);
        assert!(edit.hide_last_char());
        assert_eq!(repaints.load(Ordering::SeqCst), 2);

        clock.advance(Duration::from_secs(5));
        assert_eq!(fire(&timers, &mut edit), 0);
        assert_eq!(repaints.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_text_changed_signal() {
        let (_clock, timers) = setup();
        let mut edit = PasswordEdit::new(timers);
        let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let s = seen.clone();
        edit.text_changed.connect(move |text: &String| s.lock().push(text.clone()));

        edit.insert_text("12");
        edit.backspace();
        edit.clear();
        edit.clear();

        assert_eq!(*seen.lock(), vec!["12".to_string(), "1".to_string(), String::new()]);
    }

    #[test]
    fn test_seventh_digit_ignored() {
        let (_clock, timers) = setup();
        let mut edit = PasswordEdit::new(timers);
        for digit in ["1", "2", "3", "4", "5", "6"] {
            assert!(edit.insert_text(digit));
        }
        assert!(edit.is_complete());
        assert!(!edit.insert_text("7"));
        assert_eq!(edit.text(), "123456");
    }

    #[test]
    fn test_slot_count_change() {
        let (_clock, timers) = setup();
        let mut edit = PasswordEdit::new(timers);
        let layouts = counter(&edit.widget_base().layout_requested);
        edit.set_text("123456");

        edit.set_slot_count(4);
        assert_eq!(edit.text(), "1234");
        assert_eq!(layouts.load(Ordering::SeqCst), 1);
        assert!(edit.widget_base().needs_layout());

        edit.set_slot_count(4);
        assert_eq!(layouts.load(Ordering::SeqCst), 1);

        edit.set_slot_count(8);
        assert!(edit.insert_text("5678"));
        assert_eq!(edit.text(), "12345678");
    }

    #[test]
    fn test_measure_is_cached() {
        let (_clock, timers) = setup();
        let mut edit = PasswordEdit::new(timers);
        let width = SizeConstraint::Exact(300);
        let height = SizeConstraint::Unconstrained;

        let first = edit.measure(&SimpleFontMetrics, width, height);
        assert_eq!(first.width, 300);
        assert_eq!(first.centering_offset, 62.0);
        assert!(!edit.widget_base().needs_layout());
        assert_eq!(edit.cached_layout(), Some(first));

        edit.set_slot_count(3);
        assert_eq!(edit.cached_layout(), None);
        let second = edit.measure(&SimpleFontMetrics, width, height);
        // 3 * 16 + 2 * 16 + 4 = 84
        assert_eq!(second.centering_offset, (300.0 - 84.0) / 2.0 + 2.0);
    }

    #[test]
    fn test_size_follows_measure_and_paint() {
        let (_clock, timers) = setup();
        let mut edit = PasswordEdit::new(timers);
        let sizes = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let s = sizes.clone();
        edit.widget_base()
            .size_changed
            .connect(move |size| s.lock().push(*size));

        edit.measure(
            &SimpleFontMetrics,
            SizeConstraint::Exact(380),
            SizeConstraint::AtMost(64),
        );
        assert_eq!(edit.widget_base().size(), Size::new(380.0, 20.0));

        // Same constraints, same size: no second notification.
        edit.measure(
            &SimpleFontMetrics,
            SizeConstraint::Exact(380),
            SizeConstraint::AtMost(64),
        );
        assert_eq!(sizes.lock().len(), 1);

        let mut renderer = RecordingRenderer::new();
        edit.paint(&mut renderer, &SimpleFontMetrics, Size::new(200.0, 24.0));
        assert_eq!(edit.widget_base().size(), Size::new(200.0, 24.0));
        assert!(!edit.widget_base().needs_repaint());
        assert_eq!(
            *sizes.lock(),
            vec![Size::new(380.0, 20.0), Size::new(200.0, 24.0)]
        );
    }

    #[test]
    fn test_reveal_mode_toggle() {
        let (_clock, timers) = setup();
        let mut edit = PasswordEdit::new(timers.clone());
        edit.insert_text("48");
        let repaints = counter(&edit.widget_base().repaint_requested);

        edit.request_selection(0, 0);
        edit.set_reveal_mode(true);
        assert!(edit.reveal_mode());
        assert!(edit.hide_last_char());
        assert_eq!(edit.selection(), Selection::caret(2));
        assert_eq!(timers.active_count(), 0);
        assert_eq!(repaints.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_detach_masks_and_stops_timer() {
        let (_clock, timers) = setup();
        let mut edit = PasswordEdit::new(timers.clone());
        edit.insert_text("4");

        edit.detach();
        assert!(!edit.is_attached());
        assert!(edit.hide_last_char());
        assert_eq!(timers.active_count(), 0);

        edit.insert_text("8");
        assert!(edit.hide_last_char());

        edit.attach();
        edit.insert_text("2");
        assert!(!edit.hide_last_char());
    }

    #[test]
    fn test_drop_stops_timer() {
        let (_clock, timers) = setup();
        let mut edit = PasswordEdit::new(timers.clone());
        edit.insert_text("4");
        assert_eq!(timers.active_count(), 1);

        drop(edit);
        assert_eq!(timers.active_count(), 0);
    }

    #[test]
    fn test_digit_filter() {
        let (_clock, timers) = setup();
        let mut edit = PasswordEdit::new(timers).with_input_filter(DigitFilter);
        assert!(!edit.insert_text("x"));
        assert!(edit.insert_text("4x2"));
        assert_eq!(edit.text(), "42");
    }

    #[test]
    fn test_custom_visibility_time() {
        let (clock, timers) = setup();
        let mut edit =
            PasswordEdit::new(timers.clone()).with_visibility_time(Duration::from_millis(100));
        edit.insert_text("4");
        clock.advance(Duration::from_millis(100));
        assert_eq!(fire(&timers, &mut edit), 1);
    }

    #[test]
    fn test_paint() {
        let (_clock, timers) = setup();
        let mut edit = PasswordEdit::new(timers);
        edit.insert_text("48");

        let mut renderer = RecordingRenderer::new();
        edit.paint(&mut renderer, &SimpleFontMetrics, Size::new(180.0, 20.0));
        assert!(!edit.widget_base().needs_repaint());

        let commands = renderer.take_commands();
        assert_eq!(commands.len(), 6);
        assert!(matches!(commands[0], DrawCommand::FillEllipse { .. }));
        assert!(matches!(&commands[1], DrawCommand::Text { text, .. } if text == "8"));
        assert!(commands[2..]
            .iter()
            .all(|c| matches!(c, DrawCommand::StrokeEllipse { .. })));

        // Centered in exactly the desired width: offset is the border width.
        match commands[0] {
            DrawCommand::FillEllipse { center, .. } => {
                assert_eq!(center.x, 10.0);
                assert_eq!(center.y, 10.0);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_zero_slots_paint_nothing() {
        let (_clock, timers) = setup();
        let mut edit =
            PasswordEdit::with_style(PasswordStyle::default().with_slot_count(0), timers);
        assert!(!edit.insert_text("1"));

        let layout = edit.measure(
            &SimpleFontMetrics,
            SizeConstraint::Unconstrained,
            SizeConstraint::Unconstrained,
        );
        assert_eq!(layout.width, 0);

        let mut renderer = RecordingRenderer::new();
        edit.paint(&mut renderer, &SimpleFontMetrics, Size::new(0.0, 20.0));
        assert!(renderer.commands().is_empty());
    }
}
