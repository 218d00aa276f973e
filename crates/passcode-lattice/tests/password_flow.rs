//! Integration tests driving the password widgets the way a host does.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use passcode_lattice::prelude::*;
use passcode_lattice::render::DrawCommand;
use tracing_subscriber::EnvFilter;

/// A minimal host: one widget, a manual clock and the shared timer queue.
struct Host {
    clock: Arc<ManualClock>,
    timers: Arc<SharedTimerManager>,
    input: PasswordInput,
    repaints: Arc<AtomicUsize>,
}

impl Host {
    fn new(style: PasswordStyle) -> Self {
        let clock = Arc::new(ManualClock::new());
        let timers = Arc::new(SharedTimerManager::with_clock(clock.clone()));
        let input = PasswordInput::with_style(style, timers.clone());

        let repaints = Arc::new(AtomicUsize::new(0));
        let counter = repaints.clone();
        input
            .edit()
            .widget_base()
            .repaint_requested
            .connect(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            });

        Self {
            clock,
            timers,
            input,
            repaints,
        }
    }

    /// Advance time and run one turn of the event loop.
    fn run_for(&mut self, elapsed: Duration) {
        self.clock.advance(elapsed);
        for id in self.timers.process_expired() {
            self.input.edit_mut().timer_event(id);
        }
    }

    fn repaints(&self) -> usize {
        self.repaints.load(Ordering::SeqCst)
    }

    fn frame(&mut self, area: Size) -> Vec<DrawCommand> {
        let mut renderer = RecordingRenderer::new();
        self.input
            .edit_mut()
            .paint(&mut renderer, &SimpleFontMetrics, area);
        renderer.take_commands()
    }
}

fn setup() -> Host {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
    Host::new(PasswordStyle::default())
}

fn shape(commands: &[DrawCommand]) -> String {
    commands
        .iter()
        .map(|c| match c {
            DrawCommand::FillEllipse { .. } => "*".to_string(),
            DrawCommand::StrokeEllipse { .. } => "o".to_string(),
            DrawCommand::Text { text, .. } => text.clone(),
        })
        .collect()
}

#[test]
fn test_typing_session() {
    let mut host = setup();
    let area = Size::new(180.0, 20.0);

    host.input.edit_mut().insert_text("4");
    assert_eq!(shape(&host.frame(area)), "4ooooo");

    host.run_for(Duration::from_millis(200));
    host.input.edit_mut().insert_text("8");
    assert_eq!(shape(&host.frame(area)), "*8oooo");

    host.run_for(Duration::from_millis(599));
    assert_eq!(shape(&host.frame(area)), "*8oooo");

    host.run_for(Duration::from_millis(1));
    assert_eq!(shape(&host.frame(area)), "**oooo");

    host.input.edit_mut().backspace();
    assert_eq!(shape(&host.frame(area)), "*ooooo");
}

#[test]
fn test_one_repaint_per_hide() {
    let mut host = setup();

    for digit in ["1", "2", "3"] {
        host.input.edit_mut().insert_text(digit);
        host.run_for(Duration::from_millis(100));
    }
    assert_eq!(host.repaints(), 3);
    assert_eq!(host.timers.active_count(), 1);

    host.run_for(Duration::from_millis(500));
    assert_eq!(host.repaints(), 4);
    assert!(host.input.edit().hide_last_char());

    host.run_for(CHAR_VISIBILITY_TIME);
    assert_eq!(host.repaints(), 4);
    assert_eq!(host.timers.active_count(), 0);
}

#[test]
fn test_reveal_mode_frame() {
    let mut host = Host::new(PasswordStyle::default().with_reveal_mode(true));
    host.input.edit_mut().insert_text("4821");

    let commands = host.frame(Size::new(180.0, 20.0));
    assert_eq!(shape(&commands), "4821oo");
}

#[test]
fn test_toggle_reveal_mode_keeps_caret_at_end() {
    let mut host = setup();
    let edit = host.input.edit_mut();
    edit.insert_text("482");
    edit.set_reveal_mode(true);
    assert_eq!(edit.selection().start, 3);
    assert_eq!(edit.selection().end, 3);

    edit.set_reveal_mode(false);
    assert!(edit.hide_last_char());
    assert_eq!(shape(&host.frame(Size::new(180.0, 20.0))), "***ooo");
}

#[test]
fn test_error_resets_everything() {
    let mut host = setup();
    host.input.edit_mut().insert_text("123456");
    assert!(host.input.edit().is_complete());

    host.input.set_error(true);
    assert!(host.input.is_error());
    assert_eq!(host.input.text(), "");
    assert_eq!(host.timers.active_count(), 0);
    assert_eq!(shape(&host.frame(Size::new(180.0, 20.0))), "oooooo");
}

#[test]
fn test_wide_area_centers_row() {
    let mut host = setup();
    let layout = host.input.edit_mut().measure(
        &SimpleFontMetrics,
        SizeConstraint::Exact(380),
        SizeConstraint::AtMost(64),
    );
    assert_eq!(layout.width, 380);
    assert_eq!(layout.height, 20);
    assert_eq!(layout.centering_offset, 102.0);

    let commands = host.frame(Size::new(380.0, 20.0));
    let first = match commands[0] {
        DrawCommand::StrokeEllipse { center, .. } => center,
        ref other => panic!("expected outline, got {other:?}"),
    };
    assert_eq!(first, Point::new(110.0, 10.0));
}

#[test]
fn test_narrow_area_starts_at_left() {
    let mut host = setup();
    let layout = host.input.edit_mut().measure(
        &SimpleFontMetrics,
        SizeConstraint::AtMost(100),
        SizeConstraint::Unconstrained,
    );
    assert_eq!(layout.width, 100);
    assert_eq!(layout.centering_offset, 0.0);

    let commands = host.frame(Size::new(100.0, 20.0));
    assert_eq!(commands.len(), 6);
    match commands[0] {
        DrawCommand::StrokeEllipse { center, .. } => assert_eq!(center.x, 8.0),
        ref other => panic!("expected outline, got {other:?}"),
    }
}

#[test]
fn test_style_file_drives_widget() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pin.toml");
    std::fs::write(
        &path,
        "slot_count = 4\nslot_margin = 8.0\n\n[glyph]\nsize = 12.0\n",
    )
    .unwrap();

    let style = PasswordStyle::load_toml(&path).unwrap();
    let mut host = Host::new(style);
    host.input.edit_mut().insert_text("123456");
    assert_eq!(host.input.text(), "1234");

    let layout = host.input.edit_mut().measure(
        &SimpleFontMetrics,
        SizeConstraint::Unconstrained,
        SizeConstraint::Unconstrained,
    );
    // 4 * 16 + 3 * 8 + 2 * 2
    assert_eq!(layout.width, 92);
    assert_eq!(layout.height, 20);
}
