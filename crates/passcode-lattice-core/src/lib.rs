//! Core systems for Passcode Lattice.
//!
//! This crate provides the foundational plumbing the password widgets sit on:
//!
//! - **Timers**: One-shot timers driven by the host event loop, with an
//!   injectable [`Clock`]
//! - **Signal/Slot System**: Notifications from widgets to their host
//! - **Errors**: [`CoreError`] and friends
//! - **Logging**: `tracing` targets for filtering
//!
//! # Event Loop Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use passcode_lattice_core::{ManualClock, SharedTimerManager, Signal};
//!
//! let clock = Arc::new(ManualClock::new());
//! let timers = Arc::new(SharedTimerManager::with_clock(clock.clone()));
//! let repaint = Signal::<()>::new();
//! repaint.connect(|_| println!("repaint"));
//!
//! let hide = timers.start_one_shot(Duration::from_millis(600));
//! clock.advance(Duration::from_millis(600));
//! for id in timers.process_expired() {
//!     if id == hide {
//!         repaint.emit(());
//!     }
//! }
//! ```

mod error;
pub mod logging;
pub mod signal;
mod timer;

pub use error::{CoreError, Result, TimerError};
pub use signal::{ConnectionId, Signal};
pub use timer::{Clock, ManualClock, SharedTimerManager, SystemClock, TimerId, TimerManager};
