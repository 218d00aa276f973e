//! Timer system for Passcode Lattice.
//!
//! Provides one-shot timers that the host event loop drives.
//! Timers never run callbacks themselves: the loop asks the manager which
//! timers have expired and dispatches each [`TimerId`] to the widget that
//! owns it.
//!
//! Time is read through a [`Clock`], so hosts and tests can substitute a
//! [`ManualClock`] and step time deterministically.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use passcode_lattice_core::{ManualClock, SharedTimerManager};
//!
//! let clock = Arc::new(ManualClock::new());
//! let timers = SharedTimerManager::with_clock(clock.clone());
//!
//! let id = timers.start_one_shot(Duration::from_millis(600));
//! assert!(timers.process_expired().is_empty());
//!
//! clock.advance(Duration::from_millis(600));
//! assert_eq!(timers.process_expired(), vec![id]);
//! ```

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

use crate::error::{Result, TimerError};
use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a timer.
    ///
    /// Identifiers are versioned, so an id of a stopped or fired timer never
    /// aliases a timer started later.
    pub struct TimerId;
}

/// Source of the current time for a [`TimerManager`].
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> Instant;
}

/// Clock backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
///
/// Useful for headless hosts and tests that need to step through timer
/// deadlines without sleeping.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<Instant>,
}

impl ManualClock {
    /// Create a manual clock frozen at the current instant.
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Instant::now()),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock();
        *now += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock()
    }
}

/// An entry in the timer queue (min-heap by fire time).
#[derive(Debug, Clone, Copy)]
struct TimerQueueEntry {
    id: TimerId,
    fire_time: Instant,
}

impl PartialEq for TimerQueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.fire_time == other.fire_time
    }
}

impl Eq for TimerQueueEntry {}

impl PartialOrd for TimerQueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimerQueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (BinaryHeap is max-heap by default).
        other.fire_time.cmp(&self.fire_time)
    }
}

/// Manages all timers for one event loop.
pub struct TimerManager {
    /// Deadlines of pending timers. Stopped and fired timers are removed.
    timers: SlotMap<TimerId, Instant>,
    /// Priority queue of pending timer fires (min-heap by fire time).
    queue: BinaryHeap<TimerQueueEntry>,
    /// Time source.
    clock: Arc<dyn Clock>,
}

impl TimerManager {
    /// Create a new timer manager reading the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create a new timer manager reading the given clock.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            timers: SlotMap::with_key(),
            queue: BinaryHeap::new(),
            clock,
        }
    }

    /// The manager's notion of "now".
    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Start a one-shot timer that fires after the specified duration.
    ///
    /// Returns the timer ID that can be used to cancel the timer.
    pub fn start_one_shot(&mut self, duration: Duration) -> TimerId {
        let fire_time = self.clock.now() + duration;
        let id = self.timers.insert(fire_time);
        self.queue.push(TimerQueueEntry { id, fire_time });
        tracing::trace!(target: targets::TIMER, ?id, ?duration, "timer started");
        id
    }

    /// Stop and remove a timer.
    ///
    /// Returns an error if the timer is unknown, already stopped, or has
    /// already fired.
    pub fn stop(&mut self, id: TimerId) -> Result<()> {
        if self.timers.remove(id).is_some() {
            tracing::trace!(target: targets::TIMER, ?id, "timer stopped");
            Ok(())
        } else {
            Err(TimerError::InvalidTimerId.into())
        }
    }

    /// Check if a timer is currently active.
    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.contains_key(id)
    }

    /// Drop queue entries whose timers were stopped.
    fn prune_front(&mut self) {
        while let Some(entry) = self.queue.peek() {
            if self.timers.contains_key(entry.id) {
                break;
            }
            self.queue.pop();
        }
    }

    /// Get the duration until the next timer fires, if any.
    ///
    /// Returns `None` if there are no active timers.
    pub fn time_until_next(&mut self) -> Option<Duration> {
        self.prune_front();
        let now = self.clock.now();
        self.queue
            .peek()
            .map(|entry| entry.fire_time.saturating_duration_since(now))
    }

    /// Process all timers that should fire now.
    ///
    /// Returns the ids of fired timers in fire-time order. Fired timers are
    /// removed.
    #[tracing::instrument(skip(self), target = "passcode_lattice_core::timer", level = "trace")]
    pub fn process_expired(&mut self) -> Vec<TimerId> {
        let now = self.clock.now();
        let mut fired = Vec::new();

        while let Some(entry) = self.queue.peek().copied() {
            if entry.fire_time > now {
                break;
            }
            self.queue.pop();

            // Entries of stopped timers are skipped.
            if self.timers.remove(entry.id).is_none() {
                continue;
            }

            tracing::trace!(target: targets::TIMER, id = ?entry.id, "timer fired");
            fired.push(entry.id);
        }

        fired
    }

    /// Get the number of active timers.
    pub fn active_count(&self) -> usize {
        self.timers.len()
    }
}

impl Default for TimerManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TimerManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerManager")
            .field("active", &self.timers.len())
            .field("queued", &self.queue.len())
            .finish()
    }
}

/// A thread-safe wrapper around [`TimerManager`].
///
/// Widgets and the host loop share one instance through an `Arc`.
#[derive(Debug, Default)]
pub struct SharedTimerManager {
    inner: Mutex<TimerManager>,
}

impl SharedTimerManager {
    /// Create a shared manager reading the system clock.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(TimerManager::new()),
        }
    }

    /// Create a shared manager reading the given clock.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Mutex::new(TimerManager::with_clock(clock)),
        }
    }

    /// See [`TimerManager::start_one_shot`].
    pub fn start_one_shot(&self, duration: Duration) -> TimerId {
        self.inner.lock().start_one_shot(duration)
    }

    /// See [`TimerManager::stop`].
    pub fn stop(&self, id: TimerId) -> Result<()> {
        self.inner.lock().stop(id)
    }

    /// See [`TimerManager::is_active`].
    pub fn is_active(&self, id: TimerId) -> bool {
        self.inner.lock().is_active(id)
    }

    /// See [`TimerManager::time_until_next`].
    pub fn time_until_next(&self) -> Option<Duration> {
        self.inner.lock().time_until_next()
    }

    /// See [`TimerManager::process_expired`].
    pub fn process_expired(&self) -> Vec<TimerId> {
        self.inner.lock().process_expired()
    }

    /// See [`TimerManager::active_count`].
    pub fn active_count(&self) -> usize {
        self.inner.lock().active_count()
    }
}
