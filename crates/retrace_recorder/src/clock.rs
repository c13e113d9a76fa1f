//! Frame clock for throttling.
//!
//! The animation loop advances a [`FrameCounter`] once per tick. A
//! [`FrameClock`] reads any [`TickSource`] and answers whether at least
//! `n` ticks have passed since it was last asked.

use std::cell::Cell;
use std::rc::Rc;

/// Anything that reports a monotonically increasing tick count.
pub trait TickSource {
    fn ticks(&self) -> u64;
}

/// Shared tick counter advanced by the animation loop.
///
/// Clones share the same count. The loop and every reader live on one
/// thread, so the counter is neither `Send` nor `Sync`.
#[derive(Clone, Debug, Default)]
pub struct FrameCounter {
    count: Rc<Cell<u64>>,
}

impl FrameCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one tick and return the new count.
    pub fn advance(&self) -> u64 {
        let next = self.count.get() + 1;
        self.count.set(next);
        next
    }

    /// Get the current tick count.
    pub fn count(&self) -> u64 {
        self.count.get()
    }
}

impl TickSource for FrameCounter {
    fn ticks(&self) -> u64 {
        self.count()
    }
}

/// A stateful "have n frames elapsed" throttle.
///
/// Every call to [`elapsed`](Self::elapsed) moves the clock's reference
/// point, whether it answers true or false. Only call it when the answer
/// will be acted on.
#[derive(Debug)]
pub struct FrameClock<S: TickSource = FrameCounter> {
    source: S,
    /// Tick count seen by the latest call
    current: u64,
    /// Tick count seen by the call before that
    previous: u64,
}

impl<S: TickSource> FrameClock<S> {
    /// Create a clock anchored at the source's current tick count.
    pub fn new(source: S) -> Self {
        let current = source.ticks();
        Self {
            source,
            current,
            previous: current,
        }
    }

    /// Return whether at least `n` ticks passed since the previous call
    /// (or since construction, for the first call).
    pub fn elapsed(&mut self, n: u64) -> bool {
        self.previous = self.current;
        self.current = self.source.ticks();
        self.current.saturating_sub(self.previous) >= n
    }

    /// Tick count observed by the latest call.
    pub fn last_seen(&self) -> u64 {
        self.current
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
