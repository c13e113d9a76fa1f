//! Capture controller.
//!
//! Owns the session state: the live pointer position, the path buffer being
//! drawn, the throttle clock and the source the render loop reads its
//! position from each tick.

use retrace_core::{Point, RenderSink};
use tracing::{debug, trace, warn};

use super::PathBuffer;
use crate::clock::{FrameClock, FrameCounter};
use crate::error::{RecorderError, Result};
use crate::export;
use crate::replay::{ReplayCursor, ReplayStep};
use crate::session::{CommandOutcome, SessionCommand};

/// Configuration for the capture controller.
#[derive(Clone, Debug)]
pub struct CaptureConfig {
    /// Minimum ticks between two recorded samples.
    pub throttle_frames: u64,
    /// Size of the marker drawn at the active position.
    pub marker_radius: f32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            throttle_frames: 1,
            marker_radius: 50.0,
        }
    }
}

impl CaptureConfig {
    /// Set the throttle window.
    pub fn with_throttle(mut self, frames: u64) -> Self {
        self.throttle_frames = frames;
        self
    }

    /// Set the marker radius.
    pub fn with_marker_radius(mut self, radius: f32) -> Self {
        self.marker_radius = radius;
        self
    }
}

/// Where the render loop takes its position from.
#[derive(Clone, Debug, Default)]
pub enum ActiveSource {
    /// Follow the live pointer.
    #[default]
    Live,
    /// Play back a recorded snapshot.
    Replaying(ReplayCursor),
}

impl ActiveSource {
    pub fn is_replaying(&self) -> bool {
        matches!(self, ActiveSource::Replaying(_))
    }
}

/// A change of position source observed during a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The cursor ran out and the source went back to live capture.
    ReplayFinished,
}

/// What happened during one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickOutcome {
    /// Frame number of this tick.
    pub frame: u64,
    /// Position handed to the render sink, if any.
    pub drawn: Option<Point>,
    pub transition: Option<Transition>,
}

/// Drives throttled capture and replay for a single path.
#[derive(Debug)]
pub struct CaptureController {
    config: CaptureConfig,
    counter: FrameCounter,
    clock: FrameClock<FrameCounter>,
    buffer: PathBuffer,
    /// Live position; `None` until the pointer moves or after a clear.
    position: Option<Point>,
    source: ActiveSource,
}

impl CaptureController {
    /// Create a controller with its own frame counter.
    pub fn new(config: CaptureConfig) -> Self {
        Self::with_counter(config, FrameCounter::new())
    }

    /// Create a controller that advances an existing frame counter.
    pub fn with_counter(config: CaptureConfig, counter: FrameCounter) -> Self {
        Self {
            clock: FrameClock::new(counter.clone()),
            counter,
            config,
            buffer: PathBuffer::new(),
            position: None,
            source: ActiveSource::Live,
        }
    }

    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    /// The path recorded so far.
    pub fn buffer(&self) -> &PathBuffer {
        &self.buffer
    }

    /// The position the next live tick would draw.
    pub fn position(&self) -> Option<Point> {
        self.position
    }

    pub fn source(&self) -> &ActiveSource {
        &self.source
    }

    pub fn is_replaying(&self) -> bool {
        self.source.is_replaying()
    }

    /// Number of ticks run so far.
    pub fn frame(&self) -> u64 {
        self.counter.count()
    }

    /// Handle a pointer-down or pointer-move event.
    ///
    /// The live position always follows the pointer. The sample is appended
    /// to the buffer only when the throttle window has elapsed; returns
    /// whether it was.
    pub fn capture(&mut self, position: Point) -> bool {
        self.position = Some(position);

        if self.clock.elapsed(self.config.throttle_frames) {
            self.buffer.push(position);
            true
        } else {
            trace!(x = position.x, y = position.y, "sample throttled");
            false
        }
    }

    /// Run one animation tick.
    ///
    /// Reads exactly one position from the active source and draws at most
    /// one marker.
    pub fn tick(&mut self, sink: &mut dyn RenderSink) -> TickOutcome {
        let frame = self.counter.advance();
        let mut transition = None;

        if let ActiveSource::Replaying(cursor) = &mut self.source {
            match cursor.step() {
                ReplayStep::Sample(point) => self.position = Some(point),
                ReplayStep::Exhausted => transition = Some(Transition::ReplayFinished),
            }
        }

        if transition.is_some() {
            debug!(frame, "replay finished, back to live capture");
            self.source = ActiveSource::Live;
        }

        if let Some(point) = self.position {
            sink.draw_marker(point, self.config.marker_radius);
        }

        TickOutcome {
            frame,
            drawn: self.position,
            transition,
        }
    }

    /// Discard the recorded path and the live position and cancel any
    /// replay. Returns whether a replay was cancelled.
    pub fn reset(&mut self) -> bool {
        let cancelled = self.source.is_replaying();
        self.buffer.clear();
        self.position = None;
        self.source = ActiveSource::Live;
        debug!(cancelled_replay = cancelled, "session reset");
        cancelled
    }

    /// Unset the live position. The path and any replay are kept.
    pub fn clear_position(&mut self) {
        self.position = None;
    }

    /// Start replaying a snapshot of the recorded path.
    ///
    /// A replay already in progress is replaced. An empty buffer leaves the
    /// controller in live mode and fails with `EmptyBufferReplay`.
    pub fn start_replay(&mut self) -> Result<usize> {
        if self.buffer.is_empty() {
            warn!("replay requested with no recorded samples");
            return Err(RecorderError::EmptyBufferReplay);
        }

        let cursor = ReplayCursor::new(self.buffer.snapshot());
        let samples = cursor.len();
        if self.source.is_replaying() {
            debug!("replacing replay in progress");
        }
        self.source = ActiveSource::Replaying(cursor);
        debug!(samples, "replay started");
        Ok(samples)
    }

    /// Replace the recorded path, e.g. with an imported one.
    pub fn load(&mut self, buffer: PathBuffer) {
        debug!(samples = buffer.len(), "path loaded");
        self.buffer = buffer;
    }

    /// Serialize the recorded path to interchange text.
    pub fn export(&self) -> Result<String> {
        export::to_json(&self.buffer)
    }

    /// Apply a session command, clearing the render sink where the command
    /// calls for it.
    pub fn apply(
        &mut self,
        command: SessionCommand,
        sink: &mut dyn RenderSink,
    ) -> Result<CommandOutcome> {
        match command {
            SessionCommand::Reset => {
                sink.clear();
                let cancelled_replay = self.reset();
                Ok(CommandOutcome::Reset { cancelled_replay })
            }
            SessionCommand::ClearVisible => {
                sink.clear();
                self.clear_position();
                Ok(CommandOutcome::Cleared)
            }
            SessionCommand::StartReplay => {
                let replaced = self.source.is_replaying();
                let samples = self.start_replay()?;
                sink.clear();
                Ok(CommandOutcome::ReplayStarted { samples, replaced })
            }
            SessionCommand::Export => Ok(CommandOutcome::Exported(self.export()?)),
        }
    }
}

impl Default for CaptureController {
    fn default() -> Self {
        Self::new(CaptureConfig::default())
    }
}
