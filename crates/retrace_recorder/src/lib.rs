//! Retrace Recorder
//!
//! Records a pointer path at a throttled rate and replays it frame by frame.
//!
//! - **Frame Clock**: a stateful "have n ticks elapsed" throttle
//! - **Capture**: one sample per elapsed tick into a `PathBuffer`
//! - **Replay**: a single-use cursor over an isolated snapshot of the path
//! - **Path Store**: frame-indexed storage for several paths at once
//! - **Export**: the recorded path as `[{"x":..,"y":..}]` text
//!
//! # Example
//!
//! ```rust
//! use retrace_core::{Point, RecordingSink};
//! use retrace_recorder::{CaptureController, SessionCommand, Transition};
//!
//! let mut controller = CaptureController::default();
//! let mut sink = RecordingSink::new();
//!
//! for i in 1..=3 {
//!     controller.tick(&mut sink);
//!     controller.capture(Point::new(i as f32 * 10.0, i as f32 * 10.0));
//! }
//!
//! controller.apply(SessionCommand::StartReplay, &mut sink).unwrap();
//! let mut replayed = Vec::new();
//! loop {
//!     let outcome = controller.tick(&mut sink);
//!     if outcome.transition == Some(Transition::ReplayFinished) {
//!         break;
//!     }
//!     replayed.extend(outcome.drawn);
//! }
//! assert_eq!(replayed.len(), 3);
//! ```

pub mod capture;
pub mod clock;
pub mod error;
pub mod export;
pub mod replay;
pub mod session;
pub mod store;

pub use capture::{
    ActiveSource, CaptureConfig, CaptureController, PathBuffer, TickOutcome, Transition,
};
pub use clock::{FrameClock, FrameCounter, TickSource};
pub use error::{RecorderError, Result};
pub use replay::{ReplayCursor, ReplayStep};
pub use session::{CommandOutcome, SessionCommand};
pub use store::{DeleteRange, PathId, PathStore, SelectedFrame};
