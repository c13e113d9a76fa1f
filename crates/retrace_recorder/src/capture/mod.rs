//! Throttled path capture.
//!
//! This module provides:
//! - `PathBuffer` - The ordered samples of the path being drawn
//! - `CaptureController` - Throttled capture plus live/replay source switching
//!
//! # Example
//!
//! ```rust
//! use retrace_core::{Point, RecordingSink};
//! use retrace_recorder::capture::{CaptureConfig, CaptureController};
//!
//! let mut controller = CaptureController::new(CaptureConfig::default());
//! let mut sink = RecordingSink::new();
//!
//! controller.tick(&mut sink);
//! controller.capture(Point::new(10.0, 10.0));
//! controller.tick(&mut sink);
//! controller.capture(Point::new(20.0, 20.0));
//!
//! controller.start_replay().unwrap();
//! assert_eq!(controller.tick(&mut sink).drawn, Some(Point::new(10.0, 10.0)));
//! ```

mod buffer;
mod controller;

pub use buffer::PathBuffer;
pub use controller::{
    ActiveSource, CaptureConfig, CaptureController, TickOutcome, Transition,
};
