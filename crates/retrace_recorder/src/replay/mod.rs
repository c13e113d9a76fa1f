//! Replay of recorded paths.
//!
//! This module provides:
//! - `ReplayCursor` - A single-use, forward-only cursor over a recorded snapshot
//! - `ReplayStep` - One cursor advance: a sample, or the exhaustion sentinel
//!
//! # Example
//!
//! ```rust
//! use retrace_core::Point;
//! use retrace_recorder::replay::{ReplayCursor, ReplayStep};
//!
//! let mut cursor = ReplayCursor::new(vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0)]);
//!
//! while let ReplayStep::Sample(point) = cursor.step() {
//!     // Hand `point` to the renderer...
//!     let _ = point;
//! }
//! assert!(cursor.is_exhausted());
//! ```

mod cursor;

pub use cursor::{ReplayCursor, ReplayStep};
