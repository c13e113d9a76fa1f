//! Retrace Core
//!
//! Leaf types shared by the Retrace recorder and its drivers:
//!
//! - **Points**: the immutable `{x, y}` positions sampled from pointer input
//! - **Input Events**: pointer and keyboard events delivered between ticks
//! - **Render Sink**: the collaborator that receives one marker per tick
//!
//! # Example
//!
//! ```rust
//! use retrace_core::{Point, RecordingSink, RenderSink};
//!
//! let mut sink = RecordingSink::new();
//! sink.draw_marker(Point::new(10.0, 20.0), 50.0);
//! assert_eq!(sink.markers(), vec![Point::new(10.0, 20.0)]);
//! ```

pub mod error;
pub mod events;
pub mod point;
pub mod render;

pub use error::{CoreError, Result};
pub use events::{InputEvent, KeyChord, KeyCode, Modifiers};
pub use point::Point;
pub use render::{RecordingSink, RenderCall, RenderSink};
