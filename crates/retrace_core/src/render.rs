//! Render sink
//!
//! The recorder never draws; it hands one marker per tick (or none) to a
//! `RenderSink` supplied by the host.

use crate::point::Point;

/// Receives render calls from the recorder.
pub trait RenderSink {
    /// Draw the position marker at `at`.
    fn draw_marker(&mut self, at: Point, radius: f32);

    /// Clear everything drawn so far.
    fn clear(&mut self);
}

/// A single call made against a [`RecordingSink`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RenderCall {
    Marker { at: Point, radius: f32 },
    Clear,
}

/// A sink that remembers every call, for headless runs and tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    calls: Vec<RenderCall>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls in the order they were made
    pub fn calls(&self) -> &[RenderCall] {
        &self.calls
    }

    /// Marker positions only, in draw order
    pub fn markers(&self) -> Vec<Point> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                RenderCall::Marker { at, .. } => Some(*at),
                RenderCall::Clear => None,
            })
            .collect()
    }

    /// Drain the recorded calls
    pub fn take(&mut self) -> Vec<RenderCall> {
        std::mem::take(&mut self.calls)
    }
}

impl RenderSink for RecordingSink {
    fn draw_marker(&mut self, at: Point, radius: f32) {
        self.calls.push(RenderCall::Marker { at, radius });
    }

    fn clear(&mut self) {
        self.calls.push(RenderCall::Clear);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_keeps_order() {
        let mut sink = RecordingSink::new();
        sink.draw_marker(Point::new(1.0, 1.0), 5.0);
        sink.clear();
        sink.draw_marker(Point::new(2.0, 2.0), 5.0);

        assert_eq!(sink.calls().len(), 3);
        assert_eq!(sink.calls()[1], RenderCall::Clear);
        assert_eq!(sink.markers(), vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0)]);

        let drained = sink.take();
        assert_eq!(drained.len(), 3);
        assert!(sink.calls().is_empty());
    }
}
