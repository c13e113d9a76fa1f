//! Path buffer for the path currently being drawn.

use std::sync::Arc;

use retrace_core::Point;
use serde::{Deserialize, Serialize};

/// Ordered, append-only sequence of sampled positions.
///
/// Index `i` holds the `i`-th sample that made it through the throttle.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathBuffer {
    points: Vec<Point>,
}

impl PathBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a buffer from an already recorded sequence.
    pub fn from_points(points: impl Into<Vec<Point>>) -> Self {
        Self {
            points: points.into(),
        }
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Copy the samples into an immutable snapshot for replay.
    pub fn snapshot(&self) -> Arc<[Point]> {
        Arc::from(self.points.as_slice())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }
}

impl FromIterator<Point> for PathBuffer {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PathBuffer {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_keeps_insertion_order() {
        let mut buffer = PathBuffer::new();
        buffer.push(Point::new(3.0, 3.0));
        buffer.push(Point::new(1.0, 1.0));

        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.points()[0], Point::new(3.0, 3.0));
        assert_eq!(buffer.last(), Some(Point::new(1.0, 1.0)));
    }

    #[test]
    fn test_snapshot_does_not_follow_later_pushes() {
        let mut buffer: PathBuffer = [Point::new(1.0, 1.0)].into_iter().collect();
        let snapshot = buffer.snapshot();

        buffer.push(Point::new(2.0, 2.0));
        buffer.clear();

        assert_eq!(&snapshot[..], &[Point::new(1.0, 1.0)]);
        assert!(buffer.is_empty());
    }
}
