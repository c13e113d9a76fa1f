//! Forward-only replay cursor.

use std::iter::FusedIterator;
use std::sync::Arc;

use retrace_core::Point;

/// Result of advancing a [`ReplayCursor`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReplayStep<T = Point> {
    /// The next recorded sample.
    Sample(T),
    /// Every sample has been delivered.
    Exhausted,
}

impl<T> ReplayStep<T> {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, ReplayStep::Exhausted)
    }

    pub fn sample(self) -> Option<T> {
        match self {
            ReplayStep::Sample(value) => Some(value),
            ReplayStep::Exhausted => None,
        }
    }
}

/// A single-use, forward-only cursor over a fixed sequence.
///
/// The cursor owns its own snapshot of the samples, so later changes to the
/// buffer it was built from never reach it. Once exhausted it stays
/// exhausted; build a new cursor to play the sequence again.
#[derive(Clone, Debug)]
pub struct ReplayCursor<T = Point> {
    samples: Arc<[T]>,
    /// Index of the next sample, in `[0, len]`
    index: usize,
}

impl<T: Clone> ReplayCursor<T> {
    /// Create a cursor positioned before the first sample.
    pub fn new(samples: impl Into<Arc<[T]>>) -> Self {
        Self {
            samples: samples.into(),
            index: 0,
        }
    }

    /// Deliver the next sample, or `Exhausted` without further change.
    pub fn step(&mut self) -> ReplayStep<T> {
        match self.samples.get(self.index) {
            Some(sample) => {
                self.index += 1;
                ReplayStep::Sample(sample.clone())
            }
            None => ReplayStep::Exhausted,
        }
    }

    /// Index of the next sample to be delivered.
    pub fn position(&self) -> usize {
        self.index
    }

    /// Total number of samples in the snapshot.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.samples.len() - self.index
    }

    pub fn is_exhausted(&self) -> bool {
        self.index >= self.samples.len()
    }

    /// The snapshot being replayed.
    pub fn samples(&self) -> &[T] {
        &self.samples
    }
}

impl<T: Clone> Iterator for ReplayCursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.step().sample()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for ReplayCursor<T> {}

impl<T: Clone> FusedIterator for ReplayCursor<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> Vec<Point> {
        vec![
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
            Point::new(3.0, 3.0),
        ]
    }

    #[test]
    fn test_cursor_delivers_in_order() {
        let mut cursor = ReplayCursor::new(path());
        assert_eq!(cursor.step(), ReplayStep::Sample(Point::new(1.0, 1.0)));
        assert_eq!(cursor.step(), ReplayStep::Sample(Point::new(2.0, 2.0)));
        assert_eq!(cursor.step(), ReplayStep::Sample(Point::new(3.0, 3.0)));
        assert_eq!(cursor.step(), ReplayStep::Exhausted);
    }

    #[test]
    fn test_exhaustion_is_idempotent() {
        let mut cursor = ReplayCursor::new(path());
        cursor.by_ref().for_each(drop);

        for _ in 0..10 {
            assert!(cursor.step().is_exhausted());
            assert_eq!(cursor.position(), 3);
        }
    }

    #[test]
    fn test_empty_cursor_is_exhausted_immediately() {
        let mut cursor: ReplayCursor = ReplayCursor::new(Vec::new());
        assert!(cursor.is_empty());
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.step(), ReplayStep::Exhausted);
    }

    #[test]
    fn test_snapshot_is_isolated_from_source() {
        let mut source = path();
        let mut cursor = ReplayCursor::new(source.clone());

        source.clear();
        source.push(Point::new(99.0, 99.0));

        assert_eq!(cursor.step().sample(), Some(Point::new(1.0, 1.0)));
        assert_eq!(cursor.len(), 3);
    }

    #[test]
    fn test_iterator_size_hint_tracks_remaining() {
        let mut cursor = ReplayCursor::new(path());
        assert_eq!(cursor.len(), 3);
        cursor.next();
        assert_eq!(cursor.size_hint(), (2, Some(2)));
        assert_eq!(cursor.remaining(), 2);
        assert_eq!(cursor.collect::<Vec<_>>().len(), 2);
    }
}
