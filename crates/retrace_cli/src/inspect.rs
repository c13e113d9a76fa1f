//! Summary of an exported path

use retrace_core::Point;
use retrace_recorder::PathBuffer;
use std::fmt;

/// What `retrace inspect` reports about a recorded path
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathSummary {
    pub samples: usize,
    pub first: Option<Point>,
    pub last: Option<Point>,
    /// Top-left and bottom-right corners of the box holding every sample
    pub bounds: Option<(Point, Point)>,
}

impl PathSummary {
    pub fn of(buffer: &PathBuffer) -> Self {
        let bounds = buffer.points().split_first().map(|(head, rest)| {
            rest.iter().fold((*head, *head), |(min, max), p| {
                (
                    Point::new(min.x.min(p.x), min.y.min(p.y)),
                    Point::new(max.x.max(p.x), max.y.max(p.y)),
                )
            })
        });

        Self {
            samples: buffer.len(),
            first: buffer.points().first().copied(),
            last: buffer.last(),
            bounds,
        }
    }
}

impl fmt::Display for PathSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "samples: {}", self.samples)?;
        if let Some(first) = self.first {
            write!(f, "\nfirst: ({}, {})", first.x, first.y)?;
        }
        if let Some(last) = self.last {
            write!(f, "\nlast: ({}, {})", last.x, last.y)?;
        }
        if let Some((min, max)) = self.bounds {
            write!(f, "\nbounds: ({}, {}) - ({}, {})", min.x, min.y, max.x, max.y)?;
        }
        Ok(())
    }
}
