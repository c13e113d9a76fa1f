//! Frame-indexed storage for several paths at once.
//!
//! A `PathStore` is a grid addressed by frame and path id. A single frame
//! cursor is shared by every path in the store: pushes and reads both move
//! it forward by one frame. Slots that were never written, or were deleted,
//! are simply missing from their frame's row.
//!
//! Rows are kept sparsely by frame number, so jumping far ahead and writing
//! there costs one row, not every frame in between. The cursor saturates at
//! `usize::MAX` instead of wrapping.

use std::collections::BTreeMap;
use std::fmt;

use retrace_core::Point;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::error::{RecorderError, Result};

/// Identifier of a path in a [`PathStore`].
///
/// Ids are handed out in increasing order and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathId(u32);

impl PathId {
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PathId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "path#{}", self.0)
    }
}

/// Values read for an explicit list of paths, one per requested id.
pub type SelectedFrame = SmallVec<[Option<Point>; 4]>;

/// Which slots [`PathStore::delete`] removes.
///
/// Every bound is optional: the path defaults to the active path, `from`
/// to frame 0 and `to` to the last known frame. Both ends are inclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeleteRange {
    pub path: Option<PathId>,
    pub from: usize,
    pub to: Option<usize>,
}

impl DeleteRange {
    /// Every frame of the active path.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn path(mut self, path: PathId) -> Self {
        self.path = Some(path);
        self
    }

    pub fn from(mut self, frame: usize) -> Self {
        self.from = frame;
        self
    }

    pub fn to(mut self, frame: usize) -> Self {
        self.to = Some(frame);
        self
    }
}

/// Frame-by-frame coordinates for any number of independent paths.
#[derive(Clone, Debug, Default)]
pub struct PathStore {
    frames: BTreeMap<usize, FxHashMap<PathId, Point>>,
    current_frame: usize,
    active: Option<PathId>,
    next_id: u32,
}

impl PathStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next path id and make it the active path.
    pub fn new_path(&mut self) -> PathId {
        let id = PathId(self.next_id);
        self.next_id += 1;
        self.active = Some(id);
        id
    }

    /// Write `point` for `path` at the current frame, then advance one frame.
    ///
    /// Writing over an existing slot (after jumping back) replaces it.
    pub fn push(&mut self, path: PathId, point: Point) -> Result<()> {
        self.ensure_allocated(path)?;

        self.frames
            .entry(self.current_frame)
            .or_default()
            .insert(path, point);
        self.advance();
        Ok(())
    }

    /// [`push`](Self::push) to the active path.
    pub fn push_active(&mut self, point: Point) -> Result<()> {
        let path = self.active_or_err()?;
        self.push(path, point)
    }

    /// Move the frame cursor anywhere, forwards or backwards.
    pub fn jump(&mut self, frame: usize) {
        self.current_frame = frame;
    }

    /// Make `path` the active path. The frame cursor is left alone.
    pub fn edit(&mut self, path: PathId) -> Result<()> {
        self.ensure_allocated(path)?;
        self.active = Some(path);
        Ok(())
    }

    /// Read every path present at the current frame, ordered by id, then
    /// advance one frame.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Vec<(PathId, Point)> {
        let mut row: Vec<(PathId, Point)> = self
            .frames
            .get(&self.current_frame)
            .map(|slots| slots.iter().map(|(id, point)| (*id, *point)).collect())
            .unwrap_or_default();
        row.sort_unstable_by_key(|(id, _)| *id);

        self.advance();
        row
    }

    /// Read the given paths at the current frame, in the order given, then
    /// advance one frame. Paths without data there read as `None`.
    pub fn next_of(&mut self, paths: &[PathId]) -> SelectedFrame {
        let row = self.frames.get(&self.current_frame);
        let values = paths
            .iter()
            .map(|path| row.and_then(|slots| slots.get(path).copied()))
            .collect();

        self.advance();
        values
    }

    /// Look up one slot without moving the cursor.
    pub fn get(&self, frame: usize, path: PathId) -> Option<Point> {
        self.frames.get(&frame)?.get(&path).copied()
    }

    /// Remove a path's slots over an inclusive frame range.
    ///
    /// Returns how many slots actually held data. Missing slots are skipped
    /// and other paths are never touched.
    pub fn delete(&mut self, range: DeleteRange) -> Result<usize> {
        let path = match range.path {
            Some(path) => {
                self.ensure_allocated(path)?;
                path
            }
            None => self.active_or_err()?,
        };

        let Some(last) = self.last_frame() else {
            return Ok(0);
        };
        let to = range.to.map_or(last, |to| to.min(last));
        if range.from > to {
            return Ok(0);
        }

        let removed = self
            .frames
            .range_mut(range.from..=to)
            .filter_map(|(_, slots)| slots.remove(&path))
            .count();
        Ok(removed)
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// One past the highest frame ever written to (saturating).
    pub fn frame_count(&self) -> usize {
        self.last_frame().map_or(0, |last| last.saturating_add(1))
    }

    /// Highest frame ever written to.
    pub fn last_frame(&self) -> Option<usize> {
        self.frames.keys().next_back().copied()
    }

    pub fn active_path(&self) -> Option<PathId> {
        self.active
    }

    /// Number of ids allocated so far.
    pub fn path_count(&self) -> usize {
        self.next_id as usize
    }

    pub fn is_allocated(&self, path: PathId) -> bool {
        path.0 < self.next_id
    }

    /// Frames at which `path` currently has data, in frame order.
    pub fn frames_of(&self, path: PathId) -> impl Iterator<Item = (usize, Point)> + '_ {
        self.frames
            .iter()
            .filter_map(move |(frame, slots)| slots.get(&path).map(|point| (*frame, *point)))
    }

    fn advance(&mut self) {
        self.current_frame = self.current_frame.saturating_add(1);
    }

    fn ensure_allocated(&self, path: PathId) -> Result<()> {
        if self.is_allocated(path) {
            Ok(())
        } else {
            Err(RecorderError::InvalidPath(path))
        }
    }

    fn active_or_err(&self) -> Result<PathId> {
        self.active
            .ok_or(RecorderError::InvalidPath(PathId(self.next_id)))
    }
}
