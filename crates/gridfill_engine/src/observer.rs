//! Progress notification for renderers
//!
//! Draw and fill operations report every cell they newly mark, in marking
//! order, synchronously on the calling thread. Pacing (sleeping between
//! frames, repainting) is entirely up to the observer.

use crate::{FillStrategy, Point};

/// What caused a cell to be marked.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkSource {
    /// Outline of a point, line or circle.
    Stroke,
    /// Interior produced by a flood fill.
    Fill(FillStrategy),
}

/// A trait for collaborators that want to follow grid changes
pub trait MarkObserver {
    /// Called once for each newly marked cell.
    fn on_mark(&mut self, pos: Point, source: MarkSource);
}

/// Ignores all notifications.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl MarkObserver for NoopObserver {
    fn on_mark(&mut self, _pos: Point, _source: MarkSource) {}
}

/// Records every notification in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarkRecorder {
    pub marks: Vec<(Point, MarkSource)>,
}

impl MarkRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded points without their sources.
    pub fn points(&self) -> Vec<Point> {
        self.marks.iter().map(|(p, _)| *p).collect()
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn clear(&mut self) {
        self.marks.clear();
    }
}

impl MarkObserver for MarkRecorder {
    fn on_mark(&mut self, pos: Point, source: MarkSource) {
        self.marks.push((pos, source));
    }
}

impl<F: FnMut(Point, MarkSource)> MarkObserver for F {
    fn on_mark(&mut self, pos: Point, source: MarkSource) {
        self(pos, source)
    }
}
