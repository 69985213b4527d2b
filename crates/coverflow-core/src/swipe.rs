use crate::intent::Direction;
use glam::Vec2;

/// Turn a finished touch into a navigation direction.
///
/// The horizontal travel must beat the threshold and dominate the vertical
/// travel, otherwise the touch was a tap or a page scroll. Moving the finger
/// left (start x greater than end x) advances forward.
#[inline]
pub fn resolve_swipe(start: Vec2, end: Vec2, threshold: f32) -> Option<Direction> {
    let diff = start - end;
    if diff.x.abs() > diff.y.abs() && diff.x.abs() > threshold {
        Some(if diff.x > 0.0 {
            Direction::Next
        } else {
            Direction::Prev
        })
    } else {
        None
    }
}

/// Touch start/move/end bookkeeping for one container.
#[derive(Clone, Copy, Debug)]
pub struct SwipeTracker {
    start: Option<Vec2>,
    threshold: f32,
    scroll_lock: f32,
}

impl SwipeTracker {
    pub fn new(threshold: f32, scroll_lock: f32) -> Self {
        Self {
            start: None,
            threshold,
            scroll_lock,
        }
    }

    #[inline]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    pub fn begin(&mut self, at: Vec2) {
        self.start = Some(at);
    }

    /// Whether the page should stop scrolling for this move.
    pub fn moved(&self, at: Vec2) -> bool {
        match self.start {
            Some(start) => (at.x - start.x).abs() > self.scroll_lock,
            None => false,
        }
    }

    /// Ends tracking; an end without a matching begin resolves to nothing.
    pub fn end(&mut self, at: Vec2) -> Option<Direction> {
        let start = self.start.take()?;
        let dir = resolve_swipe(start, at, self.threshold);
        log::debug!("[swipe] {:?} -> {:?} resolved {:?}", start, at, dir);
        dir
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }
}
