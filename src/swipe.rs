//! Dynamic (swipe) gesture detection over a time window.
//!
//! Two-state machine: idle until the first observation opens a window, then
//! collecting until the window duration elapses. At expiry the net
//! displacement between the last and first collected position is classified
//! into a directional swipe, or nothing if it stays under the threshold.
//!
//! The window resets at every expiry, whether or not enough samples were
//! collected. An underfilled window reports no gesture and a fresh window
//! opens on the next observation.

use std::time::{Duration, Instant};

use crate::gesture::SwipeDirection;
use crate::landmark::Point2;

/// Time-windowed swipe detector.
#[derive(Debug, Clone)]
pub struct SwipeDetector {
    window: Duration,
    threshold: f32,
    min_samples: usize,
    started_at: Option<Instant>,
    positions: Vec<Point2>,
}

impl SwipeDetector {
    /// Create a detector.
    ///
    /// `window` is how long positions are collected before a decision,
    /// `threshold` the minimum net displacement (normalized units) for a
    /// swipe, `min_samples` the minimum number of collected positions for
    /// the window to produce a verdict at all.
    pub fn new(window: Duration, threshold: f32, min_samples: usize) -> Self {
        Self {
            window,
            threshold,
            min_samples,
            started_at: None,
            positions: Vec::new(),
        }
    }

    /// Feed one anchor position. Returns a swipe direction when a window
    /// closes with enough samples and enough net displacement.
    pub fn observe(&mut self, position: Point2, now: Instant) -> Option<SwipeDirection> {
        let Some(started_at) = self.started_at else {
            self.started_at = Some(now);
            self.positions.clear();
            self.positions.push(position);
            return None;
        };

        self.positions.push(position);

        if now.duration_since(started_at) <= self.window {
            return None;
        }

        let verdict = if self.positions.len() >= self.min_samples {
            self.classify()
        } else {
            None
        };

        self.started_at = None;
        self.positions.clear();
        verdict
    }

    /// True while a window is open.
    pub fn is_collecting(&self) -> bool {
        self.started_at.is_some()
    }

    /// Positions collected in the current window.
    pub fn sample_count(&self) -> usize {
        self.positions.len()
    }

    fn classify(&self) -> Option<SwipeDirection> {
        let (first, last) = match (self.positions.first(), self.positions.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return None,
        };
        let dx = last.x - first.x;
        let dy = last.y - first.y;

        // Horizontal wins when both axes exceed the threshold.
        if dx.abs() > self.threshold {
            Some(if dx > 0.0 {
                SwipeDirection::Right
            } else {
                SwipeDirection::Left
            })
        } else if dy.abs() > self.threshold {
            Some(if dy > 0.0 {
                SwipeDirection::Down
            } else {
                SwipeDirection::Up
            })
        } else {
            None
        }
    }
}
