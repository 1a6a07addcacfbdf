//! Per-hand palm-center trajectories.
//!
//! Trajectories are purely a visualization aid; no gesture semantics are
//! derived from them. What matters is the resource bound: each tracked hand
//! holds at most `capacity` points, with O(1) amortized updates.
//!
//! Hands are keyed by their per-frame enumeration index, not a stable
//! identity. A hand that leaves and re-enters the frame, or two hands that
//! swap enumeration order, will continue each other's trails. Known
//! limitation, preserved deliberately.

use std::collections::BTreeMap;
use std::collections::VecDeque;

use crate::landmark::{HandObservation, Point2};

/// A trajectory segment handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailSegment {
    pub from: Point2,
    pub to: Point2,
    /// Fade parameter: starting point index over (point count − 1).
    /// 0.0 at the oldest point, approaching 1.0 at the newest.
    pub t: f32,
}

/// Bounded palm-center history per hand enumeration index.
#[derive(Debug, Clone)]
pub struct TrajectoryTracker {
    capacity: usize,
    tracks: BTreeMap<usize, VecDeque<Point2>>,
}

impl TrajectoryTracker {
    /// Create a tracker whose per-hand buffers hold at most `capacity` points.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            tracks: BTreeMap::new(),
        }
    }

    /// Append the hand's palm center to its trajectory, evicting the oldest
    /// point when the buffer is full.
    pub fn update(&mut self, hand_id: usize, hand: &HandObservation) {
        let track = self
            .tracks
            .entry(hand_id)
            .or_insert_with(|| VecDeque::with_capacity(self.capacity));
        if track.len() == self.capacity {
            track.pop_front();
        }
        track.push_back(hand.palm_center());
    }

    /// Buffered points for one hand, oldest first.
    pub fn points(&self, hand_id: usize) -> Option<&VecDeque<Point2>> {
        self.tracks.get(&hand_id)
    }

    /// Hand indices with at least one buffered point.
    pub fn hand_ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.tracks.keys().copied()
    }

    /// Consecutive-point segments for one hand's trail, with fade parameters
    /// for the renderer. Empty if the hand has fewer than two points.
    pub fn segments(&self, hand_id: usize) -> Vec<TrailSegment> {
        let Some(track) = self.tracks.get(&hand_id) else {
            return Vec::new();
        };
        let n = track.len();
        if n < 2 {
            return Vec::new();
        }
        track
            .iter()
            .zip(track.iter().skip(1))
            .enumerate()
            .map(|(i, (from, to))| TrailSegment {
                from: *from,
                to: *to,
                t: i as f32 / (n - 1) as f32,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::fixtures::uniform_hand;

    #[test]
    fn buffer_never_exceeds_capacity() {
        let mut tracker = TrajectoryTracker::new(4);
        for i in 0..5 {
            tracker.update(0, &uniform_hand(0.1 * i as f32, 0.5, 0.0));
        }

        let points = tracker.points(0).unwrap();
        assert_eq!(points.len(), 4);
        // Oldest point (x = 0.0) was evicted; the rest are in insertion order.
        for (slot, point) in points.iter().enumerate() {
            let expected = 0.1 * (slot + 1) as f32;
            assert!((point.x - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn tracks_are_independent_per_hand() {
        let mut tracker = TrajectoryTracker::new(8);
        tracker.update(0, &uniform_hand(0.1, 0.1, 0.0));
        tracker.update(1, &uniform_hand(0.9, 0.9, 0.0));

        assert_eq!(tracker.points(0).unwrap().len(), 1);
        assert_eq!(tracker.points(1).unwrap().len(), 1);
        assert_eq!(tracker.hand_ids().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn segments_carry_fade_parameter() {
        let mut tracker = TrajectoryTracker::new(8);
        for i in 0..3 {
            tracker.update(0, &uniform_hand(0.1 * i as f32, 0.5, 0.0));
        }

        let segments = tracker.segments(0);
        assert_eq!(segments.len(), 2);
        assert!((segments[0].t - 0.0).abs() < 1e-6);
        assert!((segments[1].t - 0.5).abs() < 1e-6);
    }

    #[test]
    fn no_segments_for_single_point() {
        let mut tracker = TrajectoryTracker::new(8);
        tracker.update(0, &uniform_hand(0.5, 0.5, 0.0));
        assert!(tracker.segments(0).is_empty());
        assert!(tracker.segments(7).is_empty());
    }
}
