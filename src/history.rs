//! Rolling log of recently recognized gestures.

use std::collections::VecDeque;

use crate::gesture::Gesture;

/// Default number of gestures retained.
pub const DEFAULT_CAPACITY: usize = 10;

/// Bounded FIFO of recognized gestures, oldest evicted on overflow.
#[derive(Debug, Clone)]
pub struct GestureHistory {
    capacity: usize,
    entries: VecDeque<Gesture>,
}

impl Default for GestureHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl GestureHistory {
    /// Create a history retaining at most `capacity` gestures.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: VecDeque::with_capacity(capacity.max(1)),
        }
    }

    /// Append one frame's detections in detection order.
    pub fn record(&mut self, gestures: &[Gesture]) {
        for gesture in gestures {
            if self.entries.len() == self.capacity {
                self.entries.pop_front();
            }
            self.entries.push_back(gesture.clone());
        }
    }

    /// The last `n` gestures, most recent first, for display.
    pub fn recent(&self, n: usize) -> Vec<&Gesture> {
        self.entries.iter().rev().take(n).collect()
    }

    /// All retained gestures, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Gesture> {
        self.entries.iter()
    }

    /// Number of retained gestures.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
