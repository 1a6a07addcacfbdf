//! Hand landmark primitives.
//!
//! Coordinates follow the pose estimator's convention: x and y are
//! normalized to [0, 1] relative to the frame (y grows downward, image
//! style), z is a relative depth with no absolute unit.

use serde::{Deserialize, Serialize};

use crate::error::{HandwaveError, Result};

/// Number of landmarks per detected hand.
pub const LANDMARK_COUNT: usize = 21;

/// Wrist / palm base.
pub const WRIST: usize = 0;
/// Thumb tip.
pub const THUMB_TIP: usize = 4;
/// Index finger base knuckle.
pub const INDEX_MCP: usize = 5;
/// Index finger tip.
pub const INDEX_TIP: usize = 8;
/// Middle finger tip.
pub const MIDDLE_TIP: usize = 12;
/// Ring finger tip.
pub const RING_TIP: usize = 16;
/// Pinky base knuckle.
pub const PINKY_MCP: usize = 17;
/// Pinky tip.
pub const PINKY_TIP: usize = 20;

/// Tips of the four non-thumb fingers, index through pinky.
pub const FINGER_TIPS: [usize; 4] = [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

/// One 3-D keypoint of a detected hand pose.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    /// Create a new landmark.
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another landmark in all three coordinates.
    pub fn distance(&self, other: &Landmark) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// A 2-D point in normalized frame coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    /// Create a new 2-D point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point2) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// The full 21-landmark set for one detected hand in one frame.
///
/// Construction validates the landmark count; every downstream distance
/// computation can therefore assume same-length (21 vs 21) sequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandObservation {
    landmarks: [Landmark; LANDMARK_COUNT],
}

impl HandObservation {
    /// Build an observation from exactly 21 landmarks.
    ///
    /// Fails fast on any other count so a malformed frame never reaches
    /// the classifiers.
    pub fn from_landmarks(points: Vec<Landmark>) -> Result<Self> {
        let len = points.len();
        let landmarks: [Landmark; LANDMARK_COUNT] = points
            .try_into()
            .map_err(|_| HandwaveError::MalformedObservation(len))?;
        Ok(Self { landmarks })
    }

    /// All 21 landmarks in anatomical order.
    pub fn landmarks(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.landmarks
    }

    /// Palm center: unweighted mean of the wrist and the index/pinky base
    /// knuckles (landmarks 0, 5, 17). Used as the tracking anchor.
    pub fn palm_center(&self) -> Point2 {
        let anchors = [WRIST, INDEX_MCP, PINKY_MCP];
        let (mut x, mut y) = (0.0, 0.0);
        for &i in &anchors {
            x += self.landmarks[i].x;
            y += self.landmarks[i].y;
        }
        let n = anchors.len() as f32;
        Point2::new(x / n, y / n)
    }

    /// Wrist position in frame coordinates.
    pub fn wrist(&self) -> Point2 {
        Point2::new(self.landmarks[WRIST].x, self.landmarks[WRIST].y)
    }
}

impl std::ops::Index<usize> for HandObservation {
    type Output = Landmark;

    fn index(&self, index: usize) -> &Landmark {
        &self.landmarks[index]
    }
}
