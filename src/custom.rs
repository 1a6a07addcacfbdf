//! User-recorded gesture templates and nearest-neighbor matching.

use crate::landmark::{HandObservation, Landmark, LANDMARK_COUNT};

#[derive(Debug, Clone)]
struct Template {
    name: String,
    points: [Landmark; LANDMARK_COUNT],
}

/// A set of named landmark-pattern templates.
///
/// Templates are kept in insertion order, so ties on match distance break
/// deterministically toward the first-recorded template. Re-recording a name
/// overwrites its pattern in place.
#[derive(Debug, Clone, Default)]
pub struct CustomGestureSet {
    templates: Vec<Template>,
}

impl CustomGestureSet {
    /// Create an empty template set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the hand's current 21-point pose under `name`, overwriting any
    /// existing template of that name.
    pub fn record(&mut self, name: impl Into<String>, hand: &HandObservation) {
        let name = name.into();
        let points = *hand.landmarks();
        if let Some(existing) = self.templates.iter_mut().find(|t| t.name == name) {
            existing.points = points;
        } else {
            self.templates.push(Template { name, points });
        }
    }

    /// Match the hand against all templates.
    ///
    /// The score for a template is the mean over the 21 point pairs of the
    /// 3-D Euclidean distance between corresponding points. A template is
    /// eligible only if its score is strictly below `threshold`; the lowest
    /// eligible score wins. Returns `None` with no templates recorded or no
    /// eligible template.
    pub fn best_match(&self, hand: &HandObservation, threshold: f32) -> Option<&str> {
        let mut best: Option<(&str, f32)> = None;

        for template in &self.templates {
            let distance = mean_distance(hand.landmarks(), &template.points);
            if distance < threshold && best.map_or(true, |(_, d)| distance < d) {
                best = Some((&template.name, distance));
            }
        }

        best.map(|(name, _)| name)
    }

    /// Recorded template names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(|t| t.name.as_str())
    }

    /// Number of recorded templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// True if no templates are recorded.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn mean_distance(a: &[Landmark; LANDMARK_COUNT], b: &[Landmark; LANDMARK_COUNT]) -> f32 {
    let total: f32 = a.iter().zip(b.iter()).map(|(p, q)| p.distance(q)).sum();
    total / LANDMARK_COUNT as f32
}
