//! Per-session gesture recognition pipeline.

use std::time::Instant;

use tracing::{debug, trace};

use crate::classify;
use crate::config::ControllerConfig;
use crate::custom::CustomGestureSet;
use crate::gesture::Gesture;
use crate::history::GestureHistory;
use crate::landmark::HandObservation;
use crate::swipe::SwipeDetector;
use crate::trajectory::TrajectoryTracker;

/// Everything recognized in one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    /// Gestures in hand-enumeration order; a hand may contribute a static
    /// gesture, a swipe, and a custom match in the same frame.
    pub gestures: Vec<Gesture>,
    /// Hands processed this frame (after the max-hands cap).
    pub hands: usize,
}

impl FrameReport {
    /// User-facing labels, in detection order.
    pub fn labels(&self) -> Vec<String> {
        self.gestures.iter().map(Gesture::label).collect()
    }
}

/// One session's gesture recognition state.
///
/// Owns every piece of mutable recognition state: trajectories keyed by the
/// per-frame hand enumeration index, the swipe window, custom templates, and
/// the gesture history. One controller per logical session; sharing one
/// across connections mixes their buffers.
///
/// The swipe window is a single buffer shared by all hands, not per-hand.
/// With two hands in frame both feed the same window; revisit only with
/// real per-hand tracklet assignment.
#[derive(Debug)]
pub struct GestureController {
    config: ControllerConfig,
    trajectories: TrajectoryTracker,
    swipe: SwipeDetector,
    custom: CustomGestureSet,
    history: GestureHistory,
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}

impl GestureController {
    /// Create a controller with the given tunables.
    pub fn new(config: ControllerConfig) -> Self {
        let trajectories = TrajectoryTracker::new(config.trajectory_length);
        let swipe = SwipeDetector::new(
            config.swipe_window(),
            config.swipe_threshold,
            config.min_swipe_samples,
        );
        Self {
            config,
            trajectories,
            swipe,
            custom: CustomGestureSet::new(),
            history: GestureHistory::default(),
        }
    }

    /// Run the full pipeline for one frame's detected hands.
    ///
    /// Hands are processed in enumeration order and each runs the static
    /// classifier, the trajectory update, the shared swipe detector (fed the
    /// wrist position), and the custom matcher. Runs to completion before
    /// the next frame; there is no intra-frame suspension.
    pub fn process_frame(&mut self, hands: &[HandObservation], now: Instant) -> FrameReport {
        let mut gestures = Vec::new();
        let hands = &hands[..hands.len().min(self.config.max_hands)];

        for (hand_id, hand) in hands.iter().enumerate() {
            self.trajectories.update(hand_id, hand);

            let static_gesture = classify::classify(hand);
            trace!(hand_id, gesture = %static_gesture, "static gesture");
            gestures.push(Gesture::Static(static_gesture));

            if let Some(direction) = self.swipe.observe(hand.wrist(), now) {
                debug!(hand_id, %direction, "swipe detected");
                gestures.push(Gesture::Swipe(direction));
            }

            if let Some(name) = self.custom.best_match(hand, self.config.match_threshold) {
                debug!(hand_id, name, "custom gesture matched");
                gestures.push(Gesture::Custom(name.to_string()));
            }
        }

        self.history.record(&gestures);
        debug!(hands = hands.len(), gestures = gestures.len(), "frame processed");

        FrameReport {
            gestures,
            hands: hands.len(),
        }
    }

    /// Record the hand's current pose as a custom gesture template.
    pub fn record_custom(&mut self, name: impl Into<String>, hand: &HandObservation) {
        self.custom.record(name, hand);
    }

    /// Recorded custom templates.
    pub fn custom_gestures(&self) -> &CustomGestureSet {
        &self.custom
    }

    /// Per-hand trajectories, for rendering.
    pub fn trajectories(&self) -> &TrajectoryTracker {
        &self.trajectories
    }

    /// Recent gesture log.
    pub fn history(&self) -> &GestureHistory {
        &self.history
    }

    /// Active configuration.
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::{StaticGesture, SwipeDirection};
    use crate::landmark::fixtures;
    use std::time::Duration;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn empty_frame_reports_nothing() {
        init_tracing();
        let mut controller = GestureController::default();
        let report = controller.process_frame(&[], Instant::now());
        assert!(report.gestures.is_empty());
        assert_eq!(report.hands, 0);
        assert!(controller.history().is_empty());
    }

    #[test]
    fn static_gestures_in_hand_order() {
        let mut controller = GestureController::default();
        let report = controller.process_frame(
            &[fixtures::open_palm(), fixtures::closed_fist()],
            Instant::now(),
        );

        assert_eq!(
            report.gestures,
            vec![
                Gesture::Static(StaticGesture::OpenPalm),
                Gesture::Static(StaticGesture::ClosedFist),
            ]
        );
        assert_eq!(report.labels(), vec!["Open Palm", "Closed Fist"]);
        assert_eq!(report.hands, 2);
    }

    #[test]
    fn max_hands_cap_applies() {
        let mut controller = GestureController::default();
        let hands = vec![fixtures::open_palm(); 4];
        let report = controller.process_frame(&hands, Instant::now());
        assert_eq!(report.hands, 2);
        assert_eq!(report.gestures.len(), 2);
    }

    #[test]
    fn swipe_emerges_from_moving_wrist() {
        init_tracing();
        let mut controller = GestureController::default();
        let t0 = Instant::now();

        let mut swipes = Vec::new();
        for i in 0..=20u32 {
            let x = 0.2 + 0.5 * (i as f32 / 20.0);
            let mut points = fixtures::open_palm().landmarks().to_vec();
            points[crate::landmark::WRIST].x = x;
            let hand = HandObservation::from_landmarks(points).unwrap();

            let now = t0 + Duration::from_millis(60 * u64::from(i));
            let report = controller.process_frame(&[hand], now);
            swipes.extend(
                report
                    .gestures
                    .into_iter()
                    .filter_map(|g| g.swipe_direction()),
            );
        }

        assert_eq!(swipes, vec![SwipeDirection::Right]);
    }

    #[test]
    fn custom_match_reports_template_name() {
        let mut controller = GestureController::default();
        let pose = fixtures::fingers_up(2);
        controller.record_custom("Victory", &pose);

        let report = controller.process_frame(&[pose], Instant::now());
        assert!(report.gestures.contains(&Gesture::Custom("Victory".into())));
        assert!(report.labels().contains(&"Custom: Victory".to_string()));
    }

    #[test]
    fn history_accumulates_across_frames() {
        let mut controller = GestureController::default();
        let t0 = Instant::now();
        for i in 0..12u64 {
            // Spaced closely so no swipe window closes mid-test.
            controller.process_frame(
                &[fixtures::closed_fist()],
                t0 + Duration::from_millis(i * 10),
            );
        }
        assert_eq!(controller.history().len(), 10);
    }

    #[test]
    fn trajectories_track_per_hand() {
        let mut controller = GestureController::default();
        let t0 = Instant::now();
        for i in 0..3u64 {
            controller.process_frame(
                &[fixtures::open_palm(), fixtures::closed_fist()],
                t0 + Duration::from_millis(i * 10),
            );
        }
        assert_eq!(controller.trajectories().points(0).unwrap().len(), 3);
        assert_eq!(controller.trajectories().points(1).unwrap().len(), 3);
    }
}
