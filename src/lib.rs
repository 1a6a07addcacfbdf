//! handwave: gesture recognition over hand-landmark streams.
//!
//! The crate interprets per-frame hand observations (21 3-D keypoints per
//! hand, produced by an external pose estimator) into gesture events and
//! maps them to user-facing commands:
//!
//! - **Static classification**: per-finger extension rules turn one frame's
//!   landmarks into fist / palm / finger-count gestures
//! - **Trajectory tracking**: bounded palm-center history per hand, for
//!   rendering fading motion trails
//! - **Swipe detection**: time-windowed displacement analysis of the wrist
//! - **Custom gestures**: user-recorded landmark templates matched by
//!   nearest-neighbor distance
//! - **Dispatch**: pure reducers turning gestures into view-state changes,
//!   mode switches, and OS action commands
//!
//! All state lives in a per-session [`GestureController`] (or a
//! [`protocol::Session`] wrapping one behind the wire boundary); nothing is
//! process-global. Processing is synchronous and frame-at-a-time.
//!
//! ```
//! use std::time::Instant;
//! use handwave::{GestureController, HandObservation, Landmark};
//!
//! let mut controller = GestureController::default();
//! let hand = HandObservation::from_landmarks(vec![Landmark::default(); 21])?;
//! let report = controller.process_frame(&[hand], Instant::now());
//! println!("{:?}", report.labels());
//! # Ok::<(), handwave::HandwaveError>(())
//! ```

pub mod actions;
pub mod canvas;
pub mod classify;
pub mod config;
pub mod controller;
pub mod custom;
pub mod dispatch;
pub mod error;
pub mod gesture;
pub mod history;
pub mod landmark;
pub mod protocol;
pub mod render;
pub mod source;
pub mod swipe;
pub mod trajectory;

// Re-export commonly used types
pub use config::ControllerConfig;
pub use controller::{FrameReport, GestureController};
pub use custom::CustomGestureSet;
pub use dispatch::{ControlMode, ViewState};
pub use error::{HandwaveError, Result};
pub use gesture::{Gesture, StaticGesture, SwipeDirection};
pub use history::GestureHistory;
pub use landmark::{HandObservation, Landmark, Point2, LANDMARK_COUNT};
pub use source::{FrameCodec, LandmarkSource};
pub use swipe::SwipeDetector;
pub use trajectory::{TrailSegment, TrajectoryTracker};
