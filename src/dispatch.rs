//! Gesture-to-command reducers.
//!
//! Pure state transitions: a recognized gesture either mutates view state
//! (page, zoom, rotation) or switches the operating mode. Side effects
//! (mouse, volume, keystrokes) live behind the `actions` boundary.

use serde::{Deserialize, Serialize};

use crate::error::{HandwaveError, Result};
use crate::gesture::{Gesture, StaticGesture};

/// Navigable document/view state driven by static gestures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub page: u32,
    pub total_pages: u32,
    pub zoom: f32,
    pub rotation: u16,
}

impl ViewState {
    /// Fresh view state for a document with `total_pages` pages.
    pub fn new(total_pages: u32) -> Self {
        Self {
            page: 0,
            total_pages: total_pages.max(1),
            zoom: 1.0,
            rotation: 0,
        }
    }

    /// Apply one gesture. Unrecognized gestures leave the state unchanged.
    pub fn apply(&mut self, gesture: &Gesture) {
        let Gesture::Static(gesture) = gesture else {
            return;
        };
        match gesture {
            StaticGesture::OpenPalm => {
                self.page = (self.page + 1).min(self.total_pages - 1);
            }
            StaticGesture::ClosedFist => {
                self.page = self.page.saturating_sub(1);
            }
            StaticGesture::Fingers(2) => {
                self.zoom = (self.zoom * 1.1).min(3.0);
            }
            StaticGesture::Fingers(3) => {
                self.zoom = (self.zoom * 0.9).max(0.5);
            }
            StaticGesture::Fingers(4) => {
                self.rotation = (self.rotation + 90) % 360;
            }
            // Reserved for a future pan mode.
            StaticGesture::Fingers(1) => {}
            StaticGesture::Fingers(_) => {}
        }
    }
}

/// Operating modes for the control loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlMode {
    #[default]
    Normal,
    Mouse,
    Volume,
    Drawing,
}

impl ControlMode {
    /// Mode name as it travels on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            ControlMode::Normal => "normal",
            ControlMode::Mouse => "mouse",
            ControlMode::Volume => "volume",
            ControlMode::Drawing => "drawing",
        }
    }

    /// The mode a gesture switches to, if it is a mode-switch gesture.
    ///
    /// Mode switches ride on custom templates recorded under well-known
    /// names; static and swipe gestures never switch modes.
    pub fn for_gesture(gesture: &Gesture) -> Option<ControlMode> {
        let Gesture::Custom(name) = gesture else {
            return None;
        };
        match name.as_str() {
            "5 Fingers Up" => Some(ControlMode::Normal),
            "Pinch" => Some(ControlMode::Mouse),
            "Victory" => Some(ControlMode::Volume),
            "ILY" => Some(ControlMode::Drawing),
            _ => None,
        }
    }
}

/// Current operating mode plus the state it scopes.
///
/// Switching modes clears the drawing canvas, so strokes never leak from
/// one drawing session into the next.
#[derive(Debug, Clone, Default)]
pub struct ModeState {
    mode: ControlMode,
    canvas: crate::canvas::DrawingCanvas,
}

impl ModeState {
    /// Create mode state starting in normal mode with an empty canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode.
    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    /// The drawing canvas, active while in drawing mode.
    pub fn canvas(&self) -> &crate::canvas::DrawingCanvas {
        &self.canvas
    }

    /// Mutable canvas access for drawing-mode frame processing.
    pub fn canvas_mut(&mut self) -> &mut crate::canvas::DrawingCanvas {
        &mut self.canvas
    }

    /// Switch to `mode`. A real switch clears the canvas; re-asserting the
    /// current mode is a no-op.
    pub fn set_mode(&mut self, mode: ControlMode) {
        if mode != self.mode {
            self.mode = mode;
            self.canvas.clear();
        }
    }

    /// Apply a mode-switch gesture, if it is one.
    pub fn apply(&mut self, gesture: &Gesture) {
        if let Some(mode) = ControlMode::for_gesture(gesture) {
            self.set_mode(mode);
        }
    }
}

impl std::str::FromStr for ControlMode {
    type Err = HandwaveError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "normal" => Ok(ControlMode::Normal),
            "mouse" => Ok(ControlMode::Mouse),
            "volume" => Ok(ControlMode::Volume),
            "drawing" => Ok(ControlMode::Drawing),
            other => Err(HandwaveError::UnknownMode(other.to_string())),
        }
    }
}
