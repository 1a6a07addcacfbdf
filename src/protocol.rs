//! Wire messages and the per-connection session.
//!
//! One message in carries a base64 frame plus a mode string; one message out
//! carries the recognized gesture labels plus the re-encoded frame. Each
//! message is processed to completion before the next; a session never
//! interleaves two frames.

use std::time::Instant;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::ControllerConfig;
use crate::controller::GestureController;
use crate::dispatch::{ControlMode, ModeState};
use crate::error::{HandwaveError, Result};
use crate::gesture::Gesture;
use crate::source::{FrameCodec, LandmarkSource};

/// Incoming frame message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameRequest {
    /// Base64 image, with or without a `data:image/...;base64,` prefix.
    pub image: String,
    /// Requested control mode ("normal", "mouse", "volume", "drawing").
    pub mode: String,
}

impl FrameRequest {
    /// Parse a request from its JSON wire form.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Decode the image payload, stripping any data-URL prefix.
    pub fn image_bytes(&self) -> Result<Vec<u8>> {
        let payload = match self.image.rsplit_once(',') {
            Some((_, data)) => data,
            None => self.image.as_str(),
        };
        if payload.is_empty() {
            return Err(HandwaveError::EmptyPayload);
        }
        Ok(BASE64.decode(payload)?)
    }

    /// The control mode this request asks for.
    pub fn control_mode(&self) -> Result<ControlMode> {
        self.mode.parse()
    }
}

/// Outgoing result message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameResponse {
    /// Recognized gesture labels, in detection order.
    pub gestures: Vec<String>,
    /// Annotated frame as a JPEG data URL.
    pub processed_image: String,
}

impl FrameResponse {
    /// Build a response from recognized gestures and encoded image bytes.
    pub fn new(gestures: &[Gesture], jpeg: &[u8]) -> Self {
        Self {
            gestures: gestures.iter().map(Gesture::label).collect(),
            processed_image: format!("data:image/jpeg;base64,{}", BASE64.encode(jpeg)),
        }
    }

    /// Serialize to the JSON wire form.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// One connection's processing session.
///
/// Owns its own controller, so state (trajectories, swipe window, custom
/// templates) is never shared across connections. The landmark source and
/// codec are generic over a shared frame type; both are black boxes to the
/// core.
pub struct Session<S, C>
where
    S: LandmarkSource,
    C: FrameCodec<Frame = S::Frame>,
{
    source: S,
    codec: C,
    controller: GestureController,
    mode: ModeState,
}

impl<S, C> Session<S, C>
where
    S: LandmarkSource,
    C: FrameCodec<Frame = S::Frame>,
{
    /// Create a session with default configuration.
    pub fn new(source: S, codec: C) -> Self {
        Self::with_config(source, codec, ControllerConfig::default())
    }

    /// Create a session with explicit configuration.
    pub fn with_config(source: S, codec: C, config: ControllerConfig) -> Self {
        Self {
            source,
            codec,
            controller: GestureController::new(config),
            mode: ModeState::new(),
        }
    }

    /// Process one incoming JSON message.
    ///
    /// Returns the serialized response, or `None` if this frame failed;
    /// the error is reported here and the session stays usable, so the
    /// enclosing loop simply moves on to the next message.
    pub fn handle_message(&mut self, text: &str, now: Instant) -> Option<String> {
        match self.try_handle(text, now) {
            Ok(response) => Some(response),
            Err(error) => {
                warn!(%error, "dropping frame");
                None
            }
        }
    }

    fn try_handle(&mut self, text: &str, now: Instant) -> Result<String> {
        let request = FrameRequest::from_json(text)?;
        self.mode.set_mode(request.control_mode()?);

        let bytes = request.image_bytes()?;
        let frame = self.codec.decode(&bytes)?;
        let hands = self.source.detect(&frame)?;
        let report = self.controller.process_frame(&hands, now);

        if self.mode.mode() == ControlMode::Drawing {
            for hand in &hands {
                self.mode.canvas_mut().observe(hand);
            }
        }
        for gesture in &report.gestures {
            self.mode.apply(gesture);
        }

        // Annotation is the renderer's job; the frame goes back as-is.
        let encoded = self.codec.encode(&frame)?;
        FrameResponse::new(&report.gestures, &encoded).to_json()
    }

    /// The mode most recently requested by the client.
    pub fn mode(&self) -> ControlMode {
        self.mode.mode()
    }

    /// The drawing canvas accumulated while in drawing mode.
    pub fn canvas(&self) -> &crate::canvas::DrawingCanvas {
        self.mode.canvas()
    }

    /// The session's recognition state.
    pub fn controller(&self) -> &GestureController {
        &self.controller
    }

    /// Mutable access, e.g. for recording custom templates.
    pub fn controller_mut(&mut self) -> &mut GestureController {
        &mut self.controller
    }
}
