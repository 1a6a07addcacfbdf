//! Error types for the gesture recognition core.

/// Errors produced by the gesture recognition core and its boundaries.
#[derive(Debug, thiserror::Error)]
pub enum HandwaveError {
    /// A hand observation did not carry exactly 21 landmarks. Raised before
    /// any classification runs; a malformed frame never yields a label.
    #[error("malformed hand observation: expected 21 landmarks, got {0}")]
    MalformedObservation(usize),

    /// The incoming frame payload was not valid base64.
    #[error("frame payload is not valid base64: {0}")]
    Payload(#[from] base64::DecodeError),

    /// The incoming frame payload carried no image data.
    #[error("frame payload is empty")]
    EmptyPayload,

    /// A wire message failed to parse or serialize.
    #[error("wire message error: {0}")]
    Wire(#[from] serde_json::Error),

    /// The client requested a control mode this build does not know.
    #[error("unknown control mode: {0:?}")]
    UnknownMode(String),

    /// Configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// The frame codec could not decode or encode an image.
    #[error("frame codec error: {0}")]
    Codec(String),

    /// The underlying landmark source failed.
    #[error("landmark source error: {0}")]
    Source(#[from] anyhow::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, HandwaveError>;
