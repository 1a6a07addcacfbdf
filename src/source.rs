//! Boundary to the external hand-pose estimator.

use crate::error::Result;
use crate::landmark::HandObservation;

/// Black-box hand-pose estimator: given a decoded frame, produce the
/// landmark sets of every detected hand, in the estimator's enumeration
/// order. That order is the hand identity used for per-hand state.
///
/// Implementations holding an underlying detector resource must release it
/// on every exit path; tie the release to `Drop` so closing a session,
/// a frame-loop error, and process shutdown all free it.
pub trait LandmarkSource {
    /// Decoded frame type, opaque to the core.
    type Frame;

    /// Detect hands in one frame. An empty result is not an error.
    fn detect(&mut self, frame: &Self::Frame) -> Result<Vec<HandObservation>>;
}

/// Encode/decode boundary for frame pixels. Purely cosmetic on the way out:
/// the annotated image is re-encoded and returned to the client.
pub trait FrameCodec {
    /// Decoded frame type, shared with the landmark source.
    type Frame;

    /// Decode raw image bytes into a frame.
    fn decode(&self, bytes: &[u8]) -> Result<Self::Frame>;

    /// Encode a frame back into image bytes.
    fn encode(&self, frame: &Self::Frame) -> Result<Vec<u8>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// A source whose detector handle is released on Drop, the lifecycle
    /// contract every real implementation must follow.
    struct ScopedSource {
        released: Rc<Cell<bool>>,
    }

    impl LandmarkSource for ScopedSource {
        type Frame = ();

        fn detect(&mut self, _frame: &()) -> Result<Vec<HandObservation>> {
            Err(anyhow::anyhow!("detector offline").into())
        }
    }

    impl Drop for ScopedSource {
        fn drop(&mut self) {
            self.released.set(true);
        }
    }

    #[test]
    fn source_releases_on_every_exit_path() {
        let released = Rc::new(Cell::new(false));

        let result = {
            let mut source = ScopedSource {
                released: Rc::clone(&released),
            };
            source.detect(&())
        };

        // The error path still released the handle when the scope closed.
        assert!(result.is_err());
        assert!(released.get());
    }
}
