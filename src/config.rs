//! Controller configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Tunable parameters for a gesture recognition session.
///
/// All thresholds are in normalized frame units; the swipe window is in
/// seconds. Deserializes from TOML with per-field defaults, so a config
/// file only needs the fields it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Maximum hands processed per frame.
    pub max_hands: usize,
    /// Points retained per hand trajectory.
    pub trajectory_length: usize,
    /// Swipe collection window, seconds.
    pub swipe_window_secs: f32,
    /// Minimum net displacement for a swipe.
    pub swipe_threshold: f32,
    /// Minimum samples for a swipe window to produce a verdict.
    pub min_swipe_samples: usize,
    /// Maximum mean landmark distance for a custom-template match.
    pub match_threshold: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            max_hands: 2,
            trajectory_length: 32,
            swipe_window_secs: 1.0,
            swipe_threshold: 0.2,
            min_swipe_samples: 10,
            match_threshold: 0.2,
        }
    }
}

impl ControllerConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Swipe window as a `Duration`.
    pub fn swipe_window(&self) -> Duration {
        Duration::from_secs_f32(self.swipe_window_secs.max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = ControllerConfig::default();
        assert_eq!(config.max_hands, 2);
        assert_eq!(config.trajectory_length, 32);
        assert_eq!(config.swipe_window(), Duration::from_secs(1));
        assert_eq!(config.min_swipe_samples, 10);
        assert!((config.swipe_threshold - 0.2).abs() < 1e-6);
        assert!((config.match_threshold - 0.2).abs() < 1e-6);
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let config = ControllerConfig::from_toml_str(
            r#"
            trajectory_length = 64
            swipe_window_secs = 0.5
            "#,
        )
        .unwrap();

        assert_eq!(config.trajectory_length, 64);
        assert_eq!(config.swipe_window(), Duration::from_millis(500));
        assert_eq!(config.max_hands, 2);
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(ControllerConfig::from_toml_str("max_hands = \"two\"").is_err());
    }
}
