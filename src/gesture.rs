//! Recognized gesture types.
//!
//! Gestures are a tagged enum rather than free-form label strings, so an
//! unhandled case in a reducer is a compile-time concern. The `Display`
//! impls produce the exact user-facing labels ("Closed Fist", "Swipe Left",
//! "Custom: wave", ...) expected by clients.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A gesture classified from a single frame's landmark configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StaticGesture {
    /// Zero fingers extended.
    ClosedFist,
    /// All five fingers extended.
    OpenPalm,
    /// Between one and four fingers extended.
    Fingers(u8),
}

/// Direction of a swipe gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Any gesture the core can report for one hand in one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Gesture {
    /// Classified from the landmark configuration of one frame.
    Static(StaticGesture),
    /// Classified from palm displacement over a time window.
    Swipe(SwipeDirection),
    /// Matched against a user-recorded landmark template, by name.
    Custom(String),
}

impl Gesture {
    /// True for swipe gestures.
    pub fn is_swipe(&self) -> bool {
        matches!(self, Gesture::Swipe(_))
    }

    /// Swipe direction if this is a swipe gesture.
    pub fn swipe_direction(&self) -> Option<SwipeDirection> {
        match self {
            Gesture::Swipe(direction) => Some(*direction),
            _ => None,
        }
    }

    /// The user-facing label for this gesture.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StaticGesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StaticGesture::ClosedFist => write!(f, "Closed Fist"),
            StaticGesture::OpenPalm => write!(f, "Open Palm"),
            // "1 Fingers" is intentional; clients match on the historical label.
            StaticGesture::Fingers(n) => write!(f, "{n} Fingers"),
        }
    }
}

impl fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SwipeDirection::Left => "Left",
            SwipeDirection::Right => "Right",
            SwipeDirection::Up => "Up",
            SwipeDirection::Down => "Down",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gesture::Static(s) => write!(f, "{s}"),
            Gesture::Swipe(direction) => write!(f, "Swipe {direction}"),
            Gesture::Custom(name) => write!(f, "Custom: {name}"),
        }
    }
}
