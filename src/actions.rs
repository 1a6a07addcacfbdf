//! Mapping hand poses and gestures to OS-level action commands.
//!
//! Everything here is pure computation: commands come out as data, and the
//! `ActionSink` trait is the boundary behind which mouse movement, volume
//! changes, and keystroke injection actually happen. The core never retries
//! or verifies those side effects.

use crate::gesture::{Gesture, StaticGesture};
use crate::landmark::{HandObservation, INDEX_TIP, PINKY_TIP, THUMB_TIP};

/// Named keyboard shortcuts invocable by gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Spotlight,
    CloseWindow,
    AppSwitcher,
    Minimize,
    QuitApp,
}

/// A single OS-level action the host should perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActionCommand {
    /// Move the cursor to a normalized screen position.
    MoveCursor { x: f32, y: f32 },
    /// Click at the current cursor position.
    Click,
    /// Set the system volume, 0–100.
    SetVolume(u8),
    /// Invoke a named shortcut.
    Invoke(Shortcut),
}

/// Boundary for executing action commands. Implementations live outside the
/// core (OS automation, test doubles).
pub trait ActionSink {
    fn execute(&mut self, command: ActionCommand);
}

/// The shortcut a static gesture invokes, if any.
pub fn shortcut_for(gesture: &Gesture) -> Option<Shortcut> {
    let Gesture::Static(gesture) = gesture else {
        return None;
    };
    match gesture {
        StaticGesture::OpenPalm => Some(Shortcut::Spotlight),
        StaticGesture::ClosedFist => Some(Shortcut::CloseWindow),
        StaticGesture::Fingers(2) => Some(Shortcut::AppSwitcher),
        StaticGesture::Fingers(3) => Some(Shortcut::Minimize),
        StaticGesture::Fingers(4) => Some(Shortcut::QuitApp),
        StaticGesture::Fingers(_) => None,
    }
}

/// Mouse-mode command computation: cursor follows the index tip, a
/// thumb-to-index pinch clicks.
#[derive(Debug, Clone)]
pub struct MouseControl {
    /// Thumb-to-index distance below which a pinch counts as a click.
    pub click_threshold: f32,
}

impl Default for MouseControl {
    fn default() -> Self {
        Self {
            click_threshold: 0.05,
        }
    }
}

impl MouseControl {
    /// Commands for one frame of mouse mode.
    pub fn commands(&self, hand: &HandObservation) -> Vec<ActionCommand> {
        let index_tip = hand[INDEX_TIP];
        let mut commands = vec![ActionCommand::MoveCursor {
            x: index_tip.x,
            y: index_tip.y,
        }];

        if hand[THUMB_TIP].distance(&index_tip) < self.click_threshold {
            commands.push(ActionCommand::Click);
        }

        commands
    }
}

/// Volume-mode command computation: the thumb-to-pinky spread maps to a
/// 0–100 level; updates under the hysteresis step are suppressed to avoid
/// jitter.
#[derive(Debug, Clone)]
pub struct VolumeControl {
    level: u8,
    hysteresis: u8,
}

impl Default for VolumeControl {
    fn default() -> Self {
        Self {
            level: 50,
            hysteresis: 5,
        }
    }
}

impl VolumeControl {
    /// Current volume level, 0–100.
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Command for one frame of volume mode, if the level moved enough.
    pub fn command(&mut self, hand: &HandObservation) -> Option<ActionCommand> {
        let spread = hand[THUMB_TIP].distance(&hand[PINKY_TIP]);
        let target = (spread * 200.0).clamp(0.0, 100.0) as u8;

        if target.abs_diff(self.level) > self.hysteresis {
            self.level = target;
            Some(ActionCommand::SetVolume(target))
        } else {
            None
        }
    }
}
