//! Keyboard actions.
//!
//! - [`Action`] - Single operations that a key triggers
//! - [`KeyAction`] - What a keymap position does, including tap dances
//! - [`EncoderAction`] - Rotary encoder actions

use crate::keycode::KeyCode;

/// EncoderAction is the action at a encoder position, stored in encoder_map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderAction {
    counter_clockwise: KeyAction,
    clockwise: KeyAction,
}

impl Default for EncoderAction {
    fn default() -> Self {
        Self {
            counter_clockwise: KeyAction::No,
            clockwise: KeyAction::No,
        }
    }
}

impl EncoderAction {
    /// Create a new encoder action, counter-clockwise first.
    pub const fn new(counter_clockwise: KeyAction, clockwise: KeyAction) -> Self {
        Self {
            counter_clockwise,
            clockwise,
        }
    }

    /// Get the clockwise action.
    pub fn clockwise(&self) -> KeyAction {
        self.clockwise
    }

    /// Get the counter clockwise action.
    pub fn counter_clockwise(&self) -> KeyAction {
        self.counter_clockwise
    }
}

/// A KeyAction is the action at a keyboard position, stored in keymap.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action.
    No,
    /// Transparent action, next layer will be checked.
    Transparent,
    /// A single action. Triggered when pressed and cancelled when released.
    Single(Action),
    /// Tap dance action, references a tap dance by index.
    TapDance(u8),
}

/// A single basic action that a keyboard can execute.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// A key stroke of any keycode the keymap knows, including custom keycodes.
    Key(KeyCode),
}
