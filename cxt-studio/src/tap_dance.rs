//! Tap dances of the macro pad.
//!
//! A dance key counts consecutive taps. The count is resolved when the tapping term
//! after the last tap expires, or when another key is pressed in between. The
//! resolved count then selects what the dance emits, see [`TapDanceAction::resolve`].

use embassy_time::{Duration, Instant};

use crate::config::ClipboardConfig;
use crate::hid::HidReportWriter;
use crate::keyboard_macro::with_modifier;
use crate::keycode::HidKeyCode;
use crate::keycode::modifier::ModifierCombination;
use crate::reporter::Reporter;

/// Number of tap dances on the macro pad
pub const TAP_DANCE_NUM: usize = 2;

/// Tap dances referenced by `td!(index)` in the keymap
pub const TAP_DANCE_ACTIONS: [TapDanceAction; TAP_DANCE_NUM] =
    [TapDanceAction::CopyCopyAll, TapDanceAction::PastePasteAll];

/// What a tap dance does once its tap count is known
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TapDanceAction {
    /// Tap once to copy, twice to copy all
    CopyCopyAll,
    /// Tap once to paste, twice to copy all
    PastePasteAll,
}

impl TapDanceAction {
    /// Emit the action for a finished dance with the default clipboard modifier
    pub fn resolve<W: HidReportWriter>(&self, count: u8, reporter: &mut Reporter<W>) {
        self.resolve_with(count, ClipboardConfig::default().modifier, reporter)
    }

    /// Emit the action for a finished dance.
    ///
    /// One tap sends the single chord, two taps send `modifier + "ac"` for both dances.
    /// Other counts do nothing.
    pub fn resolve_with<W: HidReportWriter>(&self, count: u8, modifier: ModifierCombination, reporter: &mut Reporter<W>) {
        debug!("Resolving tap dance {:?} with {} taps", self, count);
        match count {
            1 => reporter.tap_code16(self.single_tap_key(), modifier),
            2 => reporter.send_string(&with_modifier(modifier, "ac")),
            _ => debug!("No action for {} taps of {:?}", count, self),
        }
    }

    fn single_tap_key(&self) -> HidKeyCode {
        match self {
            TapDanceAction::CopyCopyAll => HidKeyCode::C,
            TapDanceAction::PastePasteAll => HidKeyCode::V,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TapDanceState {
    /// No dance in progress
    Idle,
    /// Taps are being counted, another tap before `deadline` continues the dance
    Counting { count: u8, deadline: Instant },
    /// The count is final, the action fires and the dance goes back to `Idle`
    Resolved(u8),
}

/// Tap counter of a single dance key
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapDance {
    action: TapDanceAction,
    state: TapDanceState,
}

impl TapDance {
    pub const fn new(action: TapDanceAction) -> Self {
        Self {
            action,
            state: TapDanceState::Idle,
        }
    }

    pub fn action(&self) -> TapDanceAction {
        self.action
    }

    pub fn state(&self) -> TapDanceState {
        self.state
    }

    pub fn is_counting(&self) -> bool {
        matches!(self.state, TapDanceState::Counting { .. })
    }

    /// Register a tap at `now`.
    ///
    /// If a previous dance already timed out without being polled, its count is
    /// resolved and returned, and the tap starts a new dance.
    pub fn tap(&mut self, now: Instant, tapping_term: Duration) -> Option<u8> {
        let (resolved, count) = match self.state {
            TapDanceState::Counting { count, deadline } if now < deadline => (None, count.saturating_add(1)),
            TapDanceState::Counting { .. } => (self.resolve(), 1),
            _ => (None, 1),
        };
        self.state = TapDanceState::Counting {
            count,
            deadline: now + tapping_term,
        };
        trace!("Tap dance {:?} counting {} taps", self.action, count);
        resolved
    }

    /// Another key was pressed, finish the dance with the taps counted so far
    pub fn interrupt(&mut self) -> Option<u8> {
        if self.is_counting() { self.resolve() } else { None }
    }

    /// Finish the dance if the tapping term after the last tap has expired
    pub fn poll(&mut self, now: Instant) -> Option<u8> {
        match self.state {
            TapDanceState::Counting { deadline, .. } if now >= deadline => self.resolve(),
            _ => None,
        }
    }

    fn resolve(&mut self) -> Option<u8> {
        if let TapDanceState::Counting { count, .. } = self.state {
            self.state = TapDanceState::Resolved(count);
        }
        match self.state {
            TapDanceState::Resolved(count) => {
                self.state = TapDanceState::Idle;
                Some(count)
            }
            _ => None,
        }
    }
}
