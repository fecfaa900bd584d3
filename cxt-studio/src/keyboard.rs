use embassy_time::Instant;

use crate::KEYBOARD_NAME;
use crate::action::{Action, KeyAction};
use crate::config::BehaviorConfig;
use crate::event::{KeyEvent, RotaryEncoderEvent};
use crate::hid::HidReportWriter;
use crate::keycode::KeyCode;
use crate::keymap::KeyMap;
use crate::layer_state::LayerState;
use crate::process::CustomKeyHandler;
use crate::reporter::Reporter;
use crate::tap_dance::{TAP_DANCE_ACTIONS, TAP_DANCE_NUM, TapDance};

/// Result of processing an event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Disposition {
    /// The event was fully handled
    Handled,
    /// The firmware's default processing should run for the keycode
    Default(KeyCode),
}

/// Feeds key and encoder events through the keymap, the tap dances and the custom key handler
pub struct Keyboard<'a, W: HidReportWriter, const ROW: usize, const COL: usize, const NUM_LAYER: usize, const NUM_ENCODER: usize> {
    keymap: KeyMap<'a, ROW, COL, NUM_LAYER, NUM_ENCODER>,
    layer_state: LayerState,
    reporter: Reporter<W>,
    handler: CustomKeyHandler,
    tap_dances: [TapDance; TAP_DANCE_NUM],
    behavior: BehaviorConfig,
}

impl<'a, W: HidReportWriter, const ROW: usize, const COL: usize, const NUM_LAYER: usize, const NUM_ENCODER: usize>
    Keyboard<'a, W, ROW, COL, NUM_LAYER, NUM_ENCODER>
{
    pub fn new(keymap: KeyMap<'a, ROW, COL, NUM_LAYER, NUM_ENCODER>, writer: W, behavior: BehaviorConfig) -> Self {
        info!("{} keyboard with {} layers, behavior: {:?}", KEYBOARD_NAME, NUM_LAYER, behavior);
        Self {
            keymap,
            layer_state: LayerState::new(),
            reporter: Reporter::new(writer),
            handler: CustomKeyHandler::new(behavior.layer_cycle, behavior.clipboard),
            tap_dances: TAP_DANCE_ACTIONS.map(TapDance::new),
            behavior,
        }
    }

    pub fn layer_state(&self) -> &LayerState {
        &self.layer_state
    }

    pub fn layer_state_mut(&mut self) -> &mut LayerState {
        &mut self.layer_state
    }

    pub fn reporter(&self) -> &Reporter<W> {
        &self.reporter
    }

    pub fn reporter_mut(&mut self) -> &mut Reporter<W> {
        &mut self.reporter
    }

    pub fn tap_dance(&self, index: usize) -> Option<&TapDance> {
        self.tap_dances.get(index)
    }

    /// Process a key event from the matrix at `now`
    pub fn process_key_event(&mut self, event: KeyEvent, now: Instant) -> Disposition {
        let action = self.keymap.action_at(event, &self.layer_state);
        debug!("Processing key event {:?}, action: {:?}", event, action);
        self.process_action(action, event.pressed, now)
    }

    /// Process one encoder detent at `now`.
    ///
    /// The mapped action is pressed and released right away. For `Disposition::Default`
    /// the firmware should tap the returned keycode.
    pub fn process_encoder(&mut self, event: RotaryEncoderEvent, now: Instant) -> Disposition {
        let action = self.keymap.encoder_action(event.id, event.direction, &self.layer_state);
        debug!("Processing encoder event {:?}, action: {:?}", event, action);
        let disposition = self.process_action(action, true, now);
        self.process_action(action, false, now);
        disposition
    }

    /// Resolve the tap dances whose tapping term has expired at `now`
    pub fn tick(&mut self, now: Instant) {
        let modifier = self.behavior.clipboard.modifier;
        for dance in self.tap_dances.iter_mut() {
            if let Some(count) = dance.poll(now) {
                dance.action().resolve_with(count, modifier, &mut self.reporter);
            }
        }
    }

    fn process_action(&mut self, action: KeyAction, pressed: bool, now: Instant) -> Disposition {
        if pressed {
            // Any other key press finishes the running tap dances first
            let current_dance = match action {
                KeyAction::TapDance(index) => Some(index as usize),
                _ => None,
            };
            self.interrupt_tap_dances(current_dance);
        }

        match action {
            KeyAction::No | KeyAction::Transparent => Disposition::Handled,
            KeyAction::TapDance(index) => {
                if pressed {
                    self.tap_dance_pressed(index as usize, now);
                }
                Disposition::Handled
            }
            KeyAction::Single(Action::Key(keycode)) => {
                if self
                    .handler
                    .process_record(keycode, pressed, &mut self.layer_state, &mut self.reporter)
                {
                    Disposition::Default(keycode)
                } else {
                    Disposition::Handled
                }
            }
        }
    }

    fn tap_dance_pressed(&mut self, index: usize, now: Instant) {
        let modifier = self.behavior.clipboard.modifier;
        let tapping_term = self.behavior.tap_dance.tapping_term;
        match self.tap_dances.get_mut(index) {
            Some(dance) => {
                if let Some(count) = dance.tap(now, tapping_term) {
                    dance.action().resolve_with(count, modifier, &mut self.reporter);
                }
            }
            None => warn!("Tap dance {} is not defined", index),
        }
    }

    fn interrupt_tap_dances(&mut self, except: Option<usize>) {
        let modifier = self.behavior.clipboard.modifier;
        for (index, dance) in self.tap_dances.iter_mut().enumerate() {
            if Some(index) == except {
                continue;
            }
            if let Some(count) = dance.interrupt() {
                dance.action().resolve_with(count, modifier, &mut self.reporter);
            }
        }
    }
}
