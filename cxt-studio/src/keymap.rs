use crate::action::{EncoderAction, KeyAction};
use crate::event::{Direction, KeyEvent};
use crate::layer_state::LayerState;
use crate::{a, encoder, k, layer, rgb, td};

// Keymap size from `[layout]` in keyboard.toml, the tables below don't compile if it differs
pub use crate::{COL, NUM_ENCODER, NUM_LAYER, ROW};

/// Keymap of the macro pad, the last row holds the push buttons of the four encoders
#[rustfmt::skip]
pub const KEYMAP: [[[KeyAction; COL]; ROW]; NUM_LAYER] = [
    layer!([
        [k!(Escape), k!(F11), a!(No), k!(MediaStop)],
        [a!(No), a!(No), k!(MediaRewind), k!(MediaFastForward)],
        [a!(No), td!(0), td!(1), k!(MediaNextTrack)],
        [k!(AudioMute), a!(No), a!(No), rgb!(Toggle)]
    ]),
];

#[rustfmt::skip]
pub const ENCODER_MAP: [[EncoderAction; NUM_ENCODER]; NUM_LAYER] = [
    [
        encoder!(k!(AudioVolDown), k!(AudioVolUp)),
        encoder!(rgb!(HueDown), rgb!(HueUp)),
        encoder!(rgb!(ValueDown), rgb!(ValueUp)),
        encoder!(rgb!(ModeReverse), rgb!(ModeForward)),
    ],
];

/// Layered keymap and encoder map lookup.
///
/// Layers which are active in the [`LayerState`] but missing from the tables are skipped.
pub struct KeyMap<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize, const NUM_ENCODER: usize = 0> {
    layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER],
    encoders: &'a [[EncoderAction; NUM_ENCODER]; NUM_LAYER],
    /// Layer each pressed key was resolved on
    layer_cache: [[u8; COL]; ROW],
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize, const NUM_ENCODER: usize>
    KeyMap<'a, ROW, COL, NUM_LAYER, NUM_ENCODER>
{
    pub fn new(
        layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER],
        encoders: &'a [[EncoderAction; NUM_ENCODER]; NUM_LAYER],
    ) -> Self {
        Self {
            layers,
            encoders,
            layer_cache: [[0; COL]; ROW],
        }
    }

    /// Action stored at a position of a layer, `None` for positions outside of the keymap
    pub fn get_action_at(&self, row: usize, col: usize, layer_num: usize) -> Option<KeyAction> {
        self.layers.get(layer_num)?.get(row)?.get(col).copied()
    }

    /// Fetch the action of a key event.
    ///
    /// Presses search from the highest active layer down to the default layer, skipping
    /// transparent keys. Releases use the layer the press was resolved on.
    pub fn action_at(&mut self, key_event: KeyEvent, layer_state: &LayerState) -> KeyAction {
        let row = key_event.row as usize;
        let col = key_event.col as usize;
        if row >= ROW || col >= COL {
            warn!("Key ({}, {}) is out of the keymap", row, col);
            return KeyAction::No;
        }

        if !key_event.pressed {
            let layer = self.pop_layer_from_cache(row, col, layer_state);
            return self.layers[layer as usize][row][col];
        }

        match self.find_layer(layer_state, |layer| self.layers[layer][row][col]) {
            Some((layer, action)) => {
                self.layer_cache[row][col] = layer as u8;
                action
            }
            None => KeyAction::No,
        }
    }

    /// Fetch the action of an encoder rotation on the active layers
    pub fn encoder_action(&self, id: u8, direction: Direction, layer_state: &LayerState) -> KeyAction {
        if id as usize >= NUM_ENCODER {
            warn!("Encoder {} is out of the encoder map", id);
            return KeyAction::No;
        }
        let action_of = |layer: usize| {
            let encoder = self.encoders[layer][id as usize];
            match direction {
                Direction::Clockwise => encoder.clockwise(),
                Direction::CounterClockwise => encoder.counter_clockwise(),
            }
        };
        self.find_layer(layer_state, action_of)
            .map(|(_, action)| action)
            .unwrap_or(KeyAction::No)
    }

    // Iterate from higher layer to lower layer, the lowest checked layer is the default layer
    fn find_layer(
        &self,
        layer_state: &LayerState,
        action_of: impl Fn(usize) -> KeyAction,
    ) -> Option<(usize, KeyAction)> {
        let default_layer = layer_state.default_layer() as usize;
        for layer in (0..NUM_LAYER).rev() {
            if layer_state.is_on(layer as u8) || layer == default_layer {
                let action = action_of(layer);
                if action != KeyAction::Transparent {
                    return Some((layer, action));
                }
            }
            if layer == default_layer {
                break;
            }
        }
        None
    }

    fn pop_layer_from_cache(&mut self, row: usize, col: usize, layer_state: &LayerState) -> u8 {
        let layer = self.layer_cache[row][col];
        // The default layer may be out of this keymap, reset the cache to a layer which exists
        self.layer_cache[row][col] = layer_state.default_layer().min(NUM_LAYER.saturating_sub(1) as u8);
        layer
    }
}
