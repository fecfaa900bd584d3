use crate::config::{ClipboardConfig, LayerCycleConfig};
use crate::hid::HidReportWriter;
use crate::keyboard_macro::with_modifier;
use crate::keycode::{CustomKeycode, KeyCode};
use crate::layer_state::LayerState;
use crate::reporter::Reporter;

/// Handles the custom keycodes before the firmware's default processing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CustomKeyHandler {
    layer_cycle: LayerCycleConfig,
    clipboard: ClipboardConfig,
}

impl CustomKeyHandler {
    pub const fn new(layer_cycle: LayerCycleConfig, clipboard: ClipboardConfig) -> Self {
        Self { layer_cycle, clipboard }
    }

    /// Process a key transition.
    ///
    /// Returns `true` if the firmware should still run its default processing for `keycode`,
    /// `false` if the key has been fully handled here.
    pub fn process_record<W: HidReportWriter>(
        &self,
        keycode: KeyCode,
        pressed: bool,
        layers: &mut LayerState,
        reporter: &mut Reporter<W>,
    ) -> bool {
        let KeyCode::Custom(custom) = keycode else {
            return true;
        };
        debug!("Processing custom key: {:?}, pressed: {}", custom, pressed);

        // All custom keys act on press, releases are consumed without effect
        if !pressed {
            return false;
        }

        match custom {
            CustomKeycode::CycleLayers => self.cycle_layers(layers),
            CustomKeycode::CopyAll => reporter.send_string(&with_modifier(self.clipboard.modifier, "ac")),
            CustomKeycode::PasteAll => reporter.send_string(&with_modifier(self.clipboard.modifier, "av")),
        }
        false
    }

    fn cycle_layers(&self, layers: &mut LayerState) {
        let current = layers.highest_layer();
        match self.layer_cycle.next(current) {
            Some(next) => layers.layer_move(next),
            None => debug!(
                "Layer {} is outside of the cycle {}..={}, ignored",
                current, self.layer_cycle.start, self.layer_cycle.end
            ),
        }
    }
}
