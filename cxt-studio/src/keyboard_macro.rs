use heapless::Vec;

use crate::hid::HidReportWriter;
use crate::keycode::modifier::ModifierCombination;
use crate::keycode::{HidKeyCode, from_ascii};
use crate::reporter::Reporter;

/// Maximum number of operations in a macro sequence
pub const MACRO_MAX_LEN: usize = 32;

pub type MacroSequence = Vec<MacroOperation, MACRO_MAX_LEN>;

/// A single step of a macro string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MacroOperation {
    /// Hold a key until it's released by a later `Release`
    Press(HidKeyCode),
    /// Release a key held by `Press`
    Release(HidKeyCode),
    /// Type an ascii character, bool = shifted
    Text(HidKeyCode, bool),
}

/// Convert ascii text into a sequence of `MacroOperation::Text`.
/// Characters without a keycode are skipped, text longer than [`MACRO_MAX_LEN`] is truncated.
pub fn to_macro_sequence(text: &str) -> MacroSequence {
    let mut sequence = MacroSequence::new();
    append_text(&mut sequence, text);
    sequence
}

/// Type `text` while holding `modifier`, e.g. `GUI + "ac"`
pub fn with_modifier(modifier: ModifierCombination, text: &str) -> MacroSequence {
    let keys = modifier_keycodes(modifier);
    let mut sequence = MacroSequence::new();
    for key in keys.iter() {
        push_operation(&mut sequence, MacroOperation::Press(*key));
    }
    append_text(&mut sequence, text);
    for key in keys.iter().rev() {
        push_operation(&mut sequence, MacroOperation::Release(*key));
    }
    sequence
}

/// Modifier keycodes making up a modifier combination
pub fn modifier_keycodes(modifier: ModifierCombination) -> Vec<HidKeyCode, 4> {
    let right = modifier.right();
    let mut keys = Vec::new();
    let candidates = [
        (modifier.ctrl(), HidKeyCode::LCtrl, HidKeyCode::RCtrl),
        (modifier.shift(), HidKeyCode::LShift, HidKeyCode::RShift),
        (modifier.alt(), HidKeyCode::LAlt, HidKeyCode::RAlt),
        (modifier.gui(), HidKeyCode::LGui, HidKeyCode::RGui),
    ];
    for (enabled, left_key, right_key) in candidates {
        if enabled {
            // At most 4 modifiers, the push can't fail
            let _ = keys.push(if right { right_key } else { left_key });
        }
    }
    keys
}

fn append_text(sequence: &mut MacroSequence, text: &str) {
    for character in text.bytes() {
        let (keycode, shifted) = from_ascii(character);
        if keycode == HidKeyCode::No {
            warn!("Character {} has no keycode, skipped", character);
            continue;
        }
        if !push_operation(sequence, MacroOperation::Text(keycode, shifted)) {
            break;
        }
    }
}

fn push_operation(sequence: &mut MacroSequence, operation: MacroOperation) -> bool {
    if sequence.push(operation).is_err() {
        warn!("Macro sequence is full, dropping {:?}", operation);
        return false;
    }
    true
}

impl<W: HidReportWriter> Reporter<W> {
    /// Emit a macro sequence, every operation is written out before returning
    pub fn send_string(&mut self, operations: &[MacroOperation]) {
        debug!("Sending macro string of {} operations", operations.len());
        for operation in operations {
            match *operation {
                MacroOperation::Press(k) => {
                    self.register_key(k);
                    self.send_keyboard_report();
                }
                MacroOperation::Release(k) => {
                    self.unregister_key(k);
                    self.send_keyboard_report();
                }
                MacroOperation::Text(k, shifted) => {
                    if shifted {
                        self.register_key(HidKeyCode::LShift);
                        self.send_keyboard_report();
                        self.tap_code(k);
                        self.unregister_key(HidKeyCode::LShift);
                        self.send_keyboard_report();
                    } else {
                        self.tap_code(k);
                    }
                }
            }
        }
    }
}
