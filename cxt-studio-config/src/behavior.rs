use crate::{ConfigError, ConfigResult, KeyboardTomlConfig};

/// Number of layers the firmware's layer state bitmask can hold
pub const MAX_LAYERS: u8 = 32;

/// Validated behavior values, ready to be emitted as firmware constants
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedBehavior {
    pub layer_cycle_start: u8,
    pub layer_cycle_end: u8,
    pub tapping_term_ms: u64,
    /// Bits of the firmware's `ModifierCombination`:
    /// bit0 ctrl, bit1 shift, bit2 alt, bit3 gui, bit4 right side
    pub clipboard_modifier_bits: u8,
}

impl KeyboardTomlConfig {
    pub fn get_behavior_config(&self) -> ConfigResult<ResolvedBehavior> {
        let layer_cycle = self.behavior.layer_cycle.clone().unwrap_or_default();
        if layer_cycle.start > layer_cycle.end {
            return Err(ConfigError::Validation {
                field: "behavior.layer_cycle".to_string(),
                message: format!(
                    "start ({}) must not be greater than end ({})",
                    layer_cycle.start, layer_cycle.end
                ),
            });
        }
        if layer_cycle.end >= MAX_LAYERS {
            return Err(ConfigError::InvalidValue {
                field: "behavior.layer_cycle.end".to_string(),
                value: layer_cycle.end.to_string(),
                expected: format!("a layer number below {MAX_LAYERS}"),
            });
        }

        let tap_dance = self.behavior.tap_dance.clone().unwrap_or_default();
        if tap_dance.tapping_term.0 == 0 {
            return Err(ConfigError::InvalidValue {
                field: "behavior.tap_dance.tapping_term".to_string(),
                value: "0ms".to_string(),
                expected: "a non-zero duration".to_string(),
            });
        }

        let clipboard = self.behavior.clipboard.clone().unwrap_or_default();
        let clipboard_modifier_bits = parse_modifier(&clipboard.modifier)?;

        Ok(ResolvedBehavior {
            layer_cycle_start: layer_cycle.start,
            layer_cycle_end: layer_cycle.end,
            tapping_term_ms: tap_dance.tapping_term.0,
            clipboard_modifier_bits,
        })
    }
}

/// Parse modifier names joined by `|`, e.g. `"LGui"` or `"LCtrl|LShift"`.
/// All modifiers must be on the same side.
pub fn parse_modifier(input: &str) -> ConfigResult<u8> {
    let invalid = || ConfigError::InvalidValue {
        field: "behavior.clipboard.modifier".to_string(),
        value: input.to_string(),
        expected: "modifiers like \"LGui\" or \"LCtrl|LShift\", all on the same side".to_string(),
    };

    let mut bits = 0u8;
    let mut right = None;
    for name in input.split('|').map(str::trim) {
        let (is_right, bit) = match name {
            "LCtrl" => (false, 1 << 0),
            "LShift" => (false, 1 << 1),
            "LAlt" => (false, 1 << 2),
            "LGui" => (false, 1 << 3),
            "RCtrl" => (true, 1 << 0),
            "RShift" => (true, 1 << 1),
            "RAlt" => (true, 1 << 2),
            "RGui" => (true, 1 << 3),
            _ => return Err(invalid()),
        };
        match right {
            Some(side) if side != is_right => return Err(invalid()),
            _ => right = Some(is_right),
        }
        bits |= bit;
    }

    if right == Some(true) {
        bits |= 1 << 4;
    }
    Ok(bits)
}
