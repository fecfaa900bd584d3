use embassy_time::Duration;

use crate::keycode::modifier::ModifierCombination;
use crate::{CLIPBOARD_MODIFIER_BITS, LAYER_CYCLE_END, LAYER_CYCLE_START, TAPPING_TERM_MS};

/// Configurations of the custom keys and tap dances.
///
/// `Default` uses the values from `keyboard.toml`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BehaviorConfig {
    pub layer_cycle: LayerCycleConfig,
    pub tap_dance: TapDanceConfig,
    pub clipboard: ClipboardConfig,
}

/// Inclusive range of layers visited by the cycle layers key
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerCycleConfig {
    pub start: u8,
    pub end: u8,
}

impl Default for LayerCycleConfig {
    fn default() -> Self {
        Self {
            start: LAYER_CYCLE_START,
            end: LAYER_CYCLE_END,
        }
    }
}

impl LayerCycleConfig {
    pub const fn new(start: u8, end: u8) -> Self {
        Self { start, end }
    }

    pub const fn contains(&self, layer: u8) -> bool {
        self.start <= layer && layer <= self.end
    }

    /// Layer after `current`, wrapping from `end` back to `start`.
    /// `None` if `current` is outside of the cycle.
    pub const fn next(&self, current: u8) -> Option<u8> {
        if !self.contains(current) {
            return None;
        }
        if current >= self.end {
            Some(self.start)
        } else {
            Some(current + 1)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapDanceConfig {
    /// Time window to continue a tap dance after the previous tap
    pub tapping_term: Duration,
}

impl Default for TapDanceConfig {
    fn default() -> Self {
        Self {
            tapping_term: Duration::from_millis(TAPPING_TERM_MS),
        }
    }
}

/// Modifier of the clipboard shortcuts, `LGui` on macOS, `LCtrl` elsewhere
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClipboardConfig {
    pub modifier: ModifierCombination,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            modifier: ModifierCombination::from_bits(CLIPBOARD_MODIFIER_BITS),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_matches_keyboard_toml() {
        let config = BehaviorConfig::default();
        assert_eq!(config.layer_cycle, LayerCycleConfig::new(0, 4));
        assert_eq!(config.tap_dance.tapping_term, Duration::from_millis(200));
        assert_eq!(config.clipboard.modifier, ModifierCombination::LGUI);
    }

    #[test]
    fn test_next_layer_wraps() {
        let cycle = LayerCycleConfig::new(0, 4);
        assert_eq!(cycle.next(0), Some(1));
        assert_eq!(cycle.next(3), Some(4));
        assert_eq!(cycle.next(4), Some(0));
        assert_eq!(cycle.next(5), None);
    }

    #[test]
    fn test_next_layer_with_offset_range() {
        let cycle = LayerCycleConfig::new(2, 3);
        assert_eq!(cycle.next(0), None);
        assert_eq!(cycle.next(2), Some(3));
        assert_eq!(cycle.next(3), Some(2));
        assert_eq!(LayerCycleConfig::new(1, 1).next(1), Some(1));
    }
}
