use crate::behavior::MAX_LAYERS;
use crate::{ConfigError, ConfigResult, KeyboardTomlConfig};

/// Validated keymap size, ready to be emitted as firmware constants
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedLayout {
    pub rows: usize,
    pub cols: usize,
    pub layers: usize,
    pub encoders: usize,
}

impl KeyboardTomlConfig {
    /// Check the `[layout]` section, the keymap tables must have exactly this size
    pub fn get_layout_config(&self) -> ConfigResult<ResolvedLayout> {
        let layout = &self.layout;
        for (field, value) in [("layout.rows", layout.rows), ("layout.cols", layout.cols)] {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    value: value.to_string(),
                    expected: "at least 1".to_string(),
                });
            }
        }
        if layout.layers == 0 || layout.layers > MAX_LAYERS {
            return Err(ConfigError::InvalidValue {
                field: "layout.layers".to_string(),
                value: layout.layers.to_string(),
                expected: format!("a number of layers in 1..={MAX_LAYERS}"),
            });
        }

        Ok(ResolvedLayout {
            rows: layout.rows as usize,
            cols: layout.cols as usize,
            layers: layout.layers as usize,
            encoders: layout.encoders as usize,
        })
    }
}
