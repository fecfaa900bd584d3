use std::fs;
use std::path::Path;

use serde::de;
use serde_derive::Deserialize;
use serde_inline_default::serde_inline_default;

pub mod behavior;
pub mod error;
pub mod layout;

pub use behavior::ResolvedBehavior;
pub use layout::ResolvedLayout;
pub use error::{ConfigError, ConfigResult};

/// Configurations of the whole keyboard, read from `keyboard.toml`
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyboardTomlConfig {
    /// Basic info of the keyboard
    #[serde(default)]
    pub keyboard: KeyboardInfo,
    /// Size of the keymap
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Behavior of the custom keys and tap dances
    #[serde(default)]
    pub behavior: BehaviorConfig,
}

impl KeyboardTomlConfig {
    /// Parse a `keyboard.toml` string, `path` is only used in error messages
    pub fn from_toml_str(content: &str, path: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::TomlParse {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Read and parse a `keyboard.toml` file
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content, &path.display().to_string())
    }
}

#[serde_inline_default]
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyboardInfo {
    #[serde_inline_default("CXT Studio".to_string())]
    pub name: String,
}

impl Default for KeyboardInfo {
    fn default() -> Self {
        Self {
            name: "CXT Studio".to_string(),
        }
    }
}

/// Size of the keymap and the encoder map
#[serde_inline_default]
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    #[serde_inline_default(4)]
    pub rows: u8,
    #[serde_inline_default(4)]
    pub cols: u8,
    #[serde_inline_default(1)]
    pub layers: u8,
    #[serde_inline_default(4)]
    pub encoders: u8,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            rows: 4,
            cols: 4,
            layers: 1,
            encoders: 4,
        }
    }
}

/// `[behavior]` section, every subsection is optional
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BehaviorConfig {
    pub layer_cycle: Option<LayerCycleConfig>,
    pub tap_dance: Option<TapDanceConfig>,
    pub clipboard: Option<ClipboardConfig>,
}

/// First and last layer visited by the cycle layers key
#[serde_inline_default]
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayerCycleConfig {
    #[serde_inline_default(0)]
    pub start: u8,
    #[serde_inline_default(4)]
    pub end: u8,
}

impl Default for LayerCycleConfig {
    fn default() -> Self {
        Self { start: 0, end: 4 }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TapDanceConfig {
    /// Time window to continue a tap dance after the previous tap
    #[serde(default = "default_tapping_term")]
    pub tapping_term: DurationMillis,
}

impl Default for TapDanceConfig {
    fn default() -> Self {
        Self {
            tapping_term: default_tapping_term(),
        }
    }
}

fn default_tapping_term() -> DurationMillis {
    DurationMillis(200)
}

/// Modifier that turns `c`, `v` and `a` into clipboard shortcuts
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClipboardConfig {
    #[serde(default = "default_clipboard_modifier")]
    pub modifier: String,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            modifier: default_clipboard_modifier(),
        }
    }
}

fn default_clipboard_modifier() -> String {
    "LGui".to_string()
}

/// Duration in milliseconds
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DurationMillis(#[serde(deserialize_with = "parse_duration_millis")] pub u64);

fn parse_duration_millis<'de, D: de::Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let input: String = de::Deserialize::deserialize(deserializer)?;
    let num = input.trim_end_matches(|c: char| !c.is_numeric());
    let unit = &input[num.len()..];
    let num: u64 = num.parse().map_err(|_| {
        de::Error::custom(format!(
            "Invalid number \"{num}\" in duration: number part must be a u64"
        ))
    })?;

    match unit {
        "s" => num
            .checked_mul(1000)
            .ok_or_else(|| de::Error::custom(format!("Duration \"{input}\" is too long"))),
        "ms" => Ok(num),
        other => Err(de::Error::custom(format!(
            "Invalid duration unit \"{other}\": unit part must be either \"s\" or \"ms\""
        ))),
    }
}
