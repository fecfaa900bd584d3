use std::path::Path;
use std::{env, fs};

use const_gen::*;
use cxt_studio_config::{KeyboardTomlConfig, ResolvedBehavior, ResolvedLayout};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=KEYBOARD_TOML_PATH");

    // Use KEYBOARD_TOML_PATH if it's set, otherwise the keyboard.toml next to this crate
    let toml_path = env::var("KEYBOARD_TOML_PATH").unwrap_or_else(|_| {
        let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is not set");
        Path::new(&manifest_dir)
            .join("keyboard.toml")
            .display()
            .to_string()
    });
    println!("cargo:rerun-if-changed={toml_path}");

    let user_toml = if Path::new(&toml_path).exists() {
        KeyboardTomlConfig::from_file(&toml_path).unwrap_or_else(|e| panic!("❌ {e}"))
    } else {
        KeyboardTomlConfig::default()
    };
    let behavior = user_toml.get_behavior_config().unwrap_or_else(|e| panic!("❌ {e}"));
    let layout = user_toml.get_layout_config().unwrap_or_else(|e| panic!("❌ {e}"));

    let constants = get_constants_str(&user_toml.keyboard.name, layout, behavior);

    // Write to constants.rs file
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is not set");
    let dest_path = Path::new(&out_dir).join("constants.rs");
    fs::write(&dest_path, constants).expect("Failed to write constants.rs file");
}

fn get_constants_str(name: &str, layout: ResolvedLayout, behavior: ResolvedBehavior) -> String {
    [
        const_declaration!(pub(crate) KEYBOARD_NAME = name),
        // `keymap::KEYMAP` and `keymap::ENCODER_MAP` must have exactly this size
        const_declaration!(pub ROW = layout.rows),
        const_declaration!(pub COL = layout.cols),
        const_declaration!(pub NUM_LAYER = layout.layers),
        const_declaration!(pub NUM_ENCODER = layout.encoders),
        const_declaration!(pub(crate) LAYER_CYCLE_START = behavior.layer_cycle_start),
        const_declaration!(pub(crate) LAYER_CYCLE_END = behavior.layer_cycle_end),
        const_declaration!(pub(crate) TAPPING_TERM_MS = behavior.tapping_term_ms),
        const_declaration!(pub(crate) CLIPBOARD_MODIFIER_BITS = behavior.clipboard_modifier_bits),
    ]
    .map(|s| "#[allow(clippy::redundant_static_lifetimes)]\n".to_owned() + s.as_str())
    .join("\n")
}
