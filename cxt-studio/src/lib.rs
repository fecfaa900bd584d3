//! Custom keys, layer cycling and tap dances of the CXT Studio macro pad.
//!
//! The crate plugs into a keyboard firmware through two entry points:
//! [`process::CustomKeyHandler::process_record`], called for every key transition
//! before the firmware's default processing, and
//! [`tap_dance::TapDanceAction::resolve`], called once per finished tap dance.
//! [`keyboard::Keyboard`] wires both to the keymap tables for hosts that feed raw key events.
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod config;
pub mod event;
pub mod hid;
pub mod keyboard;
pub mod keyboard_macro;
pub mod keymap;
pub mod layer_state;
pub mod layout_macro;
pub mod process;
pub mod reporter;
pub mod tap_dance;

pub use cxt_studio_types::{action, keycode, modifier};

// Constants generated from keyboard.toml
include!(concat!(env!("OUT_DIR"), "/constants.rs"));
