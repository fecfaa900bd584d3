//! # CXT Studio Types
//!
//! Fundamental type definitions shared by the CXT Studio keymap crates.
//!
//! ## Modules
//!
//! - [`action`] - Actions stored in the keymap and the encoder map
//! - [`keycode`] - HID keycodes, lighting keycodes and the reserved custom keycode range
//! - [`modifier`] - Modifier combinations and HID modifier bits

#![no_std]

pub mod action;
pub mod keycode;
pub mod modifier;
