use crate::hid::{HidReportWriter, KeyboardReport};
use crate::keycode::HidKeyCode;
use crate::keycode::modifier::ModifierCombination;
use crate::modifier::HidModifiers;

/// Tracks held keys and modifiers and writes a keyboard report on every change
pub struct Reporter<W: HidReportWriter> {
    writer: W,
    /// Modifiers currently held
    held_modifiers: HidModifiers,
    /// Keycodes currently held, `HidKeyCode::No` marks a free slot
    held_keycodes: [HidKeyCode; 6],
}

impl<W: HidReportWriter> Reporter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            held_modifiers: HidModifiers::new(),
            held_keycodes: [HidKeyCode::No; 6],
        }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn held_modifiers(&self) -> HidModifiers {
        self.held_modifiers
    }

    pub fn held_keycodes(&self) -> &[HidKeyCode; 6] {
        &self.held_keycodes
    }

    /// Register a key, the key can be a basic keycode or a modifier.
    pub fn register_key(&mut self, key: HidKeyCode) {
        if key.is_modifier() {
            self.held_modifiers |= key.to_hid_modifiers().to_hid_modifiers();
        } else if key.is_basic() {
            if self.held_keycodes.contains(&key) {
                return;
            }
            match self.held_keycodes.iter().position(|&k| k == HidKeyCode::No) {
                Some(index) => self.held_keycodes[index] = key,
                None => warn!("Keycode slots are full, dropping {:?}", key),
            }
        }
    }

    /// Unregister a key, the key can be a basic keycode or a modifier.
    pub fn unregister_key(&mut self, key: HidKeyCode) {
        if key.is_modifier() {
            self.held_modifiers &= !key.to_hid_modifiers().to_hid_modifiers();
        } else if let Some(index) = self.held_keycodes.iter().position(|&k| k == key) {
            self.held_keycodes[index] = HidKeyCode::No;
        }
    }

    /// Register a modifier combination to be sent in hid report.
    pub fn register_modifiers(&mut self, modifiers: ModifierCombination) {
        self.held_modifiers |= modifiers.to_hid_modifiers();
    }

    /// Unregister a modifier combination from hid report.
    pub fn unregister_modifiers(&mut self, modifiers: ModifierCombination) {
        self.held_modifiers &= !modifiers.to_hid_modifiers();
    }

    /// Write the current state to the host.
    ///
    /// Write failures are logged and dropped, the held state is kept.
    pub fn send_keyboard_report(&mut self) {
        let mut keycodes = [0u8; 6];
        for (slot, key) in keycodes.iter_mut().zip(self.held_keycodes.iter()) {
            *slot = *key as u8;
        }
        let report = KeyboardReport {
            modifier: self.held_modifiers.into_bits(),
            reserved: 0,
            leds: 0,
            keycodes,
        };
        trace!("Sending keyboard report: {:?}", report);
        if let Err(e) = self.writer.write_report(&report) {
            error!("Send keyboard report error: {:?}", e);
        }
    }

    /// Press and release a key, sending a report after each step
    pub fn tap_code(&mut self, key: HidKeyCode) {
        self.register_key(key);
        self.send_keyboard_report();
        self.unregister_key(key);
        self.send_keyboard_report();
    }

    /// Tap a key while holding `modifiers`
    pub fn tap_code16(&mut self, key: HidKeyCode, modifiers: ModifierCombination) {
        self.register_modifiers(modifiers);
        self.send_keyboard_report();
        self.tap_code(key);
        self.unregister_modifiers(modifiers);
        self.send_keyboard_report();
    }
}
