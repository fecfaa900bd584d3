//! HID report types and the writer trait the reports go through.

use usbd_hid::descriptor::generator_prelude::*;

/// KeyboardReport describes a report and its companion descriptor that can be
/// used to send keyboard button presses to a host and receive the status of the
/// keyboard LEDs.
#[gen_hid_descriptor(
    (collection = APPLICATION, usage_page = GENERIC_DESKTOP, usage = KEYBOARD) = {
        (usage_page = KEYBOARD, usage_min = 0xE0, usage_max = 0xE7) = {
            #[packed_bits = 8] #[item_settings(data,variable,absolute)] modifier=input;
        };
        (usage_min = 0x00, usage_max = 0xFF) = {
            #[item_settings(constant,variable,absolute)] reserved=input;
        };
        (usage_page = LEDS, usage_min = 0x01, usage_max = 0x05) = {
            #[packed_bits = 5] #[item_settings(data,variable,absolute)] leds=output;
        };
        (usage_page = KEYBOARD, usage_min = 0x00, usage_max = 0xDD) = {
            #[item_settings(data,array,absolute)] keycodes=input;
        };
    }
)]
// `gen_hid_descriptor` adds `Debug, Clone, Copy, PartialEq, Eq` and `repr(C, packed)`
#[derive(Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyboardReport {
    pub modifier: u8, // HidModifiers
    pub reserved: u8,
    pub leds: u8,
    pub keycodes: [u8; 6],
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HidError {
    /// The writer can't take more reports right now
    BufferOverflow,
    /// No host is connected
    Disconnected,
    /// The transport rejected the report
    WriteFailed,
}

/// Sink of keyboard reports, implemented by the firmware's USB/BLE writer.
///
/// Writing is synchronous: the report is handed over before `write_report` returns.
pub trait HidReportWriter {
    /// Write report to the host, return the number of bytes written if success.
    fn write_report(&mut self, report: &KeyboardReport) -> Result<usize, HidError>;
}
